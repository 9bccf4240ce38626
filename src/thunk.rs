//! Thunks: deferred async actions
//!
//! An async action cannot be dispatched as plain data. Its creator instead
//! produces a [`Thunk`]: the async function with its positional arguments
//! captured, waiting to be run by the hosting store with a [`ThunkContext`].
//! This crate never runs thunks itself; it only builds them.
//!
//! ```text
//! creator.create(args) → Thunk → (later) thunk.run(ctx) → future
//! ```

use crate::action::Action;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// BoxFuture type alias for async action results
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Outcome of running an async action. Failures of the wrapped function
/// propagate unchanged; this crate does not catch or transform them.
pub type ThunkResult = anyhow::Result<Value>;

/// Dispatch callback handed to thunks by the hosting store.
///
/// Returns the dispatched action, per Redux convention, so async actions can
/// forward the dispatch result as their own.
pub type DispatchFn = Arc<dyn Fn(Action) -> Action + Send + Sync>;

/// State accessor handed to thunks by the hosting store.
pub type GetStateFn<S> = Arc<dyn Fn() -> S + Send + Sync>;

/// An async action function as stored in a model definition.
///
/// Values of this type are callables by construction, so a definition can
/// never hold a non-invocable entry.
pub type AsyncActionFn<S> =
    Arc<dyn Fn(ThunkContext<S>, Vec<Value>) -> BoxFuture<'static, ThunkResult> + Send + Sync>;

/// Execution context passed to a running thunk.
///
/// Carries the store's `dispatch` and `get_state` callbacks as an explicit
/// value instead of an implicit call context.
pub struct ThunkContext<S> {
    dispatch: DispatchFn,
    get_state: GetStateFn<S>,
}

impl<S> Clone for ThunkContext<S> {
    fn clone(&self) -> Self {
        Self {
            dispatch: Arc::clone(&self.dispatch),
            get_state: Arc::clone(&self.get_state),
        }
    }
}

impl<S> ThunkContext<S> {
    /// Create a context from the store's callbacks.
    pub fn new(dispatch: DispatchFn, get_state: GetStateFn<S>) -> Self {
        Self {
            dispatch,
            get_state,
        }
    }

    /// Dispatch an action back to the store, returning it.
    pub fn dispatch(&self, action: Action) -> Action {
        (self.dispatch)(action)
    }

    /// Read the store's current state.
    pub fn state(&self) -> S {
        (self.get_state)()
    }
}

/// An async action with its positional arguments captured, ready for the
/// hosting store to run.
pub struct Thunk<S> {
    f: AsyncActionFn<S>,
    args: Vec<Value>,
}

impl<S> Thunk<S> {
    pub(crate) fn new(f: AsyncActionFn<S>, args: Vec<Value>) -> Self {
        Self { f, args }
    }

    /// The positional arguments captured when the creator was called.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Run the underlying async function with the captured arguments and the
    /// given context, returning its future unchanged.
    pub fn run(&self, ctx: ThunkContext<S>) -> BoxFuture<'static, ThunkResult> {
        (self.f)(ctx, self.args.clone())
    }
}
