//! # redux-model
//!
//! Synthesizes Redux-style action creators from declarative model definitions.
//!
//! A model names its reducers and supplies its async action functions; this
//! crate merges both into one map of creators. Reducer-derived creators build
//! plain `{ type, payload }` actions with namespaced type strings; async
//! entries become creators whose calls capture positional arguments and yield
//! [`Thunk`]s for the hosting store to run later with `dispatch`/`get_state`.
//!
//! ## Design Principles
//!
//! This crate only *builds* callables. It holds no store, runs no reducers,
//! and never awaits the futures it wraps — dispatching is the hosting
//! runtime's job, delivered to thunks through an explicit [`ThunkContext`].
//!
//! ## Usage
//!
//! ```rust
//! use redux_model::{Action, Model};
//! use serde_json::json;
//!
//! let mut model: Model<i64> = Model::new("counter")
//!     .reducer("add")
//!     .async_action("add_async", |ctx, args| async move {
//!         let n = args.into_iter().next().unwrap_or_default();
//!         let action = ctx.dispatch(Action::namespaced("counter", "add", n));
//!         Ok(serde_json::to_value(&action)?)
//!     });
//! model.create_actions()?;
//!
//! // Reducer-derived creators produce plain actions.
//! let add = model.action("add").unwrap().as_sync().unwrap();
//! assert_eq!(add.create(json!(5)), Action::new("counter/add", json!(5)));
//!
//! // Async-derived creators produce thunks for the store to run.
//! let thunk = model.action("add_async").unwrap().as_async().unwrap()
//!     .create(vec![json!(5)]);
//! # let _ = thunk;
//! # Ok::<(), redux_model::ConfigurationError>(())
//! ```

pub mod action;
pub mod creator;
pub mod error;
pub mod model;
pub mod thunk;

// Re-export commonly used types
pub use action::{Action, NAMESPACE_SEPARATOR, action_type};
pub use creator::{ActionCreator, AsyncActionCreator, SyncActionCreator};
pub use error::ConfigurationError;
pub use model::{DEFAULT_NAMESPACE, Model};
pub use thunk::{
    AsyncActionFn, BoxFuture, DispatchFn, GetStateFn, Thunk, ThunkContext, ThunkResult,
};
