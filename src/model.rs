//! Model definitions and action-creator synthesis
//!
//! A [`Model`] declares a namespace, the names of its reducers, and its async
//! action functions. [`Model::create_actions`] merges both declarations into
//! one map of [`ActionCreator`]s: reducer names become plain-action creators
//! typed `"<namespace>/<name>"`, async entries become thunk creators. When a
//! name appears in both declarations the async entry wins.
//!
//! The model never runs reducers or thunks; the hosting store does.
//!
//! # Example
//!
//! ```rust
//! use redux_model::Model;
//! use serde_json::json;
//!
//! let mut model: Model<i64> = Model::new("counter")
//!     .reducer("add")
//!     .async_action("add_async", |ctx, args| async move {
//!         let n = args.into_iter().next().unwrap_or_default();
//!         let action = ctx.dispatch(redux_model::Action::namespaced("counter", "add", n));
//!         Ok(serde_json::to_value(&action)?)
//!     });
//! model.create_actions()?;
//!
//! let add = model.action("add").unwrap().as_sync().unwrap();
//! assert_eq!(add.create(json!(5)).kind, "counter/add");
//! # Ok::<(), redux_model::ConfigurationError>(())
//! ```

use crate::action::NAMESPACE_SEPARATOR;
use crate::creator::{ActionCreator, AsyncActionCreator, SyncActionCreator};
use crate::error::ConfigurationError;
use crate::thunk::{AsyncActionFn, ThunkContext, ThunkResult};
use log::{debug, trace};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::sync::Arc;

/// Namespace used when a model does not declare one.
pub const DEFAULT_NAMESPACE: &str = "app";

/// A declarative model: namespace, reducer names, async action functions, and
/// the creators map synthesized from them.
///
/// `S` is the state type the hosting store exposes to thunks through
/// [`ThunkContext::state`].
pub struct Model<S> {
    namespace: String,
    reducers: BTreeSet<String>,
    async_actions: BTreeMap<String, AsyncActionFn<S>>,
    creators: BTreeMap<String, ActionCreator<S>>,
}

impl<S> Default for Model<S> {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl<S> Model<S> {
    /// Create an empty model with the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            reducers: BTreeSet::new(),
            async_actions: BTreeMap::new(),
            creators: BTreeMap::new(),
        }
    }

    /// Declare a reducer name (builder form).
    ///
    /// Only the name matters here; the reducer body lives with the hosting
    /// store.
    pub fn reducer(mut self, name: impl Into<String>) -> Self {
        self.add_reducer(name);
        self
    }

    /// Declare an async action (builder form).
    pub fn async_action<F, Fut>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(ThunkContext<S>, Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ThunkResult> + Send + 'static,
    {
        self.add_async_action(name, f);
        self
    }

    /// Declare a reducer name on an existing model.
    pub fn add_reducer(&mut self, name: impl Into<String>) {
        self.reducers.insert(name.into());
    }

    /// Declare an async action on an existing model.
    pub fn add_async_action<F, Fut>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(ThunkContext<S>, Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ThunkResult> + Send + 'static,
    {
        let f: AsyncActionFn<S> = Arc::new(move |ctx, args| Box::pin(f(ctx, args)));
        self.async_actions.insert(name.into(), f);
    }

    /// Replace the namespace. Takes effect at the next [`create_actions`](Self::create_actions).
    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = namespace.into();
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Synthesize the creators map from the current declarations.
    ///
    /// Validates the namespace and every declared name eagerly, then merges
    /// reducer-derived creators first and async-derived creators second, so
    /// an async action shadows a reducer of the same name.
    ///
    /// The result is stored on the model and replaced wholesale on each call;
    /// declarations changed after a call are not reflected until the next one.
    pub fn create_actions(&mut self) -> Result<(), ConfigurationError> {
        check_namespace(&self.namespace)?;
        for name in self.reducers.iter().chain(self.async_actions.keys()) {
            check_name(name)?;
        }

        debug!(
            "building action creators: namespace={} reducers={} async_actions={}",
            self.namespace,
            self.reducers.len(),
            self.async_actions.len()
        );
        trace!("reducers: {:?}", self.reducers);
        trace!(
            "async actions: {:?}",
            self.async_actions.keys().collect::<Vec<_>>()
        );

        let mut creators = BTreeMap::new();
        for name in &self.reducers {
            creators.insert(
                name.clone(),
                ActionCreator::Sync(SyncActionCreator::new(&self.namespace, name)),
            );
        }
        for (name, f) in &self.async_actions {
            creators.insert(
                name.clone(),
                ActionCreator::Async(AsyncActionCreator::new(Arc::clone(f))),
            );
        }

        self.creators = creators;
        Ok(())
    }

    /// The creators map from the last [`create_actions`](Self::create_actions) call.
    pub fn actions(&self) -> &BTreeMap<String, ActionCreator<S>> {
        &self.creators
    }

    /// Look up a single creator by name.
    pub fn action(&self, name: &str) -> Option<&ActionCreator<S>> {
        self.creators.get(name)
    }
}

fn check_namespace(namespace: &str) -> Result<(), ConfigurationError> {
    if namespace.is_empty() {
        return Err(ConfigurationError::EmptyNamespace);
    }
    if namespace.contains(NAMESPACE_SEPARATOR) {
        return Err(ConfigurationError::NamespaceContainsSeparator(
            namespace.to_string(),
        ));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), ConfigurationError> {
    if name.is_empty() {
        return Err(ConfigurationError::EmptyName);
    }
    if name.contains(NAMESPACE_SEPARATOR) {
        return Err(ConfigurationError::NameContainsSeparator(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::thunk::{DispatchFn, GetStateFn};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recording_context(log: Arc<Mutex<Vec<Action>>>) -> ThunkContext<i64> {
        let dispatch: DispatchFn = Arc::new(move |action| {
            log.lock().unwrap().push(action.clone());
            action
        });
        let get_state: GetStateFn<i64> = Arc::new(|| 0);
        ThunkContext::new(dispatch, get_state)
    }

    #[test]
    fn test_reducer_creator_builds_plain_action() {
        let mut model: Model<()> = Model::new("counter").reducer("add");
        model.create_actions().unwrap();

        let action = model.action("add").unwrap().as_sync().unwrap().create(json!(5));
        assert_eq!(action, Action::new("counter/add", json!(5)));
    }

    #[test]
    fn test_default_namespace_is_app() {
        let mut model: Model<()> = Model::default().reducer("increment");
        model.create_actions().unwrap();

        let action = model
            .action("increment")
            .unwrap()
            .as_sync()
            .unwrap()
            .create(json!(null));
        assert_eq!(action, Action::bare("app/increment"));
    }

    #[test]
    fn test_async_action_shadows_reducer_of_same_name() {
        let mut model: Model<()> = Model::new("counter")
            .reducer("add")
            .async_action("add", |_ctx, _args| async { Ok(json!(null)) });
        model.create_actions().unwrap();

        assert!(model.action("add").unwrap().is_async());
    }

    #[test]
    fn test_create_actions_recomputes_from_current_declarations() {
        let mut model: Model<()> = Model::new("counter").reducer("add");
        model.create_actions().unwrap();
        assert!(model.action("subtract").is_none());

        model.add_reducer("subtract");
        assert!(model.action("subtract").is_none(), "not recomputed yet");

        model.create_actions().unwrap();
        assert!(model.action("subtract").is_some());
    }

    #[test]
    fn test_namespace_change_applies_on_next_create() {
        let mut model: Model<()> = Model::new("counter").reducer("add");
        model.create_actions().unwrap();

        model.set_namespace("tally");
        model.create_actions().unwrap();

        let creator = model.action("add").unwrap().as_sync().unwrap();
        assert_eq!(creator.action_type(), "tally/add");
    }

    #[test]
    fn test_empty_namespace_rejected() {
        let mut model: Model<()> = Model::new("").reducer("add");
        assert_eq!(
            model.create_actions(),
            Err(ConfigurationError::EmptyNamespace)
        );
    }

    #[test]
    fn test_namespace_with_separator_rejected() {
        let mut model: Model<()> = Model::new("a/b").reducer("add");
        assert_eq!(
            model.create_actions(),
            Err(ConfigurationError::NamespaceContainsSeparator("a/b".into()))
        );
    }

    #[test]
    fn test_name_with_separator_rejected() {
        let mut model: Model<()> = Model::new("counter").reducer("add/extra");
        assert_eq!(
            model.create_actions(),
            Err(ConfigurationError::NameContainsSeparator("add/extra".into()))
        );
    }

    #[tokio::test]
    async fn test_async_creator_runs_function_once_with_context() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_fn = Arc::clone(&calls);

        let mut model: Model<i64> =
            Model::new("counter").async_action("probe", move |ctx, args| {
                let calls = Arc::clone(&calls_in_fn);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(json!({ "state": ctx.state(), "args": args }))
                }
            });
        model.create_actions().unwrap();

        let thunk = model
            .action("probe")
            .unwrap()
            .as_async()
            .unwrap()
            .create(vec![json!("x"), json!(2)]);

        let ctx = recording_context(Arc::new(Mutex::new(Vec::new())));
        let result = thunk.run(ctx).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(result, json!({ "state": 0, "args": ["x", 2] }));
    }

    #[tokio::test]
    async fn test_counter_model_end_to_end() {
        let mut model: Model<i64> = Model::new("counter")
            .reducer("add")
            .async_action("add_async", |ctx, args| async move {
                let n = args.into_iter().next().unwrap_or_default();
                let action = ctx.dispatch(Action::namespaced("counter", "add", n));
                Ok(serde_json::to_value(&action)?)
            });
        model.create_actions().unwrap();

        let add = model.action("add").unwrap().as_sync().unwrap();
        assert_eq!(add.create(json!(5)), Action::new("counter/add", json!(5)));

        let dispatched = Arc::new(Mutex::new(Vec::new()));
        let ctx = recording_context(Arc::clone(&dispatched));

        let thunk = model
            .action("add_async")
            .unwrap()
            .as_async()
            .unwrap()
            .create(vec![json!(5)]);
        let result = thunk.run(ctx).await.unwrap();

        let seen = dispatched.lock().unwrap();
        assert_eq!(*seen, vec![Action::new("counter/add", json!(5))]);
        assert_eq!(result, json!({ "type": "counter/add", "payload": 5 }));
    }
}
