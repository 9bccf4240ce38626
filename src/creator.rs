//! Action creators
//!
//! The two callable shapes produced by [`Model::create_actions`](crate::Model::create_actions):
//! reducer-derived creators build plain [`Action`] values, async-derived
//! creators build [`Thunk`]s. The [`ActionCreator`] enum keeps both under one
//! name-indexed map while preserving their distinct signatures.

use crate::action::{Action, action_type};
use crate::thunk::{AsyncActionFn, Thunk};
use serde_json::Value;
use std::sync::Arc;

/// Creator for a reducer-backed action: one payload in, one plain action out.
pub struct SyncActionCreator {
    action_type: String,
}

impl SyncActionCreator {
    pub(crate) fn new(namespace: &str, name: &str) -> Self {
        Self {
            action_type: action_type(namespace, name),
        }
    }

    /// The namespaced type string this creator stamps onto actions.
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// Build the action `{ type: "<namespace>/<name>", payload }`.
    pub fn create(&self, payload: Value) -> Action {
        Action::new(self.action_type.clone(), payload)
    }
}

/// Creator for an async action: positional arguments in, [`Thunk`] out.
pub struct AsyncActionCreator<S> {
    f: AsyncActionFn<S>,
}

impl<S> AsyncActionCreator<S> {
    pub(crate) fn new(f: AsyncActionFn<S>) -> Self {
        Self { f }
    }

    /// Capture `args` and return a thunk for the hosting store to run.
    pub fn create(&self, args: Vec<Value>) -> Thunk<S> {
        Thunk::new(Arc::clone(&self.f), args)
    }
}

/// A named entry in the synthesized creators map.
pub enum ActionCreator<S> {
    Sync(SyncActionCreator),
    Async(AsyncActionCreator<S>),
}

impl<S> ActionCreator<S> {
    pub fn as_sync(&self) -> Option<&SyncActionCreator> {
        match self {
            Self::Sync(creator) => Some(creator),
            Self::Async(_) => None,
        }
    }

    pub fn as_async(&self) -> Option<&AsyncActionCreator<S>> {
        match self {
            Self::Sync(_) => None,
            Self::Async(creator) => Some(creator),
        }
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Self::Async(_))
    }
}
