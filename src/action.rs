//! Plain action objects
//!
//! An action is the smallest unit of the dispatch protocol: a type string and
//! an optional payload. Type strings are namespaced (`"counter/add"`) so that
//! several models can coexist in one store without colliding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator between namespace and action name in a type string.
pub const NAMESPACE_SEPARATOR: char = '/';

/// Build the namespaced type string for an action, `"<namespace>/<name>"`.
pub fn action_type(namespace: &str, name: &str) -> String {
    format!("{namespace}{NAMESPACE_SEPARATOR}{name}")
}

/// A plain action object: a namespaced type string plus a payload.
///
/// Serializes with the conventional JSON field name `"type"`. A missing
/// payload is represented as [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Namespaced type string, e.g. `"counter/add"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Payload carried to the reducer. `Null` when the creator was called
    /// without one.
    #[serde(default)]
    pub payload: Value,
}

impl Action {
    /// Create an action from an already-formatted type string.
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Create an action with no payload.
    pub fn bare(kind: impl Into<String>) -> Self {
        Self::new(kind, Value::Null)
    }

    /// Create an action with the type string built from `namespace` and `name`.
    pub fn namespaced(namespace: &str, name: &str, payload: Value) -> Self {
        Self::new(action_type(namespace, name), payload)
    }
}
