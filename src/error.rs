//! Configuration errors reported by [`Model::create_actions`](crate::Model::create_actions)
//!
//! All validation happens eagerly when the creators are built, so a bad
//! namespace or action name fails setup instead of surfacing later when a
//! creator is first called.

use thiserror::Error;

/// Errors detected while validating a model definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("namespace must not be empty")]
    EmptyNamespace,

    #[error("namespace `{0}` must not contain `/`")]
    NamespaceContainsSeparator(String),

    #[error("reducer and action names must not be empty")]
    EmptyName,

    #[error("name `{0}` must not contain `/`")]
    NameContainsSeparator(String),
}
