//! Errors raised while running a transition.

use serde_json::Value;
use std::fmt::Display;

/// Errors that can occur during a transition.
///
/// Hooks return this type too: an edge's `on_before` vetoes a transition by
/// returning [`TransitionError::abort`], and reports any other failure with
/// [`TransitionError::hook_failed`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("Invalid transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Transition aborted: {message}")]
    Aborted {
        message: String,
        meta: Option<Value>,
    },

    #[error("Transition hook failed: {0}")]
    HookFailed(String),

    #[error("State field '{key}' holds '{found}' after commit, expected '{expected}'")]
    StateMismatch {
        key: String,
        expected: String,
        found: String,
    },

    #[error("State '{state}' is not declared in the transition table")]
    UnknownState { state: String },

    #[error("Entity has no readable state field '{key}'")]
    MissingStateField { key: String },
}

impl TransitionError {
    /// Abort signal with a human-readable message.
    pub fn abort(message: impl Into<String>) -> Self {
        Self::Aborted {
            message: message.into(),
            meta: None,
        }
    }

    /// Abort signal carrying metadata for the abort handler.
    pub fn abort_with_meta(message: impl Into<String>, meta: Value) -> Self {
        Self::Aborted {
            message: message.into(),
            meta: Some(meta),
        }
    }

    /// Wrap any other hook failure.
    pub fn hook_failed(error: impl Display) -> Self {
        Self::HookFailed(error.to_string())
    }

    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}
