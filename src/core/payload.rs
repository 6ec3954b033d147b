//! Payload records handed to hooks and handlers.
//!
//! These are plain data carriers. Every payload produced during one
//! `transition` call shares the same `transition_id`.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Caller-supplied context for a single transition request.
///
/// # Example
///
/// ```rust
/// use statehook::core::TransitionContext;
/// use serde_json::json;
///
/// let context = TransitionContext::new()
///     .actor("billing-service")
///     .meta(json!({ "invoice": 42 }));
///
/// assert_eq!(context.actor.as_deref(), Some("billing-service"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionContext {
    /// Who requested the transition
    pub actor: Option<String>,
    /// Arbitrary metadata forwarded to every payload
    pub meta: Option<Value>,
}

impl TransitionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requesting actor.
    pub fn actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Attach metadata forwarded to every payload.
    pub fn meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Passed to global before/after transition hooks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionPayload<S: State> {
    pub transition_id: Uuid,
    pub from: S,
    pub to: S,
    pub actor: Option<String>,
    pub meta: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

/// Passed to an edge's abort handler when an abort is honored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AbortPayload<S: State> {
    pub transition_id: Uuid,
    pub from: S,
    pub to: S,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Who requested the aborted transition
    pub actor: Option<String>,
    /// Metadata attached to the abort signal, falling back to the request's metadata
    pub meta: Option<Value>,
}

/// Passed to the global invalid-transition handler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct InvalidTransitionPayload<S: State> {
    pub transition_id: Uuid,
    pub from: S,
    pub to: S,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub actor: Option<String>,
    pub meta: Option<Value>,
}

/// Passed to the global error handler alongside the error itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ErrorPayload<S: State> {
    pub transition_id: Uuid,
    /// `None` when the entity's state field could not be read
    pub from: Option<S>,
    pub to: S,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub actor: Option<String>,
    pub meta: Option<Value>,
}
