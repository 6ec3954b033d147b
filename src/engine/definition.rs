//! Declared edges of the transition table.

use crate::core::State;
use crate::engine::hooks::{AbortHandler, EntityHook};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Descriptive metadata attached to an edge.
///
/// The engine never reads it; it exists for callers to introspect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDetails {
    /// Short human-readable name
    pub label: Option<String>,
    pub description: Option<String>,
    /// Actors expected to request this edge; informational only
    #[serde(default)]
    pub allowed_actors: BTreeSet<String>,
}

impl TransitionDetails {
    /// Create empty details.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the free-form description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an actor to the allowed set.
    pub fn allow_actor(mut self, actor: impl Into<String>) -> Self {
        self.allowed_actors.insert(actor.into());
        self
    }
}

/// Hook bundle for one legal edge `from -> to`.
pub struct TransitionDefinition<S: State, E> {
    pub(crate) abortable: bool,
    pub(crate) on_before: Option<EntityHook<E>>,
    pub(crate) on_after: Option<EntityHook<E>>,
    pub(crate) on_abort: Option<AbortHandler<S>>,
    pub(crate) details: Option<TransitionDetails>,
}

impl<S: State, E> TransitionDefinition<S, E> {
    /// Whether an abort raised by `on_before` is honored on this edge.
    pub fn is_abortable(&self) -> bool {
        self.abortable
    }

    /// Whether an abort handler is installed, including the default one.
    pub fn has_abort_handler(&self) -> bool {
        self.on_abort.is_some()
    }

    /// Descriptive metadata, if any was attached.
    pub fn details(&self) -> Option<&TransitionDetails> {
        self.details.as_ref()
    }
}

impl<S: State, E> Default for TransitionDefinition<S, E> {
    fn default() -> Self {
        Self {
            abortable: false,
            on_before: None,
            on_after: None,
            on_abort: None,
            details: None,
        }
    }
}

impl<S: State, E> Clone for TransitionDefinition<S, E> {
    fn clone(&self) -> Self {
        Self {
            abortable: self.abortable,
            on_before: self.on_before.clone(),
            on_after: self.on_after.clone(),
            on_abort: self.on_abort.clone(),
            details: self.details.clone(),
        }
    }
}

/// A declared edge together with its endpoints.
pub struct Transition<S: State, E> {
    pub from: S,
    pub to: S,
    pub definition: TransitionDefinition<S, E>,
}

impl<S: State, E> Clone for Transition<S, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            definition: self.definition.clone(),
        }
    }
}
