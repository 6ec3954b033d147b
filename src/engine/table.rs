//! The transition table: state -> allowed next state -> edge definition.

use crate::builder::BuildError;
use crate::core::{AbortPayload, State};
use crate::engine::definition::{Transition, TransitionDefinition};
use crate::engine::hooks::AbortHandler;
use futures::FutureExt;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Immutable lookup table of declared edges.
///
/// Every state that appears in the table, as a source or as a target, is a
/// key; states without outgoing edges map to an empty set.
pub(crate) struct TransitionTable<S: State, E> {
    edges: HashMap<S, HashMap<S, TransitionDefinition<S, E>>>,
}

impl<S: State + 'static, E> TransitionTable<S, E> {
    pub(crate) fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Register a state with no outgoing edges (no-op if already known).
    pub(crate) fn declare_state(&mut self, state: S) {
        self.edges.entry(state).or_default();
    }

    /// Add an edge, registering both endpoints as states.
    pub(crate) fn insert(&mut self, transition: Transition<S, E>) -> Result<(), BuildError> {
        let Transition {
            from,
            to,
            definition,
        } = transition;

        self.declare_state(to.clone());
        let outgoing = self.edges.entry(from.clone()).or_default();
        if outgoing.contains_key(&to) {
            return Err(BuildError::DuplicateTransition {
                from: from.name().to_string(),
                to: to.name().to_string(),
            });
        }
        outgoing.insert(to, definition);
        Ok(())
    }

    /// One-time pass run at build time: every abortable edge without an
    /// abort handler gets the default logging handler.
    pub(crate) fn normalize(mut self) -> Self {
        for (from, outgoing) in self.edges.iter_mut() {
            for (to, definition) in outgoing.iter_mut() {
                if definition.abortable && definition.on_abort.is_none() {
                    definition.on_abort = Some(default_abort_handler(from, to));
                }
            }
        }
        self
    }

    /// Whether `state` is a key of the table.
    pub fn contains_state(&self, state: &S) -> bool {
        self.edges.contains_key(state)
    }

    /// Look up the edge `from -> to`.
    pub fn get(&self, from: &S, to: &S) -> Option<&TransitionDefinition<S, E>> {
        self.edges.get(from).and_then(|outgoing| outgoing.get(to))
    }

    pub(crate) fn outgoing(&self, from: &S) -> Option<&HashMap<S, TransitionDefinition<S, E>>> {
        self.edges.get(from)
    }
}

fn default_abort_handler<S: State + 'static>(from: &S, to: &S) -> AbortHandler<S> {
    let edge = format!("{} -> {}", from.name(), to.name());
    Arc::new(move |payload: AbortPayload<S>| {
        info!(
            edge = %edge,
            transition_id = %payload.transition_id,
            reason = %payload.message,
            "Transition {} aborted",
            edge
        );
        async {}.boxed()
    })
}
