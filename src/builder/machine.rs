//! Builder for constructing transition engines.

use crate::builder::config::EngineConfig;
use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Entity, ErrorPayload, InvalidTransitionPayload, State, TransitionPayload};
use crate::engine::{
    GlobalHooks, HookResult, Transition, TransitionEngine, TransitionError, TransitionTable,
    DEFAULT_STATE_KEY,
};
use futures::FutureExt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Builder for constructing transition engines with a fluent API.
///
/// `build` runs the one-time normalization pass over the table and returns
/// an immutable engine.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use statehook::builder::{simple_transition, EngineBuilder};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let engine = EngineBuilder::<String, Value>::new()
///     .initial("idle".to_string())
///     .add_transition(simple_transition("idle".to_string(), "running".to_string()))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let mut job = json!({ "status": "idle" });
/// engine.transition(&mut job, "running".to_string()).await;
/// assert_eq!(job["status"], "running");
/// # }
/// ```
pub struct EngineBuilder<S: State + 'static, E: Entity<S>> {
    initial: Option<S>,
    state_key: String,
    table: TransitionTable<S, E>,
    hooks: GlobalHooks<S>,
}

impl<S: State + 'static, E: Entity<S>> EngineBuilder<S, E> {
    /// Create a new builder using the `"status"` state key.
    pub fn new() -> Self {
        Self {
            initial: None,
            state_key: DEFAULT_STATE_KEY.to_string(),
            table: TransitionTable::new(),
            hooks: GlobalHooks::default(),
        }
    }

    /// Start from plain-data options.
    pub fn from_config(config: EngineConfig<S>) -> Self {
        Self::new()
            .initial(config.initial_state)
            .state_key(config.state_key)
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the entity field holding the state.
    pub fn state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = key.into();
        self
    }

    /// Declare a state, e.g. a terminal one, without adding edges.
    pub fn state(mut self, state: S) -> Self {
        self.table.declare_state(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation or the edge already exists.
    pub fn transition(self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.add_transition(transition)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Result<Self, BuildError> {
        self.table.insert(transition)?;
        Ok(self)
    }

    /// Add multiple transitions at once.
    pub fn transitions(
        self,
        transitions: impl IntoIterator<Item = Transition<S, E>>,
    ) -> Result<Self, BuildError> {
        transitions
            .into_iter()
            .try_fold(self, |builder, transition| builder.add_transition(transition))
    }

    /// Append a hook run concurrently with the other before hooks on every
    /// transition that passes validation and its edge's `on_before`.
    pub fn before_transition<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(TransitionPayload<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.hooks
            .before_transition
            .push(Arc::new(move |payload: TransitionPayload<S>| hook(payload).boxed()));
        self
    }

    /// Append a hook run concurrently with the other after hooks on every
    /// committed transition, after its edge's `on_after`.
    pub fn after_transition<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(TransitionPayload<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.hooks
            .after_transition
            .push(Arc::new(move |payload: TransitionPayload<S>| hook(payload).boxed()));
        self
    }

    /// Handler for requests naming a target with no declared edge.
    pub fn on_invalid_transition<F>(mut self, handler: F) -> Self
    where
        F: Fn(&InvalidTransitionPayload<S>) + Send + Sync + 'static,
    {
        self.hooks.on_invalid_transition = Some(Arc::new(handler));
        self
    }

    /// Handler invoked once for every failed transition.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&TransitionError, &ErrorPayload<S>) + Send + Sync + 'static,
    {
        self.hooks.on_error = Some(Arc::new(handler));
        self
    }

    /// Build the engine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<TransitionEngine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.state_key.is_empty() {
            return Err(BuildError::EmptyStateKey);
        }

        let mut table = self.table;
        table.declare_state(initial.clone());

        Ok(TransitionEngine {
            initial,
            state_key: self.state_key,
            table: table.normalize(),
            hooks: self.hooks,
            _entity: PhantomData,
        })
    }
}

impl<S: State + 'static, E: Entity<S>> Default for EngineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
