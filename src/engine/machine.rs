//! Transition engine that validates, runs hooks, commits and recovers.

use crate::core::{
    AbortPayload, Entity, ErrorPayload, InvalidTransitionPayload, State, TransitionContext,
    TransitionPayload,
};
use crate::engine::definition::{TransitionDefinition, TransitionDetails};
use crate::engine::error::TransitionError;
use crate::engine::hooks::GlobalHooks;
use crate::engine::table::TransitionTable;
use chrono::Utc;
use std::marker::PhantomData;
use tracing::{debug, warn};
use uuid::Uuid;

/// Default name of the state field read and written on every entity.
pub const DEFAULT_STATE_KEY: &str = "status";

/// Declarative transition engine for entities of type `E` with states `S`.
///
/// The engine holds only immutable configuration. Each call to
/// [`TransitionEngine::transition`] runs
/// validate -> `on_before` -> global before hooks -> commit -> `on_after` -> global after hooks
/// and absorbs every failure, reporting it through the configured handlers.
///
/// Built with [`crate::builder::EngineBuilder`].
pub struct TransitionEngine<S: State + 'static, E: Entity<S>> {
    pub(crate) initial: S,
    pub(crate) state_key: String,
    pub(crate) table: TransitionTable<S, E>,
    pub(crate) hooks: GlobalHooks<S>,
    pub(crate) _entity: PhantomData<fn(&mut E)>,
}

/// Per-call bookkeeping shared by every payload of one transition.
struct Attempt<'c, S> {
    id: Uuid,
    target: S,
    context: &'c TransitionContext,
}

/// A failed transition and whether the state field had already been committed.
struct Failure {
    error: TransitionError,
    committed: bool,
}

impl Failure {
    fn before_commit(error: TransitionError) -> Self {
        Self {
            error,
            committed: false,
        }
    }

    fn after_commit(error: TransitionError) -> Self {
        Self {
            error,
            committed: true,
        }
    }
}

impl<S: State + 'static, E: Entity<S>> TransitionEngine<S, E> {
    /// Documented initial state. Not enforced against entities.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Name of the state field on every entity.
    pub fn state_key(&self) -> &str {
        &self.state_key
    }

    /// Whether `state` is declared, as a source, a target or explicitly.
    pub fn contains_state(&self, state: &S) -> bool {
        self.table.contains_state(state)
    }

    /// The edge definition for `from -> to`, if declared.
    pub fn definition(&self, from: &S, to: &S) -> Option<&TransitionDefinition<S, E>> {
        self.table.get(from, to)
    }

    /// Descriptive metadata of the edge `from -> to`, if declared and described.
    pub fn details(&self, from: &S, to: &S) -> Option<&TransitionDetails> {
        self.table.get(from, to).and_then(|definition| definition.details())
    }

    /// Move `entity` to `target` with an empty context.
    pub async fn transition(&self, entity: &mut E, target: S) {
        self.transition_with(entity, target, TransitionContext::default())
            .await
    }

    /// Move `entity` to `target`.
    ///
    /// Never fails: outcomes are observable only through the entity's state
    /// field and the configured hooks.
    pub async fn transition_with(&self, entity: &mut E, target: S, context: TransitionContext) {
        let attempt = Attempt {
            id: Uuid::new_v4(),
            target,
            context: &context,
        };

        let from = entity.state(&self.state_key);
        let snapshot = entity.snapshot(&self.state_key);

        let result = match &from {
            Some(from) => self.run(entity, from, &attempt).await,
            None => Err(Failure::before_commit(TransitionError::MissingStateField {
                key: self.state_key.clone(),
            })),
        };

        match result {
            Ok(()) => debug!(
                transition_id = %attempt.id,
                from = from.as_ref().map(State::name).unwrap_or_default(),
                to = attempt.target.name(),
                "Transition committed"
            ),
            Err(failure) => {
                self.recover(entity, from, snapshot, &attempt, failure)
                    .await
            }
        }
    }

    /// Validation through post-phase. Any failure returned here is classified by `recover`.
    async fn run(
        &self,
        entity: &mut E,
        from: &S,
        attempt: &Attempt<'_, S>,
    ) -> Result<(), Failure> {
        let target = &attempt.target;
        let definition = self.validate(from, target).map_err(Failure::before_commit)?;

        if let Some(on_before) = &definition.on_before {
            on_before(&mut *entity)
                .await
                .map_err(Failure::before_commit)?;
        }
        let payload = self.transition_payload(from, attempt);
        self.hooks
            .run_before(&payload)
            .await
            .map_err(Failure::before_commit)?;

        entity.set_state(&self.state_key, target.clone());

        self.verify_commit(entity, target)
            .map_err(Failure::after_commit)?;
        if let Some(on_after) = &definition.on_after {
            on_after(&mut *entity)
                .await
                .map_err(Failure::after_commit)?;
        }
        self.hooks
            .run_after(&payload)
            .await
            .map_err(Failure::after_commit)
    }

    fn validate(
        &self,
        from: &S,
        target: &S,
    ) -> Result<&TransitionDefinition<S, E>, TransitionError> {
        let outgoing = self
            .table
            .outgoing(from)
            .ok_or_else(|| TransitionError::UnknownState {
                state: from.name().to_string(),
            })?;
        outgoing
            .get(target)
            .ok_or_else(|| TransitionError::InvalidTransition {
                from: from.name().to_string(),
                to: target.name().to_string(),
            })
    }

    fn verify_commit(&self, entity: &E, target: &S) -> Result<(), TransitionError> {
        match entity.state(&self.state_key) {
            Some(current) if current == *target => Ok(()),
            found => Err(TransitionError::StateMismatch {
                key: self.state_key.clone(),
                expected: target.name().to_string(),
                found: found
                    .as_ref()
                    .map(|s| s.name().to_string())
                    .unwrap_or_else(|| "<missing>".to_string()),
            }),
        }
    }

    async fn recover(
        &self,
        entity: &mut E,
        from: Option<S>,
        snapshot: E::Snapshot,
        attempt: &Attempt<'_, S>,
        failure: Failure,
    ) {
        let Failure { error, committed } = failure;
        let target = &attempt.target;
        debug!(
            transition_id = %attempt.id,
            from = from.as_ref().map(State::name).unwrap_or_default(),
            to = target.name(),
            committed,
            error = %error,
            "Transition failed"
        );

        match (&error, &from) {
            (TransitionError::InvalidTransition { .. }, Some(from)) => {
                if let Some(handler) = &self.hooks.on_invalid_transition {
                    handler(&InvalidTransitionPayload {
                        transition_id: attempt.id,
                        from: from.clone(),
                        to: target.clone(),
                        message: error.to_string(),
                        timestamp: Utc::now(),
                        actor: attempt.context.actor.clone(),
                        meta: attempt.context.meta.clone(),
                    });
                }
            }
            (TransitionError::Aborted { message, meta }, Some(from)) => {
                let definition = self
                    .table
                    .get(from, target)
                    .filter(|definition| definition.abortable && !committed);
                match definition {
                    Some(definition) => {
                        entity.restore(&self.state_key, snapshot);
                        if let Some(on_abort) = &definition.on_abort {
                            on_abort(AbortPayload {
                                transition_id: attempt.id,
                                from: from.clone(),
                                to: target.clone(),
                                message: message.clone(),
                                timestamp: Utc::now(),
                                actor: attempt.context.actor.clone(),
                                meta: meta.clone().or_else(|| attempt.context.meta.clone()),
                            })
                            .await;
                        }
                    }
                    None => warn!(
                        transition_id = %attempt.id,
                        from = from.name(),
                        to = target.name(),
                        committed,
                        reason = %message,
                        "{}",
                        if committed {
                            "Abort requested after commit; ignoring"
                        } else {
                            "Abort requested on a non-abortable transition; ignoring"
                        }
                    ),
                }
            }
            _ => {}
        }

        if let Some(on_error) = &self.hooks.on_error {
            on_error(
                &error,
                &ErrorPayload {
                    transition_id: attempt.id,
                    from,
                    to: target.clone(),
                    message: error.to_string(),
                    timestamp: Utc::now(),
                    actor: attempt.context.actor.clone(),
                    meta: attempt.context.meta.clone(),
                },
            );
        }
    }

    fn transition_payload(&self, from: &S, attempt: &Attempt<'_, S>) -> TransitionPayload<S> {
        TransitionPayload {
            transition_id: attempt.id,
            from: from.clone(),
            to: attempt.target.clone(),
            actor: attempt.context.actor.clone(),
            meta: attempt.context.meta.clone(),
            timestamp: Utc::now(),
        }
    }
}
