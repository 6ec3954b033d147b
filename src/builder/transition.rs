//! Builder for declaring edges of the transition table.

use crate::builder::error::BuildError;
use crate::core::{AbortPayload, State};
use crate::engine::{HookResult, Transition, TransitionDefinition, TransitionDetails};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;

/// Builder for constructing edges with a fluent API.
///
/// # Example
///
/// ```rust
/// use futures::FutureExt;
/// use serde_json::Value;
/// use statehook::builder::TransitionBuilder;
/// use statehook::engine::TransitionError;
///
/// let transition = TransitionBuilder::<String, Value>::new()
///     .from("idle".to_string())
///     .to("running".to_string())
///     .abortable()
///     .on_before(|record| {
///         async move {
///             if record["paid"] == Value::Bool(false) {
///                 return Err(TransitionError::abort("payment missing"));
///             }
///             Ok(())
///         }
///         .boxed()
///     })
///     .build()
///     .unwrap();
///
/// assert!(transition.definition.is_abortable());
/// ```
pub struct TransitionBuilder<S: State, E> {
    from: Option<S>,
    to: Option<S>,
    definition: TransitionDefinition<S, E>,
}

impl<S: State + 'static, E> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            definition: TransitionDefinition::default(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Honor aborts raised by `on_before` on this edge.
    pub fn abortable(mut self) -> Self {
        self.definition.abortable = true;
        self
    }

    /// Hook awaited before the state field is written.
    ///
    /// Returning [`TransitionError::Aborted`](crate::engine::TransitionError::Aborted)
    /// vetoes the transition.
    pub fn on_before<F>(mut self, hook: F) -> Self
    where
        F: for<'a> Fn(&'a mut E) -> BoxFuture<'a, HookResult> + Send + Sync + 'static,
    {
        self.definition.on_before = Some(Arc::new(hook));
        self
    }

    /// Hook awaited after the state field is written.
    pub fn on_after<F>(mut self, hook: F) -> Self
    where
        F: for<'a> Fn(&'a mut E) -> BoxFuture<'a, HookResult> + Send + Sync + 'static,
    {
        self.definition.on_after = Some(Arc::new(hook));
        self
    }

    /// Handler run after an honored abort has been rolled back.
    ///
    /// Abortable edges without a handler get a default one that logs the edge.
    pub fn on_abort<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(AbortPayload<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.definition.on_abort = Some(Arc::new(move |payload: AbortPayload<S>| {
            handler(payload).boxed()
        }));
        self
    }

    /// Attach descriptive metadata (optional).
    pub fn details(mut self, details: TransitionDetails) -> Self {
        self.definition.details = Some(details);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            to,
            definition: self.definition,
        })
    }
}

impl<S: State + 'static, E> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
