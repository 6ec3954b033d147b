//! Hook type aliases and the engine-wide hook set.

use crate::core::{
    AbortPayload, ErrorPayload, InvalidTransitionPayload, State, TransitionPayload,
};
use crate::engine::error::TransitionError;
use futures::future::{join_all, BoxFuture};
use std::sync::Arc;

/// Outcome of a fallible hook.
pub type HookResult = Result<(), TransitionError>;

/// Edge-scoped async hook (`on_before` / `on_after`).
///
/// The hook borrows the entity mutably for as long as its future runs, so it
/// may read or mutate any field of the record.
pub type EntityHook<E> =
    Arc<dyn for<'a> Fn(&'a mut E) -> BoxFuture<'a, HookResult> + Send + Sync>;

/// Engine-wide async hook run on every transition (`before_transition` / `after_transition`).
pub type GlobalHook<S> =
    Arc<dyn Fn(TransitionPayload<S>) -> BoxFuture<'static, HookResult> + Send + Sync>;

/// Edge-scoped handler invoked once an abort has been honored and rolled back.
pub type AbortHandler<S> = Arc<dyn Fn(AbortPayload<S>) -> BoxFuture<'static, ()> + Send + Sync>;

/// Engine-wide handler for requests naming an undeclared target.
pub type InvalidTransitionHandler<S> = Arc<dyn Fn(&InvalidTransitionPayload<S>) + Send + Sync>;

/// Engine-wide handler invoked for every failure, after the specific handler.
pub type ErrorHandler<S> = Arc<dyn Fn(&TransitionError, &ErrorPayload<S>) + Send + Sync>;

/// Hooks that apply to every edge of an engine.
pub(crate) struct GlobalHooks<S: State> {
    pub(crate) before_transition: Vec<GlobalHook<S>>,
    pub(crate) after_transition: Vec<GlobalHook<S>>,
    pub(crate) on_invalid_transition: Option<InvalidTransitionHandler<S>>,
    pub(crate) on_error: Option<ErrorHandler<S>>,
}

impl<S: State> GlobalHooks<S> {
    /// Run every `before_transition` hook concurrently to completion. The first failure surfaces.
    pub(crate) async fn run_before(&self, payload: &TransitionPayload<S>) -> HookResult {
        fan_out(&self.before_transition, payload).await
    }

    /// Run every `after_transition` hook concurrently to completion. The first failure surfaces.
    pub(crate) async fn run_after(&self, payload: &TransitionPayload<S>) -> HookResult {
        fan_out(&self.after_transition, payload).await
    }
}

/// Awaits every hook even after one fails; siblings are never cancelled mid-flight.
async fn fan_out<S: State>(hooks: &[GlobalHook<S>], payload: &TransitionPayload<S>) -> HookResult {
    join_all(hooks.iter().map(|hook| hook(payload.clone())))
        .await
        .into_iter()
        .collect()
}

impl<S: State> Default for GlobalHooks<S> {
    fn default() -> Self {
        Self {
            before_transition: Vec::new(),
            after_transition: Vec::new(),
            on_invalid_transition: None,
            on_error: None,
        }
    }
}

impl<S: State> Clone for GlobalHooks<S> {
    fn clone(&self) -> Self {
        Self {
            before_transition: self.before_transition.clone(),
            after_transition: self.after_transition.clone(),
            on_invalid_transition: self.on_invalid_transition.clone(),
            on_error: self.on_error.clone(),
        }
    }
}
