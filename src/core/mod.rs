//! Core data types of the transition engine.
//!
//! This module contains the pieces the engine is generic over and the
//! records it hands to hooks:
//! - State names via the `State` trait
//! - Caller-owned records via the `Entity` accessor/mutator trait
//! - Payloads passed to global hooks and failure handlers

mod entity;
mod payload;
mod state;

pub use entity::Entity;
pub use payload::{
    AbortPayload, ErrorPayload, InvalidTransitionPayload, TransitionContext, TransitionPayload,
};
pub use state::State;
