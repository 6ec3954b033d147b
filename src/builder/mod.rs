//! Builder API for ergonomic engine construction.
//!
//! This module provides fluent builders for the transition table and the
//! engine, plain-data options, and a macro for declaring state enums.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use config::EngineConfig;
pub use error::BuildError;
pub use machine::EngineBuilder;
pub use transition::TransitionBuilder;

use crate::core::State;
use crate::engine::{Transition, TransitionDefinition};

/// Create a plain edge with no hooks.
///
/// # Example
///
/// ```
/// use serde_json::Value;
/// use statehook::builder::simple_transition;
/// use statehook::engine::Transition;
///
/// let transition: Transition<String, Value> =
///     simple_transition("idle".to_string(), "running".to_string());
///
/// assert!(!transition.definition.is_abortable());
/// ```
pub fn simple_transition<S: State, E>(from: S, to: S) -> Transition<S, E> {
    Transition {
        from,
        to,
        definition: TransitionDefinition::default(),
    }
}
