//! Build errors for engine and transition builders.

use thiserror::Error;

/// Errors that can occur when building engines and transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition from '{from}' to '{to}' is declared more than once")]
    DuplicateTransition { from: String, to: String },

    #[error("State key must not be empty")]
    EmptyStateKey,
}
