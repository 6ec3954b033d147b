//! Plain-data engine options.
//!
//! Hooks are closures and cannot be deserialized; everything else an engine
//! is constructed from can be loaded from a config file and handed to
//! [`EngineBuilder::from_config`](crate::builder::EngineBuilder::from_config).

use crate::core::State;
use crate::engine::DEFAULT_STATE_KEY;
use serde::{Deserialize, Serialize};

/// Serializable construction options of an engine.
///
/// # Example
///
/// ```rust
/// use statehook::builder::EngineConfig;
///
/// let config: EngineConfig<String> =
///     serde_json::from_str(r#"{ "initial_state": "draft" }"#).unwrap();
///
/// assert_eq!(config.initial_state, "draft");
/// assert_eq!(config.state_key, "status");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EngineConfig<S: State> {
    /// Documented starting state of new entities
    pub initial_state: S,
    /// Entity field holding the state
    #[serde(default = "default_state_key")]
    pub state_key: String,
}

impl<S: State> EngineConfig<S> {
    /// Options with the default `"status"` state key.
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            state_key: default_state_key(),
        }
    }

    /// Override the entity field holding the state.
    pub fn with_state_key(mut self, state_key: impl Into<String>) -> Self {
        self.state_key = state_key.into();
        self
    }
}

fn default_state_key() -> String {
    DEFAULT_STATE_KEY.to_string()
}
