//! The accessor/mutator contract between the engine and caller-owned records.
//!
//! The engine never inspects an entity beyond its state field. Everything it
//! needs is expressed by the [`Entity`] trait: read the state, write the
//! state, and take/restore a snapshot used to roll back aborted transitions.

use super::state::State;
use serde_json::{Map, Value};

/// A caller-owned record with a named state field.
///
/// `key` is the engine's configured state field name (`"status"` unless
/// overridden). Typed records with a fixed field are free to ignore it.
///
/// The snapshot pair defines the rollback scope of an aborted transition.
/// Records that only want the state field restored can use the state itself
/// as their snapshot; records that want hook side effects undone as well
/// snapshot every field they care about.
///
/// # Example
///
/// ```rust
/// use statehook::core::Entity;
///
/// struct Job {
///     status: String,
///     retries: u32,
/// }
///
/// impl Entity<String> for Job {
///     type Snapshot = String;
///
///     fn state(&self, _key: &str) -> Option<String> {
///         Some(self.status.clone())
///     }
///
///     fn set_state(&mut self, _key: &str, state: String) {
///         self.status = state;
///     }
///
///     fn snapshot(&self, _key: &str) -> String {
///         self.status.clone()
///     }
///
///     fn restore(&mut self, _key: &str, snapshot: String) {
///         self.status = snapshot;
///     }
/// }
///
/// let mut job = Job { status: "queued".to_string(), retries: 0 };
/// job.set_state("status", "running".to_string());
/// assert_eq!(job.state("status").as_deref(), Some("running"));
/// assert_eq!(job.retries, 0);
/// ```
pub trait Entity<S: State>: Send {
    /// Copy of whatever the record restores when an abort is honored.
    type Snapshot: Send;

    /// Read the current state, or `None` if the field is missing or unreadable.
    fn state(&self, key: &str) -> Option<S>;

    /// Overwrite the state field.
    fn set_state(&mut self, key: &str, state: S);

    /// Capture the rollback snapshot. Taken once per transition, before any hook runs.
    fn snapshot(&self, key: &str) -> Self::Snapshot;

    /// Restore a snapshot previously returned by [`Entity::snapshot`].
    fn restore(&mut self, key: &str, snapshot: Self::Snapshot);
}

/// JSON objects keep their state under `key`. The snapshot is a structural
/// copy of the whole record, so rollback also undoes field mutations made by
/// hooks before the abort.
impl<S: State> Entity<S> for Map<String, Value> {
    type Snapshot = Map<String, Value>;

    fn state(&self, key: &str) -> Option<S> {
        self.get(key)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    fn set_state(&mut self, key: &str, state: S) {
        // An unserializable state leaves the field untouched; the engine's
        // post-commit check reports the mismatch.
        if let Ok(value) = serde_json::to_value(&state) {
            self.insert(key.to_string(), value);
        }
    }

    fn snapshot(&self, _key: &str) -> Self::Snapshot {
        self.clone()
    }

    fn restore(&mut self, _key: &str, snapshot: Self::Snapshot) {
        *self = snapshot;
    }
}

/// Any JSON value; only objects carry a state field.
impl<S: State> Entity<S> for Value {
    type Snapshot = Value;

    fn state(&self, key: &str) -> Option<S> {
        self.as_object().and_then(|map| map.state(key))
    }

    fn set_state(&mut self, key: &str, state: S) {
        if let Some(map) = self.as_object_mut() {
            map.set_state(key, state);
        }
    }

    fn snapshot(&self, _key: &str) -> Self::Snapshot {
        self.clone()
    }

    fn restore(&mut self, _key: &str, snapshot: Self::Snapshot) {
        *self = snapshot;
    }
}
