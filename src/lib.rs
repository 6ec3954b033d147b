//! Statehook: a declarative transition engine for arbitrary entities
//!
//! Statehook manages one named state field on caller-owned records. Per
//! entity type you declare which states exist, which transitions between
//! them are legal, and which async hooks run before and after each one.
//!
//! # Core Concepts
//!
//! - **Entity**: any record exposing its state field through the `Entity` trait
//! - **Transition table**: declared edges, each with optional hooks and metadata
//! - **Abort**: a veto from an edge's `on_before`, rolled back on abortable edges
//! - **Global hooks**: run on every transition, plus handlers for every failure
//!
//! A call to `transition` never returns an error; outcomes are observed
//! through the entity and the configured hooks.
//!
//! # Example
//!
//! ```rust
//! use futures::FutureExt;
//! use serde_json::{json, Value};
//! use statehook::builder::{EngineBuilder, TransitionBuilder};
//! use statehook::engine::TransitionError;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let aborts = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&aborts);
//!
//! let engine = EngineBuilder::<String, Value>::new()
//!     .initial("idle".to_string())
//!     .transition(
//!         TransitionBuilder::<String, Value>::new()
//!             .from("idle".to_string())
//!             .to("running".to_string())
//!             .abortable()
//!             .on_before(|job| {
//!                 async move {
//!                     if job["paid"] == json!(false) {
//!                         return Err(TransitionError::abort("job is not paid for"));
//!                     }
//!                     Ok(())
//!                 }
//!                 .boxed()
//!             })
//!             .on_abort(move |_payload| {
//!                 counter.fetch_add(1, Ordering::SeqCst);
//!                 async {}
//!             }),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut job = json!({ "status": "idle", "paid": false });
//! engine.transition(&mut job, "running".to_string()).await;
//!
//! assert_eq!(job["status"], "idle");
//! assert_eq!(aborts.load(Ordering::SeqCst), 1);
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder, EngineConfig, TransitionBuilder};
pub use core::{Entity, State, TransitionContext};
pub use engine::{TransitionDetails, TransitionEngine, TransitionError};
