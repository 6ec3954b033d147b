//! The transition engine and the types it is configured with.
//!
//! # Key Concepts
//!
//! - **Transition table**: state -> allowed next state -> edge definition
//! - **Edge hooks**: `on_before` / `on_after` borrow the entity mutably
//! - **Global hooks**: fanned out concurrently on every transition
//! - **Abort**: a veto returned from `on_before`, honored only on abortable edges
//!
//! A call to [`TransitionEngine::transition`] never returns an error. Every
//! failure is classified once and reported through the handlers:
//!
//! | Failure                         | Rollback | Specific handler        | `on_error` |
//! |---------------------------------|----------|-------------------------|------------|
//! | undeclared target               | -        | `on_invalid_transition` | yes        |
//! | abort, abortable edge           | yes      | edge `on_abort`         | yes        |
//! | abort, non-abortable edge       | no       | - (warning logged)      | yes        |
//! | abort after commit              | no       | - (warning logged)      | yes        |
//! | any other hook failure          | no       | -                       | yes        |

mod definition;
mod error;
mod hooks;
mod machine;
mod table;

pub use definition::{Transition, TransitionDefinition, TransitionDetails};
pub use error::TransitionError;
pub(crate) use hooks::GlobalHooks;
pub use hooks::{
    AbortHandler, EntityHook, ErrorHandler, GlobalHook, HookResult, InvalidTransitionHandler,
};
pub use machine::{TransitionEngine, DEFAULT_STATE_KEY};
pub(crate) use table::TransitionTable;
