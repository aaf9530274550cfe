//! Transition execution.
//!
//! This module is the imperative shell around the validated model:
//!
//! - [`HostAdapter`]: storage, locking and callbacks supplied by the entity
//! - [`TransitionEngine`]: resolves an action or event against the current
//!   state and performs the transition under the entity's lock
//! - [`InMemoryRecord`]: a ready-made adapter for tests and in-process use
//!
//! # Transition order
//!
//! For a selected edge, the engine runs, inside one lock scope:
//! `on_<action>`, `on_<event>` (when `in` is set), the state write, the
//! modified mark, `after_<action>`, `after_<event>` (when `post` is set),
//! then the model's `on_successful_transition`. Event callbacks only fire
//! when the event entry point was used.
//!
//! If any step fails the lock body returns `Err` and the host rolls the
//! entity back, so a failed `after_<x>` callback leaves the stored state
//! untouched. Neither transition hook runs in that case.

mod error;
mod host;
mod machine;
mod memory;
mod request;

pub use error::{InvalidTransitionError, TransitionError};
pub use host::HostAdapter;
pub use machine::TransitionEngine;
pub use memory::{InMemoryError, InMemoryRecord, JournalEntry};
pub use request::{TransitionRequest, TriggerKind};
