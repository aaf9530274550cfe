//! Core state machine model.
//!
//! This module contains the validated, immutable description of a machine:
//! - The state table mapping names to stored codes
//! - Edges with their callback flags and event bindings
//! - The model tying them together with the two transition hooks
//!
//! Nothing in here performs I/O; executing transitions is the job of
//! [`crate::engine`].

mod edge;
mod model;
mod state;

pub use edge::{CallbackFlags, Edge, EventDef};
pub use model::StateMachineModel;
pub use state::{StateTable, StateTableError};
