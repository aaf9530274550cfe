//! Argonaut: declarative state machines for persistent entities
//!
//! A host type declares its states (with stored integer codes), events and
//! edges once. The declaration is validated exhaustively up front; at
//! runtime transitions are resolved against the entity's current state and
//! executed under the entity's exclusive lock with a fixed callback order.
//!
//! # Core Concepts
//!
//! - **Declaration**: a raw [`spec::SpecValue`], usually built with
//!   [`builder::MachineSpecBuilder`]
//! - **Validation**: [`validation::validate`] produces an immutable
//!   [`core::StateMachineModel`] or a precise [`validation::ValidationError`]
//! - **Engine**: [`engine::TransitionEngine`] performs actions and events
//!   through a host-supplied [`engine::HostAdapter`]
//! - **Registry**: [`registry::MachineRegistry`] caches one model per host type
//!
//! # Example
//!
//! ```rust
//! use argonaut::builder::{EdgeSpecBuilder, MachineSpecBuilder};
//! use argonaut::engine::{InMemoryRecord, TransitionEngine};
//! use argonaut::validation::{validate, HostType};
//! use std::sync::Arc;
//!
//! let spec = MachineSpecBuilder::new("state")
//!     .state("draft", 0)
//!     .state("published", 1)
//!     .event("release")
//!     .edge(
//!         EdgeSpecBuilder::new("draft", "published", "publish")
//!             .callbacks(true, false)
//!             .on_events(["release"]),
//!     )
//!     .build();
//!
//! let model = validate(&HostType::new("Article"), &spec).unwrap();
//! let engine = TransitionEngine::new(Arc::new(model));
//!
//! let article = InMemoryRecord::with_state(0);
//! assert!(engine.can(&article, "publish").unwrap());
//!
//! engine.perform_event(&article, "release").unwrap();
//! assert_eq!(engine.read_state(&article).unwrap().unwrap().as_str(), "published");
//! assert_eq!(article.callbacks(), vec!["on_publish", "on_release"]);
//!
//! let err = engine.perform_action(&article, "publish").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid state transition");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod registry;
pub mod spec;
pub mod validation;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use crate::core::StateMachineModel;
pub use engine::{HostAdapter, InvalidTransitionError, TransitionEngine, TransitionError};
pub use registry::MachineRegistry;
pub use spec::{Hook, SpecValue, Symbol};
pub use validation::{validate, HostType, ValidationError};
