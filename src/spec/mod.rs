//! Raw state machine declarations.
//!
//! A declaration is a [`SpecValue`] tree shaped like
//!
//! ```text
//! { state: {
//!     states:                   { abc: 1, def: 2 },
//!     events:                   [ foo ],
//!     edges:                    [ { from: abc, to: def, action: move,
//!                                   callbacks: { in: false, post: false },
//!                                   on_events: [ foo ] } ],
//!     on_successful_transition: Hook(from:, to:),
//!     on_failed_transition:     Hook(from:, to:),
//! } }
//! ```
//!
//! Nothing here is checked; see [`crate::validation`].

mod hook;
mod json;
mod symbol;
mod value;

pub use hook::{Hook, TransitionHook};
pub use symbol::Symbol;
pub use value::{SpecMap, SpecValue};
