//! Builder API for ergonomic declaration construction.
//!
//! Writing a [`SpecValue`](crate::spec::SpecValue) tree by hand is verbose;
//! these builders produce a well-shaped declaration with minimal
//! boilerplate.

pub mod edge;
pub mod machine;

pub use edge::EdgeSpecBuilder;
pub use machine::MachineSpecBuilder;
