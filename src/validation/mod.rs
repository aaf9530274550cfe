//! Declaration validation.
//!
//! [`validate`] turns a raw [`SpecValue`](crate::spec::SpecValue) into a
//! [`StateMachineModel`](crate::core::StateMachineModel) or rejects it with
//! the first [`ValidationError`] found. Generated operation names are
//! checked against an explicit [`HostType`] by the [`NameClashChecker`].
//!
//! [`lint`] then reports non-fatal [`ModelWarning`]s for a model that did
//! validate.

mod error;
mod host;
mod lint;
mod names;
mod validator;

pub use error::ValidationError;
pub use host::HostType;
pub use lint::{lint, ModelWarning};
pub use names::NameClashChecker;
pub use validator::validate;
