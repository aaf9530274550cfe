//! The operations a host type already exposes.

use std::collections::HashSet;

/// Explicit description of a host type's existing operations.
///
/// Generated names are checked against this set instead of inspecting the
/// host at runtime. Type-level operations are written without a receiver
/// (`foo` for `Type.foo`); instance operations include any `?`/`!` suffix
/// (`foo?` for `Type#foo?`).
///
/// # Example
///
/// ```rust
/// use argonaut::validation::HostType;
///
/// let host = HostType::new("Order")
///     .with_type_operation("find")
///     .with_instance_operations(["save", "on_ship"]);
///
/// assert!(host.has_type_operation("find"));
/// assert!(host.has_instance_operation("on_ship"));
/// assert!(!host.has_instance_operation("find"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostType {
    name: String,
    type_operations: HashSet<String>,
    instance_operations: HashSet<String>,
}

impl HostType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type_operation(mut self, op: impl Into<String>) -> Self {
        self.type_operations.insert(op.into());
        self
    }

    pub fn with_instance_operation(mut self, op: impl Into<String>) -> Self {
        self.instance_operations.insert(op.into());
        self
    }

    pub fn with_instance_operations<I, S>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instance_operations
            .extend(ops.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_type_operation(&self, op: &str) -> bool {
        self.type_operations.contains(op)
    }

    pub fn has_instance_operation(&self, op: &str) -> bool {
        self.instance_operations.contains(op)
    }
}
