//! Collision checks for generated operation names.

use super::error::ValidationError;
use super::host::HostType;
use crate::spec::Symbol;
use std::collections::HashSet;

/// Tracks which operation names a declaration would generate and rejects
/// any that the host already has or that an earlier part of the same
/// declaration has claimed.
///
/// Generated names per kind:
/// - state `s`: `Type.s` (query scope) and `Type#s?`
/// - event `e`: `Type#e!`
/// - action `a`: `Type#a!` and `Type#can_a?`
pub struct NameClashChecker<'a> {
    host: &'a HostType,
    claimed_type: HashSet<String>,
    claimed_instance: HashSet<String>,
}

impl<'a> NameClashChecker<'a> {
    pub fn new(host: &'a HostType) -> Self {
        Self {
            host,
            claimed_type: HashSet::new(),
            claimed_instance: HashSet::new(),
        }
    }

    fn type_operation_taken(&self, op: &str) -> bool {
        self.host.has_type_operation(op) || self.claimed_type.contains(op)
    }

    fn instance_operation_taken(&self, op: &str) -> bool {
        self.host.has_instance_operation(op) || self.claimed_instance.contains(op)
    }

    fn type_name(&self) -> String {
        self.host.name().to_string()
    }

    pub fn claim_state(&mut self, state: &Symbol) -> Result<(), ValidationError> {
        let predicate = state.suffixed("?");

        if self.type_operation_taken(state.as_str()) {
            return Err(ValidationError::StateClashesTypeOperation {
                state: state.clone(),
                type_name: self.type_name(),
            });
        }
        if self.instance_operation_taken(&predicate) {
            return Err(ValidationError::StateClashesPredicate {
                state: state.clone(),
                type_name: self.type_name(),
            });
        }

        self.claimed_type.insert(state.to_string());
        self.claimed_instance.insert(predicate);
        Ok(())
    }

    pub fn claim_event(&mut self, event: &Symbol) -> Result<(), ValidationError> {
        if self.instance_operation_taken(event.as_str()) {
            return Err(ValidationError::EventClashesOperation {
                event: event.clone(),
                type_name: self.type_name(),
            });
        }

        self.claimed_instance.insert(event.suffixed("!"));
        Ok(())
    }

    pub fn claim_action(&mut self, action: &Symbol) -> Result<(), ValidationError> {
        let bang = action.suffixed("!");
        let predicate = format!("can_{action}?");

        if self.instance_operation_taken(&bang) {
            return Err(ValidationError::ActionClashesOperation {
                action: action.clone(),
                type_name: self.type_name(),
            });
        }
        if self.instance_operation_taken(&predicate) {
            return Err(ValidationError::ActionClashesPredicate {
                action: action.clone(),
                type_name: self.type_name(),
            });
        }

        self.claimed_instance.insert(bang);
        self.claimed_instance.insert(predicate);
        Ok(())
    }
}
