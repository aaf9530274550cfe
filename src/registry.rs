//! Declaration registry.
//!
//! Maps each host type to its validated model so transitions can be
//! resolved by `(type, name)` lookup.

use crate::core::StateMachineModel;
use crate::engine::TransitionEngine;
use crate::spec::{SpecValue, Symbol};
use crate::validation::{lint, validate, HostType, ValidationError};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use stillwater::validation::Validation;
use tracing::{info, warn};

/// The host's query layer, asked to register one named filter per state.
pub trait QueryScopes {
    /// Register a filter named `name` selecting entities whose `field`
    /// holds `code`.
    fn register_scope(&mut self, name: &Symbol, field: &Symbol, code: i64);
}

/// A recorded scope registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDefinition {
    pub name: Symbol,
    pub field: Symbol,
    pub code: i64,
}

impl QueryScopes for Vec<ScopeDefinition> {
    fn register_scope(&mut self, name: &Symbol, field: &Symbol, code: i64) {
        self.push(ScopeDefinition {
            name: name.clone(),
            field: field.clone(),
            code,
        });
    }
}

/// Validated machines keyed by host type name.
///
/// # Example
///
/// ```rust
/// use argonaut::builder::{EdgeSpecBuilder, MachineSpecBuilder};
/// use argonaut::engine::InMemoryRecord;
/// use argonaut::registry::{MachineRegistry, ScopeDefinition};
/// use argonaut::validation::HostType;
///
/// let registry = MachineRegistry::new();
/// let mut scopes: Vec<ScopeDefinition> = Vec::new();
/// let spec = MachineSpecBuilder::new("state")
///     .state("abc", 1)
///     .state("def", 2)
///     .edge(EdgeSpecBuilder::new("abc", "def", "move"))
///     .build();
///
/// registry.declare(&HostType::new("Order"), &spec, &mut scopes).unwrap();
/// assert_eq!(scopes.len(), 2);
///
/// let engine = registry.engine("Order").unwrap();
/// let order = InMemoryRecord::with_state(1);
/// engine.perform_action(&order, "move").unwrap();
/// assert_eq!(order.raw_state(), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct MachineRegistry {
    machines: RwLock<HashMap<String, Arc<StateMachineModel>>>,
}

impl MachineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `spec` for `host`, cache the model and register one query
    /// scope per state.
    ///
    /// Nothing is registered if validation fails or the type is already
    /// declared. Lint warnings for an accepted declaration are logged and do
    /// not fail it.
    pub fn declare(
        &self,
        host: &HostType,
        spec: &SpecValue,
        scopes: &mut dyn QueryScopes,
    ) -> Result<Arc<StateMachineModel>, ValidationError> {
        let model = Arc::new(validate(host, spec)?);

        {
            let mut machines = self
                .machines
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if machines.contains_key(host.name()) {
                return Err(ValidationError::AlreadyDeclared {
                    type_name: host.name().to_string(),
                });
            }
            machines.insert(host.name().to_string(), Arc::clone(&model));
        }

        if let Validation::Failure(warnings) = lint(&model, host) {
            for warning in warnings.iter() {
                warn!(type_name = host.name(), %warning, "state machine declaration warning");
            }
        }

        for (name, code) in model.states().iter() {
            scopes.register_scope(name, model.field(), code);
        }

        info!(
            type_name = host.name(),
            states = model.states().len(),
            events = model.events().len(),
            edges = model.edges().len(),
            "state machine declared"
        );
        Ok(model)
    }

    pub fn model(&self, type_name: &str) -> Option<Arc<StateMachineModel>> {
        self.machines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_name)
            .cloned()
    }

    pub fn engine(&self, type_name: &str) -> Option<TransitionEngine> {
        self.model(type_name).map(TransitionEngine::new)
    }

    pub fn is_declared(&self, type_name: &str) -> bool {
        self.model(type_name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{EdgeSpecBuilder, MachineSpecBuilder};
    use crate::spec::Hook;
    use crate::testing::capture_logs;
    use tracing::Level;

    fn spec() -> SpecValue {
        MachineSpecBuilder::new("state")
            .state("abc", 1)
            .state("def", 2)
            .edge(EdgeSpecBuilder::new("abc", "def", "move"))
            .build()
    }

    #[test]
    fn registers_scopes_in_declaration_order() {
        let registry = MachineRegistry::new();
        let mut scopes: Vec<ScopeDefinition> = Vec::new();

        registry
            .declare(&HostType::new("SampleClass"), &spec(), &mut scopes)
            .unwrap();

        assert_eq!(
            scopes,
            vec![
                ScopeDefinition {
                    name: Symbol::new("abc"),
                    field: Symbol::new("state"),
                    code: 1
                },
                ScopeDefinition {
                    name: Symbol::new("def"),
                    field: Symbol::new("state"),
                    code: 2
                },
            ]
        );
    }

    #[test]
    fn failed_declaration_registers_nothing() {
        let registry = MachineRegistry::new();
        let mut scopes: Vec<ScopeDefinition> = Vec::new();
        let host = HostType::new("SampleClass").with_type_operation("abc");

        let err = registry.declare(&host, &spec(), &mut scopes).unwrap_err();

        assert!(matches!(err, ValidationError::StateClashesTypeOperation { .. }));
        assert!(scopes.is_empty());
        assert!(!registry.is_declared("SampleClass"));
    }

    #[test]
    fn second_declaration_is_rejected() {
        let registry = MachineRegistry::new();
        let host = HostType::new("SampleClass");
        let mut scopes: Vec<ScopeDefinition> = Vec::new();
        registry.declare(&host, &spec(), &mut scopes).unwrap();

        let err = registry.declare(&host, &spec(), &mut scopes).unwrap_err();

        assert_eq!(
            err.to_string(),
            "state_machine() has already been declared for `SampleClass`"
        );
        assert_eq!(scopes.len(), 2);
    }

    #[test]
    fn redeclaration_logs_no_lint_warnings() {
        let registry = MachineRegistry::new();
        let host = HostType::new("SampleClass");
        let mut scopes: Vec<ScopeDefinition> = Vec::new();
        let unused_event = MachineSpecBuilder::new("state")
            .state("abc", 1)
            .state("def", 2)
            .event("foo")
            .edge(EdgeSpecBuilder::new("abc", "def", "move"))
            .build();

        let first = capture_logs(Level::WARN, || {
            registry.declare(&host, &unused_event, &mut scopes).unwrap();
        });
        assert!(first.contains("state machine declaration warning"));
        assert!(first.contains("event `foo` is not attached to any edge"));

        let second = capture_logs(Level::WARN, || {
            let err = registry.declare(&host, &unused_event, &mut scopes).unwrap_err();
            assert!(matches!(err, ValidationError::AlreadyDeclared { .. }));
        });
        assert!(second.is_empty());
    }

    #[test]
    fn json_declaration_keeps_state_order() {
        let mut mappings = SpecValue::from_json_str(
            r#"{
                "states": {"zulu": 0, "alpha": 1, "mike": 2},
                "events": [],
                "edges": [
                    {"from": "zulu", "to": "alpha", "action": "advance",
                     "callbacks": {"in": false, "post": false}}
                ]
            }"#,
        )
        .unwrap()
        .as_map()
        .cloned()
        .unwrap();
        mappings.insert("on_successful_transition", Hook::noop());
        mappings.insert("on_failed_transition", Hook::noop());
        let spec: SpecValue = crate::spec::SpecMap::new().with("status", mappings).into();

        let registry = MachineRegistry::new();
        let mut scopes: Vec<ScopeDefinition> = Vec::new();
        registry
            .declare(&HostType::new("Order"), &spec, &mut scopes)
            .unwrap();

        let names: Vec<&str> = scopes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
        assert!(scopes.iter().all(|s| s.field == "status"));
    }

    #[test]
    fn engines_share_the_cached_model() {
        let registry = MachineRegistry::new();
        let mut scopes: Vec<ScopeDefinition> = Vec::new();
        let declared = registry
            .declare(&HostType::new("SampleClass"), &spec(), &mut scopes)
            .unwrap();

        let engine = registry.engine("SampleClass").unwrap();
        assert!(std::ptr::eq(engine.model(), declared.as_ref()));
        assert!(registry.engine("Other").is_none());
    }
}
