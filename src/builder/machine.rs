//! Builder for a complete machine declaration.

use crate::builder::edge::EdgeSpecBuilder;
use crate::spec::{Hook, SpecMap, SpecValue, Symbol};

/// Builder producing a `{ field: { states, events, edges, hooks } }`
/// declaration with a fluent API.
///
/// The builder only shapes the value; [`crate::validation::validate`] still
/// decides whether it is acceptable. Hooks default to no-ops.
pub struct MachineSpecBuilder {
    field: Symbol,
    states: SpecMap,
    events: Vec<SpecValue>,
    edges: Vec<SpecValue>,
    on_success: Hook,
    on_failure: Hook,
}

impl MachineSpecBuilder {
    /// Start a declaration stored in `field`.
    pub fn new(field: impl Into<Symbol>) -> Self {
        Self {
            field: field.into(),
            states: SpecMap::new(),
            events: Vec::new(),
            edges: Vec::new(),
            on_success: Hook::noop(),
            on_failure: Hook::noop(),
        }
    }

    pub fn state(mut self, name: impl Into<Symbol>, code: i64) -> Self {
        self.states.insert(name.into(), code);
        self
    }

    pub fn event(mut self, name: impl Into<Symbol>) -> Self {
        self.events.push(SpecValue::Symbol(name.into()));
        self
    }

    pub fn edge(mut self, edge: EdgeSpecBuilder) -> Self {
        self.edges.push(edge.build());
        self
    }

    pub fn on_successful_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<&Symbol>, Option<&Symbol>) + Send + Sync + 'static,
    {
        self.on_success = Hook::transition(hook);
        self
    }

    pub fn on_failed_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<&Symbol>, Option<&Symbol>) + Send + Sync + 'static,
    {
        self.on_failure = Hook::transition(hook);
        self
    }

    /// The inner mappings without the field layer.
    pub fn mappings(self) -> SpecMap {
        SpecMap::new()
            .with("states", self.states)
            .with("events", self.events)
            .with("edges", self.edges)
            .with("on_successful_transition", self.on_success)
            .with("on_failed_transition", self.on_failure)
    }

    pub fn build(self) -> SpecValue {
        let field = self.field.clone();
        SpecMap::new().with(field, self.mappings()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_field_layer_and_all_mappings() {
        let spec = MachineSpecBuilder::new("state")
            .state("abc", 1)
            .event("foo")
            .build();

        let outer = spec.as_map().unwrap();
        assert_eq!(outer.len(), 1);
        let inner = outer.get("state").and_then(SpecValue::as_map).unwrap();
        let keys: Vec<String> = inner.keys().map(ToString::to_string).collect();
        assert_eq!(
            keys,
            vec![
                "states",
                "events",
                "edges",
                "on_successful_transition",
                "on_failed_transition"
            ]
        );
        assert_eq!(inner.get("events"), Some(&SpecValue::symbols(["foo"])));
    }

    #[test]
    fn hooks_have_transition_signature() {
        let inner = MachineSpecBuilder::new("state")
            .on_failed_transition(|_, _| {})
            .mappings();

        for key in ["on_successful_transition", "on_failed_transition"] {
            let hook = inner.get(key).and_then(SpecValue::as_hook).unwrap();
            assert!(hook.accepts_transition());
        }
    }
}
