//! The immutable, validated state machine model.

use super::edge::{Edge, EventDef};
use super::state::StateTable;
use crate::spec::{Symbol, TransitionHook};
use std::collections::HashMap;
use std::fmt;

/// A validated state machine, shared read-only by every entity of the
/// declaring type.
///
/// Models are produced by [`crate::validation::validate`]; there is no way
/// to build a partially valid one. Lookups by action or event name are
/// indexed once at construction.
pub struct StateMachineModel {
    type_name: String,
    field: Symbol,
    states: StateTable,
    events: Vec<EventDef>,
    edges: Vec<Edge>,
    by_action: HashMap<Symbol, Vec<usize>>,
    by_event: HashMap<Symbol, Vec<usize>>,
    on_success: TransitionHook,
    on_failure: TransitionHook,
}

impl StateMachineModel {
    pub(crate) fn new(
        type_name: String,
        field: Symbol,
        states: StateTable,
        events: Vec<Symbol>,
        edges: Vec<Edge>,
        on_success: TransitionHook,
        on_failure: TransitionHook,
    ) -> Self {
        let mut by_action: HashMap<Symbol, Vec<usize>> = HashMap::new();
        for (i, edge) in edges.iter().enumerate() {
            by_action.entry(edge.action().clone()).or_default().push(i);
        }

        let mut defs: Vec<EventDef> = Vec::with_capacity(events.len());
        let mut by_event: HashMap<Symbol, Vec<usize>> = HashMap::new();
        for event in events {
            if by_event.contains_key(&event) {
                continue;
            }
            let indices = edges
                .iter()
                .enumerate()
                .filter(|(_, edge)| edge.handles_event(event.as_str()))
                .map(|(i, _)| i)
                .collect();
            by_event.insert(event.clone(), indices);
            defs.push(EventDef::new(event));
        }

        Self {
            type_name,
            field,
            states,
            events: defs,
            edges,
            by_action,
            by_event,
            on_success,
            on_failure,
        }
    }

    /// Name of the host type that declared this machine.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The host field that stores the state code.
    pub fn field(&self) -> &Symbol {
        &self.field
    }

    pub fn states(&self) -> &StateTable {
        &self.states
    }

    pub fn events(&self) -> &[EventDef] {
        &self.events
    }

    pub fn event(&self, name: &str) -> Option<&EventDef> {
        self.events.iter().find(|e| e.name() == name)
    }

    /// Edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_action(&self, name: &str) -> bool {
        self.by_action.contains_key(name)
    }

    pub fn is_event(&self, name: &str) -> bool {
        self.by_event.contains_key(name)
    }

    /// Edges carrying `action`, or `None` if no edge declares it.
    pub fn edges_for_action(&self, action: &str) -> Option<impl Iterator<Item = &Edge> + '_> {
        let indices = self.by_action.get(action)?;
        Some(indices.iter().map(move |&i| &self.edges[i]))
    }

    /// Edges listing `event` in their `on_events`, in declaration order, or
    /// `None` if the event was never declared. A declared event with no
    /// edges yields an empty iterator.
    pub fn edges_for_event(&self, event: &str) -> Option<impl Iterator<Item = &Edge> + '_> {
        let indices = self.by_event.get(event)?;
        Some(indices.iter().map(move |&i| &self.edges[i]))
    }

    pub fn notify_success(&self, from: Option<&Symbol>, to: Option<&Symbol>) {
        (self.on_success)(from, to)
    }

    pub fn notify_failure(&self, from: Option<&Symbol>, to: Option<&Symbol>) {
        (self.on_failure)(from, to)
    }
}

impl fmt::Debug for StateMachineModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachineModel")
            .field("type_name", &self.type_name)
            .field("field", &self.field)
            .field("states", &self.states)
            .field("events", &self.events)
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}
