//! Declaration validation.
//!
//! Checks run in a fixed order and stop at the first violation, so a
//! declaration with several problems always reports the same one.

use super::error::ValidationError;
use super::host::HostType;
use super::names::NameClashChecker;
use crate::core::{CallbackFlags, Edge, StateMachineModel, StateTable};
use crate::spec::{Hook, SpecMap, SpecValue, Symbol};
use std::collections::HashSet;

const MAPPINGS: [&str; 5] = [
    "states",
    "events",
    "edges",
    "on_successful_transition",
    "on_failed_transition",
];

const EDGE_KEYS: [&str; 5] = ["from", "to", "action", "callbacks", "on_events"];
const REQUIRED_EDGE_KEYS: [&str; 4] = ["from", "to", "action", "callbacks"];

/// Validate a declaration for `host`, producing the model or the first
/// violation found.
///
/// # Example
///
/// ```rust
/// use argonaut::builder::{EdgeSpecBuilder, MachineSpecBuilder};
/// use argonaut::validation::{validate, HostType};
///
/// let spec = MachineSpecBuilder::new("state")
///     .state("abc", 1)
///     .state("def", 2)
///     .edge(EdgeSpecBuilder::new("abc", "def", "move"))
///     .build();
///
/// let model = validate(&HostType::new("Order"), &spec).unwrap();
/// assert_eq!(model.states().code("def"), Some(2));
///
/// let clashing = HostType::new("Order").with_instance_operation("move!");
/// let err = validate(&clashing, &spec).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "`move` is an invalid action name. `Order#move!` method already exists"
/// );
/// ```
pub fn validate(host: &HostType, spec: &SpecValue) -> Result<StateMachineModel, ValidationError> {
    Validator::new(host).run(spec)
}

struct Validator<'a> {
    host: &'a HostType,
    names: NameClashChecker<'a>,
}

impl<'a> Validator<'a> {
    fn new(host: &'a HostType) -> Self {
        Self {
            host,
            names: NameClashChecker::new(host),
        }
    }

    fn run(mut self, spec: &SpecValue) -> Result<StateMachineModel, ValidationError> {
        let (field, mappings) = split_field(spec)?;

        if mappings.len() != MAPPINGS.len() || !mappings.keys_within(&MAPPINGS) {
            return Err(ValidationError::UnexpectedMappings);
        }

        let states = self.states(mappings.get("states"))?;
        let events = self.events(mappings.get("events"))?;
        let edges = self.edges(mappings.get("edges"), &states, &events)?;
        let on_success = transition_hook(mappings.get("on_successful_transition"))
            .ok_or(ValidationError::MalformedSuccessHook)?;
        let on_failure = transition_hook(mappings.get("on_failed_transition"))
            .ok_or(ValidationError::MalformedFailureHook)?;

        Ok(StateMachineModel::new(
            self.host.name().to_string(),
            field.clone(),
            states,
            events,
            edges,
            on_success.function(),
            on_failure.function(),
        ))
    }

    fn states(&mut self, value: Option<&SpecValue>) -> Result<StateTable, ValidationError> {
        let map = value
            .and_then(SpecValue::as_map)
            .filter(|map| !map.is_empty())
            .ok_or(ValidationError::NoStates)?;

        let entries = map
            .iter()
            .map(|(name, code)| match (name.as_symbol(), code.as_integer()) {
                (Some(name), Some(code)) if code >= 0 => Some((name.clone(), code)),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(ValidationError::MalformedStates)?;
        let table = StateTable::new(entries).map_err(|_| ValidationError::MalformedStates)?;

        for (name, _) in table.iter() {
            self.names.claim_state(name)?;
        }
        Ok(table)
    }

    fn events(&mut self, value: Option<&SpecValue>) -> Result<Vec<Symbol>, ValidationError> {
        let events: Vec<Symbol> = value
            .and_then(SpecValue::as_symbol_list)
            .ok_or(ValidationError::MalformedEvents)?
            .into_iter()
            .cloned()
            .collect();

        for event in &events {
            self.names.claim_event(event)?;
        }
        Ok(events)
    }

    fn edges(
        &mut self,
        value: Option<&SpecValue>,
        states: &StateTable,
        events: &[Symbol],
    ) -> Result<Vec<Edge>, ValidationError> {
        let raw = edge_maps(value).ok_or(ValidationError::MalformedEdges)?;

        let mut seen: HashSet<(&Symbol, &Symbol)> = HashSet::new();
        let mut edges = Vec::with_capacity(raw.len());

        for (index, edge) in raw.into_iter().enumerate() {
            let from = edge
                .get("from")
                .and_then(SpecValue::as_symbol)
                .filter(|s| states.contains(s.as_str()))
                .ok_or(ValidationError::InvalidEdgeSource { index })?;
            let (to, to_code) = edge
                .get("to")
                .and_then(SpecValue::as_symbol)
                .and_then(|s| states.code(s.as_str()).map(|code| (s, code)))
                .ok_or(ValidationError::InvalidEdgeTarget { index })?;
            let action = edge
                .get("action")
                .and_then(SpecValue::as_symbol)
                .ok_or(ValidationError::ActionNotSymbol { index })?;
            self.names.claim_action(action)?;

            let callbacks = callback_flags(edge.get("callbacks"))
                .ok_or(ValidationError::MalformedCallbacks { index })?;
            let on_events = edge_events(edge.get("on_events"), index, events)?;

            if !seen.insert((from, to)) {
                return Err(ValidationError::DuplicateEdge { index });
            }

            edges.push(Edge::new(
                from.clone(),
                to.clone(),
                to_code,
                action.clone(),
                callbacks,
                on_events,
            ));
        }

        Ok(edges)
    }
}

/// Unwrap the outer `{ field: { ...mappings } }` layer.
fn split_field(spec: &SpecValue) -> Result<(&Symbol, &SpecMap), ValidationError> {
    let outer = spec.as_map().ok_or(ValidationError::NotAMapping)?;
    let mut entries = outer.iter();

    match (entries.next(), entries.next()) {
        (Some((field, SpecValue::Map(mappings))), None) => field
            .as_symbol()
            .map(|field| (field, mappings))
            .ok_or(ValidationError::MissingFieldMapping),
        _ => Err(ValidationError::MissingFieldMapping),
    }
}

/// Every element must be a map with the known edge keys, including the
/// required ones.
fn edge_maps(value: Option<&SpecValue>) -> Option<Vec<&SpecMap>> {
    value?
        .as_list()?
        .iter()
        .map(|item| {
            item.as_map().filter(|map| {
                map.keys_within(&EDGE_KEYS)
                    && REQUIRED_EDGE_KEYS.iter().all(|key| map.contains_key(key))
            })
        })
        .collect()
}

fn callback_flags(value: Option<&SpecValue>) -> Option<CallbackFlags> {
    let map = value?.as_map()?;
    if map.len() != 2 {
        return None;
    }
    Some(CallbackFlags {
        pre: map.get("in")?.as_bool()?,
        post: map.get("post")?.as_bool()?,
    })
}

fn edge_events(
    value: Option<&SpecValue>,
    index: usize,
    declared: &[Symbol],
) -> Result<Vec<Symbol>, ValidationError> {
    let value = match value {
        None | Some(SpecValue::Nil) => return Ok(Vec::new()),
        Some(value) => value,
    };

    let listed = value
        .as_symbol_list()
        .ok_or_else(|| ValidationError::MalformedEdgeEvents {
            value: value.to_string(),
            index,
        })?;

    let mut on_events: Vec<Symbol> = Vec::with_capacity(listed.len());
    for (position, event) in listed.into_iter().enumerate() {
        if !declared.contains(event) {
            return Err(ValidationError::UnregisteredEvent {
                value: event.to_string(),
                index,
                position,
            });
        }
        if !on_events.contains(event) {
            on_events.push(event.clone());
        }
    }
    Ok(on_events)
}

fn transition_hook(value: Option<&SpecValue>) -> Option<&Hook> {
    value?.as_hook().filter(|hook| hook.accepts_transition())
}
