//! Declaration errors.

use crate::spec::Symbol;
use thiserror::Error;

/// Reasons a state machine declaration is rejected.
///
/// Every variant renders to a stable message; callers that only care about
/// the message can use `to_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("state_machine() has to be called on a Hash")]
    NotAMapping,

    #[error("state_machine() has to specify a field and the mappings")]
    MissingFieldMapping,

    #[error("state_machine() should have (only) the following mappings: states, events, edges, on_successful_transition, on_failed_transition")]
    UnexpectedMappings,

    #[error("`states` does not specify any states")]
    NoStates,

    #[error("`states` must be a mapping of Symbols to unique Integers")]
    MalformedStates,

    #[error("`{state}` is an invalid state name. `{type_name}.{state}` method already exists")]
    StateClashesTypeOperation { state: Symbol, type_name: String },

    #[error("`{state}` is an invalid state name. `{type_name}#{state}?` method already exists")]
    StateClashesPredicate { state: Symbol, type_name: String },

    #[error("`events` should be an Array of Symbols")]
    MalformedEvents,

    #[error("`{event}` is not a valid event name. `{type_name}#{event}` method already exists")]
    EventClashesOperation { event: Symbol, type_name: String },

    #[error("`edges` should be an Array of Hashes, with keys: from, to, action, callbacks{{in: true/false, post: true/false}}, on_events (optional)")]
    MalformedEdges,

    #[error("`edges[{index}].from` is not a valid state")]
    InvalidEdgeSource { index: usize },

    #[error("`edges[{index}].to` is not a valid state")]
    InvalidEdgeTarget { index: usize },

    #[error("`edges[{index}].action` is not a Symbol")]
    ActionNotSymbol { index: usize },

    #[error("`{action}` is an invalid action name. `{type_name}#{action}!` method already exists")]
    ActionClashesOperation { action: Symbol, type_name: String },

    #[error("`{action}` is an invalid action name. `{type_name}#can_{action}?` method already exists")]
    ActionClashesPredicate { action: Symbol, type_name: String },

    #[error("`edges[{index}].callbacks` must be {{in: true/false, post: true/false}}")]
    MalformedCallbacks { index: usize },

    #[error("`{value}` (`edges[{index}].on_events`) is not a valid list of events")]
    MalformedEdgeEvents { value: String, index: usize },

    #[error("`{value}` (`edges[{index}].on_events[{position}]`) is not a registered event")]
    UnregisteredEvent {
        value: String,
        index: usize,
        position: usize,
    },

    #[error("`edges[{index}]` is a duplicate edge")]
    DuplicateEdge { index: usize },

    #[error("`on_successful_transition` must be a lambda of signature `(from:, to:)`")]
    MalformedSuccessHook,

    #[error("`on_failed_transition` must be a lambda of signature `(from:, to:)`")]
    MalformedFailureHook,

    #[error("state_machine() has already been declared for `{type_name}`")]
    AlreadyDeclared { type_name: String },
}
