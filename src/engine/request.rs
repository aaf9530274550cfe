//! Per-call transition requests.

use super::error::InvalidTransitionError;
use crate::spec::Symbol;
use std::fmt;

/// Whether a request names an edge's action or an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Action,
    Event,
}

/// A request to move an entity along one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub trigger: Symbol,
    pub kind: TriggerKind,
}

impl TransitionRequest {
    pub fn action(name: impl Into<Symbol>) -> Self {
        Self {
            trigger: name.into(),
            kind: TriggerKind::Action,
        }
    }

    pub fn event(name: impl Into<Symbol>) -> Self {
        Self {
            trigger: name.into(),
            kind: TriggerKind::Event,
        }
    }

    /// The rejection reported when no edge matches `current`.
    pub(crate) fn rejection(&self, current: Option<Symbol>) -> InvalidTransitionError {
        match self.kind {
            TriggerKind::Action => InvalidTransitionError::Action {
                action: self.trigger.clone(),
                current,
            },
            TriggerKind::Event => InvalidTransitionError::Event {
                event: self.trigger.clone(),
                current,
            },
        }
    }
}

impl fmt::Display for TransitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TriggerKind::Action => write!(f, "{}!", self.trigger),
            TriggerKind::Event => write!(f, "{} (event)", self.trigger),
        }
    }
}
