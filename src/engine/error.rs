//! Transition errors.

use crate::spec::Symbol;
use thiserror::Error;

/// No edge allows the requested trigger from the entity's current state.
///
/// This is an expected, recoverable outcome (for example a user acting on a
/// stale view) rather than a programming error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTransitionError {
    #[error("Invalid state transition")]
    Action {
        action: Symbol,
        current: Option<Symbol>,
    },

    #[error("No valid transitions")]
    Event {
        event: Symbol,
        current: Option<Symbol>,
    },
}

impl InvalidTransitionError {
    /// The state the entity was in when the request was rejected.
    pub fn current(&self) -> Option<&Symbol> {
        match self {
            Self::Action { current, .. } | Self::Event { current, .. } => current.as_ref(),
        }
    }
}

/// Errors returned by [`TransitionEngine`](super::TransitionEngine)
/// operations.
#[derive(Debug, Error)]
pub enum TransitionError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Invalid(#[from] InvalidTransitionError),

    #[error("`{0}` is not a declared action")]
    UnknownAction(String),

    #[error("`{0}` is not a declared event")]
    UnknownEvent(String),

    /// Failure reported by the host adapter, passed through unchanged.
    #[error(transparent)]
    Host(E),
}

impl<E> TransitionError<E>
where
    E: std::error::Error + 'static,
{
    pub fn as_invalid(&self) -> Option<&InvalidTransitionError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_invalid_transition(&self) -> bool {
        self.as_invalid().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct LockTimeout;

    impl fmt::Display for LockTimeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("lock wait timeout")
        }
    }

    impl std::error::Error for LockTimeout {}

    #[test]
    fn invalid_messages_are_fixed() {
        let action = InvalidTransitionError::Action {
            action: Symbol::new("move"),
            current: Some(Symbol::new("def")),
        };
        let event = InvalidTransitionError::Event {
            event: Symbol::new("bar"),
            current: None,
        };

        assert_eq!(action.to_string(), "Invalid state transition");
        assert_eq!(event.to_string(), "No valid transitions");
        assert_eq!(action.current(), Some(&Symbol::new("def")));
        assert_eq!(event.current(), None);
    }

    #[test]
    fn host_errors_are_transparent() {
        let err: TransitionError<LockTimeout> = TransitionError::Host(LockTimeout);
        assert_eq!(err.to_string(), "lock wait timeout");
        assert!(!err.is_invalid_transition());
    }

    #[test]
    fn invalid_converts_into_transition_error() {
        let err: TransitionError<LockTimeout> = InvalidTransitionError::Event {
            event: Symbol::new("foo"),
            current: None,
        }
        .into();
        assert_eq!(err.to_string(), "No valid transitions");
        assert!(err.is_invalid_transition());
    }
}
