//! Non-fatal findings about a validated model.
//!
//! Unlike [`validate`](super::validate), linting does not stop at the first
//! problem: every finding is accumulated with Stillwater's `Validation` so a
//! declarer sees the whole list at once. Findings never reject a model.

use super::host::HostType;
use crate::core::StateMachineModel;
use crate::spec::Symbol;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A suspicious but legal property of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelWarning {
    #[error("event `{event}` is not attached to any edge; triggering it always fails")]
    EventWithoutEdges { event: Symbol },

    #[error("state `{state}` has no incoming or outgoing edges")]
    IsolatedState { state: Symbol },

    #[error("`{type_name}#{callback}` is required by an edge callback flag but is not defined")]
    MissingCallback { callback: String, type_name: String },
}

/// Collect every warning for `model` declared on `host`.
///
/// # Example
///
/// ```rust
/// use argonaut::builder::{EdgeSpecBuilder, MachineSpecBuilder};
/// use argonaut::validation::{lint, validate, HostType, ModelWarning};
/// use stillwater::validation::Validation;
///
/// let spec = MachineSpecBuilder::new("state")
///     .state("abc", 1)
///     .state("def", 2)
///     .event("foo")
///     .edge(EdgeSpecBuilder::new("abc", "def", "move"))
///     .build();
/// let host = HostType::new("Order");
/// let model = validate(&host, &spec).unwrap();
///
/// match lint(&model, &host) {
///     Validation::Failure(warnings) => {
///         assert!(warnings
///             .iter()
///             .any(|w| matches!(w, ModelWarning::EventWithoutEdges { .. })));
///     }
///     Validation::Success(_) => panic!("expected a warning"),
/// }
/// ```
pub fn lint(
    model: &StateMachineModel,
    host: &HostType,
) -> Validation<(), NonEmptyVec<ModelWarning>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ModelWarning>>> = Vec::new();

    for event in model.events() {
        let attached = model
            .edges_for_event(event.name().as_str())
            .is_some_and(|mut edges| edges.next().is_some());
        checks.push(if attached {
            Validation::success(())
        } else {
            Validation::fail(ModelWarning::EventWithoutEdges {
                event: event.name().clone(),
            })
        });
    }

    for (state, _) in model.states().iter() {
        let touched = model
            .edges()
            .iter()
            .any(|edge| edge.from() == state || edge.to() == state);
        checks.push(if touched {
            Validation::success(())
        } else {
            Validation::fail(ModelWarning::IsolatedState {
                state: state.clone(),
            })
        });
    }

    for callback in required_callbacks(model) {
        checks.push(if host.has_instance_operation(&callback) {
            Validation::success(())
        } else {
            Validation::fail(ModelWarning::MissingCallback {
                callback,
                type_name: model.type_name().to_string(),
            })
        });
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Callback names the engine may invoke, given each edge's flags.
fn required_callbacks(model: &StateMachineModel) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for edge in model.edges() {
        let flags = edge.callbacks();
        let events = edge
            .on_events()
            .iter()
            .filter_map(|name| model.event(name.as_str()));

        if flags.pre {
            names.insert(edge.pre_callback().to_string());
        }
        if flags.post {
            names.insert(edge.post_callback().to_string());
        }
        for event in events {
            if flags.pre {
                names.insert(event.pre_callback().to_string());
            }
            if flags.post {
                names.insert(event.post_callback().to_string());
            }
        }
    }
    names
}
