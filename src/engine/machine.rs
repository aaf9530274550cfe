//! Executes transitions against host entities.

use super::error::TransitionError;
use super::host::HostAdapter;
use super::request::{TransitionRequest, TriggerKind};
use crate::core::{Edge, EventDef, StateMachineModel};
use crate::spec::Symbol;
use std::sync::Arc;
use tracing::debug;

/// Resolves and performs transitions for entities of one declared type.
///
/// Cloning is cheap; every clone shares the same model.
#[derive(Clone, Debug)]
pub struct TransitionEngine {
    model: Arc<StateMachineModel>,
}

impl TransitionEngine {
    pub fn new(model: Arc<StateMachineModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &StateMachineModel {
        &self.model
    }

    /// Current state of `entity`. Codes that map to no declared state,
    /// including an absent code, read as `None`.
    pub fn read_state<H: HostAdapter>(&self, entity: &H) -> Result<Option<Symbol>, H::Error> {
        let code = entity.read_raw_state()?;
        Ok(code.and_then(|code| self.model.states().name(code)).cloned())
    }

    /// True when some edge with `action` leaves the entity's current state.
    /// Never writes.
    pub fn can<H: HostAdapter>(
        &self,
        entity: &H,
        action: &str,
    ) -> Result<bool, TransitionError<H::Error>> {
        if !self.model.is_action(action) {
            return Err(TransitionError::UnknownAction(action.to_string()));
        }
        let current = self.read_state(entity).map_err(TransitionError::Host)?;
        Ok(self
            .model
            .edges_for_action(action)
            .is_some_and(|mut edges| edges.any(|edge| edge.leaves(current.as_ref()))))
    }

    /// Take the edge named `action` from the entity's current state.
    pub fn perform_action<H: HostAdapter>(
        &self,
        entity: &H,
        action: &str,
    ) -> Result<(), TransitionError<H::Error>> {
        self.perform(entity, &TransitionRequest::action(action))
    }

    /// Take the first edge, in declaration order, that lists `event` and
    /// leaves the entity's current state.
    pub fn perform_event<H: HostAdapter>(
        &self,
        entity: &H,
        event: &str,
    ) -> Result<(), TransitionError<H::Error>> {
        self.perform(entity, &TransitionRequest::event(event))
    }

    /// Resolve and execute `request` under the entity's exclusive lock.
    ///
    /// Edge selection happens inside the lock against a fresh read of the
    /// stored state, so concurrent requests on one entity are serialized.
    /// Any error inside the lock is returned from the lock body, and the
    /// host rolls back what was already written.
    pub fn perform<H: HostAdapter>(
        &self,
        entity: &H,
        request: &TransitionRequest,
    ) -> Result<(), TransitionError<H::Error>> {
        let candidates = self.candidates::<H::Error>(request)?;

        match entity.with_exclusive_lock(|| self.transition_locked(entity, request, &candidates)) {
            Ok(outcome) => outcome,
            Err(lock_error) => Err(TransitionError::Host(lock_error)),
        }
    }

    fn candidates<E>(&self, request: &TransitionRequest) -> Result<Vec<&Edge>, TransitionError<E>>
    where
        E: std::error::Error + 'static,
    {
        let name = request.trigger.as_str();
        match request.kind {
            TriggerKind::Action => self
                .model
                .edges_for_action(name)
                .map(Iterator::collect)
                .ok_or_else(|| TransitionError::UnknownAction(name.to_string())),
            TriggerKind::Event => self
                .model
                .edges_for_event(name)
                .map(Iterator::collect)
                .ok_or_else(|| TransitionError::UnknownEvent(name.to_string())),
        }
    }

    fn transition_locked<H: HostAdapter>(
        &self,
        entity: &H,
        request: &TransitionRequest,
        candidates: &[&Edge],
    ) -> Result<(), TransitionError<H::Error>> {
        let current = self.read_state(entity).map_err(TransitionError::Host)?;

        let Some(edge) = candidates
            .iter()
            .copied()
            .find(|edge| edge.leaves(current.as_ref()))
        else {
            debug!(
                type_name = self.model.type_name(),
                request = %request,
                current = ?current,
                "transition rejected"
            );
            self.model.notify_failure(current.as_ref(), current.as_ref());
            return Err(request.rejection(current).into());
        };

        let event = match request.kind {
            TriggerKind::Event => self.model.event(request.trigger.as_str()),
            TriggerKind::Action => None,
        };

        debug!(
            type_name = self.model.type_name(),
            request = %request,
            from = %edge.from(),
            to = %edge.to(),
            "taking edge"
        );

        let flags = edge.callbacks();
        if flags.pre {
            self.run_callbacks(entity, edge.pre_callback(), event.map(EventDef::pre_callback))?;
        }

        entity
            .write_raw_state(edge.to_code())
            .map_err(TransitionError::Host)?;
        entity.mark_modified().map_err(TransitionError::Host)?;

        if flags.post {
            self.run_callbacks(entity, edge.post_callback(), event.map(EventDef::post_callback))?;
        }

        self.model.notify_success(Some(edge.from()), Some(edge.to()));
        debug!(
            type_name = self.model.type_name(),
            from = %edge.from(),
            to = %edge.to(),
            "transition committed"
        );
        Ok(())
    }

    fn run_callbacks<H: HostAdapter>(
        &self,
        entity: &H,
        action_callback: &str,
        event_callback: Option<&str>,
    ) -> Result<(), TransitionError<H::Error>> {
        entity
            .invoke_callback(action_callback)
            .map_err(TransitionError::Host)?;
        if let Some(name) = event_callback {
            entity.invoke_callback(name).map_err(TransitionError::Host)?;
        }
        Ok(())
    }
}
