//! Edges (allowed transitions) and declared events.

use crate::spec::Symbol;

/// The `callbacks: {in:, post:}` flags of an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallbackFlags {
    /// Run `on_<action>` (and `on_<event>`) before the state is written.
    pub pre: bool,
    /// Run `after_<action>` (and `after_<event>`) after the state is written.
    pub post: bool,
}

/// A single allowed transition between two declared states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    from: Symbol,
    to: Symbol,
    to_code: i64,
    action: Symbol,
    callbacks: CallbackFlags,
    on_events: Vec<Symbol>,
    pre_callback: String,
    post_callback: String,
}

impl Edge {
    pub(crate) fn new(
        from: Symbol,
        to: Symbol,
        to_code: i64,
        action: Symbol,
        callbacks: CallbackFlags,
        on_events: Vec<Symbol>,
    ) -> Self {
        let pre_callback = action.prefixed("on_");
        let post_callback = action.prefixed("after_");
        Self {
            from,
            to,
            to_code,
            action,
            callbacks,
            on_events,
            pre_callback,
            post_callback,
        }
    }

    pub fn from(&self) -> &Symbol {
        &self.from
    }

    pub fn to(&self) -> &Symbol {
        &self.to
    }

    /// Stored code of the target state.
    pub fn to_code(&self) -> i64 {
        self.to_code
    }

    pub fn action(&self) -> &Symbol {
        &self.action
    }

    pub fn callbacks(&self) -> CallbackFlags {
        self.callbacks
    }

    pub fn on_events(&self) -> &[Symbol] {
        &self.on_events
    }

    /// `on_<action>`
    pub fn pre_callback(&self) -> &str {
        &self.pre_callback
    }

    /// `after_<action>`
    pub fn post_callback(&self) -> &str {
        &self.post_callback
    }

    /// True when an entity in `current` may take this edge.
    pub fn leaves(&self, current: Option<&Symbol>) -> bool {
        current == Some(&self.from)
    }

    pub fn handles_event(&self, event: &str) -> bool {
        self.on_events.iter().any(|e| e == event)
    }
}

/// A declared event and the callback names it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDef {
    name: Symbol,
    pre_callback: String,
    post_callback: String,
}

impl EventDef {
    pub(crate) fn new(name: Symbol) -> Self {
        let pre_callback = name.prefixed("on_");
        let post_callback = name.prefixed("after_");
        Self {
            name,
            pre_callback,
            post_callback,
        }
    }

    pub fn name(&self) -> &Symbol {
        &self.name
    }

    /// `on_<event>`
    pub fn pre_callback(&self) -> &str {
        &self.pre_callback
    }

    /// `after_<event>`
    pub fn post_callback(&self) -> &str {
        &self.post_callback
    }
}
