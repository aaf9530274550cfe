//! Builder for a single edge declaration.

use crate::spec::{SpecMap, SpecValue, Symbol};

/// Builder for an entry of the `edges` list.
///
/// Callbacks default to `{in: false, post: false}` and `on_events` is left
/// out unless set.
#[derive(Clone, Debug)]
pub struct EdgeSpecBuilder {
    from: Symbol,
    to: Symbol,
    action: Symbol,
    pre: bool,
    post: bool,
    on_events: Option<Vec<Symbol>>,
}

impl EdgeSpecBuilder {
    pub fn new(from: impl Into<Symbol>, to: impl Into<Symbol>, action: impl Into<Symbol>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            action: action.into(),
            pre: false,
            post: false,
            on_events: None,
        }
    }

    /// Set the `in` and `post` callback flags.
    pub fn callbacks(mut self, pre: bool, post: bool) -> Self {
        self.pre = pre;
        self.post = post;
        self
    }

    /// Events that may trigger this edge.
    pub fn on_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.on_events = Some(events.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> SpecValue {
        let callbacks = SpecMap::new()
            .with("in", self.pre)
            .with("post", self.post);
        let mut edge = SpecMap::new()
            .with("from", self.from)
            .with("to", self.to)
            .with("action", self.action)
            .with("callbacks", callbacks);
        if let Some(events) = self.on_events {
            edge.insert(
                "on_events",
                events.into_iter().map(SpecValue::Symbol).collect::<Vec<_>>(),
            );
        }
        edge.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_callbacks() {
        let edge = EdgeSpecBuilder::new("abc", "def", "move").build();
        let map = edge.as_map().unwrap();

        assert_eq!(map.get("from"), Some(&SpecValue::sym("abc")));
        assert_eq!(map.get("action"), Some(&SpecValue::sym("move")));
        assert_eq!(
            map.get("callbacks").map(ToString::to_string),
            Some("{in: false, post: false}".to_string())
        );
        assert!(!map.contains_key("on_events"));
    }

    #[test]
    fn on_events_are_symbols() {
        let edge = EdgeSpecBuilder::new("abc", "def", "move")
            .on_events(["foo", "bar"])
            .build();

        assert_eq!(
            edge.as_map().and_then(|m| m.get("on_events")),
            Some(&SpecValue::symbols(["foo", "bar"]))
        );
    }
}
