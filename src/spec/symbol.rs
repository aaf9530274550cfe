//! Symbolic identifiers used for state, event and action names.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// An interned-by-value symbolic name such as `abc` or `move`.
///
/// Symbols compare and hash like the underlying string, so maps keyed by
/// `Symbol` can be queried with a plain `&str`.
///
/// # Example
///
/// ```rust
/// use argonaut::spec::Symbol;
/// use std::collections::HashMap;
///
/// let mut codes = HashMap::new();
/// codes.insert(Symbol::new("abc"), 1);
///
/// assert_eq!(codes.get("abc"), Some(&1));
/// assert_eq!(Symbol::new("abc").to_string(), "abc");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the generated instance operation with a prefix, e.g. `on_move`.
    pub(crate) fn prefixed(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.0)
    }

    /// Name of the generated instance operation with a suffix, e.g. `move!`.
    pub(crate) fn suffixed(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn symbol_compares_with_str() {
        let sym = Symbol::new("move");
        assert_eq!(sym, "move");
        assert_ne!(sym, "walk");
    }

    #[test]
    fn symbol_lookup_by_str() {
        let set: HashSet<Symbol> = ["abc", "def"].into_iter().map(Symbol::from).collect();
        assert!(set.contains("abc"));
        assert!(!set.contains("ghi"));
    }

    #[test]
    fn generated_operation_names() {
        let sym = Symbol::new("move");
        assert_eq!(sym.prefixed("on_"), "on_move");
        assert_eq!(sym.prefixed("can_").as_str(), "can_move");
        assert_eq!(sym.suffixed("!"), "move!");
    }

    #[test]
    fn symbol_serializes_as_plain_string() {
        let json = serde_json::to_string(&Symbol::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Symbol::new("abc"));
    }
}
