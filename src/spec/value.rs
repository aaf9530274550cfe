//! Dynamically typed declaration values.

use super::hook::Hook;
use super::symbol::Symbol;
use std::fmt;

/// A node in a raw state machine declaration.
///
/// Declarations are deliberately untyped so that every malformed shape the
/// validator reports (non-symbol keys, float codes, missing mappings) can be
/// expressed and rejected with a precise message.
#[derive(Clone, Debug)]
pub enum SpecValue {
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    Symbol(Symbol),
    List(Vec<SpecValue>),
    Map(SpecMap),
    Hook(Hook),
}

impl SpecValue {
    /// Shorthand for a symbol value.
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    /// A list of symbol values.
    pub fn symbols<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(names.into_iter().map(Self::sym).collect())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[SpecValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&SpecMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_hook(&self) -> Option<&Hook> {
        match self {
            Self::Hook(hook) => Some(hook),
            _ => None,
        }
    }

    /// Every element is a symbol. `None` when the value is not a list.
    pub(crate) fn as_symbol_list(&self) -> Option<Vec<&Symbol>> {
        self.as_list()?.iter().map(SpecValue::as_symbol).collect()
    }
}

impl PartialEq for SpecValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Hook(a), Self::Hook(b)) => a.same_callable(b),
            _ => false,
        }
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Symbol(sym) => write!(f, "{sym}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => write!(f, "{map}"),
            Self::Hook(hook) => write!(f, "lambda({})", hook.params().join(", ")),
        }
    }
}

impl From<bool> for SpecValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for SpecValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for SpecValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for SpecValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// String slices become symbols; use [`SpecValue::Str`] for string values.
impl From<&str> for SpecValue {
    fn from(name: &str) -> Self {
        Self::sym(name)
    }
}

impl From<Symbol> for SpecValue {
    fn from(sym: Symbol) -> Self {
        Self::Symbol(sym)
    }
}

impl From<Vec<SpecValue>> for SpecValue {
    fn from(items: Vec<SpecValue>) -> Self {
        Self::List(items)
    }
}

impl From<SpecMap> for SpecValue {
    fn from(map: SpecMap) -> Self {
        Self::Map(map)
    }
}

impl From<Hook> for SpecValue {
    fn from(hook: Hook) -> Self {
        Self::Hook(hook)
    }
}

/// Insertion-ordered mapping with arbitrary keys.
///
/// Inserting an existing key replaces its value in place, keeping the
/// original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpecMap {
    entries: Vec<(SpecValue, SpecValue)>,
}

impl SpecMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<SpecValue>, value: impl Into<SpecValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<SpecValue>, value: impl Into<SpecValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up the value stored under the symbol `key`.
    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_symbol().is_some_and(|sym| sym == key))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SpecValue, &SpecValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &SpecValue> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// True when every key is a symbol drawn from `allowed`.
    pub(crate) fn keys_within(&self, allowed: &[&str]) -> bool {
        self.keys().all(|k| {
            k.as_symbol()
                .is_some_and(|sym| allowed.contains(&sym.as_str()))
        })
    }
}

impl<K, V> FromIterator<(K, V)> for SpecMap
where
    K: Into<SpecValue>,
    V: Into<SpecValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = SpecMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl fmt::Display for SpecMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let map = SpecMap::new().with("a", 1).with("b", 2).with("a", 3);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&SpecValue::Integer(3)));
        let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn get_only_matches_symbol_keys() {
        let map = SpecMap::new().with(SpecValue::Str("a".into()), 1);
        assert!(map.get("a").is_none());
    }

    #[test]
    fn keys_within_rejects_foreign_keys() {
        let map = SpecMap::new().with("from", 1).with("to", 2);
        assert!(map.keys_within(&["from", "to", "action"]));

        let map = map.with(7, 1);
        assert!(!map.keys_within(&["from", "to", "action"]));
    }

    #[test]
    fn display_renders_symbols_bare() {
        assert_eq!(SpecValue::sym("bar").to_string(), "bar");
        assert_eq!(SpecValue::symbols(["a", "b"]).to_string(), "[a, b]");
        assert_eq!(SpecValue::List(vec![1.into(), SpecValue::Nil]).to_string(), "[1, ]");
        assert_eq!(SpecMap::new().with("in", true).to_string(), "{in: true}");
    }

    #[test]
    fn symbol_list_requires_all_symbols() {
        assert_eq!(SpecValue::symbols(["a"]).as_symbol_list().map(|l| l.len()), Some(1));
        assert!(SpecValue::List(vec!["a".into(), 1.into()])
            .as_symbol_list()
            .is_none());
        assert!(SpecValue::sym("a").as_symbol_list().is_none());
    }

    #[test]
    fn hooks_compare_by_identity() {
        let hook = Hook::noop();
        assert_eq!(SpecValue::Hook(hook.clone()), SpecValue::Hook(hook));
        assert_ne!(SpecValue::Hook(Hook::noop()), SpecValue::Hook(Hook::noop()));
    }
}
