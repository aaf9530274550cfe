//! The declared state set and its integer encoding.
//!
//! States are stored durably as integers. The table keeps the declaration
//! order and an inverse index so stored codes can be mapped back to names.

use crate::spec::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateTableError {
    #[error("state table is empty")]
    Empty,

    #[error("state `{name}` reuses code {code}")]
    DuplicateCode { name: Symbol, code: i64 },

    #[error("state `{0}` is declared twice")]
    DuplicateName(Symbol),
}

/// Injective mapping from state names to their stored codes.
///
/// # Example
///
/// ```rust
/// use argonaut::core::StateTable;
///
/// let table = StateTable::new(vec![("abc".into(), 1), ("def".into(), 2)]).unwrap();
///
/// assert_eq!(table.code("def"), Some(2));
/// assert_eq!(table.name(1).map(|s| s.as_str()), Some("abc"));
/// assert_eq!(table.name(9), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Symbol, i64)>", into = "Vec<(Symbol, i64)>")]
pub struct StateTable {
    entries: Vec<(Symbol, i64)>,
    by_code: HashMap<i64, usize>,
}

impl StateTable {
    /// Build a table, rejecting empty input and repeated names or codes.
    pub fn new(entries: Vec<(Symbol, i64)>) -> Result<Self, StateTableError> {
        if entries.is_empty() {
            return Err(StateTableError::Empty);
        }

        let mut by_code = HashMap::with_capacity(entries.len());
        for (i, (name, code)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(StateTableError::DuplicateName(name.clone()));
            }
            if by_code.insert(*code, i).is_some() {
                return Err(StateTableError::DuplicateCode {
                    name: name.clone(),
                    code: *code,
                });
            }
        }

        Ok(Self { entries, by_code })
    }

    /// Stored code for a state name.
    pub fn code(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(sym, _)| sym == name)
            .map(|(_, code)| *code)
    }

    /// State name for a stored code; `None` for codes never declared.
    pub fn name(&self, code: i64) -> Option<&Symbol> {
        self.by_code.get(&code).map(|&i| &self.entries[i].0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.code(name).is_some()
    }

    /// States in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, i64)> {
        self.entries.iter().map(|(name, code)| (name, *code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<(Symbol, i64)>> for StateTable {
    type Error = StateTableError;

    fn try_from(entries: Vec<(Symbol, i64)>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<StateTable> for Vec<(Symbol, i64)> {
    fn from(table: StateTable) -> Self {
        table.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StateTable {
        StateTable::new(vec![
            (Symbol::new("abc"), 1),
            (Symbol::new("def"), 2),
            (Symbol::new("ghi"), 3),
        ])
        .unwrap()
    }

    #[test]
    fn codes_map_both_ways() {
        let table = table();
        for (name, code) in table.iter() {
            assert_eq!(table.code(name.as_str()), Some(code));
            assert_eq!(table.name(code), Some(name));
        }
    }

    #[test]
    fn keeps_declaration_order() {
        let table = table();
        let names: Vec<&str> = table.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["abc", "def", "ghi"]);
    }

    #[test]
    fn rejects_duplicate_codes() {
        let result = StateTable::new(vec![(Symbol::new("foo"), 1), (Symbol::new("bar"), 1)]);
        assert!(matches!(result, Err(StateTableError::DuplicateCode { code: 1, .. })));
    }

    #[test]
    fn rejects_duplicate_names_and_empty_input() {
        let result = StateTable::new(vec![(Symbol::new("foo"), 1), (Symbol::new("foo"), 2)]);
        assert!(matches!(result, Err(StateTableError::DuplicateName(_))));
        assert_eq!(StateTable::new(Vec::new()), Err(StateTableError::Empty));
    }

    #[test]
    fn unknown_code_has_no_name() {
        assert_eq!(table().name(42), None);
    }

    #[test]
    fn serde_round_trip_rebuilds_index() {
        let json = serde_json::to_string(&table()).unwrap();
        assert_eq!(json, r#"[["abc",1],["def",2],["ghi",3]]"#);

        let back: StateTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(2).map(Symbol::as_str), Some("def"));
    }

    #[test]
    fn deserializing_duplicate_codes_fails() {
        let result: Result<StateTable, _> = serde_json::from_str(r#"[["a",1],["b",1]]"#);
        assert!(result.is_err());
    }
}
