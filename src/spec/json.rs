//! Loading declarations from JSON documents.

use super::value::{SpecMap, SpecValue};
use serde_json::Value;

impl SpecValue {
    /// Convert a JSON document into a declaration value.
    ///
    /// Strings and object keys become symbols, mirroring how declarations
    /// are written by hand. Hooks have no JSON form and must be inserted
    /// into the resulting map afterwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use argonaut::spec::SpecValue;
    /// use serde_json::json;
    ///
    /// let value = SpecValue::from_json(json!({"states": {"abc": 1}}));
    /// let states = value.as_map().and_then(|m| m.get("states")).unwrap();
    ///
    /// assert_eq!(states.as_map().and_then(|m| m.get("abc")), Some(&SpecValue::Integer(1)));
    /// ```
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Nil,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n.as_f64().map_or(Self::Nil, Self::Float),
            },
            Value::String(s) => Self::sym(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from_json).collect()),
            Value::Object(fields) => Self::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (SpecValue::sym(k), Self::from_json(v)))
                    .collect::<SpecMap>(),
            ),
        }
    }

    /// Parse JSON text into a declaration value.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Value>(text).map(Self::from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_convert() {
        assert_eq!(SpecValue::from_json(json!(null)), SpecValue::Nil);
        assert_eq!(SpecValue::from_json(json!(true)), SpecValue::Bool(true));
        assert_eq!(SpecValue::from_json(json!(4)), SpecValue::Integer(4));
        assert_eq!(SpecValue::from_json(json!(4.7)), SpecValue::Float(4.7));
        assert_eq!(SpecValue::from_json(json!("abc")), SpecValue::sym("abc"));
    }

    #[test]
    fn nested_edges_convert() {
        let value = SpecValue::from_json(json!([
            {"from": "abc", "to": "def", "action": "move", "callbacks": {"in": false, "post": true}}
        ]));

        let edge = value.as_list().unwrap()[0].as_map().unwrap();
        assert_eq!(edge.get("action"), Some(&SpecValue::sym("move")));
        let callbacks = edge.get("callbacks").and_then(SpecValue::as_map).unwrap();
        assert_eq!(callbacks.get("post"), Some(&SpecValue::Bool(true)));
    }

    #[test]
    fn invalid_text_is_an_error() {
        assert!(SpecValue::from_json_str("{states:").is_err());
    }
}
