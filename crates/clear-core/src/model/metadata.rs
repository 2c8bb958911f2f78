use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// String-keyed metadata attached to a record.
///
/// The backend stores arbitrary JSON; the admin application only ever
/// writes string values through the dedicated metadata mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Metadata {
    data: BTreeMap<String, Value>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `key` holds the string `"true"`
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.data.get(key), Some(Value::String(s)) if s == "true")
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, Value>> for Metadata {
    fn from(data: BTreeMap<String, Value>) -> Self {
        Self { data }
    }
}

/// Render metadata as an indented bullet list.
///
/// `None` and `null` render as `null`; objects and arrays nest one level of
/// indentation per depth, arrays keyed by index.
pub fn render_metadata(metadata: Option<&Value>) -> String {
    let mut out = String::new();
    match metadata {
        Some(Value::Object(map)) => {
            for (key, value) in map {
                render_item(&mut out, Some(key.as_str()), value, 0);
            }
        }
        Some(Value::Array(items)) => {
            for (index, value) in items.iter().enumerate() {
                render_item(&mut out, Some(index.to_string().as_str()), value, 0);
            }
        }
        Some(other) => render_item(&mut out, None, other, 0),
        None => render_item(&mut out, None, &Value::Null, 0),
    }
    out
}

fn render_item(out: &mut String, key: Option<&str>, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    let label = key.map(|k| format!("{}: ", k)).unwrap_or_default();
    match value {
        Value::Object(map) => {
            let _ = writeln!(out, "{}- {}", indent, label.trim_end());
            for (k, v) in map {
                render_item(out, Some(k.as_str()), v, depth + 1);
            }
        }
        Value::Array(items) => {
            let _ = writeln!(out, "{}- {}", indent, label.trim_end());
            for (i, v) in items.iter().enumerate() {
                render_item(out, Some(i.to_string().as_str()), v, depth + 1);
            }
        }
        Value::String(s) => {
            let _ = writeln!(out, "{}- {}{}", indent, label, s);
        }
        other => {
            let _ = writeln!(out, "{}- {}{}", indent, label, other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flag_requires_literal_true() {
        let mut metadata = Metadata::new();
        metadata.set("uber", json!("true"));
        metadata.set("laptop", json!(""));
        assert!(metadata.flag("uber"));
        assert!(!metadata.flag("laptop"));
        assert!(!metadata.flag("missing"));
    }

    #[test]
    fn test_render_null_and_missing() {
        assert_eq!(render_metadata(None), "- null\n");
        assert_eq!(render_metadata(Some(&Value::Null)), "- null\n");
    }

    #[test]
    fn test_render_nested() {
        let value = json!({"uber": "true", "school": {"name": "Central", "ids": [7]}});
        let rendered = render_metadata(Some(&value));
        assert_eq!(
            rendered,
            "- school:\n  - ids:\n    - 0: 7\n  - name: Central\n- uber: true\n"
        );
    }

    #[test]
    fn test_render_top_level_scalar() {
        assert_eq!(render_metadata(Some(&json!("vip"))), "- vip\n");
        assert_eq!(render_metadata(Some(&json!(5))), "- 5\n");
        assert_eq!(render_metadata(Some(&json!(false))), "- false\n");
    }

    #[test]
    fn test_render_top_level_array() {
        let value = json!(["a", {"b": 1}]);
        assert_eq!(render_metadata(Some(&value)), "- 0: a\n- 1:\n  - b: 1\n");
    }
}
