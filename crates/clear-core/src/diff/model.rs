//! Record and update payload types.
//!
//! Collections use `BTreeMap` so serialized payloads are deterministic.

use crate::errors::{ClearError, Result};
use crate::model::schema::EntitySchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A key/value snapshot of an entity's editable attributes.
///
/// A field that is absent from the record is *undefined*, which is distinct
/// from a field explicitly holding JSON `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON object.
    ///
    /// # Errors
    ///
    /// `InvalidRecord` if `value` is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                fields: map.into_iter().collect(),
            }),
            other => Err(ClearError::InvalidRecord {
                reason: format!("expected a JSON object, got {}", json_type_name(&other)),
            }),
        }
    }

    /// Build a record from any serializable form struct.
    ///
    /// # Errors
    ///
    /// `Serialization` if the value cannot be serialized, `InvalidRecord` if
    /// it does not serialize to an object.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Self::from_value(serde_json::to_value(value)?)
    }

    /// Get a field value; `None` means the field is undefined
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(field.into(), value)
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields.into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Ordered allow-list of field names considered by a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    names: Vec<Cow<'static, str>>,
}

impl FieldSet {
    /// Build an unchecked field set. Names unknown to either record simply
    /// never produce a diff entry.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a field set from a declared constant without allocating names
    pub fn from_static(names: &'static [&'static str]) -> Self {
        Self {
            names: names.iter().map(|n| Cow::Borrowed(*n)).collect(),
        }
    }

    /// Build a field set whose every name is a declared property of `schema`.
    ///
    /// # Errors
    ///
    /// `UnknownField` for the first name the schema does not declare.
    pub fn checked<I, S>(names: I, schema: &EntitySchema) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let set = Self::new(names);
        if let Some(unknown) = set.iter().find(|n| !schema.declares(n)) {
            return Err(ClearError::UnknownField {
                entity: schema.entity.to_string(),
                field: unknown.to_string(),
            });
        }
        Ok(set)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_ref())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.iter().any(|n| n == field)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The `{ "set": value }` wrapper meaning "assign exactly this value".
///
/// `set: None` stands for an undefined value; it serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<Value>,
}

impl SetOperation {
    pub fn new(value: Option<Value>) -> Self {
        Self { set: value }
    }

    /// Whether the assigned value is truthy in the JavaScript sense
    pub fn is_truthy(&self) -> bool {
        match &self.set {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}

/// Minimal set-only patch: changed fields only, each wrapped in a
/// [`SetOperation`]. Empty when nothing changed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdatePayload {
    entries: BTreeMap<String, SetOperation>,
}

impl UpdatePayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, op: SetOperation) {
        self.entries.insert(field.into(), op);
    }

    pub fn get(&self, field: &str) -> Option<&SetOperation> {
        self.entries.get(field)
    }

    /// Take a field out of the payload, e.g. to route it through a
    /// dedicated update path
    pub fn remove(&mut self, field: &str) -> Option<SetOperation> {
        self.entries.remove(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SetOperation)> {
        self.entries.iter()
    }

    /// Serialize into the wire shape handed to an update mutation
    ///
    /// # Errors
    ///
    /// `Serialization` if a value cannot be represented as JSON.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// How non-primitive field values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityMode {
    /// Primitives by value; arrays and objects equal only when both sides
    /// are the same value in memory.
    #[default]
    Strict,
    /// Primitives by value; arrays and objects compared deeply.
    Structural,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_non_object_is_rejected() {
        let err = Record::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ClearError::InvalidRecord { .. }));
    }

    #[test]
    fn test_record_distinguishes_null_from_undefined() {
        let record = Record::from_value(json!({"email": null})).unwrap();
        assert_eq!(record.get("email"), Some(&Value::Null));
        assert_eq!(record.get("phone"), None);
    }

    #[test]
    fn test_undefined_set_serializes_as_empty_object() {
        let op = SetOperation::new(None);
        assert_eq!(serde_json::to_value(&op).unwrap(), json!({}));
        let op = SetOperation::new(Some(Value::Null));
        assert_eq!(serde_json::to_value(&op).unwrap(), json!({"set": null}));
    }

    #[test]
    fn test_truthiness() {
        assert!(SetOperation::new(Some(json!(true))).is_truthy());
        assert!(SetOperation::new(Some(json!("x"))).is_truthy());
        assert!(!SetOperation::new(Some(json!(false))).is_truthy());
        assert!(!SetOperation::new(Some(json!(0))).is_truthy());
        assert!(!SetOperation::new(Some(json!(""))).is_truthy());
        assert!(!SetOperation::new(None).is_truthy());
    }

    #[test]
    fn test_field_set_preserves_order() {
        let set = FieldSet::new(["uses", "code", "amount"]);
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["uses", "code", "amount"]);
        assert!(set.contains("code"));
        assert!(!set.contains("type"));
    }
}
