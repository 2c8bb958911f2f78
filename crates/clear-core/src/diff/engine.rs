//! Partial update diff computation.
//!
//! The core entry point is [`compute_update_payload`], which walks a field
//! allow-list and keeps only the fields whose edited value is not strictly
//! equal to the original value.

use crate::diff::model::{EqualityMode, FieldSet, Record, SetOperation, UpdatePayload};
use serde_json::{Number, Value};

/// Compute the minimal set-only patch between `original` and `edited`
/// using [`EqualityMode::Strict`].
///
/// Fields outside `field_set` are ignored. A field missing from a record is
/// undefined: undefined equals undefined and differs from every present
/// value, including `null` and `false`. Never fails and never mutates its
/// inputs.
pub fn compute_update_payload(
    field_set: &FieldSet,
    original: &Record,
    edited: &Record,
) -> UpdatePayload {
    compute_update_payload_with(field_set, original, edited, EqualityMode::Strict)
}

/// Same as [`compute_update_payload`] with an explicit equality mode.
pub fn compute_update_payload_with(
    field_set: &FieldSet,
    original: &Record,
    edited: &Record,
    mode: EqualityMode,
) -> UpdatePayload {
    let mut payload = UpdatePayload::new();
    for field in field_set.iter() {
        let old = original.get(field);
        let new = edited.get(field);
        if !field_values_equal(old, new, mode) {
            payload.insert(field, SetOperation::new(new.cloned()));
        }
    }

    tracing::debug!(
        field_count = field_set.len(),
        changed_count = payload.len(),
        mode = ?mode,
        "computed update payload"
    );
    payload
}

/// Compare two possibly-undefined field values.
pub fn field_values_equal(a: Option<&Value>, b: Option<&Value>, mode: EqualityMode) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => values_equal(a, b, mode),
        _ => false,
    }
}

fn values_equal(a: &Value, b: &Value, mode: EqualityMode) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => match mode {
            EqualityMode::Strict => std::ptr::eq(a, b),
            EqualityMode::Structural => {
                x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r, mode))
            }
        },
        (Value::Object(x), Value::Object(y)) => match mode {
            EqualityMode::Strict => std::ptr::eq(a, b),
            EqualityMode::Structural => {
                x.len() == y.len()
                    && x.iter().all(|(key, l)| {
                        y.get(key).is_some_and(|r| values_equal(l, r, mode))
                    })
            }
        },
        _ => false,
    }
}

/// Numeric equality by value, so `15` and `15.0` compare equal.
fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
