//! Promo code update paths.
//!
//! The `enablesUber` / `enablesLaptops` form flags are not columns on the
//! backend: they live in the promo code's metadata and are written through a
//! separate key/value mutation. The generic diff is computed first, then the
//! flag entries are taken out of the payload and turned into
//! [`MetadataSet`] calls.

use super::update_ops::{build_update_for, connect_event, CreateVariables, UpdateVariables};
use crate::diff::{EqualityMode, Record};
use crate::errors::{ClearError, Result};
use crate::model::{DiscountType, Entity, Metadata, PromoCodeForm};
use crate::{log_op_end, log_op_error, log_op_start};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

/// Form flag to metadata key
pub const METADATA_FLAGS: &[(&str, &str)] =
    &[("enablesUber", "uber"), ("enablesLaptops", "laptop")];

/// Alphabet for generated codes; omits letters that read ambiguously
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHKPQRSTUVWXYZ";

pub const SCHOLARSHIP_CODE_LENGTH: usize = 6;
const MAX_CODE_LENGTH: usize = 64;

/// Variables for the set-metadata mutation. An empty `value` clears the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataSet {
    pub id: String,
    pub key: String,
    pub value: String,
}

/// A promo code update split into the column update and metadata writes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromoCodeUpdate {
    pub update: UpdateVariables,
    pub metadata: Vec<MetadataSet>,
}

/// Diff two promo code forms and route the flag fields to metadata writes.
///
/// # Errors
///
/// - `MissingEntityId`: `id` is empty
pub fn split_promo_code_update(
    id: &str,
    original: &PromoCodeForm,
    edited: &PromoCodeForm,
    mode: EqualityMode,
) -> Result<PromoCodeUpdate> {
    let mut update = build_update_for(id, original, edited, mode)?;

    let metadata = METADATA_FLAGS
        .iter()
        .filter_map(|(field, key)| {
            update.data.remove(field).map(|op| MetadataSet {
                id: id.to_string(),
                key: (*key).to_string(),
                value: if op.is_truthy() { "true" } else { "" }.to_string(),
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        column_changes = update.data.len(),
        metadata_changes = metadata.len(),
        "split promo code update"
    );
    Ok(PromoCodeUpdate { update, metadata })
}

/// Create variables for a promo code: flags become metadata entries (only
/// enabled flags are present), the rest passes through.
///
/// # Errors
///
/// - `MissingEntityId`: `event_id` is empty
/// - `Serialization`: the form cannot be serialized
pub fn promo_code_create(event_id: &str, form: &PromoCodeForm) -> Result<CreateVariables> {
    log_op_start!("promo_code_create", entity_id = event_id);
    let start = std::time::Instant::now();

    let result = promo_code_create_impl(event_id, form).map_err(|e| {
        log_op_error!(
            "promo_code_create",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!("promo_code_create", duration_ms = start.elapsed().as_millis() as u64);
    Ok(result)
}

fn promo_code_create_impl(event_id: &str, form: &PromoCodeForm) -> Result<CreateVariables> {
    let mut record = form.to_record()?;
    let mut metadata = Metadata::new();
    for (field, key) in METADATA_FLAGS {
        if record.remove(field) == Some(Value::Bool(true)) {
            metadata.set(*key, Value::String("true".to_string()));
        }
    }
    record.insert("metadata", metadata.to_value());
    let data = connect_event(record, Some(event_id))?;
    Ok(CreateVariables { data })
}

/// Generate a random code of `length` letters from [`CODE_ALPHABET`].
///
/// # Errors
///
/// - `InvalidCodeLength`: `length` is zero or longer than 64
pub fn generate_promo_code<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<String> {
    if length == 0 || length > MAX_CODE_LENGTH {
        return Err(ClearError::InvalidCodeLength { length });
    }
    Ok((0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect())
}

/// Create variables for a single-use, 100% scholarship code on an event.
///
/// # Errors
///
/// - `MissingEntityId`: `event_id` is empty
pub fn scholarship_code<R: Rng + ?Sized>(event_id: &str, rng: &mut R) -> Result<CreateVariables> {
    log_op_start!("scholarship_code", entity_id = event_id);
    let start = std::time::Instant::now();

    let result = scholarship_code_impl(event_id, rng).map_err(|e| {
        log_op_error!(
            "scholarship_code",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!("scholarship_code", duration_ms = start.elapsed().as_millis() as u64);
    Ok(result)
}

fn scholarship_code_impl<R: Rng + ?Sized>(event_id: &str, rng: &mut R) -> Result<CreateVariables> {
    let form = PromoCodeForm {
        code: Some(Some(generate_promo_code(SCHOLARSHIP_CODE_LENGTH, rng)?)),
        discount_type: Some(Some(DiscountType::Percent)),
        amount: Some(Some(100.0)),
        uses: Some(Some(1)),
        ..PromoCodeForm::default()
    };
    let data = connect_event(form.to_record()?, Some(event_id))?;
    Ok(CreateVariables { data })
}

/// Build the edit form for a stored promo code.
///
/// Flag fields the record does not carry are read from its `metadata`
/// object: a flag is on only when its key holds the string `"true"`. Other
/// keys outside the form are ignored.
///
/// # Errors
///
/// - `Serialization`: `metadata` is not a string-keyed object, or a field
///   does not match the form's type
pub fn promo_code_form_from_stored(mut record: Record) -> Result<PromoCodeForm> {
    let metadata: Metadata = match record.remove("metadata") {
        None | Some(Value::Null) => Metadata::new(),
        Some(value) => serde_json::from_value(value)?,
    };
    for (field, key) in METADATA_FLAGS {
        if !record.contains(field) {
            record.insert(*field, Value::Bool(metadata.flag(key)));
        }
    }
    Ok(serde_json::from_value(record.into_value())?)
}
