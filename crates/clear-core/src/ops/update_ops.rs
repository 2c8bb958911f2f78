//! Create, update and delete request variables.
//!
//! These functions own lifecycle logging (`log_op_start!`, `log_op_end!`,
//! `log_op_error!`). The diff engine underneath only uses `tracing::debug!`.

use crate::diff::{compute_update_payload_with, EqualityMode, FieldSet, Record, UpdatePayload};
use crate::errors::{ClearError, Result};
use crate::model::{Entity, EntityKind};
use crate::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;
use serde_json::{json, Value};

/// `{ "id": ... }` selector for a single record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhereUnique {
    pub id: String,
}

/// Variables for an update mutation: `{ where: { id }, data: payload }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateVariables {
    #[serde(rename = "where")]
    pub selector: WhereUnique,
    pub data: UpdatePayload,
}

impl UpdateVariables {
    /// An update with an empty payload changes nothing server-side
    pub fn is_noop(&self) -> bool {
        self.data.is_empty()
    }
}

/// Variables for a delete mutation: `{ where: { id } }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteVariables {
    #[serde(rename = "where")]
    pub selector: WhereUnique,
}

/// Variables for a create mutation: `{ data: ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateVariables {
    pub data: Value,
}

fn require_id(kind: EntityKind, id: &str) -> Result<WhereUnique> {
    if id.trim().is_empty() {
        return Err(ClearError::MissingEntityId {
            entity: kind.name().to_string(),
        });
    }
    Ok(WhereUnique { id: id.to_string() })
}

/// Build update variables for record `id` from an original and edited record.
///
/// # Errors
///
/// - `MissingEntityId`: `id` is empty or whitespace-only
pub fn build_update(
    kind: EntityKind,
    id: &str,
    field_set: &FieldSet,
    original: &Record,
    edited: &Record,
    mode: EqualityMode,
) -> Result<UpdateVariables> {
    log_op_start!("build_update", entity = kind.name(), entity_id = id);
    let start = std::time::Instant::now();

    let result = require_id(kind, id)
        .map(|selector| UpdateVariables {
            selector,
            data: compute_update_payload_with(field_set, original, edited, mode),
        })
        .map_err(|e| {
            log_op_error!(
                "build_update",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "build_update",
        duration_ms = start.elapsed().as_millis() as u64,
        changed_count = result.data.len()
    );
    Ok(result)
}

/// Typed variant of [`build_update`] using the entity's declared field set.
///
/// # Errors
///
/// - `MissingEntityId`: `id` is empty
/// - `Serialization` / `InvalidRecord`: a form does not serialize to an object
pub fn build_update_for<E: Entity>(
    id: &str,
    original: &E,
    edited: &E,
    mode: EqualityMode,
) -> Result<UpdateVariables> {
    let original = original.to_record()?;
    let edited = edited.to_record()?;
    build_update(E::KIND, id, &E::field_set(), &original, &edited, mode)
}

/// # Errors
///
/// - `MissingEntityId`: `id` is empty or whitespace-only
pub fn build_delete(kind: EntityKind, id: &str) -> Result<DeleteVariables> {
    log_op_start!("build_delete", entity = kind.name(), entity_id = id);
    let start = std::time::Instant::now();

    let selector = require_id(kind, id).map_err(|e| {
        log_op_error!(
            "build_delete",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!("build_delete", duration_ms = start.elapsed().as_millis() as u64);
    Ok(DeleteVariables { selector })
}

/// Build create variables, connecting the record to `event_id` when given.
///
/// # Errors
///
/// - `MissingEntityId`: `event_id` is given but empty
pub fn build_create(
    kind: EntityKind,
    record: Record,
    event_id: Option<&str>,
) -> Result<CreateVariables> {
    log_op_start!("build_create", entity = kind.name());
    let start = std::time::Instant::now();

    let result = connect_event(record, event_id)
        .map(|data| CreateVariables { data })
        .map_err(|e| {
            log_op_error!(
                "build_create",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!("build_create", duration_ms = start.elapsed().as_millis() as u64);
    Ok(result)
}

pub(crate) fn connect_event(mut record: Record, event_id: Option<&str>) -> Result<Value> {
    if let Some(event_id) = event_id {
        if event_id.trim().is_empty() {
            return Err(ClearError::MissingEntityId {
                entity: "Event".to_string(),
            });
        }
        record.insert("event", json!({ "connect": { "id": event_id } }));
    }
    Ok(record.into_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TicketForm, TicketType};

    #[test]
    fn test_update_variables_wire_shape() {
        let original = TicketForm {
            first_name: Some(Some("Ada".into())),
            last_name: Some(Some("Lovelace".into())),
            ticket_type: Some(Some(TicketType::Student)),
            ..TicketForm::default()
        };
        let edited = TicketForm {
            ticket_type: Some(Some(TicketType::Mentor)),
            ..original.clone()
        };
        let vars = build_update_for("t1", &original, &edited, EqualityMode::Strict).unwrap();
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({"where": {"id": "t1"}, "data": {"type": {"set": "MENTOR"}}})
        );
        assert!(!vars.is_noop());
    }

    #[test]
    fn test_update_rejects_blank_id() {
        let record = Record::new();
        let err = build_update(
            EntityKind::Ticket,
            "  ",
            &TicketForm::field_set(),
            &record,
            &record,
            EqualityMode::Strict,
        )
        .unwrap_err();
        assert!(matches!(err, ClearError::MissingEntityId { .. }));
    }

    #[test]
    fn test_create_connects_event() {
        let record = TicketForm {
            first_name: Some(Some("Ada".into())),
            last_name: Some(Some("Lovelace".into())),
            ..TicketForm::default()
        }
        .to_record()
        .unwrap();
        let vars = build_create(EntityKind::Ticket, record, Some("evt_1")).unwrap();
        assert_eq!(vars.data["event"], json!({"connect": {"id": "evt_1"}}));
        assert_eq!(vars.data["firstName"], json!("Ada"));
    }

    #[test]
    fn test_delete_wire_shape() {
        let vars = build_delete(EntityKind::PromoCode, "p1").unwrap();
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({"where": {"id": "p1"}})
        );
    }

    #[test]
    fn test_create_without_event_adds_no_event_key() {
        let record = Record::from_value(json!({"name": "Welcome"})).unwrap();
        let vars = build_create(EntityKind::EmailTemplate, record, None).unwrap();
        assert_eq!(vars.data, json!({"name": "Welcome"}));
        assert!(vars.data.get("event").is_none());
    }

    #[test]
    fn test_create_rejects_blank_event_id() {
        let err = build_create(EntityKind::Ticket, Record::new(), Some("")).unwrap_err();
        assert!(matches!(err, ClearError::MissingEntityId { .. }));
    }
}
