#![allow(clippy::unwrap_used, clippy::expect_used)]

use clear_core::diff::{EqualityMode, Record};
use clear_core::errors::ClearError;
use clear_core::logging_facility::test_capture::init_test_capture;
use clear_core::model::{EntityKind, PromoCodeForm, TicketForm};
use clear_core::ops::{build_delete, build_update, promo_code_create, scholarship_code};
use clear_core::{log_op_end, log_op_error, log_op_start, Entity};
use clear_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ClearError::UnknownField {
        entity: "Ticket".to_string(),
        field: "shoeSize".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(
        events[0].fields.get("err_code"),
        Some(&"ERR_UNKNOWN_FIELD".to_string())
    );
}

#[test]
fn test_build_update_logs_single_start_and_end() {
    let capture = init_test_capture();

    let original = Record::from_value(json!({"firstName": "Ada"})).unwrap();
    let edited = Record::from_value(json!({"firstName": "Grace"})).unwrap();
    build_update(
        EntityKind::Ticket,
        "ticket-log-1",
        &TicketForm::field_set(),
        &original,
        &edited,
        EqualityMode::Strict,
    )
    .unwrap();

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("build_update")
            && e.event.as_deref() == Some(EVENT_START)
            && e.fields.get("entity_id").map(String::as_str) == Some("ticket-log-1")
    });
    assert_eq!(starts, 1);

    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some("build_update")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get("changed_count").map(String::as_str) == Some("1")
    });
    assert!(ends >= 1);
}

#[test]
fn test_build_delete_error_is_logged() {
    let capture = init_test_capture();

    let result = build_delete(EntityKind::EmailTemplate, "");
    assert!(result.is_err());

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("build_delete")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get("err_code").map(String::as_str) == Some("ERR_MISSING_ENTITY_ID")
    });
    assert!(errors >= 1);
}

#[test]
fn test_promo_code_create_logs_boundaries() {
    let capture = init_test_capture();

    promo_code_create("evt-log-1", &PromoCodeForm::default()).unwrap();

    capture.assert_event_exists("promo_code_create", EVENT_START);
    capture.assert_event_exists("promo_code_create", EVENT_END);
}

#[test]
fn test_scholarship_code_logs_boundaries() {
    let capture = init_test_capture();
    let mut rng = StdRng::seed_from_u64(3);

    scholarship_code("evt-log-2", &mut rng).unwrap();
    capture.assert_event_exists("scholarship_code", EVENT_START);
    capture.assert_event_exists("scholarship_code", EVENT_END);

    let result = scholarship_code("", &mut rng);
    assert!(result.is_err());
    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("scholarship_code")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get("err_code").map(String::as_str) == Some("ERR_MISSING_ENTITY_ID")
    });
    assert!(errors >= 1);
}
