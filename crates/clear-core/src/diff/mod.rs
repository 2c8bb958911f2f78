//! Partial update diff engine.
//!
//! Converts a full edited record into a minimal set-only patch relative to
//! the original record, for backends that accept sparse `{ "set": value }`
//! field updates.
//!
//! ## Entry point
//!
//! ```
//! use clear_core::diff::{compute_update_payload, FieldSet, Record};
//! use serde_json::json;
//!
//! let fields = FieldSet::new(["name", "amount", "uses"]);
//! let original = Record::from_value(json!({"name": "SPRING10", "amount": 10, "uses": 5})).unwrap();
//! let edited = Record::from_value(json!({"name": "SPRING10", "amount": 15, "uses": 5})).unwrap();
//!
//! let payload = compute_update_payload(&fields, &original, &edited);
//! assert_eq!(payload.to_value().unwrap(), json!({"amount": {"set": 15}}));
//! ```
//!
//! ## Guarantees
//!
//! - **Allow-list**: only fields named in the [`FieldSet`] can appear.
//! - **No no-ops**: a field whose edited value equals the original is omitted.
//! - **Purity**: inputs are borrowed read-only; the payload is freshly built.
//! - **Determinism**: payloads serialize in sorted field order.
//!
//! Arrays and objects are compared by identity under the default
//! [`EqualityMode::Strict`]; nested values such as metadata are expected to
//! go through their own update path.

pub mod engine;
pub mod model;

pub use engine::{compute_update_payload, compute_update_payload_with, field_values_equal};
pub use model::{EqualityMode, FieldSet, Record, SetOperation, UpdatePayload};
