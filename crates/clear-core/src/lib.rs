//! Clear Core - record update payloads for the events admin
//!
//! This crate provides:
//! - The partial update diff engine (`diff`): original + edited record in,
//!   minimal `{ "set": value }` patch out
//! - Typed field sets and forms for promo codes, tickets and email templates
//! - Create/update/delete request variables, including the promo code
//!   metadata side channel
//! - Error and logging facilities, and TOML configuration

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use config::ClearConfig;
pub use diff::{compute_update_payload, EqualityMode, FieldSet, Record, UpdatePayload};
pub use errors::{ClearError, ExError, ExErrorKind, Result};
pub use model::{Entity, EntityKind};
