//! Entity schemas and the typed-entity trait.

use crate::diff::{FieldSet, Record};
use crate::errors::{ClearError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A form field that tells "not present" (`None`) apart from an explicit
/// JSON `null` (`Some(None)`).
pub type Nullable<T> = Option<Option<T>>;

/// Declared properties of one record type, as exposed by its edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    pub entity: &'static str,
    pub properties: &'static [&'static str],
    pub required: &'static [&'static str],
}

impl EntitySchema {
    pub fn declares(&self, field: &str) -> bool {
        self.properties.contains(&field)
    }

    /// Required properties that are undefined or null in `record`
    pub fn missing_required(&self, record: &Record) -> Vec<&'static str> {
        self.required
            .iter()
            .copied()
            .filter(|f| record.get(f).map_or(true, |v| v.is_null()))
            .collect()
    }

    pub fn field_set(&self) -> FieldSet {
        FieldSet::from_static(self.properties)
    }
}

/// A record type with a compile-time field set.
///
/// Implementors are serde form structs built from [`Nullable`] fields: an
/// unset field is skipped and becomes undefined in the resulting
/// [`Record`], while `Some(None)` is kept as `null`.
pub trait Entity: Serialize {
    const KIND: EntityKind;
    const FIELDS: &'static [&'static str];
    const REQUIRED: &'static [&'static str] = &[];

    fn schema() -> EntitySchema {
        EntitySchema {
            entity: Self::KIND.name(),
            properties: Self::FIELDS,
            required: Self::REQUIRED,
        }
    }

    fn field_set() -> FieldSet {
        FieldSet::from_static(Self::FIELDS)
    }

    /// # Errors
    ///
    /// `Serialization` / `InvalidRecord` if the form does not serialize to
    /// a JSON object.
    fn to_record(&self) -> Result<Record> {
        Record::from_serializable(self)
    }
}

/// Record types managed by the admin application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    PromoCode,
    Ticket,
    EmailTemplate,
}

impl EntityKind {
    /// Backend type name
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::PromoCode => "PromoCode",
            EntityKind::Ticket => "Ticket",
            EntityKind::EmailTemplate => "EmailTemplate",
        }
    }

    pub fn schema(&self) -> EntitySchema {
        match self {
            EntityKind::PromoCode => super::PromoCodeForm::schema(),
            EntityKind::Ticket => super::TicketForm::schema(),
            EntityKind::EmailTemplate => super::EmailTemplateForm::schema(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = ClearError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "promo-code" | "PromoCode" => Ok(EntityKind::PromoCode),
            "ticket" | "Ticket" => Ok(EntityKind::Ticket),
            "email-template" | "EmailTemplate" => Ok(EntityKind::EmailTemplate),
            other => Err(ClearError::InvalidRecord {
                reason: format!("unknown entity kind: {}", other),
            }),
        }
    }
}
