use super::schema::{Entity, EntityKind, Nullable};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

/// Attendee role a ticket grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    #[default]
    Student,
    Teacher,
    Vip,
    Mentor,
    Judge,
    Staff,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketForm {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub first_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub last_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub email: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub phone: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub whats_app: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub age: Nullable<u32>,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    pub ticket_type: Nullable<TicketType>,
    /// Account username; affects how staff are shown on event pages
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub username: Nullable<String>,
}

impl TicketForm {
    /// A blank form with the schema defaults applied
    pub fn with_defaults() -> Self {
        Self {
            ticket_type: Some(Some(TicketType::default())),
            ..Self::default()
        }
    }
}

impl Entity for TicketForm {
    const KIND: EntityKind = EntityKind::Ticket;
    const FIELDS: &'static [&'static str] = &[
        "firstName",
        "lastName",
        "email",
        "phone",
        "whatsApp",
        "age",
        "type",
        "username",
    ];
    const REQUIRED: &'static [&'static str] = &["firstName", "lastName"];
}
