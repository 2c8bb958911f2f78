use super::schema::{Entity, EntityKind, Nullable};
use super::ticket::TicketType;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

/// Reference point a template's `when` offset is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WhenFrom {
    #[default]
    Register,
    EventStart,
    EventEnd,
}

/// Automated email/text template attached to events.
///
/// `when` is an offset such as `-3d` relative to `when_from`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplateForm {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub automatic: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub from_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub from_email: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub subject: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub template: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub send_text: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub text_msg: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub send_to: Nullable<TicketType>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub when: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub when_from: Nullable<WhenFrom>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub send_late: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub send_in_work_hours: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub send_after_event: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub send_parent: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub marketing: Nullable<bool>,
}

impl EmailTemplateForm {
    pub const DEFAULT_FROM_NAME: &'static str = "John Peter";
    pub const DEFAULT_FROM_EMAIL: &'static str = "team@codeday.org";

    /// A blank form with the schema defaults applied
    pub fn with_defaults() -> Self {
        Self {
            automatic: Some(Some(false)),
            from_name: Some(Some(Self::DEFAULT_FROM_NAME.to_string())),
            from_email: Some(Some(Self::DEFAULT_FROM_EMAIL.to_string())),
            send_text: Some(Some(false)),
            send_to: Some(Some(TicketType::Student)),
            when_from: Some(Some(WhenFrom::Register)),
            send_late: Some(Some(false)),
            send_in_work_hours: Some(Some(false)),
            send_after_event: Some(Some(false)),
            send_parent: Some(Some(false)),
            marketing: Some(Some(false)),
            ..Self::default()
        }
    }
}

impl Entity for EmailTemplateForm {
    const KIND: EntityKind = EntityKind::EmailTemplate;
    const FIELDS: &'static [&'static str] = &[
        "name",
        "automatic",
        "fromName",
        "fromEmail",
        "subject",
        "template",
        "sendText",
        "textMsg",
        "sendTo",
        "when",
        "whenFrom",
        "sendLate",
        "sendInWorkHours",
        "sendAfterEvent",
        "sendParent",
        "marketing",
    ];
    const REQUIRED: &'static [&'static str] = &[
        "name",
        "fromName",
        "fromEmail",
        "subject",
        "sendTo",
        "when",
        "whenFrom",
        "template",
    ];
}
