//! Diff command

use clap::{Args, ValueEnum};
use clear_core::diff::{compute_update_payload_with, EqualityMode, FieldSet};
use clear_core::model::EntityKind;
use clear_core::ops::build_update;
use clear_core::ClearConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EntityArg {
    PromoCode,
    Ticket,
    EmailTemplate,
}

impl From<EntityArg> for EntityKind {
    fn from(arg: EntityArg) -> Self {
        match arg {
            EntityArg::PromoCode => EntityKind::PromoCode,
            EntityArg::Ticket => EntityKind::Ticket,
            EntityArg::EmailTemplate => EntityKind::EmailTemplate,
        }
    }
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Record type whose field set is used
    #[arg(long, value_enum)]
    pub entity: EntityArg,

    /// Restrict to these fields (must be declared by the entity)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Wrap the payload as update variables for this record id
    #[arg(long)]
    pub id: Option<String>,

    /// Compare arrays and objects deeply instead of by identity
    #[arg(long)]
    pub structural: bool,

    /// Original record (JSON object)
    pub original: PathBuf,

    /// Edited record (JSON object)
    pub edited: PathBuf,
}

pub fn execute(
    args: DiffArgs,
    config: &ClearConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let kind = EntityKind::from(args.entity);
    let schema = kind.schema();
    let field_set = if args.fields.is_empty() {
        schema.field_set()
    } else {
        FieldSet::checked(args.fields, &schema)?
    };
    let mode = if args.structural {
        EqualityMode::Structural
    } else {
        config.equality
    };

    let original = super::read_record(&args.original)?;
    let edited = super::read_record(&args.edited)?;

    let output = match args.id {
        Some(id) => {
            let vars = build_update(kind, &id, &field_set, &original, &edited, mode)?;
            serde_json::to_string_pretty(&vars)?
        }
        None => {
            let payload = compute_update_payload_with(&field_set, &original, &edited, mode);
            serde_json::to_string_pretty(&payload)?
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn json_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn args(original: &tempfile::NamedTempFile, edited: &tempfile::NamedTempFile) -> DiffArgs {
        DiffArgs {
            entity: EntityArg::PromoCode,
            fields: Vec::new(),
            id: None,
            structural: false,
            original: original.path().to_path_buf(),
            edited: edited.path().to_path_buf(),
        }
    }

    #[test]
    fn test_diff_prints_payload() {
        let original = json_file(r#"{"code": "SPRING10", "amount": 10, "uses": 5}"#);
        let edited = json_file(r#"{"code": "SPRING10", "amount": 15, "uses": 5}"#);

        let output = execute(args(&original, &edited), &ClearConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, serde_json::json!({"amount": {"set": 15}}));
    }

    #[test]
    fn test_diff_with_id_prints_update_variables() {
        let original = json_file(r#"{"uses": 5}"#);
        let edited = json_file(r#"{"uses": 6}"#);

        let mut diff_args = args(&original, &edited);
        diff_args.id = Some("p1".into());
        let output = execute(diff_args, &ClearConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["where"]["id"], serde_json::json!("p1"));
        assert_eq!(value["data"]["uses"]["set"], serde_json::json!(6));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let original = json_file("{}");
        let edited = json_file("{}");

        let mut diff_args = args(&original, &edited);
        diff_args.fields = vec!["discount".into()];
        let err = execute(diff_args, &ClearConfig::default()).unwrap_err();
        assert!(err.to_string().contains("discount"));
    }
}
