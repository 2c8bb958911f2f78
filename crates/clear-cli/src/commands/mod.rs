pub mod diff;
pub mod promo_code;

use clear_core::diff::Record;
use clear_core::errors::{ClearError, Result};
use std::path::Path;

/// Read a JSON object file into a record
pub(crate) fn read_record(path: &Path) -> Result<Record> {
    let content = std::fs::read_to_string(path).map_err(|e| ClearError::Io {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;
    Record::from_value(serde_json::from_str(&content)?)
}
