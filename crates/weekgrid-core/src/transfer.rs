//! JSON export/import of the whole grid.
//!
//! Export always writes the versioned document. Import accepts that
//! document or, for files written before versioning, a bare
//! `{ "day-HH:MM": { "title", "color" } }` mapping.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ImportError;
use crate::schedule::{RecordMap, ScheduleStore};

/// Current export format version.
pub const EXPORT_VERSION: &str = "1.0";

/// Versioned export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub schedules: RecordMap,
}

impl ExportDocument {
    /// Snapshot `store` as of `now`.
    pub fn new(store: &ScheduleStore, now: DateTime<Utc>) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            export_date: now,
            schedules: store.export(),
        }
    }

    /// Serialize to JSON, indented when `pretty`.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Decode an import payload into wire records.
///
/// Only the shape is checked here; key and entry validation happens in
/// [`ScheduleStore::replace_all`].
///
/// # Errors
/// `ImportError::Json` for unparsable text, `ImportError::InvalidFormat` for
/// any shape other than the two accepted ones.
pub fn parse_import(text: &str) -> Result<RecordMap, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(mut object) = value else {
        return Err(ImportError::InvalidFormat);
    };

    let versioned = is_present(object.get("version")) && is_present(object.get("schedules"));
    let schedules = if versioned {
        let version = object.get("version").cloned().unwrap_or(Value::Null);
        if version.as_str() != Some(EXPORT_VERSION) {
            tracing::warn!(%version, "importing document with unexpected version");
        }
        object.remove("schedules").unwrap_or(Value::Null)
    } else {
        Value::Object(object)
    };

    records_from(schedules)
}

fn is_present(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}

fn records_from(value: Value) -> Result<RecordMap, ImportError> {
    if !value.is_object() {
        return Err(ImportError::InvalidFormat);
    }
    serde_json::from_value(value).map_err(|err| {
        tracing::warn!(error = %err, "import payload has malformed entries");
        ImportError::InvalidFormat
    })
}

/// Only `.json` files are offered for import.
pub fn check_import_path(path: &Path) -> Result<(), ImportError> {
    let is_json = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json"));
    if is_json {
        Ok(())
    } else {
        Err(ImportError::UnsupportedFile(path.to_path_buf()))
    }
}

/// Default download name, e.g. `schedule-2026-10-17.json`.
pub fn default_export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.json", date.format("%Y-%m-%d"))
}
