mod config;
pub mod database;
mod memory;

pub use config::{ClockConfig, Config, DisplayConfig, ExportConfig, GridConfig};
pub use database::{Database, SCHEDULE_KEY};
pub use memory::MemoryPersistence;

use std::path::PathBuf;

use crate::error::StorageError;
use crate::schedule::RecordMap;

/// Key-value persistence for the schedule mapping.
///
/// `load` is called once at startup and `save` after every store mutation.
/// Implementations store the wire form; validation happens on load in the
/// caller.
pub trait SchedulePersistence {
    /// Previously saved mapping, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<RecordMap>, StorageError>;

    /// Overwrite the saved mapping.
    fn save(&self, records: &RecordMap) -> Result<(), StorageError>;
}

/// Returns the data directory.
///
/// `WEEKGRID_DATA_DIR` wins when set. Otherwise `~/.config/weekgrid`, or
/// `~/.config/weekgrid-dev` when `WEEKGRID_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("WEEKGRID_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("WEEKGRID_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("weekgrid-dev")
            } else {
                base_dir.join("weekgrid")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
