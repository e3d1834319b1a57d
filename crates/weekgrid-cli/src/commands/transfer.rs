use std::path::PathBuf;

use chrono::{Local, Utc};
use clap::Subcommand;
use weekgrid_core::transfer::{check_import_path, default_export_file_name};
use weekgrid_core::Config;

use crate::common::{open_scheduler, CliResult};

#[derive(Subcommand)]
pub enum TransferAction {
    /// Export the grid as a versioned JSON document
    Export {
        /// Output file (defaults to "<prefix>-YYYY-MM-DD.json" in the current directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Write the document to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Replace the grid with the contents of a JSON export
    Import {
        /// Path to a .json file
        path: PathBuf,
    },
}

pub fn run(action: TransferAction) -> CliResult {
    match action {
        TransferAction::Export { output, stdout } => {
            let config = Config::load_or_default();
            let scheduler = open_scheduler()?;
            let document = scheduler.export_document(Utc::now());
            let json = document.to_json(config.export.pretty)?;

            if stdout {
                println!("{json}");
                return Ok(());
            }
            let path = output.unwrap_or_else(|| {
                let today = Local::now().date_naive();
                PathBuf::from(default_export_file_name(&config.export.file_prefix, today))
            });
            std::fs::write(&path, json)?;
            tracing::info!(path = %path.display(), entries = document.schedules.len(), "exported");
            println!(
                "exported {} entries to {}",
                document.schedules.len(),
                path.display()
            );
        }
        TransferAction::Import { path } => {
            check_import_path(&path)?;
            let text = std::fs::read_to_string(&path)?;
            let mut scheduler = open_scheduler()?;
            let count = scheduler.import_json(&text)?;
            println!("imported {count} entries from {}", path.display());
        }
    }
    Ok(())
}
