//! Shared helpers for CLI commands.

use weekgrid_core::{Database, Scheduler};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the on-disk database and load the grid.
pub fn open_scheduler() -> Result<Scheduler, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    Ok(Scheduler::open(db)?)
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
