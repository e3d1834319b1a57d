//! # weekgrid Core Library
//!
//! This library provides the core logic for weekgrid, an interactive weekly
//! schedule grid: seven day columns by 97 quarter-hour rows where a labeled,
//! colored event can be assigned to one or more cells. The CLI binary is a
//! thin front end over the same library.
//!
//! ## Architecture
//!
//! - **Grid**: the fixed day and time-slot axes and the `day-HH:MM` cell key
//! - **Schedule**: cell-to-event store with validated, all-or-nothing mutations
//! - **Selection**: drag state machine producing rectangular cell sets
//! - **Merge**: per-day run-length grouping of identical consecutive events
//! - **Storage**: SQLite key-value persistence and TOML configuration
//!
//! Data flows one way: gestures mutate the store through a [`Scheduler`],
//! and renderers consume a freshly built [`GridLayout`].
//!
//! ## Key Components
//!
//! - [`Scheduler`]: application bundle owning store, selection and persistence
//! - [`ScheduleStore`]: the cell-to-event mapping
//! - [`SelectionEngine`]: rectangular drag selection
//! - [`merge_week`]: merged row spans for rendering
//! - [`Config`]: application configuration management

pub mod error;
pub mod grid;
pub mod layout;
pub mod merge;
pub mod palette;
pub mod proximity;
pub mod schedule;
pub mod scheduler;
pub mod selection;
pub mod storage;
pub mod transfer;

pub use error::{ConfigError, CoreError, ImportError, StorageError, ValidationError};
pub use grid::{enumerate_slots, to_minutes, CellId, Day, TimeSlot};
pub use layout::{CellView, DayColumn, GridLayout};
pub use merge::{merge_day, merge_week, DayMerge, Run, WeekMerge};
pub use palette::Color;
pub use proximity::{classify, ProximityLevel, TickSchedule};
pub use schedule::{Event, EventRecord, RecordMap, ScheduleStore};
pub use scheduler::{EditOutcome, Scheduler};
pub use selection::{SelectionEngine, SelectionState};
pub use storage::{Config, Database, MemoryPersistence, SchedulePersistence};
pub use transfer::{parse_import, ExportDocument, EXPORT_VERSION};
