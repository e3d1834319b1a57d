//! The application bundle: store, selection and persistence together.
//!
//! One `Scheduler` is built at startup and passed by reference to whatever
//! drives interaction. Every mutation updates the in-memory store first and
//! then saves; a failed save is reported as `StorageError` while the
//! in-memory state stays valid and usable.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::error::{Result, StorageError, ValidationError};
use crate::grid::CellId;
use crate::layout::GridLayout;
use crate::merge::{self, WeekMerge};
use crate::palette::Color;
use crate::schedule::{Event, ScheduleStore};
use crate::selection::SelectionEngine;
use crate::storage::SchedulePersistence;
use crate::transfer::{self, ExportDocument};

/// What an edit did to the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    /// Empty title: the cell was cleared instead.
    Removed,
}

pub struct Scheduler {
    store: ScheduleStore,
    selection: SelectionEngine,
    persistence: Box<dyn SchedulePersistence>,
}

impl Scheduler {
    /// Load the saved mapping once and build the bundle.
    ///
    /// Saved entries that no longer validate are skipped with one warning and
    /// the rest are kept. A payload that does not decode at all starts the
    /// grid empty; the next save overwrites it.
    ///
    /// # Errors
    /// Returns `StorageError` when the backing store cannot be read at all.
    pub fn open(persistence: impl SchedulePersistence + 'static) -> Result<Self, StorageError> {
        let store = match persistence.load() {
            Ok(Some(records)) => {
                let (store, skipped) = ScheduleStore::from_records_lossy(records);
                if !skipped.is_empty() {
                    tracing::warn!(?skipped, "skipped invalid saved entries");
                }
                store
            }
            Ok(None) => ScheduleStore::new(),
            Err(StorageError::Corrupt(message)) => {
                tracing::warn!(%message, "saved schedule is corrupt; starting empty");
                ScheduleStore::new()
            }
            Err(e) => return Err(e),
        };
        tracing::debug!(entries = store.len(), "scheduler opened");

        Ok(Self {
            store,
            selection: SelectionEngine::new(),
            persistence: Box::new(persistence),
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    pub fn event_at(&self, cell: &CellId) -> Option<&Event> {
        self.store.get(cell)
    }

    pub fn merged(&self) -> WeekMerge {
        merge::merge_week(&self.store)
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::build(&self.store, self.selection.selected())
    }

    pub fn export_document(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument::new(&self.store, now)
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Edit-dialog save: a non-empty title sets the cell, an empty one
    /// clears it.
    pub fn edit(&mut self, cell: CellId, title: &str, color: Color) -> Result<EditOutcome> {
        match self.store.set(cell, Event::new(title, color)) {
            Ok(_) => {
                self.persist()?;
                Ok(EditOutcome::Saved)
            }
            Err(ValidationError::EmptyTitle) => {
                self.remove(&cell)?;
                Ok(EditOutcome::Removed)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Clear one cell. Clearing an empty cell still succeeds.
    pub fn remove(&mut self, cell: &CellId) -> Result<Option<Event>> {
        let removed = self.store.remove(cell);
        self.persist()?;
        Ok(removed)
    }

    /// Remove every entry.
    pub fn clear_all(&mut self) -> Result<usize> {
        let removed = self.store.clear();
        self.selection.clear();
        tracing::info!(removed, "cleared all entries");
        self.persist()?;
        Ok(removed)
    }

    /// Explicit save of the current state.
    pub fn save(&self) -> Result<(), StorageError> {
        self.persist()
    }

    // ── Selection ────────────────────────────────────────────────────

    pub fn begin_selection(&mut self, cell: CellId) {
        self.selection.begin(cell);
    }

    pub fn extend_selection(&mut self, cell: CellId) {
        self.selection.extend(cell);
    }

    pub fn end_selection(&mut self) {
        self.selection.end();
    }

    /// Escape, outside click or focus loss.
    pub fn cancel_selection(&mut self) {
        self.selection.clear();
    }

    /// Select the rectangle between two cells in one step.
    pub fn select_range(&mut self, from: CellId, to: CellId) -> &BTreeSet<CellId> {
        self.selection.begin(from);
        self.selection.extend(to);
        self.selection.end();
        self.selection.selected()
    }

    /// Delete every selected cell and clear the selection.
    ///
    /// Returns how many occupied cells were removed. An empty selection is
    /// a no-op and does not save.
    pub fn delete_selected(&mut self) -> Result<usize> {
        if self.selection.is_empty() {
            return Ok(0);
        }
        let cells = self.selection.take();
        let removed = self.store.remove_many(&cells);
        tracing::debug!(selected = cells.len(), removed, "deleted selection");
        self.persist()?;
        Ok(removed)
    }

    /// Assign one event to every selected cell and clear the selection.
    ///
    /// The title is validated before anything changes.
    pub fn fill_selection(&mut self, title: &str, color: Color) -> Result<usize> {
        let event = Event::new(title, color).normalized()?;
        if self.selection.is_empty() {
            return Ok(0);
        }
        let cells = self.selection.take();
        for cell in &cells {
            self.store.set(*cell, event.clone())?;
        }
        self.persist()?;
        Ok(cells.len())
    }

    // ── Import ───────────────────────────────────────────────────────

    /// Replace the whole grid from an import payload.
    ///
    /// The store is untouched unless every entry is valid.
    pub fn import_json(&mut self, text: &str) -> Result<usize> {
        let records = transfer::parse_import(text).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected import payload");
        })?;
        self.store.replace_all(records).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected import payload");
        })?;
        tracing::info!(entries = self.store.len(), "imported schedule");
        self.persist()?;
        Ok(self.store.len())
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.persistence.save(&self.store.export()).inspect_err(|e| {
            tracing::warn!(error = %e, "failed to save schedule");
        })
    }
}
