//! Render-ready snapshot of the grid.
//!
//! A renderer consumes a [`GridLayout`] and nothing else: per-cell content,
//! row spans, suppression and selection flags. Renderers are expected to
//! reset any prior visual state before applying a new layout.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::grid::{self, CellId, Day, TimeSlot};
use crate::merge::{self, Run};
use crate::palette::Color;
use crate::schedule::ScheduleStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub id: CellId,
    pub has_event: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Rows covered when this cell leads a run, otherwise 1.
    pub span: usize,
    /// Hidden because a leader above already covers it.
    pub suppressed: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayColumn {
    pub day: Day,
    pub runs: Vec<Run>,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub slots: Vec<TimeSlot>,
    pub columns: Vec<DayColumn>,
}

impl GridLayout {
    /// Build from the current store contents and selection.
    pub fn build(store: &ScheduleStore, selected: &BTreeSet<CellId>) -> Self {
        let week = merge::merge_week(store);
        let columns = week
            .iter()
            .map(|(day, merged)| {
                let cells = grid::day_cells(day)
                    .map(|id| {
                        let event = store.get(&id);
                        CellView {
                            id,
                            has_event: event.is_some(),
                            title: event.map(|e| e.title.clone()),
                            color: event.map(|e| e.color),
                            span: merged.span_of(&id).unwrap_or(1),
                            suppressed: merged.is_suppressed(&id),
                            selected: selected.contains(&id),
                        }
                    })
                    .collect();
                DayColumn {
                    day,
                    runs: merged.runs.clone(),
                    cells,
                }
            })
            .collect();

        Self {
            slots: grid::enumerate_slots(),
            columns,
        }
    }

    pub fn column(&self, day: Day) -> &DayColumn {
        &self.columns[day.index()]
    }

    pub fn cell(&self, id: &CellId) -> &CellView {
        &self.column(id.day).cells[id.slot.ordinal()]
    }
}
