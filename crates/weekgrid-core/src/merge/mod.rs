//! Run-length merge of identical consecutive events, per day.
//!
//! Each day column is walked top to bottom. Consecutive cells holding the
//! same `(title, color)` fold into a run; the first cell of the run (the
//! leader) is rendered with a row span equal to the run length and the rest
//! are suppressed. Runs never cross a day boundary and the result is a pure
//! function of the current store.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::grid::{self, CellId, Day};
use crate::schedule::{Event, ScheduleStore};

/// A merged block: leader cell plus the number of rows it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub leader: CellId,
    pub span: usize,
}

/// Merge output for one day column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayMerge {
    /// Occupied runs in time order, singletons included.
    pub runs: Vec<Run>,
    /// Non-leader members of runs with span >= 2.
    pub suppressed: BTreeSet<CellId>,
}

impl DayMerge {
    /// Span of `cell` if it leads a run.
    pub fn span_of(&self, cell: &CellId) -> Option<usize> {
        self.runs
            .iter()
            .find(|run| run.leader == *cell)
            .map(|run| run.span)
    }

    pub fn is_suppressed(&self, cell: &CellId) -> bool {
        self.suppressed.contains(cell)
    }
}

/// Open run while walking a column.
struct OpenRun<'a> {
    leader: CellId,
    extra: usize,
    event: &'a Event,
}

impl OpenRun<'_> {
    fn close(self, out: &mut Vec<Run>) {
        out.push(Run {
            leader: self.leader,
            span: self.extra + 1,
        });
    }
}

/// Merge one day column.
pub fn merge_day(store: &ScheduleStore, day: Day) -> DayMerge {
    let mut merged = DayMerge::default();
    let mut open: Option<OpenRun<'_>> = None;

    for cell in grid::day_cells(day) {
        let event = store.get(&cell);
        if let (Some(event), Some(run)) = (event, open.as_mut()) {
            if run.event.same_run(event) {
                run.extra += 1;
                merged.suppressed.insert(cell);
                continue;
            }
        }

        // Different event or empty cell: the open run ends here.
        if let Some(run) = open.take() {
            run.close(&mut merged.runs);
        }
        open = event.map(|event| OpenRun {
            leader: cell,
            extra: 0,
            event,
        });
    }

    if let Some(run) = open.take() {
        run.close(&mut merged.runs);
    }
    merged
}

/// Merge output for the whole week, indexed by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekMerge {
    days: Vec<DayMerge>,
}

impl WeekMerge {
    pub fn day(&self, day: Day) -> &DayMerge {
        &self.days[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &DayMerge)> {
        Day::ALL.into_iter().zip(self.days.iter())
    }

    pub fn is_suppressed(&self, cell: &CellId) -> bool {
        self.day(cell.day).is_suppressed(cell)
    }

    pub fn span_of(&self, cell: &CellId) -> Option<usize> {
        self.day(cell.day).span_of(cell)
    }
}

/// Merge every day column independently.
pub fn merge_week(store: &ScheduleStore) -> WeekMerge {
    let days = Day::ALL
        .into_iter()
        .map(|day| merge_day(store, day))
        .collect();
    tracing::debug!(entries = store.len(), "recomputed merge layout");
    WeekMerge { days }
}
