//! Rectangular drag selection.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -(begin)-> Selecting -(extend)*-> Selecting -(end)-> Idle
//! Idle | Selecting -(clear)-> Idle, empty set
//! ```
//!
//! The selected set survives `end` so a later bulk action (delete, fill)
//! can consume it. It is never persisted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::grid::{self, CellId, Day};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    Idle,
    Selecting,
}

/// Drag-selection state machine over grid cells.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    state: SelectionState,
    anchor: Option<CellId>,
    selected: BTreeSet<CellId>,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Idle,
            anchor: None,
            selected: BTreeSet::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn anchor(&self) -> Option<CellId> {
        self.anchor
    }

    pub fn selected(&self) -> &BTreeSet<CellId> {
        &self.selected
    }

    pub fn is_selected(&self, cell: &CellId) -> bool {
        self.selected.contains(cell)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Start a drag at `cell`; the selection becomes `{cell}`.
    pub fn begin(&mut self, cell: CellId) {
        self.state = SelectionState::Selecting;
        self.anchor = Some(cell);
        self.selected.clear();
        self.selected.insert(cell);
    }

    /// Recompute the rectangle between the anchor and `cell`.
    ///
    /// No-op unless a drag is in progress. The set is rebuilt from scratch
    /// each call so it shrinks as well as grows.
    pub fn extend(&mut self, cell: CellId) {
        if self.state != SelectionState::Selecting {
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };
        self.selected = rectangle(anchor, cell);
    }

    /// Finish the drag. The selected set is kept.
    pub fn end(&mut self) {
        self.state = SelectionState::Idle;
        self.anchor = None;
    }

    /// Drop the selection and any drag in progress.
    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
        self.anchor = None;
        self.selected.clear();
    }

    /// Hand the selected cells to the caller and clear.
    pub fn take(&mut self) -> BTreeSet<CellId> {
        let taken = std::mem::take(&mut self.selected);
        self.clear();
        taken
    }
}

/// Every cell inside the inclusive day-index by minutes box spanned by `a` and `b`.
pub fn rectangle(a: CellId, b: CellId) -> BTreeSet<CellId> {
    let (day_lo, day_hi) = ordered(a.day_index(), b.day_index());
    let (min_lo, min_hi) = ordered(a.minutes(), b.minutes());

    Day::ALL[day_lo..=day_hi]
        .iter()
        .flat_map(|&day| grid::day_cells(day))
        .filter(|cell| (min_lo..=min_hi).contains(&cell.minutes()))
        .collect()
}

fn ordered<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(key: &str) -> CellId {
        key.parse().unwrap()
    }

    #[test]
    fn begin_selects_single_cell() {
        let mut sel = SelectionEngine::new();
        sel.begin(cell("mon-09:00"));
        assert_eq!(sel.state(), SelectionState::Selecting);
        assert_eq!(sel.len(), 1);
        assert!(sel.is_selected(&cell("mon-09:00")));
    }

    #[test]
    fn extend_to_anchor_is_singleton() {
        let mut sel = SelectionEngine::new();
        sel.begin(cell("wed-12:30"));
        sel.extend(cell("wed-12:30"));
        assert_eq!(
            sel.selected().iter().copied().collect::<Vec<_>>(),
            vec![cell("wed-12:30")]
        );
    }

    #[test]
    fn extend_builds_rectangle_in_any_direction() {
        let mut sel = SelectionEngine::new();
        sel.begin(cell("wed-10:00"));
        sel.extend(cell("mon-09:30"));
        // mon..wed x 09:30..10:00 = 3 days x 3 slots
        assert_eq!(sel.len(), 9);
        assert!(sel.is_selected(&cell("tue-09:45")));
        assert!(!sel.is_selected(&cell("thu-09:45")));
        assert!(!sel.is_selected(&cell("mon-10:15")));
    }

    #[test]
    fn extend_can_shrink() {
        let mut sel = SelectionEngine::new();
        sel.begin(cell("mon-09:00"));
        sel.extend(cell("fri-17:00"));
        let big = sel.len();
        sel.extend(cell("mon-09:15"));
        assert!(sel.len() < big);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn extend_without_drag_is_noop() {
        let mut sel = SelectionEngine::new();
        sel.extend(cell("mon-09:00"));
        assert!(sel.is_empty());

        sel.begin(cell("mon-09:00"));
        sel.end();
        sel.extend(cell("tue-10:00"));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn end_keeps_selection_clear_drops_it() {
        let mut sel = SelectionEngine::new();
        sel.begin(cell("sun-00:00"));
        sel.extend(cell("sun-00:45"));
        sel.end();
        assert_eq!(sel.state(), SelectionState::Idle);
        assert_eq!(sel.len(), 4);
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), None);
    }

    #[test]
    fn rectangle_reaches_terminal_row() {
        let rect = rectangle(cell("sat-23:30"), cell("sat-24:00"));
        assert_eq!(rect.len(), 3);
        assert!(rect.contains(&cell("sat-24:00")));
    }

    #[test]
    fn take_returns_and_clears() {
        let mut sel = SelectionEngine::new();
        sel.begin(cell("thu-08:00"));
        sel.extend(cell("thu-08:15"));
        let taken = sel.take();
        assert_eq!(taken.len(), 2);
        assert!(sel.is_empty());
    }
}
