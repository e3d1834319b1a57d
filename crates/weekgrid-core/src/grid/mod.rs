//! Fixed week grid: seven Sunday-first day columns by 97 time rows.
//!
//! The slot enumeration here is the only authority on which cells exist.
//! Rows run every 15 minutes from `00:00` through `23:45`, followed by the
//! single `24:00` boundary row that closes the last regular slot.

mod cell;
mod day;
mod slot;

pub use cell::CellId;
pub use day::Day;
pub use slot::{TimeSlot, END_OF_DAY_MINUTES, SLOT_COUNT, SLOT_MINUTES};

/// Every slot of a day in ascending time order, terminal boundary last.
pub fn enumerate_slots() -> Vec<TimeSlot> {
    slots().collect()
}

/// Iterator form of [`enumerate_slots`].
pub fn slots() -> impl Iterator<Item = TimeSlot> {
    std::iter::successors(Some(TimeSlot::MIDNIGHT), |slot| slot.next())
}

/// Minutes since midnight for a slot.
pub fn to_minutes(slot: TimeSlot) -> u16 {
    slot.to_minutes()
}

/// Every cell of one day column, in time order.
pub fn day_cells(day: Day) -> impl Iterator<Item = CellId> {
    slots().map(move |slot| CellId::new(day, slot))
}

/// Every cell of the grid, day-major.
pub fn all_cells() -> impl Iterator<Item = CellId> {
    Day::ALL.into_iter().flat_map(day_cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_97_strictly_increasing_slots() {
        let slots = enumerate_slots();
        assert_eq!(slots.len(), 97);
        assert_eq!(slots.len(), SLOT_COUNT);
        assert!(slots.windows(2).all(|w| to_minutes(w[0]) < to_minutes(w[1])));
        assert_eq!(slots[0].to_string(), "00:00");
        assert_eq!(slots[95].to_string(), "23:45");
        assert_eq!(to_minutes(slots[96]), 1440);
    }

    #[test]
    fn every_slot_is_a_quarter_hour_boundary() {
        for (i, slot) in slots().enumerate() {
            assert_eq!(slot.to_minutes(), i as u16 * SLOT_MINUTES);
            assert_eq!(slot.ordinal(), i);
        }
    }

    #[test]
    fn grid_has_seven_full_columns() {
        assert_eq!(all_cells().count(), 7 * 97);
        assert!(day_cells(Day::Tue).all(|c| c.day == Day::Tue));
    }
}
