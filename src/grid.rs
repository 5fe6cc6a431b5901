//! Month grid construction.
//!
//! A grid is a flat, week-aligned sequence of cells: leading blanks up to the
//! weekday of the 1st, one cell per day, then trailing blanks to complete the
//! last week. Weeks start on Monday.

use crate::consts::DAYS_PER_WEEK;
use crate::{DateOnly, DateRange, VisibleMonth};

/// One day of the grid with its display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub date:        DateOnly,
    /// Before the minimum selectable date; clicks on it are ignored.
    pub disabled:    bool,
    pub range_start: bool,
    pub range_end:   bool,
    /// Strictly between check-in and check-out.
    pub in_range:    bool,
    /// Check-in and check-out are this same date.
    pub singleton:   bool,
}

impl CalendarDay {
    fn new(date: DateOnly, min_selectable: &DateOnly, range: &DateRange) -> Self {
        Self {
            date,
            disabled: date < *min_selectable,
            range_start: range.is_start(&date),
            range_end: range.is_end(&date),
            in_range: range.is_strictly_inside(&date),
            singleton: range.is_singleton() && range.is_start(&date),
        }
    }

    /// Start or end of the selection.
    pub const fn is_selected(&self) -> bool {
        self.range_start || self.range_end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCell {
    /// Filler for week alignment.
    Blank,
    Day(CalendarDay),
}

impl DayCell {
    pub const fn day(&self) -> Option<&CalendarDay> {
        match self {
            Self::Blank => None,
            Self::Day(day) => Some(day),
        }
    }

    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Cells for `month`, without any selection flags set.
pub fn build_month_grid(month: &VisibleMonth, min_selectable: &DateOnly) -> Vec<DayCell> {
    build_month_grid_with_range(month, min_selectable, &DateRange::EMPTY)
}

/// Cells for `month`, flagged against the current selection.
pub fn build_month_grid_with_range(
    month: &VisibleMonth,
    min_selectable: &DateOnly,
    range: &DateRange,
) -> Vec<DayCell> {
    let start_offset = month.first_weekday().index();
    let days_in_month = usize::from(month.days_in_month());
    let total_cells = (start_offset + days_in_month).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

    (0..total_cells)
        .map(|index| {
            index
                .checked_sub(start_offset)
                .and_then(|offset| u8::try_from(offset + 1).ok())
                .and_then(|day_number| month.day(day_number))
                .map_or(DayCell::Blank, |date| {
                    DayCell::Day(CalendarDay::new(date, min_selectable, range))
                })
        })
        .collect()
}

/// Splits a grid into rows of seven cells.
pub fn weeks(cells: &[DayCell]) -> impl Iterator<Item = &[DayCell]> {
    cells.chunks(DAYS_PER_WEEK)
}
