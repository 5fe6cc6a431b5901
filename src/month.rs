use crate::consts::{DECEMBER, JANUARY};
use crate::prelude::*;
use crate::types::{Day, Month, Weekday, Year, days_in_month};
use crate::{DateOnly, DateRange};

/// The month a calendar is currently showing.
///
/// Independent of the selected range: only explicit previous/next navigation
/// moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct VisibleMonth {
    year:  Year,
    month: Month,
}

impl VisibleMonth {
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// The month that contains `date`.
    pub const fn containing(date: &DateOnly) -> Self {
        Self {
            year:  date.year(),
            month: date.month(),
        }
    }

    /// Month to open the calendar on: the seeded check-in's month if it is
    /// after the minimum selectable date, otherwise the minimum's month.
    pub fn initial(range: &DateRange, min_selectable: &DateOnly) -> Self {
        match range.start() {
            Some(start) if start > *min_selectable => Self::containing(&start),
            _ => Self::containing(min_selectable),
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }

    pub const fn first_day(&self) -> DateOnly {
        DateOnly::from_parts(self.year, self.month, Day::FIRST)
    }

    /// Weekday of the 1st, Monday-first.
    pub fn first_weekday(&self) -> Weekday {
        self.first_day().weekday()
    }

    /// The `n`th day of this month, if it exists.
    pub fn day(&self, n: u8) -> Option<DateOnly> {
        Day::new(n, self.year, self.month)
            .ok()
            .map(|day| DateOnly::from_parts(self.year, self.month, day))
    }

    /// Following month, or `None` past December 9999.
    pub fn next(&self) -> Option<Self> {
        if self.month.get() == DECEMBER {
            let year = Year::new(self.year.get() + 1).ok()?;
            Some(Self::new(year, Month::new(JANUARY).ok()?))
        } else {
            Some(Self::new(self.year, Month::new(self.month.get() + 1).ok()?))
        }
    }

    /// Preceding month, or `None` before January 0001.
    pub fn previous(&self) -> Option<Self> {
        if self.month.get() == JANUARY {
            let year = Year::new(self.year.get() - 1).ok()?;
            Some(Self::new(year, Month::new(DECEMBER).ok()?))
        } else {
            Some(Self::new(self.year, Month::new(self.month.get() - 1).ok()?))
        }
    }

    /// Header label such as "June 2024".
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }
}
