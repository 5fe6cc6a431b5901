use std::str::FromStr;

use crate::consts::{
    DATE_SEPARATOR, DECEMBER, JANUARY, LONG_FORMAT_SEPARATOR, MAX_MONTH, MAX_YEAR, MIN_DAY,
    NO_DATE_LABEL,
};
use crate::prelude::*;
use crate::types::{Day, Month, Weekday, Year, days_in_month};

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar
const UNIX_EPOCH_DAY_OFFSET: i64 = 719_468;
/// Days in one 400-year Gregorian cycle
const DAYS_PER_ERA: i64 = 146_097;
/// Weekday index (Monday = 0) of 1970-01-01, a Thursday
const EPOCH_WEEKDAY_INDEX: i64 = 3;

/// A calendar date with no time-of-day.
///
/// Field order makes the derived `Ord` compare year, then month, then day,
/// which is plain chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct DateOnly {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl DateOnly {
    /// Builds a date from already validated components.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Builds a date from raw numbers, validating each component.
    ///
    /// # Errors
    /// Returns the `DateError` variant naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Number of days since 1970-01-01 (negative before it).
    pub const fn day_number(&self) -> i64 {
        let month = self.month.get() as i64;
        let year = self.year.get() as i64 - if month <= 2 { 1 } else { 0 };
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        // March-based month so the leap day falls at the end of the year
        let shifted_month = (month + 9) % 12;
        let day_of_year = (153 * shifted_month + 2) / 5 + self.day.get() as i64 - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_DAY_OFFSET
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_index((self.day_number() + EPOCH_WEEKDAY_INDEX).rem_euclid(7) as usize)
    }

    /// Signed calendar-day difference `self - earlier`.
    pub const fn days_since(&self, earlier: &Self) -> i64 {
        self.day_number() - earlier.day_number()
    }

    /// The following calendar day, or `None` past 9999-12-31.
    pub fn next_day(&self) -> Option<Self> {
        let (year, month, day) = (self.year.get(), self.month.get(), self.day.get());
        if day < days_in_month(year, month) {
            return Self::new(year, month, day + 1).ok();
        }
        if month == DECEMBER {
            if year >= MAX_YEAR {
                return None;
            }
            return Self::new(year + 1, JANUARY, MIN_DAY).ok();
        }
        Self::new(year, month + 1, MIN_DAY).ok()
    }

    /// The preceding calendar day, or `None` before 0001-01-01.
    pub fn previous_day(&self) -> Option<Self> {
        let (year, month, day) = (self.year.get(), self.month.get(), self.day.get());
        if day > MIN_DAY {
            return Self::new(year, month, day - 1).ok();
        }
        if month == JANUARY {
            let year = year.checked_sub(1)?;
            return Self::new(year, DECEMBER, days_in_month(year, DECEMBER)).ok();
        }
        Self::new(year, month - 1, days_in_month(year, month - 1)).ok()
    }

    /// `dd/mm/yyyy`, the form shown in the stay summary.
    pub fn long_format(&self) -> String {
        format!(
            "{:02}{sep}{:02}{sep}{:04}",
            self.day.get(),
            self.month.get(),
            self.year.get(),
            sep = LONG_FORMAT_SEPARATOR
        )
    }
}

/// Calendar-day difference `end - start`.
pub const fn days_between(end: &DateOnly, start: &DateOnly) -> i64 {
    end.days_since(start)
}

/// Long form of an optional date, with a placeholder for an empty slot.
pub fn format_long(date: Option<&DateOnly>) -> String {
    date.map_or_else(|| NO_DATE_LABEL.to_owned(), DateOnly::long_format)
}

impl FromStr for DateOnly {
    type Err = DateError;

    /// Parses strict ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = year
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for DateOnly {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DateOnly {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
