use rust_decimal::Decimal;

use crate::{DateOnly, DateRange, Month, NightlyRate, VisibleMonth, Year};

pub fn year(y: u16) -> Year {
    Year::new(y).unwrap()
}

pub fn month(m: u8) -> Month {
    Month::new(m).unwrap()
}

pub fn month_of(y: u16, m: u8) -> VisibleMonth {
    VisibleMonth::new(year(y), month(m))
}

pub fn date(y: u16, m: u8, d: u8) -> DateOnly {
    DateOnly::new(y, m, d).unwrap()
}

pub fn range(start: (u16, u8, u8), end: (u16, u8, u8)) -> DateRange {
    DateRange::complete(date(start.0, start.1, start.2), date(end.0, end.1, end.2)).unwrap()
}

pub fn rate(amount: i64) -> NightlyRate {
    NightlyRate::new(Decimal::from(amount)).unwrap()
}
