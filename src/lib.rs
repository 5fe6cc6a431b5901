//! Date-range selection and price quotes for a short-term rental booking
//! calendar.
//!
//! Three pieces compose in a line: [`grid`] lays out a Monday-first month of
//! [`DayCell`]s, [`selection`] turns day clicks into a [`DateRange`], and
//! [`pricing`] derives a [`PriceQuote`] from that range. [`BookingCalendar`]
//! wires them together behind the confirm/contact actions. Everything is
//! synchronous and free of I/O.

mod consts;
mod date;
mod month;
mod prelude;
mod range;
mod types;

pub mod booking;
pub mod grid;
pub mod pricing;
pub mod selection;
pub mod stay_picker;

#[cfg(test)]
mod test_utils;

pub use booking::{BookingCalendar, BookingRequest};
pub use consts::*;
pub use date::{DateError, DateOnly, days_between, format_long};
pub use grid::{CalendarDay, DayCell, build_month_grid, build_month_grid_with_range};
pub use month::VisibleMonth;
pub use pricing::{NightlyRate, PriceQuote, PricingConfig, PricingError, compute_quote, nights};
pub use range::{DateRange, RangeError, RangeShape};
pub use selection::{RangeSelector, next_range};
pub use stay_picker::{StayField, StayPicker};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
