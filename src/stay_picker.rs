//! Separate check-in and check-out pickers, as used by the search bar.
//!
//! Each picker holds a single date. Check-out is only selectable from the day
//! after check-in, and picking a check-in on or after the current check-out
//! clears the check-out.

use std::fmt;

use crate::{DateOnly, DateRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StayField {
    CheckIn,
    CheckOut,
}

type StayListener = Box<dyn FnMut(StayField, Option<DateOnly>)>;

pub struct StayPicker {
    today:     DateOnly,
    check_in:  Option<DateOnly>,
    check_out: Option<DateOnly>,
    on_change: Option<StayListener>,
}

impl StayPicker {
    pub const fn new(today: DateOnly) -> Self {
        Self {
            today,
            check_in: None,
            check_out: None,
            on_change: None,
        }
    }

    /// Seeds both pickers from an existing range. A single-night range keeps
    /// only its check-in, since check-out must fall after it.
    #[must_use]
    pub fn with_range(mut self, range: &DateRange) -> Self {
        self.check_in = range.start();
        self.check_out = range.endpoints().and_then(|(start, end)| (end > start).then_some(end));
        self
    }

    /// Registers a callback fired with each field that changes.
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(StayField, Option<DateOnly>) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub const fn check_in(&self) -> Option<DateOnly> {
        self.check_in
    }

    pub const fn check_out(&self) -> Option<DateOnly> {
        self.check_out
    }

    pub const fn check_in_min(&self) -> DateOnly {
        self.today
    }

    /// Earliest selectable check-out, or `None` while no check-in is chosen.
    pub fn check_out_min(&self) -> Option<DateOnly> {
        let check_in = self.check_in?;
        check_in.next_day().map(|next| next.max(self.today))
    }

    /// Returns `true` if the check-in was accepted.
    pub fn select_check_in(&mut self, date: DateOnly) -> bool {
        if date < self.today {
            tracing::debug!(%date, today = %self.today, "ignoring past check-in");
            return false;
        }
        self.set(StayField::CheckIn, Some(date));
        if self.check_out.is_some_and(|out| date >= out) {
            self.set(StayField::CheckOut, None);
        }
        true
    }

    /// Returns `true` if the check-out was accepted.
    pub fn select_check_out(&mut self, date: DateOnly) -> bool {
        match self.check_out_min() {
            Some(min) if date >= min => {
                self.set(StayField::CheckOut, Some(date));
                true
            },
            min => {
                tracing::debug!(%date, ?min, "ignoring check-out before minimum");
                false
            },
        }
    }

    pub fn clear(&mut self) {
        self.set(StayField::CheckOut, None);
        self.set(StayField::CheckIn, None);
    }

    /// Current selection as a range.
    pub fn range(&self) -> DateRange {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                DateRange::complete(check_in, check_out).unwrap_or(DateRange::starting(check_in))
            },
            (Some(check_in), None) => DateRange::starting(check_in),
            (None, _) => DateRange::EMPTY,
        }
    }

    fn set(&mut self, field: StayField, value: Option<DateOnly>) {
        let slot = match field {
            StayField::CheckIn => &mut self.check_in,
            StayField::CheckOut => &mut self.check_out,
        };
        if *slot == value {
            return;
        }
        *slot = value;
        if let Some(listener) = self.on_change.as_mut() {
            listener(field, value);
        }
    }
}

impl fmt::Debug for StayPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StayPicker")
            .field("today", &self.today)
            .field("check_in", &self.check_in)
            .field("check_out", &self.check_out)
            .finish_non_exhaustive()
    }
}
