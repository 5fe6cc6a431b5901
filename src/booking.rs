//! The booking calendar as a whole: visible month, selection, quote and the
//! two booking actions.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::grid::{DayCell, build_month_grid_with_range};
use crate::selection::RangeSelector;
use crate::{
    DateOnly, DateRange, NightlyRate, PriceQuote, PricingConfig, VisibleMonth, compute_quote,
};

/// Payload handed to the confirm and contact actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub range:       DateRange,
    pub total_price: Decimal,
    pub nights:      u32,
}

type BookingAction = Box<dyn FnMut(BookingRequest)>;

pub struct BookingCalendar {
    visible:    VisibleMonth,
    selector:   RangeSelector,
    rate:       NightlyRate,
    config:     PricingConfig,
    on_confirm: Option<BookingAction>,
    on_contact: Option<BookingAction>,
}

impl BookingCalendar {
    /// Opens an empty calendar on the month of `min_selectable`.
    pub fn new(min_selectable: DateOnly, rate: NightlyRate, config: PricingConfig) -> Self {
        Self {
            visible: VisibleMonth::containing(&min_selectable),
            selector: RangeSelector::new(min_selectable),
            rate,
            config,
            on_confirm: None,
            on_contact: None,
        }
    }

    /// Seeds the selection and moves the view to it.
    #[must_use]
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.visible = VisibleMonth::initial(&range, self.selector.min_selectable());
        self.selector = self.selector.with_range(range);
        self
    }

    #[must_use]
    pub fn on_range_change(mut self, listener: impl FnMut(&DateRange) + 'static) -> Self {
        self.selector = self.selector.on_change(listener);
        self
    }

    #[must_use]
    pub fn on_confirm_booking(mut self, action: impl FnMut(BookingRequest) + 'static) -> Self {
        self.on_confirm = Some(Box::new(action));
        self
    }

    #[must_use]
    pub fn on_contact_owner(mut self, action: impl FnMut(BookingRequest) + 'static) -> Self {
        self.on_contact = Some(Box::new(action));
        self
    }

    pub const fn visible_month(&self) -> VisibleMonth {
        self.visible
    }

    pub const fn range(&self) -> &DateRange {
        self.selector.range()
    }

    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn set_rate(&mut self, rate: NightlyRate) {
        self.rate = rate;
    }

    /// Cells of the visible month, flagged against the current selection.
    pub fn grid(&self) -> Vec<DayCell> {
        build_month_grid_with_range(
            &self.visible,
            self.selector.min_selectable(),
            self.selector.range(),
        )
    }

    pub fn quote(&self) -> PriceQuote {
        compute_quote(self.selector.range(), self.rate, &self.config)
    }

    /// Whether the booking actions are enabled.
    pub fn can_book(&self) -> bool {
        self.range().is_complete() && self.quote().is_bookable()
    }

    pub fn click_day(&mut self, date: DateOnly) -> bool {
        self.selector.click(date)
    }

    /// Overwrites the selection from outside and notifies the range listener.
    ///
    /// The calendar still owns its range: day clicks keep updating it, so a
    /// caller holding its own copy has to write it back here after each change.
    pub fn set_range(&mut self, range: DateRange) -> bool {
        self.selector.replace(range)
    }

    pub fn reset(&mut self) -> bool {
        self.selector.reset()
    }

    /// Returns `false` when already showing the earliest representable month.
    pub fn previous_month(&mut self) -> bool {
        self.navigate(self.visible.previous())
    }

    /// Returns `false` when already showing the latest representable month.
    pub fn next_month(&mut self) -> bool {
        self.navigate(self.visible.next())
    }

    fn navigate(&mut self, target: Option<VisibleMonth>) -> bool {
        match target {
            Some(month) => {
                self.visible = month;
                true
            },
            None => {
                tracing::debug!(month = %self.visible, "calendar navigation at limit");
                false
            },
        }
    }

    /// Fires the confirm action if a bookable range is selected.
    pub fn confirm_booking(&mut self) -> bool {
        let request = self.booking_request();
        Self::fire(self.on_confirm.as_mut(), request, "confirm booking")
    }

    /// Fires the contact action if a bookable range is selected.
    pub fn contact_owner(&mut self) -> bool {
        let request = self.booking_request();
        Self::fire(self.on_contact.as_mut(), request, "contact owner")
    }

    /// The payload the actions would receive, if the selection is bookable.
    pub fn booking_request(&self) -> Option<BookingRequest> {
        let range = *self.range();
        let quote = self.quote();
        (range.is_complete() && quote.is_bookable()).then_some(BookingRequest {
            range,
            total_price: quote.total,
            nights: quote.nights,
        })
    }

    fn fire(
        action: Option<&mut BookingAction>,
        request: Option<BookingRequest>,
        name: &'static str,
    ) -> bool {
        let Some(request) = request else {
            tracing::debug!(action = name, "no bookable range selected");
            return false;
        };
        let Some(action) = action else {
            return false;
        };
        tracing::info!(
            action = name,
            range = %request.range,
            nights = request.nights,
            total = %request.total_price,
            "booking action"
        );
        action(request);
        true
    }
}

impl fmt::Debug for BookingCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingCalendar")
            .field("visible", &self.visible)
            .field("selector", &self.selector)
            .field("rate", &self.rate)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
