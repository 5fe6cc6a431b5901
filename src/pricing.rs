//! Price quotes for a selected stay.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CLEANING_FEE, DEFAULT_CURRENCY, DEFAULT_SERVICE_FEE_PERCENT, MAX_AMOUNT,
};
use crate::{DateRange, days_between};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Nightly rate must not be negative, got {0}")]
    NegativeRate(Decimal),

    #[error("Nightly rate must not exceed {max}, got {0}", max = MAX_AMOUNT)]
    RateTooLarge(Decimal),

    #[error("Cleaning fee must not be negative, got {0}")]
    NegativeCleaningFee(Decimal),

    #[error("Cleaning fee must not exceed {max}, got {0}", max = MAX_AMOUNT)]
    CleaningFeeTooLarge(Decimal),

    #[error("Service fee rate must be between 0 and 1, got {0}")]
    InvalidServiceFeeRate(Decimal),
}

/// Price of one night, within `0..=MAX_AMOUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct NightlyRate(Decimal);

impl NightlyRate {
    /// # Errors
    /// Returns `PricingError::NegativeRate` for a rate below zero and
    /// `PricingError::RateTooLarge` above `MAX_AMOUNT`.
    pub fn new(rate: Decimal) -> Result<Self, PricingError> {
        if rate < Decimal::ZERO {
            return Err(PricingError::NegativeRate(rate));
        }
        if rate > Decimal::from(MAX_AMOUNT) {
            return Err(PricingError::RateTooLarge(rate));
        }
        Ok(Self(rate))
    }

    pub const fn get(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for NightlyRate {
    type Error = PricingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NightlyRate> for Decimal {
    fn from(rate: NightlyRate) -> Self {
        rate.0
    }
}

impl fmt::Display for NightlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fees applied on top of the nightly subtotal, supplied by the embedding
/// application. Only constructible with in-range values, so any config that
/// reaches [`compute_quote`] yields non-negative fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PricingConfigFields", into = "PricingConfigFields")]
pub struct PricingConfig {
    cleaning_fee:     Decimal,
    service_fee_rate: Decimal,
    currency:         String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cleaning_fee:     Decimal::from(DEFAULT_CLEANING_FEE),
            service_fee_rate: Decimal::new(DEFAULT_SERVICE_FEE_PERCENT, 2),
            currency:         DEFAULT_CURRENCY.to_owned(),
        }
    }
}

impl PricingConfig {
    /// Builds a config with the default currency symbol.
    ///
    /// # Errors
    /// Returns `PricingError` if the cleaning fee falls outside
    /// `0..=MAX_AMOUNT` or the service fee rate outside `0..=1`.
    pub fn new(cleaning_fee: Decimal, service_fee_rate: Decimal) -> Result<Self, PricingError> {
        if cleaning_fee < Decimal::ZERO {
            return Err(PricingError::NegativeCleaningFee(cleaning_fee));
        }
        if cleaning_fee > Decimal::from(MAX_AMOUNT) {
            return Err(PricingError::CleaningFeeTooLarge(cleaning_fee));
        }
        if service_fee_rate < Decimal::ZERO || service_fee_rate > Decimal::ONE {
            return Err(PricingError::InvalidServiceFeeRate(service_fee_rate));
        }
        Ok(Self {
            cleaning_fee,
            service_fee_rate,
            currency: DEFAULT_CURRENCY.to_owned(),
        })
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Flat fee added once per stay.
    pub const fn cleaning_fee(&self) -> Decimal {
        self.cleaning_fee
    }

    /// Fraction of the subtotal charged as service fee (0.12 = 12%).
    pub const fn service_fee_rate(&self) -> Decimal {
        self.service_fee_rate
    }

    /// Symbol prefixed to formatted amounts.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// `€381`, or `€12.5` for fractional amounts.
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{}{}", self.currency, amount.normalize())
    }
}

/// Serialized form of [`PricingConfig`]; missing keys take the defaults.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct PricingConfigFields {
    cleaning_fee:     Decimal,
    service_fee_rate: Decimal,
    currency:         String,
}

impl Default for PricingConfigFields {
    fn default() -> Self {
        PricingConfig::default().into()
    }
}

impl TryFrom<PricingConfigFields> for PricingConfig {
    type Error = PricingError;

    fn try_from(fields: PricingConfigFields) -> Result<Self, Self::Error> {
        Ok(Self::new(fields.cleaning_fee, fields.service_fee_rate)?.with_currency(fields.currency))
    }
}

impl From<PricingConfig> for PricingConfigFields {
    fn from(config: PricingConfig) -> Self {
        Self {
            cleaning_fee:     config.cleaning_fee,
            service_fee_rate: config.service_fee_rate,
            currency:         config.currency,
        }
    }
}

/// Derived price breakdown. Always rebuilt from scratch, never updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub nights:           u32,
    pub nightly_rate:     Decimal,
    pub subtotal:         Decimal,
    pub cleaning_fee:     Decimal,
    pub service_fee_rate: Decimal,
    pub service_fee:      Decimal,
    pub total:            Decimal,
}

impl PriceQuote {
    /// Quote for a range that is not complete yet: every amount is zero.
    pub const fn zero() -> Self {
        Self {
            nights:           0,
            nightly_rate:     Decimal::ZERO,
            subtotal:         Decimal::ZERO,
            cleaning_fee:     Decimal::ZERO,
            service_fee_rate: Decimal::ZERO,
            service_fee:      Decimal::ZERO,
            total:            Decimal::ZERO,
        }
    }

    /// Whether the quote describes a stay that can be booked.
    pub const fn is_bookable(&self) -> bool {
        self.nights > 0
    }

    /// "1 night" or "3 nights"
    pub fn nights_label(&self) -> String {
        let plural = if self.nights == 1 { "" } else { "s" };
        format!("{} night{plural}", self.nights)
    }
}

/// Nights covered by `range`: zero unless complete, and at least one when
/// check-in and check-out coincide.
pub fn nights(range: &DateRange) -> u32 {
    range.endpoints().map_or(0, |(start, end)| {
        u32::try_from(days_between(&end, &start))
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(1)
    })
}

/// Quote for `range` at `rate`. Incomplete ranges price at zero. Rates and
/// fees are bounded on construction, so the arithmetic cannot overflow.
pub fn compute_quote(range: &DateRange, rate: NightlyRate, config: &PricingConfig) -> PriceQuote {
    let nights = nights(range);
    if nights == 0 {
        return PriceQuote::zero();
    }

    let subtotal = Decimal::from(nights) * rate.get();
    let service_fee = (subtotal * config.service_fee_rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let total = subtotal + service_fee + config.cleaning_fee;

    tracing::trace!(%range, nights, %subtotal, %service_fee, %total, "computed quote");

    PriceQuote {
        nights,
        nightly_rate: rate.get(),
        subtotal,
        cleaning_fee: config.cleaning_fee,
        service_fee_rate: config.service_fee_rate,
        service_fee,
        total,
    }
}
