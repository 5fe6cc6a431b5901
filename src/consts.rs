/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month names for calendar headers (index 0 is unused)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one week
pub const DAYS_PER_WEEK: usize = 7;

/// Column headers of the month grid, Monday first
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["M", "T", "W", "T", "F", "S", "S"];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Marker for an open range endpoint
pub const OPEN_ENDPOINT: &str = "..";
/// Separator of the long `dd/mm/yyyy` display form
pub const LONG_FORMAT_SEPARATOR: char = '/';

/// Placeholder shown in place of an unselected date
pub const NO_DATE_LABEL: &str = "Select dates";

/// Fixed cleaning fee added to every complete quote
pub const DEFAULT_CLEANING_FEE: i64 = 45;
/// Service fee rate in hundredths (12%)
pub const DEFAULT_SERVICE_FEE_PERCENT: i64 = 12;
/// Currency symbol used when formatting amounts
pub const DEFAULT_CURRENCY: &str = "€";
/// Largest accepted nightly rate or cleaning fee. Even the longest
/// representable stay priced at this rate stays far inside `Decimal`'s range.
pub const MAX_AMOUNT: i64 = 1_000_000_000;
