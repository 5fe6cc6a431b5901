use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DateError, DateOnly, OPEN_ENDPOINT, RANGE_SEPARATOR};

/// A check-in/check-out selection.
///
/// `end` is only ever present together with `start`, and never before it.
/// Equal endpoints are allowed and stand for a single-night stay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Option<DateOnly>,
    end:   Option<DateOnly>,
}

/// How far a [`DateRange`] has been filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeShape {
    Empty,
    Partial,
    Complete,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Check-out falls before check-in.
    #[error("Invalid date range: end ({end}) is before start ({start})")]
    EndBeforeStart { start: DateOnly, end: DateOnly },

    /// Check-out given without a check-in.
    #[error("Invalid date range: end ({0}) given without a start")]
    EndWithoutStart(DateOnly),

    /// Error parsing an endpoint.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    pub const EMPTY: Self = Self {
        start: None,
        end:   None,
    };

    /// Creates a range from optional endpoints.
    ///
    /// # Errors
    /// Returns `RangeError::EndWithoutStart` if only `end` is given and
    /// `RangeError::EndBeforeStart` if `end < start`.
    pub fn new(start: Option<DateOnly>, end: Option<DateOnly>) -> Result<Self, RangeError> {
        match (start, end) {
            (None, Some(end)) => Err(RangeError::EndWithoutStart(end)),
            (Some(start), Some(end)) if end < start => {
                Err(RangeError::EndBeforeStart { start, end })
            },
            _ => Ok(Self { start, end }),
        }
    }

    /// A range with only a check-in date.
    pub const fn starting(start: DateOnly) -> Self {
        Self {
            start: Some(start),
            end:   None,
        }
    }

    /// A complete range.
    ///
    /// # Errors
    /// Returns `RangeError::EndBeforeStart` if `end < start`.
    pub fn complete(start: DateOnly, end: DateOnly) -> Result<Self, RangeError> {
        Self::new(Some(start), Some(end))
    }

    pub const fn start(&self) -> Option<DateOnly> {
        self.start
    }

    pub const fn end(&self) -> Option<DateOnly> {
        self.end
    }

    /// Both endpoints, when the range is complete
    pub const fn endpoints(&self) -> Option<(DateOnly, DateOnly)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub const fn shape(&self) -> RangeShape {
        match (self.start, self.end) {
            (None, _) => RangeShape::Empty,
            (Some(_), None) => RangeShape::Partial,
            (Some(_), Some(_)) => RangeShape::Complete,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.shape(), RangeShape::Empty)
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self.shape(), RangeShape::Complete)
    }

    pub fn is_start(&self, date: &DateOnly) -> bool {
        self.start.as_ref() == Some(date)
    }

    pub fn is_end(&self, date: &DateOnly) -> bool {
        self.end.as_ref() == Some(date)
    }

    /// Whether `date` lies strictly between the two endpoints.
    pub fn is_strictly_inside(&self, date: &DateOnly) -> bool {
        self.endpoints()
            .is_some_and(|(start, end)| start < *date && *date < end)
    }

    /// Whether `date` lies within the endpoints, inclusive.
    pub fn contains(&self, date: &DateOnly) -> bool {
        self.endpoints()
            .is_some_and(|(start, end)| start <= *date && *date <= end)
    }

    /// Whether the range is a complete selection of one date twice.
    pub fn is_singleton(&self) -> bool {
        self.endpoints().is_some_and(|(start, end)| start == end)
    }
}

fn write_endpoint(f: &mut fmt::Formatter<'_>, date: Option<&DateOnly>) -> fmt::Result {
    match date {
        Some(date) => write!(f, "{date}"),
        None => f.write_str(OPEN_ENDPOINT),
    }
}

/// `start/end`, with `..` standing for an absent endpoint.
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_endpoint(f, self.start.as_ref())?;
        write!(f, "{RANGE_SEPARATOR}")?;
        write_endpoint(f, self.end.as_ref())
    }
}

fn parse_endpoint(s: &str) -> Result<Option<DateOnly>, RangeError> {
    let s = s.trim();
    if s == OPEN_ENDPOINT {
        Ok(None)
    } else {
        Ok(Some(s.parse::<DateOnly>()?))
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match trimmed.split_once(RANGE_SEPARATOR) {
            Some((start, end)) if separator_count == 1 => {
                Self::new(parse_endpoint(start)?, parse_endpoint(end)?)
            },
            Some(_) => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
            None => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, range};

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          Option<DateOnly>,
            end:            Option<DateOnly>,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          None,
                end:            None,
                should_succeed: true,
                description:    "empty",
            },
            TestCase {
                start:          Some(date(2024, 6, 1)),
                end:            None,
                should_succeed: true,
                description:    "partial",
            },
            TestCase {
                start:          Some(date(2024, 6, 1)),
                end:            Some(date(2024, 6, 4)),
                should_succeed: true,
                description:    "complete (start < end)",
            },
            TestCase {
                start:          Some(date(2024, 6, 1)),
                end:            Some(date(2024, 6, 1)),
                should_succeed: true,
                description:    "complete (start == end)",
            },
            TestCase {
                start:          Some(date(2024, 6, 4)),
                end:            Some(date(2024, 6, 1)),
                should_succeed: false,
                description:    "end before start",
            },
            TestCase {
                start:          None,
                end:            Some(date(2024, 6, 1)),
                should_succeed: false,
                description:    "end without start",
            },
        ];

        for case in &cases {
            let result = DateRange::new(case.start, case.end);
            assert_eq!(
                result.is_ok(),
                case.should_succeed,
                "Unexpected result for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_shape() {
        assert_eq!(DateRange::EMPTY.shape(), RangeShape::Empty);
        assert_eq!(DateRange::default(), DateRange::EMPTY);
        assert_eq!(
            DateRange::starting(date(2024, 6, 1)).shape(),
            RangeShape::Partial
        );
        assert_eq!(
            range((2024, 6, 1), (2024, 6, 4)).shape(),
            RangeShape::Complete
        );
    }

    #[test]
    fn test_membership() {
        let r = range((2024, 6, 1), (2024, 6, 4));
        assert!(r.is_start(&date(2024, 6, 1)));
        assert!(r.is_end(&date(2024, 6, 4)));
        assert!(!r.is_strictly_inside(&date(2024, 6, 1)));
        assert!(r.is_strictly_inside(&date(2024, 6, 2)));
        assert!(r.is_strictly_inside(&date(2024, 6, 3)));
        assert!(!r.is_strictly_inside(&date(2024, 6, 4)));
        assert!(r.contains(&date(2024, 6, 4)));
        assert!(!r.contains(&date(2024, 6, 5)));
        assert!(!r.is_singleton());

        let partial = DateRange::starting(date(2024, 6, 1));
        assert!(!partial.contains(&date(2024, 6, 1)));
        assert!(partial.is_start(&date(2024, 6, 1)));
        assert!(!partial.is_singleton());

        assert!(range((2024, 6, 1), (2024, 6, 1)).is_singleton());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            range((2024, 6, 1), (2024, 6, 4)).to_string(),
            "2024-06-01/2024-06-04"
        );
        assert_eq!(
            DateRange::starting(date(2024, 6, 1)).to_string(),
            "2024-06-01/.."
        );
        assert_eq!(DateRange::EMPTY.to_string(), "../..");
    }

    #[test]
    fn test_from_str() {
        let r: DateRange = "2024-06-01/2024-06-04".parse().unwrap();
        assert_eq!(r, range((2024, 6, 1), (2024, 6, 4)));

        let r: DateRange = " 2024-06-01 / .. ".parse().unwrap();
        assert_eq!(r, DateRange::starting(date(2024, 6, 1)));

        let r: DateRange = "../..".parse().unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            "2024-06-04/2024-06-01".parse::<DateRange>(),
            Err(RangeError::EndBeforeStart { .. })
        ));
        assert!(matches!(
            "../2024-06-01".parse::<DateRange>(),
            Err(RangeError::EndWithoutStart(_))
        ));
        assert!(matches!(
            "2024-06-01".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-06-01/2024-06-02/2024-06-03".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-06-01/2024-02-30".parse::<DateRange>(),
            Err(RangeError::Date(DateError::InvalidDay { .. }))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let r = range((2024, 6, 1), (2024, 6, 4));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""2024-06-01/2024-06-04""#);
        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);

        let bad: Result<DateRange, _> = serde_json::from_str(r#""2024-06-04/2024-06-01""#);
        assert!(bad.is_err());
    }
}
