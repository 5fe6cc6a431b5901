//! Check-in/check-out selection driven by day clicks.
//!
//! | current  | click `d`       | next                 |
//! |----------|-----------------|----------------------|
//! | empty    | any             | `{d, ..}`            |
//! | partial  | `d < start`     | `{d, ..}`            |
//! | partial  | `d == start`    | `{start, start}`     |
//! | partial  | `d > start`     | `{start, d}`         |
//! | complete | any             | `{d, ..}`            |
//!
//! Clicks before the minimum selectable date leave the range untouched.

use std::fmt;

use crate::{DateOnly, DateRange, RangeShape};

/// The range that follows a click on `clicked`, or `None` if the click is
/// ignored because the date is not selectable.
pub fn next_range(
    current: &DateRange,
    clicked: DateOnly,
    min_selectable: &DateOnly,
) -> Option<DateRange> {
    if clicked < *min_selectable {
        return None;
    }

    let next = match (current.shape(), current.start()) {
        (RangeShape::Partial, Some(start)) if clicked >= start => {
            DateRange::complete(start, clicked).ok()?
        },
        _ => DateRange::starting(clicked),
    };
    Some(next)
}

type RangeListener = Box<dyn FnMut(&DateRange)>;

/// Holds the evolving selection and reports every change to a listener.
pub struct RangeSelector {
    range:          DateRange,
    min_selectable: DateOnly,
    on_change:      Option<RangeListener>,
}

impl RangeSelector {
    pub const fn new(min_selectable: DateOnly) -> Self {
        Self {
            range: DateRange::EMPTY,
            min_selectable,
            on_change: None,
        }
    }

    /// Starts from a caller-provided range instead of an empty one.
    #[must_use]
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Registers the range-changed callback.
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(&DateRange) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    pub const fn min_selectable(&self) -> &DateOnly {
        &self.min_selectable
    }

    /// Whether a click on `date` would be accepted.
    pub fn is_selectable(&self, date: &DateOnly) -> bool {
        *date >= self.min_selectable
    }

    /// Applies a day click. Returns `true` if the range changed.
    pub fn click(&mut self, date: DateOnly) -> bool {
        let Some(next) = next_range(&self.range, date, &self.min_selectable) else {
            tracing::debug!(%date, min = %self.min_selectable, "ignoring click on disabled date");
            return false;
        };
        self.replace(next)
    }

    /// Replaces the whole range, notifying the listener if it differs.
    pub fn replace(&mut self, range: DateRange) -> bool {
        if range == self.range {
            return false;
        }
        tracing::debug!(from = %self.range, to = %range, "range changed");
        self.range = range;
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.range);
        }
        true
    }

    /// Clears the selection.
    pub fn reset(&mut self) -> bool {
        self.replace(DateRange::EMPTY)
    }
}

impl fmt::Debug for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelector")
            .field("range", &self.range)
            .field("min_selectable", &self.min_selectable)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::test_utils::{date, range};

    fn clicks(min: DateOnly, dates: &[DateOnly]) -> DateRange {
        let mut selector = RangeSelector::new(min);
        for d in dates {
            selector.click(*d);
        }
        *selector.range()
    }

    #[test]
    fn test_transition_table() {
        struct TestCase {
            current:     DateRange,
            clicked:     DateOnly,
            expected:    DateRange,
            description: &'static str,
        }

        let a = date(2024, 6, 10);
        let cases = [
            TestCase {
                current:     DateRange::EMPTY,
                clicked:     a,
                expected:    DateRange::starting(a),
                description: "empty starts a selection",
            },
            TestCase {
                current:     DateRange::starting(a),
                clicked:     date(2024, 6, 8),
                expected:    DateRange::starting(date(2024, 6, 8)),
                description: "earlier date restarts",
            },
            TestCase {
                current:     DateRange::starting(a),
                clicked:     a,
                expected:    range((2024, 6, 10), (2024, 6, 10)),
                description: "same date completes a single night",
            },
            TestCase {
                current:     DateRange::starting(a),
                clicked:     date(2024, 6, 14),
                expected:    range((2024, 6, 10), (2024, 6, 14)),
                description: "later date completes",
            },
            TestCase {
                current:     range((2024, 6, 10), (2024, 6, 14)),
                clicked:     date(2024, 6, 12),
                expected:    DateRange::starting(date(2024, 6, 12)),
                description: "complete always restarts",
            },
        ];

        let min = date(2024, 6, 1);
        for case in &cases {
            assert_eq!(
                next_range(&case.current, case.clicked, &min),
                Some(case.expected),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_disabled_click_is_noop() {
        let min = date(2024, 6, 10);
        assert_eq!(next_range(&DateRange::EMPTY, date(2024, 6, 9), &min), None);

        let partial = DateRange::starting(date(2024, 6, 12));
        assert_eq!(next_range(&partial, date(2024, 6, 1), &min), None);

        // The minimum itself is selectable
        assert_eq!(
            next_range(&DateRange::EMPTY, min, &min),
            Some(DateRange::starting(min))
        );
    }

    #[test]
    fn test_click_sequences() {
        let min = date(2024, 6, 1);
        let a = date(2024, 6, 10);
        let b = date(2024, 6, 13);
        let c = date(2024, 6, 5);

        assert_eq!(clicks(min, &[a, b]), range((2024, 6, 10), (2024, 6, 13)));
        assert_eq!(clicks(min, &[a, a]), range((2024, 6, 10), (2024, 6, 10)));
        assert_eq!(clicks(min, &[a, c]), DateRange::starting(c));
        assert_eq!(clicks(min, &[a, b, c]), DateRange::starting(c));
        assert_eq!(
            clicks(min, &[a, c, b]),
            range((2024, 6, 5), (2024, 6, 13))
        );
    }

    #[test]
    fn test_listener_sees_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut selector = RangeSelector::new(date(2024, 6, 1))
            .on_change(move |r: &DateRange| sink.borrow_mut().push(*r));

        assert!(selector.click(date(2024, 6, 10)));
        assert!(!selector.click(date(2024, 5, 31)));
        assert!(selector.click(date(2024, 6, 12)));
        assert!(selector.reset());
        assert!(!selector.reset());

        assert_eq!(
            *seen.borrow(),
            vec![
                DateRange::starting(date(2024, 6, 10)),
                range((2024, 6, 10), (2024, 6, 12)),
                DateRange::EMPTY,
            ]
        );
    }

    #[test]
    fn test_seeded_range() {
        let mut selector = RangeSelector::new(date(2024, 6, 1))
            .with_range(range((2024, 6, 10), (2024, 6, 12)));
        assert!(selector.range().is_complete());
        selector.click(date(2024, 6, 20));
        assert_eq!(*selector.range(), DateRange::starting(date(2024, 6, 20)));
        assert!(selector.is_selectable(&date(2024, 6, 1)));
        assert!(!selector.is_selectable(&date(2024, 5, 31)));
    }
}
