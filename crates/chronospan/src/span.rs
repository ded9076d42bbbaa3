// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use smallvec::SmallVec;
use std::{
    cmp::{max, min},
    ops::{BitAnd, BitOr, Range},
};

/// The error returned when constructing a span whose end precedes its start.
///
/// Carries both offending instants so callers can decide whether to reject
/// the input, clamp it, or swap the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSpanError {
    /// The requested start instant.
    pub start: NaiveDateTime,
    /// The requested end instant, which precedes `start`.
    pub end: NaiveDateTime,
}

impl std::fmt::Display for InvalidSpanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid span: end {} precedes start {}",
            self.end, self.start
        )
    }
}

impl std::error::Error for InvalidSpanError {}

/// A half-open span `[start, end)` between two date-time instants.
///
/// This struct represents a contiguous stretch of time bounded by a start
/// (inclusive) and an end (exclusive). It supports duration measurements,
/// half-open membership and containment queries, and set-theoretic
/// operations such as overlap, union, and difference.
///
/// Spans are timezone-free: both endpoints are `NaiveDateTime` values and
/// comparisons are purely chronological.
///
/// # Invariants
///
/// `end` is always greater than or equal to `start`. Both fallible
/// constructors enforce this; `start == end` is valid and produces a
/// zero-duration span (see [`DateTimeSpan::is_instant`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateTimeSpan {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateTimeSpan {
    /// Creates a new `DateTimeSpan` from two instants.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSpanError`] if `end < start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let span = DateTimeSpan::new(
    ///     day.and_hms_opt(9, 0, 0).unwrap(),
    ///     day.and_hms_opt(17, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(span.duration_in_hours(), 8.0);
    ///
    /// let swapped = DateTimeSpan::new(
    ///     day.and_hms_opt(17, 0, 0).unwrap(),
    ///     day.and_hms_opt(9, 0, 0).unwrap(),
    /// );
    /// assert!(swapped.is_err());
    /// ```
    #[inline]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, InvalidSpanError> {
        if end < start {
            return Err(InvalidSpanError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a new `DateTimeSpan` from a calendar day and two times of day.
    ///
    /// Both times are anchored to the same `day`, so `end_time` must not be
    /// logically "on the next day": an `end_time` earlier than `start_time`
    /// yields an end instant before the start instant and construction
    /// fails. Overnight spans must be built from two explicit instants via
    /// [`DateTimeSpan::new`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSpanError`] if `end_time < start_time`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::{NaiveDate, NaiveTime};
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let shift = DateTimeSpan::from_day_and_times(
    ///     day,
    ///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(shift.duration_in_hours(), 1.5);
    /// ```
    #[inline]
    pub fn from_day_and_times(
        day: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, InvalidSpanError> {
        Self::new(day.and_time(start_time), day.and_time(end_time))
    }

    /// Creates a new `DateTimeSpan` without validating in release builds.
    ///
    /// The caller must ensure `start <= end`. This function contains a
    /// `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(
            start <= end,
            "invalid span: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start instant of the span.
    #[inline]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the exclusive end instant of the span.
    #[inline]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the elapsed time between start and end.
    ///
    /// Never negative, per the construction invariant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::{NaiveDate, TimeDelta};
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let span = DateTimeSpan::new(
    ///     day.and_hms_opt(0, 0, 0).unwrap(),
    ///     day.and_hms_opt(4, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(span.duration(), TimeDelta::hours(4));
    /// ```
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns the duration as a floating-point number of seconds.
    #[inline]
    pub fn duration_in_seconds(&self) -> f64 {
        self.duration().as_seconds_f64()
    }

    /// Returns the duration as a floating-point number of hours.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let span = DateTimeSpan::new(
    ///     day.and_hms_opt(0, 0, 0).unwrap(),
    ///     day.and_hms_opt(4, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(span.duration_in_hours(), 4.0);
    /// ```
    #[inline]
    pub fn duration_in_hours(&self) -> f64 {
        self.duration_in_seconds() / 3600.0
    }

    /// Returns `true` if the span has zero duration (`start == end`).
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `instant` lies within the span.
    ///
    /// Half-open: the start instant is contained, the end instant is not.
    /// An event ending at instant `T` therefore does not contain `T`, which
    /// lets back-to-back spans partition time without double-counting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let span = DateTimeSpan::new(
    ///     day.and_hms_opt(0, 0, 0).unwrap(),
    ///     day.and_hms_opt(4, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// assert!(span.contains_instant(day.and_hms_opt(0, 0, 0).unwrap()));
    /// assert!(span.contains_instant(day.and_hms_opt(3, 59, 0).unwrap()));
    /// assert!(!span.contains_instant(day.and_hms_opt(4, 0, 0).unwrap()));
    /// ```
    #[inline]
    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Returns `true` if `self` lies strictly inside `other`.
    ///
    /// Both edges must be strictly interior: a span sharing either boundary
    /// with `other` is not strictly within it, and no span is strictly
    /// within itself. For boundary-tolerant containment see
    /// [`DateTimeSpan::contains_span`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let hours = |a: u32, b: u32| {
    ///     DateTimeSpan::new(
    ///         day.and_hms_opt(a, 0, 0).unwrap(),
    ///         day.and_hms_opt(b, 0, 0).unwrap(),
    ///     )
    ///     .unwrap()
    /// };
    /// assert!(hours(1, 3).is_strictly_within(hours(0, 4)));
    /// assert!(!hours(0, 3).is_strictly_within(hours(0, 4))); // shared start
    /// assert!(!hours(1, 4).is_strictly_within(hours(0, 4))); // shared end
    /// ```
    #[inline]
    pub fn is_strictly_within(&self, other: Self) -> bool {
        other.start < self.start && self.end < other.end
    }

    /// Returns `true` if `other` is contained in `self`, boundaries allowed.
    ///
    /// Every span contains itself under this query.
    #[inline]
    pub fn contains_span(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two spans share at least one instant.
    ///
    /// Half-open: adjacent spans where one's end equals the other's start
    /// share no instant and do not intersect. The query is symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let hours = |a: u32, b: u32| {
    ///     DateTimeSpan::new(
    ///         day.and_hms_opt(a, 0, 0).unwrap(),
    ///         day.and_hms_opt(b, 0, 0).unwrap(),
    ///     )
    ///     .unwrap()
    /// };
    /// assert!(hours(1, 3).intersects(hours(0, 4)));
    /// assert!(!hours(0, 4).intersects(hours(5, 6))); // gap
    /// assert!(!hours(0, 4).intersects(hours(4, 6))); // back-to-back
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        let (first, second) = if self.start < other.start {
            (*self, other)
        } else {
            (other, *self)
        };
        first.end > second.start
    }

    /// Returns the span of instants common to `self` and `other`, if any.
    ///
    /// The result runs from the later start to the earlier end. Spans that
    /// merely touch at a boundary produce a zero-duration result here even
    /// though [`DateTimeSpan::intersects`] reports them as non-intersecting;
    /// callers that must treat touching spans as disjoint should check
    /// `intersects` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let hours = |a: u32, b: u32| {
    ///     DateTimeSpan::new(
    ///         day.and_hms_opt(a, 0, 0).unwrap(),
    ///         day.and_hms_opt(b, 0, 0).unwrap(),
    ///     )
    ///     .unwrap()
    /// };
    /// assert_eq!(hours(0, 3).overlap(hours(2, 5)), Some(hours(2, 3)));
    /// assert_eq!(hours(0, 3).overlap(hours(4, 5)), None);
    ///
    /// // Touching spans collapse to an instant.
    /// let touch = hours(0, 3).overlap(hours(3, 5)).unwrap();
    /// assert!(touch.is_instant());
    /// ```
    #[inline]
    pub fn overlap(&self, other: Self) -> Option<Self> {
        if self.end < other.start || other.end < self.start {
            return None;
        }
        Some(Self::new_unchecked(
            max(self.start, other.start),
            min(self.end, other.end),
        ))
    }

    /// Returns `true` if the spans share a boundary but no instants.
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        !self.intersects(other) && (self.end == other.start || other.end == self.start)
    }

    /// Returns the contiguous cover of two intersecting or adjacent spans.
    ///
    /// Returns `None` when the spans are separated by a gap, since the
    /// result could not be represented as a single span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let hours = |a: u32, b: u32| {
    ///     DateTimeSpan::new(
    ///         day.and_hms_opt(a, 0, 0).unwrap(),
    ///         day.and_hms_opt(b, 0, 0).unwrap(),
    ///     )
    ///     .unwrap()
    /// };
    /// assert_eq!(hours(0, 2).union(hours(2, 5)), Some(hours(0, 5)));
    /// assert_eq!(hours(0, 2).union(hours(3, 5)), None);
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.end < other.start || other.end < self.start {
            return None;
        }
        Some(Self::new_unchecked(
            min(self.start, other.start),
            max(self.end, other.end),
        ))
    }

    /// Returns the span strictly between two disjoint spans.
    ///
    /// Returns `None` if the spans intersect or touch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let hours = |a: u32, b: u32| {
    ///     DateTimeSpan::new(
    ///         day.and_hms_opt(a, 0, 0).unwrap(),
    ///         day.and_hms_opt(b, 0, 0).unwrap(),
    ///     )
    ///     .unwrap()
    /// };
    /// assert_eq!(hours(0, 2).gap(hours(5, 6)), Some(hours(2, 5)));
    /// assert_eq!(hours(5, 6).gap(hours(0, 2)), Some(hours(2, 5)));
    /// assert_eq!(hours(0, 2).gap(hours(2, 6)), None);
    /// ```
    #[inline]
    pub fn gap(&self, other: Self) -> Option<Self> {
        if self.end < other.start {
            Some(Self::new_unchecked(self.end, other.start))
        } else if other.end < self.start {
            Some(Self::new_unchecked(other.end, self.start))
        } else {
            None
        }
    }

    /// Returns `self` with the part covered by `other` removed.
    ///
    /// # Returns
    ///
    /// A vector containing:
    /// * 0 spans: if `other` fully covers `self`.
    /// * 1 span: if `other` clips one side of `self` or does not intersect it.
    /// * 2 spans: if `other` is strictly inside `self`, splitting it in two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chronospan::span::DateTimeSpan;
    /// # use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let hours = |a: u32, b: u32| {
    ///     DateTimeSpan::new(
    ///         day.and_hms_opt(a, 0, 0).unwrap(),
    ///         day.and_hms_opt(b, 0, 0).unwrap(),
    ///     )
    ///     .unwrap()
    /// };
    /// let parts = hours(0, 10).difference(hours(4, 6));
    /// assert_eq!(parts.as_slice(), &[hours(0, 4), hours(6, 10)]);
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<[Self; 2]> {
        if !self.intersects(other) {
            return smallvec::smallvec![*self];
        }

        let mut parts = SmallVec::new();
        if self.start < other.start {
            parts.push(Self::new_unchecked(self.start, other.start));
        }
        if other.end < self.end {
            parts.push(Self::new_unchecked(other.end, self.end));
        }
        parts
    }
}

impl BitAnd for DateTimeSpan {
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.overlap(rhs)
    }
}

impl BitOr for DateTimeSpan {
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::fmt::Display for DateTimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl std::ops::RangeBounds<NaiveDateTime> for DateTimeSpan {
    fn start_bound(&self) -> std::ops::Bound<&NaiveDateTime> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&NaiveDateTime> {
        std::ops::Bound::Excluded(&self.end)
    }
}

impl TryFrom<Range<NaiveDateTime>> for DateTimeSpan {
    type Error = InvalidSpanError;

    #[inline]
    fn try_from(range: Range<NaiveDateTime>) -> Result<Self, Self::Error> {
        Self::new(range.start, range.end)
    }
}

impl From<DateTimeSpan> for Range<NaiveDateTime> {
    #[inline]
    fn from(span: DateTimeSpan) -> Self {
        Range {
            start: span.start,
            end: span.end,
        }
    }
}
