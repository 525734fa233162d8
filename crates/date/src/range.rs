//! Half-open date ranges.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::date::{Date, ENCODED_LEN};
use crate::error::CivilError;
use crate::slice::DateSlice;
use crate::unit::Unit;

/// Length of the canonical `[YYYY-MM-DD,YYYY-MM-DD)` encoding.
const RANGE_ENCODED_LEN: usize = 2 * ENCODED_LEN + 3;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// The half-open interval of days `[start, end)`.
///
/// Construction never checks that `start <= end`. An inverted range
/// contains nothing and iterates over nothing, and counts negative days.
///
/// The [`Default`] value has both endpoints at the zero [`Date`] and is
/// reported by [`DateRange::is_zero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates the range `[start, end)`.
    pub fn new(start: Date, end: Date) -> Self {
        DateRange { start, end }
    }

    /// Creates the range from `start` to `start` advanced by `amount` units.
    ///
    /// A negative `amount` yields an inverted range.
    ///
    /// # Panics
    ///
    /// Panics if `unit` is [`Unit::Invalid`], or if the end date falls
    /// outside the years [`Date::new`] accepts. Use
    /// [`DateRange::checked_with_duration`] for the latter.
    ///
    /// # Examples
    ///
    /// ```
    /// use civil_date::{Date, DateRange, Unit};
    ///
    /// let range = DateRange::with_duration(Date::new(2000, 1, 1), 2, Unit::Month);
    /// assert_eq!(range.end(), Date::new(2000, 3, 1));
    /// ```
    pub fn with_duration(start: Date, amount: i32, unit: Unit) -> Self {
        match DateRange::checked_with_duration(start, amount, unit) {
            Some(range) => range,
            None => panic!("DateRange::with_duration: {start} + {amount} {unit} is out of range"),
        }
    }

    /// Same as [`DateRange::with_duration`], returning `None` when the end
    /// date is out of range.
    ///
    /// # Panics
    ///
    /// Panics if `unit` is [`Unit::Invalid`].
    pub fn checked_with_duration(start: Date, amount: i32, unit: Unit) -> Option<Self> {
        let Some((years, months, days)) = unit.step() else {
            panic!("DateRange::with_duration: unknown duration unit: '{unit}'");
        };
        start
            .checked_add_date(years * amount, months * amount, days * amount)
            .map(|end| DateRange { start, end })
    }

    /// Returns the first day of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the exclusive end of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Reports whether both endpoints are the zero date.
    ///
    /// An empty range such as `[d, d)` is not zero.
    pub fn is_zero(&self) -> bool {
        self.start.is_zero() && self.end.is_zero()
    }

    /// Reports whether both endpoints match `other`'s.
    pub fn equal(&self, other: &DateRange) -> bool {
        self.start.equal(other.start) && self.end.equal(other.end)
    }

    /// Reports whether `start <= date < end`.
    pub fn contains(&self, date: Date) -> bool {
        !self.start.after(date) && date.before(self.end)
    }

    /// Reports whether either range contains the other's start.
    ///
    /// Only start points are tested. Ranges that only touch, `[a, b)` and
    /// `[b, c)`, do not intersect.
    pub fn intersects(&self, other: &DateRange) -> bool {
        self.contains(other.start) || other.contains(self.start)
    }

    /// Counts the whole units between `start` and `end`, negative when the
    /// range is inverted.
    ///
    /// # Panics
    ///
    /// Only [`Unit::Day`] is supported; any other unit panics.
    pub fn count(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Day => {
                let minutes = self
                    .end
                    .utc()
                    .signed_duration_since(self.start.utc())
                    .num_minutes();
                minutes / MINUTES_PER_DAY
            }
            other => panic!("DateRange::count({other}) not implemented"),
        }
    }

    /// Returns a lazy iterator over the dates of the range, stepping from
    /// `start` by one `unit` while the date is before `end`.
    ///
    /// Empty and inverted ranges yield nothing. The iterator is `Clone`,
    /// so it can be restarted from any point.
    ///
    /// # Panics
    ///
    /// Panics if `unit` is [`Unit::Invalid`].
    pub fn iter(&self, unit: Unit) -> Iter {
        let Some(step) = unit.step() else {
            panic!("DateRange::iter: cannot step by '{unit}'");
        };
        Iter {
            next: self.start,
            end: self.end,
            step,
        }
    }

    /// Calls `f` on every date of the range.
    pub fn for_each(&self, unit: Unit, f: impl FnMut(Date)) {
        self.iter(unit).for_each(f);
    }

    /// Calls `f` on every date of the range together with its index.
    pub fn for_each_index(&self, unit: Unit, mut f: impl FnMut(Date, usize)) {
        for (index, date) in self.iter(unit).enumerate() {
            f(date, index);
        }
    }

    /// Calls `f` on every date of the range, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error `f` returns.
    pub fn try_for_each<E>(
        &self,
        unit: Unit,
        mut f: impl FnMut(Date) -> Result<(), E>,
    ) -> Result<(), E> {
        self.try_for_each_index(unit, |date, _| f(date))
    }

    /// Calls `f` on every date of the range together with its index,
    /// stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error `f` returns.
    pub fn try_for_each_index<E>(
        &self,
        unit: Unit,
        mut f: impl FnMut(Date, usize) -> Result<(), E>,
    ) -> Result<(), E> {
        for (index, date) in self.iter(unit).enumerate() {
            f(date, index)?;
        }
        Ok(())
    }

    /// Splits the range at `date` into `[start, date)` and `[date, end)`.
    ///
    /// If `date <= start` the left part is the zero range and the right part
    /// is the whole range. If `date >= end` the left part is the whole range
    /// and the right part is zero.
    pub fn split(&self, date: Date) -> [DateRange; 2] {
        if !date.after(self.start) {
            trace!(range = %self, %date, "split point at or before start");
            [DateRange::default(), *self]
        } else if !date.before(self.end) {
            trace!(range = %self, %date, "split point at or after end");
            [*self, DateRange::default()]
        } else {
            [
                DateRange::new(self.start, date),
                DateRange::new(date, self.end),
            ]
        }
    }

    /// Same as [`DateRange::split`], returning a pair.
    pub fn split2(&self, date: Date) -> (DateRange, DateRange) {
        let [left, right] = self.split(date);
        (left, right)
    }

    /// Collects the dates [`DateRange::iter`] yields.
    pub fn to_slice(&self, unit: Unit) -> DateSlice {
        self.iter(unit).collect()
    }

    /// Returns the canonical `[YYYY-MM-DD,YYYY-MM-DD)` encoding.
    pub fn encode(&self) -> String {
        format!("[{},{})", self.start, self.end)
    }

    /// Replaces `self` with the range encoded in `src`.
    ///
    /// On failure `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::Format`] if `src` is not exactly 23 bytes with
    /// `[` at 0, `,` at 11 and `)` at 22, or if either date is invalid.
    pub fn decode(&mut self, src: &str) -> Result<(), CivilError> {
        *self = decode_canonical(src)?;
        Ok(())
    }
}

fn decode_canonical(src: &str) -> Result<DateRange, CivilError> {
    let invalid = || CivilError::format("date range", src);
    let bytes = src.as_bytes();
    if bytes.len() != RANGE_ENCODED_LEN
        || bytes[0] != b'['
        || bytes[ENCODED_LEN + 1] != b','
        || bytes[RANGE_ENCODED_LEN - 1] != b')'
    {
        debug!(src, "rejecting malformed date range encoding");
        return Err(invalid());
    }
    let start = src
        .get(1..=ENCODED_LEN)
        .and_then(|s| s.parse::<Date>().ok())
        .ok_or_else(invalid)?;
    let end = src
        .get(ENCODED_LEN + 2..RANGE_ENCODED_LEN - 1)
        .and_then(|s| s.parse::<Date>().ok())
        .ok_or_else(invalid)?;
    Ok(DateRange::new(start, end))
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}>", self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = CivilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_canonical(s)
    }
}

/// Iterator over the dates of a [`DateRange`], created by [`DateRange::iter`].
#[derive(Debug, Clone)]
pub struct Iter {
    next: Date,
    end: Date,
    step: (i32, i32, i32),
}

impl Iterator for Iter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if !self.next.before(self.end) {
            return None;
        }
        let current = self.next;
        let (years, months, days) = self.step;
        self.next = current
            .checked_add_date(years, months, days)
            .unwrap_or(self.end);
        Some(current)
    }
}

impl FusedIterator for Iter {}
