//! Calendar date without time-of-day or time zone.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use chrono::format::{DelayedFormat, StrftimeItems};
use chrono::{
    DateTime, Datelike, Days, Local, LocalResult, NaiveDate, NaiveTime, Offset, TimeDelta,
    TimeZone, Utc, Weekday,
};
use tracing::debug;

use crate::error::CivilError;
use crate::range::DateRange;
use crate::unit::Unit;

/// Layout of the canonical text encoding, `YYYY-MM-DD`.
pub(crate) const ENCODING_LAYOUT: &str = "%Y-%m-%d";

/// Length of the canonical text encoding.
pub(crate) const ENCODED_LEN: usize = 10;

/// Years that fit the four-digit canonical encoding.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A calendar day in the proleptic Gregorian calendar.
///
/// The value is anchored at midnight UTC, so two dates are equal exactly
/// when they denote the same calendar day, whatever zone they were built
/// from. Ordering is chronological.
///
/// The [`Default`] value is the zero date, January 1 of year 1. It doubles
/// as "no date" for [`Date::is_zero`], [`DateSlice::find`](crate::DateSlice::find)
/// and the empty-input case of [`min_date`](crate::min_date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    anchor: NaiveDate,
}

impl Default for Date {
    fn default() -> Self {
        Date::zero()
    }
}

impl Date {
    /// Returns the zero date, 0001-01-01.
    pub fn zero() -> Self {
        Date {
            anchor: NaiveDate::from_ymd_opt(1, 1, 1).expect("0001-01-01 is representable"),
        }
    }

    /// Creates a date from year, month and day.
    ///
    /// Out-of-range months and days roll over into the adjacent months and
    /// years: day 32 of January is February 1, month 13 is January of the
    /// following year, day 0 is the last day of the previous month.
    ///
    /// # Panics
    ///
    /// Panics if the normalized year is outside 0..=9999, the years the
    /// `YYYY-MM-DD` encoding can hold. Use [`Date::try_new`] to handle that
    /// case.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        match Date::try_new(year, month, day) {
            Ok(date) => date,
            Err(err) => panic!("Date::new: {err}"),
        }
    }

    /// Creates a date from year, month and day with the roll-over rules of
    /// [`Date::new`].
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::OutOfRange`] if the normalized year is outside
    /// 0..=9999.
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, CivilError> {
        normalize(i64::from(year), i64::from(month), i64::from(day))
            .map(Date::from_naive)
            .ok_or(CivilError::OutOfRange {
                year: i64::from(year),
                month: i64::from(month),
                day: i64::from(day),
            })
    }

    /// Wraps a chrono date.
    ///
    /// No year check is made here; see [`Date::encode`] for dates outside
    /// 0..=9999.
    pub fn from_naive(date: NaiveDate) -> Self {
        Date { anchor: date }
    }

    /// Returns the calendar date `t` denotes in its own time zone.
    ///
    /// The zone is used for this one conversion and then dropped.
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        Date::from_naive(t.date_naive())
    }

    /// Returns the current date in `tz`.
    pub fn today_in<Tz: TimeZone>(tz: &Tz) -> Self {
        Date::from_datetime(&Utc::now().with_timezone(tz))
    }

    /// Returns the current date in the system's local time zone.
    pub fn today() -> Self {
        Date::from_datetime(&Local::now())
    }

    /// Parses `value` with a strftime `layout` and keeps the date part.
    ///
    /// Time-of-day and offset fields in the layout are accepted and
    /// discarded; the date is the one written in the text.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::Parse`] if `value` does not match `layout`, or
    /// if the layout does not pin down a single day. A layout without a day
    /// field such as `"%Y-%m"` is rejected rather than defaulting to the
    /// first of the month.
    pub fn parse(layout: &str, value: &str) -> Result<Self, CivilError> {
        NaiveDate::parse_from_str(value, layout)
            .map(Date::from_naive)
            .map_err(|source| CivilError::Parse {
                layout: layout.to_string(),
                value: value.to_string(),
                source,
            })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.anchor.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.anchor.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.anchor.day()
    }

    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.anchor.weekday()
    }

    /// Returns the ISO 8601 `(year, week)` this date falls in.
    ///
    /// Early January days may belong to the last week of the previous
    /// year, late December days to week 1 of the next.
    pub fn iso_week(self) -> (i32, u32) {
        let week = self.anchor.iso_week();
        (week.year(), week.week())
    }

    /// Adds signed year, month and day offsets with the roll-over rules of
    /// [`Date::new`].
    ///
    /// The offsets are added to the fields before normalizing, so
    /// January 31 plus one month is March 2 (or March 3 in a common year).
    ///
    /// # Panics
    ///
    /// Panics if the resulting year is outside 0..=9999.
    pub fn add_date(self, years: i32, months: i32, days: i32) -> Self {
        match self.checked_add_date(years, months, days) {
            Some(date) => date,
            None => panic!("Date::add_date: {self} + ({years}y, {months}m, {days}d) is out of range"),
        }
    }

    /// Same as [`Date::add_date`], returning `None` instead of panicking
    /// when the resulting year is outside 0..=9999.
    pub fn checked_add_date(self, years: i32, months: i32, days: i32) -> Option<Self> {
        normalize(
            i64::from(self.year()) + i64::from(years),
            i64::from(self.month()) + i64::from(months),
            i64::from(self.day()) + i64::from(days),
        )
        .map(Date::from_naive)
    }

    /// Returns the signed number of days from `other` to `self`.
    ///
    /// Positive when `self` is later. Equivalent to
    /// `DateRange::new(other, self).count(Unit::Day)`.
    pub fn difference(self, other: Date) -> i64 {
        DateRange::new(other, self).count(Unit::Day)
    }

    /// Reports whether `self` is an earlier day than `other`.
    pub fn before(self, other: Date) -> bool {
        self.anchor < other.anchor
    }

    /// Reports whether `self` is a later day than `other`.
    pub fn after(self, other: Date) -> bool {
        self.anchor > other.anchor
    }

    /// Reports whether both values denote the same day.
    pub fn equal(self, other: Date) -> bool {
        self.anchor == other.anchor
    }

    /// Reports whether this is the zero date, 0001-01-01.
    pub fn is_zero(self) -> bool {
        self == Date::zero()
    }

    /// Returns midnight of this date in `tz`.
    ///
    /// If midnight is ambiguous the earlier instant is used. If midnight
    /// falls in a gap (a DST jump at midnight) the result is the instant
    /// that would have been midnight under the offset in force before the
    /// gap, which lands just after the gap on the same day.
    pub fn in_tz<Tz: TimeZone>(self, tz: &Tz) -> DateTime<Tz> {
        let midnight = self.anchor.and_time(NaiveTime::MIN);
        match tz.from_local_datetime(&midnight) {
            LocalResult::Single(t) => t,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => {
                let before = tz
                    .offset_from_utc_datetime(&(midnight - TimeDelta::days(1)))
                    .fix();
                let utc = midnight - TimeDelta::seconds(i64::from(before.local_minus_utc()));
                tz.from_utc_datetime(&utc)
            }
        }
    }

    /// Returns midnight of this date in the system's local time zone.
    pub fn local(self) -> DateTime<Local> {
        self.in_tz(&Local)
    }

    /// Returns midnight UTC of this date.
    pub fn utc(self) -> DateTime<Utc> {
        self.in_tz(&Utc)
    }

    /// Returns the underlying chrono date.
    pub fn naive(self) -> NaiveDate {
        self.anchor
    }

    /// Formats midnight UTC of this date with a strftime `layout`.
    pub fn format<'a>(self, layout: &'a str) -> DelayedFormat<StrftimeItems<'a>> {
        self.utc().format(layout)
    }

    /// Returns the canonical `YYYY-MM-DD` encoding.
    ///
    /// Every date built by [`Date::new`], [`Date::try_new`] or
    /// [`Date::add_date`] has a year in 0..=9999 and encodes to exactly 10
    /// characters that [`Date::decode`] accepts. A date wrapped from a
    /// chrono value outside those years encodes to a longer or signed form
    /// that does not decode.
    pub fn encode(self) -> String {
        self.to_string()
    }

    /// Replaces `self` with the date encoded in `value`.
    ///
    /// `value` must be exactly `YYYY-MM-DD`. On failure `self` is left
    /// untouched. Decoding into a value shared between threads must be
    /// serialized by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::Format`] if `value` is not a valid canonical
    /// encoding.
    pub fn decode(&mut self, value: &str) -> Result<(), CivilError> {
        *self = decode_canonical(value)?;
        Ok(())
    }
}

/// Folds overflowing months into years, then days into months. Results
/// outside [`YEARS`] are rejected.
fn normalize(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let months = year.checked_mul(12)?.checked_add(month - 1)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = day - 1;
    let date = if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }?;
    YEARS.contains(&date.year()).then_some(date)
}

fn decode_canonical(value: &str) -> Result<Date, CivilError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == ENCODED_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        debug!(value, "rejecting malformed date encoding");
        return Err(CivilError::format("date", value));
    }
    NaiveDate::parse_from_str(value, ENCODING_LAYOUT)
        .map(Date::from_naive)
        .map_err(|err| {
            debug!(value, %err, "rejecting invalid date");
            CivilError::format("date", value)
        })
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.ymd();
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

impl FromStr for Date {
    type Err = CivilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_canonical(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::from_naive(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.anchor
    }
}

/// Days from `rhs` to `self`, as [`Date::difference`].
impl Sub for Date {
    type Output = i64;

    fn sub(self, rhs: Date) -> i64 {
        self.difference(rhs)
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn new_valid() {
        let date = Date::new(2000, 1, 1);
        assert_eq!(date.ymd(), (2000, 1, 1));
    }

    #[test]
    fn new_rolls_day_into_next_month() {
        assert_eq!(Date::new(2000, 1, 32), Date::new(2000, 2, 1));
        assert_eq!(Date::new(2000, 2, 30), Date::new(2000, 3, 1));
        assert_eq!(Date::new(2001, 2, 29), Date::new(2001, 3, 1));
    }

    #[test]
    fn new_rolls_month_into_next_year() {
        assert_eq!(Date::new(2000, 13, 1), Date::new(2001, 1, 1));
        assert_eq!(Date::new(2000, 25, 1), Date::new(2002, 1, 1));
    }

    #[test]
    fn new_rolls_backwards() {
        assert_eq!(Date::new(2000, 3, 0), Date::new(2000, 2, 29));
        assert_eq!(Date::new(2000, 0, 1), Date::new(1999, 12, 1));
        assert_eq!(Date::new(2000, 1, -30), Date::new(1999, 12, 1));
    }

    #[test]
    fn try_new_out_of_range() {
        assert_eq!(
            Date::try_new(i32::MAX, 1, 1).unwrap_err(),
            CivilError::OutOfRange {
                year: i64::from(i32::MAX),
                month: 1,
                day: 1,
            }
        );
    }

    #[test]
    fn try_new_year_bounds() {
        assert_eq!(Date::try_new(0, 1, 1).unwrap().encode(), "0000-01-01");
        assert_eq!(Date::try_new(9999, 12, 31).unwrap().encode(), "9999-12-31");
        assert_eq!(
            Date::try_new(10000, 1, 1).unwrap_err(),
            CivilError::OutOfRange {
                year: 10000,
                month: 1,
                day: 1,
            }
        );
        assert!(Date::try_new(-1, 6, 1).is_err());
        // Roll-over past either end is caught after normalizing.
        assert!(Date::try_new(9999, 12, 32).is_err());
        assert!(Date::try_new(0, 1, 0).is_err());
    }

    #[test]
    fn checked_add_date_year_bounds() {
        let last = Date::new(9999, 12, 31);
        assert_eq!(last.checked_add_date(0, 0, 1), None);
        assert_eq!(Date::new(0, 1, 1).checked_add_date(0, 0, -1), None);
        assert_eq!(
            Date::new(2000, 1, 1).checked_add_date(300_000, 0, 0),
            None
        );
        assert_eq!(last.checked_add_date(0, 0, -1), Some(Date::new(9999, 12, 30)));
    }

    #[test]
    fn encode_at_year_bounds_decodes() {
        for date in [Date::new(0, 1, 1), Date::new(9999, 12, 31)] {
            let encoded = date.encode();
            assert_eq!(encoded.len(), ENCODED_LEN);
            assert_eq!(encoded.parse::<Date>().unwrap(), date);
        }
    }

    #[test]
    fn encode_outside_year_bounds_does_not_decode() {
        let far = Date::from_naive(NaiveDate::from_ymd_opt(10000, 1, 1).unwrap());
        assert_eq!(far.encode(), "10000-01-01");
        assert!(far.encode().parse::<Date>().is_err());
    }

    #[test]
    fn parse_layout_without_day_is_rejected() {
        assert!(matches!(
            Date::parse("%Y-%m", "2010-12").unwrap_err(),
            CivilError::Parse { .. }
        ));
    }

    #[test]
    #[should_panic(expected = "Date::new")]
    fn new_out_of_range_panics() {
        Date::new(i32::MAX, 12, 31);
    }

    #[test]
    fn zero() {
        assert!(Date::default().is_zero());
        assert!(Date::new(1, 1, 1).is_zero());
        assert!(!Date::new(2000, 1, 1).is_zero());
        assert!(!Date::new(1, 1, 2).is_zero());
    }

    #[test]
    fn from_datetime_uses_attached_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let t = tokyo.with_ymd_and_hms(2000, 1, 1, 3, 0, 0).unwrap();
        // 1999-12-31T18:00 UTC, but the date in Tokyo is what counts.
        assert_eq!(Date::from_datetime(&t), Date::new(2000, 1, 1));
        assert_eq!(Date::from_datetime(&t.with_timezone(&Utc)), Date::new(1999, 12, 31));
    }

    #[test]
    fn accessors() {
        let date = Date::new(2024, 3, 15);
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 15);
        assert_eq!(date.weekday(), Weekday::Fri);
        assert_eq!(date.iso_week(), (2024, 11));
    }

    #[test]
    fn iso_week_crosses_year() {
        assert_eq!(Date::new(2021, 1, 1).iso_week(), (2020, 53));
        assert_eq!(Date::new(2024, 12, 30).iso_week(), (2025, 1));
    }

    #[test]
    fn add_date_applies_offsets_then_normalizes() {
        let date = Date::new(2000, 1, 31);
        assert_eq!(date.add_date(0, 0, 1), Date::new(2000, 2, 1));
        assert_eq!(date.add_date(0, 1, 0), Date::new(2000, 3, 2));
        assert_eq!(date.add_date(1, 1, 0), Date::new(2001, 3, 3));
        assert_eq!(date.add_date(0, 0, -31), Date::new(1999, 12, 31));
        assert_eq!(Date::new(2000, 2, 29).add_date(1, 0, 0), Date::new(2001, 3, 1));
    }

    #[test]
    fn difference() {
        let a = Date::new(2001, 1, 1);
        let b = Date::new(2000, 1, 1);
        assert_eq!(a.difference(b), 366);
        assert_eq!(b.difference(a), -366);
        assert_eq!(a.difference(a), 0);
        assert_eq!(a - b, 366);
    }

    #[test]
    fn comparisons() {
        let early = Date::new(2000, 1, 1);
        let late = Date::new(2000, 1, 2);
        assert!(early.before(late));
        assert!(!late.before(early));
        assert!(late.after(early));
        assert!(!early.after(early));
        assert!(early.equal(Date::new(1999, 12, 32)));
        assert!(early < late);
    }

    #[test]
    fn in_tz_is_midnight() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let t = Date::new(2000, 6, 15).in_tz(&offset);
        assert_eq!(t, offset.with_ymd_and_hms(2000, 6, 15, 0, 0, 0).unwrap());
        assert_eq!(Date::from_datetime(&t), Date::new(2000, 6, 15));
    }

    #[test]
    fn utc_is_midnight() {
        let t = Date::new(2000, 6, 15).utc();
        assert_eq!(t, Utc.with_ymd_and_hms(2000, 6, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn local_round_trips() {
        let date = Date::new(2000, 6, 15);
        assert_eq!(Date::from_datetime(&date.local()), date);
    }

    #[test]
    fn format_layout() {
        let date = Date::new(2000, 2, 5);
        assert_eq!(date.format("%d/%m/%Y").to_string(), "05/02/2000");
        assert_eq!(date.format("%A %H:%M").to_string(), "Saturday 00:00");
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(Date::new(2000, 2, 5).to_string(), "2000-02-05");
        assert_eq!(Date::zero().to_string(), "0001-01-01");
        assert_eq!(Date::new(987, 10, 11).encode(), "0987-10-11");
    }

    #[test]
    fn parse_with_layout() {
        let date = Date::parse("%d.%m.%Y", "24.12.2010").unwrap();
        assert_eq!(date, Date::new(2010, 12, 24));
        let date = Date::parse("%Y-%m-%dT%H:%M:%S%z", "2010-12-24T23:30:00-0500").unwrap();
        assert_eq!(date, Date::new(2010, 12, 24));
    }

    #[test]
    fn parse_mismatch() {
        let err = Date::parse("%Y-%m-%d", "24.12.2010").unwrap_err();
        assert!(matches!(err, CivilError::Parse { .. }));
    }

    #[test]
    fn decode_valid() {
        let mut date = Date::default();
        date.decode("2010-12-24").unwrap();
        assert_eq!(date, Date::new(2010, 12, 24));
    }

    #[test]
    fn decode_failure_leaves_target() {
        let mut date = Date::new(2000, 1, 1);
        for bad in [
            "",
            "2010-12-2",
            "2010-12-245",
            "2010/12/24",
            "2010-1-024",
            "+010-12-24",
            "2010-02-30",
            "2010-13-01",
            "2010-00-10",
        ] {
            assert_eq!(
                date.decode(bad).unwrap_err(),
                CivilError::format("date", bad),
                "{bad:?} should be rejected"
            );
            assert_eq!(date, Date::new(2000, 1, 1));
        }
    }

    #[test]
    fn from_str() {
        assert_eq!("2000-02-29".parse::<Date>().unwrap(), Date::new(2000, 2, 29));
        assert!("2001-02-29".parse::<Date>().is_err());
    }

    #[test]
    fn naive_conversions() {
        let naive = NaiveDate::from_ymd_opt(2000, 5, 6).unwrap();
        let date = Date::from(naive);
        assert_eq!(date.naive(), naive);
        assert_eq!(NaiveDate::from(date), naive);
    }

    #[test]
    fn copy_and_hash() {
        fn assert_impl<T: Copy + std::hash::Hash + Send + Sync>() {}
        assert_impl::<Date>();
    }
}
