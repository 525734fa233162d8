//! Calendar granularities for range construction, counting and iteration.

use std::fmt;
use std::str::FromStr;

use crate::error::CivilError;

/// A calendar granularity.
///
/// `Invalid` is the zero value. Passing it where a granularity is required
/// is a programming error and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// No unit.
    #[default]
    Invalid,
    /// One calendar day.
    Day,
    /// One calendar month.
    Month,
    /// One calendar year.
    Year,
}

impl Unit {
    /// Returns the `(years, months, days)` offset of one step of this unit,
    /// or `None` for [`Unit::Invalid`].
    pub(crate) fn step(self) -> Option<(i32, i32, i32)> {
        match self {
            Unit::Day => Some((0, 0, 1)),
            Unit::Month => Some((0, 1, 0)),
            Unit::Year => Some((1, 0, 0)),
            Unit::Invalid => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Day => "Day",
            Unit::Month => "Month",
            Unit::Year => "Year",
            Unit::Invalid => "<invalid unit>",
        };
        f.write_str(name)
    }
}

impl FromStr for Unit {
    type Err = CivilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(Unit::Day),
            "month" | "months" => Ok(Unit::Month),
            "year" | "years" => Ok(Unit::Year),
            _ => Err(CivilError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}
