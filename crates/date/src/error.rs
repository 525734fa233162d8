//! Error types for the civil-date crate.

/// Error type for all fallible operations in the civil-date crate.
///
/// Invalid [`Unit`](crate::Unit) values passed to range construction or
/// counting are not represented here: those are caller contract violations
/// and panic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CivilError {
    /// Text did not match a strftime layout passed to [`Date::parse`](crate::Date::parse).
    #[error("cannot parse {value:?} with layout {layout:?}: {source}")]
    Parse {
        /// The layout the value was parsed against.
        layout: String,
        /// The rejected input.
        value: String,
        /// The underlying chrono parse failure.
        source: chrono::ParseError,
    },

    /// Text was not in the canonical encoding of a date or date range.
    #[error("invalid {kind} encoding: {value:?}")]
    Format {
        /// What was being decoded, `"date"` or `"date range"`.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Normalized year/month/day fell outside the representable calendar.
    #[error("date out of range: year {year}, month {month}, day {day}")]
    OutOfRange {
        /// Requested year before normalization.
        year: i64,
        /// Requested month before normalization.
        month: i64,
        /// Requested day before normalization.
        day: i64,
    },

    /// Text did not name a known unit.
    #[error("unknown unit: {unit:?} (expected day, month or year)")]
    UnknownUnit {
        /// The rejected unit name.
        unit: String,
    },
}

impl CivilError {
    pub(crate) fn format(kind: &'static str, value: &str) -> Self {
        CivilError::Format {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_format_display() {
        let err = CivilError::format("date", "2000-13-01");
        assert_eq!(err.to_string(), "invalid date encoding: \"2000-13-01\"");
    }

    #[test]
    fn error_out_of_range_display() {
        let err = CivilError::OutOfRange {
            year: 300_000,
            month: 1,
            day: 1,
        };
        assert_eq!(
            err.to_string(),
            "date out of range: year 300000, month 1, day 1"
        );
    }

    #[test]
    fn error_unknown_unit_display() {
        let err = CivilError::UnknownUnit {
            unit: "week".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown unit: \"week\" (expected day, month or year)"
        );
    }

    #[test]
    fn error_parse_keeps_source() {
        let source = chrono::NaiveDate::parse_from_str("nope", "%Y-%m-%d").unwrap_err();
        let err = CivilError::Parse {
            layout: "%Y-%m-%d".to_string(),
            value: "nope".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("cannot parse \"nope\""));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CivilError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CivilError>();
    }
}
