//! serde support.
//!
//! A [`Date`] is a string in its canonical encoding. A [`DateRange`] is an
//! object with `start` and `end` dates; a missing endpoint is the zero date.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;
use crate::range::DateRange;

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DateVisitor;

impl Visitor<'_> for DateVisitor {
    type Value = Date;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date string formatted as YYYY-MM-DD")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Date, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DateVisitor)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "DateRange")]
struct RangeRepr {
    #[serde(default)]
    start: Date,
    #[serde(default)]
    end: Date,
}

impl Serialize for DateRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RangeRepr {
            start: self.start(),
            end: self.end(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RangeRepr::deserialize(deserializer).map(|repr| DateRange::new(repr.start, repr.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_quoted_string() {
        let json = serde_json::to_string(&Date::new(2000, 2, 5)).unwrap();
        assert_eq!(json, r#""2000-02-05""#);
    }

    #[test]
    fn date_rejects_unquoted() {
        assert!(serde_json::from_str::<Date>("20000205").is_err());
        assert!(serde_json::from_str::<Date>("null").is_err());
    }

    #[test]
    fn date_error_names_the_input() {
        let err = serde_json::from_str::<Date>(r#""2000-02-30""#).unwrap_err();
        assert!(err.to_string().contains("invalid date encoding"), "{err}");
    }

    #[test]
    fn range_is_object() {
        let range = DateRange::new(Date::new(2000, 1, 1), Date::new(2010, 2, 1));
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":"2000-01-01","end":"2010-02-01"}"#);
    }

    #[test]
    fn range_missing_fields_are_zero() {
        let range: DateRange = serde_json::from_str("{}").unwrap();
        assert!(range.is_zero());
        let range: DateRange = serde_json::from_str(r#"{"end":"2000-01-01"}"#).unwrap();
        assert!(range.start().is_zero());
        assert_eq!(range.end(), Date::new(2000, 1, 1));
    }

    #[test]
    fn range_rejects_invalid_dates() {
        assert!(serde_json::from_str::<DateRange>(r#"{"start":"x","end":"2000-01-01"}"#).is_err());
        assert!(serde_json::from_str::<DateRange>(r#""[2000-01-01,2000-01-02)""#).is_err());
        assert!(serde_json::from_str::<DateRange>(r#"{"start":"2000-01-01""#).is_err());
    }
}
