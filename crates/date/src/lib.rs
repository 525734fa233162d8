//! # civil-date
//!
//! Calendar dates without time-of-day or time zone, and half-open ranges
//! of them.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"Date::new()"| B["Date"]
//!     T["DateTime&lt;Tz&gt;"] -->|"Date::from_datetime()"| B
//!     B -->|".add_date()"| B
//!     B -->|"DateRange::new()"| C["DateRange"]
//!     B -->|"DateRange::with_duration()"| C
//!     C -->|".iter() / .to_slice()"| D["DateSlice"]
//!     C -->|".split()"| C
//!     B <-->|"encode / decode"| E["YYYY-MM-DD"]
//!     C <-->|"encode / decode"| F["[YYYY-MM-DD,YYYY-MM-DD)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use civil_date::{Date, DateRange, Unit};
//!
//! // Overflowing fields roll over.
//! assert_eq!(Date::new(2000, 1, 32), Date::new(2000, 2, 1));
//!
//! // Ranges are half-open.
//! let march = DateRange::with_duration(Date::new(2024, 3, 1), 1, Unit::Month);
//! assert_eq!(march.count(Unit::Day), 31);
//! assert!(!march.contains(Date::new(2024, 4, 1)));
//!
//! // Canonical text forms round-trip.
//! assert_eq!(march.encode(), "[2024-03-01,2024-04-01)");
//! assert_eq!(march.encode().parse::<DateRange>().unwrap(), march);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `Date` value type, construction, arithmetic, encoding |
//! | `range` | `DateRange` half-open interval and its iterator |
//! | `unit` | Calendar granularity for construction, counting and iteration |
//! | `slice` | `DateSlice` and `min_date` / `max_date` |
//! | `serde` | JSON-facing `Serialize` / `Deserialize` impls |
//! | `error` | Error types |
//!
//! ## Zero values
//!
//! The zero `Date` is 0001-01-01 and stands for "no date" wherever a date
//! may be absent: `Date::default()`, `DateSlice::find` misses, `min_date(&[])`.
//! That day is therefore indistinguishable from "no date". The zero
//! `DateRange` has both endpoints at the zero date.
//!
//! ## Concurrency
//!
//! All types are plain `Copy` values with no interior mutability. The only
//! mutation is `decode`, which overwrites its receiver in full or not at
//! all; decoding into one shared value from several threads needs the
//! caller's own synchronization.

mod date;
mod error;
mod range;
mod serde;
mod slice;
mod unit;

pub use chrono::Weekday;
pub use date::Date;
pub use error::CivilError;
pub use range::{DateRange, Iter};
pub use slice::{DateSlice, max_date, min_date};
pub use unit::Unit;
