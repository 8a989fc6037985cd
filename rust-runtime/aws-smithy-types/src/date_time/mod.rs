/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! DateTime type for representing Smithy timestamps.
//!
//! Unlike [`std::time::SystemTime`], the time inside this type can be read directly. It also
//! holds the logic for parsing and formatting the timestamp formats used by the JSON protocols.

use num_integer::div_mod_floor;
use std::fmt;

mod format;

pub use self::format::{DateTimeFormatError, DateTimeParseError};

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_SECOND: u32 = 1_000_000_000;

/* ANCHOR: date_time */

/// DateTime in time.
///
/// DateTime in time represented as seconds and sub-second nanos since
/// the Unix epoch (January 1, 1970 at midnight UTC/GMT).
///
/// Ordering follows the instant in time. Equality and hashing are exact, so two values are only
/// equal if both their seconds and sub-second nanos match.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct DateTime {
    pub(crate) seconds: i64,
    pub(crate) subsecond_nanos: u32,
}

/* ANCHOR_END: date_time */

impl DateTime {
    /// Creates a `DateTime` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from a number of milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> DateTime {
        let (seconds, millis) = div_mod_floor(epoch_millis, MILLIS_PER_SECOND);
        DateTime::from_secs_and_nanos(seconds, millis as u32 * NANOS_PER_MILLI)
    }

    /// Creates a `DateTime` from a number of seconds and a fractional second since the Unix epoch.
    ///
    /// # Example
    /// ```
    /// # use aws_smithy_types::DateTime;
    /// assert_eq!(
    ///     DateTime::from_secs_and_nanos(1, 500_000_000u32),
    ///     DateTime::from_fractional_secs(1, 0.5),
    /// );
    /// ```
    pub fn from_fractional_secs(epoch_seconds: i64, fraction: f64) -> Self {
        let subsecond_nanos = (fraction * 1_000_000_000_f64) as u32;
        DateTime::from_secs_and_nanos(epoch_seconds, subsecond_nanos)
    }

    /// Creates a `DateTime` from a number of seconds and sub-second nanos since the Unix epoch.
    ///
    /// # Panics
    /// This function will panic if `subsecond_nanos` is >= 1_000_000_000
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= NANOS_PER_SECOND {
            panic!("{} is >= 1_000_000_000", subsecond_nanos)
        }
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates a `DateTime` from an `f64` representing the number of seconds since the Unix epoch.
    ///
    /// # Example
    /// ```
    /// # use aws_smithy_types::DateTime;
    /// assert_eq!(
    ///     DateTime::from_fractional_secs(1, 0.5),
    ///     DateTime::from_secs_f64(1.5),
    /// );
    /// ```
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        DateTime::from_fractional_secs(seconds, rem)
    }

    /// Returns the `DateTime` value as an `f64` representing the seconds since the Unix epoch.
    ///
    /// _Note: This conversion will lose precision due to the nature of floating point numbers._
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    /// Parses a `DateTime` from a string using the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    /// Returns true if sub-second nanos is greater than zero.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Returns the epoch seconds component of the `DateTime`.
    ///
    /// _Note: this does not include the sub-second nanos._
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos component of the `DateTime`.
    ///
    /// _Note: this does not include the number of seconds since the epoch._
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats the `DateTime` to a string using the given `format`.
    ///
    /// Returns an error if the given `DateTime` can't be represented by the desired format.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.fmt(Format::DateTime).map_err(|_| fmt::Error)?;
        write!(f, "{}", date)
    }
}

/// Formats for representing a `DateTime` in the Smithy protocols.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Format {
    /// RFC-3339 Date Time. If the date time has an offset, an error will be returned
    DateTime,
    /// Number of seconds since the Unix epoch formatted as a floating point.
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use crate::date_time::Format;
    use crate::DateTime;
    use proptest::proptest;

    #[test]
    fn test_fmt() {
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098");

        let date_time = DateTime::from_fractional_secs(1576540098, 0.52);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(
            date_time.fmt(Format::EpochSeconds).unwrap(),
            "1576540098.52"
        );
    }

    #[test]
    fn test_fmt_zero_seconds() {
        let date_time = DateTime::from_secs(1576540080);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:00Z"
        );
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540080");
    }

    #[test]
    fn test_display() {
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(format!("{}", date_time), "2019-12-16T23:48:18Z");
    }

    #[test]
    fn negative_epoch_seconds() {
        let date_time = DateTime::from_secs_and_nanos(-2, 500_000_000);
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "-1.5");
        assert_eq!(
            DateTime::from_str("-1.5", Format::EpochSeconds).unwrap(),
            date_time
        );
        assert_eq!(
            DateTime::from_str("-0.5", Format::EpochSeconds).unwrap(),
            DateTime::from_secs_and_nanos(-1, 500_000_000)
        );
    }

    #[test]
    fn parse_date_time_with_offset() {
        assert_eq!(
            DateTime::from_str("2019-12-16T15:48:18-08:00", Format::DateTime).unwrap(),
            DateTime::from_secs(1576540098)
        );
        assert!(DateTime::from_str("2019-12-16", Format::DateTime).is_err());
    }

    #[test]
    fn parse_epoch_seconds_rejects_garbage() {
        assert!(DateTime::from_str("", Format::EpochSeconds).is_err());
        assert!(DateTime::from_str("12.", Format::EpochSeconds).is_err());
        assert!(DateTime::from_str("12.1234567891", Format::EpochSeconds).is_err());
        assert!(DateTime::from_str("1e5", Format::EpochSeconds).is_err());
    }

    #[test]
    fn from_millis() {
        assert_eq!(
            DateTime::from_millis(-1),
            DateTime::from_secs_and_nanos(-1, 999_000_000)
        );
        assert_eq!(
            DateTime::from_millis(1_500),
            DateTime::from_secs_and_nanos(1, 500_000_000)
        );
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = DateTime::from_secs_and_nanos(-1, 999_999_999);
        let later = DateTime::from_secs(0);
        assert!(earlier < later);
    }

    proptest! {
        #[test]
        fn epoch_seconds_round_trip(secs in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
            let date_time = DateTime::from_secs_and_nanos(secs, nanos);
            let formatted = date_time.fmt(Format::EpochSeconds).unwrap();
            assert_eq!(DateTime::from_str(&formatted, Format::EpochSeconds).unwrap(), date_time);
        }

        #[test]
        fn date_time_round_trip(secs in 0i64..253_402_300_799i64, nanos in 0u32..1_000_000_000u32) {
            let date_time = DateTime::from_secs_and_nanos(secs, nanos);
            let formatted = date_time.fmt(Format::DateTime).unwrap();
            assert_eq!(DateTime::from_str(&formatted, Format::DateTime).unwrap(), date_time);
        }
    }
}
