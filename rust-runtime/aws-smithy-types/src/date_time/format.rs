/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug)]
pub(super) enum DateTimeParseErrorKind {
    /// The given date-time string was invalid.
    Invalid(Cow<'static, str>),
    /// Failed to parse an integer inside the given date-time string.
    IntParseError,
}

/// Error returned when a date-time fails to parse.
#[derive(Debug)]
pub struct DateTimeParseError {
    kind: DateTimeParseErrorKind,
}

impl Error for DateTimeParseError {}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DateTimeParseErrorKind::*;
        match &self.kind {
            Invalid(msg) => write!(f, "invalid date-time: {}", msg),
            IntParseError => write!(f, "failed to parse int"),
        }
    }
}

impl From<DateTimeParseErrorKind> for DateTimeParseError {
    fn from(kind: DateTimeParseErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug)]
enum DateTimeFormatErrorKind {
    /// The given date-time cannot be represented in the requested date format.
    OutOfRange(Cow<'static, str>),
}

/// Error returned when date-time formatting fails.
#[derive(Debug)]
pub struct DateTimeFormatError {
    kind: DateTimeFormatErrorKind,
}

impl Error for DateTimeFormatError {}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DateTimeFormatErrorKind::OutOfRange(msg) => write!(
                f,
                "date-time cannot be formatted since it is out of range: {}",
                msg
            ),
        }
    }
}

impl From<DateTimeFormatErrorKind> for DateTimeFormatError {
    fn from(kind: DateTimeFormatErrorKind) -> Self {
        DateTimeFormatError { kind }
    }
}

/// Renders sub-second nanos as a decimal fraction with trailing zeros removed.
fn push_fraction(out: &mut String, subsecond_nanos: u32) {
    if subsecond_nanos != 0 {
        let padded = format!("{:09}", subsecond_nanos);
        out.push('.');
        out.push_str(padded.trim_end_matches('0'));
    }
}

pub(crate) mod epoch_seconds {
    use super::{push_fraction, DateTimeParseError, DateTimeParseErrorKind, NANOS_PER_SECOND};
    use crate::DateTime;

    /// Formats a `DateTime` into the Smithy epoch seconds date-time format.
    pub(crate) fn format(date_time: &DateTime) -> String {
        let (negative, whole, nanos) = if date_time.seconds < 0 && date_time.subsecond_nanos > 0
        {
            (
                true,
                (date_time.seconds + 1).unsigned_abs(),
                NANOS_PER_SECOND - date_time.subsecond_nanos,
            )
        } else {
            (
                date_time.seconds < 0,
                date_time.seconds.unsigned_abs(),
                date_time.subsecond_nanos,
            )
        };
        let mut out = String::with_capacity(24);
        if negative {
            out.push('-');
        }
        out.push_str(&whole.to_string());
        push_fraction(&mut out, nanos);
        out
    }

    /// Parses the Smithy epoch seconds date-time format into a `DateTime`.
    pub(crate) fn parse(value: &str) -> Result<DateTime, DateTimeParseError> {
        let (negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateTimeParseErrorKind::Invalid(
                "expected an integer number of epoch seconds".into(),
            )
            .into());
        }
        let whole: i64 = whole
            .parse()
            .map_err(|_| DateTimeParseErrorKind::IntParseError)?;
        let nanos = match fraction {
            None => 0,
            Some(fraction) => parse_fraction(fraction)?,
        };
        Ok(match (negative, nanos) {
            (false, nanos) => DateTime::from_secs_and_nanos(whole, nanos),
            (true, 0) => DateTime::from_secs(-whole),
            (true, nanos) => DateTime::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos),
        })
    }

    fn parse_fraction(fraction: &str) -> Result<u32, DateTimeParseError> {
        if fraction.is_empty() || fraction.len() > 9 {
            return Err(DateTimeParseErrorKind::Invalid(
                "fractional seconds must have between 1 and 9 digits".into(),
            )
            .into());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateTimeParseErrorKind::Invalid(
                "fractional seconds must be digits".into(),
            )
            .into());
        }
        let digits: u32 = fraction
            .parse()
            .map_err(|_| DateTimeParseErrorKind::IntParseError)?;
        Ok(digits * 10u32.pow(9 - fraction.len() as u32))
    }
}

pub(crate) mod rfc3339 {
    use super::{
        push_fraction, DateTimeFormatError, DateTimeFormatErrorKind, DateTimeParseError,
        DateTimeParseErrorKind,
    };
    use crate::DateTime;
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    /// Formats a `DateTime` as an RFC-3339 date-time in UTC, e.g. `2019-12-16T23:48:18.52Z`.
    pub(crate) fn format(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
        let utc = OffsetDateTime::from_unix_timestamp(date_time.seconds).map_err(|err| {
            DateTimeFormatErrorKind::OutOfRange(format!("{}", err).into())
        })?;
        if !(0..=9999).contains(&utc.year()) {
            return Err(DateTimeFormatErrorKind::OutOfRange(
                "RFC-3339 only supports years 0 through 9999".into(),
            )
            .into());
        }
        let mut out = format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            utc.year(),
            u8::from(utc.month()),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second()
        );
        push_fraction(&mut out, date_time.subsecond_nanos);
        out.push('Z');
        Ok(out)
    }

    /// Parses an RFC-3339 date-time. Offsets other than `Z` are normalized to UTC.
    pub(crate) fn parse(value: &str) -> Result<DateTime, DateTimeParseError> {
        let parsed = OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|err| DateTimeParseErrorKind::Invalid(format!("{}", err).into()))?;
        Ok(DateTime::from_secs_and_nanos(
            parsed.unix_timestamp(),
            parsed.nanosecond(),
        ))
    }
}
