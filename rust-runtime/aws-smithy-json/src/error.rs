/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors produced by the JSON codec.

use aws_smithy_types::date_time::DateTimeFormatError;
use aws_smithy_types::error::UnknownVariantError;
use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Failed to serialize a shape as JSON.
#[derive(Debug)]
pub struct JsonSerializeError {
    message: String,
    source: Option<BoxError>,
}

impl JsonSerializeError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

impl From<DateTimeFormatError> for JsonSerializeError {
    fn from(err: DateTimeFormatError) -> Self {
        Self {
            message: "failed to format timestamp".into(),
            source: Some(err.into()),
        }
    }
}

impl fmt::Display for JsonSerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to serialize JSON: {}", self.message)
    }
}

impl Error for JsonSerializeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|err| err.as_ref() as _)
    }
}

/// What went wrong while deserializing JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum JsonDeserializeErrorKind {
    /// The input was not well-formed JSON.
    Syntax,
    /// A value had a different JSON type than its schema requires.
    UnexpectedType,
    /// A number did not fit in its target type.
    NumberOutOfRange,
    /// A timestamp could not be parsed.
    InvalidTimestamp,
    /// A string was not one of the values of its enum.
    UnrecognizedEnumValue,
}

/// Failed to deserialize a shape from JSON.
#[derive(Debug)]
pub struct JsonDeserializeError {
    kind: JsonDeserializeErrorKind,
    message: String,
    source: Option<BoxError>,
}

impl JsonDeserializeError {
    pub(crate) fn new(kind: JsonDeserializeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub(crate) fn unexpected_type(expected: &str, shape: &str) -> Self {
        Self::new(
            JsonDeserializeErrorKind::UnexpectedType,
            format!("expected {} for `{}`", expected, shape),
        )
    }

    /// Returns what went wrong.
    pub fn kind(&self) -> JsonDeserializeErrorKind {
        self.kind
    }
}

impl From<serde_json::Error> for JsonDeserializeError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(JsonDeserializeErrorKind::Syntax, "invalid JSON").with_source(err)
    }
}

impl From<UnknownVariantError> for JsonDeserializeError {
    fn from(err: UnknownVariantError) -> Self {
        Self::new(JsonDeserializeErrorKind::UnrecognizedEnumValue, err.to_string())
            .with_source(err)
    }
}

impl fmt::Display for JsonDeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to deserialize JSON: {}", self.message)
    }
}

impl Error for JsonDeserializeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|err| err.as_ref() as _)
    }
}
