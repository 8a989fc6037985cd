/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors for Smithy codegen

use std::fmt;

pub mod metadata;

pub use metadata::ErrorMetadata;

/// Error returned when a string does not name one of an enumeration's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    value: String,
    enumeration: &'static str,
}

impl UnknownVariantError {
    /// Creates a new `UnknownVariantError` for `value` that was rejected by `enumeration`.
    pub fn new(enumeration: &'static str, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            enumeration,
        }
    }

    /// Returns the value that was not recognized.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the name of the enumeration that rejected the value.
    pub fn enumeration(&self) -> &'static str {
        self.enumeration
    }
}

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` is not a recognized value for {}",
            self.value, self.enumeration
        )
    }
}

impl std::error::Error for UnknownVariantError {}

#[cfg(test)]
mod test {
    use super::UnknownVariantError;

    #[test]
    fn unknown_variant_display() {
        let err = UnknownVariantError::new("ObjectACL", "world-writable");
        assert_eq!(err.value(), "world-writable");
        assert_eq!(
            err.to_string(),
            "`world-writable` is not a recognized value for ObjectACL"
        );
    }
}
