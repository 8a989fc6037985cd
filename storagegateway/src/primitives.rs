/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Primitives such as `DateTime` used by other types.

pub use aws_smithy_types::DateTime;

/// Opaque struct used as inner data for the `Unknown` variant defined in enums in the crate.
///
/// While this is not intended to be used directly, it is marked as `pub` because it is part of
/// the enums that are public interface.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct UnknownVariantValue(pub(crate) String);

impl UnknownVariantValue {
    /// Returns the inner `&str` value of this variant.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnknownVariantValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
