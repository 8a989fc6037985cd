/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Enumeration of Smithy shape types.
///
/// This represents the shape types a generated client needs at runtime,
/// including simple types, aggregate types, and the special member type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShapeType {
    // Simple types
    /// Boolean type
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    String,
    /// String with a closed set of allowed values
    Enum,
    /// Timestamp
    Timestamp,

    // Aggregate types
    /// List type
    List,
    /// Map type
    Map,
    /// Structure type
    Structure,

    // Member
    /// Member shape
    Member,
}

impl ShapeType {
    /// Returns true if this is a simple type.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Integer
                | Self::Long
                | Self::Double
                | Self::String
                | Self::Enum
                | Self::Timestamp
        )
    }

    /// Returns true if this is an aggregate type.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Structure)
    }

    /// Returns true if this is a member type.
    #[inline]
    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member)
    }
}
