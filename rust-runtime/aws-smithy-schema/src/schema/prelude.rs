/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Prelude schemas for built-in Smithy types.
//!
//! This module provides const schemas for Smithy's prelude types,
//! which are the fundamental types available in all Smithy models.

use crate::{Schema, ShapeId, ShapeType};

/// A simple schema implementation for prelude types.
#[derive(Debug)]
pub struct PreludeSchema {
    id: ShapeId,
    shape_type: ShapeType,
}

impl PreludeSchema {
    /// Creates a new prelude schema.
    pub const fn new(id: ShapeId, shape_type: ShapeType) -> Self {
        Self { id, shape_type }
    }
}

impl Schema for PreludeSchema {
    fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    fn shape_type(&self) -> ShapeType {
        self.shape_type
    }
}

// Static schemas for prelude types to allow static lifetime references

/// Schema for `smithy.api#String`
pub static STRING: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#String", "smithy.api", "String"),
    ShapeType::String,
);

/// Schema for `smithy.api#Boolean`
pub static BOOLEAN: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Boolean", "smithy.api", "Boolean"),
    ShapeType::Boolean,
);

/// Schema for `smithy.api#Integer`
pub static INTEGER: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Integer", "smithy.api", "Integer"),
    ShapeType::Integer,
);

/// Schema for `smithy.api#Long`
pub static LONG: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Long", "smithy.api", "Long"),
    ShapeType::Long,
);

/// Schema for `smithy.api#Double`
pub static DOUBLE: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Double", "smithy.api", "Double"),
    ShapeType::Double,
);

/// Schema for `smithy.api#Timestamp`
pub static TIMESTAMP: PreludeSchema = PreludeSchema::new(
    ShapeId::from_static("smithy.api#Timestamp", "smithy.api", "Timestamp"),
    ShapeType::Timestamp,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaExt;

    #[test]
    fn test_string_schema() {
        assert_eq!(STRING.shape_id().as_str(), "smithy.api#String");
        assert_eq!(STRING.shape_type(), ShapeType::String);
        assert!(STRING.is_string());
        assert!(STRING.constraints().length_bounds().is_none());
    }

    #[test]
    fn test_boolean_schema() {
        assert_eq!(BOOLEAN.shape_id().as_str(), "smithy.api#Boolean");
        assert_eq!(BOOLEAN.shape_type(), ShapeType::Boolean);
    }

    #[test]
    fn test_numeric_schemas() {
        assert_eq!(INTEGER.shape_type(), ShapeType::Integer);
        assert_eq!(LONG.shape_type(), ShapeType::Long);
        assert_eq!(DOUBLE.shape_type(), ShapeType::Double);
    }

    #[test]
    fn test_timestamp_schema() {
        assert_eq!(TIMESTAMP.shape_id().as_str(), "smithy.api#Timestamp");
        assert_eq!(TIMESTAMP.shape_type(), ShapeType::Timestamp);
    }

    #[test]
    fn test_all_prelude_types_are_simple() {
        for schema in [&STRING, &BOOLEAN, &INTEGER, &LONG, &DOUBLE, &TIMESTAMP] {
            assert!(schema.shape_type().is_simple());
            assert!(schema.target().is_none());
        }
    }
}
