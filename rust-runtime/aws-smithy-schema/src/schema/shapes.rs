/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schemas for modeled shapes.
//!
//! All of these can be built in `const` context so generated code declares them as statics.

use crate::{Constraints, Schema, ShapeId, ShapeType};
use aws_smithy_types::error::UnknownVariantError;
use std::fmt;

/// Schema of a structure member.
///
/// Member schemas answer collection and structure queries on behalf of their target, so a
/// member targeting a list can be handed to anything expecting the list schema itself.
pub struct MemberSchema {
    id: ShapeId,
    name: &'static str,
    index: usize,
    target: &'static dyn Schema,
    constraints: Constraints,
}

impl MemberSchema {
    /// Creates a new member schema.
    ///
    /// `name` is the member name as it appears on the wire and `index` its position in the
    /// containing structure's declaration order.
    pub const fn new(
        id: ShapeId,
        name: &'static str,
        index: usize,
        target: &'static dyn Schema,
        constraints: Constraints,
    ) -> Self {
        Self {
            id,
            name,
            index,
            target,
            constraints,
        }
    }
}

impl fmt::Debug for MemberSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberSchema")
            .field("id", &self.id.as_str())
            .field("target", &self.target.shape_id().as_str())
            .field("constraints", &self.constraints)
            .finish()
    }
}

impl Schema for MemberSchema {
    fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Member
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn member_name(&self) -> Option<&str> {
        Some(self.name)
    }

    fn member_schema(&self, name: &str) -> Option<&dyn Schema> {
        self.target.member_schema(name)
    }

    fn member_schema_by_index(&self, index: usize) -> Option<&dyn Schema> {
        self.target.member_schema_by_index(index)
    }

    fn member(&self) -> Option<&dyn Schema> {
        self.target.member()
    }

    fn key(&self) -> Option<&dyn Schema> {
        self.target.key()
    }

    fn members(&self) -> Box<dyn Iterator<Item = &dyn Schema> + '_> {
        self.target.members()
    }

    fn member_index(&self) -> Option<usize> {
        Some(self.index)
    }

    fn target(&self) -> Option<&dyn Schema> {
        Some(self.target)
    }

    fn enum_values(&self) -> &[&str] {
        self.target.enum_values()
    }
}

/// Schema of a structure.
#[derive(Debug)]
pub struct StructSchema {
    id: ShapeId,
    members: &'static [&'static MemberSchema],
}

impl StructSchema {
    /// Creates a new structure schema. `members` must be in declaration order.
    pub const fn new(id: ShapeId, members: &'static [&'static MemberSchema]) -> Self {
        Self { id, members }
    }
}

impl Schema for StructSchema {
    fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Structure
    }

    fn member_schema(&self, name: &str) -> Option<&dyn Schema> {
        self.members
            .iter()
            .find(|member| member.name == name)
            .map(|member| *member as &dyn Schema)
    }

    fn member_schema_by_index(&self, index: usize) -> Option<&dyn Schema> {
        self.members
            .get(index)
            .map(|member| *member as &dyn Schema)
    }

    fn members(&self) -> Box<dyn Iterator<Item = &dyn Schema> + '_> {
        Box::new(self.members.iter().map(|member| *member as &dyn Schema))
    }
}

/// Schema of a list.
#[derive(Debug)]
pub struct ListSchema {
    id: ShapeId,
    member: &'static MemberSchema,
}

impl ListSchema {
    /// Creates a new list schema.
    pub const fn new(id: ShapeId, member: &'static MemberSchema) -> Self {
        Self { id, member }
    }
}

impl Schema for ListSchema {
    fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::List
    }

    fn member(&self) -> Option<&dyn Schema> {
        Some(self.member)
    }
}

/// Schema of a map.
#[derive(Debug)]
pub struct MapSchema {
    id: ShapeId,
    key: &'static MemberSchema,
    value: &'static MemberSchema,
}

impl MapSchema {
    /// Creates a new map schema.
    pub const fn new(id: ShapeId, key: &'static MemberSchema, value: &'static MemberSchema) -> Self {
        Self { id, key, value }
    }
}

impl Schema for MapSchema {
    fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Map
    }

    fn member(&self) -> Option<&dyn Schema> {
        Some(self.value)
    }

    fn key(&self) -> Option<&dyn Schema> {
        Some(self.key)
    }
}

/// Schema of an enum: a string shape with a closed set of values.
#[derive(Debug)]
pub struct EnumSchema {
    id: ShapeId,
    values: &'static [&'static str],
}

impl EnumSchema {
    /// Creates a new enum schema from its allowed wire values.
    pub const fn new(id: ShapeId, values: &'static [&'static str]) -> Self {
        Self { id, values }
    }
}

impl Schema for EnumSchema {
    fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Enum
    }

    fn enum_values(&self) -> &[&str] {
        self.values
    }
}

/// Implemented by generated enums.
pub trait EnumShape: Sized {
    /// Returns the wire value.
    fn as_str(&self) -> &str;

    /// Parses a wire value, failing on anything outside the declared value set.
    fn try_parse(value: &str) -> Result<Self, UnknownVariantError>;

    /// Returns every declared wire value.
    fn values() -> &'static [&'static str];
}
