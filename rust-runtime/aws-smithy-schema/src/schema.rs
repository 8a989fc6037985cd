/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod constraints;
mod shape_id;
mod shape_type;
mod shapes;

pub mod codec;
pub mod hash;
pub mod prelude;
pub mod render;
pub mod serde;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_shapes;

pub use constraints::{Bounds, Constraints};
pub use shape_id::ShapeId;
pub use shape_type::ShapeType;
pub use shapes::{EnumSchema, EnumShape, ListSchema, MapSchema, MemberSchema, StructSchema};

/// Core trait representing a Smithy schema at runtime.
///
/// A schema is a lightweight runtime representation of a Smithy shape,
/// containing the shape's ID, type, constraints, and references to member schemas.
pub trait Schema: Send + Sync {
    /// Returns the Shape ID of this schema.
    fn shape_id(&self) -> &ShapeId;

    /// Returns the shape type.
    fn shape_type(&self) -> ShapeType;

    /// Returns the constraints declared on this shape.
    fn constraints(&self) -> &Constraints {
        &Constraints::NONE
    }

    /// Returns the member name if this is a member schema.
    ///
    /// This is the name used on the wire and when rendering the shape.
    fn member_name(&self) -> Option<&str> {
        None
    }

    /// Returns the member schema by name (for structures).
    fn member_schema(&self, _name: &str) -> Option<&dyn Schema> {
        None
    }

    /// Returns the member schema by position index (for structures).
    ///
    /// This is an optimization for generated code to avoid string lookups.
    fn member_schema_by_index(&self, _index: usize) -> Option<&dyn Schema> {
        None
    }

    /// Returns the member schema for collections (list member or map value).
    fn member(&self) -> Option<&dyn Schema> {
        None
    }

    /// Returns the key schema for maps.
    fn key(&self) -> Option<&dyn Schema> {
        None
    }

    /// Returns an iterator over member schemas (for structures), in declaration order.
    fn members(&self) -> Box<dyn Iterator<Item = &dyn Schema> + '_> {
        Box::new(std::iter::empty())
    }

    /// Returns the member index for member schemas.
    ///
    /// The index is the member's position in its structure's declaration order.
    fn member_index(&self) -> Option<usize> {
        None
    }

    /// Returns the schema a member targets. `None` for schemas that aren't members.
    fn target(&self) -> Option<&dyn Schema> {
        None
    }

    /// Returns the allowed values of an enum shape.
    fn enum_values(&self) -> &[&str] {
        &[]
    }
}

/// Helper methods for Schema trait.
pub trait SchemaExt: Schema {
    /// Returns true if this is a member schema.
    fn is_member(&self) -> bool {
        self.shape_type().is_member()
    }

    /// Returns the shape type of this schema, looking through members to their target.
    fn target_type(&self) -> ShapeType {
        match self.target() {
            Some(target) => target.shape_type(),
            None => self.shape_type(),
        }
    }

    /// Returns true if this schema is, or targets, a structure.
    fn is_structure(&self) -> bool {
        self.target_type() == ShapeType::Structure
    }

    /// Returns true if this schema is, or targets, a list.
    fn is_list(&self) -> bool {
        self.target_type() == ShapeType::List
    }

    /// Returns true if this schema is, or targets, a map.
    fn is_map(&self) -> bool {
        self.target_type() == ShapeType::Map
    }

    /// Returns true if this schema is, or targets, a string.
    fn is_string(&self) -> bool {
        self.target_type() == ShapeType::String
    }

    /// Returns true if this schema is, or targets, an enum.
    fn is_enum(&self) -> bool {
        self.target_type() == ShapeType::Enum
    }
}

impl<T: Schema + ?Sized> SchemaExt for T {}

#[cfg(test)]
mod test {
    use crate::test_shapes::{LABEL_NAME, PAINT, PAINT_CODES, PAINT_COLOR, PAINT_LITRES};
    use crate::{Schema, SchemaExt, ShapeType};

    #[test]
    fn test_shape_type_simple() {
        assert!(ShapeType::String.is_simple());
        assert!(ShapeType::Enum.is_simple());
        assert!(ShapeType::Boolean.is_simple());
        assert!(!ShapeType::Structure.is_simple());
        assert!(!ShapeType::List.is_simple());
    }

    #[test]
    fn test_shape_type_aggregate() {
        assert!(ShapeType::Structure.is_aggregate());
        assert!(ShapeType::List.is_aggregate());
        assert!(ShapeType::Map.is_aggregate());
        assert!(!ShapeType::String.is_aggregate());
    }

    #[test]
    fn struct_members_in_declaration_order() {
        let names: Vec<_> = PAINT.members().filter_map(|m| m.member_name()).collect();
        assert_eq!(
            names,
            vec![
                "Color", "Litres", "Glossy", "Labels", "Codes", "Extras", "Primer", "Ratio",
                "MixedAt"
            ]
        );
        assert_eq!(
            PAINT.member_schema("Litres").and_then(|m| m.member_index()),
            Some(1)
        );
        assert!(PAINT.member_schema("Unknown").is_none());
        assert_eq!(
            PAINT
                .member_schema_by_index(0)
                .map(|m| m.shape_id().as_str()),
            Some("test#Paint$Color")
        );
    }

    #[test]
    fn members_look_through_to_targets() {
        assert!(PAINT_COLOR.is_member());
        assert!(PAINT_COLOR.is_enum());
        assert_eq!(PAINT_COLOR.enum_values(), &["red", "green"]);
        assert!(LABEL_NAME.constraints().is_required());
        assert!(!PAINT_LITRES.constraints().is_required());
        assert!(PAINT_CODES.is_list());
        assert_eq!(
            PAINT_CODES
                .member()
                .and_then(|m| m.target())
                .map(|t| t.shape_type()),
            Some(ShapeType::String)
        );
    }
}
