/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Deterministic hash codes for shapes.
//!
//! A structure's code folds one slot per declared member with
//! [`hash_code::combine`], in declaration order, starting from [`hash_code::SEED`]. Members that
//! are not set contribute [`hash_code::ABSENT`]. Lists fold their elements the same way, and maps
//! sum `key ^ value` over their entries so entry order does not matter. Two shapes that compare
//! equal therefore always have the same code.

use crate::serde::{SerializableStruct, ShapeSerializer};
use crate::Schema;
use aws_smithy_types::{hash_code, DateTime};
use std::convert::Infallible;

#[derive(Debug)]
enum Frame {
    Struct { slots: Vec<i32> },
    List { acc: i32 },
    Map { sum: i32 },
    Entry { value: i32 },
}

/// A [`ShapeSerializer`] that computes the hash code of a shape.
#[derive(Debug, Default)]
pub struct ShapeHasher {
    stack: Vec<Frame>,
    result: i32,
}

impl ShapeHasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, schema: &dyn Schema, code: i32) {
        match self.stack.last_mut() {
            None => self.result = code,
            Some(Frame::Struct { slots }) => match schema.member_index() {
                Some(index) if index < slots.len() => slots[index] = code,
                _ => tracing::trace!(
                    member = schema.shape_id().as_str(),
                    "value written outside of a declared member slot"
                ),
            },
            Some(Frame::List { acc }) => *acc = hash_code::combine(*acc, code),
            Some(Frame::Map { sum }) => *sum = sum.wrapping_add(code),
            Some(Frame::Entry { value }) => *value = code,
        }
    }

    fn nested<F>(&mut self, schema: &dyn Schema, frame: Frame, write: F) -> Result<(), Infallible>
    where
        F: FnOnce(&mut Self) -> Result<(), Infallible>,
    {
        self.stack.push(frame);
        write(self)?;
        let code = match self.stack.pop() {
            Some(Frame::Struct { slots }) => slots
                .into_iter()
                .fold(hash_code::SEED, hash_code::combine),
            Some(Frame::List { acc }) => acc,
            Some(Frame::Map { sum }) => sum,
            Some(Frame::Entry { value }) => value,
            None => hash_code::ABSENT,
        };
        self.emit(schema, code);
        Ok(())
    }
}

impl ShapeSerializer for ShapeHasher {
    type Output = i32;
    type Error = Infallible;

    fn finish(self) -> Result<Self::Output, Self::Error> {
        Ok(self.result)
    }

    fn write_struct<F>(&mut self, schema: &dyn Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        let slots = vec![hash_code::ABSENT; schema.members().count()];
        self.nested(schema, Frame::Struct { slots }, write_members)
    }

    fn write_list<F>(
        &mut self,
        schema: &dyn Schema,
        _len: usize,
        write_elements: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        let frame = Frame::List {
            acc: hash_code::SEED,
        };
        self.nested(schema, frame, write_elements)
    }

    fn write_map<F>(
        &mut self,
        schema: &dyn Schema,
        _len: usize,
        write_entries: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.nested(schema, Frame::Map { sum: 0 }, write_entries)
    }

    fn write_map_entry<F>(
        &mut self,
        schema: &dyn Schema,
        key: &str,
        write_value: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.stack.push(Frame::Entry {
            value: hash_code::ABSENT,
        });
        write_value(self)?;
        let value = match self.stack.pop() {
            Some(Frame::Entry { value }) => value,
            _ => hash_code::ABSENT,
        };
        self.emit(schema, hash_code::string(key) ^ value);
        Ok(())
    }

    fn write_boolean(&mut self, schema: &dyn Schema, value: bool) -> Result<(), Self::Error> {
        self.emit(schema, hash_code::boolean(value));
        Ok(())
    }

    fn write_integer(&mut self, schema: &dyn Schema, value: i32) -> Result<(), Self::Error> {
        self.emit(schema, hash_code::integer(value));
        Ok(())
    }

    fn write_long(&mut self, schema: &dyn Schema, value: i64) -> Result<(), Self::Error> {
        self.emit(schema, hash_code::long(value));
        Ok(())
    }

    fn write_double(&mut self, schema: &dyn Schema, value: f64) -> Result<(), Self::Error> {
        self.emit(schema, hash_code::double(value));
        Ok(())
    }

    fn write_string(&mut self, schema: &dyn Schema, value: &str) -> Result<(), Self::Error> {
        self.emit(schema, hash_code::string(value));
        Ok(())
    }

    fn write_timestamp(
        &mut self,
        schema: &dyn Schema,
        value: &DateTime,
    ) -> Result<(), Self::Error> {
        self.emit(schema, hash_code::timestamp(value));
        Ok(())
    }
}

/// Computes the hash code of a structure.
pub fn hash_shape<T: SerializableStruct>(value: &T) -> i32 {
    let mut hasher = ShapeHasher::new();
    match value.serialize(&mut hasher) {
        Ok(()) => hasher.result,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod test {
    use super::hash_shape;
    use crate::test_shapes::{Label, Paint};
    use aws_smithy_types::hash_code as codes;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn empty_structure_folds_absent_slots() {
        // one absent slot per declared member
        assert_eq!(hash_shape(&Label::default()), 31 * 31);
        let expected = (0..9).fold(codes::SEED, |acc, _| codes::combine(acc, 0));
        assert_eq!(hash_shape(&Paint::default()), expected);
    }

    #[test]
    fn structure_code_follows_declaration_order() {
        let label = Label::new("k", "v");
        let expected = codes::combine(
            codes::combine(codes::SEED, codes::string("k")),
            codes::string("v"),
        );
        assert_eq!(hash_shape(&label), expected);
        assert_ne!(hash_shape(&label), hash_shape(&Label::new("v", "k")));
    }

    #[test]
    fn absent_differs_from_falsy() {
        let unset = Paint::default();
        let falsy = Paint {
            glossy: Some(false),
            ..Default::default()
        };
        assert_ne!(hash_shape(&unset), hash_shape(&falsy));
    }

    #[test]
    fn map_order_does_not_matter() {
        let mut forward = HashMap::new();
        let mut backward = HashMap::new();
        for i in 0..16 {
            forward.insert(format!("k{}", i), format!("v{}", i));
        }
        for i in (0..16).rev() {
            backward.insert(format!("k{}", i), format!("v{}", i));
        }
        let a = Paint {
            extras: Some(forward),
            ..Default::default()
        };
        let b = Paint {
            extras: Some(backward),
            ..Default::default()
        };
        assert_eq!(a, b);
        assert_eq!(hash_shape(&a), hash_shape(&b));
    }

    #[test]
    fn empty_list_differs_from_absent_list() {
        let absent = Paint::default();
        let empty = Paint {
            codes: Some(vec![]),
            ..Default::default()
        };
        assert_ne!(hash_shape(&absent), hash_shape(&empty));
    }

    fn label() -> impl Strategy<Value = Label> {
        (
            proptest::option::of("[a-z]{0,6}"),
            proptest::option::of("[a-z]{0,6}"),
        )
            .prop_map(|(name, value)| Label { name, value })
    }

    proptest! {
        #[test]
        fn equal_shapes_have_equal_codes(
            litres in proptest::option::of(any::<i32>()),
            labels in proptest::option::of(proptest::collection::vec(label(), 0..4)),
            ratio in proptest::option::of(-1.0e6f64..1.0e6),
        ) {
            let paint = Paint { litres, labels, ratio, ..Default::default() };
            let copy = paint.clone();
            prop_assert_eq!(&paint, &copy);
            prop_assert_eq!(hash_shape(&paint), hash_shape(&copy));
        }
    }
}
