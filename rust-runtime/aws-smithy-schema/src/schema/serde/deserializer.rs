/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape deserialization interfaces for the Smithy data model.

use crate::{EnumShape, Schema};
use aws_smithy_types::DateTime;
use std::error::Error;

/// Deserializes Smithy shapes from a serial format.
///
/// This trait provides a format-agnostic API for deserializing the Smithy data model.
/// Implementations read from a serial format and create data objects based on schemas.
///
/// # Consumer Pattern
///
/// For aggregate types, the deserializer calls a consumer function for each element/member.
/// The consumer receives mutable state and updates it with each deserialized value.
/// Members that are absent or `null` in the input are never passed to the consumer, so they
/// stay unset in the resulting shape.
///
/// # Example
///
/// ```ignore
/// // Deserializing a structure
/// let builder = TagBuilder::default();
/// let builder = deserializer.read_struct(
///     &TAG,
///     builder,
///     |builder, member, deser| {
///         Ok(match member.member_index() {
///             Some(0) => builder.key(deser.read_string(member)?),
///             Some(1) => builder.value(deser.read_string(member)?),
///             _ => builder,
///         })
///     },
/// )?;
/// let tag = builder.build();
/// ```
pub trait ShapeDeserializer {
    /// The error type returned by deserialization operations.
    type Error: Error;

    /// Reads a structure from the deserializer.
    ///
    /// The consumer is called for each member present in the input with the current state,
    /// the member schema, and the deserializer, and returns the updated state. Members that
    /// the schema does not declare are skipped.
    fn read_struct<T, F>(
        &mut self,
        schema: &dyn Schema,
        state: T,
        consumer: F,
    ) -> Result<T, Self::Error>
    where
        F: FnMut(T, &dyn Schema, &mut Self) -> Result<T, Self::Error>;

    /// Reads a list from the deserializer.
    ///
    /// The consumer is called for each element with the current state and the deserializer,
    /// and returns the updated state.
    fn read_list<T, F>(
        &mut self,
        schema: &dyn Schema,
        state: T,
        consumer: F,
    ) -> Result<T, Self::Error>
    where
        F: FnMut(T, &mut Self) -> Result<T, Self::Error>;

    /// Reads a map from the deserializer.
    ///
    /// The consumer is called for each entry with the current state, the key, and the
    /// deserializer positioned on the value, and returns the updated state.
    fn read_map<T, F>(
        &mut self,
        schema: &dyn Schema,
        state: T,
        consumer: F,
    ) -> Result<T, Self::Error>
    where
        F: FnMut(T, String, &mut Self) -> Result<T, Self::Error>;

    /// Reads a boolean value.
    fn read_boolean(&mut self, schema: &dyn Schema) -> Result<bool, Self::Error>;

    /// Reads an integer (i32) value.
    fn read_integer(&mut self, schema: &dyn Schema) -> Result<i32, Self::Error>;

    /// Reads a long (i64) value.
    fn read_long(&mut self, schema: &dyn Schema) -> Result<i64, Self::Error>;

    /// Reads a double (f64) value.
    fn read_double(&mut self, schema: &dyn Schema) -> Result<f64, Self::Error>;

    /// Reads a string value.
    fn read_string(&mut self, schema: &dyn Schema) -> Result<String, Self::Error>;

    /// Reads a timestamp value.
    fn read_timestamp(&mut self, schema: &dyn Schema) -> Result<DateTime, Self::Error>;

    /// Reads an enum value.
    ///
    /// Values outside the enum's declared set are an error distinct from other
    /// deserialization failures.
    fn read_enum<E: EnumShape>(&mut self, schema: &dyn Schema) -> Result<E, Self::Error>;

    /// Checks if the current value is null.
    fn is_null(&self) -> bool;

    /// Returns the size of the current container if known.
    ///
    /// This is an optimization hint that allows pre-allocating collections
    /// with the correct capacity. Returns `None` if the size is unknown or
    /// not applicable.
    fn container_size(&self) -> Option<usize>;
}

/// Trait for structures that can be deserialized.
///
/// This trait is implemented by generated structure types to enable
/// schema-based deserialization.
pub trait DeserializableStruct: Sized {
    /// Deserializes a value of this structure from the deserializer's current value.
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error>;
}
