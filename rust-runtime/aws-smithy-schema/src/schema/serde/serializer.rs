/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape serialization interfaces for the Smithy data model.

use crate::Schema;
use aws_smithy_types::DateTime;
use std::error::Error;

/// Serializes Smithy shapes to a target format.
///
/// This trait provides a format-agnostic API for serializing the Smithy data model.
/// Implementations serialize each data type to the corresponding encoding in their
/// serial format (e.g., Smithy integers and doubles to JSON numbers).
///
/// The serializer accepts a schema along with the value to provide additional
/// information about how to serialize the value. Values written inside a structure are
/// passed their member schema, which carries the member name and constraints.
///
/// Absent optional members are never written: a structure with nothing set produces an
/// empty structure in the target format.
///
/// # Example
///
/// ```ignore
/// let mut serializer = JsonSerializer::new(JsonCodecSettings::default());
/// serializer.write_string(&STRING, "hello")?;
/// let json_bytes = serializer.finish()?;
/// ```
pub trait ShapeSerializer {
    /// The serialization target type (e.g., `Vec<u8>`, `String`).
    type Output;

    /// The error type returned by serialization operations.
    type Error: Error;

    /// Finalizes the serialization and returns the serialized output.
    ///
    /// This method should be called after all values have been written.
    fn finish(self) -> Result<Self::Output, Self::Error>;

    /// Writes a structure to the serializer.
    ///
    /// The structure serialization is driven by a callback that writes each present member.
    ///
    /// # Arguments
    ///
    /// * `schema` - The schema of the structure, or of the member holding it
    /// * `write_members` - Callback that writes the structure's members
    fn write_struct<F>(&mut self, schema: &dyn Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a list to the serializer.
    ///
    /// # Arguments
    ///
    /// * `schema` - The schema of the list, or of the member holding it
    /// * `len` - The number of elements `write_elements` will write
    /// * `write_elements` - Callback that writes the list elements
    fn write_list<F>(
        &mut self,
        schema: &dyn Schema,
        len: usize,
        write_elements: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a map to the serializer.
    ///
    /// # Arguments
    ///
    /// * `schema` - The schema of the map, or of the member holding it
    /// * `len` - The number of entries `write_entries` will write
    /// * `write_entries` - Callback that calls [`write_map_entry`](Self::write_map_entry) per entry
    fn write_map<F>(
        &mut self,
        schema: &dyn Schema,
        len: usize,
        write_entries: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes one map entry. `write_value` writes the entry's value.
    fn write_map_entry<F>(
        &mut self,
        schema: &dyn Schema,
        key: &str,
        write_value: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a boolean value.
    fn write_boolean(&mut self, schema: &dyn Schema, value: bool) -> Result<(), Self::Error>;

    /// Writes an integer (i32) value.
    fn write_integer(&mut self, schema: &dyn Schema, value: i32) -> Result<(), Self::Error>;

    /// Writes a long (i64) value.
    fn write_long(&mut self, schema: &dyn Schema, value: i64) -> Result<(), Self::Error>;

    /// Writes a double (f64) value.
    fn write_double(&mut self, schema: &dyn Schema, value: f64) -> Result<(), Self::Error>;

    /// Writes a string value. Enum values are written as their wire string.
    fn write_string(&mut self, schema: &dyn Schema, value: &str) -> Result<(), Self::Error>;

    /// Writes a timestamp value.
    fn write_timestamp(&mut self, schema: &dyn Schema, value: &DateTime)
        -> Result<(), Self::Error>;
}

/// Trait for structures that can be serialized.
///
/// This trait is implemented by generated structure types to enable
/// schema-based serialization.
///
/// # Example
///
/// ```ignore
/// impl SerializableStruct for Tag {
///     fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
///         serializer.write_struct(&TAG, |ser| {
///             if let Some(key) = &self.key {
///                 ser.write_string(&TAG_MEMBER_KEY, key)?;
///             }
///             if let Some(value) = &self.value {
///                 ser.write_string(&TAG_MEMBER_VALUE, value)?;
///             }
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait SerializableStruct {
    /// Serializes this structure using the provided serializer.
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error>;

    /// Serializes this structure as the value of `member` inside an enclosing aggregate.
    ///
    /// Generated code implements this by passing `member` to
    /// [`ShapeSerializer::write_struct`] in place of the structure's own schema.
    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error>;
}
