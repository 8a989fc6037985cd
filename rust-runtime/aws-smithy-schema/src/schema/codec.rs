/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Codec trait for creating shape serializers and deserializers.
//!
//! A codec represents a specific serialization format (e.g., JSON)
//! and provides methods to create serializers and deserializers for that format.

use crate::serde::{ShapeDeserializer, ShapeSerializer};

/// A codec for a specific serialization format.
///
/// Codecs are responsible for creating [`ShapeSerializer`] and [`ShapeDeserializer`]
/// instances that can serialize and deserialize shapes to and from a specific format.
pub trait Codec {
    /// The serializer type for this codec.
    type Serializer: ShapeSerializer;

    /// The deserializer type for this codec.
    type Deserializer: ShapeDeserializer;

    /// Creates a new serializer for this codec.
    fn create_serializer(&self) -> Self::Serializer;

    /// Creates a new deserializer for this codec from the given input bytes.
    fn create_deserializer(&self, input: &[u8]) -> Self::Deserializer;
}
