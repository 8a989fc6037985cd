/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Serialization and deserialization interfaces for the Smithy data model.

mod deserializer;
mod serializer;

pub use deserializer::{DeserializableStruct, ShapeDeserializer};
pub use serializer::{SerializableStruct, ShapeSerializer};
