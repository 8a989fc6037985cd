/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON codec implementation for schema-based serialization.

use crate::error::{JsonDeserializeError, JsonSerializeError};
use aws_smithy_schema::codec::Codec;
use aws_smithy_schema::serde::{DeserializableStruct, SerializableStruct, ShapeSerializer};
use aws_smithy_types::date_time::Format as TimestampFormat;

mod deserializer;
mod serializer;

pub use deserializer::JsonDeserializer;
pub use serializer::JsonSerializer;

/// Configuration for JSON codec behavior.
#[derive(Debug, Clone)]
pub struct JsonCodecSettings {
    /// Timestamp format used for every timestamp member.
    pub default_timestamp_format: TimestampFormat,
}

impl Default for JsonCodecSettings {
    fn default() -> Self {
        Self {
            default_timestamp_format: TimestampFormat::EpochSeconds,
        }
    }
}

/// JSON codec for schema-based serialization and deserialization.
///
/// Members are keyed by their member name, unset members are omitted, and `null` values in the
/// input are treated as absent.
///
/// # Examples
///
/// ```
/// use aws_smithy_json::codec::{JsonCodec, JsonCodecSettings};
/// use aws_smithy_schema::codec::Codec;
/// use aws_smithy_types::date_time::Format;
///
/// // AWS JSON 1.1 writes timestamps as epoch seconds
/// let codec = JsonCodec::new(JsonCodecSettings {
///     default_timestamp_format: Format::EpochSeconds,
/// });
///
/// let _serializer = codec.create_serializer();
/// let _deserializer = codec.create_deserializer(b"{}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    settings: JsonCodecSettings,
}

impl JsonCodec {
    /// Creates a new JSON codec with the given settings.
    pub fn new(settings: JsonCodecSettings) -> Self {
        Self { settings }
    }

    /// Returns the codec settings.
    pub fn settings(&self) -> &JsonCodecSettings {
        &self.settings
    }

    /// Serializes `value` as a JSON document.
    pub fn serialize<T: SerializableStruct>(&self, value: &T) -> Result<Vec<u8>, JsonSerializeError> {
        let mut serializer = self.create_serializer();
        value.serialize(&mut serializer)?;
        serializer.finish()
    }

    /// Deserializes a `T` from a JSON document. An empty input reads as an empty object.
    pub fn deserialize<T: DeserializableStruct>(
        &self,
        input: &[u8],
    ) -> Result<T, JsonDeserializeError> {
        let mut deserializer = self.create_deserializer(input);
        T::deserialize(&mut deserializer)
    }
}

impl Codec for JsonCodec {
    type Serializer = JsonSerializer;
    type Deserializer = JsonDeserializer;

    fn create_serializer(&self) -> Self::Serializer {
        JsonSerializer::new(self.settings.clone())
    }

    fn create_deserializer(&self, input: &[u8]) -> Self::Deserializer {
        JsonDeserializer::new(input, self.settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_shapes::{Disk, DiskTag};
    use aws_smithy_types::DateTime;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = JsonCodecSettings::default();
        assert_eq!(
            settings.default_timestamp_format,
            TimestampFormat::EpochSeconds
        );
    }

    #[test]
    fn shapes_survive_the_wire() {
        let mut attributes = HashMap::new();
        attributes.insert("zone".to_string(), "a".to_string());
        let disk = Disk {
            disk_id: Some("pci-0000:03:00.0-scsi-0:0:0:0".into()),
            size_in_bytes: Some(1_099_511_627_776),
            allocated: Some(true),
            ratio: Some(0.25),
            status: Some("PRESENT".into()),
            tags: Some(vec![DiskTag::new("k", "v")]),
            attributes: Some(attributes),
            created_at: Some(DateTime::from_secs_and_nanos(1_576_540_098, 500_000_000)),
            ..Default::default()
        };
        let codec = JsonCodec::default();
        let bytes = codec.serialize(&disk).unwrap();
        let parsed: Disk = codec.deserialize(&bytes).unwrap();
        assert_eq!(disk, parsed);
    }

    #[test]
    fn empty_body_reads_as_empty_object() {
        let parsed: Disk = JsonCodec::default().deserialize(b"").unwrap();
        assert_eq!(parsed, Disk::default());
    }
}
