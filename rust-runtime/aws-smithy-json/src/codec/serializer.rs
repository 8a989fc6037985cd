/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON serializer implementation.

use aws_smithy_schema::serde::ShapeSerializer;
use aws_smithy_schema::Schema;
use aws_smithy_types::date_time::Format as TimestampFormat;
use aws_smithy_types::DateTime;

use crate::codec::JsonCodecSettings;
use crate::error::JsonSerializeError;
use crate::escape::escape_string;

#[derive(Debug)]
enum Frame {
    Struct { started: bool },
    List { started: bool },
    Map { started: bool },
    Entry,
}

/// JSON serializer that implements the ShapeSerializer trait.
#[derive(Debug)]
pub struct JsonSerializer {
    output: String,
    stack: Vec<Frame>,
    settings: JsonCodecSettings,
}

impl JsonSerializer {
    /// Creates a new JSON serializer with the given settings.
    pub fn new(settings: JsonCodecSettings) -> Self {
        Self {
            output: String::new(),
            stack: Vec::new(),
            settings,
        }
    }

    /// Writes whatever has to precede a value in the current container: a comma, and for
    /// structure members, the member's key.
    fn prefix(&mut self, schema: &dyn Schema) -> Result<(), JsonSerializeError> {
        match self.stack.last_mut() {
            Some(Frame::Struct { started }) => {
                if *started {
                    self.output.push(',');
                }
                *started = true;
                let name = schema.member_name().ok_or_else(|| {
                    JsonSerializeError::new(format!(
                        "`{}` is not a member and cannot be written inside a structure",
                        schema.shape_id()
                    ))
                })?;
                self.output.push('"');
                self.output.push_str(&escape_string(name));
                self.output.push_str("\":");
            }
            Some(Frame::List { started }) => {
                if *started {
                    self.output.push(',');
                }
                *started = true;
            }
            Some(Frame::Map { .. }) => {
                return Err(JsonSerializeError::new(
                    "map values must be written through write_map_entry",
                ))
            }
            Some(Frame::Entry) | None => {}
        }
        Ok(())
    }

    fn nested<F>(
        &mut self,
        schema: &dyn Schema,
        frame: Frame,
        write: F,
    ) -> Result<(), JsonSerializeError>
    where
        F: FnOnce(&mut Self) -> Result<(), JsonSerializeError>,
    {
        self.prefix(schema)?;
        let close = match frame {
            Frame::List { .. } => ']',
            _ => '}',
        };
        self.output.push(if close == ']' { '[' } else { '{' });
        self.stack.push(frame);
        write(self)?;
        self.stack.pop();
        self.output.push(close);
        Ok(())
    }

    fn append_string(&mut self, value: &str) {
        self.output.push('"');
        self.output.push_str(&escape_string(value));
        self.output.push('"');
    }
}

impl ShapeSerializer for JsonSerializer {
    type Output = Vec<u8>;
    type Error = JsonSerializeError;

    fn finish(self) -> Result<Self::Output, Self::Error> {
        Ok(self.output.into_bytes())
    }

    fn write_struct<F>(&mut self, schema: &dyn Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.nested(schema, Frame::Struct { started: false }, write_members)
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
        self.nested(schema, Frame::List { started: false }, write_elements)
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
        self.nested(schema, Frame::Map { started: false }, write_entries)
    }

    fn write_map_entry<F>(
        &mut self,
        _schema: &dyn Schema,
        key: &str,
        write_value: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        match self.stack.last_mut() {
            Some(Frame::Map { started }) => {
                if *started {
                    self.output.push(',');
                }
                *started = true;
            }
            _ => {
                return Err(JsonSerializeError::new(
                    "map entries can only be written inside a map",
                ))
            }
        }
        self.append_string(key);
        self.output.push(':');
        self.stack.push(Frame::Entry);
        write_value(self)?;
        self.stack.pop();
        Ok(())
    }

    fn write_boolean(&mut self, schema: &dyn Schema, value: bool) -> Result<(), Self::Error> {
        self.prefix(schema)?;
        self.output.push_str(if value { "true" } else { "false" });
        Ok(())
    }

    fn write_integer(&mut self, schema: &dyn Schema, value: i32) -> Result<(), Self::Error> {
        self.prefix(schema)?;
        // itoa::Buffer is a fixed-size stack allocation, so this is cheap
        self.output.push_str(itoa::Buffer::new().format(value));
        Ok(())
    }

    fn write_long(&mut self, schema: &dyn Schema, value: i64) -> Result<(), Self::Error> {
        self.prefix(schema)?;
        self.output.push_str(itoa::Buffer::new().format(value));
        Ok(())
    }

    fn write_double(&mut self, schema: &dyn Schema, value: f64) -> Result<(), Self::Error> {
        self.prefix(schema)?;
        if value.is_nan() {
            self.output.push_str("\"NaN\"");
        } else if value.is_infinite() {
            self.output.push_str(if value.is_sign_positive() {
                "\"Infinity\""
            } else {
                "\"-Infinity\""
            });
        } else {
            self.output
                .push_str(ryu::Buffer::new().format_finite(value));
        }
        Ok(())
    }

    fn write_string(&mut self, schema: &dyn Schema, value: &str) -> Result<(), Self::Error> {
        self.prefix(schema)?;
        self.append_string(value);
        Ok(())
    }

    fn write_timestamp(
        &mut self,
        schema: &dyn Schema,
        value: &DateTime,
    ) -> Result<(), Self::Error> {
        let format = self.settings.default_timestamp_format;
        let formatted = value.fmt(format)?;
        self.prefix(schema)?;
        match format {
            TimestampFormat::EpochSeconds => self.output.push_str(&formatted),
            _ => self.append_string(&formatted),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_shapes::{Disk, DiskTag};
    use aws_smithy_schema::serde::SerializableStruct;
    use std::collections::HashMap;

    fn to_json(disk: &Disk, settings: JsonCodecSettings) -> String {
        let mut serializer = JsonSerializer::new(settings);
        disk.serialize(&mut serializer).unwrap();
        String::from_utf8(serializer.finish().unwrap()).unwrap()
    }

    #[test]
    fn empty_struct() {
        assert_eq!("{}", to_json(&Disk::default(), Default::default()));
    }

    #[test]
    fn members_are_keyed_by_member_name() {
        let disk = Disk {
            disk_id: Some("disk-\"1\"".into()),
            size_in_bytes: Some(-5),
            allocated: Some(false),
            count: Some(3),
            ..Default::default()
        };
        assert_eq!(
            r#"{"DiskId":"disk-\"1\"","DiskSizeInBytes":-5,"DiskAllocated":false,"Count":3}"#,
            to_json(&disk, Default::default())
        );
    }

    #[test]
    fn nested_aggregates() {
        let mut attributes = HashMap::new();
        attributes.insert("zone".to_string(), "a".to_string());
        let disk = Disk {
            tags: Some(vec![DiskTag::new("k1", "v1"), DiskTag::new("k2", "")]),
            attributes: Some(attributes),
            ..Default::default()
        };
        assert_eq!(
            r#"{"Tags":[{"Key":"k1","Value":"v1"},{"Key":"k2","Value":""}],"Attributes":{"zone":"a"}}"#,
            to_json(&disk, Default::default())
        );
        let empty = Disk {
            tags: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(r#"{"Tags":[]}"#, to_json(&empty, Default::default()));
    }

    #[test]
    fn doubles() {
        let json = |ratio: f64| {
            to_json(
                &Disk {
                    ratio: Some(ratio),
                    ..Default::default()
                },
                Default::default(),
            )
        };
        assert_eq!(r#"{"Ratio":0.5}"#, json(0.5));
        assert_eq!(r#"{"Ratio":1.0}"#, json(1.0));
        assert_eq!(r#"{"Ratio":"NaN"}"#, json(f64::NAN));
        assert_eq!(r#"{"Ratio":"Infinity"}"#, json(f64::INFINITY));
        assert_eq!(r#"{"Ratio":"-Infinity"}"#, json(f64::NEG_INFINITY));
    }

    #[test]
    fn timestamps_follow_settings() {
        let disk = Disk {
            created_at: Some(DateTime::from_secs_and_nanos(1576540098, 520_000_000)),
            ..Default::default()
        };
        assert_eq!(
            r#"{"CreatedAt":1576540098.52}"#,
            to_json(&disk, Default::default())
        );
        let settings = JsonCodecSettings {
            default_timestamp_format: TimestampFormat::DateTime,
        };
        assert_eq!(
            r#"{"CreatedAt":"2019-12-16T23:48:18.52Z"}"#,
            to_json(&disk, settings)
        );
    }
}
