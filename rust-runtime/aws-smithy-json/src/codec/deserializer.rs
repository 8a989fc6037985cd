/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON deserializer implementation.

use aws_smithy_schema::serde::ShapeDeserializer;
use aws_smithy_schema::{EnumShape, Schema};
use aws_smithy_types::date_time::Format as TimestampFormat;
use aws_smithy_types::DateTime;
use serde_json::{Map, Number, Value};

use crate::codec::JsonCodecSettings;
use crate::error::{JsonDeserializeError, JsonDeserializeErrorKind};

/// JSON deserializer that implements the ShapeDeserializer trait.
///
/// The input is parsed up front. Each `read_*` call consumes the value the deserializer is
/// currently positioned on; `read_struct`, `read_list` and `read_map` position it on each
/// member, element or entry before handing control to their consumer. `null` values are
/// treated as absent and never reach a consumer.
#[derive(Debug)]
pub struct JsonDeserializer {
    current: Option<Value>,
    error: Option<JsonDeserializeError>,
    settings: JsonCodecSettings,
}

impl JsonDeserializer {
    /// Creates a new JSON deserializer with the given settings.
    ///
    /// Parsing errors are reported by the first `read_*` call.
    pub fn new(input: &[u8], settings: JsonCodecSettings) -> Self {
        let (current, error) = if input.iter().all(u8::is_ascii_whitespace) {
            (Some(Value::Object(Map::new())), None)
        } else {
            match serde_json::from_slice(input) {
                Ok(value) => (Some(value), None),
                Err(err) => (None, Some(err.into())),
            }
        };
        Self {
            current,
            error,
            settings,
        }
    }

    fn take(&mut self, schema: &dyn Schema) -> Result<Value, JsonDeserializeError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.current.take().ok_or_else(|| {
            JsonDeserializeError::new(
                JsonDeserializeErrorKind::UnexpectedType,
                format!("no value to read for `{}`", schema.shape_id()),
            )
        })
    }

    fn take_number(&mut self, schema: &dyn Schema) -> Result<Number, JsonDeserializeError> {
        match self.take(schema)? {
            Value::Number(number) => Ok(number),
            _ => Err(JsonDeserializeError::unexpected_type(
                "a number",
                schema.shape_id().as_str(),
            )),
        }
    }

    fn out_of_range(schema: &dyn Schema, number: &Number) -> JsonDeserializeError {
        JsonDeserializeError::new(
            JsonDeserializeErrorKind::NumberOutOfRange,
            format!("{} does not fit in `{}`", number, schema.shape_id()),
        )
    }
}

impl ShapeDeserializer for JsonDeserializer {
    type Error = JsonDeserializeError;

    fn read_struct<T, F>(
        &mut self,
        schema: &dyn Schema,
        mut state: T,
        mut consumer: F,
    ) -> Result<T, Self::Error>
    where
        F: FnMut(T, &dyn Schema, &mut Self) -> Result<T, Self::Error>,
    {
        let object = match self.take(schema)? {
            Value::Object(object) => object,
            _ => {
                return Err(JsonDeserializeError::unexpected_type(
                    "an object",
                    schema.shape_id().as_str(),
                ))
            }
        };
        for (key, value) in object {
            if value.is_null() {
                continue;
            }
            match schema.member_schema(&key) {
                Some(member) => {
                    self.current = Some(value);
                    state = consumer(state, member, self)?;
                }
                None => tracing::debug!(
                    shape = schema.shape_id().as_str(),
                    member = key.as_str(),
                    "ignoring unknown member"
                ),
            }
        }
        Ok(state)
    }

    fn read_list<T, F>(
        &mut self,
        schema: &dyn Schema,
        mut state: T,
        mut consumer: F,
    ) -> Result<T, Self::Error>
    where
        F: FnMut(T, &mut Self) -> Result<T, Self::Error>,
    {
        let elements = match self.take(schema)? {
            Value::Array(elements) => elements,
            _ => {
                return Err(JsonDeserializeError::unexpected_type(
                    "an array",
                    schema.shape_id().as_str(),
                ))
            }
        };
        for (index, element) in elements.into_iter().enumerate() {
            if element.is_null() {
                tracing::debug!(
                    list = schema.shape_id().as_str(),
                    index,
                    "dropping null list element"
                );
                continue;
            }
            self.current = Some(element);
            state = consumer(state, self)?;
        }
        Ok(state)
    }

    fn read_map<T, F>(
        &mut self,
        schema: &dyn Schema,
        mut state: T,
        mut consumer: F,
    ) -> Result<T, Self::Error>
    where
        F: FnMut(T, String, &mut Self) -> Result<T, Self::Error>,
    {
        let entries = match self.take(schema)? {
            Value::Object(entries) => entries,
            _ => {
                return Err(JsonDeserializeError::unexpected_type(
                    "an object",
                    schema.shape_id().as_str(),
                ))
            }
        };
        for (key, value) in entries {
            if value.is_null() {
                continue;
            }
            self.current = Some(value);
            state = consumer(state, key, self)?;
        }
        Ok(state)
    }

    fn read_boolean(&mut self, schema: &dyn Schema) -> Result<bool, Self::Error> {
        match self.take(schema)? {
            Value::Bool(value) => Ok(value),
            _ => Err(JsonDeserializeError::unexpected_type(
                "a boolean",
                schema.shape_id().as_str(),
            )),
        }
    }

    fn read_integer(&mut self, schema: &dyn Schema) -> Result<i32, Self::Error> {
        let number = self.take_number(schema)?;
        number
            .as_i64()
            .and_then(|value| i32::try_from(value).ok())
            .ok_or_else(|| Self::out_of_range(schema, &number))
    }

    fn read_long(&mut self, schema: &dyn Schema) -> Result<i64, Self::Error> {
        let number = self.take_number(schema)?;
        number
            .as_i64()
            .ok_or_else(|| Self::out_of_range(schema, &number))
    }

    fn read_double(&mut self, schema: &dyn Schema) -> Result<f64, Self::Error> {
        match self.take(schema)? {
            Value::Number(number) => number
                .as_f64()
                .ok_or_else(|| Self::out_of_range(schema, &number)),
            Value::String(value) => match value.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                _ => Err(JsonDeserializeError::unexpected_type(
                    "a number",
                    schema.shape_id().as_str(),
                )),
            },
            _ => Err(JsonDeserializeError::unexpected_type(
                "a number",
                schema.shape_id().as_str(),
            )),
        }
    }

    fn read_string(&mut self, schema: &dyn Schema) -> Result<String, Self::Error> {
        match self.take(schema)? {
            Value::String(value) => Ok(value),
            _ => Err(JsonDeserializeError::unexpected_type(
                "a string",
                schema.shape_id().as_str(),
            )),
        }
    }

    fn read_timestamp(&mut self, schema: &dyn Schema) -> Result<DateTime, Self::Error> {
        let invalid = |err: aws_smithy_types::date_time::DateTimeParseError| {
            JsonDeserializeError::new(
                JsonDeserializeErrorKind::InvalidTimestamp,
                format!("invalid timestamp for `{}`", schema.shape_id()),
            )
            .with_source(err)
        };
        match self.take(schema)? {
            Value::Number(number) => {
                if let Some(secs) = number.as_i64() {
                    return Ok(DateTime::from_secs(secs));
                }
                match DateTime::from_str(&number.to_string(), TimestampFormat::EpochSeconds) {
                    Ok(date_time) => Ok(date_time),
                    Err(_) => number
                        .as_f64()
                        .filter(|secs| secs.is_finite())
                        .map(DateTime::from_secs_f64)
                        .ok_or_else(|| Self::out_of_range(schema, &number)),
                }
            }
            Value::String(value) => {
                let format = match self.settings.default_timestamp_format {
                    TimestampFormat::EpochSeconds => TimestampFormat::DateTime,
                    other => other,
                };
                DateTime::from_str(&value, format)
                    .or_else(|_| DateTime::from_str(&value, TimestampFormat::EpochSeconds))
                    .map_err(invalid)
            }
            _ => Err(JsonDeserializeError::unexpected_type(
                "a timestamp",
                schema.shape_id().as_str(),
            )),
        }
    }

    fn read_enum<E: EnumShape>(&mut self, schema: &dyn Schema) -> Result<E, Self::Error> {
        let value = self.read_string(schema)?;
        Ok(E::try_parse(&value)?)
    }

    fn is_null(&self) -> bool {
        matches!(self.current, None | Some(Value::Null))
    }

    fn container_size(&self) -> Option<usize> {
        match &self.current {
            Some(Value::Array(elements)) => Some(elements.len()),
            Some(Value::Object(entries)) => Some(entries.len()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_shapes::{Disk, DiskStatus, DiskTag, DISK_STATUS};
    use aws_smithy_schema::serde::DeserializableStruct;
    use tracing_test::traced_test;

    fn from_json(json: &str) -> Result<Disk, JsonDeserializeError> {
        let mut deserializer = JsonDeserializer::new(json.as_bytes(), Default::default());
        Disk::deserialize(&mut deserializer)
    }

    #[test]
    fn reads_members_by_name() {
        let disk = from_json(
            r#"{"DiskId":"d-1","DiskSizeInBytes":107374182400,"DiskAllocated":true,
                "Tags":[{"Key":"k","Value":"v"}],"Attributes":{"zone":"a"},
                "CreatedAt":1576540098.52,"Status":"PRESENT"}"#,
        )
        .unwrap();
        assert_eq!(disk.disk_id.as_deref(), Some("d-1"));
        assert_eq!(disk.size_in_bytes, Some(107374182400));
        assert_eq!(disk.allocated, Some(true));
        assert_eq!(disk.tags, Some(vec![DiskTag::new("k", "v")]));
        assert_eq!(
            disk.attributes.as_ref().and_then(|a| a.get("zone")).map(String::as_str),
            Some("a")
        );
        assert_eq!(
            disk.created_at,
            Some(DateTime::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(disk.status.as_deref(), Some("PRESENT"));
    }

    #[test]
    fn nulls_and_unknown_members_are_skipped() {
        let disk = from_json(r#"{"DiskId":null,"Surprise":{"a":[1,2]},"Tags":[null]}"#).unwrap();
        assert_eq!(disk.disk_id, None);
        assert_eq!(disk.tags, Some(vec![]));
    }

    #[test]
    #[traced_test]
    fn null_list_elements_are_logged() {
        let disk = from_json(r#"{"Tags":[{"Key":"a","Value":"1"},null,{"Key":"b","Value":"2"}]}"#)
            .unwrap();
        assert_eq!(
            disk.tags,
            Some(vec![DiskTag::new("a", "1"), DiskTag::new("b", "2")])
        );
        assert!(logs_contain("dropping null list element"));
        assert!(logs_contain("index=1"));
    }

    #[test]
    fn type_mismatches_are_errors() {
        let err = from_json(r#"{"DiskId":5}"#).unwrap_err();
        assert_eq!(err.kind(), JsonDeserializeErrorKind::UnexpectedType);
        let err = from_json(r#"{"Count":3000000000}"#).unwrap_err();
        assert_eq!(err.kind(), JsonDeserializeErrorKind::NumberOutOfRange);
        let err = from_json(r#"{"CreatedAt":"yesterday"}"#).unwrap_err();
        assert_eq!(err.kind(), JsonDeserializeErrorKind::InvalidTimestamp);
    }

    #[test]
    fn syntax_errors_surface_on_first_read() {
        let err = from_json(r#"{"DiskId":"#).unwrap_err();
        assert_eq!(err.kind(), JsonDeserializeErrorKind::Syntax);
    }

    #[test]
    fn non_finite_doubles() {
        let disk = from_json(r#"{"Ratio":"-Infinity"}"#).unwrap();
        assert_eq!(disk.ratio, Some(f64::NEG_INFINITY));
        let disk = from_json(r#"{"Ratio":"NaN"}"#).unwrap();
        assert!(disk.ratio.unwrap().is_nan());
    }

    #[test]
    fn date_time_strings_are_accepted() {
        let disk = from_json(r#"{"CreatedAt":"2019-12-16T23:48:18Z"}"#).unwrap();
        assert_eq!(disk.created_at, Some(DateTime::from_secs(1576540098)));
    }

    #[test]
    fn read_enum_rejects_unknown_values() {
        let mut deserializer = JsonDeserializer::new(br#""PRESENT""#, Default::default());
        let status: DiskStatus = deserializer.read_enum(&DISK_STATUS).unwrap();
        assert_eq!(status, DiskStatus::Present);

        let mut deserializer = JsonDeserializer::new(br#""MELTED""#, Default::default());
        let err = deserializer
            .read_enum::<DiskStatus>(&DISK_STATUS)
            .unwrap_err();
        assert_eq!(err.kind(), JsonDeserializeErrorKind::UnrecognizedEnumValue);
        assert!(err.to_string().contains("MELTED"));
    }

    #[test]
    fn container_size_peeks_at_current_value() {
        let deserializer = JsonDeserializer::new(b"[1,2,3]", Default::default());
        assert_eq!(deserializer.container_size(), Some(3));
        assert!(!deserializer.is_null());
        let deserializer = JsonDeserializer::new(b"null", Default::default());
        assert!(deserializer.is_null());
    }
}
