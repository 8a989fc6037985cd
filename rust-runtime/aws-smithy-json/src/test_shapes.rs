/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Hand-written shapes for the codec tests, shaped like generated code.

use aws_smithy_schema::prelude::{BOOLEAN, DOUBLE, INTEGER, LONG, STRING, TIMESTAMP};
use aws_smithy_schema::serde::{
    DeserializableStruct, SerializableStruct, ShapeDeserializer, ShapeSerializer,
};
use aws_smithy_schema::{
    Constraints, EnumSchema, EnumShape, ListSchema, MapSchema, MemberSchema, Schema, ShapeId,
    StructSchema,
};
use aws_smithy_types::error::UnknownVariantError;
use aws_smithy_types::DateTime;
use std::collections::HashMap;

macro_rules! member {
    ($shape:literal, $name:literal, $index:literal, $target:expr) => {
        MemberSchema::new(
            ShapeId::from_static_member(
                concat!("test#", $shape, "$", $name),
                "test",
                $shape,
                $name,
            ),
            $name,
            $index,
            $target,
            Constraints::NONE,
        )
    };
}

pub(crate) static DISK_STATUS: EnumSchema = EnumSchema::new(
    ShapeId::from_static("test#DiskStatus", "test", "DiskStatus"),
    &["PRESENT", "MISSING"],
);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DiskStatus {
    Present,
    Missing,
}

impl EnumShape for DiskStatus {
    fn as_str(&self) -> &str {
        match self {
            DiskStatus::Present => "PRESENT",
            DiskStatus::Missing => "MISSING",
        }
    }

    fn try_parse(value: &str) -> Result<Self, UnknownVariantError> {
        match value {
            "PRESENT" => Ok(DiskStatus::Present),
            "MISSING" => Ok(DiskStatus::Missing),
            other => Err(UnknownVariantError::new("DiskStatus", other)),
        }
    }

    fn values() -> &'static [&'static str] {
        &["PRESENT", "MISSING"]
    }
}

static TAG_KEY: MemberSchema = member!("DiskTag", "Key", 0, &STRING);
static TAG_VALUE: MemberSchema = member!("DiskTag", "Value", 1, &STRING);
static TAG_MEMBERS: [&MemberSchema; 2] = [&TAG_KEY, &TAG_VALUE];
static DISK_TAG: StructSchema =
    StructSchema::new(ShapeId::from_static("test#DiskTag", "test", "DiskTag"), &TAG_MEMBERS);

static TAGS_MEMBER: MemberSchema = member!("Tags", "member", 0, &DISK_TAG);
static TAGS: ListSchema =
    ListSchema::new(ShapeId::from_static("test#Tags", "test", "Tags"), &TAGS_MEMBER);

static ATTRIBUTES_KEY: MemberSchema = member!("Attributes", "key", 0, &STRING);
static ATTRIBUTES_VALUE: MemberSchema = member!("Attributes", "value", 1, &STRING);
static ATTRIBUTES: MapSchema = MapSchema::new(
    ShapeId::from_static("test#Attributes", "test", "Attributes"),
    &ATTRIBUTES_KEY,
    &ATTRIBUTES_VALUE,
);

static DISK_ID: MemberSchema = member!("Disk", "DiskId", 0, &STRING);
static DISK_SIZE: MemberSchema = member!("Disk", "DiskSizeInBytes", 1, &LONG);
static DISK_ALLOCATED: MemberSchema = member!("Disk", "DiskAllocated", 2, &BOOLEAN);
static DISK_COUNT: MemberSchema = member!("Disk", "Count", 3, &INTEGER);
static DISK_RATIO: MemberSchema = member!("Disk", "Ratio", 4, &DOUBLE);
static DISK_STATUS_MEMBER: MemberSchema = member!("Disk", "Status", 5, &DISK_STATUS);
static DISK_TAGS: MemberSchema = member!("Disk", "Tags", 6, &TAGS);
static DISK_ATTRIBUTES: MemberSchema = member!("Disk", "Attributes", 7, &ATTRIBUTES);
static DISK_CREATED_AT: MemberSchema = member!("Disk", "CreatedAt", 8, &TIMESTAMP);
static DISK_MEMBERS: [&MemberSchema; 9] = [
    &DISK_ID,
    &DISK_SIZE,
    &DISK_ALLOCATED,
    &DISK_COUNT,
    &DISK_RATIO,
    &DISK_STATUS_MEMBER,
    &DISK_TAGS,
    &DISK_ATTRIBUTES,
    &DISK_CREATED_AT,
];
static DISK: StructSchema =
    StructSchema::new(ShapeId::from_static("test#Disk", "test", "Disk"), &DISK_MEMBERS);

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DiskTag {
    pub(crate) key: Option<String>,
    pub(crate) value: Option<String>,
}

impl DiskTag {
    pub(crate) fn new(key: &str, value: &str) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl SerializableStruct for DiskTag {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&DISK_TAG, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(key) = &self.key {
                ser.write_string(&TAG_KEY, key)?;
            }
            if let Some(value) = &self.value {
                ser.write_string(&TAG_VALUE, value)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for DiskTag {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        deserializer.read_struct(&DISK_TAG, DiskTag::default(), |mut tag, member, de| {
            match member.member_index() {
                Some(0) => tag.key = Some(de.read_string(member)?),
                Some(1) => tag.value = Some(de.read_string(member)?),
                _ => {}
            }
            Ok(tag)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Disk {
    pub(crate) disk_id: Option<String>,
    pub(crate) size_in_bytes: Option<i64>,
    pub(crate) allocated: Option<bool>,
    pub(crate) count: Option<i32>,
    pub(crate) ratio: Option<f64>,
    pub(crate) status: Option<String>,
    pub(crate) tags: Option<Vec<DiskTag>>,
    pub(crate) attributes: Option<HashMap<String, String>>,
    pub(crate) created_at: Option<DateTime>,
}

impl SerializableStruct for Disk {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&DISK, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(disk_id) = &self.disk_id {
                ser.write_string(&DISK_ID, disk_id)?;
            }
            if let Some(size) = self.size_in_bytes {
                ser.write_long(&DISK_SIZE, size)?;
            }
            if let Some(allocated) = self.allocated {
                ser.write_boolean(&DISK_ALLOCATED, allocated)?;
            }
            if let Some(count) = self.count {
                ser.write_integer(&DISK_COUNT, count)?;
            }
            if let Some(ratio) = self.ratio {
                ser.write_double(&DISK_RATIO, ratio)?;
            }
            if let Some(status) = &self.status {
                ser.write_string(&DISK_STATUS_MEMBER, status)?;
            }
            if let Some(tags) = &self.tags {
                ser.write_list(&DISK_TAGS, tags.len(), |ser| {
                    for tag in tags {
                        tag.serialize_member(&TAGS_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(attributes) = &self.attributes {
                ser.write_map(&DISK_ATTRIBUTES, attributes.len(), |ser| {
                    for (key, value) in attributes {
                        ser.write_map_entry(&DISK_ATTRIBUTES, key, |ser| {
                            ser.write_string(&ATTRIBUTES_VALUE, value)
                        })?;
                    }
                    Ok(())
                })?;
            }
            if let Some(created_at) = &self.created_at {
                ser.write_timestamp(&DISK_CREATED_AT, created_at)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for Disk {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        deserializer.read_struct(&DISK, Disk::default(), |mut disk, member, de| {
            match member.member_index() {
                Some(0) => disk.disk_id = Some(de.read_string(member)?),
                Some(1) => disk.size_in_bytes = Some(de.read_long(member)?),
                Some(2) => disk.allocated = Some(de.read_boolean(member)?),
                Some(3) => disk.count = Some(de.read_integer(member)?),
                Some(4) => disk.ratio = Some(de.read_double(member)?),
                Some(5) => disk.status = Some(de.read_string(member)?),
                Some(6) => {
                    disk.tags = Some(de.read_list(member, Vec::new(), |mut tags, de| {
                        tags.push(DiskTag::deserialize(de)?);
                        Ok(tags)
                    })?)
                }
                Some(7) => {
                    disk.attributes =
                        Some(de.read_map(member, HashMap::new(), |mut map, key, de| {
                            map.insert(key, de.read_string(&ATTRIBUTES_VALUE)?);
                            Ok(map)
                        })?)
                }
                Some(8) => disk.created_at = Some(de.read_timestamp(member)?),
                _ => {}
            }
            Ok(disk)
        })
    }
}
