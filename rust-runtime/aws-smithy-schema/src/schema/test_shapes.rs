/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Small hand-written shapes shared by the unit tests of the schema walkers.

use crate::prelude::{BOOLEAN, DOUBLE, INTEGER, STRING, TIMESTAMP};
use crate::serde::{SerializableStruct, ShapeSerializer};
use crate::{
    Constraints, EnumSchema, ListSchema, MapSchema, MemberSchema, Schema, ShapeId, StructSchema,
};
use aws_smithy_types::DateTime;
use std::collections::HashMap;

macro_rules! member {
    ($id:literal, $shape:literal, $name:literal, $index:literal, $target:expr, $constraints:expr) => {
        MemberSchema::new(
            ShapeId::from_static_member($id, "test", $shape, $name),
            $name,
            $index,
            $target,
            $constraints,
        )
    };
}

pub(crate) static COLOR: EnumSchema = EnumSchema::new(
    ShapeId::from_static("test#Color", "test", "Color"),
    &["red", "green"],
);

pub(crate) static LABEL_NAME: MemberSchema = member!(
    "test#Label$Name",
    "Label",
    "Name",
    0,
    &STRING,
    Constraints::new().required().length(Some(1), Some(8))
);
pub(crate) static LABEL_VALUE: MemberSchema = member!(
    "test#Label$Value",
    "Label",
    "Value",
    1,
    &STRING,
    Constraints::new().pattern("^[a-z]*$")
);
static LABEL_MEMBERS: [&MemberSchema; 2] = [&LABEL_NAME, &LABEL_VALUE];
pub(crate) static LABEL: StructSchema =
    StructSchema::new(ShapeId::from_static("test#Label", "test", "Label"), &LABEL_MEMBERS);

static LABELS_MEMBER: MemberSchema = member!(
    "test#Labels$member",
    "Labels",
    "member",
    0,
    &LABEL,
    Constraints::NONE
);
static LABELS: ListSchema =
    ListSchema::new(ShapeId::from_static("test#Labels", "test", "Labels"), &LABELS_MEMBER);

static CODES_MEMBER: MemberSchema = member!(
    "test#Codes$member",
    "Codes",
    "member",
    0,
    &STRING,
    Constraints::new().length(Some(1), None)
);
static CODES: ListSchema =
    ListSchema::new(ShapeId::from_static("test#Codes", "test", "Codes"), &CODES_MEMBER);

static EXTRAS_KEY: MemberSchema =
    member!("test#Extras$key", "Extras", "key", 0, &STRING, Constraints::NONE);
static EXTRAS_VALUE: MemberSchema =
    member!("test#Extras$value", "Extras", "value", 1, &STRING, Constraints::NONE);
static EXTRAS: MapSchema = MapSchema::new(
    ShapeId::from_static("test#Extras", "test", "Extras"),
    &EXTRAS_KEY,
    &EXTRAS_VALUE,
);

pub(crate) static PAINT_COLOR: MemberSchema =
    member!("test#Paint$Color", "Paint", "Color", 0, &COLOR, Constraints::NONE);
pub(crate) static PAINT_LITRES: MemberSchema = member!(
    "test#Paint$Litres",
    "Paint",
    "Litres",
    1,
    &INTEGER,
    Constraints::new().range(Some(1), Some(10))
);
pub(crate) static PAINT_GLOSSY: MemberSchema =
    member!("test#Paint$Glossy", "Paint", "Glossy", 2, &BOOLEAN, Constraints::NONE);
pub(crate) static PAINT_LABELS: MemberSchema =
    member!("test#Paint$Labels", "Paint", "Labels", 3, &LABELS, Constraints::NONE);
pub(crate) static PAINT_CODES: MemberSchema = member!(
    "test#Paint$Codes",
    "Paint",
    "Codes",
    4,
    &CODES,
    Constraints::new().length(None, Some(2))
);
pub(crate) static PAINT_EXTRAS: MemberSchema =
    member!("test#Paint$Extras", "Paint", "Extras", 5, &EXTRAS, Constraints::NONE);
pub(crate) static PAINT_PRIMER: MemberSchema =
    member!("test#Paint$Primer", "Paint", "Primer", 6, &LABEL, Constraints::NONE);
pub(crate) static PAINT_RATIO: MemberSchema =
    member!("test#Paint$Ratio", "Paint", "Ratio", 7, &DOUBLE, Constraints::NONE);
pub(crate) static PAINT_MIXED_AT: MemberSchema =
    member!("test#Paint$MixedAt", "Paint", "MixedAt", 8, &TIMESTAMP, Constraints::NONE);
static PAINT_MEMBERS: [&MemberSchema; 9] = [
    &PAINT_COLOR,
    &PAINT_LITRES,
    &PAINT_GLOSSY,
    &PAINT_LABELS,
    &PAINT_CODES,
    &PAINT_EXTRAS,
    &PAINT_PRIMER,
    &PAINT_RATIO,
    &PAINT_MIXED_AT,
];
pub(crate) static PAINT: StructSchema =
    StructSchema::new(ShapeId::from_static("test#Paint", "test", "Paint"), &PAINT_MEMBERS);

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Label {
    pub(crate) name: Option<String>,
    pub(crate) value: Option<String>,
}

impl Label {
    pub(crate) fn new(name: &str, value: &str) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

impl SerializableStruct for Label {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&LABEL, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(name) = &self.name {
                ser.write_string(&LABEL_NAME, name)?;
            }
            if let Some(value) = &self.value {
                ser.write_string(&LABEL_VALUE, value)?;
            }
            Ok(())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Paint {
    pub(crate) color: Option<String>,
    pub(crate) litres: Option<i32>,
    pub(crate) glossy: Option<bool>,
    pub(crate) labels: Option<Vec<Label>>,
    pub(crate) codes: Option<Vec<String>>,
    pub(crate) extras: Option<HashMap<String, String>>,
    pub(crate) primer: Option<Label>,
    pub(crate) ratio: Option<f64>,
    pub(crate) mixed_at: Option<DateTime>,
}

impl SerializableStruct for Paint {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&PAINT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(color) = &self.color {
                ser.write_string(&PAINT_COLOR, color)?;
            }
            if let Some(litres) = self.litres {
                ser.write_integer(&PAINT_LITRES, litres)?;
            }
            if let Some(glossy) = self.glossy {
                ser.write_boolean(&PAINT_GLOSSY, glossy)?;
            }
            if let Some(labels) = &self.labels {
                ser.write_list(&PAINT_LABELS, labels.len(), |ser| {
                    for label in labels {
                        label.serialize_member(&LABELS_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(codes) = &self.codes {
                ser.write_list(&PAINT_CODES, codes.len(), |ser| {
                    for code in codes {
                        ser.write_string(&CODES_MEMBER, code)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(extras) = &self.extras {
                ser.write_map(&PAINT_EXTRAS, extras.len(), |ser| {
                    for (key, value) in extras {
                        ser.write_map_entry(&PAINT_EXTRAS, key, |ser| {
                            ser.write_string(&EXTRAS_VALUE, value)
                        })?;
                    }
                    Ok(())
                })?;
            }
            if let Some(primer) = &self.primer {
                primer.serialize_member(&PAINT_PRIMER, ser)?;
            }
            if let Some(ratio) = self.ratio {
                ser.write_double(&PAINT_RATIO, ratio)?;
            }
            if let Some(mixed_at) = &self.mixed_at {
                ser.write_timestamp(&PAINT_MIXED_AT, mixed_at)?;
            }
            Ok(())
        })
    }
}
