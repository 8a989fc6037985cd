/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Human-readable rendering of shapes.
//!
//! Structures render as `{Name: value,Other: value}` listing only the members that are set,
//! in declaration order, with no separator after the last member. Lists render as
//! `[a, b]` and maps as `{k=v, k2=v2}` with entries sorted by key so the output is stable.
//! Strings marked sensitive are redacted.

use crate::serde::{SerializableStruct, ShapeSerializer};
use crate::Schema;
use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;
use std::convert::Infallible;

const REDACTED: &str = "*** Sensitive Data Redacted ***";

#[derive(Debug)]
enum Frame {
    Struct { out: String, empty: bool },
    List { out: String, empty: bool },
    Map { entries: Vec<(String, String)> },
    Entry { value: Option<String> },
}

/// A [`ShapeSerializer`] that renders shapes as text.
#[derive(Debug, Default)]
pub struct ShapeRenderer {
    stack: Vec<Frame>,
    output: String,
}

impl ShapeRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, schema: &dyn Schema, text: &str) {
        match self.stack.last_mut() {
            None => self.output.push_str(text),
            Some(Frame::Struct { out, empty }) => {
                if !*empty {
                    out.push(',');
                }
                *empty = false;
                out.push_str(
                    schema
                        .member_name()
                        .unwrap_or_else(|| schema.shape_id().shape_name()),
                );
                out.push_str(": ");
                out.push_str(text);
            }
            Some(Frame::List { out, empty }) => {
                if !*empty {
                    out.push_str(", ");
                }
                *empty = false;
                out.push_str(text);
            }
            Some(Frame::Map { entries }) => entries.push((String::new(), text.to_string())),
            Some(Frame::Entry { value }) => *value = Some(text.to_string()),
        }
    }

    fn nested<F>(&mut self, schema: &dyn Schema, frame: Frame, write: F) -> Result<(), Infallible>
    where
        F: FnOnce(&mut Self) -> Result<(), Infallible>,
    {
        self.stack.push(frame);
        write(self)?;
        let text = match self.stack.pop() {
            Some(Frame::Struct { out, .. }) => format!("{{{}}}", out),
            Some(Frame::List { out, .. }) => format!("[{}]", out),
            Some(Frame::Map { mut entries }) => {
                entries.sort();
                let entries: Vec<_> = entries
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                format!("{{{}}}", entries.join(", "))
            }
            Some(Frame::Entry { value }) => value.unwrap_or_default(),
            None => String::new(),
        };
        self.emit(schema, &text);
        Ok(())
    }
}

impl ShapeSerializer for ShapeRenderer {
    type Output = String;
    type Error = Infallible;

    fn finish(self) -> Result<Self::Output, Self::Error> {
        Ok(self.output)
    }

    fn write_struct<F>(&mut self, schema: &dyn Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        let frame = Frame::Struct {
            out: String::new(),
            empty: true,
        };
        self.nested(schema, frame, write_members)
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
            out: String::new(),
            empty: true,
        };
        self.nested(schema, frame, write_elements)
    }

    fn write_map<F>(
        &mut self,
        schema: &dyn Schema,
        len: usize,
        write_entries: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        let frame = Frame::Map {
            entries: Vec::with_capacity(len),
        };
        self.nested(schema, frame, write_entries)
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
        self.stack.push(Frame::Entry { value: None });
        write_value(self)?;
        let value = match self.stack.pop() {
            Some(Frame::Entry { value }) => value.unwrap_or_default(),
            _ => String::new(),
        };
        if let Some(Frame::Map { entries }) = self.stack.last_mut() {
            entries.push((key.to_string(), value));
        }
        Ok(())
    }

    fn write_boolean(&mut self, schema: &dyn Schema, value: bool) -> Result<(), Self::Error> {
        self.emit(schema, if value { "true" } else { "false" });
        Ok(())
    }

    fn write_integer(&mut self, schema: &dyn Schema, value: i32) -> Result<(), Self::Error> {
        self.emit(schema, &value.to_string());
        Ok(())
    }

    fn write_long(&mut self, schema: &dyn Schema, value: i64) -> Result<(), Self::Error> {
        self.emit(schema, &value.to_string());
        Ok(())
    }

    fn write_double(&mut self, schema: &dyn Schema, value: f64) -> Result<(), Self::Error> {
        self.emit(schema, &format!("{:?}", value));
        Ok(())
    }

    fn write_string(&mut self, schema: &dyn Schema, value: &str) -> Result<(), Self::Error> {
        let sensitive = schema.constraints().is_sensitive()
            || schema.target().map_or(false, |t| t.constraints().is_sensitive());
        self.emit(schema, if sensitive { REDACTED } else { value });
        Ok(())
    }

    fn write_timestamp(
        &mut self,
        schema: &dyn Schema,
        value: &DateTime,
    ) -> Result<(), Self::Error> {
        let text = value
            .fmt(Format::DateTime)
            .or_else(|_| value.fmt(Format::EpochSeconds))
            .unwrap_or_default();
        self.emit(schema, &text);
        Ok(())
    }
}

/// Renders a structure as `{Name: value,...}`.
pub fn render<T: SerializableStruct>(value: &T) -> String {
    let mut renderer = ShapeRenderer::new();
    match value.serialize(&mut renderer) {
        Ok(()) => renderer.output,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod test {
    use super::{render, ShapeRenderer};
    use crate::prelude::STRING;
    use crate::serde::ShapeSerializer;
    use crate::test_shapes::{Label, Paint, LABEL};
    use crate::{Constraints, MemberSchema, ShapeId};
    use aws_smithy_types::DateTime;
    use std::collections::HashMap;

    #[test]
    fn empty_structure_renders_braces() {
        assert_eq!(render(&Paint::default()), "{}");
    }

    #[test]
    fn only_set_members_are_rendered() {
        let paint = Paint {
            litres: Some(4),
            ..Default::default()
        };
        let rendered = render(&paint);
        assert_eq!(rendered, "{Litres: 4}");
        assert!(!rendered.contains("Color"));
    }

    #[test]
    fn members_render_in_declaration_order() {
        let paint = Paint {
            ratio: Some(0.5),
            color: Some("red".into()),
            glossy: Some(false),
            ..Default::default()
        };
        assert_eq!(render(&paint), "{Color: red,Glossy: false,Ratio: 0.5}");
    }

    #[test]
    fn aggregates_render_recursively() {
        let mut extras = HashMap::new();
        extras.insert("b".to_string(), "2".to_string());
        extras.insert("a".to_string(), "1".to_string());
        let paint = Paint {
            labels: Some(vec![Label::new("k1", "v1"), Label::new("k2", "v2")]),
            codes: Some(vec![]),
            extras: Some(extras),
            primer: Some(Label {
                name: Some("base".into()),
                value: None,
            }),
            mixed_at: Some(DateTime::from_secs(1576540098)),
            ..Default::default()
        };
        assert_eq!(
            render(&paint),
            "{Labels: [{Name: k1,Value: v1}, {Name: k2,Value: v2}],Codes: [],\
             Extras: {a=1, b=2},Primer: {Name: base},MixedAt: 2019-12-16T23:48:18Z}"
        );
    }

    #[test]
    fn sensitive_strings_are_redacted() {
        static PASSWORD: MemberSchema = MemberSchema::new(
            ShapeId::from_static_member("test#Login$Password", "test", "Login", "Password"),
            "Password",
            0,
            &STRING,
            Constraints::new().sensitive(),
        );
        let mut renderer = ShapeRenderer::new();
        renderer
            .write_struct(&LABEL, |ser| ser.write_string(&PASSWORD, "hunter2"))
            .unwrap();
        assert_eq!(
            renderer.finish().unwrap(),
            "{Password: *** Sensitive Data Redacted ***}"
        );
    }

    #[test]
    fn doubles_keep_a_fraction() {
        let paint = Paint {
            ratio: Some(1.0),
            ..Default::default()
        };
        assert_eq!(render(&paint), "{Ratio: 1.0}");
    }
}
