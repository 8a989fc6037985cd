/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Opt-in validation of the constraint traits carried by schemas.
//!
//! Nothing in a generated client calls this implicitly: requests are sent as built and the
//! service remains the authority on constraints. Callers that prefer to fail before sending can
//! run [`validate`] on an input and inspect every violation at once.

use crate::serde::{SerializableStruct, ShapeSerializer};
use crate::{Bounds, Constraints, Schema};
use aws_smithy_types::DateTime;
use regex::Regex;
use std::collections::HashMap;
use std::convert::Infallible;
use std::error::Error;
use std::fmt;

/// The kind of constraint a value violated.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ViolationKind {
    /// A `@required` member was not set.
    MissingRequired,
    /// A string, list or map was outside its `@length` bounds.
    Length {
        /// Length of the value.
        length: u64,
        /// Allowed length.
        bounds: Bounds<u64>,
    },
    /// A number was outside its `@range` bounds.
    Range {
        /// The value.
        value: f64,
        /// Allowed range.
        bounds: Bounds<i64>,
    },
    /// A string did not match its `@pattern`.
    Pattern {
        /// The regular expression the value had to match.
        pattern: &'static str,
    },
    /// A string was not one of its enum's values.
    EnumValue {
        /// The value.
        value: String,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingRequired => write!(f, "member is required but was not set"),
            ViolationKind::Length { length, bounds } => {
                write!(f, "length {} is outside of {}", length, bounds)
            }
            ViolationKind::Range { value, bounds } => {
                write!(f, "value {} is outside of {}", value, bounds)
            }
            ViolationKind::Pattern { pattern } => {
                write!(f, "value does not match pattern `{}`", pattern)
            }
            ViolationKind::EnumValue { value } => {
                write!(f, "`{}` is not an allowed value", value)
            }
        }
    }
}

/// A single constraint violation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    path: String,
    kind: ViolationKind,
}

impl ConstraintViolation {
    /// Path of the offending value, such as `Tags[0].Key`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// What was violated.
    pub fn kind(&self) -> &ViolationKind {
        &self.kind
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Every constraint violation found in a shape.
#[derive(Debug)]
pub struct ValidationError {
    violations: Vec<ConstraintViolation>,
}

impl ValidationError {
    /// Returns the violations, in the order the shape's members are declared.
    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} constraint violation(s)", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, violation)?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

#[derive(Debug)]
enum Segment {
    Member(String),
    Index(usize),
    Key(String),
}

#[derive(Debug)]
enum Frame {
    Struct {
        members: Vec<(String, bool)>,
        seen: Vec<bool>,
    },
    List {
        next: usize,
    },
    Map,
    Entry {
        key: String,
    },
}

/// A [`ShapeSerializer`] that checks every written value against its schema's constraints.
#[derive(Debug, Default)]
pub struct ConstraintValidator {
    stack: Vec<Frame>,
    path: Vec<Segment>,
    violations: Vec<ConstraintViolation>,
    patterns: HashMap<&'static str, Option<Regex>>,
}

impl ConstraintValidator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Determines where a value written with `schema` lands in the current aggregate.
    fn segment(&mut self, schema: &dyn Schema) -> Option<Segment> {
        match self.stack.last_mut() {
            Some(Frame::Struct { seen, .. }) => {
                if let Some(slot) = schema.member_index().and_then(|i| seen.get_mut(i)) {
                    *slot = true;
                }
                schema.member_name().map(|name| Segment::Member(name.to_string()))
            }
            Some(Frame::List { next }) => {
                let index = *next;
                *next += 1;
                Some(Segment::Index(index))
            }
            Some(Frame::Entry { key }) => Some(Segment::Key(key.clone())),
            Some(Frame::Map) | None => None,
        }
    }

    fn current_path(&self, extra: Option<&Segment>) -> String {
        let mut path = String::new();
        for segment in self.path.iter().chain(extra) {
            match segment {
                Segment::Member(name) => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(name);
                }
                Segment::Index(index) => path.push_str(&format!("[{}]", index)),
                Segment::Key(key) => path.push_str(&format!("[{}]", key)),
            }
        }
        path
    }

    fn report(&mut self, path: String, kind: ViolationKind) {
        tracing::debug!(path = %path, violation = %kind, "constraint violation");
        self.violations.push(ConstraintViolation { path, kind });
    }

    fn pattern_matches(&mut self, pattern: &'static str, value: &str) -> bool {
        let regex = self.patterns.entry(pattern).or_insert_with(|| {
            Regex::new(pattern)
                .map_err(|err| {
                    tracing::warn!(pattern, error = %err, "skipping unsupported pattern");
                })
                .ok()
        });
        match regex {
            Some(regex) => regex.is_match(value),
            None => true,
        }
    }

    fn check_length(&mut self, schema: &dyn Schema, path: &str, length: u64) {
        for constraints in constraints_of(schema) {
            if let Some(bounds) = constraints.length_bounds() {
                if !bounds.contains(length) {
                    let bounds = *bounds;
                    self.report(path.to_string(), ViolationKind::Length { length, bounds });
                }
            }
        }
    }

    fn check_range(&mut self, schema: &dyn Schema, path: &str, value: f64) {
        for constraints in constraints_of(schema) {
            if let Some(bounds) = constraints.range_bounds() {
                let inside = bounds.min().map_or(true, |min| value >= min as f64)
                    && bounds.max().map_or(true, |max| value <= max as f64);
                if !inside {
                    let bounds = *bounds;
                    self.report(path.to_string(), ViolationKind::Range { value, bounds });
                }
            }
        }
    }

    fn nested<F>(
        &mut self,
        schema: &dyn Schema,
        frame: Frame,
        len: Option<u64>,
        write: F,
    ) -> Result<(), Infallible>
    where
        F: FnOnce(&mut Self) -> Result<(), Infallible>,
    {
        let segment = self.segment(schema);
        let pushed = segment.is_some();
        self.path.extend(segment);
        if let Some(len) = len {
            let path = self.current_path(None);
            self.check_length(schema, &path, len);
        }
        self.stack.push(frame);
        write(self)?;
        if let Some(Frame::Struct { members, seen }) = self.stack.pop() {
            for ((name, required), seen) in members.into_iter().zip(seen) {
                if required && !seen {
                    let path = self.current_path(Some(&Segment::Member(name)));
                    self.report(path, ViolationKind::MissingRequired);
                }
            }
        }
        if pushed {
            self.path.pop();
        }
        Ok(())
    }
}

/// Constraints declared on a member and on the shape it targets.
fn constraints_of(schema: &dyn Schema) -> impl Iterator<Item = Constraints> + '_ {
    std::iter::once(*schema.constraints()).chain(schema.target().map(|t| *t.constraints()))
}

impl ShapeSerializer for ConstraintValidator {
    type Output = Vec<ConstraintViolation>;
    type Error = Infallible;

    fn finish(self) -> Result<Self::Output, Self::Error> {
        Ok(self.violations)
    }

    fn write_struct<F>(&mut self, schema: &dyn Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        let members: Vec<_> = schema
            .members()
            .map(|member| {
                (
                    member.member_name().unwrap_or_default().to_string(),
                    member.constraints().is_required(),
                )
            })
            .collect();
        let seen = vec![false; members.len()];
        self.nested(schema, Frame::Struct { members, seen }, None, write_members)
    }

    fn write_list<F>(
        &mut self,
        schema: &dyn Schema,
        len: usize,
        write_elements: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.nested(
            schema,
            Frame::List { next: 0 },
            Some(len as u64),
            write_elements,
        )
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
        self.nested(schema, Frame::Map, Some(len as u64), write_entries)
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
        self.stack.push(Frame::Entry {
            key: key.to_string(),
        });
        write_value(self)?;
        self.stack.pop();
        Ok(())
    }

    fn write_boolean(&mut self, schema: &dyn Schema, _value: bool) -> Result<(), Self::Error> {
        self.segment(schema);
        Ok(())
    }

    fn write_integer(&mut self, schema: &dyn Schema, value: i32) -> Result<(), Self::Error> {
        self.write_long(schema, i64::from(value))
    }

    fn write_long(&mut self, schema: &dyn Schema, value: i64) -> Result<(), Self::Error> {
        let segment = self.segment(schema);
        let path = self.current_path(segment.as_ref());
        self.check_range(schema, &path, value as f64);
        Ok(())
    }

    fn write_double(&mut self, schema: &dyn Schema, value: f64) -> Result<(), Self::Error> {
        let segment = self.segment(schema);
        let path = self.current_path(segment.as_ref());
        self.check_range(schema, &path, value);
        Ok(())
    }

    fn write_string(&mut self, schema: &dyn Schema, value: &str) -> Result<(), Self::Error> {
        let segment = self.segment(schema);
        let path = self.current_path(segment.as_ref());
        self.check_length(schema, &path, value.chars().count() as u64);
        for constraints in constraints_of(schema) {
            if let Some(pattern) = constraints.pattern_regex() {
                if !self.pattern_matches(pattern, value) {
                    self.report(path.clone(), ViolationKind::Pattern { pattern });
                }
            }
        }
        let allowed = schema.enum_values();
        if !allowed.is_empty() && !allowed.contains(&value) {
            self.report(
                path,
                ViolationKind::EnumValue {
                    value: value.to_string(),
                },
            );
        }
        Ok(())
    }

    fn write_timestamp(
        &mut self,
        schema: &dyn Schema,
        _value: &DateTime,
    ) -> Result<(), Self::Error> {
        self.segment(schema);
        Ok(())
    }
}

/// Checks `value` against the constraints declared in its schema.
///
/// Returns every violation found, not just the first.
pub fn validate<T: SerializableStruct>(value: &T) -> Result<(), ValidationError> {
    let mut validator = ConstraintValidator::new();
    if let Err(never) = value.serialize(&mut validator) {
        match never {}
    }
    if validator.violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            violations: validator.violations,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{validate, ViolationKind};
    use crate::test_shapes::{Label, Paint};
    use crate::Bounds;

    #[test]
    fn valid_shape_passes() {
        let paint = Paint {
            color: Some("red".into()),
            litres: Some(10),
            labels: Some(vec![Label::new("a", "b")]),
            ..Default::default()
        };
        assert!(validate(&paint).is_ok());
        assert!(validate(&Paint::default()).is_ok());
    }

    #[test]
    fn missing_required_member_is_reported_with_path() {
        let paint = Paint {
            labels: Some(vec![
                Label::new("ok", "fine"),
                Label {
                    name: None,
                    value: Some("x".into()),
                },
            ]),
            ..Default::default()
        };
        let err = validate(&paint).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].path(), "Labels[1].Name");
        assert_eq!(err.violations()[0].kind(), &ViolationKind::MissingRequired);
    }

    #[test]
    fn every_violation_is_reported() {
        let paint = Paint {
            color: Some("blue".into()),
            litres: Some(0),
            codes: Some(vec!["a".into(), "".into(), "c".into()]),
            primer: Some(Label::new("much-too-long", "UPPER")),
            ..Default::default()
        };
        let err = validate(&paint).unwrap_err();
        let found: Vec<_> = err
            .violations()
            .iter()
            .map(|v| (v.path().to_string(), v.kind().clone()))
            .collect();
        assert_eq!(
            found,
            vec![
                (
                    "Color".to_string(),
                    ViolationKind::EnumValue {
                        value: "blue".into()
                    }
                ),
                (
                    "Litres".to_string(),
                    ViolationKind::Range {
                        value: 0.0,
                        bounds: Bounds::new(Some(1), Some(10))
                    }
                ),
                (
                    "Codes".to_string(),
                    ViolationKind::Length {
                        length: 3,
                        bounds: Bounds::new(None, Some(2))
                    }
                ),
                (
                    "Codes[1]".to_string(),
                    ViolationKind::Length {
                        length: 0,
                        bounds: Bounds::new(Some(1), None)
                    }
                ),
                (
                    "Primer.Name".to_string(),
                    ViolationKind::Length {
                        length: 13,
                        bounds: Bounds::new(Some(1), Some(8))
                    }
                ),
                (
                    "Primer.Value".to_string(),
                    ViolationKind::Pattern {
                        pattern: "^[a-z]*$"
                    }
                ),
            ]
        );
        assert!(err.to_string().starts_with("6 constraint violation(s): Color: "));
    }

    #[test]
    fn length_counts_characters() {
        let paint = Paint {
            primer: Some(Label::new("ééééé", "")),
            ..Default::default()
        };
        assert!(validate(&paint).is_ok());
    }
}
