/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// Inclusive lower and upper bounds. Either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T: Copy + PartialOrd> Bounds<T> {
    /// Creates new bounds.
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Returns the inclusive lower bound.
    pub fn min(&self) -> Option<T> {
        self.min
    }

    /// Returns the inclusive upper bound.
    pub fn max(&self) -> Option<T> {
        self.max
    }

    /// Returns true if `value` lies within the bounds.
    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => write!(f, "{}..={}", min, max),
            (Some(min), None) => write!(f, ">= {}", min),
            (None, Some(max)) => write!(f, "<= {}", max),
            (None, None) => write!(f, "unbounded"),
        }
    }
}

/// Constraint traits of a shape or member, kept exactly as the service model declares them.
///
/// Generated code never checks these implicitly. They are read by
/// [`validate`](crate::validate) when a caller asks for validation, and are otherwise enforced
/// by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    required: bool,
    length: Option<Bounds<u64>>,
    range: Option<Bounds<i64>>,
    pattern: Option<&'static str>,
    sensitive: bool,
}

impl Constraints {
    /// No constraints.
    pub const NONE: Constraints = Constraints::new();

    /// Creates an empty set of constraints.
    pub const fn new() -> Self {
        Self {
            required: false,
            length: None,
            range: None,
            pattern: None,
            sensitive: false,
        }
    }

    /// Marks the member as `@required`.
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Adds a `@length` constraint. Strings count characters; lists and maps count entries.
    pub const fn length(self, min: Option<u64>, max: Option<u64>) -> Self {
        Self {
            length: Some(Bounds::new(min, max)),
            ..self
        }
    }

    /// Adds a `@range` constraint.
    pub const fn range(self, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            range: Some(Bounds::new(min, max)),
            ..self
        }
    }

    /// Adds a `@pattern` constraint.
    pub const fn pattern(self, pattern: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            ..self
        }
    }

    /// Marks the shape as `@sensitive`. Its values are redacted when rendered.
    pub const fn sensitive(self) -> Self {
        Self {
            sensitive: true,
            ..self
        }
    }

    /// Returns true if the member is `@required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the `@length` bounds, if any.
    pub fn length_bounds(&self) -> Option<&Bounds<u64>> {
        self.length.as_ref()
    }

    /// Returns the `@range` bounds, if any.
    pub fn range_bounds(&self) -> Option<&Bounds<i64>> {
        self.range.as_ref()
    }

    /// Returns the `@pattern` regular expression, if any.
    pub fn pattern_regex(&self) -> Option<&'static str> {
        self.pattern
    }

    /// Returns true if the shape is `@sensitive`.
    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod test {
    use super::{Bounds, Constraints};

    #[test]
    fn builder_keeps_every_constraint() {
        const C: Constraints = Constraints::new()
            .required()
            .length(Some(1), Some(50))
            .pattern("^[a-z]+$");
        assert!(C.is_required());
        assert_eq!(C.length_bounds(), Some(&Bounds::new(Some(1), Some(50))));
        assert_eq!(C.pattern_regex(), Some("^[a-z]+$"));
        assert_eq!(C.range_bounds(), None);
        assert!(!C.is_sensitive());
        assert!(Constraints::NONE.sensitive().is_sensitive());
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds::new(Some(2u64), Some(255));
        assert!(!bounds.contains(1));
        assert!(bounds.contains(2));
        assert!(bounds.contains(255));
        assert!(!bounds.contains(256));
        assert!(Bounds::<i64>::new(None, None).contains(i64::MIN));
        assert_eq!(bounds.to_string(), "2..=255");
        assert_eq!(Bounds::new(None, Some(1024u64)).to_string(), "<= 1024");
    }
}
