/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::fmt;

/// A Smithy Shape ID.
///
/// Shape IDs uniquely identify shapes in a Smithy model.
/// Format: `namespace#shapeName` or `namespace#shapeName$memberName`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeId {
    fqn: Cow<'static, str>,
    namespace: Cow<'static, str>,
    shape_name: Cow<'static, str>,
    member_name: Option<Cow<'static, str>>,
}

impl ShapeId {
    /// Creates a ShapeId for a shape from its already-split parts.
    ///
    /// This is `const` so that generated code can build schemas as statics.
    pub const fn from_static(
        fqn: &'static str,
        namespace: &'static str,
        shape_name: &'static str,
    ) -> Self {
        Self {
            fqn: Cow::Borrowed(fqn),
            namespace: Cow::Borrowed(namespace),
            shape_name: Cow::Borrowed(shape_name),
            member_name: None,
        }
    }

    /// Creates a ShapeId for a member from its already-split parts.
    pub const fn from_static_member(
        fqn: &'static str,
        namespace: &'static str,
        shape_name: &'static str,
        member_name: &'static str,
    ) -> Self {
        Self {
            fqn: Cow::Borrowed(fqn),
            namespace: Cow::Borrowed(namespace),
            shape_name: Cow::Borrowed(shape_name),
            member_name: Some(Cow::Borrowed(member_name)),
        }
    }

    /// Creates a new ShapeId by parsing a string.
    ///
    /// A value without a `#` is treated as a shape name with an empty namespace.
    ///
    /// # Examples
    /// ```
    /// use aws_smithy_schema::ShapeId;
    ///
    /// let shape_id = ShapeId::new("com.amazonaws.storagegateway#Tag$Key");
    /// assert_eq!(shape_id.namespace(), "com.amazonaws.storagegateway");
    /// assert_eq!(shape_id.shape_name(), "Tag");
    /// assert_eq!(shape_id.member_name(), Some("Key"));
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        let fqn: String = value.into();
        let (namespace, rest) = fqn.split_once('#').unwrap_or(("", fqn.as_str()));
        let (shape_name, member_name) = match rest.split_once('$') {
            Some((shape_name, member_name)) => (shape_name, Some(member_name)),
            None => (rest, None),
        };
        Self {
            namespace: Cow::Owned(namespace.to_string()),
            shape_name: Cow::Owned(shape_name.to_string()),
            member_name: member_name.map(|m| Cow::Owned(m.to_string())),
            fqn: Cow::Owned(fqn),
        }
    }

    /// Returns the string representation of this ShapeId.
    pub fn as_str(&self) -> &str {
        &self.fqn
    }

    /// Returns the namespace portion of the ShapeId.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the shape name portion of the ShapeId.
    pub fn shape_name(&self) -> &str {
        &self.shape_name
    }

    /// Returns the member name if this is a member shape ID.
    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqn)
    }
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let shape_id = ShapeId::new("smithy.api#String");
        assert_eq!(shape_id.as_str(), "smithy.api#String");
        assert_eq!(shape_id.namespace(), "smithy.api");
        assert_eq!(shape_id.shape_name(), "String");
        assert_eq!(shape_id.member_name(), None);
    }

    #[test]
    fn test_no_namespace() {
        let shape_id = ShapeId::new("NoNamespace");
        assert_eq!(shape_id.namespace(), "");
        assert_eq!(shape_id.shape_name(), "NoNamespace");
    }

    #[test]
    fn static_and_parsed_ids_are_equal() {
        const TAG_KEY: ShapeId = ShapeId::from_static_member(
            "com.amazonaws.storagegateway#Tag$Key",
            "com.amazonaws.storagegateway",
            "Tag",
            "Key",
        );
        assert_eq!(TAG_KEY, ShapeId::new("com.amazonaws.storagegateway#Tag$Key"));
        assert_eq!(TAG_KEY.to_string(), "com.amazonaws.storagegateway#Tag$Key");
    }
}
