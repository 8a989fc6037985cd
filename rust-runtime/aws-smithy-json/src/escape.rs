/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::fmt::Write;

/// Escapes a string for embedding in a JSON string value.
pub(crate) fn escape_string(value: &str) -> Cow<'_, str> {
    match value.find(needs_escape) {
        Some(index) => Cow::Owned(escape_string_inner(&value[..index], &value[index..])),
        None => Cow::Borrowed(value),
    }
}

fn needs_escape(chr: char) -> bool {
    matches!(chr, '\u{0}'..='\u{1F}' | '"' | '\\')
}

fn escape_string_inner(start: &str, rest: &str) -> String {
    let mut escaped = String::with_capacity(start.len() + rest.len() + 1);
    escaped.push_str(start);

    for chr in rest.chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{0}'..='\u{1F}' => {
                // writing to a String cannot fail
                let _ = write!(escaped, "\\u{:04x}", chr as u32);
            }
            _ => escaped.push(chr),
        }
    }
    escaped
}

#[cfg(test)]
mod test {
    use super::escape_string;
    use proptest::proptest;
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\n", escape_string("foo\r\n").as_ref());
        assert_eq!("foo\\r\\nbar", escape_string("foo\r\nbar").as_ref());
        assert_eq!(r"foo\\bar", escape_string(r"foo\bar").as_ref());
        assert_eq!(r"\\foobar", escape_string(r"\foobar").as_ref());
        assert_eq!(
            r"\bf\fo\to\r\n",
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
        assert_eq!("ünïcödé\\n", escape_string("ünïcödé\n").as_ref());
    }

    #[test]
    fn no_escapes_borrows() {
        assert!(matches!(escape_string("sgw-12A3456B"), Cow::Borrowed(_)));
    }

    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            let serde_escaped = serde_json::to_string(&s).unwrap();
            let serde_escaped = &serde_escaped[1..(serde_escaped.len() - 1)];
            assert_eq!(serde_escaped, escape_string(&s))
        }
    }
}
