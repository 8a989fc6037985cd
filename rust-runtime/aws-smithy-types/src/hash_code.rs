/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Deterministic 32-bit hash codes for Smithy values.
//!
//! Unlike [`std::hash::Hash`], these hash codes do not depend on a hasher implementation or on
//! process-local random state: the same value always produces the same code. Aggregates fold their
//! members together with [`combine`], starting from [`SEED`], so the code of a structure is fixed by
//! its member values and their declaration order.
//!
//! ```
//! use aws_smithy_types::hash_code;
//!
//! let mut acc = hash_code::SEED;
//! acc = hash_code::combine(acc, hash_code::string("GW"));
//! acc = hash_code::combine(acc, hash_code::ABSENT);
//! assert_eq!(acc, 71889);
//! ```

use crate::DateTime;

/// Starting value for folding the members of an aggregate.
pub const SEED: i32 = 1;

/// Odd multiplier applied to the running value before each member is added.
pub const MULTIPLIER: i32 = 31;

/// Code contributed by an absent value.
pub const ABSENT: i32 = 0;

/// Folds `value` into the running hash `acc`.
#[inline]
pub fn combine(acc: i32, value: i32) -> i32 {
    acc.wrapping_mul(MULTIPLIER).wrapping_add(value)
}

/// Hash code of a string, computed over its UTF-16 code units.
pub fn string(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |acc, unit| combine(acc, i32::from(unit)))
}

/// Hash code of a boolean.
#[inline]
pub fn boolean(value: bool) -> i32 {
    if value {
        1231
    } else {
        1237
    }
}

/// Hash code of a 32-bit integer.
#[inline]
pub fn integer(value: i32) -> i32 {
    value
}

/// Hash code of a 64-bit integer: the upper and lower halves folded together.
#[inline]
pub fn long(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

/// Hash code of a double.
///
/// `0.0` and `-0.0` compare equal and share a code. Every NaN shares a code.
pub fn double(value: f64) -> i32 {
    let bits = if value == 0.0 {
        0u64
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    };
    long(bits as i64)
}

/// Equality of doubles that agrees with [`double`].
///
/// Every NaN equals every other NaN, so a value always equals itself. `0.0` equals `-0.0`.
#[inline]
pub fn double_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// [`double_eq`] lifted over optional members: two absent values are equal.
pub fn optional_double_eq(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => double_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Hash code of a timestamp.
pub fn timestamp(value: &DateTime) -> i32 {
    combine(long(value.secs()), integer(value.subsec_nanos() as i32))
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::proptest;

    #[test]
    fn string_codes() {
        assert_eq!(string(""), 0);
        assert_eq!(string("a"), 97);
        assert_eq!(string("ab"), 97 * 31 + 98);
        // wraps around on long input
        assert_eq!(string("hello world"), 1794106052);
        // supplementary characters hash as surrogate pairs
        assert_eq!(string("\u{1F600}"), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn boolean_codes() {
        assert_eq!(boolean(true), 1231);
        assert_eq!(boolean(false), 1237);
    }

    #[test]
    fn long_codes() {
        assert_eq!(long(0), 0);
        assert_eq!(long(1), 1);
        assert_eq!(long(-1), 0);
        assert_eq!(long(1 << 32), 1);
    }

    #[test]
    fn double_codes() {
        assert_eq!(double(0.0), double(-0.0));
        assert_eq!(double(0.0), 0);
        assert_eq!(double(f64::NAN), double(-f64::NAN));
        assert_eq!(double(1.0), 1072693248);
    }

    #[test]
    fn double_equality_matches_double_codes() {
        assert!(double_eq(f64::NAN, f64::NAN));
        assert!(double_eq(f64::NAN, -f64::NAN));
        assert!(double_eq(0.0, -0.0));
        assert!(double_eq(f64::INFINITY, f64::INFINITY));
        assert!(!double_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!double_eq(f64::NAN, 1.0));
        assert!(optional_double_eq(None, None));
        assert!(optional_double_eq(Some(f64::NAN), Some(f64::NAN)));
        assert!(!optional_double_eq(Some(f64::NAN), None));
    }

    #[test]
    fn combine_matches_polynomial() {
        let acc = combine(combine(SEED, 7), ABSENT);
        assert_eq!(acc, (31 + 7) * 31);
    }

    proptest! {
        #[test]
        fn string_code_is_deterministic(s in ".*") {
            assert_eq!(string(&s), string(&s.clone()));
        }

        #[test]
        fn long_code_of_small_values_is_identity(v in 0i64..i32::MAX as i64) {
            assert_eq!(long(v), v as i32);
        }

        #[test]
        fn equal_doubles_share_a_code(a in proptest::num::f64::ANY, b in proptest::num::f64::ANY) {
            if double_eq(a, b) {
                assert_eq!(double(a), double(b));
            }
            assert!(double_eq(a, a));
        }
    }
}
