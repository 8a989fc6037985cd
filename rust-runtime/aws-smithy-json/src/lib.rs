/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON codec for schema-described shapes, as used by the `awsJson1_1` protocol.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod codec;
pub mod error;
mod escape;

#[cfg(test)]
mod test_shapes;

pub use codec::{JsonCodec, JsonCodecSettings, JsonDeserializer, JsonSerializer};
