/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Runtime schemas for Smithy shapes.
//!
//! Generated shapes describe themselves with static schemas (shape IDs, member lists and the
//! constraint metadata of the service model). Everything that walks a shape generically is
//! written once against those schemas: wire codecs, the `{Name: value}` rendering used by
//! `Display`, declaration-ordered hash codes, and opt-in constraint validation.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod schema;

pub use schema::*;
