/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(missing_docs, rust_2018_idioms)]

//! AWS Storage Gateway is the service that connects an on-premises software appliance with
//! cloud-based storage to provide seamless and secure integration between an organization's
//! on-premises IT environment and the AWS storage infrastructure.
//!
//! This crate holds the shape model of the service: the inputs and outputs of its operations,
//! the structures and enums they are built from, and the errors the service returns. Every
//! member is optional, shapes are assembled with builders, and the `Display` of a shape lists
//! the members that are set:
//!
//! ```
//! use aws_sdk_storagegateway::model::Tag;
//!
//! let tag = Tag::builder().key("env").value("prod").build();
//! assert_eq!(tag.to_string(), "{Key: env,Value: prod}");
//! assert_eq!(Tag::builder().build().to_string(), "{}");
//! ```
//!
//! Requests and responses are exchanged as AWS JSON 1.1 documents through the handles in
//! [`operation`], which leave the transport to the caller.

pub mod config;
pub mod error;
pub mod input;
mod json_errors;
pub mod model;
pub mod operation;
pub mod output;
pub mod primitives;
mod protocol_serde;
pub mod result;
mod schema;

/// Crate version number.
pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{Config, Region};
pub use error::Error;
pub use result::SdkError;
