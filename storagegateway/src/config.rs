/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Service configuration.
//!
//! Requests are addressed from a [`Region`], or from an explicit endpoint URL that takes
//! precedence over the region:
//!
//! ```
//! use aws_sdk_storagegateway::{Config, Region};
//!
//! let config = Config::builder().region(Region::new("eu-west-1")).build();
//! assert_eq!(
//!     config.endpoint().unwrap().to_string(),
//!     "https://storagegateway.eu-west-1.amazonaws.com/"
//! );
//! ```

use crate::error::BuildError;
use aws_smithy_json::codec::{JsonCodec, JsonCodecSettings};
use aws_smithy_types::date_time::Format;
use std::borrow::Cow;
use std::fmt;

/// The region to send requests to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. Owned values are an escape hatch.
    Cow<'static, str>,
);

impl Region {
    /// Creates a region from a name such as `us-east-1`.
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    /// Const constructor for statically known regions.
    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for requests to AWS Storage Gateway.
#[derive(Clone, Debug)]
pub struct Config {
    region: Option<Region>,
    endpoint_url: Option<String>,
    codec: JsonCodec,
}

impl Config {
    /// Constructs a config builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the configured region.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Returns the explicitly configured endpoint URL, if any.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Resolves the URI requests are sent to.
    ///
    /// An explicit endpoint URL wins. Otherwise the endpoint is derived from the region, using
    /// the `amazonaws.com.cn` partition for China regions.
    pub fn endpoint(&self) -> Result<http::Uri, BuildError> {
        let url = match (&self.endpoint_url, &self.region) {
            (Some(url), _) => url.clone(),
            (None, Some(region)) => {
                let suffix = if region.as_ref().starts_with("cn-") {
                    "amazonaws.com.cn"
                } else {
                    "amazonaws.com"
                };
                format!("https://storagegateway.{}.{}", region, suffix)
            }
            (None, None) => return Err(BuildError::missing_region()),
        };
        url.parse::<http::Uri>()
            .map_err(|err| BuildError::invalid_endpoint(url, err))
    }

    pub(crate) fn codec(&self) -> &JsonCodec {
        &self.codec
    }
}

/// Builder for [`Config`].
#[derive(Default, Debug)]
pub struct Builder {
    region: Option<Region>,
    endpoint_url: Option<String>,
}

impl Builder {
    /// Sets the region requests are sent to.
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.region = region.into();
        self
    }

    /// Overrides the endpoint derived from the region.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Builds the config.
    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_url: self.endpoint_url,
            // awsJson1.1 exchanges timestamps as epoch seconds
            codec: JsonCodec::new(JsonCodecSettings {
                default_timestamp_format: Format::EpochSeconds,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Config, Region};

    #[test]
    fn endpoint_from_region() {
        let config = Config::builder()
            .region(Region::from_static("us-east-1"))
            .build();
        assert_eq!(
            config.endpoint().unwrap(),
            "https://storagegateway.us-east-1.amazonaws.com/"
        );
    }

    #[test]
    fn china_regions_use_their_partition() {
        let config = Config::builder().region(Region::new("cn-north-1")).build();
        assert_eq!(
            config.endpoint().unwrap(),
            "https://storagegateway.cn-north-1.amazonaws.com.cn/"
        );
    }

    #[test]
    fn explicit_endpoint_wins() {
        let config = Config::builder()
            .region(Region::new("us-west-2"))
            .endpoint_url("http://localhost:8080")
            .build();
        assert_eq!(config.endpoint().unwrap(), "http://localhost:8080/");
        assert_eq!(config.endpoint_url(), Some("http://localhost:8080"));
    }

    #[test]
    fn missing_region() {
        let err = Config::builder().build().endpoint().unwrap_err();
        assert_eq!(err.to_string(), "no region or endpoint URL was configured");
    }

    #[test]
    fn invalid_endpoint() {
        let config = Config::builder().endpoint_url("not a uri").build();
        let err = config.endpoint().unwrap_err();
        assert!(err.to_string().contains("not a uri"), "{}", err);
    }
}
