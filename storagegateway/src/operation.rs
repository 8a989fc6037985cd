/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation handles.
//!
//! Each handle turns an input into an AWS JSON 1.1 request and a received response into the
//! operation's output or error. Sending the request is left to the caller.
//!
//! ```
//! use aws_sdk_storagegateway::input::DescribeCacheInput;
//! use aws_sdk_storagegateway::operation::DescribeCache;
//! use aws_sdk_storagegateway::{Config, Region};
//!
//! let config = Config::builder().region(Region::new("us-east-1")).build();
//! let input = DescribeCacheInput::builder()
//!     .gateway_arn("arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B")
//!     .build();
//! let request = DescribeCache::new().build_request(&input, &config).unwrap();
//! assert_eq!(
//!     request.headers()["x-amz-target"],
//!     "StorageGateway_20130630.DescribeCache"
//! );
//!
//! let response = http::Response::builder()
//!     .status(200)
//!     .body(br#"{"CacheUsedPercentage": 12.5}"#.to_vec())
//!     .unwrap();
//! let output = DescribeCache::new().parse_response(response).unwrap();
//! assert_eq!(output.cache_used_percentage(), Some(12.5));
//! ```

use crate::config::Config;
use crate::error::{BuildError, FromModeledError};
use crate::json_errors;
use crate::result::SdkError;
use aws_smithy_json::codec::JsonCodec;
use aws_smithy_schema::serde::{DeserializableStruct, SerializableStruct};
use http::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};

const CONTENT_TYPE_AWS_JSON_1_1: &str = "application/x-amz-json-1.1";
const TARGET_PREFIX: &str = "StorageGateway_20130630";

fn build_request<T: SerializableStruct>(
    operation: &'static str,
    input: &T,
    config: &Config,
) -> Result<http::Request<Vec<u8>>, BuildError> {
    let endpoint = config.endpoint()?;
    let body = config
        .codec()
        .serialize(input)
        .map_err(BuildError::serialization)?;
    tracing::trace!(
        operation,
        endpoint = %endpoint,
        content_length = body.len(),
        "built request"
    );
    http::Request::builder()
        .method(http::Method::POST)
        .uri(endpoint)
        .header(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_AWS_JSON_1_1))
        .header(CONTENT_LENGTH, body.len())
        .header("x-amz-target", format!("{}.{}", TARGET_PREFIX, operation))
        .body(body)
        .map_err(BuildError::invalid_request)
}

fn parse_response<O, E>(
    operation: &'static str,
    response: http::Response<Vec<u8>>,
) -> Result<O, SdkError<E>>
where
    O: DeserializableStruct,
    E: FromModeledError,
{
    let codec = JsonCodec::default();
    if response.status().is_success() {
        tracing::trace!(operation, status = response.status().as_u16(), "parsing response");
        return match codec.deserialize(response.body()) {
            Ok(output) => Ok(output),
            Err(err) => Err(SdkError::ResponseError {
                raw: response,
                err: err.into(),
            }),
        };
    }
    match json_errors::parse_error(&response) {
        Ok(modeled) => Err(SdkError::ServiceError {
            err: E::from_modeled(modeled),
            raw: response,
        }),
        Err(err) => Err(SdkError::ResponseError {
            raw: response,
            err: err.into(),
        }),
    }
}

macro_rules! operation {
    ($(#[$docs:meta])* $name:ident, $wire:literal, $input:ident, $output:ident, $error:ident) => {
        $(#[$docs])*
        #[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
        pub struct $name {
            _private: (),
        }
        impl $name {
            /// Name of the operation on the wire.
            pub const NAME: &'static str = $wire;

            #[doc = concat!("Creates a new `", stringify!($name), "` operation.")]
            pub fn new() -> Self {
                Self { _private: () }
            }

            /// Serializes the input into a request addressed to the configured endpoint.
            pub fn build_request(
                &self,
                input: &crate::input::$input,
                config: &Config,
            ) -> Result<http::Request<Vec<u8>>, BuildError> {
                build_request(Self::NAME, input, config)
            }

            /// Parses a received response into the operation's output or error.
            pub fn parse_response(
                &self,
                response: http::Response<Vec<u8>>,
            ) -> Result<crate::output::$output, SdkError<crate::error::$error>> {
                parse_response(Self::NAME, response)
            }
        }
    };
}

operation!(
    /// Activates the gateway you previously deployed on your host.
    ActivateGateway,
    "ActivateGateway",
    ActivateGatewayInput,
    ActivateGatewayOutput,
    ActivateGatewayError
);
operation!(
    /// Adds one or more tags to the specified resource.
    AddTagsToResource,
    "AddTagsToResource",
    AddTagsToResourceInput,
    AddTagsToResourceOutput,
    AddTagsToResourceError
);
operation!(
    /// Creates a Network File System (NFS) file share on an existing file gateway.
    CreateNfsFileShare,
    "CreateNFSFileShare",
    CreateNfsFileShareInput,
    CreateNfsFileShareOutput,
    CreateNfsFileShareError
);
operation!(
    /// Creates a Server Message Block (SMB) file share on an existing file gateway.
    CreateSmbFileShare,
    "CreateSMBFileShare",
    CreateSmbFileShareInput,
    CreateSmbFileShareOutput,
    CreateSmbFileShareError
);
operation!(
    /// Creates a volume on a specified gateway, sized to its local disk.
    CreateStorediScsiVolume,
    "CreateStorediSCSIVolume",
    CreateStorediScsiVolumeInput,
    CreateStorediScsiVolumeOutput,
    CreateStorediScsiVolumeError
);
operation!(
    /// Returns information about the cache of a gateway.
    DescribeCache,
    "DescribeCache",
    DescribeCacheInput,
    DescribeCacheOutput,
    DescribeCacheError
);
operation!(
    /// Gets a description for one or more NFS file shares from a file gateway.
    DescribeNfsFileShares,
    "DescribeNFSFileShares",
    DescribeNfsFileSharesInput,
    DescribeNfsFileSharesOutput,
    DescribeNfsFileSharesError
);
operation!(
    /// Gets a description for one or more SMB file shares from a file gateway.
    DescribeSmbFileShares,
    "DescribeSMBFileShares",
    DescribeSmbFileSharesInput,
    DescribeSmbFileSharesOutput,
    DescribeSmbFileSharesError
);
operation!(
    /// Returns the description of the gateway volumes specified in the request.
    DescribeStorediScsiVolumes,
    "DescribeStorediSCSIVolumes",
    DescribeStorediScsiVolumesInput,
    DescribeStorediScsiVolumesOutput,
    DescribeStorediScsiVolumesError
);
operation!(
    /// Returns a description of the specified virtual tapes.
    DescribeTapes,
    "DescribeTapes",
    DescribeTapesInput,
    DescribeTapesOutput,
    DescribeTapesError
);
operation!(
    /// Adds a file gateway to an Active Directory domain.
    JoinDomain,
    "JoinDomain",
    JoinDomainInput,
    JoinDomainOutput,
    JoinDomainError
);
operation!(
    /// Updates a Network File System (NFS) file share.
    UpdateNfsFileShare,
    "UpdateNFSFileShare",
    UpdateNfsFileShareInput,
    UpdateNfsFileShareOutput,
    UpdateNfsFileShareError
);
operation!(
    /// Updates a Server Message Block (SMB) file share.
    UpdateSmbFileShare,
    "UpdateSMBFileShare",
    UpdateSmbFileShareInput,
    UpdateSmbFileShareOutput,
    UpdateSmbFileShareError
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::input::ActivateGatewayInput;
    use crate::Region;

    fn config() -> Config {
        Config::builder().region(Region::from_static("us-east-1")).build()
    }

    #[test]
    fn request_shape() {
        let input = ActivateGatewayInput::builder()
            .activation_key("12345-67890")
            .gateway_name("MyGateway")
            .build();
        let request = ActivateGateway::new().build_request(&input, &config()).unwrap();
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(
            request.uri(),
            "https://storagegateway.us-east-1.amazonaws.com/"
        );
        assert_eq!(request.headers()[CONTENT_TYPE], "application/x-amz-json-1.1");
        assert_eq!(
            request.headers()["x-amz-target"],
            "StorageGateway_20130630.ActivateGateway"
        );
        assert_eq!(
            request.body().as_slice(),
            br#"{"ActivationKey":"12345-67890","GatewayName":"MyGateway"}"#
        );
        assert_eq!(request.headers()[CONTENT_LENGTH], request.body().len().to_string().as_str());
    }

    #[test]
    fn empty_input_sends_empty_object() {
        let input = crate::input::DescribeCacheInput::builder().build();
        let request = DescribeCache::new().build_request(&input, &config()).unwrap();
        assert_eq!(request.body().as_slice(), b"{}");
    }

    #[test]
    fn missing_region_is_a_build_error() {
        let input = crate::input::DescribeCacheInput::builder().build();
        let err = DescribeCache::new()
            .build_request(&input, &Config::builder().build())
            .unwrap_err();
        let sdk_err: SdkError<crate::error::DescribeCacheError> = err.into();
        assert!(matches!(sdk_err, SdkError::ConstructionFailure(_)));
    }

    #[test]
    fn operation_names() {
        assert_eq!(CreateNfsFileShare::NAME, "CreateNFSFileShare");
        assert_eq!(DescribeStorediScsiVolumes::NAME, "DescribeStorediSCSIVolumes");
        assert_eq!(UpdateSmbFileShare::NAME, "UpdateSMBFileShare");
    }
}
