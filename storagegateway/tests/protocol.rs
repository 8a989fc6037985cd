/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_storagegateway::error::{DescribeTapesErrorKind, JoinDomainErrorKind};
use aws_sdk_storagegateway::input::{CreateNfsFileShareInput, JoinDomainInput};
use aws_sdk_storagegateway::model::{ActiveDirectoryStatus, ErrorCode, NfsFileShareDefaults, ObjectAcl};
use aws_sdk_storagegateway::operation::{
    CreateNfsFileShare, DescribeCache, DescribeNfsFileShares, DescribeTapes, JoinDomain,
};
use aws_sdk_storagegateway::{Config, Error, Region, SdkError};
use aws_smithy_json::error::{JsonDeserializeError, JsonDeserializeErrorKind};
use serde_json::json;

const GATEWAY_ARN: &str = "arn:aws:storagegateway:us-east-2:111122223333:gateway/sgw-12A3456B";

fn config() -> Config {
    Config::builder().region(Region::new("us-east-2")).build()
}

fn response(status: u16, headers: &[(&str, &str)], body: &str) -> http::Response<Vec<u8>> {
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(body.as_bytes().to_vec()).unwrap()
}

fn deserialize_error_kind<E>(err: &SdkError<E>) -> JsonDeserializeErrorKind {
    match err {
        SdkError::ResponseError { err, .. } => err
            .downcast_ref::<JsonDeserializeError>()
            .expect("response errors carry the deserialization failure")
            .kind(),
        _ => panic!("expected a response error"),
    }
}

#[test]
fn create_nfs_file_share_request() {
    let input = CreateNfsFileShareInput::builder()
        .client_token("token-1")
        .gateway_arn(GATEWAY_ARN)
        .role("arn:aws:iam::111122223333:role/StorageGatewayAccess")
        .location_arn("arn:aws:s3:::my-bucket")
        .object_acl(ObjectAcl::BucketOwnerFullControl)
        .client_list("10.0.0.0/16")
        .nfs_file_share_defaults(
            NfsFileShareDefaults::builder()
                .file_mode("0666")
                .owner_id(65534)
                .build(),
        )
        .kms_encrypted(false)
        .build();
    let request = CreateNfsFileShare::new()
        .build_request(&input, &config())
        .unwrap();
    assert_eq!(request.uri(), "https://storagegateway.us-east-2.amazonaws.com/");
    assert_eq!(
        request.headers()["x-amz-target"],
        "StorageGateway_20130630.CreateNFSFileShare"
    );
    let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
    assert_eq!(
        body,
        json!({
            "ClientToken": "token-1",
            "NFSFileShareDefaults": {"FileMode": "0666", "OwnerId": 65534},
            "GatewayARN": GATEWAY_ARN,
            "KMSEncrypted": false,
            "Role": "arn:aws:iam::111122223333:role/StorageGatewayAccess",
            "LocationARN": "arn:aws:s3:::my-bucket",
            "ObjectACL": "bucket-owner-full-control",
            "ClientList": ["10.0.0.0/16"]
        })
    );
}

#[test]
fn unknown_enum_values_are_sent_verbatim() {
    let input = CreateNfsFileShareInput::builder()
        .object_acl("log-delivery-write")
        .build();
    let request = CreateNfsFileShare::new()
        .build_request(&input, &config())
        .unwrap();
    assert_eq!(
        request.body().as_slice(),
        br#"{"ObjectACL":"log-delivery-write"}"#
    );
}

#[test]
fn invalid_inputs_are_still_sent() {
    let input = JoinDomainInput::builder()
        .timeout_in_seconds(-1)
        .build();
    assert!(input.validate().is_err());
    let request = JoinDomain::new().build_request(&input, &config()).unwrap();
    assert_eq!(request.body().as_slice(), br#"{"TimeoutInSeconds":-1}"#);
}

#[test]
fn sensitive_members_are_sent() {
    let input = JoinDomainInput::builder().password("hunter2!").build();
    let request = JoinDomain::new().build_request(&input, &config()).unwrap();
    assert_eq!(request.body().as_slice(), br#"{"Password":"hunter2!"}"#);
}

#[test]
fn describe_tapes_response() {
    let body = json!({
        "Tapes": [
            {
                "TapeARN": "arn:aws:storagegateway:us-east-2:999999999999:tape/TEST05A2A0",
                "TapeBarcode": "TEST05A2A0",
                "TapeCreatedDate": 1576540098.52,
                "TapeSizeInBytes": 107374182400u64,
                "TapeStatus": "AVAILABLE",
                "Progress": 42.5,
                "PoolId": null
            },
            {"TapeBarcode": "TEST0AA2AF"}
        ],
        "Marker": "1"
    });
    let output = DescribeTapes::new()
        .parse_response(response(200, &[], &body.to_string()))
        .unwrap();
    let tapes = output.tapes().unwrap();
    assert_eq!(tapes.len(), 2);
    assert_eq!(tapes[0].tape_size_in_bytes(), Some(107374182400));
    assert_eq!(tapes[0].progress(), Some(42.5));
    assert_eq!(tapes[0].pool_id(), None);
    assert_eq!(tapes[0].tape_created_date().map(|d| d.secs()), Some(1576540098));
    assert!(tapes[0]
        .to_string()
        .contains("TapeCreatedDate: 2019-12-16T23:48:18.52Z"));
    assert_eq!(tapes[1].to_string(), "{TapeBarcode: TEST0AA2AF}");
    assert_eq!(output.marker(), Some("1"));
}

#[test]
fn empty_success_body_is_an_empty_output() {
    let output = DescribeCache::new()
        .parse_response(response(200, &[], ""))
        .unwrap();
    assert_eq!(output, DescribeCache::new().parse_response(response(200, &[], "{}")).unwrap());
    assert_eq!(output.gateway_arn(), None);
}

#[test]
fn unknown_members_are_ignored() {
    let output = DescribeCache::new()
        .parse_response(response(
            200,
            &[],
            r#"{"GatewayARN": "arn", "CacheSizeInBytes": 10, "Nested": {"a": [1, 2]}}"#,
        ))
        .unwrap();
    assert_eq!(output.gateway_arn(), Some("arn"));
}

#[test]
fn not_a_number_in_a_response_equals_itself() {
    let output = DescribeCache::new()
        .parse_response(response(200, &[], r#"{"CacheUsedPercentage": "NaN"}"#))
        .unwrap();
    assert!(output.cache_used_percentage().unwrap().is_nan());
    assert_eq!(output, output.clone());
    assert_eq!(output, output.to_builder().build());
}

#[test]
fn join_domain_status() {
    let output = JoinDomain::new()
        .parse_response(response(
            200,
            &[],
            r#"{"GatewayARN": "arn", "ActiveDirectoryStatus": "NETWORK_ERROR"}"#,
        ))
        .unwrap();
    assert_eq!(
        output.active_directory_status(),
        Some(&ActiveDirectoryStatus::NetworkError)
    );
}

#[test]
fn unrecognized_enum_value_in_response() {
    let err = JoinDomain::new()
        .parse_response(response(
            200,
            &[],
            r#"{"ActiveDirectoryStatus": "SUSPENDED"}"#,
        ))
        .unwrap_err();
    assert_eq!(
        deserialize_error_kind(&err),
        JsonDeserializeErrorKind::UnrecognizedEnumValue
    );
    assert_eq!(err.raw_response().map(|r| r.status().as_u16()), Some(200));
}

#[test]
fn malformed_response_body() {
    let err = DescribeNfsFileShares::new()
        .parse_response(response(200, &[], r#"{"NFSFileShareInfoList": [{"#))
        .unwrap_err();
    assert_eq!(deserialize_error_kind(&err), JsonDeserializeErrorKind::Syntax);

    let err = DescribeNfsFileShares::new()
        .parse_response(response(200, &[], r#"{"NFSFileShareInfoList": "nope"}"#))
        .unwrap_err();
    assert_eq!(
        deserialize_error_kind(&err),
        JsonDeserializeErrorKind::UnexpectedType
    );
}

#[test]
fn modeled_error_response() {
    let err = DescribeTapes::new()
        .parse_response(response(
            400,
            &[
                ("x-amzn-requestid", "7d5b2e6c-example"),
                ("content-type", "application/x-amz-json-1.1"),
            ],
            r#"{
                "__type": "com.amazonaws.storagegateway#InvalidGatewayRequestException",
                "message": "The specified gateway was not found.",
                "error": {"errorCode": "GatewayNotFound", "errorDetails": {"gatewayArn": "arn"}}
            }"#,
        ))
        .unwrap_err();
    assert_eq!(err.raw_response().map(|r| r.status().as_u16()), Some(400));
    let err = err.into_service_error().unwrap();
    assert!(err.is_invalid_gateway_request_exception());
    assert!(!err.is_internal_server_error());
    assert_eq!(err.code(), Some("InvalidGatewayRequestException"));
    assert_eq!(err.message(), Some("The specified gateway was not found."));
    assert_eq!(err.request_id(), Some("7d5b2e6c-example"));
    assert_eq!(
        err.to_string(),
        "InvalidGatewayRequestException: The specified gateway was not found."
    );
    match err.kind {
        DescribeTapesErrorKind::InvalidGatewayRequestException(inner) => {
            let detail = inner.error().unwrap();
            assert_eq!(detail.error_code(), Some(&ErrorCode::GatewayNotFound));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn error_type_header_selects_the_exception() {
    let err = JoinDomain::new()
        .parse_response(response(
            503,
            &[("x-amzn-errortype", "ServiceUnavailableError:http://internal.amazon.com/")],
            r#"{"message": "try again"}"#,
        ))
        .unwrap_err();
    let err = err.into_service_error().unwrap();
    assert!(err.is_service_unavailable_error());
    assert!(matches!(err.kind, JoinDomainErrorKind::ServiceUnavailableError(_)));
}

#[test]
fn unmodeled_error_response() {
    let err = DescribeTapes::new()
        .parse_response(response(
            400,
            &[],
            r#"{"__type": "ThrottlingException", "message": "Rate exceeded"}"#,
        ))
        .unwrap_err()
        .into_service_error()
        .unwrap();
    assert_eq!(err.code(), Some("ThrottlingException"));
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert!(matches!(err.kind, DescribeTapesErrorKind::Unhandled(_)));
}

#[test]
fn error_response_without_json_body() {
    let err = DescribeTapes::new()
        .parse_response(response(502, &[], "<html>Bad Gateway</html>"))
        .unwrap_err()
        .into_service_error()
        .unwrap();
    assert_eq!(err.code(), None);
    assert!(matches!(err.kind, DescribeTapesErrorKind::Unhandled(_)));
}

#[test]
fn operation_errors_convert_into_the_service_error() {
    let err = DescribeTapes::new()
        .parse_response(response(
            500,
            &[("x-amzn-errortype", "InternalServerError")],
            r#"{"message": "boom"}"#,
        ))
        .unwrap_err();
    match Error::from(err) {
        Error::InternalServerError(inner) => assert_eq!(inner.message(), Some("boom")),
        other => panic!("unexpected: {:?}", other),
    }

    let err = DescribeTapes::new()
        .parse_response(response(200, &[], "[]"))
        .unwrap_err();
    assert!(matches!(Error::from(err), Error::Unhandled(_)));
}
