/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_storagegateway::input::{
    ActivateGatewayInput, CreateNfsFileShareInput, DescribeTapesInput, JoinDomainInput,
};
use aws_sdk_storagegateway::model::{NfsFileShareDefaults, Tag};
use aws_smithy_schema::validate::ViolationKind;
use aws_smithy_schema::Bounds;

const GATEWAY_ARN: &str = "arn:aws:storagegateway:us-east-2:111122223333:gateway/sgw-12A3456B";

fn violations(err: &aws_smithy_schema::validate::ValidationError) -> Vec<(&str, &ViolationKind)> {
    err.violations()
        .iter()
        .map(|violation| (violation.path(), violation.kind()))
        .collect()
}

fn activate() -> aws_sdk_storagegateway::input::activate_gateway_input::Builder {
    ActivateGatewayInput::builder()
        .activation_key("12345-67890")
        .gateway_name("MyGateway")
        .gateway_timezone("GMT-5:00")
        .gateway_region("us-east-1")
}

#[test]
fn complete_input_is_valid() {
    let input = activate().tags(Tag::builder().key("env").value("prod").build()).build();
    assert!(input.validate().is_ok());
}

#[test]
fn missing_required_members_in_declaration_order() {
    let err = ActivateGatewayInput::builder().build().validate().unwrap_err();
    assert_eq!(
        violations(&err),
        vec![
            ("ActivationKey", &ViolationKind::MissingRequired),
            ("GatewayName", &ViolationKind::MissingRequired),
            ("GatewayTimezone", &ViolationKind::MissingRequired),
            ("GatewayRegion", &ViolationKind::MissingRequired),
        ]
    );
    assert!(err
        .to_string()
        .starts_with("4 constraint violation(s): ActivationKey: member is required but was not set"));
}

#[test]
fn nested_violations_carry_their_path() {
    let input = activate()
        .gateway_name("x")
        .tags(Tag::builder().key("env").value("prod").build())
        .tags(Tag::builder().key("").value("v").build())
        .tags(Tag::builder().value("orphan").build())
        .build();
    let err = input.validate().unwrap_err();
    assert_eq!(
        violations(&err),
        vec![
            (
                "GatewayName",
                &ViolationKind::Length {
                    length: 1,
                    bounds: Bounds::new(Some(2), Some(255))
                }
            ),
            (
                "Tags[1].Key",
                &ViolationKind::Length {
                    length: 0,
                    bounds: Bounds::new(Some(1), Some(128))
                }
            ),
            ("Tags[2].Key", &ViolationKind::MissingRequired),
        ]
    );
}

#[test]
fn ranges_and_patterns() {
    let input = JoinDomainInput::builder()
        .gateway_arn(GATEWAY_ARN)
        .domain_name("Corp.Example.COM")
        .domain_controllers("dc1.corp.example.com")
        .timeout_in_seconds(4000)
        .user_name("Admin")
        .password("hunter2!")
        .build();
    let err = input.validate().unwrap_err();
    let found = violations(&err);
    assert_eq!(found.len(), 2, "{}", err);
    assert_eq!(found[0].0, "DomainName");
    assert!(matches!(found[0].1, ViolationKind::Pattern { .. }));
    assert_eq!(
        found[1],
        (
            "TimeoutInSeconds",
            &ViolationKind::Range {
                value: 4000.0,
                bounds: Bounds::new(Some(0), Some(3600))
            }
        )
    );
    assert!(err
        .to_string()
        .contains("TimeoutInSeconds: value 4000 is outside of 0..=3600"));
}

#[test]
fn violations_never_echo_sensitive_values() {
    let input = JoinDomainInput::builder()
        .gateway_arn(GATEWAY_ARN)
        .domain_name("corp.example.com")
        .user_name("Admin")
        .password("tab\tseparated")
        .build();
    let err = input.validate().unwrap_err();
    assert_eq!(err.violations().len(), 1);
    assert_eq!(err.violations()[0].path(), "Password");
    assert!(!err.to_string().contains("separated"));
}

#[test]
fn lower_bounds_only() {
    let err = DescribeTapesInput::builder()
        .gateway_arn(GATEWAY_ARN)
        .limit(0)
        .build()
        .validate()
        .unwrap_err();
    assert_eq!(err.violations()[0].to_string(), "Limit: value 0 is outside of >= 1");
}

#[test]
fn unknown_enum_values_and_list_elements() {
    let input = CreateNfsFileShareInput::builder()
        .client_token("xyz")
        .gateway_arn(GATEWAY_ARN)
        .role("arn:aws:iam::111122223333:role/StorageGatewayAccess")
        .location_arn("arn:aws:s3:::my-bucket")
        .object_acl("log-delivery-write")
        .client_list("10.0.0.0/16")
        .client_list("not-an-address")
        .nfs_file_share_defaults(NfsFileShareDefaults::builder().file_mode("07777").build())
        .build();
    let err = input.validate().unwrap_err();
    let paths: Vec<_> = err.violations().iter().map(|v| v.path()).collect();
    assert_eq!(
        paths,
        vec![
            "ClientToken",
            "NFSFileShareDefaults.FileMode",
            "NFSFileShareDefaults.FileMode",
            "ObjectACL",
            "ClientList[1]",
        ]
    );
    assert_eq!(
        err.violations()[3].kind(),
        &ViolationKind::EnumValue {
            value: "log-delivery-write".into()
        }
    );
}
