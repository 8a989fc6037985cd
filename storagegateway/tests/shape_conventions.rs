/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_storagegateway::error::InternalServerError;
use aws_sdk_storagegateway::input::{
    ActivateGatewayInput, AddTagsToResourceInput, CreateNfsFileShareInput, JoinDomainInput,
};
use aws_sdk_storagegateway::model::{
    ErrorCode, NfsFileShareDefaults, ObjectAcl, StorageGatewayError, Tag, Tape,
};
use aws_sdk_storagegateway::output::{DescribeCacheOutput, DescribeTapesOutput, JoinDomainOutput};
use aws_sdk_storagegateway::primitives::DateTime;
use std::collections::HashSet;

const GATEWAY_ARN: &str = "arn:aws:storagegateway:us-east-2:111122223333:gateway/sgw-12A3456B";
const ROLE: &str = "arn:aws:iam::111122223333:role/StorageGatewayAccess";
const BUCKET: &str = "arn:aws:s3:::my-bucket";

fn tag(key: &str, value: &str) -> Tag {
    Tag::builder().key(key).value(value).build()
}

#[test]
fn activate_gateway_renders_set_members_in_declaration_order() {
    let input = ActivateGatewayInput::builder()
        .gateway_region("us-east-1")
        .gateway_name("MyGateway")
        .activation_key("12345-67890")
        .gateway_timezone("GMT-5:00")
        .build();
    assert_eq!(
        input.to_string(),
        "{ActivationKey: 12345-67890,GatewayName: MyGateway,GatewayTimezone: GMT-5:00,GatewayRegion: us-east-1}"
    );
    assert_eq!(input.gateway_type(), None);
    assert_eq!(input.tags(), None);
}

#[test]
fn empty_shapes_render_as_empty_braces() {
    assert_eq!(DescribeCacheOutput::builder().build().to_string(), "{}");
    assert_eq!(
        ActivateGatewayInput::builder().build().to_string(),
        "{}"
    );
}

#[test]
fn nested_shapes_render_recursively() {
    let input = AddTagsToResourceInput::builder()
        .resource_arn(GATEWAY_ARN)
        .tags(tag("env", "prod"))
        .tags(tag("team", "storage"))
        .build();
    assert_eq!(
        input.to_string(),
        format!(
            "{{ResourceARN: {},Tags: [{{Key: env,Value: prod}}, {{Key: team,Value: storage}}]}}",
            GATEWAY_ARN
        )
    );
}

#[test]
fn doubles_render_with_a_fraction() {
    let output = DescribeCacheOutput::builder()
        .cache_used_percentage(12.5)
        .cache_hit_percentage(1.0)
        .build();
    assert_eq!(
        output.to_string(),
        "{CacheUsedPercentage: 12.5,CacheHitPercentage: 1.0}"
    );
}

#[test]
fn not_a_number_equals_itself() {
    let output = DescribeCacheOutput::builder()
        .cache_used_percentage(f64::NAN)
        .cache_hit_percentage(-0.0)
        .build();
    let copy = output.to_builder().build();
    assert_eq!(output, output);
    assert_eq!(copy, output);
    assert_eq!(copy.hash_code(), output.hash_code());
    assert_eq!(output, output.to_builder().cache_hit_percentage(0.0).build());
    assert_ne!(output, output.to_builder().cache_used_percentage(50.0).build());

    let mut set = HashSet::new();
    set.insert(output);
    set.insert(copy);
    assert_eq!(set.len(), 1);
}

#[test]
fn nested_doubles_compare_through_their_containers() {
    let tapes = DescribeTapesOutput::builder()
        .tapes(
            Tape::builder()
                .tape_barcode("TEST0001")
                .progress(f64::NAN)
                .build(),
        )
        .build();
    assert_eq!(tapes.to_builder().build(), tapes);
}

fn chained() -> CreateNfsFileShareInput {
    CreateNfsFileShareInput::builder()
        .client_token("xyz")
        .gateway_arn(GATEWAY_ARN)
        .role(ROLE)
        .location_arn(BUCKET)
        .object_acl(ObjectAcl::Private)
        .client_list("10.0.0.0/16")
        .client_list("192.168.1.1")
        .nfs_file_share_defaults(
            NfsFileShareDefaults::builder()
                .file_mode("0666")
                .directory_mode("0777")
                .group_id(65534)
                .owner_id(65534)
                .build(),
        )
        .read_only(false)
        .build()
}

#[test]
fn setter_styles_build_equal_shapes() {
    let with_setters = CreateNfsFileShareInput::builder()
        .set_client_token(Some("xyz".to_string()))
        .set_gateway_arn(Some(GATEWAY_ARN.to_string()))
        .set_role(Some(ROLE.to_string()))
        .set_location_arn(Some(BUCKET.to_string()))
        .set_object_acl(Some(ObjectAcl::from("private")))
        .set_client_list(Some(vec![
            "10.0.0.0/16".to_string(),
            "192.168.1.1".to_string(),
        ]))
        .set_nfs_file_share_defaults(Some(
            NfsFileShareDefaults::builder()
                .set_file_mode(Some("0666".into()))
                .set_directory_mode(Some("0777".into()))
                .set_group_id(Some(65534))
                .set_owner_id(Some(65534))
                .build(),
        ))
        .set_read_only(Some(false))
        .build();
    let chained = chained();
    assert_eq!(with_setters, chained);
    assert_eq!(with_setters.hash_code(), chained.hash_code());
    assert_eq!(with_setters.to_string(), chained.to_string());

    let mut set = HashSet::new();
    set.insert(with_setters);
    set.insert(chained);
    assert_eq!(set.len(), 1);
}

#[test]
fn a_single_differing_member_breaks_equality() {
    let base = chained();
    let other = base.to_builder().read_only(true).build();
    assert_ne!(base, other);
    assert_ne!(base.hash_code(), other.hash_code());
}

#[test]
fn enum_values_and_their_strings_are_interchangeable() {
    let from_enum = CreateNfsFileShareInput::builder()
        .object_acl(ObjectAcl::Private)
        .build();
    let from_str = CreateNfsFileShareInput::builder()
        .object_acl("private")
        .build();
    assert_eq!(from_enum, from_str);
    assert_eq!(from_enum.hash_code(), from_str.hash_code());
    assert_eq!(from_enum.object_acl(), Some(&ObjectAcl::Private));
    assert_eq!(from_str.object_acl().map(ObjectAcl::as_str), Some("private"));
    assert_eq!(from_enum.to_string(), "{ObjectACL: private}");
}

#[test]
fn unknown_enum_strings_are_kept() {
    let input = CreateNfsFileShareInput::builder()
        .object_acl("log-delivery-write")
        .build();
    let acl = input.object_acl().unwrap();
    assert!(matches!(acl, ObjectAcl::Unknown(_)));
    assert_eq!(acl.as_str(), "log-delivery-write");
    assert_eq!(input.to_string(), "{ObjectACL: log-delivery-write}");
}

#[test]
fn enum_parsing_is_exact() {
    use aws_smithy_schema::EnumShape;

    assert_eq!(ObjectAcl::try_parse("public-read").unwrap(), ObjectAcl::PublicRead);
    let err = ObjectAcl::try_parse("PUBLIC-READ").unwrap_err();
    assert!(err.to_string().contains("PUBLIC-READ"), "{}", err);
    assert_eq!(
        ErrorCode::try_parse("LunAlreadyAllocated ").unwrap(),
        ErrorCode::LunAlreadyAllocated
    );
    assert_eq!(ErrorCode::LunAlreadyAllocated.as_str(), "LunAlreadyAllocated ");
    assert!(ObjectAcl::values().contains(&"bucket-owner-full-control"));
    assert_eq!(ObjectAcl::values().len(), 7);
}

#[test]
fn absent_and_empty_lists_are_different() {
    let absent = ActivateGatewayInput::builder().set_tags(None).build();
    let empty = ActivateGatewayInput::builder().set_tags(Some(vec![])).build();
    assert_ne!(absent, empty);
    assert_eq!(absent.tags(), None);
    assert_eq!(empty.tags(), Some(&[][..]));
    assert_eq!(absent.to_string(), "{}");
    assert_eq!(empty.to_string(), "{Tags: []}");
}

#[test]
fn list_setters_append_and_replace() {
    let input = ActivateGatewayInput::builder()
        .tags(tag("a", "1"))
        .tags(tag("b", "2"))
        .build();
    assert_eq!(input.tags().map(<[Tag]>::len), Some(2));

    let replaced = input
        .to_builder()
        .set_tags(Some(vec![tag("c", "3")]))
        .build();
    assert_eq!(replaced.tags(), Some(&[tag("c", "3")][..]));
    // the source shape is untouched
    assert_eq!(input.tags().map(<[Tag]>::len), Some(2));
}

#[test]
fn shapes_own_their_collections() {
    let mut tags = vec![tag("env", "prod")];
    let input = ActivateGatewayInput::builder()
        .set_tags(Some(tags.clone()))
        .build();
    tags.push(tag("team", "storage"));
    tags[0] = tag("env", "dev");
    assert_eq!(input.tags(), Some(&[tag("env", "prod")][..]));

    let mut copy = input.clone();
    copy.tags = Some(Vec::new());
    assert_eq!(input.tags().map(<[Tag]>::len), Some(1));
}

#[test]
fn to_builder_copies_every_member() {
    let original = chained();
    let copy = original.to_builder().build();
    assert_eq!(original, copy);
    assert_eq!(copy.client_list(), Some(&["10.0.0.0/16".to_string(), "192.168.1.1".to_string()][..]));
    assert_eq!(
        copy.nfs_file_share_defaults().and_then(NfsFileShareDefaults::owner_id),
        Some(65534)
    );
}

#[test]
fn sensitive_members_are_redacted() {
    let input = JoinDomainInput::builder()
        .gateway_arn(GATEWAY_ARN)
        .domain_name("corp.example.com")
        .user_name("Admin")
        .password("hunter2!")
        .build();
    let rendered = input.to_string();
    assert!(rendered.contains("Password: *** Sensitive Data Redacted ***"), "{}", rendered);
    assert!(!rendered.contains("hunter2!"));
    let debug = format!("{:?}", input);
    assert!(!debug.contains("hunter2!"), "{}", debug);
    assert_eq!(input.password(), Some("hunter2!"));
}

#[test]
fn enum_members_of_outputs() {
    let output = JoinDomainOutput::builder()
        .gateway_arn(GATEWAY_ARN)
        .active_directory_status("JOINED")
        .build();
    assert_eq!(
        output.active_directory_status(),
        Some(&aws_sdk_storagegateway::model::ActiveDirectoryStatus::Joined)
    );
    assert_eq!(
        output.to_string(),
        format!("{{GatewayARN: {},ActiveDirectoryStatus: JOINED}}", GATEWAY_ARN)
    );
}

#[test]
fn timestamps_render_as_date_times() {
    let tape = Tape::builder()
        .tape_barcode("TEST0001")
        .tape_created_date(DateTime::from_secs(1576540098))
        .build();
    assert_eq!(
        tape.to_string(),
        "{TapeBarcode: TEST0001,TapeCreatedDate: 2019-12-16T23:48:18Z}"
    );
}

#[test]
fn exceptions_carry_message_and_detail() {
    let err = InternalServerError::builder()
        .message("boom")
        .error(
            StorageGatewayError::builder()
                .error_code(ErrorCode::InternalError)
                .error_details("reason", "disk")
                .build(),
        )
        .build();
    assert_eq!(err.message(), Some("boom"));
    assert_eq!(err.to_string(), "InternalServerError: boom");
    let detail = err.error().unwrap();
    assert_eq!(detail.error_code(), Some(&ErrorCode::InternalError));
    assert_eq!(
        detail.to_string(),
        "{errorCode: InternalError,errorDetails: {reason=disk}}"
    );

    let bare = InternalServerError::builder().build();
    assert_eq!(bare.message(), None);
    assert_eq!(bare.to_string(), "InternalServerError");
}
