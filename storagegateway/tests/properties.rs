/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_storagegateway::input::CreateNfsFileShareInput;
use aws_sdk_storagegateway::model::{NfsFileShareDefaults, ObjectAcl, Tag};
use aws_sdk_storagegateway::output::DescribeCacheOutput;
use aws_smithy_json::codec::JsonCodec;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tag() -> impl Strategy<Value = Tag> {
    (option::of(".{0,12}"), option::of(".{0,12}"))
        .prop_map(|(key, value)| Tag::builder().set_key(key).set_value(value).build())
}

fn object_acl() -> impl Strategy<Value = ObjectAcl> {
    proptest::sample::select(ObjectAcl::values()).prop_map(ObjectAcl::from)
}

fn defaults() -> impl Strategy<Value = NfsFileShareDefaults> {
    (
        option::of("[0-7]{4}"),
        option::of("[0-7]{4}"),
        option::of(any::<i64>()),
        option::of(any::<i64>()),
    )
        .prop_map(|(file_mode, directory_mode, group_id, owner_id)| {
            NfsFileShareDefaults::builder()
                .set_file_mode(file_mode)
                .set_directory_mode(directory_mode)
                .set_group_id(group_id)
                .set_owner_id(owner_id)
                .build()
        })
}

prop_compose! {
    fn create_nfs_file_share()(
        client_token in option::of("[a-z0-9-]{5,20}"),
        defaults in option::of(defaults()),
        gateway_arn in option::of(".*"),
        kms_encrypted in option::of(any::<bool>()),
        object_acl in option::of(object_acl()),
        client_list in option::of(vec(".{0,16}", 0..4)),
        read_only in option::of(any::<bool>()),
        tags in option::of(vec(tag(), 0..4)),
    ) -> CreateNfsFileShareInput {
        CreateNfsFileShareInput::builder()
            .set_client_token(client_token)
            .set_nfs_file_share_defaults(defaults)
            .set_gateway_arn(gateway_arn)
            .set_kms_encrypted(kms_encrypted)
            .set_object_acl(object_acl)
            .set_client_list(client_list)
            .set_read_only(read_only)
            .set_tags(tags)
            .build()
    }
}

fn percentage() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0f64..=100.0,
        Just(-0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn any_double() -> impl Strategy<Value = f64> {
    proptest::num::f64::ANY
}

prop_compose! {
    fn describe_cache()(
        gateway_arn in option::of(".*"),
        disk_ids in option::of(vec(".{1,8}", 0..3)),
        allocated in option::of(any::<i64>()),
        used in option::of(percentage()),
        dirty in option::of(percentage()),
        hit in option::of(any_double()),
        miss in option::of(any_double()),
    ) -> DescribeCacheOutput {
        DescribeCacheOutput::builder()
            .set_gateway_arn(gateway_arn)
            .set_disk_ids(disk_ids)
            .set_cache_allocated_in_bytes(allocated)
            .set_cache_used_percentage(used)
            .set_cache_dirty_percentage(dirty)
            .set_cache_hit_percentage(hit)
            .set_cache_miss_percentage(miss)
            .build()
    }
}

proptest! {
    #[test]
    fn copies_are_equal_and_hash_alike(input in create_nfs_file_share()) {
        let copy = input.to_builder().build();
        prop_assert_eq!(&copy, &input);
        prop_assert_eq!(copy.hash_code(), input.hash_code());
        prop_assert_eq!(std_hash(&copy), std_hash(&input));
        prop_assert_eq!(copy.to_string(), input.to_string());
    }

    #[test]
    fn getters_reflect_the_builder(tags in option::of(vec(tag(), 0..4))) {
        let input = CreateNfsFileShareInput::builder().set_tags(tags.clone()).build();
        prop_assert_eq!(input.tags(), tags.as_deref());
    }

    #[test]
    fn rendering_is_bracketed(input in create_nfs_file_share()) {
        let rendered = input.to_string();
        prop_assert_eq!(rendered.chars().next(), Some('{'));
        prop_assert_eq!(rendered.chars().last(), Some('}'));
        prop_assert_eq!(rendered == "{}", input == CreateNfsFileShareInput::builder().build());
    }

    #[test]
    fn json_round_trip(input in create_nfs_file_share()) {
        let codec = JsonCodec::default();
        let bytes = codec.serialize(&input).unwrap();
        let parsed: CreateNfsFileShareInput = codec.deserialize(&bytes).unwrap();
        prop_assert_eq!(parsed, input);
    }

    #[test]
    fn doubles_keep_equality_and_hash_in_step(output in describe_cache()) {
        let copy = output.to_builder().build();
        prop_assert_eq!(&output, &output);
        prop_assert_eq!(&copy, &output);
        prop_assert_eq!(copy.hash_code(), output.hash_code());
        prop_assert_eq!(std_hash(&copy), std_hash(&output));
    }

    #[test]
    fn json_round_trip_with_doubles(output in describe_cache()) {
        let codec = JsonCodec::default();
        let bytes = codec.serialize(&output).unwrap();
        let parsed: DescribeCacheOutput = codec.deserialize(&bytes).unwrap();
        prop_assert_eq!(parsed.hash_code(), output.hash_code());
        prop_assert_eq!(parsed, output);
    }
}
