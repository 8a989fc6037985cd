/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schema-driven (de)serialization for every shape.
//!
//! Serialization walks the members in declaration order and skips unset ones, so the same
//! impl drives the JSON body, `Display`, hash codes and validation. Deserialization threads
//! the shape's builder through the members present in the input.

use crate::schema;
use aws_smithy_schema::serde::{
    DeserializableStruct, SerializableStruct, ShapeDeserializer, ShapeSerializer,
};
use aws_smithy_schema::Schema;
use std::collections::HashMap;

impl SerializableStruct for crate::model::Tag {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::TAG, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.key {
                ser.write_string(&schema::TAG_KEY, var)?;
            }
            if let Some(var) = &self.value {
                ser.write_string(&schema::TAG_VALUE, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::model::Tag {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::TAG,
            crate::model::Tag::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_key(Some(de.read_string(member)?)),
                    Some(1) => builder.set_value(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::model::NfsFileShareDefaults {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::NFS_FILE_SHARE_DEFAULTS, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_mode {
                ser.write_string(&schema::NFS_FILE_SHARE_DEFAULTS_FILE_MODE, var)?;
            }
            if let Some(var) = &self.directory_mode {
                ser.write_string(&schema::NFS_FILE_SHARE_DEFAULTS_DIRECTORY_MODE, var)?;
            }
            if let Some(var) = self.group_id {
                ser.write_long(&schema::NFS_FILE_SHARE_DEFAULTS_GROUP_ID, var)?;
            }
            if let Some(var) = self.owner_id {
                ser.write_long(&schema::NFS_FILE_SHARE_DEFAULTS_OWNER_ID, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::model::NfsFileShareDefaults {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::NFS_FILE_SHARE_DEFAULTS,
            crate::model::NfsFileShareDefaults::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_file_mode(Some(de.read_string(member)?)),
                    Some(1) => builder.set_directory_mode(Some(de.read_string(member)?)),
                    Some(2) => builder.set_group_id(Some(de.read_long(member)?)),
                    Some(3) => builder.set_owner_id(Some(de.read_long(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::model::NfsFileShareInfo {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::NFS_FILE_SHARE_INFO, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.nfs_file_share_defaults {
                var.serialize_member(&schema::NFS_FILE_SHARE_INFO_NFS_FILE_SHARE_DEFAULTS, ser)?;
            }
            if let Some(var) = &self.file_share_arn {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_FILE_SHARE_ARN, var)?;
            }
            if let Some(var) = &self.file_share_id {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_FILE_SHARE_ID, var)?;
            }
            if let Some(var) = &self.file_share_status {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_FILE_SHARE_STATUS, var)?;
            }
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_GATEWAY_ARN, var)?;
            }
            if let Some(var) = self.kms_encrypted {
                ser.write_boolean(&schema::NFS_FILE_SHARE_INFO_KMS_ENCRYPTED, var)?;
            }
            if let Some(var) = &self.kms_key {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_KMS_KEY, var)?;
            }
            if let Some(var) = &self.path {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_PATH, var)?;
            }
            if let Some(var) = &self.role {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_ROLE, var)?;
            }
            if let Some(var) = &self.location_arn {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_LOCATION_ARN, var)?;
            }
            if let Some(var) = &self.default_storage_class {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_DEFAULT_STORAGE_CLASS, var)?;
            }
            if let Some(var) = &self.object_acl {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_OBJECT_ACL, var.as_str())?;
            }
            if let Some(var) = &self.client_list {
                ser.write_list(&schema::NFS_FILE_SHARE_INFO_CLIENT_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_CLIENT_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.squash {
                ser.write_string(&schema::NFS_FILE_SHARE_INFO_SQUASH, var)?;
            }
            if let Some(var) = self.read_only {
                ser.write_boolean(&schema::NFS_FILE_SHARE_INFO_READ_ONLY, var)?;
            }
            if let Some(var) = self.guess_mime_type_enabled {
                ser.write_boolean(&schema::NFS_FILE_SHARE_INFO_GUESS_MIME_TYPE_ENABLED, var)?;
            }
            if let Some(var) = self.requester_pays {
                ser.write_boolean(&schema::NFS_FILE_SHARE_INFO_REQUESTER_PAYS, var)?;
            }
            if let Some(var) = &self.tags {
                ser.write_list(&schema::NFS_FILE_SHARE_INFO_TAGS, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::TAGS_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::model::NfsFileShareInfo {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::NFS_FILE_SHARE_INFO,
            crate::model::NfsFileShareInfo::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_nfs_file_share_defaults(Some(crate::model::NfsFileShareDefaults::deserialize(de)?)),
                    Some(1) => builder.set_file_share_arn(Some(de.read_string(member)?)),
                    Some(2) => builder.set_file_share_id(Some(de.read_string(member)?)),
                    Some(3) => builder.set_file_share_status(Some(de.read_string(member)?)),
                    Some(4) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    Some(5) => builder.set_kms_encrypted(Some(de.read_boolean(member)?)),
                    Some(6) => builder.set_kms_key(Some(de.read_string(member)?)),
                    Some(7) => builder.set_path(Some(de.read_string(member)?)),
                    Some(8) => builder.set_role(Some(de.read_string(member)?)),
                    Some(9) => builder.set_location_arn(Some(de.read_string(member)?)),
                    Some(10) => builder.set_default_storage_class(Some(de.read_string(member)?)),
                    Some(11) => builder.set_object_acl(Some(de.read_enum(member)?)),
                    Some(12) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_CLIENT_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_client_list(Some(list))
                    }
                    Some(13) => builder.set_squash(Some(de.read_string(member)?)),
                    Some(14) => builder.set_read_only(Some(de.read_boolean(member)?)),
                    Some(15) => builder.set_guess_mime_type_enabled(Some(de.read_boolean(member)?)),
                    Some(16) => builder.set_requester_pays(Some(de.read_boolean(member)?)),
                    Some(17) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::Tag::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_tags(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::model::SmbFileShareInfo {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::SMB_FILE_SHARE_INFO, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_share_arn {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_FILE_SHARE_ARN, var)?;
            }
            if let Some(var) = &self.file_share_id {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_FILE_SHARE_ID, var)?;
            }
            if let Some(var) = &self.file_share_status {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_FILE_SHARE_STATUS, var)?;
            }
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_GATEWAY_ARN, var)?;
            }
            if let Some(var) = self.kms_encrypted {
                ser.write_boolean(&schema::SMB_FILE_SHARE_INFO_KMS_ENCRYPTED, var)?;
            }
            if let Some(var) = &self.kms_key {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_KMS_KEY, var)?;
            }
            if let Some(var) = &self.path {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_PATH, var)?;
            }
            if let Some(var) = &self.role {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_ROLE, var)?;
            }
            if let Some(var) = &self.location_arn {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_LOCATION_ARN, var)?;
            }
            if let Some(var) = &self.default_storage_class {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_DEFAULT_STORAGE_CLASS, var)?;
            }
            if let Some(var) = &self.object_acl {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_OBJECT_ACL, var.as_str())?;
            }
            if let Some(var) = self.read_only {
                ser.write_boolean(&schema::SMB_FILE_SHARE_INFO_READ_ONLY, var)?;
            }
            if let Some(var) = self.guess_mime_type_enabled {
                ser.write_boolean(&schema::SMB_FILE_SHARE_INFO_GUESS_MIME_TYPE_ENABLED, var)?;
            }
            if let Some(var) = self.requester_pays {
                ser.write_boolean(&schema::SMB_FILE_SHARE_INFO_REQUESTER_PAYS, var)?;
            }
            if let Some(var) = self.smbacl_enabled {
                ser.write_boolean(&schema::SMB_FILE_SHARE_INFO_SMBACL_ENABLED, var)?;
            }
            if let Some(var) = &self.admin_user_list {
                ser.write_list(&schema::SMB_FILE_SHARE_INFO_ADMIN_USER_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_USER_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.valid_user_list {
                ser.write_list(&schema::SMB_FILE_SHARE_INFO_VALID_USER_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_USER_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.invalid_user_list {
                ser.write_list(&schema::SMB_FILE_SHARE_INFO_INVALID_USER_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_USER_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.audit_destination_arn {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_AUDIT_DESTINATION_ARN, var)?;
            }
            if let Some(var) = &self.authentication {
                ser.write_string(&schema::SMB_FILE_SHARE_INFO_AUTHENTICATION, var)?;
            }
            if let Some(var) = &self.tags {
                ser.write_list(&schema::SMB_FILE_SHARE_INFO_TAGS, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::TAGS_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::model::SmbFileShareInfo {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::SMB_FILE_SHARE_INFO,
            crate::model::SmbFileShareInfo::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_file_share_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_file_share_id(Some(de.read_string(member)?)),
                    Some(2) => builder.set_file_share_status(Some(de.read_string(member)?)),
                    Some(3) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    Some(4) => builder.set_kms_encrypted(Some(de.read_boolean(member)?)),
                    Some(5) => builder.set_kms_key(Some(de.read_string(member)?)),
                    Some(6) => builder.set_path(Some(de.read_string(member)?)),
                    Some(7) => builder.set_role(Some(de.read_string(member)?)),
                    Some(8) => builder.set_location_arn(Some(de.read_string(member)?)),
                    Some(9) => builder.set_default_storage_class(Some(de.read_string(member)?)),
                    Some(10) => builder.set_object_acl(Some(de.read_enum(member)?)),
                    Some(11) => builder.set_read_only(Some(de.read_boolean(member)?)),
                    Some(12) => builder.set_guess_mime_type_enabled(Some(de.read_boolean(member)?)),
                    Some(13) => builder.set_requester_pays(Some(de.read_boolean(member)?)),
                    Some(14) => builder.set_smbacl_enabled(Some(de.read_boolean(member)?)),
                    Some(15) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_USER_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_admin_user_list(Some(list))
                    }
                    Some(16) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_USER_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_valid_user_list(Some(list))
                    }
                    Some(17) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_USER_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_invalid_user_list(Some(list))
                    }
                    Some(18) => builder.set_audit_destination_arn(Some(de.read_string(member)?)),
                    Some(19) => builder.set_authentication(Some(de.read_string(member)?)),
                    Some(20) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::Tag::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_tags(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::model::VolumeiScsiAttributes {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::VOLUMEI_SCSI_ATTRIBUTES, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.target_arn {
                ser.write_string(&schema::VOLUMEI_SCSI_ATTRIBUTES_TARGET_ARN, var)?;
            }
            if let Some(var) = &self.network_interface_id {
                ser.write_string(&schema::VOLUMEI_SCSI_ATTRIBUTES_NETWORK_INTERFACE_ID, var)?;
            }
            if let Some(var) = self.network_interface_port {
                ser.write_integer(&schema::VOLUMEI_SCSI_ATTRIBUTES_NETWORK_INTERFACE_PORT, var)?;
            }
            if let Some(var) = self.lun_number {
                ser.write_integer(&schema::VOLUMEI_SCSI_ATTRIBUTES_LUN_NUMBER, var)?;
            }
            if let Some(var) = self.chap_enabled {
                ser.write_boolean(&schema::VOLUMEI_SCSI_ATTRIBUTES_CHAP_ENABLED, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::model::VolumeiScsiAttributes {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::VOLUMEI_SCSI_ATTRIBUTES,
            crate::model::VolumeiScsiAttributes::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_target_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_network_interface_id(Some(de.read_string(member)?)),
                    Some(2) => builder.set_network_interface_port(Some(de.read_integer(member)?)),
                    Some(3) => builder.set_lun_number(Some(de.read_integer(member)?)),
                    Some(4) => builder.set_chap_enabled(Some(de.read_boolean(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::model::StorediScsiVolume {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::STOREDI_SCSI_VOLUME, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.volume_arn {
                ser.write_string(&schema::STOREDI_SCSI_VOLUME_VOLUME_ARN, var)?;
            }
            if let Some(var) = &self.volume_id {
                ser.write_string(&schema::STOREDI_SCSI_VOLUME_VOLUME_ID, var)?;
            }
            if let Some(var) = &self.volume_type {
                ser.write_string(&schema::STOREDI_SCSI_VOLUME_VOLUME_TYPE, var)?;
            }
            if let Some(var) = &self.volume_status {
                ser.write_string(&schema::STOREDI_SCSI_VOLUME_VOLUME_STATUS, var)?;
            }
            if let Some(var) = &self.volume_attachment_status {
                ser.write_string(&schema::STOREDI_SCSI_VOLUME_VOLUME_ATTACHMENT_STATUS, var)?;
            }
            if let Some(var) = self.volume_size_in_bytes {
                ser.write_long(&schema::STOREDI_SCSI_VOLUME_VOLUME_SIZE_IN_BYTES, var)?;
            }
            if let Some(var) = self.volume_progress {
                ser.write_double(&schema::STOREDI_SCSI_VOLUME_VOLUME_PROGRESS, var)?;
            }
            if let Some(var) = &self.volume_disk_id {
                ser.write_string(&schema::STOREDI_SCSI_VOLUME_VOLUME_DISK_ID, var)?;
            }
            if let Some(var) = &self.source_snapshot_id {
                ser.write_string(&schema::STOREDI_SCSI_VOLUME_SOURCE_SNAPSHOT_ID, var)?;
            }
            if let Some(var) = self.preserved_existing_data {
                ser.write_boolean(&schema::STOREDI_SCSI_VOLUME_PRESERVED_EXISTING_DATA, var)?;
            }
            if let Some(var) = &self.volumei_scsi_attributes {
                var.serialize_member(&schema::STOREDI_SCSI_VOLUME_VOLUMEI_SCSI_ATTRIBUTES, ser)?;
            }
            if let Some(var) = &self.created_date {
                ser.write_timestamp(&schema::STOREDI_SCSI_VOLUME_CREATED_DATE, var)?;
            }
            if let Some(var) = self.volume_used_in_bytes {
                ser.write_long(&schema::STOREDI_SCSI_VOLUME_VOLUME_USED_IN_BYTES, var)?;
            }
            if let Some(var) = &self.kms_key {
                ser.write_string(&schema::STOREDI_SCSI_VOLUME_KMS_KEY, var)?;
            }
            if let Some(var) = &self.target_name {
                ser.write_string(&schema::STOREDI_SCSI_VOLUME_TARGET_NAME, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::model::StorediScsiVolume {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::STOREDI_SCSI_VOLUME,
            crate::model::StorediScsiVolume::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_volume_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_volume_id(Some(de.read_string(member)?)),
                    Some(2) => builder.set_volume_type(Some(de.read_string(member)?)),
                    Some(3) => builder.set_volume_status(Some(de.read_string(member)?)),
                    Some(4) => builder.set_volume_attachment_status(Some(de.read_string(member)?)),
                    Some(5) => builder.set_volume_size_in_bytes(Some(de.read_long(member)?)),
                    Some(6) => builder.set_volume_progress(Some(de.read_double(member)?)),
                    Some(7) => builder.set_volume_disk_id(Some(de.read_string(member)?)),
                    Some(8) => builder.set_source_snapshot_id(Some(de.read_string(member)?)),
                    Some(9) => builder.set_preserved_existing_data(Some(de.read_boolean(member)?)),
                    Some(10) => builder.set_volumei_scsi_attributes(Some(crate::model::VolumeiScsiAttributes::deserialize(de)?)),
                    Some(11) => builder.set_created_date(Some(de.read_timestamp(member)?)),
                    Some(12) => builder.set_volume_used_in_bytes(Some(de.read_long(member)?)),
                    Some(13) => builder.set_kms_key(Some(de.read_string(member)?)),
                    Some(14) => builder.set_target_name(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::model::Tape {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::TAPE, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.tape_arn {
                ser.write_string(&schema::TAPE_TAPE_ARN, var)?;
            }
            if let Some(var) = &self.tape_barcode {
                ser.write_string(&schema::TAPE_TAPE_BARCODE, var)?;
            }
            if let Some(var) = &self.tape_created_date {
                ser.write_timestamp(&schema::TAPE_TAPE_CREATED_DATE, var)?;
            }
            if let Some(var) = self.tape_size_in_bytes {
                ser.write_long(&schema::TAPE_TAPE_SIZE_IN_BYTES, var)?;
            }
            if let Some(var) = &self.tape_status {
                ser.write_string(&schema::TAPE_TAPE_STATUS, var)?;
            }
            if let Some(var) = &self.vtl_device {
                ser.write_string(&schema::TAPE_VTL_DEVICE, var)?;
            }
            if let Some(var) = self.progress {
                ser.write_double(&schema::TAPE_PROGRESS, var)?;
            }
            if let Some(var) = self.tape_used_in_bytes {
                ser.write_long(&schema::TAPE_TAPE_USED_IN_BYTES, var)?;
            }
            if let Some(var) = &self.kms_key {
                ser.write_string(&schema::TAPE_KMS_KEY, var)?;
            }
            if let Some(var) = &self.pool_id {
                ser.write_string(&schema::TAPE_POOL_ID, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::model::Tape {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::TAPE,
            crate::model::Tape::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_tape_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_tape_barcode(Some(de.read_string(member)?)),
                    Some(2) => builder.set_tape_created_date(Some(de.read_timestamp(member)?)),
                    Some(3) => builder.set_tape_size_in_bytes(Some(de.read_long(member)?)),
                    Some(4) => builder.set_tape_status(Some(de.read_string(member)?)),
                    Some(5) => builder.set_vtl_device(Some(de.read_string(member)?)),
                    Some(6) => builder.set_progress(Some(de.read_double(member)?)),
                    Some(7) => builder.set_tape_used_in_bytes(Some(de.read_long(member)?)),
                    Some(8) => builder.set_kms_key(Some(de.read_string(member)?)),
                    Some(9) => builder.set_pool_id(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::model::StorageGatewayError {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::STORAGE_GATEWAY_ERROR, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.error_code {
                ser.write_string(&schema::STORAGE_GATEWAY_ERROR_ERROR_CODE, var.as_str())?;
            }
            if let Some(var) = &self.error_details {
                ser.write_map(&schema::STORAGE_GATEWAY_ERROR_ERROR_DETAILS, var.len(), |ser| {
                    for (key, value) in var {
                        ser.write_map_entry(&schema::STORAGE_GATEWAY_ERROR_ERROR_DETAILS, key, |ser| {
                            ser.write_string(&schema::ERROR_DETAILS_VALUE, value)
                        })?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::model::StorageGatewayError {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::STORAGE_GATEWAY_ERROR,
            crate::model::StorageGatewayError::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_error_code(Some(de.read_enum(member)?)),
                    Some(1) => {
                        let map = de.read_map(member, HashMap::new(), |mut map, key, de| {
                            map.insert(key, de.read_string(&schema::ERROR_DETAILS_VALUE)?);
                            Ok(map)
                        })?;
                        builder.set_error_details(Some(map))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::ActivateGatewayInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::ACTIVATE_GATEWAY_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.activation_key {
                ser.write_string(&schema::ACTIVATE_GATEWAY_INPUT_ACTIVATION_KEY, var)?;
            }
            if let Some(var) = &self.gateway_name {
                ser.write_string(&schema::ACTIVATE_GATEWAY_INPUT_GATEWAY_NAME, var)?;
            }
            if let Some(var) = &self.gateway_timezone {
                ser.write_string(&schema::ACTIVATE_GATEWAY_INPUT_GATEWAY_TIMEZONE, var)?;
            }
            if let Some(var) = &self.gateway_region {
                ser.write_string(&schema::ACTIVATE_GATEWAY_INPUT_GATEWAY_REGION, var)?;
            }
            if let Some(var) = &self.gateway_type {
                ser.write_string(&schema::ACTIVATE_GATEWAY_INPUT_GATEWAY_TYPE, var)?;
            }
            if let Some(var) = &self.tape_drive_type {
                ser.write_string(&schema::ACTIVATE_GATEWAY_INPUT_TAPE_DRIVE_TYPE, var)?;
            }
            if let Some(var) = &self.medium_changer_type {
                ser.write_string(&schema::ACTIVATE_GATEWAY_INPUT_MEDIUM_CHANGER_TYPE, var)?;
            }
            if let Some(var) = &self.tags {
                ser.write_list(&schema::ACTIVATE_GATEWAY_INPUT_TAGS, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::TAGS_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::ActivateGatewayInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::ACTIVATE_GATEWAY_INPUT,
            crate::input::ActivateGatewayInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_activation_key(Some(de.read_string(member)?)),
                    Some(1) => builder.set_gateway_name(Some(de.read_string(member)?)),
                    Some(2) => builder.set_gateway_timezone(Some(de.read_string(member)?)),
                    Some(3) => builder.set_gateway_region(Some(de.read_string(member)?)),
                    Some(4) => builder.set_gateway_type(Some(de.read_string(member)?)),
                    Some(5) => builder.set_tape_drive_type(Some(de.read_string(member)?)),
                    Some(6) => builder.set_medium_changer_type(Some(de.read_string(member)?)),
                    Some(7) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::Tag::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_tags(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::ActivateGatewayOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::ACTIVATE_GATEWAY_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::ACTIVATE_GATEWAY_OUTPUT_GATEWAY_ARN, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::ActivateGatewayOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::ACTIVATE_GATEWAY_OUTPUT,
            crate::output::ActivateGatewayOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::CreateNfsFileShareInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::CREATE_NFS_FILE_SHARE_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.client_token {
                ser.write_string(&schema::CREATE_NFS_FILE_SHARE_INPUT_CLIENT_TOKEN, var)?;
            }
            if let Some(var) = &self.nfs_file_share_defaults {
                var.serialize_member(&schema::CREATE_NFS_FILE_SHARE_INPUT_NFS_FILE_SHARE_DEFAULTS, ser)?;
            }
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::CREATE_NFS_FILE_SHARE_INPUT_GATEWAY_ARN, var)?;
            }
            if let Some(var) = self.kms_encrypted {
                ser.write_boolean(&schema::CREATE_NFS_FILE_SHARE_INPUT_KMS_ENCRYPTED, var)?;
            }
            if let Some(var) = &self.kms_key {
                ser.write_string(&schema::CREATE_NFS_FILE_SHARE_INPUT_KMS_KEY, var)?;
            }
            if let Some(var) = &self.role {
                ser.write_string(&schema::CREATE_NFS_FILE_SHARE_INPUT_ROLE, var)?;
            }
            if let Some(var) = &self.location_arn {
                ser.write_string(&schema::CREATE_NFS_FILE_SHARE_INPUT_LOCATION_ARN, var)?;
            }
            if let Some(var) = &self.default_storage_class {
                ser.write_string(&schema::CREATE_NFS_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS, var)?;
            }
            if let Some(var) = &self.object_acl {
                ser.write_string(&schema::CREATE_NFS_FILE_SHARE_INPUT_OBJECT_ACL, var.as_str())?;
            }
            if let Some(var) = &self.client_list {
                ser.write_list(&schema::CREATE_NFS_FILE_SHARE_INPUT_CLIENT_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_CLIENT_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.squash {
                ser.write_string(&schema::CREATE_NFS_FILE_SHARE_INPUT_SQUASH, var)?;
            }
            if let Some(var) = self.read_only {
                ser.write_boolean(&schema::CREATE_NFS_FILE_SHARE_INPUT_READ_ONLY, var)?;
            }
            if let Some(var) = self.guess_mime_type_enabled {
                ser.write_boolean(&schema::CREATE_NFS_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED, var)?;
            }
            if let Some(var) = self.requester_pays {
                ser.write_boolean(&schema::CREATE_NFS_FILE_SHARE_INPUT_REQUESTER_PAYS, var)?;
            }
            if let Some(var) = &self.tags {
                ser.write_list(&schema::CREATE_NFS_FILE_SHARE_INPUT_TAGS, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::TAGS_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::CreateNfsFileShareInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::CREATE_NFS_FILE_SHARE_INPUT,
            crate::input::CreateNfsFileShareInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_client_token(Some(de.read_string(member)?)),
                    Some(1) => builder.set_nfs_file_share_defaults(Some(crate::model::NfsFileShareDefaults::deserialize(de)?)),
                    Some(2) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    Some(3) => builder.set_kms_encrypted(Some(de.read_boolean(member)?)),
                    Some(4) => builder.set_kms_key(Some(de.read_string(member)?)),
                    Some(5) => builder.set_role(Some(de.read_string(member)?)),
                    Some(6) => builder.set_location_arn(Some(de.read_string(member)?)),
                    Some(7) => builder.set_default_storage_class(Some(de.read_string(member)?)),
                    Some(8) => builder.set_object_acl(Some(de.read_enum(member)?)),
                    Some(9) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_CLIENT_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_client_list(Some(list))
                    }
                    Some(10) => builder.set_squash(Some(de.read_string(member)?)),
                    Some(11) => builder.set_read_only(Some(de.read_boolean(member)?)),
                    Some(12) => builder.set_guess_mime_type_enabled(Some(de.read_boolean(member)?)),
                    Some(13) => builder.set_requester_pays(Some(de.read_boolean(member)?)),
                    Some(14) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::Tag::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_tags(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::CreateNfsFileShareOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::CREATE_NFS_FILE_SHARE_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_share_arn {
                ser.write_string(&schema::CREATE_NFS_FILE_SHARE_OUTPUT_FILE_SHARE_ARN, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::CreateNfsFileShareOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::CREATE_NFS_FILE_SHARE_OUTPUT,
            crate::output::CreateNfsFileShareOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_file_share_arn(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::UpdateNfsFileShareInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::UPDATE_NFS_FILE_SHARE_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_share_arn {
                ser.write_string(&schema::UPDATE_NFS_FILE_SHARE_INPUT_FILE_SHARE_ARN, var)?;
            }
            if let Some(var) = self.kms_encrypted {
                ser.write_boolean(&schema::UPDATE_NFS_FILE_SHARE_INPUT_KMS_ENCRYPTED, var)?;
            }
            if let Some(var) = &self.kms_key {
                ser.write_string(&schema::UPDATE_NFS_FILE_SHARE_INPUT_KMS_KEY, var)?;
            }
            if let Some(var) = &self.nfs_file_share_defaults {
                var.serialize_member(&schema::UPDATE_NFS_FILE_SHARE_INPUT_NFS_FILE_SHARE_DEFAULTS, ser)?;
            }
            if let Some(var) = &self.default_storage_class {
                ser.write_string(&schema::UPDATE_NFS_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS, var)?;
            }
            if let Some(var) = &self.object_acl {
                ser.write_string(&schema::UPDATE_NFS_FILE_SHARE_INPUT_OBJECT_ACL, var.as_str())?;
            }
            if let Some(var) = &self.client_list {
                ser.write_list(&schema::UPDATE_NFS_FILE_SHARE_INPUT_CLIENT_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_CLIENT_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.squash {
                ser.write_string(&schema::UPDATE_NFS_FILE_SHARE_INPUT_SQUASH, var)?;
            }
            if let Some(var) = self.read_only {
                ser.write_boolean(&schema::UPDATE_NFS_FILE_SHARE_INPUT_READ_ONLY, var)?;
            }
            if let Some(var) = self.guess_mime_type_enabled {
                ser.write_boolean(&schema::UPDATE_NFS_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED, var)?;
            }
            if let Some(var) = self.requester_pays {
                ser.write_boolean(&schema::UPDATE_NFS_FILE_SHARE_INPUT_REQUESTER_PAYS, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::UpdateNfsFileShareInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::UPDATE_NFS_FILE_SHARE_INPUT,
            crate::input::UpdateNfsFileShareInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_file_share_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_kms_encrypted(Some(de.read_boolean(member)?)),
                    Some(2) => builder.set_kms_key(Some(de.read_string(member)?)),
                    Some(3) => builder.set_nfs_file_share_defaults(Some(crate::model::NfsFileShareDefaults::deserialize(de)?)),
                    Some(4) => builder.set_default_storage_class(Some(de.read_string(member)?)),
                    Some(5) => builder.set_object_acl(Some(de.read_enum(member)?)),
                    Some(6) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_CLIENT_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_client_list(Some(list))
                    }
                    Some(7) => builder.set_squash(Some(de.read_string(member)?)),
                    Some(8) => builder.set_read_only(Some(de.read_boolean(member)?)),
                    Some(9) => builder.set_guess_mime_type_enabled(Some(de.read_boolean(member)?)),
                    Some(10) => builder.set_requester_pays(Some(de.read_boolean(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::UpdateNfsFileShareOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::UPDATE_NFS_FILE_SHARE_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_share_arn {
                ser.write_string(&schema::UPDATE_NFS_FILE_SHARE_OUTPUT_FILE_SHARE_ARN, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::UpdateNfsFileShareOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::UPDATE_NFS_FILE_SHARE_OUTPUT,
            crate::output::UpdateNfsFileShareOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_file_share_arn(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::CreateSmbFileShareInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::CREATE_SMB_FILE_SHARE_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.client_token {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_INPUT_CLIENT_TOKEN, var)?;
            }
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_INPUT_GATEWAY_ARN, var)?;
            }
            if let Some(var) = self.kms_encrypted {
                ser.write_boolean(&schema::CREATE_SMB_FILE_SHARE_INPUT_KMS_ENCRYPTED, var)?;
            }
            if let Some(var) = &self.kms_key {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_INPUT_KMS_KEY, var)?;
            }
            if let Some(var) = &self.role {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_INPUT_ROLE, var)?;
            }
            if let Some(var) = &self.location_arn {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_INPUT_LOCATION_ARN, var)?;
            }
            if let Some(var) = &self.default_storage_class {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS, var)?;
            }
            if let Some(var) = &self.object_acl {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_INPUT_OBJECT_ACL, var.as_str())?;
            }
            if let Some(var) = self.read_only {
                ser.write_boolean(&schema::CREATE_SMB_FILE_SHARE_INPUT_READ_ONLY, var)?;
            }
            if let Some(var) = self.guess_mime_type_enabled {
                ser.write_boolean(&schema::CREATE_SMB_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED, var)?;
            }
            if let Some(var) = self.requester_pays {
                ser.write_boolean(&schema::CREATE_SMB_FILE_SHARE_INPUT_REQUESTER_PAYS, var)?;
            }
            if let Some(var) = self.smbacl_enabled {
                ser.write_boolean(&schema::CREATE_SMB_FILE_SHARE_INPUT_SMBACL_ENABLED, var)?;
            }
            if let Some(var) = &self.admin_user_list {
                ser.write_list(&schema::CREATE_SMB_FILE_SHARE_INPUT_ADMIN_USER_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_USER_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.valid_user_list {
                ser.write_list(&schema::CREATE_SMB_FILE_SHARE_INPUT_VALID_USER_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_USER_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.invalid_user_list {
                ser.write_list(&schema::CREATE_SMB_FILE_SHARE_INPUT_INVALID_USER_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_USER_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.audit_destination_arn {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_INPUT_AUDIT_DESTINATION_ARN, var)?;
            }
            if let Some(var) = &self.authentication {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_INPUT_AUTHENTICATION, var)?;
            }
            if let Some(var) = &self.tags {
                ser.write_list(&schema::CREATE_SMB_FILE_SHARE_INPUT_TAGS, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::TAGS_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::CreateSmbFileShareInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::CREATE_SMB_FILE_SHARE_INPUT,
            crate::input::CreateSmbFileShareInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_client_token(Some(de.read_string(member)?)),
                    Some(1) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    Some(2) => builder.set_kms_encrypted(Some(de.read_boolean(member)?)),
                    Some(3) => builder.set_kms_key(Some(de.read_string(member)?)),
                    Some(4) => builder.set_role(Some(de.read_string(member)?)),
                    Some(5) => builder.set_location_arn(Some(de.read_string(member)?)),
                    Some(6) => builder.set_default_storage_class(Some(de.read_string(member)?)),
                    Some(7) => builder.set_object_acl(Some(de.read_enum(member)?)),
                    Some(8) => builder.set_read_only(Some(de.read_boolean(member)?)),
                    Some(9) => builder.set_guess_mime_type_enabled(Some(de.read_boolean(member)?)),
                    Some(10) => builder.set_requester_pays(Some(de.read_boolean(member)?)),
                    Some(11) => builder.set_smbacl_enabled(Some(de.read_boolean(member)?)),
                    Some(12) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_USER_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_admin_user_list(Some(list))
                    }
                    Some(13) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_USER_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_valid_user_list(Some(list))
                    }
                    Some(14) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_USER_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_invalid_user_list(Some(list))
                    }
                    Some(15) => builder.set_audit_destination_arn(Some(de.read_string(member)?)),
                    Some(16) => builder.set_authentication(Some(de.read_string(member)?)),
                    Some(17) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::Tag::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_tags(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::CreateSmbFileShareOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::CREATE_SMB_FILE_SHARE_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_share_arn {
                ser.write_string(&schema::CREATE_SMB_FILE_SHARE_OUTPUT_FILE_SHARE_ARN, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::CreateSmbFileShareOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::CREATE_SMB_FILE_SHARE_OUTPUT,
            crate::output::CreateSmbFileShareOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_file_share_arn(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::UpdateSmbFileShareInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::UPDATE_SMB_FILE_SHARE_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_share_arn {
                ser.write_string(&schema::UPDATE_SMB_FILE_SHARE_INPUT_FILE_SHARE_ARN, var)?;
            }
            if let Some(var) = self.kms_encrypted {
                ser.write_boolean(&schema::UPDATE_SMB_FILE_SHARE_INPUT_KMS_ENCRYPTED, var)?;
            }
            if let Some(var) = &self.kms_key {
                ser.write_string(&schema::UPDATE_SMB_FILE_SHARE_INPUT_KMS_KEY, var)?;
            }
            if let Some(var) = &self.default_storage_class {
                ser.write_string(&schema::UPDATE_SMB_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS, var)?;
            }
            if let Some(var) = &self.object_acl {
                ser.write_string(&schema::UPDATE_SMB_FILE_SHARE_INPUT_OBJECT_ACL, var.as_str())?;
            }
            if let Some(var) = self.read_only {
                ser.write_boolean(&schema::UPDATE_SMB_FILE_SHARE_INPUT_READ_ONLY, var)?;
            }
            if let Some(var) = self.guess_mime_type_enabled {
                ser.write_boolean(&schema::UPDATE_SMB_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED, var)?;
            }
            if let Some(var) = self.requester_pays {
                ser.write_boolean(&schema::UPDATE_SMB_FILE_SHARE_INPUT_REQUESTER_PAYS, var)?;
            }
            if let Some(var) = self.smbacl_enabled {
                ser.write_boolean(&schema::UPDATE_SMB_FILE_SHARE_INPUT_SMBACL_ENABLED, var)?;
            }
            if let Some(var) = &self.admin_user_list {
                ser.write_list(&schema::UPDATE_SMB_FILE_SHARE_INPUT_ADMIN_USER_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_USER_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.valid_user_list {
                ser.write_list(&schema::UPDATE_SMB_FILE_SHARE_INPUT_VALID_USER_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_USER_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.invalid_user_list {
                ser.write_list(&schema::UPDATE_SMB_FILE_SHARE_INPUT_INVALID_USER_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_USER_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.audit_destination_arn {
                ser.write_string(&schema::UPDATE_SMB_FILE_SHARE_INPUT_AUDIT_DESTINATION_ARN, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::UpdateSmbFileShareInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::UPDATE_SMB_FILE_SHARE_INPUT,
            crate::input::UpdateSmbFileShareInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_file_share_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_kms_encrypted(Some(de.read_boolean(member)?)),
                    Some(2) => builder.set_kms_key(Some(de.read_string(member)?)),
                    Some(3) => builder.set_default_storage_class(Some(de.read_string(member)?)),
                    Some(4) => builder.set_object_acl(Some(de.read_enum(member)?)),
                    Some(5) => builder.set_read_only(Some(de.read_boolean(member)?)),
                    Some(6) => builder.set_guess_mime_type_enabled(Some(de.read_boolean(member)?)),
                    Some(7) => builder.set_requester_pays(Some(de.read_boolean(member)?)),
                    Some(8) => builder.set_smbacl_enabled(Some(de.read_boolean(member)?)),
                    Some(9) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_USER_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_admin_user_list(Some(list))
                    }
                    Some(10) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_USER_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_valid_user_list(Some(list))
                    }
                    Some(11) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_USER_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_invalid_user_list(Some(list))
                    }
                    Some(12) => builder.set_audit_destination_arn(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::UpdateSmbFileShareOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::UPDATE_SMB_FILE_SHARE_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_share_arn {
                ser.write_string(&schema::UPDATE_SMB_FILE_SHARE_OUTPUT_FILE_SHARE_ARN, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::UpdateSmbFileShareOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::UPDATE_SMB_FILE_SHARE_OUTPUT,
            crate::output::UpdateSmbFileShareOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_file_share_arn(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::DescribeNfsFileSharesInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_NFS_FILE_SHARES_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_share_arn_list {
                ser.write_list(&schema::DESCRIBE_NFS_FILE_SHARES_INPUT_FILE_SHARE_ARN_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_ARN_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::DescribeNfsFileSharesInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_NFS_FILE_SHARES_INPUT,
            crate::input::DescribeNfsFileSharesInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_ARN_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_file_share_arn_list(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::DescribeNfsFileSharesOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_NFS_FILE_SHARES_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.nfs_file_share_info_list {
                ser.write_list(&schema::DESCRIBE_NFS_FILE_SHARES_OUTPUT_NFS_FILE_SHARE_INFO_LIST, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::NFS_FILE_SHARE_INFO_LIST_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::DescribeNfsFileSharesOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_NFS_FILE_SHARES_OUTPUT,
            crate::output::DescribeNfsFileSharesOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::NfsFileShareInfo::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_nfs_file_share_info_list(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::DescribeSmbFileSharesInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_SMB_FILE_SHARES_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.file_share_arn_list {
                ser.write_list(&schema::DESCRIBE_SMB_FILE_SHARES_INPUT_FILE_SHARE_ARN_LIST, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::FILE_SHARE_ARN_LIST_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::DescribeSmbFileSharesInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_SMB_FILE_SHARES_INPUT,
            crate::input::DescribeSmbFileSharesInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::FILE_SHARE_ARN_LIST_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_file_share_arn_list(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::DescribeSmbFileSharesOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_SMB_FILE_SHARES_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.smb_file_share_info_list {
                ser.write_list(&schema::DESCRIBE_SMB_FILE_SHARES_OUTPUT_SMB_FILE_SHARE_INFO_LIST, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::SMB_FILE_SHARE_INFO_LIST_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::DescribeSmbFileSharesOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_SMB_FILE_SHARES_OUTPUT,
            crate::output::DescribeSmbFileSharesOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::SmbFileShareInfo::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_smb_file_share_info_list(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::CreateStorediScsiVolumeInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT_GATEWAY_ARN, var)?;
            }
            if let Some(var) = &self.disk_id {
                ser.write_string(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT_DISK_ID, var)?;
            }
            if let Some(var) = &self.snapshot_id {
                ser.write_string(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT_SNAPSHOT_ID, var)?;
            }
            if let Some(var) = self.preserve_existing_data {
                ser.write_boolean(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT_PRESERVE_EXISTING_DATA, var)?;
            }
            if let Some(var) = &self.target_name {
                ser.write_string(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT_TARGET_NAME, var)?;
            }
            if let Some(var) = &self.network_interface_id {
                ser.write_string(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT_NETWORK_INTERFACE_ID, var)?;
            }
            if let Some(var) = self.kms_encrypted {
                ser.write_boolean(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT_KMS_ENCRYPTED, var)?;
            }
            if let Some(var) = &self.kms_key {
                ser.write_string(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT_KMS_KEY, var)?;
            }
            if let Some(var) = &self.tags {
                ser.write_list(&schema::CREATE_STOREDI_SCSI_VOLUME_INPUT_TAGS, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::TAGS_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::CreateStorediScsiVolumeInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::CREATE_STOREDI_SCSI_VOLUME_INPUT,
            crate::input::CreateStorediScsiVolumeInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_disk_id(Some(de.read_string(member)?)),
                    Some(2) => builder.set_snapshot_id(Some(de.read_string(member)?)),
                    Some(3) => builder.set_preserve_existing_data(Some(de.read_boolean(member)?)),
                    Some(4) => builder.set_target_name(Some(de.read_string(member)?)),
                    Some(5) => builder.set_network_interface_id(Some(de.read_string(member)?)),
                    Some(6) => builder.set_kms_encrypted(Some(de.read_boolean(member)?)),
                    Some(7) => builder.set_kms_key(Some(de.read_string(member)?)),
                    Some(8) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::Tag::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_tags(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::CreateStorediScsiVolumeOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::CREATE_STOREDI_SCSI_VOLUME_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.volume_arn {
                ser.write_string(&schema::CREATE_STOREDI_SCSI_VOLUME_OUTPUT_VOLUME_ARN, var)?;
            }
            if let Some(var) = self.volume_size_in_bytes {
                ser.write_long(&schema::CREATE_STOREDI_SCSI_VOLUME_OUTPUT_VOLUME_SIZE_IN_BYTES, var)?;
            }
            if let Some(var) = &self.target_arn {
                ser.write_string(&schema::CREATE_STOREDI_SCSI_VOLUME_OUTPUT_TARGET_ARN, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::CreateStorediScsiVolumeOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::CREATE_STOREDI_SCSI_VOLUME_OUTPUT,
            crate::output::CreateStorediScsiVolumeOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_volume_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_volume_size_in_bytes(Some(de.read_long(member)?)),
                    Some(2) => builder.set_target_arn(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::DescribeStorediScsiVolumesInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_STOREDI_SCSI_VOLUMES_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.volume_arns {
                ser.write_list(&schema::DESCRIBE_STOREDI_SCSI_VOLUMES_INPUT_VOLUME_ARNS, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::VOLUME_ARNS_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::DescribeStorediScsiVolumesInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_STOREDI_SCSI_VOLUMES_INPUT,
            crate::input::DescribeStorediScsiVolumesInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::VOLUME_ARNS_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_volume_arns(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::DescribeStorediScsiVolumesOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_STOREDI_SCSI_VOLUMES_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.storedi_scsi_volumes {
                ser.write_list(&schema::DESCRIBE_STOREDI_SCSI_VOLUMES_OUTPUT_STOREDI_SCSI_VOLUMES, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::STOREDI_SCSI_VOLUMES_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::DescribeStorediScsiVolumesOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_STOREDI_SCSI_VOLUMES_OUTPUT,
            crate::output::DescribeStorediScsiVolumesOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::StorediScsiVolume::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_storedi_scsi_volumes(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::DescribeCacheInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_CACHE_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::DESCRIBE_CACHE_INPUT_GATEWAY_ARN, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::DescribeCacheInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_CACHE_INPUT,
            crate::input::DescribeCacheInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::DescribeCacheOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_CACHE_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::DESCRIBE_CACHE_OUTPUT_GATEWAY_ARN, var)?;
            }
            if let Some(var) = &self.disk_ids {
                ser.write_list(&schema::DESCRIBE_CACHE_OUTPUT_DISK_IDS, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::DISK_IDS_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = self.cache_allocated_in_bytes {
                ser.write_long(&schema::DESCRIBE_CACHE_OUTPUT_CACHE_ALLOCATED_IN_BYTES, var)?;
            }
            if let Some(var) = self.cache_used_percentage {
                ser.write_double(&schema::DESCRIBE_CACHE_OUTPUT_CACHE_USED_PERCENTAGE, var)?;
            }
            if let Some(var) = self.cache_dirty_percentage {
                ser.write_double(&schema::DESCRIBE_CACHE_OUTPUT_CACHE_DIRTY_PERCENTAGE, var)?;
            }
            if let Some(var) = self.cache_hit_percentage {
                ser.write_double(&schema::DESCRIBE_CACHE_OUTPUT_CACHE_HIT_PERCENTAGE, var)?;
            }
            if let Some(var) = self.cache_miss_percentage {
                ser.write_double(&schema::DESCRIBE_CACHE_OUTPUT_CACHE_MISS_PERCENTAGE, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::DescribeCacheOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_CACHE_OUTPUT,
            crate::output::DescribeCacheOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    Some(1) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::DISK_IDS_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_disk_ids(Some(list))
                    }
                    Some(2) => builder.set_cache_allocated_in_bytes(Some(de.read_long(member)?)),
                    Some(3) => builder.set_cache_used_percentage(Some(de.read_double(member)?)),
                    Some(4) => builder.set_cache_dirty_percentage(Some(de.read_double(member)?)),
                    Some(5) => builder.set_cache_hit_percentage(Some(de.read_double(member)?)),
                    Some(6) => builder.set_cache_miss_percentage(Some(de.read_double(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::JoinDomainInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::JOIN_DOMAIN_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::JOIN_DOMAIN_INPUT_GATEWAY_ARN, var)?;
            }
            if let Some(var) = &self.domain_name {
                ser.write_string(&schema::JOIN_DOMAIN_INPUT_DOMAIN_NAME, var)?;
            }
            if let Some(var) = &self.organizational_unit {
                ser.write_string(&schema::JOIN_DOMAIN_INPUT_ORGANIZATIONAL_UNIT, var)?;
            }
            if let Some(var) = &self.domain_controllers {
                ser.write_list(&schema::JOIN_DOMAIN_INPUT_DOMAIN_CONTROLLERS, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::HOSTS_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = self.timeout_in_seconds {
                ser.write_integer(&schema::JOIN_DOMAIN_INPUT_TIMEOUT_IN_SECONDS, var)?;
            }
            if let Some(var) = &self.user_name {
                ser.write_string(&schema::JOIN_DOMAIN_INPUT_USER_NAME, var)?;
            }
            if let Some(var) = &self.password {
                ser.write_string(&schema::JOIN_DOMAIN_INPUT_PASSWORD, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::JoinDomainInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::JOIN_DOMAIN_INPUT,
            crate::input::JoinDomainInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_domain_name(Some(de.read_string(member)?)),
                    Some(2) => builder.set_organizational_unit(Some(de.read_string(member)?)),
                    Some(3) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::HOSTS_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_domain_controllers(Some(list))
                    }
                    Some(4) => builder.set_timeout_in_seconds(Some(de.read_integer(member)?)),
                    Some(5) => builder.set_user_name(Some(de.read_string(member)?)),
                    Some(6) => builder.set_password(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::JoinDomainOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::JOIN_DOMAIN_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::JOIN_DOMAIN_OUTPUT_GATEWAY_ARN, var)?;
            }
            if let Some(var) = &self.active_directory_status {
                ser.write_string(&schema::JOIN_DOMAIN_OUTPUT_ACTIVE_DIRECTORY_STATUS, var.as_str())?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::JoinDomainOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::JOIN_DOMAIN_OUTPUT,
            crate::output::JoinDomainOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    Some(1) => builder.set_active_directory_status(Some(de.read_enum(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::DescribeTapesInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_TAPES_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.gateway_arn {
                ser.write_string(&schema::DESCRIBE_TAPES_INPUT_GATEWAY_ARN, var)?;
            }
            if let Some(var) = &self.tape_arns {
                ser.write_list(&schema::DESCRIBE_TAPES_INPUT_TAPE_ARNS, var.len(), |ser| {
                    for item in var {
                        ser.write_string(&schema::TAPE_ARNS_MEMBER, item)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.marker {
                ser.write_string(&schema::DESCRIBE_TAPES_INPUT_MARKER, var)?;
            }
            if let Some(var) = self.limit {
                ser.write_integer(&schema::DESCRIBE_TAPES_INPUT_LIMIT, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::DescribeTapesInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_TAPES_INPUT,
            crate::input::DescribeTapesInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_gateway_arn(Some(de.read_string(member)?)),
                    Some(1) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(de.read_string(&schema::TAPE_ARNS_MEMBER)?);
                            Ok(list)
                        })?;
                        builder.set_tape_arns(Some(list))
                    }
                    Some(2) => builder.set_marker(Some(de.read_string(member)?)),
                    Some(3) => builder.set_limit(Some(de.read_integer(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::DescribeTapesOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::DESCRIBE_TAPES_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.tapes {
                ser.write_list(&schema::DESCRIBE_TAPES_OUTPUT_TAPES, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::TAPES_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(var) = &self.marker {
                ser.write_string(&schema::DESCRIBE_TAPES_OUTPUT_MARKER, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::DescribeTapesOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::DESCRIBE_TAPES_OUTPUT,
            crate::output::DescribeTapesOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::Tape::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_tapes(Some(list))
                    }
                    Some(1) => builder.set_marker(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::input::AddTagsToResourceInput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::ADD_TAGS_TO_RESOURCE_INPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.resource_arn {
                ser.write_string(&schema::ADD_TAGS_TO_RESOURCE_INPUT_RESOURCE_ARN, var)?;
            }
            if let Some(var) = &self.tags {
                ser.write_list(&schema::ADD_TAGS_TO_RESOURCE_INPUT_TAGS, var.len(), |ser| {
                    for item in var {
                        item.serialize_member(&schema::TAGS_MEMBER, ser)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::input::AddTagsToResourceInput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::ADD_TAGS_TO_RESOURCE_INPUT,
            crate::input::AddTagsToResourceInput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_resource_arn(Some(de.read_string(member)?)),
                    Some(1) => {
                        let list = de.read_list(member, Vec::new(), |mut list, de| {
                            list.push(crate::model::Tag::deserialize(de)?);
                            Ok(list)
                        })?;
                        builder.set_tags(Some(list))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for crate::output::AddTagsToResourceOutput {
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.serialize_member(&schema::ADD_TAGS_TO_RESOURCE_OUTPUT, serializer)
    }

    fn serialize_member<S: ShapeSerializer>(
        &self,
        member: &dyn Schema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_struct(member, |ser| {
            if let Some(var) = &self.resource_arn {
                ser.write_string(&schema::ADD_TAGS_TO_RESOURCE_OUTPUT_RESOURCE_ARN, var)?;
            }
            Ok(())
        })
    }
}

impl DeserializableStruct for crate::output::AddTagsToResourceOutput {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::ADD_TAGS_TO_RESOURCE_OUTPUT,
            crate::output::AddTagsToResourceOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_resource_arn(Some(de.read_string(member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for crate::error::InternalServerError {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::INTERNAL_SERVER_ERROR,
            crate::error::InternalServerError::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_message(Some(de.read_string(member)?)),
                    Some(1) => builder.set_error(Some(crate::model::StorageGatewayError::deserialize(de)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for crate::error::InvalidGatewayRequestException {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::INVALID_GATEWAY_REQUEST_EXCEPTION,
            crate::error::InvalidGatewayRequestException::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_message(Some(de.read_string(member)?)),
                    Some(1) => builder.set_error(Some(crate::model::StorageGatewayError::deserialize(de)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for crate::error::ServiceUnavailableError {
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error> {
        let builder = deserializer.read_struct(
            &schema::SERVICE_UNAVAILABLE_ERROR,
            crate::error::ServiceUnavailableError::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_message(Some(de.read_string(member)?)),
                    Some(1) => builder.set_error(Some(crate::model::StorageGatewayError::deserialize(de)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}
