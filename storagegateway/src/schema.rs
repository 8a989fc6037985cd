/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static schemas for every shape of the service model.
//!
//! Constraint traits are attached to the members that carry them. Nothing here is checked
//! implicitly; see [`validate`](aws_smithy_schema::validate).

use aws_smithy_schema::prelude::{BOOLEAN, DOUBLE, INTEGER, LONG, STRING, TIMESTAMP};
use aws_smithy_schema::{
    Constraints, EnumSchema, ListSchema, MapSchema, MemberSchema, ShapeId, StructSchema,
};

macro_rules! shape_id {
    ($name:literal) => {
        ShapeId::from_static(
            concat!("com.amazonaws.storagegateway#", $name),
            "com.amazonaws.storagegateway",
            $name,
        )
    };
}

macro_rules! member {
    ($shape:literal, $name:literal, $index:literal, $target:expr, $constraints:expr $(,)?) => {
        MemberSchema::new(
            ShapeId::from_static_member(
                concat!("com.amazonaws.storagegateway#", $shape, "$", $name),
                "com.amazonaws.storagegateway",
                $shape,
                $name,
            ),
            $name,
            $index,
            $target,
            $constraints,
        )
    };
}

// Enums

pub(crate) static OBJECT_ACL: EnumSchema = EnumSchema::new(
    shape_id!("ObjectACL"),
    &[
        "authenticated-read",
        "aws-exec-read",
        "bucket-owner-full-control",
        "bucket-owner-read",
        "private",
        "public-read",
        "public-read-write",
    ],
);

pub(crate) static ACTIVE_DIRECTORY_STATUS: EnumSchema = EnumSchema::new(
    shape_id!("ActiveDirectoryStatus"),
    &[
        "ACCESS_DENIED",
        "DETACHED",
        "JOINED",
        "JOINING",
        "NETWORK_ERROR",
        "TIMEOUT",
        "UNKNOWN_ERROR",
    ],
);

pub(crate) static ERROR_CODE: EnumSchema = EnumSchema::new(
    shape_id!("ErrorCode"),
    &[
        "ActivationKeyExpired",
        "ActivationKeyInvalid",
        "ActivationKeyNotFound",
        "AuthenticationFailure",
        "BandwidthThrottleScheduleNotFound",
        "Blocked",
        "CannotExportSnapshot",
        "ChapCredentialNotFound",
        "DiskAlreadyAllocated",
        "DiskDoesNotExist",
        "DiskSizeGreaterThanVolumeMaxSize",
        "DiskSizeLessThanVolumeSize",
        "DiskSizeNotGigAligned",
        "DuplicateCertificateInfo",
        "DuplicateSchedule",
        "EndpointNotFound",
        "GatewayInternalError",
        "GatewayNotConnected",
        "GatewayNotFound",
        "GatewayProxyNetworkConnectionBusy",
        "IAMNotSupported",
        "InitiatorInvalid",
        "InitiatorNotFound",
        "InternalError",
        "InvalidEndpoint",
        "InvalidGateway",
        "InvalidParameters",
        "InvalidSchedule",
        "JoinDomainInProgress",
        "LocalStorageLimitExceeded",
        "LunAlreadyAllocated ",
        "LunInvalid",
        "MaximumContentLengthExceeded",
        "MaximumTapeCartridgeCountExceeded",
        "MaximumVolumeCountExceeded",
        "NetworkConfigurationChanged",
        "NoDisksAvailable",
        "NotImplemented",
        "NotSupported",
        "OperationAborted",
        "OutdatedGateway",
        "ParametersNotImplemented",
        "RegionInvalid",
        "RequestTimeout",
        "ServiceUnavailable",
        "SnapshotDeleted",
        "SnapshotIdInvalid",
        "SnapshotInProgress",
        "SnapshotNotFound",
        "SnapshotScheduleNotFound",
        "StagingAreaFull",
        "StorageFailure",
        "TapeCartridgeNotFound",
        "TargetAlreadyExists",
        "TargetInvalid",
        "TargetNotFound",
        "UnauthorizedOperation",
        "VolumeAlreadyExists",
        "VolumeIdInvalid",
        "VolumeInUse",
        "VolumeNotFound",
        "VolumeNotReady",
    ],
);

// Collections

pub(crate) static TAGS_MEMBER: MemberSchema = member!("Tags", "member", 0, &TAG, Constraints::NONE);
pub(crate) static TAGS: ListSchema =
    ListSchema::new(shape_id!("Tags"), &TAGS_MEMBER);

pub(crate) static FILE_SHARE_CLIENT_LIST_MEMBER: MemberSchema = member!(
    "FileShareClientList",
    "member",
    0,
    &STRING,
    Constraints::new()
        .pattern(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}(\/([0-9]|[1-2][0-9]|3[0-2]))?$"),
);
pub(crate) static FILE_SHARE_CLIENT_LIST: ListSchema =
    ListSchema::new(shape_id!("FileShareClientList"), &FILE_SHARE_CLIENT_LIST_MEMBER);

pub(crate) static FILE_SHARE_USER_LIST_MEMBER: MemberSchema = member!(
    "FileShareUserList",
    "member",
    0,
    &STRING,
    Constraints::new().length(Some(1), Some(64)),
);
pub(crate) static FILE_SHARE_USER_LIST: ListSchema =
    ListSchema::new(shape_id!("FileShareUserList"), &FILE_SHARE_USER_LIST_MEMBER);

pub(crate) static FILE_SHARE_ARN_LIST_MEMBER: MemberSchema = member!(
    "FileShareARNList",
    "member",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
pub(crate) static FILE_SHARE_ARN_LIST: ListSchema =
    ListSchema::new(shape_id!("FileShareARNList"), &FILE_SHARE_ARN_LIST_MEMBER);

pub(crate) static NFS_FILE_SHARE_INFO_LIST_MEMBER: MemberSchema =
    member!("NFSFileShareInfoList", "member", 0, &NFS_FILE_SHARE_INFO, Constraints::NONE);
pub(crate) static NFS_FILE_SHARE_INFO_LIST: ListSchema =
    ListSchema::new(shape_id!("NFSFileShareInfoList"), &NFS_FILE_SHARE_INFO_LIST_MEMBER);

pub(crate) static SMB_FILE_SHARE_INFO_LIST_MEMBER: MemberSchema =
    member!("SMBFileShareInfoList", "member", 0, &SMB_FILE_SHARE_INFO, Constraints::NONE);
pub(crate) static SMB_FILE_SHARE_INFO_LIST: ListSchema =
    ListSchema::new(shape_id!("SMBFileShareInfoList"), &SMB_FILE_SHARE_INFO_LIST_MEMBER);

pub(crate) static VOLUME_ARNS_MEMBER: MemberSchema =
    member!("VolumeARNs", "member", 0, &STRING, Constraints::new().length(Some(50), Some(500)));
pub(crate) static VOLUME_ARNS: ListSchema =
    ListSchema::new(shape_id!("VolumeARNs"), &VOLUME_ARNS_MEMBER);

pub(crate) static STOREDI_SCSI_VOLUMES_MEMBER: MemberSchema =
    member!("StorediSCSIVolumes", "member", 0, &STOREDI_SCSI_VOLUME, Constraints::NONE);
pub(crate) static STOREDI_SCSI_VOLUMES: ListSchema =
    ListSchema::new(shape_id!("StorediSCSIVolumes"), &STOREDI_SCSI_VOLUMES_MEMBER);

pub(crate) static DISK_IDS_MEMBER: MemberSchema =
    member!("DiskIds", "member", 0, &STRING, Constraints::new().length(Some(1), Some(300)));
pub(crate) static DISK_IDS: ListSchema =
    ListSchema::new(shape_id!("DiskIds"), &DISK_IDS_MEMBER);

pub(crate) static HOSTS_MEMBER: MemberSchema = member!(
    "Hosts",
    "member",
    0,
    &STRING,
    Constraints::new()
        .length(Some(6), Some(1024))
        .pattern(r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9\-]*[a-zA-Z0-9])\.)*([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9])(:(\d+))?$"),
);
pub(crate) static HOSTS: ListSchema =
    ListSchema::new(shape_id!("Hosts"), &HOSTS_MEMBER);

pub(crate) static TAPE_ARNS_MEMBER: MemberSchema = member!(
    "TapeARNs",
    "member",
    0,
    &STRING,
    Constraints::new()
        .length(Some(50), Some(500))
        .pattern(r"^arn:(aws|aws-cn|aws-us-gov):storagegateway:[a-z\-0-9]+:[0-9]+:tape\/[0-9A-Z]{7,16}$"),
);
pub(crate) static TAPE_ARNS: ListSchema =
    ListSchema::new(shape_id!("TapeARNs"), &TAPE_ARNS_MEMBER);

pub(crate) static TAPES_MEMBER: MemberSchema =
    member!("Tapes", "member", 0, &TAPE, Constraints::NONE);
pub(crate) static TAPES: ListSchema =
    ListSchema::new(shape_id!("Tapes"), &TAPES_MEMBER);

pub(crate) static ERROR_DETAILS_KEY: MemberSchema =
    member!("errorDetails", "key", 0, &STRING, Constraints::NONE);
pub(crate) static ERROR_DETAILS_VALUE: MemberSchema =
    member!("errorDetails", "value", 1, &STRING, Constraints::NONE);
pub(crate) static ERROR_DETAILS: MapSchema =
    MapSchema::new(shape_id!("errorDetails"), &ERROR_DETAILS_KEY, &ERROR_DETAILS_VALUE);

// Structures

pub(crate) static TAG_KEY: MemberSchema = member!(
    "Tag",
    "Key",
    0,
    &STRING,
    Constraints::new()
        .required()
        .length(Some(1), Some(128))
        .pattern(r"^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$"),
);
pub(crate) static TAG_VALUE: MemberSchema = member!(
    "Tag",
    "Value",
    1,
    &STRING,
    Constraints::new()
        .required()
        .length(Some(0), Some(256))
        .pattern(r"^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$"),
);
static TAG_MEMBERS: [&MemberSchema; 2] = [&TAG_KEY, &TAG_VALUE];
pub(crate) static TAG: StructSchema =
    StructSchema::new(shape_id!("Tag"), &TAG_MEMBERS);

pub(crate) static NFS_FILE_SHARE_DEFAULTS_FILE_MODE: MemberSchema = member!(
    "NFSFileShareDefaults",
    "FileMode",
    0,
    &STRING,
    Constraints::new().length(Some(1), Some(4)).pattern(r"^[0-7]{4}$"),
);
pub(crate) static NFS_FILE_SHARE_DEFAULTS_DIRECTORY_MODE: MemberSchema = member!(
    "NFSFileShareDefaults",
    "DirectoryMode",
    1,
    &STRING,
    Constraints::new().length(Some(1), Some(4)).pattern(r"^[0-7]{4}$"),
);
pub(crate) static NFS_FILE_SHARE_DEFAULTS_GROUP_ID: MemberSchema = member!(
    "NFSFileShareDefaults",
    "GroupId",
    2,
    &LONG,
    Constraints::new().range(Some(0), Some(4294967294)),
);
pub(crate) static NFS_FILE_SHARE_DEFAULTS_OWNER_ID: MemberSchema = member!(
    "NFSFileShareDefaults",
    "OwnerId",
    3,
    &LONG,
    Constraints::new().range(Some(0), Some(4294967294)),
);
static NFS_FILE_SHARE_DEFAULTS_MEMBERS: [&MemberSchema; 4] = [
    &NFS_FILE_SHARE_DEFAULTS_FILE_MODE,
    &NFS_FILE_SHARE_DEFAULTS_DIRECTORY_MODE,
    &NFS_FILE_SHARE_DEFAULTS_GROUP_ID,
    &NFS_FILE_SHARE_DEFAULTS_OWNER_ID,
];
pub(crate) static NFS_FILE_SHARE_DEFAULTS: StructSchema =
    StructSchema::new(shape_id!("NFSFileShareDefaults"), &NFS_FILE_SHARE_DEFAULTS_MEMBERS);

pub(crate) static NFS_FILE_SHARE_INFO_NFS_FILE_SHARE_DEFAULTS: MemberSchema = member!(
    "NFSFileShareInfo",
    "NFSFileShareDefaults",
    0,
    &NFS_FILE_SHARE_DEFAULTS,
    Constraints::NONE,
);
pub(crate) static NFS_FILE_SHARE_INFO_FILE_SHARE_ARN: MemberSchema = member!(
    "NFSFileShareInfo",
    "FileShareARN",
    1,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
pub(crate) static NFS_FILE_SHARE_INFO_FILE_SHARE_ID: MemberSchema = member!(
    "NFSFileShareInfo",
    "FileShareId",
    2,
    &STRING,
    Constraints::new().length(Some(12), Some(30)),
);
pub(crate) static NFS_FILE_SHARE_INFO_FILE_SHARE_STATUS: MemberSchema = member!(
    "NFSFileShareInfo",
    "FileShareStatus",
    3,
    &STRING,
    Constraints::new().length(Some(3), Some(50)),
);
pub(crate) static NFS_FILE_SHARE_INFO_GATEWAY_ARN: MemberSchema = member!(
    "NFSFileShareInfo",
    "GatewayARN",
    4,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
pub(crate) static NFS_FILE_SHARE_INFO_KMS_ENCRYPTED: MemberSchema =
    member!("NFSFileShareInfo", "KMSEncrypted", 5, &BOOLEAN, Constraints::NONE);
pub(crate) static NFS_FILE_SHARE_INFO_KMS_KEY: MemberSchema = member!(
    "NFSFileShareInfo",
    "KMSKey",
    6,
    &STRING,
    Constraints::new()
        .length(Some(7), Some(2048))
        .pattern(r"(^arn:(aws|aws-cn|aws-us-gov):kms:([a-zA-Z0-9-]+):([0-9]+):(key|alias)/(\S+)$)|(^alias/(\S+)$)"),
);
pub(crate) static NFS_FILE_SHARE_INFO_PATH: MemberSchema =
    member!("NFSFileShareInfo", "Path", 7, &STRING, Constraints::NONE);
pub(crate) static NFS_FILE_SHARE_INFO_ROLE: MemberSchema = member!(
    "NFSFileShareInfo",
    "Role",
    8,
    &STRING,
    Constraints::new()
        .length(Some(20), Some(2048))
        .pattern(r"^arn:(aws|aws-cn|aws-us-gov|aws-iso|aws-iso-b):iam::([0-9]+):role/(\S+)$"),
);
pub(crate) static NFS_FILE_SHARE_INFO_LOCATION_ARN: MemberSchema = member!(
    "NFSFileShareInfo",
    "LocationARN",
    9,
    &STRING,
    Constraints::new().length(Some(16), Some(310)),
);
pub(crate) static NFS_FILE_SHARE_INFO_DEFAULT_STORAGE_CLASS: MemberSchema = member!(
    "NFSFileShareInfo",
    "DefaultStorageClass",
    10,
    &STRING,
    Constraints::new().length(Some(5), Some(20)),
);
pub(crate) static NFS_FILE_SHARE_INFO_OBJECT_ACL: MemberSchema =
    member!("NFSFileShareInfo", "ObjectACL", 11, &OBJECT_ACL, Constraints::NONE);
pub(crate) static NFS_FILE_SHARE_INFO_CLIENT_LIST: MemberSchema = member!(
    "NFSFileShareInfo",
    "ClientList",
    12,
    &FILE_SHARE_CLIENT_LIST,
    Constraints::new().length(Some(1), Some(100)),
);
pub(crate) static NFS_FILE_SHARE_INFO_SQUASH: MemberSchema = member!(
    "NFSFileShareInfo",
    "Squash",
    13,
    &STRING,
    Constraints::new().length(Some(5), Some(15)),
);
pub(crate) static NFS_FILE_SHARE_INFO_READ_ONLY: MemberSchema =
    member!("NFSFileShareInfo", "ReadOnly", 14, &BOOLEAN, Constraints::NONE);
pub(crate) static NFS_FILE_SHARE_INFO_GUESS_MIME_TYPE_ENABLED: MemberSchema =
    member!("NFSFileShareInfo", "GuessMIMETypeEnabled", 15, &BOOLEAN, Constraints::NONE);
pub(crate) static NFS_FILE_SHARE_INFO_REQUESTER_PAYS: MemberSchema =
    member!("NFSFileShareInfo", "RequesterPays", 16, &BOOLEAN, Constraints::NONE);
pub(crate) static NFS_FILE_SHARE_INFO_TAGS: MemberSchema =
    member!("NFSFileShareInfo", "Tags", 17, &TAGS, Constraints::NONE);
static NFS_FILE_SHARE_INFO_MEMBERS: [&MemberSchema; 18] = [
    &NFS_FILE_SHARE_INFO_NFS_FILE_SHARE_DEFAULTS,
    &NFS_FILE_SHARE_INFO_FILE_SHARE_ARN,
    &NFS_FILE_SHARE_INFO_FILE_SHARE_ID,
    &NFS_FILE_SHARE_INFO_FILE_SHARE_STATUS,
    &NFS_FILE_SHARE_INFO_GATEWAY_ARN,
    &NFS_FILE_SHARE_INFO_KMS_ENCRYPTED,
    &NFS_FILE_SHARE_INFO_KMS_KEY,
    &NFS_FILE_SHARE_INFO_PATH,
    &NFS_FILE_SHARE_INFO_ROLE,
    &NFS_FILE_SHARE_INFO_LOCATION_ARN,
    &NFS_FILE_SHARE_INFO_DEFAULT_STORAGE_CLASS,
    &NFS_FILE_SHARE_INFO_OBJECT_ACL,
    &NFS_FILE_SHARE_INFO_CLIENT_LIST,
    &NFS_FILE_SHARE_INFO_SQUASH,
    &NFS_FILE_SHARE_INFO_READ_ONLY,
    &NFS_FILE_SHARE_INFO_GUESS_MIME_TYPE_ENABLED,
    &NFS_FILE_SHARE_INFO_REQUESTER_PAYS,
    &NFS_FILE_SHARE_INFO_TAGS,
];
pub(crate) static NFS_FILE_SHARE_INFO: StructSchema =
    StructSchema::new(shape_id!("NFSFileShareInfo"), &NFS_FILE_SHARE_INFO_MEMBERS);

pub(crate) static SMB_FILE_SHARE_INFO_FILE_SHARE_ARN: MemberSchema = member!(
    "SMBFileShareInfo",
    "FileShareARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
pub(crate) static SMB_FILE_SHARE_INFO_FILE_SHARE_ID: MemberSchema = member!(
    "SMBFileShareInfo",
    "FileShareId",
    1,
    &STRING,
    Constraints::new().length(Some(12), Some(30)),
);
pub(crate) static SMB_FILE_SHARE_INFO_FILE_SHARE_STATUS: MemberSchema = member!(
    "SMBFileShareInfo",
    "FileShareStatus",
    2,
    &STRING,
    Constraints::new().length(Some(3), Some(50)),
);
pub(crate) static SMB_FILE_SHARE_INFO_GATEWAY_ARN: MemberSchema = member!(
    "SMBFileShareInfo",
    "GatewayARN",
    3,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
pub(crate) static SMB_FILE_SHARE_INFO_KMS_ENCRYPTED: MemberSchema =
    member!("SMBFileShareInfo", "KMSEncrypted", 4, &BOOLEAN, Constraints::NONE);
pub(crate) static SMB_FILE_SHARE_INFO_KMS_KEY: MemberSchema = member!(
    "SMBFileShareInfo",
    "KMSKey",
    5,
    &STRING,
    Constraints::new()
        .length(Some(7), Some(2048))
        .pattern(r"(^arn:(aws|aws-cn|aws-us-gov):kms:([a-zA-Z0-9-]+):([0-9]+):(key|alias)/(\S+)$)|(^alias/(\S+)$)"),
);
pub(crate) static SMB_FILE_SHARE_INFO_PATH: MemberSchema =
    member!("SMBFileShareInfo", "Path", 6, &STRING, Constraints::NONE);
pub(crate) static SMB_FILE_SHARE_INFO_ROLE: MemberSchema = member!(
    "SMBFileShareInfo",
    "Role",
    7,
    &STRING,
    Constraints::new()
        .length(Some(20), Some(2048))
        .pattern(r"^arn:(aws|aws-cn|aws-us-gov|aws-iso|aws-iso-b):iam::([0-9]+):role/(\S+)$"),
);
pub(crate) static SMB_FILE_SHARE_INFO_LOCATION_ARN: MemberSchema = member!(
    "SMBFileShareInfo",
    "LocationARN",
    8,
    &STRING,
    Constraints::new().length(Some(16), Some(310)),
);
pub(crate) static SMB_FILE_SHARE_INFO_DEFAULT_STORAGE_CLASS: MemberSchema = member!(
    "SMBFileShareInfo",
    "DefaultStorageClass",
    9,
    &STRING,
    Constraints::new().length(Some(5), Some(50)),
);
pub(crate) static SMB_FILE_SHARE_INFO_OBJECT_ACL: MemberSchema =
    member!("SMBFileShareInfo", "ObjectACL", 10, &OBJECT_ACL, Constraints::NONE);
pub(crate) static SMB_FILE_SHARE_INFO_READ_ONLY: MemberSchema =
    member!("SMBFileShareInfo", "ReadOnly", 11, &BOOLEAN, Constraints::NONE);
pub(crate) static SMB_FILE_SHARE_INFO_GUESS_MIME_TYPE_ENABLED: MemberSchema =
    member!("SMBFileShareInfo", "GuessMIMETypeEnabled", 12, &BOOLEAN, Constraints::NONE);
pub(crate) static SMB_FILE_SHARE_INFO_REQUESTER_PAYS: MemberSchema =
    member!("SMBFileShareInfo", "RequesterPays", 13, &BOOLEAN, Constraints::NONE);
pub(crate) static SMB_FILE_SHARE_INFO_SMBACL_ENABLED: MemberSchema =
    member!("SMBFileShareInfo", "SMBACLEnabled", 14, &BOOLEAN, Constraints::NONE);
pub(crate) static SMB_FILE_SHARE_INFO_ADMIN_USER_LIST: MemberSchema = member!(
    "SMBFileShareInfo",
    "AdminUserList",
    15,
    &FILE_SHARE_USER_LIST,
    Constraints::new().length(Some(0), Some(100)),
);
pub(crate) static SMB_FILE_SHARE_INFO_VALID_USER_LIST: MemberSchema = member!(
    "SMBFileShareInfo",
    "ValidUserList",
    16,
    &FILE_SHARE_USER_LIST,
    Constraints::new().length(Some(0), Some(100)),
);
pub(crate) static SMB_FILE_SHARE_INFO_INVALID_USER_LIST: MemberSchema = member!(
    "SMBFileShareInfo",
    "InvalidUserList",
    17,
    &FILE_SHARE_USER_LIST,
    Constraints::new().length(Some(0), Some(100)),
);
pub(crate) static SMB_FILE_SHARE_INFO_AUDIT_DESTINATION_ARN: MemberSchema = member!(
    "SMBFileShareInfo",
    "AuditDestinationARN",
    18,
    &STRING,
    Constraints::new().length(None, Some(1024)),
);
pub(crate) static SMB_FILE_SHARE_INFO_AUTHENTICATION: MemberSchema = member!(
    "SMBFileShareInfo",
    "Authentication",
    19,
    &STRING,
    Constraints::new().length(Some(5), Some(15)),
);
pub(crate) static SMB_FILE_SHARE_INFO_TAGS: MemberSchema =
    member!("SMBFileShareInfo", "Tags", 20, &TAGS, Constraints::NONE);
static SMB_FILE_SHARE_INFO_MEMBERS: [&MemberSchema; 21] = [
    &SMB_FILE_SHARE_INFO_FILE_SHARE_ARN,
    &SMB_FILE_SHARE_INFO_FILE_SHARE_ID,
    &SMB_FILE_SHARE_INFO_FILE_SHARE_STATUS,
    &SMB_FILE_SHARE_INFO_GATEWAY_ARN,
    &SMB_FILE_SHARE_INFO_KMS_ENCRYPTED,
    &SMB_FILE_SHARE_INFO_KMS_KEY,
    &SMB_FILE_SHARE_INFO_PATH,
    &SMB_FILE_SHARE_INFO_ROLE,
    &SMB_FILE_SHARE_INFO_LOCATION_ARN,
    &SMB_FILE_SHARE_INFO_DEFAULT_STORAGE_CLASS,
    &SMB_FILE_SHARE_INFO_OBJECT_ACL,
    &SMB_FILE_SHARE_INFO_READ_ONLY,
    &SMB_FILE_SHARE_INFO_GUESS_MIME_TYPE_ENABLED,
    &SMB_FILE_SHARE_INFO_REQUESTER_PAYS,
    &SMB_FILE_SHARE_INFO_SMBACL_ENABLED,
    &SMB_FILE_SHARE_INFO_ADMIN_USER_LIST,
    &SMB_FILE_SHARE_INFO_VALID_USER_LIST,
    &SMB_FILE_SHARE_INFO_INVALID_USER_LIST,
    &SMB_FILE_SHARE_INFO_AUDIT_DESTINATION_ARN,
    &SMB_FILE_SHARE_INFO_AUTHENTICATION,
    &SMB_FILE_SHARE_INFO_TAGS,
];
pub(crate) static SMB_FILE_SHARE_INFO: StructSchema =
    StructSchema::new(shape_id!("SMBFileShareInfo"), &SMB_FILE_SHARE_INFO_MEMBERS);

pub(crate) static VOLUMEI_SCSI_ATTRIBUTES_TARGET_ARN: MemberSchema = member!(
    "VolumeiSCSIAttributes",
    "TargetARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(800)),
);
pub(crate) static VOLUMEI_SCSI_ATTRIBUTES_NETWORK_INTERFACE_ID: MemberSchema = member!(
    "VolumeiSCSIAttributes",
    "NetworkInterfaceId",
    1,
    &STRING,
    Constraints::new()
        .pattern(r"\A(25[0-5]|2[0-4]\d|[0-1]?\d?\d)(\.(25[0-5]|2[0-4]\d|[0-1]?\d?\d)){3}\z"),
);
pub(crate) static VOLUMEI_SCSI_ATTRIBUTES_NETWORK_INTERFACE_PORT: MemberSchema =
    member!("VolumeiSCSIAttributes", "NetworkInterfacePort", 2, &INTEGER, Constraints::NONE);
pub(crate) static VOLUMEI_SCSI_ATTRIBUTES_LUN_NUMBER: MemberSchema = member!(
    "VolumeiSCSIAttributes",
    "LunNumber",
    3,
    &INTEGER,
    Constraints::new().range(Some(1), None),
);
pub(crate) static VOLUMEI_SCSI_ATTRIBUTES_CHAP_ENABLED: MemberSchema =
    member!("VolumeiSCSIAttributes", "ChapEnabled", 4, &BOOLEAN, Constraints::NONE);
static VOLUMEI_SCSI_ATTRIBUTES_MEMBERS: [&MemberSchema; 5] = [
    &VOLUMEI_SCSI_ATTRIBUTES_TARGET_ARN,
    &VOLUMEI_SCSI_ATTRIBUTES_NETWORK_INTERFACE_ID,
    &VOLUMEI_SCSI_ATTRIBUTES_NETWORK_INTERFACE_PORT,
    &VOLUMEI_SCSI_ATTRIBUTES_LUN_NUMBER,
    &VOLUMEI_SCSI_ATTRIBUTES_CHAP_ENABLED,
];
pub(crate) static VOLUMEI_SCSI_ATTRIBUTES: StructSchema =
    StructSchema::new(shape_id!("VolumeiSCSIAttributes"), &VOLUMEI_SCSI_ATTRIBUTES_MEMBERS);

pub(crate) static STOREDI_SCSI_VOLUME_VOLUME_ARN: MemberSchema = member!(
    "StorediSCSIVolume",
    "VolumeARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
pub(crate) static STOREDI_SCSI_VOLUME_VOLUME_ID: MemberSchema = member!(
    "StorediSCSIVolume",
    "VolumeId",
    1,
    &STRING,
    Constraints::new().length(Some(12), Some(30)),
);
pub(crate) static STOREDI_SCSI_VOLUME_VOLUME_TYPE: MemberSchema = member!(
    "StorediSCSIVolume",
    "VolumeType",
    2,
    &STRING,
    Constraints::new().length(Some(3), Some(100)),
);
pub(crate) static STOREDI_SCSI_VOLUME_VOLUME_STATUS: MemberSchema = member!(
    "StorediSCSIVolume",
    "VolumeStatus",
    3,
    &STRING,
    Constraints::new().length(Some(3), Some(50)),
);
pub(crate) static STOREDI_SCSI_VOLUME_VOLUME_ATTACHMENT_STATUS: MemberSchema = member!(
    "StorediSCSIVolume",
    "VolumeAttachmentStatus",
    4,
    &STRING,
    Constraints::new().length(Some(3), Some(50)),
);
pub(crate) static STOREDI_SCSI_VOLUME_VOLUME_SIZE_IN_BYTES: MemberSchema =
    member!("StorediSCSIVolume", "VolumeSizeInBytes", 5, &LONG, Constraints::NONE);
pub(crate) static STOREDI_SCSI_VOLUME_VOLUME_PROGRESS: MemberSchema =
    member!("StorediSCSIVolume", "VolumeProgress", 6, &DOUBLE, Constraints::NONE);
pub(crate) static STOREDI_SCSI_VOLUME_VOLUME_DISK_ID: MemberSchema = member!(
    "StorediSCSIVolume",
    "VolumeDiskId",
    7,
    &STRING,
    Constraints::new().length(Some(1), Some(300)),
);
pub(crate) static STOREDI_SCSI_VOLUME_SOURCE_SNAPSHOT_ID: MemberSchema = member!(
    "StorediSCSIVolume",
    "SourceSnapshotId",
    8,
    &STRING,
    Constraints::new().pattern(r"\Asnap-([0-9A-Fa-f]{8}|[0-9A-Fa-f]{17})\z"),
);
pub(crate) static STOREDI_SCSI_VOLUME_PRESERVED_EXISTING_DATA: MemberSchema =
    member!("StorediSCSIVolume", "PreservedExistingData", 9, &BOOLEAN, Constraints::NONE);
pub(crate) static STOREDI_SCSI_VOLUME_VOLUMEI_SCSI_ATTRIBUTES: MemberSchema = member!(
    "StorediSCSIVolume",
    "VolumeiSCSIAttributes",
    10,
    &VOLUMEI_SCSI_ATTRIBUTES,
    Constraints::NONE,
);
pub(crate) static STOREDI_SCSI_VOLUME_CREATED_DATE: MemberSchema =
    member!("StorediSCSIVolume", "CreatedDate", 11, &TIMESTAMP, Constraints::NONE);
pub(crate) static STOREDI_SCSI_VOLUME_VOLUME_USED_IN_BYTES: MemberSchema =
    member!("StorediSCSIVolume", "VolumeUsedInBytes", 12, &LONG, Constraints::NONE);
pub(crate) static STOREDI_SCSI_VOLUME_KMS_KEY: MemberSchema = member!(
    "StorediSCSIVolume",
    "KMSKey",
    13,
    &STRING,
    Constraints::new()
        .length(Some(7), Some(2048))
        .pattern(r"(^arn:(aws|aws-cn|aws-us-gov):kms:([a-zA-Z0-9-]+):([0-9]+):(key|alias)/(\S+)$)|(^alias/(\S+)$)"),
);
pub(crate) static STOREDI_SCSI_VOLUME_TARGET_NAME: MemberSchema = member!(
    "StorediSCSIVolume",
    "TargetName",
    14,
    &STRING,
    Constraints::new().length(Some(1), Some(200)).pattern(r"^[-\.;a-z0-9]+$"),
);
static STOREDI_SCSI_VOLUME_MEMBERS: [&MemberSchema; 15] = [
    &STOREDI_SCSI_VOLUME_VOLUME_ARN,
    &STOREDI_SCSI_VOLUME_VOLUME_ID,
    &STOREDI_SCSI_VOLUME_VOLUME_TYPE,
    &STOREDI_SCSI_VOLUME_VOLUME_STATUS,
    &STOREDI_SCSI_VOLUME_VOLUME_ATTACHMENT_STATUS,
    &STOREDI_SCSI_VOLUME_VOLUME_SIZE_IN_BYTES,
    &STOREDI_SCSI_VOLUME_VOLUME_PROGRESS,
    &STOREDI_SCSI_VOLUME_VOLUME_DISK_ID,
    &STOREDI_SCSI_VOLUME_SOURCE_SNAPSHOT_ID,
    &STOREDI_SCSI_VOLUME_PRESERVED_EXISTING_DATA,
    &STOREDI_SCSI_VOLUME_VOLUMEI_SCSI_ATTRIBUTES,
    &STOREDI_SCSI_VOLUME_CREATED_DATE,
    &STOREDI_SCSI_VOLUME_VOLUME_USED_IN_BYTES,
    &STOREDI_SCSI_VOLUME_KMS_KEY,
    &STOREDI_SCSI_VOLUME_TARGET_NAME,
];
pub(crate) static STOREDI_SCSI_VOLUME: StructSchema =
    StructSchema::new(shape_id!("StorediSCSIVolume"), &STOREDI_SCSI_VOLUME_MEMBERS);

pub(crate) static TAPE_TAPE_ARN: MemberSchema = member!(
    "Tape",
    "TapeARN",
    0,
    &STRING,
    Constraints::new()
        .length(Some(50), Some(500))
        .pattern(r"^arn:(aws|aws-cn|aws-us-gov):storagegateway:[a-z\-0-9]+:[0-9]+:tape\/[0-9A-Z]{7,16}$"),
);
pub(crate) static TAPE_TAPE_BARCODE: MemberSchema = member!(
    "Tape",
    "TapeBarcode",
    1,
    &STRING,
    Constraints::new().length(Some(7), Some(16)).pattern(r"^[A-Z0-9]*$"),
);
pub(crate) static TAPE_TAPE_CREATED_DATE: MemberSchema =
    member!("Tape", "TapeCreatedDate", 2, &TIMESTAMP, Constraints::NONE);
pub(crate) static TAPE_TAPE_SIZE_IN_BYTES: MemberSchema =
    member!("Tape", "TapeSizeInBytes", 3, &LONG, Constraints::NONE);
pub(crate) static TAPE_TAPE_STATUS: MemberSchema =
    member!("Tape", "TapeStatus", 4, &STRING, Constraints::NONE);
pub(crate) static TAPE_VTL_DEVICE: MemberSchema =
    member!("Tape", "VTLDevice", 5, &STRING, Constraints::new().length(Some(50), Some(500)));
pub(crate) static TAPE_PROGRESS: MemberSchema =
    member!("Tape", "Progress", 6, &DOUBLE, Constraints::NONE);
pub(crate) static TAPE_TAPE_USED_IN_BYTES: MemberSchema =
    member!("Tape", "TapeUsedInBytes", 7, &LONG, Constraints::NONE);
pub(crate) static TAPE_KMS_KEY: MemberSchema = member!(
    "Tape",
    "KMSKey",
    8,
    &STRING,
    Constraints::new()
        .length(Some(7), Some(2048))
        .pattern(r"(^arn:(aws|aws-cn|aws-us-gov):kms:([a-zA-Z0-9-]+):([0-9]+):(key|alias)/(\S+)$)|(^alias/(\S+)$)"),
);
pub(crate) static TAPE_POOL_ID: MemberSchema =
    member!("Tape", "PoolId", 9, &STRING, Constraints::new().length(Some(1), Some(100)));
static TAPE_MEMBERS: [&MemberSchema; 10] = [
    &TAPE_TAPE_ARN,
    &TAPE_TAPE_BARCODE,
    &TAPE_TAPE_CREATED_DATE,
    &TAPE_TAPE_SIZE_IN_BYTES,
    &TAPE_TAPE_STATUS,
    &TAPE_VTL_DEVICE,
    &TAPE_PROGRESS,
    &TAPE_TAPE_USED_IN_BYTES,
    &TAPE_KMS_KEY,
    &TAPE_POOL_ID,
];
pub(crate) static TAPE: StructSchema =
    StructSchema::new(shape_id!("Tape"), &TAPE_MEMBERS);

pub(crate) static STORAGE_GATEWAY_ERROR_ERROR_CODE: MemberSchema =
    member!("StorageGatewayError", "errorCode", 0, &ERROR_CODE, Constraints::NONE);
pub(crate) static STORAGE_GATEWAY_ERROR_ERROR_DETAILS: MemberSchema =
    member!("StorageGatewayError", "errorDetails", 1, &ERROR_DETAILS, Constraints::NONE);
static STORAGE_GATEWAY_ERROR_MEMBERS: [&MemberSchema; 2] = [
    &STORAGE_GATEWAY_ERROR_ERROR_CODE,
    &STORAGE_GATEWAY_ERROR_ERROR_DETAILS,
];
pub(crate) static STORAGE_GATEWAY_ERROR: StructSchema =
    StructSchema::new(shape_id!("StorageGatewayError"), &STORAGE_GATEWAY_ERROR_MEMBERS);

// Operation inputs

pub(crate) static ACTIVATE_GATEWAY_INPUT_ACTIVATION_KEY: MemberSchema = member!(
    "ActivateGatewayInput",
    "ActivationKey",
    0,
    &STRING,
    Constraints::new().required().length(Some(1), Some(50)),
);
pub(crate) static ACTIVATE_GATEWAY_INPUT_GATEWAY_NAME: MemberSchema = member!(
    "ActivateGatewayInput",
    "GatewayName",
    1,
    &STRING,
    Constraints::new()
        .required()
        .length(Some(2), Some(255))
        .pattern(r"^[ -\.0-\[\]-~]*[!-\.0-\[\]-~][ -\.0-\[\]-~]*$"),
);
pub(crate) static ACTIVATE_GATEWAY_INPUT_GATEWAY_TIMEZONE: MemberSchema = member!(
    "ActivateGatewayInput",
    "GatewayTimezone",
    2,
    &STRING,
    Constraints::new().required().length(Some(3), Some(10)),
);
pub(crate) static ACTIVATE_GATEWAY_INPUT_GATEWAY_REGION: MemberSchema = member!(
    "ActivateGatewayInput",
    "GatewayRegion",
    3,
    &STRING,
    Constraints::new().required().length(Some(1), Some(25)),
);
pub(crate) static ACTIVATE_GATEWAY_INPUT_GATEWAY_TYPE: MemberSchema = member!(
    "ActivateGatewayInput",
    "GatewayType",
    4,
    &STRING,
    Constraints::new().length(Some(2), Some(20)),
);
pub(crate) static ACTIVATE_GATEWAY_INPUT_TAPE_DRIVE_TYPE: MemberSchema = member!(
    "ActivateGatewayInput",
    "TapeDriveType",
    5,
    &STRING,
    Constraints::new().length(Some(2), Some(50)),
);
pub(crate) static ACTIVATE_GATEWAY_INPUT_MEDIUM_CHANGER_TYPE: MemberSchema = member!(
    "ActivateGatewayInput",
    "MediumChangerType",
    6,
    &STRING,
    Constraints::new().length(Some(2), Some(50)),
);
pub(crate) static ACTIVATE_GATEWAY_INPUT_TAGS: MemberSchema =
    member!("ActivateGatewayInput", "Tags", 7, &TAGS, Constraints::NONE);
static ACTIVATE_GATEWAY_INPUT_MEMBERS: [&MemberSchema; 8] = [
    &ACTIVATE_GATEWAY_INPUT_ACTIVATION_KEY,
    &ACTIVATE_GATEWAY_INPUT_GATEWAY_NAME,
    &ACTIVATE_GATEWAY_INPUT_GATEWAY_TIMEZONE,
    &ACTIVATE_GATEWAY_INPUT_GATEWAY_REGION,
    &ACTIVATE_GATEWAY_INPUT_GATEWAY_TYPE,
    &ACTIVATE_GATEWAY_INPUT_TAPE_DRIVE_TYPE,
    &ACTIVATE_GATEWAY_INPUT_MEDIUM_CHANGER_TYPE,
    &ACTIVATE_GATEWAY_INPUT_TAGS,
];
pub(crate) static ACTIVATE_GATEWAY_INPUT: StructSchema =
    StructSchema::new(shape_id!("ActivateGatewayInput"), &ACTIVATE_GATEWAY_INPUT_MEMBERS);

pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_CLIENT_TOKEN: MemberSchema = member!(
    "CreateNFSFileShareInput",
    "ClientToken",
    0,
    &STRING,
    Constraints::new().required().length(Some(5), Some(100)),
);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_NFS_FILE_SHARE_DEFAULTS: MemberSchema = member!(
    "CreateNFSFileShareInput",
    "NFSFileShareDefaults",
    1,
    &NFS_FILE_SHARE_DEFAULTS,
    Constraints::NONE,
);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_GATEWAY_ARN: MemberSchema = member!(
    "CreateNFSFileShareInput",
    "GatewayARN",
    2,
    &STRING,
    Constraints::new().required().length(Some(50), Some(500)),
);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_KMS_ENCRYPTED: MemberSchema =
    member!("CreateNFSFileShareInput", "KMSEncrypted", 3, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_KMS_KEY: MemberSchema = member!(
    "CreateNFSFileShareInput",
    "KMSKey",
    4,
    &STRING,
    Constraints::new()
        .length(Some(7), Some(2048))
        .pattern(r"(^arn:(aws|aws-cn|aws-us-gov):kms:([a-zA-Z0-9-]+):([0-9]+):(key|alias)/(\S+)$)|(^alias/(\S+)$)"),
);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_ROLE: MemberSchema = member!(
    "CreateNFSFileShareInput",
    "Role",
    5,
    &STRING,
    Constraints::new()
        .required()
        .length(Some(20), Some(2048))
        .pattern(r"^arn:(aws|aws-cn|aws-us-gov|aws-iso|aws-iso-b):iam::([0-9]+):role/(\S+)$"),
);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_LOCATION_ARN: MemberSchema = member!(
    "CreateNFSFileShareInput",
    "LocationARN",
    6,
    &STRING,
    Constraints::new().required().length(Some(16), Some(310)),
);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS: MemberSchema = member!(
    "CreateNFSFileShareInput",
    "DefaultStorageClass",
    7,
    &STRING,
    Constraints::new().length(Some(5), Some(50)),
);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_OBJECT_ACL: MemberSchema =
    member!("CreateNFSFileShareInput", "ObjectACL", 8, &OBJECT_ACL, Constraints::NONE);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_CLIENT_LIST: MemberSchema = member!(
    "CreateNFSFileShareInput",
    "ClientList",
    9,
    &FILE_SHARE_CLIENT_LIST,
    Constraints::new().length(Some(1), Some(100)),
);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_SQUASH: MemberSchema = member!(
    "CreateNFSFileShareInput",
    "Squash",
    10,
    &STRING,
    Constraints::new().length(Some(5), Some(15)),
);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_READ_ONLY: MemberSchema =
    member!("CreateNFSFileShareInput", "ReadOnly", 11, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED: MemberSchema =
    member!("CreateNFSFileShareInput", "GuessMIMETypeEnabled", 12, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_REQUESTER_PAYS: MemberSchema =
    member!("CreateNFSFileShareInput", "RequesterPays", 13, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT_TAGS: MemberSchema =
    member!("CreateNFSFileShareInput", "Tags", 14, &TAGS, Constraints::NONE);
static CREATE_NFS_FILE_SHARE_INPUT_MEMBERS: [&MemberSchema; 15] = [
    &CREATE_NFS_FILE_SHARE_INPUT_CLIENT_TOKEN,
    &CREATE_NFS_FILE_SHARE_INPUT_NFS_FILE_SHARE_DEFAULTS,
    &CREATE_NFS_FILE_SHARE_INPUT_GATEWAY_ARN,
    &CREATE_NFS_FILE_SHARE_INPUT_KMS_ENCRYPTED,
    &CREATE_NFS_FILE_SHARE_INPUT_KMS_KEY,
    &CREATE_NFS_FILE_SHARE_INPUT_ROLE,
    &CREATE_NFS_FILE_SHARE_INPUT_LOCATION_ARN,
    &CREATE_NFS_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS,
    &CREATE_NFS_FILE_SHARE_INPUT_OBJECT_ACL,
    &CREATE_NFS_FILE_SHARE_INPUT_CLIENT_LIST,
    &CREATE_NFS_FILE_SHARE_INPUT_SQUASH,
    &CREATE_NFS_FILE_SHARE_INPUT_READ_ONLY,
    &CREATE_NFS_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED,
    &CREATE_NFS_FILE_SHARE_INPUT_REQUESTER_PAYS,
    &CREATE_NFS_FILE_SHARE_INPUT_TAGS,
];
pub(crate) static CREATE_NFS_FILE_SHARE_INPUT: StructSchema =
    StructSchema::new(shape_id!("CreateNFSFileShareInput"), &CREATE_NFS_FILE_SHARE_INPUT_MEMBERS);

pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_FILE_SHARE_ARN: MemberSchema = member!(
    "UpdateNFSFileShareInput",
    "FileShareARN",
    0,
    &STRING,
    Constraints::new().required().length(Some(50), Some(500)),
);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_KMS_ENCRYPTED: MemberSchema =
    member!("UpdateNFSFileShareInput", "KMSEncrypted", 1, &BOOLEAN, Constraints::NONE);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_KMS_KEY: MemberSchema = member!(
    "UpdateNFSFileShareInput",
    "KMSKey",
    2,
    &STRING,
    Constraints::new()
        .length(Some(7), Some(2048))
        .pattern(r"(^arn:(aws|aws-cn|aws-us-gov):kms:([a-zA-Z0-9-]+):([0-9]+):(key|alias)/(\S+)$)|(^alias/(\S+)$)"),
);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_NFS_FILE_SHARE_DEFAULTS: MemberSchema = member!(
    "UpdateNFSFileShareInput",
    "NFSFileShareDefaults",
    3,
    &NFS_FILE_SHARE_DEFAULTS,
    Constraints::NONE,
);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS: MemberSchema = member!(
    "UpdateNFSFileShareInput",
    "DefaultStorageClass",
    4,
    &STRING,
    Constraints::new().length(Some(5), Some(50)),
);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_OBJECT_ACL: MemberSchema =
    member!("UpdateNFSFileShareInput", "ObjectACL", 5, &OBJECT_ACL, Constraints::NONE);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_CLIENT_LIST: MemberSchema = member!(
    "UpdateNFSFileShareInput",
    "ClientList",
    6,
    &FILE_SHARE_CLIENT_LIST,
    Constraints::new().length(Some(1), Some(100)),
);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_SQUASH: MemberSchema = member!(
    "UpdateNFSFileShareInput",
    "Squash",
    7,
    &STRING,
    Constraints::new().length(Some(5), Some(15)),
);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_READ_ONLY: MemberSchema =
    member!("UpdateNFSFileShareInput", "ReadOnly", 8, &BOOLEAN, Constraints::NONE);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED: MemberSchema =
    member!("UpdateNFSFileShareInput", "GuessMIMETypeEnabled", 9, &BOOLEAN, Constraints::NONE);
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT_REQUESTER_PAYS: MemberSchema =
    member!("UpdateNFSFileShareInput", "RequesterPays", 10, &BOOLEAN, Constraints::NONE);
static UPDATE_NFS_FILE_SHARE_INPUT_MEMBERS: [&MemberSchema; 11] = [
    &UPDATE_NFS_FILE_SHARE_INPUT_FILE_SHARE_ARN,
    &UPDATE_NFS_FILE_SHARE_INPUT_KMS_ENCRYPTED,
    &UPDATE_NFS_FILE_SHARE_INPUT_KMS_KEY,
    &UPDATE_NFS_FILE_SHARE_INPUT_NFS_FILE_SHARE_DEFAULTS,
    &UPDATE_NFS_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS,
    &UPDATE_NFS_FILE_SHARE_INPUT_OBJECT_ACL,
    &UPDATE_NFS_FILE_SHARE_INPUT_CLIENT_LIST,
    &UPDATE_NFS_FILE_SHARE_INPUT_SQUASH,
    &UPDATE_NFS_FILE_SHARE_INPUT_READ_ONLY,
    &UPDATE_NFS_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED,
    &UPDATE_NFS_FILE_SHARE_INPUT_REQUESTER_PAYS,
];
pub(crate) static UPDATE_NFS_FILE_SHARE_INPUT: StructSchema =
    StructSchema::new(shape_id!("UpdateNFSFileShareInput"), &UPDATE_NFS_FILE_SHARE_INPUT_MEMBERS);

pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_CLIENT_TOKEN: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "ClientToken",
    0,
    &STRING,
    Constraints::new().required().length(Some(5), Some(100)),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_GATEWAY_ARN: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "GatewayARN",
    1,
    &STRING,
    Constraints::new().required().length(Some(50), Some(500)),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_KMS_ENCRYPTED: MemberSchema =
    member!("CreateSMBFileShareInput", "KMSEncrypted", 2, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_KMS_KEY: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "KMSKey",
    3,
    &STRING,
    Constraints::new()
        .length(Some(7), Some(2048))
        .pattern(r"(^arn:(aws|aws-cn|aws-us-gov):kms:([a-zA-Z0-9-]+):([0-9]+):(key|alias)/(\S+)$)|(^alias/(\S+)$)"),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_ROLE: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "Role",
    4,
    &STRING,
    Constraints::new()
        .required()
        .length(Some(20), Some(2048))
        .pattern(r"^arn:(aws|aws-cn|aws-us-gov|aws-iso|aws-iso-b):iam::([0-9]+):role/(\S+)$"),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_LOCATION_ARN: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "LocationARN",
    5,
    &STRING,
    Constraints::new().required().length(Some(16), Some(310)),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "DefaultStorageClass",
    6,
    &STRING,
    Constraints::new().length(Some(5), Some(50)),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_OBJECT_ACL: MemberSchema =
    member!("CreateSMBFileShareInput", "ObjectACL", 7, &OBJECT_ACL, Constraints::NONE);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_READ_ONLY: MemberSchema =
    member!("CreateSMBFileShareInput", "ReadOnly", 8, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED: MemberSchema =
    member!("CreateSMBFileShareInput", "GuessMIMETypeEnabled", 9, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_REQUESTER_PAYS: MemberSchema =
    member!("CreateSMBFileShareInput", "RequesterPays", 10, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_SMBACL_ENABLED: MemberSchema =
    member!("CreateSMBFileShareInput", "SMBACLEnabled", 11, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_ADMIN_USER_LIST: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "AdminUserList",
    12,
    &FILE_SHARE_USER_LIST,
    Constraints::new().length(Some(0), Some(100)),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_VALID_USER_LIST: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "ValidUserList",
    13,
    &FILE_SHARE_USER_LIST,
    Constraints::new().length(Some(0), Some(100)),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_INVALID_USER_LIST: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "InvalidUserList",
    14,
    &FILE_SHARE_USER_LIST,
    Constraints::new().length(Some(0), Some(100)),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_AUDIT_DESTINATION_ARN: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "AuditDestinationARN",
    15,
    &STRING,
    Constraints::new().length(None, Some(1024)),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_AUTHENTICATION: MemberSchema = member!(
    "CreateSMBFileShareInput",
    "Authentication",
    16,
    &STRING,
    Constraints::new().length(Some(5), Some(15)),
);
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT_TAGS: MemberSchema =
    member!("CreateSMBFileShareInput", "Tags", 17, &TAGS, Constraints::NONE);
static CREATE_SMB_FILE_SHARE_INPUT_MEMBERS: [&MemberSchema; 18] = [
    &CREATE_SMB_FILE_SHARE_INPUT_CLIENT_TOKEN,
    &CREATE_SMB_FILE_SHARE_INPUT_GATEWAY_ARN,
    &CREATE_SMB_FILE_SHARE_INPUT_KMS_ENCRYPTED,
    &CREATE_SMB_FILE_SHARE_INPUT_KMS_KEY,
    &CREATE_SMB_FILE_SHARE_INPUT_ROLE,
    &CREATE_SMB_FILE_SHARE_INPUT_LOCATION_ARN,
    &CREATE_SMB_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS,
    &CREATE_SMB_FILE_SHARE_INPUT_OBJECT_ACL,
    &CREATE_SMB_FILE_SHARE_INPUT_READ_ONLY,
    &CREATE_SMB_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED,
    &CREATE_SMB_FILE_SHARE_INPUT_REQUESTER_PAYS,
    &CREATE_SMB_FILE_SHARE_INPUT_SMBACL_ENABLED,
    &CREATE_SMB_FILE_SHARE_INPUT_ADMIN_USER_LIST,
    &CREATE_SMB_FILE_SHARE_INPUT_VALID_USER_LIST,
    &CREATE_SMB_FILE_SHARE_INPUT_INVALID_USER_LIST,
    &CREATE_SMB_FILE_SHARE_INPUT_AUDIT_DESTINATION_ARN,
    &CREATE_SMB_FILE_SHARE_INPUT_AUTHENTICATION,
    &CREATE_SMB_FILE_SHARE_INPUT_TAGS,
];
pub(crate) static CREATE_SMB_FILE_SHARE_INPUT: StructSchema =
    StructSchema::new(shape_id!("CreateSMBFileShareInput"), &CREATE_SMB_FILE_SHARE_INPUT_MEMBERS);

pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_FILE_SHARE_ARN: MemberSchema = member!(
    "UpdateSMBFileShareInput",
    "FileShareARN",
    0,
    &STRING,
    Constraints::new().required().length(Some(50), Some(500)),
);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_KMS_ENCRYPTED: MemberSchema =
    member!("UpdateSMBFileShareInput", "KMSEncrypted", 1, &BOOLEAN, Constraints::NONE);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_KMS_KEY: MemberSchema = member!(
    "UpdateSMBFileShareInput",
    "KMSKey",
    2,
    &STRING,
    Constraints::new()
        .length(Some(7), Some(2048))
        .pattern(r"(^arn:(aws|aws-cn|aws-us-gov):kms:([a-zA-Z0-9-]+):([0-9]+):(key|alias)/(\S+)$)|(^alias/(\S+)$)"),
);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS: MemberSchema = member!(
    "UpdateSMBFileShareInput",
    "DefaultStorageClass",
    3,
    &STRING,
    Constraints::new().length(Some(5), Some(50)),
);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_OBJECT_ACL: MemberSchema =
    member!("UpdateSMBFileShareInput", "ObjectACL", 4, &OBJECT_ACL, Constraints::NONE);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_READ_ONLY: MemberSchema =
    member!("UpdateSMBFileShareInput", "ReadOnly", 5, &BOOLEAN, Constraints::NONE);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED: MemberSchema =
    member!("UpdateSMBFileShareInput", "GuessMIMETypeEnabled", 6, &BOOLEAN, Constraints::NONE);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_REQUESTER_PAYS: MemberSchema =
    member!("UpdateSMBFileShareInput", "RequesterPays", 7, &BOOLEAN, Constraints::NONE);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_SMBACL_ENABLED: MemberSchema =
    member!("UpdateSMBFileShareInput", "SMBACLEnabled", 8, &BOOLEAN, Constraints::NONE);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_ADMIN_USER_LIST: MemberSchema = member!(
    "UpdateSMBFileShareInput",
    "AdminUserList",
    9,
    &FILE_SHARE_USER_LIST,
    Constraints::new().length(Some(0), Some(100)),
);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_VALID_USER_LIST: MemberSchema = member!(
    "UpdateSMBFileShareInput",
    "ValidUserList",
    10,
    &FILE_SHARE_USER_LIST,
    Constraints::new().length(Some(0), Some(100)),
);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_INVALID_USER_LIST: MemberSchema = member!(
    "UpdateSMBFileShareInput",
    "InvalidUserList",
    11,
    &FILE_SHARE_USER_LIST,
    Constraints::new().length(Some(0), Some(100)),
);
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT_AUDIT_DESTINATION_ARN: MemberSchema = member!(
    "UpdateSMBFileShareInput",
    "AuditDestinationARN",
    12,
    &STRING,
    Constraints::new().length(None, Some(1024)),
);
static UPDATE_SMB_FILE_SHARE_INPUT_MEMBERS: [&MemberSchema; 13] = [
    &UPDATE_SMB_FILE_SHARE_INPUT_FILE_SHARE_ARN,
    &UPDATE_SMB_FILE_SHARE_INPUT_KMS_ENCRYPTED,
    &UPDATE_SMB_FILE_SHARE_INPUT_KMS_KEY,
    &UPDATE_SMB_FILE_SHARE_INPUT_DEFAULT_STORAGE_CLASS,
    &UPDATE_SMB_FILE_SHARE_INPUT_OBJECT_ACL,
    &UPDATE_SMB_FILE_SHARE_INPUT_READ_ONLY,
    &UPDATE_SMB_FILE_SHARE_INPUT_GUESS_MIME_TYPE_ENABLED,
    &UPDATE_SMB_FILE_SHARE_INPUT_REQUESTER_PAYS,
    &UPDATE_SMB_FILE_SHARE_INPUT_SMBACL_ENABLED,
    &UPDATE_SMB_FILE_SHARE_INPUT_ADMIN_USER_LIST,
    &UPDATE_SMB_FILE_SHARE_INPUT_VALID_USER_LIST,
    &UPDATE_SMB_FILE_SHARE_INPUT_INVALID_USER_LIST,
    &UPDATE_SMB_FILE_SHARE_INPUT_AUDIT_DESTINATION_ARN,
];
pub(crate) static UPDATE_SMB_FILE_SHARE_INPUT: StructSchema =
    StructSchema::new(shape_id!("UpdateSMBFileShareInput"), &UPDATE_SMB_FILE_SHARE_INPUT_MEMBERS);

pub(crate) static DESCRIBE_NFS_FILE_SHARES_INPUT_FILE_SHARE_ARN_LIST: MemberSchema = member!(
    "DescribeNFSFileSharesInput",
    "FileShareARNList",
    0,
    &FILE_SHARE_ARN_LIST,
    Constraints::new().required().length(Some(1), Some(10)),
);
static DESCRIBE_NFS_FILE_SHARES_INPUT_MEMBERS: [&MemberSchema; 1] = [
    &DESCRIBE_NFS_FILE_SHARES_INPUT_FILE_SHARE_ARN_LIST,
];
pub(crate) static DESCRIBE_NFS_FILE_SHARES_INPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeNFSFileSharesInput"), &DESCRIBE_NFS_FILE_SHARES_INPUT_MEMBERS);

pub(crate) static DESCRIBE_SMB_FILE_SHARES_INPUT_FILE_SHARE_ARN_LIST: MemberSchema = member!(
    "DescribeSMBFileSharesInput",
    "FileShareARNList",
    0,
    &FILE_SHARE_ARN_LIST,
    Constraints::new().required().length(Some(1), Some(10)),
);
static DESCRIBE_SMB_FILE_SHARES_INPUT_MEMBERS: [&MemberSchema; 1] = [
    &DESCRIBE_SMB_FILE_SHARES_INPUT_FILE_SHARE_ARN_LIST,
];
pub(crate) static DESCRIBE_SMB_FILE_SHARES_INPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeSMBFileSharesInput"), &DESCRIBE_SMB_FILE_SHARES_INPUT_MEMBERS);

pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT_GATEWAY_ARN: MemberSchema = member!(
    "CreateStorediSCSIVolumeInput",
    "GatewayARN",
    0,
    &STRING,
    Constraints::new().required().length(Some(50), Some(500)),
);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT_DISK_ID: MemberSchema = member!(
    "CreateStorediSCSIVolumeInput",
    "DiskId",
    1,
    &STRING,
    Constraints::new().required().length(Some(1), Some(300)),
);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT_SNAPSHOT_ID: MemberSchema = member!(
    "CreateStorediSCSIVolumeInput",
    "SnapshotId",
    2,
    &STRING,
    Constraints::new().pattern(r"\Asnap-([0-9A-Fa-f]{8}|[0-9A-Fa-f]{17})\z"),
);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT_PRESERVE_EXISTING_DATA: MemberSchema = member!(
    "CreateStorediSCSIVolumeInput",
    "PreserveExistingData",
    3,
    &BOOLEAN,
    Constraints::new().required(),
);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT_TARGET_NAME: MemberSchema = member!(
    "CreateStorediSCSIVolumeInput",
    "TargetName",
    4,
    &STRING,
    Constraints::new().required().length(Some(1), Some(200)).pattern(r"^[-\.;a-z0-9]+$"),
);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT_NETWORK_INTERFACE_ID: MemberSchema = member!(
    "CreateStorediSCSIVolumeInput",
    "NetworkInterfaceId",
    5,
    &STRING,
    Constraints::new()
        .required()
        .pattern(r"\A(25[0-5]|2[0-4]\d|[0-1]?\d?\d)(\.(25[0-5]|2[0-4]\d|[0-1]?\d?\d)){3}\z"),
);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT_KMS_ENCRYPTED: MemberSchema =
    member!("CreateStorediSCSIVolumeInput", "KMSEncrypted", 6, &BOOLEAN, Constraints::NONE);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT_KMS_KEY: MemberSchema = member!(
    "CreateStorediSCSIVolumeInput",
    "KMSKey",
    7,
    &STRING,
    Constraints::new()
        .length(Some(7), Some(2048))
        .pattern(r"(^arn:(aws|aws-cn|aws-us-gov):kms:([a-zA-Z0-9-]+):([0-9]+):(key|alias)/(\S+)$)|(^alias/(\S+)$)"),
);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT_TAGS: MemberSchema =
    member!("CreateStorediSCSIVolumeInput", "Tags", 8, &TAGS, Constraints::NONE);
static CREATE_STOREDI_SCSI_VOLUME_INPUT_MEMBERS: [&MemberSchema; 9] = [
    &CREATE_STOREDI_SCSI_VOLUME_INPUT_GATEWAY_ARN,
    &CREATE_STOREDI_SCSI_VOLUME_INPUT_DISK_ID,
    &CREATE_STOREDI_SCSI_VOLUME_INPUT_SNAPSHOT_ID,
    &CREATE_STOREDI_SCSI_VOLUME_INPUT_PRESERVE_EXISTING_DATA,
    &CREATE_STOREDI_SCSI_VOLUME_INPUT_TARGET_NAME,
    &CREATE_STOREDI_SCSI_VOLUME_INPUT_NETWORK_INTERFACE_ID,
    &CREATE_STOREDI_SCSI_VOLUME_INPUT_KMS_ENCRYPTED,
    &CREATE_STOREDI_SCSI_VOLUME_INPUT_KMS_KEY,
    &CREATE_STOREDI_SCSI_VOLUME_INPUT_TAGS,
];
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_INPUT: StructSchema =
    StructSchema::new(shape_id!("CreateStorediSCSIVolumeInput"), &CREATE_STOREDI_SCSI_VOLUME_INPUT_MEMBERS);

pub(crate) static DESCRIBE_STOREDI_SCSI_VOLUMES_INPUT_VOLUME_ARNS: MemberSchema = member!(
    "DescribeStorediSCSIVolumesInput",
    "VolumeARNs",
    0,
    &VOLUME_ARNS,
    Constraints::new().required(),
);
static DESCRIBE_STOREDI_SCSI_VOLUMES_INPUT_MEMBERS: [&MemberSchema; 1] = [
    &DESCRIBE_STOREDI_SCSI_VOLUMES_INPUT_VOLUME_ARNS,
];
pub(crate) static DESCRIBE_STOREDI_SCSI_VOLUMES_INPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeStorediSCSIVolumesInput"), &DESCRIBE_STOREDI_SCSI_VOLUMES_INPUT_MEMBERS);

pub(crate) static DESCRIBE_CACHE_INPUT_GATEWAY_ARN: MemberSchema = member!(
    "DescribeCacheInput",
    "GatewayARN",
    0,
    &STRING,
    Constraints::new().required().length(Some(50), Some(500)),
);
static DESCRIBE_CACHE_INPUT_MEMBERS: [&MemberSchema; 1] = [&DESCRIBE_CACHE_INPUT_GATEWAY_ARN];
pub(crate) static DESCRIBE_CACHE_INPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeCacheInput"), &DESCRIBE_CACHE_INPUT_MEMBERS);

pub(crate) static JOIN_DOMAIN_INPUT_GATEWAY_ARN: MemberSchema = member!(
    "JoinDomainInput",
    "GatewayARN",
    0,
    &STRING,
    Constraints::new().required().length(Some(50), Some(500)),
);
pub(crate) static JOIN_DOMAIN_INPUT_DOMAIN_NAME: MemberSchema = member!(
    "JoinDomainInput",
    "DomainName",
    1,
    &STRING,
    Constraints::new()
        .required()
        .length(Some(1), Some(1024))
        .pattern(r"^([a-z0-9]+(-[a-z0-9]+)*\.)+[a-z]{2,}$"),
);
pub(crate) static JOIN_DOMAIN_INPUT_ORGANIZATIONAL_UNIT: MemberSchema = member!(
    "JoinDomainInput",
    "OrganizationalUnit",
    2,
    &STRING,
    Constraints::new().length(Some(1), Some(1024)),
);
pub(crate) static JOIN_DOMAIN_INPUT_DOMAIN_CONTROLLERS: MemberSchema =
    member!("JoinDomainInput", "DomainControllers", 3, &HOSTS, Constraints::NONE);
pub(crate) static JOIN_DOMAIN_INPUT_TIMEOUT_IN_SECONDS: MemberSchema = member!(
    "JoinDomainInput",
    "TimeoutInSeconds",
    4,
    &INTEGER,
    Constraints::new().range(Some(0), Some(3600)),
);
pub(crate) static JOIN_DOMAIN_INPUT_USER_NAME: MemberSchema = member!(
    "JoinDomainInput",
    "UserName",
    5,
    &STRING,
    Constraints::new().required().length(Some(1), Some(1024)).pattern(r"^\w[\w\.\- ]*$"),
);
pub(crate) static JOIN_DOMAIN_INPUT_PASSWORD: MemberSchema = member!(
    "JoinDomainInput",
    "Password",
    6,
    &STRING,
    Constraints::new().required().length(Some(1), Some(1024)).pattern(r"^[ -~]+$").sensitive(),
);
static JOIN_DOMAIN_INPUT_MEMBERS: [&MemberSchema; 7] = [
    &JOIN_DOMAIN_INPUT_GATEWAY_ARN,
    &JOIN_DOMAIN_INPUT_DOMAIN_NAME,
    &JOIN_DOMAIN_INPUT_ORGANIZATIONAL_UNIT,
    &JOIN_DOMAIN_INPUT_DOMAIN_CONTROLLERS,
    &JOIN_DOMAIN_INPUT_TIMEOUT_IN_SECONDS,
    &JOIN_DOMAIN_INPUT_USER_NAME,
    &JOIN_DOMAIN_INPUT_PASSWORD,
];
pub(crate) static JOIN_DOMAIN_INPUT: StructSchema =
    StructSchema::new(shape_id!("JoinDomainInput"), &JOIN_DOMAIN_INPUT_MEMBERS);

pub(crate) static DESCRIBE_TAPES_INPUT_GATEWAY_ARN: MemberSchema = member!(
    "DescribeTapesInput",
    "GatewayARN",
    0,
    &STRING,
    Constraints::new().required().length(Some(50), Some(500)),
);
pub(crate) static DESCRIBE_TAPES_INPUT_TAPE_ARNS: MemberSchema =
    member!("DescribeTapesInput", "TapeARNs", 1, &TAPE_ARNS, Constraints::NONE);
pub(crate) static DESCRIBE_TAPES_INPUT_MARKER: MemberSchema = member!(
    "DescribeTapesInput",
    "Marker",
    2,
    &STRING,
    Constraints::new().length(Some(1), Some(1000)),
);
pub(crate) static DESCRIBE_TAPES_INPUT_LIMIT: MemberSchema =
    member!("DescribeTapesInput", "Limit", 3, &INTEGER, Constraints::new().range(Some(1), None));
static DESCRIBE_TAPES_INPUT_MEMBERS: [&MemberSchema; 4] = [
    &DESCRIBE_TAPES_INPUT_GATEWAY_ARN,
    &DESCRIBE_TAPES_INPUT_TAPE_ARNS,
    &DESCRIBE_TAPES_INPUT_MARKER,
    &DESCRIBE_TAPES_INPUT_LIMIT,
];
pub(crate) static DESCRIBE_TAPES_INPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeTapesInput"), &DESCRIBE_TAPES_INPUT_MEMBERS);

pub(crate) static ADD_TAGS_TO_RESOURCE_INPUT_RESOURCE_ARN: MemberSchema = member!(
    "AddTagsToResourceInput",
    "ResourceARN",
    0,
    &STRING,
    Constraints::new().required().length(Some(50), Some(500)),
);
pub(crate) static ADD_TAGS_TO_RESOURCE_INPUT_TAGS: MemberSchema =
    member!("AddTagsToResourceInput", "Tags", 1, &TAGS, Constraints::new().required());
static ADD_TAGS_TO_RESOURCE_INPUT_MEMBERS: [&MemberSchema; 2] = [
    &ADD_TAGS_TO_RESOURCE_INPUT_RESOURCE_ARN,
    &ADD_TAGS_TO_RESOURCE_INPUT_TAGS,
];
pub(crate) static ADD_TAGS_TO_RESOURCE_INPUT: StructSchema =
    StructSchema::new(shape_id!("AddTagsToResourceInput"), &ADD_TAGS_TO_RESOURCE_INPUT_MEMBERS);

// Operation outputs

pub(crate) static ACTIVATE_GATEWAY_OUTPUT_GATEWAY_ARN: MemberSchema = member!(
    "ActivateGatewayOutput",
    "GatewayARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
static ACTIVATE_GATEWAY_OUTPUT_MEMBERS: [&MemberSchema; 1] = [&ACTIVATE_GATEWAY_OUTPUT_GATEWAY_ARN];
pub(crate) static ACTIVATE_GATEWAY_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("ActivateGatewayOutput"), &ACTIVATE_GATEWAY_OUTPUT_MEMBERS);

pub(crate) static CREATE_NFS_FILE_SHARE_OUTPUT_FILE_SHARE_ARN: MemberSchema = member!(
    "CreateNFSFileShareOutput",
    "FileShareARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
static CREATE_NFS_FILE_SHARE_OUTPUT_MEMBERS: [&MemberSchema; 1] = [
    &CREATE_NFS_FILE_SHARE_OUTPUT_FILE_SHARE_ARN,
];
pub(crate) static CREATE_NFS_FILE_SHARE_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("CreateNFSFileShareOutput"), &CREATE_NFS_FILE_SHARE_OUTPUT_MEMBERS);

pub(crate) static UPDATE_NFS_FILE_SHARE_OUTPUT_FILE_SHARE_ARN: MemberSchema = member!(
    "UpdateNFSFileShareOutput",
    "FileShareARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
static UPDATE_NFS_FILE_SHARE_OUTPUT_MEMBERS: [&MemberSchema; 1] = [
    &UPDATE_NFS_FILE_SHARE_OUTPUT_FILE_SHARE_ARN,
];
pub(crate) static UPDATE_NFS_FILE_SHARE_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("UpdateNFSFileShareOutput"), &UPDATE_NFS_FILE_SHARE_OUTPUT_MEMBERS);

pub(crate) static CREATE_SMB_FILE_SHARE_OUTPUT_FILE_SHARE_ARN: MemberSchema = member!(
    "CreateSMBFileShareOutput",
    "FileShareARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
static CREATE_SMB_FILE_SHARE_OUTPUT_MEMBERS: [&MemberSchema; 1] = [
    &CREATE_SMB_FILE_SHARE_OUTPUT_FILE_SHARE_ARN,
];
pub(crate) static CREATE_SMB_FILE_SHARE_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("CreateSMBFileShareOutput"), &CREATE_SMB_FILE_SHARE_OUTPUT_MEMBERS);

pub(crate) static UPDATE_SMB_FILE_SHARE_OUTPUT_FILE_SHARE_ARN: MemberSchema = member!(
    "UpdateSMBFileShareOutput",
    "FileShareARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
static UPDATE_SMB_FILE_SHARE_OUTPUT_MEMBERS: [&MemberSchema; 1] = [
    &UPDATE_SMB_FILE_SHARE_OUTPUT_FILE_SHARE_ARN,
];
pub(crate) static UPDATE_SMB_FILE_SHARE_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("UpdateSMBFileShareOutput"), &UPDATE_SMB_FILE_SHARE_OUTPUT_MEMBERS);

pub(crate) static DESCRIBE_NFS_FILE_SHARES_OUTPUT_NFS_FILE_SHARE_INFO_LIST: MemberSchema = member!(
    "DescribeNFSFileSharesOutput",
    "NFSFileShareInfoList",
    0,
    &NFS_FILE_SHARE_INFO_LIST,
    Constraints::NONE,
);
static DESCRIBE_NFS_FILE_SHARES_OUTPUT_MEMBERS: [&MemberSchema; 1] = [
    &DESCRIBE_NFS_FILE_SHARES_OUTPUT_NFS_FILE_SHARE_INFO_LIST,
];
pub(crate) static DESCRIBE_NFS_FILE_SHARES_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeNFSFileSharesOutput"), &DESCRIBE_NFS_FILE_SHARES_OUTPUT_MEMBERS);

pub(crate) static DESCRIBE_SMB_FILE_SHARES_OUTPUT_SMB_FILE_SHARE_INFO_LIST: MemberSchema = member!(
    "DescribeSMBFileSharesOutput",
    "SMBFileShareInfoList",
    0,
    &SMB_FILE_SHARE_INFO_LIST,
    Constraints::NONE,
);
static DESCRIBE_SMB_FILE_SHARES_OUTPUT_MEMBERS: [&MemberSchema; 1] = [
    &DESCRIBE_SMB_FILE_SHARES_OUTPUT_SMB_FILE_SHARE_INFO_LIST,
];
pub(crate) static DESCRIBE_SMB_FILE_SHARES_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeSMBFileSharesOutput"), &DESCRIBE_SMB_FILE_SHARES_OUTPUT_MEMBERS);

pub(crate) static CREATE_STOREDI_SCSI_VOLUME_OUTPUT_VOLUME_ARN: MemberSchema = member!(
    "CreateStorediSCSIVolumeOutput",
    "VolumeARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_OUTPUT_VOLUME_SIZE_IN_BYTES: MemberSchema =
    member!("CreateStorediSCSIVolumeOutput", "VolumeSizeInBytes", 1, &LONG, Constraints::NONE);
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_OUTPUT_TARGET_ARN: MemberSchema = member!(
    "CreateStorediSCSIVolumeOutput",
    "TargetARN",
    2,
    &STRING,
    Constraints::new().length(Some(50), Some(800)),
);
static CREATE_STOREDI_SCSI_VOLUME_OUTPUT_MEMBERS: [&MemberSchema; 3] = [
    &CREATE_STOREDI_SCSI_VOLUME_OUTPUT_VOLUME_ARN,
    &CREATE_STOREDI_SCSI_VOLUME_OUTPUT_VOLUME_SIZE_IN_BYTES,
    &CREATE_STOREDI_SCSI_VOLUME_OUTPUT_TARGET_ARN,
];
pub(crate) static CREATE_STOREDI_SCSI_VOLUME_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("CreateStorediSCSIVolumeOutput"), &CREATE_STOREDI_SCSI_VOLUME_OUTPUT_MEMBERS);

pub(crate) static DESCRIBE_STOREDI_SCSI_VOLUMES_OUTPUT_STOREDI_SCSI_VOLUMES: MemberSchema = member!(
    "DescribeStorediSCSIVolumesOutput",
    "StorediSCSIVolumes",
    0,
    &STOREDI_SCSI_VOLUMES,
    Constraints::NONE,
);
static DESCRIBE_STOREDI_SCSI_VOLUMES_OUTPUT_MEMBERS: [&MemberSchema; 1] = [
    &DESCRIBE_STOREDI_SCSI_VOLUMES_OUTPUT_STOREDI_SCSI_VOLUMES,
];
pub(crate) static DESCRIBE_STOREDI_SCSI_VOLUMES_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeStorediSCSIVolumesOutput"), &DESCRIBE_STOREDI_SCSI_VOLUMES_OUTPUT_MEMBERS);

pub(crate) static DESCRIBE_CACHE_OUTPUT_GATEWAY_ARN: MemberSchema = member!(
    "DescribeCacheOutput",
    "GatewayARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
pub(crate) static DESCRIBE_CACHE_OUTPUT_DISK_IDS: MemberSchema =
    member!("DescribeCacheOutput", "DiskIds", 1, &DISK_IDS, Constraints::NONE);
pub(crate) static DESCRIBE_CACHE_OUTPUT_CACHE_ALLOCATED_IN_BYTES: MemberSchema =
    member!("DescribeCacheOutput", "CacheAllocatedInBytes", 2, &LONG, Constraints::NONE);
pub(crate) static DESCRIBE_CACHE_OUTPUT_CACHE_USED_PERCENTAGE: MemberSchema =
    member!("DescribeCacheOutput", "CacheUsedPercentage", 3, &DOUBLE, Constraints::NONE);
pub(crate) static DESCRIBE_CACHE_OUTPUT_CACHE_DIRTY_PERCENTAGE: MemberSchema =
    member!("DescribeCacheOutput", "CacheDirtyPercentage", 4, &DOUBLE, Constraints::NONE);
pub(crate) static DESCRIBE_CACHE_OUTPUT_CACHE_HIT_PERCENTAGE: MemberSchema =
    member!("DescribeCacheOutput", "CacheHitPercentage", 5, &DOUBLE, Constraints::NONE);
pub(crate) static DESCRIBE_CACHE_OUTPUT_CACHE_MISS_PERCENTAGE: MemberSchema =
    member!("DescribeCacheOutput", "CacheMissPercentage", 6, &DOUBLE, Constraints::NONE);
static DESCRIBE_CACHE_OUTPUT_MEMBERS: [&MemberSchema; 7] = [
    &DESCRIBE_CACHE_OUTPUT_GATEWAY_ARN,
    &DESCRIBE_CACHE_OUTPUT_DISK_IDS,
    &DESCRIBE_CACHE_OUTPUT_CACHE_ALLOCATED_IN_BYTES,
    &DESCRIBE_CACHE_OUTPUT_CACHE_USED_PERCENTAGE,
    &DESCRIBE_CACHE_OUTPUT_CACHE_DIRTY_PERCENTAGE,
    &DESCRIBE_CACHE_OUTPUT_CACHE_HIT_PERCENTAGE,
    &DESCRIBE_CACHE_OUTPUT_CACHE_MISS_PERCENTAGE,
];
pub(crate) static DESCRIBE_CACHE_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeCacheOutput"), &DESCRIBE_CACHE_OUTPUT_MEMBERS);

pub(crate) static JOIN_DOMAIN_OUTPUT_GATEWAY_ARN: MemberSchema = member!(
    "JoinDomainOutput",
    "GatewayARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
pub(crate) static JOIN_DOMAIN_OUTPUT_ACTIVE_DIRECTORY_STATUS: MemberSchema = member!(
    "JoinDomainOutput",
    "ActiveDirectoryStatus",
    1,
    &ACTIVE_DIRECTORY_STATUS,
    Constraints::NONE,
);
static JOIN_DOMAIN_OUTPUT_MEMBERS: [&MemberSchema; 2] = [
    &JOIN_DOMAIN_OUTPUT_GATEWAY_ARN,
    &JOIN_DOMAIN_OUTPUT_ACTIVE_DIRECTORY_STATUS,
];
pub(crate) static JOIN_DOMAIN_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("JoinDomainOutput"), &JOIN_DOMAIN_OUTPUT_MEMBERS);

pub(crate) static DESCRIBE_TAPES_OUTPUT_TAPES: MemberSchema =
    member!("DescribeTapesOutput", "Tapes", 0, &TAPES, Constraints::NONE);
pub(crate) static DESCRIBE_TAPES_OUTPUT_MARKER: MemberSchema = member!(
    "DescribeTapesOutput",
    "Marker",
    1,
    &STRING,
    Constraints::new().length(Some(1), Some(1000)),
);
static DESCRIBE_TAPES_OUTPUT_MEMBERS: [&MemberSchema; 2] = [
    &DESCRIBE_TAPES_OUTPUT_TAPES,
    &DESCRIBE_TAPES_OUTPUT_MARKER,
];
pub(crate) static DESCRIBE_TAPES_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("DescribeTapesOutput"), &DESCRIBE_TAPES_OUTPUT_MEMBERS);

pub(crate) static ADD_TAGS_TO_RESOURCE_OUTPUT_RESOURCE_ARN: MemberSchema = member!(
    "AddTagsToResourceOutput",
    "ResourceARN",
    0,
    &STRING,
    Constraints::new().length(Some(50), Some(500)),
);
static ADD_TAGS_TO_RESOURCE_OUTPUT_MEMBERS: [&MemberSchema; 1] = [
    &ADD_TAGS_TO_RESOURCE_OUTPUT_RESOURCE_ARN,
];
pub(crate) static ADD_TAGS_TO_RESOURCE_OUTPUT: StructSchema =
    StructSchema::new(shape_id!("AddTagsToResourceOutput"), &ADD_TAGS_TO_RESOURCE_OUTPUT_MEMBERS);

// Errors

pub(crate) static INTERNAL_SERVER_ERROR_MESSAGE: MemberSchema =
    member!("InternalServerError", "message", 0, &STRING, Constraints::NONE);
pub(crate) static INTERNAL_SERVER_ERROR_ERROR: MemberSchema =
    member!("InternalServerError", "error", 1, &STORAGE_GATEWAY_ERROR, Constraints::NONE);
static INTERNAL_SERVER_ERROR_MEMBERS: [&MemberSchema; 2] = [
    &INTERNAL_SERVER_ERROR_MESSAGE,
    &INTERNAL_SERVER_ERROR_ERROR,
];
pub(crate) static INTERNAL_SERVER_ERROR: StructSchema =
    StructSchema::new(shape_id!("InternalServerError"), &INTERNAL_SERVER_ERROR_MEMBERS);

pub(crate) static INVALID_GATEWAY_REQUEST_EXCEPTION_MESSAGE: MemberSchema =
    member!("InvalidGatewayRequestException", "message", 0, &STRING, Constraints::NONE);
pub(crate) static INVALID_GATEWAY_REQUEST_EXCEPTION_ERROR: MemberSchema = member!(
    "InvalidGatewayRequestException",
    "error",
    1,
    &STORAGE_GATEWAY_ERROR,
    Constraints::NONE,
);
static INVALID_GATEWAY_REQUEST_EXCEPTION_MEMBERS: [&MemberSchema; 2] = [
    &INVALID_GATEWAY_REQUEST_EXCEPTION_MESSAGE,
    &INVALID_GATEWAY_REQUEST_EXCEPTION_ERROR,
];
pub(crate) static INVALID_GATEWAY_REQUEST_EXCEPTION: StructSchema =
    StructSchema::new(shape_id!("InvalidGatewayRequestException"), &INVALID_GATEWAY_REQUEST_EXCEPTION_MEMBERS);

pub(crate) static SERVICE_UNAVAILABLE_ERROR_MESSAGE: MemberSchema =
    member!("ServiceUnavailableError", "message", 0, &STRING, Constraints::NONE);
pub(crate) static SERVICE_UNAVAILABLE_ERROR_ERROR: MemberSchema =
    member!("ServiceUnavailableError", "error", 1, &STORAGE_GATEWAY_ERROR, Constraints::NONE);
static SERVICE_UNAVAILABLE_ERROR_MEMBERS: [&MemberSchema; 2] = [
    &SERVICE_UNAVAILABLE_ERROR_MESSAGE,
    &SERVICE_UNAVAILABLE_ERROR_ERROR,
];
pub(crate) static SERVICE_UNAVAILABLE_ERROR: StructSchema =
    StructSchema::new(shape_id!("ServiceUnavailableError"), &SERVICE_UNAVAILABLE_ERROR_MEMBERS);
