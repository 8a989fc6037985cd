/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data structures used by operation inputs/outputs.

/// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ObjectAcl {
    #[allow(missing_docs)] // documentation missing in model
    AuthenticatedRead,
    #[allow(missing_docs)] // documentation missing in model
    AwsExecRead,
    #[allow(missing_docs)] // documentation missing in model
    BucketOwnerFullControl,
    #[allow(missing_docs)] // documentation missing in model
    BucketOwnerRead,
    #[allow(missing_docs)] // documentation missing in model
    Private,
    #[allow(missing_docs)] // documentation missing in model
    PublicRead,
    #[allow(missing_docs)] // documentation missing in model
    PublicReadWrite,
    /// `Unknown` contains new variants that have been added since this code was generated.
    Unknown(crate::primitives::UnknownVariantValue),
}
impl std::convert::From<&str> for ObjectAcl {
    fn from(s: &str) -> Self {
        match s {
            "authenticated-read" => ObjectAcl::AuthenticatedRead,
            "aws-exec-read" => ObjectAcl::AwsExecRead,
            "bucket-owner-full-control" => ObjectAcl::BucketOwnerFullControl,
            "bucket-owner-read" => ObjectAcl::BucketOwnerRead,
            "private" => ObjectAcl::Private,
            "public-read" => ObjectAcl::PublicRead,
            "public-read-write" => ObjectAcl::PublicReadWrite,
            other => ObjectAcl::Unknown(crate::primitives::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for ObjectAcl {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ObjectAcl::from(s))
    }
}
impl ObjectAcl {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ObjectAcl::AuthenticatedRead => "authenticated-read",
            ObjectAcl::AwsExecRead => "aws-exec-read",
            ObjectAcl::BucketOwnerFullControl => "bucket-owner-full-control",
            ObjectAcl::BucketOwnerRead => "bucket-owner-read",
            ObjectAcl::Private => "private",
            ObjectAcl::PublicRead => "public-read",
            ObjectAcl::PublicReadWrite => "public-read-write",
            ObjectAcl::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &[
            "authenticated-read",
            "aws-exec-read",
            "bucket-owner-full-control",
            "bucket-owner-read",
            "private",
            "public-read",
            "public-read-write",
        ]
    }
}
impl AsRef<str> for ObjectAcl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ObjectAcl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl aws_smithy_schema::EnumShape for ObjectAcl {
    fn as_str(&self) -> &str {
        ObjectAcl::as_str(self)
    }

    fn try_parse(value: &str) -> std::result::Result<Self, aws_smithy_types::error::UnknownVariantError> {
        match ObjectAcl::from(value) {
            ObjectAcl::Unknown(_) => Err(aws_smithy_types::error::UnknownVariantError::new(
                "ObjectACL",
                value,
            )),
            known => Ok(known),
        }
    }

    fn values() -> &'static [&'static str] {
        ObjectAcl::values()
    }
}

/// Status of a gateway joining an Active Directory domain.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ActiveDirectoryStatus {
    #[allow(missing_docs)] // documentation missing in model
    AccessDenied,
    #[allow(missing_docs)] // documentation missing in model
    Detached,
    #[allow(missing_docs)] // documentation missing in model
    Joined,
    #[allow(missing_docs)] // documentation missing in model
    Joining,
    #[allow(missing_docs)] // documentation missing in model
    NetworkError,
    #[allow(missing_docs)] // documentation missing in model
    Timeout,
    #[allow(missing_docs)] // documentation missing in model
    UnknownError,
    /// `Unknown` contains new variants that have been added since this code was generated.
    Unknown(crate::primitives::UnknownVariantValue),
}
impl std::convert::From<&str> for ActiveDirectoryStatus {
    fn from(s: &str) -> Self {
        match s {
            "ACCESS_DENIED" => ActiveDirectoryStatus::AccessDenied,
            "DETACHED" => ActiveDirectoryStatus::Detached,
            "JOINED" => ActiveDirectoryStatus::Joined,
            "JOINING" => ActiveDirectoryStatus::Joining,
            "NETWORK_ERROR" => ActiveDirectoryStatus::NetworkError,
            "TIMEOUT" => ActiveDirectoryStatus::Timeout,
            "UNKNOWN_ERROR" => ActiveDirectoryStatus::UnknownError,
            other => ActiveDirectoryStatus::Unknown(crate::primitives::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for ActiveDirectoryStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ActiveDirectoryStatus::from(s))
    }
}
impl ActiveDirectoryStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ActiveDirectoryStatus::AccessDenied => "ACCESS_DENIED",
            ActiveDirectoryStatus::Detached => "DETACHED",
            ActiveDirectoryStatus::Joined => "JOINED",
            ActiveDirectoryStatus::Joining => "JOINING",
            ActiveDirectoryStatus::NetworkError => "NETWORK_ERROR",
            ActiveDirectoryStatus::Timeout => "TIMEOUT",
            ActiveDirectoryStatus::UnknownError => "UNKNOWN_ERROR",
            ActiveDirectoryStatus::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &[
            "ACCESS_DENIED",
            "DETACHED",
            "JOINED",
            "JOINING",
            "NETWORK_ERROR",
            "TIMEOUT",
            "UNKNOWN_ERROR",
        ]
    }
}
impl AsRef<str> for ActiveDirectoryStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ActiveDirectoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl aws_smithy_schema::EnumShape for ActiveDirectoryStatus {
    fn as_str(&self) -> &str {
        ActiveDirectoryStatus::as_str(self)
    }

    fn try_parse(value: &str) -> std::result::Result<Self, aws_smithy_types::error::UnknownVariantError> {
        match ActiveDirectoryStatus::from(value) {
            ActiveDirectoryStatus::Unknown(_) => Err(aws_smithy_types::error::UnknownVariantError::new(
                "ActiveDirectoryStatus",
                value,
            )),
            known => Ok(known),
        }
    }

    fn values() -> &'static [&'static str] {
        ActiveDirectoryStatus::values()
    }
}

/// Error code reported by the service in a `StorageGatewayError`.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ErrorCode {
    #[allow(missing_docs)] // documentation missing in model
    ActivationKeyExpired,
    #[allow(missing_docs)] // documentation missing in model
    ActivationKeyInvalid,
    #[allow(missing_docs)] // documentation missing in model
    ActivationKeyNotFound,
    #[allow(missing_docs)] // documentation missing in model
    AuthenticationFailure,
    #[allow(missing_docs)] // documentation missing in model
    BandwidthThrottleScheduleNotFound,
    #[allow(missing_docs)] // documentation missing in model
    Blocked,
    #[allow(missing_docs)] // documentation missing in model
    CannotExportSnapshot,
    #[allow(missing_docs)] // documentation missing in model
    ChapCredentialNotFound,
    #[allow(missing_docs)] // documentation missing in model
    DiskAlreadyAllocated,
    #[allow(missing_docs)] // documentation missing in model
    DiskDoesNotExist,
    #[allow(missing_docs)] // documentation missing in model
    DiskSizeGreaterThanVolumeMaxSize,
    #[allow(missing_docs)] // documentation missing in model
    DiskSizeLessThanVolumeSize,
    #[allow(missing_docs)] // documentation missing in model
    DiskSizeNotGigAligned,
    #[allow(missing_docs)] // documentation missing in model
    DuplicateCertificateInfo,
    #[allow(missing_docs)] // documentation missing in model
    DuplicateSchedule,
    #[allow(missing_docs)] // documentation missing in model
    EndpointNotFound,
    #[allow(missing_docs)] // documentation missing in model
    GatewayInternalError,
    #[allow(missing_docs)] // documentation missing in model
    GatewayNotConnected,
    #[allow(missing_docs)] // documentation missing in model
    GatewayNotFound,
    #[allow(missing_docs)] // documentation missing in model
    GatewayProxyNetworkConnectionBusy,
    #[allow(missing_docs)] // documentation missing in model
    IamNotSupported,
    #[allow(missing_docs)] // documentation missing in model
    InitiatorInvalid,
    #[allow(missing_docs)] // documentation missing in model
    InitiatorNotFound,
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    InvalidEndpoint,
    #[allow(missing_docs)] // documentation missing in model
    InvalidGateway,
    #[allow(missing_docs)] // documentation missing in model
    InvalidParameters,
    #[allow(missing_docs)] // documentation missing in model
    InvalidSchedule,
    #[allow(missing_docs)] // documentation missing in model
    JoinDomainInProgress,
    #[allow(missing_docs)] // documentation missing in model
    LocalStorageLimitExceeded,
    #[allow(missing_docs)] // documentation missing in model
    LunAlreadyAllocated,
    #[allow(missing_docs)] // documentation missing in model
    LunInvalid,
    #[allow(missing_docs)] // documentation missing in model
    MaximumContentLengthExceeded,
    #[allow(missing_docs)] // documentation missing in model
    MaximumTapeCartridgeCountExceeded,
    #[allow(missing_docs)] // documentation missing in model
    MaximumVolumeCountExceeded,
    #[allow(missing_docs)] // documentation missing in model
    NetworkConfigurationChanged,
    #[allow(missing_docs)] // documentation missing in model
    NoDisksAvailable,
    #[allow(missing_docs)] // documentation missing in model
    NotImplemented,
    #[allow(missing_docs)] // documentation missing in model
    NotSupported,
    #[allow(missing_docs)] // documentation missing in model
    OperationAborted,
    #[allow(missing_docs)] // documentation missing in model
    OutdatedGateway,
    #[allow(missing_docs)] // documentation missing in model
    ParametersNotImplemented,
    #[allow(missing_docs)] // documentation missing in model
    RegionInvalid,
    #[allow(missing_docs)] // documentation missing in model
    RequestTimeout,
    #[allow(missing_docs)] // documentation missing in model
    ServiceUnavailable,
    #[allow(missing_docs)] // documentation missing in model
    SnapshotDeleted,
    #[allow(missing_docs)] // documentation missing in model
    SnapshotIdInvalid,
    #[allow(missing_docs)] // documentation missing in model
    SnapshotInProgress,
    #[allow(missing_docs)] // documentation missing in model
    SnapshotNotFound,
    #[allow(missing_docs)] // documentation missing in model
    SnapshotScheduleNotFound,
    #[allow(missing_docs)] // documentation missing in model
    StagingAreaFull,
    #[allow(missing_docs)] // documentation missing in model
    StorageFailure,
    #[allow(missing_docs)] // documentation missing in model
    TapeCartridgeNotFound,
    #[allow(missing_docs)] // documentation missing in model
    TargetAlreadyExists,
    #[allow(missing_docs)] // documentation missing in model
    TargetInvalid,
    #[allow(missing_docs)] // documentation missing in model
    TargetNotFound,
    #[allow(missing_docs)] // documentation missing in model
    UnauthorizedOperation,
    #[allow(missing_docs)] // documentation missing in model
    VolumeAlreadyExists,
    #[allow(missing_docs)] // documentation missing in model
    VolumeIdInvalid,
    #[allow(missing_docs)] // documentation missing in model
    VolumeInUse,
    #[allow(missing_docs)] // documentation missing in model
    VolumeNotFound,
    #[allow(missing_docs)] // documentation missing in model
    VolumeNotReady,
    /// `Unknown` contains new variants that have been added since this code was generated.
    Unknown(crate::primitives::UnknownVariantValue),
}
impl std::convert::From<&str> for ErrorCode {
    fn from(s: &str) -> Self {
        match s {
            "ActivationKeyExpired" => ErrorCode::ActivationKeyExpired,
            "ActivationKeyInvalid" => ErrorCode::ActivationKeyInvalid,
            "ActivationKeyNotFound" => ErrorCode::ActivationKeyNotFound,
            "AuthenticationFailure" => ErrorCode::AuthenticationFailure,
            "BandwidthThrottleScheduleNotFound" => ErrorCode::BandwidthThrottleScheduleNotFound,
            "Blocked" => ErrorCode::Blocked,
            "CannotExportSnapshot" => ErrorCode::CannotExportSnapshot,
            "ChapCredentialNotFound" => ErrorCode::ChapCredentialNotFound,
            "DiskAlreadyAllocated" => ErrorCode::DiskAlreadyAllocated,
            "DiskDoesNotExist" => ErrorCode::DiskDoesNotExist,
            "DiskSizeGreaterThanVolumeMaxSize" => ErrorCode::DiskSizeGreaterThanVolumeMaxSize,
            "DiskSizeLessThanVolumeSize" => ErrorCode::DiskSizeLessThanVolumeSize,
            "DiskSizeNotGigAligned" => ErrorCode::DiskSizeNotGigAligned,
            "DuplicateCertificateInfo" => ErrorCode::DuplicateCertificateInfo,
            "DuplicateSchedule" => ErrorCode::DuplicateSchedule,
            "EndpointNotFound" => ErrorCode::EndpointNotFound,
            "GatewayInternalError" => ErrorCode::GatewayInternalError,
            "GatewayNotConnected" => ErrorCode::GatewayNotConnected,
            "GatewayNotFound" => ErrorCode::GatewayNotFound,
            "GatewayProxyNetworkConnectionBusy" => ErrorCode::GatewayProxyNetworkConnectionBusy,
            "IAMNotSupported" => ErrorCode::IamNotSupported,
            "InitiatorInvalid" => ErrorCode::InitiatorInvalid,
            "InitiatorNotFound" => ErrorCode::InitiatorNotFound,
            "InternalError" => ErrorCode::InternalError,
            "InvalidEndpoint" => ErrorCode::InvalidEndpoint,
            "InvalidGateway" => ErrorCode::InvalidGateway,
            "InvalidParameters" => ErrorCode::InvalidParameters,
            "InvalidSchedule" => ErrorCode::InvalidSchedule,
            "JoinDomainInProgress" => ErrorCode::JoinDomainInProgress,
            "LocalStorageLimitExceeded" => ErrorCode::LocalStorageLimitExceeded,
            "LunAlreadyAllocated " => ErrorCode::LunAlreadyAllocated,
            "LunInvalid" => ErrorCode::LunInvalid,
            "MaximumContentLengthExceeded" => ErrorCode::MaximumContentLengthExceeded,
            "MaximumTapeCartridgeCountExceeded" => ErrorCode::MaximumTapeCartridgeCountExceeded,
            "MaximumVolumeCountExceeded" => ErrorCode::MaximumVolumeCountExceeded,
            "NetworkConfigurationChanged" => ErrorCode::NetworkConfigurationChanged,
            "NoDisksAvailable" => ErrorCode::NoDisksAvailable,
            "NotImplemented" => ErrorCode::NotImplemented,
            "NotSupported" => ErrorCode::NotSupported,
            "OperationAborted" => ErrorCode::OperationAborted,
            "OutdatedGateway" => ErrorCode::OutdatedGateway,
            "ParametersNotImplemented" => ErrorCode::ParametersNotImplemented,
            "RegionInvalid" => ErrorCode::RegionInvalid,
            "RequestTimeout" => ErrorCode::RequestTimeout,
            "ServiceUnavailable" => ErrorCode::ServiceUnavailable,
            "SnapshotDeleted" => ErrorCode::SnapshotDeleted,
            "SnapshotIdInvalid" => ErrorCode::SnapshotIdInvalid,
            "SnapshotInProgress" => ErrorCode::SnapshotInProgress,
            "SnapshotNotFound" => ErrorCode::SnapshotNotFound,
            "SnapshotScheduleNotFound" => ErrorCode::SnapshotScheduleNotFound,
            "StagingAreaFull" => ErrorCode::StagingAreaFull,
            "StorageFailure" => ErrorCode::StorageFailure,
            "TapeCartridgeNotFound" => ErrorCode::TapeCartridgeNotFound,
            "TargetAlreadyExists" => ErrorCode::TargetAlreadyExists,
            "TargetInvalid" => ErrorCode::TargetInvalid,
            "TargetNotFound" => ErrorCode::TargetNotFound,
            "UnauthorizedOperation" => ErrorCode::UnauthorizedOperation,
            "VolumeAlreadyExists" => ErrorCode::VolumeAlreadyExists,
            "VolumeIdInvalid" => ErrorCode::VolumeIdInvalid,
            "VolumeInUse" => ErrorCode::VolumeInUse,
            "VolumeNotFound" => ErrorCode::VolumeNotFound,
            "VolumeNotReady" => ErrorCode::VolumeNotReady,
            other => ErrorCode::Unknown(crate::primitives::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for ErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ErrorCode::from(s))
    }
}
impl ErrorCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::ActivationKeyExpired => "ActivationKeyExpired",
            ErrorCode::ActivationKeyInvalid => "ActivationKeyInvalid",
            ErrorCode::ActivationKeyNotFound => "ActivationKeyNotFound",
            ErrorCode::AuthenticationFailure => "AuthenticationFailure",
            ErrorCode::BandwidthThrottleScheduleNotFound => "BandwidthThrottleScheduleNotFound",
            ErrorCode::Blocked => "Blocked",
            ErrorCode::CannotExportSnapshot => "CannotExportSnapshot",
            ErrorCode::ChapCredentialNotFound => "ChapCredentialNotFound",
            ErrorCode::DiskAlreadyAllocated => "DiskAlreadyAllocated",
            ErrorCode::DiskDoesNotExist => "DiskDoesNotExist",
            ErrorCode::DiskSizeGreaterThanVolumeMaxSize => "DiskSizeGreaterThanVolumeMaxSize",
            ErrorCode::DiskSizeLessThanVolumeSize => "DiskSizeLessThanVolumeSize",
            ErrorCode::DiskSizeNotGigAligned => "DiskSizeNotGigAligned",
            ErrorCode::DuplicateCertificateInfo => "DuplicateCertificateInfo",
            ErrorCode::DuplicateSchedule => "DuplicateSchedule",
            ErrorCode::EndpointNotFound => "EndpointNotFound",
            ErrorCode::GatewayInternalError => "GatewayInternalError",
            ErrorCode::GatewayNotConnected => "GatewayNotConnected",
            ErrorCode::GatewayNotFound => "GatewayNotFound",
            ErrorCode::GatewayProxyNetworkConnectionBusy => "GatewayProxyNetworkConnectionBusy",
            ErrorCode::IamNotSupported => "IAMNotSupported",
            ErrorCode::InitiatorInvalid => "InitiatorInvalid",
            ErrorCode::InitiatorNotFound => "InitiatorNotFound",
            ErrorCode::InternalError => "InternalError",
            ErrorCode::InvalidEndpoint => "InvalidEndpoint",
            ErrorCode::InvalidGateway => "InvalidGateway",
            ErrorCode::InvalidParameters => "InvalidParameters",
            ErrorCode::InvalidSchedule => "InvalidSchedule",
            ErrorCode::JoinDomainInProgress => "JoinDomainInProgress",
            ErrorCode::LocalStorageLimitExceeded => "LocalStorageLimitExceeded",
            ErrorCode::LunAlreadyAllocated => "LunAlreadyAllocated ",
            ErrorCode::LunInvalid => "LunInvalid",
            ErrorCode::MaximumContentLengthExceeded => "MaximumContentLengthExceeded",
            ErrorCode::MaximumTapeCartridgeCountExceeded => "MaximumTapeCartridgeCountExceeded",
            ErrorCode::MaximumVolumeCountExceeded => "MaximumVolumeCountExceeded",
            ErrorCode::NetworkConfigurationChanged => "NetworkConfigurationChanged",
            ErrorCode::NoDisksAvailable => "NoDisksAvailable",
            ErrorCode::NotImplemented => "NotImplemented",
            ErrorCode::NotSupported => "NotSupported",
            ErrorCode::OperationAborted => "OperationAborted",
            ErrorCode::OutdatedGateway => "OutdatedGateway",
            ErrorCode::ParametersNotImplemented => "ParametersNotImplemented",
            ErrorCode::RegionInvalid => "RegionInvalid",
            ErrorCode::RequestTimeout => "RequestTimeout",
            ErrorCode::ServiceUnavailable => "ServiceUnavailable",
            ErrorCode::SnapshotDeleted => "SnapshotDeleted",
            ErrorCode::SnapshotIdInvalid => "SnapshotIdInvalid",
            ErrorCode::SnapshotInProgress => "SnapshotInProgress",
            ErrorCode::SnapshotNotFound => "SnapshotNotFound",
            ErrorCode::SnapshotScheduleNotFound => "SnapshotScheduleNotFound",
            ErrorCode::StagingAreaFull => "StagingAreaFull",
            ErrorCode::StorageFailure => "StorageFailure",
            ErrorCode::TapeCartridgeNotFound => "TapeCartridgeNotFound",
            ErrorCode::TargetAlreadyExists => "TargetAlreadyExists",
            ErrorCode::TargetInvalid => "TargetInvalid",
            ErrorCode::TargetNotFound => "TargetNotFound",
            ErrorCode::UnauthorizedOperation => "UnauthorizedOperation",
            ErrorCode::VolumeAlreadyExists => "VolumeAlreadyExists",
            ErrorCode::VolumeIdInvalid => "VolumeIdInvalid",
            ErrorCode::VolumeInUse => "VolumeInUse",
            ErrorCode::VolumeNotFound => "VolumeNotFound",
            ErrorCode::VolumeNotReady => "VolumeNotReady",
            ErrorCode::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
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
        ]
    }
}
impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl aws_smithy_schema::EnumShape for ErrorCode {
    fn as_str(&self) -> &str {
        ErrorCode::as_str(self)
    }

    fn try_parse(value: &str) -> std::result::Result<Self, aws_smithy_types::error::UnknownVariantError> {
        match ErrorCode::from(value) {
            ErrorCode::Unknown(_) => Err(aws_smithy_types::error::UnknownVariantError::new(
                "ErrorCode",
                value,
            )),
            known => Ok(known),
        }
    }

    fn values() -> &'static [&'static str] {
        ErrorCode::values()
    }
}

/// A key-value pair that helps you manage, filter, and search for your resource. Allowed characters: letters, white space, and numbers, representable in UTF-8, and the following characters: `+ - = . _ : /`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag key. The key can't start with `aws:`.
    pub key: std::option::Option<String>,
    /// Value of the tag key.
    pub value: std::option::Option<String>,
}
impl Tag {
    /// Tag key. The key can't start with `aws:`.
    pub fn key(&self) -> std::option::Option<&str> {
        self.key.as_deref()
    }

    /// Value of the tag key.
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Tag");
        formatter.field("key", &self.key);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
/// See [`Tag`](crate::model::Tag).
pub mod tag {

    /// A builder for [`Tag`](crate::model::Tag).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<String>,
        pub(crate) value: std::option::Option<String>,
    }
    impl Builder {
        /// Tag key. The key can't start with `aws:`.
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }
        /// Tag key. The key can't start with `aws:`.
        pub fn set_key(mut self, input: std::option::Option<String>) -> Self {
            self.key = input;
            self
        }
        /// Value of the tag key.
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        /// Value of the tag key.
        pub fn set_value(mut self, input: std::option::Option<String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag).
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag).
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::model::tag::Builder {
        crate::model::tag::Builder {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for Tag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Describes Network File System (NFS) file share default values. Files and folders stored as Amazon S3 objects in S3 buckets don't, by default, have Unix file permissions assigned to them.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct NfsFileShareDefaults {
    /// The Unix file mode in the form "nnnn". For example, `0666` represents the default file mode inside the file share.
    pub file_mode: std::option::Option<String>,
    /// The Unix directory mode in the form "nnnn". For example, `0666` represents the default access mode for all directories inside the file share.
    pub directory_mode: std::option::Option<String>,
    /// The default group ID for the file share (unless the files have another group ID specified).
    pub group_id: std::option::Option<i64>,
    /// The default owner ID for files in the file share (unless the files have another owner ID specified).
    pub owner_id: std::option::Option<i64>,
}
impl NfsFileShareDefaults {
    /// The Unix file mode in the form "nnnn". For example, `0666` represents the default file mode inside the file share.
    pub fn file_mode(&self) -> std::option::Option<&str> {
        self.file_mode.as_deref()
    }

    /// The Unix directory mode in the form "nnnn". For example, `0666` represents the default access mode for all directories inside the file share.
    pub fn directory_mode(&self) -> std::option::Option<&str> {
        self.directory_mode.as_deref()
    }

    /// The default group ID for the file share (unless the files have another group ID specified).
    pub fn group_id(&self) -> std::option::Option<i64> {
        self.group_id
    }

    /// The default owner ID for files in the file share (unless the files have another owner ID specified).
    pub fn owner_id(&self) -> std::option::Option<i64> {
        self.owner_id
    }
}
impl std::fmt::Debug for NfsFileShareDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NfsFileShareDefaults");
        formatter.field("file_mode", &self.file_mode);
        formatter.field("directory_mode", &self.directory_mode);
        formatter.field("group_id", &self.group_id);
        formatter.field("owner_id", &self.owner_id);
        formatter.finish()
    }
}
/// See [`NfsFileShareDefaults`](crate::model::NfsFileShareDefaults).
pub mod nfs_file_share_defaults {

    /// A builder for [`NfsFileShareDefaults`](crate::model::NfsFileShareDefaults).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_mode: std::option::Option<String>,
        pub(crate) directory_mode: std::option::Option<String>,
        pub(crate) group_id: std::option::Option<i64>,
        pub(crate) owner_id: std::option::Option<i64>,
    }
    impl Builder {
        /// The Unix file mode in the form "nnnn". For example, `0666` represents the default file mode inside the file share.
        pub fn file_mode(mut self, input: impl Into<String>) -> Self {
            self.file_mode = Some(input.into());
            self
        }
        /// The Unix file mode in the form "nnnn". For example, `0666` represents the default file mode inside the file share.
        pub fn set_file_mode(mut self, input: std::option::Option<String>) -> Self {
            self.file_mode = input;
            self
        }
        /// The Unix directory mode in the form "nnnn". For example, `0666` represents the default access mode for all directories inside the file share.
        pub fn directory_mode(mut self, input: impl Into<String>) -> Self {
            self.directory_mode = Some(input.into());
            self
        }
        /// The Unix directory mode in the form "nnnn". For example, `0666` represents the default access mode for all directories inside the file share.
        pub fn set_directory_mode(mut self, input: std::option::Option<String>) -> Self {
            self.directory_mode = input;
            self
        }
        /// The default group ID for the file share (unless the files have another group ID specified).
        pub fn group_id(mut self, input: i64) -> Self {
            self.group_id = Some(input);
            self
        }
        /// The default group ID for the file share (unless the files have another group ID specified).
        pub fn set_group_id(mut self, input: std::option::Option<i64>) -> Self {
            self.group_id = input;
            self
        }
        /// The default owner ID for files in the file share (unless the files have another owner ID specified).
        pub fn owner_id(mut self, input: i64) -> Self {
            self.owner_id = Some(input);
            self
        }
        /// The default owner ID for files in the file share (unless the files have another owner ID specified).
        pub fn set_owner_id(mut self, input: std::option::Option<i64>) -> Self {
            self.owner_id = input;
            self
        }
        /// Consumes the builder and constructs a [`NfsFileShareDefaults`](crate::model::NfsFileShareDefaults).
        pub fn build(self) -> crate::model::NfsFileShareDefaults {
            crate::model::NfsFileShareDefaults {
                file_mode: self.file_mode,
                directory_mode: self.directory_mode,
                group_id: self.group_id,
                owner_id: self.owner_id,
            }
        }
    }
}
impl NfsFileShareDefaults {
    /// Creates a new builder-style object to manufacture [`NfsFileShareDefaults`](crate::model::NfsFileShareDefaults).
    pub fn builder() -> crate::model::nfs_file_share_defaults::Builder {
        crate::model::nfs_file_share_defaults::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::model::nfs_file_share_defaults::Builder {
        crate::model::nfs_file_share_defaults::Builder {
            file_mode: self.file_mode.clone(),
            directory_mode: self.directory_mode.clone(),
            group_id: self.group_id.clone(),
            owner_id: self.owner_id.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for NfsFileShareDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for NfsFileShareDefaults {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// The Unix file permissions and ownership information assigned, by default, to native S3 objects when file gateway discovers them in S3 buckets.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct NfsFileShareInfo {
    /// File share default values.
    pub nfs_file_share_defaults: std::option::Option<crate::model::NfsFileShareDefaults>,
    /// The Amazon Resource Name (ARN) of the file share.
    pub file_share_arn: std::option::Option<String>,
    /// The ID of the file share.
    pub file_share_id: std::option::Option<String>,
    /// The status of the file share: `CREATING`, `UPDATING`, `AVAILABLE` or `DELETING`.
    pub file_share_status: std::option::Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway.
    pub gateway_arn: std::option::Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub kms_encrypted: std::option::Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub kms_key: std::option::Option<String>,
    /// The file share path used by the NFS or SMB client to identify the mount point.
    pub path: std::option::Option<String>,
    /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
    pub role: std::option::Option<String>,
    /// The ARN of the backend storage used for storing file data.
    pub location_arn: std::option::Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub default_storage_class: std::option::Option<String>,
    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,
    /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
    pub client_list: std::option::Option<std::vec::Vec<String>>,
    /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
    pub squash: std::option::Option<String>,
    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub read_only: std::option::Option<bool>,
    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub guess_mime_type_enabled: std::option::Option<bool>,
    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub requester_pays: std::option::Option<bool>,
    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl NfsFileShareInfo {
    /// File share default values.
    pub fn nfs_file_share_defaults(&self) -> std::option::Option<&crate::model::NfsFileShareDefaults> {
        self.nfs_file_share_defaults.as_ref()
    }

    /// The Amazon Resource Name (ARN) of the file share.
    pub fn file_share_arn(&self) -> std::option::Option<&str> {
        self.file_share_arn.as_deref()
    }

    /// The ID of the file share.
    pub fn file_share_id(&self) -> std::option::Option<&str> {
        self.file_share_id.as_deref()
    }

    /// The status of the file share: `CREATING`, `UPDATING`, `AVAILABLE` or `DELETING`.
    pub fn file_share_status(&self) -> std::option::Option<&str> {
        self.file_share_status.as_deref()
    }

    /// The Amazon Resource Name (ARN) of the gateway.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }

    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub fn kms_encrypted(&self) -> std::option::Option<bool> {
        self.kms_encrypted
    }

    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub fn kms_key(&self) -> std::option::Option<&str> {
        self.kms_key.as_deref()
    }

    /// The file share path used by the NFS or SMB client to identify the mount point.
    pub fn path(&self) -> std::option::Option<&str> {
        self.path.as_deref()
    }

    /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
    pub fn role(&self) -> std::option::Option<&str> {
        self.role.as_deref()
    }

    /// The ARN of the backend storage used for storing file data.
    pub fn location_arn(&self) -> std::option::Option<&str> {
        self.location_arn.as_deref()
    }

    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub fn default_storage_class(&self) -> std::option::Option<&str> {
        self.default_storage_class.as_deref()
    }

    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub fn object_acl(&self) -> std::option::Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }

    /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
    pub fn client_list(&self) -> std::option::Option<&[String]> {
        self.client_list.as_deref()
    }

    /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
    pub fn squash(&self) -> std::option::Option<&str> {
        self.squash.as_deref()
    }

    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub fn read_only(&self) -> std::option::Option<bool> {
        self.read_only
    }

    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub fn guess_mime_type_enabled(&self) -> std::option::Option<bool> {
        self.guess_mime_type_enabled
    }

    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub fn requester_pays(&self) -> std::option::Option<bool> {
        self.requester_pays
    }

    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Debug for NfsFileShareInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NfsFileShareInfo");
        formatter.field("nfs_file_share_defaults", &self.nfs_file_share_defaults);
        formatter.field("file_share_arn", &self.file_share_arn);
        formatter.field("file_share_id", &self.file_share_id);
        formatter.field("file_share_status", &self.file_share_status);
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("kms_encrypted", &self.kms_encrypted);
        formatter.field("kms_key", &self.kms_key);
        formatter.field("path", &self.path);
        formatter.field("role", &self.role);
        formatter.field("location_arn", &self.location_arn);
        formatter.field("default_storage_class", &self.default_storage_class);
        formatter.field("object_acl", &self.object_acl);
        formatter.field("client_list", &self.client_list);
        formatter.field("squash", &self.squash);
        formatter.field("read_only", &self.read_only);
        formatter.field("guess_mime_type_enabled", &self.guess_mime_type_enabled);
        formatter.field("requester_pays", &self.requester_pays);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`NfsFileShareInfo`](crate::model::NfsFileShareInfo).
pub mod nfs_file_share_info {

    /// A builder for [`NfsFileShareInfo`](crate::model::NfsFileShareInfo).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) nfs_file_share_defaults: std::option::Option<crate::model::NfsFileShareDefaults>,
        pub(crate) file_share_arn: std::option::Option<String>,
        pub(crate) file_share_id: std::option::Option<String>,
        pub(crate) file_share_status: std::option::Option<String>,
        pub(crate) gateway_arn: std::option::Option<String>,
        pub(crate) kms_encrypted: std::option::Option<bool>,
        pub(crate) kms_key: std::option::Option<String>,
        pub(crate) path: std::option::Option<String>,
        pub(crate) role: std::option::Option<String>,
        pub(crate) location_arn: std::option::Option<String>,
        pub(crate) default_storage_class: std::option::Option<String>,
        pub(crate) object_acl: std::option::Option<crate::model::ObjectAcl>,
        pub(crate) client_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) squash: std::option::Option<String>,
        pub(crate) read_only: std::option::Option<bool>,
        pub(crate) guess_mime_type_enabled: std::option::Option<bool>,
        pub(crate) requester_pays: std::option::Option<bool>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// File share default values.
        pub fn nfs_file_share_defaults(mut self, input: crate::model::NfsFileShareDefaults) -> Self {
            self.nfs_file_share_defaults = Some(input);
            self
        }
        /// File share default values.
        pub fn set_nfs_file_share_defaults(mut self, input: std::option::Option<crate::model::NfsFileShareDefaults>) -> Self {
            self.nfs_file_share_defaults = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn set_file_share_arn(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        /// The ID of the file share.
        pub fn file_share_id(mut self, input: impl Into<String>) -> Self {
            self.file_share_id = Some(input.into());
            self
        }
        /// The ID of the file share.
        pub fn set_file_share_id(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_id = input;
            self
        }
        /// The status of the file share: `CREATING`, `UPDATING`, `AVAILABLE` or `DELETING`.
        pub fn file_share_status(mut self, input: impl Into<String>) -> Self {
            self.file_share_status = Some(input.into());
            self
        }
        /// The status of the file share: `CREATING`, `UPDATING`, `AVAILABLE` or `DELETING`.
        pub fn set_file_share_status(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_status = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn set_gateway_arn(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn set_kms_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn set_kms_key(mut self, input: std::option::Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// The file share path used by the NFS or SMB client to identify the mount point.
        pub fn path(mut self, input: impl Into<String>) -> Self {
            self.path = Some(input.into());
            self
        }
        /// The file share path used by the NFS or SMB client to identify the mount point.
        pub fn set_path(mut self, input: std::option::Option<String>) -> Self {
            self.path = input;
            self
        }
        /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }
        /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
        pub fn set_role(mut self, input: std::option::Option<String>) -> Self {
            self.role = input;
            self
        }
        /// The ARN of the backend storage used for storing file data.
        pub fn location_arn(mut self, input: impl Into<String>) -> Self {
            self.location_arn = Some(input.into());
            self
        }
        /// The ARN of the backend storage used for storing file data.
        pub fn set_location_arn(mut self, input: std::option::Option<String>) -> Self {
            self.location_arn = input;
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn set_default_storage_class(mut self, input: std::option::Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn object_acl(mut self, input: impl Into<crate::model::ObjectAcl>) -> Self {
            self.object_acl = Some(input.into());
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn set_object_acl(mut self, input: std::option::Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        /// Appends an item to `client_list`.
        ///
        /// To override the contents of this collection use [`set_client_list`](Self::set_client_list).
        ///
        /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
        pub fn client_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.client_list.unwrap_or_default();
            v.push(input.into());
            self.client_list = Some(v);
            self
        }
        /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
        pub fn set_client_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.client_list = input;
            self
        }
        /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
        pub fn squash(mut self, input: impl Into<String>) -> Self {
            self.squash = Some(input.into());
            self
        }
        /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
        pub fn set_squash(mut self, input: std::option::Option<String>) -> Self {
            self.squash = input;
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn set_read_only(mut self, input: std::option::Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn set_guess_mime_type_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn set_requester_pays(mut self, input: std::option::Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`NfsFileShareInfo`](crate::model::NfsFileShareInfo).
        pub fn build(self) -> crate::model::NfsFileShareInfo {
            crate::model::NfsFileShareInfo {
                nfs_file_share_defaults: self.nfs_file_share_defaults,
                file_share_arn: self.file_share_arn,
                file_share_id: self.file_share_id,
                file_share_status: self.file_share_status,
                gateway_arn: self.gateway_arn,
                kms_encrypted: self.kms_encrypted,
                kms_key: self.kms_key,
                path: self.path,
                role: self.role,
                location_arn: self.location_arn,
                default_storage_class: self.default_storage_class,
                object_acl: self.object_acl,
                client_list: self.client_list,
                squash: self.squash,
                read_only: self.read_only,
                guess_mime_type_enabled: self.guess_mime_type_enabled,
                requester_pays: self.requester_pays,
                tags: self.tags,
            }
        }
    }
}
impl NfsFileShareInfo {
    /// Creates a new builder-style object to manufacture [`NfsFileShareInfo`](crate::model::NfsFileShareInfo).
    pub fn builder() -> crate::model::nfs_file_share_info::Builder {
        crate::model::nfs_file_share_info::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::model::nfs_file_share_info::Builder {
        crate::model::nfs_file_share_info::Builder {
            nfs_file_share_defaults: self.nfs_file_share_defaults.clone(),
            file_share_arn: self.file_share_arn.clone(),
            file_share_id: self.file_share_id.clone(),
            file_share_status: self.file_share_status.clone(),
            gateway_arn: self.gateway_arn.clone(),
            kms_encrypted: self.kms_encrypted.clone(),
            kms_key: self.kms_key.clone(),
            path: self.path.clone(),
            role: self.role.clone(),
            location_arn: self.location_arn.clone(),
            default_storage_class: self.default_storage_class.clone(),
            object_acl: self.object_acl.clone(),
            client_list: self.client_list.clone(),
            squash: self.squash.clone(),
            read_only: self.read_only.clone(),
            guess_mime_type_enabled: self.guess_mime_type_enabled.clone(),
            requester_pays: self.requester_pays.clone(),
            tags: self.tags.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for NfsFileShareInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for NfsFileShareInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// The Windows file permissions and ownership information assigned, by default, to native S3 objects when file gateway discovers them in S3 buckets.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct SmbFileShareInfo {
    /// The Amazon Resource Name (ARN) of the file share.
    pub file_share_arn: std::option::Option<String>,
    /// The ID of the file share.
    pub file_share_id: std::option::Option<String>,
    /// The status of the file share: `CREATING`, `UPDATING`, `AVAILABLE` or `DELETING`.
    pub file_share_status: std::option::Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway.
    pub gateway_arn: std::option::Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub kms_encrypted: std::option::Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub kms_key: std::option::Option<String>,
    /// The file share path used by the NFS or SMB client to identify the mount point.
    pub path: std::option::Option<String>,
    /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
    pub role: std::option::Option<String>,
    /// The ARN of the backend storage used for storing file data.
    pub location_arn: std::option::Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub default_storage_class: std::option::Option<String>,
    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,
    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub read_only: std::option::Option<bool>,
    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub guess_mime_type_enabled: std::option::Option<bool>,
    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub requester_pays: std::option::Option<bool>,
    /// Set this value to true to enable access control list (ACL) on the SMB file share.
    pub smbacl_enabled: std::option::Option<bool>,
    /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
    pub admin_user_list: std::option::Option<std::vec::Vec<String>>,
    /// A list of users or groups in the Active Directory that are allowed to access the file share.
    pub valid_user_list: std::option::Option<std::vec::Vec<String>>,
    /// A list of users or groups in the Active Directory that are not allowed to access the file share.
    pub invalid_user_list: std::option::Option<std::vec::Vec<String>>,
    /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
    pub audit_destination_arn: std::option::Option<String>,
    /// The authentication method of the file share: `ActiveDirectory` or `GuestAccess`.
    pub authentication: std::option::Option<String>,
    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl SmbFileShareInfo {
    /// The Amazon Resource Name (ARN) of the file share.
    pub fn file_share_arn(&self) -> std::option::Option<&str> {
        self.file_share_arn.as_deref()
    }

    /// The ID of the file share.
    pub fn file_share_id(&self) -> std::option::Option<&str> {
        self.file_share_id.as_deref()
    }

    /// The status of the file share: `CREATING`, `UPDATING`, `AVAILABLE` or `DELETING`.
    pub fn file_share_status(&self) -> std::option::Option<&str> {
        self.file_share_status.as_deref()
    }

    /// The Amazon Resource Name (ARN) of the gateway.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }

    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub fn kms_encrypted(&self) -> std::option::Option<bool> {
        self.kms_encrypted
    }

    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub fn kms_key(&self) -> std::option::Option<&str> {
        self.kms_key.as_deref()
    }

    /// The file share path used by the NFS or SMB client to identify the mount point.
    pub fn path(&self) -> std::option::Option<&str> {
        self.path.as_deref()
    }

    /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
    pub fn role(&self) -> std::option::Option<&str> {
        self.role.as_deref()
    }

    /// The ARN of the backend storage used for storing file data.
    pub fn location_arn(&self) -> std::option::Option<&str> {
        self.location_arn.as_deref()
    }

    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub fn default_storage_class(&self) -> std::option::Option<&str> {
        self.default_storage_class.as_deref()
    }

    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub fn object_acl(&self) -> std::option::Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }

    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub fn read_only(&self) -> std::option::Option<bool> {
        self.read_only
    }

    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub fn guess_mime_type_enabled(&self) -> std::option::Option<bool> {
        self.guess_mime_type_enabled
    }

    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub fn requester_pays(&self) -> std::option::Option<bool> {
        self.requester_pays
    }

    /// Set this value to true to enable access control list (ACL) on the SMB file share.
    pub fn smbacl_enabled(&self) -> std::option::Option<bool> {
        self.smbacl_enabled
    }

    /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
    pub fn admin_user_list(&self) -> std::option::Option<&[String]> {
        self.admin_user_list.as_deref()
    }

    /// A list of users or groups in the Active Directory that are allowed to access the file share.
    pub fn valid_user_list(&self) -> std::option::Option<&[String]> {
        self.valid_user_list.as_deref()
    }

    /// A list of users or groups in the Active Directory that are not allowed to access the file share.
    pub fn invalid_user_list(&self) -> std::option::Option<&[String]> {
        self.invalid_user_list.as_deref()
    }

    /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
    pub fn audit_destination_arn(&self) -> std::option::Option<&str> {
        self.audit_destination_arn.as_deref()
    }

    /// The authentication method of the file share: `ActiveDirectory` or `GuestAccess`.
    pub fn authentication(&self) -> std::option::Option<&str> {
        self.authentication.as_deref()
    }

    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Debug for SmbFileShareInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SmbFileShareInfo");
        formatter.field("file_share_arn", &self.file_share_arn);
        formatter.field("file_share_id", &self.file_share_id);
        formatter.field("file_share_status", &self.file_share_status);
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("kms_encrypted", &self.kms_encrypted);
        formatter.field("kms_key", &self.kms_key);
        formatter.field("path", &self.path);
        formatter.field("role", &self.role);
        formatter.field("location_arn", &self.location_arn);
        formatter.field("default_storage_class", &self.default_storage_class);
        formatter.field("object_acl", &self.object_acl);
        formatter.field("read_only", &self.read_only);
        formatter.field("guess_mime_type_enabled", &self.guess_mime_type_enabled);
        formatter.field("requester_pays", &self.requester_pays);
        formatter.field("smbacl_enabled", &self.smbacl_enabled);
        formatter.field("admin_user_list", &self.admin_user_list);
        formatter.field("valid_user_list", &self.valid_user_list);
        formatter.field("invalid_user_list", &self.invalid_user_list);
        formatter.field("audit_destination_arn", &self.audit_destination_arn);
        formatter.field("authentication", &self.authentication);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`SmbFileShareInfo`](crate::model::SmbFileShareInfo).
pub mod smb_file_share_info {

    /// A builder for [`SmbFileShareInfo`](crate::model::SmbFileShareInfo).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: std::option::Option<String>,
        pub(crate) file_share_id: std::option::Option<String>,
        pub(crate) file_share_status: std::option::Option<String>,
        pub(crate) gateway_arn: std::option::Option<String>,
        pub(crate) kms_encrypted: std::option::Option<bool>,
        pub(crate) kms_key: std::option::Option<String>,
        pub(crate) path: std::option::Option<String>,
        pub(crate) role: std::option::Option<String>,
        pub(crate) location_arn: std::option::Option<String>,
        pub(crate) default_storage_class: std::option::Option<String>,
        pub(crate) object_acl: std::option::Option<crate::model::ObjectAcl>,
        pub(crate) read_only: std::option::Option<bool>,
        pub(crate) guess_mime_type_enabled: std::option::Option<bool>,
        pub(crate) requester_pays: std::option::Option<bool>,
        pub(crate) smbacl_enabled: std::option::Option<bool>,
        pub(crate) admin_user_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) valid_user_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) invalid_user_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) audit_destination_arn: std::option::Option<String>,
        pub(crate) authentication: std::option::Option<String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn set_file_share_arn(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        /// The ID of the file share.
        pub fn file_share_id(mut self, input: impl Into<String>) -> Self {
            self.file_share_id = Some(input.into());
            self
        }
        /// The ID of the file share.
        pub fn set_file_share_id(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_id = input;
            self
        }
        /// The status of the file share: `CREATING`, `UPDATING`, `AVAILABLE` or `DELETING`.
        pub fn file_share_status(mut self, input: impl Into<String>) -> Self {
            self.file_share_status = Some(input.into());
            self
        }
        /// The status of the file share: `CREATING`, `UPDATING`, `AVAILABLE` or `DELETING`.
        pub fn set_file_share_status(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_status = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn set_gateway_arn(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn set_kms_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn set_kms_key(mut self, input: std::option::Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// The file share path used by the NFS or SMB client to identify the mount point.
        pub fn path(mut self, input: impl Into<String>) -> Self {
            self.path = Some(input.into());
            self
        }
        /// The file share path used by the NFS or SMB client to identify the mount point.
        pub fn set_path(mut self, input: std::option::Option<String>) -> Self {
            self.path = input;
            self
        }
        /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }
        /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
        pub fn set_role(mut self, input: std::option::Option<String>) -> Self {
            self.role = input;
            self
        }
        /// The ARN of the backend storage used for storing file data.
        pub fn location_arn(mut self, input: impl Into<String>) -> Self {
            self.location_arn = Some(input.into());
            self
        }
        /// The ARN of the backend storage used for storing file data.
        pub fn set_location_arn(mut self, input: std::option::Option<String>) -> Self {
            self.location_arn = input;
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn set_default_storage_class(mut self, input: std::option::Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn object_acl(mut self, input: impl Into<crate::model::ObjectAcl>) -> Self {
            self.object_acl = Some(input.into());
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn set_object_acl(mut self, input: std::option::Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn set_read_only(mut self, input: std::option::Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn set_guess_mime_type_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn set_requester_pays(mut self, input: std::option::Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        /// Set this value to true to enable access control list (ACL) on the SMB file share.
        pub fn smbacl_enabled(mut self, input: bool) -> Self {
            self.smbacl_enabled = Some(input);
            self
        }
        /// Set this value to true to enable access control list (ACL) on the SMB file share.
        pub fn set_smbacl_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.smbacl_enabled = input;
            self
        }
        /// Appends an item to `admin_user_list`.
        ///
        /// To override the contents of this collection use [`set_admin_user_list`](Self::set_admin_user_list).
        ///
        /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
        pub fn admin_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.admin_user_list.unwrap_or_default();
            v.push(input.into());
            self.admin_user_list = Some(v);
            self
        }
        /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
        pub fn set_admin_user_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.admin_user_list = input;
            self
        }
        /// Appends an item to `valid_user_list`.
        ///
        /// To override the contents of this collection use [`set_valid_user_list`](Self::set_valid_user_list).
        ///
        /// A list of users or groups in the Active Directory that are allowed to access the file share.
        pub fn valid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.valid_user_list.unwrap_or_default();
            v.push(input.into());
            self.valid_user_list = Some(v);
            self
        }
        /// A list of users or groups in the Active Directory that are allowed to access the file share.
        pub fn set_valid_user_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.valid_user_list = input;
            self
        }
        /// Appends an item to `invalid_user_list`.
        ///
        /// To override the contents of this collection use [`set_invalid_user_list`](Self::set_invalid_user_list).
        ///
        /// A list of users or groups in the Active Directory that are not allowed to access the file share.
        pub fn invalid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.invalid_user_list.unwrap_or_default();
            v.push(input.into());
            self.invalid_user_list = Some(v);
            self
        }
        /// A list of users or groups in the Active Directory that are not allowed to access the file share.
        pub fn set_invalid_user_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.invalid_user_list = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
        pub fn audit_destination_arn(mut self, input: impl Into<String>) -> Self {
            self.audit_destination_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
        pub fn set_audit_destination_arn(mut self, input: std::option::Option<String>) -> Self {
            self.audit_destination_arn = input;
            self
        }
        /// The authentication method of the file share: `ActiveDirectory` or `GuestAccess`.
        pub fn authentication(mut self, input: impl Into<String>) -> Self {
            self.authentication = Some(input.into());
            self
        }
        /// The authentication method of the file share: `ActiveDirectory` or `GuestAccess`.
        pub fn set_authentication(mut self, input: std::option::Option<String>) -> Self {
            self.authentication = input;
            self
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`SmbFileShareInfo`](crate::model::SmbFileShareInfo).
        pub fn build(self) -> crate::model::SmbFileShareInfo {
            crate::model::SmbFileShareInfo {
                file_share_arn: self.file_share_arn,
                file_share_id: self.file_share_id,
                file_share_status: self.file_share_status,
                gateway_arn: self.gateway_arn,
                kms_encrypted: self.kms_encrypted,
                kms_key: self.kms_key,
                path: self.path,
                role: self.role,
                location_arn: self.location_arn,
                default_storage_class: self.default_storage_class,
                object_acl: self.object_acl,
                read_only: self.read_only,
                guess_mime_type_enabled: self.guess_mime_type_enabled,
                requester_pays: self.requester_pays,
                smbacl_enabled: self.smbacl_enabled,
                admin_user_list: self.admin_user_list,
                valid_user_list: self.valid_user_list,
                invalid_user_list: self.invalid_user_list,
                audit_destination_arn: self.audit_destination_arn,
                authentication: self.authentication,
                tags: self.tags,
            }
        }
    }
}
impl SmbFileShareInfo {
    /// Creates a new builder-style object to manufacture [`SmbFileShareInfo`](crate::model::SmbFileShareInfo).
    pub fn builder() -> crate::model::smb_file_share_info::Builder {
        crate::model::smb_file_share_info::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::model::smb_file_share_info::Builder {
        crate::model::smb_file_share_info::Builder {
            file_share_arn: self.file_share_arn.clone(),
            file_share_id: self.file_share_id.clone(),
            file_share_status: self.file_share_status.clone(),
            gateway_arn: self.gateway_arn.clone(),
            kms_encrypted: self.kms_encrypted.clone(),
            kms_key: self.kms_key.clone(),
            path: self.path.clone(),
            role: self.role.clone(),
            location_arn: self.location_arn.clone(),
            default_storage_class: self.default_storage_class.clone(),
            object_acl: self.object_acl.clone(),
            read_only: self.read_only.clone(),
            guess_mime_type_enabled: self.guess_mime_type_enabled.clone(),
            requester_pays: self.requester_pays.clone(),
            smbacl_enabled: self.smbacl_enabled.clone(),
            admin_user_list: self.admin_user_list.clone(),
            valid_user_list: self.valid_user_list.clone(),
            invalid_user_list: self.invalid_user_list.clone(),
            audit_destination_arn: self.audit_destination_arn.clone(),
            authentication: self.authentication.clone(),
            tags: self.tags.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for SmbFileShareInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for SmbFileShareInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Lists iSCSI information about a volume.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct VolumeiScsiAttributes {
    /// The Amazon Resource Name (ARN) of the volume target, which includes the iSCSI name that initiators can use to connect to the target.
    pub target_arn: std::option::Option<String>,
    /// The network interface identifier.
    pub network_interface_id: std::option::Option<String>,
    /// The port used to communicate with iSCSI targets.
    pub network_interface_port: std::option::Option<i32>,
    /// The logical disk number.
    pub lun_number: std::option::Option<i32>,
    /// Indicates whether mutual CHAP is enabled for the iSCSI target.
    pub chap_enabled: std::option::Option<bool>,
}
impl VolumeiScsiAttributes {
    /// The Amazon Resource Name (ARN) of the volume target, which includes the iSCSI name that initiators can use to connect to the target.
    pub fn target_arn(&self) -> std::option::Option<&str> {
        self.target_arn.as_deref()
    }

    /// The network interface identifier.
    pub fn network_interface_id(&self) -> std::option::Option<&str> {
        self.network_interface_id.as_deref()
    }

    /// The port used to communicate with iSCSI targets.
    pub fn network_interface_port(&self) -> std::option::Option<i32> {
        self.network_interface_port
    }

    /// The logical disk number.
    pub fn lun_number(&self) -> std::option::Option<i32> {
        self.lun_number
    }

    /// Indicates whether mutual CHAP is enabled for the iSCSI target.
    pub fn chap_enabled(&self) -> std::option::Option<bool> {
        self.chap_enabled
    }
}
impl std::fmt::Debug for VolumeiScsiAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("VolumeiScsiAttributes");
        formatter.field("target_arn", &self.target_arn);
        formatter.field("network_interface_id", &self.network_interface_id);
        formatter.field("network_interface_port", &self.network_interface_port);
        formatter.field("lun_number", &self.lun_number);
        formatter.field("chap_enabled", &self.chap_enabled);
        formatter.finish()
    }
}
/// See [`VolumeiScsiAttributes`](crate::model::VolumeiScsiAttributes).
pub mod volumei_scsi_attributes {

    /// A builder for [`VolumeiScsiAttributes`](crate::model::VolumeiScsiAttributes).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) target_arn: std::option::Option<String>,
        pub(crate) network_interface_id: std::option::Option<String>,
        pub(crate) network_interface_port: std::option::Option<i32>,
        pub(crate) lun_number: std::option::Option<i32>,
        pub(crate) chap_enabled: std::option::Option<bool>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the volume target, which includes the iSCSI name that initiators can use to connect to the target.
        pub fn target_arn(mut self, input: impl Into<String>) -> Self {
            self.target_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the volume target, which includes the iSCSI name that initiators can use to connect to the target.
        pub fn set_target_arn(mut self, input: std::option::Option<String>) -> Self {
            self.target_arn = input;
            self
        }
        /// The network interface identifier.
        pub fn network_interface_id(mut self, input: impl Into<String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        /// The network interface identifier.
        pub fn set_network_interface_id(mut self, input: std::option::Option<String>) -> Self {
            self.network_interface_id = input;
            self
        }
        /// The port used to communicate with iSCSI targets.
        pub fn network_interface_port(mut self, input: i32) -> Self {
            self.network_interface_port = Some(input);
            self
        }
        /// The port used to communicate with iSCSI targets.
        pub fn set_network_interface_port(mut self, input: std::option::Option<i32>) -> Self {
            self.network_interface_port = input;
            self
        }
        /// The logical disk number.
        pub fn lun_number(mut self, input: i32) -> Self {
            self.lun_number = Some(input);
            self
        }
        /// The logical disk number.
        pub fn set_lun_number(mut self, input: std::option::Option<i32>) -> Self {
            self.lun_number = input;
            self
        }
        /// Indicates whether mutual CHAP is enabled for the iSCSI target.
        pub fn chap_enabled(mut self, input: bool) -> Self {
            self.chap_enabled = Some(input);
            self
        }
        /// Indicates whether mutual CHAP is enabled for the iSCSI target.
        pub fn set_chap_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.chap_enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`VolumeiScsiAttributes`](crate::model::VolumeiScsiAttributes).
        pub fn build(self) -> crate::model::VolumeiScsiAttributes {
            crate::model::VolumeiScsiAttributes {
                target_arn: self.target_arn,
                network_interface_id: self.network_interface_id,
                network_interface_port: self.network_interface_port,
                lun_number: self.lun_number,
                chap_enabled: self.chap_enabled,
            }
        }
    }
}
impl VolumeiScsiAttributes {
    /// Creates a new builder-style object to manufacture [`VolumeiScsiAttributes`](crate::model::VolumeiScsiAttributes).
    pub fn builder() -> crate::model::volumei_scsi_attributes::Builder {
        crate::model::volumei_scsi_attributes::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::model::volumei_scsi_attributes::Builder {
        crate::model::volumei_scsi_attributes::Builder {
            target_arn: self.target_arn.clone(),
            network_interface_id: self.network_interface_id.clone(),
            network_interface_port: self.network_interface_port.clone(),
            lun_number: self.lun_number.clone(),
            chap_enabled: self.chap_enabled.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for VolumeiScsiAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for VolumeiScsiAttributes {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Describes an iSCSI stored volume.
#[non_exhaustive]
#[derive(Clone)]
pub struct StorediScsiVolume {
    /// The Amazon Resource Name (ARN) of the storage volume.
    pub volume_arn: std::option::Option<String>,
    /// The unique identifier of the volume, e.g. `vol-AE4B946D`.
    pub volume_id: std::option::Option<String>,
    /// One of the VolumeType enumeration values describing the type of the volume.
    pub volume_type: std::option::Option<String>,
    /// One of the VolumeStatus values that indicates the state of the storage volume.
    pub volume_status: std::option::Option<String>,
    /// A value that indicates whether a storage volume is attached to, detached from, or is in the process of detaching from a gateway.
    pub volume_attachment_status: std::option::Option<String>,
    /// The size of the volume in bytes.
    pub volume_size_in_bytes: std::option::Option<i64>,
    /// Represents the percentage complete if the volume is restoring or bootstrapping that represents the percent of data transferred.
    pub volume_progress: std::option::Option<f64>,
    /// The ID of the local disk that was specified in the CreateStorediSCSIVolume operation.
    pub volume_disk_id: std::option::Option<String>,
    /// If the stored volume was created from a snapshot, this field contains the snapshot ID used.
    pub source_snapshot_id: std::option::Option<String>,
    /// Indicates if when the stored volume was created, existing data on the underlying local disk was preserved.
    pub preserved_existing_data: std::option::Option<bool>,
    /// An VolumeiSCSIAttributes object that represents a collection of iSCSI attributes for one stored volume.
    pub volumei_scsi_attributes: std::option::Option<crate::model::VolumeiScsiAttributes>,
    /// The date the volume was created.
    pub created_date: std::option::Option<aws_smithy_types::DateTime>,
    /// The size of the data stored on the volume in bytes.
    pub volume_used_in_bytes: std::option::Option<i64>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub kms_key: std::option::Option<String>,
    /// The name of the iSCSI target used by an initiator to connect to a volume and used as a suffix for the target ARN.
    pub target_name: std::option::Option<String>,
}
impl StorediScsiVolume {
    /// The Amazon Resource Name (ARN) of the storage volume.
    pub fn volume_arn(&self) -> std::option::Option<&str> {
        self.volume_arn.as_deref()
    }

    /// The unique identifier of the volume, e.g. `vol-AE4B946D`.
    pub fn volume_id(&self) -> std::option::Option<&str> {
        self.volume_id.as_deref()
    }

    /// One of the VolumeType enumeration values describing the type of the volume.
    pub fn volume_type(&self) -> std::option::Option<&str> {
        self.volume_type.as_deref()
    }

    /// One of the VolumeStatus values that indicates the state of the storage volume.
    pub fn volume_status(&self) -> std::option::Option<&str> {
        self.volume_status.as_deref()
    }

    /// A value that indicates whether a storage volume is attached to, detached from, or is in the process of detaching from a gateway.
    pub fn volume_attachment_status(&self) -> std::option::Option<&str> {
        self.volume_attachment_status.as_deref()
    }

    /// The size of the volume in bytes.
    pub fn volume_size_in_bytes(&self) -> std::option::Option<i64> {
        self.volume_size_in_bytes
    }

    /// Represents the percentage complete if the volume is restoring or bootstrapping that represents the percent of data transferred.
    pub fn volume_progress(&self) -> std::option::Option<f64> {
        self.volume_progress
    }

    /// The ID of the local disk that was specified in the CreateStorediSCSIVolume operation.
    pub fn volume_disk_id(&self) -> std::option::Option<&str> {
        self.volume_disk_id.as_deref()
    }

    /// If the stored volume was created from a snapshot, this field contains the snapshot ID used.
    pub fn source_snapshot_id(&self) -> std::option::Option<&str> {
        self.source_snapshot_id.as_deref()
    }

    /// Indicates if when the stored volume was created, existing data on the underlying local disk was preserved.
    pub fn preserved_existing_data(&self) -> std::option::Option<bool> {
        self.preserved_existing_data
    }

    /// An VolumeiSCSIAttributes object that represents a collection of iSCSI attributes for one stored volume.
    pub fn volumei_scsi_attributes(&self) -> std::option::Option<&crate::model::VolumeiScsiAttributes> {
        self.volumei_scsi_attributes.as_ref()
    }

    /// The date the volume was created.
    pub fn created_date(&self) -> std::option::Option<&aws_smithy_types::DateTime> {
        self.created_date.as_ref()
    }

    /// The size of the data stored on the volume in bytes.
    pub fn volume_used_in_bytes(&self) -> std::option::Option<i64> {
        self.volume_used_in_bytes
    }

    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub fn kms_key(&self) -> std::option::Option<&str> {
        self.kms_key.as_deref()
    }

    /// The name of the iSCSI target used by an initiator to connect to a volume and used as a suffix for the target ARN.
    pub fn target_name(&self) -> std::option::Option<&str> {
        self.target_name.as_deref()
    }
}
impl std::fmt::Debug for StorediScsiVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StorediScsiVolume");
        formatter.field("volume_arn", &self.volume_arn);
        formatter.field("volume_id", &self.volume_id);
        formatter.field("volume_type", &self.volume_type);
        formatter.field("volume_status", &self.volume_status);
        formatter.field("volume_attachment_status", &self.volume_attachment_status);
        formatter.field("volume_size_in_bytes", &self.volume_size_in_bytes);
        formatter.field("volume_progress", &self.volume_progress);
        formatter.field("volume_disk_id", &self.volume_disk_id);
        formatter.field("source_snapshot_id", &self.source_snapshot_id);
        formatter.field("preserved_existing_data", &self.preserved_existing_data);
        formatter.field("volumei_scsi_attributes", &self.volumei_scsi_attributes);
        formatter.field("created_date", &self.created_date);
        formatter.field("volume_used_in_bytes", &self.volume_used_in_bytes);
        formatter.field("kms_key", &self.kms_key);
        formatter.field("target_name", &self.target_name);
        formatter.finish()
    }
}
/// See [`StorediScsiVolume`](crate::model::StorediScsiVolume).
pub mod storedi_scsi_volume {

    /// A builder for [`StorediScsiVolume`](crate::model::StorediScsiVolume).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: std::option::Option<String>,
        pub(crate) volume_id: std::option::Option<String>,
        pub(crate) volume_type: std::option::Option<String>,
        pub(crate) volume_status: std::option::Option<String>,
        pub(crate) volume_attachment_status: std::option::Option<String>,
        pub(crate) volume_size_in_bytes: std::option::Option<i64>,
        pub(crate) volume_progress: std::option::Option<f64>,
        pub(crate) volume_disk_id: std::option::Option<String>,
        pub(crate) source_snapshot_id: std::option::Option<String>,
        pub(crate) preserved_existing_data: std::option::Option<bool>,
        pub(crate) volumei_scsi_attributes: std::option::Option<crate::model::VolumeiScsiAttributes>,
        pub(crate) created_date: std::option::Option<aws_smithy_types::DateTime>,
        pub(crate) volume_used_in_bytes: std::option::Option<i64>,
        pub(crate) kms_key: std::option::Option<String>,
        pub(crate) target_name: std::option::Option<String>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the storage volume.
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the storage volume.
        pub fn set_volume_arn(mut self, input: std::option::Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        /// The unique identifier of the volume, e.g. `vol-AE4B946D`.
        pub fn volume_id(mut self, input: impl Into<String>) -> Self {
            self.volume_id = Some(input.into());
            self
        }
        /// The unique identifier of the volume, e.g. `vol-AE4B946D`.
        pub fn set_volume_id(mut self, input: std::option::Option<String>) -> Self {
            self.volume_id = input;
            self
        }
        /// One of the VolumeType enumeration values describing the type of the volume.
        pub fn volume_type(mut self, input: impl Into<String>) -> Self {
            self.volume_type = Some(input.into());
            self
        }
        /// One of the VolumeType enumeration values describing the type of the volume.
        pub fn set_volume_type(mut self, input: std::option::Option<String>) -> Self {
            self.volume_type = input;
            self
        }
        /// One of the VolumeStatus values that indicates the state of the storage volume.
        pub fn volume_status(mut self, input: impl Into<String>) -> Self {
            self.volume_status = Some(input.into());
            self
        }
        /// One of the VolumeStatus values that indicates the state of the storage volume.
        pub fn set_volume_status(mut self, input: std::option::Option<String>) -> Self {
            self.volume_status = input;
            self
        }
        /// A value that indicates whether a storage volume is attached to, detached from, or is in the process of detaching from a gateway.
        pub fn volume_attachment_status(mut self, input: impl Into<String>) -> Self {
            self.volume_attachment_status = Some(input.into());
            self
        }
        /// A value that indicates whether a storage volume is attached to, detached from, or is in the process of detaching from a gateway.
        pub fn set_volume_attachment_status(mut self, input: std::option::Option<String>) -> Self {
            self.volume_attachment_status = input;
            self
        }
        /// The size of the volume in bytes.
        pub fn volume_size_in_bytes(mut self, input: i64) -> Self {
            self.volume_size_in_bytes = Some(input);
            self
        }
        /// The size of the volume in bytes.
        pub fn set_volume_size_in_bytes(mut self, input: std::option::Option<i64>) -> Self {
            self.volume_size_in_bytes = input;
            self
        }
        /// Represents the percentage complete if the volume is restoring or bootstrapping that represents the percent of data transferred.
        pub fn volume_progress(mut self, input: f64) -> Self {
            self.volume_progress = Some(input);
            self
        }
        /// Represents the percentage complete if the volume is restoring or bootstrapping that represents the percent of data transferred.
        pub fn set_volume_progress(mut self, input: std::option::Option<f64>) -> Self {
            self.volume_progress = input;
            self
        }
        /// The ID of the local disk that was specified in the CreateStorediSCSIVolume operation.
        pub fn volume_disk_id(mut self, input: impl Into<String>) -> Self {
            self.volume_disk_id = Some(input.into());
            self
        }
        /// The ID of the local disk that was specified in the CreateStorediSCSIVolume operation.
        pub fn set_volume_disk_id(mut self, input: std::option::Option<String>) -> Self {
            self.volume_disk_id = input;
            self
        }
        /// If the stored volume was created from a snapshot, this field contains the snapshot ID used.
        pub fn source_snapshot_id(mut self, input: impl Into<String>) -> Self {
            self.source_snapshot_id = Some(input.into());
            self
        }
        /// If the stored volume was created from a snapshot, this field contains the snapshot ID used.
        pub fn set_source_snapshot_id(mut self, input: std::option::Option<String>) -> Self {
            self.source_snapshot_id = input;
            self
        }
        /// Indicates if when the stored volume was created, existing data on the underlying local disk was preserved.
        pub fn preserved_existing_data(mut self, input: bool) -> Self {
            self.preserved_existing_data = Some(input);
            self
        }
        /// Indicates if when the stored volume was created, existing data on the underlying local disk was preserved.
        pub fn set_preserved_existing_data(mut self, input: std::option::Option<bool>) -> Self {
            self.preserved_existing_data = input;
            self
        }
        /// An VolumeiSCSIAttributes object that represents a collection of iSCSI attributes for one stored volume.
        pub fn volumei_scsi_attributes(mut self, input: crate::model::VolumeiScsiAttributes) -> Self {
            self.volumei_scsi_attributes = Some(input);
            self
        }
        /// An VolumeiSCSIAttributes object that represents a collection of iSCSI attributes for one stored volume.
        pub fn set_volumei_scsi_attributes(mut self, input: std::option::Option<crate::model::VolumeiScsiAttributes>) -> Self {
            self.volumei_scsi_attributes = input;
            self
        }
        /// The date the volume was created.
        pub fn created_date(mut self, input: aws_smithy_types::DateTime) -> Self {
            self.created_date = Some(input);
            self
        }
        /// The date the volume was created.
        pub fn set_created_date(mut self, input: std::option::Option<aws_smithy_types::DateTime>) -> Self {
            self.created_date = input;
            self
        }
        /// The size of the data stored on the volume in bytes.
        pub fn volume_used_in_bytes(mut self, input: i64) -> Self {
            self.volume_used_in_bytes = Some(input);
            self
        }
        /// The size of the data stored on the volume in bytes.
        pub fn set_volume_used_in_bytes(mut self, input: std::option::Option<i64>) -> Self {
            self.volume_used_in_bytes = input;
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn set_kms_key(mut self, input: std::option::Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// The name of the iSCSI target used by an initiator to connect to a volume and used as a suffix for the target ARN.
        pub fn target_name(mut self, input: impl Into<String>) -> Self {
            self.target_name = Some(input.into());
            self
        }
        /// The name of the iSCSI target used by an initiator to connect to a volume and used as a suffix for the target ARN.
        pub fn set_target_name(mut self, input: std::option::Option<String>) -> Self {
            self.target_name = input;
            self
        }
        /// Consumes the builder and constructs a [`StorediScsiVolume`](crate::model::StorediScsiVolume).
        pub fn build(self) -> crate::model::StorediScsiVolume {
            crate::model::StorediScsiVolume {
                volume_arn: self.volume_arn,
                volume_id: self.volume_id,
                volume_type: self.volume_type,
                volume_status: self.volume_status,
                volume_attachment_status: self.volume_attachment_status,
                volume_size_in_bytes: self.volume_size_in_bytes,
                volume_progress: self.volume_progress,
                volume_disk_id: self.volume_disk_id,
                source_snapshot_id: self.source_snapshot_id,
                preserved_existing_data: self.preserved_existing_data,
                volumei_scsi_attributes: self.volumei_scsi_attributes,
                created_date: self.created_date,
                volume_used_in_bytes: self.volume_used_in_bytes,
                kms_key: self.kms_key,
                target_name: self.target_name,
            }
        }
    }
}
impl StorediScsiVolume {
    /// Creates a new builder-style object to manufacture [`StorediScsiVolume`](crate::model::StorediScsiVolume).
    pub fn builder() -> crate::model::storedi_scsi_volume::Builder {
        crate::model::storedi_scsi_volume::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::model::storedi_scsi_volume::Builder {
        crate::model::storedi_scsi_volume::Builder {
            volume_arn: self.volume_arn.clone(),
            volume_id: self.volume_id.clone(),
            volume_type: self.volume_type.clone(),
            volume_status: self.volume_status.clone(),
            volume_attachment_status: self.volume_attachment_status.clone(),
            volume_size_in_bytes: self.volume_size_in_bytes.clone(),
            volume_progress: self.volume_progress.clone(),
            volume_disk_id: self.volume_disk_id.clone(),
            source_snapshot_id: self.source_snapshot_id.clone(),
            preserved_existing_data: self.preserved_existing_data.clone(),
            volumei_scsi_attributes: self.volumei_scsi_attributes.clone(),
            created_date: self.created_date.clone(),
            volume_used_in_bytes: self.volume_used_in_bytes.clone(),
            kms_key: self.kms_key.clone(),
            target_name: self.target_name.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for StorediScsiVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::cmp::PartialEq for StorediScsiVolume {
    fn eq(&self, other: &Self) -> bool {
        self.volume_arn == other.volume_arn
            && self.volume_id == other.volume_id
            && self.volume_type == other.volume_type
            && self.volume_status == other.volume_status
            && self.volume_attachment_status == other.volume_attachment_status
            && self.volume_size_in_bytes == other.volume_size_in_bytes
            && aws_smithy_types::hash_code::optional_double_eq(self.volume_progress, other.volume_progress)
            && self.volume_disk_id == other.volume_disk_id
            && self.source_snapshot_id == other.source_snapshot_id
            && self.preserved_existing_data == other.preserved_existing_data
            && self.volumei_scsi_attributes == other.volumei_scsi_attributes
            && self.created_date == other.created_date
            && self.volume_used_in_bytes == other.volume_used_in_bytes
            && self.kms_key == other.kms_key
            && self.target_name == other.target_name
    }
}
impl std::cmp::Eq for StorediScsiVolume {}
impl std::hash::Hash for StorediScsiVolume {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Describes a virtual tape object.
#[non_exhaustive]
#[derive(Clone)]
pub struct Tape {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    pub tape_arn: std::option::Option<String>,
    /// The barcode that identifies a specific virtual tape.
    pub tape_barcode: std::option::Option<String>,
    /// The date the virtual tape was created.
    pub tape_created_date: std::option::Option<aws_smithy_types::DateTime>,
    /// The size, in bytes, of the virtual tape capacity.
    pub tape_size_in_bytes: std::option::Option<i64>,
    /// The current state of the virtual tape.
    pub tape_status: std::option::Option<String>,
    /// The virtual tape library (VTL) device that the virtual tape is associated with.
    pub vtl_device: std::option::Option<String>,
    /// For archiving virtual tapes, indicates how much data remains to be uploaded before archiving is complete. Range: 0 (not started) to 100 (complete).
    pub progress: std::option::Option<f64>,
    /// The size, in bytes, of data stored on the virtual tape.
    pub tape_used_in_bytes: std::option::Option<i64>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub kms_key: std::option::Option<String>,
    /// The ID of the pool that contains tapes that will be archived.
    pub pool_id: std::option::Option<String>,
}
impl Tape {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    pub fn tape_arn(&self) -> std::option::Option<&str> {
        self.tape_arn.as_deref()
    }

    /// The barcode that identifies a specific virtual tape.
    pub fn tape_barcode(&self) -> std::option::Option<&str> {
        self.tape_barcode.as_deref()
    }

    /// The date the virtual tape was created.
    pub fn tape_created_date(&self) -> std::option::Option<&aws_smithy_types::DateTime> {
        self.tape_created_date.as_ref()
    }

    /// The size, in bytes, of the virtual tape capacity.
    pub fn tape_size_in_bytes(&self) -> std::option::Option<i64> {
        self.tape_size_in_bytes
    }

    /// The current state of the virtual tape.
    pub fn tape_status(&self) -> std::option::Option<&str> {
        self.tape_status.as_deref()
    }

    /// The virtual tape library (VTL) device that the virtual tape is associated with.
    pub fn vtl_device(&self) -> std::option::Option<&str> {
        self.vtl_device.as_deref()
    }

    /// For archiving virtual tapes, indicates how much data remains to be uploaded before archiving is complete. Range: 0 (not started) to 100 (complete).
    pub fn progress(&self) -> std::option::Option<f64> {
        self.progress
    }

    /// The size, in bytes, of data stored on the virtual tape.
    pub fn tape_used_in_bytes(&self) -> std::option::Option<i64> {
        self.tape_used_in_bytes
    }

    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub fn kms_key(&self) -> std::option::Option<&str> {
        self.kms_key.as_deref()
    }

    /// The ID of the pool that contains tapes that will be archived.
    pub fn pool_id(&self) -> std::option::Option<&str> {
        self.pool_id.as_deref()
    }
}
impl std::fmt::Debug for Tape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Tape");
        formatter.field("tape_arn", &self.tape_arn);
        formatter.field("tape_barcode", &self.tape_barcode);
        formatter.field("tape_created_date", &self.tape_created_date);
        formatter.field("tape_size_in_bytes", &self.tape_size_in_bytes);
        formatter.field("tape_status", &self.tape_status);
        formatter.field("vtl_device", &self.vtl_device);
        formatter.field("progress", &self.progress);
        formatter.field("tape_used_in_bytes", &self.tape_used_in_bytes);
        formatter.field("kms_key", &self.kms_key);
        formatter.field("pool_id", &self.pool_id);
        formatter.finish()
    }
}
/// See [`Tape`](crate::model::Tape).
pub mod tape {

    /// A builder for [`Tape`](crate::model::Tape).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_arn: std::option::Option<String>,
        pub(crate) tape_barcode: std::option::Option<String>,
        pub(crate) tape_created_date: std::option::Option<aws_smithy_types::DateTime>,
        pub(crate) tape_size_in_bytes: std::option::Option<i64>,
        pub(crate) tape_status: std::option::Option<String>,
        pub(crate) vtl_device: std::option::Option<String>,
        pub(crate) progress: std::option::Option<f64>,
        pub(crate) tape_used_in_bytes: std::option::Option<i64>,
        pub(crate) kms_key: std::option::Option<String>,
        pub(crate) pool_id: std::option::Option<String>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the virtual tape.
        pub fn tape_arn(mut self, input: impl Into<String>) -> Self {
            self.tape_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the virtual tape.
        pub fn set_tape_arn(mut self, input: std::option::Option<String>) -> Self {
            self.tape_arn = input;
            self
        }
        /// The barcode that identifies a specific virtual tape.
        pub fn tape_barcode(mut self, input: impl Into<String>) -> Self {
            self.tape_barcode = Some(input.into());
            self
        }
        /// The barcode that identifies a specific virtual tape.
        pub fn set_tape_barcode(mut self, input: std::option::Option<String>) -> Self {
            self.tape_barcode = input;
            self
        }
        /// The date the virtual tape was created.
        pub fn tape_created_date(mut self, input: aws_smithy_types::DateTime) -> Self {
            self.tape_created_date = Some(input);
            self
        }
        /// The date the virtual tape was created.
        pub fn set_tape_created_date(mut self, input: std::option::Option<aws_smithy_types::DateTime>) -> Self {
            self.tape_created_date = input;
            self
        }
        /// The size, in bytes, of the virtual tape capacity.
        pub fn tape_size_in_bytes(mut self, input: i64) -> Self {
            self.tape_size_in_bytes = Some(input);
            self
        }
        /// The size, in bytes, of the virtual tape capacity.
        pub fn set_tape_size_in_bytes(mut self, input: std::option::Option<i64>) -> Self {
            self.tape_size_in_bytes = input;
            self
        }
        /// The current state of the virtual tape.
        pub fn tape_status(mut self, input: impl Into<String>) -> Self {
            self.tape_status = Some(input.into());
            self
        }
        /// The current state of the virtual tape.
        pub fn set_tape_status(mut self, input: std::option::Option<String>) -> Self {
            self.tape_status = input;
            self
        }
        /// The virtual tape library (VTL) device that the virtual tape is associated with.
        pub fn vtl_device(mut self, input: impl Into<String>) -> Self {
            self.vtl_device = Some(input.into());
            self
        }
        /// The virtual tape library (VTL) device that the virtual tape is associated with.
        pub fn set_vtl_device(mut self, input: std::option::Option<String>) -> Self {
            self.vtl_device = input;
            self
        }
        /// For archiving virtual tapes, indicates how much data remains to be uploaded before archiving is complete. Range: 0 (not started) to 100 (complete).
        pub fn progress(mut self, input: f64) -> Self {
            self.progress = Some(input);
            self
        }
        /// For archiving virtual tapes, indicates how much data remains to be uploaded before archiving is complete. Range: 0 (not started) to 100 (complete).
        pub fn set_progress(mut self, input: std::option::Option<f64>) -> Self {
            self.progress = input;
            self
        }
        /// The size, in bytes, of data stored on the virtual tape.
        pub fn tape_used_in_bytes(mut self, input: i64) -> Self {
            self.tape_used_in_bytes = Some(input);
            self
        }
        /// The size, in bytes, of data stored on the virtual tape.
        pub fn set_tape_used_in_bytes(mut self, input: std::option::Option<i64>) -> Self {
            self.tape_used_in_bytes = input;
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn set_kms_key(mut self, input: std::option::Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// The ID of the pool that contains tapes that will be archived.
        pub fn pool_id(mut self, input: impl Into<String>) -> Self {
            self.pool_id = Some(input.into());
            self
        }
        /// The ID of the pool that contains tapes that will be archived.
        pub fn set_pool_id(mut self, input: std::option::Option<String>) -> Self {
            self.pool_id = input;
            self
        }
        /// Consumes the builder and constructs a [`Tape`](crate::model::Tape).
        pub fn build(self) -> crate::model::Tape {
            crate::model::Tape {
                tape_arn: self.tape_arn,
                tape_barcode: self.tape_barcode,
                tape_created_date: self.tape_created_date,
                tape_size_in_bytes: self.tape_size_in_bytes,
                tape_status: self.tape_status,
                vtl_device: self.vtl_device,
                progress: self.progress,
                tape_used_in_bytes: self.tape_used_in_bytes,
                kms_key: self.kms_key,
                pool_id: self.pool_id,
            }
        }
    }
}
impl Tape {
    /// Creates a new builder-style object to manufacture [`Tape`](crate::model::Tape).
    pub fn builder() -> crate::model::tape::Builder {
        crate::model::tape::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::model::tape::Builder {
        crate::model::tape::Builder {
            tape_arn: self.tape_arn.clone(),
            tape_barcode: self.tape_barcode.clone(),
            tape_created_date: self.tape_created_date.clone(),
            tape_size_in_bytes: self.tape_size_in_bytes.clone(),
            tape_status: self.tape_status.clone(),
            vtl_device: self.vtl_device.clone(),
            progress: self.progress.clone(),
            tape_used_in_bytes: self.tape_used_in_bytes.clone(),
            kms_key: self.kms_key.clone(),
            pool_id: self.pool_id.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for Tape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::cmp::PartialEq for Tape {
    fn eq(&self, other: &Self) -> bool {
        self.tape_arn == other.tape_arn
            && self.tape_barcode == other.tape_barcode
            && self.tape_created_date == other.tape_created_date
            && self.tape_size_in_bytes == other.tape_size_in_bytes
            && self.tape_status == other.tape_status
            && self.vtl_device == other.vtl_device
            && aws_smithy_types::hash_code::optional_double_eq(self.progress, other.progress)
            && self.tape_used_in_bytes == other.tape_used_in_bytes
            && self.kms_key == other.kms_key
            && self.pool_id == other.pool_id
    }
}
impl std::cmp::Eq for Tape {}
impl std::hash::Hash for Tape {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Provides additional information about an error that was returned by the service.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct StorageGatewayError {
    /// Additional information about the error.
    pub error_code: std::option::Option<crate::model::ErrorCode>,
    /// Human-readable text that provides detail about the error that occurred.
    pub error_details: std::option::Option<std::collections::HashMap<String, String>>,
}
impl StorageGatewayError {
    /// Additional information about the error.
    pub fn error_code(&self) -> std::option::Option<&crate::model::ErrorCode> {
        self.error_code.as_ref()
    }

    /// Human-readable text that provides detail about the error that occurred.
    pub fn error_details(&self) -> std::option::Option<&std::collections::HashMap<String, String>> {
        self.error_details.as_ref()
    }
}
impl std::fmt::Debug for StorageGatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StorageGatewayError");
        formatter.field("error_code", &self.error_code);
        formatter.field("error_details", &self.error_details);
        formatter.finish()
    }
}
/// See [`StorageGatewayError`](crate::model::StorageGatewayError).
pub mod storage_gateway_error {

    /// A builder for [`StorageGatewayError`](crate::model::StorageGatewayError).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) error_code: std::option::Option<crate::model::ErrorCode>,
        pub(crate) error_details: std::option::Option<std::collections::HashMap<String, String>>,
    }
    impl Builder {
        /// Additional information about the error.
        pub fn error_code(mut self, input: impl Into<crate::model::ErrorCode>) -> Self {
            self.error_code = Some(input.into());
            self
        }
        /// Additional information about the error.
        pub fn set_error_code(mut self, input: std::option::Option<crate::model::ErrorCode>) -> Self {
            self.error_code = input;
            self
        }
        /// Adds a key-value pair to `error_details`.
        ///
        /// To override the contents of this collection use [`set_error_details`](Self::set_error_details).
        ///
        /// Human-readable text that provides detail about the error that occurred.
        pub fn error_details(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.error_details.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.error_details = Some(hash_map);
            self
        }
        /// Human-readable text that provides detail about the error that occurred.
        pub fn set_error_details(mut self, input: std::option::Option<std::collections::HashMap<String, String>>) -> Self {
            self.error_details = input;
            self
        }
        /// Consumes the builder and constructs a [`StorageGatewayError`](crate::model::StorageGatewayError).
        pub fn build(self) -> crate::model::StorageGatewayError {
            crate::model::StorageGatewayError {
                error_code: self.error_code,
                error_details: self.error_details,
            }
        }
    }
}
impl StorageGatewayError {
    /// Creates a new builder-style object to manufacture [`StorageGatewayError`](crate::model::StorageGatewayError).
    pub fn builder() -> crate::model::storage_gateway_error::Builder {
        crate::model::storage_gateway_error::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::model::storage_gateway_error::Builder {
        crate::model::storage_gateway_error::Builder {
            error_code: self.error_code.clone(),
            error_details: self.error_details.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for StorageGatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for StorageGatewayError {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}
