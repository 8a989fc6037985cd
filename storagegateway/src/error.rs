/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors returned by the service and by request construction.
//!
//! The service models three exceptions. Every operation can fail with any of them, so each
//! operation error wraps the same set of kinds plus an `Unhandled` kind for error codes this
//! version of the model does not know about.

use crate::json_errors::ModeledError;
use aws_smithy_json::error::JsonSerializeError;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use aws_smithy_types::ErrorMetadata;
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

macro_rules! exception {
    ($(#[$docs:meta])* $name:ident, $module:ident) => {
        $(#[$docs])*
        #[non_exhaustive]
        #[derive(Clone, PartialEq, Eq, Debug)]
        pub struct $name {
            /// A human-readable message describing the error that occurred.
            pub message: std::option::Option<String>,
            /// A `StorageGatewayError` that provides more detail about the cause of the error.
            pub error: std::option::Option<crate::model::StorageGatewayError>,
            pub(crate) meta: ErrorMetadata,
        }
        impl $name {
            /// A human-readable message describing the error that occurred.
            pub fn message(&self) -> std::option::Option<&str> {
                self.message.as_deref()
            }
            /// A `StorageGatewayError` that provides more detail about the cause of the error.
            pub fn error(&self) -> std::option::Option<&crate::model::StorageGatewayError> {
                self.error.as_ref()
            }
            #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($name), "`].")]
            pub fn builder() -> crate::error::$module::Builder {
                crate::error::$module::Builder::default()
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))?;
                if let Some(inner) = &self.message {
                    write!(f, ": {}", inner)?;
                }
                Ok(())
            }
        }
        impl std::error::Error for $name {}
        impl ProvideErrorMetadata for $name {
            fn meta(&self) -> &ErrorMetadata {
                &self.meta
            }
        }
        #[doc = concat!("See [`", stringify!($name), "`](crate::error::", stringify!($name), ").")]
        pub mod $module {
            use aws_smithy_types::ErrorMetadata;

            #[doc = concat!("A builder for [`", stringify!($name), "`](crate::error::", stringify!($name), ").")]
            #[derive(Default, Clone, PartialEq, Debug)]
            pub struct Builder {
                pub(crate) message: std::option::Option<String>,
                pub(crate) error: std::option::Option<crate::model::StorageGatewayError>,
                pub(crate) meta: std::option::Option<ErrorMetadata>,
            }
            impl Builder {
                /// A human-readable message describing the error that occurred.
                pub fn message(mut self, input: impl Into<String>) -> Self {
                    self.message = Some(input.into());
                    self
                }
                /// A human-readable message describing the error that occurred.
                pub fn set_message(mut self, input: std::option::Option<String>) -> Self {
                    self.message = input;
                    self
                }
                /// A `StorageGatewayError` that provides more detail about the cause of the error.
                pub fn error(mut self, input: crate::model::StorageGatewayError) -> Self {
                    self.error = Some(input);
                    self
                }
                /// A `StorageGatewayError` that provides more detail about the cause of the error.
                pub fn set_error(
                    mut self,
                    input: std::option::Option<crate::model::StorageGatewayError>,
                ) -> Self {
                    self.error = input;
                    self
                }
                /// Sets the error metadata (code, message and request ID) of the response.
                pub fn meta(mut self, meta: ErrorMetadata) -> Self {
                    self.meta = Some(meta);
                    self
                }
                /// Sets the error metadata (code, message and request ID) of the response.
                pub fn set_meta(mut self, meta: std::option::Option<ErrorMetadata>) -> Self {
                    self.meta = meta;
                    self
                }
                #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`](crate::error::", stringify!($name), ").")]
                pub fn build(self) -> crate::error::$name {
                    crate::error::$name {
                        message: self.message,
                        error: self.error,
                        meta: self.meta.unwrap_or_default(),
                    }
                }
            }
        }
    };
}

exception!(
    /// An internal server error has occurred during the request. For more information, see the
    /// error and message fields.
    InternalServerError,
    internal_server_error
);
exception!(
    /// An exception occurred because an invalid gateway request was issued to the service. For
    /// more information, see the error and message fields.
    InvalidGatewayRequestException,
    invalid_gateway_request_exception
);
exception!(
    /// An internal server error has occurred because the service is unavailable. For more
    /// information, see the error and message fields.
    ServiceUnavailableError,
    service_unavailable_error
);

/// Conversion from the errors every operation shares.
pub(crate) trait FromModeledError {
    fn from_modeled(err: ModeledError) -> Self;
}

macro_rules! operation_error {
    ($op:literal, $error:ident, $kind:ident) => {
        #[doc = concat!("Error type for the `", $op, "` operation.")]
        #[non_exhaustive]
        #[derive(Debug)]
        pub struct $error {
            /// Kind of error that occurred.
            pub kind: $kind,
            /// Additional metadata about the error, including error code, message, and request ID.
            pub(crate) meta: ErrorMetadata,
        }
        #[doc = concat!("Types of errors that can occur for the `", $op, "` operation.")]
        #[non_exhaustive]
        #[derive(Debug)]
        pub enum $kind {
            /// An internal server error has occurred during the request.
            InternalServerError(crate::error::InternalServerError),
            /// An invalid gateway request was issued to the service.
            InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
            /// The service is unavailable.
            ServiceUnavailableError(crate::error::ServiceUnavailableError),
            /// An unexpected error, e.g. invalid JSON returned by the service or an unknown error code.
            Unhandled(BoxError),
        }
        impl fmt::Display for $error {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.kind {
                    $kind::InternalServerError(inner) => write!(f, "{}", inner),
                    $kind::InvalidGatewayRequestException(inner) => write!(f, "{}", inner),
                    $kind::ServiceUnavailableError(inner) => write!(f, "{}", inner),
                    $kind::Unhandled(inner) => write!(f, "{}", inner),
                }
            }
        }
        impl ProvideErrorMetadata for $error {
            fn meta(&self) -> &ErrorMetadata {
                &self.meta
            }
        }
        impl $error {
            #[doc = concat!("Creates a new `", stringify!($error), "`.")]
            pub fn new(kind: $kind, meta: ErrorMetadata) -> Self {
                Self { kind, meta }
            }

            #[doc = concat!("Creates the `", stringify!($error), "::Unhandled` variant from any error type.")]
            pub fn unhandled(err: impl Into<BoxError>) -> Self {
                Self {
                    kind: $kind::Unhandled(err.into()),
                    meta: Default::default(),
                }
            }

            #[doc = concat!("Creates the `", stringify!($error), "::Unhandled` variant from error metadata.")]
            pub fn generic(err: ErrorMetadata) -> Self {
                Self {
                    meta: err.clone(),
                    kind: $kind::Unhandled(err.into()),
                }
            }

            /// Returns the error message if one is available.
            pub fn message(&self) -> Option<&str> {
                self.meta.message()
            }

            /// Returns error metadata, which includes the error code, message,
            /// request ID, and potentially additional information.
            pub fn meta(&self) -> &ErrorMetadata {
                &self.meta
            }

            /// Returns the request ID if it's available.
            pub fn request_id(&self) -> Option<&str> {
                self.meta.request_id()
            }

            /// Returns the error code if it's available.
            pub fn code(&self) -> Option<&str> {
                self.meta.code()
            }

            #[doc = concat!("Returns `true` if the error kind is `", stringify!($kind), "::InternalServerError`.")]
            pub fn is_internal_server_error(&self) -> bool {
                matches!(&self.kind, $kind::InternalServerError(_))
            }

            #[doc = concat!("Returns `true` if the error kind is `", stringify!($kind), "::InvalidGatewayRequestException`.")]
            pub fn is_invalid_gateway_request_exception(&self) -> bool {
                matches!(&self.kind, $kind::InvalidGatewayRequestException(_))
            }

            #[doc = concat!("Returns `true` if the error kind is `", stringify!($kind), "::ServiceUnavailableError`.")]
            pub fn is_service_unavailable_error(&self) -> bool {
                matches!(&self.kind, $kind::ServiceUnavailableError(_))
            }
        }
        impl std::error::Error for $error {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match &self.kind {
                    $kind::InternalServerError(inner) => Some(inner),
                    $kind::InvalidGatewayRequestException(inner) => Some(inner),
                    $kind::ServiceUnavailableError(inner) => Some(inner),
                    $kind::Unhandled(inner) => Some(inner.as_ref()),
                }
            }
        }
        impl FromModeledError for $error {
            fn from_modeled(err: ModeledError) -> Self {
                match err {
                    ModeledError::InternalServerError(inner) => {
                        let meta = inner.meta.clone();
                        Self::new($kind::InternalServerError(inner), meta)
                    }
                    ModeledError::InvalidGatewayRequestException(inner) => {
                        let meta = inner.meta.clone();
                        Self::new($kind::InvalidGatewayRequestException(inner), meta)
                    }
                    ModeledError::ServiceUnavailableError(inner) => {
                        let meta = inner.meta.clone();
                        Self::new($kind::ServiceUnavailableError(inner), meta)
                    }
                    ModeledError::Unhandled(meta) => Self::generic(meta),
                }
            }
        }
        impl From<$error> for Error {
            fn from(err: $error) -> Self {
                match err.kind {
                    $kind::InternalServerError(inner) => Error::InternalServerError(inner),
                    $kind::InvalidGatewayRequestException(inner) => {
                        Error::InvalidGatewayRequestException(inner)
                    }
                    $kind::ServiceUnavailableError(inner) => Error::ServiceUnavailableError(inner),
                    $kind::Unhandled(inner) => Error::Unhandled(inner),
                }
            }
        }
        impl From<crate::result::SdkError<$error>> for Error {
            fn from(err: crate::result::SdkError<$error>) -> Self {
                match err {
                    crate::result::SdkError::ServiceError { err, .. } => err.into(),
                    _ => Error::Unhandled(err.into()),
                }
            }
        }
    };
}

operation_error!("ActivateGateway", ActivateGatewayError, ActivateGatewayErrorKind);
operation_error!("AddTagsToResource", AddTagsToResourceError, AddTagsToResourceErrorKind);
operation_error!("CreateNFSFileShare", CreateNfsFileShareError, CreateNfsFileShareErrorKind);
operation_error!("CreateSMBFileShare", CreateSmbFileShareError, CreateSmbFileShareErrorKind);
operation_error!(
    "CreateStorediSCSIVolume",
    CreateStorediScsiVolumeError,
    CreateStorediScsiVolumeErrorKind
);
operation_error!("DescribeCache", DescribeCacheError, DescribeCacheErrorKind);
operation_error!(
    "DescribeNFSFileShares",
    DescribeNfsFileSharesError,
    DescribeNfsFileSharesErrorKind
);
operation_error!(
    "DescribeSMBFileShares",
    DescribeSmbFileSharesError,
    DescribeSmbFileSharesErrorKind
);
operation_error!(
    "DescribeStorediSCSIVolumes",
    DescribeStorediScsiVolumesError,
    DescribeStorediScsiVolumesErrorKind
);
operation_error!("DescribeTapes", DescribeTapesError, DescribeTapesErrorKind);
operation_error!("JoinDomain", JoinDomainError, JoinDomainErrorKind);
operation_error!("UpdateNFSFileShare", UpdateNfsFileShareError, UpdateNfsFileShareErrorKind);
operation_error!("UpdateSMBFileShare", UpdateSmbFileShareError, UpdateSmbFileShareErrorKind);

/// All possible error types for this service.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// An internal server error has occurred during the request.
    InternalServerError(crate::error::InternalServerError),
    /// An invalid gateway request was issued to the service.
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    /// The service is unavailable.
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unhandled error occurred.
    Unhandled(BoxError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InternalServerError(inner) => write!(f, "{}", inner),
            Error::InvalidGatewayRequestException(inner) => write!(f, "{}", inner),
            Error::ServiceUnavailableError(inner) => write!(f, "{}", inner),
            Error::Unhandled(inner) => write!(f, "{}", inner),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InternalServerError(inner) => Some(inner),
            Error::InvalidGatewayRequestException(inner) => Some(inner),
            Error::ServiceUnavailableError(inner) => Some(inner),
            Error::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// A request could not be constructed.
#[derive(Debug)]
pub struct BuildError {
    kind: BuildErrorKind,
}

#[derive(Debug)]
enum BuildErrorKind {
    MissingRegion,
    InvalidEndpoint {
        url: String,
        source: http::uri::InvalidUri,
    },
    Serialization(JsonSerializeError),
    InvalidRequest(http::Error),
}

impl BuildError {
    pub(crate) fn missing_region() -> Self {
        Self {
            kind: BuildErrorKind::MissingRegion,
        }
    }

    pub(crate) fn invalid_endpoint(url: String, source: http::uri::InvalidUri) -> Self {
        Self {
            kind: BuildErrorKind::InvalidEndpoint { url, source },
        }
    }

    pub(crate) fn serialization(source: JsonSerializeError) -> Self {
        Self {
            kind: BuildErrorKind::Serialization(source),
        }
    }

    pub(crate) fn invalid_request(source: http::Error) -> Self {
        Self {
            kind: BuildErrorKind::InvalidRequest(source),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BuildErrorKind::MissingRegion => write!(f, "no region or endpoint URL was configured"),
            BuildErrorKind::InvalidEndpoint { url, .. } => {
                write!(f, "`{}` is not a valid endpoint URL", url)
            }
            BuildErrorKind::Serialization(_) => write!(f, "failed to serialize the input"),
            BuildErrorKind::InvalidRequest(_) => write!(f, "failed to assemble the HTTP request"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BuildErrorKind::MissingRegion => None,
            BuildErrorKind::InvalidEndpoint { source, .. } => Some(source),
            BuildErrorKind::Serialization(source) => Some(source),
            BuildErrorKind::InvalidRequest(source) => Some(source),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{ErrorCode, StorageGatewayError};

    fn detail() -> StorageGatewayError {
        StorageGatewayError::builder()
            .error_code(ErrorCode::GatewayInternalError)
            .error_details("cause", "disk full")
            .build()
    }

    #[test]
    fn exception_carries_message_and_detail() {
        let err = InternalServerError::builder()
            .message("boom")
            .error(detail())
            .build();
        assert_eq!(err.message(), Some("boom"));
        assert_eq!(err.error(), Some(&detail()));
        assert_eq!(err.to_string(), "InternalServerError: boom");
        assert_eq!(
            InvalidGatewayRequestException::builder().build().to_string(),
            "InvalidGatewayRequestException"
        );
    }

    #[test]
    fn operation_error_dispatch() {
        let meta = ErrorMetadata::builder()
            .code("ServiceUnavailableError")
            .request_id("req-1")
            .build();
        let inner = ServiceUnavailableError::builder()
            .message("try later")
            .meta(meta)
            .build();
        let err = JoinDomainError::from_modeled(ModeledError::ServiceUnavailableError(inner));
        assert!(err.is_service_unavailable_error());
        assert!(!err.is_internal_server_error());
        assert_eq!(err.code(), Some("ServiceUnavailableError"));
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(err.to_string(), "ServiceUnavailableError: try later");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unhandled_errors_keep_metadata() {
        let meta = ErrorMetadata::builder()
            .code("ThrottlingException")
            .message("slow down")
            .build();
        let err = DescribeTapesError::from_modeled(ModeledError::Unhandled(meta));
        assert!(matches!(err.kind, DescribeTapesErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.message(), Some("slow down"));

        let service: Error = err.into();
        assert!(matches!(service, Error::Unhandled(_)));
    }

    #[test]
    fn service_error_from_operation_error() {
        let err = ActivateGatewayError::new(
            ActivateGatewayErrorKind::InternalServerError(
                InternalServerError::builder().message("boom").build(),
            ),
            ErrorMetadata::default(),
        );
        match Error::from(err) {
            Error::InternalServerError(inner) => assert_eq!(inner.message(), Some("boom")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn build_error_sources() {
        let err = BuildError::missing_region();
        assert_eq!(err.to_string(), "no region or endpoint URL was configured");
        assert!(std::error::Error::source(&err).is_none());
    }
}
