/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Failure modes of an operation.

use crate::error::BuildError;
use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync>;

/// Failing result of an operation.
///
/// Transport is left to the caller, so the raw response carried by the response variants is the
/// status, headers and fully read body that were handed to `parse_response`.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was never sent.
    ConstructionFailure(BoxError),

    /// A response was received but it was not parseable according to the protocol, for example
    /// a malformed body or an enum value this version of the model does not know.
    ResponseError {
        /// The response that could not be parsed.
        raw: http::Response<Vec<u8>>,
        /// Why parsing failed.
        err: BoxError,
    },

    /// An error response was received from the service.
    ServiceError {
        /// The error response.
        raw: http::Response<Vec<u8>>,
        /// The operation error parsed from the response.
        err: E,
    },
}

impl<E> SdkError<E> {
    /// Returns the operation error if the service reported one.
    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Returns the raw response, if one was received.
    pub fn raw_response(&self) -> Option<&http::Response<Vec<u8>>> {
        match self {
            SdkError::ConstructionFailure(_) => None,
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
        }
    }
}

impl<E> From<BuildError> for SdkError<E> {
    fn from(err: BuildError) -> Self {
        SdkError::ConstructionFailure(err.into())
    }
}

impl<E> fmt::Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::ResponseError { raw, err } => write!(
                f,
                "failed to parse response with status {}: {}",
                raw.status(),
                err
            ),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err) | SdkError::ResponseError { err, .. } => {
                Some(err.as_ref())
            }
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}
