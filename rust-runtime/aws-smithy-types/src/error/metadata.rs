/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error metadata

use std::collections::HashMap;
use std::fmt;

/// Trait to retrieve error metadata from a result
pub trait ProvideErrorMetadata {
    /// Returns error metadata, which includes the error code, message,
    /// request ID, and potentially additional information.
    fn meta(&self) -> &ErrorMetadata;

    /// Returns the error code if it's available.
    fn code(&self) -> Option<&str> {
        self.meta().code()
    }

    /// Returns the error message, if there is one.
    fn message(&self) -> Option<&str> {
        self.meta().message()
    }

    /// Returns the request ID the service assigned to the failed request, if there is one.
    fn request_id(&self) -> Option<&str> {
        self.meta().request_id()
    }
}

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct ErrorMetadata {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    extras: Option<HashMap<&'static str, String>>,
}

/// Builder for [`ErrorMetadata`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: ErrorMetadata,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request ID the error happened for.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Set a custom field on the error metadata
    ///
    /// Typically, these will be accessed with an extension trait:
    /// ```rust
    /// use aws_smithy_types::error::metadata::ErrorMetadata;
    /// const HOST_ID: &str = "host_id";
    /// trait GatewayErrorExt {
    ///     fn host_id(&self) -> Option<&str>;
    /// }
    ///
    /// impl GatewayErrorExt for ErrorMetadata {
    ///     fn host_id(&self) -> Option<&str> {
    ///         self.extra(HOST_ID)
    ///     }
    /// }
    ///
    /// let meta = ErrorMetadata::builder().custom(HOST_ID, "x-1234").build();
    /// assert_eq!(meta.host_id(), Some("x-1234"));
    /// ```
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner
            .extras
            .get_or_insert_with(HashMap::new)
            .insert(key, value.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> ErrorMetadata {
        self.inner
    }
}

impl ErrorMetadata {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Returns the request ID.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
    /// Returns additional information about the error if it's present.
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras
            .as_ref()
            .and_then(|extras| extras.get(key).map(|k| k.as_str()))
    }

    /// Creates an `ErrorMetadata` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `ErrorMetadata` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorMetadata for ErrorMetadata {
    fn meta(&self) -> &ErrorMetadata {
        self
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        if let Some(extras) = &self.extras {
            let mut keys: Vec<_> = extras.keys().collect();
            keys.sort();
            for k in keys {
                fmt.field(k, &extras[k]);
            }
        }
        fmt.finish()
    }
}

impl std::error::Error for ErrorMetadata {}

#[cfg(test)]
mod test {
    use super::{ErrorMetadata, ProvideErrorMetadata};

    #[test]
    fn metadata_accessors() {
        let meta = ErrorMetadata::builder()
            .code("InternalServerError")
            .message("boom")
            .request_id("req-1")
            .custom("retry", "false")
            .build();
        assert_eq!(meta.code(), Some("InternalServerError"));
        assert_eq!(ProvideErrorMetadata::message(&meta), Some("boom"));
        assert_eq!(meta.request_id(), Some("req-1"));
        assert_eq!(meta.extra("retry"), Some("false"));
        assert_eq!(meta.extra("missing"), None);
    }

    #[test]
    fn metadata_display() {
        let meta = ErrorMetadata::builder()
            .code("Throttled")
            .message("slow down")
            .build();
        assert_eq!(
            format!("{}", meta),
            r#"Error { code: "Throttled", message: "slow down" }"#
        );
        assert_eq!(format!("{}", ErrorMetadata::default()), "Error");
    }

    #[test]
    fn into_builder_keeps_fields() {
        let meta = ErrorMetadata::builder().code("A").build();
        let meta = meta.into_builder().message("m").build();
        assert_eq!(meta.code(), Some("A"));
        assert_eq!(meta.message(), Some("m"));
    }
}
