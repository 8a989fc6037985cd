/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{InternalServerError, InvalidGatewayRequestException, ServiceUnavailableError};
use aws_smithy_json::codec::JsonCodec;
use aws_smithy_json::error::JsonDeserializeError;
use aws_smithy_types::error::metadata::{Builder as ErrorMetadataBuilder, ErrorMetadata};
use http::HeaderMap;
use serde_json::{Map, Value};

/// The errors every operation can return, before they are wrapped in an operation error.
#[derive(Debug)]
pub(crate) enum ModeledError {
    InternalServerError(InternalServerError),
    InvalidGatewayRequestException(InvalidGatewayRequestException),
    ServiceUnavailableError(ServiceUnavailableError),
    Unhandled(ErrorMetadata),
}

fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn body_string<'a>(body: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| body.get(*key).and_then(Value::as_str))
}

/// Reads the error code, message and request ID of an error response.
///
/// The `X-Amzn-Errortype` header takes precedence over the `__type` or `code` member of the
/// body. A body that is not a JSON object contributes nothing.
pub(crate) fn parse_error_metadata(headers: &HeaderMap, body: &[u8]) -> ErrorMetadataBuilder {
    let body = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let mut builder = ErrorMetadata::builder();
    let header_code = headers
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok());
    if let Some(code) = header_code.or_else(|| body_string(&body, &["__type", "code"])) {
        builder = builder.code(sanitize_error_code(code));
    }
    if let Some(message) = body_string(&body, &["message", "Message", "errorMessage"]) {
        builder = builder.message(message);
    }
    if let Some(request_id) = headers
        .get("x-amzn-requestid")
        .and_then(|value| value.to_str().ok())
    {
        builder = builder.request_id(request_id);
    }
    builder
}

/// Maps an error response onto the exception its error code names.
///
/// Codes outside the model become [`ModeledError::Unhandled`]. Fails only when the body of a
/// modeled exception cannot be deserialized.
pub(crate) fn parse_error(
    response: &http::Response<Vec<u8>>,
) -> Result<ModeledError, JsonDeserializeError> {
    let body = response.body();
    let meta = parse_error_metadata(response.headers(), body).build();
    tracing::debug!(
        status = response.status().as_u16(),
        code = meta.code(),
        request_id = meta.request_id(),
        "dispatching error response"
    );
    let codec = JsonCodec::default();
    Ok(match meta.code() {
        Some("InternalServerError") => {
            let mut err: InternalServerError = codec.deserialize(body)?;
            err.meta = meta;
            ModeledError::InternalServerError(err)
        }
        Some("InvalidGatewayRequestException") => {
            let mut err: InvalidGatewayRequestException = codec.deserialize(body)?;
            err.meta = meta;
            ModeledError::InvalidGatewayRequestException(err)
        }
        Some("ServiceUnavailableError") => {
            let mut err: ServiceUnavailableError = codec.deserialize(body)?;
            err.meta = meta;
            ModeledError::ServiceUnavailableError(err)
        }
        _ => ModeledError::Unhandled(meta),
    })
}

#[cfg(test)]
mod test {
    use super::{parse_error, parse_error_metadata, sanitize_error_code, ModeledError};
    use crate::model::ErrorCode;
    use http::HeaderMap;
    use tracing_test::traced_test;

    fn response(status: u16, headers: &[(&str, &str)], body: &str) -> http::Response<Vec<u8>> {
        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(body.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn error_codes_are_sanitized() {
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("com.amazonaws.storagegateway#InternalServerError"),
            "InternalServerError"
        );
        assert_eq!(sanitize_error_code("ServiceUnavailableError"), "ServiceUnavailableError");
    }

    #[test]
    fn header_code_wins_over_body() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-errortype", "InternalServerError".parse().unwrap());
        headers.insert("x-amzn-requestid", "req-123".parse().unwrap());
        let meta = parse_error_metadata(
            &headers,
            br#"{"__type": "InvalidGatewayRequestException", "message": "boom"}"#,
        )
        .build();
        assert_eq!(meta.code(), Some("InternalServerError"));
        assert_eq!(meta.message(), Some("boom"));
        assert_eq!(meta.request_id(), Some("req-123"));
    }

    #[test]
    fn unparseable_body_yields_empty_metadata() {
        let meta = parse_error_metadata(&HeaderMap::new(), b"<html>503</html>").build();
        assert_eq!(meta.code(), None);
        assert_eq!(meta.message(), None);
    }

    #[test]
    #[traced_test]
    fn modeled_exception_keeps_detail() {
        let response = response(
            400,
            &[("x-amzn-requestid", "req-9")],
            r#"{
                "__type": "com.amazonaws.storagegateway#InvalidGatewayRequestException",
                "message": "The specified gateway was not found.",
                "error": {"errorCode": "GatewayNotFound", "errorDetails": {"gatewayArn": "arn"}}
            }"#,
        );
        let err = match parse_error(&response).unwrap() {
            ModeledError::InvalidGatewayRequestException(err) => err,
            other => panic!("unexpected: {:?}", other),
        };
        assert_eq!(err.message(), Some("The specified gateway was not found."));
        let detail = err.error().unwrap();
        assert_eq!(detail.error_code(), Some(&ErrorCode::GatewayNotFound));
        assert_eq!(
            detail.error_details().unwrap().get("gatewayArn").map(String::as_str),
            Some("arn")
        );
        assert!(logs_contain("dispatching error response"));
    }

    #[test]
    fn unknown_codes_are_unhandled() {
        let response = response(400, &[], r#"{"__type": "ThrottlingException", "message": "slow"}"#);
        match parse_error(&response).unwrap() {
            ModeledError::Unhandled(meta) => {
                assert_eq!(meta.code(), Some("ThrottlingException"));
                assert_eq!(meta.message(), Some("slow"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn malformed_exception_body_is_an_error() {
        let response = response(
            500,
            &[("X-Amzn-Errortype", "InternalServerError")],
            r#"{"message": 5}"#,
        );
        assert!(parse_error(&response).is_err());
    }
}
