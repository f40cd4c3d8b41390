//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::SettingsError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: SettingsError) -> Problem {
    match error {
        SettingsError::MalformedBody { details } => {
            Problem::new(StatusCode::BAD_REQUEST, "Malformed JSON").with_detail(details)
        }

        SettingsError::UnsupportedBody { details } => {
            Problem::new(StatusCode::BAD_REQUEST, "Unsupported JSON Body").with_detail(details)
        }

        SettingsError::UnsupportedCharset { charset } => Problem::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported Charset",
        )
        .with_detail(format!("unsupported charset \"{}\"", charset.to_ascii_uppercase())),

        SettingsError::SchemaValidation { errors } => Problem::new(
            StatusCode::BAD_REQUEST,
            "Schema Validation Failed",
        )
        .with_detail(format!("Validation errors: {}", errors.join(", "))),

        SettingsError::Malformed { details } => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Stored Settings Malformed",
        )
        .with_detail(details),

        SettingsError::Internal => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )
        .with_detail("An unexpected error occurred"),
    }
}

impl From<SettingsError> for Problem {
    fn from(error: SettingsError) -> Self {
        map_domain_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_body_is_bad_request() {
        let problem = map_domain_error(SettingsError::MalformedBody {
            details: "EOF while parsing an object".to_string(),
        });
        assert_eq!(problem.status, 400);
        assert_eq!(problem.type_uri, "https://httpstatuses.io/400");
        assert_eq!(problem.detail.as_deref(), Some("EOF while parsing an object"));
    }

    #[test]
    fn test_schema_errors_are_joined() {
        let problem = map_domain_error(SettingsError::SchemaValidation {
            errors: vec!["a".to_string(), "b".to_string()],
        });
        assert_eq!(problem.status, 400);
        assert_eq!(problem.detail.as_deref(), Some("Validation errors: a, b"));
    }

    #[test]
    fn test_unsupported_charset_is_415() {
        let problem = map_domain_error(SettingsError::UnsupportedCharset {
            charset: "utf-16".to_string(),
        });
        assert_eq!(problem.status, 415);
        assert_eq!(problem.detail.as_deref(), Some("unsupported charset \"UTF-16\""));
    }

    #[test]
    fn test_internal_hides_details() {
        let problem = map_domain_error(SettingsError::Internal);
        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail.as_deref(), Some("An unexpected error occurred"));
    }

    #[test]
    fn test_problem_response_headers() {
        let response = Problem::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large")
            .with_instance("/update")
            .into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            PROBLEM_CONTENT_TYPE
        );
    }

    #[test]
    fn test_problem_serialization_skips_empty_fields() {
        let value = serde_json::to_value(Problem::new(StatusCode::BAD_REQUEST, "Bad")).unwrap();
        assert_eq!(value["type"], "https://httpstatuses.io/400");
        assert!(value.get("detail").is_none());
        assert!(value.get("instance").is_none());
    }
}
