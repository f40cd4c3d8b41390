//! Lenient JSON body extractor for `POST /update`
//!
//! Mirrors the behaviour of a classic JSON body parser rather than axum's
//! `Json`:
//! - a request whose content type is not `application/json` is not read at
//!   all, and decodes to `{}`
//! - only UTF-8 bodies are accepted; a leading byte order mark is skipped
//! - an empty JSON body decodes to `{}`
//! - the top-level value must be an object or an array

use super::error::Problem;
use crate::contract::SettingsError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde_json::{Map, Value};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Request body decoded as a raw JSON document
#[derive(Debug, Clone, PartialEq)]
pub struct LenientJson(pub Value);

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Some(content_type) = json_content_type(req.headers()) else {
            return Ok(Self(empty_object()));
        };

        let path = req.uri().path().to_owned();
        check_charset(&content_type)
            .map_err(|e| Problem::from(e).with_instance(path.as_str()))?;

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            Problem::new(rejection.status(), "Unreadable Body")
                .with_detail(rejection.body_text())
                .with_instance(path.as_str())
        })?;

        decode_body(&bytes)
            .map(Self)
            .map_err(|e| Problem::from(e).with_instance(path))
    }
}

/// Parsed content type, if the request declares an `application/json` body
pub fn json_content_type(headers: &HeaderMap) -> Option<mime::Mime> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
        .filter(|mime| {
            mime.type_() == mime::APPLICATION
                && mime.subtype() == mime::JSON
                && mime.suffix().is_none()
        })
}

/// Whether the request declares an `application/json` body
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    json_content_type(headers).is_some()
}

/// Refuse any declared charset other than UTF-8
pub fn check_charset(content_type: &mime::Mime) -> Result<(), SettingsError> {
    match content_type.get_param(mime::CHARSET) {
        None => Ok(()),
        Some(charset) if charset.as_str().eq_ignore_ascii_case("utf-8") => Ok(()),
        Some(charset) => Err(SettingsError::UnsupportedCharset {
            charset: charset.as_str().to_ascii_lowercase(),
        }),
    }
}

/// Decode a JSON body, accepting only objects and arrays at the top level
pub fn decode_body(bytes: &[u8]) -> Result<Value, SettingsError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if bytes.is_empty() {
        return Ok(empty_object());
    }

    match first_significant_byte(bytes) {
        Some(b'{') | Some(b'[') => {}
        Some(other) => {
            return Err(SettingsError::UnsupportedBody {
                details: format!(
                    "expected a JSON object or array, found '{}'",
                    char::from(other).escape_default()
                ),
            });
        }
        None => {
            return Err(SettingsError::UnsupportedBody {
                details: "body contains only whitespace".to_string(),
            });
        }
    }

    serde_json::from_slice(bytes).map_err(|e| SettingsError::MalformedBody {
        details: e.to_string(),
    })
}

fn first_significant_byte(bytes: &[u8]) -> Option<u8> {
    bytes
        .iter()
        .copied()
        .find(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
