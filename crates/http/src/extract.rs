//! Request body extraction.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// JSON body extractor that treats anything but a JSON object as "no fields".
///
/// Handlers receive `T::default()` unless the request carries a JSON
/// `Content-Type` and an object body. Array bodies have no named fields and
/// also yield the default. Bodies that do not parse, or whose top level is a
/// bare string, number, boolean or null, are rejected with a 400.
///
/// `T` should declare its fields as `Option<serde_json::Value>` so any JSON
/// value is accepted as-is.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::bad_request(format!("Invalid JSON body: {}", e)))?;

        match body {
            Value::Object(_) => serde_json::from_value(body)
                .map(Self)
                .map_err(|e| AppError::bad_request(format!("Invalid JSON body: {}", e))),
            Value::Array(_) => Ok(Self(T::default())),
            _ => Err(AppError::bad_request(
                "Invalid JSON body: expected an object or an array",
            )),
        }
    }
}

/// Strict equality between two optional body fields.
///
/// Absent only equals absent and `null` only equals `null`. Numbers compare
/// by numeric value, strings and booleans by content. Arrays and objects are
/// distinct values and never compare equal, not even to themselves.
pub fn strict_eq(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(Value::Null), Some(Value::Null)) => true,
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a == b,
        (Some(Value::String(a)), Some(Value::String(b))) => a == b,
        (Some(Value::Number(a)), Some(Value::Number(b))) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        _ => false,
    }
}
