//! Request extractors shared by handlers.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A JSON body that may be absent.
///
/// An empty body, or a body that is only whitespace or the literal `null`,
/// extracts as `OptionalJson(None)`. Any other body must deserialize into
/// `T`, otherwise the request is rejected with `400 BAD_REQUEST`.
///
/// Unlike `axum::Json`, no `Content-Type` header is required.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        parse_optional(&bytes).map(OptionalJson)
    }
}

fn parse_optional<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}
