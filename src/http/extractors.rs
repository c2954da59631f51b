//! Request extractors for the user routes.
//!
//! - `JsonOrForm`: decode the body as JSON or form-encoded data
//! - `UserIdParam`: the `:id` path segment, `None` when it is not a valid id

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::domain::UserId;

/// Body encodings accepted on write routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
    /// Anything else, including a missing `Content-Type`. Decodes as empty.
    Other,
}

impl BodyKind {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
            return Self::Other;
        };

        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/json" || essence.ends_with("+json") {
            Self::Json
        } else if essence == "application/x-www-form-urlencoded" {
            Self::Form
        } else {
            Self::Other
        }
    }
}

/// Decode `bytes` according to `kind`. Empty bodies and unknown encodings
/// yield `T::default()`; malformed bodies are server errors.
pub fn decode_body<T>(kind: BodyKind, bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    match kind {
        BodyKind::Json => serde_json::from_slice(bytes)
            .map_err(|e| ApiError::internal().with_source(anyhow::Error::new(e))),
        BodyKind::Form => serde_urlencoded::from_bytes(bytes)
            .map_err(|e| ApiError::internal().with_source(anyhow::Error::new(e))),
        BodyKind::Other => Ok(T::default()),
    }
}

/// Request body decoded from JSON or `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = BodyKind::from_headers(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::internal().with_source(anyhow::anyhow!(e.body_text())))?;

        decode_body(kind, &bytes).map(Self)
    }
}

/// The `:id` path segment. Anything that is not a base-10 unsigned integer
/// becomes `None`, which handlers answer with "User not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdParam(pub Option<UserId>);

pub fn parse_user_id(raw: &str) -> Option<UserId> {
    raw.parse().ok()
}

#[async_trait]
impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(raw)| parse_user_id(&raw));

        Ok(Self(id))
    }
}
