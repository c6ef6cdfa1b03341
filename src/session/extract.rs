//! Request extractor for the session a call belongs to.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::SessionError;

/// Header carrying the session id on every session-scoped request.
pub const SESSION_HEADER: &str = "x-session-id";

/// The session id from the `x-session-id` header.
///
/// Rejects with a 400 when the header is missing or not a UUID. Whether the
/// session exists is checked by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| SessionError::Malformed(raw.to_string()))
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = SessionError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SESSION_HEADER)
            .ok_or(SessionError::MissingContext)?;
        let raw = value
            .to_str()
            .map_err(|_| SessionError::Malformed("<non-ascii>".to_string()))?;
        Self::parse(raw)
    }
}
