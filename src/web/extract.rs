//! Request extractors.

use super::error::ApiError;
use crate::account::domain::UserId;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header naming the acting user.
pub const USER_HEADER: &str = "x-user-id";

/// The user a request acts for.
///
/// Taken from the `x-user-id` header; requests without it act for
/// [`UserId::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_HEADER) else {
            return Ok(Self(UserId::default_user()));
        };
        let raw = value.to_str().map_err(|_| {
            ApiError::Validation(format!("{USER_HEADER} header must be visible ASCII"))
        })?;
        UserId::new(raw)
            .map(Self)
            .map_err(|err| ApiError::Validation(err.to_string()))
    }
}
