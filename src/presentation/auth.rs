// HTTP Basic authentication guard
use crate::infrastructure::config::Credentials;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Extractor that rejects the request unless it carries the configured
/// Basic credentials.
#[derive(Debug, Clone, Copy)]
pub struct RequireBasicAuth;

#[async_trait]
impl FromRequestParts<Arc<AppState>> for RequireBasicAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let (username, password) = basic_credentials(&parts.headers)?;

        if credentials_match(&username, &password, &state.credentials) {
            Ok(Self)
        } else {
            tracing::debug!(%username, "rejected basic auth credentials");
            Err(ApiError::Unauthorized)
        }
    }
}

/// Decode `Authorization: Basic <base64(user:pass)>`.
/// A missing header or another scheme is `NotAuthenticated`; a Basic header
/// that doesn't decode to `user:pass` is `InvalidCredentials`.
fn basic_credentials(headers: &HeaderMap) -> Result<(String, String), ApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::NotAuthenticated)?;
    let value = value.trim();
    let (scheme, encoded) = value.split_once(' ').unwrap_or((value, ""));
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(ApiError::NotAuthenticated);
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| ApiError::InvalidCredentials)?;
    let decoded = String::from_utf8(decoded).map_err(|_| ApiError::InvalidCredentials)?;
    let (username, password) = decoded
        .split_once(':')
        .ok_or(ApiError::InvalidCredentials)?;
    Ok((username.to_string(), password.to_string()))
}

/// Both fields are always compared, each in constant time.
pub fn credentials_match(username: &str, password: &str, expected: &Credentials) -> bool {
    let user_ok = username.as_bytes().ct_eq(expected.username.as_bytes());
    let pass_ok = password.as_bytes().ct_eq(expected.password.as_bytes());
    (user_ok & pass_ok).into()
}
