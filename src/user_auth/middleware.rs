use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::sync::Arc;

use super::service::AuthService;
use crate::account::AccountId;
use crate::gateway::state::AppState;
use crate::gateway::types::ApiError;

/// Identity injected into request extensions once Basic-auth verification
/// has succeeded.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub username: String,
}

/// Axum middleware enforcing HTTP Basic authentication on protected routes.
pub async fn basic_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::missing_auth("Missing Authorization header"))?;

    let (username, password) = decode_basic_auth(auth_header)?;

    let account = AuthService::verify_credentials(&state.db, &username, &password)
        .await
        .map_err(|e| {
            tracing::error!("credential verification failed: {}", e);
            ApiError::internal("Credential verification failed")
        })?
        .ok_or_else(|| ApiError::auth_failed("Invalid username or password"))?;

    request.extensions_mut().insert(AuthenticatedAccount {
        id: account.id,
        username: account.username,
    });

    Ok(next.run(request).await)
}

/// Decode an `Authorization: Basic base64(username:password)` header.
fn decode_basic_auth(header: &str) -> Result<(String, String), ApiError> {
    let encoded = header
        .strip_prefix("Basic ")
        .ok_or_else(|| ApiError::auth_failed("Invalid authorization scheme"))?;

    let decoded = BASE64
        .decode(encoded.trim())
        .map_err(|_| ApiError::auth_failed("Invalid authorization encoding"))?;

    let decoded = String::from_utf8(decoded)
        .map_err(|_| ApiError::auth_failed("Invalid authorization encoding"))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| ApiError::auth_failed("Invalid authorization format"))?;

    Ok((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(credentials: &str) -> String {
        format!("Basic {}", BASE64.encode(credentials.as_bytes()))
    }

    #[test]
    fn test_decode_valid_header() {
        let (username, password) = decode_basic_auth(&encode("alice:hunter2")).unwrap();
        assert_eq!(username, "alice");
        assert_eq!(password, "hunter2");
    }

    #[test]
    fn test_decode_password_may_contain_colons() {
        let (username, password) = decode_basic_auth(&encode("alice:hu:nt:er2")).unwrap();
        assert_eq!(username, "alice");
        assert_eq!(password, "hu:nt:er2");
    }

    #[test]
    fn test_decode_rejects_wrong_scheme() {
        assert!(decode_basic_auth("Bearer abcdef").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(decode_basic_auth("Basic not-base64!!!").is_err());
    }

    #[test]
    fn test_decode_rejects_missing_separator() {
        assert!(decode_basic_auth(&encode("alicehunter2")).is_err());
    }
}
