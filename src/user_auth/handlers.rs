//! Registration and profile handlers

use axum::{Extension, Json, extract::State};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use super::middleware::AuthenticatedAccount;
use super::service::AuthService;
use crate::account::{AccountRepository, Username};
use crate::gateway::state::AppState;
use crate::gateway::types::{AccountProfile, Amount, ApiError, ApiResponse, ApiResult, created, ok};

/// Account registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "alice")]
    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: String,
    #[schema(example = "hunter2x")]
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    /// Optional starting balance; defaults to 0.00
    #[schema(value_type = Option<String>, example = "1000.00")]
    pub initial_balance: Option<Amount>,
}

/// Register a new account
///
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account registered", body = ApiResponse<AccountProfile>),
        (status = 400, description = "Invalid username, password or initial balance"),
        (status = 409, description = "Username already exists"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<AccountProfile> {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(e.to_string()).into_err();
    }
    let username = Username::new(&req.username)?;
    let initial_balance = req
        .initial_balance
        .map(|amount| amount.inner())
        .unwrap_or(Decimal::ZERO);

    match AuthService::register(&state.db, &username, &req.password, initial_balance).await {
        Ok(account) => created(account.into()),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Get the authenticated account's profile
///
/// GET /api/v1/user/me
#[utoipa::path(
    get,
    path = "/api/v1/user/me",
    responses(
        (status = 200, description = "Account profile", body = ApiResponse<AccountProfile>),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Account not found")
    ),
    security(("basic_auth" = [])),
    tag = "User"
)]
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedAccount>,
) -> ApiResult<AccountProfile> {
    match AccountRepository::get_by_id(state.db.pool(), auth.id).await {
        Ok(Some(account)) => ok(account.into()),
        Ok(None) => ApiError::account_not_found("Account not found").into_err(),
        Err(e) => {
            tracing::error!("profile lookup failed: {}", e);
            ApiError::storage_unavailable("Storage temporarily unavailable").into_err()
        }
    }
}
