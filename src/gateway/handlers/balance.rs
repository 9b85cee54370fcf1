//! Balance handlers (query, deposit, withdraw)

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{Amount, ApiError, ApiResponse, ApiResult, BalanceData, format_amount, ok};
use crate::balance::BalanceService;
use crate::user_auth::AuthenticatedAccount;

/// Deposit or withdraw request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdjustBalanceRequest {
    /// Amount as a decimal string, at most two fractional digits
    #[schema(value_type = String, example = "100.00")]
    pub amount: Amount,
}

/// Get the authenticated account's balance
///
/// GET /api/v1/balance
#[utoipa::path(
    get,
    path = "/api/v1/balance",
    responses(
        (status = 200, description = "Current balance", body = ApiResponse<BalanceData>),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Account not found")
    ),
    security(("basic_auth" = [])),
    tag = "Balance"
)]
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedAccount>,
) -> ApiResult<BalanceData> {
    match BalanceService::get_balance(&state.db, auth.id).await {
        Ok(balance) => ok(BalanceData {
            balance: format_amount(balance),
        }),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Deposit into the authenticated account
///
/// POST /api/v1/balance/deposit
#[utoipa::path(
    post,
    path = "/api/v1/balance/deposit",
    request_body = AdjustBalanceRequest,
    responses(
        (status = 200, description = "New balance after deposit", body = ApiResponse<BalanceData>),
        (status = 400, description = "Invalid amount"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Account not found")
    ),
    security(("basic_auth" = [])),
    tag = "Balance"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Json(req): Json<AdjustBalanceRequest>,
) -> ApiResult<BalanceData> {
    if req.amount.is_zero() {
        return ApiError::bad_request("Deposit amount must be positive").into_err();
    }

    match BalanceService::adjust(&state.db, auth.id, req.amount.inner(), true).await {
        Ok(new_balance) => ok(BalanceData {
            balance: format_amount(new_balance),
        }),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Withdraw from the authenticated account
///
/// POST /api/v1/balance/withdraw
///
/// Rejected with `INSUFFICIENT_BALANCE` when the result would be negative;
/// the balance is left unchanged in that case.
#[utoipa::path(
    post,
    path = "/api/v1/balance/withdraw",
    request_body = AdjustBalanceRequest,
    responses(
        (status = 200, description = "New balance after withdrawal", body = ApiResponse<BalanceData>),
        (status = 400, description = "Invalid amount or insufficient funds"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Account not found")
    ),
    security(("basic_auth" = [])),
    tag = "Balance"
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Json(req): Json<AdjustBalanceRequest>,
) -> ApiResult<BalanceData> {
    if req.amount.is_zero() {
        return ApiError::bad_request("Withdrawal amount must be positive").into_err();
    }

    match BalanceService::adjust(&state.db, auth.id, -req.amount.inner(), true).await {
        Ok(new_balance) => ok(BalanceData {
            balance: format_amount(new_balance),
        }),
        Err(e) => ApiError::from(e).into_err(),
    }
}
