//! Transfer handlers (create, history, lookup)

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{
    Amount, ApiError, ApiResponse, ApiResult, TransferData, created, format_amount, ok,
};
use crate::account::validation::validate_description;
use crate::account::{AccountRepository, TransferRepository};
use crate::transfer::TransferEngine;
use crate::user_auth::AuthenticatedAccount;

const DEFAULT_PAGE_LIMIT: i64 = 50;
const MAX_PAGE_LIMIT: i64 = 100;

/// Transfer creation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransferRequest {
    /// Receiving account's username
    #[schema(example = "bob")]
    pub to_username: String,
    /// Amount as a decimal string, at most two fractional digits
    #[schema(value_type = String, example = "500.00")]
    pub amount: Amount,
    /// Optional free-text note, up to 255 characters
    #[schema(example = "rent")]
    pub description: Option<String>,
}

/// Transfer history query parameters
#[derive(Debug, Deserialize)]
pub struct ListTransfersQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Execute a transfer from the authenticated account
///
/// POST /api/v1/transfers
#[utoipa::path(
    post,
    path = "/api/v1/transfers",
    request_body = CreateTransferRequest,
    responses(
        (status = 201, description = "Transfer committed", body = ApiResponse<TransferData>),
        (status = 400, description = "Invalid amount, self-transfer or insufficient funds"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Recipient not found"),
        (status = 503, description = "Storage unavailable")
    ),
    security(("basic_auth" = [])),
    tag = "Transfers"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Json(req): Json<CreateTransferRequest>,
) -> ApiResult<TransferData> {
    if req.amount.is_zero() {
        return ApiError::bad_request("Transfer amount must be positive").into_err();
    }
    validate_description(req.description.as_deref())?;
    if req.to_username == auth.username {
        return ApiError::bad_request("Cannot transfer to the same account").into_err();
    }

    let recipient = match AccountRepository::get_by_username(state.db.pool(), &req.to_username).await
    {
        Ok(Some(account)) => account,
        Ok(None) => {
            return ApiError::account_not_found(format!(
                "Account '{}' not found",
                req.to_username
            ))
            .into_err();
        }
        Err(e) => {
            tracing::error!("recipient lookup failed: {}", e);
            return ApiError::storage_unavailable("Storage temporarily unavailable").into_err();
        }
    };

    match TransferEngine::execute(
        &state.db,
        auth.id,
        recipient.id,
        req.amount.inner(),
        req.description.as_deref(),
    )
    .await
    {
        Ok(record) => created(TransferData {
            id: record.id,
            from_username: auth.username,
            to_username: recipient.username,
            amount: format_amount(record.amount),
            description: record.description,
            created_at: record.created_at,
        }),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// List the authenticated account's transfers, newest first
///
/// GET /api/v1/transfers?limit=50&offset=0
#[utoipa::path(
    get,
    path = "/api/v1/transfers",
    params(
        ("limit" = Option<i64>, Query, description = "Page size, 1-100 (default 50)"),
        ("offset" = Option<i64>, Query, description = "Rows to skip (default 0)")
    ),
    responses(
        (status = 200, description = "Sent and received transfers", body = ApiResponse<Vec<TransferData>>),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = [])),
    tag = "Transfers"
)]
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Query(params): Query<ListTransfersQuery>,
) -> ApiResult<Vec<TransferData>> {
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    let offset = params.offset.unwrap_or(0);

    if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
        return ApiError::bad_request("limit must be between 1 and 100").into_err();
    }
    if offset < 0 {
        return ApiError::bad_request("offset must not be negative").into_err();
    }

    match TransferRepository::list_for_account(state.db.pool(), auth.id, limit, offset).await {
        Ok(transfers) => ok(transfers.into_iter().map(TransferData::from).collect()),
        Err(e) => {
            tracing::error!("transfer history query failed: {}", e);
            ApiError::storage_unavailable("Storage temporarily unavailable").into_err()
        }
    }
}

/// Get a single transfer by ID
///
/// GET /api/v1/transfers/{transfer_id}
///
/// Only the sender or the receiver may read a transfer.
#[utoipa::path(
    get,
    path = "/api/v1/transfers/{transfer_id}",
    params(
        ("transfer_id" = i64, Path, description = "Transfer ID")
    ),
    responses(
        (status = 200, description = "Transfer details", body = ApiResponse<TransferData>),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 403, description = "Not a party to this transfer"),
        (status = 404, description = "Transfer not found")
    ),
    security(("basic_auth" = [])),
    tag = "Transfers"
)]
pub async fn get_transfer(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Path(transfer_id): Path<i64>,
) -> ApiResult<TransferData> {
    match TransferRepository::get_by_id(state.db.pool(), transfer_id).await {
        Ok(Some(detail)) => {
            if !detail.involves(auth.id) {
                return ApiError::forbidden("No access to this transfer").into_err();
            }
            ok(detail.into())
        }
        Ok(None) => ApiError::transfer_not_found("Transfer not found").into_err(),
        Err(e) => {
            tracing::error!("transfer lookup failed: {}", e);
            ApiError::storage_unavailable("Storage temporarily unavailable").into_err()
        }
    }
}
