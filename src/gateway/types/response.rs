//! API response types, error codes, and the error-to-status mapping
//!
//! - `ApiResponse<T>`: unified response wrapper
//! - `ApiError` / `ApiResult<T>`: handler error channel with deterministic
//!   status and code per failure kind
//! - Response DTOs

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::money::format_amount;
use crate::account::{Account, TransferDetail, ValidationError};
use crate::balance::BalanceError;
use crate::transfer::TransferError;
use crate::user_auth::service::AuthError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_BALANCE: i32 = 1002;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;
    pub const ACCESS_DENIED: i32 = 2003;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4001;
    pub const TRANSFER_NOT_FOUND: i32 = 4002;
    pub const DUPLICATE_USERNAME: i32 = 4091;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const STORAGE_UNAVAILABLE: i32 = 5001;
}

// ============================================================================
// Handler Error Channel
// ============================================================================

/// Typed handler error carrying the HTTP status and envelope code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

/// Handler result: a status + enveloped body, or an `ApiError` that renders
/// the same envelope shape.
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 OK success terminator
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 Created success terminator
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn insufficient_funds(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INSUFFICIENT_BALANCE,
            msg,
        )
    }

    pub fn missing_auth(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_codes::MISSING_AUTH, msg)
    }

    pub fn auth_failed(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_codes::AUTH_FAILED, msg)
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, error_codes::ACCESS_DENIED, msg)
    }

    pub fn account_not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::ACCOUNT_NOT_FOUND, msg)
    }

    pub fn transfer_not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::TRANSFER_NOT_FOUND, msg)
    }

    pub fn duplicate_username(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, error_codes::DUPLICATE_USERNAME, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    pub fn storage_unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::STORAGE_UNAVAILABLE,
            msg,
        )
    }

    /// Convenience terminator for handler error paths
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::error(self.code, self.msg));
        if self.status == StatusCode::UNAUTHORIZED {
            // Challenge clients the way the Basic scheme expects.
            (self.status, [(header::WWW_AUTHENTICATE, "Basic")], body).into_response()
        } else {
            (self.status, body).into_response()
        }
    }
}

// ============================================================================
// Deterministic error mapping (engine/service errors -> status categories)
// ============================================================================

impl From<TransferError> for ApiError {
    fn from(e: TransferError) -> Self {
        match e {
            TransferError::SelfTransfer => {
                ApiError::bad_request("Cannot transfer to the same account")
            }
            TransferError::InvalidAmount => {
                ApiError::bad_request("Transfer amount must be positive")
            }
            TransferError::SourceNotFound => ApiError::account_not_found("Source account not found"),
            TransferError::DestinationNotFound => {
                ApiError::account_not_found("Destination account not found")
            }
            TransferError::InsufficientFunds => ApiError::insufficient_funds("Insufficient funds"),
            TransferError::Storage(err) => {
                tracing::error!("transfer storage error: {}", err);
                ApiError::storage_unavailable("Storage temporarily unavailable")
            }
        }
    }
}

impl From<BalanceError> for ApiError {
    fn from(e: BalanceError) -> Self {
        match e {
            BalanceError::NotFound => ApiError::account_not_found("Account not found"),
            BalanceError::InsufficientFunds => ApiError::insufficient_funds("Insufficient funds"),
            BalanceError::Storage(err) => {
                tracing::error!("balance storage error: {}", err);
                ApiError::storage_unavailable("Storage temporarily unavailable")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::DuplicateUsername => ApiError::duplicate_username("Username already exists"),
            AuthError::Hashing(err) => {
                tracing::error!("password hashing error: {}", err);
                ApiError::internal("Registration failed")
            }
            AuthError::Storage(err) => {
                tracing::error!("auth storage error: {}", err);
                ApiError::storage_unavailable("Storage temporarily unavailable")
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::bad_request(e.to_string())
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Account profile returned by registration and `/user/me`
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountProfile {
    pub id: i64,
    #[schema(example = "alice")]
    pub username: String,
    /// Current balance, fixed two-decimal string
    #[schema(example = "1000.00")]
    pub balance: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            balance: format_amount(account.balance),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Balance response data
#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceData {
    /// Current balance, fixed two-decimal string
    #[schema(example = "500.00")]
    pub balance: String,
}

/// Transfer response data with both party usernames resolved
#[derive(Debug, Serialize, ToSchema)]
pub struct TransferData {
    pub id: i64,
    #[schema(example = "alice")]
    pub from_username: String,
    #[schema(example = "bob")]
    pub to_username: String,
    /// Transferred amount, fixed two-decimal string
    #[schema(example = "500.00")]
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TransferDetail> for TransferData {
    fn from(detail: TransferDetail) -> Self {
        Self {
            id: detail.id,
            from_username: detail.from_username,
            to_username: detail.to_username,
            amount: format_amount(detail.amount),
            description: detail.description,
            created_at: detail.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success_shape() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn test_api_response_error_omits_data() {
        let json =
            serde_json::to_value(ApiResponse::<()>::error(error_codes::INVALID_PARAMETER, "bad"))
                .unwrap();
        assert_eq!(json["code"], 1001);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_transfer_error_mapping_is_deterministic() {
        let cases = [
            (
                ApiError::from(TransferError::SelfTransfer),
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_PARAMETER,
            ),
            (
                ApiError::from(TransferError::InvalidAmount),
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_PARAMETER,
            ),
            (
                ApiError::from(TransferError::SourceNotFound),
                StatusCode::NOT_FOUND,
                error_codes::ACCOUNT_NOT_FOUND,
            ),
            (
                ApiError::from(TransferError::DestinationNotFound),
                StatusCode::NOT_FOUND,
                error_codes::ACCOUNT_NOT_FOUND,
            ),
            (
                ApiError::from(TransferError::InsufficientFunds),
                StatusCode::BAD_REQUEST,
                error_codes::INSUFFICIENT_BALANCE,
            ),
            (
                ApiError::from(TransferError::Storage(sqlx::Error::PoolTimedOut)),
                StatusCode::SERVICE_UNAVAILABLE,
                error_codes::STORAGE_UNAVAILABLE,
            ),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status, status);
            assert_eq!(err.code, code);
        }
    }

    #[test]
    fn test_balance_error_mapping() {
        let err = ApiError::from(BalanceError::NotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, error_codes::ACCOUNT_NOT_FOUND);

        let err = ApiError::from(BalanceError::InsufficientFunds);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::INSUFFICIENT_BALANCE);
    }

    #[test]
    fn test_auth_error_mapping() {
        let err = ApiError::from(AuthError::DuplicateUsername);
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, error_codes::DUPLICATE_USERNAME);
    }
}
