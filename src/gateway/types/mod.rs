//! Gateway types module
//!
//! Type-safe types for API boundary enforcement:
//!
//! ## Input Types
//! - [`Amount`]: format-validated monetary amount (string-only JSON,
//!   scale capped at 2, never rounded)
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: unified response wrapper
//! - [`ApiError`] / [`ApiResult`]: typed handler error channel with the
//!   deterministic error-to-status mapping
//! - Response DTOs ([`AccountProfile`], [`BalanceData`], [`TransferData`])

pub mod money;
pub mod response;

pub use money::{AMOUNT_SCALE, Amount, format_amount};
pub use response::{
    AccountProfile, ApiError, ApiResponse, ApiResult, BalanceData, TransferData, created,
    error_codes, ok,
};
