//! Balance Service
//!
//! Per-account monetary balances with atomic transfers, backed by
//! PostgreSQL. No committed state ever shows a negative balance, and every
//! transfer is either fully applied (debit + credit + ledger record) or not
//! applied at all, even under concurrent requests touching the same
//! accounts.
//!
//! # Modules
//!
//! - [`account`] - durable account store and transfer ledger (pool, schema,
//!   repositories, validation)
//! - [`transfer`] - the balance-transfer engine and its error taxonomy
//! - [`balance`] - single-account balance query / deposit / withdraw path
//! - [`user_auth`] - registration and HTTP Basic authentication
//! - [`gateway`] - axum JSON API, error mapping, OpenAPI docs
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup

pub mod account;
pub mod balance;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod transfer;
pub mod user_auth;

// Convenient re-exports at crate root
pub use account::{Account, AccountId, Database, Transfer, TransferDetail, TransferId};
pub use balance::{BalanceError, BalanceService};
pub use transfer::{TransferEngine, TransferError};
pub use user_auth::{AuthError, AuthService};
