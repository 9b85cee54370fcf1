//! Account management: the durable account store and transfer ledger
//!
//! - [`db`] - PostgreSQL connection pool and schema provisioning
//! - [`models`] - Account and Transfer row types
//! - [`repository`] - store operations, including the in-transaction
//!   locked reads and writes consumed by the transfer engine
//! - [`validation`] - boundary validation for names and descriptions

pub mod db;
pub mod models;
pub mod repository;
pub mod validation;

pub use db::Database;
pub use models::{Account, AccountId, Transfer, TransferDetail, TransferId};
pub use repository::{AccountRepository, TransferRepository};
pub use validation::{Username, ValidationError};
