//! Gateway HTTP handlers

pub mod balance;
pub mod health;
pub mod transfer;

pub use balance::{AdjustBalanceRequest, deposit, get_balance, withdraw};
pub use health::{HealthResponse, health_check};
pub use transfer::{CreateTransferRequest, create_transfer, get_transfer, list_transfers};
