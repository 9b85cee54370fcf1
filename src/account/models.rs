//! Data models for accounts and the transfer ledger

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

pub type AccountId = i64;
pub type TransferId = i64;

/// A customer account holding a single fixed-point balance (scale 2).
///
/// Invariant: `balance >= 0` at every committed state, enforced both by the
/// services that mutate it and by a CHECK constraint on the table. The
/// persisted row also carries `password_hash`, which never leaves the auth
/// layer and is deliberately absent here.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A committed transfer. Rows are append-only and never edited or deleted;
/// they are the audit trail.
#[derive(Debug, Clone, FromRow)]
pub struct Transfer {
    pub id: TransferId,
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A transfer joined with both party usernames, the shape served by the
/// history read path.
#[derive(Debug, Clone, FromRow)]
pub struct TransferDetail {
    pub id: TransferId,
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub from_username: String,
    pub to_username: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TransferDetail {
    /// Whether `account_id` is a party to this transfer (sender or receiver).
    pub fn involves(&self, account_id: AccountId) -> bool {
        self.from_account_id == account_id || self.to_account_id == account_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn detail(from: AccountId, to: AccountId) -> TransferDetail {
        TransferDetail {
            id: 1,
            from_account_id: from,
            to_account_id: to,
            from_username: "alice".to_string(),
            to_username: "bob".to_string(),
            amount: Decimal::new(50000, 2),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_involves_sender_and_receiver() {
        let t = detail(1, 2);
        assert!(t.involves(1));
        assert!(t.involves(2));
        assert!(!t.involves(3));
    }
}
