//! The balance-transfer engine
//!
//! Executes a single transfer as one atomic unit of work against the store:
//! lock both account rows, validate, debit, credit, append the ledger
//! record, commit. Nothing is visible to other readers until the commit,
//! and any failure drops the transaction so no partial state survives.

use rust_decimal::Decimal;

use super::error::TransferError;
use crate::account::repository::{AccountRepository, TransferRepository};
use crate::account::{AccountId, Database, Transfer};

/// Order a pair of distinct account ids for lock acquisition.
///
/// Locks are always requested in ascending-id order, independent of which
/// side is source or destination. Two concurrent transfers between the same
/// pair of accounts (in either direction) therefore request locks in the
/// same global order, which is what rules out deadlock between them.
pub(crate) fn lock_order(a: AccountId, b: AccountId) -> (AccountId, AccountId) {
    if a < b { (a, b) } else { (b, a) }
}

pub struct TransferEngine;

impl TransferEngine {
    /// Execute a transfer from `source_id` to `dest_id`.
    ///
    /// Preconditions are checked in order, each with its own error:
    /// distinct accounts, positive amount, source exists, destination
    /// exists, sufficient source balance. Balances are only read under the
    /// row locks, so a concurrent transfer can never be validated against a
    /// stale balance. On success the fully populated ledger record is
    /// returned, with the id and timestamp the store assigned at commit.
    pub async fn execute(
        db: &Database,
        source_id: AccountId,
        dest_id: AccountId,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transfer, TransferError> {
        if source_id == dest_id {
            return Err(TransferError::SelfTransfer);
        }
        // The gateway already rejects non-positive amounts; re-checked here
        // as an engine invariant.
        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount);
        }

        let mut tx = db.pool().begin().await?;

        // Lock both rows before reading either balance. Early returns below
        // drop `tx`, which rolls the transaction back.
        let (first_id, second_id) = lock_order(source_id, dest_id);
        let first_balance = AccountRepository::lock_balance(&mut *tx, first_id).await?;
        let second_balance = AccountRepository::lock_balance(&mut *tx, second_id).await?;

        let (source_balance, dest_balance) = if first_id == source_id {
            (first_balance, second_balance)
        } else {
            (second_balance, first_balance)
        };

        let source_balance = source_balance.ok_or(TransferError::SourceNotFound)?;
        let dest_balance = dest_balance.ok_or(TransferError::DestinationNotFound)?;

        if source_balance < amount {
            return Err(TransferError::InsufficientFunds);
        }

        AccountRepository::set_balance(&mut *tx, source_id, source_balance - amount).await?;
        AccountRepository::set_balance(&mut *tx, dest_id, dest_balance + amount).await?;

        let record =
            TransferRepository::append(&mut *tx, source_id, dest_id, amount, description).await?;

        tx.commit().await?;

        tracing::info!(
            transfer_id = record.id,
            source_id,
            dest_id,
            amount = %amount,
            "transfer committed"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_order_is_direction_independent() {
        assert_eq!(lock_order(1, 2), (1, 2));
        assert_eq!(lock_order(2, 1), (1, 2));
        assert_eq!(lock_order(7, 100), (7, 100));
        assert_eq!(lock_order(100, 7), (7, 100));
    }

    #[test]
    fn test_lock_order_agrees_for_opposite_transfers() {
        // A->B and B->A must request locks in the same global order.
        let (a, b) = (42, 17);
        assert_eq!(lock_order(a, b), lock_order(b, a));
    }
}
