use thiserror::Error;

/// Failures of a single transfer execution.
///
/// Every variant except `Storage` is deterministic given committed state
/// and is never retried by the engine. `Storage` covers transient store
/// failures (lock timeout, connectivity loss); a caller retrying after one
/// accepts at-least-once semantics, since retries are not deduplicated.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("source and destination accounts are the same")]
    SelfTransfer,

    #[error("transfer amount must be positive")]
    InvalidAmount,

    #[error("source account not found")]
    SourceNotFound,

    #[error("destination account not found")]
    DestinationNotFound,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl TransferError {
    /// Whether a caller may retry the whole operation. Only transient
    /// storage failures qualify; precondition failures are deterministic.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransferError::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_storage_errors_are_retryable() {
        assert!(!TransferError::SelfTransfer.is_retryable());
        assert!(!TransferError::InvalidAmount.is_retryable());
        assert!(!TransferError::SourceNotFound.is_retryable());
        assert!(!TransferError::DestinationNotFound.is_retryable());
        assert!(!TransferError::InsufficientFunds.is_retryable());
        assert!(TransferError::Storage(sqlx::Error::PoolTimedOut).is_retryable());
    }
}
