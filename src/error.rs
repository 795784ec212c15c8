//! Error types for downtime analysis.
//!
//! All errors are scoped to a single account: a malformed window fails that
//! account's computation and nothing else. The batch entry point collects
//! per-account failures instead of aborting.

use chrono::{DateTime, Utc};

use crate::models::AccountId;

/// Result type for per-account analysis operations.
pub type AnalysisResult<T> = Result<T, DowntimeError>;

/// Error type for downtime analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum DowntimeError {
    /// The account's observation window is zero-length or inverted, so a
    /// downtime percentage cannot be formed.
    #[error("invalid observation window for account {account_id}: start={start}, end={end}")]
    InvalidWindow {
        account_id: AccountId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl DowntimeError {
    /// Create an invalid-window error for an account.
    pub fn invalid_window(
        account_id: AccountId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self::InvalidWindow {
            account_id,
            start,
            end,
        }
    }

    /// The account this error is scoped to.
    pub fn account_id(&self) -> &AccountId {
        match self {
            Self::InvalidWindow { account_id, .. } => account_id,
        }
    }
}
