//! Aggregated downtime report across the account registry.

use serde::{Deserialize, Serialize};

use crate::error::DowntimeError;
use crate::models::{AccountId, AccountWindow};

/// One report row: the account's registry columns extended with the two
/// computed downtime fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeRow {
    #[serde(flatten)]
    pub window: AccountWindow,
    pub downtime_minutes: f64,
    pub downtime_percent: f64,
}

/// A per-account failure captured during batch computation.
#[derive(Debug)]
pub struct AccountFailure {
    pub account_id: AccountId,
    pub error: DowntimeError,
}

/// The batch computation output.
///
/// Rows preserve the account registry's original order. Accounts whose
/// computation failed are absent from `rows` and listed in `failures`;
/// failures never block or corrupt other accounts' results.
#[derive(Debug, Default)]
pub struct DowntimeReport {
    rows: Vec<DowntimeRow>,
    failures: Vec<AccountFailure>,
}

impl DowntimeReport {
    pub(crate) fn new(rows: Vec<DowntimeRow>, failures: Vec<AccountFailure>) -> Self {
        Self { rows, failures }
    }

    /// Successfully computed rows, in registry order.
    pub fn rows(&self) -> &[DowntimeRow] {
        &self.rows
    }

    /// Per-account failures, in registry order.
    pub fn failures(&self) -> &[AccountFailure] {
        &self.failures
    }

    /// Look up the row for an account.
    pub fn get(&self, account_id: &AccountId) -> Option<&DowntimeRow> {
        self.rows.iter().find(|r| &r.window.account_id == account_id)
    }

    /// Treat any per-account failure as fatal, yielding the rows only when
    /// every account computed successfully.
    pub fn into_result(self) -> Result<Vec<DowntimeRow>, DowntimeError> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.rows),
        }
    }
}
