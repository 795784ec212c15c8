//! Orchestration of the two reconciliation phases into a downtime report.

use crate::config::AnalysisConfig;
use crate::error::{AnalysisResult, DowntimeError};
use crate::models::{
    AccountFailure, AccountWindow, DowntimeReport, DowntimeResult, DowntimeRow, HeartbeatSample,
    RoutingEvent,
};
use crate::services::compensation::uptime_compensation;
use crate::services::coverage::downtime_approximation;
use crate::services::heartbeat_index::HeartbeatIndex;

/// Round to two decimals, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the downtime figures for a single account.
///
/// Pure with respect to shared state: reads the account's slice of
/// `routing_events`, the shared read-only `heartbeats` index, and the
/// account's window, and produces a fresh result. Accounts can therefore be
/// computed in parallel without coordination.
///
/// Fails with [`DowntimeError::InvalidWindow`] when the window is zero-length
/// or inverted. The resulting downtime is not clamped: a correction exceeding
/// the approximate estimate yields a negative value, by design.
pub fn compute_account_downtime(
    routing_events: &[RoutingEvent],
    heartbeats: &HeartbeatIndex,
    window: &AccountWindow,
    config: &AnalysisConfig,
) -> AnalysisResult<DowntimeResult> {
    let window_minutes = window.window_minutes();
    if window_minutes <= 0.0 {
        return Err(DowntimeError::invalid_window(
            window.account_id.clone(),
            window.start_time,
            window.end_time,
        ));
    }

    let account_events: Vec<&RoutingEvent> = routing_events
        .iter()
        .filter(|e| e.account_id == window.account_id)
        .collect();

    let downtime_approx_minutes =
        downtime_approximation(&account_events, heartbeats, window, config);
    let uptime_comp_seconds = uptime_compensation(&account_events, heartbeats, config);

    let downtime_minutes = downtime_approx_minutes - uptime_comp_seconds / 60.0;
    let downtime_percent = round2(downtime_minutes / window_minutes * 100.0);

    log::debug!(
        "account {}: approx {:.2} min, compensation {:.1} s, downtime {:.4} min ({:.2}%)",
        window.account_id,
        downtime_approx_minutes,
        uptime_comp_seconds,
        downtime_minutes,
        downtime_percent
    );

    Ok(DowntimeResult {
        account_id: window.account_id.clone(),
        downtime_minutes,
        downtime_percent,
    })
}

/// Compute downtime for every account in the registry.
///
/// Builds the heartbeat index once and processes accounts in registry order.
/// A failing account is recorded in the report's failures and never blocks
/// or corrupts the remaining accounts; callers that want any failure to be
/// fatal can use [`DowntimeReport::into_result`].
pub fn compute_downtime(
    routing_events: &[RoutingEvent],
    heartbeat_samples: &[HeartbeatSample],
    account_windows: &[AccountWindow],
    config: &AnalysisConfig,
) -> DowntimeReport {
    let heartbeats = HeartbeatIndex::build(heartbeat_samples);
    let mut rows = Vec::with_capacity(account_windows.len());
    let mut failures = Vec::new();

    for window in account_windows {
        log::info!("processing account {}", window.account_id);
        match compute_account_downtime(routing_events, &heartbeats, window, config) {
            Ok(result) => rows.push(DowntimeRow {
                window: window.clone(),
                downtime_minutes: result.downtime_minutes,
                downtime_percent: result.downtime_percent,
            }),
            Err(error) => {
                log::warn!("account {} failed: {}", window.account_id, error);
                failures.push(AccountFailure {
                    account_id: window.account_id.clone(),
                    error,
                });
            }
        }
    }

    DowntimeReport::new(rows, failures)
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod reconciler_tests;
