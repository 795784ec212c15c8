//! Phase 1: approximate per-minute coverage estimation.
//!
//! Builds a minute-granularity timeline of server assignment for one account
//! and counts the minutes where the assigned server was observed up. This is
//! intentionally coarse: a routing switch between two sample instants is
//! invisible here and is handled by the sub-minute corrector.

use crate::algorithms::align_last_known;
use crate::config::AnalysisConfig;
use crate::models::time::minute_timeline;
use crate::models::{AccountWindow, RoutingEvent, ServerId};
use crate::services::heartbeat_index::HeartbeatIndex;

/// Estimate the account's downtime over the whole window, in minutes.
///
/// The assignment at each whole minute of `[start_time, end_time]` is the
/// most recent routing event at or before it (last-known-value propagation);
/// minutes before the first event are unassigned and excluded from both
/// tallies. A minute counts as "up" only when an exact heartbeat sample
/// exists for the assigned server at that minute and its workload is at or
/// below the threshold — a missing sample, a sample from another server, or
/// a higher workload all count as down by omission.
///
/// Returns `window_minutes - up_count`. The value is not clamped: crediting
/// the inclusive window endpoint can push it below zero.
pub fn downtime_approximation(
    events: &[&RoutingEvent],
    heartbeats: &HeartbeatIndex,
    window: &AccountWindow,
    config: &AnalysisConfig,
) -> f64 {
    let mut assignments: Vec<(chrono::DateTime<chrono::Utc>, &ServerId)> = events
        .iter()
        .filter_map(|e| e.assigned_server_id.as_ref().map(|s| (e.event_time, s)))
        .collect();
    assignments.sort_by_key(|(t, _)| *t);

    let minutes = minute_timeline(window.start_time, window.end_time);
    let aligned = align_last_known(minutes, &assignments);

    let uptime_minutes = aligned
        .iter()
        .filter(|(minute, server)| {
            server.is_some_and(|s| {
                heartbeats
                    .workload_at(s, *minute)
                    .is_some_and(|w| w <= config.workload_threshold)
            })
        })
        .count();

    log::debug!(
        "account {}: {} up of {} timeline minutes",
        window.account_id,
        uptime_minutes,
        aligned.len()
    );

    window.window_minutes() - uptime_minutes as f64
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod coverage_tests;
