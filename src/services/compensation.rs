//! Phase 2: sub-minute correction of the coarse coverage estimate.
//!
//! A routing switch that lands off a minute boundary splits that minute
//! between two servers, and the per-minute estimator credits the whole
//! minute to at most one of them. This pass inspects each switch against the
//! heartbeat state immediately before and after it and produces a signed
//! compensation in seconds.

use crate::config::AnalysisConfig;
use crate::models::time::seconds_past_minute;
use crate::models::RoutingEvent;
use crate::services::heartbeat_index::HeartbeatIndex;

/// Compute the account's uptime compensation, in signed seconds.
///
/// Only switch events (carrying both `server_id_from` and `server_id_to`)
/// with a non-zero seconds component are considered. The "from" workload is
/// resolved at the event's bracketing sample timestamp when present, else at
/// the nearest sample at or before the switch; the "to" workload
/// symmetrically at or after. Events whose "from" workload cannot be
/// resolved are skipped — the routing history is considered incomplete for
/// that switch.
///
/// Per kept event, with `s` seconds past the minute and `interval` the
/// heartbeat cadence, two independent terms apply (both may fire):
///
/// - add `+s` when `workload_from <= threshold` or
///   `workload_to > threshold` (the estimator undercounted the part of the
///   minute before the switch),
/// - deduct `interval - s` when `workload_from > threshold` or
///   `workload_to <= threshold` (the part after the switch was credited
///   incorrectly).
///
/// A missing "to" workload satisfies neither of its sub-conditions. The
/// overlapping OR-conditions are carried over verbatim from the collector's
/// reconciliation rules.
pub fn uptime_compensation(
    events: &[&RoutingEvent],
    heartbeats: &HeartbeatIndex,
    config: &AnalysisConfig,
) -> f64 {
    let threshold = config.workload_threshold;
    let interval = config.heartbeat_interval_secs as f64;
    let mut comp_seconds = 0.0;

    for event in events {
        let (from, to) = match (&event.server_id_from, &event.server_id_to) {
            (Some(from), Some(to)) => (from, to),
            _ => continue,
        };

        let seconds = seconds_past_minute(event.event_time);
        if seconds == 0 {
            continue;
        }

        let workload_from = match event.sample_time_before {
            Some(t) => heartbeats.workload_at(from, t),
            None => heartbeats
                .latest_at_or_before(from, event.event_time)
                .map(|(_, w)| w),
        };
        let workload_from = match workload_from {
            Some(w) => w,
            None => continue,
        };

        let workload_to = match event.sample_time_after {
            Some(t) => heartbeats.workload_at(to, t),
            None => heartbeats
                .earliest_at_or_after(to, event.event_time)
                .map(|(_, w)| w),
        };

        let seconds = seconds as f64;
        if workload_from <= threshold || workload_to.is_some_and(|w| w > threshold) {
            comp_seconds += seconds;
        }
        if workload_from > threshold || workload_to.is_some_and(|w| w <= threshold) {
            comp_seconds -= interval - seconds;
        }
    }

    comp_seconds
}

#[cfg(test)]
#[path = "compensation_tests.rs"]
mod compensation_tests;
