//! Input records for downtime analysis.
//!
//! These mirror the structured log schema the collectors produce: a routing
//! section (assignment decisions per account), a heartbeat section (periodic
//! workload samples per server), and the account registry with one
//! observation window per account. All inputs are caller-owned and treated
//! as read-only by the analysis; the core never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a monitored service account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a backend server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServerId(pub String);

impl ServerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A routing decision or change for an account at a point in time.
///
/// Ordered by `event_time` within an account. Plain assignment events carry
/// `assigned_server_id`; switch events additionally carry the pair of servers
/// involved (`server_id_from` / `server_id_to`) and the heartbeat sample
/// timestamps bracketing the switch instant (`sample_time_before` /
/// `sample_time_after`), when the collector resolved them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingEvent {
    pub account_id: AccountId,
    pub event_time: DateTime<Utc>,
    /// Raw event label from the routing log, carried through untouched.
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub assigned_server_id: Option<ServerId>,
    #[serde(default)]
    pub server_id_from: Option<ServerId>,
    #[serde(default)]
    pub server_id_to: Option<ServerId>,
    #[serde(default)]
    pub sample_time_before: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sample_time_after: Option<DateTime<Utc>>,
}

impl RoutingEvent {
    /// Whether this event describes a server switch (carries both sides).
    pub fn is_switch(&self) -> bool {
        self.server_id_from.is_some() && self.server_id_to.is_some()
    }
}

/// A periodic workload observation for a server.
///
/// Samples arrive at a fixed coarse cadence (one minute by default). A
/// workload at or below the configured threshold is the "server reachable /
/// idle-or-light-load" proxy; any other value, including a missing sample,
/// is treated as down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatSample {
    pub server_id: ServerId,
    pub sample_time: DateTime<Utc>,
    pub workload: f64,
}

/// The observation interval for one account.
///
/// Invariant: `end_time > start_time`. Windows violating it fail that
/// account's computation with [`crate::DowntimeError::InvalidWindow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountWindow {
    pub account_id: AccountId,
    #[serde(default)]
    pub account_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl AccountWindow {
    /// Window length in minutes, as a fractional value.
    pub fn window_minutes(&self) -> f64 {
        (self.end_time - self.start_time).num_seconds() as f64 / 60.0
    }
}

/// Computed downtime figures for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeResult {
    pub account_id: AccountId,
    pub downtime_minutes: f64,
    pub downtime_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_minutes() {
        let window = AccountWindow {
            account_id: AccountId::new("acc-1"),
            account_name: "Account One".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap(),
        };
        assert_eq!(window.window_minutes(), 30.0);
    }

    #[test]
    fn test_window_minutes_fractional() {
        let window = AccountWindow {
            account_id: AccountId::new("acc-1"),
            account_name: String::new(),
            start_time: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 30).unwrap(),
        };
        assert_eq!(window.window_minutes(), 0.5);
    }

    #[test]
    fn test_is_switch() {
        let mut event = RoutingEvent {
            account_id: AccountId::new("acc-1"),
            event_time: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 45).unwrap(),
            event_type: "ROUTE_CHANGE".to_string(),
            assigned_server_id: Some(ServerId::new("srv-2")),
            server_id_from: Some(ServerId::new("srv-1")),
            server_id_to: Some(ServerId::new("srv-2")),
            sample_time_before: None,
            sample_time_after: None,
        };
        assert!(event.is_switch());

        event.server_id_from = None;
        assert!(!event.is_switch());
    }
}
