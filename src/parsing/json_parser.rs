//! JSON parsing for the three input collections.

use anyhow::{Context, Result};

use crate::models::{AccountWindow, HeartbeatSample, RoutingEvent};

/// Parse the routing section from a JSON array string.
///
/// Field names follow the log schema (`accountId`, `eventTime`,
/// `assignedServerId`, ...); timestamps are RFC 3339. Optional switch fields
/// may be absent entirely for plain assignment events.
pub fn parse_routing_events_json(json: &str) -> Result<Vec<RoutingEvent>> {
    serde_json::from_str(json).context("Failed to deserialize routing events JSON")
}

/// Parse the heartbeat section from a JSON array string.
pub fn parse_heartbeat_samples_json(json: &str) -> Result<Vec<HeartbeatSample>> {
    serde_json::from_str(json).context("Failed to deserialize heartbeat samples JSON")
}

/// Parse the account registry from a JSON array string.
///
/// Window validity (`endTime > startTime`) is not enforced here; an invalid
/// window fails that account during reconciliation, not at ingestion.
pub fn parse_account_windows_json(json: &str) -> Result<Vec<AccountWindow>> {
    serde_json::from_str(json).context("Failed to deserialize account windows JSON")
}

#[cfg(test)]
#[path = "json_parser_tests.rs"]
mod json_parser_tests;
