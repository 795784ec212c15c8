//! Read-only, time-indexed view over heartbeat samples.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

use crate::models::{HeartbeatSample, ServerId};

/// Time-indexed heartbeat lookup, built once from the full heartbeat
/// collection and shared read-only across all accounts.
///
/// Supports exact `(server, time)` lookup for the estimator's minute join,
/// and nearest-before/after queries for the corrector when a routing event
/// does not carry bracketing sample timestamps.
#[derive(Debug, Default)]
pub struct HeartbeatIndex {
    by_server: HashMap<ServerId, BTreeMap<DateTime<Utc>, f64>>,
}

impl HeartbeatIndex {
    /// Build the index from a heartbeat collection.
    ///
    /// Duplicate `(server, time)` samples keep the last occurrence.
    pub fn build(samples: &[HeartbeatSample]) -> Self {
        let mut by_server: HashMap<ServerId, BTreeMap<DateTime<Utc>, f64>> = HashMap::new();
        for sample in samples {
            by_server
                .entry(sample.server_id.clone())
                .or_default()
                .insert(sample.sample_time, sample.workload);
        }
        Self { by_server }
    }

    /// Workload for an exact server/time pair, if a sample exists.
    pub fn workload_at(&self, server: &ServerId, at: DateTime<Utc>) -> Option<f64> {
        self.by_server.get(server)?.get(&at).copied()
    }

    /// The server's most recent sample at or before an instant.
    pub fn latest_at_or_before(
        &self,
        server: &ServerId,
        at: DateTime<Utc>,
    ) -> Option<(DateTime<Utc>, f64)> {
        self.by_server
            .get(server)?
            .range(..=at)
            .next_back()
            .map(|(t, w)| (*t, *w))
    }

    /// The server's earliest sample at or after an instant.
    pub fn earliest_at_or_after(
        &self,
        server: &ServerId,
        at: DateTime<Utc>,
    ) -> Option<(DateTime<Utc>, f64)> {
        self.by_server
            .get(server)?
            .range(at..)
            .next()
            .map(|(t, w)| (*t, *w))
    }

    /// Number of servers with at least one sample.
    pub fn server_count(&self) -> usize {
        self.by_server.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(server: &str, minute: u32, workload: f64) -> HeartbeatSample {
        HeartbeatSample {
            server_id: ServerId::new(server),
            sample_time: Utc.with_ymd_and_hms(2024, 3, 1, 10, minute, 0).unwrap(),
            workload,
        }
    }

    fn at(minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, minute, second).unwrap()
    }

    #[test]
    fn test_exact_lookup() {
        let index = HeartbeatIndex::build(&[sample("srv-1", 0, 0.5), sample("srv-1", 1, 3.0)]);
        assert_eq!(index.workload_at(&ServerId::new("srv-1"), at(0, 0)), Some(0.5));
        assert_eq!(index.workload_at(&ServerId::new("srv-1"), at(1, 0)), Some(3.0));
    }

    #[test]
    fn test_exact_lookup_absent() {
        let index = HeartbeatIndex::build(&[sample("srv-1", 0, 0.5)]);
        assert_eq!(index.workload_at(&ServerId::new("srv-1"), at(2, 0)), None);
        assert_eq!(index.workload_at(&ServerId::new("srv-2"), at(0, 0)), None);
    }

    #[test]
    fn test_latest_at_or_before() {
        let index = HeartbeatIndex::build(&[sample("srv-1", 0, 0.5), sample("srv-1", 2, 3.0)]);
        let srv = ServerId::new("srv-1");
        assert_eq!(index.latest_at_or_before(&srv, at(1, 30)), Some((at(0, 0), 0.5)));
        assert_eq!(index.latest_at_or_before(&srv, at(2, 0)), Some((at(2, 0), 3.0)));
        let before_all = Utc.with_ymd_and_hms(2024, 3, 1, 9, 59, 0).unwrap();
        assert_eq!(index.latest_at_or_before(&srv, before_all), None);
    }

    #[test]
    fn test_earliest_at_or_after() {
        let index = HeartbeatIndex::build(&[sample("srv-1", 0, 0.5), sample("srv-1", 2, 3.0)]);
        let srv = ServerId::new("srv-1");
        assert_eq!(index.earliest_at_or_after(&srv, at(0, 30)), Some((at(2, 0), 3.0)));
        assert_eq!(index.earliest_at_or_after(&srv, at(0, 0)), Some((at(0, 0), 0.5)));
        assert_eq!(index.earliest_at_or_after(&srv, at(3, 0)), None);
    }

    #[test]
    fn test_duplicate_sample_keeps_last() {
        let index = HeartbeatIndex::build(&[sample("srv-1", 0, 0.5), sample("srv-1", 0, 4.0)]);
        assert_eq!(index.workload_at(&ServerId::new("srv-1"), at(0, 0)), Some(4.0));
    }

    #[test]
    fn test_server_count() {
        let index = HeartbeatIndex::build(&[sample("srv-1", 0, 0.5), sample("srv-2", 0, 0.5)]);
        assert_eq!(index.server_count(), 2);
    }
}
