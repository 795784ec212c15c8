//! Minute arithmetic for the reconciliation timeline.
//!
//! Heartbeat samples land on whole-minute instants; routing events land at
//! arbitrary instants. These helpers align both series onto whole minutes.

use chrono::{DateTime, Duration, Timelike, Utc};

/// Truncate an instant down to its whole minute.
pub fn floor_to_minute(t: DateTime<Utc>) -> DateTime<Utc> {
    let secs = t.timestamp().div_euclid(60) * 60;
    DateTime::from_timestamp(secs, 0).unwrap_or(t)
}

/// Round an instant up to the next whole minute (identity when already on
/// a minute boundary).
pub fn ceil_to_minute(t: DateTime<Utc>) -> DateTime<Utc> {
    let floored = floor_to_minute(t);
    if floored == t {
        floored
    } else {
        floored + Duration::minutes(1)
    }
}

/// Seconds past the whole minute of an instant (0..=59).
///
/// Sub-second components are ignored, so an event at `10:04:45.300` reports
/// 45 seconds past the minute.
pub fn seconds_past_minute(t: DateTime<Utc>) -> u32 {
    t.second()
}

/// Every whole minute `m` with `start <= m <= end`, ascending.
///
/// Both endpoints are inclusive when minute-aligned; a non-aligned start
/// begins at the next whole minute.
pub fn minute_timeline(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let mut minutes = Vec::new();
    let mut m = ceil_to_minute(start);
    while m <= end {
        minutes.push(m);
        m = m + Duration::minutes(1);
    }
    minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_floor_to_minute() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 10, 4, 45).unwrap();
        assert_eq!(
            floor_to_minute(t),
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 4, 0).unwrap()
        );
    }

    #[test]
    fn test_floor_is_identity_on_boundary() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 10, 4, 0).unwrap();
        assert_eq!(floor_to_minute(t), t);
    }

    #[test]
    fn test_ceil_to_minute() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 10, 4, 1).unwrap();
        assert_eq!(
            ceil_to_minute(t),
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 5, 0).unwrap()
        );
        let aligned = Utc.with_ymd_and_hms(2024, 3, 1, 10, 5, 0).unwrap();
        assert_eq!(ceil_to_minute(aligned), aligned);
    }

    #[test]
    fn test_seconds_past_minute() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 10, 4, 45).unwrap();
        assert_eq!(seconds_past_minute(t), 45);
        let aligned = Utc.with_ymd_and_hms(2024, 3, 1, 10, 4, 0).unwrap();
        assert_eq!(seconds_past_minute(aligned), 0);
    }

    #[test]
    fn test_minute_timeline_inclusive() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 10, 3, 0).unwrap();
        let minutes = minute_timeline(start, end);
        assert_eq!(minutes.len(), 4);
        assert_eq!(minutes[0], start);
        assert_eq!(minutes[3], end);
    }

    #[test]
    fn test_minute_timeline_unaligned_start() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 30).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 10, 2, 30).unwrap();
        let minutes = minute_timeline(start, end);
        assert_eq!(
            minutes,
            vec![
                Utc.with_ymd_and_hms(2024, 3, 1, 10, 1, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 3, 1, 10, 2, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_minute_timeline_empty_for_inverted_range() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 5, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        assert!(minute_timeline(start, end).is_empty());
    }
}
