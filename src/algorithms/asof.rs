//! As-of (last-known-value) alignment of a sparse series onto a timeline.
//!
//! Both the coverage estimator (routing events onto the minute timeline) and
//! the heartbeat index (nearest-sample queries) align one ordered series of
//! timestamped records onto another's instants. This module holds the
//! general form: walk a dense target timeline and, for each instant, hold
//! the most recent value of the sparse series at or before it, with no value
//! before the series' first entry.

use chrono::{DateTime, Utc};

/// Align `series` onto `targets` with forward-fill semantics.
///
/// For each target instant `t`, yields the value of the most recent series
/// entry whose timestamp is `<= t`, or `None` when no entry precedes `t`.
/// Both `targets` and `series` must be ascending by timestamp; the alignment
/// is a single linear merge scan, not a per-target search.
pub fn align_last_known<'a, T>(
    targets: impl IntoIterator<Item = DateTime<Utc>>,
    series: &'a [(DateTime<Utc>, T)],
) -> Vec<(DateTime<Utc>, Option<&'a T>)> {
    let mut aligned = Vec::new();
    let mut held: Option<&'a T> = None;
    let mut next = 0usize;

    for target in targets {
        while next < series.len() && series[next].0 <= target {
            held = Some(&series[next].1);
            next += 1;
        }
        aligned.push((target, held));
    }

    aligned
}
