//! Service layer for downtime analysis.
//!
//! This module contains the two reconciliation phases and their
//! orchestration: the heartbeat index shared across accounts, the
//! minute-granularity coverage estimator, the sub-minute corrector, and the
//! reconciler that combines both into the final report.

pub mod compensation;

pub mod coverage;

pub mod heartbeat_index;

pub mod reconciler;

pub use compensation::uptime_compensation;
pub use coverage::downtime_approximation;
pub use heartbeat_index::HeartbeatIndex;
pub use reconciler::{compute_account_downtime, compute_downtime};
