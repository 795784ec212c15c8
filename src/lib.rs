//! # Downtime Rust Backend
//!
//! Service downtime reconciliation engine.
//!
//! This crate computes, for a set of service accounts, how much of an
//! observation window the account's assigned backend server was unavailable,
//! by reconciling two independently sampled time series: a routing log
//! (which server an account is assigned to, and when the assignment changes)
//! and a heartbeat log (periodic workload samples per server).
//!
//! ## Features
//!
//! - **Data Loading**: Parse routing events, heartbeat samples, and account
//!   windows from JSON format
//! - **Coverage Estimation**: Minute-granularity uptime estimate via
//!   last-known-value assignment propagation
//! - **Sub-Minute Correction**: Signed second-level compensation for routing
//!   switches that land off a minute boundary
//! - **Reconciliation**: Per-account combination of both phases into a
//!   downtime report across the whole account registry
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain records (routing events, heartbeats, windows, report)
//! - [`algorithms`]: Generic as-of alignment over timestamped series
//! - [`services`]: Heartbeat index, estimator, corrector, and reconciler
//! - [`parsing`]: JSON ingestion of the input collections
//! - [`config`]: Analysis thresholds and heartbeat cadence settings
//!
//! The computation is a single-threaded batch pass over accounts. Each
//! account's result depends only on its own routing-event slice, the shared
//! read-only heartbeat index, and its window, so callers are free to fan
//! accounts out across workers without coordination.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;

pub use config::AnalysisConfig;
pub use error::DowntimeError;
pub use models::{
    AccountId, AccountWindow, DowntimeReport, DowntimeResult, DowntimeRow, HeartbeatSample,
    RoutingEvent, ServerId,
};
pub use services::heartbeat_index::HeartbeatIndex;
pub use services::reconciler::{compute_account_downtime, compute_downtime};
