//! Analysis configuration file support.
//!
//! This module provides utilities for reading analysis settings from TOML
//! configuration files. The defaults reproduce the collector's contract:
//! one-minute heartbeat cadence and a workload threshold of 1.0 as the
//! "server reachable / idle-or-light-load" proxy.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use anyhow::Context;

/// Analysis settings for downtime reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// A heartbeat workload at or below this value counts as "up".
    #[serde(default = "default_workload_threshold")]
    pub workload_threshold: f64,
    /// Heartbeat sampling cadence in seconds.
    #[serde(default = "default_heartbeat_interval_secs")]
    pub heartbeat_interval_secs: u32,
}

fn default_workload_threshold() -> f64 {
    1.0
}

fn default_heartbeat_interval_secs() -> u32 {
    60
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            workload_threshold: default_workload_threshold(),
            heartbeat_interval_secs: default_heartbeat_interval_secs(),
        }
    }
}

impl AnalysisConfig {
    /// Load analysis configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse analysis configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: AnalysisConfig =
            toml::from_str(content).context("Failed to parse analysis config")?;
        Ok(config)
    }
}
