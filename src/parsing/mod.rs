//! Ingestion of pre-structured log sections.
//!
//! The collectors emit the routing section, the heartbeat section, and the
//! account registry as JSON arrays; this module materializes them into the
//! typed records the analysis consumes. Raw-log tokenization happens
//! upstream and is out of scope here.

pub mod json_parser;

pub use json_parser::{
    parse_account_windows_json, parse_heartbeat_samples_json, parse_routing_events_json,
};
