//! Client for the xray stats service
//!
//! This crate provides:
//! - The `StatsService` gRPC contract (system stats and counter queries)
//! - Connection setup, insecure by default with optional TLS and deadlines
//! - Query operations that persist results as JSON files
//! - Traffic counter naming for users, inbounds and outbounds

pub mod client;
pub mod error;
pub mod output;
pub mod pattern;
pub mod proto;
pub mod query;

pub use client::{connect, ClientConfig, GrpcStatsApi, StatsApi};
pub use error::{Result, StatsError};
pub use output::{
    write_result, write_traffic, TrafficRecord, STATS_FILE, SYS_STATS_FILE, TRAFFIC_STATS_FILE,
};
pub use pattern::{traffic_pattern, Direction, Scope, TrafficTarget};
pub use query::{
    collect_traffic, query_stats, query_stats_with, query_stats_with_config, query_traffic,
    query_traffic_with, query_traffic_with_config,
};
