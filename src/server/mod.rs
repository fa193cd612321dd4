//! HTTP server exposing the triage endpoint.
//!
//! - [`api`]: Request/response types and route handlers
//! - [`metrics`]: Prometheus counters for requests and upstream latency

pub mod api;
pub mod metrics;
