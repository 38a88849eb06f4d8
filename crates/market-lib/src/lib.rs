//! Core library for the GPU market dashboard
//!
//! This crate provides:
//! - The immutable market catalog (GPU specs, provider pricing, history)
//! - Pure aggregation over a catalog snapshot (offerings, matrix, summary)
//! - Narrative analysis via a pluggable text generator with disk caching
//! - Health checks and observability

pub mod aggregate;
pub mod analyst;
pub mod catalog;
pub mod error;
pub mod health;
pub mod models;
pub mod observability;

pub use catalog::MarketSnapshot;
pub use error::MarketError;
pub use health::{
    ComponentHealth, ComponentStatus, HealthRegistry, HealthResponse, ReadinessResponse,
};
pub use models::*;
pub use observability::{MarketMetrics, StructuredLogger};
