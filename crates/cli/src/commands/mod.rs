//! CLI command implementations

pub mod analyst;
pub mod analytics;
pub mod catalog;
pub mod market;
