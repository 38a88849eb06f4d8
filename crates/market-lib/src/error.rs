//! Error types for the aggregation layer

use thiserror::Error;

/// Errors from aggregation over the market snapshot.
///
/// Missing-key lookups never error; they return empty collections. The only
/// failure an aggregation can surface is a summary computed over zero rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// No GPU in the snapshot has a single provider offering, so
    /// cross-market extremes are undefined.
    #[error("insufficient data: no GPU has any provider offering")]
    InsufficientData,
}
