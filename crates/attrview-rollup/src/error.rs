//! Rollup error types

use thiserror::Error;

/// Result type for rollup operations
pub type RollupResult<T> = std::result::Result<T, RollupError>;

/// Errors that can occur when configuring a rollup
///
/// Aggregation itself never fails.
#[derive(Debug, Error)]
pub enum RollupError {
    /// Operator name not recognized
    #[error("Unknown rollup operator: {0}")]
    UnknownOperator(String),
}
