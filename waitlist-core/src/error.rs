//! Errors raised while building scoring configuration.

use thiserror::Error;

use crate::Feature;

/// Errors returned by [`BucketTable::new`](crate::BucketTable::new).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BucketTableError {
    /// No thresholds were supplied.
    #[error("bucket table must contain at least one threshold")]
    Empty,
    /// A threshold was NaN or infinite.
    #[error("threshold {value} at position {index} is not finite")]
    NonFiniteThreshold {
        /// Position of the offending threshold.
        index: usize,
        /// Value found at that position.
        value: f64,
    },
}

/// A baseline table or weight table cannot be used for scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// No bucket table was supplied for a scored feature.
    #[error("missing bucket table for feature `{feature}`")]
    MissingTable {
        /// Feature without a table.
        feature: Feature,
    },
    /// A supplied bucket table failed validation.
    #[error("invalid bucket table for feature `{feature}`")]
    InvalidTable {
        /// Feature owning the table.
        feature: Feature,
        /// Validation failure.
        #[source]
        source: BucketTableError,
    },
    /// No weight was supplied for a scored feature.
    #[error("missing weight for feature `{feature}`")]
    MissingWeight {
        /// Feature without a weight.
        feature: Feature,
    },
    /// A weight was NaN or infinite.
    #[error("weight {weight} for feature `{feature}` is not finite")]
    NonFiniteWeight {
        /// Feature owning the weight.
        feature: Feature,
        /// Value supplied.
        weight: f64,
    },
}
