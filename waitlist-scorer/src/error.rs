//! Errors raised while scoring a batch.

use thiserror::Error;
use waitlist_core::{ConfigurationError, CoordinateError, PatientId, PatientRecordError};

/// Errors that abort scoring of a whole batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A patient record failed validation; no results are produced.
    #[error("patient record {index} (id {id}) is malformed")]
    MalformedRecord {
        /// Position of the record within the batch.
        index: usize,
        /// Identifier of the offending record.
        id: PatientId,
        /// Validation failure.
        #[source]
        source: PatientRecordError,
    },
    /// Bucket tables or weights cannot be used for scoring.
    #[error("invalid scoring configuration")]
    InvalidConfiguration(#[from] ConfigurationError),
    /// The facility location is not a valid coordinate.
    #[error("invalid facility location")]
    InvalidFacility(#[source] CoordinateError),
}

/// Errors raised by [`ScoringEngine::score_source`](crate::ScoringEngine::score_source).
#[derive(Debug, Error)]
pub enum SourceScoreError<E>
where
    E: std::error::Error + 'static,
{
    /// The patient source could not resolve its batch.
    #[error("failed to load patients")]
    Load(#[source] E),
    /// The loaded batch could not be scored.
    #[error("failed to score patients")]
    Score(#[from] ScoreError),
}
