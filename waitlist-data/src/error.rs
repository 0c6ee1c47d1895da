//! Errors raised while loading patient batches and scoring configuration.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;
use waitlist_core::{ConfigurationError, PatientId, PatientRecordError};

/// Errors raised while decoding a JSON patient batch.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document is not well-formed JSON.
    #[error("patient data is not valid JSON")]
    Syntax(#[source] serde_json::Error),
    /// The document is JSON but not an array of records.
    #[error("patient data must be a JSON array of patient records")]
    NotAnArray,
    /// A record is missing a field or holds a value of the wrong type.
    #[error("patient record {index} is malformed")]
    MalformedRecord {
        /// Position of the record within the array.
        index: usize,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record decoded but holds values outside their valid range.
    #[error("patient record {index} (id {id}) is invalid")]
    InvalidRecord {
        /// Position of the record within the array.
        index: usize,
        /// Identifier of the offending record.
        id: PatientId,
        /// Validation failure.
        #[source]
        source: PatientRecordError,
    },
}

/// Errors raised while reading patient batches or scoring configuration
/// from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the file failed.
    #[error("failed to read {path}")]
    Read {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// The patient file could not be decoded.
    #[error("failed to decode patients from {path}")]
    Decode {
        /// Patient file path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: DecodeError,
    },
    /// The scoring configuration is not valid JSON of the expected shape.
    #[error("failed to parse scoring configuration {path}")]
    ParseConfig {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The scoring configuration parsed but cannot be used.
    #[error("scoring configuration {path} is invalid")]
    InvalidConfiguration {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: ConfigurationError,
    },
}
