//! Error types emitted by the waitlist CLI.
//!
//! Messages describe only their own layer; the binary prints the whole
//! `source` chain.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use waitlist_core::CoordinateError;
use waitlist_data::LoadError;
use waitlist_scorer::{ScoreError, SourceScoreError};

/// Errors emitted by the waitlist CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The facility coordinates are out of range.
    #[error("invalid facility location")]
    InvalidFacility(#[source] CoordinateError),
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Loading patients or scoring configuration failed.
    #[error("failed to load scoring inputs")]
    Load(#[from] LoadError),
    /// Scoring the batch failed.
    #[error("failed to score patients")]
    Score(#[from] ScoreError),
    /// Serializing the results failed.
    #[error("failed to serialize results")]
    SerializeResults(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}")]
    CreateOutput {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing the results failed.
    #[error("failed to write results")]
    WriteOutput(#[source] std::io::Error),
}

impl From<SourceScoreError<LoadError>> for CliError {
    fn from(err: SourceScoreError<LoadError>) -> Self {
        match err {
            SourceScoreError::Load(source) => Self::Load(source),
            SourceScoreError::Score(source) => Self::Score(source),
        }
    }
}
