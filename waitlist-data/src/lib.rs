//! Loading patient batches and scoring configuration from JSON files.
//!
//! Loading is the only I/O in the scoring pipeline. Batches are read in
//! full, either synchronously with [`load_patients`] or on a Tokio runtime
//! with [`load_patients_async`], and handed to the scorer once in memory.
//! Every record is validated on load, so a malformed file fails as a whole
//! and the error names the offending record.

#![forbid(unsafe_code)]

mod config;
mod error;
mod patients;

pub use config::{ScoringConfig, load_scoring_config};
pub use error::{DecodeError, LoadError};
pub use patients::{JsonPatientFile, load_patients, load_patients_async, parse_patients};
