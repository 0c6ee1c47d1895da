//! Facade crate for the waitlist scoring engine.
//!
//! This crate re-exports the core domain types and the scorer, and exposes
//! JSON loading behind the `data` feature.

#![forbid(unsafe_code)]

pub use waitlist_core::{
    BaselineBuckets, BucketTable, ConfigurationError, FacilityLocation, Feature, PatientId,
    PatientRecord, PatientSource, Polarity, PolarityOverrides, ResultSet, Score, ScoredResult,
    WeightTable, coord, distance, find_bucket,
};
pub use waitlist_scorer::{
    Assessment, SUFFICIENCY_THRESHOLD, ScoreBreakdown, ScoreError, ScoringEngine,
    SourceScoreError, score_patients,
};

#[cfg(feature = "data")]
pub use waitlist_data::{
    JsonPatientFile, LoadError, ScoringConfig, load_patients, load_patients_async,
    load_scoring_config,
};
