//! Likelihood scoring for waitlisted patients.
//!
//! [`ScoringEngine`] ranks each patient's attributes against population
//! baseline buckets and sums the weighted ranks into a score estimating how
//! likely the patient is to accept an offered slot:
//! - Patients with fewer than [`SUFFICIENCY_THRESHOLD`] accepted plus
//!   cancelled offers are routed to the insufficient-data partition.
//! - Age contributes `(rank * 2) * weight`.
//! - Distance to the facility contributes an inverted multiplier from
//!   [`DISTANCE_MULTIPLIERS`] times its weight, so closer is better.
//! - Accepted offers, cancelled offers, and reply time contribute
//!   `rank * weight`.
//!
//! Scoring is a pure, synchronous computation over an already-loaded batch.
//!
//! # Examples
//!
//! ```
//! use waitlist_core::{BaselineBuckets, PatientRecord, WeightTable, coord};
//! use waitlist_scorer::score_patients;
//!
//! # fn main() -> Result<(), waitlist_scorer::ScoreError> {
//! let facility = coord(51.5, -0.12);
//! let patient = PatientRecord::new(1_u64, "Ada", facility).with_history(5, 3);
//! let results = score_patients(
//!     facility,
//!     &[patient],
//!     &BaselineBuckets::default(),
//!     &WeightTable::default(),
//! )?;
//! assert!(results.sufficient_data().is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod breakdown;
mod engine;
mod error;
mod sufficiency;

pub use breakdown::{
    DISTANCE_MULTIPLIERS, FeatureContribution, ScoreBreakdown, distance_multiplier,
};
pub use engine::{Assessment, ScoringEngine, score_patients};
pub use error::{ScoreError, SourceScoreError};
pub use sufficiency::{SUFFICIENCY_THRESHOLD, has_sufficient_history};

#[cfg(test)]
mod tests;
