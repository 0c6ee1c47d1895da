//! Core domain types for the waitlist scoring engine.
//!
//! The crate holds everything the scorer needs that carries no policy of its
//! own:
//! - [`PatientRecord`] and the [`PatientSource`] seam used to load batches.
//! - [`find_bucket`], which classifies a value against an ascending
//!   threshold table, and the validated [`BaselineBuckets`] and
//!   [`WeightTable`] configuration inputs.
//! - [`great_circle_distance`], the law-of-cosines distance used for the
//!   distance-to-facility feature.
//! - [`ResultSet`], the partitioned scoring output.
//!
//! Constructors return `Result` so invalid configuration surfaces before any
//! patient is scored.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bucket;
mod error;
mod feature;
mod location;
mod patient;
mod polarity;
mod result;
mod source;
mod weights;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use bucket::{BaselineBuckets, BucketTable, find_bucket};
pub use error::{BucketTableError, ConfigurationError};
pub use feature::{Feature, PerFeature};
pub use location::{
    CoordinateError, EARTH_RADIUS_M, FacilityLocation, coord, distance, great_circle_distance,
    validate_coordinate,
};
pub use patient::{PatientId, PatientRecord, PatientRecordError};
pub use polarity::{Polarity, PolarityOverrides};
pub use result::{INSUFFICIENT_DATA_MARKER, ResultSet, Score, ScoredResult};
pub use source::PatientSource;
pub use weights::WeightTable;
