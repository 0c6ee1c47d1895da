//! Scoring configuration files.
//!
//! Every section is optional and falls back to the shipped defaults:
//!
//! ```json
//! {
//!   "weights": {"age": 0.1, "distanceToFacility": 0.1, "acceptedOffers": 0.3,
//!               "canceledOffers": 0.3, "averageReplyTime": 0.2},
//!   "baselineBuckets": {"age": [21, 35, 45, 55, 65], "...": []},
//!   "invertPolarity": {"canceledOffers": true}
//! }
//! ```
//!
//! A section that is present must name every feature.

use std::collections::BTreeMap;

use camino::Utf8Path;
use log::debug;
use serde::Deserialize;
use waitlist_core::{BaselineBuckets, ConfigurationError, Feature, PolarityOverrides, WeightTable};

use crate::LoadError;

/// Optional overrides for weights, bucket tables, and feature polarity.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight for each feature.
    #[serde(default)]
    pub weights: Option<BTreeMap<Feature, f64>>,
    /// Threshold table for each feature.
    #[serde(default)]
    pub baseline_buckets: Option<BTreeMap<Feature, Vec<f64>>>,
    /// Features whose rank should be mirrored before weighting.
    #[serde(default)]
    pub invert_polarity: BTreeMap<Feature, bool>,
}

impl ScoringConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed JSON, unknown sections,
    /// or unknown feature names.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Build the weight table, defaulting when no weights are configured.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] when a feature is missing or a weight
    /// is not finite.
    pub fn weight_table(&self) -> Result<WeightTable, ConfigurationError> {
        self.weights.as_ref().map_or_else(
            || Ok(WeightTable::default()),
            |weights| WeightTable::new(weights.iter().map(|(feature, weight)| (*feature, *weight))),
        )
    }

    /// Build the bucket tables, defaulting when none are configured.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] when a feature is missing or a table
    /// is empty or holds non-finite thresholds.
    pub fn baseline_buckets(&self) -> Result<BaselineBuckets, ConfigurationError> {
        self.baseline_buckets.as_ref().map_or_else(
            || Ok(BaselineBuckets::default()),
            |tables| BaselineBuckets::new(tables.clone()),
        )
    }

    /// Collect the features flagged for inversion.
    #[must_use]
    pub fn polarity(&self) -> PolarityOverrides {
        PolarityOverrides::inverting(
            self.invert_polarity
                .iter()
                .filter(|(_, invert)| **invert)
                .map(|(feature, _)| *feature),
        )
    }
}

/// Load and validate a scoring configuration file.
///
/// # Errors
/// Returns [`LoadError::Read`], [`LoadError::ParseConfig`], or
/// [`LoadError::InvalidConfiguration`].
pub fn load_scoring_config(path: &Utf8Path) -> Result<ScoringConfig, LoadError> {
    let bytes = waitlist_fs::read_utf8_file(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ScoringConfig::from_slice(&bytes).map_err(|source| LoadError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let invalid = |source| LoadError::InvalidConfiguration {
        path: path.to_path_buf(),
        source,
    };
    config.weight_table().map_err(invalid)?;
    config.baseline_buckets().map_err(invalid)?;
    debug!(
        "loaded scoring configuration from {path}; inverted features: {:?}",
        config.polarity().inverted().collect::<Vec<_>>()
    );
    Ok(config)
}
