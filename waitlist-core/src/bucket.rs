//! Ordinal bucket classification against baseline threshold tables.
//!
//! A threshold table `[t0, t1, .., tN-1]` splits the number line into
//! `N + 1` ranks: values below `t0` fall into rank 1, values in
//! `t(i) <= v < t(i+1)` into rank `i + 1`, and values at or above the last
//! threshold into rank `N + 1`.

use std::collections::HashMap;

use crate::{BucketTableError, ConfigurationError, Feature, PerFeature};

/// Classify `value` against ascending `thresholds`, returning a 1-based rank.
///
/// The rank is always within `1..=thresholds.len() + 1`. Values below the
/// first threshold, NaN, and any value checked against an empty table map
/// to rank 1.
///
/// # Examples
/// ```
/// use waitlist_core::find_bucket;
///
/// let age = [21.0, 35.0, 45.0, 55.0, 65.0];
/// assert_eq!(find_bucket(&age, 18.0), 1);
/// assert_eq!(find_bucket(&age, 21.0), 1);
/// assert_eq!(find_bucket(&age, 40.0), 2);
/// assert_eq!(find_bucket(&age, 65.0), 6);
/// ```
#[must_use]
pub fn find_bucket(thresholds: &[f64], value: f64) -> usize {
    match thresholds.first() {
        Some(&floor) if value >= floor => {}
        _ => return 1,
    }
    thresholds
        .windows(2)
        .position(|pair| matches!(pair, [lower, upper] if *lower <= value && value < *upper))
        .map_or(thresholds.len() + 1, |index| index + 1)
}

/// A validated, non-empty sequence of finite thresholds.
///
/// Ascending order is expected but not enforced; see
/// [`BucketTable::is_ascending`].
#[derive(Debug, Clone, PartialEq)]
pub struct BucketTable {
    thresholds: Vec<f64>,
}

impl BucketTable {
    /// Validate and construct a [`BucketTable`].
    ///
    /// # Errors
    /// Returns [`BucketTableError::Empty`] when no thresholds are supplied
    /// and [`BucketTableError::NonFiniteThreshold`] for NaN or infinite
    /// entries.
    pub fn new(thresholds: Vec<f64>) -> Result<Self, BucketTableError> {
        if thresholds.is_empty() {
            return Err(BucketTableError::Empty);
        }
        if let Some((index, &value)) = thresholds
            .iter()
            .enumerate()
            .find(|(_, threshold)| !threshold.is_finite())
        {
            return Err(BucketTableError::NonFiniteThreshold { index, value });
        }
        Ok(Self { thresholds })
    }

    /// Rank `value` within this table.
    #[must_use]
    pub fn rank(&self, value: f64) -> usize {
        find_bucket(&self.thresholds, value)
    }

    /// Highest rank this table can produce.
    #[must_use]
    pub const fn max_rank(&self) -> usize {
        self.thresholds.len() + 1
    }

    /// Report whether every threshold is strictly greater than its predecessor.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        self.thresholds
            .windows(2)
            .all(|pair| matches!(pair, [lower, upper] if lower < upper))
    }

    /// Borrow the raw thresholds.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }
}

/// Threshold tables for every scored feature.
///
/// # Examples
/// ```
/// use waitlist_core::{BaselineBuckets, Feature};
///
/// let buckets = BaselineBuckets::default();
/// assert_eq!(buckets.table(Feature::Age).rank(70.0), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineBuckets {
    tables: PerFeature<BucketTable>,
}

impl BaselineBuckets {
    /// Validate and construct tables from `(feature, thresholds)` pairs.
    ///
    /// Later pairs for the same feature replace earlier ones.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::MissingTable`] when a feature has no
    /// table and [`ConfigurationError::InvalidTable`] when a table is empty
    /// or holds non-finite thresholds.
    pub fn new<I>(tables: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (Feature, Vec<f64>)>,
    {
        let mut raw: HashMap<Feature, Vec<f64>> = tables.into_iter().collect();
        let validated = PerFeature::try_from_fn(|feature| {
            let thresholds = raw
                .remove(&feature)
                .ok_or(ConfigurationError::MissingTable { feature })?;
            build_table(feature, thresholds)
        })?;
        Ok(Self { tables: validated })
    }

    /// Replace the table for one feature.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidTable`] when the replacement is
    /// empty or holds non-finite thresholds.
    pub fn with_table(
        mut self,
        feature: Feature,
        thresholds: Vec<f64>,
    ) -> Result<Self, ConfigurationError> {
        *self.tables.get_mut(feature) = build_table(feature, thresholds)?;
        Ok(self)
    }

    /// Borrow the table for `feature`.
    #[must_use]
    pub const fn table(&self, feature: Feature) -> &BucketTable {
        self.tables.get(feature)
    }
}

fn build_table(feature: Feature, thresholds: Vec<f64>) -> Result<BucketTable, ConfigurationError> {
    let table = BucketTable::new(thresholds)
        .map_err(|source| ConfigurationError::InvalidTable { feature, source })?;
    if !table.is_ascending() {
        log::warn!("bucket thresholds for `{feature}` are not strictly ascending; ranks may be inconsistent");
    }
    Ok(table)
}

impl Default for BaselineBuckets {
    fn default() -> Self {
        let tables = PerFeature::from_fn(|feature| BucketTable {
            thresholds: reference_thresholds(feature).to_vec(),
        });
        Self { tables }
    }
}

/// Population baseline thresholds shipped with the engine.
const fn reference_thresholds(feature: Feature) -> &'static [f64] {
    match feature {
        Feature::Age => &[21.0, 35.0, 45.0, 55.0, 65.0],
        Feature::DistanceToFacility => &[0.0, 3_000.0, 6_000.0, 9_000.0, 12_000.0],
        Feature::AcceptedOffers => &[0.0, 8.0, 19.0, 29.0, 39.0, 48.0, 59.0, 69.0, 79.0, 89.0],
        Feature::CanceledOffers => &[0.0, 10.0, 21.0, 30.0, 41.0, 51.0, 60.0, 72.0, 82.0, 91.0],
        Feature::AverageReplyTime => &[
            1.0, 377.0, 738.0, 1_073.0, 1_456.0, 1_774.0, 2_112.0, 2_516.0, 2_938.0, 3_251.0,
        ],
    }
}
