//! Per-feature weights applied to bucket ranks.

use std::collections::HashMap;

use crate::{ConfigurationError, Feature, PerFeature};

/// Multiplier applied to each feature's rank contribution.
///
/// Weights need not sum to one; the engine applies them as given.
///
/// # Examples
/// ```
/// use waitlist_core::{Feature, WeightTable};
///
/// # fn main() -> Result<(), waitlist_core::ConfigurationError> {
/// let weights = WeightTable::default().with_weight(Feature::Age, 0.25)?;
/// assert_eq!(weights.weight(Feature::Age), 0.25);
/// assert_eq!(weights.weight(Feature::AcceptedOffers), 0.3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: PerFeature<f64>,
}

impl WeightTable {
    /// Validate and construct weights from `(feature, weight)` pairs.
    ///
    /// Later pairs for the same feature replace earlier ones.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::MissingWeight`] when a feature has no
    /// weight and [`ConfigurationError::NonFiniteWeight`] for NaN or infinite
    /// weights.
    pub fn new<I>(weights: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (Feature, f64)>,
    {
        let raw: HashMap<Feature, f64> = weights.into_iter().collect();
        let validated = PerFeature::try_from_fn(|feature| {
            let weight = raw
                .get(&feature)
                .copied()
                .ok_or(ConfigurationError::MissingWeight { feature })?;
            check_finite(feature, weight)
        })?;
        Ok(Self { weights: validated })
    }

    /// Replace the weight for one feature.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::NonFiniteWeight`] for NaN or infinite
    /// weights.
    pub fn with_weight(mut self, feature: Feature, weight: f64) -> Result<Self, ConfigurationError> {
        *self.weights.get_mut(feature) = check_finite(feature, weight)?;
        Ok(self)
    }

    /// Return the weight for `feature`.
    #[must_use]
    pub const fn weight(&self, feature: Feature) -> f64 {
        *self.weights.get(feature)
    }

    /// Iterate over `(feature, weight)` pairs in [`Feature::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        self.weights.iter().map(|(feature, weight)| (feature, *weight))
    }
}

fn check_finite(feature: Feature, weight: f64) -> Result<f64, ConfigurationError> {
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(ConfigurationError::NonFiniteWeight { feature, weight })
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        let weights = PerFeature::from_fn(|feature| match feature {
            Feature::Age | Feature::DistanceToFacility => 0.1,
            Feature::AcceptedOffers | Feature::CanceledOffers => 0.3,
            Feature::AverageReplyTime => 0.2,
        });
        Self { weights }
    }
}
