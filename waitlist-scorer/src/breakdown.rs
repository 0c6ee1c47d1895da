//! Per-feature contributions that make up a patient's score.

use waitlist_core::{Feature, PerFeature};

/// Distance multipliers for ranks 1 to 5; closer buckets score higher.
pub const DISTANCE_MULTIPLIERS: [f64; 5] = [10.0, 8.0, 6.0, 4.0, 2.0];

/// Multiplier applied to ranks beyond the last defined distance bucket.
const SATURATED_DISTANCE_MULTIPLIER: f64 = 2.0;

/// How one feature fed into a patient's total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureContribution {
    /// Attribute value classified against the feature's table.
    pub raw_value: f64,
    /// Rank assigned by the bucket table.
    pub rank: usize,
    /// Rank after applying the feature's polarity.
    pub effective_rank: usize,
    /// Weight configured for the feature.
    pub weight: f64,
    /// Weighted amount added to the total.
    pub contribution: f64,
}

impl FeatureContribution {
    /// Compute the weighted contribution of `effective_rank` for `feature`.
    #[must_use]
    pub fn new(
        feature: Feature,
        raw_value: f64,
        rank: usize,
        effective_rank: usize,
        weight: f64,
    ) -> Self {
        Self {
            raw_value,
            rank,
            effective_rank,
            weight,
            contribution: weighted_contribution(feature, effective_rank, weight),
        }
    }
}

/// Return the multiplier for a distance rank, saturating past the table.
///
/// # Examples
/// ```
/// use waitlist_scorer::distance_multiplier;
///
/// assert_eq!(distance_multiplier(1), 10.0);
/// assert_eq!(distance_multiplier(5), 2.0);
/// assert_eq!(distance_multiplier(6), 2.0);
/// ```
#[must_use]
pub fn distance_multiplier(rank: usize) -> f64 {
    DISTANCE_MULTIPLIERS
        .get(rank.saturating_sub(1))
        .copied()
        .unwrap_or(SATURATED_DISTANCE_MULTIPLIER)
}

#[expect(
    clippy::float_arithmetic,
    reason = "contributions are weighted products of ranks"
)]
fn weighted_contribution(feature: Feature, rank: usize, weight: f64) -> f64 {
    match feature {
        Feature::Age => (rank_value(rank) * 2.0) * weight,
        Feature::DistanceToFacility => distance_multiplier(rank) * weight,
        Feature::AcceptedOffers | Feature::CanceledOffers | Feature::AverageReplyTime => {
            rank_value(rank) * weight
        }
    }
}

fn rank_value(rank: usize) -> f64 {
    u32::try_from(rank).map_or(f64::from(u32::MAX), f64::from)
}

/// Every feature's contribution together with the summed total.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    contributions: PerFeature<FeatureContribution>,
    total: f64,
}

impl ScoreBreakdown {
    /// Sum `contributions` in [`Feature::ALL`] order.
    #[expect(clippy::float_arithmetic, reason = "the total is a plain sum")]
    #[must_use]
    pub fn new(contributions: PerFeature<FeatureContribution>) -> Self {
        let total = contributions
            .iter()
            .fold(0.0, |sum, (_, part)| sum + part.contribution);
        Self {
            contributions,
            total,
        }
    }

    /// Borrow the contribution recorded for `feature`.
    #[must_use]
    pub const fn contribution(&self, feature: Feature) -> &FeatureContribution {
        self.contributions.get(feature)
    }

    /// Iterate over contributions in [`Feature::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, &FeatureContribution)> {
        self.contributions.iter()
    }

    /// Weighted total across every feature.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }
}
