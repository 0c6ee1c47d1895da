//! Optional per-feature rank inversion.
//!
//! Every feature is scored "higher rank, higher contribution" by default,
//! which includes cancelled offers. Inverting a feature mirrors its rank
//! within the table (`1 <-> max_rank`) before the feature's formula runs.

use crate::{Feature, PerFeature};

/// Direction in which a feature's rank feeds its contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Use the rank as classified.
    #[default]
    Standard,
    /// Mirror the rank so the lowest bucket scores as the highest.
    Inverted,
}

impl Polarity {
    /// Apply this polarity to `rank` drawn from a table whose top rank is
    /// `max_rank`.
    ///
    /// # Examples
    /// ```
    /// use waitlist_core::Polarity;
    ///
    /// assert_eq!(Polarity::Standard.apply(2, 11), 2);
    /// assert_eq!(Polarity::Inverted.apply(2, 11), 10);
    /// assert_eq!(Polarity::Inverted.apply(11, 11), 1);
    /// ```
    #[must_use]
    pub const fn apply(self, rank: usize, max_rank: usize) -> usize {
        match self {
            Self::Standard => rank,
            Self::Inverted => (max_rank + 1).saturating_sub(rank),
        }
    }
}

/// Features whose polarity has been flipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolarityOverrides {
    polarity: PerFeature<Polarity>,
}

impl PolarityOverrides {
    /// Build overrides inverting each listed feature.
    ///
    /// # Examples
    /// ```
    /// use waitlist_core::{Feature, Polarity, PolarityOverrides};
    ///
    /// let overrides = PolarityOverrides::inverting([Feature::CanceledOffers]);
    /// assert_eq!(overrides.polarity(Feature::CanceledOffers), Polarity::Inverted);
    /// assert_eq!(overrides.polarity(Feature::AcceptedOffers), Polarity::Standard);
    /// ```
    #[must_use]
    pub fn inverting<I>(features: I) -> Self
    where
        I: IntoIterator<Item = Feature>,
    {
        features.into_iter().fold(Self::default(), Self::with_inverted)
    }

    /// Invert one feature while returning `self` for chaining.
    #[must_use]
    pub fn with_inverted(mut self, feature: Feature) -> Self {
        *self.polarity.get_mut(feature) = Polarity::Inverted;
        self
    }

    /// Return the polarity for `feature`.
    #[must_use]
    pub const fn polarity(&self, feature: Feature) -> Polarity {
        *self.polarity.get(feature)
    }

    /// Iterate over the features currently inverted.
    pub fn inverted(&self) -> impl Iterator<Item = Feature> + '_ {
        self.polarity
            .iter()
            .filter(|(_, polarity)| **polarity == Polarity::Inverted)
            .map(|(feature, _)| feature)
    }
}
