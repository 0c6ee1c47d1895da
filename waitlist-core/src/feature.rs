//! Features that contribute to a patient's likelihood score.
//!
//! The enum offers compile-time safety for table and weight lookups.
//!
//! # Examples
//! ```
//! use waitlist_core::Feature;
//!
//! assert_eq!(Feature::AcceptedOffers.as_str(), "acceptedOffers");
//! assert_eq!(Feature::Age.to_string(), "age");
//! ```

/// A patient attribute classified into buckets and weighted into the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub enum Feature {
    /// Patient age in years.
    Age,
    /// Great-circle distance between the patient and the facility, in metres.
    DistanceToFacility,
    /// Lifetime count of accepted offers.
    AcceptedOffers,
    /// Lifetime count of cancelled offers.
    CanceledOffers,
    /// Mean time taken to answer an offer, in seconds.
    AverageReplyTime,
}

impl Feature {
    /// Every feature, in the order contributions are summed.
    pub const ALL: [Self; 5] = [
        Self::Age,
        Self::DistanceToFacility,
        Self::AcceptedOffers,
        Self::CanceledOffers,
        Self::AverageReplyTime,
    ];

    /// Return the feature's wire name.
    ///
    /// # Examples
    /// ```
    /// use waitlist_core::Feature;
    ///
    /// assert_eq!(Feature::DistanceToFacility.as_str(), "distanceToFacility");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::DistanceToFacility => "distanceToFacility",
            Self::AcceptedOffers => "acceptedOffers",
            Self::CanceledOffers => "canceledOffers",
            Self::AverageReplyTime => "averageReplyTime",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown feature '{s}'"))
    }
}

/// Names are matched case-insensitively, as in [`str::parse`].
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Feature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// One value per [`Feature`], stored without a map so lookups cannot miss.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerFeature<T> {
    age: T,
    distance_to_facility: T,
    accepted_offers: T,
    canceled_offers: T,
    average_reply_time: T,
}

impl<T> PerFeature<T> {
    /// Build a value for every feature from a closure.
    #[must_use]
    pub fn from_fn(mut value: impl FnMut(Feature) -> T) -> Self {
        Self {
            age: value(Feature::Age),
            distance_to_facility: value(Feature::DistanceToFacility),
            accepted_offers: value(Feature::AcceptedOffers),
            canceled_offers: value(Feature::CanceledOffers),
            average_reply_time: value(Feature::AverageReplyTime),
        }
    }

    /// Build a value for every feature, stopping at the first error.
    ///
    /// # Errors
    /// Propagates the first error returned by `value`, in [`Feature::ALL`]
    /// order.
    pub fn try_from_fn<E>(mut value: impl FnMut(Feature) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            age: value(Feature::Age)?,
            distance_to_facility: value(Feature::DistanceToFacility)?,
            accepted_offers: value(Feature::AcceptedOffers)?,
            canceled_offers: value(Feature::CanceledOffers)?,
            average_reply_time: value(Feature::AverageReplyTime)?,
        })
    }

    /// Borrow the value stored for `feature`.
    #[must_use]
    pub const fn get(&self, feature: Feature) -> &T {
        match feature {
            Feature::Age => &self.age,
            Feature::DistanceToFacility => &self.distance_to_facility,
            Feature::AcceptedOffers => &self.accepted_offers,
            Feature::CanceledOffers => &self.canceled_offers,
            Feature::AverageReplyTime => &self.average_reply_time,
        }
    }

    /// Mutably borrow the value stored for `feature`.
    pub const fn get_mut(&mut self, feature: Feature) -> &mut T {
        match feature {
            Feature::Age => &mut self.age,
            Feature::DistanceToFacility => &mut self.distance_to_facility,
            Feature::AcceptedOffers => &mut self.accepted_offers,
            Feature::CanceledOffers => &mut self.canceled_offers,
            Feature::AverageReplyTime => &mut self.average_reply_time,
        }
    }

    /// Iterate over `(feature, value)` pairs in [`Feature::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, &T)> {
        Feature::ALL
            .into_iter()
            .map(move |feature| (feature, self.get(feature)))
    }
}
