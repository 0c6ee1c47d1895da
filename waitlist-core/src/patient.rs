//! Patient records as supplied by the waitlist.

use geo::Coord;
use thiserror::Error;

use crate::location::{CoordinateError, validate_coordinate};

/// Opaque patient identifier, passed through scoring unchanged.
///
/// Any JSON scalar is accepted and written back in the same shape, so a
/// batch never fails on the form of its identifiers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum PatientId {
    /// Non-negative integer identifier.
    Number(u64),
    /// Negative integer identifier.
    Signed(i64),
    /// Fractional identifier.
    Decimal(f64),
    /// Boolean identifier.
    Flag(bool),
    /// Textual identifier.
    Text(String),
    /// Explicit `null` identifier.
    Null,
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Signed(id) => write!(f, "{id}"),
            Self::Decimal(id) => write!(f, "{id}"),
            Self::Flag(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<u64> for PatientId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for PatientId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for PatientId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A patient on a facility's waitlist.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use waitlist_core::{PatientRecord, coord};
///
/// let patient = PatientRecord::new(7_u64, "Ada", coord(40.71, -74.0))
///     .with_age(64)
///     .with_history(18, 4)
///     .with_reply_time(420.0);
///
/// assert_eq!(patient.interaction_count(), 22);
/// assert!(patient.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PatientRecord {
    /// Opaque identifier.
    pub id: PatientId,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Home location.
    #[cfg_attr(feature = "serde", serde(with = "crate::location::lat_lon"))]
    pub location: Coord<f64>,
    /// Lifetime count of accepted offers.
    pub accepted_offers: u32,
    /// Lifetime count of cancelled offers.
    pub canceled_offers: u32,
    /// Mean time taken to answer an offer, in seconds.
    pub average_reply_time: f64,
}

/// Errors returned by [`PatientRecord::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PatientRecordError {
    /// The home location is not a valid coordinate.
    #[error("invalid location")]
    Location(#[from] CoordinateError),
    /// The average reply time is negative or not finite.
    #[error("average reply time {0} must be a finite, non-negative number of seconds")]
    InvalidReplyTime(f64),
}

impl PatientRecord {
    /// Construct a record with no history, age zero, and a zero reply time.
    #[must_use]
    pub fn new(id: impl Into<PatientId>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: 0,
            location,
            accepted_offers: 0,
            canceled_offers: 0,
            average_reply_time: 0.0,
        }
    }

    /// Set the age while returning `self` for chaining.
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Set accepted and cancelled offer counts while returning `self`.
    #[must_use]
    pub const fn with_history(mut self, accepted_offers: u32, canceled_offers: u32) -> Self {
        self.accepted_offers = accepted_offers;
        self.canceled_offers = canceled_offers;
        self
    }

    /// Set the average reply time in seconds while returning `self`.
    #[must_use]
    pub const fn with_reply_time(mut self, seconds: f64) -> Self {
        self.average_reply_time = seconds;
        self
    }

    /// Total accepted plus cancelled offers.
    #[must_use]
    pub fn interaction_count(&self) -> u64 {
        u64::from(self.accepted_offers) + u64::from(self.canceled_offers)
    }

    /// Check the fields that the type system does not already constrain.
    ///
    /// # Errors
    /// Returns [`PatientRecordError`] for an out-of-range location or a
    /// negative or non-finite reply time.
    pub fn validate(&self) -> Result<(), PatientRecordError> {
        validate_coordinate(self.location)?;
        if !self.average_reply_time.is_finite() || self.average_reply_time < 0.0 {
            return Err(PatientRecordError::InvalidReplyTime(
                self.average_reply_time,
            ));
        }
        Ok(())
    }
}
