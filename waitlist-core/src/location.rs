//! Geographic coordinates and great-circle distance.
//!
//! Coordinates are WGS84 degrees stored as [`geo::Coord`] with
//! `x = longitude` and `y = latitude`. Distances use the spherical law of
//! cosines over a mean Earth radius of [`EARTH_RADIUS_M`].

use geo::Coord;
use thiserror::Error;

/// Mean Earth radius used for distance calculations, in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_137.0;

/// Location of the facility issuing offers.
pub type FacilityLocation = Coord<f64>;

/// Build a coordinate from latitude and longitude in degrees.
///
/// # Examples
/// ```
/// use waitlist_core::coord;
///
/// let facility = coord(51.5, -0.12);
/// assert_eq!(facility.y, 51.5);
/// assert_eq!(facility.x, -0.12);
/// ```
#[must_use]
pub const fn coord(latitude: f64, longitude: f64) -> Coord<f64> {
    Coord {
        x: longitude,
        y: latitude,
    }
}

/// Errors returned by [`validate_coordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was not finite or fell outside `-90..=90`.
    #[error("latitude {0} is outside -90..=90 degrees")]
    InvalidLatitude(f64),
    /// Longitude was not finite or fell outside `-180..=180`.
    #[error("longitude {0} is outside -180..=180 degrees")]
    InvalidLongitude(f64),
}

/// Check that a coordinate holds a finite, in-range latitude and longitude.
///
/// # Errors
/// Returns [`CoordinateError`] naming the first offending component.
pub fn validate_coordinate(location: Coord<f64>) -> Result<(), CoordinateError> {
    if !location.y.is_finite() || !(-90.0..=90.0).contains(&location.y) {
        return Err(CoordinateError::InvalidLatitude(location.y));
    }
    if !location.x.is_finite() || !(-180.0..=180.0).contains(&location.x) {
        return Err(CoordinateError::InvalidLongitude(location.x));
    }
    Ok(())
}

/// Great-circle distance in metres between two latitude/longitude pairs.
///
/// # Examples
/// ```
/// use waitlist_core::distance;
///
/// assert_eq!(distance(40.0, -73.0, 40.0, -73.0), 0.0);
/// let one_degree = distance(0.0, 0.0, 0.0, 1.0);
/// assert!((one_degree - 111_197.3).abs() < 1.0);
/// ```
#[must_use]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    great_circle_distance(coord(lat1, lon1), coord(lat2, lon2))
}

/// Great-circle distance in metres between two coordinates.
///
/// The cosine sum is clamped into `-1.0..=1.0` so rounding drift near
/// coincident or antipodal points cannot push `acos` out of its domain.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the law of cosines is floating-point trigonometry"
)]
pub fn great_circle_distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    if from == to {
        return 0.0;
    }
    let lat_from = radians(from.y);
    let lat_to = radians(to.y);
    let delta_lon = radians((to.x - from.x).abs());

    let cosine = lat_from.sin() * lat_to.sin() + lat_from.cos() * lat_to.cos() * delta_lon.cos();
    let central_angle = cosine.clamp(-1.0, 1.0).acos();

    EARTH_RADIUS_M * central_angle
}

fn radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Serde adapter encoding a [`Coord`] as `{"latitude", "longitude"}`.
#[cfg(feature = "serde")]
pub(crate) mod lat_lon {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct LatLon {
        latitude: f64,
        longitude: f64,
    }

    pub(crate) fn serialize<S: Serializer>(
        location: &Coord<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        LatLon {
            latitude: location.y,
            longitude: location.x,
        }
        .serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Coord<f64>, D::Error> {
        let LatLon {
            latitude,
            longitude,
        } = LatLon::deserialize(deserializer)?;
        Ok(super::coord(latitude, longitude))
    }
}
