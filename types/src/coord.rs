use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::OutOfRange,
    hemisphere::{LatHemisphere, LonHemisphere},
};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// A point given by its decimal degrees, as placed on the map.
///
/// Both parts are always rounded to 6 fractional digits (~0.1 m on the equator)
/// and stay within their natural ranges: `-90 <= lat <= 90`, `-180 <= lon <= 180`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
    lat: f64,
    lon: f64,
}

impl GeoCoordinate {
    /// The number of fractional digits kept for both parts
    pub const PRECISION: i32 = 6;

    /// Construct a point from the signed decimal degrees.
    ///
    /// # Errors
    /// When the latitude or longitude (after rounding) is out of its range or not a number.
    pub fn new(lat: f64, lon: f64) -> Result<Self, OutOfRange> {
        let lat = round_to_precision(lat);
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(OutOfRange::Latitude);
        }

        let lon = round_to_precision(lon);
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
            return Err(OutOfRange::Longitude);
        }

        Ok(Self { lat, lon })
    }

    /// Construct a point from the absolute values of degrees and their hemispheres.
    /// The hemisphere always wins over the sign of the value.
    ///
    /// # Errors
    /// When the latitude or longitude is out of its range.
    pub fn with_hemispheres(
        lat: f64,
        lat_hemisphere: LatHemisphere,
        lon: f64,
        lon_hemisphere: LonHemisphere,
    ) -> Result<Self, OutOfRange> {
        Self::new(lat_hemisphere.apply(lat), lon_hemisphere.apply(lon))
    }

    /// Signed latitude in decimal degrees
    pub const fn latitude(self) -> f64 {
        self.lat
    }

    /// Signed longitude in decimal degrees
    pub const fn longitude(self) -> f64 {
        self.lon
    }

    /// The equator is considered northern
    pub fn lat_hemisphere(self) -> LatHemisphere {
        LatHemisphere::of(self.lat)
    }

    /// The prime meridian is considered eastern
    pub fn lon_hemisphere(self) -> LonHemisphere {
        LonHemisphere::of(self.lon)
    }
}

impl TryFrom<(f64, f64)> for GeoCoordinate {
    type Error = OutOfRange;

    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        let (lat, lon) = value;
        Self::new(lat, lon)
    }
}

impl From<GeoCoordinate> for (f64, f64) {
    fn from(coord: GeoCoordinate) -> Self {
        (coord.lat, coord.lon)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

/// Round the value to the [`GeoCoordinate::PRECISION`] fractional digits
pub(crate) fn round_to_precision(value: f64) -> f64 {
    let scale = 10_f64.powi(GeoCoordinate::PRECISION);
    (value * scale).round() / scale
}
