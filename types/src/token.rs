use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::GeoCoordinate,
    errors::{OutOfRange, ParseCoordinateError},
    hemisphere::{LatHemisphere, LonHemisphere},
};

lazy_static! {
    static ref RE_COMPACT: Regex = Regex::new(
        r"(?x)
        ^
        (?P<lat_h>[NS])(?P<lat_deg>\d{2})(?P<lat_min>\d{2})
        (?P<lon_h>[EW])(?P<lon_deg>\d{3})(?P<lon_min>\d{2})
        $
        "
    )
    .expect("Compact token regex is valid");
}

/// The fixed-width interchange form of a point: `NDDMMEDDDMM`,
/// whole degrees and whole (rounded) minutes with the hemisphere letters in front.
///
/// Parsing only checks the shape of the token, so any token received
/// from the outside is kept as is. The ranges are checked when the token
/// is [converted](#method.to_coordinate) back to a point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompactToken {
    lat_hemisphere: LatHemisphere,
    lat_deg: u8,
    lat_min: u8,
    lon_hemisphere: LonHemisphere,
    lon_deg: u16,
    lon_min: u8,
}

impl CompactToken {
    /// Construct a token from the whole degrees and minutes of both parts.
    ///
    /// # Errors
    /// - minutes are 60 or more;
    /// - latitude exceeds 90 degrees or longitude exceeds 180 degrees.
    pub fn new(
        lat: (LatHemisphere, u8, u8),
        lon: (LonHemisphere, u16, u8),
    ) -> Result<Self, OutOfRange> {
        let (lat_hemisphere, lat_deg, lat_min) = lat;
        let (lon_hemisphere, lon_deg, lon_min) = lon;

        check_minutes(lat_min)?;
        check_minutes(lon_min)?;
        if lat_deg > 90 || (lat_deg == 90 && lat_min > 0) {
            return Err(OutOfRange::Latitude);
        }
        if lon_deg > 180 || (lon_deg == 180 && lon_min > 0) {
            return Err(OutOfRange::Longitude);
        }

        Ok(Self {
            lat_hemisphere,
            lat_deg,
            lat_min,
            lon_hemisphere,
            lon_deg,
            lon_min,
        })
    }

    /// Latitude as (hemisphere, whole degrees, whole minutes)
    pub const fn latitude(self) -> (LatHemisphere, u8, u8) {
        (self.lat_hemisphere, self.lat_deg, self.lat_min)
    }

    /// Longitude as (hemisphere, whole degrees, whole minutes)
    pub const fn longitude(self) -> (LonHemisphere, u16, u8) {
        (self.lon_hemisphere, self.lon_deg, self.lon_min)
    }

    /// The point the token stands for (with the minute precision).
    ///
    /// # Errors
    /// When the numbers of the token are out of range (e.g. `N9960E12000`).
    pub fn to_coordinate(self) -> Result<GeoCoordinate, OutOfRange> {
        check_minutes(self.lat_min)?;
        check_minutes(self.lon_min)?;

        let lat = f64::from(self.lat_deg) + f64::from(self.lat_min) / 60.0;
        let lon = f64::from(self.lon_deg) + f64::from(self.lon_min) / 60.0;
        GeoCoordinate::with_hemispheres(lat, self.lat_hemisphere, lon, self.lon_hemisphere)
    }
}

fn check_minutes(minutes: u8) -> Result<(), OutOfRange> {
    if minutes < 60 {
        Ok(())
    } else {
        Err(OutOfRange::ArcMinutes)
    }
}

impl FromStr for CompactToken {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCoordinateError::EmptyString);
        }

        let s = s.to_ascii_uppercase();
        let caps = RE_COMPACT
            .captures(&s)
            .ok_or(ParseCoordinateError::Notation)?;

        let lat_hemisphere = LatHemisphere::try_from(first_char(&caps["lat_h"]))?;
        let lon_hemisphere = LonHemisphere::try_from(first_char(&caps["lon_h"]))?;

        Ok(Self {
            lat_hemisphere,
            lat_deg: caps["lat_deg"].parse()?,
            lat_min: caps["lat_min"].parse()?,
            lon_hemisphere,
            lon_deg: caps["lon_deg"].parse()?,
            lon_min: caps["lon_min"].parse()?,
        })
    }
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or_default()
}

impl fmt::Display for CompactToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:02}{:02}{}{:03}{:02}",
            self.lat_hemisphere,
            self.lat_deg,
            self.lat_min,
            self.lon_hemisphere,
            self.lon_deg,
            self.lon_min
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let token: CompactToken = "N1330E12112".parse().unwrap();
        assert_eq!(token.latitude(), (LatHemisphere::North, 13, 30));
        assert_eq!(token.longitude(), (LonHemisphere::East, 121, 12));
        assert_eq!(token.to_string(), "N1330E12112");
    }

    #[test]
    fn lowercase_is_accepted() {
        let token: CompactToken = " s0905w00730 ".parse().unwrap();
        assert_eq!(token.to_string(), "S0905W00730");
    }

    #[test]
    fn wrong_width() {
        assert!(matches!(
            "N1330E1212".parse::<CompactToken>(),
            Err(ParseCoordinateError::Notation)
        ));
        assert!(matches!(
            "".parse::<CompactToken>(),
            Err(ParseCoordinateError::EmptyString)
        ));
    }

    #[test]
    fn shape_only_is_checked() {
        let token: CompactToken = "N9960E99999".parse().unwrap();
        assert_eq!(token.to_string(), "N9960E99999");
        assert_eq!(token.to_coordinate(), Err(OutOfRange::ArcMinutes));
    }

    #[test]
    fn back_to_coordinate() {
        let token: CompactToken = "S1345W12107".parse().unwrap();
        let coord = token.to_coordinate().unwrap();
        assert_eq!(coord.latitude(), -13.75);
        assert_eq!(coord.longitude(), -121.116_667);
    }

    #[test]
    fn construct() {
        let token =
            CompactToken::new((LatHemisphere::South, 9, 5), (LonHemisphere::West, 7, 30)).unwrap();
        assert_eq!(token.to_string(), "S0905W00730");
    }

    #[test]
    #[should_panic(expected = "ArcMinutes")]
    fn construct_minutes_overflow() {
        let _t = CompactToken::new((LatHemisphere::North, 9, 60), (LonHemisphere::East, 7, 0))
            .unwrap();
    }

    #[test]
    #[should_panic(expected = "Longitude")]
    fn construct_longitude_overflow() {
        let _t = CompactToken::new((LatHemisphere::North, 9, 0), (LonHemisphere::East, 180, 1))
            .unwrap();
    }
}
