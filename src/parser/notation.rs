use std::fmt;

use hazard_coords_types::{
    CompactToken, GeoCoordinate, LatHemisphere, LonHemisphere, ParseCoordinateError,
};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::utils::dms_to_degrees;

lazy_static! {
    /// `DDMMSS[.f]H DDDMMSS[.f]H`
    static ref RE_COMPACT_DMS: Regex = Regex::new(
        r"(?P<lat>\d{6})(?P<lat_fract>\.\d+)?\s*(?P<lat_h>[NS])\s+(?P<lon>\d{7})(?P<lon_fract>\.\d+)?\s*(?P<lon_h>[EW])"
    )
    .expect("Compact DMS regex is valid");

    /// `13°45'23"N`, `13 45 23 N`
    static ref RE_SPACED_DMS_LAT: Regex = Regex::new(&spaced_dms_re("NS"))
        .expect("Spaced DMS latitude regex is valid");
    static ref RE_SPACED_DMS_LON: Regex = Regex::new(&spaced_dms_re("EW"))
        .expect("Spaced DMS longitude regex is valid");

    /// `13.5 N`, `-121.2E`
    static ref RE_DECIMAL_LAT: Regex = Regex::new(&decimal_with_hemisphere_re("NS"))
        .expect("Decimal latitude regex is valid");
    static ref RE_DECIMAL_LON: Regex = Regex::new(&decimal_with_hemisphere_re("EW"))
        .expect("Decimal longitude regex is valid");

    /// `13.5 121.2` (commas are already replaced with spaces)
    static ref RE_BARE_DECIMAL: Regex = Regex::new(
        r"^\s*(?P<lat>[-+]?\d+(?:\.\d+)?)\s*[,\s]\s*(?P<lon>[-+]?\d+(?:\.\d+)?)"
    )
    .expect("Bare decimal regex is valid");
}

/// Degrees, minutes and seconds separated by the signs or any spaces
fn spaced_dms_re(hemispheres: &str) -> String {
    format!(
        r#"(?P<deg>\d+)[°\s]+(?P<min>\d+)['′’\s]+(?P<sec>\d+(?:\.\d+)?)["″”\s]*(?P<h>[{hemispheres}])"#
    )
}

/// Signed or unsigned decimal number followed by the hemisphere letter
fn decimal_with_hemisphere_re(hemispheres: &str) -> String {
    format!(r"(?P<value>[-+]?\d+(?:\.\d+)?)\s*(?P<h>[{hemispheres}])")
}

/// The ways to write down a point, in the order they are tried.
///
/// The order matters: the later notations match the fragments
/// of the earlier ones, e.g. `134523N 1210715E` also looks like
/// a pair of decimal numbers with the hemisphere letters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `134523N 1210715E`: degrees, minutes, seconds without separators
    CompactDms,
    /// `N1345E12107`: hemisphere first, degrees and minutes without separators
    CompactDm,
    /// `13°45'23"N 121°07'15"E` or `13 45 23 N 121 7 15 E`
    SpacedDms,
    /// `13.5 N, 121.2 E`: decimal degrees with the hemisphere letters
    HemisphereDecimal,
    /// `13.5, 121.2`: signed decimal degrees in the (lat, lon) order
    BareDecimal,
}

impl Notation {
    /// All the notations in their precedence order
    pub const ALL: [Self; 5] = [
        Self::CompactDms,
        Self::CompactDm,
        Self::SpacedDms,
        Self::HemisphereDecimal,
        Self::BareDecimal,
    ];

    /// Try to read the point written in this notation.
    ///
    /// The string should already be normalized:
    /// trimmed, in upper case and with commas replaced by spaces.
    ///
    /// # Errors
    /// - [`ParseCoordinateError::Notation`] if the string is written differently;
    /// - the other variants if the notation matches, but the numbers are invalid.
    pub fn parse(self, normalized: &str) -> Result<GeoCoordinate, ParseCoordinateError> {
        match self {
            Self::CompactDms => parse_compact_dms(normalized),
            Self::CompactDm => parse_compact_dm(normalized),
            Self::SpacedDms => parse_spaced_dms(normalized),
            Self::HemisphereDecimal => parse_hemisphere_decimal(normalized),
            Self::BareDecimal => parse_bare_decimal(normalized),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CompactDms => "compact DMS",
            Self::CompactDm => "compact DM",
            Self::SpacedDms => "DMS",
            Self::HemisphereDecimal => "decimal degrees with hemispheres",
            Self::BareDecimal => "decimal degrees",
        };
        write!(f, "{name}")
    }
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or_default()
}

fn hemispheres(
    caps_lat: &Captures<'_>,
    caps_lon: &Captures<'_>,
    group: &str,
) -> Result<(LatHemisphere, LonHemisphere), ParseCoordinateError> {
    let lat_h = LatHemisphere::try_from(first_char(&caps_lat[group]))?;
    let lon_h = LonHemisphere::try_from(first_char(&caps_lon[group]))?;
    Ok((lat_h, lon_h))
}

/// Fixed-width `DD(D)MMSS` digits with the optional fraction of the second
fn compact_dms_to_degrees(
    digits: &str,
    deg_width: usize,
    fraction: Option<&str>,
) -> Result<f64, ParseCoordinateError> {
    let deg: f64 = digits[..deg_width].parse()?;
    let min: f64 = digits[deg_width..deg_width + 2].parse()?;
    let sec = format!("{}{}", &digits[deg_width + 2..], fraction.unwrap_or_default());
    let sec: f64 = sec.parse()?;
    Ok(dms_to_degrees(deg, min, sec)?)
}

fn parse_compact_dms(s: &str) -> Result<GeoCoordinate, ParseCoordinateError> {
    let caps = RE_COMPACT_DMS
        .captures(s)
        .ok_or(ParseCoordinateError::Notation)?;

    let lat = compact_dms_to_degrees(
        &caps["lat"],
        2,
        caps.name("lat_fract").map(|m| m.as_str()),
    )?;
    let lon = compact_dms_to_degrees(
        &caps["lon"],
        3,
        caps.name("lon_fract").map(|m| m.as_str()),
    )?;

    let lat_h = LatHemisphere::try_from(first_char(&caps["lat_h"]))?;
    let lon_h = LonHemisphere::try_from(first_char(&caps["lon_h"]))?;
    Ok(GeoCoordinate::with_hemispheres(lat, lat_h, lon, lon_h)?)
}

fn parse_compact_dm(s: &str) -> Result<GeoCoordinate, ParseCoordinateError> {
    let no_spaces: String = s.split_whitespace().collect();
    let token: CompactToken = no_spaces.parse()?;
    Ok(token.to_coordinate()?)
}

fn parse_spaced_dms(s: &str) -> Result<GeoCoordinate, ParseCoordinateError> {
    let (caps_lat, caps_lon) = RE_SPACED_DMS_LAT
        .captures(s)
        .zip(RE_SPACED_DMS_LON.captures(s))
        .ok_or(ParseCoordinateError::Notation)?;

    let dms = |caps: &Captures<'_>| -> Result<f64, ParseCoordinateError> {
        let deg: f64 = caps["deg"].parse()?;
        let min: f64 = caps["min"].parse()?;
        let sec: f64 = caps["sec"].parse()?;
        Ok(dms_to_degrees(deg, min, sec)?)
    };

    let lat = dms(&caps_lat)?;
    let lon = dms(&caps_lon)?;
    let (lat_h, lon_h) = hemispheres(&caps_lat, &caps_lon, "h")?;
    Ok(GeoCoordinate::with_hemispheres(lat, lat_h, lon, lon_h)?)
}

fn parse_hemisphere_decimal(s: &str) -> Result<GeoCoordinate, ParseCoordinateError> {
    let (caps_lat, caps_lon) = RE_DECIMAL_LAT
        .captures(s)
        .zip(RE_DECIMAL_LON.captures(s))
        .ok_or(ParseCoordinateError::Notation)?;

    let lat: f64 = caps_lat["value"].parse()?;
    let lon: f64 = caps_lon["value"].parse()?;
    let (lat_h, lon_h) = hemispheres(&caps_lat, &caps_lon, "h")?;
    Ok(GeoCoordinate::with_hemispheres(lat, lat_h, lon, lon_h)?)
}

fn parse_bare_decimal(s: &str) -> Result<GeoCoordinate, ParseCoordinateError> {
    let caps = RE_BARE_DECIMAL
        .captures(s)
        .ok_or(ParseCoordinateError::Notation)?;

    let lat: f64 = caps["lat"].parse()?;
    let lon: f64 = caps["lon"].parse()?;
    Ok(GeoCoordinate::new(lat, lon)?)
}
