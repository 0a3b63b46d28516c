//! Writing a point back as text: the human-readable degrees and decimal minutes,
//! and the fixed-width compact token used for the interchange.

use std::fmt::Display;

use hazard_coords_types::{
    CompactToken, GeoCoordinate, LatHemisphere, LonHemisphere, OutOfRange, ParseCoordinateError,
};
use lazy_static::lazy_static;
use num_traits::ToPrimitive;
use regex::Regex;

use crate::{
    consts::{ARC_MINUTE_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE},
    parser::parse_coordinate,
    utils::{split_degrees, whole_degrees_minutes},
};

lazy_static! {
    /// The compact token somewhere in the text with spaces and signs removed
    static ref RE_COMPACT_INSIDE: Regex = Regex::new(r"[NS]\d{2}\d{2}[EW]\d{3}\d{2}")
        .expect("Compact token search regex is valid");
}

const MINUTES_FD: i32 = 3;

/// One part of the point as `D°M.mmm'H`
fn degrees_minutes<H: Display>(value: f64, hemisphere: H) -> String {
    let (mut deg, minutes) = split_degrees(value.abs());

    let scale = 10_f64.powi(MINUTES_FD);
    let mut minutes = (minutes * scale).round() / scale;
    // 59.9996' would otherwise be printed as 60.000'
    if minutes >= MINUTES_IN_DEGREE {
        minutes = 0.0;
        deg += 1.0;
    }

    format!(
        "{deg:.0}{DEGREE_SIGN}{minutes:.prec$}{ARC_MINUTE_SIGN}{hemisphere}",
        prec = MINUTES_FD as usize
    )
}

/// The human-readable `D°M.mmm'H, D°M.mmm'H` form of the signed decimal degrees.
///
/// ```
/// # use hazard_coords::to_degrees_minutes;
/// assert_eq!(to_degrees_minutes(13.5, -121.2), "13°30.000'N, 121°12.000'W");
/// ```
pub fn to_degrees_minutes(lat: f64, lon: f64) -> String {
    format!(
        "{}, {}",
        degrees_minutes(lat, LatHemisphere::of(lat)),
        degrees_minutes(lon, LonHemisphere::of(lon))
    )
}

/// Round the point to the whole minutes (half a minute rounds up)
/// and put it into the compact token.
///
/// # Errors
/// Practically impossible for a valid point: the rounded value can only
/// reach the boundary of the range, never exceed it.
pub fn compact_from_coordinate(coord: GeoCoordinate) -> Result<CompactToken, OutOfRange> {
    let (lat_deg, lat_min) = whole_degrees_minutes(coord.latitude().abs());
    let (lon_deg, lon_min) = whole_degrees_minutes(coord.longitude().abs());

    let lat_deg = lat_deg.to_u8().ok_or(OutOfRange::Latitude)?;
    let lat_min = lat_min.to_u8().ok_or(OutOfRange::ArcMinutes)?;
    let lon_deg = lon_deg.to_u16().ok_or(OutOfRange::Longitude)?;
    let lon_min = lon_min.to_u8().ok_or(OutOfRange::ArcMinutes)?;

    CompactToken::new(
        (coord.lat_hemisphere(), lat_deg, lat_min),
        (coord.lon_hemisphere(), lon_deg, lon_min),
    )
}

/// Find the compact token written with optional spaces or signs between its groups
fn find_compact(raw: &str) -> Option<CompactToken> {
    let stripped: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !"°'′’\"″”,".contains(*c))
        .collect();

    RE_COMPACT_INSIDE
        .find(&stripped)
        .and_then(|m| m.as_str().parse().ok())
}

/// Produce the compact token from the free text.
///
/// The text already holding a compact token (even with extra spaces like `N 1345 E 12107`)
/// is kept as is, any other notation is parsed and rounded to the whole minutes.
///
/// # Errors
/// When the text is blank or cannot be parsed as a point.
pub fn compact_token(raw: &str) -> Result<CompactToken, ParseCoordinateError> {
    if raw.trim().is_empty() {
        return Err(ParseCoordinateError::EmptyString);
    }

    if let Some(token) = find_compact(raw) {
        return Ok(token);
    }

    let coord = parse_coordinate(raw)?;
    Ok(compact_from_coordinate(coord)?)
}
