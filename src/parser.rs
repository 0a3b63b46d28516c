//! Reading a point from the free text typed by an operator.
//!
//! Several [notations](enum.Notation.html) are supported and tried one by one
//! in their precedence order. The first one that matches the text decides the result.

use hazard_coords_types::{GeoCoordinate, ParseCoordinateError};
use log::trace;

pub use self::notation::Notation;

mod notation;

/// Trim, convert to the upper case and treat commas as spaces
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_uppercase().replace(',', " ")
}

/// Parse the point written in any of the supported notations,
/// also reporting which notation was recognized.
///
/// # Errors
/// - [`ParseCoordinateError::EmptyString`] for the blank text;
/// - [`ParseCoordinateError::Notation`] when no notation matches;
/// - the numeric error (e.g. latitude out of range) when the first
///   matching notation could not produce a valid point: the later
///   notations are not tried, since they would read only a fragment of the text.
pub fn parse_with_notation(
    text: &str,
) -> Result<(GeoCoordinate, Notation), ParseCoordinateError> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(ParseCoordinateError::EmptyString);
    }

    for notation in Notation::ALL {
        match notation.parse(&normalized) {
            Ok(coord) => {
                trace!("{text:?} parsed as {notation}: {coord}");
                return Ok((coord, notation));
            }
            Err(ParseCoordinateError::Notation) => {}
            Err(err) => {
                trace!("{text:?} looks like {notation}, but {err}");
                return Err(err);
            }
        }
    }

    Err(ParseCoordinateError::Notation)
}

/// Parse the point written in any of the supported notations.
///
/// # Errors
/// See [`parse_with_notation`](fn.parse_with_notation.html).
pub fn parse_coordinate(text: &str) -> Result<GeoCoordinate, ParseCoordinateError> {
    parse_with_notation(text).map(|(coord, _)| coord)
}
