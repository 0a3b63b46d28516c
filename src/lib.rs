//! Coordinate and launch-window normalization for rocket-launch hazard areas.
//!
//! The operators type the dropzone points and the launch window by hand,
//! so the input comes in a variety of notations and is often incomplete.
//! The functions at the top level of the crate never fail: the text
//! that is not (yet) valid produces an empty result
//! (`None`, an empty string, `false` or the input itself).
//! The modules provide the same operations with the detailed errors.
//!
//! ```
//! use hazard_coords::{parse_coordinates, to_compact_token, utc_window_to_local};
//!
//! assert_eq!(parse_coordinates("134523N 1210715E"), Some((13.756389, 121.120833)));
//! assert_eq!(to_compact_token("13.5 N, 121.2 E"), "N1330E12112");
//! assert_eq!(utc_window_to_local("0745-0810 UTC"), "3:45 PM - 4:10 PM");
//! ```

// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// #![warn(unreachable_pub)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use hazard_coords_types::{
    CompactToken, GeoCoordinate, LatHemisphere, LonHemisphere, OutOfRange, ParseCoordinateError,
    ParseHemisphereError, ParseWindowError, TimeWindow, WindowToken,
};

pub use dropzone::{map_center, Dropzone, Polygon};
pub use format::{compact_from_coordinate, compact_token, to_degrees_minutes};
pub use parser::{parse_coordinate, parse_with_notation, Notation};
pub use window::{is_valid_window_token, time_window, LocalWindow, WindowTimeConverter};

pub mod consts;
mod dropzone;
mod format;
mod parser;
mod utils;
mod window;

/// The signed decimal `(latitude, longitude)` of the point written in any
/// of the supported [notations](enum.Notation.html), or `None`.
///
/// ```
/// # use hazard_coords::parse_coordinates;
/// assert_eq!(parse_coordinates("N1345E12107"), Some((13.75, 121.116667)));
/// assert_eq!(parse_coordinates("garbage"), None);
/// ```
pub fn parse_coordinates(text: &str) -> Option<(f64, f64)> {
    parse_coordinate(text).ok().map(Into::into)
}

/// The compact `NDDMMEDDDMM` token of the point written in any notation,
/// or an empty string.
///
/// ```
/// # use hazard_coords::to_compact_token;
/// assert_eq!(to_compact_token("N 1330 E 12112"), "N1330E12112");
/// assert_eq!(to_compact_token(""), "");
/// ```
pub fn to_compact_token(raw: &str) -> String {
    compact_token(raw)
        .map(|token| token.to_string())
        .unwrap_or_default()
}

/// The `HHMM-HHMM UTC` window, or `None` if any end is not a valid `HHMM`.
///
/// ```
/// # use hazard_coords::format_window;
/// assert_eq!(format_window("745", "810").as_deref(), Some("0745-0810 UTC"));
/// assert_eq!(format_window("745", "2400"), None);
/// ```
pub fn format_window(start: &str, end: &str) -> Option<String> {
    time_window(start, end).ok().map(|window| window.to_string())
}

/// The local (UTC+8) 12-hour label of the `HHMM-HHMM UTC` window.
/// The text that is not a valid window is returned unchanged.
///
/// ```
/// # use hazard_coords::utc_window_to_local;
/// assert_eq!(utc_window_to_local("2330-0030 UTC"), "7:30 AM - 8:30 AM");
/// assert_eq!(utc_window_to_local("tbd"), "tbd");
/// ```
pub fn utc_window_to_local(window_text: &str) -> String {
    WindowTimeConverter::default().utc_window_to_local(window_text)
}
