//! Fixed numbers of the notations and the data-entry form

pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
/// Leftover seconds starting from which the minute is rounded up
pub(crate) const HALF_MINUTE_SECONDS: f64 = 30.0;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '\'';

/// Shift of the local (Philippine Standard) time against UTC
pub const LOCAL_UTC_OFFSET_HOURS: i32 = 8;

/// How many dropzones the form has
pub const NUM_DROPZONES: usize = 4;
/// Vertices a single dropzone may define
pub const MAX_VERTICES: usize = 8;
/// Debris points a single dropzone may define
pub const MAX_DEBRIS: usize = 4;
/// The least number of valid vertices to draw a dropzone as a polygon
pub const MIN_POLYGON_VERTICES: usize = 3;
