//! Sexagesimal arithmetic shared by the parser and the formatter

use hazard_coords_types::OutOfRange;

use crate::consts::{HALF_MINUTE_SECONDS, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE};

/// Combine degrees, minutes and seconds into decimal degrees
pub(crate) fn dms_to_degrees(deg: f64, min: f64, sec: f64) -> Result<f64, OutOfRange> {
    if !(0.0..MINUTES_IN_DEGREE).contains(&min) {
        return Err(OutOfRange::ArcMinutes);
    }

    if !(0.0..SECONDS_IN_MINUTE).contains(&sec) {
        return Err(OutOfRange::ArcSeconds);
    }

    Ok(deg + min / MINUTES_IN_DEGREE + sec / (MINUTES_IN_DEGREE * SECONDS_IN_MINUTE))
}

/// Split an absolute value of an angle into the whole degrees and the decimal minutes
pub(crate) fn split_degrees(abs_value: f64) -> (f64, f64) {
    let deg = abs_value.trunc();
    let minutes = (abs_value - deg) * MINUTES_IN_DEGREE;
    (deg, minutes)
}

/// Whole degrees and whole minutes of an absolute value of an angle.
///
/// The minute is rounded up when the leftover is at least half a minute,
/// and the overflow of minutes goes to the degrees.
pub(crate) fn whole_degrees_minutes(abs_value: f64) -> (f64, f64) {
    let (mut deg, minutes_full) = split_degrees(abs_value);
    let mut minute = minutes_full.trunc();
    let leftover_sec = (minutes_full - minute) * SECONDS_IN_MINUTE;

    if leftover_sec >= HALF_MINUTE_SECONDS {
        minute += 1.0;
        if minute >= MINUTES_IN_DEGREE {
            minute = 0.0;
            deg += 1.0;
        }
    }

    (deg, minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dms() {
        let value = dms_to_degrees(13.0, 45.0, 23.0).unwrap();
        assert!((value - 13.756_388_9).abs() < 1e-7);
    }

    #[test]
    fn dms_minutes_overflow() {
        assert_eq!(dms_to_degrees(13.0, 60.0, 0.0), Err(OutOfRange::ArcMinutes));
        assert_eq!(dms_to_degrees(13.0, 0.0, 60.0), Err(OutOfRange::ArcSeconds));
    }

    #[test]
    fn split() {
        let (deg, min) = split_degrees(13.5);
        assert_eq!(deg, 13.0);
        assert_eq!(min, 30.0);
    }

    #[test]
    fn round_half_minute_up() {
        // 10 deg 20 min 30 sec
        assert_eq!(whole_degrees_minutes(10.341_667), (10.0, 21.0));
        // 10 deg 20 min 29 sec
        assert_eq!(whole_degrees_minutes(10.341_389), (10.0, 20.0));
    }

    #[test]
    fn minutes_carry_into_degrees() {
        // 13 deg 59 min 45 sec
        assert_eq!(whole_degrees_minutes(13.995_833), (14.0, 0.0));
        assert_eq!(whole_degrees_minutes(89.999_9), (90.0, 0.0));
    }
}
