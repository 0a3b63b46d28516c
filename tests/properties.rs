use hazard_coords::{compact_token, parse_coordinates, to_compact_token, CompactToken};
use proptest::prelude::*;

const CENTI_SEC_IN_DEG: f64 = 360_000.0;
const ARC_SECOND: f64 = 1.0 / 3600.0;

/// `D°M'S.ss"H` with the precision of 1/100 of the arc second
fn dms(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value >= 0.0 { positive } else { negative };
    let total = (value.abs() * CENTI_SEC_IN_DEG).round() as u64;
    let (deg, rest) = (total / 360_000, total % 360_000);
    let (min, centi_sec) = (rest / 6_000, rest % 6_000);
    format!(
        "{deg}°{min}'{}.{:02}\"{hemisphere}",
        centi_sec / 100,
        centi_sec % 100
    )
}

proptest! {
    #[test]
    fn dms_round_trip(lat in -90.0..=90.0_f64, lon in -180.0..=180.0_f64) {
        let text = format!("{} {}", dms(lat, 'N', 'S'), dms(lon, 'E', 'W'));
        let (p_lat, p_lon) = parse_coordinates(&text).unwrap();
        prop_assert!((p_lat - lat).abs() < ARC_SECOND, "{} -> {}", text, p_lat);
        prop_assert!((p_lon - lon).abs() < ARC_SECOND, "{} -> {}", text, p_lon);
    }

    #[test]
    fn compact_is_idempotent(lat in -90.0..=90.0_f64, lon in -180.0..=180.0_f64) {
        let once = to_compact_token(&format!("{lat}, {lon}"));
        prop_assert_eq!(once.len(), 11);
        let twice = to_compact_token(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn compact_is_within_half_minute(lat in -90.0..=90.0_f64, lon in -180.0..=180.0_f64) {
        let token: CompactToken = compact_token(&format!("{lat} {lon}")).unwrap();
        let coord = token.to_coordinate().unwrap();
        let half_minute = 0.5 / 60.0 + 1e-6;
        prop_assert!((coord.latitude() - lat).abs() <= half_minute);
        prop_assert!((coord.longitude() - lon).abs() <= half_minute);
    }
}
