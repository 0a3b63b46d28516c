use hazard_coords::{
    format_window, is_valid_window_token, parse_coordinates, to_compact_token,
    to_degrees_minutes, utc_window_to_local,
};

#[test]
fn parse_all_notations() {
    assert_eq!(
        parse_coordinates("134523N 1210715E"),
        Some((13.756_389, 121.120_833))
    );
    assert_eq!(parse_coordinates("N1345E12107"), Some((13.75, 121.116_667)));
    assert_eq!(
        parse_coordinates("13°45'23\"S 121°07'15\"W"),
        Some((-13.756_389, -121.120_833))
    );
    assert_eq!(parse_coordinates("13.5 N, 121.2 E"), Some((13.5, 121.2)));
    assert_eq!(parse_coordinates("-13.5, 121.2"), Some((-13.5, 121.2)));
}

#[test]
fn parse_sentinel() {
    assert_eq!(parse_coordinates("garbage"), None);
    assert_eq!(parse_coordinates(""), None);
    assert_eq!(parse_coordinates("13.5 N"), None);
    assert_eq!(parse_coordinates("181 0"), None);
}

#[test]
fn degrees_minutes() {
    assert_eq!(
        to_degrees_minutes(-13.75, 121.116_667),
        "13°45.000'S, 121°7.000'E"
    );
}

#[test]
fn compact() {
    assert_eq!(to_compact_token("13.5 N, 121.2 E"), "N1330E12112");
    assert_eq!(to_compact_token("134523N 1210715E"), "N1345E12107");
    assert_eq!(to_compact_token("N1345E12107"), "N1345E12107");
    assert_eq!(to_compact_token("garbage"), "");
    assert_eq!(to_compact_token(" \t"), "");
}

#[test]
fn window_tokens() {
    assert!(is_valid_window_token("745"));
    assert!(is_valid_window_token("0000"));
    assert!(!is_valid_window_token("2400"));
    assert!(!is_valid_window_token("7a5"));
}

#[test]
fn window_format() {
    assert_eq!(format_window("745", "810").as_deref(), Some("0745-0810 UTC"));
    assert_eq!(format_window("045", "2359").as_deref(), Some("0045-2359 UTC"));
    assert_eq!(format_window("745", ""), None);
}

#[test]
fn window_to_local() {
    assert_eq!(utc_window_to_local("0745-0810 UTC"), "3:45 PM - 4:10 PM");
    assert_eq!(utc_window_to_local("2330-0030 UTC"), "7:30 AM - 8:30 AM");
    assert_eq!(utc_window_to_local("0745 to 0810"), "0745 to 0810");
}

#[test]
fn format_then_localize() {
    let window = format_window("1600", "1615").unwrap();
    assert_eq!(utc_window_to_local(&window), "12:00 AM - 12:15 AM");
}
