// End-to-end extraction scenarios over raw OCR text
use coordex::{extract_coordinates, normalize, CoordexError, CoordinatePair};
use rstest::rstest;

#[test]
fn test_dash_repair_is_global_and_naive() {
    // The dash inside the latitude becomes a second decimal point.
    assert_eq!(normalize("S1-23.45 some text E45.67"), "S1.23.45 some text E45.67");

    let result = extract_coordinates("S1-23.45 some text E45.67").unwrap();
    assert_eq!(result.original, CoordinatePair::new("1.23", "45.67"));
    assert_eq!(result.adjusted, CoordinatePair::new("-1.23", "45.67"));
}

#[test]
fn test_northern_reading_is_untouched() {
    let result = extract_coordinates("23.456 E 78.901").unwrap();
    assert_eq!(result.original, CoordinatePair::new("23.456", "78.901"));
    assert_eq!(result.adjusted, result.original);
    assert!(!result.hemisphere_corrected());
}

#[test]
fn test_dollar_marker_flips_latitude() {
    let result = extract_coordinates("$23.456 garbage E78.901").unwrap();
    assert_eq!(result.original, CoordinatePair::new("23.456", "78.901"));
    assert_eq!(result.adjusted, CoordinatePair::new("-23.456", "78.901"));
}

#[test]
fn test_no_coordinates() {
    assert!(matches!(
        extract_coordinates("no coordinates here"),
        Err(CoordexError::NotFound)
    ));
    assert!(matches!(extract_coordinates(""), Err(CoordexError::NotFound)));
}

#[test]
fn test_existing_minus_is_not_doubled() {
    let result = extract_coordinates("-12.3 text S text E 45.6").unwrap();
    assert_eq!(result.original, CoordinatePair::new("-12.3", "45.6"));
    assert_eq!(result.adjusted, CoordinatePair::new("-12.3", "45.6"));
}

#[test]
fn test_multiline_ocr_noise() {
    let raw = "GPS\n\n  S 33-8688   \t\n rest of line\nE  151.   2093\n";
    assert_eq!(normalize(raw), "GPS S 33.8688 rest of line E 151.2093");

    let result = extract_coordinates(raw).unwrap();
    assert_eq!(result.original, CoordinatePair::new("33.8688", "151.2093"));
    assert_eq!(result.adjusted.latitude, "-33.8688");
}

#[test]
fn test_south_marker_anywhere_in_text() {
    // The S in "Site" sits after the match but still counts.
    let result = extract_coordinates("12.5 E 45.5 Site B").unwrap();
    assert_eq!(result.original.latitude, "12.5");
    assert_eq!(result.adjusted.latitude, "-12.5");
}

#[rstest]
#[case("12.5", "45.25", " ")]
#[case("-12.5", "45.25", " noise, more noise ")]
#[case("0.0", "0.0", "")]
#[case("89.999999", "179.5", " lat/lon: ")]
fn test_south_prefixed_pairs(#[case] lat: &str, #[case] lon: &str, #[case] filler: &str) {
    let raw = format!("S{lat}{filler}E {lon}");
    let result = extract_coordinates(&raw).unwrap();

    assert_eq!(result.original, CoordinatePair::new(lat, lon));
    assert!(result.adjusted.latitude.starts_with('-'));
    assert!(!result.adjusted.latitude.starts_with("--"));
    assert_eq!(result.adjusted.latitude.trim_start_matches('-'), lat.trim_start_matches('-'));
    assert_eq!(result.adjusted.longitude, lon);
}

#[rstest]
#[case("12 E 34")]
#[case("12.5 and nothing else")]
#[case("E 45.6 comes first then 12.3")]
#[case("12.5 East 45.6")]
#[case("S 12.5 E -45.6")]
fn test_no_pattern_means_not_found(#[case] raw: &str) {
    assert!(matches!(extract_coordinates(raw), Err(CoordexError::NotFound)));
}
