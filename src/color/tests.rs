//! Unit tests for color conversions

use super::*;
use crate::error::Error;

/// Angular distance between two hues in degrees
fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

#[test]
fn test_hsv_to_hex_black_and_white() {
    assert_eq!(hsv_to_hex(0.0, 0.0, 0.0).unwrap(), "#000000");
    assert_eq!(hsv_to_hex(0.0, 0.0, 100.0).unwrap(), "#ffffff");
}

#[test]
fn test_hsv_to_hex_primaries() {
    assert_eq!(hsv_to_hex(0.0, 100.0, 100.0).unwrap(), "#ff0000");
    assert_eq!(hsv_to_hex(120.0, 100.0, 100.0).unwrap(), "#00ff00");
    assert_eq!(hsv_to_hex(240.0, 100.0, 100.0).unwrap(), "#0000ff");
    assert_eq!(hsv_to_hex(210.0, 50.0, 80.0).unwrap(), "#6699cc");
}

#[test]
fn test_hex_to_rgb_known_value() {
    assert_eq!(hex_to_rgb("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    assert_eq!(hex_to_rgb("FF8000").unwrap(), Rgb::new(255, 128, 0));
}

#[test]
fn test_rgb_to_hex_zero_padding() {
    assert_eq!(rgb_to_hex(Rgb::new(0, 5, 15)), "#00050f");
    assert_eq!(rgb_to_hex(Rgb::new(16, 255, 171)), "#10ffab");
}

#[test]
fn test_hex_round_trip_normalizes_case() {
    for hex in ["#353795", "#EF8872", "#FdD310", "#000000", "#ffffff"] {
        let back = rgb_to_hex(hex_to_rgb(hex).unwrap());
        assert_eq!(back, hex.to_lowercase());
    }
}

#[test]
fn test_rgb_hex_round_trip_grid() {
    for r in (0..=255u8).step_by(17) {
        for g in (0..=255u8).step_by(51) {
            for b in [0u8, 1, 15, 16, 128, 254, 255] {
                let rgb = Rgb::new(r, g, b);
                assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
            }
        }
    }
}

#[test]
fn test_hsl_to_rgb_known_values() {
    assert_eq!(hsl_to_rgb(239.0, 48.0, 40.0).unwrap(), Rgb::new(53, 55, 151));
    assert_eq!(hsl_to_rgb(239.0, 24.0, 100.0).unwrap(), Rgb::new(255, 255, 255));
    assert_eq!(hsl_to_rgb(0.0, 0.0, 50.0).unwrap(), Rgb::new(128, 128, 128));
    assert_eq!(hsl_to_hex(239.0, 48.0, 40.0).unwrap(), "#353797");
}

#[test]
fn test_hex_to_hsv_known_values() {
    let hsv = hex_to_hsv("#ff8000").unwrap();
    assert_eq!((hsv.hue, hsv.saturation, hsv.value), (30.0, 100.0, 100.0));

    let hsv = hex_to_hsv("#353795").unwrap();
    assert_eq!((hsv.hue, hsv.saturation, hsv.value), (239.0, 64.0, 58.0));
}

#[test]
fn test_hex_to_hsl_known_values() {
    let hsl = hex_to_hsl("#ff8000").unwrap();
    assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (30.0, 100.0, 50.0));

    let hsl = hex_to_hsl("#353795").unwrap();
    assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (239.0, 48.0, 40.0));

    let hsl = hex_to_hsl("#7cbfa4").unwrap();
    assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (156.0, 34.0, 62.0));
}

#[test]
fn test_gray_has_zero_hue_and_saturation() {
    let hsl = hex_to_hsl("#808080").unwrap();
    assert_eq!(hsl.hue, 0.0);
    assert_eq!(hsl.saturation, 0.0);
    assert_eq!(hsl.lightness, 50.0);

    let hsv = hex_to_hsv("#000000").unwrap();
    assert_eq!((hsv.hue, hsv.saturation, hsv.value), (0.0, 0.0, 0.0));
}

#[test]
fn test_hue_rounding_up_to_360_wraps() {
    // Raw hue is ~359.76 degrees
    assert_eq!(hex_to_hsl("#ff0001").unwrap().hue, 0.0);
    assert_eq!(hex_to_hsv("#ff0001").unwrap().hue, 0.0);
}

#[test]
fn test_hsv_round_trip_within_one() {
    for h in (0..360).step_by(3) {
        for s in (40..=100).step_by(10) {
            for v in (40..=100).step_by(10) {
                let (h, s, v) = (h as f64, s as f64, v as f64);
                let back = hex_to_hsv(&hsv_to_hex(h, s, v).unwrap()).unwrap();
                assert!(
                    hue_distance(back.hue, h) <= 1.0
                        && (back.saturation - s).abs() <= 1.0
                        && (back.value - v).abs() <= 1.0,
                    "HSV({}, {}, {}) came back as {:?}",
                    h,
                    s,
                    v,
                    back
                );
            }
        }
    }
}

#[test]
fn test_hsl_round_trip_within_one() {
    for h in (0..360).step_by(3) {
        for s in (40..=100).step_by(10) {
            for l in (30..=70).step_by(10) {
                let (h, s, l) = (h as f64, s as f64, l as f64);
                let back = hex_to_hsl(&hsl_to_hex(h, s, l).unwrap()).unwrap();
                assert!(
                    hue_distance(back.hue, h) <= 1.0
                        && (back.saturation - s).abs() <= 1.0
                        && (back.lightness - l).abs() <= 1.0,
                    "HSL({}, {}, {}) came back as {:?}",
                    h,
                    s,
                    l,
                    back
                );
            }
        }
    }
}

#[test]
fn test_malformed_hex_is_invalid_format() {
    for bad in ["#12", "#gggggg", "", "#", "#1234567", "12345", "#12 456", "##123456"] {
        assert!(
            matches!(hex_to_rgb(bad), Err(Error::InvalidFormat { .. })),
            "hex_to_rgb({:?}) should fail",
            bad
        );
        assert!(matches!(hex_to_hsv(bad), Err(Error::InvalidFormat { .. })));
        assert!(matches!(hex_to_hsl(bad), Err(Error::InvalidFormat { .. })));
        assert!(matches!(Color::from_hex(bad), Err(Error::InvalidFormat { .. })));
    }
}

#[test]
fn test_any_single_marker_is_stripped() {
    for marked in ["#353795", "x353795", "$353795", "§353795", "353795"] {
        assert_eq!(hex_to_rgb(marked).unwrap(), Rgb::new(0x35, 0x37, 0x95), "{:?}", marked);
    }
    // Only one marker, and only in front of exactly six digits
    for bad in ["##35379", "#+35379", "xx353795", "#3537950"] {
        assert!(
            matches!(hex_to_rgb(bad), Err(Error::InvalidFormat { .. })),
            "{:?} should fail",
            bad
        );
    }
}

#[test]
fn test_out_of_range_components() {
    assert!(matches!(
        hsv_to_hex(360.0, 50.0, 50.0),
        Err(Error::OutOfRange { component: "hue", .. })
    ));
    assert!(matches!(
        hsv_to_hex(-1.0, 50.0, 50.0),
        Err(Error::OutOfRange { component: "hue", .. })
    ));
    assert!(matches!(
        hsv_to_hex(10.0, 100.5, 50.0),
        Err(Error::OutOfRange { component: "saturation", .. })
    ));
    assert!(matches!(
        hsl_to_rgb(10.0, 50.0, 101.0),
        Err(Error::OutOfRange { component: "lightness", .. })
    ));
    assert!(matches!(
        hsl_to_hex(f64::NAN, 50.0, 50.0),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn test_color_parse_display_and_serde() {
    let color: Color = "#EF8872".parse().unwrap();
    assert_eq!(color.to_string(), "#ef8872");
    assert_eq!(color.rgb(), Rgb::new(239, 136, 114));

    let json = serde_json::to_string(&color).unwrap();
    assert_eq!(json, "\"#ef8872\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, color);

    assert!(serde_json::from_str::<Color>("\"#xyzxyz\"").is_err());
}

#[test]
fn test_color_from_hsl_matches_free_function() {
    let color = Color::from_hsl(11.0, 80.0, 69.0).unwrap();
    assert_eq!(color.hex(), hsl_to_hex(11.0, 80.0, 69.0).unwrap());
    assert_eq!(Color::from_hsv(0.0, 0.0, 100.0).unwrap(), Color::WHITE);
}
