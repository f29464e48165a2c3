//! HSV/HSL <-> RGB conversion math
//!
//! Hue is in degrees [0, 360); saturation, value and lightness are
//! percentages [0, 100]. Every rounding step rounds half to even.

use super::hex::{format_hex, parse_hex};
use super::{Hsl, Hsv, Rgb};
use crate::error::{Result, check_hue, check_range};

/// Convert HSV to a `#rrggbb` hex code
pub fn hsv_to_hex(hue: f64, saturation: f64, brightness: f64) -> Result<String> {
    hsv_to_rgb(hue, saturation, brightness).map(rgb_to_hex)
}

/// Convert HSV to 8-bit RGB
pub fn hsv_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Result<Rgb> {
    let hue = check_hue(hue)?;
    let s = check_range("saturation", saturation, 0.0, 100.0)? / 100.0;
    let v = check_range("brightness", brightness, 0.0, 100.0)? / 100.0;

    let chroma = v * s;
    Ok(chroma_to_rgb(hue, chroma, v - chroma))
}

/// Convert HSL to 8-bit RGB
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Result<Rgb> {
    let hue = check_hue(hue)?;
    let s = check_range("saturation", saturation, 0.0, 100.0)? / 100.0;
    let l = check_range("lightness", lightness, 0.0, 100.0)? / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    Ok(chroma_to_rgb(hue, chroma, l - chroma / 2.0))
}

/// Convert HSL to a `#rrggbb` hex code
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> Result<String> {
    hsl_to_rgb(hue, saturation, lightness).map(rgb_to_hex)
}

/// Format RGB as a lowercase `#rrggbb` hex code
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format_hex(rgb)
}

/// Parse a hex code into RGB
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    parse_hex(hex)
}

/// Parse a hex code into HSV (each component rounded to an integer)
pub fn hex_to_hsv(hex: &str) -> Result<Hsv> {
    parse_hex(hex).map(rgb_to_hsv)
}

/// Parse a hex code into HSL (each component rounded to an integer)
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    parse_hex(hex).map(rgb_to_hsl)
}

pub(crate) fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = rgb.normalized();
    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    let saturation = if c_max == 0.0 {
        0.0
    } else {
        delta / c_max * 100.0
    };

    Hsv {
        hue: round_hue(hue_of(r, g, b, c_max, delta)),
        saturation: saturation.round_ties_even(),
        value: (c_max * 100.0).round_ties_even(),
    }
}

pub(crate) fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.normalized();
    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    // Unrounded lightness feeds the saturation denominator
    let lightness = (c_max + c_min) * 100.0 / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else {
        delta * 100.0 / (1.0 - (2.0 * lightness / 100.0 - 1.0).abs())
    };

    Hsl {
        hue: round_hue(hue_of(r, g, b, c_max, delta)),
        saturation: saturation.round_ties_even(),
        lightness: lightness.round_ties_even(),
    }
}

/// Hue in degrees from normalized RGB, shared by HSV and HSL
fn hue_of(r: f64, g: f64, b: f64, c_max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        0.0
    } else if c_max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if c_max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    }
}

/// Round a hue to whole degrees, wrapping 360 back to 0
fn round_hue(hue: f64) -> f64 {
    let rounded = hue.round_ties_even();
    if rounded >= 360.0 { 0.0 } else { rounded }
}

/// Pick (R', G', B') by hue sextant and add the match value
fn chroma_to_rgb(hue: f64, chroma: f64, m: f64) -> Rgb {
    let x = chroma * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());

    let (r, g, b) = if hue < 60.0 {
        (chroma, x, 0.0)
    } else if hue < 120.0 {
        (x, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, x)
    } else if hue < 240.0 {
        (0.0, x, chroma)
    } else if hue < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    Rgb {
        red: to_channel(r + m),
        green: to_channel(g + m),
        blue: to_channel(b + m),
    }
}

fn to_channel(component: f64) -> u8 {
    (component * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}
