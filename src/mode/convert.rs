//! Single color conversion modes

use hueramp::Color;

use super::parse_color;
use crate::output::print_conversions;

/// Show a hex color as RGB, HSV and HSL
pub fn run_convert(color: &str) -> Result<(), String> {
    let color = parse_color(color)?;
    print_conversions(color);
    Ok(())
}

/// Convert HSV input and show every representation
pub fn run_hsv(hue: f64, saturation: f64, value: f64) -> Result<(), String> {
    let color = Color::from_hsv(hue, saturation, value).map_err(|e| e.to_string())?;
    print_conversions(color);
    Ok(())
}

/// Convert HSL input and show every representation
pub fn run_hsl(hue: f64, saturation: f64, lightness: f64) -> Result<(), String> {
    let color = Color::from_hsl(hue, saturation, lightness).map_err(|e| e.to_string())?;
    print_conversions(color);
    Ok(())
}
