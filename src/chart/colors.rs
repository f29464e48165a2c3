//! Color definitions for charts

use hueramp::cmap::Rgba;

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White

/// Label colors on top of swatches
const LABEL_ON_LIGHT: &str = "#0A0A0C";
const LABEL_ON_DARK: &str = "#FFFFFF";

/// CSS `rgba()` string for a colormap row
pub(super) fn rgba_css(row: &Rgba) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        (row[0] * 255.0).round() as u8,
        (row[1] * 255.0).round() as u8,
        (row[2] * 255.0).round() as u8,
        row[3]
    )
}

/// Readable label color for text drawn over `hex`
pub(super) fn label_color_for(hex: &str) -> &'static str {
    match hueramp::Color::from_hex(hex) {
        Ok(color) if color.hsl().lightness >= 60.0 => LABEL_ON_LIGHT,
        _ => LABEL_ON_DARK,
    }
}
