//! Hex color parsing and formatting

use super::Rgb;
use crate::error::{Error, Result};

/// Parse `rrggbb`, optionally behind one marker character such as `#`.
/// Case-insensitive.
pub(super) fn parse_hex(input: &str) -> Result<Rgb> {
    let mut chars = input.chars();
    if input.chars().count() == 7 {
        chars.next();
    }
    let digits = chars.as_str();

    if digits.len() != 6 {
        return Err(Error::invalid_format(input, "expected 6 hex digits"));
    }
    // from_str_radix alone would accept a leading '+'
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::invalid_format(input, "non-hex digit"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| Error::invalid_format(input, "non-hex digit"))
    };

    Ok(Rgb {
        red: channel(0..2)?,
        green: channel(2..4)?,
        blue: channel(4..6)?,
    })
}

/// Format as lowercase `#rrggbb`
pub(super) fn format_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}
