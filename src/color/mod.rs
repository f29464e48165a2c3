//! Color representations and conversions between them

mod convert;
mod hex;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use convert::{
    hex_to_hsl, hex_to_hsv, hex_to_rgb, hsl_to_hex, hsl_to_rgb, hsv_to_hex, hsv_to_rgb,
    rgb_to_hex,
};

use crate::error::{Error, Result};

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Channels scaled to [0, 1]
    pub fn normalized(self) -> [f64; 3] {
        [
            self.red as f64 / 255.0,
            self.green as f64 / 255.0,
            self.blue as f64 / 255.0,
        ]
    }
}

/// Hue (degrees), saturation and value/brightness (percent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// Hue (degrees), saturation and lightness (percent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// An opaque color, stored as 8-bit RGB.
///
/// Parses from and displays as `#rrggbb`; serializes as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Rgb);

impl Color {
    pub const WHITE: Color = Color(Rgb::new(255, 255, 255));
    pub const BLACK: Color = Color(Rgb::new(0, 0, 0));

    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_to_rgb(hex).map(Self)
    }

    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        hsl_to_rgb(hue, saturation, lightness).map(Self)
    }

    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Result<Self> {
        hsv_to_rgb(hue, saturation, value).map(Self)
    }

    pub fn rgb(self) -> Rgb {
        self.0
    }

    pub fn hex(self) -> String {
        rgb_to_hex(self.0)
    }

    pub fn hsv(self) -> Hsv {
        convert::rgb_to_hsv(self.0)
    }

    pub fn hsl(self) -> Hsl {
        convert::rgb_to_hsl(self.0)
    }

    /// RGB scaled to [0, 1]
    pub fn normalized(self) -> [f64; 3] {
        self.0.normalized()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[cfg(test)]
mod tests;
