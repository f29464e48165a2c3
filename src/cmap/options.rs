//! Option types for colormap generation and their string forms

use std::str::FromStr;

use crate::color::Color;
use crate::error::{Error, Result};

/// Hue source for the far end of a monochromatic colormap
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AuxColor {
    /// Keep the theme hue
    #[default]
    Same,
    /// A bare hue in degrees
    Hue(f64),
    /// Take the hue (and, on request, saturation/lightness) of another color
    Color(Color),
}

/// Saturation at the far end of a monochromatic colormap
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EndSaturation {
    #[default]
    Same,
    /// Half the theme saturation
    Down,
    Gray,
    /// Saturation of the aux color
    AsAux,
    Percent(f64),
}

/// Lightness at the far end of a monochromatic colormap
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndLightness {
    Same,
    AsAux,
    Percent(f64),
}

impl Default for EndLightness {
    fn default() -> Self {
        EndLightness::Percent(100.0)
    }
}

/// Color at the center of a diverging colormap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MidMethod {
    #[default]
    White,
    Black,
    /// Each side fades to its own end color at zero alpha
    Alpha,
}

fn is_as_aux(s: &str) -> bool {
    matches!(s, "as aux" | "as-aux" | "as_aux" | "asaux")
}

impl FromStr for AuxColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("same") {
            return Ok(AuxColor::Same);
        }
        // All-digit strings like "120000" are hues unless marked with '#'
        if !s.starts_with('#')
            && let Ok(hue) = s.parse::<f64>()
        {
            return Ok(AuxColor::Hue(hue));
        }
        Color::from_hex(s)
            .map(AuxColor::Color)
            .map_err(|_| Error::configuration("aux color", s))
    }
}

impl FromStr for EndSaturation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "same" => Ok(EndSaturation::Same),
            "down" => Ok(EndSaturation::Down),
            "gray" | "grey" => Ok(EndSaturation::Gray),
            other if is_as_aux(other) => Ok(EndSaturation::AsAux),
            other => other
                .parse::<f64>()
                .map(EndSaturation::Percent)
                .map_err(|_| Error::configuration("end saturation", s)),
        }
    }
}

impl FromStr for EndLightness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "same" => Ok(EndLightness::Same),
            other if is_as_aux(other) => Ok(EndLightness::AsAux),
            other => other
                .parse::<f64>()
                .map(EndLightness::Percent)
                .map_err(|_| Error::configuration("end lightness", s)),
        }
    }
}

impl FromStr for MidMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(MidMethod::White),
            "black" => Ok(MidMethod::Black),
            "alpha" => Ok(MidMethod::Alpha),
            _ => Err(Error::configuration("mid method", s)),
        }
    }
}

/// Optional parameters of [`create_mono_cmap`](super::create_mono_cmap)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonoCmapOptions {
    pub aux_color: AuxColor,
    pub end_saturation: EndSaturation,
    pub end_lightness: EndLightness,
    /// Alpha at the far end, 0 to 1
    pub end_alpha: f64,
    /// Swap start and end
    pub invert: bool,
}

impl Default for MonoCmapOptions {
    fn default() -> Self {
        Self {
            aux_color: AuxColor::Same,
            end_saturation: EndSaturation::Same,
            end_lightness: EndLightness::default(),
            end_alpha: 1.0,
            invert: false,
        }
    }
}

/// Optional parameters of [`create_div_cmap`](super::create_div_cmap)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivCmapOptions {
    /// Position of the center, 0 to 1
    pub mid_pos: f64,
    pub mid_method: MidMethod,
    /// Alpha at the center, 0 to 1; ignored by [`MidMethod::Alpha`]
    pub mid_alpha: f64,
}

impl Default for DivCmapOptions {
    fn default() -> Self {
        Self {
            mid_pos: 0.5,
            mid_method: MidMethod::White,
            mid_alpha: 1.0,
        }
    }
}
