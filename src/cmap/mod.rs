//! Continuous 256-entry RGBA colormaps
//!
//! A [`Colormap`] is a lookup table: each row holds red, green, blue and
//! alpha in [0, 1]. Rendering backends index it by a continuous position in
//! [0, 1] (see [`Colormap::sample`]).

mod options;

pub use options::{
    AuxColor, DivCmapOptions, EndLightness, EndSaturation, MidMethod, MonoCmapOptions,
};

use crate::color::{Color, Hsl, Rgb};
use crate::error::{Error, Result, check_range};
use crate::interp::linspace;

/// Number of rows in every generated colormap
pub const COLORMAP_SIZE: usize = 256;

/// Red, green, blue, alpha; each in [0, 1]
pub type Rgba = [f64; 4];

/// 256 x 4 table of RGBA values
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    rows: Vec<Rgba>,
}

impl Colormap {
    pub fn rows(&self) -> &[Rgba] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a position in [0, 1]; out-of-range positions clamp to the ends
    pub fn sample(&self, position: f64) -> Rgba {
        let last = self.rows.len() - 1;
        let index = (position.clamp(0.0, 1.0) * self.rows.len() as f64) as usize;
        self.rows[index.min(last)]
    }

    /// `count` rows spread evenly over the table, ends included
    pub fn stops(&self, count: usize) -> Vec<Rgba> {
        let last = (self.rows.len() - 1) as f64;
        linspace(0.0, last, count)
            .into_iter()
            .map(|i| self.rows[i.round() as usize])
            .collect()
    }

    /// RGB of every row as `#rrggbb`, alpha dropped
    pub fn hex_codes(&self) -> Vec<String> {
        self.rows.iter().map(|row| rgba_to_color(row).hex()).collect()
    }
}

/// Nearest 8-bit color of a row, alpha dropped
pub fn rgba_to_color(row: &Rgba) -> Color {
    let channel = |v: f64| (v * 255.0).round_ties_even().clamp(0.0, 255.0) as u8;
    Color::from_rgb(Rgb::new(channel(row[0]), channel(row[1]), channel(row[2])))
}

/// `count` rows interpolating every channel independently from `start` to `end`
fn gradient(start: Rgba, end: Rgba, count: usize) -> Vec<Rgba> {
    let channels: Vec<Vec<f64>> = (0..4)
        .map(|c| linspace(start[c], end[c], count))
        .collect();
    (0..count)
        .map(|i| [channels[0][i], channels[1][i], channels[2][i], channels[3][i]])
        .collect()
}

fn with_alpha([r, g, b]: [f64; 3], alpha: f64) -> Rgba {
    [r, g, b, alpha]
}

/// Monochromatic colormap from the theme color to a resolved end color.
///
/// The end color keeps or replaces the theme's hue, saturation and
/// lightness as `options` say. Alpha runs from 1 to `end_alpha`. With
/// `invert`, the map runs from the end color back to the theme.
pub fn create_mono_cmap(theme: Color, options: &MonoCmapOptions) -> Result<Colormap> {
    let theme_hsl = theme.hsl();
    let aux_hsl: Option<Hsl> = match options.aux_color {
        AuxColor::Same => Some(theme_hsl),
        AuxColor::Hue(_) => None,
        AuxColor::Color(aux) => Some(aux.hsl()),
    };
    let aux = |parameter: &'static str| {
        aux_hsl.ok_or_else(|| Error::configuration(parameter, "'as aux' needs an aux color"))
    };

    let end_hue = match options.aux_color {
        AuxColor::Same => theme_hsl.hue,
        AuxColor::Hue(hue) => hue,
        AuxColor::Color(aux) => aux.hsl().hue,
    };

    let end_saturation = match options.end_saturation {
        EndSaturation::Same => theme_hsl.saturation,
        EndSaturation::Down => theme_hsl.saturation / 2.0,
        EndSaturation::Gray => 0.0,
        EndSaturation::AsAux => aux("end saturation")?.saturation,
        EndSaturation::Percent(p) => check_range("end saturation", p, 0.0, 100.0)?,
    };

    let end_lightness = match options.end_lightness {
        EndLightness::Same => theme_hsl.lightness,
        EndLightness::AsAux => aux("end lightness")?.lightness,
        EndLightness::Percent(p) => check_range("end lightness", p, 0.0, 100.0)?,
    };

    let end_alpha = check_range("end alpha", options.end_alpha, 0.0, 1.0)?;
    let end = Color::from_hsl(end_hue, end_saturation, end_lightness)?;
    log::debug!(
        "mono cmap: {} -> {} (H {} S {} L {}), alpha 1 -> {}",
        theme,
        end,
        end_hue,
        end_saturation,
        end_lightness,
        end_alpha
    );

    let mut start = with_alpha(theme.normalized(), 1.0);
    let mut finish = with_alpha(end.normalized(), end_alpha);
    if options.invert {
        std::mem::swap(&mut start, &mut finish);
    }

    Ok(Colormap {
        rows: gradient(start, finish, COLORMAP_SIZE),
    })
}

/// Diverging colormap from `end_1` through a center color to `end_2`.
///
/// The left part holds floor(`mid_pos` * 255) rows running from `end_1` to
/// the center; the right part holds the remaining rows running from the
/// center to `end_2`. Both ends are fully opaque.
pub fn create_div_cmap(end_1: Color, end_2: Color, options: &DivCmapOptions) -> Result<Colormap> {
    let mid_pos = check_range("mid position", options.mid_pos, 0.0, 1.0)?;
    let mut mid_alpha = check_range("mid alpha", options.mid_alpha, 0.0, 1.0)?;

    let rgb_1 = end_1.normalized();
    let rgb_2 = end_2.normalized();

    let (mid_1, mid_2) = match options.mid_method {
        MidMethod::White => ([1.0; 3], [1.0; 3]),
        MidMethod::Black => ([0.0; 3], [0.0; 3]),
        MidMethod::Alpha => {
            mid_alpha = 0.0;
            (rgb_1, rgb_2)
        }
    };

    let left_length = (mid_pos * 255.0).floor() as usize;
    let right_length = COLORMAP_SIZE - left_length;

    let mut rows = gradient(
        with_alpha(rgb_1, 1.0),
        with_alpha(mid_1, mid_alpha),
        left_length,
    );
    rows.extend(gradient(
        with_alpha(mid_2, mid_alpha),
        with_alpha(rgb_2, 1.0),
        right_length,
    ));

    Ok(Colormap { rows })
}
