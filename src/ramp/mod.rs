//! Discrete color ramps built by stepping lightness at fixed hue and saturation

use std::ops::Index;

use crate::color::Color;
use crate::error::{Result, check_range};
use crate::interp::linspace;

/// End lightness for ramps drawn on a white background
pub const DEFAULT_END_LIGHTNESS: f64 = 100.0;

/// Ordered list of colors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ramp {
    colors: Vec<Color>,
}

impl Ramp {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Colors as lowercase `#rrggbb` strings
    pub fn hex_codes(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.hex()).collect()
    }

    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl Index<usize> for Ramp {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Ramp {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Optional parameters of [`create_div_ramp`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivRampOptions {
    pub end_lightness_1: f64,
    pub end_lightness_2: f64,
    /// Color placed at the junction between the two halves
    pub insert: Option<Color>,
}

impl Default for DivRampOptions {
    fn default() -> Self {
        Self {
            end_lightness_1: DEFAULT_END_LIGHTNESS,
            end_lightness_2: DEFAULT_END_LIGHTNESS,
            insert: None,
        }
    }
}

/// Monochromatic ramp of `count` colors.
///
/// Lightness steps evenly from the theme's lightness to `end_lightness`
/// (both included) with hue and saturation held. The result runs from the
/// `end_lightness` extreme at index 0 to the theme color itself at the last
/// index.
pub fn create_mono_ramp(theme: Color, count: usize, end_lightness: f64) -> Result<Ramp> {
    let end_lightness = check_range("end lightness", end_lightness, 0.0, 100.0)?;
    let hsl = theme.hsl();

    let mut colors = linspace(hsl.lightness, end_lightness, count)
        .into_iter()
        .enumerate()
        .map(|(i, lightness)| {
            // First sample sits at the theme's own lightness
            if i == 0 {
                Ok(theme)
            } else {
                Color::from_hsl(hsl.hue, hsl.saturation, lightness)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    colors.reverse();

    Ok(Ramp { colors })
}

/// Diverging ramp: theme 1 out to its extreme, then theme 2's extreme in to theme 2.
///
/// When both halves end at the same extreme (both 100 or both 0) and neither
/// half is empty, the element at index `count_1` is dropped. With a
/// one-color half that element is a theme or extreme rather than a repeat;
/// the ramp still has `count_1 + count_2 - 1` colors. An `insert` color then goes in at index `count_1`.
/// A zero count yields an empty half.
pub fn create_div_ramp(
    theme_1: Color,
    theme_2: Color,
    count_1: usize,
    count_2: usize,
    options: &DivRampOptions,
) -> Result<Ramp> {
    let mut colors = create_mono_ramp(theme_1, count_1, options.end_lightness_1)?.into_colors();
    let second = create_mono_ramp(theme_2, count_2, options.end_lightness_2)?;
    colors.reverse();
    colors.extend(second.into_colors());

    let (e1, e2) = (options.end_lightness_1, options.end_lightness_2);
    let shared_extreme = (e1 == 100.0 && e2 == 100.0) || (e1 == 0.0 && e2 == 0.0);
    if shared_extreme && count_1 > 0 && count_2 > 0 {
        let dropped = colors.remove(count_1);
        log::debug!("div ramp: dropped duplicate junction color {}", dropped);
    }

    if let Some(insert) = options.insert {
        let index = count_1.min(colors.len());
        colors.insert(index, insert);
    }

    Ok(Ramp { colors })
}
