//! Named palettes with derived faded and dimmed variants

mod config;

pub use config::{EntryConfig, OverrideConfig, PaletteConfig};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};

/// Which of the three colors of a swatch to address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Regular,
    Faded,
    Dimmed,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Regular, Variant::Faded, Variant::Dimmed];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Regular => "regular",
            Variant::Faded => "faded",
            Variant::Dimmed => "dimmed",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "regular" => Ok(Variant::Regular),
            "faded" => Ok(Variant::Faded),
            "dimmed" => Ok(Variant::Dimmed),
            other => Err(Error::configuration("variant", other)),
        }
    }
}

/// Saturation/lightness multipliers for one palette entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub saturation_fade: f64,
    pub lightness_fade: f64,
    pub saturation_dim: f64,
    pub lightness_dim: f64,
}

impl Default for Ratios {
    fn default() -> Self {
        Self {
            saturation_fade: 1.0,
            lightness_fade: 1.0,
            saturation_dim: 1.0,
            lightness_dim: 1.0,
        }
    }
}

/// One row of the palette table, before derivation
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub category: String,
    pub role: String,
    pub regular: Color,
    pub ratios: Ratios,
}

/// Regular color and its derived variants
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub category: String,
    pub role: String,
    pub regular: Color,
    pub faded: Color,
    pub dimmed: Color,
}

impl Swatch {
    pub fn get(&self, variant: Variant) -> Color {
        match variant {
            Variant::Regular => self.regular,
            Variant::Faded => self.faded,
            Variant::Dimmed => self.dimmed,
        }
    }

    fn set(&mut self, variant: Variant, color: Color) {
        match variant {
            Variant::Regular => self.regular = color,
            Variant::Faded => self.faded = color,
            Variant::Dimmed => self.dimmed = color,
        }
    }
}

/// Built palette, read-only once constructed
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    pub fn swatch(&self, category: &str, role: &str) -> Option<&Swatch> {
        self.swatches
            .iter()
            .find(|s| s.category == category && s.role == role)
    }

    pub fn get(&self, category: &str, role: &str, variant: Variant) -> Option<Color> {
        self.swatch(category, role).map(|s| s.get(variant))
    }

    /// Swatches in table order
    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}

/// Faded variant: scale saturation and lightness, capped at 100
pub fn make_faded(regular: Color, saturation_ratio: f64, lightness_ratio: f64) -> Result<Color> {
    let hsl = regular.hsl();
    let saturation = (hsl.saturation * saturation_ratio).min(100.0);
    let lightness = (hsl.lightness * lightness_ratio).min(100.0);
    Color::from_hsl(hsl.hue, saturation, lightness)
}

/// Dimmed variant: scale saturation and lightness without clamping
pub fn make_dimmed(regular: Color, saturation_ratio: f64, lightness_ratio: f64) -> Result<Color> {
    let hsl = regular.hsl();
    Color::from_hsl(
        hsl.hue,
        hsl.saturation * saturation_ratio,
        hsl.lightness * lightness_ratio,
    )
}

/// Collects palette entries and overrides, then derives every variant at once
#[derive(Debug, Clone, Default)]
pub struct PaletteBuilder {
    entries: Vec<PaletteEntry>,
    overrides: Vec<(String, String, Variant, Color)>,
}

impl PaletteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular color with its fade/dim ratios
    pub fn entry(
        mut self,
        category: impl Into<String>,
        role: impl Into<String>,
        regular: Color,
        ratios: Ratios,
    ) -> Self {
        self.entries.push(PaletteEntry {
            category: category.into(),
            role: role.into(),
            regular,
            ratios,
        });
        self
    }

    /// Replace one derived (or regular) color after derivation
    pub fn override_color(
        mut self,
        category: impl Into<String>,
        role: impl Into<String>,
        variant: Variant,
        color: Color,
    ) -> Self {
        self.overrides
            .push((category.into(), role.into(), variant, color));
        self
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Derive faded and dimmed colors for every entry and apply overrides.
    ///
    /// Fails as a whole if any entry fails; no partial palette is returned.
    pub fn build(&self) -> Result<Palette> {
        let mut swatches: Vec<Swatch> = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            if swatches
                .iter()
                .any(|s| s.category == entry.category && s.role == entry.role)
            {
                return Err(Error::configuration(
                    "palette entry",
                    format!("duplicate {}/{}", entry.category, entry.role),
                ));
            }

            let r = entry.ratios;
            let faded = make_faded(entry.regular, r.saturation_fade, r.lightness_fade)?;
            let dimmed = make_dimmed(entry.regular, r.saturation_dim, r.lightness_dim)?;
            log::debug!(
                "{}/{}: regular {} faded {} dimmed {}",
                entry.category,
                entry.role,
                entry.regular,
                faded,
                dimmed
            );

            swatches.push(Swatch {
                category: entry.category.clone(),
                role: entry.role.clone(),
                regular: entry.regular,
                faded,
                dimmed,
            });
        }

        for (category, role, variant, color) in &self.overrides {
            let swatch = swatches
                .iter_mut()
                .find(|s| &s.category == category && &s.role == role)
                .ok_or_else(|| {
                    Error::configuration("palette override", format!("{}/{}", category, role))
                })?;
            log::debug!(
                "{}/{}: {} overridden {} -> {}",
                category,
                role,
                variant,
                swatch.get(*variant),
                color
            );
            swatch.set(*variant, *color);
        }

        Ok(Palette { swatches })
    }
}
