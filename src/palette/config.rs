//! Palette table configuration
//!
//! The table of regular colors and ratios can be built in code, taken from
//! [`PaletteConfig::standard`], or loaded from JSON:
//!
//! ```no_run
//! use hueramp::PaletteConfig;
//! use std::path::Path;
//!
//! let palette = PaletteConfig::from_json_file(Path::new("palette.json"))?.build()?;
//! # Ok::<(), hueramp::Error>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Palette, PaletteBuilder, Ratios, Variant};
use crate::color::{Color, Rgb};
use crate::error::{Error, Result};

/// Complete palette table: entries plus post-derivation overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub entries: Vec<EntryConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideConfig>,
}

/// One palette row; omitted ratios leave the color unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub category: String,
    pub role: String,
    pub regular: Color,

    #[serde(default = "unit_ratio")]
    pub saturation_fade: f64,
    #[serde(default = "unit_ratio")]
    pub lightness_fade: f64,
    #[serde(default = "unit_ratio")]
    pub saturation_dim: f64,
    #[serde(default = "unit_ratio")]
    pub lightness_dim: f64,
}

/// Curated replacement for one palette color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideConfig {
    pub category: String,
    pub role: String,
    pub variant: Variant,
    pub color: Color,
}

fn unit_ratio() -> f64 {
    1.0
}

/// (category, role, regular, lightness fade, lightness dim)
const STANDARD_ENTRIES: [(&str, &str, Color, f64, f64); 8] = [
    ("main", "hero", rgb(0x35, 0x37, 0x95), 1.3, 0.8), // violet
    ("main", "primary", rgb(0xef, 0x88, 0x72), 1.25, 0.75), // salmon
    ("main", "highlight", rgb(0xfd, 0xd3, 0x10), 1.6, 0.7), // yellow
    ("main", "green", rgb(0x7c, 0xbf, 0xa4), 1.35, 0.7), // sea green
    ("main", "water", rgb(0x84, 0xcb, 0xce), 1.35, 0.8), // turquoise
    ("backup", "backup1", rgb(0xf4, 0xa4, 0x22), 1.4, 0.8), // orange
    ("backup", "backup2", rgb(0x5d, 0xb7, 0x5a), 1.4, 0.8), // forest
    ("backup", "backup3", rgb(0xe5, 0x42, 0x25), 1.4, 0.8), // red
];

const STANDARD_SATURATION_FADE: f64 = 1.2;
const STANDARD_SATURATION_DIM: f64 = 0.8;

/// Hero faded color, hand-picked
const STANDARD_HERO_FADED: Color = rgb(0xc8, 0xb7, 0xd9);

const fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color::from_rgb(Rgb::new(red, green, blue))
}

impl PaletteConfig {
    /// The built-in eight-color palette
    pub fn standard() -> Self {
        let entries = STANDARD_ENTRIES
            .iter()
            .map(
                |&(category, role, regular, lightness_fade, lightness_dim)| EntryConfig {
                    category: category.to_string(),
                    role: role.to_string(),
                    regular,
                    saturation_fade: STANDARD_SATURATION_FADE,
                    lightness_fade,
                    saturation_dim: STANDARD_SATURATION_DIM,
                    lightness_dim,
                },
            )
            .collect();

        Self {
            entries,
            overrides: vec![OverrideConfig {
                category: "main".to_string(),
                role: "hero".to_string(),
                variant: Variant::Faded,
                color: STANDARD_HERO_FADED,
            }],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config("invalid JSON", e))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}", path.display()), e))?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::config("cannot serialize", e))
    }

    pub fn builder(&self) -> PaletteBuilder {
        let builder = self.entries.iter().fold(PaletteBuilder::new(), |b, e| {
            b.entry(
                e.category.clone(),
                e.role.clone(),
                e.regular,
                Ratios {
                    saturation_fade: e.saturation_fade,
                    lightness_fade: e.lightness_fade,
                    saturation_dim: e.saturation_dim,
                    lightness_dim: e.lightness_dim,
                },
            )
        });

        self.overrides.iter().fold(builder, |b, o| {
            b.override_color(o.category.clone(), o.role.clone(), o.variant, o.color)
        })
    }

    pub fn build(&self) -> Result<Palette> {
        self.builder().build()
    }
}
