//! Chart rendering for palette, ramp and colormap previews

mod colors;
mod gradient;
mod swatches;

pub use gradient::render_colormap_chart;
pub use swatches::render_swatch_chart;

use hueramp::{Palette, Ramp, Variant};

/// One colored cell of a swatch chart
pub struct SwatchCell {
    /// Index into [`SwatchChartData::columns`]
    pub column: usize,
    pub color: String,
    pub label: String,
}

/// Data for a swatch chart: columns of stacked color cells, bottom to top
pub struct SwatchChartData {
    pub columns: Vec<String>,
    pub cells: Vec<SwatchCell>,
}

impl SwatchChartData {
    /// Single column, first ramp color at the bottom
    pub fn from_ramp(ramp: &Ramp) -> Self {
        let cells = ramp
            .iter()
            .map(|color| SwatchCell {
                column: 0,
                color: color.hex(),
                label: color.hex(),
            })
            .collect();
        Self {
            columns: vec![String::new()],
            cells,
        }
    }

    /// One column per role; dimmed at the bottom, faded on top
    pub fn from_palette(palette: &Palette) -> Self {
        let columns = palette
            .iter()
            .map(|s| format!("{}\n{}", s.category, s.role))
            .collect();
        let cells = palette
            .iter()
            .enumerate()
            .flat_map(|(column, s)| {
                [Variant::Dimmed, Variant::Regular, Variant::Faded]
                    .into_iter()
                    .map(move |variant| SwatchCell {
                        column,
                        color: s.get(variant).hex(),
                        label: format!("{}/{} {}", s.category, s.role, variant),
                    })
            })
            .collect();
        Self { columns, cells }
    }
}

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1200;
