//! Palette mode

use std::path::Path;

use hueramp::PaletteConfig;

use super::finish_chart;
use crate::chart::{self, SwatchChartData};
use crate::output::{print_legend, print_palette};

/// Build the standard palette (or one from a JSON config) and print it
pub fn run_palette(
    config_path: Option<&Path>,
    quiet: bool,
    image_path: Option<&str>,
) -> Result<(), String> {
    let config = match config_path {
        Some(path) => PaletteConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => PaletteConfig::standard(),
    };
    let palette = config.build().map_err(|e| e.to_string())?;
    log::debug!(
        "built palette: {} entries, {} overrides",
        config.entries.len(),
        config.overrides.len()
    );

    print_palette(&palette);

    if !quiet {
        println!();
        print_legend();
    }

    if let Some(path) = image_path {
        let subtitle = config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "standard".to_string());
        let data = SwatchChartData::from_palette(&palette);
        finish_chart(
            chart::render_swatch_chart(&data, "Palette", &subtitle, path),
            path,
        )?;
    }

    Ok(())
}
