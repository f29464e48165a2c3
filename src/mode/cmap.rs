//! Continuous colormap modes

use hueramp::{DivCmapOptions, MonoCmapOptions, create_div_cmap, create_mono_cmap};

use super::{finish_chart, parse_color};
use crate::chart;
use crate::output::print_stops;

/// Monochromatic colormap, printed as evenly spaced stops
pub fn run_cmap(
    theme: &str,
    options: MonoCmapOptions,
    stops: usize,
    image_path: Option<&str>,
) -> Result<(), String> {
    let theme = parse_color(theme)?;
    let cmap = create_mono_cmap(theme, &options).map_err(|e| e.to_string())?;

    print_stops(&cmap.stops(stops));

    if let Some(path) = image_path {
        let subtitle = format!("theme {}", theme);
        finish_chart(
            chart::render_colormap_chart(&cmap, "Monochromatic Colormap", &subtitle, path),
            path,
        )?;
    }

    Ok(())
}

/// Diverging colormap, printed as evenly spaced stops
pub fn run_div_cmap(
    end_1: &str,
    end_2: &str,
    options: DivCmapOptions,
    stops: usize,
    image_path: Option<&str>,
) -> Result<(), String> {
    let end_1 = parse_color(end_1)?;
    let end_2 = parse_color(end_2)?;
    let cmap = create_div_cmap(end_1, end_2, &options).map_err(|e| e.to_string())?;

    print_stops(&cmap.stops(stops));

    if let Some(path) = image_path {
        let subtitle = format!("{} to {}", end_1, end_2);
        finish_chart(
            chart::render_colormap_chart(&cmap, "Diverging Colormap", &subtitle, path),
            path,
        )?;
    }

    Ok(())
}
