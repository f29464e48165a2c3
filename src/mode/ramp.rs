//! Discrete ramp modes

use hueramp::{DivRampOptions, create_div_ramp, create_mono_ramp};

use super::{finish_chart, parse_color};
use crate::chart::{self, SwatchChartData};
use crate::output::print_ramp;

/// Monochromatic ramp toward white (or black, or any lightness)
pub fn run_ramp(
    theme: &str,
    count: usize,
    end_lightness: f64,
    image_path: Option<&str>,
) -> Result<(), String> {
    let theme = parse_color(theme)?;
    let ramp = create_mono_ramp(theme, count, end_lightness).map_err(|e| e.to_string())?;

    print_ramp(&ramp);

    if let Some(path) = image_path {
        let subtitle = format!("{} colors from {}", ramp.len(), theme);
        finish_chart(
            chart::render_swatch_chart(
                &SwatchChartData::from_ramp(&ramp),
                "Monochromatic Ramp",
                &subtitle,
                path,
            ),
            path,
        )?;
    }

    Ok(())
}

/// Diverging ramp between two theme colors
pub fn run_div_ramp(
    theme_1: &str,
    theme_2: &str,
    counts: (usize, usize),
    options: DivRampOptions,
    image_path: Option<&str>,
) -> Result<(), String> {
    let theme_1 = parse_color(theme_1)?;
    let theme_2 = parse_color(theme_2)?;
    let ramp = create_div_ramp(theme_1, theme_2, counts.0, counts.1, &options)
        .map_err(|e| e.to_string())?;

    print_ramp(&ramp);

    if let Some(path) = image_path {
        let subtitle = format!("{} to {}", theme_1, theme_2);
        finish_chart(
            chart::render_swatch_chart(
                &SwatchChartData::from_ramp(&ramp),
                "Diverging Ramp",
                &subtitle,
                path,
            ),
            path,
        )?;
    }

    Ok(())
}
