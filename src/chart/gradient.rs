//! Colormap preview: one bar filled with the colormap's gradient

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, Color, ColorStop, ItemStyle, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};
use hueramp::Colormap;

use super::colors::{COLOR_BACKGROUND, COLOR_TEXT, rgba_css};
use super::{CHART_HEIGHT, CHART_WIDTH};

/// Gradient stops taken from the colormap; enough to look continuous
const GRADIENT_STOPS: usize = 64;

/// Render a colormap as a horizontal gradient bar to a PNG file
pub fn render_colormap_chart(
    cmap: &Colormap,
    title: &str,
    subtitle: &str,
    output_path: &str,
) -> Result<(), String> {
    if cmap.is_empty() {
        return Err("No colormap data to render".to_string());
    }

    let stops = cmap.stops(GRADIENT_STOPS);
    let last = (stops.len() - 1).max(1) as f64;
    let css: Vec<String> = stops.iter().map(rgba_css).collect();
    let color_stops: Vec<ColorStop> = css
        .iter()
        .enumerate()
        .map(|(i, c)| ColorStop::new(i as f64 / last, c.as_str()))
        .collect();

    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(title)
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("5%")
                .right("5%")
                .bottom("10%")
                .top("20%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(vec![String::new()])
                .axis_label(AxisLabel::new().show(false)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .max(1)
                .axis_label(AxisLabel::new().show(false)),
        )
        .series(
            Bar::new()
                .name("colormap")
                .data(vec![1.0])
                .bar_width((CHART_WIDTH as f64) * 0.9)
                .item_style(ItemStyle::new().color(Color::LinearGradient {
                    x: 0.0,
                    y: 0.0,
                    x2: 1.0,
                    y2: 0.0,
                    color_stops,
                })),
        );

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
