//! Stacked swatch chart rendering (for palettes and ramps)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, Label, LabelPosition, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};

use super::colors::{COLOR_BACKGROUND, COLOR_TEXT, label_color_for};
use super::{CHART_HEIGHT, CHART_WIDTH, SwatchChartData};

/// Render columns of stacked color cells.
/// Used for both ramps (single column, labelled cells) and palettes (one column per role)
pub fn render_swatch_chart(
    data: &SwatchChartData,
    title: &str,
    subtitle: &str,
    output_path: &str,
) -> Result<(), String> {
    if data.cells.is_empty() || data.columns.is_empty() {
        return Err("No colors to render".to_string());
    }

    // For single-column mode, hide x-axis labels and label each cell instead
    let is_single_column = data.columns.len() == 1;

    let mut chart = Chart::new()
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
                .bottom("7%")
                .top("15%")
                .contain_label(true),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().show(false)),
        );

    let x_axis = Axis::new()
        .type_(AxisType::Category)
        .boundary_gap(true)
        .data(data.columns.clone());

    chart = chart.x_axis(if is_single_column {
        x_axis.axis_label(AxisLabel::new().show(false))
    } else {
        x_axis.axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
    });

    // Grid width is ~90% of chart (5% margins each side)
    let grid_width = (CHART_WIDTH as f64) * 0.9;
    let bar_width = if is_single_column {
        grid_width / 3.0
    } else {
        grid_width / data.columns.len() as f64 * 0.8
    };

    // One stacked series per cell; zero height in every other column
    for cell in &data.cells {
        let bar_data: Vec<f64> = (0..data.columns.len())
            .map(|i| if i == cell.column { 1.0 } else { 0.0 })
            .collect();

        let mut bar = Bar::new()
            .name(&cell.label)
            .data(bar_data)
            .stack("swatch")
            .bar_width(bar_width)
            .item_style(ItemStyle::new().color(cell.color.as_str()));

        if is_single_column {
            bar = bar.label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Inside)
                    .color(label_color_for(&cell.color))
                    .font_size(20.0)
                    .font_weight("bold")
                    .formatter("{a}"),
            );
        }

        chart = chart.series(bar);
    }

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
