//! CLI mode implementations

mod cmap;
mod convert;
mod palette;
mod ramp;

pub use cmap::{run_cmap, run_div_cmap};
pub use convert::{run_convert, run_hsl, run_hsv};
pub use palette::run_palette;
pub use ramp::{run_div_ramp, run_ramp};

use hueramp::Color;

/// Parse a command-line color argument
fn parse_color(arg: &str) -> Result<Color, String> {
    arg.parse::<Color>().map_err(|e| e.to_string())
}

/// Report where a chart went, or pass its error on
fn finish_chart(result: Result<(), String>, path: &str) -> Result<(), String> {
    result?;
    eprintln!("Chart saved to: {}", path);
    Ok(())
}
