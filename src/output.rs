use std::io::Write;

use colored::*;
use hueramp::cmap::{Rgba, rgba_to_color};
use hueramp::{Color, Palette, Ramp, Variant};

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

fn level_prefix(level: log::Level) -> ColoredString {
    match level {
        log::Level::Error => "error".red().bold(),
        log::Level::Warn => "warning".yellow().bold(),
        _ => "debug".dimmed().bold(),
    }
}

/// Send library `log` records to stderr with the same prefixes as CLI messages.
/// `RUST_LOG` overrides the level picked from `-v`.
pub(crate) fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "{}: {}", level_prefix(record.level()), record.args())
        })
        .try_init();
}

/// Block of cells painted with the color
fn swatch(color: Color) -> ColoredString {
    let rgb = color.rgb();
    "    ".on_truecolor(rgb.red, rgb.green, rgb.blue)
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub(crate) fn print_color_line(label: &str, color: Color) {
    let rgb = color.rgb();
    println!(
        "{} {} {}  rgb({:>3}, {:>3}, {:>3})",
        style_label(label),
        swatch(color),
        color,
        rgb.red,
        rgb.green,
        rgb.blue
    );
}

pub(crate) fn print_conversions(color: Color) {
    let rgb = color.rgb();
    let hsv = color.hsv();
    let hsl = color.hsl();
    println!("{} {}", swatch(color), color);
    println!("{}  {}, {}, {}", style_label("RGB"), rgb.red, rgb.green, rgb.blue);
    println!(
        "{}  {}°, {}%, {}%",
        style_label("HSV"),
        hsv.hue,
        hsv.saturation,
        hsv.value
    );
    println!(
        "{}  {}°, {}%, {}%",
        style_label("HSL"),
        hsl.hue,
        hsl.saturation,
        hsl.lightness
    );
}

pub(crate) fn print_ramp(ramp: &Ramp) {
    for (i, color) in ramp.iter().enumerate() {
        print_color_line(&format!("{:>3}", i), *color);
    }
}

pub(crate) fn print_stops(stops: &[Rgba]) {
    println!(
        "{}",
        style_label("  #   swatch  hex       red    green  blue   alpha")
    );
    print_separator(50);
    for (i, row) in stops.iter().enumerate() {
        println!(
            "{:>3}   {}    {}  {:.3}  {:.3}  {:.3}  {:.3}",
            i,
            swatch(rgba_to_color(row)),
            rgba_to_color(row),
            row[0],
            row[1],
            row[2],
            row[3]
        );
    }
}

pub(crate) fn print_palette(palette: &Palette) {
    println!(
        "{}",
        style_label("CATEGORY  ROLE        REGULAR          FADED            DIMMED")
    );
    print_separator(68);
    for swatch_entry in palette {
        print!("{:<9} {:<11}", swatch_entry.category, swatch_entry.role);
        for variant in Variant::ALL {
            let color = swatch_entry.get(variant);
            print!(" {} {}  ", swatch(color), color);
        }
        println!();
    }
}

pub(crate) fn print_legend() {
    println!("Regular: base color of each role");
    println!("Faded: lighter, more saturated variant (for backgrounds and secondary marks)");
    println!("Dimmed: darker, less saturated variant (for de-emphasized marks)");
}
