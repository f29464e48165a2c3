mod chart;
mod mode;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hueramp::{
    AuxColor, Color, DivCmapOptions, DivRampOptions, EndLightness, EndSaturation, MidMethod,
    MonoCmapOptions,
};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "hueramp",
    version,
    about = "Color converter and palette, ramp and colormap generator for data visualization",
    after_help = "Examples:
  hueramp convert '#353795'                          HEX to RGB/HSV/HSL
  hueramp hsl 239 48 40                              HSL to HEX
  hueramp palette                                    Standard palette with faded/dimmed variants
  hueramp palette --config palette.json              Palette from a JSON table
  hueramp ramp '#353795' -n 5                        5-color ramp toward white
  hueramp div-ramp '#353795' '#e54225' --insert '#ffffff'
  hueramp cmap '#353795' --end-saturation gray --image cmap.png
  hueramp div-cmap '#353795' '#e54225' --mid-method alpha"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress explanations (show data only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print debug messages on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a hex color as RGB, HSV and HSL
    Convert {
        /// Hex color (#rrggbb)
        color: String,
    },

    /// Convert hue (degrees), saturation and value (percent) to hex
    Hsv {
        hue: f64,
        saturation: f64,
        value: f64,
    },

    /// Convert hue (degrees), saturation and lightness (percent) to hex
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },

    /// Print the palette with derived faded and dimmed colors
    Palette {
        /// JSON palette table (defaults to the built-in palette)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output palette chart as PNG image
        #[arg(long, value_name = "PATH")]
        image: Option<String>,
    },

    /// Monochromatic ramp from a theme color toward an end lightness
    Ramp {
        /// Theme color (#rrggbb)
        theme: String,

        /// Number of colors
        #[arg(short = 'n', long, default_value = "5", value_name = "N")]
        count: usize,

        /// Lightness at the far end (100 for white backgrounds, 0 for black)
        #[arg(short, long, default_value = "100", value_name = "PERCENT")]
        end_lightness: f64,

        /// Output ramp chart as PNG image
        #[arg(long, value_name = "PATH")]
        image: Option<String>,
    },

    /// Diverging ramp between two theme colors
    DivRamp {
        /// First theme color (#rrggbb)
        theme1: String,

        /// Second theme color (#rrggbb)
        theme2: String,

        /// Number of colors from the first theme
        #[arg(long, default_value = "4", value_name = "N")]
        count1: usize,

        /// Number of colors from the second theme
        #[arg(long, default_value = "4", value_name = "N")]
        count2: usize,

        /// Lightness at the far end of the first half
        #[arg(long, default_value = "100", value_name = "PERCENT")]
        end_lightness1: f64,

        /// Lightness at the far end of the second half
        #[arg(long, default_value = "100", value_name = "PERCENT")]
        end_lightness2: f64,

        /// Color inserted between the two halves
        #[arg(long, value_name = "COLOR")]
        insert: Option<String>,

        /// Output ramp chart as PNG image
        #[arg(long, value_name = "PATH")]
        image: Option<String>,
    },

    /// Continuous 256-entry colormap from a theme color
    Cmap {
        /// Theme color (#rrggbb)
        theme: String,

        /// End hue: "same", a hue in degrees, or a #rrggbb color
        #[arg(long, default_value = "same", value_name = "AUX")]
        aux: String,

        /// End saturation: "same", "down", "gray", "as-aux" or a percentage
        #[arg(long, default_value = "same", value_name = "S")]
        end_saturation: String,

        /// End lightness: "same", "as-aux" or a percentage
        #[arg(long, default_value = "100", value_name = "L")]
        end_lightness: String,

        /// Alpha at the end of the map (0-1)
        #[arg(long, default_value = "1", value_name = "ALPHA")]
        end_alpha: f64,

        /// Run from the end color back to the theme
        #[arg(long)]
        invert: bool,

        /// Number of evenly spaced rows to print
        #[arg(long, default_value = "9", value_name = "N")]
        stops: usize,

        /// Output colormap chart as PNG image
        #[arg(long, value_name = "PATH")]
        image: Option<String>,
    },

    /// Continuous 256-entry diverging colormap between two colors
    DivCmap {
        /// Color at the start of the map (#rrggbb)
        color1: String,

        /// Color at the end of the map (#rrggbb)
        color2: String,

        /// Position of the center (0-1)
        #[arg(long, default_value = "0.5", value_name = "POS")]
        mid_pos: f64,

        /// Center color: "white", "black" or "alpha" (fade to transparent)
        #[arg(long, default_value = "white", value_name = "METHOD")]
        mid_method: String,

        /// Alpha at the center (0-1)
        #[arg(long, default_value = "1", value_name = "ALPHA")]
        mid_alpha: f64,

        /// Number of evenly spaced rows to print
        #[arg(long, default_value = "9", value_name = "N")]
        stops: usize,

        /// Output colormap chart as PNG image
        #[arg(long, value_name = "PATH")]
        image: Option<String>,
    },
}

impl Commands {
    fn image(&self) -> Option<&str> {
        match self {
            Commands::Palette { image, .. }
            | Commands::Ramp { image, .. }
            | Commands::DivRamp { image, .. }
            | Commands::Cmap { image, .. }
            | Commands::DivCmap { image, .. } => image.as_deref(),
            Commands::Convert { .. } | Commands::Hsv { .. } | Commands::Hsl { .. } => None,
        }
    }
}

fn parse_option<T: std::str::FromStr<Err = hueramp::Error>>(value: &str) -> Result<T, String> {
    value.parse::<T>().map_err(|e| e.to_string())
}

fn run(command: Commands, quiet: bool) -> Result<(), String> {
    let image = command.image().map(str::to_string);
    let image = image.as_deref();

    match command {
        Commands::Convert { color } => mode::run_convert(&color),
        Commands::Hsv {
            hue,
            saturation,
            value,
        } => mode::run_hsv(hue, saturation, value),
        Commands::Hsl {
            hue,
            saturation,
            lightness,
        } => mode::run_hsl(hue, saturation, lightness),
        Commands::Palette { config, .. } => mode::run_palette(config.as_deref(), quiet, image),
        Commands::Ramp {
            theme,
            count,
            end_lightness,
            ..
        } => mode::run_ramp(&theme, count, end_lightness, image),
        Commands::DivRamp {
            theme1,
            theme2,
            count1,
            count2,
            end_lightness1,
            end_lightness2,
            insert,
            ..
        } => {
            let insert = insert
                .as_deref()
                .map(parse_option::<Color>)
                .transpose()?;
            let options = DivRampOptions {
                end_lightness_1: end_lightness1,
                end_lightness_2: end_lightness2,
                insert,
            };
            mode::run_div_ramp(&theme1, &theme2, (count1, count2), options, image)
        }
        Commands::Cmap {
            theme,
            aux,
            end_saturation,
            end_lightness,
            end_alpha,
            invert,
            stops,
            ..
        } => {
            let options = MonoCmapOptions {
                aux_color: parse_option::<AuxColor>(&aux)?,
                end_saturation: parse_option::<EndSaturation>(&end_saturation)?,
                end_lightness: parse_option::<EndLightness>(&end_lightness)?,
                end_alpha,
                invert,
            };
            mode::run_cmap(&theme, options, stops, image)
        }
        Commands::DivCmap {
            color1,
            color2,
            mid_pos,
            mid_method,
            mid_alpha,
            stops,
            ..
        } => {
            let mid_method = parse_option::<MidMethod>(&mid_method)?;
            if mid_method == MidMethod::Alpha && mid_alpha != 1.0 {
                output::print_warning("--mid-alpha is ignored with --mid-method alpha");
            }
            let options = DivCmapOptions {
                mid_pos,
                mid_method,
                mid_alpha,
            };
            mode::run_div_cmap(&color1, &color2, options, stops, image)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        colored::control::set_override(false);
    }
    output::init_logger(cli.verbose);

    // Validate stop count
    if let Commands::Cmap { stops, .. } | Commands::DivCmap { stops, .. } = &cli.command
        && *stops == 0
    {
        print_error("--stops must be at least 1");
        std::process::exit(1);
    }

    // Validate image output path
    if let Some(path) = cli.command.image() {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    if let Err(e) = run(cli.command, cli.quiet) {
        print_error(&e);
        std::process::exit(1);
    }
}
