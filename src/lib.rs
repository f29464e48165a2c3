//! Color conversion, derived palettes, ramps and colormaps for data visualization
//!
//! - [`color`]: HSV, HSL, RGB and hex conversions, and the [`Color`] value
//! - [`palette`]: faded/dimmed variants derived from a table of regular colors
//! - [`ramp`]: discrete monochromatic and diverging ramps
//! - [`cmap`]: 256-entry RGBA colormaps
//!
//! ```
//! use hueramp::{Color, create_mono_ramp};
//!
//! let theme: Color = "#353795".parse()?;
//! let ramp = create_mono_ramp(theme, 5, 100.0)?;
//! assert_eq!(ramp.hex_codes()[0], "#ffffff");
//! assert_eq!(ramp[4], theme);
//! # Ok::<(), hueramp::Error>(())
//! ```

pub mod cmap;
pub mod color;
pub mod error;
mod interp;
pub mod palette;
pub mod ramp;

pub use cmap::{
    AuxColor, Colormap, DivCmapOptions, EndLightness, EndSaturation, MidMethod, MonoCmapOptions,
    create_div_cmap, create_mono_cmap,
};
pub use color::{Color, Hsl, Hsv, Rgb};
pub use error::{Error, Result};
pub use palette::{Palette, PaletteBuilder, PaletteConfig, Ratios, Swatch, Variant};
pub use ramp::{DivRampOptions, Ramp, create_div_ramp, create_mono_ramp};
