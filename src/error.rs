//! Error types for hueramp

use thiserror::Error;

/// Result type alias for hueramp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while converting colors or generating palettes, ramps and colormaps
#[derive(Error, Debug)]
pub enum Error {
    /// Hex color string is malformed
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    /// Numeric component outside its domain
    #[error("{component} out of range: {value} (expected {min} to {max})")]
    OutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Enumerated option got a value it does not accept
    #[error("Invalid {parameter}: {value}")]
    Configuration { parameter: &'static str, value: String },

    /// Palette configuration file could not be read or parsed
    #[error("Failed to load palette config: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    pub(crate) fn invalid_format(input: &str, reason: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn configuration(parameter: &'static str, value: impl Into<String>) -> Self {
        Self::Configuration {
            parameter,
            value: value.into(),
        }
    }

    /// Create a config loading error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Fail with [`Error::OutOfRange`] unless `min <= value <= max`
pub(crate) fn check_range(component: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(Error::OutOfRange {
            component,
            value,
            min,
            max,
        })
    }
}

/// Fail with [`Error::OutOfRange`] unless `0 <= hue < 360`
pub(crate) fn check_hue(hue: f64) -> Result<f64> {
    if hue.is_finite() && (0.0..360.0).contains(&hue) {
        Ok(hue)
    } else {
        Err(Error::OutOfRange {
            component: "hue",
            value: hue,
            min: 0.0,
            max: 360.0,
        })
    }
}
