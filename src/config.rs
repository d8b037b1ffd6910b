use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::core::data::complex::Complex;
use crate::core::data::view_state::{
    DEFAULT_ITERATION_CAP, DEFAULT_RESOLUTION_EXPONENT, DEFAULT_ZOOM, MAX_RESOLUTION_EXPONENT,
    ViewState, ViewStateError,
};

pub const DEFAULT_DEVICE: &str = "/dev/fb0";

/// Progressive Mandelbrot explorer for the Linux framebuffer.
///
/// Keys: q quit, = and - zoom, w a s d pan, ] [ } { ) ( iterations by 1, 10
/// and 100, + and _ resolution.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "fbfractal", version)]
pub struct ExplorerConfig {
    /// Framebuffer device to draw on
    #[arg(long, default_value = DEFAULT_DEVICE)]
    pub device: String,

    /// Initial zoom factor
    #[arg(long, default_value_t = DEFAULT_ZOOM, allow_negative_numbers = true)]
    pub zoom: f64,

    /// Real part of the initial view centre
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_real: f64,

    /// Imaginary part of the initial view centre
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_imag: f64,

    /// Grid resolution exponent; the grid is 2^N cells on a side
    #[arg(
        long,
        default_value_t = DEFAULT_RESOLUTION_EXPONENT,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_RESOLUTION_EXPONENT))
    )]
    pub resolution: u32,

    /// Maximum iterations per point
    #[arg(
        long,
        default_value_t = DEFAULT_ITERATION_CAP,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub iterations: u32,

    /// Render a single frame to this PPM file instead of the framebuffer
    #[arg(long, value_name = "PATH")]
    pub headless: Option<PathBuf>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            zoom: DEFAULT_ZOOM,
            center_real: 0.0,
            center_imag: 0.0,
            resolution: DEFAULT_RESOLUTION_EXPONENT,
            iterations: DEFAULT_ITERATION_CAP,
            headless: None,
        }
    }
}

impl ExplorerConfig {
    /// The view the explorer starts from.
    pub fn view_state(&self) -> Result<ViewState, ConfigError> {
        let center = Complex::new(self.center_real, self.center_imag);

        Ok(ViewState::new(
            self.zoom,
            center,
            self.resolution,
            self.iterations,
        )?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidView(ViewStateError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidView(err) => write!(f, "invalid initial view: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidView(err) => Some(err),
        }
    }
}

impl From<ViewStateError> for ConfigError {
    fn from(err: ViewStateError) -> Self {
        Self::InvalidView(err)
    }
}
