use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::grid_point::GridPoint;

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_RESOLUTION_EXPONENT: u32 = 9;
pub const DEFAULT_ITERATION_CAP: u32 = 256;

pub const MIN_RESOLUTION_EXPONENT: u32 = 1;
/// `4^30` scan indices still fit a `u64` and `2^30` grid coordinates a `u32`.
pub const MAX_RESOLUTION_EXPONENT: u32 = 30;
pub const MIN_ITERATION_CAP: u32 = 1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    InvalidZoom { zoom: f64 },
    NonFiniteCenter { real: f64, imag: f64 },
    ResolutionOutOfRange { resolution_exponent: u32 },
    ZeroIterations,
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be a finite number greater than zero, got {}", zoom)
            }
            Self::NonFiniteCenter { real, imag } => {
                write!(f, "center must be finite, got ({}, {})", real, imag)
            }
            Self::ResolutionOutOfRange {
                resolution_exponent,
            } => {
                write!(
                    f,
                    "resolution exponent {} outside {}..={}",
                    resolution_exponent, MIN_RESOLUTION_EXPONENT, MAX_RESOLUTION_EXPONENT
                )
            }
            Self::ZeroIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for ViewStateError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// The explorer's mutable view: where the grid is centred, how far it is
/// zoomed, how fine the grid is and how deep each point is iterated.
///
/// Invariants held after every mutation: `zoom > 0`,
/// `1 <= resolution_exponent <= 30`, `iteration_cap >= 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom: f64,
    center: Complex,
    resolution_exponent: u32,
    iteration_cap: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            center: Complex::ZERO,
            resolution_exponent: DEFAULT_RESOLUTION_EXPONENT,
            iteration_cap: DEFAULT_ITERATION_CAP,
        }
    }
}

impl ViewState {
    pub fn new(
        zoom: f64,
        center: Complex,
        resolution_exponent: u32,
        iteration_cap: u32,
    ) -> Result<Self, ViewStateError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewStateError::InvalidZoom { zoom });
        }

        if !center.real.is_finite() || !center.imag.is_finite() {
            return Err(ViewStateError::NonFiniteCenter {
                real: center.real,
                imag: center.imag,
            });
        }

        if !(MIN_RESOLUTION_EXPONENT..=MAX_RESOLUTION_EXPONENT).contains(&resolution_exponent) {
            return Err(ViewStateError::ResolutionOutOfRange {
                resolution_exponent,
            });
        }

        if iteration_cap < MIN_ITERATION_CAP {
            return Err(ViewStateError::ZeroIterations);
        }

        Ok(Self {
            zoom,
            center,
            resolution_exponent,
            iteration_cap,
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn resolution_exponent(&self) -> u32 {
        self.resolution_exponent
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }

    /// Side length `N = 2^resolution_exponent` of the scan grid.
    #[must_use]
    pub fn grid_size(&self) -> u32 {
        1 << self.resolution_exponent
    }

    /// Maps a grid cell to the complex plane:
    /// `c = center + (p - N/2) / N / zoom` on each axis.
    #[must_use]
    pub fn grid_to_complex(&self, point: GridPoint) -> Complex {
        let size = f64::from(self.grid_size());
        let half = size / 2.0;

        Complex {
            real: self.center.real + (f64::from(point.x) - half) / size / self.zoom,
            imag: self.center.imag + (f64::from(point.y) - half) / size / self.zoom,
        }
    }

    /// Multiplies the zoom; a result that is not a finite positive number is
    /// ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        let zoom = self.zoom * factor;

        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
    }

    /// Moves the centre by a quarter of the visible extent; a move that
    /// would leave the centre non-finite is ignored.
    pub fn pan(&mut self, direction: PanDirection) {
        let step = 1.0 / self.zoom / 4.0;
        let mut center = self.center;

        match direction {
            PanDirection::Up => center.imag -= step,
            PanDirection::Down => center.imag += step,
            PanDirection::Left => center.real -= step,
            PanDirection::Right => center.real += step,
        }

        if center.real.is_finite() && center.imag.is_finite() {
            self.center = center;
        }
    }

    pub fn adjust_iteration_cap(&mut self, delta: i64) {
        let cap = i64::from(self.iteration_cap).saturating_add(delta);

        self.iteration_cap = cap.clamp(i64::from(MIN_ITERATION_CAP), i64::from(u32::MAX)) as u32;
    }

    pub fn adjust_resolution(&mut self, delta: i32) {
        let exponent = i64::from(self.resolution_exponent) + i64::from(delta);

        self.resolution_exponent = exponent.clamp(
            i64::from(MIN_RESOLUTION_EXPONENT),
            i64::from(MAX_RESOLUTION_EXPONENT),
        ) as u32;
    }
}
