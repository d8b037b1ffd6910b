use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::ports::fractal_algorithm::FractalAlgorithm;

/// Squared magnitude at which an orbit counts as escaped. Smaller than the
/// usual radius-2 bound of `4.0`, so colour bands sit one step earlier.
pub const ESCAPE_THRESHOLD: f64 = 2.0;

/// Escape-time classification of a single point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Escape {
    /// `|z|²` reached the threshold after step `n` (counting from 0).
    Escaped(u32),
    /// Still below the threshold after `max_iterations` steps.
    Bounded,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = Escape;

    /// Iterates `z <- z² + c` from `z = 0`, testing `|z|²` after each step.
    fn compute(&self, c: Complex) -> Escape {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            z = z.square() + c;

            if z.magnitude_squared() >= ESCAPE_THRESHOLD {
                return Escape::Escaped(iteration);
            }
        }

        Escape::Bounded
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    /// The view's iteration cap is always at least one.
    #[must_use]
    pub fn for_view(view: &ViewState) -> Self {
        Self {
            max_iterations: view.iteration_cap(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
