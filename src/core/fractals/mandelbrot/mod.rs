//! Escape-time Mandelbrot evaluation and colouring.

pub mod algorithm;
pub mod colour_map;
pub mod errors;

use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::ports::colour_map::ColourMap;
use crate::core::ports::fractal_algorithm::FractalAlgorithm;

use algorithm::{Escape, MandelbrotAlgorithm};
use colour_map::MandelbrotHueCycle;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub escape: Escape,
    pub colour: Colour,
}

/// Classifies `c` and colours it. Pure: equal inputs give equal outputs.
#[must_use]
pub fn evaluate(algorithm: &MandelbrotAlgorithm, c: Complex) -> Evaluation {
    let escape = algorithm.compute(c);

    Evaluation {
        escape,
        colour: MandelbrotHueCycle.map(escape),
    }
}
