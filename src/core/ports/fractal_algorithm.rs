use crate::core::data::complex::Complex;

/// A pure per-point fractal computation.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, c: Complex) -> Self::Output;
}
