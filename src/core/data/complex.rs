use std::ops::Add;

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// `z²`, expanded so the escape loop needs no general multiply.
    #[must_use]
    pub fn square(self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag,
            imag: 2.0 * self.real * self.imag,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude_squared(), 25.0); // 3² + 4² = 25
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let result = Complex::new(2.0, 3.0).square();

        assert_eq!(result, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_square_of_pure_imaginary_is_negative_real() {
        let result = Complex::new(0.0, 2.0).square();

        assert_eq!(result, Complex::new(-4.0, 0.0));
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -5.0);
    }
}
