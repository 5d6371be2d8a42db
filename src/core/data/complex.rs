use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Squared modulus. Escape tests compare against this directly so no
    /// square root is ever taken.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// One step of the quadratic recurrence `z² + c`.
    ///
    /// Expanded into scalar arithmetic in the same operation order as the
    /// escape loop has always used, so results are bit-for-bit stable.
    #[must_use]
    #[inline]
    pub fn square_add(self, c: Self) -> Self {
        Self {
            real: c.real + self.real * self.real - self.imag * self.imag,
            imag: c.imag + 2.0 * self.real * self.imag,
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

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square_add_matches_operator_form() {
        let z = Complex::new(2.0, 3.0);
        let c = Complex::new(-0.5, 0.25);

        // (2 + 3i)² = -5 + 12i
        assert_eq!(z.square_add(c), Complex::new(-5.5, 12.25));
        assert_eq!(z.square_add(c), z * z + c);
    }

    #[test]
    fn test_square_add_from_origin_is_c() {
        let c = Complex::new(1.0, -1.0);

        assert_eq!(Complex::ZERO.square_add(c), c);
    }
}
