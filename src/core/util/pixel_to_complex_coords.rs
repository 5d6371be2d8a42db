use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::point::Point;
use crate::core::data::range::Range;

/// Maps pixel coordinates onto the complex plane.
///
/// Column 0 sits on `x_range.lower` and row 0 on `y_range.upper`; the
/// imaginary step is negative so rows grow downward while the imaginary axis
/// decreases. The far edges (`x_range.upper`, `y_range.lower`) are never
/// reached, they lie one step past the last pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelToComplexCoords {
    origin: Complex,
    step_real: f64,
    step_imag: f64,
}

impl PixelToComplexCoords {
    #[must_use]
    pub fn new(x_range: Range, y_range: Range, width: u32, height: u32) -> Self {
        Self {
            origin: Complex::new(x_range.lower, y_range.upper),
            step_real: x_range.span() / f64::from(width),
            step_imag: -y_range.span() / f64::from(height),
        }
    }

    #[must_use]
    pub fn from_params(params: &FractalParams) -> Self {
        Self::new(params.x_range, params.y_range, params.width, params.height)
    }

    #[must_use]
    #[inline]
    pub fn map(&self, pixel: Point) -> Complex {
        Complex {
            real: self.origin.real + self.step_real * f64::from(pixel.x),
            imag: self.origin.imag + self.step_imag * f64::from(pixel.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_left_is_lower_real_upper_imag() {
        let coords = PixelToComplexCoords::new(Range::new(-2.0, 2.0), Range::new(-1.0, 1.0), 4, 2);

        assert_eq!(coords.map(Point { x: 0, y: 0 }), Complex::new(-2.0, 1.0));
    }

    #[test]
    fn test_steps_across_and_down() {
        let coords = PixelToComplexCoords::new(Range::new(-2.0, 2.0), Range::new(-1.0, 1.0), 4, 2);

        assert_eq!(coords.map(Point { x: 1, y: 0 }), Complex::new(-1.0, 1.0));
        assert_eq!(coords.map(Point { x: 3, y: 1 }), Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_far_edges_lie_one_step_past_last_pixel() {
        let coords = PixelToComplexCoords::new(Range::new(0.0, 8.0), Range::new(0.0, 4.0), 8, 4);

        assert_eq!(coords.map(Point { x: 7, y: 3 }), Complex::new(7.0, 1.0));
        assert_eq!(coords.map(Point { x: 8, y: 4 }), Complex::new(8.0, 0.0));
    }

    #[test]
    fn test_inverted_ranges_mirror_the_axes() {
        let coords = PixelToComplexCoords::new(Range::new(2.0, -2.0), Range::new(1.0, -1.0), 4, 2);

        assert_eq!(coords.map(Point { x: 0, y: 0 }), Complex::new(2.0, -1.0));
        assert_eq!(coords.map(Point { x: 1, y: 1 }), Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_from_params_uses_default_view() {
        let coords = PixelToComplexCoords::from_params(&FractalParams::default());

        assert_eq!(coords.map(Point { x: 0, y: 0 }), Complex::new(-2.25, 1.3));
    }
}
