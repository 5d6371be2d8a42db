use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::escape_iterations;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoords;

/// Escape-time binding where the pixel's plane point is the recurrence
/// constant and every orbit starts from the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    dimensions: Dimensions,
    coords: PixelToComplexCoords,
    start: Complex,
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        let c = self.coords.map(pixel);

        self.iterate(c)
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(params: &FractalParams) -> Self {
        Self {
            dimensions: params.dimensions(),
            coords: PixelToComplexCoords::from_params(params),
            start: params.initial,
            max_iterations: params.max_iterations,
            escape_radius_squared: params.escape_radius_squared,
        }
    }

    /// Iteration count for the plane point `c`.
    #[must_use]
    pub fn iterate(&self, c: Complex) -> u32 {
        escape_iterations(self.start, c, self.max_iterations, self.escape_radius_squared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::range::Range;

    #[test]
    fn test_origin_is_inside_with_defaults() {
        let algorithm = MandelbrotAlgorithm::new(&FractalParams::default());

        assert_eq!(algorithm.iterate(Complex::ZERO), 15);
    }

    #[test]
    fn test_one_escapes_at_index_two_with_defaults() {
        let algorithm = MandelbrotAlgorithm::new(&FractalParams::default());

        assert_eq!(algorithm.iterate(Complex::new(1.0, 0.0)), 2);
    }

    #[test]
    fn test_initial_value_is_the_orbit_start() {
        // Starting at 1 with c = 0: 1 -> 1 -> 1 ... never escapes.
        // Starting at 5 with c = 0: 25 escapes on the first step.
        let bounded = MandelbrotAlgorithm::new(&FractalParams {
            initial: Complex::new(1.0, 0.0),
            ..FractalParams::default()
        });
        let escaping = MandelbrotAlgorithm::new(&FractalParams {
            initial: Complex::new(5.0, 0.0),
            ..FractalParams::default()
        });

        assert_eq!(bounded.iterate(Complex::ZERO), 15);
        assert_eq!(escaping.iterate(Complex::ZERO), 0);
    }

    #[test]
    fn test_compute_maps_pixel_to_plane_point() {
        // 4x2 grid over [-2, 2] x [-1, 1]: pixel (3, 1) is c = 1 + 0i.
        let params = FractalParams {
            x_range: Range::new(-2.0, 2.0),
            y_range: Range::new(-1.0, 1.0),
            width: 4,
            height: 2,
            ..FractalParams::default()
        };
        let algorithm = MandelbrotAlgorithm::new(&params);

        assert_eq!(algorithm.compute(Point { x: 3, y: 1 }), 2);
        assert_eq!(algorithm.dimensions(), Dimensions::new(4, 2));
    }
}
