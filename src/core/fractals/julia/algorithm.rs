use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::escape_iterations;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoords;

/// Escape-time binding where the pixel's plane point starts the orbit and the
/// recurrence constant is fixed. Same recurrence as
/// [`MandelbrotAlgorithm`](crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm)
/// with the two operands swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    dimensions: Dimensions,
    coords: PixelToComplexCoords,
    constant: Complex,
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        let z0 = self.coords.map(pixel);

        self.iterate(z0)
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(params: &FractalParams) -> Self {
        Self {
            dimensions: params.dimensions(),
            coords: PixelToComplexCoords::from_params(params),
            constant: params.initial,
            max_iterations: params.max_iterations,
            escape_radius_squared: params.escape_radius_squared,
        }
    }

    /// Iteration count for an orbit starting at `z0`.
    #[must_use]
    pub fn iterate(&self, z0: Complex) -> u32 {
        escape_iterations(z0, self.constant, self.max_iterations, self.escape_radius_squared)
    }
}
