use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates `algorithm` for every pixel on the calling thread.
///
/// Results are returned in row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Success> {
    algorithm
        .dimensions()
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
