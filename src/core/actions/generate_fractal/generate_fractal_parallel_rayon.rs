use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates `algorithm` for every pixel using rayon's work-stealing pool.
///
/// Rows are the unit of work. Each row is computed independently and the rows
/// are gathered back in order, so the output is identical to
/// [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let dimensions = algorithm.dimensions();

    let rows: Vec<Vec<Alg::Success>> = (0..dimensions.height)
        .into_par_iter()
        .map(|y| {
            dimensions
                .row(y)
                .map(|pixel| algorithm.compute(pixel))
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}
