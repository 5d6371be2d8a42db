use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_raster::generate_raster::generate_raster;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::raster::Raster;
use crate::core::fractals::colour_mapping::four_band_gradient::FourBandGradient;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// How pixels are scheduled. Both strategies produce byte-identical rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    Sequential,
    /// Rows spread over rayon's global thread pool.
    #[default]
    Parallel,
}

impl RenderStrategy {
    pub const ALL: &'static [Self] = &[Self::Sequential, Self::Parallel];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Iteration count for every pixel, row-major.
#[must_use]
pub fn iteration_counts(params: &FractalParams, strategy: RenderStrategy) -> Vec<u32> {
    match params.kind {
        FractalKind::Mandelbrot => run(&MandelbrotAlgorithm::new(params), strategy),
        FractalKind::Julia => run(&JuliaAlgorithm::new(params), strategy),
    }
}

fn run<Alg>(algorithm: &Alg, strategy: RenderStrategy) -> Vec<u32>
where
    Alg: FractalAlgorithm<Success = u32> + Sync,
{
    match strategy {
        RenderStrategy::Sequential => generate_fractal(algorithm),
        RenderStrategy::Parallel => generate_fractal_parallel_rayon(algorithm),
    }
}

/// Renders one complete frame.
///
/// Total over finite parameters: a zero width or height gives an empty
/// raster of that shape, zero iterations an all-black one.
#[must_use]
pub fn render_frame(params: &FractalParams, strategy: RenderStrategy) -> Raster {
    let counts = iteration_counts(params, strategy);
    let gradient = FourBandGradient::from_params(params);

    generate_raster(counts, &gradient, params.dimensions())
}
