use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::range::Range;
use crate::core::fractals::fractal_kinds::FractalKind;

pub const DEFAULT_MAX_ITERATIONS: u32 = 15;
pub const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 20.0;
pub const DEFAULT_X_RANGE: Range = Range::new(-2.25, 1.0);
pub const DEFAULT_Y_RANGE: Range = Range::new(-1.3, 1.3);
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Everything one render pass needs.
///
/// Built from [`FractalParams::default`], optionally overridden field by
/// field by the configuration loader, then only ever borrowed immutably by
/// the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    pub kind: FractalKind,
    /// Julia constant in Julia mode, starting value of every orbit in
    /// Mandelbrot mode.
    pub initial: Complex,
    pub max_iterations: u32,
    /// Compared against `|z|²` as is; this is not a radius.
    pub escape_radius_squared: f64,
    pub x_range: Range,
    pub y_range: Range,
    pub width: u32,
    pub height: u32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            kind: FractalKind::default(),
            initial: Complex::ZERO,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
            x_range: DEFAULT_X_RANGE,
            y_range: DEFAULT_Y_RANGE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl FractalParams {
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }

    /// Upper end of the colour scale. Kept in `f64` so that zero iterations
    /// give `-1.0` instead of wrapping.
    #[must_use]
    pub fn colour_scale_max(&self) -> f64 {
        f64::from(self.max_iterations) - 1.0
    }
}
