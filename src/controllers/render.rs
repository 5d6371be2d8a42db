use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_frame::{RenderStrategy, render_frame};
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::raster::Raster;
use crate::storage::ini_params::{ConfigError, load_params};

const APP_NAME: &str = "FrakView";

/// `FrakView (<path>)` for a loaded configuration, `FrakView (default)` otherwise.
#[must_use]
pub fn window_title(source: Option<&Path>) -> String {
    match source {
        Some(path) => format!("{} ({})", APP_NAME, path.display()),
        None => format!("{} (default)", APP_NAME),
    }
}

/// Loads `config` when given; the defaults apply only when it is absent.
pub fn resolve_params(config: Option<&Path>) -> Result<FractalParams, ConfigError> {
    match config {
        Some(path) => {
            let params = load_params(path)?;
            info!("Loaded parameters from {}", path.display());
            Ok(params)
        }
        None => {
            info!("No configuration given, using defaults");
            Ok(FractalParams::default())
        }
    }
}

pub struct RenderController<P: FramePresenterPort> {
    presenter: P,
    strategy: RenderStrategy,
}

impl<P: FramePresenterPort> RenderController<P> {
    pub fn new(presenter: P, strategy: RenderStrategy) -> Self {
        Self {
            presenter,
            strategy,
        }
    }

    /// Resolves parameters, renders one frame and hands it to the presenter.
    pub fn run(&self, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
        let params = resolve_params(config)?;
        let raster = self.render(&params);

        self.presenter.present(&raster, &window_title(config))?;

        Ok(())
    }

    pub fn render(&self, params: &FractalParams) -> Raster {
        info!("Rendering {} set...", params.display_name());
        info!("Image size: {}x{}", params.width, params.height);
        info!("Max iterations: {}", params.max_iterations);
        info!("Strategy: {}", self.strategy);

        if params.x_range.is_inverted() || params.y_range.is_inverted() {
            debug!("Inverted plane range, the image is mirrored");
        }

        let start = Instant::now();
        let raster = render_frame(params, self.strategy);

        info!("Duration: {:?}", start.elapsed());

        raster
    }
}
