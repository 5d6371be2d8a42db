#[cfg(feature = "gui")]
mod adapters;
mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::ports::frame_presenter::FramePresenterPort;
pub use crate::controllers::render::{RenderController, resolve_params, window_title};
pub use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::{RenderStrategy, iteration_counts, render_frame};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::dimensions::Dimensions;
pub use crate::core::data::fractal_params::FractalParams;
pub use crate::core::data::point::Point;
pub use crate::core::data::range::Range;
pub use crate::core::data::raster::{Raster, RasterError};
pub use crate::core::fractals::colour_mapping::four_band_gradient::{FourBandGradient, colour_of};
pub use crate::core::fractals::escape_time::escape_iterations;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::presenters::headless::presenter::{LogPresenter, distinct_colours};
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::errors::PresentError;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::presenter::PixelsPresenter;
pub use crate::storage::ini_params::{ConfigError, load_params, parse_params};
