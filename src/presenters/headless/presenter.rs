use std::collections::HashSet;
use std::convert::Infallible;

use log::info;

use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::raster::Raster;

/// Headless presenter: reports the finished frame through the log.
pub struct LogPresenter {}

impl FramePresenterPort for LogPresenter {
    type Error = Infallible;

    fn present(&self, raster: &Raster, title: &str) -> Result<(), Self::Error> {
        info!(
            "{}: {}x{} raster, {} distinct colours",
            title,
            raster.width(),
            raster.height(),
            distinct_colours(raster)
        );

        Ok(())
    }
}

impl Default for LogPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogPresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[must_use]
pub fn distinct_colours(raster: &Raster) -> usize {
    raster.colours().collect::<HashSet<_>>().len()
}
