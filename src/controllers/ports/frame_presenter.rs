use crate::core::data::raster::Raster;

/// Somewhere a finished raster can be shown.
pub trait FramePresenterPort {
    type Error: std::error::Error + 'static;

    fn present(&self, raster: &Raster, title: &str) -> Result<(), Self::Error>;
}
