use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::raster::Raster;

/// Colours row-major per-pixel values into a raster of the given size.
///
/// The raster always has `dimensions`; pixels without a value stay black.
pub fn generate_raster<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    dimensions: Dimensions,
) -> Raster {
    Raster::from_colours(dimensions, input.into_iter().map(|value| mapper.map(value)))
}
