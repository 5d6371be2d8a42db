pub mod colour;
pub mod complex;
pub mod dimensions;
pub mod fractal_params;
pub mod point;
pub mod range;
pub mod raster;
