//! Pixel format conversion for presentation surfaces.

use crate::core::data::raster::{BYTES_PER_PIXEL, Raster, RasterError};

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Copies an RGB raster into an RGBA frame, setting alpha to 255.
///
/// `frame` must hold exactly four bytes for every pixel of the raster.
pub fn copy_raster_to_rgba(raster: &Raster, frame: &mut [u8]) -> Result<(), RasterError> {
    let expected_size = raster.dimensions().size() * RGBA_BYTES_PER_PIXEL;

    if frame.len() != expected_size {
        return Err(RasterError::BoundsMismatch {
            expected_size,
            buffer_size: frame.len(),
        });
    }

    for (src, dst) in raster
        .buffer()
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(frame.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst[..BYTES_PER_PIXEL].copy_from_slice(src);
        dst[BYTES_PER_PIXEL] = 255;
    }

    Ok(())
}
