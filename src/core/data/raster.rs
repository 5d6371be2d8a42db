use crate::core::data::colour::Colour;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn dimensions_to_buffer_size(dimensions: Dimensions) -> usize {
    dimensions.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "raster needs {} bytes but buffer holds {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for RasterError {}

pub type RasterData = Vec<u8>;

/// A finished grid of RGB pixels, three bytes per pixel in row-major order.
///
/// A raster is produced whole by one render pass and moved to the caller;
/// there is no way to observe one half-written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    dimensions: Dimensions,
    buffer: RasterData,
}

impl Raster {
    /// A raster of the given size with every pixel black.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            buffer: vec![0; dimensions_to_buffer_size(dimensions)],
        }
    }

    /// Fills a raster from row-major colours.
    ///
    /// Pixels past the end of `colours` stay black and colours past the last
    /// pixel are dropped, so the result always has exactly `dimensions`.
    #[must_use]
    pub fn from_colours(dimensions: Dimensions, colours: impl IntoIterator<Item = Colour>) -> Self {
        let mut raster = Self::new(dimensions);

        for (pixel, Colour { r, g, b }) in raster
            .buffer
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(colours)
        {
            pixel.copy_from_slice(&[r, g, b]);
        }

        raster
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    #[must_use]
    pub fn buffer(&self) -> &RasterData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.dimensions.offset_of(pixel)? * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Iterates over the pixels as colours in row-major order.
    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|p| Colour {
                r: p[0],
                g: p[1],
                b: p[2],
            })
    }
}
