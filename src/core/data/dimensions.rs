use crate::core::data::point::Point;

/// Size of a pixel grid anchored at the origin.
///
/// Either side may be zero, which describes an empty grid rather than an
/// error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major offset of `point`, or `None` when it falls outside the grid.
    #[must_use]
    pub fn offset_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }

    /// Points of one row, left to right.
    pub fn row(self, y: u32) -> impl Iterator<Item = Point> {
        (0..self.width).map(move |x| Point { x, y })
    }

    /// All points in row-major order.
    pub fn points(self) -> impl Iterator<Item = Point> {
        let width = self.width;

        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
