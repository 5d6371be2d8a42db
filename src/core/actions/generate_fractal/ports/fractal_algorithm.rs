use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;

/// Per-pixel computation driven by the frame generators.
///
/// Implementations must be pure: the result for a pixel may depend only on
/// the pixel and on state fixed at construction, so any traversal order and
/// any number of threads give the same output.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;

    fn dimensions(&self) -> Dimensions;
}
