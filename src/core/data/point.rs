/// Integer pixel coordinate: `x` is the column, `y` the row (growing downward).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
