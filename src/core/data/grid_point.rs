/// A cell in the square scan grid, `0 <= x, y < 2^resolution_exponent`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}
