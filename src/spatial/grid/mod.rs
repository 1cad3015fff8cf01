//! Grid - linear addressing for a rectangular cell grid
//!
//! Maps (col, row) pairs to a flat row-major index: `idx = col + row * width`.
//! The grid only knows its dimensions. Field and occupancy arrays live with
//! their owners, who size them from `size()`.

mod indexing;

/// A (row, col) cell coordinate as exchanged with callers.
pub type GridCell = (i32, i32);

/// Row-major grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridIndex {
    width: u32,
    height: u32,
    size: usize,
}

impl GridIndex {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            size: (width as usize).saturating_mul(height as usize),
        }
    }

    /// Replace the stored dimensions. No data arrays are touched.
    pub fn set_size(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }
}
