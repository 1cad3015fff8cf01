use super::*;

impl GridIndex {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn is_empty(&self) -> bool { self.size == 0 }

    // === Index conversion ===

    /// Raw linear index. No bounds checking: callers validate the result
    /// (or use `checked_index`) before touching an array.
    #[inline]
    pub fn index(&self, col: i64, row: i64) -> i64 {
        col + row * self.width as i64
    }

    /// Linear index of an in-grid cell, `None` for anything off the grid.
    /// Each axis is checked separately so an off-grid column never wraps
    /// into the previous or next row.
    #[inline]
    pub fn checked_index(&self, col: i64, row: i64) -> Option<usize> {
        if self.in_bounds(col, row) {
            Some(self.index(col, row) as usize)
        } else {
            None
        }
    }

    /// (row, col) of an in-range linear index
    #[inline]
    pub fn coords(&self, idx: usize) -> GridCell {
        let width = self.width.max(1) as usize;
        ((idx / width) as i32, (idx % width) as i32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, col: i64, row: i64) -> bool {
        col >= 0 && col < self.width as i64 && row >= 0 && row < self.height as i64
    }
}
