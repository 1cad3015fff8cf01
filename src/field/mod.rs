//! Potential field engine
//!
//! Owns a scalar field (one value per cell, `[0, 1]`, reset to `1.0` on
//! every map load) next to a read-only occupancy array. Callers paint the
//! field with a disk brush and ask for greedy descent paths over it.
//!
//! - load/     - map install and field reset
//! - brush/    - occupancy-aware brush edits
//! - descent/  - neighbour window and steepest-descent walk
//! - init/     - construction and configuration mutators
//! - perf/     - optional timing counters
//!
//! Blocked cells (occupancy above the collision threshold) are never written
//! by the brush and never entered by descent.

use std::fmt;

use crate::domain::config::{BrushConfig, FieldConfig, NeighborWindow};
use crate::domain::map::OccupancyMap;
use crate::grid::{GridCell, GridIndex};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "load/load.rs"]
mod load;
#[path = "brush/brush.rs"]
mod brush;
#[path = "descent/descent.rs"]
mod descent;
mod facade;

pub use facade::PotentialFieldEngine;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Field value installed in every cell on load/reset
pub const FIELD_INITIAL_VALUE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// No map has been loaded yet
    NotLoaded,
    /// Width or height is zero
    EmptyGrid,
    /// Occupancy length does not match `width * height`
    DimensionMismatch { expected: usize, actual: usize },
    /// Coordinates outside the loaded grid
    OutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NotLoaded => write!(f, "no map loaded"),
            FieldError::EmptyGrid => write!(f, "map dimensions must be non-zero"),
            FieldError::DimensionMismatch { expected, actual } => write!(
                f,
                "occupancy has {} cells, map dimensions need {}",
                actual, expected
            ),
            FieldError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the map", row, col)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// One changed cell, reported back for redraw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellUpdate {
    pub row: i32,
    pub col: i32,
    pub value: f64,
}

/// The potential field engine state
pub struct FieldCore {
    grid: GridIndex,
    occupancy: Vec<f64>,
    field: Vec<f64>,
    config: FieldConfig,

    // Header metadata of the last map loaded through `load_map`
    map_origin: (f64, f64),
    meters_per_cell: f64,

    // Reused between calls
    updates: Vec<CellUpdate>,
    neighbor_scratch: Vec<GridCell>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Default for FieldCore {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl FieldCore {
    pub fn new(config: FieldConfig) -> Self {
        init::create_field_core(config)
    }

    /// Install an occupancy array and reset the field to all `1.0`.
    /// On error the previously loaded map (if any) is kept.
    pub fn load(&mut self, occupancy: Vec<f64>, width: u32, height: u32) -> Result<(), FieldError> {
        load::load(self, occupancy, width, height)
    }

    pub fn load_map(&mut self, map: &OccupancyMap) -> Result<(), FieldError> {
        load::load_map(self, map)
    }

    /// Refill the field with `1.0`, keeping the occupancy
    pub fn reset(&mut self) {
        load::reset(self)
    }

    pub fn is_loaded(&self) -> bool { !self.grid.is_empty() }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn grid(&self) -> &GridIndex { &self.grid }

    pub fn field(&self) -> &[f64] { &self.field }

    pub fn occupancy(&self) -> &[f64] { &self.occupancy }

    pub fn config(&self) -> &FieldConfig { &self.config }

    pub fn map_origin(&self) -> (f64, f64) { self.map_origin }

    pub fn meters_per_cell(&self) -> f64 { self.meters_per_cell }

    // === Configuration ===

    /// Rejects a zero radius or a delta outside `(0, 1]`; config is unchanged on error
    pub fn set_brush(&mut self, radius: u32, delta: f64) -> Result<(), String> {
        settings::set_brush(self, radius, delta)
    }

    pub fn set_direction(&mut self, increase: bool) {
        settings::set_direction(self, increase);
    }

    pub fn set_collision_threshold(&mut self, threshold: f64) -> Result<(), String> {
        settings::set_collision_threshold(self, threshold)
    }

    pub fn set_neighbor_window(&mut self, window: NeighborWindow) {
        settings::set_neighbor_window(self, window);
    }

    pub fn brush(&self) -> BrushConfig { self.config.brush }

    pub fn collision_threshold(&self) -> f64 { self.config.collision_threshold }

    /// Enable or disable per-call timing (adds timer overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Occupancy queries ===

    /// `occupancy[idx] > collision_threshold`. Indices with no occupancy
    /// cell behind them count as blocked.
    #[inline]
    pub fn is_blocked(&self, idx: usize) -> bool {
        self.occupancy
            .get(idx)
            .map_or(true, |&odds| odds > self.config.collision_threshold)
    }

    pub fn is_cell_blocked(&self, row: i32, col: i32) -> bool {
        match self.grid.checked_index(col as i64, row as i64) {
            Some(idx) => self.is_blocked(idx),
            None => true,
        }
    }

    /// A goal must be on the map with occupancy strictly below the threshold
    pub fn is_valid_goal(&self, row: i32, col: i32) -> bool {
        self.grid
            .checked_index(col as i64, row as i64)
            .and_then(|idx| self.occupancy.get(idx))
            .map_or(false, |&odds| odds < self.config.collision_threshold)
    }

    pub fn value_at(&self, row: i32, col: i32) -> Option<f64> {
        let idx = self.grid.checked_index(col as i64, row as i64)?;
        self.field.get(idx).copied()
    }

    // === Editing and queries ===

    /// Paint the brush disk centred on (row, col). Returns the cells whose
    /// value changed; valid until the next call.
    pub fn apply_brush(&mut self, center_row: i32, center_col: i32) -> &[CellUpdate] {
        brush::apply_brush(self, center_row, center_col);
        &self.updates
    }

    /// Every free cell with its current value (full redraw)
    pub fn field_cells(&self) -> Vec<CellUpdate> {
        brush::field_cells(self)
    }

    /// In-grid cells of the descent window around (row, col), scan order
    pub fn neighbors8(&self, row: i32, col: i32) -> Vec<GridCell> {
        let mut out = Vec::with_capacity(16);
        descent::neighbors_into(&self.grid, self.config.neighbor_window, row, col, &mut out);
        out
    }

    /// Greedy steepest-descent walk from (row, col) to a local minimum
    pub fn gradient_descent(&mut self, start_row: i32, start_col: i32) -> Result<Vec<GridCell>, FieldError> {
        descent::gradient_descent(self, start_row, start_col)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
