//! Occupancy map files
//!
//! Text format, whitespace separated:
//!
//! ```text
//! origin_x origin_y width height meters_per_cell
//! c00 c01 c02 ...
//! c10 c11 c12 ...
//! ```
//!
//! Cell lines hold raw integer occupancy counts in row-major order. They are
//! min-max normalized into `[0, 1]` on load so the engine can compare them
//! against a collision threshold directly.

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    Empty,
    ShortHeader { found: usize },
    InvalidHeader { field: &'static str, value: String },
    InvalidDimensions { width: f64, height: f64 },
    InvalidCell { line: usize, token: String },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Empty => write!(f, "map file is empty"),
            MapError::ShortHeader { found } => {
                write!(f, "map header needs 5 fields, found {}", found)
            }
            MapError::InvalidHeader { field, value } => {
                write!(f, "map header field {} is not a number: {:?}", field, value)
            }
            MapError::InvalidDimensions { width, height } => {
                write!(f, "map dimensions must be positive integers, got {}x{}", width, height)
            }
            MapError::InvalidCell { line, token } => {
                write!(f, "line {}: cell value {:?} is not an integer", line, token)
            }
        }
    }
}

impl std::error::Error for MapError {}

const HEADER_FIELDS: [&str; 5] = ["origin_x", "origin_y", "width", "height", "meters_per_cell"];

/// A parsed map: header metadata plus normalized occupancy
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyMap {
    pub origin: (f64, f64),
    pub width: u32,
    pub height: u32,
    pub meters_per_cell: f64,
    /// Normalized occupancy, row-major
    pub cells: Vec<f64>,
}

impl OccupancyMap {
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines = text.trim().lines();
        let header = lines.next().filter(|l| !l.trim().is_empty()).ok_or(MapError::Empty)?;

        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() < HEADER_FIELDS.len() {
            return Err(MapError::ShortHeader { found: fields.len() });
        }

        let mut values = [0.0f64; 5];
        for (i, name) in HEADER_FIELDS.into_iter().enumerate() {
            values[i] = fields[i].parse::<f64>().map_err(|_| MapError::InvalidHeader {
                field: name,
                value: fields[i].to_string(),
            })?;
        }
        let [origin_x, origin_y, width, height, meters_per_cell] = values;

        let (width, height) = match (dimension(width), dimension(height)) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(MapError::InvalidDimensions { width, height }),
        };

        let mut cells = Vec::new();
        for (n, line) in lines.enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            // Single-value lines are not cell rows.
            if tokens.len() <= 1 {
                continue;
            }
            for token in tokens {
                let raw = token.parse::<i64>().map_err(|_| MapError::InvalidCell {
                    line: n + 2,
                    token: token.to_string(),
                })?;
                cells.push(raw as f64);
            }
        }

        normalize_cells(&mut cells);

        let map = Self {
            origin: (origin_x, origin_y),
            width,
            height,
            meters_per_cell,
            cells,
        };

        if !map.has_expected_cell_count() {
            console_warn!(
                "Map has wrong number of cells: {} !== {}",
                map.cells.len(),
                map.expected_cell_count()
            );
        }

        Ok(map)
    }

    #[inline]
    pub fn expected_cell_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub fn has_expected_cell_count(&self) -> bool {
        self.cells.len() == self.expected_cell_count()
    }

    /// Edge length of one cell when the map is drawn `display_width` px wide
    pub fn cell_size_px(&self, display_width: f64) -> f64 {
        display_width / self.width as f64
    }

    pub fn pixels_per_meter(&self, display_width: f64) -> f64 {
        display_width / (self.width as f64 * self.meters_per_cell)
    }
}

fn dimension(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// Min-max normalize into `[0, 1]` in place.
///
/// Empty input is left alone, a single cell becomes `1.0`, and a uniform
/// input (no spread to divide by) becomes all `0.0`.
pub fn normalize_cells(cells: &mut [f64]) {
    match cells.len() {
        0 => return,
        1 => {
            cells[0] = 1.0;
            return;
        }
        _ => {}
    }

    let (min, max) = min_max(cells);
    let range = max - min;
    if range <= 0.0 {
        cells.fill(0.0);
        return;
    }

    #[cfg(feature = "parallel")]
    {
        cells.par_iter_mut().for_each(|v| *v = (*v - min) / range);
    }
    #[cfg(not(feature = "parallel"))]
    {
        cells.iter_mut().for_each(|v| *v = (*v - min) / range);
    }
}

fn min_max(cells: &[f64]) -> (f64, f64) {
    let init = (f64::INFINITY, f64::NEG_INFINITY);

    #[cfg(feature = "parallel")]
    {
        cells
            .par_iter()
            .fold(|| init, |(lo, hi), &v| (lo.min(v), hi.max(v)))
            .reduce(|| init, |a, b| (a.0.min(b.0), a.1.max(b.1)))
    }
    #[cfg(not(feature = "parallel"))]
    {
        cells
            .iter()
            .fold(init, |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}
