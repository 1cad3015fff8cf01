use wasm_bindgen::prelude::*;

use crate::domain::config::FieldConfig;
use crate::domain::map::OccupancyMap;

use super::perf_stats::PerfStats;
use super::FieldCore;

#[wasm_bindgen]
pub struct PotentialFieldEngine {
    core: FieldCore,
}

impl Default for PotentialFieldEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PotentialFieldEngine {
    /// Borrow the native core (tests and non-JS embedders)
    pub fn core(&self) -> &FieldCore {
        &self.core
    }
}

#[wasm_bindgen]
impl PotentialFieldEngine {
    /// Create an engine with default threshold and brush
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: FieldCore::new(FieldConfig::default()),
        }
    }

    /// Create an engine from a JSON config (missing keys take defaults)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<PotentialFieldEngine, JsValue> {
        let config = FieldConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: FieldCore::new(config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn loaded(&self) -> bool { self.core.is_loaded() }

    /// Install a normalized occupancy array; resets the field to all 1.0
    pub fn load(&mut self, occupancy: Vec<f64>, width: u32, height: u32) -> Result<(), JsValue> {
        self.core
            .load(occupancy, width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Parse a map file's text and load it
    pub fn load_map_text(&mut self, text: String) -> Result<(), JsValue> {
        let map = OccupancyMap::parse(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core
            .load_map(&map)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Refill the field with 1.0
    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === Map metadata ===

    #[wasm_bindgen(getter)]
    pub fn origin_x(&self) -> f64 { self.core.map_origin().0 }

    #[wasm_bindgen(getter)]
    pub fn origin_y(&self) -> f64 { self.core.map_origin().1 }

    #[wasm_bindgen(getter)]
    pub fn meters_per_cell(&self) -> f64 { self.core.meters_per_cell() }

    // === Configuration ===

    pub fn set_brush(&mut self, radius: u32, delta: f64) -> Result<(), JsValue> {
        self.core
            .set_brush(radius, delta)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_direction(&mut self, increase: bool) {
        self.core.set_direction(increase);
    }

    pub fn set_collision_threshold(&mut self, threshold: f64) -> Result<(), JsValue> {
        self.core
            .set_collision_threshold(threshold)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn brush_radius(&self) -> u32 { self.core.brush().radius }

    #[wasm_bindgen(getter)]
    pub fn brush_delta(&self) -> f64 { self.core.brush().delta }

    #[wasm_bindgen(getter)]
    pub fn collision_threshold(&self) -> f64 { self.core.collision_threshold() }

    /// Active configuration as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === Editing ===

    /// Apply one brush stamp at (row, col)
    /// Returns changed cells flattened as [row, col, value, row, col, value, ...]
    pub fn apply_brush(&mut self, row: i32, col: i32) -> Vec<f64> {
        let updates = self.core.apply_brush(row, col);
        let mut out = Vec::with_capacity(updates.len() * 3);
        for u in updates {
            out.extend_from_slice(&[u.row as f64, u.col as f64, u.value]);
        }
        out
    }

    /// All free cells flattened as [row, col, value, ...] for a full redraw
    pub fn field_cells(&self) -> Vec<f64> {
        let cells = self.core.field_cells();
        let mut out = Vec::with_capacity(cells.len() * 3);
        for c in &cells {
            out.extend_from_slice(&[c.row as f64, c.col as f64, c.value]);
        }
        out
    }

    /// Get pointer to the field array (row-major f64, for zero-copy reads)
    pub fn field_ptr(&self) -> *const f64 {
        self.core.field().as_ptr()
    }

    /// Get field array length in elements
    pub fn field_len(&self) -> usize {
        self.core.field().len()
    }

    // === Queries ===

    /// Steepest-descent path from (row, col)
    /// Returns cells flattened as [row, col, row, col, ...], start first
    pub fn gradient_descent(&mut self, row: i32, col: i32) -> Result<Vec<i32>, JsValue> {
        let path = self
            .core
            .gradient_descent(row, col)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(path.into_iter().flat_map(|(r, c)| [r, c]).collect())
    }

    pub fn is_blocked(&self, row: i32, col: i32) -> bool {
        self.core.is_cell_blocked(row, col)
    }

    pub fn is_valid_goal(&self, row: i32, col: i32) -> bool {
        self.core.is_valid_goal(row, col)
    }

    // === Perf ===

    /// Enable or disable per-call perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get the latest perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
