use wasm_bindgen::prelude::*;

/// Timings and counters for the most recent brush stamp and descent query.
/// All zero while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) brush_ms: f64,
    pub(super) descent_ms: f64,
    pub(super) cells_updated: u32,
    pub(super) path_len: u32,
    pub(super) brush_calls: u32,
    pub(super) descent_calls: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn brush_ms(&self) -> f64 { self.brush_ms }
    #[wasm_bindgen(getter)]
    pub fn descent_ms(&self) -> f64 { self.descent_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_updated(&self) -> u32 { self.cells_updated }
    #[wasm_bindgen(getter)]
    pub fn path_len(&self) -> u32 { self.path_len }
    #[wasm_bindgen(getter)]
    pub fn brush_calls(&self) -> u32 { self.brush_calls }
    #[wasm_bindgen(getter)]
    pub fn descent_calls(&self) -> u32 { self.descent_calls }
}
