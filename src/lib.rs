//! Potential Field Engine - occupancy-aware potential field editing in WASM
//!
//! A map loader hands the engine a normalized occupancy grid. The user then
//! paints a scalar field over free cells with a disk brush and asks for
//! greedy steepest-descent paths across it. Rendering stays in JS.
//!
//! Architecture:
//! - core/     - console logging macros
//! - spatial/  - row-major grid addressing
//! - domain/   - engine config and map file parsing
//! - field/    - the field engine and its JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod field;

pub use spatial::grid;
pub use domain::config;
pub use domain::map;

#[doc(hidden)]
pub use web_sys;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Potential field engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use config::{BrushConfig, BrushDirection, FieldConfig, NeighborWindow};
pub use field::{CellUpdate, FieldCore, FieldError, PerfStats, PotentialFieldEngine};
pub use grid::{GridCell, GridIndex};
pub use map::{MapError, OccupancyMap};
