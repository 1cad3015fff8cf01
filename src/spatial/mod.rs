//! Spatial addressing for row-major cell grids.

pub mod grid;
