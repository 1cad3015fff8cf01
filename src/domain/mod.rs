//! Domain types: engine configuration and occupancy map files.

pub mod config;
pub mod map;
