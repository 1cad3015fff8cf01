//! Core utilities shared by every module.

#[macro_use]
pub mod console;
