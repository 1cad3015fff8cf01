use crate::domain::config::{validate_brush, validate_threshold, BrushDirection, NeighborWindow};

use super::perf_stats::PerfStats;
use super::FieldCore;

pub(super) fn set_brush(field: &mut FieldCore, radius: u32, delta: f64) -> Result<(), String> {
    validate_brush(radius, delta)?;
    field.config.brush.radius = radius;
    field.config.brush.delta = delta;
    Ok(())
}

pub(super) fn set_direction(field: &mut FieldCore, increase: bool) {
    field.config.brush.direction = BrushDirection::from_increase(increase);
}

pub(super) fn set_collision_threshold(field: &mut FieldCore, threshold: f64) -> Result<(), String> {
    validate_threshold(threshold)?;
    field.config.collision_threshold = threshold;
    Ok(())
}

pub(super) fn set_neighbor_window(field: &mut FieldCore, window: NeighborWindow) {
    field.config.neighbor_window = window;
}

pub(super) fn enable_perf_metrics(field: &mut FieldCore, enabled: bool) {
    field.perf_enabled = enabled;
    if !enabled {
        field.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(field: &FieldCore) -> PerfStats {
    field.perf_stats.clone()
}
