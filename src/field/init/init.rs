use crate::domain::config::FieldConfig;
use crate::grid::GridIndex;

use super::perf_stats::PerfStats;
use super::FieldCore;

pub(super) fn create_field_core(config: FieldConfig) -> FieldCore {
    FieldCore {
        grid: GridIndex::default(),
        occupancy: Vec::new(),
        field: Vec::new(),
        config,
        map_origin: (0.0, 0.0),
        meters_per_cell: 0.0,
        // Default brush (r=3) touches at most 36 cells.
        updates: Vec::with_capacity(64),
        neighbor_scratch: Vec::with_capacity(16),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
