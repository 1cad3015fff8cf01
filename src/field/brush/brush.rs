use super::{CellUpdate, FieldCore, PerfTimer};

/// Paint one brush stamp.
///
/// Scans the half-open square `[c - r, c + r)` on both axes and keeps cells
/// with `dr^2 + dc^2 <= r^2`. The open upper bound drops the bottom row and
/// right column of the disk.
pub(super) fn apply_brush(field: &mut FieldCore, center_row: i32, center_col: i32) {
    field.updates.clear();
    if !field.is_loaded() {
        return;
    }

    let timer = PerfTimer::start_if(field.perf_enabled);

    let brush = field.config.brush;
    let radius = brush.radius as i64;
    let r2 = (radius as i128) * (radius as i128);
    let step = brush.direction.sign() * brush.delta;
    let (cr, cc) = (center_row as i64, center_col as i64);

    // Only the part of the square that overlaps the grid is scanned.
    let rows = (cr - radius).max(0)..(cr + radius).min(field.grid.height() as i64);
    let cols = (cc - radius).max(0)..(cc + radius).min(field.grid.width() as i64);

    for row in rows {
        for col in cols.clone() {
            let (dr, dc) = ((row - cr) as i128, (col - cc) as i128);
            if dr * dr + dc * dc > r2 {
                continue;
            }

            let Some(idx) = field.grid.checked_index(col, row) else {
                continue;
            };
            if field.is_blocked(idx) {
                continue;
            }

            let old = field.field[idx];
            let value = (old + step).clamp(0.0, 1.0);
            if value == old {
                continue;
            }
            field.field[idx] = value;
            field.updates.push(CellUpdate {
                row: row as i32,
                col: col as i32,
                value,
            });
        }
    }

    if let Some(t) = timer {
        field.perf_stats.brush_ms = t.elapsed_ms();
        field.perf_stats.cells_updated = field.updates.len() as u32;
        field.perf_stats.brush_calls += 1;
    }
}

pub(super) fn field_cells(field: &FieldCore) -> Vec<CellUpdate> {
    let mut cells = Vec::with_capacity(field.field.len());
    for (idx, &value) in field.field.iter().enumerate() {
        if field.is_blocked(idx) {
            continue;
        }
        let (row, col) = field.grid.coords(idx);
        cells.push(CellUpdate { row, col, value });
    }
    cells
}
