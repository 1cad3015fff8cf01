use crate::domain::config::NeighborWindow;
use crate::grid::{GridCell, GridIndex};

use super::{FieldCore, FieldError, PerfTimer};

/// Fill `out` with the in-grid cells of the window around (row, col), in
/// row-major scan order. Descent tie-breaking depends on this order.
///
/// `Legacy` covers `row-1..=row+2` x `col-1..=col+2` and includes the
/// centre cell; `Moore` is the 3x3 block minus the centre.
pub(super) fn neighbors_into(
    grid: &GridIndex,
    window: NeighborWindow,
    row: i32,
    col: i32,
    out: &mut Vec<GridCell>,
) {
    out.clear();
    let (lo, hi) = match window {
        NeighborWindow::Legacy => (-1i64, 2i64),
        NeighborWindow::Moore => (-1i64, 1i64),
    };
    let (row, col) = (row as i64, col as i64);

    for r in (row + lo)..=(row + hi) {
        for c in (col + lo)..=(col + hi) {
            if window == NeighborWindow::Moore && r == row && c == col {
                continue;
            }
            if grid.in_bounds(c, r) {
                out.push((r as i32, c as i32));
            }
        }
    }
}

/// Walk to the window cell with the most negative field delta until no
/// free cell is strictly lower.
///
/// Every move lands on a strictly lower value, so no cell is visited twice
/// and the walk is bounded by the cell count.
pub(super) fn gradient_descent(
    field: &mut FieldCore,
    start_row: i32,
    start_col: i32,
) -> Result<Vec<GridCell>, FieldError> {
    if !field.is_loaded() {
        return Err(FieldError::NotLoaded);
    }
    let mut current_idx = field
        .grid
        .checked_index(start_col as i64, start_row as i64)
        .ok_or(FieldError::OutOfBounds { row: start_row, col: start_col })?;

    let timer = PerfTimer::start_if(field.perf_enabled);

    let window = field.config.neighbor_window;
    let mut nbrs = std::mem::take(&mut field.neighbor_scratch);
    let mut current = (start_row, start_col);
    let mut path = vec![current];

    for _ in 0..field.grid.size() {
        neighbors_into(&field.grid, window, current.0, current.1, &mut nbrs);

        let here = field.field[current_idx];
        let mut best_delta = 0.0;
        let mut best = None;
        for &(r, c) in nbrs.iter() {
            let Some(idx) = field.grid.checked_index(c as i64, r as i64) else {
                continue;
            };
            if field.is_blocked(idx) {
                continue;
            }
            let grad = field.field[idx] - here;
            if grad < best_delta {
                best_delta = grad;
                best = Some(((r, c), idx));
            }
        }

        match best {
            Some((cell, idx)) => {
                current = cell;
                current_idx = idx;
                path.push(cell);
            }
            None => break,
        }
    }

    field.neighbor_scratch = nbrs;

    if let Some(t) = timer {
        field.perf_stats.descent_ms = t.elapsed_ms();
        field.perf_stats.path_len = path.len() as u32;
        field.perf_stats.descent_calls += 1;
    }

    Ok(path)
}
