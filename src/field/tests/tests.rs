use super::*;
use crate::domain::config::BrushDirection;

fn free_core(width: u32, height: u32) -> FieldCore {
    let mut core = FieldCore::default();
    core.load(vec![0.0; (width * height) as usize], width, height)
        .expect("free map should load");
    core
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[test]
fn load_resets_field_to_ones() {
    let mut core = free_core(4, 3);
    assert_eq!(core.field().len(), 12);
    assert!(core.field().iter().all(|&v| v == 1.0));

    core.set_brush(2, 0.5).unwrap();
    core.apply_brush(1, 1);
    assert!(core.field().iter().any(|&v| v < 1.0));

    // Reload discards edits entirely.
    core.load(vec![0.0; 6], 3, 2).unwrap();
    assert_eq!((core.width(), core.height()), (3, 2));
    assert_eq!(core.field(), &[1.0; 6]);
}

#[test]
fn load_rejects_dimension_mismatch_and_keeps_previous_map() {
    let mut core = free_core(2, 2);
    let err = core.load(vec![0.0; 5], 3, 2).unwrap_err();
    assert_eq!(err, FieldError::DimensionMismatch { expected: 6, actual: 5 });
    assert_eq!((core.width(), core.height()), (2, 2));
    assert_eq!(core.field().len(), 4);
}

#[test]
fn load_rejects_empty_grid() {
    let mut core = FieldCore::default();
    assert_eq!(core.load(vec![], 0, 4), Err(FieldError::EmptyGrid));
    assert_eq!(core.load(vec![], 4, 0), Err(FieldError::EmptyGrid));
    assert!(!core.is_loaded());
}

#[test]
fn reset_keeps_occupancy() {
    let mut occupancy = vec![0.0; 9];
    occupancy[4] = 1.0;
    let mut core = FieldCore::default();
    core.load(occupancy.clone(), 3, 3).unwrap();
    core.set_brush(2, 0.3).unwrap();
    core.apply_brush(1, 1);
    core.reset();
    assert_eq!(core.field(), &[1.0; 9]);
    assert_eq!(core.occupancy(), occupancy.as_slice());
}

#[test]
fn brush_radius_one_paints_lopsided_disk() {
    let mut core = free_core(5, 5);
    core.set_brush(1, 0.1).unwrap();
    core.set_direction(false);

    let updates = core.apply_brush(2, 2).to_vec();
    let cells: Vec<(i32, i32)> = updates.iter().map(|u| (u.row, u.col)).collect();
    assert_eq!(cells, vec![(1, 2), (2, 1), (2, 2)]);
    assert!(updates.iter().all(|u| approx(u.value, 0.9)));

    let field = core.field();
    assert!(approx(field[12], 0.9));
    assert!(approx(field[7], 0.9));
    assert!(approx(field[11], 0.9));
    // Half-open scan: row 3 and col 3 are never visited.
    assert_eq!(field[17], 1.0);
    assert_eq!(field[13], 1.0);
    // Diagonals fail the circle test.
    assert_eq!(field[6], 1.0);

    // Centre ties with (1,2) and (2,1): no strictly lower neighbour.
    assert_eq!(core.gradient_descent(2, 2).unwrap(), vec![(2, 2)]);
}

#[test]
fn default_brush_covers_expected_cells() {
    let mut core = free_core(20, 20);
    let count = core.apply_brush(10, 10).len();
    // dr, dc in [-3, 3) with dr^2 + dc^2 <= 9
    let mut expected = 0;
    for dr in -3i32..3 {
        for dc in -3i32..3 {
            if dr * dr + dc * dc <= 9 {
                expected += 1;
            }
        }
    }
    assert_eq!(count, expected);
    assert!(core.field().iter().all(|&v| v == 1.0 || approx(v, 0.99)));
}

#[test]
fn brush_never_writes_blocked_cells() {
    let mut occupancy = vec![0.0; 9];
    occupancy[4] = 0.9;
    let mut core = FieldCore::default();
    core.load(occupancy, 3, 3).unwrap();
    core.set_brush(1, 0.1).unwrap();

    let updates = core.apply_brush(1, 1).to_vec();
    let cells: Vec<(i32, i32)> = updates.iter().map(|u| (u.row, u.col)).collect();
    assert_eq!(cells, vec![(0, 1), (1, 0)]);
    assert_eq!(core.field()[4], 1.0);
}

#[test]
fn brush_clamps_and_reports_only_changes() {
    let mut core = free_core(5, 5);
    core.set_brush(2, 0.4).unwrap();

    // Already saturated at 1.0: nothing changes.
    core.set_direction(true);
    assert!(core.apply_brush(2, 2).is_empty());

    core.set_direction(false);
    for _ in 0..3 {
        core.apply_brush(2, 2);
    }
    assert_eq!(core.field()[12], 0.0);
    assert!(core.field().iter().all(|&v| (0.0..=1.0).contains(&v)));

    // Floor reached: a further decrease reports nothing.
    assert!(core.apply_brush(2, 2).is_empty());
}

#[test]
fn brush_increase_then_decrease_restores_values() {
    let mut core = free_core(9, 9);
    core.set_brush(3, 0.05).unwrap();
    core.set_direction(false);
    for _ in 0..4 {
        core.apply_brush(4, 4);
    }
    let before = core.field().to_vec();

    core.set_direction(true);
    for _ in 0..3 {
        core.apply_brush(4, 4);
    }
    core.set_direction(false);
    for _ in 0..3 {
        core.apply_brush(4, 4);
    }

    for (a, b) in core.field().iter().zip(before.iter()) {
        assert!(approx(*a, *b), "{} != {}", a, b);
    }
}

#[test]
fn brush_off_grid_does_not_wrap_rows() {
    let mut core = free_core(5, 5);
    core.set_brush(2, 0.1).unwrap();

    let updates = core.apply_brush(1, -1).to_vec();
    let cells: Vec<(i32, i32)> = updates.iter().map(|u| (u.row, u.col)).collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0)]);
    for row in 0..5 {
        assert_eq!(core.value_at(row, 4), Some(1.0));
    }
}

#[test]
fn brush_without_map_is_noop() {
    let mut core = FieldCore::default();
    assert!(core.apply_brush(0, 0).is_empty());
    assert!(core.field().is_empty());
}

#[test]
fn legacy_window_scans_four_by_four() {
    let core = free_core(5, 5);
    let nbrs = core.neighbors8(2, 2);
    assert_eq!(nbrs.len(), 16);
    assert_eq!(nbrs.first(), Some(&(1, 1)));
    assert_eq!(nbrs.last(), Some(&(4, 4)));
    assert!(nbrs.contains(&(2, 2)));

    assert_eq!(core.neighbors8(0, 0).len(), 9);
    assert_eq!(core.neighbors8(4, 4), vec![(3, 3), (3, 4), (4, 3), (4, 4)]);
}

#[test]
fn moore_window_is_true_eight_neighbours() {
    let mut core = free_core(5, 5);
    core.set_neighbor_window(NeighborWindow::Moore);
    let nbrs = core.neighbors8(2, 2);
    assert_eq!(nbrs.len(), 8);
    assert!(!nbrs.contains(&(2, 2)));
    assert_eq!(core.neighbors8(0, 0), vec![(0, 1), (1, 0), (1, 1)]);
}

#[test]
fn legacy_descent_strides_toward_lower_cells() {
    let mut core = free_core(6, 1);
    core.field = vec![0.5, 0.4, 0.3, 0.2, 0.1, 0.0];

    let path = core.gradient_descent(0, 0).unwrap();
    assert_eq!(path, vec![(0, 0), (0, 2), (0, 4), (0, 5)]);

    core.set_neighbor_window(NeighborWindow::Moore);
    let path = core.gradient_descent(0, 0).unwrap();
    assert_eq!(path.len(), 6);
    assert_eq!(path.last(), Some(&(0, 5)));
}

#[test]
fn descent_walks_back_down_a_ramp() {
    let mut core = free_core(6, 1);
    core.field = vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5];

    // Only one cell behind the current one is in the window, so it steps by one.
    let path = core.gradient_descent(0, 5).unwrap();
    assert_eq!(path, vec![(0, 5), (0, 4), (0, 3), (0, 2), (0, 1), (0, 0)]);
}

#[test]
fn descent_ties_go_to_first_in_scan_order() {
    for window in [NeighborWindow::Legacy, NeighborWindow::Moore] {
        let mut core = free_core(3, 3);
        core.set_neighbor_window(window);
        core.field[1] = 0.5; // (0, 1)
        core.field[3] = 0.5; // (1, 0)
        assert_eq!(core.gradient_descent(1, 1).unwrap(), vec![(1, 1), (0, 1)]);
    }
}

#[test]
fn descent_never_enters_blocked_cells() {
    let mut occupancy = vec![0.0; 9];
    occupancy[1] = 1.0; // (0, 1)
    let mut core = FieldCore::default();
    core.load(occupancy, 3, 3).unwrap();
    core.field[1] = 0.0;
    core.field[3] = 0.5; // (1, 0)

    let path = core.gradient_descent(1, 1).unwrap();
    assert_eq!(path, vec![(1, 1), (1, 0)]);
}

#[test]
fn descent_surrounded_by_obstacles_stays_put() {
    let mut occupancy = vec![1.0; 9];
    occupancy[4] = 0.0;
    let mut core = FieldCore::default();
    core.load(occupancy, 3, 3).unwrap();
    core.field = vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];

    assert_eq!(core.gradient_descent(1, 1).unwrap(), vec![(1, 1)]);
}

#[test]
fn descent_on_flat_field_returns_start() {
    let mut core = free_core(4, 4);
    assert_eq!(core.gradient_descent(3, 0).unwrap(), vec![(3, 0)]);
}

#[test]
fn descent_errors() {
    let mut core = FieldCore::default();
    assert_eq!(core.gradient_descent(0, 0), Err(FieldError::NotLoaded));

    let mut core = free_core(3, 3);
    assert_eq!(
        core.gradient_descent(3, 0),
        Err(FieldError::OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(
        core.gradient_descent(0, -1),
        Err(FieldError::OutOfBounds { row: 0, col: -1 })
    );
}

#[test]
fn random_strokes_keep_invariants() {
    let (w, h) = (24u32, 18u32);
    let mut rng = 12345u32;
    let occupancy: Vec<f64> = (0..w * h)
        .map(|_| if xorshift32(&mut rng) % 7 == 0 { 1.0 } else { 0.0 })
        .collect();

    let mut core = FieldCore::default();
    core.load(occupancy.clone(), w, h).unwrap();

    for _ in 0..300 {
        let row = (xorshift32(&mut rng) % (h + 4)) as i32 - 2;
        let col = (xorshift32(&mut rng) % (w + 4)) as i32 - 2;
        let radius = 1 + xorshift32(&mut rng) % 4;
        core.set_brush(radius, 0.07).unwrap();
        core.set_direction(xorshift32(&mut rng) % 3 == 0);
        core.apply_brush(row, col);
    }

    for (i, &v) in core.field().iter().enumerate() {
        assert!((0.0..=1.0).contains(&v));
        if occupancy[i] > 0.5 {
            assert_eq!(v, 1.0, "blocked cell {} was written", i);
        }
    }

    for start in 0..(w * h) as usize {
        let (row, col) = core.grid().coords(start);
        let path = core.gradient_descent(row, col).unwrap();
        assert_eq!(path[0], (row, col));
        for pair in path.windows(2) {
            let a = core.value_at(pair[0].0, pair[0].1).unwrap();
            let b = core.value_at(pair[1].0, pair[1].1).unwrap();
            assert!(b < a);
            assert!(!core.is_cell_blocked(pair[1].0, pair[1].1));
        }
    }
}

#[test]
fn field_cells_skip_blocked() {
    let mut occupancy = vec![0.0; 6];
    occupancy[0] = 0.8;
    occupancy[5] = 0.51;
    let mut core = FieldCore::default();
    core.load(occupancy, 3, 2).unwrap();

    let cells = core.field_cells();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0], CellUpdate { row: 0, col: 1, value: 1.0 });
    assert_eq!(cells[3], CellUpdate { row: 1, col: 1, value: 1.0 });
}

#[test]
fn goal_validity_and_threshold() {
    let mut occupancy = vec![0.0; 4];
    occupancy[3] = 0.6;
    let mut core = FieldCore::default();
    core.load(occupancy, 2, 2).unwrap();

    assert!(core.is_valid_goal(0, 0));
    assert!(!core.is_valid_goal(1, 1));
    assert!(!core.is_valid_goal(2, 0));
    assert!(!core.is_valid_goal(0, -1));

    core.set_collision_threshold(0.7).unwrap();
    assert!(core.is_valid_goal(1, 1));
    assert!(!core.is_blocked(3));
    assert!(core.is_blocked(99));
}

#[test]
fn configuration_mutators() {
    let mut core = FieldCore::default();
    core.set_brush(7, 0.2).unwrap();
    core.set_direction(true);
    let brush = core.brush();
    assert_eq!(brush.radius, 7);
    assert_eq!(brush.delta, 0.2);
    assert_eq!(brush.direction, BrushDirection::Increase);
    core.set_direction(false);
    assert_eq!(core.brush().direction, BrushDirection::Decrease);
}

#[test]
fn load_map_keeps_header_metadata() {
    let map = OccupancyMap::parse("1.5 -2 2 2 0.05\n0 0\n0 10\n").unwrap();
    let mut core = FieldCore::default();
    core.load_map(&map).unwrap();
    assert_eq!(core.map_origin(), (1.5, -2.0));
    assert_eq!(core.meters_per_cell(), 0.05);
    assert!(core.is_cell_blocked(1, 1));

    // Plain loads carry no header.
    core.load(vec![0.0; 4], 2, 2).unwrap();
    assert_eq!(core.meters_per_cell(), 0.0);
}

#[test]
fn perf_stats_track_calls() {
    let mut core = free_core(8, 8);
    assert_eq!(core.get_perf_stats().brush_calls(), 0);

    core.apply_brush(4, 4);
    assert_eq!(core.get_perf_stats().brush_calls(), 0);

    core.enable_perf_metrics(true);
    let changed = core.apply_brush(4, 4).len() as u32;
    core.gradient_descent(7, 7).unwrap();

    let stats = core.get_perf_stats();
    assert_eq!(stats.brush_calls(), 1);
    assert_eq!(stats.cells_updated(), changed);
    assert_eq!(stats.descent_calls(), 1);
    assert!(stats.path_len() >= 1);
    assert!(stats.brush_ms() >= 0.0);

    core.enable_perf_metrics(false);
    assert_eq!(core.get_perf_stats().descent_calls(), 0);
}

#[test]
fn set_brush_rejects_bad_values_and_keeps_config() {
    let mut core = free_core(5, 5);
    core.set_brush(1, 0.1).unwrap();

    assert!(core.set_brush(1, f64::NAN).is_err());
    assert!(core.set_brush(1, 0.0).is_err());
    assert!(core.set_brush(1, 1.5).is_err());
    assert!(core.set_brush(0, 0.5).is_err());
    assert_eq!(core.brush().radius, 1);
    assert_eq!(core.brush().delta, 0.1);

    let updates = core.apply_brush(2, 2).to_vec();
    assert_eq!(updates.len(), 3);
    assert!(core.field().iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn set_collision_threshold_rejects_bad_values() {
    let mut occupancy = vec![0.0; 9];
    occupancy[4] = 1.0;
    let mut core = FieldCore::default();
    core.load(occupancy, 3, 3).unwrap();

    assert!(core.set_collision_threshold(f64::NAN).is_err());
    assert!(core.set_collision_threshold(-0.1).is_err());
    assert!(core.set_collision_threshold(1.1).is_err());
    assert_eq!(core.collision_threshold(), 0.5);

    core.set_brush(1, 0.1).unwrap();
    core.apply_brush(1, 1);
    assert_eq!(core.field()[4], 1.0);
}

#[test]
fn goal_at_exact_threshold_is_rejected() {
    let mut occupancy = vec![0.0; 4];
    occupancy[1] = 0.5;
    let mut core = FieldCore::default();
    core.load(occupancy, 2, 2).unwrap();

    // Not blocked (blocked means strictly above), but not a valid goal either.
    assert!(!core.is_cell_blocked(0, 1));
    assert!(!core.is_valid_goal(0, 1));
    assert!(core.is_valid_goal(0, 0));
}

#[test]
fn huge_radius_only_scans_the_grid() {
    let mut core = free_core(3, 3);
    core.set_brush(u32::MAX, 0.1).unwrap();

    let updates = core.apply_brush(1, 1).to_vec();
    assert_eq!(updates.len(), 9);
    assert!(core.field().iter().all(|&v| approx(v, 0.9)));

    // Far-off centre: squared distances exceed i64 but stay inside the disk.
    let updates = core.apply_brush(i32::MIN, i32::MIN).to_vec();
    assert_eq!(updates.len(), 9);
    assert!(core.field().iter().all(|&v| approx(v, 0.8)));
}

#[test]
fn brush_square_entirely_off_grid_is_a_no_op() {
    let mut core = free_core(4, 4);
    core.set_brush(2, 0.5).unwrap();
    assert!(core.apply_brush(-10, -10).is_empty());
    assert!(core.apply_brush(20, 1).is_empty());
    assert!(core.field().iter().all(|&v| v == 1.0));
}
