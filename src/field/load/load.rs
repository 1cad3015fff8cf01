use crate::domain::map::OccupancyMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{FieldCore, FieldError, FIELD_INITIAL_VALUE};

pub(super) fn load(
    field: &mut FieldCore,
    occupancy: Vec<f64>,
    width: u32,
    height: u32,
) -> Result<(), FieldError> {
    if width == 0 || height == 0 {
        return Err(FieldError::EmptyGrid);
    }

    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or(FieldError::DimensionMismatch { expected: usize::MAX, actual: occupancy.len() })?;
    if occupancy.len() != expected {
        return Err(FieldError::DimensionMismatch { expected, actual: occupancy.len() });
    }

    field.grid.set_size(width, height);
    field.occupancy = occupancy;
    field.map_origin = (0.0, 0.0);
    field.meters_per_cell = 0.0;
    reset(field);

    console_log!("potential field: loaded {}x{} map", width, height);
    Ok(())
}

pub(super) fn load_map(field: &mut FieldCore, map: &OccupancyMap) -> Result<(), FieldError> {
    load(field, map.cells.clone(), map.width, map.height)?;
    field.map_origin = map.origin;
    field.meters_per_cell = map.meters_per_cell;
    Ok(())
}

/// Full reset, never incremental: every cell goes back to `1.0`
pub(super) fn reset(field: &mut FieldCore) {
    let size = field.grid.size();
    if field.field.len() != size {
        field.field = vec![FIELD_INITIAL_VALUE; size];
        return;
    }

    #[cfg(feature = "parallel")]
    {
        field.field.par_iter_mut().for_each(|v| *v = FIELD_INITIAL_VALUE);
    }
    #[cfg(not(feature = "parallel"))]
    {
        field.field.fill(FIELD_INITIAL_VALUE);
    }
}
