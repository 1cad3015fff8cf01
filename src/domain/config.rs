use serde::{Deserialize, Serialize};

pub const DEFAULT_COLLISION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_BRUSH_RADIUS: u32 = 3;
pub const DEFAULT_BRUSH_DELTA: f64 = 0.01;

/// Which way a brush stroke pushes the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrushDirection {
    Increase,
    #[default]
    Decrease,
}

impl BrushDirection {
    pub fn from_increase(increase: bool) -> Self {
        if increase {
            BrushDirection::Increase
        } else {
            BrushDirection::Decrease
        }
    }

    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            BrushDirection::Increase => 1.0,
            BrushDirection::Decrease => -1.0,
        }
    }
}

/// Candidate window scanned around the current cell during descent.
///
/// `Legacy` scans `row-1..=row+2` x `col-1..=col+2`, current cell
/// included. `Moore` is the true 8-neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NeighborWindow {
    #[default]
    Legacy,
    Moore,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrushConfig {
    pub radius: u32,
    pub delta: f64,
    pub direction: BrushDirection,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_BRUSH_RADIUS,
            delta: DEFAULT_BRUSH_DELTA,
            direction: BrushDirection::Decrease,
        }
    }
}

/// Engine configuration, passed in at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Occupancy above this value marks a cell as blocked
    pub collision_threshold: f64,
    pub brush: BrushConfig,
    pub neighbor_window: NeighborWindow,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            collision_threshold: DEFAULT_COLLISION_THRESHOLD,
            brush: BrushConfig::default(),
            neighbor_window: NeighborWindow::Legacy,
        }
    }
}

impl FieldConfig {
    /// Parse a (possibly partial) JSON config; missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: FieldConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_threshold(self.collision_threshold)?;
        validate_brush(self.brush.radius, self.brush.delta)
    }
}

/// Threshold must be within `[0, 1]`; NaN is rejected.
pub fn validate_threshold(threshold: f64) -> Result<(), String> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(format!("collisionThreshold must be within [0, 1], got {}", threshold));
    }
    Ok(())
}

/// Radius must be positive and delta within `(0, 1]`; NaN is rejected.
pub fn validate_brush(radius: u32, delta: f64) -> Result<(), String> {
    if radius == 0 {
        return Err("brush radius must be positive".to_string());
    }
    if !(delta > 0.0 && delta <= 1.0) {
        return Err(format!("brush delta must be within (0, 1], got {}", delta));
    }
    Ok(())
}
