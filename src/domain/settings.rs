//! Simulation settings
//!
//! Loaded from a JSON document (camelCase keys, every field optional):
//!
//! ```json
//! {
//!   "gravity": 0.981,
//!   "solverIterations": 8,
//!   "bounds": { "width": 1920, "height": 1080 },
//!   "minCellSize": 48,
//!   "restSpeed": 1.0,
//!   "squash": { "enabled": true, "minImpact": 2.0, "perImpact": 0.03, "max": 0.6, "recovery": 0.1 },
//!   "convergenceThreshold": null
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

pub const DEFAULT_GRAVITY: f32 = 0.981;
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 8;
/// Smallest broad-phase cell side, regardless of body sizes
pub const MIN_CELL_SIZE: f32 = 48.0;
/// Floor bounces slower than this are snapped to rest
pub const REST_SPEED: f32 = 1.0;
pub const MAX_BOUNCE: f32 = 1.5;
pub const MAX_FRICTION: f32 = 1.0;

/// Width/height of the simulation area; the walls sit at 0 and at these values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { width: 1920.0, height: 1080.0 }
    }
}

/// Impact squash (render hint only)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SquashSettings {
    pub enabled: bool,
    /// Floor impact speed that must be exceeded to squash
    pub min_impact: f32,
    /// Deformation per unit of impact speed
    pub per_impact: f32,
    pub max: f32,
    /// Fraction of the remaining deformation undone each step
    pub recovery: f32,
}

impl Default for SquashSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_impact: 2.0,
            per_impact: 0.03,
            max: 0.6,
            recovery: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimSettings {
    pub gravity: f32,
    pub solver_iterations: u32,
    pub bounds: Bounds,
    pub min_cell_size: f32,
    pub rest_speed: f32,
    pub squash: SquashSettings,
    /// Stop solving early once the largest correction in an iteration is
    /// below this. `None` always runs `solver_iterations`.
    pub convergence_threshold: Option<f32>,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            bounds: Bounds::default(),
            min_cell_size: MIN_CELL_SIZE,
            rest_speed: REST_SPEED,
            squash: SquashSettings::default(),
            convergence_threshold: None,
        }
    }
}

impl SimSettings {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let settings: SimSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !self.gravity.is_finite() {
            return Err(invalid("gravity must be finite"));
        }
        if self.solver_iterations == 0 {
            return Err(invalid("solverIterations must be at least 1"));
        }
        validate_bounds(self.bounds)?;
        if !self.min_cell_size.is_finite() || self.min_cell_size <= 0.0 {
            return Err(invalid("minCellSize must be positive"));
        }
        if !self.rest_speed.is_finite() || self.rest_speed < 0.0 {
            return Err(invalid("restSpeed must be non-negative"));
        }
        if !(0.0..=1.0).contains(&self.squash.recovery) {
            return Err(invalid("squash.recovery must be within [0, 1]"));
        }
        if !(0.0..1.0).contains(&self.squash.max) {
            return Err(invalid("squash.max must be within [0, 1)"));
        }
        if let Some(t) = self.convergence_threshold {
            if !t.is_finite() || t < 0.0 {
                return Err(invalid("convergenceThreshold must be non-negative"));
            }
        }
        Ok(())
    }
}

pub fn validate_bounds(bounds: Bounds) -> EngineResult<()> {
    if !bounds.width.is_finite() || !bounds.height.is_finite() || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Err(invalid("bounds must be positive"));
    }
    Ok(())
}

fn invalid(reason: &str) -> EngineError {
    EngineError::InvalidSettings { reason: reason.to_string() }
}
