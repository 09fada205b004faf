use crate::core::{EngineError, EngineResult};
use crate::domain::settings::validate_bounds;
use crate::domain::{Bounds, SimSettings};

use super::SimulationCore;

pub(super) fn load_settings_json(sim: &mut SimulationCore, json: &str) -> EngineResult<()> {
    let settings = SimSettings::from_json(json).map_err(|e| {
        log_warn!("rejected settings: {}", e);
        e
    })?;
    log_info!(
        "settings loaded: gravity={} iterations={} bounds={}x{}",
        settings.gravity,
        settings.solver_iterations,
        settings.bounds.width,
        settings.bounds.height
    );
    sim.settings = settings;
    Ok(())
}

pub(super) fn set_gravity(sim: &mut SimulationCore, gravity: f32) {
    sim.settings.gravity = gravity;
}

pub(super) fn set_bounds(sim: &mut SimulationCore, width: f32, height: f32) -> EngineResult<()> {
    let bounds = Bounds::new(width, height);
    validate_bounds(bounds)?;
    sim.settings.bounds = bounds;
    Ok(())
}

pub(super) fn set_solver_iterations(sim: &mut SimulationCore, iterations: u32) -> EngineResult<()> {
    if iterations == 0 {
        return Err(EngineError::InvalidSettings {
            reason: "solver iterations must be at least 1".to_string(),
        });
    }
    sim.settings.solver_iterations = iterations;
    Ok(())
}

pub(super) fn set_convergence_threshold(sim: &mut SimulationCore, threshold: Option<f32>) -> EngineResult<()> {
    if let Some(t) = threshold {
        if !t.is_finite() || t < 0.0 {
            return Err(EngineError::InvalidSettings {
                reason: "convergence threshold must be non-negative".to_string(),
            });
        }
    }
    sim.settings.convergence_threshold = threshold;
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}
