//! Physics systems, run in this order each step:
//! integrator -> broad phase -> solver (walls + contacts) -> squash relax.

pub mod broad_phase;
pub mod contacts;
pub mod integrator;
pub mod solver;
pub mod squash;
pub mod walls;

use crate::domain::{Body, Bounds, SimSettings};

use broad_phase::BroadPhase;
use solver::{SolverParams, SolverStats};
use walls::WallParams;

/// Summary of one step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    pub candidate_pairs: u32,
    pub cell_size: f32,
    pub occupied_cells: u32,
    pub solver: SolverStats,
}

/// Advance `bodies` by one step. Settings not passed here keep their defaults.
///
/// `broad_phase` only carries reusable allocations; pass the same one every
/// step.
pub fn step_bodies(
    bodies: &mut [Body],
    broad_phase: &mut BroadPhase,
    gravity: f32,
    bounds: Bounds,
    solver_iterations: u32,
) -> StepReport {
    let settings = SimSettings {
        gravity,
        bounds,
        solver_iterations,
        ..SimSettings::default()
    };
    step_with_settings(bodies, broad_phase, &settings)
}

pub fn step_with_settings(bodies: &mut [Body], broad_phase: &mut BroadPhase, settings: &SimSettings) -> StepReport {
    integrator::integrate(bodies, settings.gravity);
    broad_phase.rebuild(bodies, settings.min_cell_size);
    let solver = solver::solve(bodies, broad_phase.pairs(), &solver_params(settings));
    relax_squash(bodies, settings);

    StepReport {
        candidate_pairs: broad_phase.pairs().len() as u32,
        cell_size: broad_phase.cell_size(),
        occupied_cells: broad_phase.occupied_cells() as u32,
        solver,
    }
}

pub fn solver_params(settings: &SimSettings) -> SolverParams {
    SolverParams {
        iterations: settings.solver_iterations,
        walls: WallParams {
            bounds: settings.bounds,
            rest_speed: settings.rest_speed,
            squash: settings.squash,
        },
        convergence_threshold: settings.convergence_threshold,
    }
}

pub fn relax_squash(bodies: &mut [Body], settings: &SimSettings) {
    for body in bodies.iter_mut() {
        squash::relax(body, &settings.squash);
    }
}
