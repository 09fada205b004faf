use crate::systems::{integrator, relax_squash, solver, solver_params};

use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore) {
    let mut timer = if sim.perf_enabled {
        sim.perf_stats.reset();
        sim.perf_stats.body_count = sim.bodies.len() as u32;
        sim.perf_stats.held_bodies = sim.bodies.iter().filter(|b| b.is_held()).count() as u32;
        Some(PerfTimer::start())
    } else {
        None
    };

    // === INTEGRATE ===
    // Free bodies fall; held bodies pick up throw velocity from the pointer.
    integrator::integrate(&mut sim.bodies, sim.settings.gravity);
    if let Some(t) = timer.as_mut() {
        sim.perf_stats.integrate_ms = t.lap_ms();
    }

    // === BROAD PHASE ===
    // Candidate lists are rebuilt from scratch, never patched.
    sim.broad_phase.rebuild(&sim.bodies, sim.settings.min_cell_size);
    if let Some(t) = timer.as_mut() {
        sim.perf_stats.broad_phase_ms = t.lap_ms();
    }

    // === SOLVER ===
    let params = solver_params(&sim.settings);
    let stats = solver::solve(&mut sim.bodies, sim.broad_phase.pairs(), &params);
    if let Some(t) = timer.as_mut() {
        sim.perf_stats.solve_ms = t.lap_ms();
    }

    relax_squash(&mut sim.bodies, &sim.settings);

    if let Some(t) = timer {
        sim.perf_stats.candidate_pairs = sim.broad_phase.pairs().len() as u32;
        sim.perf_stats.contacts_resolved = stats.contacts_resolved;
        sim.perf_stats.wall_hits = stats.wall_hits;
        sim.perf_stats.solver_iterations = stats.iterations_run;
        sim.perf_stats.max_correction = stats.last_max_correction;
        sim.perf_stats.cell_size = sim.broad_phase.cell_size();
        sim.perf_stats.occupied_cells = sim.broad_phase.occupied_cells() as u32;
        sim.perf_stats.step_ms = t.total_ms();
    }

    sim.frame += 1;
}
