//! Contact solver
//!
//! Every iteration runs the wall pass over all bodies, then the pair pass over
//! all broad-phase candidates in ascending index order. Penetration is always
//! measured from current positions, so repeated iterations let stacks and
//! clusters settle within one step.

use crate::domain::Body;

use super::contacts::{pair_mut, resolve_pair};
use super::walls::{resolve_walls, WallParams};

pub struct SolverParams {
    pub iterations: u32,
    pub walls: WallParams,
    /// Stop early once an iteration's largest correction drops below this
    pub convergence_threshold: Option<f32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolverStats {
    pub iterations_run: u32,
    pub contacts_resolved: u32,
    pub wall_hits: u32,
    /// Largest single correction seen in the final iteration
    pub last_max_correction: f32,
}

pub fn solve(bodies: &mut [Body], pairs: &[(usize, usize)], params: &SolverParams) -> SolverStats {
    let mut stats = SolverStats::default();

    for _ in 0..params.iterations {
        let mut max_correction = 0.0f32;

        for body in bodies.iter_mut() {
            let out = resolve_walls(body, &params.walls);
            stats.wall_hits += out.hits;
            max_correction = max_correction.max(out.correction);
        }

        for &(i, j) in pairs {
            let (a, b) = pair_mut(bodies, i, j);
            if let Some(contact) = resolve_pair(a, b) {
                stats.contacts_resolved += 1;
                max_correction = max_correction.max(contact.overlap);
            }
        }

        stats.iterations_run += 1;
        stats.last_max_correction = max_correction;

        if let Some(threshold) = params.convergence_threshold {
            if max_correction <= threshold {
                break;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bounds, SquashSettings};
    use crate::systems::broad_phase::BroadPhase;

    fn params(iterations: u32, threshold: Option<f32>) -> SolverParams {
        SolverParams {
            iterations,
            walls: WallParams {
                bounds: Bounds::new(1000.0, 1000.0),
                rest_speed: 1.0,
                squash: SquashSettings::default(),
            },
            convergence_threshold: threshold,
        }
    }

    fn row(n: usize, spacing: f32) -> Vec<Body> {
        (0..n)
            .map(|i| Body::new(300.0 + i as f32 * spacing, 500.0, 20.0, 0, 0.5, 0.95).unwrap())
            .collect()
    }

    fn max_penetration(bodies: &[Body]) -> f32 {
        let mut worst = 0.0f32;
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let d = bodies[i].pos.distance_squared(bodies[j].pos).sqrt();
                worst = worst.max(bodies[i].radius() + bodies[j].radius() - d);
            }
        }
        worst
    }

    #[test]
    fn chain_needs_several_iterations() {
        let mut one = row(6, 30.0);
        let mut bp = BroadPhase::new();
        bp.rebuild(&one, 48.0);
        solve(&mut one, bp.pairs(), &params(1, None));
        let after_one = max_penetration(&one);

        let mut eight = row(6, 30.0);
        bp.rebuild(&eight, 48.0);
        let stats = solve(&mut eight, bp.pairs(), &params(8, None));
        let after_eight = max_penetration(&eight);

        assert_eq!(stats.iterations_run, 8);
        assert!(after_one > 0.5, "one iteration should leave chain overlap, got {after_one}");
        assert!(after_eight < after_one);
    }

    #[test]
    fn early_exit_stops_once_settled() {
        let mut bodies = row(2, 30.0);
        let mut bp = BroadPhase::new();
        bp.rebuild(&bodies, 48.0);

        let stats = solve(&mut bodies, bp.pairs(), &params(8, Some(1e-3)));
        assert_eq!(stats.iterations_run, 2);
        assert_eq!(stats.contacts_resolved, 1);
        assert_eq!(stats.last_max_correction, 0.0);
    }

    #[test]
    fn without_threshold_all_iterations_run() {
        let mut bodies = row(2, 30.0);
        let mut bp = BroadPhase::new();
        bp.rebuild(&bodies, 48.0);
        let stats = solve(&mut bodies, bp.pairs(), &params(8, None));
        assert_eq!(stats.iterations_run, 8);
    }
}
