//! Broad Phase - candidate contacts from the spatial hash
//!
//! Rebuilt from scratch every step: no state survives between steps except
//! reusable allocations. Candidates are dense body indices, valid only until
//! the body collection changes.

use crate::domain::Body;
use crate::spatial::SpatialHash;

/// Cell side for the current population: at least `min_cell_size`, and wide
/// enough that the largest body spans no more than one cell.
pub fn cell_size_for(bodies: &[Body], min_cell_size: f32) -> f32 {
    let max_radius = bodies.iter().map(Body::radius).fold(0.0f32, f32::max);
    min_cell_size.max(2.0 * max_radius)
}

/// Generous proximity test.
///
/// Pairs qualify while their gap is smaller than the larger radius, so bodies
/// that are close but not yet touching still reach the narrow phase, which
/// re-checks real penetration.
#[inline]
pub fn is_candidate(a: &Body, b: &Body) -> bool {
    let reach = a.radius() + b.radius() + a.radius().max(b.radius());
    a.pos.distance_squared(b.pos) < reach * reach
}

pub struct BroadPhase {
    hash: SpatialHash,
    /// Per-body candidate lists (symmetric)
    neighbors: Vec<Vec<usize>>,
    /// Every candidate pair once, as `(low, high)`, ascending
    pairs: Vec<(usize, usize)>,
    scratch: Vec<usize>,
}

impl BroadPhase {
    pub fn new() -> Self {
        Self {
            hash: SpatialHash::new(1.0),
            neighbors: Vec::new(),
            pairs: Vec::new(),
            scratch: Vec::new(),
        }
    }

    /// Rebuild the index and candidate sets for the current body positions.
    pub fn rebuild(&mut self, bodies: &[Body], min_cell_size: f32) {
        let n = bodies.len();
        self.clear();
        self.hash.reset(cell_size_for(bodies, min_cell_size));
        self.neighbors.resize_with(n, Vec::new);

        for (i, body) in bodies.iter().enumerate() {
            self.hash.insert(i, body.pos);
        }

        for (i, body) in bodies.iter().enumerate() {
            self.scratch.clear();
            let scratch = &mut self.scratch;
            self.hash.for_each_near(body.pos, |j| {
                // The lower index owns the pair, so each pair is seen once.
                if j > i && is_candidate(body, &bodies[j]) {
                    scratch.push(j);
                }
            });
            self.scratch.sort_unstable();

            for &j in self.scratch.iter() {
                self.pairs.push((i, j));
                self.neighbors[i].push(j);
                self.neighbors[j].push(i);
            }
        }
    }

    /// Drop all candidates (the cell buckets are reset on the next rebuild).
    pub fn clear(&mut self) {
        self.pairs.clear();
        for list in self.neighbors.iter_mut() {
            list.clear();
        }
        self.neighbors.clear();
    }

    #[inline]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Candidate set of body `i` (empty for indices not seen by the last rebuild)
    pub fn candidates(&self, i: usize) -> &[usize] {
        self.neighbors.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.hash.cell_size()
    }

    #[inline]
    pub fn occupied_cells(&self) -> usize {
        self.hash.occupied_cells()
    }
}

impl Default for BroadPhase {
    fn default() -> Self {
        Self::new()
    }
}
