//! Spatial Hash - uniform grid bucketing for neighbor queries
//!
//! Cells are square with side `cell_size`; a body belongs to the cell that
//! contains its center (floor division, so negative coordinates work too).
//! Only occupied cells exist, which keeps memory proportional to the body
//! count rather than to the size of the simulation area.

use std::collections::HashMap;

use crate::core::Vec2;

/// Integer cell coordinates
pub type CellKey = (i32, i32);

pub struct SpatialHash {
    cell_size: f32,
    inv_cell_size: f32,
    cells: HashMap<CellKey, Vec<usize>>,
    occupied: usize,
}

impl SpatialHash {
    pub fn new(cell_size: f32) -> Self {
        let mut hash = Self {
            cell_size: 1.0,
            inv_cell_size: 1.0,
            cells: HashMap::new(),
            occupied: 0,
        };
        hash.reset(cell_size);
        hash
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of cells holding at least one body
    #[inline]
    pub fn occupied_cells(&self) -> usize {
        self.occupied
    }

    /// Empty every cell and switch to a new cell size.
    ///
    /// Buckets that were occupied last time keep their allocation; buckets
    /// that stayed empty are dropped so stale cells do not pile up.
    pub fn reset(&mut self, cell_size: f32) {
        debug_assert!(cell_size > 0.0, "cell size must be positive");
        self.cell_size = cell_size;
        self.inv_cell_size = 1.0 / cell_size;
        self.cells.retain(|_, bucket| {
            let keep = !bucket.is_empty();
            bucket.clear();
            keep
        });
        self.occupied = 0;
    }

    /// Cell containing `pos`
    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> CellKey {
        (
            (pos.x * self.inv_cell_size).floor() as i32,
            (pos.y * self.inv_cell_size).floor() as i32,
        )
    }

    pub fn insert(&mut self, idx: usize, pos: Vec2) {
        let key = self.cell_of(pos);
        let bucket = self.cells.entry(key).or_default();
        if bucket.is_empty() {
            self.occupied += 1;
        }
        bucket.push(idx);
    }

    /// Bodies stored in a single cell
    pub fn bucket(&self, key: CellKey) -> &[usize] {
        self.cells.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Visit every index stored in the 3x3 block of cells around `pos`.
    ///
    /// Cells are visited row by row (top-left first) and indices within a
    /// cell in insertion order, so the visit order is deterministic.
    pub fn for_each_near<F: FnMut(usize)>(&self, pos: Vec2, mut f: F) {
        let (cx, cy) = self.cell_of(pos);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                if let Some(bucket) = self.cells.get(&key) {
                    for &idx in bucket {
                        f(idx);
                    }
                }
            }
        }
    }
}
