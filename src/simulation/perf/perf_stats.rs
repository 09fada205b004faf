use wasm_bindgen::prelude::*;

/// Per-step timings and counters, filled only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) broad_phase_ms: f64,
    pub(super) solve_ms: f64,
    pub(super) body_count: u32,
    pub(super) held_bodies: u32,
    pub(super) candidate_pairs: u32,
    pub(super) contacts_resolved: u32,
    pub(super) wall_hits: u32,
    pub(super) solver_iterations: u32,
    pub(super) max_correction: f32,
    pub(super) cell_size: f32,
    pub(super) occupied_cells: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn broad_phase_ms(&self) -> f64 { self.broad_phase_ms }
    #[wasm_bindgen(getter)]
    pub fn solve_ms(&self) -> f64 { self.solve_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn held_bodies(&self) -> u32 { self.held_bodies }
    #[wasm_bindgen(getter)]
    pub fn candidate_pairs(&self) -> u32 { self.candidate_pairs }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    /// Iterations actually run (fewer than configured after an early exit)
    #[wasm_bindgen(getter)]
    pub fn solver_iterations(&self) -> u32 { self.solver_iterations }
    #[wasm_bindgen(getter)]
    pub fn max_correction(&self) -> f32 { self.max_correction }
    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> f32 { self.cell_size }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
}
