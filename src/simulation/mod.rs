//! Simulation - the explicit context that owns every body
//!
//! Orchestration only: physics lives in `systems/`, this module keeps the
//! body collection, handle bookkeeping, settings, and perf counters, and
//! delegates each operation to a small submodule:
//! - commands/ - create, remove, clear, pick
//! - drag/     - pointer drag-and-throw lifecycle
//! - step/     - one tick of the pipeline
//! - render/   - flat buffers for the JS renderer

use crate::core::{EngineError, EngineResult, Vec2};
use crate::domain::{Body, BodyHandle, Bounds, SimSettings};
use crate::systems::broad_phase::BroadPhase;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "drag/drag.rs"]
mod drag;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Floats written per body by `extract_render_data`: x, y, radius, squash x, squash y
pub const RENDER_STRIDE: usize = 5;

/// Slot table entry: where a handle's body currently lives in the dense array
#[derive(Clone, Copy)]
struct Slot {
    generation: u32,
    dense: Option<usize>,
}

pub(crate) struct RenderBuffers {
    pub(crate) bodies: Vec<f32>,
    pub(crate) colors: Vec<u32>,
}

/// The simulation context
pub struct SimulationCore {
    /// Dense body storage; broad-phase candidates index into this
    bodies: Vec<Body>,
    slots: Vec<Slot>,
    free_slots: Vec<u32>,
    /// Creation counter, parallel to `bodies` (newest is picked first)
    spawn_order: Vec<u64>,
    next_spawn: u64,
    broad_phase: BroadPhase,

    settings: SimSettings,
    frame: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create an empty simulation with the given bounds and default settings
    pub fn new(width: f32, height: f32) -> EngineResult<Self> {
        init::create_simulation_core(SimSettings {
            bounds: Bounds::new(width, height),
            ..SimSettings::default()
        })
    }

    pub fn with_settings(settings: SimSettings) -> EngineResult<Self> {
        init::create_simulation_core(settings)
    }

    // === SETTINGS ===

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    /// Replace all settings from a JSON document (bodies are kept)
    pub fn load_settings_json(&mut self, json: &str) -> EngineResult<()> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    /// Resize the simulation area; takes effect on the next step
    pub fn set_bounds(&mut self, width: f32, height: f32) -> EngineResult<()> {
        settings::set_bounds(self, width, height)
    }

    pub fn set_solver_iterations(&mut self, iterations: u32) -> EngineResult<()> {
        settings::set_solver_iterations(self, iterations)
    }

    pub fn set_convergence_threshold(&mut self, threshold: Option<f32>) -> EngineResult<()> {
        settings::set_convergence_threshold(self, threshold)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === BODIES ===

    pub fn create_body(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        color: u32,
        bounce: f32,
        friction: f32,
    ) -> EngineResult<BodyHandle> {
        commands::create_body(self, x, y, radius, color, bounce, friction)
    }

    pub fn remove_body(&mut self, handle: BodyHandle) -> EngineResult<()> {
        commands::remove_body(self, handle)
    }

    /// Remove every body; all outstanding handles become stale
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Topmost (newest) body under the pointer
    pub fn pick_body(&self, x: f32, y: f32) -> Option<BodyHandle> {
        commands::pick_body(self, Vec2::new(x, y))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.dense_index(handle).is_ok()
    }

    pub fn body(&self, handle: BodyHandle) -> EngineResult<&Body> {
        let idx = self.dense_index(handle)?;
        Ok(&self.bodies[idx])
    }

    /// Direct access for tuning UIs; radius stays read-only through `Body`'s API
    pub fn body_mut(&mut self, handle: BodyHandle) -> EngineResult<&mut Body> {
        let idx = self.dense_index(handle)?;
        Ok(&mut self.bodies[idx])
    }

    /// Handles of all live bodies, in storage order
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.bodies.iter().map(Body::handle).collect()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn set_bounce(&mut self, handle: BodyHandle, bounce: f32) -> EngineResult<()> {
        self.body_mut(handle)?.set_bounce(bounce);
        Ok(())
    }

    pub fn set_friction(&mut self, handle: BodyHandle, friction: f32) -> EngineResult<()> {
        self.body_mut(handle)?.set_friction(friction);
        Ok(())
    }

    /// Broad-phase candidates of a body as of the last step.
    ///
    /// Empty after any removal until the next step rebuilds them.
    pub fn neighbor_candidates(&self, handle: BodyHandle) -> EngineResult<Vec<BodyHandle>> {
        let idx = self.dense_index(handle)?;
        Ok(self
            .broad_phase
            .candidates(idx)
            .iter()
            .map(|&j| self.bodies[j].handle())
            .collect())
    }

    // === DRAG ===

    pub fn begin_drag(&mut self, handle: BodyHandle, pointer_x: f32, pointer_y: f32) -> EngineResult<()> {
        drag::begin_drag(self, handle, Vec2::new(pointer_x, pointer_y))
    }

    pub fn update_drag(&mut self, handle: BodyHandle, pointer_x: f32, pointer_y: f32) -> EngineResult<()> {
        drag::update_drag(self, handle, Vec2::new(pointer_x, pointer_y))
    }

    pub fn end_drag(&mut self, handle: BodyHandle) -> EngineResult<()> {
        drag::end_drag(self, handle)
    }

    // === STEP ===

    /// Advance the whole simulation by one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === RENDER ===

    /// Fill the render buffers; returns the number of bodies written
    pub fn extract_render_data(&mut self) -> usize {
        render_extract::extract_render_data(self)
    }

    pub fn render_ptr(&self) -> *const f32 {
        self.render.bodies.as_ptr()
    }

    pub fn render_len(&self) -> usize {
        self.render.bodies.len()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }

    pub fn render_data(&self) -> &[f32] {
        &self.render.bodies
    }

    pub fn render_colors(&self) -> &[u32] {
        &self.render.colors
    }

    // === HANDLE BOOKKEEPING ===

    fn dense_index(&self, handle: BodyHandle) -> EngineResult<usize> {
        self.slots
            .get(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.dense)
            .ok_or(EngineError::UnknownHandle { handle })
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
