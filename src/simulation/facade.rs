use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::BodyHandle;

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn js_err(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS-facing wrapper around `SimulationCore`.
///
/// Handles cross the boundary as `u64` (BigInt) via `BodyHandle::to_bits`.
/// Contract violations (stale handles, bad radius) throw.
#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
}

#[wasm_bindgen]
impl World {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<World, JsValue> {
        let core = SimulationCore::new(width, height).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    // === SETTINGS ===

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(js_err)
    }

    pub fn settings_json(&self) -> String {
        self.core.settings_json()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    /// Call on window resize
    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.set_bounds(width, height).map_err(js_err)
    }

    pub fn set_solver_iterations(&mut self, iterations: u32) -> Result<(), JsValue> {
        self.core.set_solver_iterations(iterations).map_err(js_err)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
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
    ) -> Result<u64, JsValue> {
        self.core
            .create_body(x, y, radius, color, bounce, friction)
            .map(BodyHandle::to_bits)
            .map_err(js_err)
    }

    pub fn remove_body(&mut self, handle: u64) -> Result<(), JsValue> {
        self.core.remove_body(BodyHandle::from_bits(handle)).map_err(js_err)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Topmost body under the pointer, if any
    pub fn pick_body(&self, x: f32, y: f32) -> Option<u64> {
        self.core.pick_body(x, y).map(BodyHandle::to_bits)
    }

    pub fn contains(&self, handle: u64) -> bool {
        self.core.contains(BodyHandle::from_bits(handle))
    }

    pub fn body_x(&self, handle: u64) -> Result<f32, JsValue> {
        Ok(self.body(handle)?.pos.x)
    }

    pub fn body_y(&self, handle: u64) -> Result<f32, JsValue> {
        Ok(self.body(handle)?.pos.y)
    }

    pub fn body_vx(&self, handle: u64) -> Result<f32, JsValue> {
        Ok(self.body(handle)?.velocity.x)
    }

    pub fn body_vy(&self, handle: u64) -> Result<f32, JsValue> {
        Ok(self.body(handle)?.velocity.y)
    }

    pub fn body_radius(&self, handle: u64) -> Result<f32, JsValue> {
        Ok(self.body(handle)?.radius())
    }

    pub fn body_color(&self, handle: u64) -> Result<u32, JsValue> {
        Ok(self.body(handle)?.color)
    }

    pub fn body_bounce(&self, handle: u64) -> Result<f32, JsValue> {
        Ok(self.body(handle)?.bounce())
    }

    pub fn body_friction(&self, handle: u64) -> Result<f32, JsValue> {
        Ok(self.body(handle)?.friction())
    }

    pub fn set_bounce(&mut self, handle: u64, bounce: f32) -> Result<(), JsValue> {
        self.core.set_bounce(BodyHandle::from_bits(handle), bounce).map_err(js_err)
    }

    pub fn set_friction(&mut self, handle: u64, friction: f32) -> Result<(), JsValue> {
        self.core.set_friction(BodyHandle::from_bits(handle), friction).map_err(js_err)
    }

    // === DRAG ===

    pub fn begin_drag(&mut self, handle: u64, x: f32, y: f32) -> Result<(), JsValue> {
        self.core.begin_drag(BodyHandle::from_bits(handle), x, y).map_err(js_err)
    }

    pub fn update_drag(&mut self, handle: u64, x: f32, y: f32) -> Result<(), JsValue> {
        self.core.update_drag(BodyHandle::from_bits(handle), x, y).map_err(js_err)
    }

    pub fn end_drag(&mut self, handle: u64) -> Result<(), JsValue> {
        self.core.end_drag(BodyHandle::from_bits(handle)).map_err(js_err)
    }

    // === STEP / RENDER ===

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Refresh the render buffers; returns the body count written
    pub fn extract_render_data(&mut self) -> usize {
        self.core.extract_render_data()
    }

    /// Pointer to packed `[x, y, radius, squash_x, squash_y]` per body
    pub fn render_ptr(&self) -> *const f32 {
        self.core.render_ptr()
    }

    /// Length of the render buffer in f32 elements
    pub fn render_len(&self) -> usize {
        self.core.render_len()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }
}

impl World {
    fn body(&self, handle: u64) -> Result<&crate::domain::Body, JsValue> {
        self.core.body(BodyHandle::from_bits(handle)).map_err(js_err)
    }

    /// Native-side access to the wrapped simulation
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}
