//! Ballpit Engine - disk physics for the Ballpit sandbox (WASM)
//!
//! Architecture:
//! - core/       - Math, errors, console logging
//! - domain/     - Bodies, handles, settings
//! - spatial/    - Spatial hash (uniform grid)
//! - systems/    - Integrator, broad phase, wall + contact solver
//! - simulation/ - Simulation context and the JS facade
//!
//! One tick: integrate -> rebuild spatial hash and candidate pairs ->
//! N solver iterations (walls, then pairs) -> JS reads the render buffers.

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the parallel integrator
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    log_info!("Ballpit engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, EngineResult, Vec2};
pub use domain::{Body, BodyHandle, Bounds, SimSettings};
pub use simulation::{PerfStats, SimulationCore, World};
pub use systems::broad_phase::BroadPhase;
pub use systems::{step_bodies, step_with_settings, StepReport};
