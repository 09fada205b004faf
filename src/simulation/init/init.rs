use crate::core::EngineResult;
use crate::domain::SimSettings;
use crate::systems::broad_phase::BroadPhase;

use super::perf_stats::PerfStats;
use super::{RenderBuffers, SimulationCore};

pub(super) fn create_simulation_core(settings: SimSettings) -> EngineResult<SimulationCore> {
    settings.validate()?;

    Ok(SimulationCore {
        bodies: Vec::with_capacity(256),
        slots: Vec::with_capacity(256),
        free_slots: Vec::new(),
        spawn_order: Vec::with_capacity(256),
        next_spawn: 0,
        broad_phase: BroadPhase::new(),
        settings,
        frame: 0,
        render: RenderBuffers {
            bodies: Vec::new(),
            colors: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
