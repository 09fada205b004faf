use crate::core::{EngineError, EngineResult, Vec2};
use crate::domain::BodyHandle;

use super::SimulationCore;

/// Grab a body: it stops, and keeps its offset from the pointer while held.
pub(super) fn begin_drag(sim: &mut SimulationCore, handle: BodyHandle, pointer: Vec2) -> EngineResult<()> {
    let body = sim.body_mut(handle)?;
    body.drag.held = true;
    body.drag.offset = body.pos - pointer;
    body.drag.prev_pos = body.pos;
    body.velocity = Vec2::zero();
    Ok(())
}

/// Move a held body with the pointer. Velocity is derived at the next step.
pub(super) fn update_drag(sim: &mut SimulationCore, handle: BodyHandle, pointer: Vec2) -> EngineResult<()> {
    let body = sim.body_mut(handle)?;
    if !body.drag.held {
        return Err(EngineError::NotDragging { handle });
    }
    body.pos = pointer + body.drag.offset;
    Ok(())
}

/// Let go: the body keeps the last pointer-derived velocity (the throw).
pub(super) fn end_drag(sim: &mut SimulationCore, handle: BodyHandle) -> EngineResult<()> {
    let body = sim.body_mut(handle)?;
    if !body.drag.held {
        return Err(EngineError::NotDragging { handle });
    }
    body.drag.held = false;
    Ok(())
}
