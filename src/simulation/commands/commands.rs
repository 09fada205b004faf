use crate::core::{EngineResult, Vec2};
use crate::domain::{Body, BodyHandle};

use super::{SimulationCore, Slot};

pub(super) fn create_body(
    sim: &mut SimulationCore,
    x: f32,
    y: f32,
    radius: f32,
    color: u32,
    bounce: f32,
    friction: f32,
) -> EngineResult<BodyHandle> {
    let mut body = Body::new(x, y, radius, color, bounce, friction).map_err(|e| {
        log_warn!("create_body rejected: {}", e);
        e
    })?;

    let dense = sim.bodies.len();
    let handle = match sim.free_slots.pop() {
        Some(index) => {
            let slot = &mut sim.slots[index as usize];
            slot.dense = Some(dense);
            BodyHandle::new(index, slot.generation)
        }
        None => {
            let index = sim.slots.len() as u32;
            sim.slots.push(Slot { generation: 0, dense: Some(dense) });
            BodyHandle::new(index, 0)
        }
    };

    body.handle = handle;
    sim.bodies.push(body);
    sim.spawn_order.push(sim.next_spawn);
    sim.next_spawn += 1;
    Ok(handle)
}

pub(super) fn remove_body(sim: &mut SimulationCore, handle: BodyHandle) -> EngineResult<()> {
    let idx = sim.dense_index(handle)?;

    sim.bodies.swap_remove(idx);
    sim.spawn_order.swap_remove(idx);
    // The former last body now lives at `idx`.
    if let Some(moved) = sim.bodies.get(idx) {
        sim.slots[moved.handle().index() as usize].dense = Some(idx);
    }

    let slot = &mut sim.slots[handle.index() as usize];
    slot.dense = None;
    slot.generation = slot.generation.wrapping_add(1);
    sim.free_slots.push(handle.index());

    // Dense indices shifted: candidates from the last step are meaningless now.
    sim.broad_phase.clear();
    Ok(())
}

pub(super) fn clear(sim: &mut SimulationCore) {
    for handle in sim.bodies.iter().map(Body::handle) {
        let slot = &mut sim.slots[handle.index() as usize];
        slot.dense = None;
        slot.generation = slot.generation.wrapping_add(1);
        sim.free_slots.push(handle.index());
    }
    sim.bodies.clear();
    sim.spawn_order.clear();
    sim.broad_phase.clear();
    sim.frame = 0;
}

pub(super) fn pick_body(sim: &SimulationCore, pointer: Vec2) -> Option<BodyHandle> {
    sim.bodies
        .iter()
        .zip(sim.spawn_order.iter())
        .filter(|(body, _)| body.contains_point(pointer))
        .max_by_key(|(_, order)| **order)
        .map(|(body, _)| body.handle())
}
