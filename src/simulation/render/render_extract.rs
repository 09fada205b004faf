use super::{SimulationCore, RENDER_STRIDE};

/// Pack body state for the renderer.
///
/// `render.bodies` gets `RENDER_STRIDE` floats per body (x, y, radius,
/// squash x, squash y) and `render.colors` one color per body, both in
/// storage order. JS reads them through the pointer/length getters.
pub(super) fn extract_render_data(sim: &mut SimulationCore) -> usize {
    let n = sim.bodies.len();
    sim.render.bodies.clear();
    sim.render.bodies.reserve(n * RENDER_STRIDE);
    sim.render.colors.clear();
    sim.render.colors.reserve(n);

    for body in sim.bodies.iter() {
        sim.render.bodies.extend_from_slice(&[
            body.pos.x,
            body.pos.y,
            body.radius(),
            body.squash.x,
            body.squash.y,
        ]);
        sim.render.colors.push(body.color);
    }

    n
}
