//! Narrow phase: wall contacts
//!
//! The simulation area is the box `[0, width] x [0, height]`, y pointing down,
//! so the floor is `y = height`.

use crate::domain::{Body, Bounds, SquashSettings};

use super::squash;

pub struct WallParams {
    pub bounds: Bounds,
    /// Floor bounces slower than this come to rest
    pub rest_speed: f32,
    pub squash: SquashSettings,
}

/// What one wall pass did to one body
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WallOutcome {
    pub hits: u32,
    pub floor: bool,
    /// Distance the body was moved back inside
    pub correction: f32,
}

/// Clamp a body into the bounds, reflecting velocity off any wall it crossed.
///
/// Ground friction and rest snapping only happen on the floor.
pub fn resolve_walls(body: &mut Body, params: &WallParams) -> WallOutcome {
    let r = body.radius();
    let bounce = body.bounce();
    let Bounds { width, height } = params.bounds;
    let mut out = WallOutcome::default();

    if body.pos.x - r < 0.0 {
        out.correction += r - body.pos.x;
        body.pos.x = r;
        body.velocity.x = -body.velocity.x * bounce;
        out.hits += 1;
    } else if body.pos.x + r > width {
        out.correction += body.pos.x + r - width;
        body.pos.x = width - r;
        body.velocity.x = -body.velocity.x * bounce;
        out.hits += 1;
    }

    if body.pos.y - r < 0.0 {
        out.correction += r - body.pos.y;
        body.pos.y = r;
        body.velocity.y = -body.velocity.y * bounce;
        out.hits += 1;
    } else if body.pos.y + r > height {
        squash::apply_impact(body, body.velocity.y.abs(), &params.squash);

        out.correction += body.pos.y + r - height;
        body.pos.y = height - r;
        body.velocity.y = -body.velocity.y * bounce;
        if body.velocity.y.abs() < params.rest_speed {
            body.velocity.y = 0.0;
        }
        body.velocity.x *= body.friction();
        out.hits += 1;
        out.floor = true;
    }

    out
}
