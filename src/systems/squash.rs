//! Impact squash: purely visual, collision always uses the true radius.

use crate::domain::{Body, SquashSettings};

/// Flatten a body that hit the floor at `impact` speed.
pub fn apply_impact(body: &mut Body, impact: f32, settings: &SquashSettings) {
    if !settings.enabled || impact <= settings.min_impact {
        return;
    }
    let deformation = (impact * settings.per_impact).min(settings.max);
    body.squash.x = 1.0 + deformation;
    body.squash.y = 1.0 - deformation;
}

/// Ease the squash back toward a round shape.
pub fn relax(body: &mut Body, settings: &SquashSettings) {
    body.squash.x += (1.0 - body.squash.x) * settings.recovery;
    body.squash.y += (1.0 - body.squash.y) * settings.recovery;
}
