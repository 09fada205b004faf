//! Integrator - unconstrained motion before contacts are solved

use crate::domain::Body;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advance every body by one step.
///
/// Free bodies get explicit Euler with gravity on `vy`. Held bodies are left
/// where the pointer put them; their velocity becomes the distance the
/// pointer dragged them since the previous step, which is what they keep
/// when released.
pub fn integrate(bodies: &mut [Body], gravity: f32) {
    #[cfg(feature = "parallel")]
    {
        bodies.par_iter_mut().for_each(|b| integrate_body(b, gravity));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for b in bodies.iter_mut() {
            integrate_body(b, gravity);
        }
    }
}

#[inline]
pub fn integrate_body(body: &mut Body, gravity: f32) {
    if body.drag.held {
        body.velocity = body.pos - body.drag.prev_pos;
        body.drag.prev_pos = body.pos;
        return;
    }

    body.velocity.y += gravity;
    body.pos += body.velocity;
}
