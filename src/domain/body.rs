//! Body - one circular disk
//!
//! Bodies do not rotate; radius doubles as mass in every contact calculation.

use crate::core::{EngineError, EngineResult, Vec2};
use crate::domain::handle::BodyHandle;
use crate::domain::settings::{MAX_BOUNCE, MAX_FRICTION};

/// Drag-and-throw bookkeeping
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    /// Held by the pointer: integration suspended
    pub held: bool,
    /// Body center minus pointer position at grab time
    pub offset: Vec2,
    /// Position seen by the integrator on the previous step
    pub prev_pos: Vec2,
}

/// Render-only squash scales (1.0 = round)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Squash {
    pub x: f32,
    pub y: f32,
}

impl Default for Squash {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

#[derive(Clone, Debug)]
pub struct Body {
    // === Physics State ===
    /// Center in simulation space
    pub pos: Vec2,
    /// Velocity (units per step)
    pub velocity: Vec2,
    radius: f32,

    // === Material ===
    bounce: f32,
    friction: f32,

    // === Presentation ===
    /// Packed RGBA, passed through to the renderer untouched
    pub color: u32,
    pub squash: Squash,

    pub drag: DragState,

    /// Slot handle that owns this body (kept in sync by the simulation)
    pub(crate) handle: BodyHandle,
}

impl Body {
    /// Create a body at rest.
    ///
    /// Radius must be finite and positive and the center finite; bounce and
    /// friction are clamped into their allowed ranges.
    pub fn new(x: f32, y: f32, radius: f32, color: u32, bounce: f32, friction: f32) -> EngineResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(EngineError::InvalidRadius { radius });
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(EngineError::InvalidPosition { x, y });
        }
        let pos = Vec2::new(x, y);
        Ok(Self {
            pos,
            velocity: Vec2::zero(),
            radius,
            bounce: clamp_bounce(bounce),
            friction: clamp_friction(friction),
            color,
            squash: Squash::default(),
            drag: DragState {
                held: false,
                offset: Vec2::zero(),
                prev_pos: pos,
            },
            handle: BodyHandle::new(u32::MAX, 0),
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Mass stand-in used by the contact solver
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn bounce(&self) -> f32 {
        self.bounce
    }

    #[inline]
    pub fn friction(&self) -> f32 {
        self.friction
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.drag.held
    }

    #[inline]
    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    /// Set restitution (clamped to [0, 1.5])
    pub fn set_bounce(&mut self, bounce: f32) {
        self.bounce = clamp_bounce(bounce);
    }

    /// Set floor friction multiplier (clamped to [0, 1])
    pub fn set_friction(&mut self, friction: f32) {
        self.friction = clamp_friction(friction);
    }

    /// True when `point` lies on or inside the disk
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }
}

fn clamp_bounce(b: f32) -> f32 {
    if b.is_nan() {
        return 0.0;
    }
    b.clamp(0.0, MAX_BOUNCE)
}

fn clamp_friction(f: f32) -> f32 {
    if f.is_nan() {
        return MAX_FRICTION;
    }
    f.clamp(0.0, MAX_FRICTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(
            Body::new(0.0, 0.0, 0.0, 0, 0.5, 0.5).unwrap_err(),
            EngineError::InvalidRadius { radius: 0.0 }
        );
        assert!(Body::new(0.0, 0.0, -3.0, 0, 0.5, 0.5).is_err());
        assert!(Body::new(0.0, 0.0, f32::NAN, 0, 0.5, 0.5).is_err());
        assert!(Body::new(0.0, 0.0, f32::INFINITY, 0, 0.5, 0.5).is_err());
    }

    #[test]
    fn rejects_non_finite_position() {
        assert_eq!(
            Body::new(f32::INFINITY, 10.0, 5.0, 0, 0.5, 0.5).unwrap_err(),
            EngineError::InvalidPosition { x: f32::INFINITY, y: 10.0 }
        );
        assert!(matches!(
            Body::new(10.0, f32::NAN, 5.0, 0, 0.5, 0.5),
            Err(EngineError::InvalidPosition { .. })
        ));
        assert!(Body::new(-1.0e6, 1.0e6, 5.0, 0, 0.5, 0.5).is_ok());
    }

    #[test]
    fn material_is_clamped() {
        let mut b = Body::new(10.0, 10.0, 5.0, 0, 3.0, -1.0).unwrap();
        assert_eq!(b.bounce(), MAX_BOUNCE);
        assert_eq!(b.friction(), 0.0);

        b.set_bounce(0.4);
        b.set_friction(2.0);
        assert_eq!(b.bounce(), 0.4);
        assert_eq!(b.friction(), 1.0);
    }

    #[test]
    fn starts_at_rest_and_unheld() {
        let b = Body::new(12.0, 34.0, 5.0, 0xff0000ff, 0.8, 0.95).unwrap();
        assert_eq!(b.velocity, Vec2::zero());
        assert!(!b.is_held());
        assert_eq!(b.drag.prev_pos, Vec2::new(12.0, 34.0));
        assert_eq!(b.squash, Squash::default());
        assert_eq!(b.mass(), 5.0);
    }

    #[test]
    fn contains_point_includes_the_rim() {
        let b = Body::new(0.0, 0.0, 10.0, 0, 0.8, 0.95).unwrap();
        assert!(b.contains_point(Vec2::new(10.0, 0.0)));
        assert!(b.contains_point(Vec2::new(3.0, 4.0)));
        assert!(!b.contains_point(Vec2::new(10.0, 1.0)));
    }
}
