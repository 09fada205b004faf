//! Narrow phase: disk-disk contacts
//!
//! Radius stands in for mass. Position correction and impulse are both
//! applied immediately, so later pairs in the same pass already see the
//! result (Gauss-Seidel).
//!
//! Held bodies are kinematic: the pointer owns their position, so they act
//! as infinite mass and only the free side of a contact is moved.

use crate::core::Vec2;
use crate::domain::Body;

/// Normal used when two centers coincide exactly
const COINCIDENT_NORMAL: Vec2 = Vec2 { x: 1.0, y: 0.0 };

/// Distances at or below this are treated as coincident
const MIN_SEPARATION: f32 = 1e-6;

/// What resolving one touching pair did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactOutcome {
    /// Penetration depth that was removed
    pub overlap: f32,
    /// Impulse magnitude (0 when the pair was already separating)
    pub impulse: f32,
}

/// Mutable access to two distinct bodies of a slice
#[inline]
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i != j, "pair_mut: a body cannot collide with itself");
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

/// Separate and bounce two disks if they overlap.
///
/// Returns `None` when the disks do not touch (candidacy is not contact), or
/// when both are held.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> Option<ContactOutcome> {
    if a.is_held() && b.is_held() {
        return None;
    }

    let sum_r = a.radius() + b.radius();
    let delta = b.pos - a.pos;
    let dist = delta.length();
    if dist >= sum_r {
        return None;
    }

    let normal = if dist <= MIN_SEPARATION {
        COINCIDENT_NORMAL
    } else {
        delta / dist
    };

    let overlap = sum_r - dist;
    if a.is_held() {
        b.pos += normal * overlap;
    } else if b.is_held() {
        a.pos -= normal * overlap;
    } else {
        // The larger body moves less.
        a.pos -= normal * (overlap * (b.radius() / sum_r));
        b.pos += normal * (overlap * (a.radius() / sum_r));
    }

    let rel_normal = (b.velocity - a.velocity).dot(normal);
    if rel_normal > 0.0 {
        return Some(ContactOutcome { overlap, impulse: 0.0 });
    }

    let (ma, mb) = (a.mass(), b.mass());
    let restitution = a.bounce().min(b.bounce());
    // Against a held body the free side sees the held velocity as a moving wall.
    let bounce_speed = -(1.0 + restitution) * rel_normal;
    let impulse = if a.is_held() {
        b.velocity += normal * bounce_speed;
        bounce_speed * mb
    } else if b.is_held() {
        a.velocity -= normal * bounce_speed;
        bounce_speed * ma
    } else {
        // 1 / (1/ma + 1/mb) == reduced mass
        let impulse = bounce_speed * (ma * mb / (ma + mb));
        a.velocity -= normal * (impulse / ma);
        b.velocity += normal * (impulse / mb);
        impulse
    };

    Some(ContactOutcome { overlap, impulse })
}
