//! Elastic collision response between two circular bodies
//!
//! The pair is rotated into the collision frame (line of centers on the
//! x-axis), the 1D elastic equation is applied along that axis, and the
//! result is rotated back. Tangential components pass through untouched.

use glam::Vec2;

use super::body::Body;
use crate::rotate;

/// True when the pair is closing in (or momentarily at rest) along the line
/// of centers. Pairs already moving apart are left alone.
#[inline]
pub fn approaching(a: &Body, b: &Body) -> bool {
    let dv = a.vel - b.vel;
    let dd = b.pos - a.pos;
    dv.x * dd.x + dv.y * dd.y >= 0.0
}

/// Post-collision velocities for a 1D elastic exchange along x, returned as
/// `(v1, v2)`. Conserves momentum and kinetic energy for any positive masses;
/// equal masses simply trade their x-components.
///
/// Uses the textbook `(m1 - m2)` / `(m2 - m1)` signs rather than the swapped
/// form sometimes quoted for this exchange, which conserves neither quantity
/// when the masses differ.
#[inline]
pub fn elastic_exchange(u1: Vec2, u2: Vec2, m1: f32, m2: f32) -> (Vec2, Vec2) {
    let total = m1 + m2;
    let v1 = Vec2::new((u1.x * (m1 - m2) + 2.0 * m2 * u2.x) / total, u1.y);
    let v2 = Vec2::new((u2.x * (m2 - m1) + 2.0 * m1 * u1.x) / total, u2.y);
    (v1, v2)
}

/// Resolve a collision between two overlapping bodies, updating both
/// velocities in place.
///
/// Caller guarantees the bodies overlap; `a.mass + b.mass` must be > 0.
/// Separating pairs are a no-op, and nothing but velocity is touched (no
/// positional correction).
pub fn resolve_collision(a: &mut Body, b: &mut Body) {
    if !approaching(a, b) {
        return;
    }

    let angle = -(b.pos.y - a.pos.y).atan2(b.pos.x - a.pos.x);

    let u1 = rotate(a.vel, angle);
    let u2 = rotate(b.vel, angle);

    let (v1, v2) = elastic_exchange(u1, u2, a.mass, b.mass);

    a.vel = rotate(v1, -angle);
    b.vel = rotate(v2, -angle);
}

/// Mutable references to two distinct elements of a slice
///
/// Panics if `i == j` or either index is out of bounds.
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j, "pair_mut requires distinct indices");
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
