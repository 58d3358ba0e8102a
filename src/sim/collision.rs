//! Pairwise ball collision detection and response
//!
//! Overlapping balls are handled in two independent steps: positional
//! correction (mass-weighted separation along the center line, removing the
//! full overlap at once) and a 1-D elastic velocity exchange along the same
//! axis. Tangential velocity is never touched - this is a frictionless,
//! non-rotational model.

use crate::sim::state::Ball;
use crate::{distance, rotate};

/// Detect and resolve a collision between one unordered pair.
///
/// No-op when the balls do not overlap. Callers iterate `i < j` over the
/// ball set once per tick; corrections made here are visible to later pairs
/// in the same pass.
///
/// Coincident centers give `atan2(0, 0) = 0` as the collision normal - a
/// physically degenerate but well-defined outcome.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball) {
    let dist = distance(a.pos, b.pos);
    if dist > a.radius + b.radius {
        return;
    }

    let delta = b.pos - a.pos;
    let angle = delta.y.atan2(delta.x);
    let normal = glam::Vec2::new(angle.cos(), angle.sin());

    // Separate fully in one step, heavier ball moving less
    let overlap = (a.radius + b.radius) - dist;
    let total_mass = a.mass + b.mass;
    a.pos -= normal * (overlap * b.mass / total_mass);
    b.pos += normal * (overlap * a.mass / total_mass);

    // Rotate into the collision frame: x is the normal component
    let u1 = rotate(a.vel, -angle);
    let u2 = rotate(b.vel, -angle);

    // 1-D elastic exchange on the normal axis only
    let v1 = ((a.mass - b.mass) * u1.x + 2.0 * b.mass * u2.x) / total_mass;
    let v2 = ((b.mass - a.mass) * u2.x + 2.0 * a.mass * u1.x) / total_mass;

    a.vel = rotate(glam::Vec2::new(v1, u1.y), angle);
    b.vel = rotate(glam::Vec2::new(v2, u2.y), angle);
}
