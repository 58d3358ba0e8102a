//! Per-frame simulation step
//!
//! The host's scheduler calls `tick` once per frame; the step is unit time
//! regardless of wall-clock spacing. Phase order is fixed and load-bearing
//! for reproducibility:
//!
//! 1. Collision phase: every unordered pair, `i < j`, one pass. Corrections
//!    are visible to later pairs in the same pass (no double-buffering).
//! 2. Integration phase: every ball in index order; the dragged ball gets
//!    the drag friction scale first, then the same wall-corrected Euler step
//!    as everyone else.

use crate::sim::collision::resolve_pair;
use crate::sim::state::SimState;

/// Advance the simulation by one tick.
pub fn tick(state: &mut SimState) {
    let arena = state.arena();

    // Collision phase. Split borrows around the pivot so both balls of a
    // pair can be mutated in place.
    let ball_count = state.balls.len();
    for i in 0..ball_count {
        let (head, tail) = state.balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            resolve_pair(a, b);
        }
    }

    // Integration phase
    let dragged = state.pointer.dragged;
    let damping = state.config.wall_damping;
    let friction = state.config.drag_friction;
    for (index, ball) in state.balls.iter_mut().enumerate() {
        if dragged == Some(index) {
            // Keeps the spring-follow stable: without this the pointer
            // spring pumps energy in every move event and the ball
            // oscillates ever wider.
            ball.vel *= friction;
        }
        ball.integrate(arena, damping);
    }

    state.time_ticks += 1;
}
