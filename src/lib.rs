//! Bounce Arena - an interactive bouncing-ball sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, drag interaction)
//! - `config`: Construction-time tunables
//! - `render`: Draw hand-off trait for the host rendering surface
//!
//! The crate owns the physics and interaction model only. Rendering, pointer
//! event delivery, and frame scheduling are the host's job: it feeds
//! [`sim::PointerEvent`]s in, calls [`sim::tick`] once per frame, and hands a
//! [`render::CircleRenderer`] to [`render::render`] to paint the result.

pub mod config;
pub mod render;
pub mod sim;

pub use config::SimConfig;
pub use sim::{PointerEvent, SimState, tick};

use glam::Vec2;

/// Simulation defaults, matching `SimConfig::default`
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Ball defaults
    pub const BALL_COUNT: usize = 10;
    pub const BALL_RADIUS_MIN: f32 = 8.0;
    pub const BALL_RADIUS_MAX: f32 = 18.0;
    /// Mass is pi * r^3 / MASS_DIVISOR, computed once at spawn
    pub const MASS_DIVISOR: f32 = 100.0;

    /// Velocity kept after a wall rebound
    pub const WALL_DAMPING: f32 = 0.98;

    /// Extra pick-up slack around a ball, in arena units
    pub const PICK_TOLERANCE: f32 = 15.0;
    /// Spring constant pulling a dragged ball toward the pointer
    pub const SPRING_K: f32 = 0.05;
    /// Per-tick velocity scale on the dragged ball
    pub const DRAG_FRICTION: f32 = 0.95;

    /// Placement attempts per ball before spawn gives up
    pub const SPAWN_RETRY_CAP: u32 = 128;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p: Vec2, q: Vec2) -> f32 {
    (q - p).length()
}

/// Rotate a vector counter-clockwise by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
