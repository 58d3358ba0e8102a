//! Simulation state and core entity types
//!
//! Everything needed to reproduce a run lives here: the ball set is built
//! from `(SimConfig, seed)` alone, and iteration order (spawn order) is
//! stable for the lifetime of the simulation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::SimConfig;
use crate::distance;
use crate::sim::pointer::Pointer;

/// Display color in HSL space, matching the spawn palette
/// (random hue, 50% saturation, 50% lightness). Physics never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: f32,
    /// Saturation, [0, 1]
    pub s: f32,
    /// Lightness, [0, 1]
    pub l: f32,
}

impl Hsl {
    /// Convert to 8-bit RGB for renderers that want raw channels
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let hp = self.h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.l - c / 2.0;
        [
            ((r1 + m) * 255.0).round() as u8,
            ((g1 + m) * 255.0).round() as u8,
            ((b1 + m) * 255.0).round() as u8,
        ]
    }
}

/// The arena rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// A ball entity
///
/// `radius` and `mass` are fixed at spawn; `pos` and `vel` are mutated by
/// exactly one of the collision resolver, the boundary integration step, or
/// the pointer controller per tick phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub color: Hsl,
}

impl Ball {
    /// Create a ball, deriving mass from the radius.
    ///
    /// Mass grows with r^3 so large balls feel noticeably heavier both in
    /// collisions and under the drag spring.
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Hsl, mass_divisor: f32) -> Self {
        let mass = std::f32::consts::PI * radius.powi(3) / mass_divisor;
        Self {
            pos,
            vel,
            radius,
            mass,
            color,
        }
    }

    /// Advance one unit time step and correct against the arena walls.
    ///
    /// Position moves first; each wall is then checked independently. A
    /// crossed wall clamps the ball's edge onto it and forces the normal
    /// velocity component inward at `damping` times its magnitude. The
    /// within-tick overshoot before the clamp is intended behavior.
    pub fn integrate(&mut self, arena: Arena, damping: f32) {
        self.pos += self.vel;

        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x = self.vel.x.abs() * damping;
        }
        if self.pos.x + self.radius > arena.width {
            self.pos.x = arena.width - self.radius;
            self.vel.x = -self.vel.x.abs() * damping;
        }
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel.y = self.vel.y.abs() * damping;
        }
        if self.pos.y + self.radius > arena.height {
            self.pos.y = arena.height - self.radius;
            self.vel.y = -self.vel.y.abs() * damping;
        }
    }
}

/// Placement failure during spawn
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnError {
    /// Rejection sampling exhausted its retry cap: the arena cannot fit
    /// ball `index` without overlapping an already-placed ball.
    NoRoom { index: usize, attempts: u32 },
}

impl std::fmt::Display for SpawnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnError::NoRoom { index, attempts } => write!(
                f,
                "cannot place ball {index} without overlap after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed, kept for diagnostics
    pub seed: u64,
    /// Construction-time parameters
    pub config: SimConfig,
    /// Ball set in spawn order; cardinality never changes
    pub balls: Vec<Ball>,
    /// Pointer / drag interaction state
    pub pointer: Pointer,
    /// Tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// Build a simulation from config and seed.
    ///
    /// Balls are rejection-sampled so no two overlap at spawn. Each ball
    /// gets up to `spawn_retry_cap` attempts (radius and position are both
    /// re-rolled per attempt); running out is a `SpawnError`, never a hang.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SpawnError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let arena = Arena {
            width: config.arena_width,
            height: config.arena_height,
        };

        let mut balls: Vec<Ball> = Vec::with_capacity(config.ball_count);
        for index in 0..config.ball_count {
            let mut placed = false;
            for _attempt in 0..config.spawn_retry_cap {
                let radius = rng.random_range(config.radius_min..config.radius_max);
                if radius * 2.0 >= arena.width || radius * 2.0 >= arena.height {
                    // Ball larger than the arena can never fit
                    continue;
                }
                let pos = Vec2::new(
                    rng.random_range(radius..arena.width - radius),
                    rng.random_range(radius..arena.height - radius),
                );
                let overlaps = balls
                    .iter()
                    .any(|other| distance(pos, other.pos) < radius + other.radius);
                if overlaps {
                    continue;
                }

                let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
                let color = Hsl {
                    h: rng.random_range(0.0..360.0),
                    s: 0.5,
                    l: 0.5,
                };
                balls.push(Ball::new(pos, vel, radius, color, config.mass_divisor));
                placed = true;
                break;
            }
            if !placed {
                return Err(SpawnError::NoRoom {
                    index,
                    attempts: config.spawn_retry_cap,
                });
            }
        }

        log::info!(
            "spawned {} balls in {}x{} arena (seed {seed})",
            balls.len(),
            arena.width,
            arena.height
        );

        Ok(Self {
            seed,
            config,
            balls,
            pointer: Pointer::default(),
            time_ticks: 0,
        })
    }

    /// Arena rectangle for this run
    pub fn arena(&self) -> Arena {
        Arena {
            width: self.config.arena_width,
            height: self.config.arena_height,
        }
    }
}
