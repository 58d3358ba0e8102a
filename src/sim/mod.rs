//! Deterministic simulation module
//!
//! All physics and interaction logic lives here. The module is pure and
//! deterministic:
//! - Unit time step only (one tick = one step, no delta-time scaling)
//! - Seeded RNG only, and only at spawn
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pointer;
pub mod state;
pub mod tick;

pub use collision::resolve_pair;
pub use pointer::{Pointer, PointerEvent};
pub use state::{Arena, Ball, Hsl, SimState, SpawnError};
pub use tick::tick;
