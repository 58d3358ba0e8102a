//! Simulation tunables
//!
//! Everything here is fixed once a `SimState` is constructed; there is no
//! runtime reconfiguration. The demo binary can load a `SimConfig` from a
//! JSON file to experiment with different setups.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Construction-time simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width in arena units
    pub arena_width: f32,
    /// Arena height in arena units
    pub arena_height: f32,

    /// Number of balls spawned at init (cardinality never changes)
    pub ball_count: usize,
    /// Smallest spawn radius (inclusive)
    pub radius_min: f32,
    /// Largest spawn radius (exclusive)
    pub radius_max: f32,
    /// Mass = pi * r^3 / mass_divisor
    pub mass_divisor: f32,

    /// Fraction of the normal velocity kept after a wall rebound
    pub wall_damping: f32,
    /// Extra radius slack when picking a ball with the pointer
    pub pick_tolerance: f32,
    /// Spring constant of the drag pull
    pub spring_k: f32,
    /// Per-tick velocity scale applied to the dragged ball
    pub drag_friction: f32,

    /// Placement attempts per ball before spawn reports failure
    pub spawn_retry_cap: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_count: BALL_COUNT,
            radius_min: BALL_RADIUS_MIN,
            radius_max: BALL_RADIUS_MAX,
            mass_divisor: MASS_DIVISOR,
            wall_damping: WALL_DAMPING,
            pick_tolerance: PICK_TOLERANCE,
            spring_k: SPRING_K,
            drag_friction: DRAG_FRICTION,
            spawn_retry_cap: SPAWN_RETRY_CAP,
        }
    }
}

impl SimConfig {
    /// Check that the parameters describe a runnable simulation.
    ///
    /// Catches sign errors and inverted ranges, not unwinnable placement;
    /// an over-packed arena is reported by spawn itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::BadArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if self.radius_min <= 0.0 || self.radius_max <= self.radius_min {
            return Err(ConfigError::BadRadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        if self.mass_divisor <= 0.0 {
            return Err(ConfigError::BadScalar("mass_divisor", self.mass_divisor));
        }
        if !(0.0..=1.0).contains(&self.wall_damping) {
            return Err(ConfigError::BadScalar("wall_damping", self.wall_damping));
        }
        if !(0.0..=1.0).contains(&self.drag_friction) {
            return Err(ConfigError::BadScalar("drag_friction", self.drag_friction));
        }
        if self.spring_k < 0.0 {
            return Err(ConfigError::BadScalar("spring_k", self.spring_k));
        }
        if self.spawn_retry_cap == 0 {
            return Err(ConfigError::BadScalar("spawn_retry_cap", 0.0));
        }
        Ok(())
    }
}

/// Rejected `SimConfig` values
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    BadArena { width: f32, height: f32 },
    BadRadiusRange { min: f32, max: f32 },
    BadScalar(&'static str, f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::BadArena { width, height } => {
                write!(f, "arena dimensions must be positive, got {width}x{height}")
            }
            ConfigError::BadRadiusRange { min, max } => {
                write!(f, "invalid radius range [{min}, {max})")
            }
            ConfigError::BadScalar(name, value) => {
                write!(f, "invalid value {value} for {name}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_radius_range() {
        let config = SimConfig {
            radius_min: 18.0,
            radius_max: 8.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadRadiusRange { .. })
        ));
    }

    #[test]
    fn test_rejects_damping_above_one() {
        let config = SimConfig {
            wall_damping: 1.5,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_defaults() {
        let json = serde_json::to_string(&SimConfig::default()).unwrap();
        let parsed: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ball_count, BALL_COUNT);
        assert_eq!(parsed.spring_k, SPRING_K);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let parsed: SimConfig = serde_json::from_str(r#"{"ball_count": 3}"#).unwrap();
        assert_eq!(parsed.ball_count, 3);
        assert_eq!(parsed.arena_width, ARENA_WIDTH);
    }
}
