//! Global configuration constants and world settings for the Tangible Physics engine.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// Default gravity vector applied in the physics world (Y-up).
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -9.81, 0.0];

/// Default ambient fluid density (sea-level air, kg/m³).
pub const DEFAULT_AIR_DENSITY: f32 = 1.225;

/// Coefficient of drag of a perfect sphere.
pub const SPHERE_DRAG_COEFFICIENT: f32 = 0.5;

/// Coefficient of drag of a cube moving face-on.
pub const CUBOID_DRAG_COEFFICIENT: f32 = 1.05;

/// Settings a [`World`](crate::world::World) is created from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub gravity: Vec3,
    pub air_density: f32,
    /// Ticks slower than this many milliseconds are logged as warnings.
    pub tick_budget_ms: Option<f32>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::from_array(DEFAULT_GRAVITY),
            air_density: DEFAULT_AIR_DENSITY,
            tick_budget_ms: None,
        }
    }
}

impl WorldConfig {
    /// Parses a JSON document, filling missing fields with defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_air_density(mut self, air_density: f32) -> Self {
        self.air_density = air_density;
        self
    }

    pub fn with_tick_budget_ms(mut self, budget_ms: f32) -> Self {
        self.tick_budget_ms = Some(budget_ms);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_air_density(self.air_density)
    }
}

pub(crate) fn validate_air_density(density: f32) -> Result<()> {
    if density.is_finite() && density >= 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidAirDensity { density })
    }
}
