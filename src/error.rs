//! Error types for the physics engine.

use glam::Vec3;
use thiserror::Error;

/// Errors raised while building or stepping a world.
///
/// Malformed shapes and masses are rejected when a body is constructed; the tick
/// itself can only fail through [`PhysicsError::DivisionByZero`].
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Sphere radius was negative or not finite.
    #[error("invalid sphere radius {radius}")]
    InvalidRadius { radius: f32 },
    /// A cuboid half extent was negative or not finite.
    #[error("invalid cuboid half extents {half_extents}")]
    InvalidHalfExtents { half_extents: Vec3 },
    /// Mass was negative or not finite.
    #[error("invalid mass {mass}")]
    InvalidMass { mass: f32 },
    /// Ambient fluid density was negative or not finite.
    #[error("invalid air density {density}")]
    InvalidAirDensity { density: f32 },
    /// A vector was divided by a zero scalar.
    #[error("vector division by zero")]
    DivisionByZero,
    /// A world configuration document could not be parsed.
    #[error("invalid world configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = PhysicsError> = std::result::Result<T, E>;
