//! Additional math helpers layered on top of `glam`.

use glam::{Quat, Vec3};

use crate::error::{PhysicsError, Result};

/// Divides a vector by a scalar, failing instead of producing infinities.
pub fn checked_div(vector: Vec3, divisor: f32) -> Result<Vec3> {
    if divisor == 0.0 {
        return Err(PhysicsError::DivisionByZero);
    }
    Ok(vector / divisor)
}

/// Converts angular velocity vector (radians/sec) into a quaternion delta.
///
/// Only a zero or non-finite rotation maps to identity; small steps still
/// accumulate across ticks.
pub fn angular_velocity_to_quat(angular: Vec3, dt: f32) -> Quat {
    let scaled = angular * dt;
    if scaled.length_squared() == 0.0 || !scaled.is_finite() {
        return Quat::IDENTITY;
    }
    Quat::from_scaled_axis(scaled)
}
