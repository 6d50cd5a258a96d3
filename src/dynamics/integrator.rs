use crate::{core::body::Body, utils::math::angular_velocity_to_quat};

/// Integrator responsible for stepping a body's pose forward in time.
///
/// Single explicit stage: `velocity` moves `position` directly and `spin` turns
/// `orientation`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator;

impl Integrator {
    pub fn new() -> Self {
        Self
    }

    pub fn integrate(&self, body: &mut Body, dt: f32) {
        body.move_by(body.velocity * dt);
        body.rotate(angular_velocity_to_quat(body.spin, dt));
    }
}
