use glam::Vec3;

use crate::core::body::Body;

/// Medium around a body during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surroundings {
    /// Ambient density, raised to that of the densest body currently touching.
    pub fluid_density: f32,
}

/// Trait describing an environmental force acting on a body's velocity.
pub trait ForceGenerator: Send + Sync {
    fn apply(&self, body: &mut Body, surroundings: &Surroundings, dt: f32);
}

/// Uniform gravity, applied to every body whether or not it has a shape.
pub struct GravityForce {
    pub gravity: Vec3,
}

impl GravityForce {
    pub fn new(gravity: Vec3) -> Self {
        Self { gravity }
    }
}

impl ForceGenerator for GravityForce {
    fn apply(&self, body: &mut Body, _surroundings: &Surroundings, dt: f32) {
        body.accelerate(self.gravity * dt);
    }
}

/// One-shot fluid resistance that scales velocity down toward zero.
///
/// This is an explicit step, not an ODE solve: it is only well behaved for small `dt`.
/// Kinetic energy is taken as `0.5 * m * |v|` (not `|v|²`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FluidDrag;

impl FluidDrag {
    /// Factor in `[0, 1]` to scale the body's velocity by, or `None` when drag is skipped.
    ///
    /// Skipped for bodies without a shape, for a drag force that is non-finite or not
    /// positive, and for bodies with no kinetic energy.
    pub fn deceleration_ratio(body: &Body, fluid_density: f32, dt: f32) -> Option<f32> {
        let solid = body.solid()?;
        let oncoming = -body.velocity;
        let speed_squared = body.velocity.length_squared();

        let drag_force = solid.drag_coefficient(oncoming)
            * fluid_density
            * solid.cross_section(oncoming)
            * speed_squared;
        if !drag_force.is_finite() || drag_force <= 0.0 {
            return None;
        }

        let kinetic_energy = 0.5 * body.mass() * speed_squared.sqrt();
        if kinetic_energy == 0.0 || !kinetic_energy.is_finite() {
            return None;
        }

        Some((1.0 - drag_force * dt / kinetic_energy).clamp(0.0, 1.0))
    }
}

impl ForceGenerator for FluidDrag {
    fn apply(&self, body: &mut Body, surroundings: &Surroundings, dt: f32) {
        match Self::deceleration_ratio(body, surroundings.fluid_density, dt) {
            Some(ratio) => body.velocity *= ratio,
            None => log::trace!("drag skipped for body {}", body.id()),
        }
    }
}
