use glam::{Quat, Vec3};

use super::{
    geometry::{Geometry, GeometryKind},
    types::{Pose, Triangle},
};
use crate::{
    collision::solid::Solid,
    error::{PhysicsError, Result},
    utils::allocator::EntityId,
};

/// A simulated body: pose, motion, mass, and an optional shape.
///
/// `velocity` is integrated straight into `position` every tick; gravity, drag and
/// collisions act on it directly. Bodies without a geometry still move and fall but
/// never touch anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: EntityId,
    pub position: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
    /// Angular velocity as a scaled axis, radians per second.
    pub spin: Vec3,
    mass: f32,
    geometry: Option<Geometry>,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            id: EntityId::default(),
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            spin: Vec3::ZERO,
            mass: 0.0,
            geometry: None,
        }
    }
}

impl Body {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn builder() -> BodyBuilder {
        BodyBuilder::new()
    }

    /// Identifier assigned by the world; null until the body is added.
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.orientation)
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f32) -> Result<()> {
        validate_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn has_geometry(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn set_geometry(&mut self, geometry: Option<Geometry>) -> Result<()> {
        if let Some(geometry) = &geometry {
            geometry.validate()?;
        }
        self.geometry = geometry;
        Ok(())
    }

    pub fn volume(&self) -> f32 {
        self.geometry.map_or(0.0, |geometry| geometry.volume())
    }

    pub fn density(&self) -> f32 {
        let volume = self.volume();
        if volume == 0.0 {
            return 0.0;
        }
        self.mass / volume
    }

    /// The body's geometry placed at its current pose.
    pub fn solid(&self) -> Option<Solid> {
        self.geometry.map(|geometry| geometry.build(&self.pose()))
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        match (self.solid(), other.solid()) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => false,
        }
    }

    pub fn overlaps_solid(&self, solid: &Solid) -> bool {
        self.solid().is_some_and(|own| own.overlaps(solid))
    }

    pub fn vertices(&self) -> Vec<Triangle> {
        self.solid().map(|solid| solid.vertices()).unwrap_or_default()
    }

    /// Drag coefficient against the oncoming flow, i.e. seen from `-velocity`.
    pub fn drag_coefficient(&self) -> Option<f32> {
        self.solid()
            .map(|solid| solid.drag_coefficient(-self.velocity))
    }

    /// Cross-section against the oncoming flow, i.e. seen from `-velocity`.
    pub fn cross_section(&self) -> Option<f32> {
        self.solid().map(|solid| solid.cross_section(-self.velocity))
    }

    pub fn move_by(&mut self, amount: Vec3) {
        self.position += amount;
    }

    pub fn accelerate(&mut self, amount: Vec3) {
        self.velocity += amount;
    }

    pub fn rotate(&mut self, rotation: Quat) {
        self.orientation = (rotation * self.orientation).normalize();
    }
}

fn validate_mass(mass: f32) -> Result<()> {
    if mass.is_finite() && mass >= 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass { mass })
    }
}

pub struct BodyBuilder {
    body: Body,
}

impl Default for BodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self {
            body: Body::default(),
        }
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.body.position = position;
        self
    }

    pub fn orientation(mut self, orientation: Quat) -> Self {
        self.body.orientation = orientation;
        self
    }

    pub fn velocity(mut self, velocity: Vec3) -> Self {
        self.body.velocity = velocity;
        self
    }

    pub fn spin(mut self, spin: Vec3) -> Self {
        self.body.spin = spin;
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.body.mass = mass;
        self
    }

    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.body.geometry = Some(geometry);
        self
    }

    pub fn sphere(self, radius: f32) -> Self {
        self.geometry(Geometry::unchecked(GeometryKind::Sphere { radius }))
    }

    pub fn cuboid(self, half_extents: Vec3) -> Self {
        self.geometry(Geometry::unchecked(GeometryKind::Cuboid { half_extents }))
    }

    /// Validates mass and geometry before the body can enter a world.
    pub fn build(self) -> Result<Body> {
        validate_mass(self.body.mass)?;
        if let Some(geometry) = &self.body.geometry {
            geometry.validate()?;
        }
        Ok(self.body)
    }
}
