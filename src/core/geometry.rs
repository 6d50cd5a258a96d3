use std::f32::consts::PI;

use glam::Vec3;

use super::types::Pose;
use crate::{
    collision::{
        shapes::{CuboidSolid, SphereSolid},
        solid::Solid,
    },
    error::{PhysicsError, Result},
};

/// Dimensions of a shape profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryKind {
    Sphere { radius: f32 },
    Cuboid { half_extents: Vec3 },
}

/// Immutable shape profile of a body, independent of where the body is.
///
/// Built through [`Geometry::sphere`] or [`Geometry::cuboid`], so dimensions are
/// validated before any volume or solid is derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    kind: GeometryKind,
}

impl Geometry {
    pub fn sphere(radius: f32) -> Result<Self> {
        Self::from_kind(GeometryKind::Sphere { radius })
    }

    pub fn cuboid(half_extents: Vec3) -> Result<Self> {
        Self::from_kind(GeometryKind::Cuboid { half_extents })
    }

    pub fn from_kind(kind: GeometryKind) -> Result<Self> {
        let geometry = Self::unchecked(kind);
        geometry.validate()?;
        Ok(geometry)
    }

    /// Deferred validation for builders that report errors on `build`.
    pub(crate) fn unchecked(kind: GeometryKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Rejects negative or non-finite dimensions.
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            GeometryKind::Sphere { radius } => {
                if radius.is_finite() && radius >= 0.0 {
                    Ok(())
                } else {
                    Err(PhysicsError::InvalidRadius { radius })
                }
            }
            GeometryKind::Cuboid { half_extents } => {
                if half_extents.is_finite() && half_extents.min_element() >= 0.0 {
                    Ok(())
                } else {
                    Err(PhysicsError::InvalidHalfExtents { half_extents })
                }
            }
        }
    }

    pub fn volume(&self) -> f32 {
        match self.kind {
            GeometryKind::Sphere { radius } => 4.0 / 3.0 * PI * radius.powi(3),
            GeometryKind::Cuboid { half_extents } => {
                8.0 * half_extents.x * half_extents.y * half_extents.z
            }
        }
    }

    /// Places the profile at `pose`.
    pub fn build(&self, pose: &Pose) -> Solid {
        match self.kind {
            GeometryKind::Sphere { radius } => SphereSolid::new(pose, radius).into(),
            GeometryKind::Cuboid { half_extents } => CuboidSolid::new(pose, half_extents).into(),
        }
    }
}
