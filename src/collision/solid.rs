use glam::Vec3;

use super::shapes::{CuboidSolid, SphereSolid};
use crate::core::types::Triangle;

/// A geometry profile bound to a body's current pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solid {
    Sphere(SphereSolid),
    Cuboid(CuboidSolid),
}

impl Solid {
    pub fn centroid(&self) -> Vec3 {
        match self {
            Solid::Sphere(sphere) => sphere.center,
            Solid::Cuboid(cuboid) => cuboid.pose.position,
        }
    }

    /// Corner points of the solid; empty for shapes without flat faces.
    pub fn corners(&self) -> Vec<Vec3> {
        match self {
            Solid::Sphere(_) => Vec::new(),
            Solid::Cuboid(cuboid) => cuboid.corners(),
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        match self {
            Solid::Sphere(sphere) => sphere.contains(point),
            Solid::Cuboid(cuboid) => cuboid.contains(point),
        }
    }

    /// Overlap rule for every ordered pair of variants.
    ///
    /// Mixed pairs share one arm so `a.overlaps(b) == b.overlaps(a)` holds for every
    /// combination.
    pub fn overlaps(&self, other: &Solid) -> bool {
        match (self, other) {
            (Solid::Sphere(a), Solid::Sphere(b)) => a.overlaps_sphere(b),
            (Solid::Sphere(sphere), Solid::Cuboid(cuboid))
            | (Solid::Cuboid(cuboid), Solid::Sphere(sphere)) => {
                sphere.contains_any(&cuboid.corners())
            }
            (Solid::Cuboid(a), Solid::Cuboid(b)) => a.overlaps_cuboid(b),
        }
    }

    pub fn volume(&self) -> f32 {
        match self {
            Solid::Sphere(sphere) => sphere.volume(),
            Solid::Cuboid(cuboid) => cuboid.volume(),
        }
    }

    pub fn surface_area(&self) -> f32 {
        match self {
            Solid::Sphere(sphere) => sphere.surface_area(),
            Solid::Cuboid(cuboid) => cuboid.surface_area(),
        }
    }

    /// Coefficient of drag when the solid is seen from `direction`.
    pub fn drag_coefficient(&self, direction: Vec3) -> f32 {
        match self {
            Solid::Sphere(sphere) => sphere.drag_coefficient(direction),
            Solid::Cuboid(cuboid) => cuboid.drag_coefficient(direction),
        }
    }

    /// Area presented to a flow arriving from `direction`.
    pub fn cross_section(&self, direction: Vec3) -> f32 {
        match self {
            Solid::Sphere(sphere) => sphere.cross_section(direction),
            Solid::Cuboid(cuboid) => cuboid.cross_section(direction),
        }
    }

    /// Triangles for rendering. Not used by the simulation.
    pub fn vertices(&self) -> Vec<Triangle> {
        match self {
            Solid::Sphere(sphere) => sphere.vertices(),
            Solid::Cuboid(cuboid) => cuboid.vertices(),
        }
    }
}

impl From<SphereSolid> for Solid {
    fn from(sphere: SphereSolid) -> Self {
        Solid::Sphere(sphere)
    }
}

impl From<CuboidSolid> for Solid {
    fn from(cuboid: CuboidSolid) -> Self {
        Solid::Cuboid(cuboid)
    }
}
