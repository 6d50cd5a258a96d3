use std::f32::consts::PI;

use glam::{Quat, Vec3};

use crate::{
    config::{CUBOID_DRAG_COEFFICIENT, SPHERE_DRAG_COEFFICIENT},
    core::types::{Pose, Triangle},
};

/// A sphere placed in world space. It has no corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSolid {
    pub center: Vec3,
    pub orientation: Quat,
    pub radius: f32,
}

impl SphereSolid {
    pub fn new(pose: &Pose, radius: f32) -> Self {
        Self {
            center: pose.position,
            orientation: pose.orientation,
            radius,
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Two spheres touch when the squared center distance is within the sum of
    /// their squared radii.
    pub fn overlaps_sphere(&self, other: &SphereSolid) -> bool {
        self.center.distance_squared(other.center)
            <= self.radius * self.radius + other.radius * other.radius
    }

    pub fn contains_any(&self, points: &[Vec3]) -> bool {
        points.iter().any(|point| self.contains(*point))
    }

    pub fn volume(&self) -> f32 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    pub fn surface_area(&self) -> f32 {
        4.0 * PI * self.radius * self.radius
    }

    pub fn drag_coefficient(&self, _direction: Vec3) -> f32 {
        SPHERE_DRAG_COEFFICIENT
    }

    pub fn cross_section(&self, _direction: Vec3) -> f32 {
        PI * self.radius * self.radius
    }

    /// Coarse octahedral decomposition, enough to see position and spin.
    pub fn vertices(&self) -> Vec<Triangle> {
        let r = self.radius;
        let pose = Pose::new(self.center, self.orientation);
        let a = pose.transform_point(Vec3::new(r, 0.0, 0.0));
        let b = pose.transform_point(Vec3::new(-r, 0.0, 0.0));
        let c = pose.transform_point(Vec3::new(0.0, r, 0.0));
        let d = pose.transform_point(Vec3::new(0.0, -r, 0.0));
        let e = pose.transform_point(Vec3::new(0.0, 0.0, r));
        let f = pose.transform_point(Vec3::new(0.0, 0.0, -r));

        vec![
            Triangle::new(a, f, d),
            Triangle::new(a, c, f),
            Triangle::new(b, f, c),
            Triangle::new(d, f, b),
            Triangle::new(a, e, c),
            Triangle::new(a, d, e),
            Triangle::new(c, e, b),
            Triangle::new(b, e, d),
        ]
    }
}

/// An oriented box placed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidSolid {
    pub pose: Pose,
    pub half_extents: Vec3,
}

impl CuboidSolid {
    const CORNER_SIGNS: [Vec3; 8] = [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];

    // Two triangles per face, outward winding, indexing CORNER_SIGNS.
    const FACES: [[usize; 3]; 12] = [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 6, 2],
        [3, 7, 6],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];

    pub fn new(pose: &Pose, half_extents: Vec3) -> Self {
        Self {
            pose: *pose,
            half_extents,
        }
    }

    pub fn corners(&self) -> Vec<Vec3> {
        Self::CORNER_SIGNS
            .iter()
            .map(|sign| self.pose.transform_point(*sign * self.half_extents))
            .collect()
    }

    pub fn contains(&self, point: Vec3) -> bool {
        let local = self.pose.inverse_transform_point(point).abs();
        // Corners sit exactly on the boundary; allow for rotation round-off.
        let slack = self.half_extents.max_element() * 1e-5;
        local.cmple(self.half_extents + Vec3::splat(slack)).all()
    }

    pub fn contains_any(&self, points: &[Vec3]) -> bool {
        points.iter().any(|point| self.contains(*point))
    }

    /// World-space directions of the box's local X, Y and Z axes.
    pub fn axes(&self) -> [Vec3; 3] {
        let rotation = self.pose.orientation;
        [rotation * Vec3::X, rotation * Vec3::Y, rotation * Vec3::Z]
    }

    /// Half the length of the box's shadow on `axis`.
    fn projected_radius(&self, axes: &[Vec3; 3], axis: Vec3) -> f32 {
        axes[0].dot(axis).abs() * self.half_extents.x
            + axes[1].dot(axis).abs() * self.half_extents.y
            + axes[2].dot(axis).abs() * self.half_extents.z
    }

    /// Separating axis test over both boxes' face normals and their nine edge
    /// cross products. Boxes whose faces just touch count as overlapping.
    pub fn overlaps_cuboid(&self, other: &CuboidSolid) -> bool {
        let offset = other.pose.position - self.pose.position;
        let axes_a = self.axes();
        let axes_b = other.axes();

        let mut test_axes = Vec::with_capacity(15);
        test_axes.extend_from_slice(&axes_a);
        test_axes.extend_from_slice(&axes_b);
        for axis_a in &axes_a {
            for axis_b in &axes_b {
                let axis = axis_a.cross(*axis_b);
                // Parallel edges are already covered by the face normals.
                if axis.length_squared() > 1e-6 {
                    test_axes.push(axis.normalize());
                }
            }
        }

        let slack = self.half_extents.max_element().max(other.half_extents.max_element()) * 1e-5;
        test_axes.into_iter().all(|axis| {
            let reach = self.projected_radius(&axes_a, axis) + other.projected_radius(&axes_b, axis);
            offset.dot(axis).abs() <= reach + slack
        })
    }

    pub fn volume(&self) -> f32 {
        8.0 * self.half_extents.x * self.half_extents.y * self.half_extents.z
    }

    pub fn surface_area(&self) -> f32 {
        let h = self.half_extents;
        8.0 * (h.x * h.y + h.y * h.z + h.x * h.z)
    }

    pub fn drag_coefficient(&self, _direction: Vec3) -> f32 {
        CUBOID_DRAG_COEFFICIENT
    }

    /// Area of the box's shadow on a plane perpendicular to `direction`.
    pub fn cross_section(&self, direction: Vec3) -> f32 {
        let local = (self.pose.orientation.inverse() * direction.normalize_or_zero()).abs();
        let h = self.half_extents;
        4.0 * (h.y * h.z * local.x + h.x * h.z * local.y + h.x * h.y * local.z)
    }

    pub fn vertices(&self) -> Vec<Triangle> {
        let corners = self.corners();
        Self::FACES
            .iter()
            .map(|[a, b, c]| Triangle::new(corners[*a], corners[*b], corners[*c]))
            .collect()
    }
}
