//! Primitive collision shapes
//!
//! Plain value types describing the geometry the intersection tests
//! operate on. All three are transient, frame-local data owned by the
//! caller; none is reference-counted, shared, or retained by the
//! engine.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{transform, Mat4, Vec3};

/// An axis-aligned bounding box described by its two extreme corners.
///
/// Invariant: `min` must be componentwise less than or equal to `max`.
/// The intersection predicates assume this already holds and do not
/// re-check it; callers that may have violated it (e.g. by interactive
/// edits to either corner) should pass through
/// [`normalized`](Self::normalized) first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Componentwise minimum corner
    pub min: Vec3,
    /// Componentwise maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from its extreme corners.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box from its center and half-extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The origin-centered box `[-half_extents, half_extents]`, the
    /// local-space stand-in for an oriented box.
    pub fn symmetric(half_extents: Vec3) -> Self {
        Self::new(-half_extents, half_extents)
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half the edge length along each axis.
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Returns a copy with the `min <= max` invariant restored by
    /// swapping violated components.
    pub fn normalized(&self) -> Self {
        Self::new(
            Vec3::new(
                self.min.x.min(self.max.x),
                self.min.y.min(self.max.y),
                self.min.z.min(self.max.z),
            ),
            Vec3::new(
                self.min.x.max(self.max.x),
                self.min.y.max(self.max.y),
                self.min.z.max(self.max.z),
            ),
        )
    }
}

/// A sphere described by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center position in world space
    pub center: Vec3,
    /// Radius, expected non-negative. A negative radius is not
    /// rejected; it simply produces a sphere nothing can touch.
    pub radius: f32,
}

impl Sphere {
    /// Creates a sphere from its center and radius.
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An oriented bounding box: a center, Euler angles, the orthonormal
/// basis derived from them, and half-extents along each basis axis.
///
/// `orientations` is derived state, not independent state: it caches
/// the rows of the rotation matrix built from `rotate`, and the
/// intersection math trusts it to be orthonormal and in sync. Callers
/// that mutate `rotate` must call
/// [`update_orientation`](Self::update_orientation) before testing,
/// exactly as a per-frame loop re-derives it before each use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obb {
    /// Center position in world space
    pub center: Vec3,
    /// Euler angles (radians) the basis is derived from
    pub rotate: Vec3,
    /// The box's local X/Y/Z axes in world space; must be orthonormal
    pub orientations: [Vec3; 3],
    /// Half-extents along each local axis
    pub size: Vec3,
}

impl Obb {
    /// Creates a box with its basis derived from the given Euler angles.
    pub fn from_euler(center: Vec3, rotate: Vec3, size: Vec3) -> Self {
        Self {
            center,
            rotate,
            orientations: transform::obb_orientation(rotate),
            size,
        }
    }

    /// Creates an unrotated box (identity basis).
    pub fn axis_aligned(center: Vec3, size: Vec3) -> Self {
        Self::from_euler(center, Vec3::zeros(), size)
    }

    /// Re-derives `orientations` from the current `rotate` angles.
    pub fn update_orientation(&mut self) {
        self.orientations = transform::obb_orientation(self.rotate);
    }

    /// The box's local-to-world matrix: basis rows plus the center as
    /// the translation row.
    pub fn world_matrix(&self) -> Mat4 {
        transform::obb_world_matrix(&self.orientations, self.center)
    }

    /// All eight corners, `center ± half_x ± half_y ± half_z` where
    /// `half_i = orientations[i] * size[i]`.
    pub fn corners(&self) -> [Vec3; 8] {
        let half = [
            self.orientations[0] * self.size.x,
            self.orientations[1] * self.size.y,
            self.orientations[2] * self.size.z,
        ];
        [
            self.center + half[0] + half[1] + half[2],
            self.center + half[0] + half[1] - half[2],
            self.center + half[0] - half[1] + half[2],
            self.center + half[0] - half[1] - half[2],
            self.center - half[0] + half[1] + half[2],
            self.center - half[0] + half[1] - half[2],
            self.center - half[0] - half[1] + half[2],
            self.center - half[0] - half[1] - half[2],
        ]
    }
}
