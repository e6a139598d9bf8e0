//! Pairwise intersection predicates
//!
//! The four narrow-phase tests: AABB/AABB, AABB/sphere, OBB/sphere, and
//! OBB/OBB via the separating-axis theorem. Touching boundaries count
//! as collision throughout. Each predicate is a pure function of its
//! inputs and mutates nothing.

use crate::foundation::math::{transform, Vec3};

use super::primitives::{Aabb, Obb, Sphere};

/// Squared-length cutoff below which a candidate separating axis is
/// considered degenerate and skipped.
const AXIS_EPSILON: f32 = 1e-6;

/// Do two axis-aligned boxes overlap?
///
/// True iff the closed intervals overlap on all three axes at once.
/// Assumes both boxes satisfy the `min <= max` invariant.
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.min.x <= b.max.x
        && a.max.x >= b.min.x
        && a.min.y <= b.max.y
        && a.max.y >= b.min.y
        && a.min.z <= b.max.z
        && a.max.z >= b.min.z
}

/// Does an axis-aligned box overlap a sphere?
///
/// Clamps the sphere center into the box to find the closest point,
/// then compares that distance against the radius.
pub fn aabb_sphere(aabb: &Aabb, sphere: &Sphere) -> bool {
    let closest = Vec3::new(
        sphere.center.x.clamp(aabb.min.x, aabb.max.x),
        sphere.center.y.clamp(aabb.min.y, aabb.max.y),
        sphere.center.z.clamp(aabb.min.z, aabb.max.z),
    );
    (closest - sphere.center).length() <= sphere.radius
}

/// Does an oriented box overlap a sphere?
///
/// Transforms the sphere center into the box's local frame through the
/// inverse of the box's world matrix, then runs the axis-aligned test
/// against the symmetric local box `[-size, size]`.
///
/// An `Obb` whose basis violates the orthonormality contract can make
/// the world matrix singular; there is no local frame to test in, so
/// the predicate reports no collision rather than dividing by zero.
pub fn obb_sphere(obb: &Obb, sphere: &Sphere) -> bool {
    let Some(world_inverse) = obb.world_matrix().try_inverse() else {
        log::trace!("obb_sphere: singular OBB world matrix, reporting no collision");
        return false;
    };
    let center_local = transform::transform_point(sphere.center, &world_inverse);

    let local_box = Aabb::symmetric(obb.size);
    let local_sphere = Sphere::new(center_local, sphere.radius);
    aabb_sphere(&local_box, &local_sphere)
}

/// Do two oriented boxes overlap? Separating-axis theorem over 15
/// candidate axes.
///
/// The candidates are the three face normals of each box plus the nine
/// pairwise cross products of their basis vectors (edge-edge axes). A
/// cross product of (near-)parallel edges has (near-)zero length and
/// carries no separation information; such axes are skipped rather than
/// normalized into garbage. The first axis whose projections separate
/// the boxes short-circuits the test; if none of the 15 separates them,
/// the boxes collide.
pub fn obb_obb(a: &Obb, b: &Obb) -> bool {
    let separating_axes: [Vec3; 15] = [
        // Face normals
        a.orientations[0],
        a.orientations[1],
        a.orientations[2],
        b.orientations[0],
        b.orientations[1],
        b.orientations[2],
        // Edge-edge cross products
        a.orientations[0].cross(b.orientations[0]),
        a.orientations[0].cross(b.orientations[1]),
        a.orientations[0].cross(b.orientations[2]),
        a.orientations[1].cross(b.orientations[0]),
        a.orientations[1].cross(b.orientations[1]),
        a.orientations[1].cross(b.orientations[2]),
        a.orientations[2].cross(b.orientations[0]),
        a.orientations[2].cross(b.orientations[1]),
        a.orientations[2].cross(b.orientations[2]),
    ];

    let corners_a = a.corners();
    let corners_b = b.corners();

    for axis in separating_axes {
        if axis.length_squared() < AXIS_EPSILON {
            // Parallel edges; no separation information on this axis
            continue;
        }
        let axis = axis.normalize();

        let (min_a, max_a) = project_corners(&corners_a, axis);
        let (min_b, max_b) = project_corners(&corners_b, axis);

        let sum_span = (max_a - min_a) + (max_b - min_b);
        let long_span = max_a.max(max_b) - min_a.min(min_b);
        if sum_span < long_span {
            // Found a separating axis
            return false;
        }
    }

    true
}

/// Min and max scalar projection of eight corners onto an axis.
fn project_corners(corners: &[Vec3; 8], axis: Vec3) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for corner in corners {
        let distance = corner.dot(axis);
        min = min.min(distance);
        max = max.max(distance);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::{HALF_PI, PI};

    fn unit_aabb() -> Aabb {
        Aabb::new(Vec3::zeros(), Vec3::ones())
    }

    #[test]
    fn test_aabb_aabb_overlapping() {
        let a = unit_aabb();
        let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
        assert!(aabb_aabb(&a, &b));
    }

    #[test]
    fn test_aabb_aabb_disjoint() {
        let a = unit_aabb();
        let b = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
        assert!(!aabb_aabb(&a, &b));
    }

    #[test]
    fn test_aabb_aabb_touching_faces_collide() {
        let a = unit_aabb();
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(aabb_aabb(&a, &b));
    }

    #[test]
    fn test_aabb_aabb_is_symmetric() {
        let a = unit_aabb();
        let pairs = [
            Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5)),
            Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0)),
            Aabb::new(Vec3::new(-1.0, 0.25, 0.25), Vec3::new(5.0, 0.75, 0.75)),
        ];
        for b in &pairs {
            assert_eq!(aabb_aabb(&a, b), aabb_aabb(b, &a));
        }
    }

    #[test]
    fn test_aabb_aabb_must_overlap_on_every_axis() {
        let a = unit_aabb();
        // Overlaps on x and y, separated on z
        let b = Aabb::new(Vec3::new(0.5, 0.5, 2.0), Vec3::new(1.5, 1.5, 3.0));
        assert!(!aabb_aabb(&a, &b));
    }

    #[test]
    fn test_aabb_sphere_disjoint() {
        // Closest corner of the box is (2,2,2), distance sqrt(12) ~ 3.46
        let aabb = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
        let sphere = Sphere::new(Vec3::zeros(), 1.0);
        assert!(!aabb_sphere(&aabb, &sphere));
    }

    #[test]
    fn test_aabb_sphere_center_inside_box() {
        let aabb = unit_aabb();
        let sphere = Sphere::new(Vec3::splat(0.5), 0.01);
        assert!(aabb_sphere(&aabb, &sphere));
    }

    #[test]
    fn test_aabb_sphere_touching_counts() {
        // Sphere center one unit left of the box face, radius exactly 1
        let aabb = unit_aabb();
        let sphere = Sphere::new(Vec3::new(-1.0, 0.5, 0.5), 1.0);
        assert!(aabb_sphere(&aabb, &sphere));

        let barely_short = Sphere::new(Vec3::new(-1.0, 0.5, 0.5), 0.99);
        assert!(!aabb_sphere(&aabb, &barely_short));
    }

    #[test]
    fn test_aabb_sphere_negative_radius_never_collides() {
        let aabb = unit_aabb();
        let inside = Sphere::new(Vec3::splat(0.5), -1.0);
        assert!(!aabb_sphere(&aabb, &inside));
    }

    #[test]
    fn test_obb_sphere_axis_aligned_matches_aabb_test() {
        let obb = Obb::axis_aligned(Vec3::splat(0.5), Vec3::splat(0.5));
        let near = Sphere::new(Vec3::new(-0.3, 0.5, 0.5), 0.5);
        let far = Sphere::new(Vec3::new(-0.3, 0.5, 0.5), 0.2);

        let equivalent_aabb = unit_aabb();
        assert_eq!(obb_sphere(&obb, &near), aabb_sphere(&equivalent_aabb, &near));
        assert_eq!(obb_sphere(&obb, &far), aabb_sphere(&equivalent_aabb, &far));
        assert!(obb_sphere(&obb, &near));
        assert!(!obb_sphere(&obb, &far));
    }

    #[test]
    fn test_obb_sphere_respects_rotation() {
        // A slab rotated 45 degrees about Z; the sphere sits on the world
        // X axis. In the slab's local frame the center projects to
        // (sqrt(2), -sqrt(2), 0), about 1.0 away from the local box.
        let obb = Obb::from_euler(
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, PI / 4.0),
            Vec3::new(1.0, 0.5, 0.5),
        );
        let sphere_center = Vec3::new(2.0, 0.0, 0.0);

        assert!(!obb_sphere(&obb, &Sphere::new(sphere_center, 0.8)));
        assert!(obb_sphere(&obb, &Sphere::new(sphere_center, 1.2)));
    }

    #[test]
    fn test_obb_sphere_degenerate_basis_reports_no_collision() {
        crate::foundation::logging::try_init();

        let mut obb = Obb::axis_aligned(Vec3::zeros(), Vec3::ones());
        // Collapse the basis: all three axes parallel, world matrix singular
        obb.orientations = [Vec3::new(1.0, 0.0, 0.0); 3];
        let sphere = Sphere::new(Vec3::zeros(), 10.0);
        assert!(!obb_sphere(&obb, &sphere));
    }

    #[test]
    fn test_obb_obb_identical_boxes_collide() {
        let obb = Obb::axis_aligned(Vec3::zeros(), Vec3::splat(0.5));
        assert!(obb_obb(&obb, &obb));

        let rotated = Obb::from_euler(
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(0.3, 0.6, -0.9),
            Vec3::new(0.83, 0.26, 0.24),
        );
        assert!(obb_obb(&rotated, &rotated));
    }

    #[test]
    fn test_obb_obb_distant_boxes_do_not_collide() {
        let a = Obb::axis_aligned(Vec3::zeros(), Vec3::splat(0.5));
        let b = Obb::axis_aligned(Vec3::splat(5.0), Vec3::splat(0.5));
        assert!(!obb_obb(&a, &b));
    }

    #[test]
    fn test_obb_obb_aligned_boxes_use_face_normals_only() {
        // Axis-aligned pair: all nine edge-edge cross products are zero
        // and must be skipped without affecting the verdict.
        let a = Obb::axis_aligned(Vec3::zeros(), Vec3::splat(0.5));

        let overlapping = Obb::axis_aligned(Vec3::splat(0.75), Vec3::splat(0.5));
        assert!(obb_obb(&a, &overlapping));

        let separated = Obb::axis_aligned(Vec3::new(1.5, 0.0, 0.0), Vec3::splat(0.4));
        assert!(!obb_obb(&a, &separated));
    }

    #[test]
    fn test_obb_obb_rotated_box_reaches_further() {
        // A cube rotated 45 degrees about Z reaches sqrt(2) * half-extent
        // along X. At center distance 2.3 the corner pokes into the
        // axis-aligned cube; at 2.5 the gap survives every axis.
        let fixed = Obb::axis_aligned(Vec3::zeros(), Vec3::ones());
        let tilted_near = Obb::from_euler(
            Vec3::new(2.3, 0.0, 0.0),
            Vec3::new(0.0, 0.0, PI / 4.0),
            Vec3::ones(),
        );
        let tilted_far = Obb::from_euler(
            Vec3::new(2.5, 0.0, 0.0),
            Vec3::new(0.0, 0.0, PI / 4.0),
            Vec3::ones(),
        );

        assert!(obb_obb(&fixed, &tilted_near));
        assert!(!obb_obb(&fixed, &tilted_far));

        // An unrotated cube at the same near distance stays clear
        let straight_near = Obb::axis_aligned(Vec3::new(2.3, 0.0, 0.0), Vec3::ones());
        assert!(!obb_obb(&fixed, &straight_near));
    }

    #[test]
    fn test_obb_obb_is_symmetric() {
        let a = Obb::from_euler(
            Vec3::zeros(),
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(0.83, 0.26, 0.24),
        );
        let pairs = [
            Obb::from_euler(
                Vec3::new(0.9, 0.66, 0.78),
                Vec3::new(-0.05, -2.49, 0.15),
                Vec3::new(0.5, 0.37, 0.5),
            ),
            Obb::axis_aligned(Vec3::splat(4.0), Vec3::splat(0.5)),
        ];
        for b in &pairs {
            assert_eq!(obb_obb(&a, b), obb_obb(b, &a));
        }
    }

    #[test]
    fn test_obb_obb_separated_by_rotation_axes() {
        // Boxes rotated about different axes, far apart on X; some
        // cross-product axes are well-formed here and none may produce
        // a false positive.
        let a = Obb::from_euler(Vec3::zeros(), Vec3::new(HALF_PI / 2.0, 0.0, 0.0), Vec3::ones());
        let b = Obb::from_euler(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, HALF_PI / 2.0, 0.0),
            Vec3::ones(),
        );
        assert!(!obb_obb(&a, &b));
    }
}
