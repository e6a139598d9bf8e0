//! Transform matrix builders and the homogeneous point transform.
//!
//! Everything here follows the row-vector convention: a matrix built by
//! these functions is applied as `point * matrix`, so composition reads
//! left to right in application order (`a * b` applies `a` first).

use super::{Mat4, Vec3};
use crate::error::MathError;

/// Scale matrix: identity with the diagonal replaced by `scale`.
pub fn scaling(scale: Vec3) -> Mat4 {
    let mut result = Mat4::identity();
    result.m[0][0] = scale.x;
    result.m[1][1] = scale.y;
    result.m[2][2] = scale.z;
    result
}

/// Translation matrix: identity with row 3 carrying `translate`.
pub fn translation(translate: Vec3) -> Mat4 {
    let mut result = Mat4::identity();
    result.m[3][0] = translate.x;
    result.m[3][1] = translate.y;
    result.m[3][2] = translate.z;
    result
}

/// Right-handed rotation about the X axis, in radians.
pub fn rotation_x(radians: f32) -> Mat4 {
    let (sin, cos) = radians.sin_cos();
    let mut result = Mat4::identity();
    result.m[1][1] = cos;
    result.m[1][2] = sin;
    result.m[2][1] = -sin;
    result.m[2][2] = cos;
    result
}

/// Right-handed rotation about the Y axis, in radians.
pub fn rotation_y(radians: f32) -> Mat4 {
    let (sin, cos) = radians.sin_cos();
    let mut result = Mat4::identity();
    result.m[0][0] = cos;
    result.m[0][2] = -sin;
    result.m[2][0] = sin;
    result.m[2][2] = cos;
    result
}

/// Right-handed rotation about the Z axis, in radians.
pub fn rotation_z(radians: f32) -> Mat4 {
    let (sin, cos) = radians.sin_cos();
    let mut result = Mat4::identity();
    result.m[0][0] = cos;
    result.m[0][1] = sin;
    result.m[1][0] = -sin;
    result.m[1][1] = cos;
    result
}

/// Combined rotation from Euler angles: intrinsic X, then Y, then Z.
pub fn rotation_xyz(angles: Vec3) -> Mat4 {
    rotation_x(angles.x) * rotation_y(angles.y) * rotation_z(angles.z)
}

/// Affine transform composed as scale, then rotate, then translate.
///
/// Compare [`str_matrix`], which translates before rotating; the two
/// orders are distinct operations used by different pipelines, not
/// interchangeable spellings of one.
pub fn affine(scale: Vec3, rotate: Vec3, translate: Vec3) -> Mat4 {
    scaling(scale) * rotation_xyz(rotate) * translation(translate)
}

/// Transform composed as scale, then translate, then rotate.
///
/// The rotation acts on the already-translated position, so this orbits
/// the origin rather than spinning in place. See [`affine`] for the
/// rotate-then-translate order.
pub fn str_matrix(scale: Vec3, rotate: Vec3, translate: Vec3) -> Mat4 {
    scaling(scale) * translation(translate) * rotation_xyz(rotate)
}

/// Extracts an oriented box's local axes from its Euler angles.
///
/// Builds [`rotation_xyz`] and reads rows 0, 1, 2 as the world-space
/// directions of the box's local X, Y, Z axes. The rows of a pure
/// rotation matrix are orthonormal, so the returned basis is too.
pub fn obb_orientation(rotate: Vec3) -> [Vec3; 3] {
    let r = rotation_xyz(rotate);
    [
        Vec3::new(r.m[0][0], r.m[0][1], r.m[0][2]),
        Vec3::new(r.m[1][0], r.m[1][1], r.m[1][2]),
        Vec3::new(r.m[2][0], r.m[2][1], r.m[2][2]),
    ]
}

/// Assembles an oriented box's local-to-world matrix from its basis and
/// center: rows 0..=2 are the orientation vectors with `w = 0`, row 3 is
/// `(center, 1)`.
pub fn obb_world_matrix(orientations: &[Vec3; 3], center: Vec3) -> Mat4 {
    Mat4::from_rows([
        [orientations[0].x, orientations[0].y, orientations[0].z, 0.0],
        [orientations[1].x, orientations[1].y, orientations[1].z, 0.0],
        [orientations[2].x, orientations[2].y, orientations[2].z, 0.0],
        [center.x, center.y, center.z, 1.0],
    ])
}

/// Transforms a point through `matrix` in homogeneous coordinates and
/// divides the result back into 3D.
///
/// # Panics
///
/// Panics when the resulting `w` component is zero: the projective
/// divide is undefined and continuing with NaN/Inf coordinates would
/// poison every computation downstream. Use [`try_transform_point`] if
/// the input matrix is not trusted.
pub fn transform_point(point: Vec3, matrix: &Mat4) -> Vec3 {
    let (result, w) = transform_homogeneous(point, matrix);
    assert!(w != 0.0, "homogeneous w component is zero; the transform is degenerate");
    result / w
}

/// Checked variant of [`transform_point`]: returns
/// [`MathError::DegenerateTransform`] instead of panicking on `w == 0`.
///
/// # Errors
///
/// Fails when the homogeneous `w` component of the transformed point is
/// zero.
pub fn try_transform_point(point: Vec3, matrix: &Mat4) -> Result<Vec3, MathError> {
    let (result, w) = transform_homogeneous(point, matrix);
    if w == 0.0 {
        Err(MathError::DegenerateTransform)
    } else {
        Ok(result / w)
    }
}

/// `(point, 1) * matrix` without the divide.
fn transform_homogeneous(point: Vec3, matrix: &Mat4) -> (Vec3, f32) {
    let m = &matrix.m;
    let x = point.x * m[0][0] + point.y * m[1][0] + point.z * m[2][0] + m[3][0];
    let y = point.x * m[0][1] + point.y * m[1][1] + point.z * m[2][1] + m[3][1];
    let z = point.x * m[0][2] + point.y * m[1][2] + point.z * m[2][2] + m[3][2];
    let w = point.x * m[0][3] + point.y * m[1][3] + point.z * m[2][3] + m[3][3];
    (Vec3::new(x, y, z), w)
}
