//! Error types for the checked math entry points.
//!
//! Most of the crate handles numeric degeneracy by policy rather than by
//! error value: a zero-length [`Vec3`](crate::foundation::math::Vec3)
//! normalizes to the zero vector, a singular
//! [`Mat4`](crate::foundation::math::Mat4) inverts to the all-zero
//! matrix, and [`Mat4::try_inverse`](crate::foundation::math::Mat4::try_inverse)
//! reports singularity as `None`. The one condition the crate treats as
//! a caller error is a degenerate projective divide; its checked variant
//! surfaces a value of this type instead of panicking.

use thiserror::Error;

/// Failure of a checked math operation on degenerate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The homogeneous `w` component came out zero, so the projective
    /// divide is undefined. The unchecked
    /// [`transform_point`](crate::foundation::math::transform::transform_point)
    /// treats this as a fatal precondition violation and panics.
    #[error("homogeneous w component is zero; the transform is degenerate")]
    DegenerateTransform,
}
