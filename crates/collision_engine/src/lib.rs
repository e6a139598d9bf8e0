//! # Collision Engine
//!
//! 3D geometric primitives and pairwise intersection testing.
//!
//! ## Features
//!
//! - **Math Kernel**: [`Vec3`](foundation::math::Vec3) and
//!   [`Mat4`](foundation::math::Mat4) value types with the exact
//!   conventions the collision math depends on (row-major matrices,
//!   row-vector transforms, cofactor inversion)
//! - **Transform Builders**: scale/rotate/translate matrix construction,
//!   affine composition, oriented-box basis extraction
//! - **Intersection Tests**: AABB/AABB, AABB/sphere, OBB/sphere, and
//!   OBB/OBB via the separating-axis theorem over 15 candidate axes
//! - **Pure Predicates**: every test is a boolean function of its inputs;
//!   nothing is retained between calls, so independent pairs are safe to
//!   test from parallel callers
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! let fixed = Obb::axis_aligned(Vec3::zeros(), Vec3::splat(0.5));
//! let spinning = Obb::from_euler(
//!     Vec3::new(0.4, 0.2, 0.0),
//!     Vec3::new(0.0, 0.0, 0.5),
//!     Vec3::splat(0.5),
//! );
//!
//! assert!(obb_obb(&fixed, &spinning));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod error;
pub mod foundation;
pub mod physics;

pub use error::MathError;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        error::MathError,
        foundation::math::{transform, Mat4, Vec3},
        physics::collision::{aabb_aabb, aabb_sphere, obb_obb, obb_sphere, Aabb, Obb, Sphere},
    };
}
