//! Intersection testing between geometric primitives
//!
//! # Architecture
//!
//! - **Frame-Local Values**: shapes are plain `Copy` data owned by the
//!   caller; nothing survives a call into this module
//! - **Derived Orientation**: an oriented box's basis is recomputed from
//!   its Euler angles (see [`Obb::update_orientation`]) rather than
//!   stored as independent state
//! - **Pure Predicates**: every test reads its inputs and returns a
//!   `bool`; repeated calls are idempotent and independent pairs can be
//!   tested from parallel callers
//!
//! # Module Organization
//!
//! - [`primitives`] - The shape types ([`Aabb`], [`Sphere`], [`Obb`])
//! - [`intersect`] - The four pairwise intersection predicates

pub mod intersect;
pub mod primitives;

pub use intersect::{aabb_aabb, aabb_sphere, obb_obb, obb_sphere};
pub use primitives::{Aabb, Obb, Sphere};
