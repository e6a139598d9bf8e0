//! Collision detection for the primitive shapes
//!
//! Narrow-phase intersection tests between axis-aligned boxes, spheres,
//! and oriented boxes. There is no broad phase, no response, and no
//! state: callers hand in shapes, the engine hands back booleans.

pub mod collision;

pub use collision::{aabb_aabb, aabb_sphere, obb_obb, obb_sphere, Aabb, Obb, Sphere};
