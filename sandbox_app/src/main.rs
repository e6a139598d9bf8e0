//! Headless collision sandbox
//!
//! Drives the library the way a visualization frontend would, minus the
//! drawing: a fixed oriented box and a spinning one, orientation
//! re-derived from Euler angles every frame, collision state checked
//! each step and logged whenever it flips.

use collision_engine::foundation::logging;
use collision_engine::prelude::*;

/// Frames to simulate; at the spin rate below this covers a couple of
/// full revolutions of the moving box.
const FRAME_COUNT: u32 = 600;

/// Per-frame Euler angle increment for the spinning box (radians).
const SPIN_PER_FRAME: Vec3 = Vec3::new(0.0, 0.02, 0.005);

/// The demo scene: two oriented boxes and the last collision verdict.
struct Sandbox {
    fixed: Obb,
    spinning: Obb,
    colliding: bool,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            fixed: Obb::axis_aligned(Vec3::zeros(), Vec3::new(0.83, 0.26, 0.24)),
            spinning: Obb::from_euler(
                Vec3::new(0.9, 0.66, 0.78),
                Vec3::new(-0.05, -2.49, 0.15),
                Vec3::new(0.5, 0.37, 0.5),
            ),
            colliding: false,
        }
    }

    /// Advances the spinning box one frame and returns the fresh
    /// collision verdict.
    fn step(&mut self) -> bool {
        self.spinning.rotate += SPIN_PER_FRAME;
        self.spinning.update_orientation();
        obb_obb(&self.fixed, &self.spinning)
    }
}

fn main() {
    logging::init();
    log::info!("Starting collision sandbox...");

    // Static warm-up pair: a sphere against an axis-aligned box
    let sphere = Sphere::new(Vec3::zeros(), 1.0);
    let aabb = Aabb::new(Vec3::splat(0.2), Vec3::ones()).normalized();
    log::info!(
        "sphere at origin vs unit box: {}",
        if aabb_sphere(&aabb, &sphere) { "contact" } else { "clear" }
    );

    let mut sandbox = Sandbox::new();
    let mut transitions = 0u32;

    for frame in 0..FRAME_COUNT {
        let now_colliding = sandbox.step();
        if now_colliding != sandbox.colliding {
            transitions += 1;
            log::info!(
                "frame {frame}: contact {}",
                if now_colliding { "begins" } else { "ends" }
            );
            sandbox.colliding = now_colliding;
        }
    }

    log::info!("Simulated {FRAME_COUNT} frames, {transitions} contact transitions");
}
