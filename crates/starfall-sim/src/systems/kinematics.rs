//! Kinematic integration: position += velocity * dt for every mover.
//!
//! Ships, projectiles, and hazards all carry the same `Velocity` component,
//! so one pass moves all of them.

use hecs::World;

use starfall_core::components::Velocity;
use starfall_core::frame::SpatialFrame;

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (frame, velocity)) in world.query_mut::<(&mut SpatialFrame, &Velocity)>() {
        frame.position += velocity.0 * dt;
    }
}
