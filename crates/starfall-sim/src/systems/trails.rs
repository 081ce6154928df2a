//! Trail maintenance: drag, anchor, and fade each ship's ribbon.
//!
//! Runs after kinematics so the active rung sits behind the ship's
//! post-integration position.

use hecs::World;

use starfall_core::components::FlightDynamics;
use starfall_core::constants::TRAIL_RUNG_SPACING;
use starfall_core::frame::SpatialFrame;
use starfall_core::trail::TrailHistory;

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (frame, dynamics, trail)) in
        world.query_mut::<(&SpatialFrame, &FlightDynamics, &mut TrailHistory)>()
    {
        let half_width = dynamics.tuning.hull_width / 2.0;
        let half_length = dynamics.tuning.hull_length / 2.0;

        trail.reposition_active(frame, half_width, half_length);
        trail.maybe_advance(frame.position, TRAIL_RUNG_SPACING);
        trail.decay(dt);
    }
}
