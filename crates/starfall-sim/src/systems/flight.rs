//! Flight dynamics system.
//!
//! Converts each ship's raw control axes into damped thrust and rotation,
//! derives a target velocity from the ship's own basis vectors, and applies
//! local-axis rotations in a fixed order. Position integration is left to
//! the kinematics system so ships share it with every other mover.

use glam::Vec3;
use hecs::World;

use starfall_core::components::{ControlAxes, FlightDynamics, Velocity};
use starfall_core::constants::*;
use starfall_core::frame::SpatialFrame;
use starfall_core::math::Damp;

/// Advance every ship's flight state by `dt` seconds.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (frame, dynamics, velocity, axes)) in world.query_mut::<(
        &mut SpatialFrame,
        &mut FlightDynamics,
        &mut Velocity,
        &ControlAxes,
    )>() {
        let tuning = dynamics.tuning;

        // Momentum on the stick: thrust channels trail the raw input.
        let thrust = dynamics
            .smooth_thrust
            .advance(axes.thrust, tuning.throttle_response, dt);
        let strafe = dynamics
            .smooth_strafe
            .advance(axes.strafe, tuning.throttle_response, dt);
        let lift = dynamics
            .smooth_lift
            .advance(axes.lift, tuning.throttle_response, dt);

        // Reverse thrust is deliberately weaker than forward.
        let thrust_scale = if thrust > 0.0 {
            1.0
        } else {
            REVERSE_THRUST_SCALE
        };

        let target_velocity = frame.forward() * (tuning.max_speed * thrust_scale * thrust)
            + frame.up() * (tuning.max_speed * LATERAL_THRUST_SCALE * lift)
            + frame.left() * (tuning.max_speed * LATERAL_THRUST_SCALE * strafe);

        velocity.0 = velocity.0.damp(target_velocity, VELOCITY_RESPONSE, dt);

        // Inertia on the turn: rotation channels trail the raw input too.
        let pitch = dynamics
            .smooth_pitch
            .advance(axes.pitch, tuning.turn_response, dt);
        let roll = dynamics
            .smooth_roll
            .advance(axes.roll, tuning.turn_response, dt);
        let yaw = dynamics
            .smooth_yaw
            .advance(axes.yaw, tuning.turn_response, dt);

        // Pilot rotations, local space, fixed order: roll, pitch, yaw.
        frame.rotate_local(Vec3::Z, roll * tuning.turn_rate * dt);
        frame.rotate_local(Vec3::X, pitch * tuning.turn_rate * dt);
        frame.rotate_local(Vec3::Y, yaw * tuning.turn_rate * dt);

        // Auto-roll toward the horizon, skipped in steep climbs and dives
        // where the correction would oscillate.
        if frame.forward().y.abs() < AUTO_LEVEL_LIMIT {
            let correction = frame.right().y;
            frame.rotate_local(
                Vec3::Z,
                correction * tuning.turn_rate * AUTO_LEVEL_RATE_SCALE * dt,
            );
        }

        // Yawing and strafing bank the model for visual flavor. This only
        // feeds the rendered transform, never the physics orientation.
        let bank_target =
            (BANK_PER_YAW_DEG * yaw + BANK_PER_STRAFE_DEG * strafe).to_radians();
        dynamics.visual_bank.advance(bank_target, BANK_RESPONSE, dt);
    }
}
