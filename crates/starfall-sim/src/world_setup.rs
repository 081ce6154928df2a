//! Entity spawn factories.
//!
//! Builds the component bundles for ships, projectiles, and hazards so the
//! engine's command handling stays declarative.

use glam::{EulerRot, Quat, Vec3};
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::*;
use starfall_core::constants::*;
use starfall_core::frame::SpatialFrame;
use starfall_core::trail::TrailHistory;

/// Spawn a player-flown ship at the given pose.
pub fn spawn_player_ship(
    world: &mut World,
    id: ShipId,
    pose: SpatialFrame,
    tuning: FlightTuning,
) -> hecs::Entity {
    world.spawn((
        id,
        PlayerControlled,
        pose,
        Velocity::default(),
        ControlAxes::default(),
        FlightDynamics::new(tuning),
        TrailHistory::new(pose.position),
    ))
}

/// Spawn an AI-flown ship at a random offset from a leader frame, with its
/// orientation copied from the leader.
pub fn spawn_adversary(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    leader: &SpatialFrame,
    id: ShipId,
    tuning: FlightTuning,
) -> hecs::Entity {
    let direction = random_unit_vector(rng);
    let pose = SpatialFrame::new(
        leader.position + direction * ADVERSARY_SPAWN_RANGE,
        leader.orientation,
    );
    spawn_adversary_ship(world, id, pose, tuning)
}

/// Spawn an AI-flown ship at an exact pose.
pub fn spawn_adversary_ship(
    world: &mut World,
    id: ShipId,
    pose: SpatialFrame,
    tuning: FlightTuning,
) -> hecs::Entity {
    world.spawn((
        id,
        Adversary,
        pose,
        Velocity::default(),
        ControlAxes::default(),
        FlightDynamics::new(tuning),
        TrailHistory::new(pose.position),
    ))
}

/// Spawn a projectile at the shooter's position, inheriting its velocity.
pub fn spawn_projectile(
    world: &mut World,
    shooter: ShipId,
    position: Vec3,
    ship_velocity: Vec3,
) -> hecs::Entity {
    world.spawn((
        Projectile { shooter },
        SpatialFrame::from_position(position),
        Velocity(ship_velocity * PROJECTILE_LAUNCH_SCALE),
        Lifetime {
            remaining: PROJECTILE_LIFETIME,
        },
    ))
}

/// Spawn a drifting hazard with a random fixed orientation. It grows in
/// from zero scale.
pub fn spawn_hazard(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Vec3,
    velocity: Vec3,
) -> hecs::Entity {
    let orientation = Quat::from_euler(
        EulerRot::XYZ,
        rng.gen_range(1.0..7.0),
        rng.gen_range(1.0..7.0),
        rng.gen_range(1.0..7.0),
    );

    world.spawn((
        Hazard { scale: 0.0 },
        SpatialFrame::new(position, orientation),
        Velocity(velocity),
    ))
}

/// Uniform random direction, normalized. Rejects near-zero samples so the
/// normalize never divides by zero.
fn random_unit_vector(rng: &mut ChaCha8Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if v.length_squared() > 1e-4 {
            return v.normalize();
        }
    }
}
