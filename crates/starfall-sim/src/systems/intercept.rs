//! Projectile-vs-ship proximity checks.
//!
//! Reads position snapshots only and applies kills through the despawn
//! buffer, so no entity is touched mid-iteration.

use hecs::World;

use starfall_core::components::{Adversary, Projectile, ShipId};
use starfall_core::constants::PROJECTILE_HIT_RADIUS;
use starfall_core::frame::SpatialFrame;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    let mut kills: Vec<(hecs::Entity, hecs::Entity)> = Vec::new();

    {
        let mut projectiles = world.query::<(&Projectile, &SpatialFrame)>();
        for (projectile_entity, (projectile, projectile_frame)) in projectiles.iter() {
            let mut ships = world.query::<(&ShipId, &SpatialFrame, &Adversary)>();
            for (ship_entity, (ship_id, ship_frame, _adversary)) in ships.iter() {
                if *ship_id == projectile.shooter {
                    continue;
                }
                let distance = projectile_frame.position.distance(ship_frame.position);
                if distance < PROJECTILE_HIT_RADIUS {
                    kills.push((projectile_entity, ship_entity));
                    break;
                }
            }
        }
    }

    for (projectile_entity, ship_entity) in kills {
        despawn_buffer.push(projectile_entity);
        despawn_buffer.push(ship_entity);
    }
}
