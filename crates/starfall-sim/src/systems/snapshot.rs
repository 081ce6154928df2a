//! Snapshot system: queries the ECS world and builds a complete
//! `RenderSnapshot`.
//!
//! This system is read-only — it never modifies the world. The cosmetic bank
//! angle is folded into the visual orientation here, so the physics
//! orientation it derives from stays untouched.

use glam::{Mat4, Quat, Vec3};
use hecs::World;

use starfall_core::components::*;
use starfall_core::constants::{RETICLE_FAR_DISTANCE, RETICLE_NEAR_DISTANCE};
use starfall_core::frame::SpatialFrame;
use starfall_core::state::*;
use starfall_core::trail::TrailHistory;
use starfall_core::types::SimTime;

/// Build a complete render snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    camera: CameraView,
    followed: Option<ShipId>,
) -> RenderSnapshot {
    RenderSnapshot {
        time: *time,
        ships: build_ships(world),
        trails: build_trails(world),
        projectiles: build_projectiles(world),
        hazards: build_hazards(world),
        reticles: followed.and_then(|id| build_reticles(world, id)),
        camera,
    }
}

fn build_ships(world: &World) -> Vec<ShipView> {
    let mut ships: Vec<ShipView> = world
        .query::<(
            &ShipId,
            &SpatialFrame,
            &FlightDynamics,
            &Velocity,
            Option<&Adversary>,
        )>()
        .iter()
        .map(|(_, (ship, frame, dynamics, velocity, adversary))| {
            let visual_orientation = (frame.orientation
                * Quat::from_axis_angle(Vec3::Z, dynamics.visual_bank.get()))
            .normalize();
            ShipView {
                ship: *ship,
                position: frame.position,
                orientation: frame.orientation,
                visual_orientation,
                model_transform: Mat4::from_rotation_translation(
                    visual_orientation,
                    frame.position,
                ),
                velocity: velocity.0,
                speed: velocity.speed(),
                is_adversary: adversary.is_some(),
            }
        })
        .collect();

    ships.sort_by_key(|s| s.ship.0);
    ships
}

fn build_trails(world: &World) -> Vec<TrailView> {
    let mut trails: Vec<TrailView> = world
        .query::<(&ShipId, &TrailHistory)>()
        .iter()
        .map(|(_, (ship, trail))| TrailView {
            ship: *ship,
            crossbars: trail.crossbars(),
            segments: trail.segments(),
        })
        .collect();

    trails.sort_by_key(|t| t.ship.0);
    trails
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &SpatialFrame, &Velocity)>()
        .iter()
        .map(|(_, (_, frame, velocity))| ProjectileView {
            position: frame.position,
            velocity: velocity.0,
        })
        .collect()
}

fn build_hazards(world: &World) -> Vec<HazardView> {
    world
        .query::<(&Hazard, &SpatialFrame)>()
        .iter()
        .map(|(_, (hazard, frame))| HazardView {
            position: frame.position,
            orientation: frame.orientation,
            scale: hazard.scale,
        })
        .collect()
}

/// Aim markers ahead of the followed ship. They sit along the forward
/// vector and carry the ship's orientation.
fn build_reticles(world: &World, followed: ShipId) -> Option<ReticleView> {
    world
        .query::<(&ShipId, &SpatialFrame)>()
        .iter()
        .find(|(_, (ship, _))| **ship == followed)
        .map(|(_, (_, frame))| {
            let marker = |distance: f32| {
                Mat4::from_rotation_translation(
                    frame.orientation,
                    frame.position + frame.forward() * distance,
                )
            };
            ReticleView {
                near: marker(RETICLE_NEAR_DISTANCE),
                far: marker(RETICLE_FAR_DISTANCE),
            }
        })
}
