//! Tests for the simulation engine: flight dynamics, trails, projectiles,
//! hazards, and the chase camera.

use glam::Vec3;

use starfall_core::commands::SimCommand;
use starfall_core::components::*;
use starfall_core::constants::*;
use starfall_core::frame::SpatialFrame;
use starfall_core::trail::TrailHistory;

use crate::camera::ViewFollower;
use crate::engine::{SimConfig, SimulationEngine};
use crate::systems;
use crate::world_setup;

const DT: f32 = 1.0 / 60.0;

fn engine_with_ship() -> (SimulationEngine, ShipId) {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(SimCommand::SpawnShip {
        pose: SpatialFrame::default(),
        tuning: FlightTuning::default(),
    });
    engine.tick(0.0);
    (engine, ShipId(0))
}

fn set_axes(engine: &mut SimulationEngine, ship: ShipId, axes: ControlAxes) {
    engine.queue_command(SimCommand::SetControlAxes { ship, axes });
}

fn ship_frame(engine: &SimulationEngine, ship: ShipId) -> SpatialFrame {
    engine
        .world()
        .query::<(&ShipId, &SpatialFrame)>()
        .iter()
        .find(|(_, (id, _))| **id == ship)
        .map(|(_, (_, frame))| *frame)
        .expect("ship should exist")
}

fn ship_velocity(engine: &SimulationEngine, ship: ShipId) -> Vec3 {
    engine
        .world()
        .query::<(&ShipId, &Velocity)>()
        .iter()
        .find(|(_, (id, _))| **id == ship)
        .map(|(_, (_, velocity))| velocity.0)
        .expect("ship should exist")
}

fn trail_active_index(engine: &SimulationEngine, ship: ShipId) -> usize {
    engine
        .world()
        .query::<(&ShipId, &TrailHistory)>()
        .iter()
        .find(|(_, (id, _))| **id == ship)
        .map(|(_, (_, trail))| trail.active_index())
        .expect("ship should exist")
}

// ---- Flight dynamics ----

#[test]
fn test_full_thrust_approaches_max_speed_along_forward() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            thrust: 1.0,
            ..Default::default()
        },
    );

    // Five seconds of full forward thrust.
    for _ in 0..300 {
        engine.tick(DT);
    }

    let velocity = ship_velocity(&engine, ship);
    let tuning = FlightTuning::default();
    assert!(
        (velocity.length() - tuning.max_speed).abs() < tuning.max_speed * 0.01,
        "speed should be within 1% of max, was {}",
        velocity.length()
    );

    let forward = ship_frame(&engine, ship).forward();
    assert!(
        velocity.normalize().dot(forward) > 0.999,
        "travel direction should match forward()"
    );
}

#[test]
fn test_reverse_thrust_is_weaker() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            thrust: -1.0,
            ..Default::default()
        },
    );

    for _ in 0..300 {
        engine.tick(DT);
    }

    let speed = ship_velocity(&engine, ship).length();
    let expected = FlightTuning::default().max_speed * REVERSE_THRUST_SCALE;
    assert!(
        (speed - expected).abs() < expected * 0.01,
        "reverse terminal speed should be {expected}, was {speed}"
    );

    let forward = ship_frame(&engine, ship).forward();
    assert!(ship_velocity(&engine, ship).dot(forward) < 0.0);
}

#[test]
fn test_zero_input_bleeds_off_velocity() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            thrust: 1.0,
            ..Default::default()
        },
    );
    for _ in 0..120 {
        engine.tick(DT);
    }
    assert!(ship_velocity(&engine, ship).length() > 40.0);

    set_axes(&mut engine, ship, ControlAxes::default());
    for _ in 0..360 {
        engine.tick(DT);
    }

    assert!(
        ship_velocity(&engine, ship).length() < 1e-3,
        "velocity should bleed off to near zero"
    );

    let before = ship_frame(&engine, ship).position;
    engine.tick(DT);
    let after = ship_frame(&engine, ship).position;
    assert!(
        before.distance(after) < 1e-4,
        "position should have stopped changing"
    );
}

#[test]
fn test_auto_level_rolls_back_to_horizon() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            roll: 1.0,
            ..Default::default()
        },
    );
    for _ in 0..30 {
        engine.tick(DT);
    }

    let banked = ship_frame(&engine, ship).right().y.abs();
    assert!(banked > 0.2, "ship should have rolled off horizon, got {banked}");

    // Hands off: the auto-level correction takes over.
    set_axes(&mut engine, ship, ControlAxes::default());
    for _ in 0..600 {
        engine.tick(DT);
    }

    let leveled = ship_frame(&engine, ship).right().y.abs();
    assert!(
        leveled < 0.02,
        "auto-level should pull roll back toward horizon, still at {leveled}"
    );
}

#[test]
fn test_auto_level_skipped_near_vertical() {
    // Nose pitched 85 degrees up and rolled: forward().y is above the
    // auto-level limit, so with zero input the orientation must not move.
    let mut pose = SpatialFrame::default();
    pose.rotate_local(Vec3::X, -85.0);
    pose.rotate_local(Vec3::Z, 30.0);
    assert!(pose.forward().y.abs() >= AUTO_LEVEL_LIMIT);

    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(SimCommand::SpawnShip {
        pose,
        tuning: FlightTuning::default(),
    });
    engine.tick(0.0);

    let before = ship_frame(&engine, ShipId(0)).orientation;
    for _ in 0..60 {
        engine.tick(DT);
    }
    let after = ship_frame(&engine, ShipId(0)).orientation;

    assert!(
        before.angle_between(after) < 1e-4,
        "near-vertical ship with zero input should hold orientation"
    );
}

#[test]
fn test_visual_bank_never_touches_physics_orientation() {
    let (mut engine, ship) = engine_with_ship();

    // Hold yaw and strafe: the model banks, and yaw also turns the ship.
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            yaw: 1.0,
            strafe: 1.0,
            ..Default::default()
        },
    );
    let mut snapshot = engine.tick(DT);
    for _ in 0..60 {
        snapshot = engine.tick(DT);
    }

    let view = &snapshot.ships[0];
    assert!(
        view.orientation.angle_between(view.visual_orientation) > 0.1,
        "sustained yaw should bank the rendered model"
    );
    // The physics orientation in the snapshot is exactly the world's.
    let frame = ship_frame(&engine, ship);
    assert!(frame.orientation.angle_between(view.orientation) < 1e-6);
}

#[test]
fn test_local_rotation_sign_conventions() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            pitch: 1.0,
            ..Default::default()
        },
    );
    for _ in 0..30 {
        engine.tick(DT);
    }
    assert!(
        ship_frame(&engine, ship).forward().y < -0.1,
        "positive pitch input is nose-down"
    );
}

// ---- Trails ----

#[test]
fn test_trail_advances_exactly_twice_across_two_spacings() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            thrust: 1.0,
            ..Default::default()
        },
    );

    // Small steps so each tick moves well under one rung spacing; stop in
    // the window where exactly two anchors have been passed.
    let small_dt = 1.0 / 240.0;
    let mut guard = 0;
    while ship_frame(&engine, ship).position.z < TRAIL_RUNG_SPACING * 2.45 {
        engine.tick(small_dt);
        guard += 1;
        assert!(guard < 20_000, "ship never covered the test distance");
    }

    assert_eq!(
        trail_active_index(&engine, ship),
        2,
        "active rung index should advance once per spacing traveled"
    );
}

#[test]
fn test_snapshot_excludes_active_rung_crossbar() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            thrust: 1.0,
            ..Default::default()
        },
    );

    // Four seconds at near max speed laps the 16-slot ring several times,
    // so every slot has been refrozen recently and all 16 rungs are alive.
    let mut snapshot = engine.tick(DT);
    for _ in 0..240 {
        snapshot = engine.tick(DT);
    }

    let trail = snapshot.trails.iter().find(|t| t.ship == ship).unwrap();

    // 16 alive rungs: the active one is excluded from the crossbar list,
    // and exactly one adjacent pair (the wrap seam) produces no band.
    assert_eq!(trail.crossbars.len(), TRAIL_RUNG_COUNT - 1);
    assert_eq!(trail.segments.len(), TRAIL_RUNG_COUNT - 1);
}

// ---- Projectiles and intercepts ----

#[test]
fn test_projectile_expires_after_lifetime() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            thrust: 1.0,
            ..Default::default()
        },
    );
    for _ in 0..60 {
        engine.tick(DT);
    }

    engine.queue_command(SimCommand::FireProjectile { ship });
    engine.tick(DT);
    assert_eq!(engine.world().query::<&Projectile>().iter().count(), 1);

    // Lifetime is one second; run well past it.
    for _ in 0..70 {
        engine.tick(DT);
    }
    assert_eq!(
        engine.world().query::<&Projectile>().iter().count(),
        0,
        "projectile should expire and despawn"
    );
}

#[test]
fn test_intercept_kills_projectile_and_adversary() {
    let mut world = hecs::World::new();
    world_setup::spawn_projectile(&mut world, ShipId(0), Vec3::ZERO, Vec3::ZERO);
    world_setup::spawn_adversary_ship(
        &mut world,
        ShipId(1),
        SpatialFrame::from_position(Vec3::new(PROJECTILE_HIT_RADIUS * 0.5, 0.0, 0.0)),
        FlightTuning::default(),
    );

    let mut despawn_buffer = Vec::new();
    systems::intercept::run(&mut world, &mut despawn_buffer);
    assert_eq!(despawn_buffer.len(), 2);

    systems::cleanup::run(&mut world, &mut despawn_buffer);
    assert_eq!(world.query::<&Projectile>().iter().count(), 0);
    assert_eq!(world.query::<&Adversary>().iter().count(), 0);
}

#[test]
fn test_intercept_ignores_shooter_and_distant_ships() {
    let mut world = hecs::World::new();
    // Projectile sitting on top of its own shooter's id.
    world_setup::spawn_projectile(&mut world, ShipId(1), Vec3::ZERO, Vec3::ZERO);
    world_setup::spawn_adversary_ship(
        &mut world,
        ShipId(1),
        SpatialFrame::default(),
        FlightTuning::default(),
    );
    world_setup::spawn_adversary_ship(
        &mut world,
        ShipId(2),
        SpatialFrame::from_position(Vec3::new(50.0, 0.0, 0.0)),
        FlightTuning::default(),
    );

    let mut despawn_buffer = Vec::new();
    systems::intercept::run(&mut world, &mut despawn_buffer);
    assert!(despawn_buffer.is_empty(), "no valid kill geometry here");
}

// ---- Hazards ----

#[test]
fn test_hazard_drifts_and_grows_to_full_scale() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(SimCommand::SpawnHazard {
        position: Vec3::ZERO,
        velocity: Vec3::new(1.0, 0.0, 0.0),
    });

    let mut snapshot = engine.tick(0.0);
    for _ in 0..120 {
        snapshot = engine.tick(DT);
    }

    assert_eq!(snapshot.hazards.len(), 1);
    let hazard = &snapshot.hazards[0];
    assert_eq!(hazard.scale, 1.0, "scale should clamp at full size");
    assert!(
        (hazard.position.x - 2.0).abs() < 0.05,
        "hazard should drift with its velocity"
    );
}

// ---- Ships and adversaries ----

#[test]
fn test_adversary_spawns_at_range_with_leader_orientation() {
    let (mut engine, ship) = engine_with_ship();
    engine.queue_command(SimCommand::SpawnAdversary {
        tuning: FlightTuning::default(),
    });
    engine.tick(0.0);

    let player = ship_frame(&engine, ship);
    let adversary = ship_frame(&engine, ShipId(1));

    let distance = player.position.distance(adversary.position);
    assert!(
        (distance - ADVERSARY_SPAWN_RANGE).abs() < 1e-3,
        "adversary should appear at spawn range, was {distance}"
    );
    assert!(player.orientation.angle_between(adversary.orientation) < 1e-5);
}

#[test]
fn test_remove_ship_despawns_it_and_detaches_camera() {
    let (mut engine, ship) = engine_with_ship();
    assert_eq!(engine.followed(), Some(ship));

    engine.queue_command(SimCommand::RemoveShip { ship });
    let snapshot = engine.tick(DT);

    assert!(snapshot.ships.is_empty());
    assert!(snapshot.trails.is_empty());
    assert!(snapshot.reticles.is_none());
    assert_eq!(engine.followed(), None);
}

#[test]
fn test_commands_with_stale_ship_ids_are_ignored() {
    let (mut engine, _ship) = engine_with_ship();
    let stale = ShipId(99);
    engine.queue_commands([
        SimCommand::SetControlAxes {
            ship: stale,
            axes: ControlAxes::default(),
        },
        SimCommand::FireProjectile { ship: stale },
        SimCommand::RemoveShip { ship: stale },
        SimCommand::FollowShip { ship: stale },
    ]);
    let snapshot = engine.tick(DT);

    assert_eq!(snapshot.ships.len(), 1, "the real ship should be untouched");
    assert_eq!(engine.world().query::<&Projectile>().iter().count(), 0);
}

#[test]
fn test_control_axes_clamped_on_intake() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            thrust: 5.0,
            ..Default::default()
        },
    );
    for _ in 0..300 {
        engine.tick(DT);
    }

    // Over-driven input must not exceed the clamped top speed.
    let speed = ship_velocity(&engine, ship).length();
    assert!(speed <= FlightTuning::default().max_speed * 1.01);
}

// ---- Chase camera ----

#[test]
fn test_camera_settles_into_chase_seat() {
    let (mut engine, ship) = engine_with_ship();
    set_axes(
        &mut engine,
        ship,
        ControlAxes {
            thrust: 1.0,
            ..Default::default()
        },
    );
    for _ in 0..120 {
        engine.tick(DT);
    }
    set_axes(&mut engine, ship, ControlAxes::default());
    for _ in 0..600 {
        engine.tick(DT);
    }

    let frame = ship_frame(&engine, ship);
    let seat = frame.transform_point(CAMERA_CHASE_OFFSET);
    let aim = frame.position + frame.forward() * CAMERA_LOOK_AHEAD;

    let camera = engine.camera();
    assert!(
        camera.position.distance(seat) < 0.01,
        "camera should settle into the chase seat once the ship stops"
    );
    assert!(camera.target.distance(aim) < 0.05);
    assert!((camera.up - frame.up()).length() < 0.01);
}

#[test]
fn test_follow_command_snaps_without_sweep() {
    let (mut engine, _player) = engine_with_ship();
    let far_pose = SpatialFrame::from_position(Vec3::new(500.0, 0.0, 0.0));
    let adversary = engine.spawn_adversary_at(far_pose, FlightTuning::default());

    engine.queue_command(SimCommand::FollowShip { ship: adversary });
    engine.tick(0.0);

    let seat = far_pose.transform_point(CAMERA_CHASE_OFFSET);
    assert!(
        engine.camera().position.distance(seat) < 1e-3,
        "attaching the camera should snap, not sweep across the scene"
    );
}

#[test]
fn test_view_follower_set_immediate_is_exact() {
    let mut follower = ViewFollower::default();
    let position = Vec3::new(3.0, 4.0, 5.0);
    let target = Vec3::new(0.0, 1.0, 0.0);
    follower.set_immediate(position, target, Vec3::Y);
    assert_eq!(follower.position, position);
    assert_eq!(follower.target, target);
    assert_eq!(follower.up, Vec3::Y);
}

#[test]
fn test_view_follower_converges_to_static_pose() {
    let mut follower = ViewFollower::default();
    let position = Vec3::new(10.0, 2.0, -4.0);
    let target = Vec3::new(0.0, 0.0, 30.0);
    for _ in 0..600 {
        follower.move_to(position, target, Vec3::Y, DT);
    }
    assert!(follower.position.distance(position) < 1e-3);
    assert!(follower.target.distance(target) < 1e-2);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let build = || {
        let mut engine = SimulationEngine::new(SimConfig { seed: 12345 });
        engine.queue_commands([
            SimCommand::SpawnShip {
                pose: SpatialFrame::default(),
                tuning: FlightTuning::default(),
            },
            SimCommand::SpawnAdversary {
                tuning: FlightTuning::default(),
            },
            SimCommand::SpawnHazard {
                position: Vec3::new(5.0, 0.0, 20.0),
                velocity: Vec3::new(0.0, 0.0, -1.0),
            },
            SimCommand::SetControlAxes {
                ship: ShipId(0),
                axes: ControlAxes {
                    thrust: 1.0,
                    yaw: 0.3,
                    ..Default::default()
                },
            },
        ]);
        engine
    };

    let mut engine_a = build();
    let mut engine_b = build();

    for _ in 0..240 {
        let snap_a = engine_a.tick(DT);
        let snap_b = engine_b.tick(DT);
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with same seed");
    }
}

#[test]
fn test_different_seeds_place_adversaries_differently() {
    let spawn = |seed: u64| {
        let mut engine = SimulationEngine::new(SimConfig { seed });
        engine.queue_commands([
            SimCommand::SpawnShip {
                pose: SpatialFrame::default(),
                tuning: FlightTuning::default(),
            },
            SimCommand::SpawnAdversary {
                tuning: FlightTuning::default(),
            },
        ]);
        engine.tick(0.0);
        ship_frame(&engine, ShipId(1)).position
    };

    assert!(
        spawn(1).distance(spawn(2)) > 1e-3,
        "different seeds should produce different spawn offsets"
    );
}
