//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands at
//! tick boundaries, runs all systems in a fixed order with the host-supplied
//! elapsed time, and produces `RenderSnapshot`s. Completely headless (no
//! window or renderer dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::commands::SimCommand;
use starfall_core::components::{ControlAxes, ShipId, Velocity};
use starfall_core::frame::SpatialFrame;
use starfall_core::state::RenderSnapshot;
use starfall_core::types::SimTime;

use crate::camera::ViewFollower;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    next_ship_id: u32,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    camera: ViewFollower,
    followed: Option<ShipId>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_ship_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            camera: ViewFollower::default(),
            followed: None,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds (non-negative,
    /// host-supplied) and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> RenderSnapshot {
        self.process_commands();
        self.run_systems(dt);
        self.time.advance(dt);

        systems::snapshot::build_snapshot(&self.world, &self.time, self.camera.view(), self.followed)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Ship the chase camera is attached to, if any.
    pub fn followed(&self) -> Option<ShipId> {
        self.followed
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the chase camera.
    pub fn camera(&self) -> &ViewFollower {
        &self.camera
    }

    /// Spawn an adversary at an exact pose (for tests needing deterministic
    /// placement).
    #[cfg(test)]
    pub fn spawn_adversary_at(
        &mut self,
        pose: SpatialFrame,
        tuning: starfall_core::components::FlightTuning,
    ) -> ShipId {
        let id = self.allocate_ship_id();
        world_setup::spawn_adversary_ship(&mut self.world, id, pose, tuning);
        id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands naming a ship that no longer
    /// exists are ignored.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SpawnShip { pose, tuning } => {
                let id = self.allocate_ship_id();
                world_setup::spawn_player_ship(&mut self.world, id, pose, tuning);
                if self.followed.is_none() {
                    self.followed = Some(id);
                    self.camera.snap_behind(&pose);
                }
            }
            SimCommand::SpawnAdversary { tuning } => {
                if let Some(leader) = self.followed_frame() {
                    let id = self.allocate_ship_id();
                    world_setup::spawn_adversary(&mut self.world, &mut self.rng, &leader, id, tuning);
                }
            }
            SimCommand::RemoveShip { ship } => {
                if let Some(entity) = self.find_ship(ship) {
                    let _ = self.world.despawn(entity);
                }
                if self.followed == Some(ship) {
                    self.followed = None;
                }
            }
            SimCommand::SetControlAxes { ship, axes } => {
                if let Some(entity) = self.find_ship(ship) {
                    if let Ok(mut current) = self.world.get::<&mut ControlAxes>(entity) {
                        *current = axes.clamped();
                    }
                }
            }
            SimCommand::FireProjectile { ship } => {
                if let Some(entity) = self.find_ship(ship) {
                    let position = self.world.get::<&SpatialFrame>(entity).map(|f| f.position);
                    let velocity = self.world.get::<&Velocity>(entity).map(|v| v.0);
                    if let (Ok(position), Ok(velocity)) = (position, velocity) {
                        world_setup::spawn_projectile(&mut self.world, ship, position, velocity);
                    }
                }
            }
            SimCommand::SpawnHazard { position, velocity } => {
                world_setup::spawn_hazard(&mut self.world, &mut self.rng, position, velocity);
            }
            SimCommand::FollowShip { ship } => {
                if let Some(entity) = self.find_ship(ship) {
                    self.followed = Some(ship);
                    let frame = self.world.get::<&SpatialFrame>(entity).map(|f| *f);
                    if let Ok(frame) = frame {
                        self.camera.snap_behind(&frame);
                    }
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Flight dynamics (thrust, rotation, velocity targets)
        systems::flight::run(&mut self.world, dt);
        // 2. Kinematic integration for every mover
        systems::kinematics::run(&mut self.world, dt);
        // 3. Trail drag/anchor/fade
        systems::trails::run(&mut self.world, dt);
        // 4. Hazard grow-in
        systems::hazards::run(&mut self.world, dt);
        // 5. Projectile proximity kills
        systems::intercept::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Lifetime decay
        systems::lifetime::run(&mut self.world, dt, &mut self.despawn_buffer);
        // 7. Buffered despawn
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 8. Chase camera
        if let Some(frame) = self.followed_frame() {
            self.camera.follow(&frame, dt);
        }
    }

    fn allocate_ship_id(&mut self) -> ShipId {
        let id = ShipId(self.next_ship_id);
        self.next_ship_id += 1;
        id
    }

    /// Look up a ship entity by its stable id.
    fn find_ship(&self, ship: ShipId) -> Option<hecs::Entity> {
        self.world
            .query::<&ShipId>()
            .iter()
            .find(|(_, id)| **id == ship)
            .map(|(entity, _)| entity)
    }

    /// Copy of the followed ship's frame, if it is still alive.
    fn followed_frame(&self) -> Option<SpatialFrame> {
        let entity = self.find_ship(self.followed?)?;
        self.world.get::<&SpatialFrame>(entity).ok().map(|f| *f)
    }
}
