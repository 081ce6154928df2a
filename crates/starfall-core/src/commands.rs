//! Commands the host application queues into the simulation.
//!
//! Commands are applied at the next tick boundary, before any system runs.
//! Commands referencing a ship id that no longer exists are ignored.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::{ControlAxes, FlightTuning, ShipId};
use crate::frame::SpatialFrame;

/// A host-issued command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SimCommand {
    /// Spawn a player-flown ship at the given pose.
    SpawnShip {
        pose: SpatialFrame,
        tuning: FlightTuning,
    },
    /// Spawn an AI-flown ship at a random offset from the followed ship,
    /// with its orientation copied from it.
    SpawnAdversary { tuning: FlightTuning },
    /// Remove a ship and everything it owns.
    RemoveShip { ship: ShipId },
    /// Set a ship's control axes for subsequent frames. Axes are clamped
    /// to [-1, 1] on intake.
    SetControlAxes { ship: ShipId, axes: ControlAxes },
    /// Fire a projectile from a ship's current position, inheriting its
    /// velocity.
    FireProjectile { ship: ShipId },
    /// Spawn a drifting hazard body.
    SpawnHazard { position: Vec3, velocity: Vec3 },
    /// Attach the chase camera to a ship. The camera snaps to its new seat
    /// rather than sweeping across the scene.
    FollowShip { ship: ShipId },
}
