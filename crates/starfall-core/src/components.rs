//! ECS components for hecs entities.
//!
//! Components are plain data; per-frame logic lives in the sim crate's
//! systems. Ships carry a `SpatialFrame` + `FlightDynamics` + `TrailHistory`
//! bundle, while projectiles and hazards share the leaner
//! `SpatialFrame` + `Velocity` (+ `Lifetime`) contract and are moved by the
//! same kinematics system.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::math::Smoothed;

/// Stable identifier for a ship, assigned at spawn. Commands reference ships
/// by this rather than by raw entity handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipId(pub u32);

/// Marks the ship the player is flying.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerControlled;

/// Marks an AI-flown ship. Adversaries are valid intercept targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Adversary;

/// Normalized control axes for one frame, each in [-1, 1].
///
/// Positive thrust is forward, positive strafe is leftward, positive lift is
/// upward; pitch is nose-down, roll is rightward, yaw is leftward, matching
/// the sign conventions of the local-rotation step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ControlAxes {
    pub thrust: f32,
    pub strafe: f32,
    pub lift: f32,
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl ControlAxes {
    /// Clamp every axis into [-1, 1].
    pub fn clamped(self) -> Self {
        Self {
            thrust: self.thrust.clamp(-1.0, 1.0),
            strafe: self.strafe.clamp(-1.0, 1.0),
            lift: self.lift.clamp(-1.0, 1.0),
            pitch: self.pitch.clamp(-1.0, 1.0),
            roll: self.roll.clamp(-1.0, 1.0),
            yaw: self.yaw.clamp(-1.0, 1.0),
        }
    }
}

/// Per-ship handling characteristics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlightTuning {
    /// Top speed at full forward thrust (units/s).
    pub max_speed: f32,
    /// Damping rate pulling smoothed thrust channels toward raw input.
    pub throttle_response: f32,
    /// Rotation rate at full deflection (degrees/s).
    pub turn_rate: f32,
    /// Damping rate pulling smoothed rotation channels toward raw input.
    pub turn_response: f32,
    /// Hull length, used to place trail rungs at the stern.
    pub hull_length: f32,
    /// Hull width, used to set trail ribbon width.
    pub hull_width: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            max_speed: 50.0,
            throttle_response: 10.0,
            turn_rate: 50.0,
            turn_response: 10.0,
            hull_length: 1.0,
            hull_width: 1.0,
        }
    }
}

/// Continuous flight state for one ship: damped input channels and the
/// cosmetic bank angle. The integrated velocity lives in the shared
/// [`Velocity`] component so ships ride the same kinematics system as
/// everything else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightDynamics {
    pub tuning: FlightTuning,

    pub smooth_thrust: Smoothed<f32>,
    pub smooth_strafe: Smoothed<f32>,
    pub smooth_lift: Smoothed<f32>,

    pub smooth_pitch: Smoothed<f32>,
    pub smooth_roll: Smoothed<f32>,
    pub smooth_yaw: Smoothed<f32>,

    /// Visual-only bank angle (radians). Folded into the rendered transform,
    /// never into the physics orientation.
    pub visual_bank: Smoothed<f32>,
}

impl FlightDynamics {
    pub fn new(tuning: FlightTuning) -> Self {
        Self {
            tuning,
            ..Default::default()
        }
    }
}

/// World-space velocity, integrated into position by the kinematics system.
/// Shared by ships, projectiles, and drifting hazards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

impl Velocity {
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

/// Remaining lifetime of a decaying entity; expired entities are despawned
/// by the cleanup system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining: f32,
}

impl Lifetime {
    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Marks a fired projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Ship that fired it (excluded from its own intercept checks).
    pub shooter: ShipId,
}

/// A drifting hazard body. Spawns at zero scale and grows in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    pub scale: f32,
}

impl Hazard {
    /// Grow toward full size, clamped at 1.
    pub fn grow(&mut self, dt: f32) {
        self.scale = (self.scale + HAZARD_GROW_RATE * dt).min(1.0);
    }
}
