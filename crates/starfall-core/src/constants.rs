//! Simulation constants and tuning parameters.
//!
//! The flight-feel numbers (reverse-thrust scale, auto-level threshold and
//! rate, bank angles) are tuned values with no physical derivation; treat
//! them as knobs, not invariants.

use glam::Vec3;

// --- Flight dynamics ---

/// Damping rate pulling velocity toward the thrust-derived target.
/// Fixed, independent of per-ship throttle response.
pub const VELOCITY_RESPONSE: f32 = 2.5;

/// Speed multiplier when the smoothed thrust channel is negative.
/// Reverse thrust is deliberately weaker than forward thrust.
pub const REVERSE_THRUST_SCALE: f32 = 0.33;

/// Lateral and vertical thrusters run at half of main engine power.
pub const LATERAL_THRUST_SCALE: f32 = 0.5;

/// Auto-level only engages while |forward().y| is below this, so a steep
/// climb or dive never fights the corrective roll.
pub const AUTO_LEVEL_LIMIT: f32 = 0.8;

/// Auto-level roll rate as a fraction of the ship's turn rate.
pub const AUTO_LEVEL_RATE_SCALE: f32 = 0.5;

// --- Visual bank (cosmetic, never enters physics state) ---

/// Bank contribution per unit of smoothed yaw input (degrees).
pub const BANK_PER_YAW_DEG: f32 = -30.0;

/// Bank contribution per unit of smoothed strafe input (degrees).
pub const BANK_PER_STRAFE_DEG: f32 = -15.0;

/// Damping rate for the visual bank angle.
pub const BANK_RESPONSE: f32 = 10.0;

// --- Trail ribbon ---

/// Ring-buffer capacity per trail. Never resized.
pub const TRAIL_RUNG_COUNT: usize = 16;

/// Seconds a frozen rung stays visible.
pub const TRAIL_RUNG_TTL: f32 = 2.0;

/// Distance the owner must travel before the active rung freezes and the
/// next slot takes over.
pub const TRAIL_RUNG_SPACING: f32 = 2.0;

// --- Chase camera ---

/// Damping rate for camera position. Tighter than aim on purpose: lag in
/// rotation is far more nauseating than lag in translation.
pub const CAMERA_POSITION_RESPONSE: f32 = 20.0;

/// Damping rate for camera look-target and up vector.
pub const CAMERA_AIM_RESPONSE: f32 = 5.0;

/// Camera seat in the followed ship's local space.
pub const CAMERA_CHASE_OFFSET: Vec3 = Vec3::new(0.0, 1.0, -1.0);

/// How far ahead of the ship the camera aims.
pub const CAMERA_LOOK_AHEAD: f32 = 25.0;

// --- Aim reticles ---

/// Near aim marker distance along the ship's forward vector.
pub const RETICLE_NEAR_DISTANCE: f32 = 20.0;

/// Far aim marker distance along the ship's forward vector.
pub const RETICLE_FAR_DISTANCE: f32 = 40.0;

// --- Projectiles ---

/// Muzzle velocity multiplier applied to the firing ship's velocity.
pub const PROJECTILE_LAUNCH_SCALE: f32 = 400.0;

/// Seconds before a projectile expires.
pub const PROJECTILE_LIFETIME: f32 = 1.0;

/// Proximity radius for a projectile-vs-ship kill.
pub const PROJECTILE_HIT_RADIUS: f32 = 0.3;

// --- Hazards ---

/// Scale growth per second while a hazard fades in, clamped at full size.
pub const HAZARD_GROW_RATE: f32 = 0.7;

// --- Spawning ---

/// Distance from the followed ship at which adversaries appear.
pub const ADVERSARY_SPAWN_RANGE: f32 = 10.0;
