//! Render snapshot — the complete visible state handed to the renderer each
//! frame.
//!
//! The renderer is an external consumer: it gets poses, prebuilt model
//! transforms, and alpha-ready trail geometry, and never reaches back into
//! the simulation.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::ShipId;
use crate::trail::{TrailCrossbar, TrailSegment};
use crate::types::SimTime;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub time: SimTime,
    pub ships: Vec<ShipView>,
    pub trails: Vec<TrailView>,
    pub projectiles: Vec<ProjectileView>,
    pub hazards: Vec<HazardView>,
    /// Aim markers ahead of the followed ship, if any ship is followed.
    pub reticles: Option<ReticleView>,
    pub camera: CameraView,
}

/// One ship's pose and motion for model submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub ship: ShipId,
    pub position: Vec3,
    /// Physics orientation.
    pub orientation: Quat,
    /// Orientation with the cosmetic bank folded in; what the model is
    /// actually drawn with.
    pub visual_orientation: Quat,
    /// Ready-to-submit model transform (visual orientation + position).
    pub model_transform: Mat4,
    pub velocity: Vec3,
    pub speed: f32,
    pub is_adversary: bool,
}

/// One ship's trail geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailView {
    pub ship: ShipId,
    pub crossbars: Vec<TrailCrossbar>,
    pub segments: Vec<TrailSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
    pub velocity: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardView {
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: f32,
}

/// Near/far aim markers along the followed ship's forward vector, carrying
/// the ship's orientation so they stay screen-aligned with its nose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReticleView {
    pub near: Mat4,
    pub far: Mat4,
}

/// Chase camera pose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, -10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}
