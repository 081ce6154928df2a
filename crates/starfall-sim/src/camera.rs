//! Chase camera that trails a ship's frame under damping.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use starfall_core::constants::{
    CAMERA_AIM_RESPONSE, CAMERA_CHASE_OFFSET, CAMERA_LOOK_AHEAD, CAMERA_POSITION_RESPONSE,
};
use starfall_core::frame::SpatialFrame;
use starfall_core::math::Damp;
use starfall_core::state::CameraView;

/// Damped camera pose asymptotically tracking a target pose.
///
/// Position is damped harder than the look-target and up vector: translation
/// lag reads as smooth, rotation lag reads as motion sickness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewFollower {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for ViewFollower {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, -10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl ViewFollower {
    /// Trail the given frame: seat just behind and above it, aim a fixed
    /// distance ahead along its forward vector, roll with its up vector.
    pub fn follow(&mut self, frame: &SpatialFrame, dt: f32) {
        let (position, target, up) = Self::seat_for(frame);
        self.move_to(position, target, up, dt);
    }

    /// Move toward the given pose with smoothing applied.
    pub fn move_to(&mut self, position: Vec3, target: Vec3, up: Vec3, dt: f32) {
        self.position = self.position.damp(position, CAMERA_POSITION_RESPONSE, dt);
        self.target = self.target.damp(target, CAMERA_AIM_RESPONSE, dt);
        self.up = self.up.damp(up, CAMERA_AIM_RESPONSE, dt);
    }

    /// Jump to the given pose with no smoothing.
    pub fn set_immediate(&mut self, position: Vec3, target: Vec3, up: Vec3) {
        self.position = position;
        self.target = target;
        self.up = up;
    }

    /// Snap straight into the chase seat behind a frame. Used when the
    /// camera first attaches to a ship so it never sweeps across the scene.
    pub fn snap_behind(&mut self, frame: &SpatialFrame) {
        let (position, target, up) = Self::seat_for(frame);
        self.set_immediate(position, target, up);
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            target: self.target,
            up: self.up,
        }
    }

    fn seat_for(frame: &SpatialFrame) -> (Vec3, Vec3, Vec3) {
        let position = frame.transform_point(CAMERA_CHASE_OFFSET);
        let target = frame.position + frame.forward() * CAMERA_LOOK_AHEAD;
        (position, target, frame.up())
    }
}
