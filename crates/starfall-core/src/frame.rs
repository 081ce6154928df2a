//! Pose of an entity in world space: position plus unit orientation.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of an entity.
///
/// The orientation quaternion is kept normalized: every composition is
/// followed by a renormalize so floating-point drift stays bounded no matter
/// how many rotations accumulate. Forward is +Z, up is +Y, left is +X.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpatialFrame {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for SpatialFrame {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl SpatialFrame {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    pub fn back(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn left(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::NEG_X
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    pub fn down(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Y
    }

    /// Map a point from this frame's local space into world space:
    /// rotate by the orientation, then translate by the position.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.orientation * local + self.position
    }

    /// Rotate about an axis expressed in this frame's own local space.
    ///
    /// Local rotations post-multiply the orientation, so the order in which
    /// they are applied matters. The axis must be unit length.
    pub fn rotate_local(&mut self, axis: Vec3, degrees: f32) {
        let delta = Quat::from_axis_angle(axis, degrees.to_radians());
        self.orientation = (self.orientation * delta).normalize();
    }
}
