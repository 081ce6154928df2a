//! Exponential damping primitives.
//!
//! All smoothing in the simulation goes through [`Damp::damp`], which moves a
//! value toward a target by the weight `1 - exp(-response * dt)`. Because the
//! weight is derived from elapsed time, two small steps produce the same
//! result as one combined step: the trajectory is frame-rate independent.

use glam::{Quat, Vec3};

/// Types that can be exponentially damped toward a target.
pub trait Damp: Copy {
    /// Move `self` toward `target` by the fraction `1 - exp(-response * dt)`.
    ///
    /// `dt == 0` or `response == 0` returns `self` unchanged; a large
    /// `response * dt` saturates the weight at 1, so the result never
    /// overshoots `target`.
    fn damp(self, target: Self, response: f32, dt: f32) -> Self;
}

/// Interpolation weight for one damping step.
#[inline]
fn weight(response: f32, dt: f32) -> f32 {
    1.0 - (-response * dt).exp()
}

impl Damp for f32 {
    #[inline]
    fn damp(self, target: Self, response: f32, dt: f32) -> Self {
        self + (target - self) * weight(response, dt)
    }
}

impl Damp for Vec3 {
    #[inline]
    fn damp(self, target: Self, response: f32, dt: f32) -> Self {
        self.lerp(target, weight(response, dt))
    }
}

impl Damp for Quat {
    #[inline]
    fn damp(self, target: Self, response: f32, dt: f32) -> Self {
        self.slerp(target, weight(response, dt))
    }
}

/// A value that trails its target under exponential damping.
///
/// Thin state wrapper over [`Damp`]; owners call [`Smoothed::advance`] once
/// per frame with the raw target for that frame.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct Smoothed<T: Damp> {
    current: T,
}

impl<T: Damp> Smoothed<T> {
    pub fn new(initial: T) -> Self {
        Self { current: initial }
    }

    /// Damp the held value toward `target` and return the new value.
    pub fn advance(&mut self, target: T, response: f32, dt: f32) -> T {
        self.current = self.current.damp(target, response, dt);
        self.current
    }

    pub fn get(&self) -> T {
        self.current
    }
}
