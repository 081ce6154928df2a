//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking. Frames advance by whatever elapsed time the
/// host supplies, so the sim is frame-rate independent end to end.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frame counter (increments once per tick).
    pub frame: u64,
    /// Total elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
