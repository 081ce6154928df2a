//! Decaying ribbon trail left behind a moving ship.
//!
//! A trail is a fixed ring of [`TrailRung`] crossbars. Exactly one rung is
//! "active": it is dragged along directly behind the owner every frame and
//! its lifetime is continually refreshed. Once the owner moves far enough
//! from the last anchor point, the active rung freezes in place and the next
//! slot in the ring takes over. Frozen rungs fade out as their remaining
//! lifetime runs down; expired slots are simply skipped at render time and
//! reused on wraparound, so the trail never allocates after construction.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{TRAIL_RUNG_COUNT, TRAIL_RUNG_TTL};
use crate::frame::SpatialFrame;

/// One crossbar of the trail ribbon.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TrailRung {
    pub left: Vec3,
    pub right: Vec3,
    /// Seconds until this rung stops being drawn.
    pub time_to_live: f32,
}

impl TrailRung {
    pub fn alive(&self) -> bool {
        self.time_to_live > 0.0
    }

    /// Remaining lifetime as a 0..=1 fraction, ready to use as alpha.
    pub fn life_fraction(&self) -> f32 {
        (self.time_to_live / TRAIL_RUNG_TTL).clamp(0.0, 1.0)
    }
}

/// A quad strip connecting two adjacent alive rungs, ready for translucent
/// geometry submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailSegment {
    pub older_left: Vec3,
    pub older_right: Vec3,
    pub newer_left: Vec3,
    pub newer_right: Vec3,
    /// Alpha at the older (fading) edge.
    pub older_alpha: f32,
    /// Alpha at the newer (brighter) edge.
    pub newer_alpha: f32,
}

/// A standalone crossbar line, drawn for frozen rungs only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailCrossbar {
    pub left: Vec3,
    pub right: Vec3,
    pub alpha: f32,
}

/// Fixed-capacity ring of trail rungs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailHistory {
    rungs: [TrailRung; TRAIL_RUNG_COUNT],
    active: usize,
    last_anchor: Vec3,
}

impl TrailHistory {
    /// Create a trail anchored at the owner's starting position. All rungs
    /// start expired, so nothing is drawn until the owner moves.
    pub fn new(anchor: Vec3) -> Self {
        Self {
            rungs: [TrailRung::default(); TRAIL_RUNG_COUNT],
            active: 0,
            last_anchor: anchor,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn rungs(&self) -> &[TrailRung] {
        &self.rungs
    }

    /// Drag the active rung into place directly behind the owner and refresh
    /// its lifetime so it never expires while the owner is alive.
    pub fn reposition_active(&mut self, owner: &SpatialFrame, half_width: f32, half_length: f32) {
        let rung = &mut self.rungs[self.active];
        rung.time_to_live = TRAIL_RUNG_TTL;
        rung.left = owner.transform_point(Vec3::new(-half_width, 0.0, -half_length));
        rung.right = owner.transform_point(Vec3::new(half_width, 0.0, -half_length));
    }

    /// Freeze the active rung and move on to the next slot once the owner has
    /// traveled `spacing` from the last anchor. Returns true if it advanced.
    pub fn maybe_advance(&mut self, owner_position: Vec3, spacing: f32) -> bool {
        if owner_position.distance(self.last_anchor) > spacing {
            self.active = (self.active + 1) % TRAIL_RUNG_COUNT;
            self.last_anchor = owner_position;
            true
        } else {
            false
        }
    }

    /// Run down every rung's lifetime, active included. The active rung is
    /// refreshed each frame by `reposition_active`, so only frozen rungs
    /// actually fade.
    pub fn decay(&mut self, dt: f32) {
        for rung in &mut self.rungs {
            rung.time_to_live -= dt;
        }
    }

    /// Crossbar lines for every alive frozen rung. The active rung is
    /// excluded: it sits directly behind the ship and a bar there flickers
    /// at low speed.
    pub fn crossbars(&self) -> Vec<TrailCrossbar> {
        self.rungs
            .iter()
            .enumerate()
            .filter(|(i, rung)| *i != self.active && rung.alive())
            .map(|(_, rung)| TrailCrossbar {
                left: rung.left,
                right: rung.right,
                alpha: rung.life_fraction(),
            })
            .collect()
    }

    /// Connecting bands between adjacent alive rungs.
    ///
    /// A band runs from rung `i` to rung `(i + 1) % N` only when both are
    /// alive and rung `i` has *less* life remaining. The slot after `i` was
    /// anchored later, so a genuine band always satisfies the check, while
    /// the seam pair where the ring wraps from the newest rung back to the
    /// oldest fails it and is skipped.
    pub fn segments(&self) -> Vec<TrailSegment> {
        let mut segments = Vec::new();
        for (i, rung) in self.rungs.iter().enumerate() {
            if !rung.alive() {
                continue;
            }
            let next = &self.rungs[(i + 1) % TRAIL_RUNG_COUNT];
            if next.alive() && rung.time_to_live < next.time_to_live {
                segments.push(TrailSegment {
                    older_left: rung.left,
                    older_right: rung.right,
                    newer_left: next.left,
                    newer_right: next.right,
                    older_alpha: rung.life_fraction(),
                    newer_alpha: next.life_fraction(),
                });
            }
        }
        segments
    }
}
