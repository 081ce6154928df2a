//! Per-frame systems, run by the engine in a fixed order.

pub mod cleanup;
pub mod flight;
pub mod hazards;
pub mod intercept;
pub mod kinematics;
pub mod lifetime;
pub mod snapshot;
pub mod trails;
