//! Simulation engine for STARFALL.
//!
//! Owns the hecs ECS world, advances all systems once per host frame with
//! the host-supplied elapsed time, and produces `RenderSnapshot`s for the
//! rendering stage.

pub mod camera;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use starfall_core as core;

#[cfg(test)]
mod tests;
