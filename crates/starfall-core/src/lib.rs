//! Core types and definitions for the STARFALL flight simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! math primitives, spatial types, components, commands, snapshot views,
//! and constants. It has no dependency on any runtime framework or
//! rendering backend.

pub mod commands;
pub mod components;
pub mod constants;
pub mod frame;
pub mod math;
pub mod state;
pub mod trail;
pub mod types;
