//! Simulation engine for TURFWAR.
//!
//! Owns the hecs ECS world, advances the match one variable-delta frame
//! per tick, and produces MatchSnapshots for the presentation layer.

pub mod engine;
pub mod field;
pub mod systems;
pub mod world_setup;

pub use engine::{MatchConfig, MatchEngine};
pub use turfwar_core as core;
