//! Kona - a falling-sand particle physics engine
//!
//! A fixed-resolution grid hosts discrete particles, each carrying a material
//! id, sub-cell position, velocity and temperature. [`Simulation::tick`]
//! advances the world one step: per-material behavior hooks run first, then
//! gravity-driven movement with density swapping, then ambient heat
//! relaxation and temperature-threshold state transitions.
//!
//! The engine is strictly single-threaded and deterministic for a given
//! [`SimConfig::seed`]. Rendering, input and brushes are caller concerns; the
//! caller creates and deletes particles, ticks the simulation, and reads the
//! occupancy map and particle records back for display.

mod behaviors;
mod config;
mod error;
mod map;
mod motion;
mod particle;
mod rng;
mod simulation;
mod state_changes;
mod thermal;

pub use behaviors::{BehaviorFn, Behaviors};
pub use config::SimConfig;
pub use error::CreateError;
pub use map::ParticleMap;
pub use motion::MotionSystem;
pub use particle::{Particle, ParticleSlot};
pub use rng::SimRng;
pub use simulation::Simulation;
pub use state_changes::StateChangeSystem;
pub use thermal::ThermalSystem;

// Re-export the material model so callers only need one crate
pub use kona_materials::{MaterialDef, MaterialId, MaterialKind, Materials};
