//! Material data for the Kona falling-sand engine
//!
//! This crate provides the immutable material model the engine simulates:
//! - Material ids (MaterialId)
//! - Material definitions (MaterialDef, MaterialKind)
//! - The fixed registry (Materials)
//!
//! It holds no simulation state; one registry can back any number of engine
//! instances.

mod materials;

pub use materials::{MaterialDef, MaterialId, MaterialKind, Materials};
