//! Engine construction parameters

use serde::{Deserialize, Serialize};

/// Simulation dimensions and limits, fixed for the engine's lifetime
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,
    /// Maximum number of live particles
    pub capacity: usize,
    /// Seed for the engine-owned RNG; same seed, same run
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 250,
            capacity: 5000,
            seed: 0,
        }
    }
}
