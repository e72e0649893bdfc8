//! RNG abstraction for simulation behaviors
//!
//! Behavior hooks draw randomness through this trait so tests can substitute
//! fixed sequences while the engine runs on a fast seeded generator.

/// Random number generator trait for behavior hooks
pub trait SimRng {
    /// Generate random boolean with 50% probability
    fn gen_bool(&mut self) -> bool;

    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }
}

// Blanket implementation for any type implementing rand::Rng, covering both
// the engine's seeded Xoshiro generator and thread_rng in caller code.
impl<T: ?Sized + rand::Rng> SimRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}
