//! The shared randomness context threaded through every generator call.

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Random-generation context passed by reference into every table generator
/// and column primitive. Explicitly owned by the caller, never global state,
/// so pipelines stay composable and testable in isolation.
#[derive(Debug, Clone)]
pub struct GenContext {
    rng: SmallRng,
}

impl GenContext {
    /// Creates a context seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: rand::make_rng::<SmallRng>(),
        }
    }

    /// Creates a context from a fixed seed, making draws reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The underlying random number generator.
    pub fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

impl Default for GenContext {
    fn default() -> Self {
        Self::new()
    }
}
