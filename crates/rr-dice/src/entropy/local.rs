//! In-process pseudo-random draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Draw, EntropySource};
use crate::error::DiceResult;

/// Draws from a local `StdRng`. Never fails and performs no I/O.
#[derive(Debug, Clone)]
pub struct LocalSource {
    rng: StdRng,
}

impl LocalSource {
    /// A generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A deterministic generator for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a single draw.
    pub fn next_draw(&mut self) -> Draw {
        Draw(self.rng.random::<f64>())
    }

    /// Generate `quantity` draws in generation order.
    pub fn generate(&mut self, quantity: usize) -> Vec<Draw> {
        (0..quantity).map(|_| self.next_draw()).collect()
    }
}

impl Default for LocalSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for LocalSource {
    async fn draws(&mut self, quantity: usize) -> DiceResult<Vec<Draw>> {
        Ok(self.generate(quantity))
    }
}
