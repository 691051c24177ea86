use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::snake::{FieldSize, Point};

/// Seedable randomness for one game session, so a session can be replayed
/// from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// A uniformly distributed cell of the field.
    pub fn random_cell(&mut self, field_size: &FieldSize) -> Point {
        Point::new(
            self.random_range(0..field_size.width),
            self.random_range(0..field_size.height),
        )
    }
}
