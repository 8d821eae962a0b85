use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seed für die Felderzeugung. Standardmäßig bei jedem Start neu aus Entropie gezogen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedResource {
    pub seed: u64,
}

impl SeedResource {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Frischer Generator, deterministisch für denselben Seed.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

impl Default for SeedResource {
    fn default() -> Self {
        let seed_number = rand::random::<u64>();
        Self::from_seed(seed_number)
    }
}
