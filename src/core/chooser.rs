use crate::domain::ports::Chooser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform choices backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngChooser<R: Rng> {
    rng: R,
}

impl<R: Rng> RngChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChooser<ChaCha8Rng> {
    /// Reproducible when a seed is given, seeded from OS entropy otherwise.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> Chooser for RngChooser<R> {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
