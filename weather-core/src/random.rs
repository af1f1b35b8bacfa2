use std::sync::Arc;

use parking_lot::Mutex;
use rand::{SeedableRng, rngs::StdRng};

/// Shared, seedable random source.
///
/// Clones hand out the same underlying generator, so a seeded service replays
/// the same sequence of draws for the same sequence of calls.
#[derive(Debug, Clone)]
pub struct Entropy(Arc<Mutex<StdRng>>);

impl Entropy {
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_os() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os, Self::seeded)
    }

    fn from_rng(rng: StdRng) -> Self {
        Self(Arc::new(Mutex::new(rng)))
    }

    /// Run `f` with exclusive access to the generator.
    ///
    /// The lock is not held across await points; keep `f` synchronous.
    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.0.lock();
        f(&mut rng)
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::from_os()
    }
}
