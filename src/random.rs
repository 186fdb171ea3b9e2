//! Seeded random sources.
//!
//! Every random draw in a run (initial permutation, move kind, move
//! positions, acceptance) comes from one owned generator, so two runs with
//! the same seed follow the same trajectory.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator type owned by an annealing engine.
pub type AnnealRng = ChaCha8Rng;

/// Creates a generator from a fixed seed.
pub fn create_rng(seed: u64) -> AnnealRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> AnnealRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
