//! Seeded randomness for diagram sampling and relabeling.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use siphasher::sip::SipHasher13;

/// Seeded source for random bonds and random relabelings.
///
/// A failing property test is replayed from its seed. Batches that must not
/// share a stream take one [`substream`](Self::substream) each.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
    draws: u64,
}

impl RngHandle {
    /// Creates a handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Creates the handle for substream `substream` of `master_seed`.
    pub fn substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }

    /// Returns `true` with the given probability, which must lie in `[0, 1]`.
    pub fn bond_present(&mut self, probability: f64) -> bool {
        self.draws += 1;
        self.rng.gen_bool(probability)
    }

    /// Returns a uniformly random permutation of `0..n`.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        self.draws += 1;
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut self.rng);
        order
    }

    /// Number of bond draws and permutations produced so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

/// Derives the seed of substream `substream` from `master_seed` with
/// SipHash-1-3 under fixed zero keys.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
