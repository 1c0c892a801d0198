//! Deterministic random number generation.
//!
//! RULE: Nothing in the sampling path may call a platform RNG
//! directly. All randomness flows through RollRng instances, so a
//! seeded experiment replays bit-for-bit.
//!
//! Each die gets its own stream, derived from (master_seed XOR
//! die_index * golden-ratio constant). This means:
//!   - Adding a die to a game never changes existing dice's streams.
//!   - Each die's stream is fully reproducible in isolation.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A single deterministic sampling stream.
#[derive(Debug)]
pub struct RollRng {
    inner: Pcg64Mcg,
}

impl RollRng {
    /// Stream derived from a master seed and a stable die index.
    /// The index must never change once assigned.
    pub fn for_die(master_seed: u64, die_index: u64) -> Self {
        let derived_seed = master_seed ^ die_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self::seed_from_u64(derived_seed)
    }

    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Non-reproducible stream seeded from OS entropy. Used when the
    /// caller did not ask for a seed.
    pub fn from_entropy() -> Self {
        Self {
            inner: Pcg64Mcg::from_entropy(),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}
