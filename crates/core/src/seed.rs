//! Seed resolution and the uniform-range helpers layered over the ChaCha stream.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::config::RANDOM_SEED;

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Turns the configured seed into the concrete value a run is keyed by.
/// The [`RANDOM_SEED`] sentinel is replaced here, before any RNG is built,
/// so every run can be logged and reproduced from its resolved seed.
pub fn resolve_seed(configured: i64) -> u64 {
    if configured == RANDOM_SEED { generate_runtime_seed() } else { configured as u64 }
}

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Uniform draw from the inclusive range [min, max].
pub(crate) fn rand_range(rng: &mut ChaCha8Rng, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max);
    let span = (i64::from(max) - i64::from(min) + 1) as u64;
    min + (rng.next_u64() % span) as i32
}

pub(crate) fn rand_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    rng.next_u64() as usize % len
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
