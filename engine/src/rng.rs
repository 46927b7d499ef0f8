//! Shared sampling helpers over an injected random source.
//!
//! Every function takes `&mut impl Rng`, so callers choose the source:
//! a thread RNG in production, a seeded `ChaCha8Rng` in tests.

use rand::Rng;

/// Uniform integer in `[0, max)`. Returns 0 when `max` is 0.
pub fn next_bounded(rng: &mut impl Rng, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    rng.gen_range(0..max)
}

/// Shuffle a slice in place using Fisher-Yates: walk `i` from the last
/// index down to 1, swapping with a uniform index in `[0, i]`.
pub fn shuffle<T>(rng: &mut impl Rng, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = next_bounded(rng, (i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}

/// Percent roll in `[0, 100)`.
pub fn roll_percent(rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..100)
}
