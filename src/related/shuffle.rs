//! In-place Fisher–Yates shuffle over an injected random source

use rand::Rng;

/// Shuffles `items` in place with an unbiased Fisher–Yates pass.
///
/// The random source is supplied by the caller so tests can pass a seeded
/// generator and get a reproducible permutation.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
