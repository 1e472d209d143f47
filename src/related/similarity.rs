//! Spec similarity scoring and bucketed ranking

use rand::Rng;

use crate::domain::{Product, COMPARABLE_SPEC_KEYS};
use crate::related::shuffle::fisher_yates;

/// Width of a score bucket; candidates inside one bucket count as tied.
pub const BUCKET_WIDTH: f64 = 5.0;

/// Similarity of a single numeric spec, 100 meaning identical.
pub fn spec_similarity(current: f64, candidate: f64) -> f64 {
    let difference = (current - candidate).abs();
    let max_value = current.max(candidate);
    if max_value > 0.0 { 100.0 - (difference / max_value * 100.0) } else { 100.0 }
}

/// Sum of per-key similarities over the comparable keys both products can
/// parse. A candidate sharing no comparable key scores 0.
pub fn similarity_score(current: &Product, candidate: &Product) -> f64 {
    COMPARABLE_SPEC_KEYS
        .iter()
        .filter_map(|key| Some(spec_similarity(current.spec_number(key)?, candidate.spec_number(key)?)))
        .sum()
}

/// Bucket a score falls into. Halves round up, so 2.5 lands in bucket 1
/// and -2.5 in bucket 0.
pub fn bucket_index(score: f64) -> i64 {
    (score / BUCKET_WIDTH + 0.5).floor() as i64
}

/// Orders candidates by descending similarity to `current`, shuffling each
/// bucket of near-equal scores so ties surface in a different order per call.
pub fn rank_by_similarity<'a, R: Rng + ?Sized>(current: &Product, candidates: Vec<&'a Product>, rng: &mut R) -> Vec<&'a Product> {
    let mut scored: Vec<(f64, &'a Product)> = candidates.into_iter().map(|c| (similarity_score(current, c), c)).collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut ranked = Vec::with_capacity(scored.len());
    let mut bucket: Vec<&'a Product> = Vec::new();
    let mut bucket_key: Option<i64> = None;

    for (score, product) in scored {
        let key = bucket_index(score);
        if bucket_key != Some(key) {
            fisher_yates(&mut bucket, rng);
            ranked.append(&mut bucket);
            bucket_key = Some(key);
        }
        bucket.push(product);
    }
    fisher_yates(&mut bucket, rng);
    ranked.append(&mut bucket);
    ranked
}
