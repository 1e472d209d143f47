//! Related-product selection
//!
//! Picks up to [`TARGET`] products to show next to a product page:
//!
//! 1. same brand and category, in pool order;
//! 2. same category, ranked by spec similarity with near-equal scores shuffled;
//! 3. any remaining same-category products, shuffled.
//!
//! Selection is pure apart from the caller-supplied random source.

pub mod shuffle;
pub mod similarity;

use rand::Rng;
use std::collections::HashSet;

use crate::domain::Product;

pub use shuffle::fisher_yates;
pub use similarity::{bucket_index, rank_by_similarity, similarity_score, spec_similarity, BUCKET_WIDTH};

/// Default number of related products returned.
pub const TARGET: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelatedProductSelector {
    limit: usize,
}

impl Default for RelatedProductSelector {
    fn default() -> Self { Self { limit: TARGET } }
}

impl RelatedProductSelector {
    pub fn new(limit: usize) -> Self { Self { limit } }
    pub fn limit(&self) -> usize { self.limit }

    /// Selects related products for `current` from `candidates`.
    ///
    /// The result never contains `current` itself or two products with the
    /// same id, and holds at most `limit` entries.
    pub fn select<'a, R: Rng + ?Sized>(&self, current: &Product, candidates: &'a [Product], rng: &mut R) -> Vec<&'a Product> {
        let mut selection = Selection::new(current, self.limit);

        // Tier 1: brand + category, pool order
        for candidate in candidates.iter().filter(|c| c.same_brand(current) && c.same_category(current)) {
            if selection.is_full() {
                break;
            }
            selection.push(candidate);
        }
        if selection.is_full() {
            return selection.finish();
        }

        // Tier 2: category, by spec similarity
        let same_category = selection.eligible(candidates, |c| c.same_category(current));
        let remaining = selection.remaining();
        for candidate in rank_by_similarity(current, same_category, rng).into_iter().take(remaining) {
            selection.push(candidate);
        }

        // Tier 3: category backfill
        if !selection.is_full() {
            let mut backfill = selection.eligible(candidates, |c| c.same_category(current));
            fisher_yates(&mut backfill, rng);
            for candidate in backfill {
                if selection.is_full() {
                    break;
                }
                selection.push(candidate);
            }
        }

        selection.finish()
    }
}

/// Selects up to [`TARGET`] related products using the thread-local RNG.
pub fn select_related<'a>(current: &Product, candidates: &'a [Product]) -> Vec<&'a Product> {
    select_related_with_rng(current, candidates, &mut rand::thread_rng())
}

/// Selects up to [`TARGET`] related products with an injected random source.
pub fn select_related_with_rng<'a, R: Rng + ?Sized>(current: &Product, candidates: &'a [Product], rng: &mut R) -> Vec<&'a Product> {
    RelatedProductSelector::default().select(current, candidates, rng)
}

/// Working state for one selection. Every push goes through the id checks,
/// so no tier can add the current product or a product already chosen.
struct Selection<'c, 'a> {
    current: &'c Product,
    limit: usize,
    picked: Vec<&'a Product>,
    seen: HashSet<&'a str>,
}

impl<'c, 'a> Selection<'c, 'a> {
    fn new(current: &'c Product, limit: usize) -> Self {
        Self { current, limit, picked: Vec::with_capacity(limit), seen: HashSet::new() }
    }

    fn is_full(&self) -> bool { self.picked.len() >= self.limit }
    fn remaining(&self) -> usize { self.limit.saturating_sub(self.picked.len()) }

    fn is_eligible(&self, candidate: &Product) -> bool {
        candidate.id != self.current.id && !self.seen.contains(candidate.id.as_str())
    }

    /// Candidates not yet picked (and not `current`) that match `pred`,
    /// in pool order with repeated ids collapsed to their first occurrence.
    fn eligible(&self, candidates: &'a [Product], pred: impl Fn(&Product) -> bool) -> Vec<&'a Product> {
        let mut ids: HashSet<&'a str> = HashSet::new();
        let mut out = Vec::new();
        for candidate in candidates {
            if self.is_eligible(candidate) && pred(candidate) && ids.insert(candidate.id.as_str()) {
                out.push(candidate);
            }
        }
        out
    }

    fn push(&mut self, candidate: &'a Product) {
        if !self.is_full() && self.is_eligible(candidate) {
            self.seen.insert(candidate.id.as_str());
            self.picked.push(candidate);
        }
    }

    fn finish(mut self) -> Vec<&'a Product> {
        self.picked.truncate(self.limit);
        self.picked
    }
}
