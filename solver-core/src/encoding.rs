//! The gene/chromosome encoding.
//!
//! One gene per teaching block, valued as an index into `SLOTS`
//! (`crate::loader::Problem::slots`). Distinct-gene encoding enforces the
//! hardest constraint — no two blocks share a `(date, room)` slot — by
//! construction, so the evaluator never has to check it.

use rand::Rng;
use rand::seq::SliceRandom;

/// A candidate assignment: `genes[i]` is the slot index assigned to block `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    pub genes: Vec<u32>,
}

impl Chromosome {
    pub fn new(genes: Vec<u32>) -> Self {
        Chromosome { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// All genes lie in `[0, num_slots)` and are pairwise distinct.
    pub fn is_structurally_valid(&self, num_slots: usize) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.genes.len());
        for &gene in &self.genes {
            if gene as usize >= num_slots {
                return false;
            }
            if !seen.insert(gene) {
                return false;
            }
        }
        true
    }

    /// Samples a uniformly random size-`num_blocks` subset of `[0, num_slots)`
    /// in random order: a partial Fisher-Yates shuffle of the slot index
    /// range, truncated to the first `num_blocks` entries. Equivalent to the
    /// "random prefix of a shuffled slot-permutation" construction from the
    /// specification, and guarantees structural validity by construction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, num_blocks: usize, num_slots: usize) -> Self {
        debug_assert!(num_blocks <= num_slots);
        let mut pool: Vec<u32> = (0..num_slots as u32).collect();
        pool.shuffle(rng);
        pool.truncate(num_blocks);
        Chromosome::new(pool)
    }
}
