//! Visited sets for graph traversals.
//!
//! A traversal over `n` nodes needs one bit per node; packing the bits into
//! `u64` words keeps the set at roughly `n / 8` bytes.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set sized to a node arena.
#[derive(Clone, Debug)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    #[inline]
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            len: bits,
        }
    }

    /// Returns `true` iff the node was not yet visited, and marks it visited.
    ///
    /// # Panics
    /// Panics if `node` is outside the arena the set was sized for.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.len, "VisitedSet: node {node} out of range");
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        node < self.len && self.words[node / WORD_BITS] & (1u64 << (node % WORD_BITS)) != 0
    }
}
