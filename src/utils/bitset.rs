//! A fixed-capacity bit vector keyed by dense ordinals.
//!
//! The algorithms hand out a dense ordinal to every vertex they discover (its discovery
//! index). Per-vertex boolean flags such as "currently on the Tarjan stack" are then kept
//! here instead of in a hashed set, giving O(1) membership tests without hashing the
//! vertex handle again.
//!
//! # Example
//!
//! ```rust,ignore
//! use graphwalk::utils::BitSet;
//!
//! let mut flags = BitSet::new(100);
//! assert!(flags.insert(50));
//! assert!(!flags.insert(50));
//! assert!(flags.contains(50));
//! assert_eq!(flags.count(), 1);
//! ```

const WORD_BITS: usize = u64::BITS as usize;

/// A bit vector with a capacity fixed at construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct BitSet {
    /// The bits, stored as a vector of words.
    words: Vec<u64>,
    /// The number of addressable bits.
    len: usize,
}

impl BitSet {
    /// Creates a new empty bit set able to hold ordinals `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            len: capacity,
        }
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Sets the bit at `index`, returning `true` if it was previously clear.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the capacity.
    pub fn insert(&mut self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let was_clear = self.words[word] & mask == 0;
        self.words[word] |= mask;
        was_clear
    }

    /// Clears the bit at `index`, returning `true` if it was previously set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the capacity.
    pub fn remove(&mut self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let was_set = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        was_set
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the capacity.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    /// Returns the number of bits set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns an iterator over the indices of set bits, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(word_idx, &word)| {
                (0..WORD_BITS)
                    .filter(move |bit| word & (1u64 << bit) != 0)
                    .map(move |bit| word_idx * WORD_BITS + bit)
            })
    }

    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(index < self.len, "index out of bounds");
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }
}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitset_basic() {
        let mut bs = BitSet::new(100);
        assert!(bs.is_empty());

        assert!(bs.insert(0));
        assert!(bs.insert(64));
        assert!(bs.insert(99));
        assert!(!bs.insert(64));

        assert_eq!(bs.count(), 3);
        assert!(bs.contains(64));
        assert!(!bs.contains(63));
    }

    #[test]
    fn test_bitset_remove_reports_previous_state() {
        let mut bs = BitSet::new(10);
        bs.insert(3);
        assert!(bs.remove(3));
        assert!(!bs.remove(3));
        assert!(bs.is_empty());
    }

    #[test]
    fn test_bitset_iter_crosses_words() {
        let mut bs = BitSet::new(130);
        for i in [1, 63, 64, 129] {
            bs.insert(i);
        }
        assert_eq!(bs.iter().collect::<Vec<_>>(), vec![1, 63, 64, 129]);
        assert_eq!(format!("{bs:?}"), "{1, 63, 64, 129}");
    }

    #[test]
    fn test_bitset_zero_capacity() {
        let bs = BitSet::new(0);
        assert!(bs.is_empty());
        assert_eq!(bs.iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_bitset_out_of_bounds() {
        let bs = BitSet::new(8);
        let _ = bs.contains(8);
    }
}
