//! StatelessGrouping: clusters of indices adjacent in the shuffled domain.
//!
//! Composes the Feistel permutation with a block-local rotation: the
//! shuffled domain is cut into contiguous blocks of `group_size`
//! positions, and two original indices belong to the same group iff
//! their shuffled positions fall in the same block. Enumerating a group
//! walks the block in the shuffled domain and maps each position back
//! through the inverse permutation.

use crate::error::ShuffleError;
use crate::shuffle::StatelessShuffle;

/// Groups original-domain indices whose shuffled positions land in the
/// same contiguous `group_size`-wide block.
///
/// Like [`StatelessShuffle`], an immutable configuration value with
/// pure queries; safe to share across threads after construction.
///
/// When the domain size is not a multiple of `group_size`, the last
/// block starting below the domain end extends past it, and member
/// queries for that block can return values `>= 2^index_bits`. That is
/// the contract, not a defect: callers discard any member at or beyond
/// their true item count, the same way they discard out-of-range
/// shuffled indices. No bounds check is performed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatelessGrouping {
    shuffle: StatelessShuffle,
    group_size: u32,
}

impl StatelessGrouping {
    /// Creates a grouping over the domain `[0, 2^index_bits)`.
    ///
    /// # Parameters
    /// - `seed`: Selects the member of the permutation family.
    /// - `index_bits`: Domain bit width (1..=32).
    /// - `round_count`: Number of Feistel rounds.
    /// - `group_size`: Cluster size (>= 1). Need not divide the domain
    ///   size evenly.
    ///
    /// # Errors
    /// Returns [`ShuffleError::IndexBitsOutOfRange`] for a bit width of
    /// zero or above 32, and [`ShuffleError::ZeroGroupSize`] for a zero
    /// group size.
    ///
    /// # Examples
    ///
    /// ```
    /// use stateless_shuffle::StatelessGrouping;
    ///
    /// let grouping = StatelessGrouping::new(12345, 4, 4, 3).unwrap();
    /// assert_eq!(grouping.group_size(), 3);
    /// ```
    ///
    /// ```
    /// use stateless_shuffle::{ShuffleError, StatelessGrouping};
    ///
    /// let result = StatelessGrouping::new(12345, 4, 4, 0);
    /// assert_eq!(result, Err(ShuffleError::ZeroGroupSize));
    /// ```
    pub fn new(
        seed: u32,
        index_bits: u32,
        round_count: u32,
        group_size: u32,
    ) -> Result<Self, ShuffleError> {
        if group_size == 0 {
            return Err(ShuffleError::ZeroGroupSize);
        }
        Ok(StatelessGrouping {
            shuffle: StatelessShuffle::new(seed, index_bits, round_count)?,
            group_size,
        })
    }

    /// Returns the cluster size.
    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    /// Returns the underlying permutation engine.
    pub fn shuffle(&self) -> &StatelessShuffle {
        &self.shuffle
    }

    /// Block-local rotation in the shuffled domain: keeps `x` inside its
    /// `group_size`-wide block while stepping `offset` positions around
    /// it. Applying every offset in `[0, group_size)` enumerates the
    /// whole block exactly once.
    #[inline]
    fn involution(&self, x: u32, offset: u32) -> u32 {
        let block_start = self.group_size * (x / self.group_size);
        // Wrapping: a boundary block at the top of a full 32-bit domain
        // may step past u32::MAX, matching the unsigned wraparound of
        // the rest of the engine.
        block_start.wrapping_add(x.wrapping_add(offset) % self.group_size)
    }

    /// Returns one member of the group containing `index`.
    ///
    /// `member_index = 0` returns `index` itself; offsets `1..group_size`
    /// walk the rest of the block.
    ///
    /// # Parameters
    /// - `index`: Original-domain index (< `2^index_bits`, unchecked).
    /// - `member_index`: Position within the group (< `group_size`,
    ///   unchecked — larger values wrap around the block).
    ///
    /// # Returns
    /// The original-domain identity of the chosen block position. May be
    /// `>= 2^index_bits` for a boundary block (see the type docs).
    ///
    /// # Examples
    ///
    /// ```
    /// use stateless_shuffle::StatelessGrouping;
    ///
    /// let grouping = StatelessGrouping::new(12345, 4, 4, 3).unwrap();
    /// assert_eq!(grouping.get_member(0, 0), 0);
    /// assert_eq!(grouping.get_member(0, 1), 5);
    /// ```
    pub fn get_member(&self, index: u32, member_index: u32) -> u32 {
        let shuffled = self.shuffle.index_to_shuffled_index(index);
        let rotated = self.involution(shuffled, member_index);
        self.shuffle.shuffled_index_to_index(rotated)
    }

    /// Returns all members of the group containing `index`, starting
    /// with `index` itself.
    ///
    /// Equivalent to `get_member(index, i)` for each `i` in
    /// `[0, group_size)`, sharing the single forward mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use stateless_shuffle::StatelessGrouping;
    ///
    /// let grouping = StatelessGrouping::new(12345, 4, 4, 3).unwrap();
    /// assert_eq!(grouping.get_group(0), vec![0, 5, 2]);
    /// ```
    pub fn get_group(&self, index: u32) -> Vec<u32> {
        let mut members = Vec::with_capacity(self.group_size as usize);
        self.fill_group(index, &mut members);
        members
    }

    /// Fills a caller-owned buffer with the group members of `index`.
    ///
    /// Clears `members` first; after the call it holds exactly
    /// `group_size` values. Lets tight loops reuse one allocation across
    /// many queries.
    ///
    /// # Examples
    ///
    /// ```
    /// use stateless_shuffle::StatelessGrouping;
    ///
    /// let grouping = StatelessGrouping::new(12345, 4, 4, 3).unwrap();
    /// let mut members = Vec::new();
    /// grouping.get_group_into(0, &mut members);
    /// assert_eq!(members, vec![0, 5, 2]);
    /// ```
    pub fn get_group_into(&self, index: u32, members: &mut Vec<u32>) {
        members.clear();
        self.fill_group(index, members);
    }

    fn fill_group(&self, index: u32, members: &mut Vec<u32>) {
        let shuffled = self.shuffle.index_to_shuffled_index(index);
        for offset in 0..self.group_size {
            let rotated = self.involution(shuffled, offset);
            members.push(self.shuffle.shuffled_index_to_index(rotated));
        }
    }
}
