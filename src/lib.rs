//! Stateless keyed shuffle engine.
//!
//! Maps every index of a power-of-two domain to a reproducible
//! "random-looking" position, and back, without ever materializing a
//! permutation table: each query runs a small balanced Feistel network
//! keyed by a 32-bit seed, so any of the `2^index_bits` indices maps to
//! its shuffled position in O(round_count) work and O(1) memory.
//!
//! # Architecture
//!
//! ```text
//! RoundFunction      (atomic unit — keyed 32-bit hash, masked to a half-width)
//!     ↕ drives each round
//! StatelessShuffle   (balanced Feistel network — forward/inverse bijection)
//!     ↕ composed with a block-local involution
//! StatelessGrouping  (clusters of indices adjacent in the shuffled domain)
//!
//! ShuffledRange      (adapter — true item counts, filters padding outputs)
//! ```
//!
//! # Examples
//!
//! Shuffle a 16-element domain and map back:
//!
//! ```
//! use stateless_shuffle::StatelessShuffle;
//!
//! let shuffle = StatelessShuffle::new(12345, 4, 4).unwrap();
//!
//! let shuffled = shuffle.index_to_shuffled_index(3);
//! assert_eq!(shuffle.shuffled_index_to_index(shuffled), 3);
//! ```
//!
//! Visit 12 items (not a power of two) in shuffled order:
//!
//! ```
//! use stateless_shuffle::ShuffledRange;
//!
//! let range = ShuffledRange::new(7, 12, 4).unwrap();
//!
//! let mut seen: Vec<u32> = range.iter().collect();
//! seen.sort_unstable();
//! assert_eq!(seen, (0..12).collect::<Vec<u32>>());
//! ```
//!
//! Fetch the cluster of indices that land next to each other after
//! shuffling:
//!
//! ```
//! use stateless_shuffle::StatelessGrouping;
//!
//! let grouping = StatelessGrouping::new(555, 6, 4, 4).unwrap();
//!
//! let members = grouping.get_group(5);
//! assert_eq!(members.len(), 4);
//! assert_eq!(members[0], 5);
//! ```

#![deny(clippy::all)]

pub mod error;

mod grouping;
mod range;
pub(crate) mod round;
mod shuffle;

pub use error::ShuffleError;
pub use grouping::StatelessGrouping;
pub use range::{ShuffledIndices, ShuffledRange};
pub use shuffle::StatelessShuffle;
