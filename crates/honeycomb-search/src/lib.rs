//! Honeycomb Word Search
//!
//! Finds every dictionary word that can be traced through a honeycomb by
//! stepping between adjacent cells without revisiting any.
//!
//! # Pruning
//!
//! The search walks the dictionary trie in lockstep with the grid: a path is
//! only extended while its letters are still a prefix of some word. Without
//! that check the search would enumerate every simple path in the grid; with
//! it, exploration stays close to the number of dictionary prefixes the grid
//! can actually spell.
//!
//! # Path State
//!
//! The in-path set is owned by each search, never by the shared graph.
//! Sequential strategies reuse one set across starting cells; the parallel
//! strategy gives every starting cell its own and merges results by union.

mod config;
mod finder;
mod walk;

pub use config::{ParseStrategyError, SearchConfig, SearchStrategy};
pub use finder::{FoundWords, WordFinder};
pub use walk::SearchStats;

use honeycomb_lexicon::Dictionary;
use honeycomb_topology::HoneycombGraph;

/// Every word of `dictionary` spelled by a simple path through `graph`,
/// sorted ascending with no duplicates.
pub fn find_words(dictionary: &Dictionary, graph: &HoneycombGraph) -> Vec<String> {
    WordFinder::new(dictionary, graph).find_words()
}
