//! Word finder: runs a configured search over a whole honeycomb.

use std::collections::BTreeMap;

use honeycomb_lexicon::Dictionary;
use honeycomb_topology::{CellId, HoneycombGraph};
use rayon::prelude::*;
use tracing::debug;

use crate::config::{SearchConfig, SearchStrategy};
use crate::walk::{Found, SearchStats, Walk};

/// Result of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    /// Distinct words, ascending
    pub words: Vec<String>,
    /// First path found for each word; empty unless paths were requested
    pub paths: BTreeMap<String, Vec<CellId>>,
    /// Traversal counters
    pub stats: SearchStats,
}

/// Finds every dictionary word spelled by a simple path through a honeycomb.
///
/// A path moves between adjacent cells and never reuses a cell. The graph
/// and dictionary are borrowed read-only; all path state lives in the
/// search itself, so one finder can run any number of times.
#[derive(Debug, Clone)]
pub struct WordFinder<'a> {
    dictionary: &'a Dictionary,
    graph: &'a HoneycombGraph,
    config: SearchConfig,
}

impl<'a> WordFinder<'a> {
    /// Create a finder with the default configuration.
    pub fn new(dictionary: &'a Dictionary, graph: &'a HoneycombGraph) -> Self {
        Self {
            dictionary,
            graph,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Sorted, deduplicated words.
    pub fn find_words(&self) -> Vec<String> {
        self.run().words
    }

    /// Each found word with the cells that first spelled it.
    pub fn find_word_paths(&self) -> BTreeMap<String, Vec<CellId>> {
        let config = SearchConfig {
            with_paths: true,
            ..self.config.clone()
        };
        self.clone().with_config(config).run().paths
    }

    /// Run the search with the configured strategy.
    pub fn run(&self) -> FoundWords {
        let (found, stats) = match self.config.strategy {
            SearchStrategy::Recursive => self.sequential(Walk::search_from),
            SearchStrategy::Stack => self.sequential(Walk::search_from_stacked),
            SearchStrategy::Parallel => self.parallel(),
        };

        debug!(
            strategy = %self.config.strategy,
            cells = self.graph.len(),
            words = found.len(),
            visited = stats.visited,
            pruned = stats.pruned,
            "search complete"
        );

        let words = found.keys().cloned().collect();
        let paths = if self.config.with_paths {
            found
        } else {
            BTreeMap::new()
        };

        FoundWords {
            words,
            paths,
            stats,
        }
    }

    fn sequential(&self, search_from: fn(&mut Walk<'a>, CellId)) -> (Found, SearchStats) {
        let mut walk = Walk::new(self.dictionary, self.graph, self.config.with_paths);
        for start in self.graph.ids() {
            search_from(&mut walk, start);
        }
        walk.finish()
    }

    /// One walk per starting cell, each with its own in-path set.
    ///
    /// Per-start results are merged in cell order, so the first path kept
    /// for a word is the one the sequential strategies keep.
    fn parallel(&self) -> (Found, SearchStats) {
        let per_start: Vec<(Found, SearchStats)> = (0..self.graph.len())
            .into_par_iter()
            .map(|index| {
                let mut walk = Walk::new(self.dictionary, self.graph, self.config.with_paths);
                walk.search_from(CellId(index));
                walk.finish()
            })
            .collect();

        let mut merged = Found::new();
        let mut stats = SearchStats::default();
        for (found, start_stats) in per_start {
            for (word, path) in found {
                merged.entry(word).or_insert(path);
            }
            stats += start_stats;
        }
        (merged, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeycomb_topology::{Malformation, RingPos, TopologyError};

    fn graph(rings: &[&str]) -> HoneycombGraph {
        HoneycombGraph::from_rings(rings).unwrap()
    }

    fn all_strategies(dictionary: &Dictionary, graph: &HoneycombGraph) -> Vec<String> {
        let expected = WordFinder::new(dictionary, graph).find_words();
        for strategy in SearchStrategy::ALL {
            let words = WordFinder::new(dictionary, graph)
                .with_strategy(strategy)
                .find_words();
            assert_eq!(words, expected, "strategy {} disagrees", strategy);
        }
        expected
    }

    #[test]
    fn builder_sets_config() {
        let dictionary = Dictionary::new();
        let honeycomb = graph(&["a"]);

        let finder = WordFinder::new(&dictionary, &honeycomb);
        assert_eq!(finder.config().strategy, SearchStrategy::Recursive);
        assert!(!finder.config().with_paths);

        let finder = finder
            .with_config(SearchConfig {
                strategy: SearchStrategy::Stack,
                with_paths: true,
            })
            .with_strategy(SearchStrategy::Parallel);
        assert_eq!(finder.config().strategy, SearchStrategy::Parallel);
        assert!(finder.config().with_paths);
    }

    #[test]
    fn single_cell() {
        let dictionary = Dictionary::from_words(["a"]);
        assert_eq!(all_strategies(&dictionary, &graph(&["a"])), vec!["a"]);
    }

    #[test]
    fn center_and_first_ring() {
        let dictionary = Dictionary::from_words(["ab", "ac", "ba"]);
        let honeycomb = graph(&["a", "bcdefg"]);
        assert_eq!(all_strategies(&dictionary, &honeycomb), vec!["ab", "ac", "ba"]);
    }

    #[test]
    fn letters_present_but_not_adjacent() {
        // b (1,0) and d (1,2) are both in ring 1 but do not touch
        let dictionary = Dictionary::from_words(["bd", "bc", "gb"]);
        let honeycomb = graph(&["a", "bcdefg"]);
        assert_eq!(all_strategies(&dictionary, &honeycomb), vec!["bc", "gb"]);
    }

    #[test]
    fn cells_are_not_reused() {
        let dictionary = Dictionary::from_words(["aa", "aba", "bab", "abc"]);
        let honeycomb = graph(&["a", "bcdefg"]);
        assert_eq!(all_strategies(&dictionary, &honeycomb), vec!["abc"]);

        let single = Dictionary::from_words(["aa"]);
        assert!(all_strategies(&single, &graph(&["a"])).is_empty());
    }

    #[test]
    fn repeated_letters_on_distinct_cells() {
        let dictionary = Dictionary::from_words(["aa", "aaa", "aaaa"]);
        let honeycomb = graph(&["a", "abbbba"]);
        // center, (1,0) and (1,5) are mutually adjacent: three a's at most
        assert_eq!(all_strategies(&dictionary, &honeycomb), vec!["aa", "aaa"]);
    }

    #[test]
    fn malformed_ring_never_reaches_search() {
        let rings = ["a", "bcdefg", "hijklmnopqr"];
        assert_eq!(
            HoneycombGraph::from_rings(&rings).unwrap_err(),
            TopologyError::MalformedGraph(Malformation::RingLength {
                ring: 2,
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let dictionary = Dictionary::new();
        let honeycomb = graph(&["a", "bcdefg"]);
        let found = WordFinder::new(&dictionary, &honeycomb).run();
        assert!(found.words.is_empty());
        assert_eq!(found.stats.starts, 7);
        assert_eq!(found.stats.visited, 0);
        assert_eq!(found.stats.pruned, 7);
    }

    #[test]
    fn same_word_from_many_starts_reported_once() {
        let dictionary = Dictionary::from_words(["xy"]);
        let honeycomb = graph(&["y", "xxxxxx"]);
        assert_eq!(all_strategies(&dictionary, &honeycomb), vec!["xy"]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let dictionary = Dictionary::from_words(["ace", "bag", "cab", "fade", "dab", "be"]);
        let honeycomb = graph(&["a", "bcdefg", "hijklmnopqrs"]);
        let finder = WordFinder::new(&dictionary, &honeycomb);
        let first = finder.run();
        assert_eq!(first, finder.run());
        assert_eq!(first, finder.clone().with_strategy(SearchStrategy::Parallel).run());
    }

    #[test]
    fn stats_agree_across_strategies() {
        let dictionary = Dictionary::from_words(["abc", "acd", "gab", "bcdefg"]);
        let honeycomb = graph(&["a", "bcdefg", "hijklmnopqrs"]);
        let stats: Vec<_> = SearchStrategy::ALL
            .into_iter()
            .map(|s| WordFinder::new(&dictionary, &honeycomb).with_strategy(s).run().stats)
            .collect();
        assert_eq!(stats[0], stats[1]);
        assert_eq!(stats[0], stats[2]);
        assert_eq!(stats[0].starts, 19);
    }

    #[test]
    fn paths_spell_words_along_edges() {
        let dictionary = Dictionary::from_words(["bcdefg", "abc", "gab", "hib", "ih"]);
        let honeycomb = graph(&["a", "bcdefg", "hijklmnopqrs"]);

        for strategy in SearchStrategy::ALL {
            let paths = WordFinder::new(&dictionary, &honeycomb)
                .with_strategy(strategy)
                .find_word_paths();
            assert_eq!(
                paths.keys().collect::<Vec<_>>(),
                vec!["abc", "bcdefg", "gab", "hib", "ih"]
            );

            for (word, path) in &paths {
                let spelled: String = path.iter().map(|&id| honeycomb[id].ch()).collect();
                assert_eq!(&spelled, word);

                for pair in path.windows(2) {
                    assert!(honeycomb.are_adjacent(pair[0], pair[1]));
                }

                let mut cells = path.clone();
                cells.sort();
                cells.dedup();
                assert_eq!(cells.len(), path.len(), "{} reuses a cell", word);
            }

            let first = honeycomb.ring_pos(paths["hib"][0]).unwrap();
            assert_eq!(first, RingPos::new(2, 0));
        }
    }

    #[test]
    fn paths_omitted_by_default() {
        let dictionary = Dictionary::from_words(["ab"]);
        let honeycomb = graph(&["a", "bcdefg"]);
        let found = WordFinder::new(&dictionary, &honeycomb).run();
        assert_eq!(found.words, vec!["ab"]);
        assert!(found.paths.is_empty());
    }
}
