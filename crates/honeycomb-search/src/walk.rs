//! Path-local search state and the two depth-first traversals.
//!
//! A [`Walk`] owns everything that changes while a path grows: the in-path
//! set, the letters spelled so far and the cells that spelled them. The
//! graph and dictionary are only read. [`Walk::enter`] and [`Walk::leave`]
//! are the only places the path changes and are always paired, so a cell
//! is back out of the in-path set before control returns to whoever put it
//! there.

use std::collections::BTreeMap;

use honeycomb_lexicon::{Cursor, Dictionary};
use honeycomb_topology::{CellId, HoneycombGraph};

/// Counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Starting cells tried
    pub starts: usize,
    /// Paths whose letters form a dictionary prefix
    pub visited: usize,
    /// Extensions rejected because they stop being a prefix
    pub pruned: usize,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.starts += other.starts;
        self.visited += other.visited;
        self.pruned += other.pruned;
    }
}

/// Words found so far, each with the path of its first discovery.
pub(crate) type Found = BTreeMap<String, Vec<CellId>>;

struct Frame<'a> {
    cell: CellId,
    cursor: Cursor<'a>,
    next: usize,
}

pub(crate) struct Walk<'a> {
    dictionary: &'a Dictionary,
    graph: &'a HoneycombGraph,
    with_paths: bool,
    in_path: Vec<bool>,
    word: String,
    path: Vec<CellId>,
    found: Found,
    stats: SearchStats,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(dictionary: &'a Dictionary, graph: &'a HoneycombGraph, with_paths: bool) -> Self {
        Self {
            dictionary,
            graph,
            with_paths,
            in_path: vec![false; graph.len()],
            word: String::new(),
            path: Vec::new(),
            found: Found::new(),
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn finish(self) -> (Found, SearchStats) {
        debug_assert!(self.path.is_empty() && self.in_path.iter().all(|used| !used));
        (self.found, self.stats)
    }

    /// Cursor for the one-letter string on `start`, if it is a prefix.
    fn begin(&mut self, start: CellId) -> Option<Cursor<'a>> {
        self.stats.starts += 1;
        let cursor = self.dictionary.cursor().step(self.graph[start].ch());
        if cursor.is_none() {
            self.stats.pruned += 1;
        }
        cursor
    }

    fn enter(&mut self, cell: CellId) {
        self.in_path[cell.index()] = true;
        self.word.push(self.graph[cell].ch());
        self.path.push(cell);
    }

    fn leave(&mut self) {
        if let Some(cell) = self.path.pop() {
            self.in_path[cell.index()] = false;
            self.word.pop();
        }
    }

    /// Bookkeeping on arriving at a path that spells a prefix.
    fn arrive(&mut self, cursor: Cursor<'a>) {
        self.stats.visited += 1;
        if cursor.is_word() && !self.found.contains_key(&self.word) {
            let path = if self.with_paths {
                self.path.clone()
            } else {
                Vec::new()
            };
            self.found.insert(self.word.clone(), path);
        }
    }

    /// Recursive search for every word whose path starts at `start`.
    pub(crate) fn search_from(&mut self, start: CellId) {
        let Some(cursor) = self.begin(start) else {
            return;
        };

        self.enter(start);
        self.visit(start, cursor);
        self.leave();
    }

    fn visit(&mut self, cell: CellId, cursor: Cursor<'a>) {
        self.arrive(cursor);
        if !cursor.has_children() {
            return;
        }

        let graph = self.graph;
        for &next in graph.neighbors(cell) {
            if self.in_path[next.index()] {
                continue;
            }
            match cursor.step(graph[next].ch()) {
                Some(extended) => {
                    self.enter(next);
                    self.visit(next, extended);
                    self.leave();
                }
                None => self.stats.pruned += 1,
            }
        }
    }

    /// Same traversal as [`Walk::search_from`], without native recursion.
    ///
    /// Each frame remembers which neighbor to try next, so cells are
    /// explored in exactly the order the recursive version uses.
    pub(crate) fn search_from_stacked(&mut self, start: CellId) {
        let Some(cursor) = self.begin(start) else {
            return;
        };

        let graph = self.graph;
        self.enter(start);
        self.arrive(cursor);

        let mut stack = vec![Frame {
            cell: start,
            cursor,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let neighbors = graph.neighbors(frame.cell);
            if !frame.cursor.has_children() || frame.next >= neighbors.len() {
                stack.pop();
                self.leave();
                continue;
            }

            let next = neighbors[frame.next];
            frame.next += 1;
            let cursor = frame.cursor;

            if self.in_path[next.index()] {
                continue;
            }
            match cursor.step(graph[next].ch()) {
                Some(extended) => {
                    self.enter(next);
                    self.arrive(extended);
                    stack.push(Frame {
                        cell: next,
                        cursor: extended,
                        next: 0,
                    });
                }
                None => self.stats.pruned += 1,
            }
        }
    }
}
