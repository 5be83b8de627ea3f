//! Search configuration.

use std::str::FromStr;

use thiserror::Error;

/// How the grid is traversed. Every strategy returns the same words and
/// the same paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchStrategy {
    /// Depth-first recursion, one call per cell on the current path
    #[default]
    Recursive,
    /// Depth-first with an explicit frame stack instead of native recursion
    Stack,
    /// One independent recursive search per starting cell on the rayon pool
    Parallel,
}

impl SearchStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [Self; 3] = [Self::Recursive, Self::Stack, Self::Parallel];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Stack => "stack",
            Self::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy {0:?} (expected recursive, stack or parallel)")]
pub struct ParseStrategyError(pub String);

impl FromStr for SearchStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// Configuration for a [`crate::WordFinder`].
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Traversal strategy
    pub strategy: SearchStrategy,
    /// Keep the cell path of each word's first discovery
    pub with_paths: bool,
}
