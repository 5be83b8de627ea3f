//! Error types for honeycomb construction and lookup.

use thiserror::Error;

use crate::{CellId, RingPos};

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors that can occur building or addressing a honeycomb.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// The ring data does not describe a complete honeycomb
    #[error("malformed honeycomb: {0}")]
    MalformedGraph(#[from] Malformation),

    /// A ring position outside the honeycomb
    #[error("position {pos} is outside a honeycomb of depth {depth}")]
    PositionOutOfBounds { pos: RingPos, depth: usize },

    /// A cell id outside the honeycomb
    #[error("cell {id} is outside a honeycomb of {len} cells")]
    CellOutOfBounds { id: CellId, len: usize },
}

/// What is wrong with malformed ring data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("depth must be at least 1")]
    ZeroDepth,

    #[error("expected {expected} rings, got {actual}")]
    RingCount { expected: usize, actual: usize },

    #[error("ring {ring} has {actual} cells, expected {expected}")]
    RingLength {
        ring: usize,
        expected: usize,
        actual: usize,
    },
}
