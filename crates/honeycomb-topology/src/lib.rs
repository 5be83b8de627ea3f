//! Honeycomb Topology
//!
//! Lettered hexagonal honeycombs addressed by concentric rings.
//!
//! # Addressing
//!
//! A honeycomb of depth `d` has a center cell (ring 0) and rings `1..d`,
//! ring `i` holding `6i` cells. Cells are addressed by [`RingPos`]
//! (ring, offset) and, inside a built graph, by a dense [`CellId`] in
//! ring-major order. Offsets wind counter-clockwise from the +q corner;
//! [`ring_pos_to_coord`] places every position on the axial plane so the
//! ring arithmetic can be checked against plain hex distance.
//!
//! # Adjacency
//!
//! [`ring_neighbors`] derives inward, same-ring and outward neighbors from
//! a position alone. [`HoneycombGraph`] uses the inward and same-ring half
//! while linking rings from the inside out, mirroring each link as it goes,
//! so the relation is symmetric by construction.

mod adjacency;
mod error;
mod graph;
mod hex;
mod ring;

pub use adjacency::{
    inward_neighbors, outward_neighbors, ring_neighbors, same_ring_neighbors, RingNeighbors,
};
pub use error::{Malformation, Result, TopologyError};
pub use graph::{Cell, CellId, HoneycombGraph};
pub use hex::HexCoord;
pub use ring::{
    coord_to_ring_pos, ring_pos_to_coord, slots_in_ring, total_cells_through, RingPos, RingWalk,
};

/// Neighbors of a cell away from the boundary.
pub const MAX_NEIGHBORS: usize = 6;
