//! Honeycomb graph: lettered cells and their adjacency.
//!
//! Cells live in one arena in ring-major order, so a [`CellId`] is the
//! flat index of [`RingPos::index`]. Links are built from the inside out:
//! each cell of ring `i` links to its inward and same-ring neighbors, and
//! every link is mirrored as soon as it is recorded. A cell's outward links
//! therefore appear while the next ring is processed, and the outermost ring
//! never gets any.

use std::ops::Index;

use tracing::debug;

use crate::adjacency::{inward_neighbors, same_ring_neighbors};
use crate::error::{Malformation, Result, TopologyError};
use crate::ring::{ring_pos_to_coord, slots_in_ring, total_cells_through, RingPos};
use crate::HexCoord;

/// Index of a cell in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub usize);

impl CellId {
    /// Get the raw index value.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for CellId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One lettered cell.
#[derive(Debug, Clone)]
pub struct Cell {
    ch: char,
    pos: RingPos,
    neighbors: Vec<CellId>,
}

impl Cell {
    /// The letter on this cell.
    #[inline]
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Where the cell sits.
    #[inline]
    pub fn pos(&self) -> RingPos {
        self.pos
    }

    /// Axial coordinate of the cell.
    pub fn coord(&self) -> HexCoord {
        ring_pos_to_coord(self.pos)
    }

    /// Adjacent cells, in the order the links were recorded.
    #[inline]
    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }
}

/// A honeycomb of `depth` rings with a letter on every cell.
#[derive(Debug, Clone)]
pub struct HoneycombGraph {
    depth: usize,
    cells: Vec<Cell>,
}

impl HoneycombGraph {
    /// Build a honeycomb from one character string per ring.
    ///
    /// `rings[0]` must hold exactly one character and `rings[i]` exactly
    /// `6i`, listed counter-clockwise from the +q corner (see
    /// [`crate::ring`]). Fails with [`TopologyError::MalformedGraph`] if
    /// `depth` is zero or any ring is missing or the wrong length.
    pub fn new<S: AsRef<str>>(depth: usize, rings: &[S]) -> Result<Self> {
        if depth == 0 {
            return Err(Malformation::ZeroDepth.into());
        }
        if rings.len() != depth {
            return Err(Malformation::RingCount {
                expected: depth,
                actual: rings.len(),
            }
            .into());
        }

        let mut cells = Vec::with_capacity(total_cells_through(depth - 1));
        for (ring, letters) in rings.iter().enumerate() {
            let letters = letters.as_ref();
            let expected = slots_in_ring(ring);
            let actual = letters.chars().count();
            if actual != expected {
                return Err(Malformation::RingLength {
                    ring,
                    expected,
                    actual,
                }
                .into());
            }

            cells.extend(letters.chars().enumerate().map(|(offset, ch)| Cell {
                ch,
                pos: RingPos::new(ring, offset),
                neighbors: Vec::with_capacity(6),
            }));
        }

        let mut graph = Self { depth, cells };
        graph.link_rings();

        debug!(
            depth,
            cells = graph.len(),
            links = graph.link_count(),
            "built honeycomb"
        );

        Ok(graph)
    }

    /// Build a honeycomb whose depth is the number of rings supplied.
    pub fn from_rings<S: AsRef<str>>(rings: &[S]) -> Result<Self> {
        Self::new(rings.len(), rings)
    }

    fn link_rings(&mut self) {
        for ring in 1..self.depth {
            for offset in 0..slots_in_ring(ring) {
                let pos = RingPos::new(ring, offset);
                let id = CellId(pos.index());

                for other in inward_neighbors(pos)
                    .into_iter()
                    .chain(same_ring_neighbors(pos))
                {
                    self.link(id, CellId(other.index()));
                }
            }
        }
    }

    /// Record `a`–`b` in both directions.
    fn link(&mut self, a: CellId, b: CellId) {
        if !self.cells[a.0].neighbors.contains(&b) {
            self.cells[a.0].neighbors.push(b);
        }
        if !self.cells[b.0].neighbors.contains(&a) {
            self.cells[b.0].neighbors.push(a);
        }
    }

    /// Number of rings.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed graph; a honeycomb has at least its center.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.cells.iter().map(|c| c.neighbors.len()).sum::<usize>() / 2
    }

    /// All cells in ring-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Ids of all cells in ring-major order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = CellId> {
        (0..self.cells.len()).map(CellId)
    }

    /// Look up a cell.
    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// The cells of one ring, or `None` past the outermost ring.
    pub fn ring(&self, ring: usize) -> Option<&[Cell]> {
        if ring >= self.depth {
            return None;
        }
        let start = RingPos::new(ring, 0).index();
        Some(&self.cells[start..start + slots_in_ring(ring)])
    }

    /// Id of the cell at `pos`.
    pub fn cell_id(&self, pos: RingPos) -> Result<CellId> {
        if pos.ring >= self.depth || !pos.is_valid() {
            return Err(TopologyError::PositionOutOfBounds {
                pos,
                depth: self.depth,
            });
        }
        Ok(CellId(pos.index()))
    }

    /// Position of the cell `id`.
    pub fn ring_pos(&self, id: CellId) -> Result<RingPos> {
        self.get(id).map(Cell::pos).ok_or(TopologyError::CellOutOfBounds {
            id,
            len: self.len(),
        })
    }

    /// Neighbors of `id`; empty for an unknown id.
    #[inline]
    pub fn neighbors(&self, id: CellId) -> &[CellId] {
        self.get(id).map(Cell::neighbors).unwrap_or(&[])
    }

    /// Whether `a` and `b` share an edge.
    pub fn are_adjacent(&self, a: CellId, b: CellId) -> bool {
        self.neighbors(a).contains(&b)
    }
}

impl Index<CellId> for HoneycombGraph {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
}

impl std::fmt::Display for HoneycombGraph {
    /// Renders in the input layout: depth, then one line per ring.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.depth)?;
        for ring in 0..self.depth {
            let letters: String = self
                .ring(ring)
                .unwrap_or_default()
                .iter()
                .map(Cell::ch)
                .collect();
            writeln!(f, "{}", letters)?;
        }
        Ok(())
    }
}
