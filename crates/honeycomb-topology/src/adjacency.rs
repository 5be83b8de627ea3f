//! Ring-index adjacency.
//!
//! Neighbors of a cell are computed purely from its [`RingPos`], without
//! going through axial coordinates. With `k = j / i` the side of cell
//! `(i, j)` and `L = 6(i - 1)`:
//!
//! - **Inward**: a corner (`j % i == 0`) touches one cell of ring `i - 1`,
//!   offset `k(i - 1)`. An edge cell touches two, offsets
//!   `(j - k - 1) mod L` and `(j - k) mod L`.
//! - **Same ring**: offsets `j ± 1` modulo `6i`.
//! - **Outward**: a corner touches three cells of ring `i + 1`, offsets
//!   `k(i + 1) - 1`, `k(i + 1)`, `k(i + 1) + 1`. An edge cell touches two,
//!   offsets `j + k` and `j + k + 1`. The outermost ring has none.
//!
//! The center is special: its six neighbors are the whole of ring 1.

use crate::ring::{slots_in_ring, RingPos};

/// Neighbors of one cell, grouped by direction relative to the center.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RingNeighbors {
    /// Cells one ring closer to the center (0, 1 or 2)
    pub inward: Vec<RingPos>,
    /// The two circular neighbors in the same ring (none for the center)
    pub same_ring: Vec<RingPos>,
    /// Cells one ring further out (0, 2, 3 or 6)
    pub outward: Vec<RingPos>,
}

impl RingNeighbors {
    /// Total number of neighbors.
    pub fn len(&self) -> usize {
        self.inward.len() + self.same_ring.len() + self.outward.len()
    }

    /// True for the lone cell of a depth-1 honeycomb.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All neighbors: inward, then same ring, then outward.
    pub fn iter(&self) -> impl Iterator<Item = RingPos> + '_ {
        self.inward
            .iter()
            .chain(&self.same_ring)
            .chain(&self.outward)
            .copied()
    }
}

/// Inward neighbors of `pos`, in ring `pos.ring - 1`.
pub fn inward_neighbors(pos: RingPos) -> Vec<RingPos> {
    let (i, j) = (pos.ring, pos.offset);
    if i == 0 {
        return Vec::new();
    }

    let k = j / i;
    if pos.is_corner() {
        return vec![RingPos::new(i - 1, k * (i - 1))];
    }

    let inner = slots_in_ring(i - 1);
    vec![
        RingPos::new(i - 1, (j - k - 1 + inner) % inner),
        RingPos::new(i - 1, (j - k) % inner),
    ]
}

/// Circular neighbors of `pos` within its own ring.
pub fn same_ring_neighbors(pos: RingPos) -> Vec<RingPos> {
    let (i, j) = (pos.ring, pos.offset);
    if i == 0 {
        return Vec::new();
    }

    let len = slots_in_ring(i);
    vec![
        RingPos::new(i, (j + 1) % len),
        RingPos::new(i, (j + len - 1) % len),
    ]
}

/// Outward neighbors of `pos`, in ring `pos.ring + 1`.
///
/// Unbounded: callers drop these for the outermost ring.
pub fn outward_neighbors(pos: RingPos) -> Vec<RingPos> {
    let (i, j) = (pos.ring, pos.offset);
    let outer = slots_in_ring(i + 1);

    if i == 0 {
        return (0..outer).map(|o| RingPos::new(1, o)).collect();
    }

    let k = j / i;
    if pos.is_corner() {
        let base = k * (i + 1);
        vec![
            RingPos::new(i + 1, (base + outer - 1) % outer),
            RingPos::new(i + 1, base),
            RingPos::new(i + 1, (base + 1) % outer),
        ]
    } else {
        vec![
            RingPos::new(i + 1, (j + k) % outer),
            RingPos::new(i + 1, (j + k + 1) % outer),
        ]
    }
}

/// All neighbors of `pos` in a honeycomb with `depth` rings.
pub fn ring_neighbors(pos: RingPos, depth: usize) -> RingNeighbors {
    let outward = if pos.ring + 1 < depth {
        outward_neighbors(pos)
    } else {
        Vec::new()
    };

    RingNeighbors {
        inward: inward_neighbors(pos),
        same_ring: same_ring_neighbors(pos),
        outward,
    }
}
