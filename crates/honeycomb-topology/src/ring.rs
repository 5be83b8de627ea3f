//! Ring addressing for honeycomb cells.
//!
//! A honeycomb of depth `d` is a center cell surrounded by `d - 1`
//! concentric rings. Ring `i > 0` has `6i` cells, addressed by an offset
//! in `0..6i`.
//!
//! # Winding Convention
//!
//! Offset 0 of ring `i` is the corner on the +q axis, axial `(i, 0)`.
//! Offsets increase counter-clockwise: the walk visits corners
//! `(0, i)`, `(-i, i)`, `(-i, 0)`, `(0, -i)`, `(i, -i)` at offsets
//! `i`, `2i`, ... `5i`, taking `i` unit steps along each side.
//!
//! ```text
//!            (0,2) (-1,2) (-2,2)
//!        (1,1)  (0,1) (-1,1)  (-2,1)
//!    (2,0)  (1,0)  (0,0)  (-1,0)  (-2,0)
//!        (2,-1) (1,-1) (0,-1) (-1,-1)
//!            (2,-2) (1,-2) (0,-2)
//! ```
//!
//! Because every ring starts on the same axis and winds the same way, corner
//! `k` of ring `i` sits directly outward of corner `k` of ring `i - 1`, which
//! is what the index arithmetic in [`crate::adjacency`] relies on.

use crate::HexCoord;

/// Position of a cell: ring number and offset within the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingPos {
    /// Ring number, 0 for the center
    pub ring: usize,
    /// Offset within the ring, `0..slots_in_ring(ring)`
    pub offset: usize,
}

impl RingPos {
    /// The center cell.
    pub const CENTER: Self = Self { ring: 0, offset: 0 };

    /// Create a position. The offset is not range-checked.
    #[inline]
    pub const fn new(ring: usize, offset: usize) -> Self {
        Self { ring, offset }
    }

    /// Position for a ring-major flat index.
    ///
    /// Ring 0: index 0
    /// Ring 1: indices 1-6
    /// Ring 2: indices 7-18
    /// Ring n: indices from total_cells_through(n-1) to total_cells_through(n)-1
    ///
    /// Defined for every `usize`, including indices whose ring total would
    /// not fit in a `usize`.
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            return Self::CENTER;
        }

        // Binary search for the smallest ring whose running total exceeds index
        let mut low = 1usize;
        let mut high = ((index as f64).sqrt() as usize) + 2;

        while low < high {
            let mid = (low + high) / 2;
            match checked_cells_through(mid) {
                Some(total) if total <= index => low = mid + 1,
                _ => high = mid,
            }
        }

        Self {
            ring: low,
            offset: index - total_cells_through(low - 1),
        }
    }

    /// Ring-major flat index, inverse of [`RingPos::from_index`].
    #[inline]
    pub const fn index(&self) -> usize {
        if self.ring == 0 {
            0
        } else {
            total_cells_through(self.ring - 1) + self.offset
        }
    }

    /// Whether the offset is in range for its ring.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.offset < slots_in_ring(self.ring)
    }

    /// Which side of the hexagon this cell lies on (0..6).
    ///
    /// Corners belong to the side they start. The center reports side 0.
    #[inline]
    pub const fn side(&self) -> usize {
        if self.ring == 0 {
            0
        } else {
            self.offset / self.ring
        }
    }

    /// A corner cell has exactly one inward neighbor.
    ///
    /// Every ring-1 cell is a corner; the center is not.
    #[inline]
    pub const fn is_corner(&self) -> bool {
        self.ring > 0 && self.offset % self.ring == 0
    }
}

impl std::fmt::Display for RingPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.ring, self.offset)
    }
}

/// Number of cells in ring n.
///
/// - Ring 0: 1 cell (center)
/// - Ring n > 0: 6n cells
#[inline]
pub const fn slots_in_ring(ring: usize) -> usize {
    if ring == 0 {
        1
    } else {
        6 * ring
    }
}

/// Total cells through ring n (inclusive): 1 + 3n(n+1).
#[inline]
pub const fn total_cells_through(ring: usize) -> usize {
    1 + 3 * ring * (ring + 1)
}

/// [`total_cells_through`], or `None` when the total overflows a `usize`.
fn checked_cells_through(ring: usize) -> Option<usize> {
    ring.checked_add(1)?
        .checked_mul(ring)?
        .checked_mul(3)?
        .checked_add(1)
}

/// Iterator over ring positions in ring-major order.
pub struct RingWalk {
    current: usize,
    end: usize,
}

impl RingWalk {
    /// All positions of a honeycomb with `depth` rings.
    pub fn depth(depth: usize) -> Self {
        Self {
            current: 0,
            end: if depth == 0 { 0 } else { total_cells_through(depth - 1) },
        }
    }

    /// Positions of rings `start_ring..=end_ring`.
    pub fn rings(start_ring: usize, end_ring: usize) -> Self {
        let start = if start_ring == 0 {
            0
        } else {
            total_cells_through(start_ring - 1)
        };

        Self {
            current: start,
            end: total_cells_through(end_ring),
        }
    }
}

impl Iterator for RingWalk {
    type Item = RingPos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end {
            return None;
        }

        let pos = RingPos::from_index(self.current);
        self.current += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingWalk {}

/// Axial coordinate of a ring position.
pub fn ring_pos_to_coord(pos: RingPos) -> HexCoord {
    if pos.ring == 0 {
        return HexCoord::ORIGIN;
    }

    let ring = pos.ring as i64;
    let side = pos.side() % 6;
    let step = (pos.offset % pos.ring) as i64;

    let corner = HexCoord::DIRECTIONS[side].scale(ring);
    let dir = HexCoord::DIRECTIONS[(side + 1) % 6] - HexCoord::DIRECTIONS[side];

    corner + dir.scale(step)
}

/// Ring position of an axial coordinate, inverse of [`ring_pos_to_coord`].
pub fn coord_to_ring_pos(coord: HexCoord) -> RingPos {
    if coord == HexCoord::ORIGIN {
        return RingPos::CENTER;
    }

    let ring = coord.ring() as usize;

    for side in 0..6 {
        let corner = HexCoord::DIRECTIONS[side].scale(ring as i64);
        let dir = HexCoord::DIRECTIONS[(side + 1) % 6] - HexCoord::DIRECTIONS[side];

        // Steps along this side needed to reach coord, if it is on the side at all
        let step = corner.hex_distance(&coord) as usize;
        if step < ring && corner + dir.scale(step as i64) == coord {
            return RingPos::new(ring, side * ring + step);
        }
    }

    unreachable!("every coordinate at distance {ring} lies on one side of ring {ring}")
}
