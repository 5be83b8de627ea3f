//! Hexagonal coordinate system using axial coordinates.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees, with an implicit
//! third axis s = -q - r. Every honeycomb cell has a unique axial position,
//! which gives an independent geometric check on the ring-index arithmetic
//! in [`crate::adjacency`].

use std::ops::{Add, Neg, Sub};

/// A position on the honeycomb plane.
///
/// The implicit third axis is s = -q - r.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    /// First axial coordinate
    pub q: i64,
    /// Second axial coordinate
    pub r: i64,
}

impl HexCoord {
    /// Center of the honeycomb.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// The six unit directions, counter-clockwise starting from +q.
    ///
    /// Direction `k` is also the direction from the center to corner `k`
    /// of every ring.
    pub const DIRECTIONS: [Self; 6] = [
        Self { q: 1, r: 0 },
        Self { q: 0, r: 1 },
        Self { q: -1, r: 1 },
        Self { q: -1, r: 0 },
        Self { q: 0, r: -1 },
        Self { q: 1, r: -1 },
    ];

    /// Create a new coordinate.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Compute the implicit third axis: s = -q - r.
    pub const fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Hexagonal distance between two coordinates.
    ///
    /// max(|dq|, |dr|, |ds|) where ds = -dq - dr
    pub fn hex_distance(&self, other: &Self) -> u64 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = ((self.q - other.q) + (self.r - other.r)).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// Ring number (0 = center, 1 = first ring, etc.)
    pub fn ring(&self) -> u64 {
        self.hex_distance(&Self::ORIGIN)
    }

    /// Scale by an integer factor.
    pub const fn scale(self, factor: i64) -> Self {
        Self {
            q: self.q * factor,
            r: self.r * factor,
        }
    }

    /// Get all six neighbors.
    pub fn neighbors(&self) -> [Self; 6] {
        Self::DIRECTIONS.map(|d| *self + d)
    }

    /// Whether two coordinates share an edge.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.hex_distance(other) == 1
    }
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for HexCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl Neg for HexCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s_axis_constraint() {
        let coords = [
            HexCoord::new(0, 0),
            HexCoord::new(1, 0),
            HexCoord::new(1, -1),
            HexCoord::new(-3, 5),
        ];
        for c in coords {
            assert_eq!(c.q + c.r + c.s(), 0);
        }
    }

    #[test]
    fn hex_distance_from_origin() {
        assert_eq!(HexCoord::ORIGIN.ring(), 0);

        for dir in HexCoord::DIRECTIONS {
            assert_eq!(dir.ring(), 1);
        }

        assert_eq!(HexCoord::new(2, 0).ring(), 2);
        assert_eq!(HexCoord::new(1, 1).ring(), 2);
        assert_eq!(HexCoord::new(2, -1).ring(), 2);
    }

    #[test]
    fn six_unique_neighbors() {
        let mut neighbors = HexCoord::new(2, -1).neighbors().to_vec();
        for n in &neighbors {
            assert!(n.is_adjacent(&HexCoord::new(2, -1)));
        }

        neighbors.sort();
        neighbors.dedup();
        assert_eq!(neighbors.len(), 6);
    }

    #[test]
    fn consecutive_directions_are_adjacent() {
        // Walking from corner k toward corner k+1 is a unit step, which is
        // what makes the ring walk in `ring.rs` stay on the ring.
        for k in 0..6 {
            let a = HexCoord::DIRECTIONS[k];
            let b = HexCoord::DIRECTIONS[(k + 1) % 6];
            assert!(a.is_adjacent(&b));
        }
    }

    #[test]
    fn addition_subtraction() {
        let a = HexCoord::new(1, 2);
        let b = HexCoord::new(4, -1);

        assert_eq!(a + b, HexCoord::new(5, 1));
        assert_eq!(a - b, HexCoord::new(-3, 3));
        assert_eq!(a + (-b), a - b);
        assert_eq!(a.scale(3), HexCoord::new(3, 6));
    }
}
