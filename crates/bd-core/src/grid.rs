//! Grid coordinates and neighbor directions.
//!
//! Coordinates are bookkeeping only: the simulation never does geometry on
//! them.  They exist so a renderer can lay cells out and so tests can assert
//! on the shape a layout produced.
//!
//! ```text
//!          x = 0      1      2      3   (forward offset, one per row)
//!   y = 0         [1A]   [2A]   [3A]
//!   y = 1  [gate] [ ]  → [ ]  → [ ]     aisle chain (Forward / Backward)
//!   y = 2         [1B]   [2B]   [3B]
//! ```
//!
//! `LateralA` points toward smaller `y` (earlier pattern characters),
//! `LateralB` toward larger `y`.

use std::fmt;

/// Position of a cell on the cabin grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    /// Forward offset from the gate (0 = gate, 1 = first row, …).
    pub x: i32,
    /// Lateral offset across the row (pattern character index).
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four named neighbor relations of a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Across the row toward lower column letters.
    LateralA,
    /// Across the row toward higher column letters.
    LateralB,
    /// Down the aisle, away from the gate.
    Forward,
    /// Up the aisle, toward the gate.
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::LateralA,
        Direction::LateralB,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Slot of this direction in a 4-entry adjacency row.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::LateralA => 0,
            Direction::LateralB => 1,
            Direction::Forward  => 2,
            Direction::Backward => 3,
        }
    }

    /// The relation that must be set on the other cell to keep the link
    /// navigable both ways.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::LateralA => Direction::LateralB,
            Direction::LateralB => Direction::LateralA,
            Direction::Forward  => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    #[inline]
    pub fn is_lateral(self) -> bool {
        matches!(self, Direction::LateralA | Direction::LateralB)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::LateralA => "lateral-a",
            Direction::LateralB => "lateral-b",
            Direction::Forward  => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
