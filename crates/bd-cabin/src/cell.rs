//! Cells and seat identity.

use std::fmt;
use std::str::FromStr;

use bd_core::GridPos;

use crate::CabinError;

// ── Column ────────────────────────────────────────────────────────────────────

/// A seat column, stored as a zero-based index and printed as a letter
/// (`Column(0)` is `A`).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column(pub u8);

impl Column {
    /// Highest supported column count (`A`..=`Z`).
    pub const MAX_COUNT: usize = 26;

    #[inline]
    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    /// Parse a single uppercase letter.
    pub fn from_letter(c: char) -> Option<Column> {
        c.is_ascii_uppercase().then(|| Column(c as u8 - b'A'))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ── SeatLabel ─────────────────────────────────────────────────────────────────

/// Immutable seat identity: a 1-based row number and a column letter.
///
/// Prints and parses as `<row><column>`, e.g. `12C`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatLabel {
    pub row:    u32,
    pub column: Column,
}

impl SeatLabel {
    pub fn new(row: u32, column: Column) -> Self {
        Self { row, column }
    }

    /// Parse `<digits><letters>`; anything else yields `None`.
    ///
    /// Multi-letter columns are well-formed but can never name a seat, so
    /// they also yield `None`.
    pub fn parse(s: &str) -> Option<SeatLabel> {
        let s = s.trim();
        let split = s.find(|c: char| !c.is_ascii_digit())?;
        let (digits, letters) = s.split_at(split);
        if digits.is_empty() || !letters.chars().all(|c| c.is_ascii_uppercase()) {
            return None;
        }
        let row = digits.parse::<u32>().ok()?;
        let mut chars = letters.chars();
        let column = Column::from_letter(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(SeatLabel { row, column })
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

impl FromStr for SeatLabel {
    type Err = CabinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeatLabel::parse(s)
            .ok_or_else(|| CabinError::Parse(format!("invalid seat identifier {s:?}")))
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// What a cell is used for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// The single entry point.  Never a seat.
    Gate,
    /// Transit space.
    Aisle,
    /// An assignable seat.
    Seat(SeatLabel),
}

/// A unit of cabin space.
///
/// Occupancy is not stored here; the scheduler keeps the cell → occupants
/// map so cells stay plain immutable data once the layout is built.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos:  GridPos,
    pub kind: CellKind,
}

impl Cell {
    #[inline]
    pub fn seat(&self) -> Option<SeatLabel> {
        match self.kind {
            CellKind::Seat(label) => Some(label),
            _ => None,
        }
    }

    #[inline]
    pub fn is_seat(&self) -> bool {
        matches!(self.kind, CellKind::Seat(_))
    }
}
