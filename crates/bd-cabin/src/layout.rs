//! Declarative cabin layouts and the builder that turns them into an
//! [`Aircraft`].
//!
//! # Pattern alphabet
//!
//! Each row is described left to right by one character per lateral slot:
//!
//! | Char | Meaning                                                        |
//! |------|----------------------------------------------------------------|
//! | `S`  | seat; takes the next column letter                             |
//! | `A`  | aisle; joins the single front-to-back aisle chain              |
//! | `+`  | blocked column; consumes a column letter, creates no cell      |
//! | else | ignored (use `.` or `_` for visual spacing)                    |
//!
//! ```
//! use bd_cabin::{LayoutSpec, build_aircraft};
//!
//! // 3 rows of "AB | CD", then one exit row missing seat B.
//! let spec = LayoutSpec::new()
//!     .rows(3, "SSASS")
//!     .rows(1, "S+ASS");
//! let aircraft = build_aircraft(&spec).unwrap();
//! assert_eq!(aircraft.seat_count(), 3 * 4 + 3);
//! assert!(aircraft.find_seat_by_id("4B").is_none());
//! assert!(aircraft.find_seat_by_id("4C").is_some());
//! ```
//!
//! The builder does not check that the result is connected.  A layout with
//! no aisle cells yields seats nobody can reach; callers can detect this with
//! [`Aircraft::unreachable_seats`].

use serde::Deserialize;

use bd_core::{CellId, Direction, GridPos};

use crate::{Aircraft, CabinError, CabinResult, Cell, CellKind, Column, SeatLabel};

// ── Layout types ──────────────────────────────────────────────────────────────

/// `repeat` consecutive rows sharing one pattern.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RowGroup {
    pub repeat:  u32,
    pub pattern: String,
}

/// Ordered row groups, front of the cabin first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSpec {
    pub groups: Vec<RowGroup>,
}

impl LayoutSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row group (fluent).
    pub fn rows(mut self, repeat: u32, pattern: impl Into<String>) -> Self {
        self.groups.push(RowGroup { repeat, pattern: pattern.into() });
        self
    }

    /// `rows` identical rows of `seats_per_side` seats, one aisle, and
    /// `seats_per_side` seats.
    pub fn single_aisle(rows: u32, seats_per_side: usize) -> Self {
        let side = "S".repeat(seats_per_side);
        Self::new().rows(rows, format!("{side}A{side}"))
    }

    /// Total number of concrete rows.
    pub fn row_count(&self) -> u32 {
        self.groups.iter().map(|g| g.repeat).sum()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq)]
enum Slot {
    Seat,
    Aisle,
    Blocked,
    Ignored,
}

impl Slot {
    fn from_char(c: char) -> Slot {
        match c {
            'S' => Slot::Seat,
            'A' => Slot::Aisle,
            '+' => Slot::Blocked,
            _ => Slot::Ignored,
        }
    }
}

/// Build an [`Aircraft`] from `spec`.
///
/// Row `n` (1-based, counted across all groups) sits at forward offset `n`;
/// the gate sits at offset 0 and is linked `Forward` to the first aisle cell.
/// Every aisle cell is linked `Forward` to the next aisle cell created, so
/// the aisle is one chain regardless of grouping.  Within a row, consecutive
/// created cells are linked laterally (`LateralB` points to the later one).
///
/// # Errors
///
/// [`CabinError::TooManyColumns`] if a row consumes more than 26 column
/// letters.
pub fn build_aircraft(spec: &LayoutSpec) -> CabinResult<Aircraft> {
    let mut aircraft = Aircraft::with_gate(GridPos::new(0, 0));
    let gate = aircraft.gate();
    let mut prev_aisle = gate;
    let mut row: u32 = 1;

    for group in &spec.groups {
        for _ in 0..group.repeat {
            let x = row as i32;
            let mut prev_cell: Option<CellId> = None;
            let mut column: usize = 0;

            for (y, c) in group.pattern.chars().enumerate() {
                let pos = GridPos::new(x, y as i32);
                let cell = match Slot::from_char(c) {
                    Slot::Seat => {
                        if column >= Column::MAX_COUNT {
                            return Err(CabinError::TooManyColumns { row, columns: column + 1 });
                        }
                        let label = SeatLabel::new(row, Column(column as u8));
                        column += 1;
                        aircraft.add_cell(Cell { pos, kind: CellKind::Seat(label) })
                    }
                    Slot::Aisle => {
                        let aisle = aircraft.add_cell(Cell { pos, kind: CellKind::Aisle });
                        if prev_aisle == gate {
                            aircraft.set_pos(gate, GridPos::new(0, pos.y));
                        }
                        aircraft.link(prev_aisle, Direction::Forward, aisle);
                        prev_aisle = aisle;
                        aisle
                    }
                    Slot::Blocked => {
                        column += 1;
                        continue;
                    }
                    Slot::Ignored => continue,
                };
                if let Some(prev) = prev_cell {
                    aircraft.link(prev, Direction::LateralB, cell);
                }
                prev_cell = Some(cell);
            }
            row += 1;
        }
    }

    tracing::debug!(
        rows  = aircraft.row_count(),
        seats = aircraft.seat_count(),
        cells = aircraft.cell_count(),
        "built aircraft"
    );
    Ok(aircraft)
}
