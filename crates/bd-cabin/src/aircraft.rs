//! The `Aircraft`: every cell, their neighbor relations, and the seat index.
//!
//! # Data layout
//!
//! ```text
//! cells[id]      → Cell { pos, kind }
//! adjacency[id]  → [lateral-a, lateral-b, forward, backward]  (Option<CellId>)
//! seats          → seat CellIds in enumeration order (row-major, A before B)
//! seat_index     → SeatLabel → CellId
//! ```
//!
//! All four are written only by the layout builder (`pub(crate)` mutators)
//! and read-only afterward.

use std::collections::{BTreeSet, VecDeque};

use rustc_hash::FxHashMap;

use bd_core::{CellId, Direction, GridPos};

use crate::{Cell, CellKind, Column, SeatLabel};

type Links = [Option<CellId>; 4];

/// Cabin grid plus seat lookup.  Build with [`build_aircraft`](crate::build_aircraft).
#[derive(Clone, Debug)]
pub struct Aircraft {
    cells:      Vec<Cell>,
    adjacency:  Vec<Links>,
    seats:      Vec<CellId>,
    seat_index: FxHashMap<SeatLabel, CellId>,
    rows:       BTreeSet<u32>,
    columns:    BTreeSet<Column>,
    gate:       CellId,
}

impl Aircraft {
    /// A cabin containing only the gate cell at `pos`.
    pub(crate) fn with_gate(pos: GridPos) -> Self {
        let mut aircraft = Self {
            cells:      Vec::new(),
            adjacency:  Vec::new(),
            seats:      Vec::new(),
            seat_index: FxHashMap::default(),
            rows:       BTreeSet::new(),
            columns:    BTreeSet::new(),
            gate:       CellId(0),
        };
        aircraft.gate = aircraft.add_cell(Cell { pos, kind: CellKind::Gate });
        aircraft
    }

    /// Append a cell and return its id.  Seats are also recorded in the
    /// seat index and the derived row/column sets.
    pub(crate) fn add_cell(&mut self, cell: Cell) -> CellId {
        let id = CellId(self.cells.len() as u32);
        if let CellKind::Seat(label) = cell.kind {
            self.seats.push(id);
            self.seat_index.insert(label, id);
            self.rows.insert(label.row);
            self.columns.insert(label.column);
        }
        self.cells.push(cell);
        self.adjacency.push([None; 4]);
        id
    }

    /// Link `from --dir--> to` and the matching reverse relation.
    pub(crate) fn link(&mut self, from: CellId, dir: Direction, to: CellId) {
        self.adjacency[from.index()][dir.index()] = Some(to);
        self.adjacency[to.index()][dir.opposite().index()] = Some(from);
    }

    pub(crate) fn set_pos(&mut self, cell: CellId, pos: GridPos) {
        self.cells[cell.index()].pos = pos;
    }

    // ── Cells and neighbors ───────────────────────────────────────────────

    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The neighbor of `cell` in direction `dir`, if any.
    #[inline]
    pub fn neighbor(&self, cell: CellId, dir: Direction) -> Option<CellId> {
        self.adjacency[cell.index()][dir.index()]
    }

    /// Seat identity of `cell`, or `None` for gate and aisle cells.
    #[inline]
    pub fn seat_label(&self, cell: CellId) -> Option<SeatLabel> {
        self.cells[cell.index()].seat()
    }

    /// The sole entry cell.
    #[inline]
    pub fn gate(&self) -> CellId {
        self.gate
    }

    // ── Seats ─────────────────────────────────────────────────────────────

    /// All seats in enumeration order (front row first, `A` before `B`).
    pub fn seats(&self) -> &[CellId] {
        &self.seats
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Indexed lookup by row number and column.
    pub fn find_seat(&self, row: u32, column: Column) -> Option<CellId> {
        self.seat_index.get(&SeatLabel { row, column }).copied()
    }

    /// Lookup by textual identifier such as `"14C"`.  Malformed identifiers
    /// and unknown seats both yield `None`.
    pub fn find_seat_by_id(&self, id: &str) -> Option<CellId> {
        let label = SeatLabel::parse(id)?;
        self.find_seat(label.row, label.column)
    }

    /// Distinct seat rows, ascending.
    pub fn rows(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().copied()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Distinct seat columns, ascending.
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns.iter().copied()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    // ── Connectivity ──────────────────────────────────────────────────────

    /// Breadth-first reachability from the gate over all four relations.
    /// Returns one flag per cell, indexed by `CellId`.
    pub fn reachable_from_gate(&self) -> Vec<bool> {
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([self.gate]);
        seen[self.gate.index()] = true;
        while let Some(cell) = queue.pop_front() {
            for next in self.adjacency[cell.index()].iter().flatten() {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(*next);
                }
            }
        }
        seen
    }

    /// Seats that cannot be reached from the gate at all.
    pub fn unreachable_seats(&self) -> Vec<CellId> {
        let seen = self.reachable_from_gate();
        self.seats.iter().copied().filter(|s| !seen[s.index()]).collect()
    }

    // ── Rendering support ─────────────────────────────────────────────────

    /// Inclusive bounding box `(min, max)` of all cell positions.
    pub fn extent(&self) -> (GridPos, GridPos) {
        let mut min = self.cells[self.gate.index()].pos;
        let mut max = min;
        for c in &self.cells {
            min.x = min.x.min(c.pos.x);
            min.y = min.y.min(c.pos.y);
            max.x = max.x.max(c.pos.x);
            max.y = max.y.max(c.pos.y);
        }
        (min, max)
    }
}
