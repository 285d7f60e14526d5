//! Cell occupancy: which passengers are in which cell.

use bd_core::{CellId, PassengerId};

use crate::{PassengerError, PassengerResult};

/// Occupant lists indexed by `CellId`.
///
/// In normal operation every list holds at most one id.  A lateral step into
/// a seat row may briefly share a cell with a passenger already seated there
/// (the newcomer is shuffling past); aisle steps are only taken into empty
/// cells.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    cells: Vec<Vec<PassengerId>>,
}

impl Occupancy {
    pub fn new(cell_count: usize) -> Self {
        Self { cells: vec![Vec::new(); cell_count] }
    }

    #[inline]
    pub fn is_empty(&self, cell: CellId) -> bool {
        self.cells[cell.index()].is_empty()
    }

    #[inline]
    pub fn occupants(&self, cell: CellId) -> &[PassengerId] {
        &self.cells[cell.index()]
    }

    /// Put `passenger` into an empty `cell`.
    pub fn place(&mut self, passenger: PassengerId, cell: CellId) -> PassengerResult<()> {
        let slot = &mut self.cells[cell.index()];
        if !slot.is_empty() {
            return Err(PassengerError::CellOccupied { cell, passenger });
        }
        slot.push(passenger);
        Ok(())
    }

    /// Remove `passenger` from `from` and add it to `to` in one step.
    pub fn move_passenger(&mut self, passenger: PassengerId, from: CellId, to: CellId) {
        let old = &mut self.cells[from.index()];
        if let Some(i) = old.iter().position(|&p| p == passenger) {
            old.swap_remove(i);
        }
        self.cells[to.index()].push(passenger);
    }

    /// Cells currently holding more than one passenger.
    pub fn crowded_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| v.len() > 1)
            .map(|(i, _)| CellId(i as u32))
    }

    /// Total passengers on the grid.
    pub fn total(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }
}
