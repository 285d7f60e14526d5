//! The reordering functions behind [`BoardingMethod`](crate::BoardingMethod).
//!
//! Each takes the pending passengers and returns a permutation of them.  No
//! passenger is ever added, dropped, or duplicated, with one exception:
//! `steffen` omits passengers whose target is not a labelled seat.

use rustc_hash::FxHashMap;

use bd_cabin::{Aircraft, Column, SeatLabel};
use bd_core::{PassengerId, SimRng};
use bd_passenger::PassengerStore;

/// Seat-enumeration order unchanged: the last (rearmost) seat boards first.
pub fn back_to_front(pending: Vec<PassengerId>) -> Vec<PassengerId> {
    pending
}

/// Full reversal of seat-enumeration order: row 1 boards first.
pub fn front_to_back(mut pending: Vec<PassengerId>) -> Vec<PassengerId> {
    pending.reverse();
    pending
}

/// Uniform random permutation drawn from the run's global RNG.
pub fn random(mut pending: Vec<PassengerId>, rng: &mut SimRng) -> Vec<PassengerId> {
    rng.shuffle(&mut pending);
    pending
}

/// Outer-to-inner ordering with alternating rows and sides.
///
/// Columns are paired symmetrically from the outside in (`A`+last,
/// `B`+second-to-last, ...).  For each pair, odd rows are visited back to
/// front, then even rows back to front; in every row the higher column of
/// the pair is queued before the lower one.  The sequence is then reversed,
/// so with tail-first admission the outermost pair's first-visited seats
/// board first.
///
/// Rows and columns are those actually present in the aircraft, so exit
/// rows with blocked columns simply contribute fewer passengers.
pub fn steffen(
    pending:  Vec<PassengerId>,
    aircraft: &Aircraft,
    store:    &PassengerStore,
) -> Vec<PassengerId> {
    let by_seat: FxHashMap<SeatLabel, PassengerId> = pending
        .iter()
        .filter_map(|&id| aircraft.seat_label(store.get(id).target).map(|seat| (seat, id)))
        .collect();

    let columns: Vec<Column> = aircraft.columns().collect();
    let rows: Vec<u32> = aircraft.rows().collect();
    let odd_then_even: Vec<u32> = rows
        .iter()
        .rev()
        .filter(|r| *r % 2 == 1)
        .chain(rows.iter().rev().filter(|r| *r % 2 == 0))
        .copied()
        .collect();

    let mut queue = Vec::with_capacity(by_seat.len());
    let (mut lo, mut hi) = (0usize, columns.len());
    while lo < hi {
        hi -= 1;
        let (low_col, high_col) = (columns[lo], columns[hi]);
        for &row in &odd_then_even {
            if let Some(&id) = by_seat.get(&SeatLabel::new(row, high_col)) {
                queue.push(id);
            }
            if low_col != high_col {
                if let Some(&id) = by_seat.get(&SeatLabel::new(row, low_col)) {
                    queue.push(id);
                }
            }
        }
        lo += 1;
    }

    queue.reverse();
    queue
}
