//! Step count to space lookup.
//!
//! Each seat enters the 56-square ring at its own offset (A 0, B 14,
//! C 28, D 42) and walks 50 ring squares before turning into its home
//! column. The full mapping for every seat is computed at compile time
//! into `BOARD`, so a lookup is a single array index.
//!
//! Seat D's home column carries the "C" letter, as on the board this
//! engine reproduces. D's column squares therefore display as C1..C6 and
//! compare equal to seat C's.

use crate::core::{Seat, StepCount};

use super::Space;

/// Number of squares on the shared ring.
pub const RING_SQUARES: u8 = 56;

/// Number of squares in a home column.
pub const COLUMN_SQUARES: u8 = 6;

/// Step counts -1..=57.
const STEPS: usize = 59;

/// Ring entry offset per seat, indexed by `Seat::index()`.
const RING_OFFSET: [u8; 4] = [0, 14, 28, 42];

/// Home column letter per seat, indexed by `Seat::index()`.
const COLUMN_LETTER: [Seat; 4] = [Seat::A, Seat::B, Seat::C, Seat::C];

const BOARD: [[Space; STEPS]; 4] = [
    seat_table(Seat::A),
    seat_table(Seat::B),
    seat_table(Seat::C),
    seat_table(Seat::D),
];

const fn compute(seat: Seat, steps: i8) -> Space {
    let ring_end = StepCount::RING_END.get();
    match steps {
        -1 => Space::Home,
        0 => Space::Ready,
        n if n <= ring_end => {
            let offset = RING_OFFSET[seat.index()];
            Space::Ring((offset + n as u8 - 1) % RING_SQUARES + 1)
        }
        n if n <= ring_end + COLUMN_SQUARES as i8 => Space::Column {
            letter: COLUMN_LETTER[seat.index()],
            square: (n - ring_end) as u8,
        },
        _ => Space::Finished,
    }
}

const fn seat_table(seat: Seat) -> [Space; STEPS] {
    let mut table = [Space::Home; STEPS];
    let mut i = 0;
    while i < STEPS {
        table[i] = compute(seat, i as i8 - 1);
        i += 1;
    }
    table
}

/// Get the space a token of `seat` occupies at `steps`.
///
/// ```
/// use ludo_sim::board::{space_for, Space};
/// use ludo_sim::core::{Seat, StepCount};
///
/// let step = |n| StepCount::new(n).unwrap();
/// assert_eq!(space_for(Seat::A, step(5)), Space::Ring(5));
/// assert_eq!(space_for(Seat::B, step(1)), Space::Ring(15));
/// assert_eq!(space_for(Seat::B, step(43)), Space::Ring(1));
/// assert_eq!(space_for(Seat::C, StepCount::FINISH), Space::Finished);
/// ```
#[must_use]
pub const fn space_for(seat: Seat, steps: StepCount) -> Space {
    BOARD[seat.index()][(steps.get() + 1) as usize]
}

/// Board label for a token of `seat` at `steps`.
#[must_use]
pub fn label_for(seat: Seat, steps: StepCount) -> String {
    space_for(seat, steps).to_string()
}
