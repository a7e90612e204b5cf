//! Projection from seat-relative token positions to shared board cells.
//!
//! The board is a 15x15 grid. The shared ring has 52 cells listed
//! clockwise from Red's entry cell; each seat enters a quarter of the ring
//! after the previous one. Every table here is a constant.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, SeatMap, TokenPosition, HOME_STRETCH_LENGTH, TRACK_LENGTH};

/// Side length of the square grid.
pub const GRID_SIZE: u8 = 15;

/// A cell in the shared coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

const fn c(row: u8, col: u8) -> Cell {
    Cell::new(row, col)
}

/// The shared ring, clockwise, starting at Red's entry.
pub const RING: [Cell; TRACK_LENGTH as usize] = [
    // Red arm, heading right then up the top arm
    c(6, 1), c(6, 2), c(6, 3), c(6, 4), c(6, 5),
    c(5, 6), c(4, 6), c(3, 6), c(2, 6), c(1, 6), c(0, 6),
    c(0, 7), c(0, 8),
    // Green arm
    c(1, 8), c(2, 8), c(3, 8), c(4, 8), c(5, 8),
    c(6, 9), c(6, 10), c(6, 11), c(6, 12), c(6, 13), c(6, 14),
    c(7, 14), c(8, 14),
    // Yellow arm
    c(8, 13), c(8, 12), c(8, 11), c(8, 10), c(8, 9),
    c(9, 8), c(10, 8), c(11, 8), c(12, 8), c(13, 8), c(14, 8),
    c(14, 7), c(14, 6),
    // Blue arm
    c(13, 6), c(12, 6), c(11, 6), c(10, 6), c(9, 6),
    c(8, 5), c(8, 4), c(8, 3), c(8, 2), c(8, 1), c(8, 0),
    c(7, 0), c(6, 0),
];

/// Ring index of each seat's entry cell (track offset 0).
pub const ENTRY_INDEX: SeatMap<usize> = SeatMap::from_array([0, 13, 26, 39]);

/// Private home-stretch cells per seat, for offsets 52..=57.
pub const HOME_STRETCH: SeatMap<[Cell; HOME_STRETCH_LENGTH as usize]> = SeatMap::from_array([
    [c(7, 1), c(7, 2), c(7, 3), c(7, 4), c(7, 5), c(7, 6)],
    [c(1, 7), c(2, 7), c(3, 7), c(4, 7), c(5, 7), c(6, 7)],
    [c(7, 13), c(7, 12), c(7, 11), c(7, 10), c(7, 9), c(7, 8)],
    [c(13, 7), c(12, 7), c(11, 7), c(10, 7), c(9, 7), c(8, 7)],
]);

/// Representative cell of each seat's home cluster, shared by all
/// finished tokens of that seat.
pub const HOME_CLUSTER: SeatMap<Cell> = SeatMap::from_array([c(2, 2), c(2, 12), c(12, 12), c(12, 2)]);

/// The seat's entry cell on the shared ring.
#[must_use]
pub fn entry_cell(seat: Seat) -> Cell {
    RING[ENTRY_INDEX[seat]]
}

/// Shared ring index for a seat-relative offset.
///
/// Returns `None` for home-stretch offsets, which are never shared.
#[must_use]
pub fn ring_index(seat: Seat, offset: u8) -> Option<usize> {
    if offset >= TRACK_LENGTH {
        return None;
    }
    Some((ENTRY_INDEX[seat] + offset as usize) % TRACK_LENGTH as usize)
}

/// Project a token position into the shared coordinate space.
///
/// - `AtStart` maps to the seat's entry cell
/// - `AtHome` maps to the seat's home-cluster cell
/// - `Track(p)` maps to the ring for `p < 52`, to the home stretch for
///   `52..=57`, and to `None` past the end of the stretch
#[must_use]
pub fn project_to_board_cell(seat: Seat, position: TokenPosition) -> Option<Cell> {
    match position {
        TokenPosition::AtStart => Some(entry_cell(seat)),
        TokenPosition::AtHome => Some(HOME_CLUSTER[seat]),
        TokenPosition::Track(offset) => match ring_index(seat, offset) {
            Some(index) => Some(RING[index]),
            None => HOME_STRETCH[seat]
                .get((offset - TRACK_LENGTH) as usize)
                .copied(),
        },
    }
}
