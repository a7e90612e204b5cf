//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! One of the four fixed player slots. The turn rotation is always
//! Red → Green → Yellow → Blue → Red.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by a fixed `[T; 4]` array for O(1) access
//! and by-value cloning. Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 4;

/// A player slot at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Seat {
    /// All seats in rotation order.
    pub const ALL: [Seat; SEAT_COUNT] = [Seat::Red, Seat::Green, Seat::Yellow, Seat::Blue];

    /// Position of this seat in the rotation (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a seat by its rotation index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The seat that acts after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % SEAT_COUNT]
    }

    /// Capitalized color name, as used in log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Seat::Red => "Red",
            Seat::Green => "Green",
            Seat::Yellow => "Yellow",
            Seat::Blue => "Blue",
        }
    }

    /// Iterate over all seats in rotation order.
    ///
    /// ```
    /// use ludo_engine::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all().collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], Seat::Red);
    /// assert_eq!(seats[3], Seat::Blue);
    /// ```
    pub fn all() -> impl Iterator<Item = Seat> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Seat, SeatMap};
///
/// let mut wins: SeatMap<u32> = SeatMap::with_value(0);
/// wins[Seat::Green] += 1;
///
/// assert_eq!(wins[Seat::Green], 1);
/// assert_eq!(wins[Seat::Red], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: Seat::ALL.map(factory),
        }
    }

    /// Create a SeatMap from values in rotation order (Red, Green, Yellow, Blue).
    #[must_use]
    pub const fn from_array(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs in rotation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        assert_eq!(Seat::Red.index(), 0);
        assert_eq!(Seat::Blue.index(), 3);
        assert_eq!(format!("{}", Seat::Yellow), "Yellow");
        assert_eq!(format!("{:>6}|{:<6}|", Seat::Red, Seat::Blue), "   Red|Blue  |");
        assert_eq!(Seat::from_index(1), Some(Seat::Green));
        assert_eq!(Seat::from_index(4), None);
    }

    #[test]
    fn test_seat_rotation_is_cyclic() {
        assert_eq!(Seat::Red.next(), Seat::Green);
        assert_eq!(Seat::Green.next(), Seat::Yellow);
        assert_eq!(Seat::Yellow.next(), Seat::Blue);
        assert_eq!(Seat::Blue.next(), Seat::Red);

        let mut seat = Seat::Green;
        for _ in 0..SEAT_COUNT {
            seat = seat.next();
        }
        assert_eq!(seat, Seat::Green);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index() * 10);

        assert_eq!(map[Seat::Red], 0);
        assert_eq!(map[Seat::Green], 10);
        assert_eq!(map[Seat::Yellow], 20);
        assert_eq!(map[Seat::Blue], 30);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<i32> = SeatMap::default();

        map[Seat::Red] = 10;
        *map.get_mut(Seat::Blue) = 20;

        assert_eq!(map[Seat::Red], 10);
        assert_eq!(map[Seat::Blue], 20);
        assert_eq!(map[Seat::Green], 0);
    }

    #[test]
    fn test_seat_map_iter() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], (Seat::Red, &0));
        assert_eq!(pairs[3], (Seat::Blue, &3));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u8> = SeatMap::new(|s| s.index() as u8 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
