//! Board geometry.
//!
//! A pure mapping from seat-relative track offsets to the shared grid.
//! Independent of game rules beyond each seat's entry point; the rules use
//! [`ring_index`] to compare positions across seats.

pub mod geometry;

pub use geometry::{
    entry_cell, project_to_board_cell, ring_index, Cell, ENTRY_INDEX, GRID_SIZE, HOME_CLUSTER,
    HOME_STRETCH, RING,
};
