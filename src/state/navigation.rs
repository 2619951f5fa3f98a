//! Navigation-related UI types.
//!
//! This module contains the input focus and the home tile grid movement.

use crate::fixtures::{HOME_TILES, TILE_COLUMNS};

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Page,
    Composer,
}

/// Directions the home tile selection can move in.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TileDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Move a tile index one step across the grid, staying put at the edges.
///
pub fn move_tile(index: usize, direction: TileDirection) -> usize {
    let count = HOME_TILES.len();
    let column = index % TILE_COLUMNS;
    let target = match direction {
        TileDirection::Up => index.checked_sub(TILE_COLUMNS),
        TileDirection::Down => Some(index + TILE_COLUMNS),
        TileDirection::Left if column > 0 => Some(index - 1),
        TileDirection::Right if column + 1 < TILE_COLUMNS => Some(index + 1),
        TileDirection::Left | TileDirection::Right => None,
    };
    match target {
        Some(target) if target < count => target,
        _ => index,
    }
}
