//! Coordinate validity and edge-membership tables.
//!
//! Linear-index arithmetic cannot tell a legal one-column step from a step
//! that falls off the left or right edge and wraps onto the neighbouring
//! row: a7 (8) - 1 = h8 (7) is still a valid index. The column tables let
//! the generators reject such steps before taking them.

use crate::coordinate::Coordinate;

/// Number of tiles on the board.
pub const NUM_TILES: usize = 64;

/// Number of tiles per row.
pub const NUM_TILES_PER_ROW: usize = 8;

const fn column_table(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut i = 0;
    while i < NUM_TILES {
        table[i] = i % NUM_TILES_PER_ROW == column;
        i += 1;
    }
    table
}

const fn row_table(row: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut i = 0;
    while i < NUM_TILES {
        table[i] = i / NUM_TILES_PER_ROW == row;
        i += 1;
    }
    table
}

/// Tiles on the a-file.
pub const FIRST_COLUMN: [bool; NUM_TILES] = column_table(0);
/// Tiles on the b-file.
pub const SECOND_COLUMN: [bool; NUM_TILES] = column_table(1);
/// Tiles on the g-file.
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = column_table(6);
/// Tiles on the h-file.
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = column_table(7);

/// Tiles on rank 7 (row 1), the Black pawn home row.
pub const SEVENTH_ROW: [bool; NUM_TILES] = row_table(1);
/// Tiles on rank 2 (row 6), the White pawn home row.
pub const SECOND_ROW: [bool; NUM_TILES] = row_table(6);

/// Return `true` if a raw linear index lies on the board.
#[inline]
pub const fn is_valid_coordinate(index: i32) -> bool {
    index >= 0 && index < NUM_TILES as i32
}

/// Return `true` if stepping by `offset` from an a-file tile would wrap
/// onto the h-file.
///
/// Covers every left-moving offset used by any piece: bishop `-9`/`+7`,
/// rook `-1`, queen and king all three, knight `-17`/`-10`/`+6`/`+15`.
#[inline]
pub const fn is_first_column_exclusion(position: Coordinate, offset: i8) -> bool {
    FIRST_COLUMN[position.index()] && matches!(offset, -17 | -10 | -9 | -1 | 6 | 7 | 15)
}

/// Return `true` if a two-column knight jump to the left from the b-file
/// would wrap.
#[inline]
pub const fn is_second_column_exclusion(position: Coordinate, offset: i8) -> bool {
    SECOND_COLUMN[position.index()] && matches!(offset, -10 | 6)
}

/// Return `true` if a two-column knight jump to the right from the g-file
/// would wrap.
#[inline]
pub const fn is_seventh_column_exclusion(position: Coordinate, offset: i8) -> bool {
    SEVENTH_COLUMN[position.index()] && matches!(offset, -6 | 10)
}

/// Return `true` if stepping by `offset` from an h-file tile would wrap
/// onto the a-file.
#[inline]
pub const fn is_eighth_column_exclusion(position: Coordinate, offset: i8) -> bool {
    EIGHTH_COLUMN[position.index()] && matches!(offset, -15 | -7 | -6 | 1 | 9 | 10 | 17)
}

/// Return `true` if any column-edge rule forbids stepping by `offset`.
#[inline]
pub const fn is_column_exclusion(position: Coordinate, offset: i8) -> bool {
    is_first_column_exclusion(position, offset)
        || is_second_column_exclusion(position, offset)
        || is_seventh_column_exclusion(position, offset)
        || is_eighth_column_exclusion(position, offset)
}
