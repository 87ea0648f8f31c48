//! Board coordinates as a row-major linear index.

use std::fmt;

use crate::column::Column;
use crate::geometry::is_valid_coordinate;
use crate::row::Row;

/// A square on the board, stored as a linear index in `0..64`.
///
/// Index = row * 8 + column with row 0 at the top, so a8 = 0, h8 = 7,
/// a1 = 56 and h1 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate(u8);

impl Coordinate {
    /// Create a coordinate from a row and a column.
    #[inline]
    pub const fn new(row: Row, column: Column) -> Coordinate {
        Coordinate(row.index() as u8 * 8 + column.index() as u8)
    }

    /// Create a coordinate from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Coordinate> {
        if index < 64 {
            Some(Coordinate(index))
        } else {
            None
        }
    }

    /// Create a coordinate from an index that is already known to be in range.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Coordinate {
        debug_assert!(index < 64);
        Coordinate(index)
    }

    /// Parse algebraic notation (e.g. "e4") into a coordinate.
    pub fn from_algebraic(s: &str) -> Option<Coordinate> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let column = Column::from_letter(bytes[0])?;
        let row = Row::from_rank_digit(bytes[1])?;
        Some(Coordinate::new(row, column))
    }

    /// Step by a linear offset, returning `None` when the result leaves `0..64`.
    ///
    /// Only the index range is checked here. Wrapping across the left or
    /// right edge must be rejected beforehand with the column-exclusion
    /// predicates in [`geometry`](crate::geometry).
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Coordinate> {
        let target = self.0 as i32 + delta as i32;
        if is_valid_coordinate(target) {
            Some(Coordinate::from_index_unchecked(target as u8))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row of this coordinate.
    #[inline]
    pub const fn row(self) -> Row {
        Row::ALL[(self.0 / 8) as usize]
    }

    /// Return the column of this coordinate.
    #[inline]
    pub const fn column(self) -> Column {
        Column::ALL[(self.0 % 8) as usize]
    }

    /// Iterate over all 64 coordinates in index order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0u8..64).map(Coordinate::from_index_unchecked)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column(), self.row())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}={})", self.0, self)
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;
    use crate::column::Column;
    use crate::row::Row;

    #[test]
    fn new_and_accessors() {
        let c = Coordinate::new(Row::Row4, Column::D);
        assert_eq!(c.index(), 35);
        assert_eq!(c.row(), Row::Row4);
        assert_eq!(c.column(), Column::D);
    }

    #[test]
    fn row_column_roundtrip() {
        for c in Coordinate::all() {
            assert_eq!(Coordinate::new(c.row(), c.column()), c);
        }
    }

    #[test]
    fn from_index_bounds() {
        for i in 0u8..64 {
            assert!(Coordinate::from_index(i).is_some());
        }
        assert!(Coordinate::from_index(64).is_none());
        assert!(Coordinate::from_index(255).is_none());
    }

    #[test]
    fn algebraic_corners() {
        assert_eq!(Coordinate::from_algebraic("a8").map(Coordinate::index), Some(0));
        assert_eq!(Coordinate::from_algebraic("h8").map(Coordinate::index), Some(7));
        assert_eq!(Coordinate::from_algebraic("a1").map(Coordinate::index), Some(56));
        assert_eq!(Coordinate::from_algebraic("h1").map(Coordinate::index), Some(63));
        assert_eq!(Coordinate::from_algebraic("d4").map(Coordinate::index), Some(35));
    }

    #[test]
    fn algebraic_display_roundtrip() {
        for c in Coordinate::all() {
            let text = c.to_string();
            assert_eq!(Coordinate::from_algebraic(&text), Some(c), "roundtrip failed for {text}");
        }
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Coordinate::from_algebraic("i1").is_none());
        assert!(Coordinate::from_algebraic("a9").is_none());
        assert!(Coordinate::from_algebraic("a0").is_none());
        assert!(Coordinate::from_algebraic("").is_none());
        assert!(Coordinate::from_algebraic("a1b").is_none());
    }

    #[test]
    fn offset_range_check() {
        let a8 = Coordinate::from_index(0).unwrap();
        assert_eq!(a8.offset(9).map(Coordinate::index), Some(9));
        assert!(a8.offset(-1).is_none());
        assert!(a8.offset(-8).is_none());

        let h1 = Coordinate::from_index(63).unwrap();
        assert!(h1.offset(1).is_none());
        assert!(h1.offset(8).is_none());
        assert_eq!(h1.offset(-9).map(Coordinate::index), Some(54));
    }

    #[test]
    fn debug_shows_index_and_algebraic() {
        let c = Coordinate::from_index(35).unwrap();
        assert_eq!(format!("{c:?}"), "Coordinate(35=d4)");
    }
}
