//! Board rows, counted from the top edge.

use std::fmt;

/// A row on the board. `Row0` is the top edge (rank 8) and `Row7` the
/// bottom edge (rank 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Row0,
    Row1,
    Row2,
    Row3,
    Row4,
    Row5,
    Row6,
    Row7,
}

impl Row {
    /// Top to bottom; position in the array is the row index.
    pub const ALL: [Row; 8] = [
        Row::Row0,
        Row::Row1,
        Row::Row2,
        Row::Row3,
        Row::Row4,
        Row::Row5,
        Row::Row6,
        Row::Row7,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank number (1..=8) printed for this row.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self as u8
    }

    /// Parse a rank digit ('1'..='8').
    pub fn from_rank_digit(c: u8) -> Option<Row> {
        let rank = c.checked_sub(b'0')?;
        let index = 8u8.checked_sub(rank)?;
        Row::ALL.get(usize::from(index)).copied()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}
