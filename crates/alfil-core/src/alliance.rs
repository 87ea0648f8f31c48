//! Piece alliances (sides).

use std::fmt;
use std::ops::Not;

/// The side a piece fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    pub const ALL: [Alliance; 2] = [Alliance::White, Alliance::Black];

    /// Return the opposing alliance.
    #[inline]
    pub const fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Sign applied to forward offsets.
    ///
    /// Row 0 is the top of the board, so White advances toward lower
    /// indices (`-1`) and Black toward higher ones (`+1`).
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }
}

impl Not for Alliance {
    type Output = Alliance;

    #[inline]
    fn not(self) -> Alliance {
        self.opponent()
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alliance::White => "white",
            Alliance::Black => "black",
        })
    }
}
