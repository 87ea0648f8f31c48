//! Move representation.

use std::fmt;

use crate::coordinate::Coordinate;
use crate::piece::Piece;

/// A proposed transition of one piece to a destination coordinate.
///
/// The origin is the moving piece's own position. A `Move` describes the
/// transition only; [`Board::execute`](crate::Board::execute) applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// A move onto an empty tile.
    Quiet {
        /// The piece being moved, as it stands before the move.
        piece: Piece,
        /// Where the piece ends up.
        destination: Coordinate,
    },
    /// A move onto a tile held by an opposing piece, removing it.
    Capture {
        /// The piece being moved, as it stands before the move.
        piece: Piece,
        /// Where the piece ends up.
        destination: Coordinate,
        /// The opposing piece standing on `destination`.
        captured: Piece,
    },
}

impl Move {
    /// Create a quiet move.
    #[inline]
    pub const fn quiet(piece: Piece, destination: Coordinate) -> Move {
        Move::Quiet { piece, destination }
    }

    /// Create a capture.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `captured` stands on `destination`.
    #[inline]
    pub fn capture(piece: Piece, destination: Coordinate, captured: Piece) -> Move {
        debug_assert_eq!(captured.position(), destination);
        Move::Capture {
            piece,
            destination,
            captured,
        }
    }

    /// Return the piece being moved.
    #[inline]
    pub const fn moving_piece(&self) -> Piece {
        match *self {
            Move::Quiet { piece, .. } | Move::Capture { piece, .. } => piece,
        }
    }

    /// Return the coordinate the piece leaves.
    #[inline]
    pub const fn origin(&self) -> Coordinate {
        self.moving_piece().position()
    }

    /// Return the coordinate the piece lands on.
    #[inline]
    pub const fn destination(&self) -> Coordinate {
        match *self {
            Move::Quiet { destination, .. } | Move::Capture { destination, .. } => destination,
        }
    }

    /// Return the captured piece, if this is a capture.
    #[inline]
    pub const fn captured_piece(&self) -> Option<Piece> {
        match *self {
            Move::Quiet { .. } => None,
            Move::Capture { captured, .. } => Some(captured),
        }
    }

    /// Return `true` if this move removes an opposing piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Move::Capture { .. })
    }
}

/// Long algebraic form: piece letter, origin, `-` or `x`, destination
/// (e.g. `Bd4xe3`).
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            self.moving_piece(),
            self.origin(),
            separator,
            self.destination()
        )
    }
}
