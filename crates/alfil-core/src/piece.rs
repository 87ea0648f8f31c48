//! Pieces: one shared record tagged by [`PieceKind`].

use std::fmt;

use crate::alliance::Alliance;
use crate::board::Board;
use crate::chess_move::Move;
use crate::coordinate::Coordinate;
use crate::movegen;
use crate::piece_kind::PieceKind;

/// A chess piece standing on a specific coordinate.
///
/// Pieces are immutable values. Moving a piece produces a new `Piece` at the
/// destination via [`Piece::move_piece`]; the original is left untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    position: Coordinate,
    /// `true` until the piece has moved. Only pawns consult it.
    first_move: bool,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, alliance: Alliance, position: Coordinate) -> Piece {
        Piece {
            kind,
            alliance,
            position,
            first_move: true,
        }
    }

    /// Create a piece with an explicit first-move flag.
    #[inline]
    pub const fn with_first_move(
        kind: PieceKind,
        alliance: Alliance,
        position: Coordinate,
        first_move: bool,
    ) -> Piece {
        Piece {
            kind,
            alliance,
            position,
            first_move,
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the alliance.
    #[inline]
    pub const fn alliance(self) -> Alliance {
        self.alliance
    }

    /// Return the coordinate the piece stands on.
    #[inline]
    pub const fn position(self) -> Coordinate {
        self.position
    }

    /// Return `true` if the piece has not moved yet.
    #[inline]
    pub const fn is_first_move(self) -> bool {
        self.first_move
    }

    /// Return `true` if `other` belongs to the opposing alliance.
    #[inline]
    pub fn is_enemy_of(self, other: Piece) -> bool {
        self.alliance != other.alliance
    }

    /// Compute this piece's candidate moves on `board`.
    ///
    /// Moves are ordered by direction, then by distance along the direction.
    /// The result is recomputed on every call and does not check whether the
    /// move leaves the own king in check.
    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        movegen::candidate_moves(board, *self)
    }

    /// Return the piece that results from playing `mv`.
    ///
    /// The new piece keeps kind and alliance, stands on the move's
    /// destination and has used its first move.
    pub fn move_piece(&self, mv: &Move) -> Piece {
        debug_assert_eq!(mv.moving_piece(), *self, "move_piece called with another piece's move");
        Piece {
            kind: self.kind,
            alliance: self.alliance,
            position: mv.destination(),
            first_move: false,
        }
    }

    /// Return the board letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn board_char(self) -> char {
        match self.alliance {
            Alliance::White => self.kind.letter(),
            Alliance::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alliance_prefix = match self.alliance {
            Alliance::White => 'W',
            Alliance::Black => 'B',
        };
        write!(f, "{}{}@{}", alliance_prefix, self.kind.letter(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::alliance::Alliance;
    use crate::chess_move::Move;
    use crate::coordinate::Coordinate;
    use crate::piece_kind::PieceKind;

    fn at(index: u8) -> Coordinate {
        Coordinate::from_index(index).unwrap()
    }

    #[test]
    fn new_sets_first_move() {
        let bishop = Piece::new(PieceKind::Bishop, Alliance::White, at(35));
        assert_eq!(bishop.kind(), PieceKind::Bishop);
        assert_eq!(bishop.alliance(), Alliance::White);
        assert_eq!(bishop.position(), at(35));
        assert!(bishop.is_first_move());
    }

    #[test]
    fn move_piece_relocates_and_preserves_alliance() {
        let bishop = Piece::new(PieceKind::Bishop, Alliance::Black, at(35));
        let mv = Move::quiet(bishop, at(44));
        let moved = bishop.move_piece(&mv);
        assert_eq!(moved.position(), at(44));
        assert_eq!(moved.alliance(), Alliance::Black);
        assert_eq!(moved.kind(), PieceKind::Bishop);
        assert!(!moved.is_first_move());
        // The original value is unchanged.
        assert_eq!(bishop.position(), at(35));
    }

    #[test]
    fn move_piece_on_capture() {
        let rook = Piece::new(PieceKind::Rook, Alliance::White, at(56));
        let victim = Piece::new(PieceKind::Knight, Alliance::Black, at(0));
        let moved = rook.move_piece(&Move::capture(rook, at(0), victim));
        assert_eq!(moved.position(), at(0));
        assert_eq!(moved.alliance(), Alliance::White);
    }

    #[test]
    fn move_piece_keeps_receiver_kind_and_alliance() {
        let knight = Piece::new(PieceKind::Knight, Alliance::Black, at(1));
        for destination in [at(16), at(18), at(11)] {
            let moved = knight.move_piece(&Move::quiet(knight, destination));
            let expected =
                Piece::with_first_move(PieceKind::Knight, Alliance::Black, destination, false);
            assert_eq!(moved, expected);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "another piece's move")]
    fn move_piece_rejects_foreign_move() {
        let knight = Piece::new(PieceKind::Knight, Alliance::Black, at(1));
        let bishop = Piece::new(PieceKind::Bishop, Alliance::White, at(35));
        knight.move_piece(&Move::quiet(bishop, at(44)));
    }

    #[test]
    fn enemy_check() {
        let white = Piece::new(PieceKind::Queen, Alliance::White, at(10));
        let black = Piece::new(PieceKind::Pawn, Alliance::Black, at(11));
        let white_too = Piece::new(PieceKind::Pawn, Alliance::White, at(12));
        assert!(white.is_enemy_of(black));
        assert!(!white.is_enemy_of(white_too));
    }

    #[test]
    fn display_is_kind_label() {
        assert_eq!(Piece::new(PieceKind::Bishop, Alliance::White, at(0)).to_string(), "B");
        assert_eq!(Piece::new(PieceKind::Bishop, Alliance::Black, at(0)).to_string(), "B");
        assert_eq!(Piece::new(PieceKind::King, Alliance::Black, at(4)).to_string(), "K");
    }

    #[test]
    fn board_char_by_alliance() {
        assert_eq!(Piece::new(PieceKind::Queen, Alliance::White, at(59)).board_char(), 'Q');
        assert_eq!(Piece::new(PieceKind::Queen, Alliance::Black, at(3)).board_char(), 'q');
    }

    #[test]
    fn debug_format() {
        let knight = Piece::new(PieceKind::Knight, Alliance::White, at(57));
        assert_eq!(format!("{knight:?}"), "WN@b1");
    }
}
