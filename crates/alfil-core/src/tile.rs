//! Board tiles.

use crate::piece::Piece;

/// One square of a board snapshot: empty, or holding exactly one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Tile {
    /// Return `true` if a piece stands on this tile.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Tile::Occupied(_))
    }

    /// Return the piece on this tile, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Tile::Empty => None,
            Tile::Occupied(piece) => Some(piece),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tile;
    use crate::alliance::Alliance;
    use crate::coordinate::Coordinate;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    #[test]
    fn empty_tile() {
        assert!(!Tile::Empty.is_occupied());
        assert_eq!(Tile::Empty.piece(), None);
        assert_eq!(Tile::default(), Tile::Empty);
    }

    #[test]
    fn occupied_tile() {
        let rook = Piece::new(PieceKind::Rook, Alliance::Black, Coordinate::from_index(0).unwrap());
        let tile = Tile::Occupied(rook);
        assert!(tile.is_occupied());
        assert_eq!(tile.piece(), Some(rook));
    }
}
