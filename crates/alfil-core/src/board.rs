//! The board: an immutable snapshot of 64 tiles plus the side to move.

use std::fmt;

use tracing::debug;

use crate::alliance::Alliance;
use crate::chess_move::Move;
use crate::column::Column;
use crate::coordinate::Coordinate;
use crate::error::BoardError;
use crate::geometry::NUM_TILES;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::row::Row;
use crate::tile::Tile;

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// One position: every tile and whose turn it is.
///
/// A `Board` is never modified after construction. Applying a move with
/// [`Board::execute`] returns a new snapshot.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Tiles indexed by [`Coordinate::index()`].
    tiles: [Tile; NUM_TILES],
    /// Which side moves next.
    side_to_move: Alliance,
}

impl Board {
    /// Start building a board from individual pieces.
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    /// Return a board with no pieces and White to move.
    pub fn empty() -> Board {
        Board {
            tiles: [Tile::Empty; NUM_TILES],
            side_to_move: Alliance::White,
        }
    }

    /// Return the standard starting position.
    ///
    /// Black occupies rows 0-1 (ranks 8 and 7), White rows 6-7 (ranks 2
    /// and 1). White moves first.
    pub fn starting_position() -> Board {
        let mut tiles = [Tile::Empty; NUM_TILES];
        let placements = [
            (Row::Row0, Alliance::Black, None),
            (Row::Row1, Alliance::Black, Some(PieceKind::Pawn)),
            (Row::Row6, Alliance::White, Some(PieceKind::Pawn)),
            (Row::Row7, Alliance::White, None),
        ];
        for (row, alliance, fill) in placements {
            for column in Column::ALL {
                let kind = fill.unwrap_or(BACK_RANK[column.index()]);
                let position = Coordinate::new(row, column);
                tiles[position.index()] = Tile::Occupied(Piece::new(kind, alliance, position));
            }
        }
        Board {
            tiles,
            side_to_move: Alliance::White,
        }
    }

    /// Return the tile at `coordinate`.
    #[inline]
    pub fn tile(&self, coordinate: Coordinate) -> Tile {
        self.tiles[coordinate.index()]
    }

    /// Return the piece at `coordinate`, if any.
    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        self.tile(coordinate).piece()
    }

    /// Return `true` if a piece stands on `coordinate`.
    #[inline]
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.tile(coordinate).is_occupied()
    }

    /// Iterate over the pieces of `alliance` in coordinate order.
    pub fn pieces(&self, alliance: Alliance) -> impl Iterator<Item = Piece> + '_ {
        self.tiles
            .iter()
            .filter_map(|tile| tile.piece())
            .filter(move |piece| piece.alliance() == alliance)
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Alliance {
        self.side_to_move
    }

    /// Apply `mv` and return the resulting board. `self` is not modified.
    ///
    /// The moving piece is replaced by [`Piece::move_piece`] at the
    /// destination, a captured piece disappears, and the side to move passes
    /// to the opponent. No legality check beyond tile consistency is made.
    ///
    /// # Errors
    ///
    /// - [`BoardError::PieceNotFound`] if the moving piece is not on its origin.
    /// - [`BoardError::DestinationMismatch`] if a quiet move targets an
    ///   occupied tile, or a capture's victim is not on the destination.
    pub fn execute(&self, mv: &Move) -> Result<Board, BoardError> {
        let moving = mv.moving_piece();
        let origin = mv.origin();
        let destination = mv.destination();

        if self.piece_at(origin) != Some(moving) {
            return Err(BoardError::PieceNotFound { coordinate: origin });
        }

        let destination_matches = match (mv.captured_piece(), self.piece_at(destination)) {
            (None, None) => true,
            (Some(captured), Some(occupant)) => {
                captured == occupant && moving.is_enemy_of(occupant)
            }
            _ => false,
        };
        if !destination_matches {
            return Err(BoardError::DestinationMismatch {
                coordinate: destination,
            });
        }

        let mut tiles = self.tiles;
        tiles[origin.index()] = Tile::Empty;
        tiles[destination.index()] = Tile::Occupied(moving.move_piece(mv));

        let next = Board {
            tiles,
            side_to_move: self.side_to_move.opponent(),
        };
        debug!(mv = %mv, next_to_move = %next.side_to_move, "move executed");
        Ok(next)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board({} to move)", self.side_to_move)?;
        write!(f, "{}", self.pretty())
    }
}

/// Collects pieces and the side to move, then validates them into a [`Board`].
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    side_to_move: Alliance,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            pieces: Vec::new(),
            side_to_move: Alliance::White,
        }
    }
}

impl BoardBuilder {
    /// Place `piece` on its own position.
    pub fn place(mut self, piece: Piece) -> Self {
        self.pieces.push(piece);
        self
    }

    /// Set the side to move (White by default).
    pub fn side_to_move(mut self, alliance: Alliance) -> Self {
        self.side_to_move = alliance;
        self
    }

    /// Validate the placements and produce the board.
    ///
    /// # Errors
    ///
    /// [`BoardError::CoordinateOccupied`] if two pieces share a coordinate.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut tiles = [Tile::Empty; NUM_TILES];
        for piece in self.pieces {
            let coordinate = piece.position();
            let tile = &mut tiles[coordinate.index()];
            if tile.is_occupied() {
                return Err(BoardError::CoordinateOccupied { coordinate });
            }
            *tile = Tile::Occupied(piece);
        }
        Ok(Board {
            tiles,
            side_to_move: self.side_to_move,
        })
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in Row::ALL {
            write!(f, "{}  ", row)?;
            for column in Column::ALL {
                let c = board
                    .piece_at(Coordinate::new(row, column))
                    .map_or('.', Piece::board_char);
                if column != Column::H {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
