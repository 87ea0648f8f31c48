//! Per-piece candidate move generation.
//!
//! Each generator walks fixed linear-index offsets from the piece's
//! position, rejects steps that would wrap across a column edge, and
//! classifies the target tile as a quiet move, a capture, or a block.
//! Moves that leave the own king in check are not filtered here.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::tile::Tile;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_OFFSETS, QUEEN_OFFSETS, ROOK_OFFSETS, gen_slider};

/// Generate the candidate moves of `piece` on `board`.
pub(crate) fn candidate_moves(board: &Board, piece: Piece) -> Vec<Move> {
    let mut list = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, piece, &mut list),
        PieceKind::Knight => gen_knight(board, piece, &mut list),
        PieceKind::Bishop => gen_slider(board, piece, &BISHOP_OFFSETS, &mut list),
        PieceKind::Rook => gen_slider(board, piece, &ROOK_OFFSETS, &mut list),
        PieceKind::Queen => gen_slider(board, piece, &QUEEN_OFFSETS, &mut list),
        PieceKind::King => gen_king(board, piece, &mut list),
    }
    trace!(piece = ?piece, count = list.len(), "generated candidate moves");
    list
}

/// Classify the tile at `destination` and push the resulting move, if any.
///
/// Returns `true` if the tile was empty, i.e. a sliding piece may continue.
fn push_landing(
    board: &Board,
    piece: Piece,
    destination: Coordinate,
    list: &mut Vec<Move>,
) -> bool {
    match board.tile(destination) {
        Tile::Empty => {
            list.push(Move::quiet(piece, destination));
            true
        }
        Tile::Occupied(occupant) => {
            if piece.is_enemy_of(occupant) {
                list.push(Move::capture(piece, destination, occupant));
            }
            false
        }
    }
}
