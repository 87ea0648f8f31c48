//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::geometry::is_column_exclusion;
use crate::piece::Piece;

use super::push_landing;

/// Diagonal steps: up-left, up-right, down-left, down-right.
pub(super) const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];

/// Orthogonal steps: up, left, right, down.
pub(super) const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];

pub(super) const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Cast a ray along each offset until it leaves the board or hits a piece.
///
/// The column-exclusion check runs on the square the ray currently stands
/// on, before every step, so a piece on an edge only loses the directions
/// that would wrap.
pub(super) fn gen_slider(board: &Board, piece: Piece, offsets: &[i8], list: &mut Vec<Move>) {
    for &offset in offsets {
        let mut current = piece.position();
        loop {
            if is_column_exclusion(current, offset) {
                break;
            }
            let Some(candidate) = current.offset(offset) else {
                break;
            };
            if !push_landing(board, piece, candidate, list) {
                break;
            }
            current = candidate;
        }
    }
}
