//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::geometry::is_column_exclusion;
use crate::piece::Piece;

use super::push_landing;

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Generate knight jumps. Intervening tiles are never inspected.
pub(super) fn gen_knight(board: &Board, knight: Piece, list: &mut Vec<Move>) {
    let origin = knight.position();
    for offset in KNIGHT_OFFSETS {
        // The b- and g-files matter here too: a two-column jump wraps from them.
        if is_column_exclusion(origin, offset) {
            continue;
        }
        if let Some(target) = origin.offset(offset) {
            push_landing(board, knight, target, list);
        }
    }
}
