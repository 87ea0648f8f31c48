//! Pawn move generation: pushes, double pushes from the home row, and
//! diagonal captures. En passant and promotion are not generated; a pawn
//! reaching the last row produces an ordinary move.

use crate::alliance::Alliance;
use crate::board::Board;
use crate::chess_move::Move;
use crate::geometry::{SECOND_ROW, SEVENTH_ROW, is_column_exclusion};
use crate::piece::Piece;

/// Forward step, scaled by the alliance direction.
const PUSH: i8 = 8;
/// Two-row step available on the pawn's first move.
const DOUBLE_PUSH: i8 = 16;
/// Diagonal capture steps, scaled by the alliance direction.
const CAPTURES: [i8; 2] = [7, 9];

/// Generate the moves of a single pawn.
pub(super) fn gen_pawn(board: &Board, pawn: Piece, list: &mut Vec<Move>) {
    let origin = pawn.position();
    let direction = pawn.alliance().direction();

    if let Some(one) = origin.offset(PUSH * direction) {
        if !board.is_occupied(one) {
            list.push(Move::quiet(pawn, one));

            if pawn.is_first_move() && on_home_row(pawn) {
                if let Some(two) = origin.offset(DOUBLE_PUSH * direction) {
                    if !board.is_occupied(two) {
                        list.push(Move::quiet(pawn, two));
                    }
                }
            }
        }
    }

    for step in CAPTURES {
        let offset = step * direction;
        if is_column_exclusion(origin, offset) {
            continue;
        }
        let Some(target) = origin.offset(offset) else {
            continue;
        };
        if let Some(occupant) = board.piece_at(target) {
            if pawn.is_enemy_of(occupant) {
                list.push(Move::capture(pawn, target, occupant));
            }
        }
    }
}

fn on_home_row(pawn: Piece) -> bool {
    let index = pawn.position().index();
    match pawn.alliance() {
        Alliance::White => SECOND_ROW[index],
        Alliance::Black => SEVENTH_ROW[index],
    }
}
