//! King move generation. Castling is not generated.

use crate::board::Board;
use crate::chess_move::Move;
use crate::geometry::is_column_exclusion;
use crate::piece::Piece;

use super::push_landing;

const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Generate single steps in all eight directions.
pub(super) fn gen_king(board: &Board, king: Piece, list: &mut Vec<Move>) {
    let origin = king.position();
    for offset in KING_OFFSETS {
        if is_column_exclusion(origin, offset) {
            continue;
        }
        if let Some(target) = origin.offset(offset) {
            push_landing(board, king, target, list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_king;
    use crate::alliance::Alliance;
    use crate::board::Board;
    use crate::coordinate::Coordinate;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    fn at(index: u8) -> Coordinate {
        Coordinate::from_index(index).unwrap()
    }

    fn king_targets(board: &Board, king: Piece) -> Vec<usize> {
        let mut list = Vec::new();
        gen_king(board, king, &mut list);
        list.iter().map(|m| m.destination().index()).collect()
    }

    #[test]
    fn corner_king_has_three_steps() {
        let corners = [
            (0, vec![1, 8, 9]),
            (7, vec![6, 14, 15]),
            (56, vec![48, 49, 57]),
            (63, vec![54, 55, 62]),
        ];
        for (index, expected) in corners {
            let king = Piece::new(PieceKind::King, Alliance::White, at(index));
            let board = Board::builder().place(king).build().unwrap();
            assert_eq!(king_targets(&board, king), expected, "king on {index}");
        }
    }

    #[test]
    fn central_king_has_eight_steps() {
        let king = Piece::new(PieceKind::King, Alliance::Black, at(36));
        let board = Board::builder().place(king).build().unwrap();
        assert_eq!(king_targets(&board, king), vec![27, 28, 29, 35, 37, 43, 44, 45]);
    }

    #[test]
    fn king_captures_enemy_but_not_friend() {
        let king = Piece::new(PieceKind::King, Alliance::White, at(60));
        let board = Board::starting_position();
        assert!(king_targets(&board, board.piece_at(at(60)).unwrap()).is_empty());

        let enemy = Piece::new(PieceKind::Pawn, Alliance::Black, at(52));
        let friend = Piece::new(PieceKind::Pawn, Alliance::White, at(51));
        let board = Board::builder().place(king).place(enemy).place(friend).build().unwrap();
        let mut list = Vec::new();
        gen_king(&board, king, &mut list);
        let captures: Vec<_> = list.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].destination(), at(52));
        assert!(!list.iter().any(|m| m.destination() == at(51)));
        // e1: d1, f1, e2 (capture), f2; d2 is blocked.
        assert_eq!(list.len(), 4);
    }
}
