//! Core chess types: tile board, pieces, and per-piece move generation.

mod alliance;
mod board;
mod chess_move;
mod column;
mod coordinate;
mod error;
pub mod geometry;
mod movegen;
mod piece;
mod piece_kind;
mod row;
mod tile;

pub use alliance::Alliance;
pub use board::{Board, BoardBuilder, PrettyBoard};
pub use chess_move::Move;
pub use column::Column;
pub use coordinate::Coordinate;
pub use error::BoardError;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use row::Row;
pub use tile::Tile;
