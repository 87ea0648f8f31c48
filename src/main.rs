use anyhow::{Context, Result};
use tracing::{info, warn};

use alfil_core::{Board, Coordinate, Piece};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("alfil starting");

    let board = Board::starting_position();
    println!("{}\n", board.pretty());

    let requested: Vec<String> = std::env::args().skip(1).collect();
    let pieces = if requested.is_empty() {
        board.pieces(board.side_to_move()).collect()
    } else {
        pieces_on(&board, &requested)?
    };

    for piece in pieces {
        let moves = piece.legal_moves(&board);
        let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
        println!("{} on {}: {} [{}]", piece, piece.position(), moves.len(), listed.join(" "));
    }
    Ok(())
}

/// Resolve algebraic coordinates to the pieces standing on them.
fn pieces_on(board: &Board, names: &[String]) -> Result<Vec<Piece>> {
    let mut pieces = Vec::with_capacity(names.len());
    for name in names {
        let coordinate = Coordinate::from_algebraic(name)
            .with_context(|| format!("invalid coordinate: \"{name}\""))?;
        match board.piece_at(coordinate) {
            Some(piece) => pieces.push(piece),
            None => warn!(%coordinate, "no piece on requested coordinate, skipping"),
        }
    }
    Ok(pieces)
}
