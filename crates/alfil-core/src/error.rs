//! Error types for board construction and move application.

use crate::coordinate::Coordinate;

/// Errors from building a [`Board`](crate::Board) or applying a move to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Two pieces were placed on the same coordinate.
    #[error("coordinate {coordinate} is already occupied")]
    CoordinateOccupied {
        /// The contested coordinate.
        coordinate: Coordinate,
    },
    /// The moving piece is not standing on its origin tile.
    #[error("no matching piece on {coordinate}")]
    PieceNotFound {
        /// The origin coordinate that was inspected.
        coordinate: Coordinate,
    },
    /// The destination tile does not hold what the move expects.
    #[error("destination {coordinate} does not match the move")]
    DestinationMismatch {
        /// The destination coordinate that was inspected.
        coordinate: Coordinate,
    },
}
