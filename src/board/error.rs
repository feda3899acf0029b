use thiserror::Error;

use super::color::Color;
use super::coordinate::Coordinate;
use super::piece::PieceId;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on {coordinate}, the square is already occupied")]
    SquareOccupied { coordinate: Coordinate },
    #[error("Board inconsistent, roster piece {piece:?} is not on its square {coordinate}")]
    RosterPieceMisplaced {
        piece: PieceId,
        coordinate: Coordinate,
    },
    #[error("Board inconsistent, counted {on_board} {color} pieces on the board but the roster holds {in_roster}")]
    RosterCountMismatch {
        color: Color,
        on_board: usize,
        in_roster: usize,
    },
}
