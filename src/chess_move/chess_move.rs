use core::fmt;

use crate::board::coordinate::Coordinate;
use crate::board::piece::PieceId;
use crate::board::Board;

/// A piece and the square it goes to. Castling is the king's two-column move;
/// the rook follows when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    piece: PieceId,
    to: Coordinate,
}

impl Move {
    pub fn new(piece: PieceId, to: Coordinate) -> Self {
        Self { piece, to }
    }

    pub fn piece(&self) -> PieceId {
        self.piece
    }

    pub fn to_coordinate(&self) -> Coordinate {
        self.to
    }

    /// Where the piece currently stands on `board`.
    pub fn from_coordinate(&self, board: &Board) -> Coordinate {
        board.piece(self.piece).coordinate()
    }

    /// Coordinate notation, e.g. `e2e4`, relative to the board the move is
    /// about to be played on.
    pub fn to_notation(&self, board: &Board) -> String {
        format!("{}{}", self.from_coordinate(board), self.to)
    }

    /// Finds the move of whatever stands on `from` to `to`.
    pub fn from_coordinates(board: &Board, from: Coordinate, to: Coordinate) -> Option<Self> {
        board.piece_id_at(from).map(|piece| Self::new(piece, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} to {}", self.piece, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
