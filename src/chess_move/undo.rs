use smallvec::SmallVec;

use crate::board::check::CheckStatus;
use crate::board::coordinate::Coordinate;
use crate::board::piece::PieceId;

/// Where a single piece stood, and whether it had moved, before it moved.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PieceUndo {
    pub(crate) piece: PieceId,
    pub(crate) from: Coordinate,
    pub(crate) moved: bool,
}

impl PieceUndo {
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    pub fn from(&self) -> Coordinate {
        self.from
    }

    pub fn had_moved(&self) -> bool {
        self.moved
    }
}

/// A piece taken off the board by a capture, with the roster slot it held.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CapturedPiece {
    pub(crate) piece: PieceId,
    pub(crate) roster_index: usize,
}

impl CapturedPiece {
    pub fn piece(&self) -> PieceId {
        self.piece
    }
}

/// Everything needed to take back one `Board::move_piece`. Records must be
/// applied in the reverse order they were created.
#[derive(Clone, PartialEq, Debug)]
#[must_use = "an undo record is the only way to take the move back"]
pub struct UndoRecord {
    pub(crate) captured: Option<CapturedPiece>,
    /// The moving piece first, then the castling rook if there was one.
    pub(crate) pieces: SmallVec<[PieceUndo; 2]>,
    pub(crate) check_status: [CheckStatus; 2],
}

impl UndoRecord {
    pub fn captured(&self) -> Option<PieceId> {
        self.captured.as_ref().map(CapturedPiece::piece)
    }

    pub fn piece_undos(&self) -> &[PieceUndo] {
        &self.pieces
    }

    pub fn is_castle(&self) -> bool {
        self.pieces.len() == 2
    }
}
