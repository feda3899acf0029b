use std::ops::{Deref, DerefMut};

use crate::board::Board;

use super::chess_move::Move;
use super::undo::UndoRecord;

/// A move played on a borrowed board that is taken back when the guard goes
/// out of scope, whichever way the scope is left. The board stays reachable
/// through the guard in the meantime.
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    undo: Option<UndoRecord>,
}

impl<'a> ScopedMove<'a> {
    pub fn new(board: &'a mut Board, mv: Move) -> Self {
        let undo = board.move_piece(mv);
        Self {
            board,
            undo: Some(undo),
        }
    }

    /// Keeps the move on the board and hands back its undo record.
    pub fn commit(mut self) -> UndoRecord {
        self.undo
            .take()
            .unwrap_or_else(|| unreachable!("undo record is only taken once"))
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.apply_undo(undo);
        }
    }
}
