//! Moves and the reversible mutation protocol built on top of them.

pub mod chess_move;
pub mod scoped;
pub mod undo;

mod apply;

pub use chess_move::Move;
pub use scoped::ScopedMove;
pub use undo::{CapturedPiece, PieceUndo, UndoRecord};
