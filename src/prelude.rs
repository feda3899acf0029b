//! Common types re-exported for convenience.

pub use crate::board::color::Color;
pub use crate::board::coordinate::Coordinate;
pub use crate::board::piece::{Piece, PieceId, PieceKind};
pub use crate::board::{Board, Placement};
pub use crate::chess_move::{Move, ScopedMove, UndoRecord};
pub use crate::searcher::{SearchConfig, Searcher};
