use std::sync::Arc;

use log::{debug, warn};

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::Move;
use crate::searcher::{SearchConfig, Searcher};

use super::error::GameError;
use super::move_slot::MoveSlot;

/// One side of a game. `Ok(None)` means the side has no legal move left.
pub trait Player {
    fn color(&self) -> Color;
    fn make_move(&mut self, board: &Board) -> Result<Option<Move>, GameError>;
}

pub struct EnginePlayer {
    color: Color,
    searcher: Searcher,
}

impl EnginePlayer {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        Self {
            color,
            searcher: Searcher::new(config),
        }
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Player for EnginePlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &Board) -> Result<Option<Move>, GameError> {
        Ok(self.searcher.choose_move(self.color, board))
    }
}

/// Waits for moves entered through a `MoveSlot`, skipping any that are not
/// legal for its side.
pub struct HumanPlayer {
    color: Color,
    slot: Arc<MoveSlot>,
}

impl HumanPlayer {
    pub fn new(color: Color, slot: Arc<MoveSlot>) -> Self {
        Self { color, slot }
    }
}

impl Player for HumanPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &Board) -> Result<Option<Move>, GameError> {
        // legality checks play moves out, so work on a copy
        let mut scratch = board.clone();
        if !scratch.has_legal_move(self.color) {
            return Ok(None);
        }

        loop {
            let request = self.slot.take()?;
            let candidate = Move::from_coordinates(&scratch, request.from, request.to)
                .filter(|mv| scratch.piece(mv.piece()).color() == self.color);

            match candidate {
                Some(mv) if scratch.is_legal(mv) => {
                    debug!("{} plays {}", self.color, request);
                    return Ok(Some(mv));
                }
                _ => warn!("{} is not a legal move for {}", request, self.color),
            }
        }
    }
}
