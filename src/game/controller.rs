use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{error, info};

use crate::board::color::Color;
use crate::board::coordinate::Coordinate;
use crate::board::Board;
use crate::chess_move::{Move, UndoRecord};
use crate::placement::BoardLog;
use crate::searcher::SearchConfig;

use super::error::{GameError, InputError};
use super::move_slot::MoveSlot;
use super::player::{EnginePlayer, HumanPlayer, Player};

/// Who sits on each side, white first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameMode {
    HumanVsAi,
    AiVsHuman,
    AiVsAi,
    HumanVsHuman,
}

impl FromStr for GameMode {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "human-vs-ai" => Ok(GameMode::HumanVsAi),
            "ai-vs-human" => Ok(GameMode::AiVsHuman),
            "ai-vs-ai" => Ok(GameMode::AiVsAi),
            "human-vs-human" => Ok(GameMode::HumanVsHuman),
            _ => Err(InputError::InvalidInput {
                input: input.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEnding {
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameEnding::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameEnding::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// What a move listener is told after every applied move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlayedMove {
    pub color: Color,
    pub from: Coordinate,
    pub mv: Move,
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.mv.to_coordinate())
    }
}

type MoveListener = Box<dyn FnMut(&Board, PlayedMove)>;

/// Runs a game: asks the side to move for a move, applies it, and keeps the
/// undo stack, the board log and the move listener up to date.
pub struct GameController {
    board: Board,
    turn: Color,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    undo_stack: Vec<UndoRecord>,
    board_log: Option<BoardLog>,
    move_listener: Option<MoveListener>,
}

impl GameController {
    /// Seats engine and human players according to `mode`. Human players
    /// read their moves from `slot`.
    pub fn new(mode: GameMode, board: Board, config: SearchConfig, slot: Arc<MoveSlot>) -> Self {
        let engine = |color| -> Box<dyn Player> { Box::new(EnginePlayer::new(color, config)) };
        let human =
            |color| -> Box<dyn Player> { Box::new(HumanPlayer::new(color, Arc::clone(&slot))) };

        let (white, black) = match mode {
            GameMode::HumanVsAi => (human(Color::White), engine(Color::Black)),
            GameMode::AiVsHuman => (engine(Color::White), human(Color::Black)),
            GameMode::AiVsAi => (engine(Color::White), engine(Color::Black)),
            GameMode::HumanVsHuman => (human(Color::White), human(Color::Black)),
        };
        Self::with_players(board, white, black)
    }

    pub fn with_players(board: Board, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            board,
            turn: Color::White,
            white,
            black,
            undo_stack: Vec::new(),
            board_log: None,
            move_listener: None,
        }
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    pub fn set_board_log(&mut self, board_log: BoardLog) {
        self.board_log = Some(board_log);
    }

    pub fn set_move_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&Board, PlayedMove) + 'static,
    {
        self.move_listener = Some(Box::new(listener));
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn moves_played(&self) -> usize {
        self.undo_stack.len()
    }

    /// Plays until one side cannot move.
    pub fn play(&mut self) -> Result<GameEnding, GameError> {
        loop {
            if let Some(ending) = self.play_turn()? {
                info!("game over after {} moves: {}", self.moves_played(), ending);
                return Ok(ending);
            }
        }
    }

    /// Lets the side to move make one move. Returns the ending when that side
    /// has none.
    pub fn play_turn(&mut self) -> Result<Option<GameEnding>, GameError> {
        let player = match self.turn {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };

        match player.make_move(&self.board)? {
            Some(mv) => {
                self.apply_move(mv)?;
                Ok(None)
            }
            None => Ok(Some(self.ending())),
        }
    }

    /// Applies a move for the side to move and hands the turn over.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        let mover = self.turn;
        let owned = self.board.is_live(mv.piece()) && self.board.piece(mv.piece()).color() == mover;
        if !owned || !self.board.is_legal(mv) {
            return Err(GameError::IllegalMove {
                notation: mv.to_notation(&self.board),
            });
        }

        let from = mv.from_coordinate(&self.board);
        let undo = self.board.move_piece(mv);
        self.undo_stack.push(undo);

        if let Some(board_log) = &self.board_log {
            if let Err(e) = board_log.append(&self.board, mover) {
                error!("can not write {}: {}", board_log.path().display(), e);
            }
        }
        if let Some(listener) = self.move_listener.as_mut() {
            listener(
                &self.board,
                PlayedMove {
                    color: mover,
                    from,
                    mv,
                },
            );
        }

        self.turn = mover.opponent();
        Ok(())
    }

    /// Takes back the last move and gives the turn back to its side. Returns
    /// `false` when there is nothing to take back.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(undo) => {
                self.board.apply_undo(undo);
                self.turn = self.turn.opponent();
                true
            }
            None => false,
        }
    }

    fn ending(&mut self) -> GameEnding {
        if self.board.is_under_check(Color::White) {
            GameEnding::Checkmate {
                winner: Color::Black,
            }
        } else if self.board.is_under_check(Color::Black) {
            GameEnding::Checkmate {
                winner: Color::White,
            }
        } else {
            GameEnding::Stalemate
        }
    }
}
