use std::fmt;

use crate::board::color::Color;
use crate::chess_move::Move;

/// A line of play as seen by the searcher: the score each side collected
/// along it, how many plies it spans, and the move it starts with.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Path {
    white_score: i32,
    black_score: i32,
    length: u8,
    first_move: Option<Move>,
}

impl Path {
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends a move. Only the first one is remembered.
    pub fn add_move(&mut self, mv: Move) {
        if self.first_move.is_none() {
            self.first_move = Some(mv);
        }
        self.length += 1;
    }

    pub fn add_score(&mut self, color: Color, score: i32) {
        match color {
            Color::White => self.white_score += score,
            Color::Black => self.black_score += score,
        }
    }

    /// Own score minus the opponent's.
    pub fn score_for(&self, color: Color) -> i32 {
        match color {
            Color::White => self.white_score - self.black_score,
            Color::Black => self.black_score - self.white_score,
        }
    }

    pub fn white_score(&self) -> i32 {
        self.white_score
    }

    pub fn black_score(&self) -> i32 {
        self.black_score
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn first_move(&self) -> Option<Move> {
        self.first_move
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "path(white: {}, black: {}, length: {}",
            self.white_score, self.black_score, self.length
        )?;
        match self.first_move {
            Some(mv) => write!(f, ", first: {})", mv),
            None => write!(f, ")"),
        }
    }
}
