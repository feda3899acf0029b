//! Plain-text piece placement: one `<color><kind><file><rank>` line per piece,
//! e.g. `wKe1`. This is the format of board files given on the command line
//! and of the board log.

mod board_log;

pub use board_log::BoardLog;

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::coordinate::Coordinate;
use crate::board::error::BoardError;
use crate::board::piece::PieceKind;
use crate::board::{Board, Placement};

/// Lines starting with this prefix are log headers.
pub const HEADER_PREFIX: &str = "===";

static PLACEMENT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([wb])([KQRBNP])([a-h])([1-8])$").expect("valid regex"));

#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("line {line_number} can not be parsed: {line:?}")]
    InvalidLine { line_number: usize, line: String },
    #[error("line {line_number} can not be placed: {board_error}")]
    ErrorPlacingPiece {
        line_number: usize,
        board_error: BoardError,
    },
    #[error("can not read board file: {0}")]
    Io(#[from] std::io::Error),
}

type PlacementResult<T> = Result<T, PlacementError>;

/// Writes every white piece, a blank line, every black piece and a closing
/// blank line, each group in roster order.
pub fn encode_placement(board: &Board) -> String {
    let mut out = String::new();
    for color in [Color::White, Color::Black] {
        for piece in board.pieces(color) {
            out.push_str(&encode_line(&Placement {
                kind: piece.kind(),
                color,
                coordinate: piece.coordinate(),
            }));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn encode_line(placement: &Placement) -> String {
    format!(
        "{}{}{}",
        placement.color.letter(),
        placement.kind.notation(),
        placement.coordinate
    )
}

/// Parses a single trimmed, non-empty placement line.
pub fn parse_line(line: &str) -> Option<Placement> {
    let caps = PLACEMENT_LINE.captures(line)?;
    let char_at = |i: usize| caps[i].chars().next();

    let color = Color::from_letter(char_at(1)?)?;
    let kind = PieceKind::from_notation(char_at(2)?)?;
    let coordinate = Coordinate::from_chars(char_at(3)?, char_at(4)?)?;
    Some(Placement {
        kind,
        color,
        coordinate,
    })
}

/// Loads a board from placement text. Blank lines are skipped, a header line
/// starts a new snapshot and the last snapshot wins. Every loaded piece is
/// unmoved.
pub fn parse_placement(text: &str) -> PlacementResult<Board> {
    let mut board = Board::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(HEADER_PREFIX) {
            board = Board::new();
            continue;
        }

        let placement = parse_line(line).ok_or_else(|| PlacementError::InvalidLine {
            line_number,
            line: line.to_string(),
        })?;
        board
            .put(placement.kind, placement.color, placement.coordinate)
            .map_err(|board_error| PlacementError::ErrorPlacingPiece {
                line_number,
                board_error,
            })?;
    }

    Ok(board)
}

pub fn read_placement_file<P: AsRef<Path>>(path: P) -> PlacementResult<Board> {
    let text = fs::read_to_string(path)?;
    parse_placement(&text)
}
