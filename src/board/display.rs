use std::fmt;

use super::coordinate::Coordinate;
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        writeln!(f, "  ┌───┬───┬───┬───┬───┬───┬───┬───┐")?;
        for row in (1..=8u8).rev() {
            write!(f, "{} │", row)?;
            for col in 1..=8u8 {
                let coordinate = Coordinate::new(row, col);
                let c = match self.piece_at(coordinate) {
                    Some(piece) => piece.to_fen(),
                    None if (row + col) % 2 == 0 => '·',
                    None => ' ',
                };
                write!(f, " {} │", c)?;
            }
            writeln!(f, " {}", row)?;
            if row > 1 {
                writeln!(f, "  ├───┼───┼───┼───┼───┼───┼───┼───┤")?;
            } else {
                writeln!(f, "  └───┴───┴───┴───┴───┴───┴───┴───┘")?;
            }
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

/// Builds a `Board` from an 8x8 diagram drawn from white's point of view,
/// uppercase for white, lowercase for black, `.` for an empty square.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let kind = $crate::board::piece::PieceKind::from_notation(c.to_ascii_uppercase())
                    .expect("Invalid character in chess position");
                let color = if c.is_ascii_uppercase() {
                    $crate::board::color::Color::White
                } else {
                    $crate::board::color::Color::Black
                };
                // The first character of the diagram is a8, the last one h1.
                let row = 8 - (i / 8) as u8;
                let col = (i % 8) as u8 + 1;
                board
                    .put(kind, color, $crate::board::coordinate::Coordinate::new(row, col))
                    .unwrap();
            }
        }
        board
    }};
}
