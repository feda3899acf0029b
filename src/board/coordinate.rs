use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A square on the board, addressed the way players read it: `row` 1..=8
/// from white's back rank, `col` 1..=8 from the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateParseError {
    #[error("coordinate must be a file a-h followed by a rank 1-8, got {input:?}")]
    Malformed { input: String },
}

impl Coordinate {
    /// Panics if either component is outside 1..=8.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row >= 1 && row <= 8, "coordinate row must be within 1..=8");
        assert!(col >= 1 && col <= 8, "coordinate column must be within 1..=8");
        Self { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// The coordinate `(d_row, d_col)` away, or `None` past the board edge.
    #[inline]
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    #[inline]
    pub fn row(&self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col - 1) as char
    }

    pub fn rank_char(&self) -> char {
        (b'0' + self.row) as char
    }

    pub fn from_chars(file: char, rank: char) -> Option<Self> {
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Self::new(rank as u8 - b'0', file as u8 - b'a' + 1))
    }

    /// All 64 coordinates, row by row starting at a1.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=8).flat_map(|row| (1..=8).map(move |col| Coordinate::new(row, col)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordinateParseError::Malformed {
            input: input.to_string(),
        };
        let lowered = input.trim().to_lowercase();
        let mut chars = lowered.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Self::from_chars(file, rank).ok_or_else(malformed),
            _ => Err(malformed()),
        }
    }
}

pub const A1: Coordinate = Coordinate::new(1, 1);
pub const B1: Coordinate = Coordinate::new(1, 2);
pub const C1: Coordinate = Coordinate::new(1, 3);
pub const D1: Coordinate = Coordinate::new(1, 4);
pub const E1: Coordinate = Coordinate::new(1, 5);
pub const F1: Coordinate = Coordinate::new(1, 6);
pub const G1: Coordinate = Coordinate::new(1, 7);
pub const H1: Coordinate = Coordinate::new(1, 8);
pub const A2: Coordinate = Coordinate::new(2, 1);
pub const B2: Coordinate = Coordinate::new(2, 2);
pub const C2: Coordinate = Coordinate::new(2, 3);
pub const D2: Coordinate = Coordinate::new(2, 4);
pub const E2: Coordinate = Coordinate::new(2, 5);
pub const F2: Coordinate = Coordinate::new(2, 6);
pub const G2: Coordinate = Coordinate::new(2, 7);
pub const H2: Coordinate = Coordinate::new(2, 8);
pub const A3: Coordinate = Coordinate::new(3, 1);
pub const B3: Coordinate = Coordinate::new(3, 2);
pub const C3: Coordinate = Coordinate::new(3, 3);
pub const D3: Coordinate = Coordinate::new(3, 4);
pub const E3: Coordinate = Coordinate::new(3, 5);
pub const F3: Coordinate = Coordinate::new(3, 6);
pub const G3: Coordinate = Coordinate::new(3, 7);
pub const H3: Coordinate = Coordinate::new(3, 8);
pub const A4: Coordinate = Coordinate::new(4, 1);
pub const B4: Coordinate = Coordinate::new(4, 2);
pub const C4: Coordinate = Coordinate::new(4, 3);
pub const D4: Coordinate = Coordinate::new(4, 4);
pub const E4: Coordinate = Coordinate::new(4, 5);
pub const F4: Coordinate = Coordinate::new(4, 6);
pub const G4: Coordinate = Coordinate::new(4, 7);
pub const H4: Coordinate = Coordinate::new(4, 8);
pub const A5: Coordinate = Coordinate::new(5, 1);
pub const B5: Coordinate = Coordinate::new(5, 2);
pub const C5: Coordinate = Coordinate::new(5, 3);
pub const D5: Coordinate = Coordinate::new(5, 4);
pub const E5: Coordinate = Coordinate::new(5, 5);
pub const F5: Coordinate = Coordinate::new(5, 6);
pub const G5: Coordinate = Coordinate::new(5, 7);
pub const H5: Coordinate = Coordinate::new(5, 8);
pub const A6: Coordinate = Coordinate::new(6, 1);
pub const B6: Coordinate = Coordinate::new(6, 2);
pub const C6: Coordinate = Coordinate::new(6, 3);
pub const D6: Coordinate = Coordinate::new(6, 4);
pub const E6: Coordinate = Coordinate::new(6, 5);
pub const F6: Coordinate = Coordinate::new(6, 6);
pub const G6: Coordinate = Coordinate::new(6, 7);
pub const H6: Coordinate = Coordinate::new(6, 8);
pub const A7: Coordinate = Coordinate::new(7, 1);
pub const B7: Coordinate = Coordinate::new(7, 2);
pub const C7: Coordinate = Coordinate::new(7, 3);
pub const D7: Coordinate = Coordinate::new(7, 4);
pub const E7: Coordinate = Coordinate::new(7, 5);
pub const F7: Coordinate = Coordinate::new(7, 6);
pub const G7: Coordinate = Coordinate::new(7, 7);
pub const H7: Coordinate = Coordinate::new(7, 8);
pub const A8: Coordinate = Coordinate::new(8, 1);
pub const B8: Coordinate = Coordinate::new(8, 2);
pub const C8: Coordinate = Coordinate::new(8, 3);
pub const D8: Coordinate = Coordinate::new(8, 4);
pub const E8: Coordinate = Coordinate::new(8, 5);
pub const F8: Coordinate = Coordinate::new(8, 6);
pub const G8: Coordinate = Coordinate::new(8, 7);
pub const H8: Coordinate = Coordinate::new(8, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_line_up_with_algebraic_names() {
        assert_eq!("a1", A1.to_string());
        assert_eq!("e4", E4.to_string());
        assert_eq!("h8", H8.to_string());
        assert_eq!(4, E4.row());
        assert_eq!(5, E4.col());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Ok(E4), "e4".parse());
        assert_eq!(Ok(A8), "A8".parse());
        assert!("i1".parse::<Coordinate>().is_err());
        assert!("a9".parse::<Coordinate>().is_err());
        assert!("a10".parse::<Coordinate>().is_err());
        assert!("".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_offset_stops_at_the_edge() {
        assert_eq!(Some(B2), A1.offset(1, 1));
        assert_eq!(None, A1.offset(-1, 0));
        assert_eq!(None, H8.offset(0, 1));
        assert_eq!(Some(G6), H8.offset(-2, -1));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_construction_panics() {
        let row = 9;
        Coordinate::new(row, 1);
    }

    #[test]
    fn test_all_covers_every_square_once() {
        let all: Vec<_> = Coordinate::all().collect();
        assert_eq!(64, all.len());
        assert_eq!(A1, all[0]);
        assert_eq!(H8, all[63]);
    }
}
