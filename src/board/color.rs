use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// The two sides of the game. The discriminant doubles as the index into
/// every per-color table the board keeps.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opponent(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The row a side's back rank sits on.
    pub fn home_row(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Single letter used by the placement format (`w` / `b`).
    pub fn letter(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "random" => Ok(Color::random()),
            _ => Err("invalid color; options are: black, white, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_an_involution() {
        for color in Color::ALL {
            assert_ne!(color, color.opponent());
            assert_eq!(color, color.opponent().opponent());
        }
    }

    #[test]
    fn test_parse_white() {
        assert_eq!(Color::White, Color::from_str("white").unwrap());
    }

    #[test]
    fn test_parse_black() {
        assert_eq!(Color::Black, Color::from_str("black").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_color = Color::from_str("random").unwrap();
        assert!(Color::ALL.contains(&rand_color));
    }

    #[test]
    fn test_letters() {
        assert_eq!(Some(Color::White), Color::from_letter('w'));
        assert_eq!(Some(Color::Black), Color::from_letter('b'));
        assert_eq!(None, Color::from_letter('x'));
        assert_eq!('b', Color::Black.letter());
    }

    #[test]
    fn test_home_row() {
        assert_eq!(1, Color::White.home_row());
        assert_eq!(8, Color::Black.home_row());
    }
}
