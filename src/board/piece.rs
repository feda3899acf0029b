use std::fmt;

use super::color::Color;
use super::coordinate::Coordinate;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Fixed material value used by the searcher.
    pub fn score(&self) -> i32 {
        match self {
            PieceKind::Pawn => 20,
            PieceKind::Knight => 60,
            PieceKind::Bishop => 60,
            PieceKind::Rook => 80,
            PieceKind::Queen => 100,
            PieceKind::King => 0,
        }
    }

    pub fn notation(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_notation(c: char) -> Option<Self> {
        ALL_PIECE_KINDS.iter().copied().find(|kind| kind.notation() == c)
    }
}

/// Stable handle of a piece within the board that created it. Copies of a
/// board keep the same ids, so a move found on a copy applies to the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    coordinate: Coordinate,
    moved: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: Color, coordinate: Coordinate) -> Self {
        Self {
            id,
            kind,
            color,
            coordinate,
            moved: false,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    pub fn score(&self) -> i32 {
        self.kind.score()
    }

    pub(crate) fn relocate(&mut self, coordinate: Coordinate, moved: bool) {
        self.coordinate = coordinate;
        self.moved = moved;
    }

    pub fn to_fen(&self) -> char {
        let c = self.kind.notation();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} on {}", self.color, self.kind, self.coordinate)
    }
}
