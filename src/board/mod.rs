pub mod check;
pub mod color;
pub mod coordinate;
pub mod error;
pub mod piece;

mod display;

#[cfg(test)]
mod tests;

use color::Color;
use coordinate::Coordinate;
use error::BoardError;
use piece::{Piece, PieceId, PieceKind};

use self::check::CheckStatus;

/// One cell of the grid. Its color is fixed when the board is built.
#[derive(Clone, Copy, PartialEq, Debug)]
struct Square {
    color: Color,
    occupant: Option<PieceId>,
}

/// A (kind, color, coordinate) triple, the flat description the placement
/// format reads and writes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Placement {
    pub kind: PieceKind,
    pub color: Color,
    pub coordinate: Coordinate,
}

/// Represents the state of a chess board. Every piece ever put on the board
/// lives in the `pieces` arena and is addressed by its `PieceId`; the grid and
/// the per-color rosters only hold ids. Captured pieces keep their arena slot
/// so that an undo can bring them back.
#[derive(Clone)]
pub struct Board {
    squares: [[Square; 8]; 8],
    pieces: Vec<Piece>,
    rosters: [Vec<PieceId>; 2],
    check_status: [CheckStatus; 2],
}

impl Default for Board {
    fn default() -> Self {
        let mut squares = [[Square {
            color: Color::White,
            occupant: None,
        }; 8]; 8];
        for (r, row) in squares.iter_mut().enumerate() {
            for (c, square) in row.iter_mut().enumerate() {
                square.color = if (r + c) % 2 == 0 {
                    Color::Black
                } else {
                    Color::White
                };
            }
        }

        Self {
            squares,
            pieces: Vec::with_capacity(32),
            rosters: [Vec::with_capacity(16), Vec::with_capacity(16)],
            check_status: [CheckStatus::Unknown; 2],
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::new();
        for color in [Color::White, Color::Black] {
            let home = color.home_row();
            let pawn_row = match color {
                Color::White => 2,
                Color::Black => 7,
            };
            for col in 1..=8u8 {
                board.spawn(PieceKind::Pawn, color, Coordinate::new(pawn_row, col));
            }
            for (i, &kind) in BACK_RANK.iter().enumerate() {
                board.spawn(kind, color, Coordinate::new(home, i as u8 + 1));
            }
        }
        board
    }

    /// Builds a board from placement triples, in order.
    pub fn from_placements<I>(placements: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Placement>,
    {
        let mut board = Self::new();
        for placement in placements {
            board.put(placement.kind, placement.color, placement.coordinate)?;
        }
        Ok(board)
    }

    /// The live pieces as placement triples, white roster first.
    pub fn placements(&self) -> Vec<Placement> {
        [Color::White, Color::Black]
            .iter()
            .flat_map(|&color| self.pieces(color))
            .map(|piece| Placement {
                kind: piece.kind(),
                color: piece.color(),
                coordinate: piece.coordinate(),
            })
            .collect()
    }

    pub fn put(
        &mut self,
        kind: PieceKind,
        color: Color,
        coordinate: Coordinate,
    ) -> Result<PieceId, BoardError> {
        if !self.is_empty(coordinate) {
            return Err(BoardError::SquareOccupied { coordinate });
        }
        Ok(self.spawn(kind, color, coordinate))
    }

    fn spawn(&mut self, kind: PieceKind, color: Color, coordinate: Coordinate) -> PieceId {
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Piece::new(id, kind, color, coordinate));
        self.rosters[color.index()].push(id);
        self.square_mut(coordinate).occupant = Some(id);
        self.invalidate_check_statuses();
        id
    }

    #[inline]
    fn square(&self, coordinate: Coordinate) -> &Square {
        &self.squares[coordinate.row() as usize - 1][coordinate.col() as usize - 1]
    }

    #[inline]
    fn square_mut(&mut self, coordinate: Coordinate) -> &mut Square {
        &mut self.squares[coordinate.row() as usize - 1][coordinate.col() as usize - 1]
    }

    #[inline]
    pub fn is_empty(&self, coordinate: Coordinate) -> bool {
        self.square(coordinate).occupant.is_none()
    }

    pub fn square_color(&self, coordinate: Coordinate) -> Color {
        self.square(coordinate).color
    }

    #[inline]
    pub fn piece_id_at(&self, coordinate: Coordinate) -> Option<PieceId> {
        self.square(coordinate).occupant
    }

    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.piece_id_at(coordinate).map(|id| self.piece(id))
    }

    /// Looks up a piece by id. Captured pieces are still reachable here; use
    /// `is_live` to tell them apart.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub fn is_live(&self, id: PieceId) -> bool {
        let piece = self.piece(id);
        self.piece_id_at(piece.coordinate()) == Some(id)
    }

    pub fn roster(&self, color: Color) -> &[PieceId] {
        &self.rosters[color.index()]
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.rosters[color.index()].iter().map(move |&id| self.piece(id))
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces(color).find(|piece| piece.kind() == PieceKind::King)
    }

    /// Summed score of every live piece of `color`.
    pub fn material(&self, color: Color) -> i32 {
        self.pieces(color).map(|piece| piece.score()).sum()
    }

    // Low level primitives for the mutation protocol in `chess_move`. None of
    // them touch the check cache.

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    pub(crate) fn set_occupant(&mut self, coordinate: Coordinate, occupant: Option<PieceId>) {
        self.square_mut(coordinate).occupant = occupant;
    }

    /// Takes a live piece off its square and out of its roster, returning the
    /// roster index it held.
    pub(crate) fn take_off(&mut self, id: PieceId) -> usize {
        let (color, coordinate) = {
            let piece = self.piece(id);
            (piece.color(), piece.coordinate())
        };
        self.set_occupant(coordinate, None);
        let roster = &mut self.rosters[color.index()];
        let index = roster
            .iter()
            .position(|&other| other == id)
            .unwrap_or_else(|| panic!("piece {:?} is not in the {} roster", id, color));
        roster.remove(index);
        index
    }

    /// Reverses `take_off`, putting the piece back at the same roster index.
    pub(crate) fn put_back(&mut self, id: PieceId, roster_index: usize) {
        let (color, coordinate) = {
            let piece = self.piece(id);
            (piece.color(), piece.coordinate())
        };
        self.set_occupant(coordinate, Some(id));
        self.rosters[color.index()].insert(roster_index, id);
    }

    /// Verifies that the rosters and the grid describe the same set of pieces.
    pub fn audit(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            for piece in self.pieces(color) {
                if self.piece_id_at(piece.coordinate()) != Some(piece.id()) {
                    return Err(BoardError::RosterPieceMisplaced {
                        piece: piece.id(),
                        coordinate: piece.coordinate(),
                    });
                }
            }

            let on_board = Coordinate::all()
                .filter_map(|coordinate| self.piece_at(coordinate))
                .filter(|piece| piece.color() == color)
                .count();
            let in_roster = self.roster(color).len();
            if on_board != in_roster {
                return Err(BoardError::RosterCountMismatch {
                    color,
                    on_board,
                    in_roster,
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn debug_audit(&self) {
        if cfg!(feature = "audit") {
            if let Err(error) = self.audit() {
                panic!("{}", error);
            }
        }
    }
}
