//! Pseudo-legal target generation: the squares each kind of piece can reach
//! by its movement rule alone, before self-check is considered.

use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::coordinate::Coordinate;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;

/// Destination squares of one piece. A queen in the open tops out at 27.
pub type Targets = SmallVec<[Coordinate; 28]>;

type Direction = (i8, i8);

const ROOK_DIRS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_DIRS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (1, 2),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

const KING_OFFSETS: [Direction; 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Every square `piece` may move to by its movement rule. Castling targets
/// are only produced for a king when `king_in_check` is false.
pub fn pseudo_legal_targets(board: &Board, piece: &Piece, king_in_check: bool) -> Targets {
    let mut targets = Targets::new();
    match piece.kind() {
        PieceKind::Pawn => pawn_targets(board, piece, &mut targets),
        PieceKind::Knight => step_targets(board, piece, &KNIGHT_OFFSETS, &mut targets),
        PieceKind::Bishop => ray_targets(board, piece, &BISHOP_DIRS, &mut targets),
        PieceKind::Rook => ray_targets(board, piece, &ROOK_DIRS, &mut targets),
        PieceKind::Queen => {
            ray_targets(board, piece, &ROOK_DIRS, &mut targets);
            ray_targets(board, piece, &BISHOP_DIRS, &mut targets);
        }
        PieceKind::King => {
            step_targets(board, piece, &KING_OFFSETS, &mut targets);
            if !king_in_check {
                castle_targets(board, piece, &mut targets);
            }
        }
    }
    targets
}

#[inline]
fn is_capture(board: &Board, piece: &Piece, coordinate: Coordinate) -> bool {
    board
        .piece_at(coordinate)
        .map_or(false, |other| other.color() != piece.color())
}

fn ray_targets(board: &Board, piece: &Piece, directions: &[Direction], targets: &mut Targets) {
    for &(d_row, d_col) in directions {
        let mut next = piece.coordinate().offset(d_row, d_col);
        while let Some(coordinate) = next {
            if board.is_empty(coordinate) {
                targets.push(coordinate);
                next = coordinate.offset(d_row, d_col);
                continue;
            }
            if is_capture(board, piece, coordinate) {
                targets.push(coordinate);
            }
            break;
        }
    }
}

fn step_targets(board: &Board, piece: &Piece, offsets: &[Direction], targets: &mut Targets) {
    let from = piece.coordinate();
    targets.extend(
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|&to| board.is_empty(to) || is_capture(board, piece, to)),
    );
}

fn pawn_targets(board: &Board, piece: &Piece, targets: &mut Targets) {
    let from = piece.coordinate();
    let (forward, start_row) = match piece.color() {
        Color::White => (1, 2),
        Color::Black => (-1, 7),
    };

    if let Some(one) = from.offset(forward, 0) {
        if board.is_empty(one) {
            targets.push(one);
            if from.row() == start_row {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        targets.push(two);
                    }
                }
            }
        }
    }

    for d_col in [1, -1] {
        if let Some(diagonal) = from.offset(forward, d_col) {
            if is_capture(board, piece, diagonal) {
                targets.push(diagonal);
            }
        }
    }
}

/// Castling needs an unmoved king on its e-file home square, an unmoved rook
/// on the corner, and empty squares in between. Whether the king crosses an
/// attacked square is not considered.
fn castle_targets(board: &Board, king: &Piece, targets: &mut Targets) {
    let row = king.color().home_row();
    if king.has_moved() || king.coordinate() != Coordinate::new(row, 5) {
        return;
    }

    let rook_ready = |col: u8| {
        board.piece_at(Coordinate::new(row, col)).map_or(false, |rook| {
            rook.kind() == PieceKind::Rook && rook.color() == king.color() && !rook.has_moved()
        })
    };
    let empty = |cols: &[u8]| {
        cols.iter()
            .all(|&col| board.is_empty(Coordinate::new(row, col)))
    };

    if rook_ready(1) && empty(&[2, 3, 4]) {
        targets.push(Coordinate::new(row, 3));
    }
    if rook_ready(8) && empty(&[6, 7]) {
        targets.push(Coordinate::new(row, 7));
    }
}
