//! Legal move generation: pseudo-legal targets filtered against leaving the
//! mover's own king attacked.

pub mod targets;

use smallvec::SmallVec;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::color::Color;
use crate::board::piece::{PieceId, PieceKind};
use crate::board::Board;
use crate::chess_move::{Move, ScopedMove};
use targets::{pseudo_legal_targets, Targets};

impl Board {
    /// Destinations for the piece `id`. With `validate_check` every candidate
    /// is played and taken back, and those leaving the mover's king attacked
    /// are dropped; a king in check also loses its castling candidates.
    pub fn legal_moves(&mut self, id: PieceId, validate_check: bool) -> Targets {
        if !self.is_live(id) {
            return Targets::new();
        }

        let piece = self.piece(id).clone();
        let color = piece.color();
        let king_in_check = validate_check
            && piece.kind() == PieceKind::King
            && !piece.has_moved()
            && self.is_under_check(color);

        let candidates = pseudo_legal_targets(self, &piece, king_in_check);
        if !validate_check {
            return candidates;
        }

        // simulate each move and see if it leaves the mover's king in check.
        // if it does, it's invalid.
        candidates
            .into_iter()
            .filter(|&to| {
                let mut scoped = ScopedMove::new(self, Move::new(id, to));
                !scoped.is_under_check(color)
            })
            .collect()
    }

    /// Every legal move of `color`, grouped by piece in roster order.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<Move> {
        let roster: SmallVec<[PieceId; 16]> = self.roster(color).iter().copied().collect();
        let mut moves = Vec::with_capacity(48);
        for id in roster {
            moves.extend(
                self.legal_moves(id, true)
                    .into_iter()
                    .map(|to| Move::new(id, to)),
            );
        }
        moves
    }

    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let roster: SmallVec<[PieceId; 16]> = self.roster(color).iter().copied().collect();
        roster
            .into_iter()
            .any(|id| !self.legal_moves(id, true).is_empty())
    }

    pub fn is_legal(&mut self, mv: Move) -> bool {
        self.legal_moves(mv.piece(), true)
            .contains(&mv.to_coordinate())
    }
}

/// Counts the legal move sequences of `depth + 1` plies starting with `color`.
pub fn count_positions(depth: u8, board: &mut Board, color: Color) -> usize {
    let candidates = board.all_legal_moves(color);
    let mut count = candidates.len();

    if depth == 0 {
        return count;
    }

    let next_color = color.opponent();

    for chess_move in candidates {
        let mut scoped = ScopedMove::new(board, chess_move);
        count += count_positions(depth - 1, &mut scoped, next_color);
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coordinate::*;
    use crate::chess_position;

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let mut board = Board::starting_position();
        assert_eq!(20, board.all_legal_moves(Color::White).len());
        assert_eq!(20, board.all_legal_moves(Color::Black).len());
    }

    #[test]
    fn test_count_positions() {
        let mut board = Board::starting_position();
        assert_eq!(20, count_positions(0, &mut board, Color::White));
        assert_eq!(420, count_positions(1, &mut board, Color::White));
        assert_eq!(9322, count_positions(2, &mut board, Color::White));
        board.audit().unwrap();
    }

    #[test]
    fn test_pinned_piece_cannot_leave_the_pin() {
        let mut board = chess_position! {
            ....r..k
            ........
            ........
            ........
            ........
            ........
            ....B...
            ....K...
        };
        let bishop = board.piece_id_at(E2).unwrap();
        assert!(board.legal_moves(bishop, true).is_empty());
        assert_eq!(9, board.legal_moves(bishop, false).len());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut board = chess_position! {
            .......k
            ........
            ........
            ........
            ........
            ........
            r.......
            ....K...
        };
        let king = board.piece_id_at(E1).unwrap();
        let mut targets = board.legal_moves(king, true).to_vec();
        targets.sort();
        assert_eq!(vec![D1, F1], targets);
    }

    #[test]
    fn test_in_check_only_evasions_are_legal() {
        let mut board = chess_position! {
            ....r..k
            ........
            ........
            ........
            ........
            ........
            ...P.P..
            ...QK.N.
        };
        assert!(board.is_under_check(Color::White));
        let knight = board.piece_id_at(G1).unwrap();
        let knight_moves: Vec<_> = board
            .all_legal_moves(Color::White)
            .into_iter()
            .filter(|m| m.piece() == knight)
            .collect();
        assert_eq!(vec![Move::new(knight, E2)], knight_moves);
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let mut board = chess_position! {
            ....r..k
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        let king = board.piece_id_at(E1).unwrap();
        assert!(!board.is_legal(Move::new(king, G1)));
        assert!(!board.is_legal(Move::new(king, C1)));
        assert!(board.is_legal(Move::new(king, D1)));
    }

    #[test]
    fn test_castling_through_an_attacked_square_is_allowed() {
        let mut board = chess_position! {
            .....r.k
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        let king = board.piece_id_at(E1).unwrap();
        assert!(board.is_legal(Move::new(king, G1)));
        assert!(board.is_legal(Move::new(king, C1)));
    }

    #[test]
    fn test_legal_move_generation_leaves_the_board_untouched() {
        let mut board = Board::starting_position();
        let before = board.placements();
        let _ = board.all_legal_moves(Color::White);
        assert_eq!(before, board.placements());
        board.audit().unwrap();
    }

    #[test]
    fn test_captured_piece_has_no_moves() {
        let mut board = chess_position! {
            .......k
            ........
            ........
            ........
            ........
            ........
            r.......
            R......K
        };
        let black_rook = board.piece_id_at(A2).unwrap();
        let white_rook = board.piece_id_at(A1).unwrap();
        let _ = board.move_piece(Move::new(white_rook, A2));
        assert!(board.legal_moves(black_rook, true).is_empty());
    }
}
