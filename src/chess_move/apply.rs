use smallvec::smallvec;

use crate::board::coordinate::Coordinate;
use crate::board::piece::{PieceId, PieceKind};
use crate::board::Board;

use super::chess_move::Move;
use super::undo::{CapturedPiece, PieceUndo, UndoRecord};

impl Board {
    /// Plays `mv` without checking that it is legal, returning the record that
    /// takes it back. A king moving two columns castles: the rook on that side
    /// jumps to the square the king crossed.
    ///
    /// Panics if the piece is not on the board, or if a castling move finds no
    /// piece on the rook's corner.
    pub fn move_piece(&mut self, mv: Move) -> UndoRecord {
        let mover = mv.piece();
        let to = mv.to_coordinate();
        assert!(self.is_live(mover), "cannot move captured piece {:?}", mover);

        let check_status = self.check_statuses();

        let captured = self.piece_id_at(to).map(|victim| CapturedPiece {
            piece: victim,
            roster_index: self.take_off(victim),
        });

        let mut pieces = smallvec![];
        let castle_undo = self.move_rook_if_castling(mover, to);
        pieces.push(self.relocate(mover, to));
        pieces.extend(castle_undo);

        self.invalidate_check_statuses();
        self.debug_audit();

        UndoRecord {
            captured,
            pieces,
            check_status,
        }
    }

    /// Takes back the move `undo` was created by. Must be given the most
    /// recently created record that has not been applied yet.
    pub fn apply_undo(&mut self, undo: UndoRecord) {
        for piece_undo in undo.pieces.iter() {
            let current = self.piece(piece_undo.piece).coordinate();
            self.set_occupant(current, None);
            self.piece_mut(piece_undo.piece)
                .relocate(piece_undo.from, piece_undo.moved);
            self.set_occupant(piece_undo.from, Some(piece_undo.piece));
        }

        if let Some(captured) = undo.captured {
            self.put_back(captured.piece, captured.roster_index);
        }

        self.restore_check_statuses(undo.check_status);
        self.debug_audit();
    }

    fn relocate(&mut self, id: PieceId, to: Coordinate) -> PieceUndo {
        let (from, moved) = {
            let piece = self.piece(id);
            (piece.coordinate(), piece.has_moved())
        };
        self.set_occupant(from, None);
        self.set_occupant(to, Some(id));
        self.piece_mut(id).relocate(to, true);
        PieceUndo {
            piece: id,
            from,
            moved,
        }
    }

    fn move_rook_if_castling(&mut self, mover: PieceId, to: Coordinate) -> Option<PieceUndo> {
        let king = self.piece(mover);
        let from = king.coordinate();
        if king.kind() != PieceKind::King || (from.col() as i8 - to.col() as i8).abs() != 2 {
            return None;
        }

        let row = from.row();
        let (rook_from, rook_to) = if to.col() == 3 {
            (Coordinate::new(row, 1), Coordinate::new(row, 4))
        } else {
            (Coordinate::new(row, 8), Coordinate::new(row, 6))
        };
        let rook = self
            .piece_id_at(rook_from)
            .unwrap_or_else(|| panic!("castling to {} without a piece on {}", to, rook_from));

        Some(self.relocate(rook, rook_to))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::color::Color;
    use crate::board::coordinate::*;
    use crate::board::piece::PieceKind;
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::chess_position;

    fn snapshot(board: &Board) -> Vec<(Coordinate, PieceKind, Color, bool)> {
        Coordinate::all()
            .filter_map(|c| board.piece_at(c))
            .map(|p| (p.coordinate(), p.kind(), p.color(), p.has_moved()))
            .collect()
    }

    #[test]
    fn test_move_and_undo_restores_the_position() {
        let mut board = Board::starting_position();
        let before = snapshot(&board);
        let pawn = board.piece_id_at(E2).unwrap();

        let undo = board.move_piece(Move::new(pawn, E4));
        assert!(board.is_empty(E2));
        assert_eq!(Some(pawn), board.piece_id_at(E4));
        assert!(board.piece(pawn).has_moved());
        assert!(undo.captured().is_none());
        assert!(!undo.is_castle());
        board.audit().unwrap();

        board.apply_undo(undo);
        assert_eq!(before, snapshot(&board));
        assert!(!board.piece(pawn).has_moved());
        board.audit().unwrap();
    }

    #[test]
    fn test_capture_is_removed_and_restored_to_its_roster_slot() {
        let mut board = chess_position! {
            ....k...
            ........
            ...n....
            ........
            ....P...
            ........
            ........
            ....K...
        };
        let roster_before = board.roster(Color::Black).to_vec();
        let pawn = board.piece_id_at(E4).unwrap();
        let knight = board.piece_id_at(D6).unwrap();
        assert_eq!(20, board.material(Color::White));

        let undo = board.move_piece(Move::new(knight, E4));
        assert_eq!(Some(pawn), undo.captured());
        assert_eq!(Some(knight), board.piece_id_at(E4));
        assert!(!board.is_live(pawn));
        assert!(board.pieces(Color::White).all(|p| p.id() != pawn));
        assert_eq!(0, board.material(Color::White));
        board.audit().unwrap();

        board.apply_undo(undo);
        assert!(board.is_live(pawn));
        assert_eq!(Some(pawn), board.piece_id_at(E4));
        assert_eq!(Some(knight), board.piece_id_at(D6));
        assert_eq!(roster_before, board.roster(Color::Black));
        assert_eq!(20, board.material(Color::White));
        board.audit().unwrap();
    }

    #[test]
    fn test_castling_moves_the_rook_and_undo_puts_it_back() {
        let mut board = chess_position! {
            r...k..r
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        let king = board.piece_id_at(E1).unwrap();
        let kingside_rook = board.piece_id_at(H1).unwrap();

        let undo = board.move_piece(Move::new(king, G1));
        assert!(undo.is_castle());
        let rook_undo = undo.piece_undos()[1];
        assert_eq!(king, undo.piece_undos()[0].piece());
        assert_eq!(kingside_rook, rook_undo.piece());
        assert_eq!(H1, rook_undo.from());
        assert!(!rook_undo.had_moved());
        assert_eq!(Some(king), board.piece_id_at(G1));
        assert_eq!(Some(kingside_rook), board.piece_id_at(F1));
        assert!(board.is_empty(H1));
        assert!(board.piece(kingside_rook).has_moved());
        board.audit().unwrap();

        board.apply_undo(undo);
        assert_eq!(Some(king), board.piece_id_at(E1));
        assert_eq!(Some(kingside_rook), board.piece_id_at(H1));
        assert!(board.is_empty(F1));
        assert!(board.is_empty(G1));
        assert!(!board.piece(kingside_rook).has_moved());

        let black_king = board.piece_id_at(E8).unwrap();
        let queenside_rook = board.piece_id_at(A8).unwrap();
        let undo = board.move_piece(Move::new(black_king, C8));
        assert_eq!(Some(queenside_rook), board.piece_id_at(D8));
        assert!(board.is_empty(A8));
        board.apply_undo(undo);
        assert_eq!(Some(queenside_rook), board.piece_id_at(A8));
        assert_eq!(Some(black_king), board.piece_id_at(E8));
    }

    #[test]
    fn test_chained_undos_unwind_in_reverse_order() {
        let mut board = Board::starting_position();
        let before = snapshot(&board);
        let line = [(E2, E4), (D7, D5), (E4, D5), (D8, D5)];

        let mut undos = Vec::new();
        for (from, to) in line.iter() {
            let mv = Move::from_coordinates(&board, *from, *to).unwrap();
            undos.push(board.move_piece(mv));
        }
        assert_eq!(30, board.roster(Color::White).len() + board.roster(Color::Black).len());

        while let Some(undo) = undos.pop() {
            board.apply_undo(undo);
        }
        assert_eq!(before, snapshot(&board));
        board.audit().unwrap();
    }
}
