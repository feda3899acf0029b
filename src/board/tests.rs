use super::*;
use crate::board::check::CheckStatus;
use crate::board::coordinate::*;
use crate::chess_move::Move;
use crate::chess_position;

type Snapshot = (
    Vec<(Coordinate, Option<PieceId>)>,
    Vec<PieceId>,
    Vec<PieceId>,
    Vec<(Coordinate, bool)>,
    [CheckStatus; 2],
);

fn snapshot(board: &Board) -> Snapshot {
    (
        Coordinate::all()
            .map(|c| (c, board.piece_id_at(c)))
            .collect(),
        board.roster(Color::White).to_vec(),
        board.roster(Color::Black).to_vec(),
        board
            .pieces
            .iter()
            .map(|p| (p.coordinate(), p.has_moved()))
            .collect(),
        board.check_statuses(),
    )
}

#[test]
fn test_starting_position() {
    let board = Board::starting_position();
    assert_eq!(16, board.roster(Color::White).len());
    assert_eq!(16, board.roster(Color::Black).len());
    assert_eq!(
        Some((PieceKind::King, Color::White)),
        board.piece_at(E1).map(|p| (p.kind(), p.color()))
    );
    assert_eq!(
        Some((PieceKind::Queen, Color::Black)),
        board.piece_at(D8).map(|p| (p.kind(), p.color()))
    );
    assert!(board.is_empty(E4));
    assert_eq!(board.material(Color::White), board.material(Color::Black));
    assert_eq!(8 * 20 + 2 * 80 + 2 * 60 + 2 * 60 + 100, board.material(Color::White));
    board.audit().unwrap();
}

#[test]
fn test_square_colors_alternate() {
    let board = Board::new();
    assert_eq!(Color::Black, board.square_color(A1));
    assert_eq!(Color::White, board.square_color(B1));
    assert_eq!(Color::White, board.square_color(A2));
    assert_eq!(Color::Black, board.square_color(H8));
    assert_eq!(Color::White, board.square_color(D1));
}

#[test]
fn test_put_on_occupied_square_fails() {
    let mut board = Board::new();
    board.put(PieceKind::Rook, Color::White, A1).unwrap();
    assert_eq!(
        Err(BoardError::SquareOccupied { coordinate: A1 }),
        board.put(PieceKind::Knight, Color::Black, A1)
    );
    assert_eq!(1, board.roster(Color::White).len());
    assert!(board.roster(Color::Black).is_empty());
}

#[test]
fn test_copy_is_independent() {
    let mut board = Board::starting_position();
    let pawn = board.piece_id_at(A2).unwrap();
    let copy = board.clone();

    let _ = board.move_piece(Move::new(pawn, A3));

    // copy should not have moved
    assert_eq!(Some(pawn), copy.piece_id_at(A2));
    assert_eq!(A2, copy.piece(pawn).coordinate());
    assert!(!copy.piece(pawn).has_moved());

    // make another copy
    let mut copy2 = board.clone();
    assert_eq!(A3, copy2.piece(pawn).coordinate());
    assert!(copy2.piece(pawn).has_moved());

    // move on copy2, the original has not changed
    let _ = copy2.move_piece(Move::new(pawn, A4));
    assert_eq!(A3, board.piece(pawn).coordinate());
}

#[test]
fn test_copy_carries_the_check_cache() {
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ....R..K
    };
    assert!(board.is_under_check(Color::Black));
    let copy = board.clone();
    assert_eq!(CheckStatus::InCheck, copy.check_status(Color::Black));
    assert_eq!(CheckStatus::Unknown, copy.check_status(Color::White));
}

#[test]
fn test_every_legal_move_round_trips() {
    let mut board = chess_position! {
        r...k..r
        ppp..ppp
        ..n..q..
        ...pp...
        .b..P.B.
        ..NP.N..
        PPP..PPP
        R..QK..R
    };
    // warm one side of the cache so restoring a known value is exercised too
    board.is_under_check(Color::White);

    for color in Color::ALL {
        for mv in board.all_legal_moves(color) {
            let before = snapshot(&board);
            let undo = board.move_piece(mv);
            board.audit().unwrap();
            board.apply_undo(undo);
            assert_eq!(before, snapshot(&board), "{} did not round trip", mv);
        }
    }
}

#[test]
fn test_two_ply_round_trip_restores_rosters_in_order() {
    let mut board = Board::starting_position();
    // settle the check cache so the comparison covers only the moves
    board.is_under_check(Color::White);
    board.is_under_check(Color::Black);
    let before = snapshot(&board);
    for first in board.all_legal_moves(Color::White) {
        let undo_first = board.move_piece(first);
        for second in board.all_legal_moves(Color::Black) {
            let undo_second = board.move_piece(second);
            board.apply_undo(undo_second);
        }
        board.apply_undo(undo_first);
    }
    assert_eq!(before, snapshot(&board));
}

#[test]
fn test_audit_reports_a_misplaced_roster_piece() {
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    let king = board.piece_id_at(E1).unwrap();
    board.set_occupant(E1, None);
    assert_eq!(
        Err(BoardError::RosterPieceMisplaced {
            piece: king,
            coordinate: E1
        }),
        board.audit()
    );
}

#[test]
fn test_audit_reports_a_roster_count_mismatch() {
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    let king = board.piece_id_at(E1).unwrap();
    board.set_occupant(E4, Some(king));
    assert_eq!(
        Err(BoardError::RosterCountMismatch {
            color: Color::White,
            on_board: 2,
            in_roster: 1
        }),
        board.audit()
    );
}

#[test]
fn test_placements_round_trip() {
    let board = Board::starting_position();
    let rebuilt = Board::from_placements(board.placements()).unwrap();
    for coordinate in Coordinate::all() {
        assert_eq!(
            board.piece_at(coordinate).map(|p| (p.kind(), p.color())),
            rebuilt.piece_at(coordinate).map(|p| (p.kind(), p.color()))
        );
    }
}
