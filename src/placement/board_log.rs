use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::board::color::Color;
use crate::board::Board;

use super::{encode_placement, HEADER_PREFIX};

/// Append-only record of the positions of a game. Each entry is a header
/// naming the side that just moved followed by the encoded placement, so the
/// whole file can be fed back to `parse_placement` to resume from the last
/// position.
#[derive(Clone, Debug)]
pub struct BoardLog {
    path: PathBuf,
}

impl BoardLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, board: &Board, last_mover: Color) -> io::Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry(board, last_mover, timestamp).as_bytes())
    }
}

pub(crate) fn entry(board: &Board, last_mover: Color, timestamp: u64) -> String {
    let mover = match last_mover {
        Color::White => "WHITE",
        Color::Black => "BLACK",
    };
    format!(
        "{} {}, last move made by {} {}\n{}",
        HEADER_PREFIX,
        timestamp,
        mover,
        HEADER_PREFIX,
        encode_placement(board)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coordinate::*;
    use crate::chess_move::Move;
    use crate::placement::read_placement_file;
    use std::fs;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chess4f-{}-{}.log", name, std::process::id()))
    }

    #[test]
    fn test_entry_header() {
        let board = Board::starting_position();
        let text = entry(&board, Color::Black, 1700000000);
        let mut lines = text.lines();
        assert_eq!(
            Some("=== 1700000000, last move made by BLACK ==="),
            lines.next()
        );
        assert_eq!(Some("wPa2"), lines.next());
    }

    #[test]
    fn test_appended_log_resumes_from_last_entry() {
        let path = scratch_path("resume");
        let _ = fs::remove_file(&path);
        let log = BoardLog::new(&path);

        let mut board = Board::starting_position();
        log.append(&board, Color::Black).unwrap();
        let pawn = board.piece_id_at(E2).unwrap();
        let _ = board.move_piece(Move::new(pawn, E4));
        log.append(&board, Color::White).unwrap();

        let resumed = read_placement_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(board.placements(), resumed.placements());
        assert!(resumed.is_empty(E2));
    }
}
