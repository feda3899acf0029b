use crate::move_generation::targets::pseudo_legal_targets;

use super::color::Color;
use super::piece::PieceKind;
use super::Board;

/// Cached answer to "is this side's king attacked?". Reset to `Unknown` by
/// every mutation; undo puts back whatever was cached before the move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CheckStatus {
    Unknown,
    InCheck,
    NotInCheck,
}

impl Default for CheckStatus {
    fn default() -> Self {
        CheckStatus::Unknown
    }
}

impl From<bool> for CheckStatus {
    fn from(in_check: bool) -> Self {
        if in_check {
            CheckStatus::InCheck
        } else {
            CheckStatus::NotInCheck
        }
    }
}

impl Board {
    /// Whether `color`'s king is attacked by any opposing piece. The answer is
    /// cached until the next mutation. A side without a king is never in check.
    pub fn is_under_check(&mut self, color: Color) -> bool {
        match self.check_status[color.index()] {
            CheckStatus::InCheck => true,
            CheckStatus::NotInCheck => false,
            CheckStatus::Unknown => {
                let in_check = self.king_is_attacked(color);
                self.check_status[color.index()] = in_check.into();
                in_check
            }
        }
    }

    pub fn check_status(&self, color: Color) -> CheckStatus {
        self.check_status[color.index()]
    }

    pub(crate) fn check_statuses(&self) -> [CheckStatus; 2] {
        self.check_status
    }

    pub(crate) fn restore_check_statuses(&mut self, statuses: [CheckStatus; 2]) {
        self.check_status = statuses;
    }

    pub(crate) fn invalidate_check_statuses(&mut self) {
        self.check_status = [CheckStatus::Unknown; 2];
    }

    fn king_is_attacked(&self, color: Color) -> bool {
        let king_square = match self.pieces(color).find(|p| p.kind() == PieceKind::King) {
            Some(king) => king.coordinate(),
            None => return false,
        };

        // castling targets are always empty squares, so they never reach the king
        self.pieces(color.opponent()).any(|attacker| {
            pseudo_legal_targets(self, attacker, false).contains(&king_square)
        })
    }
}
