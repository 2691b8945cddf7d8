//! Move ordering utilities for search.

use super::super::{Board, Move, Piece, ScoredMoveList};
use super::constants::{CAPTURE_BASE_SCORE, KILLER1_SCORE, KILLER2_SCORE, TT_MOVE_SCORE};
use super::SearchTables;

/// Value of the capturing piece for LVA. The king counts as the most
/// expensive attacker.
fn attacker_value(piece: Piece) -> i32 {
    match piece {
        Piece::King => 1000,
        other => other.value(),
    }
}

/// MVV-LVA score, 0 for non-captures
#[must_use]
pub(crate) fn mvv_lva(board: &Board, mv: Move) -> i32 {
    let Some(victim) = mv
        .captured_square()
        .and_then(|sq| board.piece_at(sq))
        .map(|(_, piece)| piece)
    else {
        return 0;
    };
    CAPTURE_BASE_SCORE + 10 * victim.value() - attacker_value(mv.moving_piece())
}

impl SearchTables {
    /// TT move, then killers, then captures, then quiet history
    pub(crate) fn order_score(
        &self,
        board: &Board,
        mv: Move,
        tt_move: Option<Move>,
        ply: usize,
    ) -> i32 {
        if Some(mv) == tt_move {
            return TT_MOVE_SCORE;
        }
        if mv.is_capture() {
            return mvv_lva(board, mv);
        }
        if mv == self.killers.primary(ply) {
            KILLER1_SCORE
        } else if mv == self.killers.secondary(ply) {
            KILLER2_SCORE
        } else {
            self.history.score(mv)
        }
    }

    pub(crate) fn order_moves(
        &self,
        board: &Board,
        moves: &[Move],
        tt_move: Option<Move>,
        ply: usize,
    ) -> ScoredMoveList {
        let mut scored = ScoredMoveList::new();
        for &mv in moves {
            scored.push(mv, self.order_score(board, mv, tt_move, ply));
        }
        scored
    }
}

/// MVV-LVA only, for quiescence
pub(crate) fn order_captures(board: &Board, moves: &[Move]) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        scored.push(mv, mvv_lva(board, mv));
    }
    scored
}
