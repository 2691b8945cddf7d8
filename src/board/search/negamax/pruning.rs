use super::super::constants::{MATE_THRESHOLD, NULL_MOVE_MATERIAL};
use super::SearchContext;

impl SearchContext<'_> {
    /// Null move pruning: give the opponent a free move and search a reduced
    /// null window. Returns the cutoff score on a fail high.
    pub(super) fn try_null_move(
        &mut self,
        depth: u32,
        ply: usize,
        beta: i32,
        in_check: bool,
    ) -> Option<i32> {
        let r = self.params.null_reduction;
        let us = self.board.side_to_move();
        if !self.params.null_move
            || in_check
            || ply == 0
            || depth <= r + 1
            || self.board.non_pawn_material(us) <= NULL_MOVE_MATERIAL
        {
            return None;
        }

        self.board.make_null_move();
        let score = -self.pruned_negamax(depth - 1 - r, ply + 1, -beta, -beta + 1, false);
        self.board.unmake_null_move();

        if score >= beta {
            self.stats.null_cutoffs += 1;
            // A null move proves nothing about mate
            return Some(if score >= MATE_THRESHOLD { beta } else { score });
        }
        None
    }

    /// Fail-soft value reported for each quiet move skipped at a frontier node,
    /// or `None` when futility pruning does not apply here.
    pub(super) fn futility_base(&self, depth: u32, alpha: i32, in_check: bool) -> Option<i32> {
        if !self.params.futility || depth != 1 || in_check {
            return None;
        }
        let bound = self.board.eval() + self.params.futility_margin;
        (bound <= alpha).then_some(bound)
    }
}
