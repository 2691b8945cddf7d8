use super::super::constants::{INFINITY, MATE_SCORE};
use super::super::move_order::order_captures;
use super::SearchContext;
use crate::board::MAX_PLY;

impl SearchContext<'_> {
    /// Captures-only search below the horizon. In check, every legal reply is
    /// searched and no stand-pat is allowed.
    pub(crate) fn quiescence(&mut self, ply: usize, mut alpha: i32, beta: i32) -> i32 {
        self.stats.qnodes += 1;
        if ply >= MAX_PLY {
            return self.board.eval();
        }

        let us = self.board.side_to_move();
        let in_check = self.board.is_in_check(us);

        let (moves, mut best_score) = if in_check {
            let moves = self.board.legal_moves();
            if moves.is_empty() {
                return -MATE_SCORE + ply as i32;
            }
            (moves, -INFINITY)
        } else {
            let stand_pat = self.board.eval();
            if stand_pat >= beta {
                return stand_pat;
            }
            alpha = alpha.max(stand_pat);
            (self.board.legal_captures(), stand_pat)
        };

        let mut ordered = order_captures(self.board, moves.as_slice());
        while let Some(scored) = ordered.pick_best() {
            let mv = scored.mv;
            self.board.make_move(mv);
            let score = -self.quiescence(ply + 1, -beta, -alpha);
            self.board.unmake_move(mv);

            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best_score
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{SearchParams, SearchTables};
    use super::*;
    use crate::board::Board;

    fn qsearch(fen: &str) -> i32 {
        let mut board = Board::from_fen(fen).unwrap();
        let params = SearchParams::default();
        let mut tables = SearchTables::new(1);
        let mut ctx = SearchContext::new(&mut board, &mut tables, &params);
        ctx.quiescence(0, -INFINITY, INFINITY)
    }

    #[test]
    fn test_quiet_position_stands_pat() {
        let mut board = Board::new();
        assert_eq!(qsearch(&board.to_fen()), board.eval());
        assert!(board.legal_captures().is_empty());
    }

    #[test]
    fn test_wins_hanging_queen() {
        let fen = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1";
        let board = Board::from_fen(fen).unwrap();
        assert!(qsearch(fen) > board.eval() + 800);
    }

    #[test]
    fn test_mated_in_check() {
        let fools = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
        assert_eq!(qsearch(fools), -MATE_SCORE);
    }
}
