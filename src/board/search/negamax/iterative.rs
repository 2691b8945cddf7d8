use std::time::Instant;

use log::{debug, trace};

use super::super::constants::{INFINITY, MATE_SCORE};
use super::super::SearchResult;
use super::{classify, score_to_tt, SearchContext};
use crate::board::Move;

impl SearchContext<'_> {
    /// Iterative deepening from depth 1 to `max_depth`, each iteration inside
    /// an aspiration window centred on the previous score.
    pub(crate) fn iterative_deepening(
        &mut self,
        root_moves: &[Move],
        max_depth: u32,
    ) -> SearchResult {
        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stats: self.stats,
        };

        if root_moves.is_empty() {
            let us = self.board.side_to_move();
            result.score = if self.board.is_in_check(us) { -MATE_SCORE } else { 0 };
            return result;
        }

        let mut order: Vec<Move> = root_moves.to_vec();
        let mut score = 0;

        for depth in 1..=max_depth {
            let (iter_score, iter_move) = if depth == 1 {
                self.search_root(depth, -INFINITY, INFINITY, &order)
            } else {
                self.aspiration(depth, score, &order)
            };
            score = iter_score;

            // Searching the previous best first keeps the next iteration's
            // windows tight
            if let Some(pos) = order.iter().position(|&m| m == iter_move) {
                order[..=pos].rotate_right(1);
            }

            result.best_move = Some(iter_move);
            result.score = score;
            result.depth = depth;
            debug!(
                "depth {depth} score {score} best {iter_move} nodes {} qnodes {}",
                self.stats.nodes, self.stats.qnodes
            );

            if let Some(deadline) = self.params.deadline {
                if Instant::now() >= deadline {
                    debug!("deadline reached after depth {depth}");
                    break;
                }
            }
        }

        result.stats = self.stats;
        result.nodes = self.stats.nodes + self.stats.qnodes;
        result
    }

    /// Re-search at the same depth with a doubled window until the score lands
    /// strictly inside it. Once the window covers every score, one more search is final.
    fn aspiration(&mut self, depth: u32, previous: i32, order: &[Move]) -> (i32, Move) {
        let mut window = self.params.aspiration_window;
        loop {
            let alpha = previous.saturating_sub(window).max(-INFINITY);
            let beta = previous.saturating_add(window).min(INFINITY);
            let (score, mv) = self.search_root(depth, alpha, beta, order);
            if (score > alpha && score < beta) || (alpha == -INFINITY && beta == INFINITY) {
                return (score, mv);
            }
            trace!(
                "depth {depth}: {} at {score}, window [{alpha}, {beta}] widens to {}",
                if score <= alpha { "fail low" } else { "fail high" },
                window.saturating_mul(2)
            );
            window = window.saturating_mul(2);
        }
    }

    /// Search every root move in `order` and return the best score and move.
    fn search_root(
        &mut self,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        order: &[Move],
    ) -> (i32, Move) {
        let original_alpha = alpha;
        let mut best_score = -INFINITY;
        let mut best_move = order[0];

        self.stats.nodes += 1;
        for &mv in order {
            self.board.make_move(mv);
            let score = -self.pruned_negamax(depth - 1, 1, -beta, -alpha, true);
            self.board.unmake_move(mv);

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        let hash = self.board.hash();
        let bound = classify(best_score, original_alpha, beta);
        self.tables
            .tt
            .store(hash, depth, score_to_tt(best_score, 0), bound, Some(best_move));
        (best_score, best_move)
    }
}
