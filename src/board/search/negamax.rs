//! Core search implementation.
//!
//! This module implements:
//! - Iterative deepening with aspiration windows
//! - Alpha-beta negamax with transposition table cutoffs
//! - Null move pruning
//! - Late move reductions (LMR)
//! - Futility pruning at frontier nodes
//! - Quiescence search
//! - Move ordering (TT move, killers, MVV-LVA, history)

mod iterative;
mod pruning;
mod quiescence;

use crate::tt::BoundType;

use super::constants::{INFINITY, LMR_MIN_DEPTH, LMR_MIN_INDEX, MATE_SCORE, MATE_THRESHOLD};
use super::{SearchParams, SearchStats, SearchTables};
use crate::board::{Board, Move, MAX_PLY};

/// Search context for a single search call
pub(crate) struct SearchContext<'a> {
    pub(crate) board: &'a mut Board,
    pub(crate) tables: &'a mut SearchTables,
    pub(crate) params: &'a SearchParams,
    pub(crate) stats: SearchStats,
}

/// Mate scores are stored relative to the node, not the root
#[inline]
pub(crate) fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply as i32
    } else if score <= -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

#[inline]
pub(crate) fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

/// Bound of a fail-soft result relative to the window it was searched with
#[inline]
fn classify(score: i32, alpha: i32, beta: i32) -> BoundType {
    if score <= alpha {
        BoundType::UpperBound
    } else if score >= beta {
        BoundType::LowerBound
    } else {
        BoundType::Exact
    }
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(
        board: &'a mut Board,
        tables: &'a mut SearchTables,
        params: &'a SearchParams,
    ) -> Self {
        SearchContext {
            board,
            tables,
            params,
            stats: SearchStats::default(),
        }
    }

    /// Depth-limited alpha-beta with every enabled pruning technique.
    /// Fail-soft: the result may lie outside `(alpha, beta)`.
    pub(crate) fn pruned_negamax(
        &mut self,
        depth: u32,
        ply: usize,
        mut alpha: i32,
        mut beta: i32,
        allow_null: bool,
    ) -> i32 {
        if depth == 0 {
            return self.quiescence(ply, alpha, beta);
        }
        self.stats.nodes += 1;
        if ply >= MAX_PLY {
            return self.board.eval();
        }

        let original_alpha = alpha;
        let original_beta = beta;
        let hash = self.board.hash();

        let mut tt_move = None;
        if let Some(entry) = self.tables.tt.probe(hash) {
            self.stats.tt_hits += 1;
            tt_move = entry.best_move;
            let stored_depth = u32::from(entry.depth);
            let usable = if self.params.deeper_tt_cutoffs {
                stored_depth >= depth
            } else {
                stored_depth == depth
            };
            if usable {
                let score = score_from_tt(i32::from(entry.score), ply);
                match entry.bound {
                    BoundType::Exact => {
                        self.stats.tt_cutoffs += 1;
                        return score;
                    }
                    BoundType::LowerBound => alpha = alpha.max(score),
                    BoundType::UpperBound => beta = beta.min(score),
                }
                if alpha >= beta {
                    self.stats.tt_cutoffs += 1;
                    return score;
                }
            }
        }

        let us = self.board.side_to_move();
        let in_check = self.board.is_in_check(us);

        if allow_null {
            if let Some(score) = self.try_null_move(depth, ply, beta, in_check) {
                self.tables.tt.store(
                    hash,
                    depth,
                    score_to_tt(score, ply),
                    BoundType::LowerBound,
                    None,
                );
                return score;
            }
        }

        let moves = self.board.legal_moves();
        if moves.is_empty() {
            return if in_check { -MATE_SCORE + ply as i32 } else { 0 };
        }

        let futility_base = self.futility_base(depth, alpha, in_check);
        let mut ordered = self.tables.order_moves(self.board, moves.as_slice(), tt_move, ply);

        let mut best_score = -INFINITY;
        let mut best_move = None;
        let mut index = 0usize;

        while let Some(scored) = ordered.pick_best() {
            let mv = scored.mv;
            let move_index = index;
            index += 1;

            self.board.make_move(mv);
            let gives_check = self.board.is_in_check(self.board.side_to_move());

            if let Some(bound) = futility_base {
                if mv.is_quiet() && !gives_check {
                    self.board.unmake_move(mv);
                    self.stats.futility_prunes += 1;
                    best_score = best_score.max(bound);
                    continue;
                }
            }

            let reduction = self.lmr_reduction(depth, move_index, mv, in_check, gives_check);
            let score = if reduction > 0 {
                let reduced =
                    -self.pruned_negamax(depth - 1 - reduction, ply + 1, -alpha - 1, -alpha, true);
                if reduced > alpha {
                    self.stats.lmr_researches += 1;
                    -self.pruned_negamax(depth - 1, ply + 1, -beta, -alpha, true)
                } else {
                    reduced
                }
            } else {
                -self.pruned_negamax(depth - 1, ply + 1, -beta, -alpha, true)
            };
            self.board.unmake_move(mv);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                if mv.is_quiet() {
                    self.tables.killers.update(ply, mv);
                    self.tables.history.update(mv, depth);
                }
                break;
            }
        }

        let bound = classify(best_score, original_alpha, original_beta);
        self.tables
            .tt
            .store(hash, depth, score_to_tt(best_score, ply), bound, best_move);
        best_score
    }

    /// Late move reduction for the move at `index` in search order
    fn lmr_reduction(
        &self,
        depth: u32,
        index: usize,
        mv: Move,
        in_check: bool,
        gives_check: bool,
    ) -> u32 {
        if !self.params.late_move_reductions
            || depth < LMR_MIN_DEPTH
            || index < LMR_MIN_INDEX
            || in_check
            || gives_check
            || !mv.is_quiet()
        {
            return 0;
        }
        if depth >= 6 && index >= 6 {
            2
        } else {
            1
        }
    }

    /// Plain fail-soft alpha-beta over legal moves in generation order, with
    /// quiescence at the leaves. Used as the reference for the pruned search.
    pub(crate) fn negamax(&mut self, depth: u32, ply: usize, mut alpha: i32, beta: i32) -> i32 {
        if depth == 0 {
            return self.quiescence(ply, alpha, beta);
        }
        self.stats.nodes += 1;
        if ply >= MAX_PLY {
            return self.board.eval();
        }

        let moves = self.board.legal_moves();
        if moves.is_empty() {
            let us = self.board.side_to_move();
            return if self.board.is_in_check(us) {
                -MATE_SCORE + ply as i32
            } else {
                0
            };
        }

        let mut best_score = -INFINITY;
        for &mv in moves.iter() {
            self.board.make_move(mv);
            let score = -self.negamax(depth - 1, ply + 1, -beta, -alpha);
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
