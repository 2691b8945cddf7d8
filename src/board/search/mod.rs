//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening with aspiration windows
//! - Alpha-beta search with null move pruning, LMR and futility pruning
//! - Quiescence search with stand-pat
//! - Move ordering (TT move, killers, MVV-LVA, history)
//! - Transposition table for move ordering and cutoffs
//!
//! All mutable search state (TT, killers, history) lives in [`SearchTables`],
//! created per search call and threaded through the recursion.

mod constants;
mod move_order;
mod negamax;
mod params;

use crate::tt::TranspositionTable;

use super::{Board, Color, Move, MAX_PLY, NULL_MOVE};
pub use constants::{INFINITY, MATE_SCORE, MATE_THRESHOLD, MAX_DEPTH};
use constants::HISTORY_MAX;
use negamax::SearchContext;
pub use params::SearchParams;

/// Outcome of [`find_best_move`]
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move of the deepest completed iteration; `None` without legal moves
    pub best_move: Option<Move>,
    /// Score of that iteration from the side to move's point of view
    pub score: i32,
    /// Deepest completed iteration
    pub depth: u32,
    /// Main search plus quiescence nodes
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Counters gathered over one search call
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
    pub tt_cutoffs: u64,
    pub beta_cutoffs: u64,
    pub null_cutoffs: u64,
    pub futility_prunes: u64,
    pub lmr_researches: u64,
}

/// Two quiet moves per ply that recently caused a beta cutoff
pub struct KillerTable {
    slots: [[Move; 2]; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[NULL_MOVE; 2]; MAX_PLY],
        }
    }

    #[must_use]
    pub fn primary(&self, ply: usize) -> Move {
        self.slots.get(ply).map_or(NULL_MOVE, |row| row[0])
    }

    #[must_use]
    pub fn secondary(&self, ply: usize) -> Move {
        self.slots.get(ply).map_or(NULL_MOVE, |row| row[1])
    }

    /// Make `mv` the primary killer, demoting the old primary. No-op if `mv`
    /// is already primary.
    pub fn update(&mut self, ply: usize, mv: Move) {
        let Some(row) = self.slots.get_mut(ply) else {
            return;
        };
        if row[0] != mv {
            row[1] = row[0];
            row[0] = mv;
        }
    }
}

/// Quiet-move cutoff counts indexed by side, moving piece and destination
pub struct HistoryTable {
    entries: [[i32; 64]; 12],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: [[0; 64]; 12],
        }
    }

    fn slot(mv: Move) -> (usize, usize) {
        let side = match mv.side() {
            Color::White => 0,
            Color::Black => 6,
        };
        (side + mv.moving_piece().index(), mv.to().index())
    }

    #[must_use]
    pub fn score(&self, mv: Move) -> i32 {
        let (row, to) = Self::slot(mv);
        self.entries[row][to]
    }

    /// Bump a move that caused a beta cutoff by depth squared, saturating at `HISTORY_MAX`
    pub fn update(&mut self, mv: Move, depth: u32) {
        let (row, to) = Self::slot(mv);
        let bonus = (depth * depth) as i32;
        let entry = &mut self.entries[row][to];
        *entry = entry.saturating_add(bonus).min(HISTORY_MAX);
    }
}

/// Per-search scratch tables
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killers: KillerTable,
    pub history: HistoryTable,
}

impl SearchTables {
    #[must_use]
    pub fn new(tt_size_mb: usize) -> Self {
        SearchTables {
            tt: TranspositionTable::new(tt_size_mb),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }
}

/// Search `root_moves` (legal moves of `board`) by iterative deepening up to
/// `max_depth` plies. The board is restored before returning.
pub fn find_best_move(
    board: &mut Board,
    root_moves: &[Move],
    max_depth: u32,
    params: &SearchParams,
) -> SearchResult {
    let mut tables = SearchTables::new(params.tt_size_mb);
    let mut ctx = SearchContext::new(board, &mut tables, params);
    ctx.iterative_deepening(root_moves, SearchParams::clamp_depth(max_depth))
}

/// Score of `board` searched `depth` plies deep by plain alpha-beta negamax
/// with quiescence at the leaves: no TT, no pruning, no ordering heuristics.
pub fn negamax_score(board: &mut Board, depth: u32) -> i32 {
    let params = SearchParams::exact();
    let mut tables = SearchTables::new(0);
    let mut ctx = SearchContext::new(board, &mut tables, &params);
    ctx.negamax(depth, 0, -INFINITY, INFINITY)
}

impl Board {
    /// Best of `moves` (the legal moves of this position) after searching
    /// `max_depth` plies with default parameters.
    pub fn best_move(&mut self, moves: &[Move], max_depth: u32) -> Option<Move> {
        find_best_move(self, moves, max_depth, &SearchParams::default()).best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn quiet(board: &mut Board, uci: &str) -> Move {
        board.parse_uci_move(uci).unwrap()
    }

    #[test]
    fn test_killer_shift() {
        let mut board = Board::new();
        let a = quiet(&mut board, "g1f3");
        let b = quiet(&mut board, "b1c3");
        let mut killers = KillerTable::new();
        killers.update(3, a);
        killers.update(3, b);
        assert_eq!(killers.primary(3), b);
        assert_eq!(killers.secondary(3), a);
        killers.update(3, b);
        assert_eq!(killers.secondary(3), a);
        assert_eq!(killers.primary(MAX_PLY + 5), NULL_MOVE);
    }

    #[test]
    fn test_history_capped() {
        let mut board = Board::new();
        let mv = quiet(&mut board, "e2e4");
        let mut history = HistoryTable::new();
        history.update(mv, 4);
        assert_eq!(history.score(mv), 16);
        for _ in 0..1000 {
            history.update(mv, 30);
        }
        assert_eq!(history.score(mv), HISTORY_MAX);
        let other = quiet(&mut board, "d2d4");
        assert_eq!(history.score(other), 0);
    }

    #[test]
    fn test_best_move_without_moves() {
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let result = find_best_move(&mut board, &[], 3, &SearchParams::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_best_move_takes_hanging_queen() {
        let mut board = Board::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
        let moves = board.legal_moves();
        let mv = board.best_move(moves.as_slice(), 3).unwrap();
        assert_eq!(mv.to(), "d5".parse::<Square>().unwrap());
        assert_eq!(board.undo_depth(), 0);
    }
}
