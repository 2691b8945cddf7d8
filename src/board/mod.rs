//! Chess board representation and game logic.
//!
//! Uses bitboards for move generation and evaluation, with an undo log so a
//! search can make and unmake moves in place. Supports the full rules of
//! movement including castling, en passant and promotions.
//!
//! # Example
//! ```
//! use blunderfish::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! let names = board.name_moves(moves.as_slice());
//! assert_eq!(moves.len(), 20);
//! assert!(names.iter().any(|n| n == "Nf3"));
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod pst;
mod san;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use attack_tables::init;
pub use error::{FenError, MoveParseError, SanError, SquareError};
pub use fen::START_FEN;
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Color, Move, MoveKind, MoveList, Piece, Square};
pub use types::{MAX_PLY, NULL_MOVE};

// Public API - search functions and configuration
pub use search::{
    find_best_move, negamax_score, SearchParams, SearchResult, SearchStats, INFINITY, MATE_SCORE,
    MATE_THRESHOLD, MAX_DEPTH,
};

// Search internals for callers who drive the tables themselves
pub use search::{HistoryTable, KillerTable, SearchTables};

pub(crate) use attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
pub(crate) use types::{
    castle_bit, castle_side, color_rights, rook_home_right, ScoredMoveList, ALL_CASTLING_RIGHTS,
    CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q, PROMOTION_PIECES,
};
