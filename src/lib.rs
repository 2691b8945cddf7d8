//! Bitboard chess engine: magic-bitboard move generation, incremental Zobrist
//! hashing, piece-square evaluation and an iterative-deepening alpha-beta search.

pub mod board;
pub mod tt;
pub(crate) mod zobrist;

pub use board::{
    find_best_move, Board, Color, FenError, Move, MoveParseError, Piece, SanError, SearchParams,
    SearchResult, Square, START_FEN,
};
pub use tt::TranspositionTable;
