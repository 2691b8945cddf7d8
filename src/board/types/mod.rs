//! Core chess types: pieces, colors, squares, bitboards, castling rights and moves.

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveKind, MoveList, MAX_PLY, NULL_MOVE};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::{
    castle_bit, castle_side, color_rights, rook_home_right, ALL_CASTLING_RIGHTS, CASTLE_BLACK_K,
    CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
pub(crate) use moves::ScoredMoveList;
pub(crate) use piece::PROMOTION_PIECES;
