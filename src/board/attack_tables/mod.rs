//! Attack tables for move generation.
//!
//! Leaper attacks (knight, king, pawn) are plain per-square lookups. Sliding attacks
//! (bishop, rook) come from magic-indexed tables; a queen is the union of both.
//! All tables are immutable process-wide data built on first use.

mod magic;
mod tables;

use magic::{BISHOP_TABLE, ROOK_TABLE};
use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use super::{Bitboard, Color, Square};

#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.index()])
}

#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.index()])
}

/// Squares a pawn of `color` standing on `sq` attacks
#[inline]
pub(crate) fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS[color.index()][sq.index()])
}

#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    Bitboard(BISHOP_TABLE.attack(sq.index(), occupancy.0))
}

#[inline]
pub(crate) fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    Bitboard(ROOK_TABLE.attack(sq.index(), occupancy.0))
}

#[inline]
pub(crate) fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}

/// Force table construction so the first search does not pay for it.
pub fn init() {
    once_cell::sync::Lazy::force(&KNIGHT_ATTACKS);
    once_cell::sync::Lazy::force(&KING_ATTACKS);
    once_cell::sync::Lazy::force(&PAWN_ATTACKS);
    once_cell::sync::Lazy::force(&BISHOP_TABLE);
    once_cell::sync::Lazy::force(&ROOK_TABLE);
}
