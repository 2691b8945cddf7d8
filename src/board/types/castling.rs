//! Castling-right bits and the squares each castle touches.

use super::bitboard::Bitboard;
use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Geometry of one castle: which right it needs and where king and rook travel.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CastleSide {
    pub(crate) right: u8,
    pub(crate) king_from: Square,
    pub(crate) king_to: Square,
    pub(crate) rook_from: Square,
    pub(crate) rook_to: Square,
    /// Squares that must be empty
    pub(crate) spacing: Bitboard,
    /// Squares the king stands on, crosses or lands on
    pub(crate) king_path: [Square; 3],
}

const fn bb(squares: &[Square]) -> Bitboard {
    let mut bits = 0u64;
    let mut i = 0;
    while i < squares.len() {
        bits |= 1u64 << squares[i].index();
        i += 1;
    }
    Bitboard(bits)
}

static WHITE_SHORT: CastleSide = CastleSide {
    right: CASTLE_WHITE_K,
    king_from: Square::E1,
    king_to: Square::G1,
    rook_from: Square::H1,
    rook_to: Square::F1,
    spacing: bb(&[Square::F1, Square::G1]),
    king_path: [Square::E1, Square::F1, Square::G1],
};

static WHITE_LONG: CastleSide = CastleSide {
    right: CASTLE_WHITE_Q,
    king_from: Square::E1,
    king_to: Square::C1,
    rook_from: Square::A1,
    rook_to: Square::D1,
    spacing: bb(&[Square::B1, Square::C1, Square::D1]),
    king_path: [Square::E1, Square::D1, Square::C1],
};

static BLACK_SHORT: CastleSide = CastleSide {
    right: CASTLE_BLACK_K,
    king_from: Square::E8,
    king_to: Square::G8,
    rook_from: Square::H8,
    rook_to: Square::F8,
    spacing: bb(&[Square::F8, Square::G8]),
    king_path: [Square::E8, Square::F8, Square::G8],
};

static BLACK_LONG: CastleSide = CastleSide {
    right: CASTLE_BLACK_Q,
    king_from: Square::E8,
    king_to: Square::C8,
    rook_from: Square::A8,
    rook_to: Square::D8,
    spacing: bb(&[Square::B8, Square::C8, Square::D8]),
    king_path: [Square::E8, Square::D8, Square::C8],
};

#[inline]
pub(crate) fn castle_side(color: Color, kingside: bool) -> &'static CastleSide {
    match (color, kingside) {
        (Color::White, true) => &WHITE_SHORT,
        (Color::White, false) => &WHITE_LONG,
        (Color::Black, true) => &BLACK_SHORT,
        (Color::Black, false) => &BLACK_LONG,
    }
}

/// Right lost when a rook of `color` leaves or is captured on `sq`.
///
/// Only the four rook home squares map to a right.
#[inline]
pub(crate) const fn rook_home_right(color: Color, sq: Square) -> u8 {
    match (color, sq.index()) {
        (Color::White, 0) => CASTLE_WHITE_Q,
        (Color::White, 7) => CASTLE_WHITE_K,
        (Color::Black, 56) => CASTLE_BLACK_Q,
        (Color::Black, 63) => CASTLE_BLACK_K,
        _ => 0,
    }
}

/// Both rights of one color
#[inline]
pub(crate) const fn color_rights(color: Color) -> u8 {
    match color {
        Color::White => CASTLE_WHITE_K | CASTLE_WHITE_Q,
        Color::Black => CASTLE_BLACK_K | CASTLE_BLACK_Q,
    }
}

pub(crate) fn castle_bit(c: char) -> Option<u8> {
    match c {
        'K' => Some(CASTLE_WHITE_K),
        'Q' => Some(CASTLE_WHITE_Q),
        'k' => Some(CASTLE_BLACK_K),
        'q' => Some(CASTLE_BLACK_Q),
        _ => None,
    }
}
