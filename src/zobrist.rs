//! Zobrist hashing for chess positions.
//!
//! A position's key is the XOR of one constant per occupied (color, piece, square),
//! a side-to-move constant when Black moves, one constant per castling-rights mask
//! and one per en-passant file while an en-passant capture is available. Keys come
//! from a fixed seed so hashes are reproducible across runs.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece][square]
    piece_keys: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
    // castling_keys[rights mask]; each entry is the XOR of its single-right keys
    castling_keys: [u64; 16],
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move = rng.gen();

        let single: [u64; 4] = [rng.gen(), rng.gen(), rng.gen(), rng.gen()];
        let castling_keys = std::array::from_fn(|mask| {
            (0..4)
                .filter(|bit| mask & (1 << bit) != 0)
                .fold(0u64, |acc, bit| acc ^ single[bit])
        });

        let mut en_passant_keys = [0; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][sq.index()]
    }

    #[inline]
    pub(crate) fn black_to_move(&self) -> u64 {
        self.black_to_move
    }

    #[inline]
    pub(crate) fn castling(&self, rights: u8) -> u64 {
        self.castling_keys[(rights & 0xF) as usize]
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.file() as usize]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
