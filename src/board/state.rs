use std::fmt;

use super::eval::piece_score;
use super::{pawn_attacks, Bitboard, Color, Piece, Square, ALL_CASTLING_RIGHTS, MAX_PLY};
use crate::zobrist::ZOBRIST;

/// Capacity of the undo log. Search never nests deeper than `MAX_PLY`
/// plies, null moves included; the rest is headroom for callers.
pub(crate) const UNDO_CAPACITY: usize = 2 * MAX_PLY;

/// Everything `unmake_move` cannot recompute.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Undo {
    pub(crate) captured: Option<Piece>,
    pub(crate) castling_rights: u8,
    pub(crate) en_passant: Option<Square>,
    pub(crate) hash: u64,
    pub(crate) halfmove_clock: u32,
}

/// Fixed-capacity LIFO of [`Undo`] records.
#[derive(Clone)]
pub(crate) struct UndoStack {
    entries: [Undo; UNDO_CAPACITY],
    len: usize,
}

impl UndoStack {
    fn new() -> Self {
        UndoStack {
            entries: [Undo::default(); UNDO_CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, undo: Undo) {
        if self.len == UNDO_CAPACITY {
            panic!("undo log overflow: more than {UNDO_CAPACITY} unreversed moves");
        }
        self.entries[self.len] = undo;
        self.len += 1;
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Undo {
        if self.len == 0 {
            panic!("unmake called with no move to undo");
        }
        self.len -= 1;
        self.entries[self.len]
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

/// A chess position: bitboards per side and piece type, a square-to-piece cache
/// kept in lockstep with them, game state flags and the undo log.
#[derive(Clone)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) piece_at: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling_rights: u8,
    pub(crate) hash: u64,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    /// Material + piece-square score per color, kept current by `put_piece`/`remove_piece`
    pub(crate) psq: [i32; 2],
    pub(crate) undo: UndoStack,
}

impl Board {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            let file = file as u8;
            board.put_piece(Color::White, piece, Square::from_index(file as usize));
            board.put_piece(Color::White, Piece::Pawn, Square::from_index(8 + file as usize));
            board.put_piece(Color::Black, Piece::Pawn, Square::from_index(48 + file as usize));
            board.put_piece(Color::Black, piece, Square::from_index(56 + file as usize));
        }
        board.castling_rights = ALL_CASTLING_RIGHTS;
        board.hash = board.compute_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            piece_at: [None; 64],
            side_to_move: Color::White,
            en_passant: None,
            castling_rights: 0,
            hash: 0,
            halfmove_clock: 0,
            fullmove_number: 1,
            psq: [0; 2],
            undo: UndoStack::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// En-passant target square, set only on the ply right after a double push
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Castling rights as a 4-bit mask (K=1, Q=2, k=4, q=8)
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> u8 {
        self.castling_rights
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of moves that can currently be unmade
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// All squares occupied by `color`
    #[inline]
    #[must_use]
    pub fn all(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn all_pieces(&self) -> Bitboard {
        self.all_occupied
    }

    /// Piece and owner on `sq`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let piece = self.piece_at[sq.index()]?;
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Some((color, piece))
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces(color, Piece::King).lsb()
    }

    /// Material of knights, bishops, rooks and queens for `color`
    #[must_use]
    pub fn non_pawn_material(&self, color: Color) -> i32 {
        [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
            .into_iter()
            .map(|p| self.pieces(color, p).popcount() as i32 * p.value())
            .sum()
    }

    #[inline]
    pub(crate) fn put_piece(&mut self, color: Color, piece: Piece, sq: Square) {
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupied[color.index()] |= bit;
        self.all_occupied |= bit;
        self.piece_at[sq.index()] = Some(piece);
        self.psq[color.index()] += piece_score(color, piece, sq);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, color: Color, piece: Piece, sq: Square) {
        debug_assert_eq!(self.piece_at[sq.index()], Some(piece), "cache mismatch on {sq}");
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] &= !bit;
        self.occupied[color.index()] &= !bit;
        self.all_occupied &= !bit;
        self.piece_at[sq.index()] = None;
        self.psq[color.index()] -= piece_score(color, piece, sq);
    }

    /// Key of the en-passant file, or 0 when the side to move has no pawn that
    /// could capture onto the target square.
    #[inline]
    pub(crate) fn en_passant_key(&self) -> u64 {
        match self.en_passant {
            Some(ep) => {
                let us = self.side_to_move;
                let capturers = pawn_attacks(us.opponent(), ep) & self.pieces(us, Piece::Pawn);
                if capturers.is_empty() {
                    0
                } else {
                    ZOBRIST.en_passant(ep)
                }
            }
            None => 0,
        }
    }

    /// Hash of the current position computed from scratch
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hash = 0u64;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces(color, piece).iter() {
                    hash ^= ZOBRIST.piece(color, piece, sq);
                }
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move();
        }
        hash ^= ZOBRIST.castling(self.castling_rights);
        hash ^ self.en_passant_key()
    }

    /// Full-board consistency scan: every occupied square is owned by exactly one
    /// (color, piece) bitboard, the unions match, and the square cache agrees.
    pub fn verify_integrity(&self) -> Result<(), String> {
        let mut seen = Bitboard::EMPTY;
        for color in Color::BOTH {
            let mut union = Bitboard::EMPTY;
            for piece in Piece::ALL {
                let bb = self.pieces(color, piece);
                if (seen & bb).is_not_empty() {
                    return Err(format!("{color} {piece:?} overlaps another piece"));
                }
                seen |= bb;
                union |= bb;
                for sq in bb.iter() {
                    if self.piece_at[sq.index()] != Some(piece) {
                        return Err(format!(
                            "cache on {sq} holds {:?}, bitboards say {piece:?}",
                            self.piece_at[sq.index()]
                        ));
                    }
                }
            }
            if union != self.all(color) {
                return Err(format!("{color} occupancy does not match its pieces"));
            }
        }
        if seen != self.all_occupied {
            return Err("total occupancy does not match pieces".to_string());
        }
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if self.piece_at[idx].is_some() != seen.contains(sq) {
                return Err(format!("cache on {sq} disagrees with occupancy"));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

/// ASCII diagram, rank 8 at the top, White in uppercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let sq = Square::from_index((rank * 8 + file) as usize);
                let c = match self.piece_at(sq) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
