//! Move types and move lists.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// What kind of move a [`Move`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    DoublePush,
    EnPassant,
    ShortCastle,
    LongCastle,
    Promotion,
}

impl MoveKind {
    const fn bits(self) -> u32 {
        match self {
            MoveKind::Normal => 0,
            MoveKind::DoublePush => 1,
            MoveKind::EnPassant => 2,
            MoveKind::ShortCastle => 3,
            MoveKind::LongCastle => 4,
            MoveKind::Promotion => 5,
        }
    }

    const fn from_bits(bits: u32) -> Self {
        match bits {
            1 => MoveKind::DoublePush,
            2 => MoveKind::EnPassant,
            3 => MoveKind::ShortCastle,
            4 => MoveKind::LongCastle,
            5 => MoveKind::Promotion,
            _ => MoveKind::Normal,
        }
    }
}

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const KIND_SHIFT: u32 = 12;
const PIECE_SHIFT: u32 = 15;
const SIDE_SHIFT: u32 = 18;
const CAPTURE_BIT: u32 = 1 << 19;

/// Compact packed move.
///
/// Encoding:
/// - bits 0-5:   from square
/// - bits 6-11:  to square
/// - bits 12-14: kind
/// - bits 15-17: resulting piece type (promoted type for promotions)
/// - bit 18:     moving side (1 = Black)
/// - bit 19:     captures something (en passant included)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

/// Sentinel for "no move". Never produced by the generator (from == to).
pub const NULL_MOVE: Move = Move(0);

impl Move {
    /// Raw packed value, for compact storage
    #[inline]
    pub(crate) const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn from_bits(bits: u32) -> Self {
        Move(bits)
    }

    #[inline]
    #[must_use]
    pub const fn new(
        from: Square,
        to: Square,
        kind: MoveKind,
        piece: Piece,
        side: Color,
        capture: bool,
    ) -> Self {
        let side_bit = match side {
            Color::White => 0,
            Color::Black => 1,
        };
        Move(
            ((from.index() as u32) << FROM_SHIFT)
                | ((to.index() as u32) << TO_SHIFT)
                | (kind.bits() << KIND_SHIFT)
                | ((piece.index() as u32) << PIECE_SHIFT)
                | (side_bit << SIDE_SHIFT)
                | if capture { CAPTURE_BIT } else { 0 },
        )
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index(((self.0 >> FROM_SHIFT) & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> TO_SHIFT) & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        MoveKind::from_bits((self.0 >> KIND_SHIFT) & 0x7)
    }

    /// Piece standing on the destination after the move
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        Piece::from_index(((self.0 >> PIECE_SHIFT) & 0x7) as usize)
    }

    /// Piece that leaves the origin square
    #[inline]
    #[must_use]
    pub const fn moving_piece(self) -> Piece {
        if self.is_promotion() {
            Piece::Pawn
        } else {
            self.piece()
        }
    }

    #[inline]
    #[must_use]
    pub const fn side(self) -> Color {
        if (self.0 >> SIDE_SHIFT) & 1 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// True if the move removes an enemy piece, en passant included
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.0 & CAPTURE_BIT != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind(), MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind(), MoveKind::ShortCastle | MoveKind::LongCastle)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind(), MoveKind::Promotion)
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        if self.is_promotion() {
            Some(self.piece())
        } else {
            None
        }
    }

    /// Neither a capture nor a promotion
    #[inline]
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        !self.is_capture() && !self.is_promotion()
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == NULL_MOVE.0
    }

    /// Square of the piece this move captures, if it captures
    #[inline]
    #[must_use]
    pub const fn captured_square(self) -> Option<Square> {
        if !self.is_capture() {
            None
        } else if self.is_en_passant() {
            let to = self.to();
            Some(match self.side() {
                Color::White => to.offset(-8),
                Color::Black => to.offset(8),
            })
        } else {
            Some(self.to())
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Move(null)");
        }
        write!(f, "Move({}{} {:?} {:?}", self.from(), self.to(), self.side(), self.piece())?;
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.kind() != MoveKind::Normal {
            write!(f, " {:?}", self.kind())?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`, `0000` for the null move.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// Maximum search ply tracked by per-ply tables
pub const MAX_PLY: usize = 128;

/// List of moves with a fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [NULL_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Remove the entry at `idx` by moving the last entry into its place
    #[inline]
    pub(crate) fn swap_remove(&mut self, idx: usize) -> Move {
        let mv = self.moves[idx];
        self.len -= 1;
        self.moves[idx] = self.moves[self.len];
        mv
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut i = 0;
        while i < self.len {
            if keep(self.moves[i]) {
                i += 1;
            } else {
                self.swap_remove(i);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

/// A move paired with its ordering score.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScoredMove {
    pub(crate) mv: Move,
    pub(crate) score: i32,
}

/// Fixed-size list of scored moves, consumed best-first by selection.
pub(crate) struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
    next: usize,
}

impl ScoredMoveList {
    pub(crate) fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                mv: NULL_MOVE,
                score: 0,
            }; MAX_MOVES],
            len: 0,
            next: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move, score: i32) {
        self.moves[self.len] = ScoredMove { mv, score };
        self.len += 1;
    }

    /// Selection step: swap the best remaining move to the front and return it.
    /// On equal scores the lowest remaining slot wins.
    pub(crate) fn pick_best(&mut self) -> Option<ScoredMove> {
        if self.next >= self.len {
            return None;
        }
        let mut best = self.next;
        for i in self.next + 1..self.len {
            if self.moves[i].score > self.moves[best].score {
                best = i;
            }
        }
        self.moves.swap(self.next, best);
        let picked = self.moves[self.next];
        self.next += 1;
        Some(picked)
    }
}
