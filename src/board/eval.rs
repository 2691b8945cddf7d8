//! Static evaluation: material plus piece-square tables.

use super::pst::PST;
use super::{Board, Color, Piece, Square};

/// Material + positional value of one piece, from its owner's point of view.
#[inline]
pub(crate) fn piece_score(color: Color, piece: Piece, sq: Square) -> i32 {
    let idx = match color {
        Color::White => sq.index(),
        Color::Black => sq.flip().index(),
    };
    piece.value() + PST[piece.index()][idx]
}

impl Board {
    /// Score in centipawns from the side to move's point of view.
    ///
    /// Reads the incrementally maintained piece-square totals; always equal to
    /// [`Board::eval_from_scratch`].
    #[inline]
    #[must_use]
    pub fn eval(&self) -> i32 {
        let white_minus_black = self.psq[Color::White.index()] - self.psq[Color::Black.index()];
        white_minus_black * self.side_to_move.sign()
    }

    /// Same score as [`Board::eval`], recomputed from the bitboards.
    #[must_use]
    pub fn eval_from_scratch(&self) -> i32 {
        let mut score = 0;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces(color, piece).iter() {
                    score += color.sign() * piece_score(color, piece, sq);
                }
            }
        }
        score * self.side_to_move.sign()
    }
}
