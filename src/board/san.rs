//! Short algebraic move labels.
//!
//! Labels look like "e4", "Nbd7", "exd5", "R1a3", "e8=Q#" or "O-O". A piece
//! letter is added for non-pawns, then the source file (or rank, if the file
//! is shared) when another piece of the same type in the list reaches the same
//! destination.

use super::error::SanError;
use super::{Board, Move, MoveKind, Piece};

impl Board {
    /// Label every move in `moves`, which must all be legal in this position.
    /// Disambiguation only considers the moves passed in.
    pub fn name_moves(&mut self, moves: &[Move]) -> Vec<String> {
        moves
            .iter()
            .map(|&mv| {
                let mut name = self.base_name(mv, moves);
                self.make_move(mv);
                if self.is_in_check(self.side_to_move) {
                    let mated = self.legal_moves().is_empty();
                    name.push(if mated { '#' } else { '+' });
                }
                self.unmake_move(mv);
                name
            })
            .collect()
    }

    /// Find the legal move with the given label. A trailing `+` or `#` is optional.
    pub fn move_from_name(&mut self, name: &str) -> Result<Move, SanError> {
        let wanted = name.trim().trim_end_matches(['+', '#']);
        if wanted.is_empty() {
            return Err(SanError::Empty);
        }
        let legal = self.legal_moves();
        legal
            .iter()
            .copied()
            .find(|&mv| self.base_name(mv, legal.as_slice()) == wanted)
            .ok_or_else(|| SanError::NoMatchingMove {
                name: name.to_string(),
            })
    }

    /// Label without the check suffix.
    fn base_name(&self, mv: Move, context: &[Move]) -> String {
        match mv.kind() {
            MoveKind::ShortCastle => return "O-O".to_string(),
            MoveKind::LongCastle => return "O-O-O".to_string(),
            _ => {}
        }

        let from = mv.from();
        let piece = mv.moving_piece();
        let mut name = String::new();

        if piece == Piece::Pawn {
            if mv.is_capture() {
                name.push(from.file_char());
            }
        } else {
            name.push(piece.to_char().to_ascii_uppercase());
            let rivals: Vec<Move> = context
                .iter()
                .copied()
                .filter(|m| m.to() == mv.to() && m.moving_piece() == piece && m.from() != from)
                .collect();
            if !rivals.is_empty() {
                let shares_file = rivals.iter().any(|m| m.from().file() == from.file());
                let shares_rank = rivals.iter().any(|m| m.from().rank() == from.rank());
                if !shares_file {
                    name.push(from.file_char());
                } else if !shares_rank {
                    name.push(from.rank_char());
                } else {
                    name.push(from.file_char());
                    name.push(from.rank_char());
                }
            }
        }

        if mv.is_capture() {
            name.push('x');
        }
        name.push_str(&mv.to().to_string());
        if let Some(promo) = mv.promotion() {
            name.push('=');
            name.push(promo.to_char().to_ascii_uppercase());
        }
        name
    }
}
