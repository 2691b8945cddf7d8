use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{
    castle_bit, castle_side, Bitboard, Board, Color, Move, Piece, Square, CASTLE_BLACK_K,
    CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Decode a FEN string. The halfmove and fullmove fields are optional.
    ///
    /// Besides syntax, the position must be playable: one king per side, no pawn
    /// on a back rank, castling rights backed by king and rook on their home
    /// squares, an en-passant square with the double-pushed pawn in front of it,
    /// and the side that just moved not in check.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewFields { found: parts.len() });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, parts[0])?;

        for color in Color::BOTH {
            match board.pieces(color, Piece::King).popcount() {
                0 => return Err(FenError::MissingKing { color }),
                1 => {}
                _ => return Err(FenError::TooManyKings { color }),
            }
        }
        let pawns =
            board.pieces(Color::White, Piece::Pawn) | board.pieces(Color::Black, Piece::Pawn);
        let misplaced = pawns & (Bitboard::RANK_1 | Bitboard::RANK_8);
        if misplaced.is_not_empty() {
            return Err(FenError::PawnOnBackRank {
                square: misplaced.lsb().to_string(),
            });
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = parse_castling(&board, parts[2])?;
        board.en_passant = parse_en_passant(&board, parts[3])?;

        if let Some(field) = parts.get(4) {
            board.halfmove_clock = parse_clock(field)?;
        }
        if let Some(field) = parts.get(5) {
            board.fullmove_number = parse_clock(field)?.max(1);
        }

        if board.is_in_check(board.side_to_move.opponent()) {
            return Err(FenError::OpponentInCheck);
        }

        board.hash = board.compute_hash();
        debug_assert!(board.verify_integrity().is_ok());
        Ok(board)
    }

    /// Encode the position as a six-field FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                let sq = Square::from_index((rank * 8 + file) as usize);
                match self.piece_at(sq) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.castling_rights == 0 {
            fen.push('-');
        } else {
            for (bit, c) in [
                (CASTLE_WHITE_K, 'K'),
                (CASTLE_WHITE_Q, 'Q'),
                (CASTLE_BLACK_K, 'k'),
                (CASTLE_BLACK_Q, 'q'),
            ] {
                if self.castling_rights & bit != 0 {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    /// Resolve coordinate notation (`e2e4`, `e7e8q`) against the legal moves.
    pub fn parse_uci_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if !notation.is_ascii() || !(4..=5).contains(&notation.len()) {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }
        let from: Square = notation[0..2].parse()?;
        let to: Square = notation[2..4].parse()?;
        let promotion = match notation[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(p @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves()
            .iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

fn parse_placement(board: &mut Board, field: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount { found: ranks.len() });
    }
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row;
        let mut file = 0usize;
        let mut after_count = false;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 || after_count {
                    return Err(FenError::InvalidEmptyCount {
                        rank: rank + 1,
                        char: c,
                    });
                }
                file += skip as usize;
                after_count = true;
                continue;
            }
            after_count = false;
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file >= 8 {
                return Err(FenError::BadRankLength {
                    rank: rank + 1,
                    files: file + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.put_piece(color, piece, Square::from_index(rank * 8 + file));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(())
}

fn parse_castling(board: &Board, field: &str) -> Result<u8, FenError> {
    if field == "-" {
        return Ok(0);
    }
    let mut rights = 0;
    for c in field.chars() {
        let bit = castle_bit(c).ok_or(FenError::InvalidCastling { char: c })?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let side = castle_side(color, c.eq_ignore_ascii_case(&'k'));
        let in_place = board.piece_at(side.king_from) == Some((color, Piece::King))
            && board.piece_at(side.rook_from) == Some((color, Piece::Rook));
        if !in_place {
            return Err(FenError::InvalidCastling { char: c });
        }
        rights |= bit;
    }
    Ok(rights)
}

fn parse_en_passant(board: &Board, field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq: Square = field.parse().map_err(|_| invalid())?;
    let us = board.side_to_move;
    let them = us.opponent();
    // The target sits behind a pawn of `them` that just double-pushed
    let expected_rank = if us == Color::White { 5 } else { 2 };
    if sq.rank() != expected_rank || board.piece_at(sq).is_some() {
        return Err(invalid());
    }
    let pushed = sq.offset(them.pawn_push());
    if board.piece_at(pushed) != Some((them, Piece::Pawn)) {
        return Err(invalid());
    }
    Ok(Some(sq))
}

fn parse_clock(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidClock {
        found: field.to_string(),
    })
}
