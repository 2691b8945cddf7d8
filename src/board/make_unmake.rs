//! Reversible move application.
//!
//! `make_move` pushes one record onto the undo log and `unmake_move` pops it, so
//! calls must pair up in strict LIFO order. The Zobrist hash is updated
//! incrementally on make and restored from the log on unmake.

use super::state::Undo;
use super::{castle_side, color_rights, rook_home_right, Board, Color, Move, MoveKind, Piece};
use crate::zobrist::ZOBRIST;

impl Board {
    /// Play `mv` for the side to move. `mv` must come from this position's generator.
    pub fn make_move(&mut self, mv: Move) {
        let us = self.side_to_move;
        let them = us.opponent();
        debug_assert_eq!(mv.side(), us, "move {mv} is not for the side to move");

        let from = mv.from();
        let to = mv.to();
        let moving = mv.moving_piece();
        let arriving = mv.piece();

        let captured = mv
            .captured_square()
            .and_then(|sq| self.piece_at[sq.index()].map(|piece| (sq, piece)));

        self.undo.push(Undo {
            captured: captured.map(|(_, piece)| piece),
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            hash: self.hash,
            halfmove_clock: self.halfmove_clock,
        });

        let mut hash = self.hash ^ self.en_passant_key();
        let old_rights = self.castling_rights;
        let mut rights = old_rights;

        if let Some((sq, piece)) = captured {
            self.remove_piece(them, piece, sq);
            hash ^= ZOBRIST.piece(them, piece, sq);
            if piece == Piece::Rook {
                rights &= !rook_home_right(them, sq);
            }
        }

        self.remove_piece(us, moving, from);
        self.put_piece(us, arriving, to);
        hash ^= ZOBRIST.piece(us, moving, from) ^ ZOBRIST.piece(us, arriving, to);

        match mv.kind() {
            MoveKind::ShortCastle | MoveKind::LongCastle => {
                let side = castle_side(us, mv.kind() == MoveKind::ShortCastle);
                self.remove_piece(us, Piece::Rook, side.rook_from);
                self.put_piece(us, Piece::Rook, side.rook_to);
                hash ^= ZOBRIST.piece(us, Piece::Rook, side.rook_from)
                    ^ ZOBRIST.piece(us, Piece::Rook, side.rook_to);
            }
            _ => {}
        }

        match moving {
            Piece::King => rights &= !color_rights(us),
            Piece::Rook => rights &= !rook_home_right(us, from),
            _ => {}
        }
        if rights != old_rights {
            hash ^= ZOBRIST.castling(old_rights) ^ ZOBRIST.castling(rights);
            self.castling_rights = rights;
        }

        self.en_passant = if mv.kind() == MoveKind::DoublePush {
            Some(from.offset(us.pawn_push()))
        } else {
            None
        };

        if moving == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = them;
        hash ^= ZOBRIST.black_to_move();
        self.hash = hash ^ self.en_passant_key();
    }

    /// Take back `mv`, which must be the last move made.
    pub fn unmake_move(&mut self, mv: Move) {
        let undo = self.undo.pop();
        let us = self.side_to_move.opponent();
        let them = self.side_to_move;
        debug_assert_eq!(mv.side(), us, "unmake of {mv} out of order");

        self.side_to_move = us;
        if us == Color::Black {
            self.fullmove_number -= 1;
        }

        if mv.is_castle() {
            let side = castle_side(us, mv.kind() == MoveKind::ShortCastle);
            self.remove_piece(us, Piece::Rook, side.rook_to);
            self.put_piece(us, Piece::Rook, side.rook_from);
        }

        self.remove_piece(us, mv.piece(), mv.to());
        self.put_piece(us, mv.moving_piece(), mv.from());

        if let (Some(piece), Some(sq)) = (undo.captured, mv.captured_square()) {
            self.put_piece(them, piece, sq);
        }

        self.castling_rights = undo.castling_rights;
        self.en_passant = undo.en_passant;
        self.hash = undo.hash;
        self.halfmove_clock = undo.halfmove_clock;
    }

    /// Pass the turn without moving. Clears the en-passant square; castling rights stay.
    pub fn make_null_move(&mut self) {
        self.undo.push(Undo {
            captured: None,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            hash: self.hash,
            halfmove_clock: self.halfmove_clock,
        });
        let mut hash = self.hash ^ self.en_passant_key();
        self.en_passant = None;
        self.halfmove_clock += 1;
        self.side_to_move = self.side_to_move.opponent();
        hash ^= ZOBRIST.black_to_move();
        self.hash = hash;
    }

    pub fn unmake_null_move(&mut self) {
        let undo = self.undo.pop();
        self.side_to_move = self.side_to_move.opponent();
        self.en_passant = undo.en_passant;
        self.hash = undo.hash;
        self.halfmove_clock = undo.halfmove_clock;
        self.castling_rights = undo.castling_rights;
    }

    /// Make `mv` permanently: the undo log is cleared, so earlier moves can no
    /// longer be taken back. Lets a game run past the log's capacity.
    pub fn apply_move(&mut self, mv: Move) {
        self.make_move(mv);
        self.undo.clear();
    }
}
