//! Move generation.
//!
//! Generators produce pseudo-legal moves: everything but the "own king left in
//! check" test, which `filter_moves` applies by trial make/unmake. Castles are the
//! exception; their attacked-square conditions are checked during generation.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Bitboard, Board, Move, MoveKind, MoveList, Piece, Square};

impl Board {
    /// Emit one move per destination in `targets` for a non-pawn piece on `from`.
    #[inline]
    pub(crate) fn push_piece_moves(
        &self,
        moves: &mut MoveList,
        piece: Piece,
        from: Square,
        targets: Bitboard,
    ) {
        let us = self.side_to_move;
        let enemies = self.all(us.opponent());
        for to in targets.iter() {
            moves.push(Move::new(
                from,
                to,
                MoveKind::Normal,
                piece,
                us,
                enemies.contains(to),
            ));
        }
    }

    /// All pseudo-legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let targets = !self.all(self.side_to_move);
        self.generate_pawn_moves(&mut moves, false);
        self.generate_knight_moves(&mut moves, targets);
        self.generate_slider_moves(&mut moves, targets);
        self.generate_king_moves(&mut moves, targets);
        self.generate_castles(&mut moves);
        moves
    }

    /// Pseudo-legal captures: moves onto an enemy piece (capturing promotions
    /// included) and en passant. Quiet promotions are not captures.
    #[must_use]
    pub fn generate_captures(&self) -> MoveList {
        let mut moves = MoveList::new();
        let targets = self.all(self.side_to_move.opponent());
        self.generate_pawn_moves(&mut moves, true);
        self.generate_knight_moves(&mut moves, targets);
        self.generate_slider_moves(&mut moves, targets);
        self.generate_king_moves(&mut moves, targets);
        moves
    }

    /// Drop moves that leave the mover's king attacked. Survivors are not kept in
    /// their original order.
    pub fn filter_moves(&mut self, moves: &mut MoveList) {
        let us = self.side_to_move;
        moves.retain(|mv| {
            self.make_move(mv);
            let legal = !self.is_in_check(us);
            self.unmake_move(mv);
            legal
        });
    }

    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        let mut moves = self.generate_moves();
        self.filter_moves(&mut moves);
        moves
    }

    #[must_use]
    pub fn legal_captures(&mut self) -> MoveList {
        let mut moves = self.generate_captures();
        self.filter_moves(&mut moves);
        moves
    }

    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    /// Number of leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for &mv in moves.iter() {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv);
        }
        nodes
    }

    /// Perft split by root move, in generation order after filtering.
    pub fn divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.legal_moves();
        moves
            .iter()
            .map(|&mv| {
                self.make_move(mv);
                let nodes = if depth <= 1 { 1 } else { self.perft(depth - 1) };
                self.unmake_move(mv);
                (mv, nodes)
            })
            .collect()
    }
}
