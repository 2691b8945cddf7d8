use super::super::{
    bishop_attacks, castle_side, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
    Bitboard, Board, Color, Move, MoveKind, MoveList, Piece, Square,
};

impl Board {
    pub(crate) fn generate_king_moves(&self, moves: &mut MoveList, targets: Bitboard) {
        let from = self.king_square(self.side_to_move);
        self.push_piece_moves(moves, Piece::King, from, king_attacks(from) & targets);
    }

    /// Castles whose right is held, whose spacing squares are empty and whose king
    /// path (start square included) is not attacked.
    pub(crate) fn generate_castles(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let them = us.opponent();
        for kingside in [true, false] {
            let side = castle_side(us, kingside);
            if self.castling_rights & side.right == 0 {
                continue;
            }
            if (self.all_occupied & side.spacing).is_not_empty() {
                continue;
            }
            if side.king_path.iter().any(|&sq| self.is_attacked(sq, them)) {
                continue;
            }
            let kind = if kingside {
                MoveKind::ShortCastle
            } else {
                MoveKind::LongCastle
            };
            moves.push(Move::new(side.king_from, side.king_to, kind, Piece::King, us, false));
        }
    }

    /// Whether any piece of `by` attacks `sq`
    #[must_use]
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        let occ = self.all_occupied;
        let queens = self.pieces(by, Piece::Queen);
        (pawn_attacks(by.opponent(), sq) & self.pieces(by, Piece::Pawn)).is_not_empty()
            || (knight_attacks(sq) & self.pieces(by, Piece::Knight)).is_not_empty()
            || (king_attacks(sq) & self.pieces(by, Piece::King)).is_not_empty()
            || (bishop_attacks(sq, occ) & (self.pieces(by, Piece::Bishop) | queens))
                .is_not_empty()
            || (rook_attacks(sq, occ) & (self.pieces(by, Piece::Rook) | queens)).is_not_empty()
    }

    #[must_use]
    pub fn is_in_check(&self, side: Color) -> bool {
        self.is_attacked(self.king_square(side), side.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str) -> MoveList {
        let board = Board::from_fen(fen).unwrap();
        let mut moves = MoveList::new();
        board.generate_castles(&mut moves);
        moves
    }

    #[test]
    fn test_both_castles_available() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").len(), 2);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").len(), 2);
    }

    #[test]
    fn test_no_castle_through_attack() {
        // Black rook on f8 covers f1
        let moves = castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].kind(), MoveKind::LongCastle);
    }

    #[test]
    fn test_no_castle_out_of_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn test_long_castle_only_needs_b_file_empty() {
        // b1 attacked but not on the king path
        let moves = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(moves.len(), 1);
        assert!(castles("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").is_empty());
    }

    #[test]
    fn test_is_attacked_by_pawn() {
        let board = Board::new();
        assert!(board.is_attacked("d3".parse().unwrap(), Color::White));
        assert!(!board.is_attacked("d4".parse().unwrap(), Color::White));
        assert!(board.is_attacked("f6".parse().unwrap(), Color::Black));
    }
}
