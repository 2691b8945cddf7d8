use super::super::{bishop_attacks, queen_attacks, rook_attacks, Bitboard, Board, MoveList, Piece};

impl Board {
    /// Bishop, rook and queen moves onto `targets`.
    pub(crate) fn generate_slider_moves(&self, moves: &mut MoveList, targets: Bitboard) {
        let us = self.side_to_move;
        let occ = self.all_occupied;
        for from in self.pieces(us, Piece::Bishop).iter() {
            self.push_piece_moves(moves, Piece::Bishop, from, bishop_attacks(from, occ) & targets);
        }
        for from in self.pieces(us, Piece::Rook).iter() {
            self.push_piece_moves(moves, Piece::Rook, from, rook_attacks(from, occ) & targets);
        }
        for from in self.pieces(us, Piece::Queen).iter() {
            self.push_piece_moves(moves, Piece::Queen, from, queen_attacks(from, occ) & targets);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliders_blocked_at_start() {
        let board = Board::new();
        let mut moves = MoveList::new();
        board.generate_slider_moves(&mut moves, !board.all(board.side_to_move()));
        assert!(moves.is_empty());
    }

    #[test]
    fn test_lone_queen_in_corner() {
        let board = Board::from_fen("6k1/8/8/8/8/8/8/Q6K w - - 0 1").unwrap();
        let mut moves = MoveList::new();
        board.generate_slider_moves(&mut moves, !board.all(board.side_to_move()));
        // a-file 7, first rank up to g1 6, long diagonal 7
        assert_eq!(moves.len(), 20);
    }
}
