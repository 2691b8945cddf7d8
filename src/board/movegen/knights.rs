use super::super::{knight_attacks, Bitboard, Board, MoveList, Piece};

impl Board {
    pub(crate) fn generate_knight_moves(&self, moves: &mut MoveList, targets: Bitboard) {
        for from in self.pieces(self.side_to_move, Piece::Knight).iter() {
            self.push_piece_moves(moves, Piece::Knight, from, knight_attacks(from) & targets);
        }
    }
}
