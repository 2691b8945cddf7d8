use super::super::{pawn_attacks, Board, Move, MoveKind, MoveList, Piece, Square};
use super::super::PROMOTION_PIECES;

impl Board {
    /// Pawn pushes, double pushes, captures, en passant and promotions.
    /// With `captures_only`, quiet pushes (promotions included) are skipped.
    pub(crate) fn generate_pawn_moves(&self, moves: &mut MoveList, captures_only: bool) {
        let us = self.side_to_move;
        let enemies = self.all(us.opponent());
        let empty = !self.all_occupied;

        for from in self.pieces(us, Piece::Pawn).iter() {
            if !captures_only {
                let one = from.offset(us.pawn_push());
                if empty.contains(one) {
                    self.push_pawn_move(moves, from, one, false);
                    if from.rank() == us.pawn_start_rank() {
                        let two = one.offset(us.pawn_push());
                        if empty.contains(two) {
                            moves.push(Move::new(
                                from,
                                two,
                                MoveKind::DoublePush,
                                Piece::Pawn,
                                us,
                                false,
                            ));
                        }
                    }
                }
            }

            let attacks = pawn_attacks(us, from);
            for to in (attacks & enemies).iter() {
                self.push_pawn_move(moves, from, to, true);
            }
            if let Some(ep) = self.en_passant {
                if attacks.contains(ep) {
                    moves.push(Move::new(from, ep, MoveKind::EnPassant, Piece::Pawn, us, true));
                }
            }
        }
    }

    fn push_pawn_move(&self, moves: &mut MoveList, from: Square, to: Square, capture: bool) {
        let us = self.side_to_move;
        if to.rank() == us.promotion_rank() {
            for promo in PROMOTION_PIECES {
                moves.push(Move::new(from, to, MoveKind::Promotion, promo, us, capture));
            }
        } else {
            moves.push(Move::new(from, to, MoveKind::Normal, Piece::Pawn, us, capture));
        }
    }
}
