//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts of the legal move tree
//! - `make_unmake.rs` - Make/unmake restores every field
//! - `zobrist.rs` - Incremental hash equals recomputation
//! - `movegen.rs` - Capture generation and legality filtering
//! - `eval.rs` - Incremental score equals recomputation
//! - `search.rs` - Pruned search against plain negamax
//! - `fen.rs`, `naming.rs` - Position and move text round trips
//! - `edge_cases.rs` - Special positions
//! - `proptest.rs` - Property-based tests over random playouts

mod fen;
mod make_unmake;
mod naming;
mod perft;

use crate::board::{Bitboard, Board, Color, Move, Piece, Square};

pub(super) const KIWIPETE: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
pub(super) const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
pub(super) const POSITION_4: &str =
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
pub(super) const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

/// Every field of a board that make/unmake must restore.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Snapshot {
    pieces: [[Bitboard; 6]; 2],
    occupied: [Bitboard; 2],
    all_occupied: Bitboard,
    piece_at: [Option<Piece>; 64],
    side_to_move: Color,
    en_passant: Option<Square>,
    castling_rights: u8,
    hash: u64,
    halfmove_clock: u32,
    fullmove_number: u32,
    psq: [i32; 2],
    undo_depth: usize,
}

impl Snapshot {
    pub(super) fn of(board: &Board) -> Self {
        Snapshot {
            pieces: board.pieces,
            occupied: board.occupied,
            all_occupied: board.all_occupied,
            piece_at: board.piece_at,
            side_to_move: board.side_to_move,
            en_passant: board.en_passant,
            castling_rights: board.castling_rights,
            hash: board.hash,
            halfmove_clock: board.halfmove_clock,
            fullmove_number: board.fullmove_number,
            psq: board.psq,
            undo_depth: board.undo_depth(),
        }
    }
}

/// Visit every node of the legal move tree down to `depth` plies, calling
/// `check` on each one (root included) with the path that reached it.
pub(super) fn walk(
    board: &mut Board,
    depth: u32,
    path: &mut Vec<Move>,
    check: &mut impl FnMut(&mut Board, &[Move]),
) {
    check(board, path);
    if depth == 0 {
        return;
    }
    for &mv in board.legal_moves().iter() {
        board.make_move(mv);
        path.push(mv);
        walk(board, depth - 1, path, check);
        path.pop();
        board.unmake_move(mv);
    }
}

/// Path as space-separated coordinate moves, for failure messages
pub(super) fn show_path(path: &[Move]) -> String {
    path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
