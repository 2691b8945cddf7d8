//! Make/unmake move tests.

use super::{show_path, walk, Snapshot, KIWIPETE, POSITION_4};
use crate::board::{Board, Color, Piece, Square, MAX_PLY};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Make and unmake every legal move at every node `depth` plies deep and
/// require the board to come back bit for bit.
fn assert_restores(fen: &str, depth: u32) {
    let mut board = Board::from_fen(fen).unwrap();
    let mut path = Vec::new();
    walk(&mut board, depth, &mut path, &mut |board, path| {
        let before = Snapshot::of(board);
        for &mv in board.legal_moves().iter() {
            board.make_move(mv);
            board.unmake_move(mv);
            assert_eq!(
                Snapshot::of(board),
                before,
                "{mv} after [{}] not restored",
                show_path(path)
            );
        }
    });
}

#[test]
fn test_restore_everywhere_start() {
    assert_restores(crate::board::START_FEN, 3);
}

#[test]
fn test_restore_everywhere_kiwipete() {
    assert_restores(KIWIPETE, 2);
}

#[test]
fn test_restore_everywhere_promotions() {
    assert_restores(POSITION_4, 2);
}

#[test]
fn test_en_passant_make_unmake() {
    let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
    let mut board = Board::from_fen(fen).unwrap();
    let before = Snapshot::of(&board);
    let mv = board.parse_uci_move("e5f6").unwrap();
    assert!(mv.is_en_passant());

    board.make_move(mv);
    assert_eq!(board.piece_at(sq("f5")), None);
    assert_eq!(board.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    board.unmake_move(mv);

    assert_eq!(Snapshot::of(&board), before);
    assert_eq!(board.piece_at(sq("f5")), Some((Color::Black, Piece::Pawn)));
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let before = Snapshot::of(&board);
    let mv = board.parse_uci_move("a7a8n").unwrap();
    board.make_move(mv);
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
    board.unmake_move(mv);
    assert_eq!(Snapshot::of(&board), before);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_castle_moves_rook() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = board.parse_uci_move("e1c1").unwrap();
    board.make_move(mv);
    assert_eq!(board.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(sq("a1")), None);
    assert_eq!(board.castling_rights() & 0b0011, 0);
    board.unmake_move(mv);
    assert_eq!(board.piece_at(sq("a1")), Some((Color::White, Piece::Rook)));
}

#[test]
fn test_null_move_make_unmake_restores_hash_and_ep() {
    let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
    let mut board = Board::from_fen(fen).unwrap();
    let before = Snapshot::of(&board);

    board.make_null_move();
    assert_eq!(board.en_passant(), None);
    assert_eq!(board.side_to_move(), Color::Black);
    assert_ne!(board.hash(), before.hash);
    assert_eq!(board.hash(), board.compute_hash());

    board.unmake_null_move();
    assert_eq!(Snapshot::of(&board), before);
}

#[test]
fn test_null_move_preserves_castling_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let rights = board.castling_rights();
    board.make_null_move();
    assert_eq!(board.castling_rights(), rights);
    board.unmake_null_move();
    assert_eq!(board.castling_rights(), rights);
}

#[test]
fn test_apply_move_clears_undo_log() {
    let mut board = Board::new();
    for _ in 0..(MAX_PLY * 2) {
        for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let mv = board.parse_uci_move(uci).unwrap();
            board.apply_move(mv);
        }
    }
    assert_eq!(board.undo_depth(), 0);
    assert_eq!(board.hash(), Board::new().hash());
    assert_eq!(board.fullmove_number(), 1 + MAX_PLY as u32 * 4);
}

#[test]
#[should_panic(expected = "undo log overflow")]
fn test_undo_overflow_panics() {
    let mut board = Board::new();
    for _ in 0..=(MAX_PLY / 2) {
        for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let mv = board.parse_uci_move(uci).unwrap();
            board.make_move(mv);
        }
    }
}

#[test]
#[should_panic(expected = "no move to undo")]
fn test_unmake_on_empty_log_panics() {
    let mut board = Board::new();
    let mv = board.parse_uci_move("e2e4").unwrap();
    board.unmake_move(mv);
}
