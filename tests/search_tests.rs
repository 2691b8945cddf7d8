//! Search tests to verify the engine finds correct moves in various positions.

use blunderfish::board::{find_best_move, Board, SearchParams, MATE_SCORE};
use blunderfish::Move;

fn search(fen: &str, depth: u32) -> (Board, Option<Move>, i32) {
    let mut board = Board::from_fen(fen).unwrap();
    let moves = board.legal_moves();
    let result = find_best_move(&mut board, moves.as_slice(), depth, &SearchParams::default());
    (board, result.best_move, result.score)
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    let (_, best, score) = search("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 4);
    assert_eq!(best.unwrap().to_string(), "e1e8", "Should find Qe8# (back rank mate)");
    assert_eq!(score, MATE_SCORE - 1);
}

/// Test that the engine finds a simple mate in 1 with queen
#[test]
fn finds_mate_in_one_queen() {
    let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4";
    let (_, best, _) = search(fen, 4);
    assert_eq!(best.unwrap().to_string(), "h5f7", "Should find Qxf7# (scholar's mate)");
}

/// Test that the engine avoids giving away material
#[test]
fn avoids_hanging_queen() {
    let fen = "r1bqkbnr/pppppppp/2n5/8/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq - 0 3";
    let (_, best, _) = search(fen, 4);
    assert_ne!(best.unwrap().to_string(), "f3c6", "Should not hang the queen on c6");
}

/// Test that the engine wins a piece left en prise
#[test]
fn captures_free_piece() {
    // Black knight on e4 is attacked by the d3 pawn and defended by nothing.
    // White starts a pawn down, so winning the knight nets about two pawns.
    let fen = "rnbqkb1r/pppp1ppp/8/4p3/4n3/3P4/PPP2PPP/RNBQKBNR w KQkq - 0 3";
    let (_, best, score) = search(fen, 3);
    assert_eq!(best.unwrap().to_string(), "d3e4");
    assert!(score > 100, "score after winning a knight: {score}");
}

/// Test iterative deepening produces legal results at every depth
#[test]
fn iterative_deepening_consistency() {
    let mut board = Board::new();
    let moves = board.legal_moves();
    for depth in [2, 4] {
        let result = find_best_move(&mut board, moves.as_slice(), depth, &SearchParams::default());
        assert_eq!(result.depth, depth);
        assert!(moves.contains(result.best_move.unwrap()));
        assert!(result.score.abs() < 150, "start position score {}", result.score);
    }
}

/// Test that search handles single legal move positions
#[test]
fn single_legal_move() {
    // Rook checks along the first rank and the black king covers b2
    let (_, best, _) = search("8/8/8/8/8/2k5/8/K5r1 w - - 0 1", 4);
    assert_eq!(best.unwrap().to_string(), "a1a2", "Only legal move should be Ka2");
}

/// Test that search returns no move for a checkmated side
#[test]
fn no_move_in_checkmate() {
    let fen = "rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1";
    let mut board = Board::from_fen(fen).unwrap();
    assert!(board.is_checkmate(), "Position should be checkmate");

    let (_, best, score) = search(fen, 4);
    assert!(best.is_none(), "Should return None for checkmate position");
    assert_eq!(score, -MATE_SCORE);
}

/// Test that stalemate is correctly identified
#[test]
fn identifies_stalemate() {
    let fen = "k7/8/1QK5/8/8/8/8/8 b - - 0 1";
    let mut board = Board::from_fen(fen).unwrap();
    assert!(board.is_stalemate(), "Position should be stalemate");
    assert!(!board.is_checkmate(), "Position should not be checkmate");

    let (_, best, score) = search(fen, 3);
    assert!(best.is_none());
    assert_eq!(score, 0);
}

/// Test that searching leaves the caller's board untouched
#[test]
fn search_restores_board() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let (board, best, _) = search(fen, 4);
    assert_eq!(board.to_fen(), fen);
    assert_eq!(board.hash(), Board::from_fen(fen).unwrap().hash());
    assert!(best.is_some());
}

/// Test that the pruning switches leave the mate score intact
#[test]
fn every_configuration_finds_mate() {
    let fen = "7k/6pp/8/3r4/8/8/R7/R5K1 w - - 0 1";
    let configs = [
        SearchParams::default(),
        SearchParams::exact(),
        SearchParams::default().with_null_move(false),
        SearchParams::default().with_late_move_reductions(false),
        SearchParams::default().with_futility(false),
        SearchParams::default().with_aspiration_window(1),
    ];
    for params in &configs {
        let mut board = Board::from_fen(fen).unwrap();
        let moves = board.legal_moves();
        let result = find_best_move(&mut board, moves.as_slice(), 4, params);
        assert_eq!(result.score, MATE_SCORE - 3, "{params:?}");
    }
}
