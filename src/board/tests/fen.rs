//! FEN round trips over reachable positions.

use super::{show_path, walk, KIWIPETE, POSITION_3, POSITION_5};
use crate::board::{Board, FenError, START_FEN};

fn assert_round_trips(fen: &str, depth: u32) {
    let mut board = Board::from_fen(fen).unwrap();
    let mut path = Vec::new();
    walk(&mut board, depth, &mut path, &mut |board, path| {
        let encoded = board.to_fen();
        let decoded = Board::from_fen(&encoded)
            .unwrap_or_else(|e| panic!("{encoded} after [{}]: {e}", show_path(path)));
        assert_eq!(decoded.to_fen(), encoded);
        assert_eq!(decoded.hash(), board.hash(), "{encoded}");
        assert_eq!(decoded.eval(), board.eval(), "{encoded}");
    });
}

#[test]
fn test_round_trip_reachable_positions() {
    assert_round_trips(START_FEN, 2);
    assert_round_trips(KIWIPETE, 1);
    assert_round_trips(POSITION_3, 2);
    assert_round_trips(POSITION_5, 1);
}

#[test]
fn test_from_str_matches_from_fen() {
    let parsed: Board = KIWIPETE.parse().unwrap();
    assert_eq!(parsed.to_fen(), KIWIPETE);

    let result: Result<Board, FenError> = "invalid fen".parse();
    assert!(matches!(result, Err(FenError::TooFewFields { found: 2 })));
}

#[test]
fn test_errors_display() {
    let err = Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
    assert!(!err.to_string().is_empty());
    let err = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1")
        .unwrap_err();
    assert_eq!(err, FenError::InvalidSideToMove { found: "x".to_string() });
}
