//! Data-driven checks over `tests/data/positions.json`.

use serde::Deserialize;

use blunderfish::board::{find_best_move, Board, SearchParams, MATE_SCORE};

#[derive(Deserialize)]
struct PositionSet {
    perft: Vec<PerftCase>,
    mates: Vec<MateCase>,
}

#[derive(Deserialize)]
struct PerftCase {
    name: String,
    fen: String,
    counts: Vec<(u32, u64)>,
}

#[derive(Deserialize)]
struct MateCase {
    name: String,
    fen: String,
    mate_in: u32,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn perft_suite() {
    for case in load().perft {
        let mut board = Board::from_fen(&case.fen).unwrap();
        for (depth, expected) in case.counts {
            assert_eq!(
                board.perft(depth),
                expected,
                "perft {} at depth {depth}",
                case.name
            );
        }
    }
}

#[test]
fn mate_suite() {
    for case in load().mates {
        let mut board = Board::from_fen(&case.fen).unwrap();
        let plies = 2 * case.mate_in - 1;
        let moves = board.legal_moves();
        let result =
            find_best_move(&mut board, moves.as_slice(), plies + 1, &SearchParams::default());

        assert_eq!(
            result.score,
            MATE_SCORE - plies as i32,
            "{}: wrong mate distance",
            case.name
        );
        let best = result.best_move.expect("a mating move");
        board.make_move(best);
        if case.mate_in == 1 {
            assert!(board.is_checkmate(), "{}: {best} does not mate", case.name);
        } else {
            assert!(!board.legal_moves().is_empty(), "{}: mates too early", case.name);
        }
    }
}

#[test]
fn mate_suite_names() {
    for case in load().mates.into_iter().filter(|c| c.mate_in == 1) {
        let mut board = Board::from_fen(&case.fen).unwrap();
        let moves = board.legal_moves();
        let names = board.name_moves(moves.as_slice());
        assert!(
            names.iter().any(|n| n.ends_with('#')),
            "{}: no move named as mate in {names:?}",
            case.name
        );
    }
}
