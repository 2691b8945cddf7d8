//! Perft (performance test) for move generation correctness.

use std::time::Instant;

use super::{KIWIPETE, POSITION_3, POSITION_4, POSITION_5};
use crate::board::{Board, START_FEN};

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: START_FEN,
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197_281)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: KIWIPETE,
        depths: &[(1, 48), (2, 2039), (3, 97_862)],
    },
    TestPosition {
        name: "Position 3",
        fen: POSITION_3,
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43_238)],
    },
    TestPosition {
        name: "Position 4",
        fen: POSITION_4,
        depths: &[(1, 6), (2, 264), (3, 9467)],
    },
    TestPosition {
        name: "Position 5",
        fen: POSITION_5,
        depths: &[(1, 44), (2, 1486), (3, 62_379)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21_637)],
    },
    TestPosition {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9483)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13_744)],
    },
];

fn check_perft(name: &str, fen: &str, depth: u32, expected: u64) {
    let mut board = Board::from_fen(fen).unwrap();
    let start = Instant::now();
    let nodes = board.perft(depth);
    println!("  {name} depth {depth}: {nodes} nodes in {:?}", start.elapsed());
    assert_eq!(
        nodes, expected,
        "Perft failed for position '{name}' at depth {depth}"
    );
    assert_eq!(board.undo_depth(), 0);
    assert_eq!(board.to_fen(), Board::from_fen(fen).unwrap().to_fen());
}

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        for &(depth, expected) in position.depths {
            check_perft(position.name, position.fen, depth, expected);
        }
    }
}

#[test]
fn test_divide_sums_to_perft() {
    let mut board = Board::from_fen(KIWIPETE).unwrap();
    let split = board.divide(2);
    assert_eq!(split.len(), 48);
    assert_eq!(split.iter().map(|&(_, n)| n).sum::<u64>(), 2039);
}

#[test]
#[ignore = "slow in debug builds; run with --release -- --ignored"]
fn test_perft_start_deep() {
    check_perft("Initial Position", START_FEN, 5, 4_865_609);
    check_perft("Initial Position", START_FEN, 6, 119_060_324);
}

#[test]
#[ignore = "slow in debug builds; run with --release -- --ignored"]
fn test_perft_kiwipete_deep() {
    check_perft("Kiwipete", KIWIPETE, 4, 4_085_603);
    check_perft("Kiwipete", KIWIPETE, 5, 193_690_690);
}

#[test]
#[ignore = "slow in debug builds; run with --release -- --ignored"]
fn test_perft_other_positions_deep() {
    check_perft("Position 3", POSITION_3, 5, 674_624);
    check_perft("Position 4", POSITION_4, 4, 422_333);
    check_perft("Position 5", POSITION_5, 4, 2_103_487);
}
