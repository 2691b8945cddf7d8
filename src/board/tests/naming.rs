//! Move names over reachable positions.

use std::collections::HashSet;

use super::{show_path, walk, KIWIPETE, POSITION_4};
use crate::board::{Board, START_FEN};

fn assert_names_resolve(fen: &str, depth: u32) {
    let mut board = Board::from_fen(fen).unwrap();
    let mut path = Vec::new();
    walk(&mut board, depth, &mut path, &mut |board, path| {
        let legal = board.legal_moves();
        let names = board.name_moves(legal.as_slice());
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate names after [{}]", show_path(path));

        for (&mv, name) in legal.iter().zip(&names) {
            assert_eq!(
                board.move_from_name(name).unwrap(),
                mv,
                "{name} after [{}]",
                show_path(path)
            );
        }
    });
}

#[test]
fn test_names_resolve_start() {
    assert_names_resolve(START_FEN, 2);
}

#[test]
fn test_names_resolve_tactical() {
    assert_names_resolve(KIWIPETE, 1);
    assert_names_resolve(POSITION_4, 1);
}

#[test]
fn test_kiwipete_names() {
    let mut board = Board::from_fen(KIWIPETE).unwrap();
    let legal = board.legal_moves();
    let names = board.name_moves(legal.as_slice());
    for expected in ["O-O", "O-O-O", "Nxf7", "Qxf6", "dxe6", "Bxa6", "gxh3", "a3"] {
        assert!(names.iter().any(|n| n == expected), "{expected} missing from {names:?}");
    }
}
