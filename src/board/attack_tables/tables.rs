//! Precomputed attack tables for leaper pieces (knights, kings, pawns).

use once_cell::sync::Lazy;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_mask(sq: usize, deltas: &[(i8, i8)]) -> u64 {
    let r = (sq / 8) as i8;
    let f = (sq % 8) as i8;
    let mut mask = 0u64;
    for &(dr, df) in deltas {
        let nr = r + dr;
        let nf = f + df;
        if (0..8).contains(&nr) && (0..8).contains(&nf) {
            mask |= 1u64 << (nr as usize * 8 + nf as usize);
        }
    }
    mask
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> =
    Lazy::new(|| std::array::from_fn(|sq| leaper_mask(sq, &KNIGHT_DELTAS)));

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> =
    Lazy::new(|| std::array::from_fn(|sq| leaper_mask(sq, &KING_DELTAS)));

/// `PAWN_ATTACKS[color][sq]`: squares a pawn of `color` on `sq` attacks
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    [
        std::array::from_fn(|sq| leaper_mask(sq, &[(1, -1), (1, 1)])),
        std::array::from_fn(|sq| leaper_mask(sq, &[(-1, -1), (-1, 1)])),
    ]
});
