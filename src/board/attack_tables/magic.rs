//! Magic-bitboard sliding attack tables.
//!
//! For each square the relevant blockers (`occupancy & mask`) are multiplied by a
//! square-specific constant and the top bits select a slot in a dense attack table.
//! Built-in multipliers are verified when the table is built; any that collide are
//! replaced by a seeded search so the resulting table is always exact.

use once_cell::sync::Lazy;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    const fn directions(self) -> [(i8, i8); 4] {
        match self {
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
        }
    }
}

#[derive(Clone, Copy, Default)]
struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

pub(crate) struct MagicTable {
    entries: [MagicEntry; 64],
    attacks: Vec<u64>,
}

impl MagicTable {
    #[inline]
    pub(crate) fn attack(&self, sq: usize, occupancy: u64) -> u64 {
        let entry = &self.entries[sq];
        self.attacks[entry.offset + magic_index(occupancy, entry.mask, entry.magic, entry.shift)]
    }
}

/// Slot of a blocker pattern: keep the relevant bits, multiply, take the top bits.
#[inline]
pub(crate) fn magic_index(occupancy: u64, mask: u64, magic: u64, shift: u32) -> usize {
    ((occupancy & mask).wrapping_mul(magic) >> shift) as usize
}

/// Squares whose occupancy can change the attack set; board edges are excluded.
fn relevant_mask(slider: Slider, sq: usize) -> u64 {
    let rank = (sq / 8) as i8;
    let file = (sq % 8) as i8;
    let mut mask = 0u64;
    for (dr, df) in slider.directions() {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&(r + dr)) && (0..8).contains(&(f + df)) {
            mask |= 1u64 << (r as usize * 8 + f as usize);
            r += dr;
            f += df;
        }
    }
    mask
}

/// Ray walk stopping at (and including) the first blocker.
fn attacks_on_the_fly(slider: Slider, sq: usize, occupancy: u64) -> u64 {
    let rank = (sq / 8) as i8;
    let file = (sq % 8) as i8;
    let mut attacks = 0u64;
    for (dr, df) in slider.directions() {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << (r as usize * 8 + f as usize);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Fill `table` for one square. Fails on a destructive collision.
fn try_fill(
    table: &mut [u64],
    magic: u64,
    entry_mask: u64,
    shift: u32,
    cases: &[(u64, u64)],
) -> bool {
    table.fill(0);
    for &(occupancy, attack) in cases {
        let slot = &mut table[magic_index(occupancy, entry_mask, magic, shift)];
        if *slot == 0 {
            *slot = attack;
        } else if *slot != attack {
            return false;
        }
    }
    true
}

/// Search sparse random candidates until one maps every blocker pattern without collision.
fn find_magic(
    rng: &mut StdRng,
    table: &mut [u64],
    mask: u64,
    shift: u32,
    cases: &[(u64, u64)],
) -> u64 {
    loop {
        let candidate = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if (mask.wrapping_mul(candidate) & 0xFF00_0000_0000_0000).count_ones() < 6 {
            continue;
        }
        if try_fill(table, candidate, mask, shift, cases) {
            return candidate;
        }
    }
}

fn build_table(slider: Slider, builtin: &[u64; 64]) -> MagicTable {
    let mut entries = [MagicEntry::default(); 64];
    let mut attacks: Vec<u64> = Vec::new();
    let mut rng = StdRng::seed_from_u64(0x0B1A_DE5F_15A1);

    for (sq, entry) in entries.iter_mut().enumerate() {
        let mask = relevant_mask(slider, sq);
        let bits = mask.count_ones();
        let shift = 64 - bits;

        // Every subset of the mask (carry-rippler enumeration)
        let mut cases = Vec::with_capacity(1 << bits);
        let mut subset = 0u64;
        loop {
            cases.push((subset, attacks_on_the_fly(slider, sq, subset)));
            subset = subset.wrapping_sub(mask) & mask;
            if subset == 0 {
                break;
            }
        }

        let mut table = vec![0u64; 1 << bits];
        let mut magic = builtin[sq];
        if !try_fill(&mut table, magic, mask, shift, &cases) {
            log::debug!("{:?} magic for square {} collides, searching a replacement", slider, sq);
            magic = find_magic(&mut rng, &mut table, mask, shift, &cases);
        }

        *entry = MagicEntry {
            mask,
            magic,
            shift,
            offset: attacks.len(),
        };
        attacks.extend_from_slice(&table);
    }

    MagicTable { entries, attacks }
}

pub(crate) static BISHOP_TABLE: Lazy<MagicTable> =
    Lazy::new(|| build_table(Slider::Bishop, &BISHOP_MAGICS));
pub(crate) static ROOK_TABLE: Lazy<MagicTable> =
    Lazy::new(|| build_table(Slider::Rook, &ROOK_MAGICS));

#[rustfmt::skip]
const BISHOP_MAGICS: [u64; 64] = [
    0x0040011a02220020, 0x041010020141c020, 0x0010808091010110, 0x0009040900a44040,
    0x0025104010008100, 0x0800825041040882, 0x080a080904120000, 0x9000420084200200,
    0x4001980810008202, 0x021004504c004091, 0x01081000a2104400, 0x0004040400808900,
    0x8048120210803001, 0x5000050120120a00, 0x01004200902c3040, 0x0202248208120210,
    0x04c020920c580082, 0x182000020c040084, 0x0008009002801011, 0x0008221404001348,
    0x5804008e10220603, 0x0204082602010400, 0x0401820108011004, 0x000884050401010f,
    0x00202000080b4420, 0x0028040402100202, 0x0401100081004202, 0x0081180009004100,
    0x0448104008044000, 0x420800800a416002, 0x0400860021a23002, 0x0020a4a321040201,
    0x450918224188a000, 0x81a8080c00080988, 0x0007104810040800, 0x1801400a00022200,
    0x1080c40400804100, 0x0002014100020080, 0x0201880200a10116, 0x2408084140050103,
    0x0501100210002288, 0x4241844402022001, 0x009200202800d420, 0x811c110141040801,
    0x5000603600800410, 0x1020600042810441, 0x00181001020040c0, 0x0030020043190840,
    0x0045093002200094, 0x4222021084050425, 0x802002484c100100, 0x0000141020a80900,
    0x2010104002820410, 0x0404400801010185, 0x00c0500a04d10002, 0x0125280801082082,
    0x0005010450048400, 0x1110120082088202, 0x4212100544040400, 0x4007010011048800,
    0x0c20980014208210, 0x0002004902880200, 0x0004102001040092, 0x5620020200440988,
];
#[rustfmt::skip]
const ROOK_MAGICS: [u64; 64] = [
    0x0081002000004868, 0x4041122014081010, 0x800809100c200a04, 0x0804100128208202,
    0x8104050048820802, 0x00250082220c00c0, 0x8001420100802010, 0x0022c07a00801100,
    0x4008200214214000, 0x90820049018200a0, 0x0001802008100180, 0x0000800800801000,
    0x004100106c480100, 0x00808064002e0080, 0x0801000453000200, 0x4042000b0008e001,
    0x00801a0800020004, 0x90400100410880a0, 0x812c1200228200c0, 0x0002220040100a00,
    0x0042020010040820, 0x8085010044000802, 0x0000240008011082, 0x80c4082010008000,
    0x00000202080001b0, 0x80400800a0007000, 0x4041100080200082, 0x20c1002100100008,
    0x0000080100100500, 0x0a00040080020080, 0x0201000100840200, 0x0240021200000420,
    0x1000100002008010, 0x1041008225004008, 0x1808a001010010c4, 0x04e2092042001200,
    0x1880800800800400, 0x8050820080804400, 0x80f0800300800200, 0x4000000022041060,
    0x0402500000220061, 0x0010004020104000, 0x0926c200a0820014, 0x0400080010008080,
    0x0010080004008080, 0x08820009b0020004, 0x000490080a0c0005, 0x0018042120820004,
    0x4004280004950820, 0x90010184402a0600, 0x0908408204502200, 0x0050880080100080,
    0x0020140080080180, 0x0010800200140080, 0x0014021089080400, 0x0008000000210200,
    0x80c1000000849000, 0x00c020d402100800, 0x0830012014080601, 0x0414021128101082,
    0x6001081c00408202, 0x0421440902220881, 0x8090801c20410200, 0x8008408001080090,
];
