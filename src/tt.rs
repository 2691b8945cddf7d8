//! Transposition table for caching search results.
//!
//! Positions are keyed by their full Zobrist hash; each bucket holds a small
//! cluster of slots selected by `hash & mask`. The table belongs to one search
//! call and is never shared, so slots are plain values.

use std::mem;

use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

impl BoundType {
    // Never 0, so a packed entry is never 0 either
    fn to_bits(self) -> u64 {
        match self {
            BoundType::Exact => 1,
            BoundType::LowerBound => 2,
            BoundType::UpperBound => 3,
        }
    }

    fn from_bits(v: u64) -> Self {
        match v & 0x3 {
            1 => BoundType::Exact,
            2 => BoundType::LowerBound,
            _ => BoundType::UpperBound,
        }
    }
}

/// Unpacked TT entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: u8,
    /// Node-relative score: mate scores count plies from the stored node
    pub score: i16,
    pub bound: BoundType,
    pub best_move: Option<Move>,
}

/// Packed entry format:
/// - bits 0-31:  move (`Move::bits`, 0 = no move)
/// - bits 32-47: score (i16 as u16)
/// - bits 48-55: depth (u8)
/// - bits 56-57: bound
fn pack_entry(depth: u8, score: i16, bound: BoundType, best_move: Option<Move>) -> u64 {
    let mv = u64::from(best_move.map_or(0, Move::bits));
    mv | (u64::from(score as u16) << 32) | (u64::from(depth) << 48) | (bound.to_bits() << 56)
}

fn unpack_entry(data: u64) -> TTEntry {
    let mv_bits = (data & 0xFFFF_FFFF) as u32;
    TTEntry {
        depth: ((data >> 48) & 0xFF) as u8,
        score: ((data >> 32) & 0xFFFF) as u16 as i16,
        bound: BoundType::from_bits(data >> 56),
        best_move: if mv_bits == 0 {
            None
        } else {
            Some(Move::from_bits(mv_bits))
        },
    }
}

#[derive(Clone, Copy, Default)]
struct TTSlot {
    key: u64,
    /// Packed entry; 0 marks an empty slot
    data: u64,
}

impl TTSlot {
    fn is_empty(&self) -> bool {
        self.data == 0
    }

    fn depth(&self) -> u8 {
        ((self.data >> 48) & 0xFF) as u8
    }
}

/// Number of slots per bucket for collision resolution
const BUCKET_SIZE: usize = 4;

type TTBucket = [TTSlot; BUCKET_SIZE];

pub struct TranspositionTable {
    buckets: Vec<TTBucket>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a new transposition table of roughly `size_mb` megabytes. The
    /// bucket count is rounded down to a power of two.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let bucket_bytes = mem::size_of::<TTBucket>();
        let wanted = (size_mb * 1024 * 1024) / bucket_bytes;
        let num_buckets = if wanted == 0 {
            1024
        } else if wanted.is_power_of_two() {
            wanted
        } else {
            wanted.next_power_of_two() / 2
        };

        TranspositionTable {
            buckets: vec![[TTSlot::default(); BUCKET_SIZE]; num_buckets],
            mask: num_buckets - 1,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Entry stored under exactly this hash, if any
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        self.buckets[self.index(hash)]
            .iter()
            .find(|slot| !slot.is_empty() && slot.key == hash)
            .map(|slot| unpack_entry(slot.data))
    }

    /// Store an entry. Replaces, in order of preference: the slot holding the
    /// same hash, an empty slot, the shallowest slot.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: i32,
        bound: BoundType,
        best_move: Option<Move>,
    ) {
        let depth_u8 = depth.min(255) as u8;
        let score_i16 = score.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
        let packed = pack_entry(depth_u8, score_i16, bound, best_move);

        let idx = self.index(hash);
        let bucket = &mut self.buckets[idx];
        let target = bucket
            .iter()
            .position(|slot| !slot.is_empty() && slot.key == hash)
            .or_else(|| bucket.iter().position(TTSlot::is_empty))
            .unwrap_or_else(|| {
                let mut shallowest = 0;
                for (i, slot) in bucket.iter().enumerate() {
                    if slot.depth() < bucket[shallowest].depth() {
                        shallowest = i;
                    }
                }
                shallowest
            });
        bucket[target] = TTSlot { key: hash, data: packed };
    }

    /// Occupied slots in per mille, sampled over the first 1000 buckets
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        let sample = &self.buckets[..self.buckets.len().min(1000)];
        let occupied = sample
            .iter()
            .flat_map(|bucket| bucket.iter())
            .filter(|slot| !slot.is_empty())
            .count();
        ((occupied * 1000) / (sample.len() * BUCKET_SIZE)) as u32
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = [TTSlot::default(); BUCKET_SIZE];
        }
    }
}
