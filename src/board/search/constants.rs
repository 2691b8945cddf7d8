//! Search constants.

use super::super::MAX_PLY;

// ============================================================================
// SCORES
// ============================================================================

/// Bound wider than any reachable score
pub const INFINITY: i32 = 32000;

/// Score of a side that is mated at the current node; mate found `n` plies
/// below a node scores `-(MATE_SCORE - n)` there.
pub const MATE_SCORE: i32 = 31000;

/// Scores with absolute value >= this are mate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

/// Iterative deepening never goes deeper than this
pub const MAX_DEPTH: u32 = 32;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier. Ordered: TT > killers > captures > quiet history

/// Hash move (from transposition table) - highest priority
pub const TT_MOVE_SCORE: i32 = 2_000_000;

/// First killer move (quiet that caused beta cutoff at same ply)
pub const KILLER1_SCORE: i32 = 1_000_000;

/// Second killer move (replaced killer)
pub const KILLER2_SCORE: i32 = 900_000;

/// Base added to every capture's MVV-LVA score
pub const CAPTURE_BASE_SCORE: i32 = 100_000;

/// History scores saturate here, below every capture
pub const HISTORY_MAX: i32 = 60_000;

// ============================================================================
// REDUCTIONS
// ============================================================================

/// LMR starts at this ordered move index
pub const LMR_MIN_INDEX: usize = 3;

/// LMR needs at least this much remaining depth
pub const LMR_MIN_DEPTH: u32 = 3;

/// Null move needs non-pawn material above this
pub const NULL_MOVE_MATERIAL: i32 = 2 * 300;
