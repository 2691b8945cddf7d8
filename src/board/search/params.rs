use std::time::Instant;

use super::constants::MAX_DEPTH;

/// Search configuration. Every pruning technique can be switched off on its
/// own; move ordering is always on.
#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Initial half-width of the aspiration window around the previous score
    pub aspiration_window: i32,
    pub null_move: bool,
    pub null_reduction: u32,
    pub late_move_reductions: bool,
    pub futility: bool,
    pub futility_margin: i32,
    /// Trust TT entries searched deeper than requested. When off, only
    /// entries of exactly the requested depth cut off.
    pub deeper_tt_cutoffs: bool,
    pub tt_size_mb: usize,
    /// Checked between iterative-deepening iterations only
    pub deadline: Option<Instant>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            aspiration_window: 50,
            null_move: true,
            null_reduction: 2,
            late_move_reductions: true,
            futility: true,
            futility_margin: 200,
            deeper_tt_cutoffs: true,
            tt_size_mb: 16,
            deadline: None,
        }
    }
}

impl SearchParams {
    /// Configuration whose scores equal plain negamax at every depth: null
    /// move, LMR and deeper TT cutoffs off.
    #[must_use]
    pub fn exact() -> Self {
        SearchParams {
            null_move: false,
            late_move_reductions: false,
            deeper_tt_cutoffs: false,
            ..SearchParams::default()
        }
    }

    #[must_use]
    pub fn with_aspiration_window(mut self, window: i32) -> Self {
        self.aspiration_window = window.max(1);
        self
    }

    #[must_use]
    pub fn with_null_move(mut self, enabled: bool) -> Self {
        self.null_move = enabled;
        self
    }

    #[must_use]
    pub fn with_late_move_reductions(mut self, enabled: bool) -> Self {
        self.late_move_reductions = enabled;
        self
    }

    #[must_use]
    pub fn with_futility(mut self, enabled: bool) -> Self {
        self.futility = enabled;
        self
    }

    #[must_use]
    pub fn with_tt_size_mb(mut self, size_mb: usize) -> Self {
        self.tt_size_mb = size_mb;
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub(crate) fn clamp_depth(depth: u32) -> u32 {
        depth.clamp(1, MAX_DEPTH)
    }
}
