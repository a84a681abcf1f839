//! Kill-streak bookkeeping.
//!
//! Two independent timing rules, evaluated on different frames:
//! - on a kill, a gap longer than `STREAK_KILL_WINDOW_MS` since the previous
//!   kill restarts the combo before counting;
//! - on frames with no kill, idling past `STREAK_DECAY_MS` zeroes the
//!   tracked streak silently, without touching the combo base the next kill
//!   is judged against.

use crate::consts::{STREAK_DECAY_MS, STREAK_KILL_WINDOW_MS, STREAK_SOUND_TIERS};

#[derive(Debug, Clone, Default)]
pub struct KillStreak {
    /// Tracked/displayed streak value (subject to silent decay)
    count: u32,
    /// Consecutive-kill counter, reset only by the kill-window rule
    combo: u32,
    last_kill_ms: Option<u64>,
}

impl KillStreak {
    /// Register a kill at `now_ms`. Returns the streak tier (1-based,
    /// capped at the number of escalating kill sounds).
    pub fn on_kill(&mut self, now_ms: u64) -> u32 {
        if self
            .last_kill_ms
            .is_none_or(|t| now_ms.saturating_sub(t) > STREAK_KILL_WINDOW_MS)
        {
            self.combo = 0;
        }
        self.combo += 1;
        self.count = self.combo;
        self.last_kill_ms = Some(now_ms);
        self.combo.min(STREAK_SOUND_TIERS)
    }

    /// Call once per frame that produced no kill.
    pub fn decay(&mut self, now_ms: u64) {
        if self
            .last_kill_ms
            .is_some_and(|t| now_ms.saturating_sub(t) > STREAK_DECAY_MS)
        {
            self.count = 0;
        }
    }

    /// Current tracked streak (what the HUD shows)
    pub fn count(&self) -> u32 {
        self.count
    }
}
