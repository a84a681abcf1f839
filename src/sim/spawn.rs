//! Procedural spawning: platform drip-feed and timed enemy waves.
//!
//! All randomness comes from the state-owned seeded RNG, so spawn sequences
//! replay exactly for a given seed. Spawn density and scroll speed are
//! deliberately independent knobs.

use rand::Rng;

use super::state::{Enemy, GameEvent, GameState, Platform, WallSide};
use crate::consts::*;
use crate::wall_x;

/// Append a platform once the newest one has scrolled far enough down.
///
/// The trigger threshold and the upward offset are both drawn uniformly per
/// spawn, so density is stochastic but bounded.
pub fn spawn_platform(state: &mut GameState) {
    let threshold = state
        .rng
        .random_range(PLATFORM_SPAWN_GAP_MIN..=PLATFORM_SPAWN_GAP_MAX);
    let due = state.platforms.back().is_none_or(|p| p.rect.y > threshold);
    if !due {
        return;
    }

    let side = if state.rng.random_bool(0.5) {
        WallSide::Left
    } else {
        WallSide::Right
    };
    let x = wall_x(side, PLATFORM_WIDTH);
    let y = match state.platforms.back() {
        None => FIELD_HEIGHT,
        Some(prev) => {
            prev.rect.y
                - state
                    .rng
                    .random_range(PLATFORM_SPAWN_RANGE_MIN..=PLATFORM_SPAWN_RANGE_MAX)
        }
    };
    state.platforms.push_back(Platform::new(x, y));
}

/// Spawn a wave of enemies above the field every `wave_interval_ms`.
///
/// Enemies are staggered vertically so a wave never overlaps at spawn; the
/// spawn notification fires once per wave regardless of count.
pub fn spawn_enemy_wave(state: &mut GameState, now_ms: u64) {
    if !state.tuning.enemies {
        return;
    }
    if now_ms.saturating_sub(state.last_wave_ms) < state.tuning.wave_interval_ms {
        return;
    }
    state.last_wave_ms = now_ms;

    let count = state.rng.random_range(ENEMY_WAVE_MIN..=ENEMY_WAVE_MAX);
    for i in 0..count {
        let side = if state.rng.random_bool(0.5) {
            WallSide::Left
        } else {
            WallSide::Right
        };
        let x = wall_x(side, ENEMY_WIDTH);
        let y = -ENEMY_HEIGHT - i as i32 * (ENEMY_HEIGHT + ENEMY_STAGGER);
        state
            .enemies
            .push(Enemy::new(x, y, side, state.tuning.enemy_health));
    }
    state.events.push(GameEvent::EnemySpawned);
    log::debug!("wave of {count} enemies spawned at {now_ms}ms");
}
