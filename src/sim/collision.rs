//! Collision resolution and its gameplay consequences.
//!
//! Everything here is rectangle overlap plus bookkeeping: life loss,
//! invincibility windows, enemy damage, kill scoring and the terminal
//! transition to game over.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{FIELD_HEIGHT, KILL_SCORE};

/// Resolve all collisions for this tick, then purge dead entities.
pub fn resolve(state: &mut GameState) {
    let now = state.now_ms();
    resolve_player_platforms(state, now);
    if state.phase == GamePhase::Playing {
        resolve_projectiles_enemies(state, now);
        resolve_player_enemies(state, now);
    }
    purge(state);
}

/// Platform overlap costs a life and resets the player to the near wall;
/// the third loss ends the run.
fn resolve_player_platforms(state: &mut GameState, now: u64) {
    if state.player.is_invincible(now) {
        return;
    }
    let player_rect = state.player.rect();
    let hit = state
        .platforms
        .iter()
        .any(|p| player_rect.overlaps(&p.rect));
    if hit {
        state.events.push(GameEvent::Hit);
        lose_life(state, now, true);
    }
}

/// Each active projectile damages at most the first active enemy it
/// overlaps, then burns out. Damage is cumulative across frames.
fn resolve_projectiles_enemies(state: &mut GameState, now: u64) {
    for projectile in state.player.projectiles.iter_mut() {
        if !projectile.active {
            continue;
        }
        for enemy in state.enemies.iter_mut() {
            if !enemy.active || !projectile.rect.overlaps(&enemy.rect) {
                continue;
            }
            projectile.active = false;
            if enemy.take_damage() {
                state.player.score += KILL_SCORE;
                let tier = state.streak.on_kill(now);
                state.events.push(GameEvent::Kill { tier });
            }
            break;
        }
    }
}

/// Enemy contact costs a life and grants invincibility, but unlike a
/// platform hit it leaves the player where they are.
fn resolve_player_enemies(state: &mut GameState, now: u64) {
    if state.player.is_invincible(now) {
        return;
    }
    let player_rect = state.player.rect();
    let hit = state
        .enemies
        .iter()
        .any(|e| e.active && player_rect.overlaps(&e.rect));
    if hit {
        state.events.push(GameEvent::Hit);
        lose_life(state, now, false);
    }
}

fn lose_life(state: &mut GameState, now: u64, reset_position: bool) {
    state.player.lives -= 1;
    if state.player.lives > 0 {
        state.events.push(GameEvent::LifeLost);
        if reset_position {
            state.player.reset_position(now, state.tuning.invincible_ms);
        } else {
            state.player.invincible_until = Some(now + state.tuning.invincible_ms);
        }
    } else {
        end_run(state);
    }
}

/// Terminal transition: lives reached zero. Compares the run against the
/// loaded high score; persistence itself is the frontend's job.
fn end_run(state: &mut GameState) {
    state.events.push(GameEvent::GameOver);
    if state.player.score > state.high_score {
        state.high_score = state.player.score;
        state.new_high_score = true;
        state.events.push(GameEvent::NewHighScore {
            score: state.player.score,
        });
    }
    state.phase = GamePhase::GameOver;
    log::info!(
        "game over: score {} (best {})",
        state.player.score,
        state.high_score
    );
}

/// Drop inactive enemies and projectiles, and expire platforms whose top
/// edge has scrolled past the bottom of the field (oldest first).
fn purge(state: &mut GameState) {
    while state
        .platforms
        .front()
        .is_some_and(|p| p.rect.top() > FIELD_HEIGHT)
    {
        state.platforms.pop_front();
    }
    state
        .enemies
        .retain(|e| e.active && e.rect.top() <= FIELD_HEIGHT);
    state.player.projectiles.retain(|p| p.active);
}
