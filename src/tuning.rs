//! Data-driven game balance.
//!
//! Every knob the prototypes disagreed on lives here, so one core covers
//! all of them: feature flags pick the iteration (enemies on/off,
//! projectiles on/off) and the numeric fields pick the balance. Values
//! default to `consts` and can be overridden from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay parameters and feature flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Enemy waves enabled
    pub enemies: bool,
    /// Player projectiles enabled
    pub projectiles: bool,
    /// Hits required to kill an enemy
    pub enemy_health: i32,
    /// Maximum concurrent projectiles
    pub max_projectiles: usize,
    /// World scroll speed at run start (pixels per tick)
    pub initial_platform_speed: f32,
    /// Scroll speed cap
    pub max_platform_speed: f32,
    /// Scroll speed gain per tick
    pub speed_increase_rate: f32,
    /// Interval between enemy waves (ms)
    pub wave_interval_ms: u64,
    /// Invincibility window after a life-losing hit (ms)
    pub invincible_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemies: true,
            projectiles: true,
            enemy_health: ENEMY_HEALTH,
            max_projectiles: MAX_PROJECTILES,
            initial_platform_speed: INITIAL_PLATFORM_SPEED,
            max_platform_speed: MAX_PLATFORM_SPEED,
            speed_increase_rate: SPEED_INCREASE_RATE,
            wave_interval_ms: ENEMY_WAVE_INTERVAL_MS,
            invincible_ms: INVINCIBLE_MS,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file; a missing or malformed file falls back
    /// to the defaults with a log line, never an error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
