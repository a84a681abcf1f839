//! NinJump - a wall-jumping endless arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, game state)
//! - `frontend`: Render/audio collaborator boundary (draw/sound notifications)
//! - `highscore`: Single-integer high score persistence
//! - `tuning`: Data-driven game balance

pub mod frontend;
pub mod highscore;
pub mod sim;
pub mod tuning;

pub use highscore::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Milliseconds of simulated time per tick (~60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: i32 = 480;
    pub const FIELD_HEIGHT: i32 = 800;
    /// Width of the two side walls the player bounces between
    pub const WALL_WIDTH: i32 = 50;

    /// Player sprite size
    pub const PLAYER_WIDTH: i32 = 28;
    pub const PLAYER_HEIGHT: i32 = 44;
    /// Player start height above the bottom edge
    pub const PLAYER_START_OFFSET: i32 = 100;
    /// Vertical acceleration per tick while airborne
    pub const GRAVITY: i32 = 1;
    /// Initial upward velocity of a jump (negative = up)
    pub const JUMP_FORCE: i32 = -20;
    pub const PLAYER_LIVES: i32 = 3;
    /// Invincibility window after a life-losing hit (ms)
    pub const INVINCIBLE_MS: u64 = 2000;

    /// Score multiplier ramps +0.5 at this interval (ms)
    pub const MULTIPLIER_INTERVAL_MS: u64 = 10_000;
    /// Score accrues floor(multiplier) at this interval (ms)
    pub const SCORE_INTERVAL_MS: u64 = 1000;
    /// Score awarded per enemy kill
    pub const KILL_SCORE: i32 = 10;

    /// Platform sprite size
    pub const PLATFORM_WIDTH: i32 = 25;
    pub const PLATFORM_HEIGHT: i32 = 25;
    /// Scroll speed of the world (pixels per tick)
    pub const INITIAL_PLATFORM_SPEED: f32 = 3.0;
    pub const MAX_PLATFORM_SPEED: f32 = 10.0;
    pub const SPEED_INCREASE_RATE: f32 = 0.001;
    /// A new platform spawns once the newest one has scrolled past a
    /// threshold drawn uniformly from this range (pixels)
    pub const PLATFORM_SPAWN_GAP_MIN: i32 = 40;
    pub const PLATFORM_SPAWN_GAP_MAX: i32 = 80;
    /// Upward offset of a new platform from the previous one (pixels)
    pub const PLATFORM_SPAWN_RANGE_MIN: i32 = 80;
    pub const PLATFORM_SPAWN_RANGE_MAX: i32 = 130;
    /// Platform fade per tick (alpha units, 0-255 scale)
    pub const PLATFORM_FADE_RATE: f32 = 1.5;

    /// Enemy sprite size
    pub const ENEMY_WIDTH: i32 = 30;
    pub const ENEMY_HEIGHT: i32 = 30;
    pub const ENEMY_HEALTH: i32 = 2;
    /// Interval between enemy waves (ms)
    pub const ENEMY_WAVE_INTERVAL_MS: u64 = 5000;
    /// Enemies per wave (inclusive range)
    pub const ENEMY_WAVE_MIN: u32 = 2;
    pub const ENEMY_WAVE_MAX: u32 = 6;
    /// Vertical spacing between enemies staggered above the field
    pub const ENEMY_STAGGER: i32 = 20;

    /// Projectile (shuriken) size and motion
    pub const PROJECTILE_WIDTH: i32 = PLAYER_WIDTH / 2;
    pub const PROJECTILE_HEIGHT: i32 = PLAYER_HEIGHT / 2;
    /// Upward speed in pixels per tick
    pub const PROJECTILE_SPEED: i32 = 10;
    /// Maximum concurrent projectiles
    pub const MAX_PROJECTILES: usize = 7;

    /// A kill within this window of the previous one extends the streak (ms)
    pub const STREAK_KILL_WINDOW_MS: u64 = 4000;
    /// Idling past this window silently zeroes the streak (ms)
    pub const STREAK_DECAY_MS: u64 = 2000;
    /// Number of escalating kill-tier sounds
    pub const STREAK_SOUND_TIERS: u32 = 5;
}

/// X coordinate of a wall-attached entity's left edge for the given side.
#[inline]
pub fn wall_x(side: sim::WallSide, width: i32) -> i32 {
    match side {
        sim::WallSide::Left => consts::WALL_WIDTH,
        sim::WallSide::Right => consts::FIELD_WIDTH - consts::WALL_WIDTH - width,
    }
}
