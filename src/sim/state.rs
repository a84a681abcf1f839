//! Game state and core simulation types
//!
//! Everything the per-tick simulation reads or mutates lives here. The state
//! owns its RNG and derives its clock from the tick counter, so a run is
//! fully determined by the seed and the input stream.

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::streak::KillStreak;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::wall_x;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for any primary input
    Menu,
    /// Active gameplay; the only phase that simulates
    Playing,
    /// Game is paused (render-only)
    Paused,
    /// Run ended
    GameOver,
}

/// The two vertical boundaries the player bounces between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    pub fn opposite(self) -> Self {
        match self {
            WallSide::Left => WallSide::Right,
            WallSide::Right => WallSide::Left,
        }
    }
}

/// Notifications emitted by the simulation for the render/audio collaborator.
///
/// Fire-and-forget: the sim never consumes a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player left a wall
    Jump,
    /// Player overlapped a platform or enemy while vulnerable
    Hit,
    /// A life was lost but the run continues
    LifeLost,
    /// An enemy wave entered the field
    EnemySpawned,
    /// An enemy died; `tier` is the streak tier (1-based, capped at 5)
    Kill { tier: u32 },
    /// Lives reached zero
    GameOver,
    /// The finished run beat the stored high score
    NewHighScore { score: i32 },
}

/// The player character.
///
/// Invariant: while `attached` is true, `velocity_y` is zero and `x` equals
/// the wall-adjacent coordinate for `wall_side`.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub velocity_y: i32,
    pub wall_side: WallSide,
    pub attached: bool,
    pub lives: i32,
    pub score: i32,
    pub multiplier: f32,
    /// Deadline (sim ms) after which invincibility lapses
    pub invincible_until: Option<u64>,
    pub projectiles: Vec<Projectile>,
    /// Height the current jump arc must return to before re-attaching
    target_y: i32,
    last_multiplier_ms: u64,
    last_score_ms: u64,
}

impl Player {
    pub fn new(now_ms: u64) -> Self {
        let y = FIELD_HEIGHT - PLAYER_START_OFFSET - PLAYER_HEIGHT;
        Self {
            x: WALL_WIDTH,
            y,
            velocity_y: 0,
            wall_side: WallSide::Left,
            attached: true,
            lives: PLAYER_LIVES,
            score: 0,
            multiplier: 1.0,
            invincible_until: None,
            projectiles: Vec::new(),
            target_y: y,
            last_multiplier_ms: now_ms,
            last_score_ms: now_ms,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn is_invincible(&self, now_ms: u64) -> bool {
        self.invincible_until.is_some_and(|t| now_ms <= t)
    }

    /// Leap to the opposite wall. No-op while airborne.
    pub fn jump(&mut self, events: &mut Vec<GameEvent>) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.wall_side = self.wall_side.opposite();
        self.velocity_y = JUMP_FORCE;
        self.target_y = self.y;
        events.push(GameEvent::Jump);
    }

    /// Throw a projectile from the player's center. Only valid while
    /// attached and under the concurrency cap; otherwise a silent no-op.
    pub fn throw(&mut self, max_projectiles: usize) {
        if self.attached && self.projectiles.len() < max_projectiles {
            self.projectiles.push(Projectile::new(self.rect().center()));
        }
    }

    /// Advance motion and timed effects by one tick.
    pub fn update(&mut self, now_ms: u64) {
        if !self.attached {
            self.velocity_y += GRAVITY;
            self.y += self.velocity_y;

            // The arc re-attaches once it crosses the recorded launch height
            // in its direction of travel, then snaps exactly back to it.
            let crossed = (self.velocity_y > 0 && self.y >= self.target_y)
                || (self.velocity_y < 0 && self.y <= self.target_y);
            if crossed {
                self.y = self.target_y;
                self.velocity_y = 0;
                self.attached = true;
                self.x = wall_x(self.wall_side, PLAYER_WIDTH);
            }
        }

        // Fell past everything: the run restarts in place
        if self.y > FIELD_HEIGHT {
            self.reset(now_ms);
        }

        if now_ms - self.last_multiplier_ms > MULTIPLIER_INTERVAL_MS {
            self.multiplier += 0.5;
            self.last_multiplier_ms = now_ms;
        }

        if self.invincible_until.is_some_and(|t| now_ms > t) {
            self.invincible_until = None;
        }

        if now_ms - self.last_score_ms >= SCORE_INTERVAL_MS {
            self.score += self.multiplier as i32;
            self.last_score_ms = now_ms;
        }
    }

    /// Full reset: position, lives, score and multiplier (new run / fell out)
    pub fn reset(&mut self, now_ms: u64) {
        *self = Player::new(now_ms);
    }

    /// Life-loss reset: back to the near wall with a fresh invincibility
    /// window, score and lives untouched.
    pub fn reset_position(&mut self, now_ms: u64, invincible_ms: u64) {
        self.y = FIELD_HEIGHT - PLAYER_START_OFFSET - PLAYER_HEIGHT;
        self.target_y = self.y;
        self.x = wall_x(self.wall_side, PLAYER_WIDTH);
        self.velocity_y = 0;
        self.attached = true;
        self.invincible_until = Some(now_ms + invincible_ms);
    }
}

/// A scrolling platform hazard
#[derive(Debug, Clone)]
pub struct Platform {
    pub rect: Rect,
    /// Fade for rendering, 255 down to 0
    pub alpha: f32,
}

impl Platform {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            alpha: 255.0,
        }
    }

    pub fn update(&mut self, speed: f32) {
        self.rect.y += speed as i32;
        if self.alpha > 0.0 {
            self.alpha = (self.alpha - PLATFORM_FADE_RATE).max(0.0);
        }
    }
}

/// A wall-hugging enemy that scrolls down with the world
#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    pub health: i32,
    pub active: bool,
    pub side: WallSide,
}

impl Enemy {
    pub fn new(x: i32, y: i32, side: WallSide, health: i32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_WIDTH, ENEMY_HEIGHT),
            health,
            active: true,
            side,
        }
    }

    pub fn update(&mut self, speed: f32) {
        self.rect.y += speed as i32;
    }

    /// Apply one point of damage. Returns true if this killed the enemy.
    pub fn take_damage(&mut self) -> bool {
        self.health -= 1;
        if self.health <= 0 {
            self.active = false;
            return true;
        }
        false
    }
}

/// A thrown shuriken, moving straight up at constant speed
#[derive(Debug, Clone)]
pub struct Projectile {
    pub rect: Rect,
    pub active: bool,
}

impl Projectile {
    pub fn new(origin: IVec2) -> Self {
        Self {
            rect: Rect::new(
                origin.x - PROJECTILE_WIDTH / 2,
                origin.y - PROJECTILE_HEIGHT,
                PROJECTILE_WIDTH,
                PROJECTILE_HEIGHT,
            ),
            active: true,
        }
    }

    pub fn update(&mut self) {
        self.rect.y -= PROJECTILE_SPEED;
        if self.rect.y < -PROJECTILE_HEIGHT {
            self.active = false;
        }
    }
}

/// Complete session state, owned exclusively by the game loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Cleared by a quit input or window close
    pub running: bool,
    /// Simulation tick counter; the ms clock is derived from it
    pub time_ticks: u64,
    pub player: Player,
    /// Insertion-ordered (oldest first) so front-expiry is cheap
    pub platforms: VecDeque<Platform>,
    pub enemies: Vec<Enemy>,
    /// World scroll speed, ramps up to a cap
    pub platform_speed: f32,
    pub streak: KillStreak,
    /// Best score seen so far, seeded from the persisted value
    pub high_score: i32,
    /// Set when the finished run beat the loaded high score
    pub new_high_score: bool,
    /// Deadline bookkeeping for enemy waves
    pub last_wave_ms: u64,
    /// Notifications from the last tick, drained by the frontend
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning, high_score: i32) -> Self {
        let platform_speed = tuning.initial_platform_speed;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Menu,
            running: true,
            time_ticks: 0,
            player: Player::new(0),
            platforms: VecDeque::new(),
            enemies: Vec::new(),
            platform_speed,
            streak: KillStreak::default(),
            high_score,
            new_high_score: false,
            last_wave_ms: 0,
            events: Vec::new(),
        }
    }

    /// Current simulated time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.time_ticks * TICK_MS
    }

    /// Reset everything transient and enter `Playing` (Menu->Playing and
    /// GameOver->Playing take the same path).
    pub fn start_run(&mut self) {
        let now = self.now_ms();
        self.player.reset(now);
        self.platforms.clear();
        self.enemies.clear();
        // One starting platform a full field above the player
        self.platforms
            .push_back(Platform::new(WALL_WIDTH, self.player.y - FIELD_HEIGHT));
        self.platform_speed = self.tuning.initial_platform_speed;
        self.streak = KillStreak::default();
        self.new_high_score = false;
        self.last_wave_ms = now;
        self.phase = GamePhase::Playing;
        log::info!("run started (seed {})", self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attached_invariant_holds_through_jump_cycle() {
        let mut player = Player::new(0);
        let mut events = Vec::new();
        assert!(player.attached);
        assert_eq!(player.velocity_y, 0);
        assert_eq!(player.x, wall_x(player.wall_side, PLAYER_WIDTH));

        player.jump(&mut events);
        assert!(!player.attached);
        assert_eq!(player.wall_side, WallSide::Right);
        assert_eq!(player.velocity_y, JUMP_FORCE);
        assert_eq!(events, vec![GameEvent::Jump]);

        // Integrate until re-attachment
        let target = player.y;
        for _ in 0..200 {
            player.update(0);
            if player.attached {
                break;
            }
        }
        assert!(player.attached, "arc never re-attached");
        assert_eq!(player.y, target, "re-attach must restore launch height");
        assert_eq!(player.velocity_y, 0);
        assert_eq!(player.x, wall_x(WallSide::Right, PLAYER_WIDTH));
    }

    #[test]
    fn test_jump_while_airborne_is_noop() {
        let mut player = Player::new(0);
        let mut events = Vec::new();
        player.jump(&mut events);
        let side = player.wall_side;
        let vel = player.velocity_y;
        player.update(0);
        player.jump(&mut events);
        assert_eq!(player.wall_side, side);
        assert_eq!(player.velocity_y, vel + GRAVITY);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_throw_respects_cap() {
        let mut player = Player::new(0);
        for _ in 0..8 {
            player.throw(MAX_PROJECTILES);
        }
        assert_eq!(player.projectiles.len(), 7);
    }

    #[test]
    fn test_throw_while_airborne_is_noop() {
        let mut player = Player::new(0);
        player.jump(&mut Vec::new());
        player.throw(MAX_PROJECTILES);
        assert!(player.projectiles.is_empty());
    }

    #[test]
    fn test_fall_out_of_bounds_fully_resets() {
        let mut player = Player::new(0);
        player.score = 500;
        player.multiplier = 3.0;
        player.lives = 1;
        player.y = FIELD_HEIGHT + 1;
        player.attached = true;
        player.update(2000);
        assert_eq!(player.score, 0);
        assert_eq!(player.multiplier, 1.0);
        assert_eq!(player.lives, PLAYER_LIVES);
        assert_eq!(player.y, FIELD_HEIGHT - PLAYER_START_OFFSET - PLAYER_HEIGHT);
    }

    #[test]
    fn test_multiplier_and_score_intervals() {
        let mut player = Player::new(0);
        // Just past the multiplier interval
        player.update(MULTIPLIER_INTERVAL_MS + 1);
        assert_eq!(player.multiplier, 1.5);
        // Score ticks award floor(multiplier)
        let before = player.score;
        player.update(MULTIPLIER_INTERVAL_MS + 1 + SCORE_INTERVAL_MS);
        assert_eq!(player.score, before + 1);
    }

    #[test]
    fn test_invincibility_expires() {
        let mut player = Player::new(0);
        player.reset_position(1000, INVINCIBLE_MS);
        assert!(player.is_invincible(1000));
        assert!(player.is_invincible(1000 + INVINCIBLE_MS));
        assert!(!player.is_invincible(1001 + INVINCIBLE_MS));
        player.update(1001 + INVINCIBLE_MS);
        assert_eq!(player.invincible_until, None);
    }

    #[test]
    fn test_projectile_deactivates_above_field() {
        let mut p = Projectile::new(IVec2::new(100, 30));
        for _ in 0..20 {
            p.update();
        }
        assert!(!p.active);
    }

    #[test]
    fn test_platform_scrolls_and_fades() {
        let mut p = Platform::new(50, 100);
        p.update(3.7);
        assert_eq!(p.rect.y, 103);
        assert_eq!(p.alpha, 255.0 - PLATFORM_FADE_RATE);
        for _ in 0..300 {
            p.update(3.7);
        }
        assert_eq!(p.alpha, 0.0, "alpha floors at zero");
    }

    #[test]
    fn test_enemy_damage_accumulates() {
        let mut e = Enemy::new(0, 0, WallSide::Left, 2);
        assert!(!e.take_damage());
        assert!(e.active);
        assert!(e.take_damage());
        assert!(!e.active);
    }

    proptest::proptest! {
        /// Whatever the jump schedule, an attached player is glued to a
        /// wall with zero velocity.
        #[test]
        fn attached_invariant_under_random_jumps(
            schedule in proptest::collection::vec(0u8..4, 1..120),
        ) {
            let mut player = Player::new(0);
            let mut events = Vec::new();
            for cmd in schedule {
                if cmd == 0 {
                    player.jump(&mut events);
                }
                player.update(0);
                if player.attached {
                    proptest::prop_assert_eq!(player.velocity_y, 0);
                    proptest::prop_assert_eq!(
                        player.x,
                        wall_x(player.wall_side, PLAYER_WIDTH)
                    );
                }
            }
        }
    }
}
