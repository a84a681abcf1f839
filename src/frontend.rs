//! Render/audio collaborator boundary.
//!
//! The simulation never talks to a window, a mixer or a texture atlas; it
//! emits `GameEvent`s and the loop calls `present` once per frame. Both
//! funnel through the `Frontend` trait as fire-and-forget notifications,
//! so a real SDL/WebGPU backend and the headless test backend are
//! interchangeable.

use glam::IVec2;

use crate::consts::*;
use crate::sim::{GameEvent, GamePhase, GameState, Rect, WallSide};

/// Sprite identifiers understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Background,
    Wall,
    Ninja,
    Platform,
    Enemy,
    Shuriken,
    Heart,
    Menu,
    Pause,
}

/// Sound effect identifiers understood by the audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    Jump,
    Hit,
    LoseLife,
    GameOver,
    /// One of five escalating streak sounds, index 0-4
    Kill(u8),
    EnemySpawn,
}

/// RGBA color for text rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const GOLD: Color = Color { r: 255, g: 215, b: 0, a: 255 };
}

/// The external render/audio collaborator. All calls are notifications;
/// no return value is consumed.
pub trait Frontend {
    fn draw_sprite(&mut self, id: SpriteId, dest: Rect, flip: bool);
    fn draw_text(&mut self, text: &str, pos: IVec2, color: Color);
    fn play_sound(&mut self, id: SoundId);
}

/// A frontend that ignores everything (headless runs and tests)
#[derive(Debug, Default)]
pub struct NullFrontend;

impl Frontend for NullFrontend {
    fn draw_sprite(&mut self, _id: SpriteId, _dest: Rect, _flip: bool) {}
    fn draw_text(&mut self, _text: &str, _pos: IVec2, _color: Color) {}
    fn play_sound(&mut self, _id: SoundId) {}
}

/// Map a simulation event to its sound effect, if it has one.
pub fn sound_for(event: GameEvent) -> Option<SoundId> {
    match event {
        GameEvent::Jump => Some(SoundId::Jump),
        GameEvent::Hit => Some(SoundId::Hit),
        GameEvent::LifeLost => Some(SoundId::LoseLife),
        GameEvent::GameOver => Some(SoundId::GameOver),
        GameEvent::EnemySpawned => Some(SoundId::EnemySpawn),
        // Tier is 1-based; clamp into the five-entry sound table
        GameEvent::Kill { tier } => {
            let index = tier.clamp(1, STREAK_SOUND_TIERS) - 1;
            Some(SoundId::Kill(index as u8))
        }
        GameEvent::NewHighScore { .. } => None,
    }
}

/// Forward this frame's sound notifications to the audio backend.
pub fn dispatch_sounds(state: &GameState, frontend: &mut impl Frontend) {
    for &event in &state.events {
        if let Some(sound) = sound_for(event) {
            frontend.play_sound(sound);
        }
    }
}

/// Issue one frame of draw notifications from the current state.
pub fn present(state: &GameState, frontend: &mut impl Frontend) {
    frontend.draw_sprite(
        SpriteId::Background,
        Rect::new(WALL_WIDTH, 0, FIELD_WIDTH - 2 * WALL_WIDTH, FIELD_HEIGHT),
        false,
    );
    frontend.draw_sprite(SpriteId::Wall, Rect::new(0, 0, WALL_WIDTH, FIELD_HEIGHT), false);
    frontend.draw_sprite(
        SpriteId::Wall,
        Rect::new(FIELD_WIDTH - WALL_WIDTH, 0, WALL_WIDTH, FIELD_HEIGHT),
        true,
    );

    for platform in &state.platforms {
        frontend.draw_sprite(SpriteId::Platform, platform.rect, false);
    }
    for enemy in state.enemies.iter().filter(|e| e.active) {
        frontend.draw_sprite(SpriteId::Enemy, enemy.rect, enemy.side == WallSide::Right);
    }
    for projectile in state.player.projectiles.iter().filter(|p| p.active) {
        frontend.draw_sprite(SpriteId::Shuriken, projectile.rect, false);
    }
    frontend.draw_sprite(
        SpriteId::Ninja,
        state.player.rect(),
        state.player.wall_side == WallSide::Right,
    );

    match state.phase {
        GamePhase::Playing => draw_hud(state, frontend),
        GamePhase::Menu => {
            frontend.draw_sprite(
                SpriteId::Menu,
                Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT),
                false,
            );
            if state.high_score > 0 {
                frontend.draw_text(
                    &format!("HIGH SCORE: {}", state.high_score),
                    IVec2::new(FIELD_WIDTH / 2, FIELD_HEIGHT / 2 - 100),
                    Color::GOLD,
                );
            }
        }
        GamePhase::Paused => {
            frontend.draw_sprite(
                SpriteId::Pause,
                Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT),
                false,
            );
        }
        GamePhase::GameOver => draw_game_over(state, frontend),
    }
}

fn draw_hud(state: &GameState, frontend: &mut impl Frontend) {
    const HEART_SIZE: i32 = 32;
    const HEART_PADDING: i32 = 10;
    for i in 0..state.player.lives {
        frontend.draw_sprite(
            SpriteId::Heart,
            Rect::new(10 + i * (HEART_SIZE + HEART_PADDING), 10, HEART_SIZE, HEART_SIZE),
            false,
        );
    }
    frontend.draw_text(
        &format!("Score: {}", state.player.score),
        IVec2::new(10, 50),
        Color::BLACK,
    );
    if state.streak.count() > 1 {
        frontend.draw_text(
            &format!("Streak: x{}", state.streak.count()),
            IVec2::new(10, 90),
            Color::GOLD,
        );
    }
}

fn draw_game_over(state: &GameState, frontend: &mut impl Frontend) {
    let center_x = FIELD_WIDTH / 2;
    let center_y = FIELD_HEIGHT / 2;
    frontend.draw_text(
        &format!("SCORE: {}", state.player.score),
        IVec2::new(center_x, center_y - 50),
        Color::BLACK,
    );
    if state.new_high_score {
        frontend.draw_text(
            "NEW HIGH SCORE!",
            IVec2::new(center_x, center_y),
            Color::GOLD,
        );
    }
    frontend.draw_text("M - MENU", IVec2::new(center_x, center_y + 50), Color::BLACK);
    frontend.draw_text("R - RESTART", IVec2::new(center_x, center_y + 100), Color::BLACK);
    frontend.draw_text("ESC - QUIT", IVec2::new(center_x, center_y + 150), Color::BLACK);
}
