//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, with a ms clock derived from the tick counter
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies; outward communication is
//!   limited to `GameEvent` notifications drained by the frontend

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod streak;
pub mod tick;

pub use rect::Rect;
pub use state::{
    Enemy, GameEvent, GamePhase, GameState, Platform, Player, Projectile, WallSide,
};
pub use streak::KillStreak;
pub use tick::{InputEvent, Key, tick};
