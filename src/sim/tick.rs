//! Per-frame entry point: input-driven state machine plus one simulation
//! step while in `Playing`.
//!
//! The whole input queue for the frame is consumed before simulating; each
//! event is interpreted against the phase it arrives in.

use super::collision;
use super::spawn;
use super::state::{GamePhase, GameState};

/// Discrete key commands delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Jump,
    Throw,
    Pause,
    Resume,
    Menu,
    Restart,
    Quit,
}

/// One queued input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close; terminates from any phase
    Quit,
    /// Click/tap; starts a run from the menu
    PrimaryAction,
    KeyDown(Key),
}

/// Advance the game by one tick: drain the input queue, then simulate if
/// playing. Timed effects compare against the per-tick clock sampled once.
pub fn tick(state: &mut GameState, inputs: &[InputEvent]) {
    state.events.clear();
    state.time_ticks += 1;
    let now = state.now_ms();

    for &event in inputs {
        apply_input(state, event);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.player.update(now);
    for projectile in state.player.projectiles.iter_mut() {
        projectile.update();
    }
    for platform in state.platforms.iter_mut() {
        platform.update(state.platform_speed);
    }
    for enemy in state.enemies.iter_mut() {
        enemy.update(state.platform_speed);
    }

    spawn::spawn_platform(state);
    spawn::spawn_enemy_wave(state, now);

    collision::resolve(state);

    // The silent streak decay runs only on frames that produced no kill
    let killed = state
        .events
        .iter()
        .any(|e| matches!(e, super::state::GameEvent::Kill { .. }));
    if !killed {
        state.streak.decay(now);
    }

    if state.platform_speed < state.tuning.max_platform_speed {
        state.platform_speed += state.tuning.speed_increase_rate;
    }
}

fn apply_input(state: &mut GameState, event: InputEvent) {
    if event == InputEvent::Quit {
        state.running = false;
        return;
    }

    match state.phase {
        GamePhase::Menu => {
            // Any primary input starts a run
            if matches!(event, InputEvent::PrimaryAction | InputEvent::KeyDown(_)) {
                state.start_run();
            }
        }
        GamePhase::Playing => match event {
            InputEvent::KeyDown(Key::Jump) => {
                state.player.jump(&mut state.events);
            }
            InputEvent::KeyDown(Key::Throw) => {
                if state.tuning.projectiles {
                    state.player.throw(state.tuning.max_projectiles);
                }
            }
            InputEvent::KeyDown(Key::Pause) => {
                state.phase = GamePhase::Paused;
            }
            _ => {}
        },
        GamePhase::Paused => match event {
            InputEvent::KeyDown(Key::Resume) => {
                state.phase = GamePhase::Playing;
            }
            InputEvent::KeyDown(Key::Menu) => {
                state.phase = GamePhase::Menu;
            }
            _ => {}
        },
        GamePhase::GameOver => match event {
            InputEvent::KeyDown(Key::Restart) => {
                state.start_run();
            }
            InputEvent::KeyDown(Key::Menu) => {
                state.phase = GamePhase::Menu;
            }
            InputEvent::KeyDown(Key::Quit) => {
                state.running = false;
            }
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::GameEvent;
    use crate::Tuning;

    fn new_state() -> GameState {
        GameState::new(12345, Tuning::default(), 0)
    }

    fn key(k: Key) -> [InputEvent; 1] {
        [InputEvent::KeyDown(k)]
    }

    #[test]
    fn test_menu_to_playing_resets_session() {
        let mut state = new_state();
        state.platform_speed = 9.0;
        tick(&mut state, &[InputEvent::PrimaryAction]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.platforms.len(), 1, "one starting platform is seeded");
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.lives, PLAYER_LIVES);
        assert!(state.platform_speed <= state.tuning.initial_platform_speed + 0.01);
    }

    #[test]
    fn test_pause_resume_cycle() {
        let mut state = new_state();
        tick(&mut state, &[InputEvent::PrimaryAction]);
        tick(&mut state, &key(Key::Pause));
        assert_eq!(state.phase, GamePhase::Paused);

        // Paused is render-only: nothing moves
        let ticks_before = state.time_ticks;
        let y_before = state.platforms.front().unwrap().rect.y;
        tick(&mut state, &[]);
        assert_eq!(state.platforms.front().unwrap().rect.y, y_before);
        assert_eq!(state.time_ticks, ticks_before + 1, "clock keeps advancing");

        tick(&mut state, &key(Key::Resume));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_paused_to_menu() {
        let mut state = new_state();
        tick(&mut state, &[InputEvent::PrimaryAction]);
        tick(&mut state, &key(Key::Pause));
        tick(&mut state, &key(Key::Menu));
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_jump_input_flips_wall_and_notifies() {
        let mut state = new_state();
        tick(&mut state, &[InputEvent::PrimaryAction]);
        let side = state.player.wall_side;
        tick(&mut state, &key(Key::Jump));
        assert_ne!(state.player.wall_side, side);
        assert!(!state.player.attached);
        assert!(state.events.contains(&GameEvent::Jump));
    }

    #[test]
    fn test_throw_cap_over_whole_queue() {
        let mut state = new_state();
        tick(&mut state, &[InputEvent::PrimaryAction]);
        let throws = [InputEvent::KeyDown(Key::Throw); 8];
        tick(&mut state, &throws);
        assert_eq!(state.player.projectiles.len(), MAX_PROJECTILES);
    }

    #[test]
    fn test_projectiles_feature_flag() {
        let mut state = new_state();
        state.tuning.projectiles = false;
        tick(&mut state, &[InputEvent::PrimaryAction]);
        tick(&mut state, &key(Key::Throw));
        assert!(state.player.projectiles.is_empty());
    }

    #[test]
    fn test_quit_from_any_phase() {
        for setup in [
            Vec::new(),
            vec![InputEvent::PrimaryAction],
            vec![InputEvent::PrimaryAction, InputEvent::KeyDown(Key::Pause)],
        ] {
            let mut state = new_state();
            for ev in &setup {
                tick(&mut state, std::slice::from_ref(ev));
            }
            tick(&mut state, &[InputEvent::Quit]);
            assert!(!state.running);
        }
    }

    #[test]
    fn test_game_over_restart_and_quit() {
        let mut state = new_state();
        tick(&mut state, &[InputEvent::PrimaryAction]);
        state.phase = GamePhase::GameOver;
        state.player.lives = 0;

        tick(&mut state, &key(Key::Restart));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.lives, PLAYER_LIVES);

        state.phase = GamePhase::GameOver;
        tick(&mut state, &key(Key::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_speed_ramps_to_cap() {
        let mut state = new_state();
        tick(&mut state, &[InputEvent::PrimaryAction]);
        let start = state.platform_speed;
        tick(&mut state, &[]);
        assert!(state.platform_speed > start);

        state.platform_speed = state.tuning.max_platform_speed;
        tick(&mut state, &[]);
        assert_eq!(state.platform_speed, state.tuning.max_platform_speed);
    }

    #[test]
    fn test_determinism() {
        let mut a = new_state();
        let mut b = new_state();
        let script: Vec<Vec<InputEvent>> = vec![
            vec![InputEvent::PrimaryAction],
            vec![InputEvent::KeyDown(Key::Jump)],
            vec![],
            vec![InputEvent::KeyDown(Key::Throw)],
            vec![],
        ];
        for frame in &script {
            tick(&mut a, frame);
            tick(&mut b, frame);
        }
        for _ in 0..600 {
            tick(&mut a, &[]);
            tick(&mut b, &[]);
        }
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.player.y, b.player.y);
        assert_eq!(a.player.score, b.player.score);
        assert_eq!(a.platforms.len(), b.platforms.len());
        assert_eq!(a.enemies.len(), b.enemies.len());
    }

    #[test]
    fn test_score_accrues_while_playing() {
        let mut state = new_state();
        tick(&mut state, &[InputEvent::PrimaryAction]);
        // A bit over one second of ticks
        for _ in 0..70 {
            tick(&mut state, &[]);
        }
        assert!(state.player.score >= 1);
    }
}
