//! Native entry point: a fixed-cadence headless loop driving the sim with a
//! small autopilot. A windowed build would swap `HeadlessFrontend` for a
//! real render/audio backend and feed real input events; the loop shape is
//! identical.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::IVec2;

use ninjump::consts::{FIELD_HEIGHT, TICK_MS};
use ninjump::frontend::{self, Color, Frontend, SoundId, SpriteId};
use ninjump::highscore::HIGH_SCORE_FILE;
use ninjump::sim::{self, GamePhase, GameState, InputEvent, Key, Rect, WallSide};
use ninjump::{HighScore, Tuning};

/// Cap on a demo run so the binary always terminates
const DEMO_TICK_LIMIT: u64 = 120 * 1000 / TICK_MS;

/// Logs sounds, drops draw calls
#[derive(Default)]
struct HeadlessFrontend;

impl Frontend for HeadlessFrontend {
    fn draw_sprite(&mut self, _id: SpriteId, _dest: Rect, _flip: bool) {}
    fn draw_text(&mut self, _text: &str, _pos: IVec2, _color: Color) {}
    fn play_sound(&mut self, id: SoundId) {
        log::debug!("sound: {id:?}");
    }
}

/// Scripted stand-in for the input collaborator: starts a run, bounces off
/// incoming platforms and throws at whatever is above.
fn demo_inputs(state: &GameState) -> Vec<InputEvent> {
    match state.phase {
        GamePhase::Menu => vec![InputEvent::PrimaryAction],
        GamePhase::GameOver => vec![InputEvent::KeyDown(Key::Quit)],
        GamePhase::Paused => vec![InputEvent::KeyDown(Key::Resume)],
        GamePhase::Playing => {
            let mut inputs = Vec::new();
            let player = &state.player;
            // Jump when a platform on our wall is closing in from above
            let threatened = state.platforms.iter().any(|p| {
                on_side(p.rect.x, player.wall_side)
                    && p.rect.bottom() > player.y - 160
                    && p.rect.top() < player.y + 10
            });
            if threatened && player.attached {
                inputs.push(InputEvent::KeyDown(Key::Jump));
            }
            // Lob a shuriken every half second or so
            if state.time_ticks % 32 == 0 {
                inputs.push(InputEvent::KeyDown(Key::Throw));
            }
            inputs
        }
    }
}

fn on_side(x: i32, side: WallSide) -> bool {
    match side {
        WallSide::Left => x < ninjump::consts::FIELD_WIDTH / 2,
        WallSide::Right => x >= ninjump::consts::FIELD_WIDTH / 2,
    }
}

fn main() {
    env_logger::init();
    log::info!("NinJump starting");

    let tuning = Tuning::load("tuning.json");
    let mut best = HighScore::load(HIGH_SCORE_FILE);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, tuning, best.value);
    let mut frontend = HeadlessFrontend;

    let frame_budget = Duration::from_millis(TICK_MS);
    while state.running && state.time_ticks < DEMO_TICK_LIMIT {
        let frame_start = Instant::now();

        let inputs = demo_inputs(&state);
        sim::tick(&mut state, &inputs);
        frontend::dispatch_sounds(&state, &mut frontend);
        frontend::present(&state, &mut frontend);

        if state.events.iter().any(|e| *e == sim::GameEvent::GameOver) {
            best.submit(state.player.score);
        }
        if state.time_ticks % 60 == 0 {
            log::debug!(
                "t={}s score={} lives={} platforms={} enemies={} y={}",
                state.now_ms() / 1000,
                state.player.score,
                state.player.lives,
                state.platforms.len(),
                state.enemies.len(),
                FIELD_HEIGHT - state.player.y,
            );
        }

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!(
        "demo finished: score {} (best {})",
        state.player.score,
        best.value
    );
}
