//! Reef Rush headless demo
//!
//! No window, no audio: runs the simulation core for a minute of game time
//! with a scripted sweep input, logs the event stream, and prints the final
//! HUD line. Useful as a smoke run and as a reference for wiring a real
//! host shell.
//!
//! Usage: `reef-rush [seed]`, with `RUST_LOG=info` for the event log.

use glam::Vec2;
use reef_rush::audio;
use reef_rush::sim::{GamePhase, GameState, TickInput, tick};
use reef_rush::sprites::KindSprites;
use reef_rush::tuning::Tuning;

const TANK_WIDTH: f32 = 1024.0;
const TANK_HEIGHT: f32 = 768.0;
const DEMO_TICKS: u32 = 3600;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5ea_f00d);

    let mut sprites = KindSprites;
    let mut state = GameState::new(seed, TANK_WIDTH, TANK_HEIGHT, Tuning::default(), &mut sprites);

    // Leave the title card
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, &mut sprites);

    // Sweep the player in a slow circle; the sim does the rest
    for t in 0..DEMO_TICKS {
        let angle = t as f32 * 0.01;
        let input = TickInput {
            direction: Some(Vec2::new(angle.cos(), angle.sin())),
            ..Default::default()
        };
        tick(&mut state, &input, &mut sprites);

        for event in state.drain_events() {
            if let Some(cue) = audio::effect_for(&event) {
                log::debug!("sound cue: {cue:?}");
            }
            log::info!("{event:?}");
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let hud = state.render_state().hud;
    println!(
        "seed {seed:#x}: {} ticks, level {}, score {}, power {}, lives {}",
        state.time_ticks, hud.level, hud.score, hud.power, hud.lives
    );
}
