//! Reef Rush - an aquarium eat-or-be-eaten arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (creature physics, levels, collisions, game state)
//! - `sprites`: Sprite collaborator surface (opaque handles keyed by creature kind)
//! - `audio`: Sound-cue mapping consumed by the host shell
//! - `tuning`: Data-driven game balance
//!
//! The host shell owns rendering, audio playback and input devices; it drives
//! the core through `sim::tick`, reads `GameState::render_state()` to draw,
//! and drains `GameState::drain_events()` for sound/FX.

pub mod audio;
pub mod sim;
pub mod sprites;
pub mod tuning;

pub use audio::SoundEffect;
pub use sprites::{SpriteHandle, SpriteProvider};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Starting lives for the player
    pub const PLAYER_START_LIVES: u32 = 10;
    /// Player collision radius
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Default player swim speed
    pub const PLAYER_SPEED: f32 = 3.0;
    /// Ticks the player is immune after losing a life (3 seconds at 60 fps)
    pub const DAMAGE_DEBOUNCE_TICKS: u32 = 180;

    /// Speed multiplier while a power-up boost is active
    pub const BOOST_MULTIPLIER: f32 = 2.0;
    /// Boost duration in ticks (5 seconds at 60 fps)
    pub const BOOST_DURATION_TICKS: u32 = 300;

    /// Score awarded per creature eaten (the creature's value feeds the level
    /// score, not the player's)
    pub const POINTS_PER_CATCH: u32 = 1;
    /// Player power rises by one each time the score reaches a multiple of this
    pub const POWER_SCORE_INTERVAL: u32 = 25;

    /// Collision detection runs every Nth tick
    pub const COLLISION_INTERVAL: u32 = 2;

    /// Swim area is inset from the tank edges by this margin
    pub const TANK_MARGIN: f32 = 20.0;
    /// Spawn speed roll, inclusive bounds
    pub const SPAWN_SPEED_MIN: u32 = 1;
    pub const SPAWN_SPEED_MAX: u32 = 5;
}
