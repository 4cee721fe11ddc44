//! Game state and the host-facing event/snapshot surface
//!
//! Everything needed to resume a run deterministically lives here: seed,
//! RNG, phase, player, tank and tuning all serialize together.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::creature::CreatureKind;
use super::level::{Level, campaign_levels};
use super::player::Player;
use super::tank::Tank;
use super::tick::Cadence;
use crate::consts::TANK_MARGIN;
use crate::sprites::{SpriteHandle, SpriteProvider};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title card; waiting for a start input
    Intro,
    /// Active gameplay
    Playing,
    /// Run ended; the sim is frozen
    GameOver,
}

/// What happened this tick, for the host to react to (sound, FX, HUD flashes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player ate a creature
    Ate { id: u32, kind: CreatureKind, value: u32 },
    /// Player grabbed a speed boost
    PowerUpCollected { id: u32 },
    /// Player bit off more than it could chew
    LifeLost { lives_left: u32 },
    /// Score crossed a power threshold
    PowerIncreased { power: u32 },
    /// Two creatures bounced off each other
    CreaturesBounced { a: u32, b: u32 },
    /// Level completed; the tank was cleared and restocked
    LevelAdvanced { level: usize },
    /// Lives ran out
    GameOver { score: u32 },
}

/// One drawable, as the host should paint it
#[derive(Debug, Clone, Serialize)]
pub struct SpriteInstance {
    pub pos: Vec2,
    pub kind: CreatureKind,
    pub flipped: bool,
    pub sprite: SpriteHandle,
    pub radius: f32,
}

/// HUD scalars
#[derive(Debug, Clone, Serialize)]
pub struct HudState {
    pub score: u32,
    pub power: u32,
    pub lives: u32,
    pub boost_active: bool,
    pub level: usize,
}

/// Read-only per-frame snapshot, everything the host needs to draw
#[derive(Debug, Clone, Serialize)]
pub struct RenderState {
    pub player: SpriteInstance,
    pub creatures: Vec<SpriteInstance>,
    pub hud: HudState,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub tank: Tank,
    pub tuning: Tuning,
    /// Throttles how often collision consequences run
    pub(crate) collision_gate: Cadence,
    /// Pending events, drained by the host each tick
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a run with the campaign levels and the player centered.
    /// The tank stocks itself on the first playing tick.
    pub fn new(
        seed: u64,
        width: f32,
        height: f32,
        tuning: Tuning,
        sprites: &mut dyn SpriteProvider,
    ) -> Self {
        Self::with_levels(seed, width, height, tuning, campaign_levels(), sprites)
    }

    /// Create a run with a custom level sequence
    pub fn with_levels(
        seed: u64,
        width: f32,
        height: f32,
        tuning: Tuning,
        levels: Vec<Level>,
        sprites: &mut dyn SpriteProvider,
    ) -> Self {
        let swim_bounds = Vec2::new(width - TANK_MARGIN, height - TANK_MARGIN);
        let player = Player::new(
            Vec2::new(width / 2.0, height / 2.0),
            tuning.player_speed,
            tuning.player_lives,
            swim_bounds,
            sprites.sprite_for(CreatureKind::Player),
        );
        let collision_gate = Cadence::every(tuning.collision_interval);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Intro,
            player,
            tank: Tank::new(width, height, levels),
            tuning,
            collision_gate,
            events: Vec::new(),
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take this tick's events; the queue is left empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Resize the playfield; both the tank population and the player pick
    /// up the new bounds immediately
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.tank.set_bounds(width, height);
        self.player
            .body
            .set_bounds(Vec2::new(width - TANK_MARGIN, height - TANK_MARGIN));
    }

    /// Read-only snapshot sufficient for the host to draw the frame
    pub fn render_state(&self) -> RenderState {
        let instance = |c: &super::creature::Creature| SpriteInstance {
            pos: c.pos,
            kind: c.kind,
            flipped: c.flipped,
            sprite: c.sprite,
            radius: c.radius,
        };
        RenderState {
            player: instance(&self.player.body),
            creatures: self.tank.creatures.iter().map(instance).collect(),
            hud: HudState {
                score: self.player.score,
                power: self.player.power,
                lives: self.player.lives,
                boost_active: self.player.boosted,
                level: self.tank.level_index(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::KindSprites;

    fn state() -> GameState {
        GameState::new(7, 800.0, 600.0, Tuning::default(), &mut KindSprites)
    }

    #[test]
    fn test_new_run_starts_on_intro() {
        let s = state();
        assert_eq!(s.phase, GamePhase::Intro);
        assert_eq!(s.player.lives, 10);
        assert_eq!(s.player.power, 1);
        assert!(s.tank.creatures.is_empty());
        assert_eq!(s.tank.level_index(), 0);
    }

    #[test]
    fn test_render_state_mirrors_hud() {
        let mut s = state();
        s.player.score = 12;
        s.player.lives = 4;
        let snapshot = s.render_state();
        assert_eq!(snapshot.hud.score, 12);
        assert_eq!(snapshot.hud.lives, 4);
        assert_eq!(snapshot.player.kind, CreatureKind::Player);
        assert!(snapshot.creatures.is_empty());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut s = state();
        s.push_event(GameEvent::PowerIncreased { power: 2 });
        let events = s.drain_events();
        assert_eq!(events.len(), 1);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_set_bounds_reaches_player() {
        let mut s = state();
        s.set_bounds(400.0, 300.0);
        assert_eq!(s.player.body.bounds, Vec2::new(380.0, 280.0));
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let s = state();
        let json = serde_json::to_string(&s).expect("state serializes");
        let back: GameState = serde_json::from_str(&json).expect("state deserializes");
        assert_eq!(back.seed, s.seed);
        assert_eq!(back.phase, s.phase);
        assert_eq!(back.player.lives, s.player.lives);
        assert_eq!(back.tank.level_index(), s.tank.level_index());
    }
}
