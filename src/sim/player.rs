//! Player state: the one creature steered by input
//!
//! On top of the shared body the player carries lives, power, score, a
//! damage debounce that gates life loss, and a timed speed boost.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::creature::{Creature, CreatureKind};
use crate::sprites::SpriteHandle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Creature,
    pub lives: u32,
    /// Eating power; creatures worth more than this fight back
    pub power: u32,
    pub score: u32,
    /// Ticks remaining before another life can be lost
    damage_debounce: u32,
    /// Speed to restore when the boost runs out
    base_speed: f32,
    /// Ticks of boost remaining
    boost_ticks: u32,
    pub boosted: bool,
}

impl Player {
    pub fn new(pos: Vec2, speed: f32, lives: u32, bounds: Vec2, sprite: SpriteHandle) -> Self {
        Self {
            body: Creature::new(0, CreatureKind::Player, pos, speed, bounds, sprite),
            lives,
            power: 1,
            score: 0,
            damage_debounce: 0,
            base_speed: speed,
            boost_ticks: 0,
            boosted: false,
        }
    }

    /// Steer toward (dx, dy); the heading is normalized so speed stays scalar
    pub fn set_direction(&mut self, dx: f32, dy: f32) {
        self.body.dir = Vec2::new(dx, dy);
        self.body.normalize_dir();
    }

    /// Double-time swimming for a while
    pub fn apply_speed_boost(&mut self, multiplier: f32, duration_ticks: u32) {
        self.body.speed = self.base_speed * multiplier;
        self.boost_ticks = duration_ticks;
        self.boosted = true;
    }

    /// Lose a life unless the debounce window is still open. Lives stop at 0.
    pub fn lose_life(&mut self, debounce_ticks: u32) {
        if self.damage_debounce > 0 {
            return;
        }
        if self.lives > 0 {
            self.lives -= 1;
        }
        self.damage_debounce = debounce_ticks;
        log::info!("player lost a life, {} remaining", self.lives);
    }

    /// Add catch points. Returns true when the new total lands on a power
    /// threshold and the player's power rose.
    pub fn add_score(&mut self, points: u32, power_interval: u32) -> bool {
        self.score += points;
        if power_interval > 0 && self.score % power_interval == 0 {
            self.power += 1;
            log::info!("player power increased to {}", self.power);
            return true;
        }
        false
    }

    pub fn damage_debounce(&self) -> u32 {
        self.damage_debounce
    }

    /// One tick: debounce decay, boost decay, then movement with wall bounce
    pub fn update(&mut self) {
        if self.damage_debounce > 0 {
            self.damage_debounce -= 1;
        }
        if self.boost_ticks > 0 {
            self.boost_ticks -= 1;
            if self.boost_ticks == 0 {
                self.body.speed = self.base_speed;
                self.boosted = false;
            }
        }
        self.body.advance();
    }
}
