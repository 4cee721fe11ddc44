//! Creature model and movement variants
//!
//! One struct, one closed kind enum. Variants differ only in collision
//! radius, nutritional value, a speed transform applied at hatch time, and
//! the per-tick displacement formula; everything else (wall bounce, pair
//! bounce, direction normalization) is shared.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_RADIUS;
use crate::sprites::SpriteHandle;

/// Discriminator for every inhabitant of the tank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureKind {
    /// The player's fish; direction comes from input, not AI
    Player,
    /// Basic wandering fish
    Fish,
    /// Slow heavyweight, worth the most
    BigFish,
    /// Sinusoidal drifter
    Jellyfish,
    /// Fast zig-zag swimmer
    Dartfish,
    /// Speed boost pickup; wanders like a fish but never eats or gets bounced
    PowerUp,
}

impl CreatureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CreatureKind::Player => "Player",
            CreatureKind::Fish => "Fish",
            CreatureKind::BigFish => "BigFish",
            CreatureKind::Jellyfish => "Jellyfish",
            CreatureKind::Dartfish => "Dartfish",
            CreatureKind::PowerUp => "PowerUp",
        }
    }

    /// Scalar used for circle-circle overlap tests (not sprite size)
    pub fn collision_radius(self) -> f32 {
        match self {
            CreatureKind::Player => PLAYER_RADIUS,
            CreatureKind::Fish => 30.0,
            CreatureKind::BigFish => 60.0,
            CreatureKind::Jellyfish => 28.0,
            CreatureKind::Dartfish => 24.0,
            CreatureKind::PowerUp => 18.0,
        }
    }

    /// Points fed to the level score when eaten; also the power a player
    /// needs to eat this kind
    pub fn value(self) -> u32 {
        match self {
            CreatureKind::Player | CreatureKind::PowerUp => 0,
            CreatureKind::Fish => 1,
            CreatureKind::BigFish => 5,
            CreatureKind::Jellyfish => 2,
            CreatureKind::Dartfish => 3,
        }
    }

    /// Transform the rolled spawn speed into this kind's base speed
    pub fn base_speed(self, rolled: u32) -> f32 {
        match self {
            CreatureKind::Player | CreatureKind::Fish | CreatureKind::BigFish => rolled as f32,
            CreatureKind::Jellyfish => (rolled / 2).max(1) as f32,
            CreatureKind::Dartfish => rolled.max(6) as f32,
            CreatureKind::PowerUp => 2.0,
        }
    }
}

/// A single tank inhabitant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub kind: CreatureKind,
    pub pos: Vec2,
    /// Swim direction; zero or unit length after any mutation
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    /// Extent of the swim area this creature bounces inside
    pub bounds: Vec2,
    /// Sprite facing; toggled by horizontal wall bounces
    pub flipped: bool,
    pub value: u32,
    pub sprite: SpriteHandle,
    /// Jellyfish sway clock
    sway_phase: f32,
    /// Dartfish zig-zag clock
    zig_step: u32,
}

impl Creature {
    pub fn new(
        id: u32,
        kind: CreatureKind,
        pos: Vec2,
        speed: f32,
        bounds: Vec2,
        sprite: SpriteHandle,
    ) -> Self {
        Self {
            id,
            kind,
            pos,
            dir: Vec2::ZERO,
            speed,
            radius: kind.collision_radius(),
            bounds,
            flipped: false,
            value: kind.value(),
            sprite,
            sway_phase: 0.0,
            zig_step: 0,
        }
    }

    /// Spawn a wild creature: kind-specific speed transform plus a random
    /// initial heading with components drawn from {-1, 0, 1}
    pub fn hatch<R: Rng>(
        id: u32,
        kind: CreatureKind,
        pos: Vec2,
        rolled_speed: u32,
        bounds: Vec2,
        sprite: SpriteHandle,
        rng: &mut R,
    ) -> Self {
        let mut creature = Self::new(id, kind, pos, kind.base_speed(rolled_speed), bounds, sprite);
        creature.dir = Vec2::new(
            rng.random_range(-1i32..=1) as f32,
            rng.random_range(-1i32..=1) as f32,
        );
        creature.normalize_dir();
        creature
    }

    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Scale the direction to unit length; a zero vector stays zero
    pub fn normalize_dir(&mut self) {
        self.dir = self.dir.normalize_or_zero();
    }

    /// Advance one tick: kind-specific displacement, then wall bounce
    pub fn advance(&mut self) {
        match self.kind {
            CreatureKind::Player => {
                self.pos += self.dir * self.speed;
            }
            CreatureKind::Fish | CreatureKind::PowerUp => {
                self.pos += self.dir * self.speed;
                self.flipped = self.dir.x < 0.0;
            }
            CreatureKind::BigFish => {
                self.pos += self.dir * (self.speed * 0.5);
                self.flipped = self.dir.x < 0.0;
            }
            CreatureKind::Jellyfish => {
                self.sway_phase += 0.05;
                let dx = if self.dir.x == 0.0 { 1.0 } else { self.dir.x };
                self.pos.x += dx * (self.speed * 0.4);
                self.pos.y += self.sway_phase.sin() * 1.8;
            }
            CreatureKind::Dartfish => {
                self.zig_step += 1;
                let zig = if self.zig_step % 30 < 15 { 1.0 } else { -1.0 };
                let dx = if self.dir.x == 0.0 { 1.0 } else { self.dir.x };
                self.pos.x += dx * (self.speed * 1.2);
                self.pos.y += zig * 0.9;
            }
        }
        self.bounce_walls();
    }

    /// Clamp to the swim area and reflect the crossed component. Horizontal
    /// bounces toggle the sprite facing; vertical ones do not.
    pub fn bounce_walls(&mut self) {
        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.dir.x = -self.dir.x;
            self.flipped = !self.flipped;
        } else if self.pos.x + self.radius > self.bounds.x {
            self.pos.x = self.bounds.x - self.radius;
            self.dir.x = -self.dir.x;
            self.flipped = !self.flipped;
        }

        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.dir.y = -self.dir.y;
        } else if self.pos.y + self.radius > self.bounds.y {
            self.pos.y = self.bounds.y - self.radius;
            self.dir.y = -self.dir.y;
        }
    }
}

/// Resolve an overlapping pair by index: symmetric positional correction
/// (half the overlap each) followed by elastic reflection of both headings
/// about the collision normal. Speeds are untouched.
///
/// Index-based so the caller never juggles two `&mut` into the same slice;
/// `i == j` and out-of-range indices are rejected.
pub fn resolve_pair(creatures: &mut [Creature], i: usize, j: usize) {
    if i == j || i >= creatures.len() || j >= creatures.len() {
        return;
    }
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = creatures.split_at_mut(hi);
    bounce_off(&mut head[lo], &mut tail[0]);
}

/// Mutual elastic bounce between two overlapping circles
pub fn bounce_off(a: &mut Creature, b: &mut Creature) {
    let diff = a.pos - b.pos;
    let dist_sq = diff.length_squared();
    let min_dist = a.radius + b.radius;
    if dist_sq >= min_dist * min_dist {
        return;
    }

    let dist = dist_sq.sqrt();
    if dist <= 0.0 {
        // Exactly coincident centers: no collision normal exists
        return;
    }
    let normal = diff / dist;

    let overlap = 0.5 * (min_dist - dist);
    a.pos += normal * overlap;
    b.pos -= normal * overlap;

    a.dir -= 2.0 * a.dir.dot(normal) * normal;
    b.dir -= 2.0 * b.dir.dot(normal) * normal;
}
