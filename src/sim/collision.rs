//! Collision detection
//!
//! A first-match scan, not an exhaustive one: each gated tick produces at
//! most one authoritative contact, deterministic by tank list order. The
//! player is checked against every creature first; only then are
//! creature-creature pairs considered, with power-ups excluded from the
//! pair pass (they only ever interact with the player).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::creature::CreatureKind;
use super::player::Player;
use super::tank::Tank;

/// The single contact found in a tick, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Player overlaps the creature with this id
    PlayerVs(u32),
    /// Two creatures overlap, ids in scan order
    Between(u32, u32),
}

/// Strict circle-circle overlap test; touching circles do not collide
pub fn overlapping(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Scan the tank for the tick's one contact
pub fn detect_collisions(tank: &Tank, player: &Player) -> Option<Collision> {
    for creature in &tank.creatures {
        if overlapping(
            player.body.pos,
            player.body.radius,
            creature.pos,
            creature.radius,
        ) {
            return Some(Collision::PlayerVs(creature.id));
        }
    }

    let creatures = &tank.creatures;
    for i in 0..creatures.len() {
        let a = &creatures[i];
        if a.kind == CreatureKind::PowerUp {
            continue;
        }
        for j in (i + 1)..creatures.len() {
            let b = &creatures[j];
            if b.kind == CreatureKind::PowerUp {
                continue;
            }
            if overlapping(a.pos, a.radius, b.pos, b.radius) {
                return Some(Collision::Between(a.id, b.id));
            }
        }
    }

    None
}
