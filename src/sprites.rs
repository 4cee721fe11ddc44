//! Sprite collaborator surface
//!
//! The core never draws. At spawn time it asks the host's provider for an
//! opaque handle keyed by creature kind, carries it on the creature, and
//! hands it back in render snapshots. What the handle indexes (a texture, an
//! atlas cell, a mesh) is the host's business.

use serde::{Deserialize, Serialize};

use crate::sim::CreatureKind;

/// Opaque drawable handle; the core stores and echoes it, nothing more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// Supplies one drawable handle per spawned creature
pub trait SpriteProvider {
    fn sprite_for(&mut self, kind: CreatureKind) -> SpriteHandle;
}

/// Fixed kind-to-handle mapping, enough for tests and the headless demo
#[derive(Debug, Clone, Copy, Default)]
pub struct KindSprites;

impl SpriteProvider for KindSprites {
    fn sprite_for(&mut self, kind: CreatureKind) -> SpriteHandle {
        SpriteHandle(match kind {
            CreatureKind::Player => 0,
            CreatureKind::Fish => 1,
            CreatureKind::BigFish => 2,
            CreatureKind::Jellyfish => 3,
            CreatureKind::Dartfish => 4,
            CreatureKind::PowerUp => 5,
        })
    }
}
