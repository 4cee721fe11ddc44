//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick rate only
//! - Seeded RNG only
//! - Stable iteration order (tank list order)
//! - No rendering or platform dependencies
//!
//! Side effects (draw, sound, logging to the screen) belong to the host; the
//! sim queues `GameEvent`s and the host reacts after the tick settles.

pub mod collision;
pub mod creature;
pub mod level;
pub mod player;
pub mod state;
pub mod tank;
pub mod tick;

pub use collision::{Collision, detect_collisions};
pub use creature::{Creature, CreatureKind};
pub use level::{Level, PopulationNode, campaign_levels};
pub use player::Player;
pub use state::{GameEvent, GamePhase, GameState, HudState, RenderState, SpriteInstance};
pub use tank::Tank;
pub use tick::{TickInput, tick};
