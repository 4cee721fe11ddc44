//! The per-tick orchestrator
//!
//! Sequence for one playing tick: steer and advance the player, then (on
//! gated ticks) detect the single authoritative contact and apply its
//! consequences, then advance the tank. A terminal game-over ends the tick
//! before the tank update; consequence application never runs twice for the
//! same contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collision, detect_collisions};
use super::creature::{CreatureKind, resolve_pair};
use super::state::{GameEvent, GamePhase, GameState};
use crate::sprites::SpriteProvider;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// New swim heading for the player; `None` keeps the current one
    pub direction: Option<Vec2>,
    /// Leave the title card (one-shot)
    pub start: bool,
}

/// Fixed-rate gate: `tick()` reports true every `interval`th call.
/// Throttles collision-consequence cost independently of the frame rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cadence {
    interval: u32,
    counter: u32,
}

impl Cadence {
    pub fn every(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            counter: 0,
        }
    }

    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            false
        }
    }
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput, sprites: &mut dyn SpriteProvider) {
    match state.phase {
        GamePhase::Intro => {
            if input.start {
                state.phase = GamePhase::Playing;
                log::info!("run started (seed {})", state.seed);
            }
            return;
        }
        GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    if let Some(dir) = input.direction {
        state.player.set_direction(dir.x, dir.y);
    }
    state.player.update();

    if state.collision_gate.tick()
        && let Some(contact) = detect_collisions(&state.tank, &state.player)
        && apply_contact(state, contact)
    {
        // Terminal: lives ran out, nothing else happens this tick
        return;
    }

    let mut events = Vec::new();
    state.tank.update(&mut state.rng, sprites, &mut events);
    for event in events {
        state.push_event(event);
    }
}

/// Apply the consequences of the tick's one contact. Returns true when the
/// run just ended.
fn apply_contact(state: &mut GameState, contact: Collision) -> bool {
    match contact {
        Collision::PlayerVs(id) => {
            let Some((kind, value)) = state.tank.creature(id).map(|c| (c.kind, c.value)) else {
                log::warn!("contact with vanished creature {id}");
                return false;
            };

            if kind == CreatureKind::PowerUp {
                state.player.apply_speed_boost(
                    state.tuning.boost_multiplier,
                    state.tuning.boost_duration_ticks,
                );
                state.tank.remove_creature(id);
                state.push_event(GameEvent::PowerUpCollected { id });
            } else if state.player.power < value {
                // Too weak to eat it; the creature stays put
                let lives_before = state.player.lives;
                state.player.lose_life(state.tuning.damage_debounce_ticks);
                if state.player.lives < lives_before {
                    state.push_event(GameEvent::LifeLost {
                        lives_left: state.player.lives,
                    });
                }
                if state.player.lives == 0 {
                    state.phase = GamePhase::GameOver;
                    state.push_event(GameEvent::GameOver {
                        score: state.player.score,
                    });
                    log::info!("game over with score {}", state.player.score);
                    return true;
                }
            } else {
                state.tank.remove_creature(id);
                state.push_event(GameEvent::Ate { id, kind, value });
                if state.player.add_score(
                    state.tuning.points_per_catch,
                    state.tuning.power_score_interval,
                ) {
                    state.push_event(GameEvent::PowerIncreased {
                        power: state.player.power,
                    });
                }
            }
        }
        Collision::Between(a, b) => {
            let creatures = &mut state.tank.creatures;
            let i = creatures.iter().position(|c| c.id == a);
            let j = creatures.iter().position(|c| c.id == b);
            if let (Some(i), Some(j)) = (i, j) {
                resolve_pair(creatures, i, j);
                state.push_event(GameEvent::CreaturesBounced { a, b });
            } else {
                log::warn!("bounce between vanished creatures {a} and {b}");
            }
        }
    }
    false
}
