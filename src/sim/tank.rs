//! The tank: owns the live creatures and the level sequence
//!
//! Advances kinematics, runs the level completion/repopulation pass each
//! tick, and is the only place the live list is mutated. Creature swim
//! bounds are the tank bounds inset by a fixed margin, enforced on add and
//! whenever the tank is resized.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::creature::{Creature, CreatureKind};
use super::level::Level;
use super::state::GameEvent;
use crate::consts::{SPAWN_SPEED_MAX, SPAWN_SPEED_MIN, TANK_MARGIN};
use crate::sprites::SpriteProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    width: f32,
    height: f32,
    /// Live creatures; list order is the deterministic iteration order
    pub creatures: Vec<Creature>,
    levels: Vec<Level>,
    /// Monotonic; wrapped modulo the level count wherever it is used
    current_level: usize,
    next_id: u32,
}

impl Tank {
    pub fn new(width: f32, height: f32, levels: Vec<Level>) -> Self {
        Self {
            width,
            height,
            creatures: Vec::new(),
            levels,
            current_level: 0,
            next_id: 1,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Swim area creatures bounce inside
    fn swim_bounds(&self) -> Vec2 {
        Vec2::new(self.width - TANK_MARGIN, self.height - TANK_MARGIN)
    }

    /// Wrapped index of the level currently in play
    pub fn level_index(&self) -> usize {
        if self.levels.is_empty() {
            0
        } else {
            self.current_level % self.levels.len()
        }
    }

    pub fn current_level(&self) -> Option<&Level> {
        let idx = self.level_index();
        self.levels.get(idx)
    }

    fn next_creature_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn creature(&self, id: u32) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    /// Add a creature, clamping its swim bounds to this tank
    pub fn add_creature(&mut self, mut creature: Creature) {
        creature.set_bounds(self.swim_bounds());
        self.creatures.push(creature);
    }

    /// Spawn a wild creature at a random position with a rolled speed.
    /// The player kind cannot be stocked; that is reported, not fatal.
    pub fn spawn<R: Rng>(
        &mut self,
        kind: CreatureKind,
        rng: &mut R,
        sprites: &mut dyn SpriteProvider,
    ) -> Option<u32> {
        if kind == CreatureKind::Player {
            log::error!("refusing to stock a player creature");
            return None;
        }
        let pos = Vec2::new(
            rng.random_range(0.0..self.width),
            rng.random_range(0.0..self.height),
        );
        let rolled = rng.random_range(SPAWN_SPEED_MIN..=SPAWN_SPEED_MAX);
        let id = self.next_creature_id();
        let creature = Creature::hatch(
            id,
            kind,
            pos,
            rolled,
            self.swim_bounds(),
            sprites.sprite_for(kind),
            rng,
        );
        self.add_creature(creature);
        Some(id)
    }

    /// One tank tick: advance every creature, then run the level pass
    pub fn update<R: Rng>(
        &mut self,
        rng: &mut R,
        sprites: &mut dyn SpriteProvider,
        events: &mut Vec<GameEvent>,
    ) {
        for creature in &mut self.creatures {
            creature.advance();
        }
        self.repopulate(rng, sprites, events);
    }

    /// Level pass: on completion reset the level, advance the (cyclic)
    /// index and hard-clear the tank; then spawn whatever the current level
    /// demands.
    fn repopulate<R: Rng>(
        &mut self,
        rng: &mut R,
        sprites: &mut dyn SpriteProvider,
        events: &mut Vec<GameEvent>,
    ) {
        if self.levels.is_empty() {
            log::debug!("no levels configured, skipping repopulation");
            return;
        }

        let mut idx = self.current_level % self.levels.len();
        if self.levels[idx].is_completed() {
            self.levels[idx].reset();
            self.current_level += 1;
            idx = self.current_level % self.levels.len();
            self.clear_creatures();
            log::info!("level complete, moving on to level {idx}");
            events.push(GameEvent::LevelAdvanced { level: idx });
        }

        let demand = self.levels[idx].repopulate();
        if demand.is_empty() {
            return;
        }
        log::debug!("restocking {} creatures", demand.len());
        for kind in demand {
            self.spawn(kind, rng, sprites);
        }
    }

    /// Remove a creature by id, booking its consumption with the current
    /// level first. An unknown id touches nothing.
    pub fn remove_creature(&mut self, id: u32) {
        let Some(pos) = self.creatures.iter().position(|c| c.id == id) else {
            log::warn!("remove of unknown creature {id}");
            return;
        };
        let (kind, value) = {
            let c = &self.creatures[pos];
            (c.kind, c.value)
        };
        let idx = self.level_index();
        if let Some(level) = self.levels.get_mut(idx) {
            level.consume(kind, value);
        }
        self.creatures.remove(pos);
    }

    pub fn clear_creatures(&mut self) {
        self.creatures.clear();
    }

    /// Resize the tank and push the new swim bounds to every live creature
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let bounds = self.swim_bounds();
        for creature in &mut self.creatures {
            creature.set_bounds(bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::KindSprites;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::new(0xcafe_f00d_d15e_a5e5, 0xa02b_dbf7_bb3c_0a7)
    }

    #[test]
    fn test_spawn_assigns_ids_and_bounds() {
        let mut tank = Tank::new(800.0, 600.0, Vec::new());
        let mut rng = rng();
        let mut sprites = KindSprites;
        let a = tank.spawn(CreatureKind::Fish, &mut rng, &mut sprites).unwrap();
        let b = tank.spawn(CreatureKind::Jellyfish, &mut rng, &mut sprites).unwrap();
        assert_ne!(a, b);
        assert_eq!(tank.creatures.len(), 2);
        for c in &tank.creatures {
            assert_eq!(c.bounds, Vec2::new(780.0, 580.0));
            assert!(c.pos.x >= 0.0 && c.pos.x < 800.0);
            assert!(c.pos.y >= 0.0 && c.pos.y < 600.0);
            assert!(c.speed >= 1.0);
        }
    }

    #[test]
    fn test_spawn_rejects_player_kind() {
        let mut tank = Tank::new(800.0, 600.0, Vec::new());
        let mut rng = rng();
        let mut sprites = KindSprites;
        assert!(tank.spawn(CreatureKind::Player, &mut rng, &mut sprites).is_none());
        assert!(tank.creatures.is_empty());
    }

    #[test]
    fn test_set_bounds_propagates() {
        let mut tank = Tank::new(800.0, 600.0, Vec::new());
        let mut rng = rng();
        let mut sprites = KindSprites;
        tank.spawn(CreatureKind::Fish, &mut rng, &mut sprites);
        tank.set_bounds(400.0, 300.0);
        assert_eq!(tank.creatures[0].bounds, Vec2::new(380.0, 280.0));
    }

    #[test]
    fn test_update_stocks_level_quota() {
        let levels = vec![Level::new(100, &[(CreatureKind::Fish, 3)])];
        let mut tank = Tank::new(800.0, 600.0, levels);
        let mut rng = rng();
        let mut sprites = KindSprites;
        let mut events = Vec::new();
        tank.update(&mut rng, &mut sprites, &mut events);
        assert_eq!(tank.creatures.len(), 3);
        assert!(events.is_empty());
        // Stable population on the next tick
        tank.update(&mut rng, &mut sprites, &mut events);
        assert_eq!(tank.creatures.len(), 3);
    }

    #[test]
    fn test_remove_books_consumption_then_erases() {
        let levels = vec![Level::new(100, &[(CreatureKind::Fish, 2)])];
        let mut tank = Tank::new(800.0, 600.0, levels);
        let mut rng = rng();
        let mut sprites = KindSprites;
        let mut events = Vec::new();
        tank.update(&mut rng, &mut sprites, &mut events);
        let id = tank.creatures[0].id;

        tank.remove_creature(id);
        assert_eq!(tank.creatures.len(), 1);
        let level = tank.current_level().unwrap();
        assert_eq!(level.population[0].current, 1);
        assert_eq!(level.score, 1);

        // The deficit refills on the next update
        tank.update(&mut rng, &mut sprites, &mut events);
        assert_eq!(tank.creatures.len(), 2);
    }

    #[test]
    fn test_remove_unknown_id_touches_nothing() {
        let levels = vec![Level::new(100, &[(CreatureKind::Fish, 2)])];
        let mut tank = Tank::new(800.0, 600.0, levels);
        let mut rng = rng();
        let mut sprites = KindSprites;
        let mut events = Vec::new();
        tank.update(&mut rng, &mut sprites, &mut events);

        tank.remove_creature(9999);
        assert_eq!(tank.creatures.len(), 2);
        let level = tank.current_level().unwrap();
        assert_eq!(level.population[0].current, 2);
        assert_eq!(level.score, 0);
    }

    #[test]
    fn test_level_transition_clears_and_advances() {
        let levels = vec![
            Level::new(1, &[(CreatureKind::Fish, 2)]),
            Level::new(100, &[(CreatureKind::Jellyfish, 4)]),
        ];
        let mut tank = Tank::new(800.0, 600.0, levels);
        let mut rng = rng();
        let mut sprites = KindSprites;
        let mut events = Vec::new();

        tank.update(&mut rng, &mut sprites, &mut events);
        let id = tank.creatures[0].id;
        tank.remove_creature(id); // level score hits 1 -> completed

        tank.update(&mut rng, &mut sprites, &mut events);
        assert_eq!(tank.level_index(), 1);
        assert!(matches!(events.as_slice(), [GameEvent::LevelAdvanced { level: 1 }]));
        // Survivors cleared, new level's quota stocked fresh
        assert_eq!(tank.creatures.len(), 4);
        assert!(tank.creatures.iter().all(|c| c.kind == CreatureKind::Jellyfish));
        // Completed level went back to zero for its next cycle
        assert!(tank.current_level().is_some());
    }

    #[test]
    fn test_level_cycle_wraps_and_replays() {
        let levels = vec![
            Level::new(1, &[(CreatureKind::Fish, 1)]),
            Level::new(1, &[(CreatureKind::Dartfish, 1)]),
        ];
        let mut tank = Tank::new(800.0, 600.0, levels);
        let mut rng = rng();
        let mut sprites = KindSprites;
        let mut events = Vec::new();

        for _ in 0..2 {
            tank.update(&mut rng, &mut sprites, &mut events);
            let id = tank.creatures[0].id;
            tank.remove_creature(id);
        }
        tank.update(&mut rng, &mut sprites, &mut events);
        // Wrapped back to level 0, which replays from scratch because its
        // score was reset on completion
        assert_eq!(tank.level_index(), 0);
        assert_eq!(tank.creatures.len(), 1);
        assert_eq!(tank.creatures[0].kind, CreatureKind::Fish);
        assert_eq!(tank.current_level().unwrap().score, 0);
    }

    #[test]
    fn test_update_without_levels_is_harmless() {
        let mut tank = Tank::new(800.0, 600.0, Vec::new());
        let mut rng = rng();
        let mut sprites = KindSprites;
        let mut events = Vec::new();
        tank.update(&mut rng, &mut sprites, &mut events);
        assert!(tank.creatures.is_empty());
        assert!(events.is_empty());
    }
}
