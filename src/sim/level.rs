//! Level controller: population quotas, level score, completion
//!
//! One parametrized level type driven by a quota table. A level tracks how
//! many of each creature kind should be alive (`target`) versus how many its
//! bookkeeping says are alive (`current`), accumulates score from consumed
//! creatures, and reports completion once the score reaches its threshold.

use serde::{Deserialize, Serialize};

use super::creature::CreatureKind;

/// Quota entry binding a creature kind to its population counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationNode {
    pub kind: CreatureKind,
    /// How many of this kind the level keeps stocked
    pub target: u32,
    /// How many the bookkeeping currently counts as alive
    pub current: u32,
}

impl PopulationNode {
    pub fn new(kind: CreatureKind, target: u32) -> Self {
        Self {
            kind,
            target,
            current: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub population: Vec<PopulationNode>,
    /// Cumulative value of creatures consumed this level
    pub score: u32,
    pub target_score: u32,
}

impl Level {
    pub fn new(target_score: u32, quotas: &[(CreatureKind, u32)]) -> Self {
        Self {
            population: quotas
                .iter()
                .map(|&(kind, target)| PopulationNode::new(kind, target))
                .collect(),
            score: 0,
            target_score,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.score >= self.target_score
    }

    /// Book one consumed creature: decrement the first node matching `kind`
    /// and add `value` to the level score. An exhausted or missing node is a
    /// no-op; the lookup stops at the first match either way.
    pub fn consume(&mut self, kind: CreatureKind, value: u32) {
        for node in &mut self.population {
            if node.kind == kind {
                if node.current == 0 {
                    log::warn!("consume on exhausted {} node", kind.as_str());
                    return;
                }
                node.current -= 1;
                self.score += value;
                return;
            }
        }
    }

    /// Demand signal: one kind entry per missing creature. Raises every
    /// node's bookkeeping to its target, so a second call without
    /// consumption in between returns nothing.
    pub fn repopulate(&mut self) -> Vec<CreatureKind> {
        let mut to_spawn = Vec::new();
        for node in &mut self.population {
            let deficit = node.target - node.current;
            if deficit > 0 {
                for _ in 0..deficit {
                    to_spawn.push(node.kind);
                }
                node.current = node.target;
            }
        }
        to_spawn
    }

    /// Zero the bookkeeping and the level score; the next repopulation
    /// restocks from scratch
    pub fn reset(&mut self) {
        for node in &mut self.population {
            node.current = 0;
        }
        self.score = 0;
    }
}

/// The campaign: four levels, denser and tougher as they go. Levels cycle
/// once the last one completes.
pub fn campaign_levels() -> Vec<Level> {
    vec![
        Level::new(25, &[(CreatureKind::Fish, 6)]),
        Level::new(
            40,
            &[
                (CreatureKind::Fish, 5),
                (CreatureKind::Jellyfish, 3),
                (CreatureKind::PowerUp, 1),
            ],
        ),
        Level::new(
            60,
            &[
                (CreatureKind::Fish, 4),
                (CreatureKind::Jellyfish, 3),
                (CreatureKind::Dartfish, 3),
                (CreatureKind::PowerUp, 1),
            ],
        ),
        Level::new(
            80,
            &[
                (CreatureKind::Fish, 4),
                (CreatureKind::Jellyfish, 2),
                (CreatureKind::Dartfish, 3),
                (CreatureKind::BigFish, 2),
                (CreatureKind::PowerUp, 1),
            ],
        ),
    ]
}
