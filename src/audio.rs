//! Sound-cue mapping for the host shell
//!
//! The sim queues `GameEvent`s; the host drains them after each tick and
//! plays whatever its audio backend maps these cues to. Fire-and-forget: the
//! core never consumes a return value from the sound side.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player swallowed a creature
    Eat,
    /// Two creatures bounced off each other
    Bounce,
    /// Player grabbed a speed boost
    PowerUpCollect,
    /// Player lost a life
    LifeLost,
    /// Level completed, tank restocked
    LevelUp,
    /// Run ended
    GameOver,
}

/// Map a simulation event to the cue the host should play, if any
pub fn effect_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::Ate { .. } => Some(SoundEffect::Eat),
        GameEvent::CreaturesBounced { .. } => Some(SoundEffect::Bounce),
        GameEvent::PowerUpCollected { .. } => Some(SoundEffect::PowerUpCollect),
        GameEvent::LifeLost { .. } => Some(SoundEffect::LifeLost),
        GameEvent::LevelAdvanced { .. } => Some(SoundEffect::LevelUp),
        GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
        GameEvent::PowerIncreased { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat_and_bounce_have_cues() {
        let ate = GameEvent::Ate {
            id: 7,
            kind: crate::sim::CreatureKind::Fish,
            value: 1,
        };
        assert_eq!(effect_for(&ate), Some(SoundEffect::Eat));
        let bounced = GameEvent::CreaturesBounced { a: 1, b: 2 };
        assert_eq!(effect_for(&bounced), Some(SoundEffect::Bounce));
    }

    #[test]
    fn test_power_rise_is_silent() {
        let event = GameEvent::PowerIncreased { power: 2 };
        assert_eq!(effect_for(&event), None);
    }
}
