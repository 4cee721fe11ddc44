//! Data-driven game balance
//!
//! Every orchestrator knob in one serde struct so hosts can rebalance the
//! game from data instead of a recompile. Defaults mirror `crate::consts`;
//! JSON input may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_lives: u32,
    pub player_speed: f32,
    /// Immunity window after a life loss, in ticks
    pub damage_debounce_ticks: u32,
    pub boost_multiplier: f32,
    pub boost_duration_ticks: u32,
    /// Score per creature eaten
    pub points_per_catch: u32,
    /// Power rises when the score reaches a multiple of this
    pub power_score_interval: u32,
    /// Collision consequences run every Nth tick
    pub collision_interval: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_lives: PLAYER_START_LIVES,
            player_speed: PLAYER_SPEED,
            damage_debounce_ticks: DAMAGE_DEBOUNCE_TICKS,
            boost_multiplier: BOOST_MULTIPLIER,
            boost_duration_ticks: BOOST_DURATION_TICKS,
            points_per_catch: POINTS_PER_CATCH,
            power_score_interval: POWER_SCORE_INTERVAL,
            collision_interval: COLLISION_INTERVAL,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Malformed input is reported and falls back
    /// to the defaults; a bad balance file should never kill a session.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("ignoring malformed tuning ({err}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_consts() {
        let t = Tuning::default();
        assert_eq!(t.player_lives, 10);
        assert_eq!(t.damage_debounce_ticks, 180);
        assert_eq!(t.boost_duration_ticks, 300);
        assert_eq!(t.power_score_interval, 25);
    }

    #[test]
    fn test_partial_json_overrides() {
        let t = Tuning::from_json(r#"{"player_lives": 3, "collision_interval": 1}"#);
        assert_eq!(t.player_lives, 3);
        assert_eq!(t.collision_interval, 1);
        // Untouched fields keep their defaults
        assert_eq!(t.boost_multiplier, 2.0);
    }

    #[test]
    fn test_bad_json_falls_back_to_defaults() {
        let t = Tuning::from_json("{not json");
        assert_eq!(t, Tuning::default());
    }

    #[test]
    fn test_round_trip() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).expect("tuning serializes");
        assert_eq!(Tuning::from_json(&json), t);
    }
}
