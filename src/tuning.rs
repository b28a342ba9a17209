//! Data-driven game balance
//!
//! The combat and movement scalars the tick reads, overridable from JSON
//! without recompiling. Defaults mirror the shipped constants; geometry
//! (radii, world size) stays in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub dash_speed: f32,
    pub dash_duration_ms: f64,
    pub ranged_cooldown_ms: f64,
    pub melee_cooldown_ms: f64,
    pub melee_base_damage: f32,
    pub projectile_speed: f32,
    pub projectile_damage: i32,
    pub burn_delay_ms: f64,
    pub burn_damage: i32,
    pub ice_slow_ms: f64,
    pub lightning_damage: i32,
    pub bot_retarget_chance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dash_speed: DASH_SPEED,
            dash_duration_ms: DASH_DURATION_MS,
            ranged_cooldown_ms: RANGED_COOLDOWN_MS,
            melee_cooldown_ms: MELEE_COOLDOWN_MS,
            melee_base_damage: MELEE_BASE_DAMAGE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_damage: PROJECTILE_DAMAGE,
            burn_delay_ms: BURN_DELAY_MS,
            burn_damage: BURN_DAMAGE,
            ice_slow_ms: ICE_SLOW_MS,
            lightning_damage: LIGHTNING_DAMAGE,
            bot_retarget_chance: BOT_RETARGET_CHANCE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning override; missing fields keep
    /// their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.dash_speed, DASH_SPEED);
        assert_eq!(tuning.melee_cooldown_ms, MELEE_COOLDOWN_MS);
        assert_eq!(tuning.projectile_damage, PROJECTILE_DAMAGE);
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{"dash_speed": 12.0, "burn_damage": 9}"#).unwrap();
        assert_eq!(tuning.dash_speed, 12.0);
        assert_eq!(tuning.burn_damage, 9);
        assert_eq!(tuning.melee_base_damage, MELEE_BASE_DAMAGE);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Tuning::from_json("{not json").is_err());
    }
}
