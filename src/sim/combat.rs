//! Hit tests and damage math for both game variants
//!
//! Pure functions over player slices; the tick applies the results. All
//! collision shapes are circles, tested strictly inside their combined
//! radius.

use glam::Vec2;

use super::state::{Player, PlayerId, Weapon};
use crate::consts::*;

/// Circle-circle overlap test
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Melee damage: base x strength x weapon multiplier, rounded
pub fn melee_damage(base: f32, strength: f32, weapon: Weapon) -> i32 {
    (base * strength * weapon.damage_multiplier()).round() as i32
}

/// Ids of every player other than the attacker inside the swing radius
pub fn melee_targets(attacker: PlayerId, origin: Vec2, players: &[Player]) -> Vec<PlayerId> {
    players
        .iter()
        .filter(|p| p.id != attacker && p.pos.distance(origin) < ATTACK_RANGE)
        .map(|p| p.id)
        .collect()
}

/// Ids of players within lightning range of `center`, excluding the struck
/// target and the attacker
pub fn chain_targets(
    center: Vec2,
    target: PlayerId,
    attacker: PlayerId,
    players: &[Player],
) -> Vec<PlayerId> {
    players
        .iter()
        .filter(|p| {
            p.id != target && p.id != attacker && p.pos.distance(center) < LIGHTNING_RANGE
        })
        .map(|p| p.id)
        .collect()
}

/// First player (by slice order) hit by a projectile, skipping its owner
pub fn projectile_hit(pos: Vec2, owner: PlayerId, players: &[Player]) -> Option<PlayerId> {
    players
        .iter()
        .find(|p| p.id != owner && circles_overlap(pos, PROJECTILE_RADIUS, p.pos, PLAYER_RADIUS))
        .map(|p| p.id)
}
