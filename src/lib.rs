//! Arena Brawl - top-down arena mini-games
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, pickups, camera)
//! - `renderer`: Translates state snapshots into draw-command frames
//! - `hud`: Textual player-list / health-bar boundary for a UI layer
//! - `server`: Simulated game-server connect behind an injectable trait
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod renderer;
pub mod server;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal tick length for hosts driving at ~60 Hz; durations measure
    /// real elapsed milliseconds, not tick counts
    pub const TICK_MS: f64 = 1000.0 / 60.0;

    /// Viewport (canvas) dimensions in screen pixels
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// World dimensions in world units
    pub const WORLD_WIDTH: f32 = 1600.0;
    pub const WORLD_HEIGHT: f32 = 1200.0;

    /// Number of body colors players are assigned from
    pub const PLAYER_COLOR_COUNT: usize = 6;

    /// Player collision radius
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Base walking speed (world units per tick)
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const START_HEALTH: i32 = 100;

    /// Dash burst speed (world units per tick)
    pub const DASH_SPEED: f32 = 8.0;
    /// Dash duration in simulated milliseconds
    pub const DASH_DURATION_MS: f64 = 200.0;

    /// Melee swing radius around the attacker
    pub const ATTACK_RANGE: f32 = 50.0;
    pub const MELEE_BASE_DAMAGE: f32 = 20.0;
    pub const MELEE_COOLDOWN_MS: f64 = 500.0;
    pub const RANGED_COOLDOWN_MS: f64 = 300.0;

    pub const PROJECTILE_SPEED: f32 = 8.0;
    pub const PROJECTILE_RADIUS: f32 = 4.0;
    pub const PROJECTILE_DAMAGE: i32 = 15;

    /// Camera zoom bounds and per-wheel-event step
    pub const MIN_ZOOM: f32 = 0.5;
    pub const MAX_ZOOM: f32 = 2.0;
    pub const ZOOM_STEP: f32 = 0.1;
    /// Smooth-follow interpolation factor per tick
    pub const CAMERA_LERP: f32 = 0.1;

    /// Pickup reach beyond the player radius
    pub const RESOURCE_PICKUP_PAD: f32 = 10.0;
    pub const CHEST_OPEN_PAD: f32 = 15.0;

    pub const CURRENCY_RESOURCE_GOLD: u32 = 10;
    pub const HEALING_RESOURCE_AMOUNT: i32 = 20;
    pub const CHEST_CURRENCY_GOLD: u32 = 25;

    /// World population installed by the (simulated) server
    pub const RESOURCE_COUNT: usize = 20;
    pub const CHEST_COUNT: usize = 10;
    pub const BOT_COUNT: usize = 3;
    /// Pickups land at least this far from the world edge
    pub const SPAWN_MARGIN: f32 = 20.0;

    /// Brawl on-hit powers
    pub const BURN_DELAY_MS: f64 = 1000.0;
    pub const BURN_DAMAGE: i32 = 5;
    pub const ICE_SLOW_MS: f64 = 3000.0;
    pub const ICE_SLOW_FACTOR: f32 = 0.5;
    pub const LIGHTNING_RANGE: f32 = 100.0;
    pub const LIGHTNING_DAMAGE: i32 = 10;

    /// Bot wandering
    pub const BOT_RETARGET_CHANCE: f32 = 0.02;
    pub const BOT_ARRIVE_THRESHOLD: f32 = 5.0;
    pub const BOT_SPEED_FACTOR: f32 = 0.5;
}

/// Unit vector from `from` toward `to`; zero vector when the points coincide
/// (guards the division by zero in normalization)
#[inline]
pub fn toward(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Clamp a point into world bounds inset by `inset` on every side
#[inline]
pub fn clamp_to_world(pos: Vec2, inset: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(inset, consts::WORLD_WIDTH - inset),
        pos.y.clamp(inset, consts::WORLD_HEIGHT - inset),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toward_zero_distance() {
        let p = Vec2::new(50.0, 50.0);
        assert_eq!(toward(p, p), Vec2::ZERO);
    }

    #[test]
    fn test_toward_is_unit() {
        let dir = toward(Vec2::ZERO, Vec2::new(30.0, 40.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
        assert!((dir.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_to_world() {
        let inset = consts::PLAYER_RADIUS;
        let clamped = clamp_to_world(Vec2::new(-100.0, 5000.0), inset);
        assert_eq!(clamped.x, inset);
        assert_eq!(clamped.y, consts::WORLD_HEIGHT - inset);
    }
}
