//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - Durations measured on the simulation clock, never wall time
//! - No rendering or platform dependencies

pub mod camera;
pub mod combat;
pub mod effects;
pub mod input;
pub mod state;
pub mod tick;

pub use camera::{Camera, ViewTransform, full_map_zoom};
pub use effects::{EffectKind, ScheduledEffect};
pub use input::{InputState, Key, TickInput};
pub use state::{
    Boon, Chest, ChestReward, GameMode, GamePhase, GameState, Item, Loadout, Player, PlayerId,
    Power, Projectile, Resource, ResourceKind, RngState, Weapon,
};
pub use tick::tick;
