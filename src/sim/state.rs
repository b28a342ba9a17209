//! Game state and core simulation types
//!
//! All state that must be snapshotted for determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::effects::ScheduledEffect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which of the two mini-games is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Ranged variant: mouse-aimed projectiles, zoom, full-map toggle
    Skirmish,
    /// Melee variant: swing radius, weapon multipliers, on-hit powers
    Brawl,
}

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Connected-but-waiting: the (simulated) server has not yet delivered
    /// the roster
    Waiting,
    /// Active gameplay
    Playing,
    /// The human player's health reached zero
    GameOver,
}

/// Stable per-session player identifier
pub type PlayerId = u32;

/// Melee weapon tag; scales melee damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Weapon {
    #[default]
    Fists,
    Sword,
    Bow,
    Staff,
}

impl Weapon {
    /// Damage multiplier applied on top of base damage and strength
    pub fn damage_multiplier(&self) -> f32 {
        match self {
            Weapon::Sword => 1.2,
            Weapon::Bow => 0.8,
            Weapon::Staff => 1.5,
            Weapon::Fists => 1.0,
        }
    }
}

/// Elemental on-hit side effect (Brawl only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Power {
    #[default]
    None,
    /// Delayed bonus damage if the target is still alive when it lands
    Fire,
    /// Halves the target's speed for a fixed window
    Ice,
    /// Immediate chain damage to players near the target
    Lightning,
}

/// Passive build tag adjusting max health / speed (Brawl only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Boon {
    #[default]
    None,
    /// +25 max health
    Hardy,
    /// +1 speed
    Fleet,
}

/// A Brawl player's full loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Loadout {
    pub weapon: Weapon,
    pub power: Power,
    pub boon: Boon,
}

impl Loadout {
    /// Max-health / speed adjustments this loadout grants
    pub fn stat_bonuses(&self) -> (i32, f32) {
        match self.boon {
            Boon::Hardy => (25, 0.0),
            Boon::Fleet => (0, 1.0),
            Boon::None => (0, 0.0),
        }
    }
}

/// Inventory item granted by chests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    Potion,
    Shield,
    SwordUpgrade,
    Armor,
}

impl Item {
    pub const ALL: [Item; 4] = [Item::Potion, Item::Shield, Item::SwordUpgrade, Item::Armor];

    pub fn name(&self) -> &'static str {
        match self {
            Item::Potion => "Potion",
            Item::Shield => "Shield",
            Item::SwordUpgrade => "Sword Upgrade",
            Item::Armor => "Armor",
        }
    }
}

/// A player entity (human or bot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub pos: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// Walking speed in world units per tick
    pub speed: f32,
    /// Damage scaling factor
    pub strength: f32,
    /// Index into the renderer's player palette
    pub color: u8,
    /// Last intentional heading (unit vector); dash travels along this
    pub direction: Vec2,
    pub is_dashing: bool,
    /// Sim-clock timestamp the current dash started at
    pub dash_started_ms: f64,
    /// Sim-clock timestamp of the last accepted attack (None = never)
    pub last_attack_ms: Option<f64>,
    /// Wander destination; present only for bots, lazily (re)assigned
    pub bot_target: Option<Vec2>,
    pub loadout: Loadout,
    pub gold: u32,
    pub inventory: Vec<Item>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, pos: Vec2, color: u8) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
            health: START_HEALTH,
            max_health: START_HEALTH,
            speed: PLAYER_SPEED,
            strength: 1.0,
            color,
            direction: Vec2::ZERO,
            is_dashing: false,
            dash_started_ms: 0.0,
            last_attack_ms: None,
            bot_target: None,
            loadout: Loadout::default(),
            gold: 0,
            inventory: Vec::new(),
        }
    }

    /// Apply a loadout, folding its stat bonuses into max health / speed
    pub fn with_loadout(mut self, loadout: Loadout) -> Self {
        let (hp_bonus, speed_bonus) = loadout.stat_bonuses();
        self.loadout = loadout;
        self.max_health = START_HEALTH + hp_bonus;
        self.health = self.max_health;
        self.speed = PLAYER_SPEED + speed_bonus;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract damage, flooring at zero
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Restore health, capped at max
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}

/// A projectile in flight (Skirmish only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Unit travel direction, fixed at spawn
    pub direction: Vec2,
    pub speed: f32,
    pub damage: i32,
    pub owner: PlayerId,
}

impl Projectile {
    /// Whether the projectile has left the padded world band
    pub fn out_of_bounds(&self) -> bool {
        self.pos.x < -PROJECTILE_RADIUS
            || self.pos.x > WORLD_WIDTH + PROJECTILE_RADIUS
            || self.pos.y < -PROJECTILE_RADIUS
            || self.pos.y > WORLD_HEIGHT + PROJECTILE_RADIUS
    }
}

/// Ground pickup kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Currency,
    Healing,
}

/// A ground pickup; `collected` flips false -> true exactly once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub pos: Vec2,
    pub kind: ResourceKind,
    pub collected: bool,
}

/// A chest; `opened` flips false -> true exactly once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chest {
    pub pos: Vec2,
    pub opened: bool,
}

/// Reward resolved by a single random draw at open time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestReward {
    Currency(u32),
    Item(Item),
}

impl ChestReward {
    /// Resolve a chest reward from two unit-interval rolls.
    ///
    /// `reward_roll < 0.5` grants currency; otherwise `item_roll` indexes
    /// the item table uniformly. Pure so tests can pin the draws.
    pub fn resolve(reward_roll: f32, item_roll: f32) -> Self {
        if reward_roll < 0.5 {
            ChestReward::Currency(CHEST_CURRENCY_GOLD)
        } else {
            let idx = ((item_roll * Item::ALL.len() as f32) as usize).min(Item::ALL.len() - 1);
            ChestReward::Item(Item::ALL[idx])
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

fn fresh_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    pub phase: GamePhase,
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    /// Live RNG; rebuild from `rng_state` after deserializing a snapshot
    #[serde(skip, default = "fresh_rng")]
    pub rng: Pcg32,
    /// Simulation clock in milliseconds; all durations measure against this
    pub clock_ms: f64,
    /// All players including the human, sorted by id for determinism
    pub players: Vec<Player>,
    pub human_id: PlayerId,
    pub projectiles: Vec<Projectile>,
    pub resources: Vec<Resource>,
    pub chests: Vec<Chest>,
    pub camera: Camera,
    /// Delayed mutations (burn, slow-expiry) keyed by fire time
    pub scheduled_effects: Vec<ScheduledEffect>,
    pub tuning: Tuning,
    next_id: PlayerId,
}

impl GameState {
    /// Create a new match with the given seed; the human player spawns at
    /// the world center and the camera frames them immediately
    pub fn new(mode: GameMode, name: impl Into<String>, seed: u64) -> Self {
        Self::with_tuning(mode, name, seed, Tuning::default())
    }

    pub fn with_tuning(mode: GameMode, name: impl Into<String>, seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        let color = rng.random_range(0..PLAYER_COLOR_COUNT) as u8;

        let mut state = Self {
            mode,
            phase: GamePhase::Waiting,
            seed,
            rng_state: RngState::new(seed),
            rng,
            clock_ms: 0.0,
            players: Vec::new(),
            human_id: 0,
            projectiles: Vec::new(),
            resources: Vec::new(),
            chests: Vec::new(),
            camera: Camera::new(mode, center),
            scheduled_effects: Vec::new(),
            tuning,
            next_id: 0,
        };

        let id = state.next_entity_id();
        state.human_id = id;
        state.players.push(Player::new(id, name, center, color));
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> PlayerId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn human(&self) -> &Player {
        self.players
            .iter()
            .find(|p| p.id == self.human_id)
            .expect("human player always present")
    }

    pub fn human_mut(&mut self) -> &mut Player {
        let id = self.human_id;
        self.player_mut(id).expect("human player always present")
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Ensure players are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.players.sort_by_key(|p| p.id);
    }
}
