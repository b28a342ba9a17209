//! Simulated game-server boundary
//!
//! No real networking exists: "connecting" is a fixed delay after which a
//! roster of bots and the world pickups arrive. The trait is the seam a
//! real client would plug into later.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::state::{
    Boon, Chest, GamePhase, GameState, Loadout, Player, Power, Resource, ResourceKind, Weapon,
};

/// Everything the server delivers on connect
#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    /// Bot players, without ids; the receiving state allocates them
    pub bots: Vec<BotSpawn>,
    pub resources: Vec<Resource>,
    pub chests: Vec<Chest>,
}

#[derive(Debug, Clone)]
pub struct BotSpawn {
    pub name: String,
    pub pos: Vec2,
    pub color: u8,
    pub loadout: Loadout,
}

/// Connection seam; `poll` returns the roster exactly once, after the
/// connect delay has elapsed on the simulation clock
pub trait GameServerClient {
    fn poll(&mut self, now_ms: f64) -> Option<RosterSnapshot>;
}

/// The client-side stand-in: waits out a fixed delay, then fabricates a
/// roster from a seeded RNG
pub struct SimulatedServer {
    delay_ms: f64,
    seed: u64,
    delivered: bool,
}

impl SimulatedServer {
    /// `delay_ms` models connect latency; the original shipped 500 ms
    pub fn new(delay_ms: f64, seed: u64) -> Self {
        Self {
            delay_ms,
            seed,
            delivered: false,
        }
    }

    fn build_roster(&self) -> RosterSnapshot {
        let mut rng = Pcg32::seed_from_u64(self.seed);

        let bots = (0..BOT_COUNT)
            .map(|i| BotSpawn {
                name: format!("Bot {}", i + 1),
                pos: Vec2::new(100.0 + 200.0 * i as f32, 100.0 + 150.0 * i as f32),
                color: rng.random_range(0..PLAYER_COLOR_COUNT) as u8,
                loadout: random_loadout(&mut rng),
            })
            .collect();

        let resources = (0..RESOURCE_COUNT)
            .map(|_| Resource {
                pos: spawn_pos(&mut rng),
                kind: if rng.random::<f32>() > 0.5 {
                    ResourceKind::Currency
                } else {
                    ResourceKind::Healing
                },
                collected: false,
            })
            .collect();

        let chests = (0..CHEST_COUNT)
            .map(|_| Chest {
                pos: spawn_pos(&mut rng),
                opened: false,
            })
            .collect();

        RosterSnapshot {
            bots,
            resources,
            chests,
        }
    }
}

impl GameServerClient for SimulatedServer {
    fn poll(&mut self, now_ms: f64) -> Option<RosterSnapshot> {
        if self.delivered || now_ms < self.delay_ms {
            return None;
        }
        self.delivered = true;
        log::info!("connected after {:.0} ms, roster ready", now_ms);
        Some(self.build_roster())
    }
}

fn spawn_pos(rng: &mut Pcg32) -> Vec2 {
    Vec2::new(
        rng.random_range(SPAWN_MARGIN..WORLD_WIDTH - SPAWN_MARGIN),
        rng.random_range(SPAWN_MARGIN..WORLD_HEIGHT - SPAWN_MARGIN),
    )
}

fn random_loadout(rng: &mut Pcg32) -> Loadout {
    let weapons = [Weapon::Fists, Weapon::Sword, Weapon::Bow, Weapon::Staff];
    let powers = [Power::None, Power::Fire, Power::Ice, Power::Lightning];
    let boons = [Boon::None, Boon::Hardy, Boon::Fleet];
    Loadout {
        weapon: weapons[rng.random_range(0..weapons.len())],
        power: powers[rng.random_range(0..powers.len())],
        boon: boons[rng.random_range(0..boons.len())],
    }
}

impl GameState {
    /// Install a roster snapshot and start playing
    pub fn apply_roster(&mut self, roster: RosterSnapshot) {
        for spawn in roster.bots {
            let id = self.next_entity_id();
            let player =
                Player::new(id, spawn.name, spawn.pos, spawn.color).with_loadout(spawn.loadout);
            self.players.push(player);
        }
        self.resources = roster.resources;
        self.chests = roster.chests;
        self.normalize_order();
        if self.phase == GamePhase::Waiting {
            self.phase = GamePhase::Playing;
        }
        log::info!(
            "match started: {} players, {} resources, {} chests",
            self.players.len(),
            self.resources.len(),
            self.chests.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameMode;

    #[test]
    fn test_poll_waits_out_the_delay() {
        let mut server = SimulatedServer::new(500.0, 42);
        assert!(server.poll(499.9).is_none());
        assert!(server.poll(500.0).is_some());
    }

    #[test]
    fn test_poll_delivers_exactly_once() {
        let mut server = SimulatedServer::new(500.0, 42);
        assert!(server.poll(600.0).is_some());
        assert!(server.poll(700.0).is_none());
    }

    #[test]
    fn test_roster_population_counts() {
        let mut server = SimulatedServer::new(0.0, 42);
        let roster = server.poll(0.0).unwrap();
        assert_eq!(roster.bots.len(), BOT_COUNT);
        assert_eq!(roster.resources.len(), RESOURCE_COUNT);
        assert_eq!(roster.chests.len(), CHEST_COUNT);
        for resource in &roster.resources {
            assert!(resource.pos.x >= SPAWN_MARGIN);
            assert!(resource.pos.x <= WORLD_WIDTH - SPAWN_MARGIN);
            assert!(!resource.collected);
        }
    }

    #[test]
    fn test_roster_is_deterministic_per_seed() {
        let a = SimulatedServer::new(0.0, 7).poll(0.0).unwrap();
        let b = SimulatedServer::new(0.0, 7).poll(0.0).unwrap();
        for (ra, rb) in a.resources.iter().zip(b.resources.iter()) {
            assert_eq!(ra.pos, rb.pos);
            assert_eq!(ra.kind, rb.kind);
        }
        for (ba, bb) in a.bots.iter().zip(b.bots.iter()) {
            assert_eq!(ba.loadout, bb.loadout);
        }
    }

    #[test]
    fn test_apply_roster_starts_the_match() {
        let mut state = GameState::new(GameMode::Brawl, "Hero", 7);
        assert_eq!(state.phase, GamePhase::Waiting);

        let roster = SimulatedServer::new(0.0, 7).poll(0.0).unwrap();
        state.apply_roster(roster);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.players.len(), 1 + BOT_COUNT);
        // Bot ids are distinct and sorted after the human
        let ids: Vec<_> = state.players.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
