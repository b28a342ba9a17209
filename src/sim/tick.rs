//! Simulation tick
//!
//! Advances the whole match by one discrete step. The order of operations
//! is fixed so identical inputs always produce identical outcomes:
//! dash resolution, movement, bounds clamp, camera, dash trigger, attack
//! trigger, projectile advance, pickups, chests, terminal check.
//!
//! The clock and the scheduled-effect queue run in every phase; intent
//! processing is gated on `Playing`.

use glam::Vec2;
use rand::Rng;

use super::combat;
use super::effects::{EffectKind, ScheduledEffect, drain_due};
use super::input::TickInput;
use super::state::{ChestReward, GameMode, GamePhase, GameState, Power, Projectile, ResourceKind};
use crate::consts::*;
use crate::{clamp_to_world, toward};

/// Advance the game state by one tick; `dt_ms` is the host frame delta
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) {
    state.clock_ms += dt_ms;

    // Delayed effects fire even after game over; each application re-checks
    // its target (the burn may have been scheduled against a player who has
    // since died)
    let due = drain_due(&mut state.scheduled_effects, state.clock_ms);
    for effect in due {
        match effect.kind {
            EffectKind::BurnDamage { target, amount } => {
                if let Some(player) = state.player_mut(target) {
                    if player.is_alive() {
                        player.apply_damage(amount);
                    }
                }
            }
            EffectKind::RestoreSpeed { target, speed } => {
                if let Some(player) = state.player_mut(target) {
                    player.speed = speed;
                }
            }
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    let clock = state.clock_ms;
    let tuning = state.tuning;
    let human_id = state.human_id;

    // --- Dash resolution, movement, bounds clamp ---
    for player in state.players.iter_mut() {
        if player.is_dashing {
            if clock - player.dash_started_ms < tuning.dash_duration_ms {
                player.pos += player.direction * tuning.dash_speed;
            } else {
                player.is_dashing = false;
            }
        } else if player.id == human_id {
            if input.movement != Vec2::ZERO {
                player.direction = input.movement;
                player.pos += input.movement * player.speed;
            }
        } else {
            // Bot wandering: lazily (re)acquire a random destination, walk
            // toward it at half speed, stop when close enough
            if player.bot_target.is_none()
                || state.rng.random::<f32>() < tuning.bot_retarget_chance
            {
                player.bot_target = Some(Vec2::new(
                    state
                        .rng
                        .random_range(PLAYER_RADIUS..WORLD_WIDTH - PLAYER_RADIUS),
                    state
                        .rng
                        .random_range(PLAYER_RADIUS..WORLD_HEIGHT - PLAYER_RADIUS),
                ));
            }
            if let Some(target) = player.bot_target {
                if player.pos.distance(target) > BOT_ARRIVE_THRESHOLD {
                    player.pos += toward(player.pos, target) * player.speed * BOT_SPEED_FACTOR;
                }
            }
        }

        player.pos = clamp_to_world(player.pos, PLAYER_RADIUS);
    }

    // --- Camera ---
    if state.mode == GameMode::Skirmish {
        if input.zoom_delta != 0.0 {
            state.camera.adjust_zoom(input.zoom_delta);
        }
        if input.toggle_full_map {
            state.camera.toggle_full_map();
        }
    }
    let human_pos = state.human().pos;
    state.camera.follow(human_pos);

    // --- Dash trigger ---
    // Held keys win; with no keys held, dash toward the pointer. Triggering
    // mid-dash is a no-op.
    if input.dash {
        let pointer_world = state.camera.screen_to_world(input.pointer);
        let human = state.human_mut();
        if !human.is_dashing {
            human.is_dashing = true;
            human.dash_started_ms = clock;
            human.direction = if input.movement != Vec2::ZERO {
                input.movement
            } else {
                toward(human.pos, pointer_world)
            };
        }
    }

    // --- Attack trigger ---
    // Requests inside the cooldown window are dropped, not queued
    if input.attack {
        let cooldown = match state.mode {
            GameMode::Skirmish => tuning.ranged_cooldown_ms,
            GameMode::Brawl => tuning.melee_cooldown_ms,
        };
        let ready = state
            .human()
            .last_attack_ms
            .is_none_or(|t| clock - t >= cooldown);
        if ready {
            state.human_mut().last_attack_ms = Some(clock);
            match state.mode {
                GameMode::Skirmish => {
                    let origin = state.human().pos;
                    let aim = state.camera.screen_to_world(input.pointer);
                    let direction = toward(origin, aim);
                    if direction != Vec2::ZERO {
                        state.projectiles.push(Projectile {
                            pos: origin,
                            direction,
                            speed: tuning.projectile_speed,
                            damage: tuning.projectile_damage,
                            owner: human_id,
                        });
                    }
                }
                GameMode::Brawl => resolve_melee(state, clock),
            }
        }
    }

    // --- Projectile advance ---
    // At most one hit per projectile: it is removed on the first
    let mut idx = 0;
    while idx < state.projectiles.len() {
        let step = state.projectiles[idx].direction * state.projectiles[idx].speed;
        state.projectiles[idx].pos += step;

        let hit = combat::projectile_hit(
            state.projectiles[idx].pos,
            state.projectiles[idx].owner,
            &state.players,
        );
        if let Some(target_id) = hit {
            let damage = state.projectiles[idx].damage;
            if let Some(player) = state.player_mut(target_id) {
                player.apply_damage(damage);
            }
            state.projectiles.remove(idx);
            continue;
        }
        if state.projectiles[idx].out_of_bounds() {
            state.projectiles.remove(idx);
            continue;
        }
        idx += 1;
    }

    // --- Resource pickup ---
    for i in 0..state.players.len() {
        let player_pos = state.players[i].pos;
        for resource in state.resources.iter_mut() {
            if resource.collected {
                continue;
            }
            if player_pos.distance(resource.pos) < PLAYER_RADIUS + RESOURCE_PICKUP_PAD {
                resource.collected = true;
                match resource.kind {
                    ResourceKind::Currency => state.players[i].gold += CURRENCY_RESOURCE_GOLD,
                    ResourceKind::Healing => state.players[i].heal(HEALING_RESOURCE_AMOUNT),
                }
            }
        }
    }

    // --- Chest opening ---
    for i in 0..state.players.len() {
        let player_pos = state.players[i].pos;
        for chest in state.chests.iter_mut() {
            if chest.opened {
                continue;
            }
            if player_pos.distance(chest.pos) < PLAYER_RADIUS + CHEST_OPEN_PAD {
                chest.opened = true;
                let reward_roll: f32 = state.rng.random();
                let item_roll: f32 = if reward_roll < 0.5 {
                    0.0
                } else {
                    state.rng.random()
                };
                match ChestReward::resolve(reward_roll, item_roll) {
                    ChestReward::Currency(amount) => state.players[i].gold += amount,
                    ChestReward::Item(item) => {
                        log::debug!("{} looted {}", state.players[i].name, item.name());
                        state.players[i].inventory.push(item);
                    }
                }
            }
        }
    }

    // --- Terminal condition ---
    if !state.human().is_alive() {
        state.phase = GamePhase::GameOver;
        log::info!("game over after {:.0} ms", state.clock_ms);
    }

    state.normalize_order();
}

/// Resolve a melee swing: damage every other player inside the swing
/// radius, then apply the attacker's power side effect per hit. Effects are
/// independently timed and never cancelled by later hits.
fn resolve_melee(state: &mut GameState, clock: f64) {
    let tuning = state.tuning;
    let attacker = state.human();
    let (attacker_id, origin, strength, weapon, power) = (
        attacker.id,
        attacker.pos,
        attacker.strength,
        attacker.loadout.weapon,
        attacker.loadout.power,
    );

    let targets = combat::melee_targets(attacker_id, origin, &state.players);
    for target_id in targets {
        let damage = combat::melee_damage(tuning.melee_base_damage, strength, weapon);
        if let Some(target) = state.player_mut(target_id) {
            target.apply_damage(damage);
        }

        match power {
            Power::Fire => {
                state.scheduled_effects.push(ScheduledEffect {
                    fire_at_ms: clock + tuning.burn_delay_ms,
                    kind: EffectKind::BurnDamage {
                        target: target_id,
                        amount: tuning.burn_damage,
                    },
                });
            }
            Power::Ice => {
                // Captures the speed current before *this* application;
                // overlapping slows restore to a slowed value, matching the
                // original behavior (see DESIGN.md)
                let pre_slow = state.player_mut(target_id).map(|target| {
                    let pre = target.speed;
                    target.speed *= ICE_SLOW_FACTOR;
                    pre
                });
                if let Some(speed) = pre_slow {
                    state.scheduled_effects.push(ScheduledEffect {
                        fire_at_ms: clock + tuning.ice_slow_ms,
                        kind: EffectKind::RestoreSpeed {
                            target: target_id,
                            speed,
                        },
                    });
                }
            }
            Power::Lightning => {
                if let Some(center) = state.player(target_id).map(|p| p.pos) {
                    for chained in
                        combat::chain_targets(center, target_id, attacker_id, &state.players)
                    {
                        if let Some(player) = state.player_mut(chained) {
                            player.apply_damage(tuning.lightning_damage);
                        }
                    }
                }
            }
            Power::None => {}
        }
    }
}
