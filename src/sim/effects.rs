//! Scheduled one-shot effects (burn damage, slow expiry)
//!
//! Delayed mutations are queued with a fire time on the simulation clock
//! and polled once per tick, so tests never need real wall-clock waits.
//! Application always re-checks the target: an effect may outlive the
//! state it was scheduled against.

use serde::{Deserialize, Serialize};

use super::state::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Fire power: bonus damage landing after a delay, only if the target
    /// is still alive at fire time
    BurnDamage { target: PlayerId, amount: i32 },
    /// Ice power expiry: write back the speed captured when the slow was
    /// applied (the value current *before that application*, which can lose
    /// the true baseline under overlapping slows - intentional)
    RestoreSpeed { target: PlayerId, speed: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEffect {
    /// Simulation-clock timestamp this effect fires at
    pub fire_at_ms: f64,
    pub kind: EffectKind,
}

/// Remove and return every effect due at `now_ms`, preserving queue order
pub fn drain_due(queue: &mut Vec<ScheduledEffect>, now_ms: f64) -> Vec<ScheduledEffect> {
    let mut due = Vec::new();
    queue.retain(|effect| {
        if effect.fire_at_ms <= now_ms {
            due.push(*effect);
            false
        } else {
            true
        }
    });
    due
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burn(fire_at_ms: f64) -> ScheduledEffect {
        ScheduledEffect {
            fire_at_ms,
            kind: EffectKind::BurnDamage {
                target: 1,
                amount: 5,
            },
        }
    }

    #[test]
    fn test_drain_due_takes_only_ripe_effects() {
        let mut queue = vec![burn(100.0), burn(500.0), burn(200.0)];
        let due = drain_due(&mut queue, 250.0);
        assert_eq!(due.len(), 2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].fire_at_ms, 500.0);
    }

    #[test]
    fn test_drain_due_boundary_is_inclusive() {
        let mut queue = vec![burn(1000.0)];
        assert!(drain_due(&mut queue, 999.9).is_empty());
        assert_eq!(drain_due(&mut queue, 1000.0).len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_preserves_insertion_order() {
        let mut queue = vec![burn(300.0), burn(100.0)];
        let due = drain_due(&mut queue, 300.0);
        assert_eq!(due[0].fire_at_ms, 300.0);
        assert_eq!(due[1].fire_at_ms, 100.0);
    }
}
