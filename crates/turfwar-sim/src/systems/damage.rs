//! Damage application.
//!
//! The single path through which attrition reaches an entity, so the
//! hp-driven side effects (wound flag, debris sheds, death transitions)
//! fire exactly once no matter who dealt the damage.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use turfwar_core::components::{Attacker, AttackerBrain, Health};
use turfwar_core::enums::AttackerState;
use turfwar_core::events::{AudioEvent, FrameEvents};
use turfwar_core::types::Position;

use turfwar_ai::attacker::{death_state, is_terminal};
use turfwar_ai::profiles::attacker_profile;

/// A debris piece requested by the damage path, spawned by the caller
/// once its query scopes have ended.
#[derive(Debug, Clone, Copy)]
pub struct DebrisSpawn {
    pub pos: Position,
    pub vel: Vec2,
    /// Angular velocity in degrees/s.
    pub spin: f32,
    pub ground_y: f32,
}

/// Apply damage to a defender. Returns true if this application exhausted
/// its hp; the entity itself is compacted at end of frame.
pub fn damage_defender(world: &World, entity: Entity, amount: i32) -> bool {
    let Ok(mut health) = world.get::<&mut Health>(entity) else {
        return false;
    };
    if health.hp <= 0 {
        // Already dead, waiting for compaction.
        return false;
    }
    health.hp -= amount;
    health.hp <= 0
}

/// Apply damage to an attacker: splat cue, one-way wound flag, one-shot
/// low-hp debris shed, and the death transition when hp runs out.
pub fn damage_attacker(
    world: &World,
    entity: Entity,
    amount: i32,
    rng: &mut ChaCha8Rng,
    events: &mut FrameEvents,
    debris_out: &mut Vec<DebrisSpawn>,
) {
    let Ok(attacker) = world.get::<&Attacker>(entity) else {
        return;
    };
    let Ok(mut brain) = world.get::<&mut AttackerBrain>(entity) else {
        return;
    };
    let Ok(mut health) = world.get::<&mut Health>(entity) else {
        return;
    };
    let Ok(pos) = world.get::<&Position>(entity) else {
        return;
    };
    if brain.state == AttackerState::Dead {
        return;
    }

    let profile = attacker_profile(attacker.kind);
    health.hp -= amount;
    events.audio.push(AudioEvent::Splat);

    // One-way wound flag: flips the instant hp crosses the threshold and
    // sheds an arm. Art only; speed and damage are unchanged.
    if !brain.wounded && health.hp < profile.wound_hp {
        brain.wounded = true;
        debris_out.push(DebrisSpawn {
            pos: Position::new(pos.x() + 20.0, pos.y() + 30.0),
            vel: Vec2::new(rng.gen::<f32>() * 70.0 - 35.0, 20.0),
            spin: -500.0,
            ground_y: pos.y() - 5.0,
        });
        events.audio.push(AudioEvent::Pop);
    }

    // One-shot low-hp shed, guarded so it can't re-fire on later frames.
    if !brain.debris_shed && health.hp < profile.debris_hp && !is_terminal(brain.state) {
        brain.debris_shed = true;
        debris_out.push(DebrisSpawn {
            pos: Position::new(pos.x() + 10.0, pos.y() + 40.0),
            vel: Vec2::new(rng.gen::<f32>() * 50.0, 100.0),
            spin: -100.0,
            ground_y: pos.y() - 5.0,
        });
        events.audio.push(AudioEvent::Pop);
    }

    // hp exhausted: enter the terminal animation matching what the
    // attacker was doing at this instant. Sticky from here on.
    if health.hp <= 0 && !is_terminal(brain.state) {
        brain.state = death_state(brain.state);
        brain.state_elapsed = 0.0;
    }
}
