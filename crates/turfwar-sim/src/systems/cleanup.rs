//! Cleanup system: end-of-frame pool compaction.
//!
//! Removal is deferred to this pass so no earlier system ever observes a
//! partially removed entity. Every despawn leaves through here, emitting
//! the Removed notification and counting kills (preview attackers never
//! count). Uses a pre-allocated buffer to avoid per-frame allocation.

use hecs::{Entity, World};

use turfwar_core::components::{
    ActorId, Attacker, AttackerBrain, Debris, Defender, Health, Pickup, Projectile,
};
use turfwar_core::constants::*;
use turfwar_core::enums::{ActorKind, AttackerState};
use turfwar_core::events::FrameEvents;
use turfwar_core::types::Position;

use turfwar_ai::profiles::attacker_profile;

use crate::engine::MatchState;

/// Remove entities that finished their lifecycle this frame.
pub fn run(
    world: &mut World,
    state: &mut MatchState,
    despawn_buffer: &mut Vec<(Entity, ActorKind, ActorId, bool)>,
    events: &mut FrameEvents,
) {
    despawn_buffer.clear();

    // Attackers whose collapse and fade both completed. This is the
    // "destroyed" instant: the kill counter ticks here, exactly once.
    for (entity, (attacker, brain, id)) in
        world.query_mut::<(&Attacker, &AttackerBrain, &ActorId)>()
    {
        let profile = attacker_profile(attacker.kind);
        if brain.state == AttackerState::Dead
            && brain.state_elapsed >= profile.collapse_secs + profile.fade_secs
        {
            despawn_buffer.push((entity, ActorKind::Attacker, *id, !brain.preview));
        }
    }

    // Defenders with exhausted hp (eaten, detonated, or shovelled — all
    // routes converge on the same death path).
    for (entity, (_defender, health, id)) in
        world.query_mut::<(&Defender, &Health, &ActorId)>()
    {
        if health.hp <= 0 {
            despawn_buffer.push((entity, ActorKind::Defender, *id, false));
        }
    }

    // Projectiles: splat linger finished, or flew off-world.
    for (entity, (projectile, pos, id)) in
        world.query_mut::<(&Projectile, &Position, &ActorId)>()
    {
        let done = (projectile.hit && projectile.hit_elapsed >= PROJECTILE_HIT_LINGER_SECS)
            || pos.x() > WORLD_WIDTH;
        if done {
            despawn_buffer.push((entity, ActorKind::Projectile, *id, false));
        }
    }

    // Pickups: collected this frame, or timed out (lifetime + fade).
    for (entity, (pickup, id)) in world.query_mut::<(&Pickup, &ActorId)>() {
        if pickup.collected || pickup.age >= PICKUP_LIFETIME_SECS + PICKUP_FADE_SECS {
            despawn_buffer.push((entity, ActorKind::Pickup, *id, false));
        }
    }

    // Debris: settled and faded.
    for (entity, (debris, id)) in world.query_mut::<(&Debris, &ActorId)>() {
        if debris.landed && debris.settle_elapsed >= DEBRIS_SETTLE_FADE_SECS {
            despawn_buffer.push((entity, ActorKind::Debris, *id, false));
        }
    }

    for (entity, kind, id, counts_as_kill) in despawn_buffer.drain(..) {
        if counts_as_kill {
            state.kill_count += 1;
        }
        events.removed(kind, id);
        let _ = world.despawn(entity);
    }
}
