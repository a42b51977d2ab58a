//! Projectile kinematics and impact.
//!
//! Projectiles fly rightward in their lane at a fixed speed, splat on the
//! first live attacker whose hitbox they overlap, linger briefly, and are
//! compacted at end of frame. Off-world projectiles are culled by cleanup.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use turfwar_core::components::{Attacker, AttackerBrain, Projectile};
use turfwar_core::constants::*;
use turfwar_core::enums::AttackerState;
use turfwar_core::events::FrameEvents;
use turfwar_core::types::Position;

use turfwar_ai::profiles::attacker_profile;

use crate::engine::MatchState;
use crate::systems::damage::{self, DebrisSpawn};
use crate::world_setup;

/// Run projectile motion and collision for one frame.
pub fn run(
    world: &mut World,
    state: &mut MatchState,
    rng: &mut ChaCha8Rng,
    events: &mut FrameEvents,
    dt: f32,
) {
    // Motion + hit-linger aging.
    for (_entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &mut Position)>() {
        if projectile.hit {
            projectile.hit_elapsed += dt;
        } else {
            pos.0.x += PROJECTILE_SPEED * dt;
        }
    }

    // Collision scan: first overlapping live attacker in iteration order.
    let mut impacts: Vec<(Entity, Entity)> = Vec::new();
    {
        let attackers: Vec<(Entity, usize, f32, f32)> = world
            .query::<(&Attacker, &AttackerBrain, &Position)>()
            .iter()
            .filter(|(_, (_, brain, _))| {
                brain.state != AttackerState::Dead && brain.state != AttackerState::Idle
            })
            .map(|(entity, (attacker, _, pos))| {
                let profile = attacker_profile(attacker.kind);
                let lo = pos.x() + profile.hitbox_offset;
                (entity, attacker.lane, lo, lo + profile.hitbox_width)
            })
            .collect();

        let mut query = world.query::<(&Projectile, &Position)>();
        for (entity, (projectile, pos)) in query.iter() {
            if projectile.hit {
                continue;
            }
            let hit = attackers.iter().find(|&&(_, lane, lo, hi)| {
                lane == projectile.lane && pos.x() < hi && lo < pos.x() + PROJECTILE_WIDTH
            });
            if let Some(&(target, ..)) = hit {
                impacts.push((entity, target));
            }
        }
    }

    let mut debris: Vec<DebrisSpawn> = Vec::new();
    for (projectile_entity, target) in impacts {
        if let Ok(mut projectile) = world.get::<&mut Projectile>(projectile_entity) {
            projectile.hit = true;
            projectile.hit_elapsed = 0.0;
        }
        damage::damage_attacker(world, target, PROJECTILE_DAMAGE, rng, events, &mut debris);
    }
    for spawn in debris {
        world_setup::spawn_debris(world, state, spawn, events);
    }
}
