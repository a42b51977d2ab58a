//! Defender update system.
//!
//! Steps each defender's machine and applies the side effects: pickup
//! production, projectile launches with rerolled cooldowns, and mine
//! detonations (cue, screen shake, blast damage).

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use turfwar_core::components::{Attacker, AttackerBrain, Defender, DefenderMachine, Health};
use turfwar_core::constants::*;
use turfwar_core::events::{AudioEvent, FrameEvents};
use turfwar_core::types::Position;

use turfwar_ai::defender::{step, DefenderContext, DefenderStep};

use crate::engine::MatchState;
use crate::field;
use crate::systems::damage::{self, DebrisSpawn};
use crate::world_setup;

/// Run the defender update for one frame.
pub fn run(
    world: &mut World,
    state: &mut MatchState,
    rng: &mut ChaCha8Rng,
    events: &mut FrameEvents,
    dt: f32,
) {
    struct Pending {
        entity: Entity,
        step: DefenderStep,
        lane: usize,
        pos: Position,
    }

    let mut pendings: Vec<Pending> = Vec::new();
    {
        let mut query = world.query::<(&Defender, &DefenderMachine, &Position, &Health)>();
        for (entity, (defender, machine, pos, health)) in query.iter() {
            if health.hp <= 0 {
                continue;
            }
            let lane = defender.cell.lane;
            let ctx = DefenderContext {
                threat_in_lane: field::threat_in_lane(world, lane, pos.x()),
                threat_near: field::threat_within(world, lane, pos.x(), MINE_TRIGGER_RANGE),
                dt,
            };
            pendings.push(Pending {
                entity,
                step: step(*machine, &ctx),
                lane,
                pos: *pos,
            });
        }
    }

    let mut debris: Vec<DebrisSpawn> = Vec::new();
    for pending in pendings {
        if let Ok(mut machine) = world.get::<&mut DefenderMachine>(pending.entity) {
            *machine = pending.step.machine;
        }

        if pending.step.produce_pickup {
            world_setup::spawn_flower_pickup(world, state, rng, pending.pos, events);
        }

        if pending.step.fire_projectile {
            events.audio.push(AudioEvent::Throw);
            let muzzle = Position::new(
                pending.pos.x() + PROJECTILE_MUZZLE_OFFSET_X,
                pending.pos.y() + 10.0,
            );
            world_setup::spawn_projectile(world, state, pending.lane, muzzle, events);
            if let Ok(mut machine) = world.get::<&mut DefenderMachine>(pending.entity) {
                if let DefenderMachine::Shooter { cooldown, .. } = &mut *machine {
                    *cooldown = world_setup::roll_shot_cooldown(rng);
                }
            }
        }

        if pending.step.detonate {
            events.audio.push(AudioEvent::Explosion);
            events.audio.push(AudioEvent::ShakeScreen {
                duration: MINE_SHAKE_DURATION,
                intensity: MINE_SHAKE_INTENSITY,
            });
            let victims: Vec<Entity> = world
                .query::<(&Attacker, &AttackerBrain, &Position)>()
                .iter()
                .filter(|(_, (attacker, brain, pos))| {
                    attacker.lane == pending.lane
                        && field::attacker_is_live(brain.state)
                        && (pos.x() - pending.pos.x()).abs() < MINE_BLAST_RANGE
                })
                .map(|(entity, _)| entity)
                .collect();
            for victim in victims {
                damage::damage_attacker(
                    world,
                    victim,
                    MINE_BLAST_DAMAGE,
                    rng,
                    events,
                    &mut debris,
                );
            }
        }

        if pending.step.self_destruct {
            damage::damage_defender(world, pending.entity, MINE_SELF_DAMAGE);
        }
    }

    for spawn in debris {
        world_setup::spawn_debris(world, state, spawn, events);
    }
}
