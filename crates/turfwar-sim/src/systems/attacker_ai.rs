//! Attacker update system.
//!
//! Builds a context per attacker, evaluates the FSM from turfwar-ai, and
//! applies the resulting step: movement, bites, unbinds, and cues.
//! Updates are collected in a buffer first to keep hecs borrows disjoint.

use std::collections::HashMap;

use hecs::{Entity, World};

use turfwar_core::components::{ActorId, Attacker, AttackerBrain, Defender, Health};
use turfwar_core::enums::AttackerState;
use turfwar_core::events::{AudioEvent, FrameEvents};
use turfwar_core::types::Position;

use turfwar_ai::attacker::{evaluate, AttackerContext, AttackerStep, TargetStatus};
use turfwar_ai::profiles::attacker_profile;

use crate::systems::damage;

/// Run the attacker update for one frame.
pub fn run(world: &mut World, events: &mut FrameEvents, dt: f32) {
    // Advance local timers. The bite countdown runs in every state, so a
    // freshly bound attacker whose countdown already lapsed bites at once.
    for (_entity, brain) in world.query_mut::<&mut AttackerBrain>() {
        brain.state_elapsed += dt;
        brain.attack_cooldown -= dt;
    }

    // Index live defenders by id for weak-reference resolution.
    let defenders: HashMap<u32, (Entity, i32)> = world
        .query::<(&Defender, &ActorId, &Health)>()
        .iter()
        .map(|(entity, (_, id, health))| (id.0, (entity, health.hp)))
        .collect();

    // Evaluate every attacker against its context.
    let mut steps: Vec<(Entity, AttackerStep, Option<Entity>)> = Vec::new();
    {
        let mut query = world.query::<(&Attacker, &AttackerBrain)>();
        for (entity, (attacker, brain)) in query.iter() {
            let (target, target_entity) = match brain.target_id {
                None => (TargetStatus::Unbound, None),
                Some(id) => match defenders.get(&id.0) {
                    // The reference no longer resolves: lazily treat it
                    // as "no target" rather than an error.
                    None => (TargetStatus::Missing, None),
                    Some(&(target_entity, hp)) => {
                        if hp > 0 {
                            (TargetStatus::Alive, Some(target_entity))
                        } else {
                            (TargetStatus::Dead, None)
                        }
                    }
                },
            };

            let ctx = AttackerContext {
                state: brain.state,
                state_elapsed: brain.state_elapsed,
                attack_cooldown: brain.attack_cooldown,
                target,
                thud_fired: brain.thud_fired,
                dt,
            };
            let step = evaluate(&ctx, &attacker_profile(attacker.kind));
            steps.push((entity, step, target_entity));
        }
    }

    // Apply the steps.
    for (entity, step, target_entity) in steps {
        let mut bite: Option<(Entity, i32)> = None;
        {
            let Ok(attacker) = world.get::<&Attacker>(entity) else {
                continue;
            };
            let Ok(mut brain) = world.get::<&mut AttackerBrain>(entity) else {
                continue;
            };
            let Ok(mut pos) = world.get::<&mut Position>(entity) else {
                continue;
            };
            let profile = attacker_profile(attacker.kind);

            pos.0.x += step.dx;

            if step.thud {
                brain.thud_fired = true;
                events.audio.push(AudioEvent::Thud);
            }
            if step.gulp {
                events.audio.push(AudioEvent::Gulp);
            }
            if step.unbind {
                brain.target_id = None;
            }
            if step.state_changed {
                brain.state = step.new_state;
                brain.state_elapsed = 0.0;
            }
            if step.bite {
                let alternate = brain.chomp_alternate;
                brain.chomp_alternate = !alternate;
                brain.attack_cooldown = profile.attack_interval;
                events.audio.push(AudioEvent::Chomp { alternate });
                if let Some(target) = target_entity {
                    bite = Some((target, profile.attack_damage));
                }
            }
        }

        // The bite may finish the target off; swallow and resume at once.
        if let Some((target, amount)) = bite {
            if damage::damage_defender(world, target, amount) {
                events.audio.push(AudioEvent::Gulp);
                if let Ok(mut brain) = world.get::<&mut AttackerBrain>(entity) {
                    brain.target_id = None;
                    brain.state = AttackerState::Moving;
                    brain.state_elapsed = 0.0;
                }
            }
        }
    }
}
