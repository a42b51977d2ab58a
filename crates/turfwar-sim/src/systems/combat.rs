//! Combat resolver.
//!
//! One pass per frame after the entity updates: every live attacker scans
//! the live defenders in its lane for hitbox overlap. The first overlap
//! found in pool-iteration order (= placement order) binds; this is the
//! documented tie-break when hitboxes overlap, there is no secondary sort.
//! An attacker left Attacking with no overlap this frame reverts to Moving.

use hecs::{Entity, World};

use turfwar_core::components::{ActorId, Attacker, AttackerBrain, Defender, Health};
use turfwar_core::constants::DEFENDER_HITBOX_WIDTH;
use turfwar_core::enums::AttackerState;
use turfwar_core::types::Position;

use turfwar_ai::profiles::attacker_profile;

enum Change {
    Bind(ActorId),
    Revert,
}

/// Run the combat resolution pass.
pub fn run(world: &mut World) {
    let defenders: Vec<(usize, f32, ActorId)> = world
        .query::<(&Defender, &Position, &Health, &ActorId)>()
        .iter()
        .filter(|(_, (_, _, health, _))| health.hp > 0)
        .map(|(_, (defender, pos, _, id))| (defender.cell.lane, pos.x(), *id))
        .collect();

    let mut changes: Vec<(Entity, Change)> = Vec::new();
    {
        let mut query = world.query::<(&Attacker, &AttackerBrain, &Position)>();
        for (entity, (attacker, brain, pos)) in query.iter() {
            if !matches!(
                brain.state,
                AttackerState::Moving | AttackerState::Attacking
            ) {
                continue;
            }
            let profile = attacker_profile(attacker.kind);
            let lo = pos.x() + profile.hitbox_offset;
            let hi = lo + profile.hitbox_width;

            let overlap = defenders.iter().find(|&&(lane, x, _)| {
                lane == attacker.lane && lo < x + DEFENDER_HITBOX_WIDTH && x < hi
            });

            match (overlap, brain.state) {
                (Some(&(_, _, id)), AttackerState::Moving) => {
                    changes.push((entity, Change::Bind(id)));
                }
                (None, AttackerState::Attacking) => {
                    changes.push((entity, Change::Revert));
                }
                _ => {}
            }
        }
    }

    for (entity, change) in changes {
        let Ok(mut brain) = world.get::<&mut AttackerBrain>(entity) else {
            continue;
        };
        match change {
            Change::Bind(id) => {
                brain.state = AttackerState::Attacking;
                brain.state_elapsed = 0.0;
                brain.target_id = Some(id);
            }
            Change::Revert => {
                brain.state = AttackerState::Moving;
                brain.state_elapsed = 0.0;
                brain.target_id = None;
            }
        }
    }
}
