//! Occupancy and lane queries over the live entity pool.
//!
//! Pure read-only queries; the grid geometry itself lives in
//! turfwar-core::grid.

use hecs::{Entity, World};

use turfwar_core::components::{ActorId, Attacker, AttackerBrain, Defender, Health, Pickup};
use turfwar_core::constants::WORLD_WIDTH;
use turfwar_core::enums::AttackerState;
use turfwar_core::grid::Cell;
use turfwar_core::types::Position;

/// The live defender occupying a cell, if any. Defenders whose hp is
/// exhausted but not yet compacted don't count.
pub fn defender_at(world: &World, cell: Cell) -> Option<Entity> {
    world
        .query::<(&Defender, &Health)>()
        .iter()
        .find(|(_, (defender, health))| defender.cell == cell && health.hp > 0)
        .map(|(entity, _)| entity)
}

/// Whether a cell holds a live defender.
pub fn is_occupied(world: &World, cell: Cell) -> bool {
    defender_at(world, cell).is_some()
}

/// Resolve a pickup's weak id against the pool.
pub fn pickup_by_id(world: &World, id: ActorId) -> Option<Entity> {
    world
        .query::<(&Pickup, &ActorId)>()
        .iter()
        .find(|(_, (_, actor_id))| **actor_id == id)
        .map(|(entity, _)| entity)
}

/// An attacker still participates in the world until it reaches Dead.
pub fn attacker_is_live(state: AttackerState) -> bool {
    state != AttackerState::Dead
}

/// Whether any live attacker shares `lane` at or ahead of `min_x`,
/// inside the world bounds. Drives the shooter's trigger.
pub fn threat_in_lane(world: &World, lane: usize, min_x: f32) -> bool {
    world
        .query::<(&Attacker, &AttackerBrain, &Position)>()
        .iter()
        .any(|(_, (attacker, brain, pos))| {
            attacker.lane == lane
                && attacker_is_live(brain.state)
                && brain.state != AttackerState::Idle
                && pos.x() >= min_x
                && pos.x() < WORLD_WIDTH
        })
}

/// Whether any live attacker in `lane` is within `range` of `x`.
/// Drives the mine's trigger.
pub fn threat_within(world: &World, lane: usize, x: f32, range: f32) -> bool {
    world
        .query::<(&Attacker, &AttackerBrain, &Position)>()
        .iter()
        .any(|(_, (attacker, brain, pos))| {
            attacker.lane == lane
                && attacker_is_live(brain.state)
                && brain.state != AttackerState::Idle
                && (pos.x() - x).abs() < range
        })
}

/// Number of attacker entities still in the pool (any state).
pub fn attacker_count(world: &World) -> usize {
    world.query::<&Attacker>().iter().count()
}
