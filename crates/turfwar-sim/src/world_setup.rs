//! Entity spawn factories.
//!
//! Every factory registers the new entity with a fresh ActorId and emits
//! the Added notification the presentation layer uses to create sprites.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use turfwar_core::components::*;
use turfwar_core::constants::*;
use turfwar_core::enums::*;
use turfwar_core::events::FrameEvents;
use turfwar_core::grid::{self, Cell};
use turfwar_core::types::Position;

use turfwar_ai::profiles::{attacker_profile, defender_max_hp};

use crate::engine::MatchState;
use crate::systems::damage::DebrisSpawn;

fn next_id(state: &mut MatchState) -> ActorId {
    state.next_actor_id += 1;
    ActorId(state.next_actor_id)
}

/// Spawn an attacker at the entry edge of its lane.
pub fn spawn_attacker(
    world: &mut World,
    state: &mut MatchState,
    kind: AttackerKind,
    lane: usize,
    events: &mut FrameEvents,
) -> Entity {
    let id = next_id(state);
    let profile = attacker_profile(kind);
    let entity = world.spawn((
        Attacker { kind, lane },
        AttackerBrain::default(),
        Health {
            hp: profile.max_hp,
            max: profile.max_hp,
        },
        Position::new(ATTACKER_SPAWN_X, grid::lane_y(lane)),
        id,
    ));
    events.added(ActorKind::Attacker, id);
    entity
}

/// Spawn the off-field preview attackers shown before play begins.
/// They idle outside the world and never fight or count as kills.
pub fn spawn_preview_wave(
    world: &mut World,
    state: &mut MatchState,
    rng: &mut ChaCha8Rng,
    events: &mut FrameEvents,
) {
    let count = rng.gen_range(PREVIEW_MIN_COUNT..PREVIEW_MAX_COUNT);
    for _ in 0..count {
        let lane = rng.gen_range(0..LANE_COUNT);
        let x = PREVIEW_MIN_X + rng.gen::<f32>() * PREVIEW_SPREAD_X;
        let id = next_id(state);
        let kind = AttackerKind::Walker;
        let profile = attacker_profile(kind);
        world.spawn((
            Attacker { kind, lane },
            AttackerBrain {
                state: AttackerState::Idle,
                preview: true,
                ..AttackerBrain::default()
            },
            Health {
                hp: profile.max_hp,
                max: profile.max_hp,
            },
            Position::new(x, grid::lane_y(lane)),
            id,
        ));
        events.added(ActorKind::Attacker, id);
    }
}

/// Spawn a defender of `kind` standing on `cell`.
pub fn spawn_defender(
    world: &mut World,
    state: &mut MatchState,
    kind: DefenderKind,
    cell: Cell,
    rng: &mut ChaCha8Rng,
    events: &mut FrameEvents,
) -> Entity {
    let id = next_id(state);
    let hp = defender_max_hp(kind);
    let machine = match kind {
        DefenderKind::Sunflower => DefenderMachine::Sunflower {
            state: SunflowerState::Idle,
            elapsed: 0.0,
        },
        DefenderKind::Shooter => DefenderMachine::Shooter {
            state: ShooterState::Idle,
            elapsed: 0.0,
            since_shot: 0.0,
            cooldown: roll_shot_cooldown(rng),
        },
        DefenderKind::Mine => DefenderMachine::Mine {
            state: MineState::Underground,
            elapsed: 0.0,
        },
        DefenderKind::Wall => DefenderMachine::Wall,
    };
    let entity = world.spawn((
        Defender { kind, cell },
        machine,
        Health { hp, max: hp },
        grid::cell_origin(cell),
        id,
    ));
    events.added(ActorKind::Defender, id);
    entity
}

/// Per-shot cooldown, re-rolled after every projectile.
pub fn roll_shot_cooldown(rng: &mut ChaCha8Rng) -> f32 {
    SHOOTER_MIN_COOLDOWN + rng.gen::<f32>() * SHOOTER_COOLDOWN_JITTER
}

/// Spawn a projectile leaving a shooter's muzzle.
pub fn spawn_projectile(
    world: &mut World,
    state: &mut MatchState,
    lane: usize,
    muzzle: Position,
    events: &mut FrameEvents,
) -> Entity {
    let id = next_id(state);
    let entity = world.spawn((
        Projectile {
            lane,
            hit: false,
            hit_elapsed: 0.0,
        },
        muzzle,
        id,
    ));
    events.added(ActorKind::Projectile, id);
    entity
}

/// Spawn an arcing pickup launched from a producing sunflower.
pub fn spawn_flower_pickup(
    world: &mut World,
    state: &mut MatchState,
    rng: &mut ChaCha8Rng,
    from: Position,
    events: &mut FrameEvents,
) -> Entity {
    let id = next_id(state);
    let vx = rng.gen_range(-PICKUP_ARC_VX_SPREAD..PICKUP_ARC_VX_SPREAD);
    let entity = world.spawn((
        Pickup {
            value: PICKUP_VALUE,
            vel: Vec2::new(vx, PICKUP_ARC_LAUNCH_VY),
            ground_y: from.y(),
            ballistic: true,
            landed: false,
            age: 0.0,
            collected: false,
        },
        Position::new(from.x() + 10.0, from.y() + 20.0),
        id,
    ));
    events.added(ActorKind::Pickup, id);
    entity
}

/// Spawn a pickup drifting down from the sky at a random position inside
/// the central band of the field width.
pub fn spawn_sky_pickup(
    world: &mut World,
    state: &mut MatchState,
    rng: &mut ChaCha8Rng,
    events: &mut FrameEvents,
) -> Entity {
    let id = next_id(state);
    let x = rng.gen_range(WORLD_WIDTH * SKY_DROP_BAND_MIN_FRAC..WORLD_WIDTH * SKY_DROP_BAND_MAX_FRAC);
    let ground_y =
        rng.gen_range(SKY_DROP_TARGET_Y_MIN..SKY_DROP_TARGET_Y_MIN + SKY_DROP_TARGET_Y_RANGE);
    let entity = world.spawn((
        Pickup {
            value: PICKUP_VALUE,
            vel: Vec2::new(0.0, -SKY_DROP_FALL_SPEED),
            ground_y,
            ballistic: false,
            landed: false,
            age: 0.0,
            collected: false,
        },
        Position::new(x, SKY_DROP_START_Y),
        id,
    ));
    events.added(ActorKind::Pickup, id);
    entity
}

/// Spawn a cosmetic debris piece shed by a damaged attacker.
pub fn spawn_debris(
    world: &mut World,
    state: &mut MatchState,
    spawn: DebrisSpawn,
    events: &mut FrameEvents,
) -> Entity {
    let id = next_id(state);
    let entity = world.spawn((
        Debris {
            vel: spawn.vel,
            spin: spawn.spin,
            rotation: 0.0,
            ground_y: spawn.ground_y,
            landed: false,
            settle_elapsed: 0.0,
        },
        spawn.pos,
        id,
    ));
    events.added(ActorKind::Debris, id);
    entity
}
