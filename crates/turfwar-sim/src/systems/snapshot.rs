//! Snapshot system: queries the world and builds a complete MatchSnapshot.
//!
//! This system is read-only — it never modifies the world. Views are
//! sorted by actor id so snapshots are stable for a given world state.

use hecs::World;

use turfwar_core::catalog::Catalog;
use turfwar_core::components::*;
use turfwar_core::constants::*;
use turfwar_core::events::FrameEvents;
use turfwar_core::state::*;
use turfwar_core::types::Position;

use turfwar_ai::defender::wall_band;

use crate::engine::MatchState;

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    state: &MatchState,
    catalog: &Catalog,
    events: FrameEvents,
) -> MatchSnapshot {
    MatchSnapshot {
        time: state.time,
        phase: state.phase,
        sun: state.sun,
        progress: (state.time.elapsed / MATCH_DURATION_SECS).min(1.0),
        kill_count: state.kill_count,
        spawn_count: state.spawn_count,
        final_wave_triggered: state.final_wave_triggered,
        first_attacker_seen: state.first_attacker_seen,
        selected_slot: state.selected_slot,
        shovel_mode: state.shovel_mode,
        attackers: build_attackers(world),
        defenders: build_defenders(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        debris: build_debris(world),
        cards: build_cards(state, catalog),
        audio_events: events.audio,
        actor_events: events.actors,
        alerts: events.alerts,
    }
}

fn build_attackers(world: &World) -> Vec<AttackerView> {
    let mut views: Vec<AttackerView> = world
        .query::<(&Attacker, &AttackerBrain, &Health, &Position, &ActorId)>()
        .iter()
        .map(|(_, (attacker, brain, health, pos, id))| AttackerView {
            id: *id,
            kind: attacker.kind,
            lane: attacker.lane,
            x: pos.x(),
            state: brain.state,
            wounded: brain.wounded,
            hp: health.hp,
        })
        .collect();
    views.sort_by_key(|v| v.id.0);
    views
}

fn build_defenders(world: &World) -> Vec<DefenderView> {
    let mut views: Vec<DefenderView> = world
        .query::<(&Defender, &DefenderMachine, &Health, &Position, &ActorId)>()
        .iter()
        .map(|(_, (defender, machine, health, pos, id))| DefenderView {
            id: *id,
            kind: defender.kind,
            cell: defender.cell,
            x: pos.x(),
            state: defender_state_view(machine, health.hp),
            hp: health.hp,
            hp_fraction: (health.hp.max(0) as f32 / health.max as f32).min(1.0),
        })
        .collect();
    views.sort_by_key(|v| v.id.0);
    views
}

/// Variant-tagged state for animation selection. The wall band is
/// re-derived from hp here, every frame, never cached.
fn defender_state_view(machine: &DefenderMachine, hp: i32) -> DefenderStateView {
    match machine {
        DefenderMachine::Sunflower { state, .. } => DefenderStateView::Sunflower(*state),
        DefenderMachine::Shooter { state, .. } => DefenderStateView::Shooter(*state),
        DefenderMachine::Mine { state, .. } => DefenderStateView::Mine(*state),
        DefenderMachine::Wall => DefenderStateView::Wall(wall_band(hp)),
    }
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &ActorId)>()
        .iter()
        .map(|(_, (projectile, pos, id))| ProjectileView {
            id: *id,
            lane: projectile.lane,
            x: pos.x(),
            y: pos.y(),
            hit: projectile.hit,
        })
        .collect();
    views.sort_by_key(|v| v.id.0);
    views
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut views: Vec<PickupView> = world
        .query::<(&Pickup, &Position, &ActorId)>()
        .iter()
        .map(|(_, (pickup, pos, id))| PickupView {
            id: *id,
            x: pos.x(),
            y: pos.y(),
            value: pickup.value,
            landed: pickup.landed,
            remaining_secs: (PICKUP_LIFETIME_SECS + PICKUP_FADE_SECS - pickup.age).max(0.0),
        })
        .collect();
    views.sort_by_key(|v| v.id.0);
    views
}

fn build_debris(world: &World) -> Vec<DebrisView> {
    let mut views: Vec<DebrisView> = world
        .query::<(&Debris, &Position, &ActorId)>()
        .iter()
        .map(|(_, (debris, pos, id))| DebrisView {
            id: *id,
            x: pos.x(),
            y: pos.y(),
            rotation: debris.rotation,
        })
        .collect();
    views.sort_by_key(|v| v.id.0);
    views
}

fn build_cards(state: &MatchState, catalog: &Catalog) -> Vec<CardView> {
    catalog
        .cards
        .iter()
        .enumerate()
        .map(|(slot, card)| {
            let cooldown_remaining = state.card_cooldowns.get(slot).copied().unwrap_or(0.0);
            CardView {
                slot,
                kind: card.kind,
                cost: card.cost,
                cooldown_remaining,
                ready: cooldown_remaining <= 0.0,
                affordable: state.sun >= card.cost,
            }
        })
        .collect()
}
