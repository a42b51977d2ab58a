//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, processes player commands at
//! frame boundaries, runs all systems in a fixed order, and produces
//! `MatchSnapshot`s. Completely headless, enabling deterministic testing:
//! the same seed and delta sequence reproduce the same match.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use turfwar_core::catalog::Catalog;
use turfwar_core::commands::PlayerCommand;
use turfwar_core::components::{ActorId, Attacker, AttackerBrain, Pickup};
use turfwar_core::constants::*;
use turfwar_core::enums::{ActorKind, AlertLevel, AttackerKind, MatchPhase};
use turfwar_core::errors::{CatalogError, PlacementError};
use turfwar_core::events::{Alert, AudioEvent, FrameEvents};
use turfwar_core::grid::Cell;
use turfwar_core::state::MatchSnapshot;
use turfwar_core::types::{Position, SimTime};

use crate::field;
use crate::systems;
use crate::systems::damage;
use crate::world_setup;

/// Configuration for starting a new match.
pub struct MatchConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    /// Placement card set, validated at construction.
    pub catalog: Catalog,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            catalog: Catalog::standard(),
        }
    }
}

/// All shared mutable match scalars in one explicit struct, so the whole
/// simulation is testable by constructing fresh state.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub sun: u32,
    pub kill_count: u32,
    pub spawn_count: u32,
    /// Accumulated time since the last attacker spawn.
    pub spawn_timer: f32,
    /// Accumulated time since the last sky pickup.
    pub sun_drop_timer: f32,
    /// Current sky-pickup interval, re-rolled after each drop.
    pub next_sun_drop_in: f32,
    /// One-shot: the final-wave escalation has fired.
    pub final_wave_triggered: bool,
    /// One-shot: a non-preview attacker has spawned.
    pub first_attacker_seen: bool,
    /// Countdown to the delayed first-sighting cue, when pending.
    pub awooga_timer: Option<f32>,
    /// Per-slot card recharge, counted down every active frame.
    pub card_cooldowns: Vec<f32>,
    pub selected_slot: Option<usize>,
    pub shovel_mode: bool,
    /// Monotonic actor id allocator.
    pub next_actor_id: u32,
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    world: World,
    state: MatchState,
    catalog: Catalog,
    spawn_table: Vec<(f64, AttackerKind)>,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<(Entity, ActorKind, ActorId, bool)>,
    events: FrameEvents,
}

impl MatchEngine {
    /// Create a new match engine. Fails fast on an inconsistent catalog;
    /// the simulation assumes a validated catalog once running.
    pub fn new(config: MatchConfig) -> Result<Self, CatalogError> {
        config.catalog.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let state = MatchState {
            time: SimTime::default(),
            phase: MatchPhase::Setup,
            sun: STARTING_SUN,
            kill_count: 0,
            spawn_count: 0,
            spawn_timer: 0.0,
            sun_drop_timer: 0.0,
            next_sun_drop_in: {
                use rand::Rng;
                rng.gen_range(SKY_DROP_MIN_INTERVAL..SKY_DROP_MAX_INTERVAL)
            },
            final_wave_triggered: false,
            first_attacker_seen: false,
            awooga_timer: None,
            card_cooldowns: vec![0.0; config.catalog.cards.len()],
            selected_slot: None,
            shovel_mode: false,
            next_actor_id: 0,
        };
        tracing::debug!(seed = config.seed, "match engine created");
        Ok(Self {
            world: World::new(),
            state,
            catalog: config.catalog,
            spawn_table: vec![(1.0, AttackerKind::Walker)],
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: FrameEvents::default(),
        })
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one frame of `dt` seconds and return the
    /// resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> MatchSnapshot {
        self.process_commands();

        if self.state.phase == MatchPhase::Active {
            self.run_systems(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.state, &self.catalog, events)
    }

    /// Get the current match phase.
    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// Get the current match time.
    pub fn time(&self) -> SimTime {
        self.state.time
    }

    /// Get the current sun balance.
    pub fn sun(&self) -> u32 {
        self.state.sun
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Attempt a placement directly. The command path routes here; the
    /// failure is a no-op carrying a reason code.
    pub fn try_place(&mut self, slot: usize, cell: Cell) -> Result<(), PlacementError> {
        let card = *self
            .catalog
            .cards
            .get(slot)
            .ok_or(PlacementError::UnknownSlot(slot))?;
        if !cell.in_field() {
            return Err(PlacementError::OutOfField);
        }
        if field::is_occupied(&self.world, cell) {
            return Err(PlacementError::CellOccupied);
        }
        if self.state.card_cooldowns[slot] > 0.0 {
            return Err(PlacementError::CooldownActive);
        }
        if self.state.sun < card.cost {
            return Err(PlacementError::InsufficientFunds);
        }

        self.state.sun -= card.cost;
        world_setup::spawn_defender(
            &mut self.world,
            &mut self.state,
            card.kind,
            cell,
            &mut self.rng,
            &mut self.events,
        );
        self.state.card_cooldowns[slot] = card.cooldown;
        self.state.selected_slot = None;
        self.events.audio.push(AudioEvent::PlantTamp);
        Ok(())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Invalid commands degrade to no-ops.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch => {
                if self.state.phase == MatchPhase::Setup {
                    world_setup::spawn_preview_wave(
                        &mut self.world,
                        &mut self.state,
                        &mut self.rng,
                        &mut self.events,
                    );
                    self.state.phase = MatchPhase::Preview;
                }
            }
            PlayerCommand::BeginPlay => {
                if self.state.phase == MatchPhase::Preview {
                    self.clear_preview();
                    self.state.phase = MatchPhase::Active;
                    tracing::debug!("match active");
                }
            }
            PlayerCommand::Pause => {
                if self.state.phase == MatchPhase::Active {
                    self.state.phase = MatchPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.state.phase == MatchPhase::Paused {
                    self.state.phase = MatchPhase::Active;
                }
            }
            PlayerCommand::SelectCard { slot } => {
                if self.state.phase != MatchPhase::Active {
                    return;
                }
                let affordable = self
                    .catalog
                    .cards
                    .get(slot)
                    .is_some_and(|card| self.state.sun >= card.cost);
                let ready = self.state.card_cooldowns.get(slot).copied().unwrap_or(1.0) <= 0.0;
                if affordable && ready {
                    self.state.selected_slot = Some(slot);
                    self.state.shovel_mode = false;
                    self.events.audio.push(AudioEvent::SeedLift);
                }
            }
            PlayerCommand::SelectShovel => {
                if self.state.phase == MatchPhase::Active {
                    self.state.shovel_mode = true;
                    self.state.selected_slot = None;
                }
            }
            PlayerCommand::Deselect => {
                self.state.selected_slot = None;
                self.state.shovel_mode = false;
            }
            PlayerCommand::PlaceCard { slot, cell } => {
                if self.state.phase != MatchPhase::Active {
                    return;
                }
                if let Err(reason) = self.try_place(slot, cell) {
                    tracing::debug!(%reason, ?cell, "placement refused");
                    self.events.alerts.push(Alert {
                        level: AlertLevel::Warning,
                        message: reason.to_string(),
                        frame: self.state.time.frame,
                    });
                }
            }
            PlayerCommand::RemoveDefender { cell } => {
                if self.state.phase != MatchPhase::Active {
                    return;
                }
                // Lethal self-damage through the normal death path, so the
                // removal notification fires like any other death. An empty
                // cell is a silent no-op.
                if let Some(entity) = field::defender_at(&self.world, cell) {
                    damage::damage_defender(&self.world, entity, SHOVEL_DAMAGE);
                    self.events.audio.push(AudioEvent::PlantTamp);
                    self.state.shovel_mode = false;
                }
            }
            PlayerCommand::CollectPickup { id } => {
                if self.state.phase != MatchPhase::Active {
                    return;
                }
                // A stale id resolves to nothing and is silently dropped.
                if let Some(entity) = field::pickup_by_id(&self.world, id) {
                    if let Ok(mut pickup) = self.world.get::<&mut Pickup>(entity) {
                        if !pickup.collected {
                            pickup.collected = true;
                            self.state.sun += pickup.value;
                            self.events.audio.push(AudioEvent::PickupCollected);
                        }
                    }
                }
            }
        }
    }

    /// Despawn the preview attackers when play begins. They are removed
    /// directly (no death path, no kill counting).
    fn clear_preview(&mut self) {
        let previews: Vec<(Entity, ActorId)> = self
            .world
            .query::<(&AttackerBrain, &ActorId)>()
            .iter()
            .filter(|(_, (brain, _))| brain.preview)
            .map(|(entity, (_, id))| (entity, *id))
            .collect();
        for (entity, id) in previews {
            self.events.removed(ActorKind::Attacker, id);
            let _ = self.world.despawn(entity);
        }
    }

    /// Run all systems in order for one active frame.
    fn run_systems(&mut self, dt: f32) {
        // 1. Clock and card recharge
        self.state.time.advance(dt);
        for cooldown in &mut self.state.card_cooldowns {
            *cooldown = (*cooldown - dt).max(0.0);
        }
        // 2. Spawn/wave scheduling
        systems::scheduler::run(
            &mut self.world,
            &mut self.state,
            &mut self.rng,
            &self.spawn_table,
            &mut self.events,
            dt,
        );
        // 3. Entity local updates
        systems::attacker_ai::run(&mut self.world, &mut self.events, dt);
        systems::defender_ai::run(
            &mut self.world,
            &mut self.state,
            &mut self.rng,
            &mut self.events,
            dt,
        );
        systems::projectiles::run(
            &mut self.world,
            &mut self.state,
            &mut self.rng,
            &mut self.events,
            dt,
        );
        systems::pickups::run(&mut self.world, dt);
        // 4. Combat resolution (bind/unbind pass)
        systems::combat::run(&mut self.world);
        // 5. Terminal conditions
        self.check_terminal();
        // 6. Pool compaction (deferred removal)
        systems::cleanup::run(
            &mut self.world,
            &mut self.state,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }

    /// Evaluate win/loss once per frame, after combat resolution. Loss
    /// takes precedence when both could fire the same frame. Either
    /// outcome freezes further gameplay updates.
    fn check_terminal(&mut self) {
        let breached = self
            .world
            .query::<(&Attacker, &AttackerBrain, &Position)>()
            .iter()
            .any(|(_, (_, brain, pos))| {
                field::attacker_is_live(brain.state)
                    && !brain.preview
                    && pos.x() < LOSS_BOUNDARY_X
            });
        if breached {
            self.state.phase = MatchPhase::Lost;
            self.events.audio.push(AudioEvent::MatchLost);
            self.events.alerts.push(Alert {
                level: AlertLevel::Critical,
                message: "The attackers broke through!".to_string(),
                frame: self.state.time.frame,
            });
            tracing::info!(frame = self.state.time.frame, "match lost");
            return;
        }

        if self.state.time.elapsed >= MATCH_DURATION_SECS
            && field::attacker_count(&self.world) == 0
        {
            self.state.phase = MatchPhase::Won;
            self.events.audio.push(AudioEvent::MatchWon);
            self.events.alerts.push(Alert {
                level: AlertLevel::Info,
                message: "Match won!".to_string(),
                frame: self.state.time.frame,
            });
            tracing::info!(
                kills = self.state.kill_count,
                frame = self.state.time.frame,
                "match won"
            );
        }
    }

    /// Get a read-only reference to the match state.
    #[cfg(test)]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Get a mutable reference to the match state (for tests that need to
    /// position the clock without running systems).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Credit sun directly (for tests exercising expensive placements).
    #[cfg(test)]
    pub fn grant_sun(&mut self, amount: u32) {
        self.state.sun += amount;
    }

    /// Spawn an attacker at an explicit position (for tests).
    #[cfg(test)]
    pub fn spawn_attacker_at(&mut self, lane: usize, x: f32) -> Entity {
        let entity = world_setup::spawn_attacker(
            &mut self.world,
            &mut self.state,
            AttackerKind::Walker,
            lane,
            &mut self.events,
        );
        if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
            pos.0.x = x;
        }
        entity
    }

    /// Apply damage to an attacker through the normal damage path (for tests).
    #[cfg(test)]
    pub fn apply_attacker_damage(&mut self, entity: Entity, amount: i32) {
        let mut debris = Vec::new();
        damage::damage_attacker(
            &self.world,
            entity,
            amount,
            &mut self.rng,
            &mut self.events,
            &mut debris,
        );
        for spawn in debris {
            world_setup::spawn_debris(&mut self.world, &mut self.state, spawn, &mut self.events);
        }
    }
}
