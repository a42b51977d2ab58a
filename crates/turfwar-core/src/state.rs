//! Match snapshot — the complete visible state sent to the frontend each
//! frame. Read-only views; the renderer never reaches into the machines.

use serde::{Deserialize, Serialize};

use crate::components::ActorId;
use crate::enums::*;
use crate::events::{ActorEvent, Alert, AudioEvent};
use crate::grid::Cell;
use crate::types::SimTime;

/// Complete match state broadcast to the frontend after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    /// Current sun balance.
    pub sun: u32,
    /// Match progress fraction in [0, 1].
    pub progress: f32,
    pub kill_count: u32,
    pub spawn_count: u32,
    pub final_wave_triggered: bool,
    /// Set on the first non-preview spawn; reveals the progress indicator.
    pub first_attacker_seen: bool,
    pub selected_slot: Option<usize>,
    pub shovel_mode: bool,
    pub attackers: Vec<AttackerView>,
    pub defenders: Vec<DefenderView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub debris: Vec<DebrisView>,
    pub cards: Vec<CardView>,
    pub audio_events: Vec<AudioEvent>,
    pub actor_events: Vec<ActorEvent>,
    pub alerts: Vec<Alert>,
}

/// A visible attacker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackerView {
    pub id: ActorId,
    pub kind: AttackerKind,
    pub lane: usize,
    pub x: f32,
    pub state: AttackerState,
    pub wounded: bool,
    pub hp: i32,
}

/// A visible defender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenderView {
    pub id: ActorId,
    pub kind: DefenderKind,
    pub cell: Cell,
    pub x: f32,
    pub state: DefenderStateView,
    pub hp: i32,
    pub hp_fraction: f32,
}

/// Variant-tagged defender state for animation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", content = "state")]
pub enum DefenderStateView {
    Sunflower(SunflowerState),
    Shooter(ShooterState),
    Mine(MineState),
    Wall(WallBand),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ActorId,
    pub lane: usize,
    pub x: f32,
    pub y: f32,
    pub hit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub id: ActorId,
    pub x: f32,
    pub y: f32,
    pub value: u32,
    pub landed: bool,
    /// Seconds until the timeout fade completes and the pickup vanishes.
    pub remaining_secs: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisView {
    pub id: ActorId,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

/// Card slot status for the card bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub slot: usize,
    pub kind: DefenderKind,
    pub cost: u32,
    pub cooldown_remaining: f32,
    pub ready: bool,
    pub affordable: bool,
}
