//! Events emitted by the simulation for the audio and presentation layers.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::components::ActorId;

/// One-shot audio/effect cues, fired at the exact simulation instant the
/// triggering rule evaluates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// An attacker bit its target. `alternate` flips on successive bites
    /// so the frontend can vary the sample.
    Chomp { alternate: bool },
    /// A bound defender was eaten to death.
    Gulp,
    /// An attacker took damage.
    Splat,
    /// A debris piece flew off an attacker.
    Pop,
    /// An attacker's collapse animation finished.
    Thud,
    /// An attacker announced itself.
    Groan,
    /// Delayed follow-up to the first sighting.
    Awooga,
    /// A projectile left a shooter.
    Throw,
    /// A mine detonated.
    Explosion,
    /// Camera shake request accompanying heavy impacts.
    ShakeScreen { duration: f32, intensity: f32 },
    /// A pickup was collected.
    PickupCollected,
    /// A card was lifted from its slot.
    SeedLift,
    /// A defender was planted or shovelled.
    PlantTamp,
    FinalWave,
    Siren,
    MatchWon,
    MatchLost,
}

/// Pool mutation notifications, used to create/destroy sprites.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActorEvent {
    Added { kind: ActorKind, id: ActorId },
    Removed { kind: ActorKind, id: ActorId },
}

/// Banner/toast message for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub frame: u64,
}

/// Per-frame event buffers drained into each snapshot.
#[derive(Debug, Clone, Default)]
pub struct FrameEvents {
    pub audio: Vec<AudioEvent>,
    pub actors: Vec<ActorEvent>,
    pub alerts: Vec<Alert>,
}

impl FrameEvents {
    pub fn added(&mut self, kind: ActorKind, id: ActorId) {
        self.actors.push(ActorEvent::Added { kind, id });
    }

    pub fn removed(&mut self, kind: ActorKind, id: ActorId) {
        self.actors.push(ActorEvent::Removed { kind, id });
    }
}
