//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and the FSM crate, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::grid::Cell;

/// Stable identity handed to the presentation layer. Also the payload of
/// weak references between entities (bound attack targets, pickup intents);
/// holders must re-resolve it against the live pool on every use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Integer vitality. Strictly decreasing; an entity is dead at hp <= 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
    pub max: i32,
}

/// Marks an entity as an attacker and pins it to a lane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Attacker {
    pub kind: AttackerKind,
    pub lane: usize,
}

/// Attacker behavior state, driven by the FSM each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackerBrain {
    pub state: AttackerState,
    /// Local elapsed time, reset on every state transition.
    pub state_elapsed: f32,
    /// Counts down every frame; a bite fires when it reaches zero.
    pub attack_cooldown: f32,
    /// Weak reference to the bound defender, validated on every use.
    pub target_id: Option<ActorId>,
    /// Alternates the two chomp cues on successive bites.
    pub chomp_alternate: bool,
    /// One-way flag, set the instant hp drops below the wound threshold.
    pub wounded: bool,
    /// One-shot guard for the low-hp debris shed.
    pub debris_shed: bool,
    /// One-shot guard for the end-of-collapse thud cue.
    pub thud_fired: bool,
    /// Preview attackers never fight and never count as kills.
    pub preview: bool,
}

impl Default for AttackerBrain {
    fn default() -> Self {
        Self {
            state: AttackerState::Moving,
            state_elapsed: 0.0,
            attack_cooldown: 0.0,
            target_id: None,
            chomp_alternate: false,
            wounded: false,
            debris_shed: false,
            thud_fired: false,
            preview: false,
        }
    }
}

/// Marks an entity as a defender occupying a grid cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Defender {
    pub kind: DefenderKind,
    pub cell: Cell,
}

/// Per-variant defender state machine data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum DefenderMachine {
    Sunflower {
        state: SunflowerState,
        elapsed: f32,
    },
    Shooter {
        state: ShooterState,
        elapsed: f32,
        /// Time since the last shot left.
        since_shot: f32,
        /// Current randomized per-shot cooldown.
        cooldown: f32,
    },
    Mine {
        state: MineState,
        elapsed: f32,
    },
    /// Walls carry no state; their display band is re-derived from hp
    /// every frame.
    Wall,
}

/// Short-lived lane projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub lane: usize,
    pub hit: bool,
    /// Elapsed time since the hit, for the splat linger.
    pub hit_elapsed: f32,
}

/// Falling currency drop. Self-removing on pickup or timeout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub value: u32,
    pub vel: Vec2,
    /// y at which the pickup settles.
    pub ground_y: f32,
    /// true = arcing launch under gravity, false = constant sky fall.
    pub ballistic: bool,
    pub landed: bool,
    /// Seconds since spawn; drives the timeout fade.
    pub age: f32,
    pub collected: bool,
}

/// Cosmetic tumbling piece shed by a wounded attacker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris {
    pub vel: Vec2,
    /// Angular velocity in degrees/s.
    pub spin: f32,
    pub rotation: f32,
    pub ground_y: f32,
    pub landed: bool,
    /// Elapsed time since settling, for the fade.
    pub settle_elapsed: f32,
}
