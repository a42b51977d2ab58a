//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level match phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Engine constructed, nothing spawned yet.
    #[default]
    Setup,
    /// Preview attackers standing off-field while the presentation layer
    /// runs its intro sequence.
    Preview,
    /// Gameplay running.
    Active,
    Paused,
    /// Terminal: the clock ran out with the field clear.
    Won,
    /// Terminal: an attacker crossed the home boundary.
    Lost,
}

/// Attacker variant. A single variant today; the weighted spawn draw
/// supports more.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackerKind {
    #[default]
    Walker,
}

/// Attacker behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackerState {
    /// Preview posture only; no combat, no movement.
    Idle,
    /// Advancing leftward toward the home edge.
    #[default]
    Moving,
    /// Bound to an in-lane defender, biting on an interval.
    Attacking,
    /// hp exhausted while Moving; stumbles forward until the animation ends.
    Dying,
    /// hp exhausted while Attacking; stationary until the animation ends.
    DyingWhileAttacking,
    /// Terminal collapse; removed after the animation and fade complete.
    Dead,
}

/// Defender variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenderKind {
    Sunflower,
    Shooter,
    Mine,
    Wall,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SunflowerState {
    #[default]
    Idle,
    Producing,
    Cooldown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShooterState {
    #[default]
    Idle,
    Shooting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MineState {
    /// Buried during the arming delay.
    #[default]
    Underground,
    /// Surfacing animation.
    Popping,
    /// Armed, scanning for in-lane attackers.
    Idle,
    /// Detonation animation in progress.
    Exploding,
    /// Detonated; self-destructs through the normal death path.
    Spent,
}

/// Wall display band, a pure function of remaining hp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallBand {
    #[default]
    Full,
    Cracked,
    Crumbling,
}

/// Entity family, used in add/remove notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Attacker,
    Defender,
    Projectile,
    Pickup,
    Debris,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
