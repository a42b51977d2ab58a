//! Attacker state machine.
//!
//! Pure functions that compute state transitions, movement deltas, and
//! bite timing for attacker entities. hp-driven transitions (wounding,
//! death) are applied by the sim crate's damage path, not here; this
//! machine handles the time-driven ones.

use turfwar_core::enums::AttackerState;

use crate::profiles::AttackerProfile;

/// What the attacker currently knows about its bound target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    /// No target bound.
    Unbound,
    /// Target resolved and has hp remaining.
    Alive,
    /// Target resolved but its hp is exhausted.
    Dead,
    /// The weak reference no longer resolves (target already compacted).
    Missing,
}

/// Input to the attacker machine for a single entity. Timers carry this
/// frame's delta already applied.
pub struct AttackerContext {
    pub state: AttackerState,
    /// Local elapsed time in the current state.
    pub state_elapsed: f32,
    /// Bite countdown; a bite fires when it has reached zero.
    pub attack_cooldown: f32,
    pub target: TargetStatus,
    /// Whether the end-of-collapse cue already fired.
    pub thud_fired: bool,
    pub dt: f32,
}

/// Output from the attacker machine.
pub struct AttackerStep {
    pub new_state: AttackerState,
    pub state_changed: bool,
    /// Horizontal displacement this frame (negative = toward the home edge).
    pub dx: f32,
    /// Apply one bite of damage to the bound target.
    pub bite: bool,
    /// The bound target was consumed; play the gulp cue.
    pub gulp: bool,
    /// Clear the weak target reference.
    pub unbind: bool,
    /// The collapse animation finished this frame; play the thud cue once.
    pub thud: bool,
}

impl AttackerStep {
    fn no_change(state: AttackerState) -> Self {
        Self {
            new_state: state,
            state_changed: false,
            dx: 0.0,
            bite: false,
            gulp: false,
            unbind: false,
            thud: false,
        }
    }

    fn transition(state: AttackerState) -> Self {
        Self {
            new_state: state,
            state_changed: true,
            ..Self::no_change(state)
        }
    }
}

/// Evaluate the machine for one attacker.
pub fn evaluate(ctx: &AttackerContext, profile: &AttackerProfile) -> AttackerStep {
    match ctx.state {
        // Preview posture: stands still until the match clears it.
        AttackerState::Idle => AttackerStep::no_change(ctx.state),

        AttackerState::Moving => AttackerStep {
            dx: -profile.walk_speed * ctx.dt,
            ..AttackerStep::no_change(ctx.state)
        },

        AttackerState::Attacking => evaluate_attacking(ctx),

        AttackerState::Dying => {
            if ctx.state_elapsed >= profile.dying_secs {
                AttackerStep::transition(AttackerState::Dead)
            } else {
                AttackerStep {
                    dx: -profile.dying_drift_speed * ctx.dt,
                    ..AttackerStep::no_change(ctx.state)
                }
            }
        }

        AttackerState::DyingWhileAttacking => {
            if ctx.state_elapsed >= profile.dying_bite_secs {
                AttackerStep::transition(AttackerState::Dead)
            } else {
                AttackerStep::no_change(ctx.state)
            }
        }

        AttackerState::Dead => AttackerStep {
            thud: !ctx.thud_fired && ctx.state_elapsed >= profile.collapse_secs,
            ..AttackerStep::no_change(ctx.state)
        },
    }
}

fn evaluate_attacking(ctx: &AttackerContext) -> AttackerStep {
    match ctx.target {
        TargetStatus::Alive => AttackerStep {
            bite: ctx.attack_cooldown <= 0.0,
            ..AttackerStep::no_change(ctx.state)
        },
        // Target eaten to death: swallow and resume the advance.
        TargetStatus::Dead => AttackerStep {
            gulp: true,
            unbind: true,
            ..AttackerStep::transition(AttackerState::Moving)
        },
        // Stale reference: silently treated as "no target".
        TargetStatus::Missing | TargetStatus::Unbound => AttackerStep {
            unbind: true,
            ..AttackerStep::transition(AttackerState::Moving)
        },
    }
}

/// Has this attacker's hp run out while it can still die?
pub fn is_terminal(state: AttackerState) -> bool {
    matches!(
        state,
        AttackerState::Dying | AttackerState::DyingWhileAttacking | AttackerState::Dead
    )
}

/// The state entered when hp is exhausted, depending on what the attacker
/// was doing at that instant.
pub fn death_state(from: AttackerState) -> AttackerState {
    match from {
        AttackerState::Attacking => AttackerState::DyingWhileAttacking,
        _ => AttackerState::Dying,
    }
}
