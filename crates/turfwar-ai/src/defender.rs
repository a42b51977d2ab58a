//! Defender state machines.
//!
//! One small machine per variant, stepped once per frame. Walls have no
//! machine at all: their display band is a pure function of remaining hp,
//! re-derived every frame.

use turfwar_core::components::DefenderMachine;
use turfwar_core::constants::*;
use turfwar_core::enums::{MineState, ShooterState, SunflowerState, WallBand};

/// World facts a defender machine may react to, precomputed by the caller.
pub struct DefenderContext {
    /// A live attacker shares the lane at or ahead of this defender,
    /// inside the world bounds.
    pub threat_in_lane: bool,
    /// A live attacker is within the mine trigger range in this lane.
    pub threat_near: bool,
    pub dt: f32,
}

/// Output from stepping a defender machine.
pub struct DefenderStep {
    /// The machine with timers advanced and transitions applied.
    pub machine: DefenderMachine,
    /// Emit an arcing currency pickup from this defender's position.
    pub produce_pickup: bool,
    /// Spawn a projectile; the caller rerolls the shot cooldown.
    pub fire_projectile: bool,
    /// Detonate: cue, screen shake, and blast damage this frame.
    pub detonate: bool,
    /// Spent mine removes itself through the normal death path.
    pub self_destruct: bool,
}

impl DefenderStep {
    fn idle(machine: DefenderMachine) -> Self {
        Self {
            machine,
            produce_pickup: false,
            fire_projectile: false,
            detonate: false,
            self_destruct: false,
        }
    }
}

/// Step one defender machine by `ctx.dt`.
pub fn step(machine: DefenderMachine, ctx: &DefenderContext) -> DefenderStep {
    match machine {
        DefenderMachine::Sunflower { state, elapsed } => step_sunflower(state, elapsed, ctx),
        DefenderMachine::Shooter {
            state,
            elapsed,
            since_shot,
            cooldown,
        } => step_shooter(state, elapsed, since_shot, cooldown, ctx),
        DefenderMachine::Mine { state, elapsed } => step_mine(state, elapsed, ctx),
        DefenderMachine::Wall => DefenderStep::idle(DefenderMachine::Wall),
    }
}

fn step_sunflower(state: SunflowerState, elapsed: f32, ctx: &DefenderContext) -> DefenderStep {
    let elapsed = elapsed + ctx.dt;
    match state {
        SunflowerState::Idle if elapsed > SUNFLOWER_IDLE_SECS => {
            DefenderStep::idle(DefenderMachine::Sunflower {
                state: SunflowerState::Producing,
                elapsed: 0.0,
            })
        }
        SunflowerState::Producing if elapsed >= SUNFLOWER_PRODUCE_SECS => DefenderStep {
            produce_pickup: true,
            ..DefenderStep::idle(DefenderMachine::Sunflower {
                state: SunflowerState::Cooldown,
                elapsed: 0.0,
            })
        },
        SunflowerState::Cooldown if elapsed > SUNFLOWER_COOLDOWN_SECS => {
            DefenderStep::idle(DefenderMachine::Sunflower {
                state: SunflowerState::Idle,
                elapsed: 0.0,
            })
        }
        _ => DefenderStep::idle(DefenderMachine::Sunflower { state, elapsed }),
    }
}

fn step_shooter(
    state: ShooterState,
    elapsed: f32,
    since_shot: f32,
    cooldown: f32,
    ctx: &DefenderContext,
) -> DefenderStep {
    let elapsed = elapsed + ctx.dt;
    let since_shot = since_shot + ctx.dt;
    match state {
        ShooterState::Idle if ctx.threat_in_lane && since_shot > cooldown => {
            DefenderStep::idle(DefenderMachine::Shooter {
                state: ShooterState::Shooting,
                elapsed: 0.0,
                since_shot: 0.0,
                cooldown,
            })
        }
        ShooterState::Shooting if elapsed >= SHOOTER_SHOOT_SECS => DefenderStep {
            fire_projectile: true,
            ..DefenderStep::idle(DefenderMachine::Shooter {
                state: ShooterState::Idle,
                elapsed: 0.0,
                since_shot,
                cooldown,
            })
        },
        _ => DefenderStep::idle(DefenderMachine::Shooter {
            state,
            elapsed,
            since_shot,
            cooldown,
        }),
    }
}

fn step_mine(state: MineState, elapsed: f32, ctx: &DefenderContext) -> DefenderStep {
    let elapsed = elapsed + ctx.dt;
    match state {
        MineState::Underground if elapsed >= MINE_ARM_SECS => {
            DefenderStep::idle(DefenderMachine::Mine {
                state: MineState::Popping,
                elapsed: 0.0,
            })
        }
        MineState::Popping if elapsed >= MINE_POP_SECS => {
            DefenderStep::idle(DefenderMachine::Mine {
                state: MineState::Idle,
                elapsed: 0.0,
            })
        }
        MineState::Idle if ctx.threat_near => DefenderStep {
            detonate: true,
            ..DefenderStep::idle(DefenderMachine::Mine {
                state: MineState::Exploding,
                elapsed: 0.0,
            })
        },
        MineState::Exploding if elapsed >= MINE_EXPLOSION_SECS => {
            DefenderStep::idle(DefenderMachine::Mine {
                state: MineState::Spent,
                elapsed: 0.0,
            })
        }
        MineState::Spent => DefenderStep {
            self_destruct: true,
            ..DefenderStep::idle(DefenderMachine::Mine { state, elapsed })
        },
        _ => DefenderStep::idle(DefenderMachine::Mine { state, elapsed }),
    }
}

/// Wall display band from remaining hp. Not event-driven: callers derive
/// it fresh every frame.
pub fn wall_band(hp: i32) -> WallBand {
    if hp > WALL_CRACKED_HP {
        WallBand::Full
    } else if hp > WALL_CRUMBLING_HP {
        WallBand::Cracked
    } else {
        WallBand::Crumbling
    }
}
