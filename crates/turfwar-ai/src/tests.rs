#[cfg(test)]
mod tests {
    use turfwar_core::components::DefenderMachine;
    use turfwar_core::constants::*;
    use turfwar_core::enums::*;

    use crate::attacker::{death_state, evaluate, AttackerContext, AttackerStep, TargetStatus};
    use crate::defender::{step, wall_band, DefenderContext};
    use crate::profiles::{attacker_profile, defender_max_hp};

    fn make_context(
        state: AttackerState,
        elapsed: f32,
        cooldown: f32,
        target: TargetStatus,
    ) -> AttackerContext {
        AttackerContext {
            state,
            state_elapsed: elapsed,
            attack_cooldown: cooldown,
            target,
            thud_fired: false,
            dt: 1.0 / 60.0,
        }
    }

    fn eval(ctx: &AttackerContext) -> AttackerStep {
        evaluate(ctx, &attacker_profile(AttackerKind::Walker))
    }

    // ---- Attacker machine ----

    #[test]
    fn test_moving_advances_leftward() {
        let ctx = make_context(AttackerState::Moving, 1.0, 0.5, TargetStatus::Unbound);
        let step = eval(&ctx);
        assert!(!step.state_changed);
        assert!(
            step.dx < 0.0,
            "Moving should displace toward the home edge"
        );
        assert!((step.dx - (-WALKER_WALK_SPEED * ctx.dt)).abs() < 1e-6);
    }

    #[test]
    fn test_idle_preview_never_moves() {
        let ctx = make_context(AttackerState::Idle, 100.0, 0.0, TargetStatus::Unbound);
        let step = eval(&ctx);
        assert!(!step.state_changed);
        assert_eq!(step.dx, 0.0);
        assert!(!step.bite);
    }

    #[test]
    fn test_attacking_bites_when_cooldown_elapsed() {
        let ctx = make_context(AttackerState::Attacking, 2.0, 0.0, TargetStatus::Alive);
        let step = eval(&ctx);
        assert!(step.bite, "Cooldown at zero should bite");
        assert!(!step.state_changed);
        assert_eq!(step.dx, 0.0, "Attacking never moves");
    }

    #[test]
    fn test_attacking_waits_for_cooldown() {
        let ctx = make_context(AttackerState::Attacking, 2.0, 0.4, TargetStatus::Alive);
        let step = eval(&ctx);
        assert!(!step.bite);
    }

    #[test]
    fn test_attacking_consumed_target_returns_to_moving() {
        let ctx = make_context(AttackerState::Attacking, 2.0, 0.5, TargetStatus::Dead);
        let step = eval(&ctx);
        assert!(step.state_changed);
        assert_eq!(step.new_state, AttackerState::Moving);
        assert!(step.gulp);
        assert!(step.unbind);
    }

    #[test]
    fn test_attacking_stale_target_unbinds_silently() {
        let ctx = make_context(AttackerState::Attacking, 2.0, 0.5, TargetStatus::Missing);
        let step = eval(&ctx);
        assert_eq!(step.new_state, AttackerState::Moving);
        assert!(step.unbind);
        assert!(!step.gulp, "Dangling reference should not gulp");
    }

    #[test]
    fn test_dying_drifts_then_collapses() {
        let ctx = make_context(AttackerState::Dying, 0.5, 0.0, TargetStatus::Unbound);
        let step = eval(&ctx);
        assert!(!step.state_changed);
        assert!(
            step.dx < 0.0 && step.dx > -WALKER_WALK_SPEED * ctx.dt,
            "Dying drift should be slower than walking"
        );

        let ctx = make_context(
            AttackerState::Dying,
            WALKER_DYING_SECS + 0.01,
            0.0,
            TargetStatus::Unbound,
        );
        let step = eval(&ctx);
        assert!(step.state_changed);
        assert_eq!(step.new_state, AttackerState::Dead);
    }

    #[test]
    fn test_dying_while_attacking_is_stationary() {
        let ctx = make_context(
            AttackerState::DyingWhileAttacking,
            0.5,
            0.0,
            TargetStatus::Unbound,
        );
        let step = eval(&ctx);
        assert_eq!(step.dx, 0.0);

        let ctx = make_context(
            AttackerState::DyingWhileAttacking,
            WALKER_DYING_BITE_SECS + 0.01,
            0.0,
            TargetStatus::Unbound,
        );
        assert_eq!(eval(&ctx).new_state, AttackerState::Dead);
    }

    #[test]
    fn test_dead_thud_fires_once() {
        let mut ctx = make_context(
            AttackerState::Dead,
            WALKER_COLLAPSE_SECS + 0.01,
            0.0,
            TargetStatus::Unbound,
        );
        let step = eval(&ctx);
        assert!(step.thud, "Collapse completion should cue the thud");
        assert!(!step.state_changed, "Dead is terminal");

        ctx.thud_fired = true;
        assert!(!eval(&ctx).thud, "Thud is one-shot");
    }

    #[test]
    fn test_death_state_depends_on_activity() {
        assert_eq!(
            death_state(AttackerState::Attacking),
            AttackerState::DyingWhileAttacking
        );
        assert_eq!(death_state(AttackerState::Moving), AttackerState::Dying);
        assert_eq!(death_state(AttackerState::Idle), AttackerState::Dying);
    }

    // ---- Defender machines ----

    fn quiet(dt: f32) -> DefenderContext {
        DefenderContext {
            threat_in_lane: false,
            threat_near: false,
            dt,
        }
    }

    #[test]
    fn test_sunflower_cycle() {
        let mut machine = DefenderMachine::Sunflower {
            state: SunflowerState::Idle,
            elapsed: 0.0,
        };

        // Idle for 6s, then Producing.
        let s = step(machine, &quiet(SUNFLOWER_IDLE_SECS + 0.01));
        machine = s.machine;
        assert!(matches!(
            machine,
            DefenderMachine::Sunflower {
                state: SunflowerState::Producing,
                ..
            }
        ));
        assert!(!s.produce_pickup);

        // Production animation completes and emits exactly one pickup.
        let s = step(machine, &quiet(SUNFLOWER_PRODUCE_SECS));
        machine = s.machine;
        assert!(s.produce_pickup);
        assert!(matches!(
            machine,
            DefenderMachine::Sunflower {
                state: SunflowerState::Cooldown,
                ..
            }
        ));

        // Cooldown loops back to Idle.
        let s = step(machine, &quiet(SUNFLOWER_COOLDOWN_SECS + 0.01));
        assert!(matches!(
            s.machine,
            DefenderMachine::Sunflower {
                state: SunflowerState::Idle,
                ..
            }
        ));
    }

    #[test]
    fn test_shooter_holds_fire_without_threat() {
        let machine = DefenderMachine::Shooter {
            state: ShooterState::Idle,
            elapsed: 0.0,
            since_shot: 100.0,
            cooldown: 2.1,
        };
        let s = step(machine, &quiet(1.0 / 60.0));
        assert!(matches!(
            s.machine,
            DefenderMachine::Shooter {
                state: ShooterState::Idle,
                ..
            }
        ));
        assert!(!s.fire_projectile);
    }

    #[test]
    fn test_shooter_fires_after_wind_up() {
        let machine = DefenderMachine::Shooter {
            state: ShooterState::Idle,
            elapsed: 0.0,
            since_shot: 5.0,
            cooldown: 2.1,
        };
        let ctx = DefenderContext {
            threat_in_lane: true,
            threat_near: false,
            dt: 1.0 / 60.0,
        };
        let s = step(machine, &ctx);
        assert!(matches!(
            s.machine,
            DefenderMachine::Shooter {
                state: ShooterState::Shooting,
                ..
            }
        ));
        assert!(!s.fire_projectile, "Projectile waits for the wind-up");

        let s = step(s.machine, &quiet(SHOOTER_SHOOT_SECS));
        assert!(s.fire_projectile);
        assert!(matches!(
            s.machine,
            DefenderMachine::Shooter {
                state: ShooterState::Idle,
                since_shot,
                ..
            } if since_shot < 1.0
        ));
    }

    #[test]
    fn test_mine_arms_then_detonates() {
        let mut machine = DefenderMachine::Mine {
            state: MineState::Underground,
            elapsed: 0.0,
        };

        // Still buried before the arming delay; a nearby threat is ignored.
        let near = DefenderContext {
            threat_in_lane: true,
            threat_near: true,
            dt: 1.0,
        };
        let s = step(machine, &near);
        machine = s.machine;
        assert!(matches!(
            machine,
            DefenderMachine::Mine {
                state: MineState::Underground,
                ..
            }
        ));
        assert!(!s.detonate);

        // Finish arming and surfacing.
        machine = step(machine, &quiet(MINE_ARM_SECS)).machine;
        assert!(matches!(
            machine,
            DefenderMachine::Mine {
                state: MineState::Popping,
                ..
            }
        ));
        machine = step(machine, &quiet(MINE_POP_SECS)).machine;
        assert!(matches!(
            machine,
            DefenderMachine::Mine {
                state: MineState::Idle,
                ..
            }
        ));

        // Armed and triggered.
        let s = step(machine, &near);
        assert!(s.detonate);
        machine = s.machine;
        assert!(matches!(
            machine,
            DefenderMachine::Mine {
                state: MineState::Exploding,
                ..
            }
        ));

        // Explosion plays out, then the mine removes itself.
        machine = step(machine, &quiet(MINE_EXPLOSION_SECS)).machine;
        let s = step(machine, &quiet(1.0 / 60.0));
        assert!(s.self_destruct);
    }

    #[test]
    fn test_wall_bands() {
        assert_eq!(wall_band(WALL_MAX_HP), WallBand::Full);
        assert_eq!(wall_band(WALL_CRACKED_HP + 1), WallBand::Full);
        assert_eq!(wall_band(WALL_CRACKED_HP), WallBand::Cracked);
        assert_eq!(wall_band(WALL_CRUMBLING_HP + 1), WallBand::Cracked);
        assert_eq!(wall_band(WALL_CRUMBLING_HP), WallBand::Crumbling);
        assert_eq!(wall_band(1), WallBand::Crumbling);
    }

    #[test]
    fn test_defender_hp_table() {
        assert_eq!(defender_max_hp(DefenderKind::Wall), WALL_MAX_HP);
        assert_eq!(defender_max_hp(DefenderKind::Sunflower), DEFENDER_BASE_HP);
        assert_eq!(defender_max_hp(DefenderKind::Shooter), DEFENDER_BASE_HP);
        assert_eq!(defender_max_hp(DefenderKind::Mine), DEFENDER_BASE_HP);
    }
}
