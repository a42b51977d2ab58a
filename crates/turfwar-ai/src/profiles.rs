//! Variant-specific behavioral profiles.
//!
//! Consolidates per-variant parameters for the entity machines.

use turfwar_core::constants::*;
use turfwar_core::enums::{AttackerKind, DefenderKind};

/// Behavioral profile for an attacker variant.
pub struct AttackerProfile {
    pub max_hp: i32,
    /// Below this hp the one-way wounded flag flips.
    pub wound_hp: i32,
    /// Below this hp a one-shot debris piece is shed.
    pub debris_hp: i32,
    /// Walk speed while Moving (units/s).
    pub walk_speed: f32,
    /// Forward drift while Dying (units/s).
    pub dying_drift_speed: f32,
    pub attack_damage: i32,
    pub attack_interval: f32,
    /// Hitbox span within the lane: [x + offset, x + offset + width].
    pub hitbox_offset: f32,
    pub hitbox_width: f32,
    pub dying_secs: f32,
    pub dying_bite_secs: f32,
    pub collapse_secs: f32,
    pub fade_secs: f32,
}

/// Get the behavioral profile for a given attacker variant.
pub fn attacker_profile(kind: AttackerKind) -> AttackerProfile {
    match kind {
        AttackerKind::Walker => AttackerProfile {
            max_hp: WALKER_MAX_HP,
            wound_hp: WALKER_WOUND_HP,
            debris_hp: WALKER_DEBRIS_HP,
            walk_speed: WALKER_WALK_SPEED,
            dying_drift_speed: WALKER_DYING_DRIFT_SPEED,
            attack_damage: WALKER_ATTACK_DAMAGE,
            attack_interval: WALKER_ATTACK_INTERVAL,
            hitbox_offset: WALKER_HITBOX_OFFSET,
            hitbox_width: WALKER_HITBOX_WIDTH,
            dying_secs: WALKER_DYING_SECS,
            dying_bite_secs: WALKER_DYING_BITE_SECS,
            collapse_secs: WALKER_COLLAPSE_SECS,
            fade_secs: WALKER_FADE_SECS,
        },
    }
}

/// Starting hp for a defender variant.
pub fn defender_max_hp(kind: DefenderKind) -> i32 {
    match kind {
        DefenderKind::Wall => WALL_MAX_HP,
        _ => DEFENDER_BASE_HP,
    }
}
