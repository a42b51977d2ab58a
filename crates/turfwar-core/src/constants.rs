//! Simulation constants and tuning parameters.

// --- Field geometry ---

/// Total world width in units; entities beyond it are culled.
pub const WORLD_WIDTH: f32 = 640.0;

/// Left edge of the placement field.
pub const FIELD_X: f32 = 145.0;

/// Field width.
pub const FIELD_WIDTH: f32 = 440.0;

/// Bottom edge of the placement field.
pub const FIELD_Y: f32 = 20.0;

/// Field height.
pub const FIELD_HEIGHT: f32 = 300.0;

/// Number of lanes (rows) in the field.
pub const LANE_COUNT: usize = 5;

/// Number of columns in the field.
pub const COLUMN_COUNT: usize = 9;

/// Width of one grid cell.
pub const CELL_WIDTH: f32 = FIELD_WIDTH / COLUMN_COUNT as f32;

/// Height of one grid cell (= one lane).
pub const CELL_HEIGHT: f32 = FIELD_HEIGHT / LANE_COUNT as f32;

/// x-coordinate nearest the home edge; any live attacker crossing it
/// loses the match.
pub const LOSS_BOUNDARY_X: f32 = 50.0;

/// x at which newly spawned attackers enter the world.
pub const ATTACKER_SPAWN_X: f32 = FIELD_X + FIELD_WIDTH + 200.0;

// --- Preview ---

/// Leftmost x for preview attackers standing off-field.
pub const PREVIEW_MIN_X: f32 = 650.0;

/// Random spread added to the preview x.
pub const PREVIEW_SPREAD_X: f32 = 80.0;

/// Preview attacker count range (inclusive min, exclusive max).
pub const PREVIEW_MIN_COUNT: usize = 3;
pub const PREVIEW_MAX_COUNT: usize = 6;

// --- Match clock / spawning ---

/// Total match duration in seconds.
pub const MATCH_DURATION_SECS: f32 = 300.0;

/// Spawn interval at t = 0.
pub const INITIAL_SPAWN_INTERVAL: f32 = 10.0;

/// Spawn interval as t approaches the match duration.
pub const FINAL_SPAWN_INTERVAL: f32 = 0.00001;

/// Time remaining at which the one-shot final-wave escalation fires.
pub const FINAL_WAVE_WARNING_SECS: f32 = 30.0;

/// Delay between the first attacker sighting and the follow-up cue.
pub const FIRST_SIGHTING_CUE_DELAY: f32 = 2.0;

/// Chance that a spawn after the first plays the groan cue.
pub const GROAN_REPEAT_CHANCE: f32 = 0.05;

// --- Sky pickup drops ---

/// Sky pickup interval is re-rolled uniformly in this range after each drop.
pub const SKY_DROP_MIN_INTERVAL: f32 = 5.0;
pub const SKY_DROP_MAX_INTERVAL: f32 = 10.0;

/// Sky pickups land inside the central band of the world width.
pub const SKY_DROP_BAND_MIN_FRAC: f32 = 0.15;
pub const SKY_DROP_BAND_MAX_FRAC: f32 = 0.85;

/// Spawn height for sky pickups.
pub const SKY_DROP_START_Y: f32 = 400.0;

/// Sky pickups settle at a random y in [min, min + range].
pub const SKY_DROP_TARGET_Y_MIN: f32 = 20.0;
pub const SKY_DROP_TARGET_Y_RANGE: f32 = 200.0;

/// Constant fall speed for sky pickups.
pub const SKY_DROP_FALL_SPEED: f32 = 40.0;

// --- Economy ---

/// Sun balance at match start.
pub const STARTING_SUN: u32 = 50;

/// Sun granted per collected pickup.
pub const PICKUP_VALUE: u32 = 25;

/// Seconds an uncollected pickup stays before fading.
pub const PICKUP_LIFETIME_SECS: f32 = 10.0;

/// Fade-out duration after the lifetime expires.
pub const PICKUP_FADE_SECS: f32 = 2.0;

/// Lethal self-damage applied by the shovel; reuses the normal death path.
pub const SHOVEL_DAMAGE: i32 = 9999;

/// Oversized self-damage a spent mine applies to itself.
pub const MINE_SELF_DAMAGE: i32 = 10000;

// --- Walker attacker ---

pub const WALKER_MAX_HP: i32 = 250;

/// Below this hp the one-way wounded flag flips (art only).
pub const WALKER_WOUND_HP: i32 = 175;

/// Below this hp a one-shot cosmetic debris piece is shed.
pub const WALKER_DEBRIS_HP: i32 = 100;

/// Walk speed while Moving (units/s, leftward).
pub const WALKER_WALK_SPEED: f32 = 13.0;

/// Forward drift while Dying (units/s, leftward).
pub const WALKER_DYING_DRIFT_SPEED: f32 = 10.0;

/// Damage per bite against a bound defender.
pub const WALKER_ATTACK_DAMAGE: i32 = 40;

/// Seconds between bites.
pub const WALKER_ATTACK_INTERVAL: f32 = 1.0;

/// Hitbox span within the lane: [x + offset, x + offset + width].
pub const WALKER_HITBOX_OFFSET: f32 = 25.0;
pub const WALKER_HITBOX_WIDTH: f32 = 55.0;

/// Duration of the stumbling Dying state (entered from Moving).
pub const WALKER_DYING_SECS: f32 = 1.75;

/// Duration of the DyingWhileAttacking state (entered from Attacking).
pub const WALKER_DYING_BITE_SECS: f32 = 1.25;

/// Duration of the Dead collapse animation before the thud cue.
pub const WALKER_COLLAPSE_SECS: f32 = 2.25;

/// Fade-out after the collapse completes; removal follows.
pub const WALKER_FADE_SECS: f32 = 0.5;

// --- Defenders ---

/// Default defender hp (Sunflower, Shooter, Mine).
pub const DEFENDER_BASE_HP: i32 = 300;

/// Defender hitbox span within the lane: [x, x + width].
pub const DEFENDER_HITBOX_WIDTH: f32 = 60.0;

pub const SUNFLOWER_IDLE_SECS: f32 = 6.0;
pub const SUNFLOWER_PRODUCE_SECS: f32 = 1.2;
pub const SUNFLOWER_COOLDOWN_SECS: f32 = 8.0;

/// Shooter per-shot cooldown: uniform in [min, min + jitter].
pub const SHOOTER_MIN_COOLDOWN: f32 = 2.0;
pub const SHOOTER_COOLDOWN_JITTER: f32 = 0.3;

/// Duration of the Shooting state before the projectile leaves.
pub const SHOOTER_SHOOT_SECS: f32 = 0.75;

/// Arming delay before a mine surfaces.
pub const MINE_ARM_SECS: f32 = 10.0;

/// Duration of the surfacing animation.
pub const MINE_POP_SECS: f32 = 0.45;

/// In-lane proximity that triggers detonation.
pub const MINE_TRIGGER_RANGE: f32 = 40.0;

/// In-lane blast radius.
pub const MINE_BLAST_RANGE: f32 = 60.0;

/// Damage dealt to every live attacker inside the blast radius.
pub const MINE_BLAST_DAMAGE: i32 = 200;

/// Duration of the explosion animation before the mine is spent.
pub const MINE_EXPLOSION_SECS: f32 = 0.8;

/// Screen shake emitted on detonation.
pub const MINE_SHAKE_DURATION: f32 = 0.3;
pub const MINE_SHAKE_INTENSITY: f32 = 5.0;

pub const WALL_MAX_HP: i32 = 4000;

/// Wall display bands, re-derived from hp every frame.
pub const WALL_CRACKED_HP: i32 = 2666;
pub const WALL_CRUMBLING_HP: i32 = 1333;

// --- Projectiles ---

/// Projectile speed (units/s, rightward).
pub const PROJECTILE_SPEED: f32 = 200.0;

pub const PROJECTILE_DAMAGE: i32 = 20;

pub const PROJECTILE_WIDTH: f32 = 12.0;

/// Muzzle offset from the shooter's x.
pub const PROJECTILE_MUZZLE_OFFSET_X: f32 = 35.0;

/// Seconds the splatted projectile lingers before removal.
pub const PROJECTILE_HIT_LINGER_SECS: f32 = 0.2;

// --- Ballistics ---

/// Launch velocity for sunflower-produced pickups.
pub const PICKUP_ARC_LAUNCH_VY: f32 = 40.0;

/// Horizontal launch spread for sunflower-produced pickups: [-spread, spread].
pub const PICKUP_ARC_VX_SPREAD: f32 = 20.0;

/// Gravity applied to arcing pickups (units/s²).
pub const PICKUP_GRAVITY: f32 = -120.0;

/// Gravity applied to cosmetic debris (units/s²).
pub const DEBRIS_GRAVITY: f32 = -500.0;

/// Fade-out once a debris piece settles; removal follows.
pub const DEBRIS_SETTLE_FADE_SECS: f32 = 0.3;
