//! Spawn/wave scheduler.
//!
//! Owns the spawn cadence against the match clock: the interval shrinks
//! linearly from the opening pace to a near-zero crawl at the end of the
//! match. Also runs the independent sky-pickup timer and the one-shot
//! final-wave and first-sighting events.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use turfwar_core::constants::*;
use turfwar_core::enums::{AlertLevel, AttackerKind};
use turfwar_core::events::{Alert, AudioEvent, FrameEvents};

use crate::engine::MatchState;
use crate::world_setup;

/// Spawn interval at elapsed time `t`, linearly interpolated over the
/// match duration. Monotonically non-increasing in `t`.
pub fn spawn_interval(t: f32) -> f32 {
    let progress = (t / MATCH_DURATION_SECS).min(1.0);
    INITIAL_SPAWN_INTERVAL + (FINAL_SPAWN_INTERVAL - INITIAL_SPAWN_INTERVAL) * progress
}

/// Draw an attacker kind by cumulative weighted probability.
pub fn weighted_draw(rng: &mut ChaCha8Rng, table: &[(f64, AttackerKind)]) -> AttackerKind {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for &(weight, kind) in table {
        cumulative += weight;
        if roll <= cumulative {
            return kind;
        }
    }
    // Weights should sum to 1.0; fall back to the last entry.
    table.last().map(|&(_, kind)| kind).unwrap_or_default()
}

/// Run the scheduler for one frame. The match clock has already advanced.
pub fn run(
    world: &mut World,
    state: &mut MatchState,
    rng: &mut ChaCha8Rng,
    spawn_table: &[(f64, AttackerKind)],
    events: &mut FrameEvents,
    dt: f32,
) {
    let t = state.time.elapsed;

    // One-shot final-wave escalation; a frame straddling the threshold
    // still fires it exactly once.
    if !state.final_wave_triggered && MATCH_DURATION_SECS - t <= FINAL_WAVE_WARNING_SECS {
        state.final_wave_triggered = true;
        events.audio.push(AudioEvent::FinalWave);
        events.audio.push(AudioEvent::Siren);
        events.alerts.push(Alert {
            level: AlertLevel::Warning,
            message: "FINAL WAVE!".to_string(),
            frame: state.time.frame,
        });
    }

    // Delayed follow-up cue after the first sighting.
    if let Some(timer) = &mut state.awooga_timer {
        *timer -= dt;
        if *timer <= 0.0 {
            events.audio.push(AudioEvent::Awooga);
            state.awooga_timer = None;
        }
    }

    // Attacker spawn cadence; spawning stops once the clock runs out.
    state.spawn_timer += dt;
    if t < MATCH_DURATION_SECS && state.spawn_timer >= spawn_interval(t) {
        state.spawn_timer = 0.0;
        let kind = weighted_draw(rng, spawn_table);
        let lane = rng.gen_range(0..LANE_COUNT);
        world_setup::spawn_attacker(world, state, kind, lane, events);
        state.spawn_count += 1;

        if !state.first_attacker_seen {
            state.first_attacker_seen = true;
            state.awooga_timer = Some(FIRST_SIGHTING_CUE_DELAY);
            events.audio.push(AudioEvent::Groan);
        } else if rng.gen::<f32>() < GROAN_REPEAT_CHANCE {
            events.audio.push(AudioEvent::Groan);
        }
    }

    // Independent sky-pickup timer, re-rolled after each drop.
    state.sun_drop_timer += dt;
    if state.sun_drop_timer >= state.next_sun_drop_in {
        state.sun_drop_timer = 0.0;
        state.next_sun_drop_in = rng.gen_range(SKY_DROP_MIN_INTERVAL..SKY_DROP_MAX_INTERVAL);
        world_setup::spawn_sky_pickup(world, state, rng, events);
    }
}
