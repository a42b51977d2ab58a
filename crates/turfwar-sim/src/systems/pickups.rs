//! Pickup and debris ballistics.
//!
//! Pickups either arc under gravity (sunflower production) or drift down
//! at a constant speed (sky drops); both settle at their ground height and
//! age toward the timeout fade. Debris tumbles under heavier gravity and
//! fades shortly after settling. Expiry is compacted by cleanup.

use hecs::World;

use turfwar_core::components::{Debris, Pickup};
use turfwar_core::constants::*;
use turfwar_core::types::Position;

/// Run pickup and debris motion for one frame.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (pickup, pos)) in world.query_mut::<(&mut Pickup, &mut Position)>() {
        pickup.age += dt;
        if pickup.collected || pickup.landed {
            continue;
        }
        if pickup.ballistic {
            pickup.vel.y += PICKUP_GRAVITY * dt;
        }
        let next = pos.0 + pickup.vel * dt;
        if next.y <= pickup.ground_y {
            pos.0.y = pickup.ground_y;
            pickup.landed = true;
        } else {
            pos.0 = next;
        }
    }

    for (_entity, (debris, pos)) in world.query_mut::<(&mut Debris, &mut Position)>() {
        if debris.landed {
            debris.settle_elapsed += dt;
            continue;
        }
        debris.vel.y += DEBRIS_GRAVITY * dt;
        debris.rotation += debris.spin * dt;
        let next = pos.0 + debris.vel * dt;
        if next.y <= debris.ground_y {
            pos.0.y = debris.ground_y;
            debris.landed = true;
        } else {
            pos.0 = next;
        }
    }
}
