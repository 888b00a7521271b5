//! Character physics: friction, gravity, platform contact and integration
//!
//! Platforms are one-way lines tested against two bands measured from
//! `trunc(y) - h` (a character-height above the top edge):
//! - head-bump band `(ob.y - 40, ob.y - 25]`: the top edge is at the line,
//!   i.e. the character is rising through it from below; pushed back down
//! - landing band `[ob.y - 60, ob.y - 40)`: the feet are just under the
//!   line; snapped on top of it

use super::state::{Character, Obstacle, World};
use crate::consts::*;

/// Head-bump band, as (exclusive, inclusive) distances above the line
const BUMP_BAND: (f32, f32) = (40.0, 25.0);
/// Landing band, as (inclusive, exclusive) distances above the line
const LANDING_BAND: (f32, f32) = (60.0, 40.0);
/// Where a bumped character's top edge is placed, above the line
const BUMP_SNAP: f32 = 10.0;

/// Advance the character by one tick
pub fn step(world: &mut World, jump_held: bool) {
    let World {
        character,
        obstacles,
        ..
    } = world;

    if character.flying {
        character.vel.x *= FRICTION;
    }
    if !jump_held {
        character.vel.y += GRAVITY;
    }

    resolve_platforms(character, obstacles);
    integrate(character);
}

/// Apply platform bands. The bump latch is recomputed every tick: a snap only
/// happens on the tick the character enters a bump band.
pub fn resolve_platforms(character: &mut Character, obstacles: &[Obstacle]) {
    let mut bumped = false;

    for ob in obstacles {
        if !ob.spans(character.pos.x) {
            continue;
        }
        let delta = character.pos.y.trunc() - character.size.y;

        if delta > ob.y - BUMP_BAND.0 && delta <= ob.y - BUMP_BAND.1 {
            if !(character.blocking || bumped) {
                character.pos.y = ob.y - BUMP_SNAP;
            }
            bumped = true;
            character.vel.y = BUMP_VELOCITY;
        }

        if delta >= ob.y - LANDING_BAND.0 && delta < ob.y - LANDING_BAND.1 {
            character.pos.y = ob.y - character.size.y;
            if !character.jumping {
                character.vel.y = 0.0;
            }
            character.flying = false;
        }
    }

    character.blocking = bumped;
}

/// Move by velocity and clamp to the world; touching the floor grounds the
/// character
pub fn integrate(character: &mut Character) {
    character.pos += character.vel;

    let max = glam::Vec2::new(WORLD_WIDTH, WORLD_HEIGHT) - character.size;
    character.pos.x = character.pos.x.clamp(0.0, max.x);

    if character.pos.y >= max.y {
        character.pos.y = max.y;
        character.jumping = false;
        character.flying = false;
    } else if character.pos.y <= 0.0 {
        character.pos.y = 0.0;
    }
}
