//! Character controller: input snapshot to velocity, jump state and shots

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Direction, GameEvent, Shot, ShotOrigin, World};
use crate::consts::*;

/// Pressed state of every logical action, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub fire_left: bool,
    pub fire_right: bool,
}

impl InputSnapshot {
    /// Direction to fire in, if either fire action is held (left wins)
    pub fn fire_direction(&self) -> Option<Direction> {
        if self.fire_left {
            Some(Direction::Left)
        } else if self.fire_right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Apply one tick of input to the character
pub fn apply_input(world: &mut World, input: &InputSnapshot) {
    update_jump(world, input.jump);

    if let Some(direction) = input.fire_direction() {
        try_fire(world, direction);
    }

    let character = &mut world.character;
    if input.move_right && character.vel.x < character.speed {
        character.vel.x += 1.0;
    }
    if input.move_left && character.vel.x > -character.speed {
        character.vel.x -= 1.0;
    }
}

/// Jump state machine: a first press jumps, holding it on a later tick
/// turns the jump into a glide; releasing ends the jump but not the glide
fn update_jump(world: &mut World, held: bool) {
    let character = &mut world.character;
    if !held {
        character.jumping = false;
        return;
    }

    if character.jumping {
        character.flying = true;
    } else {
        character.jumping = true;
    }

    character.vel.y = if character.flying {
        -character.speed
    } else {
        -character.speed * 2.0
    };
}

/// Fire a player shot unless any live shot is still within `FIRE_SPACING`
/// of the character horizontally. Returns whether a shot was spawned.
pub fn try_fire(world: &mut World, direction: Direction) -> bool {
    let x = world.character.pos.x;
    if world
        .shots
        .iter()
        .any(|shot| (shot.pos.x - x).abs() <= FIRE_SPACING)
    {
        return false;
    }

    world.shots.push(Shot {
        pos: Vec2::new(x + MUZZLE_OFFSET, world.character.pos.y),
        size: Vec2::new(PLAYER_SHOT_WIDTH, PLAYER_SHOT_HEIGHT),
        damage: world.character.damage,
        origin: ShotOrigin::Player,
        direction,
    });
    world.events.push(GameEvent::ShotFired {
        origin: ShotOrigin::Player,
    });
    true
}
