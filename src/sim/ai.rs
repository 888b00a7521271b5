//! Enemy patrol and fire
//!
//! Every tick each enemy steps along its floor, fires when its offset lands
//! on a multiple of its kind's fire interval, and turns around at the
//! patrol bounds. The turn takes effect on the following tick.

use glam::Vec2;

use super::state::{Direction, GameEvent, Shot, ShotOrigin, World};
use crate::consts::*;

/// Advance every enemy by one tick, spawning their shots
pub fn advance_enemies(world: &mut World) {
    let World {
        enemies,
        obstacles,
        shots,
        events,
        ..
    } = world;

    for enemy in enemies.iter_mut() {
        match enemy.direction {
            Direction::Left if enemy.offset != -PATROL_LIMIT => enemy.offset -= PATROL_STEP,
            Direction::Right if enemy.offset != PATROL_LIMIT => enemy.offset += PATROL_STEP,
            _ => {}
        }
        enemy.offset = enemy.offset.clamp(-PATROL_LIMIT, PATROL_LIMIT);

        if enemy.offset % enemy.kind.fire_interval() == 0 {
            let template = enemy.kind.template();
            let floor = &obstacles[enemy.floor];
            shots.push(Shot {
                pos: Vec2::new(
                    enemy.world_x(floor) + MUZZLE_OFFSET,
                    enemy.perch_y + ENEMY_MUZZLE_DROP,
                ),
                size: template.shot_size,
                damage: template.damage,
                origin: ShotOrigin::Enemy(enemy.kind),
                direction: enemy.direction,
            });
            events.push(GameEvent::ShotFired {
                origin: ShotOrigin::Enemy(enemy.kind),
            });
        }

        if enemy.offset == PATROL_LIMIT {
            enemy.direction = Direction::Left;
        } else if enemy.offset == -PATROL_LIMIT {
            enemy.direction = Direction::Right;
        }
    }
}
