//! Shot movement and hit resolution
//!
//! The only place hit points change and the only place shots and enemies are
//! removed. Spent shots are flagged during the scan and dropped afterwards;
//! dead enemies stay in place until the final `retain`.

use super::state::{GameEvent, World};
use crate::consts::*;

/// Move every shot one tick and apply hits
pub fn resolve_shots(world: &mut World) {
    let World {
        character,
        enemies,
        shots,
        obstacles,
        events,
        ..
    } = world;

    let character_region = character.hit_region();
    let mut spent = vec![false; shots.len()];

    for (shot_idx, shot) in shots.iter_mut().enumerate() {
        // A hit on the character resolves the shot before it moves
        if !shot.origin.is_player() && character_region.contains(shot.pos) {
            character.hp -= shot.damage;
            spent[shot_idx] = true;
            events.push(GameEvent::CharacterHit {
                damage: shot.damage,
                hp: character.hp,
            });
            log::debug!(
                "Hit by {} for {} (hp {})",
                shot.origin.tag(),
                shot.damage,
                character.hp
            );
            continue;
        }

        shot.pos.x += shot.direction.sign() * SHOT_SPEED;
        if shot.pos.x < 0.0 || shot.pos.x > WORLD_WIDTH {
            spent[shot_idx] = true;
            continue;
        }

        if !shot.origin.is_player() {
            continue;
        }

        let target = enemies
            .iter_mut()
            .find(|enemy| enemy.hp > 0 && enemy.hit_region(&obstacles[enemy.floor]).contains(shot.pos));

        if let Some(enemy) = target {
            enemy.hp -= character.damage;
            spent[shot_idx] = true;
            events.push(GameEvent::EnemyHit {
                kind: enemy.kind,
                hp: enemy.hp,
            });

            if enemy.hp <= 0 {
                events.push(GameEvent::EnemyKilled { kind: enemy.kind });
                log::debug!("{} down", enemy.kind.name());
            }
        }
    }

    let mut spent = spent.into_iter();
    shots.retain(|_| !spent.next().unwrap_or(false));
    // Remove destroyed enemies
    enemies.retain(|e| e.hp > 0);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::{Character, Direction, Enemy, EnemyKind, Obstacle, Shot, ShotOrigin};

    fn shot(x: f32, y: f32, origin: ShotOrigin, direction: Direction) -> Shot {
        Shot {
            pos: Vec2::new(x, y),
            size: Vec2::new(6.0, 3.0),
            damage: match origin {
                ShotOrigin::Player => 10,
                ShotOrigin::Enemy(kind) => kind.template().damage,
            },
            origin,
            direction,
        }
    }

    fn arena() -> World {
        // Assaulter anchored at (1000, 300), character on the floor at x 575
        World::with_layout(
            Character::default(),
            vec![Obstacle::new(800.0, 300.0, 1200.0)],
            vec![Enemy::new(EnemyKind::Assaulter, 0, 0, 240.0, Direction::Right)],
        )
    }

    #[test]
    fn test_enemy_shot_hits_character() {
        let mut world = arena();
        world.shots.push(shot(
            580.0,
            740.0,
            ShotOrigin::Enemy(EnemyKind::Sniper),
            Direction::Left,
        ));
        resolve_shots(&mut world);
        assert_eq!(world.character.hp, 60);
        assert!(world.shots.is_empty());
        assert_eq!(
            world.events,
            vec![GameEvent::CharacterHit { damage: 40, hp: 60 }]
        );
    }

    #[test]
    fn test_character_region_edges_inclusive() {
        let mut world = arena();
        // Region spans x 545..=605, y 720..=780
        world.shots.push(shot(545.0, 720.0, ShotOrigin::Enemy(EnemyKind::Assaulter), Direction::Left));
        world.shots.push(shot(605.0, 780.0, ShotOrigin::Enemy(EnemyKind::Assaulter), Direction::Left));
        world.shots.push(shot(606.0, 780.0, ShotOrigin::Enemy(EnemyKind::Assaulter), Direction::Left));
        resolve_shots(&mut world);
        assert_eq!(world.character.hp, 80);
        assert_eq!(world.shots.len(), 1);
        assert_eq!(world.shots[0].pos.x, 596.0);
    }

    #[test]
    fn test_own_shot_passes_through_character() {
        let mut world = arena();
        world.shots.push(shot(585.0, 750.0, ShotOrigin::Player, Direction::Right));
        resolve_shots(&mut world);
        assert_eq!(world.character.hp, 100);
        assert_eq!(world.shots.len(), 1);
        assert_eq!(world.shots[0].pos.x, 595.0);
    }

    #[test]
    fn test_shot_removed_outside_world() {
        let mut world = arena();
        world.shots.push(shot(5.0, 10.0, ShotOrigin::Player, Direction::Left));
        world.shots.push(shot(1195.0, 10.0, ShotOrigin::Player, Direction::Right));
        world.shots.push(shot(10.0, 10.0, ShotOrigin::Player, Direction::Left));
        resolve_shots(&mut world);
        assert_eq!(world.shots.len(), 1);
        assert_eq!(world.shots[0].pos.x, 0.0);
    }

    #[test]
    fn test_assaulter_needs_six_hits() {
        let mut world = arena();
        for hit in 1..=6 {
            assert_eq!(world.enemies.len(), 1, "still alive before hit {hit}");
            world.shots.push(shot(985.0, 280.0, ShotOrigin::Player, Direction::Right));
            resolve_shots(&mut world);
            assert!(world.shots.is_empty());
        }
        assert!(world.enemies.is_empty());
        assert!(world.events.contains(&GameEvent::EnemyKilled {
            kind: EnemyKind::Assaulter
        }));
    }

    #[test]
    fn test_enemy_shots_do_not_hurt_enemies() {
        let mut world = arena();
        world.shots.push(shot(
            985.0,
            280.0,
            ShotOrigin::Enemy(EnemyKind::Sniper),
            Direction::Right,
        ));
        resolve_shots(&mut world);
        assert_eq!(world.enemies[0].hp, 60);
        assert_eq!(world.shots.len(), 1);
    }

    #[test]
    fn test_one_shot_hits_one_enemy() {
        let mut world = World::with_layout(
            Character::default(),
            vec![Obstacle::new(800.0, 300.0, 1200.0)],
            vec![
                Enemy::new(EnemyKind::Sniper, 0, 0, 240.0, Direction::Right),
                Enemy::new(EnemyKind::Sniper, 0, 5, 240.0, Direction::Right),
            ],
        );
        world.shots.push(shot(995.0, 280.0, ShotOrigin::Player, Direction::Right));
        resolve_shots(&mut world);
        assert_eq!(world.enemies[0].hp, 20);
        assert_eq!(world.enemies[1].hp, 30);
    }

    #[test]
    fn test_dead_enemy_not_hit_again_same_tick() {
        let mut world = World::with_layout(
            Character::default(),
            vec![Obstacle::new(800.0, 300.0, 1200.0)],
            vec![
                Enemy::new(EnemyKind::Assaulter, 0, 0, 240.0, Direction::Right),
                Enemy::new(EnemyKind::Sniper, 0, 5, 240.0, Direction::Right),
            ],
        );
        world.enemies[0].hp = 10;
        // Both shots land where the two regions overlap
        world.shots.push(shot(995.0, 280.0, ShotOrigin::Player, Direction::Right));
        world.shots.push(shot(995.0, 285.0, ShotOrigin::Player, Direction::Right));
        resolve_shots(&mut world);
        assert!(world.shots.is_empty());
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.enemies[0].kind, EnemyKind::Sniper);
        assert_eq!(world.enemies[0].hp, 20);
    }

    #[test]
    fn test_adjacent_removals_not_skipped() {
        let mut world = arena();
        for _ in 0..3 {
            world.shots.push(shot(
                580.0,
                750.0,
                ShotOrigin::Enemy(EnemyKind::Assaulter),
                Direction::Left,
            ));
        }
        resolve_shots(&mut world);
        assert_eq!(world.character.hp, 70);
        assert!(world.shots.is_empty());
    }
}
