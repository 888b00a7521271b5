//! Simulation tick
//!
//! Core game loop step: AI, controller, physics and combat in a fixed order,
//! followed by the win/loss check.

use super::snapshot::WorldSnapshot;
use super::state::{GamePhase, Outcome, World};
use super::{ai, combat, controller, physics};
use crate::consts::*;

pub use super::controller::InputSnapshot;

/// Result of advancing one tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The match continues; draw this frame
    Running(WorldSnapshot),
    /// The match is over; no further ticks advance the world
    Finished(Outcome),
}

impl TickOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, TickOutcome::Finished(_))
    }
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &InputSnapshot) -> TickOutcome {
    if let GamePhase::Over(outcome) = world.phase {
        return TickOutcome::Finished(outcome);
    }

    world.events.clear();

    ai::advance_enemies(world);
    controller::apply_input(world, input);
    physics::step(world, input.jump);
    combat::resolve_shots(world);

    world.frame_count += 1;
    debug_assert_invariants(world);

    log::trace!(
        "tick {}: pos {:?} hp {} enemies {} shots {}",
        world.frame_count,
        world.character.pos,
        world.character.hp,
        world.enemies.len(),
        world.shots.len()
    );

    // Loss takes precedence when both happen on the same tick
    let outcome = if world.character.hp <= 0 {
        Some(Outcome::Loss)
    } else if world.enemies.is_empty() {
        Some(Outcome::Win)
    } else {
        None
    };

    match outcome {
        Some(outcome) => {
            world.phase = GamePhase::Over(outcome);
            log::info!("Match over after {} frames: {:?}", world.frame_count, outcome);
            TickOutcome::Finished(outcome)
        }
        None => TickOutcome::Running(world.snapshot()),
    }
}

fn debug_assert_invariants(world: &World) {
    let c = &world.character;
    debug_assert!(c.pos.x >= 0.0 && c.pos.x <= WORLD_WIDTH - c.size.x);
    debug_assert!(c.pos.y >= 0.0 && c.pos.y <= WORLD_HEIGHT - c.size.y);
    debug_assert!(
        world
            .enemies
            .iter()
            .all(|e| e.offset.abs() <= PATROL_LIMIT && e.hp > 0)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Character, Direction, Enemy, EnemyKind, Obstacle, Shot, ShotOrigin};
    use glam::Vec2;

    #[test]
    fn test_tick_advances_frame_and_snapshots() {
        let mut world = World::new();
        let outcome = tick(&mut world, &InputSnapshot::default());
        let TickOutcome::Running(snap) = outcome else {
            panic!("match should still be running");
        };
        assert_eq!(snap.frame_count, 1);
        assert_eq!(world.frame_count, 1);
    }

    #[test]
    fn test_falls_to_floor_without_jump() {
        let character = Character {
            pos: Vec2::new(700.0, 100.0),
            ..Default::default()
        };
        let mut world = World::with_layout(
            character,
            vec![Obstacle::new(0.0, 150.0, 400.0)],
            vec![Enemy::new(EnemyKind::Assaulter, 0, 0, 90.0, Direction::Left)],
        );
        // Keep the assaulter from hitting us: it sits far away on the left
        let mut last_y = world.character.pos.y;
        for _ in 0..200 {
            tick(&mut world, &InputSnapshot::default());
            assert!(world.character.pos.y >= last_y);
            last_y = world.character.pos.y;
        }
        assert_eq!(world.character.pos.y, WORLD_HEIGHT - 30.0);
        assert!(!world.character.jumping);
        assert!(!world.character.flying);
    }

    #[test]
    fn test_win_when_last_enemy_dies() {
        let mut world = World::with_layout(
            Character::default(),
            vec![Obstacle::new(800.0, 300.0, 1200.0)],
            vec![Enemy::new(EnemyKind::Sniper, 0, 2, 240.0, Direction::Left)],
        );
        world.enemies[0].hp = 10;
        world.shots.push(Shot {
            pos: Vec2::new(985.0, 280.0),
            size: Vec2::new(6.0, 3.0),
            damage: 10,
            origin: ShotOrigin::Player,
            direction: Direction::Right,
        });
        assert_eq!(tick(&mut world, &InputSnapshot::default()), TickOutcome::Finished(Outcome::Win));
        assert_eq!(world.outcome(), Some(Outcome::Win));
    }

    #[test]
    fn test_loss_checked_before_win() {
        let mut world = World::with_layout(
            Character::default(),
            vec![Obstacle::new(800.0, 300.0, 1200.0)],
            vec![Enemy::new(EnemyKind::Sniper, 0, 2, 240.0, Direction::Left)],
        );
        world.character.hp = 40;
        world.enemies[0].hp = 10;
        world.shots.push(Shot {
            pos: Vec2::new(985.0, 280.0),
            size: Vec2::new(6.0, 3.0),
            damage: 10,
            origin: ShotOrigin::Player,
            direction: Direction::Right,
        });
        world.shots.push(Shot {
            pos: Vec2::new(580.0, 760.0),
            size: Vec2::new(20.0, 2.0),
            damage: 40,
            origin: ShotOrigin::Enemy(EnemyKind::Sniper),
            direction: Direction::Left,
        });
        assert_eq!(tick(&mut world, &InputSnapshot::default()), TickOutcome::Finished(Outcome::Loss));
        assert!(world.enemies.is_empty());
        assert_eq!(world.character.hp, 0);
    }

    #[test]
    fn test_no_tick_after_terminal() {
        let mut world = World::with_layout(Character::default(), vec![], vec![]);
        assert_eq!(tick(&mut world, &InputSnapshot::default()), TickOutcome::Finished(Outcome::Win));
        let frame = world.frame_count;
        let pos = world.character.pos;

        let jump = InputSnapshot {
            jump: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut world, &jump), TickOutcome::Finished(Outcome::Win));
        assert_eq!(world.frame_count, frame);
        assert_eq!(world.character.pos, pos);
    }

    #[test]
    fn test_determinism() {
        let mut world1 = World::new();
        let mut world2 = World::new();

        let inputs = [
            InputSnapshot {
                move_right: true,
                ..Default::default()
            },
            InputSnapshot {
                jump: true,
                fire_left: true,
                ..Default::default()
            },
            InputSnapshot {
                jump: true,
                ..Default::default()
            },
            InputSnapshot::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                let a = tick(&mut world1, input);
                let b = tick(&mut world2, input);
                assert_eq!(a, b);
            }
        }
        assert_eq!(world1.character.pos, world2.character.pos);
        assert_eq!(world1.shots.len(), world2.shots.len());
    }
}
