//! The fixed match layout

use super::state::{Direction, Enemy, EnemyKind, Obstacle};
use crate::consts::WORLD_WIDTH;

const OBSTACLES: [Obstacle; 3] = [
    Obstacle::new(0.0, 150.0, 400.0),
    Obstacle::new(800.0, 300.0, WORLD_WIDTH),
    Obstacle::new(200.0, 500.0, WORLD_WIDTH / 2.0),
];

pub fn obstacles() -> &'static [Obstacle] {
    &OBSTACLES
}

/// Enemies in spawn order: (kind, floor, offset, perch height, facing)
pub fn enemies() -> Vec<Enemy> {
    vec![
        Enemy::new(EnemyKind::Sniper, 0, -150, 90.0, Direction::Left),
        Enemy::new(EnemyKind::Assaulter, 1, 0, 240.0, Direction::Right),
        Enemy::new(EnemyKind::Sniper, 2, 150, 440.0, Direction::Left),
    ]
}
