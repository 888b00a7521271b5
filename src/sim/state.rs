//! Game state and core simulation types
//!
//! Screen-space coordinates: origin top-left, y grows downward, positions are
//! the top-left corner of an entity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::scenario;
use crate::consts::*;

/// Horizontal facing / travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Immutable per-kind enemy stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub max_hp: i32,
    pub damage: i32,
    pub body_size: Vec2,
    pub shot_size: Vec2,
    pub color: &'static str,
    /// Fire-rate divisor: the enemy fires every `PATROL_SPAN / hits` units of offset
    pub hits: i32,
}

const SNIPER: EnemyTemplate = EnemyTemplate {
    name: "sniper",
    max_hp: 30,
    damage: 40,
    body_size: Vec2::new(20.0, 60.0),
    shot_size: Vec2::new(20.0, 2.0),
    color: "#9b59b6",
    hits: 4,
};

const ASSAULTER: EnemyTemplate = EnemyTemplate {
    name: "assaulter",
    max_hp: 60,
    damage: 10,
    body_size: Vec2::new(20.0, 60.0),
    shot_size: Vec2::new(3.0, 2.0),
    color: "#16a085",
    hits: 10,
};

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Sniper,
    Assaulter,
}

impl EnemyKind {
    pub fn template(self) -> &'static EnemyTemplate {
        match self {
            EnemyKind::Sniper => &SNIPER,
            EnemyKind::Assaulter => &ASSAULTER,
        }
    }

    pub fn name(self) -> &'static str {
        self.template().name
    }

    /// Offset interval between shots (integer division, never zero)
    pub fn fire_interval(self) -> i32 {
        (PATROL_SPAN / self.template().hits).max(1)
    }
}

/// A horizontal platform segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x_start: f32,
    pub y: f32,
    pub x_end: f32,
}

impl Obstacle {
    pub const fn new(x_start: f32, y: f32, x_end: f32) -> Self {
        Self { x_start, y, x_end }
    }

    #[inline]
    pub fn midpoint_x(&self) -> f32 {
        (self.x_start + self.x_end) / 2.0
    }

    /// Whether `x` lies within the segment's horizontal span (inclusive)
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x >= self.x_start && x <= self.x_end
    }
}

/// A patrolling enemy anchored to one obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Index into `World::obstacles`
    pub floor: usize,
    /// Patrol displacement from the floor midpoint, within ±PATROL_LIMIT
    pub offset: i32,
    /// Perch height used as the muzzle reference
    pub perch_y: f32,
    pub direction: Direction,
    pub hp: i32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, floor: usize, offset: i32, perch_y: f32, direction: Direction) -> Self {
        Self {
            kind,
            floor,
            offset,
            perch_y,
            direction,
            hp: kind.template().max_hp,
        }
    }

    /// Current world x (floor midpoint + patrol offset)
    #[inline]
    pub fn world_x(&self, floor: &Obstacle) -> f32 {
        floor.midpoint_x() + self.offset as f32
    }

    /// Drawn body, standing on the floor
    pub fn body(&self, floor: &Obstacle) -> Rect {
        let size = self.kind.template().body_size;
        Rect {
            pos: Vec2::new(self.world_x(floor), floor.y - size.y),
            size,
        }
    }

    /// Region a player shot must land in to hit: one body size around the
    /// anchor point in every direction
    pub fn hit_region(&self, floor: &Obstacle) -> Rect {
        let anchor = Vec2::new(self.world_x(floor), floor.y);
        let size = self.kind.template().body_size;
        Rect::from_corners(anchor - size, anchor + size).truncated()
    }
}

/// Who fired a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOrigin {
    Player,
    Enemy(EnemyKind),
}

impl ShotOrigin {
    /// `"self"` for player shots, the enemy kind's name otherwise
    pub fn tag(self) -> &'static str {
        match self {
            ShotOrigin::Player => "self",
            ShotOrigin::Enemy(kind) => kind.name(),
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self == ShotOrigin::Player
    }
}

/// A projectile travelling horizontally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub pos: Vec2,
    pub size: Vec2,
    pub damage: i32,
    pub origin: ShotOrigin,
    pub direction: Direction,
}

impl Shot {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    /// Jump held since leaving the ground
    pub jumping: bool,
    /// Double-jump glide; cleared by landing on a platform or the floor
    pub flying: bool,
    /// Bumped a platform from below during the previous tick
    pub blocking: bool,
    /// Raw hit points; may drop below zero
    pub hp: i32,
    pub damage: i32,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            pos: Vec2::new(WORLD_WIDTH / 2.0 - 25.0, WORLD_HEIGHT - 50.0),
            size: Vec2::splat(CHARACTER_SIZE),
            vel: Vec2::ZERO,
            speed: CHARACTER_SPEED,
            jumping: false,
            flying: false,
            blocking: false,
            hp: CHARACTER_HP,
            damage: CHARACTER_DAMAGE,
        }
    }
}

impl Character {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Region an enemy shot must land in to hit: one character size around
    /// the position in every direction
    pub fn hit_region(&self) -> Rect {
        Rect::from_corners(self.pos - self.size, self.pos + self.size).truncated()
    }

    /// Hit points for display, clamped to 0..=100
    pub fn display_hp(&self) -> u32 {
        self.hp.clamp(0, CHARACTER_HP) as u32
    }
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Over(Outcome),
}

/// Things that happened during the last tick (for logging and effects)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { origin: ShotOrigin },
    CharacterHit { damage: i32, hp: i32 },
    EnemyHit { kind: EnemyKind, hp: i32 },
    EnemyKilled { kind: EnemyKind },
}

/// Complete world state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub character: Character,
    /// Active enemies, in spawn order
    pub enemies: Vec<Enemy>,
    /// Live shots, in creation order
    pub shots: Vec<Shot>,
    pub obstacles: Vec<Obstacle>,
    /// Ticks simulated so far
    pub frame_count: u64,
    pub phase: GamePhase,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// The fixed three-platform, three-enemy match
    pub fn new() -> Self {
        Self::with_layout(
            Character::default(),
            scenario::obstacles().to_vec(),
            scenario::enemies(),
        )
    }

    /// A world with a custom layout (tests, tooling)
    pub fn with_layout(character: Character, obstacles: Vec<Obstacle>, enemies: Vec<Enemy>) -> Self {
        assert!(
            enemies.iter().all(|e| e.floor < obstacles.len()),
            "enemy placed on a missing floor"
        );
        Self {
            character,
            enemies,
            shots: Vec::new(),
            obstacles,
            frame_count: 0,
            phase: GamePhase::Playing,
            events: Vec::new(),
        }
    }

    pub fn floor_of(&self, enemy: &Enemy) -> &Obstacle {
        &self.obstacles[enemy.floor]
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Over(outcome) => Some(outcome),
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }
}
