//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, unit timestep
//! - No randomness
//! - Stable iteration order (spawn/creation order)
//! - No rendering or platform dependencies

pub mod ai;
pub mod combat;
pub mod controller;
pub mod geom;
pub mod physics;
pub mod scenario;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use controller::InputSnapshot;
pub use geom::Rect;
pub use snapshot::{CharacterView, ShotView, Sprite, WorldSnapshot};
pub use state::{
    Character, Direction, Enemy, EnemyKind, EnemyTemplate, GameEvent, GamePhase, Obstacle,
    Outcome, Shot, ShotOrigin, World,
};
pub use tick::{TickOutcome, tick};
