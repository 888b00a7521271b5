//! Platform Skirmish - a side-view platform shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (AI, controller, physics, combat, game state)
//! - `clock`: Host frame delta to simulation tick conversion
//! - `autopilot`: Seeded AI that produces input snapshots (demo/idle mode)
//! - `platform`: Keyboard mapping and key state
//! - `render`: Render/stats sinks fed from world snapshots
//! - `settings`: Runtime preferences

pub mod autopilot;
pub mod clock;
pub mod error;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use clock::FrameClock;
pub use error::SkirmishError;
pub use settings::{Settings, TimestepMode};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the display rate the rules were tuned at)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1200.0;
    pub const WORLD_HEIGHT: f32 = 800.0;

    /// Character defaults
    pub const CHARACTER_SIZE: f32 = 30.0;
    pub const CHARACTER_SPEED: f32 = 8.0;
    pub const CHARACTER_HP: i32 = 100;
    pub const CHARACTER_DAMAGE: i32 = 10;
    pub const CHARACTER_COLOR: &str = "#e74c3c";

    /// Velocity multiplier applied each tick while flying
    pub const FRICTION: f32 = 0.8;
    /// Downward acceleration per tick while jump is released
    pub const GRAVITY: f32 = 0.8;
    /// Downward velocity after bumping a platform from below
    pub const BUMP_VELOCITY: f32 = 8.9;

    /// Shots
    pub const SHOT_SPEED: f32 = 10.0;
    pub const PLAYER_SHOT_WIDTH: f32 = 6.0;
    pub const PLAYER_SHOT_HEIGHT: f32 = 3.0;
    /// Horizontal muzzle offset from the firer's x
    pub const MUZZLE_OFFSET: f32 = 10.0;
    /// A new player shot needs every live shot to be farther than this
    pub const FIRE_SPACING: f32 = 100.0;
    pub const SHOT_COLOR: &str = "#d35400";

    /// Enemy patrol
    pub const PATROL_LIMIT: i32 = 150;
    pub const PATROL_STEP: i32 = 5;
    /// Patrol distance the fire interval is derived from (`PATROL_SPAN / hits`)
    pub const PATROL_SPAN: i32 = 300;
    /// Vertical offset of enemy shots below the perch height
    pub const ENEMY_MUZZLE_DROP: f32 = 15.0;

    pub const OBSTACLE_COLOR: &str = "#000000";
}
