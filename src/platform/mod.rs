//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (key codes to logical actions)

pub mod input;

pub use input::{Action, KeyState};
