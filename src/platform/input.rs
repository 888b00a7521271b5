//! Keyboard mapping and held-key state
//!
//! Key events may arrive at any time between ticks; the latest press or
//! release of a key wins, and the simulation only ever sees the state sampled
//! by [`KeyState::snapshot`].

use crate::sim::InputSnapshot;

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    FireLeft,
    FireRight,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::FireLeft,
        Action::FireRight,
    ];

    /// Map a DOM `KeyboardEvent.code` to an action
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyA" | "ArrowLeft" => Some(Action::MoveLeft),
            "KeyD" | "ArrowRight" => Some(Action::MoveRight),
            "KeyW" | "ArrowUp" | "Space" => Some(Action::Jump),
            "KeyK" => Some(Action::FireLeft),
            "KeyL" => Some(Action::FireRight),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which actions are currently held
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: [bool; 5],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        self.held[action.index()] = pressed;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    /// Record a key press. Returns whether the key is mapped (so the host can
    /// suppress its default behaviour).
    pub fn key_down(&mut self, code: &str) -> bool {
        self.apply(code, true)
    }

    /// Record a key release. Returns whether the key is mapped.
    pub fn key_up(&mut self, code: &str) -> bool {
        self.apply(code, false)
    }

    fn apply(&mut self, code: &str, pressed: bool) -> bool {
        match Action::from_code(code) {
            Some(action) => {
                self.set(action, pressed);
                true
            }
            None => false,
        }
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.held = [false; 5];
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            move_left: self.is_held(Action::MoveLeft),
            move_right: self.is_held(Action::MoveRight),
            jump: self.is_held(Action::Jump),
            fire_left: self.is_held(Action::FireLeft),
            fire_right: self.is_held(Action::FireRight),
        }
    }
}
