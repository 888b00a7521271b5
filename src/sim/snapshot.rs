//! Read-only view of the world handed to renderers and stat widgets

use serde::Serialize;

use super::geom::Rect;
use super::state::{Obstacle, Outcome, World};
use crate::consts::*;

/// A filled rectangle with its fill color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub rect: Rect,
    pub color: &'static str,
}

/// Character as displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterView {
    pub sprite: Sprite,
    /// Hit points clamped to 0..=100 (also the hp bar width in percent)
    pub hp: u32,
}

/// Shot as displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotView {
    pub sprite: Sprite,
    /// `"self"` or the firing enemy kind's name
    pub tag: &'static str,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub character: CharacterView,
    pub enemies: Vec<Sprite>,
    pub shots: Vec<ShotView>,
    pub obstacles: Vec<Obstacle>,
    pub frame_count: u64,
    pub outcome: Option<Outcome>,
}

impl World {
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            character: CharacterView {
                sprite: Sprite {
                    rect: self.character.rect(),
                    color: CHARACTER_COLOR,
                },
                hp: self.character.display_hp(),
            },
            enemies: self
                .enemies
                .iter()
                .map(|enemy| Sprite {
                    rect: enemy.body(self.floor_of(enemy)),
                    color: enemy.kind.template().color,
                })
                .collect(),
            shots: self
                .shots
                .iter()
                .map(|shot| ShotView {
                    sprite: Sprite {
                        rect: shot.rect(),
                        color: SHOT_COLOR,
                    },
                    tag: shot.origin.tag(),
                })
                .collect(),
            obstacles: self.obstacles.clone(),
            frame_count: self.frame_count,
            outcome: self.outcome(),
        }
    }
}
