//! Headless sink: progress and results go to the log

use super::{RenderSink, StatsSink, outcome_text};
use crate::sim::{Outcome, WorldSnapshot};

/// Logs a one-line summary every `every` frames
pub struct LogSink {
    every: u64,
    pub last_hp: u32,
    pub last_frame: u64,
    pub outcome: Option<Outcome>,
}

impl LogSink {
    pub fn new(every: u64) -> Self {
        Self {
            every,
            last_hp: 0,
            last_frame: 0,
            outcome: None,
        }
    }
}

impl RenderSink for LogSink {
    fn draw(&mut self, snapshot: &WorldSnapshot) {
        if self.every == 0 || snapshot.frame_count % self.every != 0 {
            return;
        }
        let pos = snapshot.character.sprite.rect.pos;
        log::info!(
            "frame {:>6} | pos ({:>4.0}, {:>4.0}) | hp {:>3} | enemies {} | shots {}",
            snapshot.frame_count,
            pos.x,
            pos.y,
            snapshot.character.hp,
            snapshot.enemies.len(),
            snapshot.shots.len()
        );
    }

    fn draw_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        log::info!("{}", outcome_text(outcome));
    }
}

impl StatsSink for LogSink {
    fn update_stats(&mut self, hp_percent: u32, frame_count: u64) {
        self.last_hp = hp_percent;
        self.last_frame = frame_count;
    }
}
