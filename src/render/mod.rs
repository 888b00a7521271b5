//! Presentation sinks
//!
//! The simulation only produces [`WorldSnapshot`]s and an [`Outcome`]; sinks
//! turn those into pixels, widgets or log lines.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod log_sink;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSink;
pub use log_sink::LogSink;

use crate::sim::{Outcome, TickOutcome, World, WorldSnapshot};

/// Draws the playfield
pub trait RenderSink {
    /// Obstacles as lines, everything else as filled rectangles
    fn draw(&mut self, snapshot: &WorldSnapshot);
    /// Full-screen end overlay
    fn draw_outcome(&mut self, outcome: Outcome);
}

/// Shows the hp bar and frame counter
pub trait StatsSink {
    /// `hp_percent` is already clamped to 0..=100
    fn update_stats(&mut self, hp_percent: u32, frame_count: u64);
}

/// Feed one tick's result to a sink
pub fn present<S: RenderSink + StatsSink>(sink: &mut S, world: &World, outcome: &TickOutcome, show_stats: bool) {
    match outcome {
        TickOutcome::Running(snapshot) => {
            sink.draw(snapshot);
            if show_stats {
                sink.update_stats(snapshot.character.hp, snapshot.frame_count);
            }
        }
        TickOutcome::Finished(result) => {
            if show_stats {
                sink.update_stats(world.character.display_hp(), world.frame_count);
            }
            sink.draw_outcome(*result);
        }
    }
}

/// Overlay text for an outcome
pub fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You win!",
        Outcome::Loss => "You lose.",
    }
}
