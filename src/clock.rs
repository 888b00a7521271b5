//! Host frame to simulation tick conversion

use crate::consts::SIM_DT;
use crate::settings::TimestepMode;

/// Longest frame delta honoured; longer gaps (tab switches, breakpoints) are cut
const MAX_FRAME_DT: f32 = 0.1;

/// Decides how many ticks to run for each host frame
#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: TimestepMode,
    max_substeps: u32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(mode: TimestepMode, max_substeps: u32) -> Self {
        Self {
            mode,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Number of ticks to run for a frame that took `dt` seconds
    pub fn ticks_for(&mut self, dt: f32) -> u32 {
        match self.mode {
            TimestepMode::FrameLocked => 1,
            TimestepMode::Fixed => {
                self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

                let mut substeps = 0;
                while self.accumulator >= SIM_DT && substeps < self.max_substeps {
                    self.accumulator -= SIM_DT;
                    substeps += 1;
                }
                substeps
            }
        }
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl From<&crate::Settings> for FrameClock {
    fn from(settings: &crate::Settings) -> Self {
        Self::new(settings.timestep, settings.max_substeps)
    }
}
