//! Runtime settings and preferences
//!
//! Game rules are fixed constants (see [`crate::consts`]); settings only
//! control how the host drives and presents the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkirmishError};

/// How host frames are turned into simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimestepMode {
    /// One tick per display frame (simulation speed follows frame rate)
    #[default]
    FrameLocked,
    /// Fixed 60 Hz ticks from an accumulator, independent of frame rate
    Fixed,
}

impl TimestepMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestepMode::FrameLocked => "FrameLocked",
            TimestepMode::Fixed => "Fixed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "framelocked" | "frame" | "locked" => Some(TimestepMode::FrameLocked),
            "fixed" => Some(TimestepMode::Fixed),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timestep: TimestepMode,
    /// Upper bound on ticks run for a single host frame in `Fixed` mode
    pub max_substeps: u32,

    // === HUD ===
    /// Update the hp bar and frame counter
    pub show_stats: bool,

    // === Demo ===
    /// Seed for the autopilot's input jitter
    pub autopilot_seed: u64,
    /// Headless demo gives up after this many ticks
    pub demo_tick_limit: u64,
    /// Log a progress line every N frames in the headless demo (0 = never)
    pub log_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timestep: TimestepMode::FrameLocked,
            max_substeps: crate::consts::MAX_SUBSTEPS,
            show_stats: true,
            autopilot_seed: 0x5eed,
            demo_tick_limit: 20_000,
            log_every: 600,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Replace the timestep mode from a name such as `fixed` or `frame`
    pub fn override_timestep(&mut self, name: &str) -> Result<()> {
        self.timestep = TimestepMode::from_str(name).ok_or_else(|| SkirmishError::InvalidSetting {
            field: "timestep",
            reason: format!("unknown mode {name:?}"),
        })?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_substeps == 0 {
            return Err(SkirmishError::InvalidSetting {
                field: "max_substeps",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.demo_tick_limit == 0 {
            return Err(SkirmishError::InvalidSetting {
                field: "demo_tick_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "timestep": "Fixed" }"#).unwrap();
        assert_eq!(settings.timestep, TimestepMode::Fixed);
        assert_eq!(settings.max_substeps, Settings::default().max_substeps);
        assert!(settings.show_stats);
    }

    #[test]
    fn test_invalid_substeps_rejected() {
        let err = Settings::from_json(r#"{ "max_substeps": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SkirmishError::InvalidSetting {
                field: "max_substeps",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SkirmishError::SettingsParse(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            timestep: TimestepMode::Fixed,
            autopilot_seed: 7,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_timestep_from_str() {
        assert_eq!(TimestepMode::from_str("FIXED"), Some(TimestepMode::Fixed));
        assert_eq!(TimestepMode::from_str("frame"), Some(TimestepMode::FrameLocked));
        assert_eq!(TimestepMode::from_str("turbo"), None);
        assert_eq!(TimestepMode::Fixed.as_str(), "Fixed");
    }

    #[test]
    fn test_override_timestep() {
        let mut settings = Settings::default();
        settings.override_timestep("fixed").unwrap();
        assert_eq!(settings.timestep, TimestepMode::Fixed);

        let err = settings.override_timestep("turbo").unwrap_err();
        assert!(matches!(err, SkirmishError::InvalidSetting { field: "timestep", .. }));
        assert_eq!(settings.timestep, TimestepMode::Fixed);
    }
}
