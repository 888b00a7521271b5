//! Error types for the crate's outer edges.
//!
//! The simulation itself never fails; these cover settings loading and
//! frontend setup.

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum SkirmishError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("Platform error: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
