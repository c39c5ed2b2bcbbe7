//! Driver settings
//!
//! Loaded from a JSON file. Missing fields take their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_HZ, MAX_SUBSTEPS};

/// Why settings could not be loaded
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read settings: {e}"),
            Self::Parse(e) => write!(f, "invalid settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation steps per second
    pub frame_hz: u32,
    /// Cap on steps per clock advance
    pub max_substeps: u32,
    /// Fixed RNG seed; `None` seeds from the wall clock
    pub seed: Option<u64>,

    // === View ===
    /// Start with the scene mirrored
    pub reflect: bool,
    /// Start with the scene sheared
    pub shear: bool,

    // === Headless demo ===
    /// Simulated seconds to run
    pub demo_seconds: u32,
    /// Scripted pilot fires every this many frames
    pub fire_every_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_hz: FRAME_HZ,
            max_substeps: MAX_SUBSTEPS,
            seed: None,

            reflect: false,
            shear: false,

            demo_seconds: 65,
            fire_every_frames: 20,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults (with a warning) on error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Frames the headless demo runs for
    pub fn demo_frames(&self) -> u32 {
        self.demo_seconds.saturating_mul(self.frame_hz)
    }

    /// Replace values that would stall the clocks
    fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.frame_hz == 0 {
            log::warn!("frame_hz must be positive, using {}", defaults.frame_hz);
            self.frame_hz = defaults.frame_hz;
        }
        if self.max_substeps == 0 {
            log::warn!("max_substeps must be positive, using {}", defaults.max_substeps);
            self.max_substeps = defaults.max_substeps;
        }
        if self.fire_every_frames == 0 {
            log::warn!("fire_every_frames must be positive, using {}", defaults.fire_every_frames);
            self.fire_every_frames = defaults.fire_every_frames;
        }
        self
    }
}
