//! Demo settings
//!
//! Initial control values and headless runner pacing, stored as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controls::ControlPanel;
use crate::error::SettingsError;
use crate::sim::ControlParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Initial control values (clamped to slider ranges) ===
    /// Block mass (kg)
    pub mass: f32,
    /// Ramp angle (degrees)
    pub angle_degrees: f32,
    /// Coulomb friction coefficient
    pub friction_coefficient: f32,
    /// Start with slow motion enabled
    pub slow_motion: bool,

    // === Headless runner ===
    /// Begin running immediately instead of waiting for SPACE
    pub autostart: bool,
    /// Simulated display refresh rate
    pub frame_rate_hz: u32,
    /// Give up after this much simulated time
    pub max_sim_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        let params = ControlParams::default();
        Self {
            mass: params.mass,
            angle_degrees: params.angle_degrees,
            friction_coefficient: params.friction_coefficient,
            slow_motion: false,

            autostart: true,
            frame_rate_hz: 60,
            max_sim_seconds: 30.0,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const ENV_VAR: &'static str = "RAMP_SLIDE_SETTINGS";

    /// Control panel preloaded with these values
    pub fn control_panel(&self) -> ControlPanel {
        let mut panel = ControlPanel::from_params(ControlParams::new(
            self.mass,
            self.angle_degrees,
            self.friction_coefficient,
        ));
        panel.set_slow_motion(self.slow_motion);
        panel
    }

    /// Wall-clock gap between simulated frames (ms)
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.frame_rate_hz.max(1))
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from the file named by `RAMP_SLIDE_SETTINGS`, falling back to
    /// defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(err) => {
                log::warn!("Could not load settings from {path}: {err}; using defaults");
                Self::default()
            }
        }
    }
}
