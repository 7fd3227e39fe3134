//! Game settings and preferences
//!
//! The core doesn't care where these live; the embedding shell round-trips
//! them as JSON to whatever storage it has (LocalStorage, a dotfile, nothing).

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Sound effects on/off
    pub sound: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Show simulation tick rate in the HUD
    pub show_fps: bool,
    /// Tone down the hazard warning flash
    pub reduced_flash: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            show_fps: false,
            reduced_flash: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to JSON for the shell to persist
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Clamp volumes into [0, 1] after UI edits
    pub fn clamp_volumes(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let mut settings = Settings::default();
        settings.sound = false;
        settings.master_volume = 0.25;
        let parsed = Settings::from_json(&settings.to_json());
        assert!(!parsed.sound);
        assert_eq!(parsed.master_volume, 0.25);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let parsed = Settings::from_json("not json at all");
        assert!(parsed.sound);
        assert_eq!(parsed.master_volume, 0.8);
    }

    #[test]
    fn clamp_volumes_bounds_edits() {
        let mut settings = Settings {
            master_volume: 3.0,
            sfx_volume: -1.0,
            ..Settings::default()
        };
        settings.clamp_volumes();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }
}
