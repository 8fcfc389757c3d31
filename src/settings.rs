//! User settings stored as settings.json in the app data directory

use crate::constants::MIN_WINDOW_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.json";

/// Largest absolute window coordinate accepted from the settings file
const MAX_WINDOW_COORD: f32 = 100_000.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        let mut settings = match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<Self>(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        };
        settings.clamp_size();
        settings.drop_bogus_position();
        settings
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                } else {
                    debug!(path = %path.display(), "Settings saved");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Remembered outer position of the window, if both coordinates are known
    pub fn window_pos(&self) -> Option<[f32; 2]> {
        match (self.window_x, self.window_y) {
            (Some(x), Some(y)) => Some([x, y]),
            _ => None,
        }
    }

    /// Remembered inner size of the window, if both dimensions are known
    pub fn window_size(&self) -> Option<[f32; 2]> {
        match (self.window_w, self.window_h) {
            (Some(w), Some(h)) => Some([w, h]),
            _ => None,
        }
    }

    // A hand-edited or corrupted file must not shrink the window below the minimum
    fn clamp_size(&mut self) {
        if let Some(w) = self.window_w.as_mut() {
            if !w.is_finite() || *w < MIN_WINDOW_SIZE[0] {
                *w = MIN_WINDOW_SIZE[0];
            }
        }
        if let Some(h) = self.window_h.as_mut() {
            if !h.is_finite() || *h < MIN_WINDOW_SIZE[1] {
                *h = MIN_WINDOW_SIZE[1];
            }
        }
    }

    // Positions far outside any desktop would open the window where nobody can reach it
    fn drop_bogus_position(&mut self) {
        for coord in [&mut self.window_x, &mut self.window_y] {
            if coord.is_some_and(|c| !c.is_finite() || c.abs() > MAX_WINDOW_COORD) {
                *coord = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.window_pos(), None);
        assert_eq!(settings.window_size(), None);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn saved_geometry_is_restored() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_x: Some(100.0),
            window_y: Some(50.0),
            window_w: Some(1024.0),
            window_h: Some(768.0),
        };
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded, settings);
        assert_eq!(loaded.window_pos(), Some([100.0, 50.0]));
        assert_eq!(loaded.window_size(), Some([1024.0, 768.0]));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), r#"{"window_x": 10.0}"#).unwrap();

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_x, Some(10.0));
        assert_eq!(loaded.window_pos(), None);
        assert_eq!(loaded.window_size(), None);
    }

    #[test]
    fn undersized_window_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"window_w": 12.0, "window_h": -3.0}"#,
        )
        .unwrap();

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_size(), Some(MIN_WINDOW_SIZE));
    }

    #[test]
    fn far_away_position_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"window_x": 1e30, "window_y": 40.0, "window_w": 800.0, "window_h": 600.0}"#,
        )
        .unwrap();

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_x, None);
        assert_eq!(loaded.window_y, Some(40.0));
        assert_eq!(loaded.window_pos(), None);
        assert_eq!(loaded.window_size(), Some([800.0, 600.0]));
    }

    #[test]
    fn negative_position_on_secondary_monitor_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"window_x": -1920.0, "window_y": 0.0}"#,
        )
        .unwrap();

        assert_eq!(Settings::load(dir.path()).window_pos(), Some([-1920.0, 0.0]));
    }
}
